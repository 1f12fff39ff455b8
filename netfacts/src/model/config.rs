// NetFacts: Relational Fact Extraction for Network Configurations
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Device Configuration
//! This module represents the configuration of a single device. Here is an overview:
//!
//! - [`Configuration`]: Configuration of one device. It owns every named structure of the device
//!   (interfaces, access lists, route filters, community lists and policy maps), as well as the
//!   routing processes.
//! - [`Interface`]: Single interface, with its address, switchport settings and filters.
//!
//! Named structures are stored in sorted maps, such that iterating over a configuration always
//! yields the same order.
//!
//! # Example Usage
//!
//! ```rust
//! use netfacts::model::config::{Configuration, Interface, InterfaceAddress};
//! use netfacts::model::Ip;
//!
//! let mut c = Configuration::new("r0", "cisco");
//! c.interfaces.insert(
//!     "GigabitEthernet0/0".to_string(),
//!     Interface {
//!         active: true,
//!         address: Some(InterfaceAddress::new("10.0.0.1".parse().unwrap(), 24)),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(c.interfaces.len(), 1);
//! ```

use crate::model::filter::{CommunityList, IpAccessList, RouteFilterList};
use crate::model::policy_map::PolicyMap;
use crate::model::routing::{BgpProcess, GeneratedRoute, OspfProcess, StaticRoute};
use crate::model::types::{Ip, SubRange};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// # Device Configuration
/// The hostname is unique across the network. It is used as the namespace of every named
/// structure of the device.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Hostname of the device
    pub hostname: String,
    /// Vendor of the device (e.g., `cisco` or `juniper`)
    pub vendor: String,
    /// Interfaces, indexed by their name
    #[serde(default)]
    pub interfaces: BTreeMap<String, Interface>,
    /// IP access lists, indexed by their name
    #[serde(default)]
    pub ip_access_lists: BTreeMap<String, IpAccessList>,
    /// Route filter lists, indexed by their name
    #[serde(default)]
    pub route_filter_lists: BTreeMap<String, RouteFilterList>,
    /// Community lists, indexed by their name
    #[serde(default)]
    pub community_lists: BTreeMap<String, CommunityList>,
    /// Policy maps, indexed by their name
    #[serde(default)]
    pub policy_maps: BTreeMap<String, PolicyMap>,
    /// BGP process, if BGP is running
    #[serde(default)]
    pub bgp_process: Option<BgpProcess>,
    /// OSPF process, if OSPF is running
    #[serde(default)]
    pub ospf_process: Option<OspfProcess>,
    /// Static routes
    #[serde(default)]
    pub static_routes: Vec<StaticRoute>,
    /// Device-level aggregates
    #[serde(default)]
    pub generated_routes: Vec<GeneratedRoute>,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new(hostname: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self { hostname: hostname.into(), vendor: vendor.into(), ..Default::default() }
    }

    /// Returns every community value that is added or set by any policy map of the device.
    pub fn communities(&self) -> BTreeSet<u32> {
        self.policy_maps.values().flat_map(|m| m.communities()).collect()
    }
}

/// Interface of a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    /// Whether the interface is enabled
    #[serde(default)]
    pub active: bool,
    /// Address of the interface
    #[serde(default)]
    pub address: Option<InterfaceAddress>,
    /// Bandwidth in bits per second
    #[serde(default = "default_bandwidth")]
    pub bandwidth: f64,
    /// Explicitly configured OSPF cost
    #[serde(default)]
    pub ospf_cost: Option<u32>,
    /// Layer-2 settings
    #[serde(default)]
    pub switchport: SwitchportMode,
    /// Access list applied on incoming packets
    #[serde(default)]
    pub incoming_filter: Option<String>,
    /// Access list applied on outgoing packets
    #[serde(default)]
    pub outgoing_filter: Option<String>,
    /// Policy-based routing policy
    #[serde(default)]
    pub routing_policy: Option<String>,
}

/// Default interface bandwidth (1 Gbit/s)
pub const DEFAULT_INTERFACE_BANDWIDTH: f64 = 1e9;

fn default_bandwidth() -> f64 {
    DEFAULT_INTERFACE_BANDWIDTH
}

impl Default for Interface {
    fn default() -> Self {
        Self {
            active: false,
            address: None,
            bandwidth: DEFAULT_INTERFACE_BANDWIDTH,
            ospf_cost: None,
            switchport: SwitchportMode::None,
            incoming_filter: None,
            outgoing_filter: None,
            routing_policy: None,
        }
    }
}

/// Address and subnet mask of an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddress {
    /// Address of the interface
    pub ip: Ip,
    /// Subnet mask
    pub mask: Ip,
}

impl InterfaceAddress {
    /// Create an address from the IP and the prefix length
    pub fn new(ip: Ip, prefix_length: u8) -> Self {
        Self { ip, mask: Ip::mask_of(prefix_length) }
    }

    /// Returns the prefix length of the subnet
    pub fn prefix_length(&self) -> u8 {
        self.mask.num_subnet_bits()
    }

    /// Returns the network address of the subnet
    pub fn network(&self) -> Ip {
        Ip(self.ip.0 & self.mask.0)
    }
}

/// Switchport mode of an interface, together with the settings of that mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SwitchportMode {
    /// Access port in a single VLAN
    Access {
        /// Access VLAN
        vlan: u32,
    },
    /// Trunk port
    Trunk {
        /// Trunk encapsulation
        encapsulation: SwitchportEncapsulation,
        /// Native (untagged) VLAN
        native_vlan: u32,
        /// Allowed VLANs
        #[serde(default)]
        allowed_vlans: Vec<SubRange>,
    },
    /// Dynamic auto negotiation
    DynamicAuto,
    /// Dynamic desirable negotiation
    DynamicDesirable,
    /// Not a switchport
    None,
    /// Any mode the model does not know about
    #[serde(other)]
    Unrecognized,
}

impl Default for SwitchportMode {
    fn default() -> Self {
        Self::None
    }
}

/// Trunk encapsulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchportEncapsulation {
    /// IEEE 802.1Q
    Dot1q,
    /// Cisco ISL
    Isl,
    /// Negotiated
    Negotiate,
}

impl fmt::Display for SwitchportEncapsulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dot1q => "dot1q",
            Self::Isl => "isl",
            Self::Negotiate => "negotiate",
        })
    }
}

/// Returns the VLAN number encoded in the interface name (e.g., `Vlan10` or `vlan.20`), or `None`
/// if the name does not describe a VLAN interface.
pub fn interface_vlan_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase().replace('.', "");
    let number = name.strip_prefix("vlan")?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    number.parse().ok()
}

/// Returns `true` if the interface is a null (discard) interface.
pub fn is_null_interface(name: &str) -> bool {
    name.to_lowercase().starts_with("null")
}
