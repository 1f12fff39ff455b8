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

//! # Routing Processes
//!
//! BGP and OSPF processes, as well as static and generated routes.

use crate::model::types::Ip;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// BGP process of a device
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BgpProcess {
    /// All configured neighbors
    #[serde(default)]
    pub neighbors: Vec<BgpNeighbor>,
    /// Aggregates generated by the BGP process
    #[serde(default)]
    pub generated_routes: Vec<GeneratedRoute>,
}

/// BGP session to a single neighbor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BgpNeighbor {
    /// Address of the neighbor
    pub address: Ip,
    /// AS number of this device on the session
    pub local_as: u32,
    /// AS number of the neighbor
    pub remote_as: u32,
    /// Metric (MED) sent to the neighbor by default
    #[serde(default)]
    pub default_metric: u32,
    /// Whether communities are sent to the neighbor
    #[serde(default)]
    pub send_community: bool,
    /// If set, the neighbor is a route-reflector client within the given cluster
    #[serde(default)]
    pub cluster_id: Option<u32>,
    /// Policy maps applied on routes received from the neighbor
    #[serde(default)]
    pub inbound_policy_maps: Vec<String>,
    /// Policy maps applied on routes sent to the neighbor
    #[serde(default)]
    pub outbound_policy_maps: Vec<String>,
    /// Policy maps deciding which locally originated routes are advertised
    #[serde(default)]
    pub origination_policies: Vec<String>,
    /// Routes generated only towards this neighbor (e.g., default originate)
    #[serde(default)]
    pub generated_routes: Vec<GeneratedRoute>,
}

/// OSPF process of a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfProcess {
    /// Areas, indexed by the area number
    #[serde(default)]
    pub areas: BTreeMap<u64, OspfArea>,
    /// Router id, if configured explicitly
    #[serde(default)]
    pub router_id: Option<Ip>,
    /// Reference bandwidth, used to compute the default interface cost
    #[serde(default = "default_reference_bandwidth")]
    pub reference_bandwidth: f64,
    /// Routes generated by the OSPF process
    #[serde(default)]
    pub generated_routes: Vec<GeneratedRoute>,
    /// Redistribution policies, together with the external metric type they produce
    #[serde(default)]
    pub outbound_policy_maps: Vec<OspfOutboundPolicy>,
}

/// Default OSPF reference bandwidth (100 Mbit/s)
pub const DEFAULT_OSPF_REFERENCE_BANDWIDTH: f64 = 1e8;

fn default_reference_bandwidth() -> f64 {
    DEFAULT_OSPF_REFERENCE_BANDWIDTH
}

impl Default for OspfProcess {
    fn default() -> Self {
        Self {
            areas: BTreeMap::new(),
            router_id: None,
            reference_bandwidth: DEFAULT_OSPF_REFERENCE_BANDWIDTH,
            generated_routes: Vec::new(),
            outbound_policy_maps: Vec::new(),
        }
    }
}

impl OspfProcess {
    /// Returns the OSPF cost of an interface with the given bandwidth, if the cost is not
    /// configured explicitly: `max(reference_bandwidth / bandwidth, 1)`, rounded down. The cost
    /// saturates at `i32::MAX`.
    pub fn default_cost(&self, bandwidth: f64) -> u32 {
        let cost = (self.reference_bandwidth / bandwidth) as u32;
        cost.min(i32::MAX as u32).max(1)
    }
}

/// OSPF area
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OspfArea {
    /// Names of the interfaces in the area
    pub interfaces: Vec<String>,
}

/// Policy map used to redistribute routes into OSPF
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OspfOutboundPolicy {
    /// Name of the policy map
    pub policy_map: String,
    /// External metric type of the redistributed routes
    pub metric_type: OspfMetricType,
}

/// Metric type of external OSPF routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OspfMetricType {
    /// Type 1: external metric plus internal cost
    E1,
    /// Type 2: external metric only
    E2,
    /// Any metric type the model does not know about
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for OspfMetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::E1 => write!(f, "E1"),
            Self::E2 => write!(f, "E2"),
            Self::Unrecognized => write!(f, "unrecognized"),
        }
    }
}

/// Route generated (aggregated) by the device if any of its generation policies matches a more
/// specific route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedRoute {
    /// Network address
    pub prefix: Ip,
    /// Length of the network
    pub prefix_length: u8,
    /// Administrative distance
    #[serde(default)]
    pub administrative_cost: u32,
    /// Names of the policy maps that decide whether the route is generated
    #[serde(default)]
    pub generation_policies: Vec<String>,
}

/// Statically configured route
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaticRoute {
    /// Network address
    pub prefix: Ip,
    /// Length of the network
    pub prefix_length: u8,
    /// Next-hop address
    #[serde(default)]
    pub next_hop_ip: Option<Ip>,
    /// Outgoing interface
    #[serde(default)]
    pub next_hop_interface: Option<String>,
    /// Administrative distance
    #[serde(default)]
    pub distance: u32,
    /// Route tag
    #[serde(default)]
    pub tag: u32,
}
