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

//! Fact bins and fact types

use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt;

/// Name of a structure, unique across the entire network. It is rendered as `hostname:local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QualifiedName<'a> {
    /// Hostname of the device owning the structure
    pub hostname: &'a str,
    /// Name of the structure within the device
    pub local: &'a str,
}

impl<'a> QualifiedName<'a> {
    /// Delimiter between the hostname and the local name
    pub const DELIMITER: char = ':';

    /// Create a new qualified name
    pub fn new(hostname: &'a str, local: &'a str) -> Self {
        Self { hostname, local }
    }
}

impl<'a> fmt::Display for QualifiedName<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.hostname, Self::DELIMITER, self.local)
    }
}

/// Floating-point fact field. Values with magnitude in `[1e-3, 1e7)` are rendered as plain
/// decimals with at least one fractional digit (`100.0`), all others in computerized scientific
/// notation (`1.0E9`). Both use the shortest digits that identify the value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FactFloat(pub f64);

impl fmt::Display for FactFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_nan() {
            f.write_str("NaN")
        } else if x.is_infinite() {
            f.write_str(if x > 0.0 { "Infinity" } else { "-Infinity" })
        } else if x == 0.0 {
            f.write_str(if x.is_sign_negative() { "-0.0" } else { "0.0" })
        } else if (1e-3..1e7).contains(&x.abs()) {
            let s = x.to_string();
            if s.contains('.') {
                f.write_str(&s)
            } else {
                write!(f, "{}.0", s)
            }
        } else {
            let s = format!("{:e}", x);
            let (mantissa, exponent) = s.split_once('e').unwrap_or((&s, "0"));
            if mantissa.contains('.') {
                write!(f, "{}E{}", mantissa, exponent)
            } else {
                write!(f, "{}.0E{}", mantissa, exponent)
            }
        }
    }
}

macro_rules! fact_types {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)*) => {
        /// Every fact type known to the logic engine.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum FactType {
            $($(#[$doc])* $variant,)*
        }

        impl FactType {
            /// All fact types
            pub const ALL: &'static [FactType] = &[$(FactType::$variant,)*];

            /// Returns the name of the fact type, as expected by the logic engine.
            pub fn name(&self) -> &'static str {
                match self {
                    $(FactType::$variant => $name,)*
                }
            }

            /// Returns the fact type with the given name.
            pub fn from_name(name: &str) -> Option<FactType> {
                match name {
                    $($name => Some(FactType::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

fact_types! {
    /// `host|vendor`
    SetNodeVendor => "SetNodeVendor",
    /// `host|iface`
    SetFlowSinkInterface => "SetFlowSinkInterface",
    /// `host|iface`
    SetFakeInterface => "SetFakeInterface",
    /// `host|iface|cost`
    SetOspfInterfaceCost => "SetOspfInterfaceCost",
    /// `host|iface|acl`
    SetInterfaceFilterIn => "SetInterfaceFilterIn",
    /// `host|iface|acl`
    SetInterfaceFilterOut => "SetInterfaceFilterOut",
    /// `host|iface|policy`
    SetInterfaceRoutingPolicy => "SetInterfaceRoutingPolicy",
    /// `acl|line|protocol|srcStart|srcEnd|dstStart|dstEnd`
    SetIpAccessListLine => "SetIpAccessListLine",
    /// `acl|line`
    SetIpAccessListDenyLine => "SetIpAccessListDenyLine",
    /// `acl|line|start|end`
    SetIpAccessListLine_srcPortRange => "SetIpAccessListLine_srcPortRange",
    /// `acl|line|start|end`
    SetIpAccessListLine_dstPortRange => "SetIpAccessListLine_dstPortRange",
    /// `host|iface`
    SetActiveInt => "SetActiveInt",
    /// `start|start|end|prefixLength`
    SetNetwork => "SetNetwork",
    /// `host|iface|ip|prefixLength`
    SetIpInt => "SetIpInt",
    /// `host|iface|vlan`
    SetSwitchportAccess => "SetSwitchportAccess",
    /// `host|iface|encapsulation`
    SetSwitchportTrunkEncapsulation => "SetSwitchportTrunkEncapsulation",
    /// `host|iface|vlan`
    SetSwitchportTrunkNative => "SetSwitchportTrunkNative",
    /// `host|iface|vlanStart|vlanEnd`
    SetSwitchportTrunkAllows => "SetSwitchportTrunkAllows",
    /// `host|iface|area`
    SetOspfInterface => "SetOspfInterface",
    /// `host|policy`
    SetOspfOutboundPolicyMap => "SetOspfOutboundPolicyMap",
    /// `policy|protocol`
    SetPolicyMapOspfExternalRouteType => "SetPolicyMapOspfExternalRouteType",
    /// `host|routerId`
    SetOspfRouterId => "SetOspfRouterId",
    /// `host|start|end|prefixLength`
    SetOspfGeneratedRoute_flat => "SetOspfGeneratedRoute_flat",
    /// `host|start|end|prefixLength|policy`
    SetOspfGeneratedRoutePolicy_flat => "SetOspfGeneratedRoutePolicy_flat",
    /// `host|start|end|prefixLength|nextHopIp|distance|tag`
    SetStaticRoute_flat => "SetStaticRoute_flat",
    /// `host|start|end|prefixLength|nextHopIp|nextHopIface|distance|tag`
    SetStaticIntRoute_flat => "SetStaticIntRoute_flat",
    /// `host|neighborIp|policy`
    SetBgpImportPolicy => "SetBgpImportPolicy",
    /// `host|neighborIp|policy`
    SetBgpExportPolicy => "SetBgpExportPolicy",
    /// `host|neighborIp|clusterId`
    SetRouteReflectorClient => "SetRouteReflectorClient",
    /// `host|iface|bandwidth`, with the bandwidth formatted as a [`FactFloat`]
    SetLinkLoadLimitIn => "SetLinkLoadLimitIn",
    /// `host|iface|bandwidth`, with the bandwidth formatted as a [`FactFloat`]
    SetLinkLoadLimitOut => "SetLinkLoadLimitOut",
    /// `policy|clause`
    SetPolicyMapClausePermit => "SetPolicyMapClausePermit",
    /// `policy|clause`
    SetPolicyMapClauseDeny => "SetPolicyMapClauseDeny",
    /// `policy|clause|communityList`
    SetPolicyMapClauseMatchCommunityList => "SetPolicyMapClauseMatchCommunityList",
    /// `policy|clause|acl`
    SetPolicyMapClauseMatchAcl => "SetPolicyMapClauseMatchAcl",
    /// `policy|clause|neighborIp`
    SetPolicyMapClauseMatchNeighbor => "SetPolicyMapClauseMatchNeighbor",
    /// `policy|clause|protocol`
    SetPolicyMapClauseMatchProtocol => "SetPolicyMapClauseMatchProtocol",
    /// `policy|clause|routeFilter`
    SetPolicyMapClauseMatchRouteFilter => "SetPolicyMapClauseMatchRouteFilter",
    /// `policy|clause|tag`
    SetPolicyMapClauseMatchTag => "SetPolicyMapClauseMatchTag",
    /// `policy|clause|community`
    SetPolicyMapClauseAddCommunity => "SetPolicyMapClauseAddCommunity",
    /// `policy|clause|community`
    SetPolicyMapClauseSetCommunity => "SetPolicyMapClauseSetCommunity",
    /// `policy|clause|communityList`
    SetPolicyMapClauseDeleteCommunity => "SetPolicyMapClauseDeleteCommunity",
    /// `policy|clause|localPref`
    SetPolicyMapClauseSetLocalPreference => "SetPolicyMapClauseSetLocalPreference",
    /// `policy|clause|metric`
    SetPolicyMapClauseSetMetric => "SetPolicyMapClauseSetMetric",
    /// `policy|clause|nextHopIp`
    SetPolicyMapClauseSetNextHopIp => "SetPolicyMapClauseSetNextHopIp",
    /// `policy|clause|originType`
    SetPolicyMapClauseSetOriginType => "SetPolicyMapClauseSetOriginType",
    /// `host|neighborIp`
    SetBgpNeighborIp => "SetBgpNeighborIp",
    /// `host|neighborIp|as`
    SetLocalAs => "SetLocalAs",
    /// `host|neighborIp|as`
    SetRemoteAs => "SetRemoteAs",
    /// `host|neighborIp|metric`
    SetBgpNeighborDefaultMetric => "SetBgpNeighborDefaultMetric",
    /// `host|neighborIp`
    SetBgpNeighborSendCommunity => "SetBgpNeighborSendCommunity",
    /// `list|line|start|end|minLength|maxLength`
    SetRouteFilterLine => "SetRouteFilterLine",
    /// `list|line`
    SetRouteFilterPermitLine => "SetRouteFilterPermitLine",
    /// `host|neighborIp|policy`
    SetBgpOriginationPolicy => "SetBgpOriginationPolicy",
    /// `list|line|community`
    SetCommunityListLine => "SetCommunityListLine",
    /// `list|line`
    SetCommunityListLinePermit => "SetCommunityListLinePermit",
    /// `host|start|end|prefixLength`
    SetBgpGeneratedRoute_flat => "SetBgpGeneratedRoute_flat",
    /// `host|start|end|prefixLength|policy`
    SetBgpGeneratedRoutePolicy_flat => "SetBgpGeneratedRoutePolicy_flat",
    /// `host|neighborIp|start|end|prefixLength`
    SetBgpNeighborGeneratedRoute_flat => "SetBgpNeighborGeneratedRoute_flat",
    /// `host|neighborIp|start|end|prefixLength|policy`
    SetBgpNeighborGeneratedRoutePolicy_flat => "SetBgpNeighborGeneratedRoutePolicy_flat",
    /// `host|start|end|prefixLength|administrativeCost`
    SetGeneratedRoute_flat => "SetGeneratedRoute_flat",
    /// `host|start|end|prefixLength|policy`
    SetGeneratedRoutePolicy_flat => "SetGeneratedRoutePolicy_flat",
    /// `host|iface|vlan`
    SetVlanInterface => "SetVlanInterface",
    /// `nodeA|ifaceA|nodeB|ifaceB`
    SamePhysicalSegment => "SamePhysicalSegment",
}

impl fmt::Display for FactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// # Fact Bins
/// Mapping from every fact type to an append-only text buffer. Each buffer contains one fact per
/// line, terminated by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactBins {
    bins: BTreeMap<FactType, String>,
}

impl Default for FactBins {
    fn default() -> Self {
        Self::new()
    }
}

impl FactBins {
    /// Create a new set of fact bins, containing an empty buffer for every fact type.
    pub fn new() -> Self {
        Self { bins: FactType::ALL.iter().map(|t| (*t, String::new())).collect() }
    }

    /// Append a single fact. The fields are joined by `|`. Fields must not contain `|` or `\n`.
    pub fn push(&mut self, fact_type: FactType, fields: &[&dyn fmt::Display]) {
        let bin = self.bins.entry(fact_type).or_default();
        bin.push_str(&fields.iter().join("|"));
        bin.push('\n');
    }

    /// Returns the buffer of the given fact type.
    pub fn get(&self, fact_type: FactType) -> &str {
        self.bins.get(&fact_type).map(|s| s.as_str()).unwrap_or("")
    }

    /// Returns the buffer of the fact type with the given name.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        FactType::from_name(name).map(|t| self.get(t))
    }

    /// Returns the facts of the given type, one string per fact (without the newline).
    pub fn lines(&self, fact_type: FactType) -> Vec<&str> {
        self.get(fact_type).lines().collect()
    }

    /// Returns the number of facts of the given type.
    pub fn len_lines(&self, fact_type: FactType) -> usize {
        self.get(fact_type).lines().count()
    }

    /// Returns `true` if no fact was written into any bin.
    pub fn is_empty(&self) -> bool {
        self.bins.values().all(|b| b.is_empty())
    }

    /// Iterate over all bins, ordered by the name of the fact type.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.bins
            .iter()
            .map(|(t, b)| (t.name(), b.as_str()))
            .sorted_by_key(|(name, _)| *name)
    }

    /// Append all facts of `other` to `self`.
    pub fn append(&mut self, other: &FactBins) {
        for (fact_type, bin) in other.bins.iter() {
            self.bins.entry(*fact_type).or_default().push_str(bin);
        }
    }
}
