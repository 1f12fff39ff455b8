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

//! # Configuration Fact Extractor
//!
//! Lowers the configuration of a single device into facts. Each construct family is handled by
//! its own `write_*` function, which only appends to the bins of that family. The functions are
//! always called in the same order.
//!
//! Constructs that cannot be represented in the fact schema yet (AS-path matching, AS-path
//! prepending, clearing all communities, access-list lines with non-trailing wildcard bits and
//! route-filter `through` lines) are skipped with a warning. The resulting facts are therefore an
//! under-approximation of the configuration. Values which are not part of the model (unknown
//! actions, switchport modes or OSPF metric types) abort the extraction of the device with an
//! [`ExtractionError`].

use crate::facts::{
    FactBins, FactFloat, FactType, QualifiedName, DEFAULT_VLAN_OSPF_COST, FAKE_INTERFACE_PREFIX,
    FLOW_SINK_INTERFACE_PREFIX, NULL_INTERFACE_NAME,
};
use crate::model::config::{interface_vlan_number, is_null_interface};
use crate::model::filter::RouteFilterLine;
use crate::model::policy_map::{
    PolicyMapAction, PolicyMapClause, PolicyMapMatchLine, PolicyMapSetLine, RoutingProtocol,
};
use crate::model::routing::{GeneratedRoute, OspfMetricType};
use crate::model::{Configuration, Ip, LineAction, SwitchportMode};

use log::*;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Fatal error during fact extraction. The configuration model of the device is malformed, and
/// none of the facts already written for this device can be trusted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A line of a list has an action that is neither accept nor reject
    #[error("{structure} line {line}: unrecognized line action")]
    UnrecognizedLineAction {
        /// Qualified name of the list
        structure: String,
        /// Index of the line
        line: usize,
    },
    /// A policy-map clause has an action that is neither permit nor deny
    #[error("{policy_map} clause {clause}: unrecognized policy map action")]
    UnrecognizedPolicyMapAction {
        /// Qualified name of the policy map
        policy_map: String,
        /// Index of the clause
        clause: usize,
    },
    /// An interface has a switchport mode which is not known
    #[error("{hostname}: interface {interface}: invalid switchport mode")]
    UnrecognizedSwitchportMode {
        /// Hostname of the device
        hostname: String,
        /// Name of the interface
        interface: String,
    },
    /// An OSPF redistribution policy has an external metric type other than E1 or E2
    #[error("{policy_map}: invalid ospf metric type")]
    UnrecognizedOspfMetricType {
        /// Qualified name of the policy map
        policy_map: String,
    },
    /// The regular expression of a community-list line cannot be compiled
    #[error("{list} line {line}: invalid community regex: {reason}")]
    InvalidCommunityRegex {
        /// Qualified name of the community list
        list: String,
        /// Index of the line
        line: usize,
        /// Error message of the regex compiler
        reason: String,
    },
}

/// # Configuration Fact Extractor
///
/// Writes all facts of a single device into the provided fact bins. The extractor never modifies
/// the configuration, and it reads no network-wide state except the set of all community values.
///
/// ```
/// use netfacts::facts::{ConfigurationFactExtractor, FactBins, FactType};
/// use netfacts::model::Configuration;
/// use std::collections::BTreeSet;
///
/// let config = Configuration::new("r0", "cisco");
/// let communities = BTreeSet::new();
/// let mut bins = FactBins::new();
///
/// let mut extractor = ConfigurationFactExtractor::new(&config, &communities, &mut bins);
/// extractor.write_facts().unwrap();
/// assert!(extractor.warnings().is_empty());
/// assert_eq!(bins.get(FactType::SetNodeVendor), "r0|cisco\n");
/// ```
#[derive(Debug)]
pub struct ConfigurationFactExtractor<'a> {
    config: &'a Configuration,
    all_communities: &'a BTreeSet<u32>,
    bins: &'a mut FactBins,
    warnings: Vec<String>,
}

impl<'a> ConfigurationFactExtractor<'a> {
    /// Create a new extractor for the given device.
    pub fn new(
        config: &'a Configuration,
        all_communities: &'a BTreeSet<u32>,
        bins: &'a mut FactBins,
    ) -> Self {
        Self { config, all_communities, bins, warnings: Vec::new() }
    }

    /// Returns the warnings collected so far, in the order they were raised.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the extractor, returning the collected warnings.
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    /// Write all facts of the device. On error, the extraction stops immediately. Facts that were
    /// already written are not removed, the caller must discard the bins of this device.
    pub fn write_facts(&mut self) -> Result<(), ExtractionError> {
        debug!("Extracting facts of {}", self.config.hostname);
        self.write_vendor();
        self.write_interfaces();
        self.write_ip_access_lists()?;
        self.write_set_active_int();
        self.write_set_ip_int();
        self.write_switchport_settings()?;
        self.write_ospf_interfaces();
        self.write_static_routes();
        self.write_bgp_neighbor_policies();
        self.write_ospf_outbound_policy_maps()?;
        self.write_ospf_generated_routes();
        self.write_route_reflector_clients();
        self.write_ospf_router_id();
        self.write_link_load_limits();
        self.write_policy_maps()?;
        self.write_bgp_neighbors();
        self.write_route_filters()?;
        self.write_origination_policies();
        self.write_community_lists()?;
        self.write_bgp_generated_routes();
        self.write_bgp_neighbor_generated_routes();
        self.write_generated_routes();
        self.write_vlan_interfaces();
        if !self.warnings.is_empty() {
            info!("{}: {} warnings", self.config.hostname, self.warnings.len());
        }
        Ok(())
    }

    fn qualified(&self, local: &'a str) -> QualifiedName<'a> {
        QualifiedName::new(&self.config.hostname, local)
    }

    fn warn(&mut self, context: impl fmt::Display, message: impl fmt::Display) {
        let warning = format!("WARNING: {}: {}", context, message);
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    fn write_vendor(&mut self) {
        let c = self.config;
        self.bins.push(FactType::SetNodeVendor, &[&c.hostname, &c.vendor]);
    }

    fn write_interfaces(&mut self) {
        let c = self.config;
        let host = &c.hostname;
        for (name, iface) in c.interfaces.iter() {
            let is_flow_sink = name.starts_with(FLOW_SINK_INTERFACE_PREFIX);
            if is_flow_sink {
                self.bins.push(FactType::SetFlowSinkInterface, &[host, name]);
            }
            if is_flow_sink || name.starts_with(FAKE_INTERFACE_PREFIX) {
                self.bins.push(FactType::SetFakeInterface, &[host, name]);
            }

            if let Some(proc) = c.ospf_process.as_ref() {
                let cost = match iface.ospf_cost {
                    Some(cost) => cost,
                    // TODO: VLAN interfaces of non-cisco vendors use the bandwidth-based cost
                    None if name.starts_with("Vlan") => DEFAULT_VLAN_OSPF_COST,
                    None => proc.default_cost(iface.bandwidth),
                };
                self.bins.push(FactType::SetOspfInterfaceCost, &[host, name, &cost]);
            }

            if let Some(filter) = iface.incoming_filter.as_deref() {
                let filter = self.qualified(filter);
                self.bins.push(FactType::SetInterfaceFilterIn, &[host, name, &filter]);
            }
            if let Some(filter) = iface.outgoing_filter.as_deref() {
                let filter = self.qualified(filter);
                self.bins.push(FactType::SetInterfaceFilterOut, &[host, name, &filter]);
            }
            if let Some(policy) = iface.routing_policy.as_deref() {
                let policy = self.qualified(policy);
                self.bins.push(FactType::SetInterfaceRoutingPolicy, &[host, name, &policy]);
            }
        }
    }

    fn write_ip_access_lists(&mut self) -> Result<(), ExtractionError> {
        let c = self.config;
        for (name, acl) in c.ip_access_lists.iter() {
            let name = self.qualified(name);
            for (i, line) in acl.lines.iter().enumerate() {
                if !line.is_valid() {
                    self.warn(
                        format_args!("IpAccessList {} line {}", name, i),
                        "ignored (will never be matched) because we do not know how to handle \
                         non-trailing wildcard bits",
                    );
                    continue;
                }
                let src_start = line.src_ip.as_u32();
                let src_end = line.src_ip.wildcard_end(line.src_wildcard).as_u32();
                let dst_start = line.dst_ip.as_u32();
                let dst_end = line.dst_ip.wildcard_end(line.dst_wildcard).as_u32();
                self.bins.push(
                    FactType::SetIpAccessListLine,
                    &[&name, &i, &line.protocol.0, &src_start, &src_end, &dst_start, &dst_end],
                );
                match line.action {
                    LineAction::Accept => {}
                    LineAction::Reject => {
                        self.bins.push(FactType::SetIpAccessListDenyLine, &[&name, &i])
                    }
                    LineAction::Unrecognized => {
                        return Err(ExtractionError::UnrecognizedLineAction {
                            structure: name.to_string(),
                            line: i,
                        })
                    }
                }
                if line.protocol.has_ports() {
                    for range in line.dst_port_ranges.iter() {
                        self.bins.push(
                            FactType::SetIpAccessListLine_dstPortRange,
                            &[&name, &i, &range.start, &range.end],
                        );
                    }
                    for range in line.src_port_ranges.iter() {
                        self.bins.push(
                            FactType::SetIpAccessListLine_srcPortRange,
                            &[&name, &i, &range.start, &range.end],
                        );
                    }
                }
            }
        }
        Ok(())
    }

    fn write_set_active_int(&mut self) {
        let c = self.config;
        for (name, _) in c.interfaces.iter().filter(|(_, i)| i.active) {
            self.bins.push(FactType::SetActiveInt, &[&c.hostname, name]);
        }
    }

    fn write_set_ip_int(&mut self) {
        let c = self.config;
        for (name, iface) in c.interfaces.iter() {
            if let Some(addr) = iface.address {
                let prefix_length = addr.prefix_length();
                let start = addr.network();
                self.write_network(start, prefix_length);
                self.bins.push(
                    FactType::SetIpInt,
                    &[&c.hostname, name, &addr.ip.as_u32(), &prefix_length],
                );
            }
        }
    }

    fn write_network(&mut self, start: Ip, prefix_length: u8) {
        let end = start.network_end(prefix_length).as_u32();
        let start = start.as_u32();
        self.bins.push(FactType::SetNetwork, &[&start, &start, &end, &prefix_length]);
    }

    fn write_switchport_settings(&mut self) -> Result<(), ExtractionError> {
        let c = self.config;
        let host = &c.hostname;
        for (name, iface) in c.interfaces.iter() {
            match &iface.switchport {
                SwitchportMode::Access { vlan } => {
                    self.bins.push(FactType::SetSwitchportAccess, &[host, name, vlan]);
                }
                SwitchportMode::Trunk { encapsulation, native_vlan, allowed_vlans } => {
                    self.bins.push(
                        FactType::SetSwitchportTrunkEncapsulation,
                        &[host, name, encapsulation],
                    );
                    self.bins.push(FactType::SetSwitchportTrunkNative, &[host, name, native_vlan]);
                    for range in allowed_vlans.iter() {
                        self.bins.push(
                            FactType::SetSwitchportTrunkAllows,
                            &[host, name, &range.start, &range.end],
                        );
                    }
                }
                SwitchportMode::DynamicAuto
                | SwitchportMode::DynamicDesirable
                | SwitchportMode::None => {}
                SwitchportMode::Unrecognized => {
                    return Err(ExtractionError::UnrecognizedSwitchportMode {
                        hostname: host.clone(),
                        interface: name.clone(),
                    })
                }
            }
        }
        Ok(())
    }

    fn write_ospf_interfaces(&mut self) {
        let c = self.config;
        if let Some(proc) = c.ospf_process.as_ref() {
            for (number, area) in proc.areas.iter() {
                for iface in area.interfaces.iter() {
                    self.bins.push(FactType::SetOspfInterface, &[&c.hostname, iface, number]);
                }
            }
        }
    }

    fn write_static_routes(&mut self) {
        let c = self.config;
        let host = &c.hostname;
        for route in c.static_routes.iter() {
            let prefix_length = route.prefix_length;
            let start = route.prefix.as_u32();
            let end = route.prefix.network_end(prefix_length).as_u32();
            let next_hop_ip = route.next_hop_ip.unwrap_or(Ip::ZERO).as_u32();
            self.write_network(route.prefix, prefix_length);
            match route.next_hop_interface.as_deref() {
                Some(iface) => {
                    let iface = if is_null_interface(iface) { NULL_INTERFACE_NAME } else { iface };
                    self.bins.push(
                        FactType::SetStaticIntRoute_flat,
                        &[
                            host,
                            &start,
                            &end,
                            &prefix_length,
                            &next_hop_ip,
                            &iface,
                            &route.distance,
                            &route.tag,
                        ],
                    );
                }
                None => self.bins.push(
                    FactType::SetStaticRoute_flat,
                    &[
                        host,
                        &start,
                        &end,
                        &prefix_length,
                        &next_hop_ip,
                        &route.distance,
                        &route.tag,
                    ],
                ),
            }
        }
    }

    fn write_bgp_neighbor_policies(&mut self) {
        let c = self.config;
        if let Some(proc) = c.bgp_process.as_ref() {
            for neighbor in proc.neighbors.iter() {
                let address = neighbor.address.as_u32();
                for map in neighbor.inbound_policy_maps.iter() {
                    let map = self.qualified(map);
                    self.bins.push(FactType::SetBgpImportPolicy, &[&c.hostname, &address, &map]);
                }
                for map in neighbor.outbound_policy_maps.iter() {
                    let map = self.qualified(map);
                    self.bins.push(FactType::SetBgpExportPolicy, &[&c.hostname, &address, &map]);
                }
            }
        }
    }

    fn write_ospf_outbound_policy_maps(&mut self) -> Result<(), ExtractionError> {
        let c = self.config;
        if let Some(proc) = c.ospf_process.as_ref() {
            for policy in proc.outbound_policy_maps.iter() {
                let map = self.qualified(&policy.policy_map);
                let protocol = match policy.metric_type {
                    OspfMetricType::E1 => RoutingProtocol::OspfE1,
                    OspfMetricType::E2 => RoutingProtocol::OspfE2,
                    OspfMetricType::Unrecognized => {
                        return Err(ExtractionError::UnrecognizedOspfMetricType {
                            policy_map: map.to_string(),
                        })
                    }
                };
                self.bins.push(FactType::SetOspfOutboundPolicyMap, &[&c.hostname, &map]);
                self.bins.push(FactType::SetPolicyMapOspfExternalRouteType, &[&map, &protocol]);
            }
        }
        Ok(())
    }

    fn write_ospf_generated_routes(&mut self) {
        let c = self.config;
        if let Some(proc) = c.ospf_process.as_ref() {
            self.write_process_generated_routes(
                &proc.generated_routes,
                FactType::SetOspfGeneratedRoute_flat,
                FactType::SetOspfGeneratedRoutePolicy_flat,
            );
        }
    }

    fn write_route_reflector_clients(&mut self) {
        let c = self.config;
        if let Some(proc) = c.bgp_process.as_ref() {
            for neighbor in proc.neighbors.iter() {
                if let Some(cluster_id) = neighbor.cluster_id {
                    self.bins.push(
                        FactType::SetRouteReflectorClient,
                        &[&c.hostname, &neighbor.address.as_u32(), &cluster_id],
                    );
                }
            }
        }
    }

    fn write_ospf_router_id(&mut self) {
        let c = self.config;
        if let Some(id) = c.ospf_process.as_ref().and_then(|p| p.router_id) {
            self.bins.push(FactType::SetOspfRouterId, &[&c.hostname, &id.as_u32()]);
        }
    }

    fn write_link_load_limits(&mut self) {
        let c = self.config;
        // TODO: derive the load limit of VLAN interfaces from their member ports
        for (name, iface) in c.interfaces.iter().filter(|(n, _)| !n.starts_with("Vlan")) {
            let bandwidth = FactFloat(iface.bandwidth);
            self.bins.push(FactType::SetLinkLoadLimitIn, &[&c.hostname, name, &bandwidth]);
            self.bins.push(FactType::SetLinkLoadLimitOut, &[&c.hostname, name, &bandwidth]);
        }
    }

    fn write_policy_maps(&mut self) -> Result<(), ExtractionError> {
        let c = self.config;
        for (name, map) in c.policy_maps.iter() {
            let name = self.qualified(name);
            for (i, clause) in map.clauses.iter().enumerate() {
                match clause.action {
                    PolicyMapAction::Permit => {
                        self.bins.push(FactType::SetPolicyMapClausePermit, &[&name, &i])
                    }
                    PolicyMapAction::Deny => {
                        self.bins.push(FactType::SetPolicyMapClauseDeny, &[&name, &i])
                    }
                    PolicyMapAction::Unrecognized => {
                        return Err(ExtractionError::UnrecognizedPolicyMapAction {
                            policy_map: name.to_string(),
                            clause: i,
                        })
                    }
                }
                self.write_policy_map_match_lines(name, i, clause);
                self.write_policy_map_set_lines(name, i, clause);
            }
        }
        Ok(())
    }

    fn write_policy_map_match_lines(
        &mut self,
        map: QualifiedName<'a>,
        i: usize,
        clause: &'a PolicyMapClause,
    ) {
        for line in clause.match_lines.iter() {
            match line {
                PolicyMapMatchLine::AsPathAccessList(_) => self.warn(
                    format_args!("{}:{}", map, i),
                    "Policy map matching of AS path acls not implemented!",
                ),
                PolicyMapMatchLine::CommunityList(lists) => {
                    for list in lists.iter() {
                        let list = self.qualified(list);
                        self.bins.push(
                            FactType::SetPolicyMapClauseMatchCommunityList,
                            &[&map, &i, &list],
                        );
                    }
                }
                PolicyMapMatchLine::IpAccessList(lists) => {
                    for list in lists.iter() {
                        let list = self.qualified(list);
                        self.bins.push(FactType::SetPolicyMapClauseMatchAcl, &[&map, &i, &list]);
                    }
                }
                PolicyMapMatchLine::Neighbor(ip) => {
                    self.bins
                        .push(FactType::SetPolicyMapClauseMatchNeighbor, &[&map, &i, &ip.as_u32()]);
                }
                PolicyMapMatchLine::Protocol(protocols) => {
                    for protocol in protocols.iter() {
                        self.bins
                            .push(FactType::SetPolicyMapClauseMatchProtocol, &[&map, &i, protocol]);
                    }
                }
                PolicyMapMatchLine::RouteFilterList(lists) => {
                    for list in lists.iter() {
                        let list = self.qualified(list);
                        self.bins
                            .push(FactType::SetPolicyMapClauseMatchRouteFilter, &[&map, &i, &list]);
                    }
                }
                PolicyMapMatchLine::Tag(tags) => {
                    for tag in tags.iter() {
                        self.bins.push(FactType::SetPolicyMapClauseMatchTag, &[&map, &i, tag]);
                    }
                }
            }
        }
    }

    fn write_policy_map_set_lines(
        &mut self,
        map: QualifiedName<'a>,
        i: usize,
        clause: &'a PolicyMapClause,
    ) {
        for line in clause.set_lines.iter() {
            match line {
                PolicyMapSetLine::AddCommunity(communities) => {
                    for community in communities.iter() {
                        self.bins
                            .push(FactType::SetPolicyMapClauseAddCommunity, &[&map, &i, community]);
                    }
                }
                PolicyMapSetLine::AsPathPrepend(_) => {
                    self.warn(format_args!("{}:{}", map, i), "AS_PATH_PREPEND not implemented")
                }
                PolicyMapSetLine::Community(communities) => {
                    for community in communities.iter() {
                        self.bins
                            .push(FactType::SetPolicyMapClauseSetCommunity, &[&map, &i, community]);
                    }
                }
                PolicyMapSetLine::CommunityNone => {
                    self.warn(format_args!("{}:{}", map, i), "COMMUNITY_NONE not implemented")
                }
                PolicyMapSetLine::DeleteCommunity(list) => {
                    let list = self.qualified(list);
                    self.bins.push(FactType::SetPolicyMapClauseDeleteCommunity, &[&map, &i, &list]);
                }
                PolicyMapSetLine::LocalPreference(local_pref) => {
                    self.bins.push(
                        FactType::SetPolicyMapClauseSetLocalPreference,
                        &[&map, &i, local_pref],
                    );
                }
                PolicyMapSetLine::Metric(metric) => {
                    self.bins.push(FactType::SetPolicyMapClauseSetMetric, &[&map, &i, metric]);
                }
                PolicyMapSetLine::NextHop(next_hops) => {
                    for next_hop in next_hops.iter() {
                        self.bins.push(
                            FactType::SetPolicyMapClauseSetNextHopIp,
                            &[&map, &i, &next_hop.as_u32()],
                        );
                    }
                }
                PolicyMapSetLine::OriginType(origin) => {
                    self.bins.push(FactType::SetPolicyMapClauseSetOriginType, &[&map, &i, origin]);
                }
            }
        }
    }

    fn write_bgp_neighbors(&mut self) {
        let c = self.config;
        let host = &c.hostname;
        if let Some(proc) = c.bgp_process.as_ref() {
            for neighbor in proc.neighbors.iter() {
                let address = neighbor.address.as_u32();
                self.bins.push(FactType::SetBgpNeighborIp, &[host, &address]);
                self.bins.push(FactType::SetLocalAs, &[host, &address, &neighbor.local_as]);
                self.bins.push(FactType::SetRemoteAs, &[host, &address, &neighbor.remote_as]);
                self.bins.push(
                    FactType::SetBgpNeighborDefaultMetric,
                    &[host, &address, &neighbor.default_metric],
                );
                if neighbor.send_community {
                    self.bins.push(FactType::SetBgpNeighborSendCommunity, &[host, &address]);
                }
            }
        }
    }

    fn write_route_filters(&mut self) -> Result<(), ExtractionError> {
        let c = self.config;
        for (name, filter) in c.route_filter_lists.iter() {
            let name = self.qualified(name);
            for (i, line) in filter.lines.iter().enumerate() {
                match line {
                    RouteFilterLine::LengthRange {
                        action,
                        prefix,
                        prefix_length,
                        length_range,
                    } => {
                        let start = prefix.as_u32();
                        let end = prefix.network_end(*prefix_length).as_u32();
                        self.bins.push(
                            FactType::SetRouteFilterLine,
                            &[&name, &i, &start, &end, &length_range.start, &length_range.end],
                        );
                        match action {
                            LineAction::Accept => {
                                self.bins.push(FactType::SetRouteFilterPermitLine, &[&name, &i])
                            }
                            LineAction::Reject => {}
                            LineAction::Unrecognized => {
                                return Err(ExtractionError::UnrecognizedLineAction {
                                    structure: name.to_string(),
                                    line: i,
                                })
                            }
                        }
                    }
                    RouteFilterLine::Through { .. } => self.warn(
                        format_args!("{}:{}", name, i),
                        "route-filter through not implemented",
                    ),
                }
            }
        }
        Ok(())
    }

    fn write_origination_policies(&mut self) {
        let c = self.config;
        if let Some(proc) = c.bgp_process.as_ref() {
            for neighbor in proc.neighbors.iter() {
                let address = neighbor.address.as_u32();
                for policy in neighbor.origination_policies.iter() {
                    let policy = self.qualified(policy);
                    self.bins
                        .push(FactType::SetBgpOriginationPolicy, &[&c.hostname, &address, &policy]);
                }
            }
        }
    }

    fn write_community_lists(&mut self) -> Result<(), ExtractionError> {
        let c = self.config;
        let all_communities = self.all_communities;
        for (name, list) in c.community_lists.iter() {
            let name = self.qualified(name);
            for (i, line) in list.lines.iter().enumerate() {
                let communities = line.matching_communities(all_communities).map_err(|e| {
                    ExtractionError::InvalidCommunityRegex {
                        list: name.to_string(),
                        line: i,
                        reason: e.to_string(),
                    }
                })?;
                trace!("{} line {} matches {} communities", name, i, communities.len());
                for community in communities {
                    self.bins.push(FactType::SetCommunityListLine, &[&name, &i, &community]);
                }
                match line.action {
                    LineAction::Accept => {
                        self.bins.push(FactType::SetCommunityListLinePermit, &[&name, &i])
                    }
                    LineAction::Reject => {}
                    LineAction::Unrecognized => {
                        return Err(ExtractionError::UnrecognizedLineAction {
                            structure: name.to_string(),
                            line: i,
                        })
                    }
                }
            }
        }
        Ok(())
    }

    fn write_bgp_generated_routes(&mut self) {
        let c = self.config;
        if let Some(proc) = c.bgp_process.as_ref() {
            self.write_process_generated_routes(
                &proc.generated_routes,
                FactType::SetBgpGeneratedRoute_flat,
                FactType::SetBgpGeneratedRoutePolicy_flat,
            );
        }
    }

    fn write_bgp_neighbor_generated_routes(&mut self) {
        let c = self.config;
        let host = &c.hostname;
        if let Some(proc) = c.bgp_process.as_ref() {
            for neighbor in proc.neighbors.iter() {
                let address = neighbor.address.as_u32();
                for route in neighbor.generated_routes.iter() {
                    let len = route.prefix_length;
                    let start = route.prefix.as_u32();
                    let end = route.prefix.network_end(len).as_u32();
                    self.bins.push(
                        FactType::SetBgpNeighborGeneratedRoute_flat,
                        &[host, &address, &start, &end, &len],
                    );
                    for policy in route.generation_policies.iter() {
                        let policy = self.qualified(policy);
                        self.bins.push(
                            FactType::SetBgpNeighborGeneratedRoutePolicy_flat,
                            &[host, &address, &start, &end, &len, &policy],
                        );
                    }
                }
            }
        }
    }

    fn write_generated_routes(&mut self) {
        let c = self.config;
        let host = &c.hostname;
        for route in c.generated_routes.iter() {
            let len = route.prefix_length;
            let start = route.prefix.as_u32();
            let end = route.prefix.network_end(len).as_u32();
            self.bins.push(
                FactType::SetGeneratedRoute_flat,
                &[host, &start, &end, &len, &route.administrative_cost],
            );
            for policy in route.generation_policies.iter() {
                let policy = self.qualified(policy);
                self.bins.push(
                    FactType::SetGeneratedRoutePolicy_flat,
                    &[host, &start, &end, &len, &policy],
                );
            }
        }
    }

    /// Generated routes of a routing process (OSPF or BGP). In contrast to the device-level
    /// aggregates, their administrative cost is not part of the fact.
    fn write_process_generated_routes(
        &mut self,
        routes: &'a [GeneratedRoute],
        route_fact: FactType,
        policy_fact: FactType,
    ) {
        let c = self.config;
        let host = &c.hostname;
        for route in routes.iter() {
            let len = route.prefix_length;
            let start = route.prefix.as_u32();
            let end = route.prefix.network_end(len).as_u32();
            self.bins.push(route_fact, &[host, &start, &end, &len]);
            for policy in route.generation_policies.iter() {
                let policy = QualifiedName::new(host, policy);
                self.bins.push(policy_fact, &[host, &start, &end, &len, &policy]);
            }
        }
    }

    fn write_vlan_interfaces(&mut self) {
        let c = self.config;
        for name in c.interfaces.keys() {
            if let Some(vlan) = interface_vlan_number(name) {
                self.bins.push(FactType::SetVlanInterface, &[&c.hostname, name, &vlan]);
            }
        }
    }
}
