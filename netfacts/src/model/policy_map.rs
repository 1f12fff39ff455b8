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

//! # Policy-Maps
//!
//! This module contains the structures describing routing policies (route maps). A policy map is
//! an ordered list of clauses. Each clause matches on a route, and either permits it (applying its
//! set actions) or denies it.

use crate::model::types::Ip;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// # Main PolicyMap structure
/// Use the [`PolicyMapClauseBuilder`] to conveniently build its clauses:
///
/// ```
/// # use netfacts::model::policy_map::*;
/// let map = PolicyMap {
///     clauses: vec![
///         PolicyMapClauseBuilder::new()
///             .permit()
///             .match_community_list("CL_IN")
///             .set_local_pref(200)
///             .build(),
///         PolicyMapClauseBuilder::new().deny().build(),
///     ],
/// };
/// assert_eq!(map.clauses.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyMap {
    /// Clauses, checked in order. The position of a clause is its index in the emitted facts.
    pub clauses: Vec<PolicyMapClause>,
}

impl PolicyMap {
    /// Returns every community value this policy map adds or sets.
    pub fn communities(&self) -> BTreeSet<u32> {
        self.clauses
            .iter()
            .flat_map(|c| c.set_lines.iter())
            .filter_map(|s| match s {
                PolicyMapSetLine::AddCommunity(cs) | PolicyMapSetLine::Community(cs) => Some(cs),
                _ => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

/// Single clause of a [`PolicyMap`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyMapClause {
    /// Either Permit or Deny.
    pub action: PolicyMapAction,
    /// Match statements of the clause, connected in an and. Their order is irrelevant.
    #[serde(default)]
    pub match_lines: Vec<PolicyMapMatchLine>,
    /// Set actions of the clause
    #[serde(default)]
    pub set_lines: Vec<PolicyMapSetLine>,
}

/// # Policy Map Clause Builder
///
/// Convenience type to build a clause. If no action is chosen, the clause permits. If you don't
/// add any match statement, the clause matches on any route.
#[derive(Debug, Default)]
pub struct PolicyMapClauseBuilder {
    action: Option<PolicyMapAction>,
    match_lines: Vec<PolicyMapMatchLine>,
    set_lines: Vec<PolicyMapSetLine>,
}

impl PolicyMapClauseBuilder {
    /// Create an empty PolicyMapClauseBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action of the clause.
    pub fn action(&mut self, action: PolicyMapAction) -> &mut Self {
        self.action = Some(action);
        self
    }

    /// Set the action of the clause to permit.
    pub fn permit(&mut self) -> &mut Self {
        self.action = Some(PolicyMapAction::Permit);
        self
    }

    /// Set the action of the clause to deny.
    pub fn deny(&mut self) -> &mut Self {
        self.action = Some(PolicyMapAction::Deny);
        self
    }

    /// Add a match line to the clause.
    pub fn add_match(&mut self, line: PolicyMapMatchLine) -> &mut Self {
        self.match_lines.push(line);
        self
    }

    /// Match on a community list
    pub fn match_community_list(&mut self, list: impl Into<String>) -> &mut Self {
        self.add_match(PolicyMapMatchLine::CommunityList(vec![list.into()]))
    }

    /// Match on an access list
    pub fn match_ip_access_list(&mut self, list: impl Into<String>) -> &mut Self {
        self.add_match(PolicyMapMatchLine::IpAccessList(vec![list.into()]))
    }

    /// Match on a route filter list
    pub fn match_route_filter_list(&mut self, list: impl Into<String>) -> &mut Self {
        self.add_match(PolicyMapMatchLine::RouteFilterList(vec![list.into()]))
    }

    /// Match on the neighbor the route was received from
    pub fn match_neighbor(&mut self, neighbor: Ip) -> &mut Self {
        self.add_match(PolicyMapMatchLine::Neighbor(neighbor))
    }

    /// Match on the protocol which produced the route
    pub fn match_protocol(&mut self, protocol: RoutingProtocol) -> &mut Self {
        self.add_match(PolicyMapMatchLine::Protocol(vec![protocol]))
    }

    /// Match on the tag of the route
    pub fn match_tag(&mut self, tag: u32) -> &mut Self {
        self.add_match(PolicyMapMatchLine::Tag(vec![tag]))
    }

    /// Add a set line to the clause.
    pub fn add_set(&mut self, line: PolicyMapSetLine) -> &mut Self {
        self.set_lines.push(line);
        self
    }

    /// Add a community to the route
    pub fn add_community(&mut self, community: u32) -> &mut Self {
        self.add_set(PolicyMapSetLine::AddCommunity(vec![community]))
    }

    /// Overwrite the communities of the route
    pub fn set_community(&mut self, community: u32) -> &mut Self {
        self.add_set(PolicyMapSetLine::Community(vec![community]))
    }

    /// Remove all communities matched by the community list
    pub fn delete_community(&mut self, list: impl Into<String>) -> &mut Self {
        self.add_set(PolicyMapSetLine::DeleteCommunity(list.into()))
    }

    /// Overwrite the local preference
    pub fn set_local_pref(&mut self, local_pref: u32) -> &mut Self {
        self.add_set(PolicyMapSetLine::LocalPreference(local_pref))
    }

    /// Overwrite the metric
    pub fn set_metric(&mut self, metric: u32) -> &mut Self {
        self.add_set(PolicyMapSetLine::Metric(metric))
    }

    /// Overwrite the next hop
    pub fn set_next_hop(&mut self, next_hop: Ip) -> &mut Self {
        self.add_set(PolicyMapSetLine::NextHop(vec![next_hop]))
    }

    /// Overwrite the origin type
    pub fn set_origin_type(&mut self, origin: OriginType) -> &mut Self {
        self.add_set(PolicyMapSetLine::OriginType(origin))
    }

    /// Build the clause.
    pub fn build(&self) -> PolicyMapClause {
        PolicyMapClause {
            action: self.action.unwrap_or(PolicyMapAction::Permit),
            match_lines: self.match_lines.clone(),
            set_lines: self.set_lines.clone(),
        }
    }
}

/// Action of a policy-map clause, which can either be permit or deny
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMapAction {
    /// Permit the route and apply the set lines
    Permit,
    /// Deny the route
    Deny,
    /// Any action the model does not know about
    #[serde(other)]
    Unrecognized,
}

impl Default for PolicyMapAction {
    fn default() -> Self {
        Self::Permit
    }
}

/// Match statement of a clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMapMatchLine {
    /// Matches on the AS path (names of AS-path access lists)
    AsPathAccessList(Vec<String>),
    /// Matches if any of the community lists matches
    CommunityList(Vec<String>),
    /// Matches if any of the access lists permits the prefix
    IpAccessList(Vec<String>),
    /// Matches on the neighbor (exact value only)
    Neighbor(Ip),
    /// Matches on the protocol that produced the route
    Protocol(Vec<RoutingProtocol>),
    /// Matches if any of the route filter lists permits the prefix
    RouteFilterList(Vec<String>),
    /// Matches on the route tag
    Tag(Vec<u32>),
}

/// Set action of a clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMapSetLine {
    /// Add communities to the existing ones
    AddCommunity(Vec<u32>),
    /// Prepend AS numbers to the AS path
    AsPathPrepend(Vec<u32>),
    /// Replace all communities
    Community(Vec<u32>),
    /// Remove all communities
    CommunityNone,
    /// Remove every community matched by the community list
    DeleteCommunity(String),
    /// Overwrite the local preference
    LocalPreference(u32),
    /// Overwrite the metric
    Metric(u32),
    /// Overwrite the next hop
    NextHop(Vec<Ip>),
    /// Overwrite the origin type
    OriginType(OriginType),
}

/// Routing protocol of a route, as used by protocol match lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingProtocol {
    /// Aggregate (generated) route
    Aggregate,
    /// BGP
    Bgp,
    /// Directly connected network
    Connected,
    /// EGP
    Egp,
    /// Internal BGP
    Ibgp,
    /// Any IGP
    Igp,
    /// OSPF
    Ospf,
    /// OSPF external type 1
    OspfE1,
    /// OSPF external type 2
    OspfE2,
    /// Static route
    Static,
}

impl fmt::Display for RoutingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Aggregate => "aggregate",
            Self::Bgp => "bgp",
            Self::Connected => "connected",
            Self::Egp => "egp",
            Self::Ibgp => "ibgp",
            Self::Igp => "igp",
            Self::Ospf => "ospf",
            Self::OspfE1 => "ospfE1",
            Self::OspfE2 => "ospfE2",
            Self::Static => "static",
        })
    }
}

/// BGP origin attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OriginType {
    /// Learned via EGP
    Egp,
    /// Learned from an IGP
    Igp,
    /// Unknown origin
    Incomplete,
}

impl fmt::Display for OriginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Egp => "EGP",
            Self::Igp => "IGP",
            Self::Incomplete => "INCOMPLETE",
        })
    }
}
