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

//! # Filters
//!
//! Access lists, route-filter lists and community lists. All of them are ordered lists of lines,
//! where the position of a line is significant.

use crate::model::types::{community_str, Ip, IpProtocol, LineAction, SubRange};

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// IP access list (ACL), matching on packet headers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IpAccessList {
    /// Lines of the access list, evaluated in order
    pub lines: Vec<IpAccessListLine>,
}

/// Single line of an [`IpAccessList`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IpAccessListLine {
    /// Accept or reject
    pub action: LineAction,
    /// IP protocol number
    #[serde(default)]
    pub protocol: IpProtocol,
    /// Source address
    pub src_ip: Ip,
    /// Source wildcard mask
    pub src_wildcard: Ip,
    /// Destination address
    pub dst_ip: Ip,
    /// Destination wildcard mask
    pub dst_wildcard: Ip,
    /// Source port ranges (TCP and UDP only)
    #[serde(default)]
    pub src_port_ranges: Vec<SubRange>,
    /// Destination port ranges (TCP and UDP only)
    #[serde(default)]
    pub dst_port_ranges: Vec<SubRange>,
}

impl IpAccessListLine {
    /// A line can only be represented as an address range if both wildcards consist of trailing
    /// bits only.
    pub fn is_valid(&self) -> bool {
        self.src_wildcard.is_trailing_wildcard() && self.dst_wildcard.is_trailing_wildcard()
    }
}

/// Route filter list, matching on the prefix of a route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteFilterList {
    /// Lines of the route filter, evaluated in order
    pub lines: Vec<RouteFilterLine>,
}

/// Single line of a [`RouteFilterList`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RouteFilterLine {
    /// Matches all prefixes within `prefix/prefix_length` whose length lies in `length_range`.
    LengthRange {
        /// Accept or reject
        action: LineAction,
        /// Network address
        prefix: Ip,
        /// Length of the network
        prefix_length: u8,
        /// Allowed prefix lengths of matching routes
        length_range: SubRange,
    },
    /// Matches every prefix on the path from `prefix` down to `through_prefix`.
    Through {
        /// Accept or reject
        action: LineAction,
        /// Network address
        prefix: Ip,
        /// Length of the network
        prefix_length: u8,
        /// Address of the most specific prefix
        through_prefix: Ip,
        /// Length of the most specific prefix
        through_prefix_length: u8,
    },
}

/// Community list, matching on the communities of a BGP route.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommunityList {
    /// Lines of the community list, evaluated in order
    pub lines: Vec<CommunityListLine>,
}

/// Single line of a [`CommunityList`]. The line matches every community whose `high:low` string
/// contains a match of `regex`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommunityListLine {
    /// Accept or reject
    pub action: LineAction,
    /// Regular expression on the `high:low` notation
    pub regex: String,
}

impl CommunityListLine {
    /// Create a new line
    pub fn new(action: LineAction, regex: impl Into<String>) -> Self {
        Self { action, regex: regex.into() }
    }

    /// Returns all communities of `all_communities` matched by this line, in ascending order.
    pub fn matching_communities(
        &self,
        all_communities: &BTreeSet<u32>,
    ) -> Result<Vec<u32>, regex::Error> {
        let re = Regex::new(&self.regex)?;
        Ok(all_communities.iter().copied().filter(|c| re.is_match(&community_str(*c))).collect())
    }
}
