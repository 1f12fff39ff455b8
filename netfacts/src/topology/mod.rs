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

//! # Topology
//!
//! The physical adjacency of the network, as a list of edges between interfaces. The topology is
//! computed independently of the configurations, and only lowered into `SamePhysicalSegment`
//! facts here.

mod parser;

pub use parser::{parse_topology, parse_topology_str, TopologyError};

use crate::facts::{FactBins, FactType};

use log::*;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::str::FromStr;

/// Physical link between two interfaces
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Hostname of the first device
    pub node1: String,
    /// Interface of the first device
    pub int1: String,
    /// Hostname of the second device
    pub node2: String,
    /// Interface of the second device
    pub int2: String,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        node1: impl Into<String>,
        int1: impl Into<String>,
        node2: impl Into<String>,
        int2: impl Into<String>,
    ) -> Self {
        Self { node1: node1.into(), int1: int1.into(), node2: node2.into(), int2: int2.into() }
    }
}

/// List of physical links
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Topology {
    /// All edges, in the order they were discovered
    pub edges: Vec<Edge>,
}

impl Topology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single edge
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}

impl FromStr for Topology {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_topology_str(s)
    }
}

/// Writes the facts of the physical topology.
#[derive(Debug)]
pub struct TopologyFactExtractor<'a> {
    topology: &'a Topology,
}

impl<'a> TopologyFactExtractor<'a> {
    /// Create a new extractor
    pub fn new(topology: &'a Topology) -> Self {
        Self { topology }
    }

    /// Write one `SamePhysicalSegment` fact per edge, in the order of the edge list.
    pub fn write_facts(&self, bins: &mut FactBins) {
        debug!("Extracting facts of {} edges", self.topology.edges.len());
        for e in self.topology.edges.iter() {
            bins.push(FactType::SamePhysicalSegment, &[&e.node1, &e.int1, &e.node2, &e.int2]);
        }
    }

    /// Returns the JSON representation of the topology, `{"edges": [...]}`.
    pub fn to_json(&self) -> Value {
        let edges: Vec<Value> = self
            .topology
            .edges
            .iter()
            .map(|e| json!({"node1": e.node1, "int1": e.int1, "node2": e.node2, "int2": e.int2}))
            .collect();
        json!({ "edges": edges })
    }
}
