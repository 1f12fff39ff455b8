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

//! # Facts
//!
//! A fact is one tuple of a relation consumed by the downstream logic engine. It is encoded as a
//! single line, with its fields separated by `|`. All facts of the same type are collected in one
//! fact bin. The exact name of the fact type, and the order of its fields, are the wire format to
//! the logic engine.
//!
//! Every device is extracted into its own [`FactBins`]. Since facts are only ever appended, the
//! bins of different devices can be concatenated in any order using [`FactBins::append`].

mod bins;
mod extractor;

pub use bins::{FactBins, FactFloat, FactType, QualifiedName};
pub use extractor::{ConfigurationFactExtractor, ExtractionError};

/// Prefix of interfaces modelling a sink for flows leaving the network
pub const FLOW_SINK_INTERFACE_PREFIX: &str = "TenGigabitEthernet100/";
/// Prefix of synthetic interfaces added by the network synthesizer
pub const FAKE_INTERFACE_PREFIX: &str = "TenGigabitEthernet200/";
/// OSPF cost of VLAN interfaces without an explicit cost
pub const DEFAULT_VLAN_OSPF_COST: u32 = 1;
/// Canonical name of every null (discard) interface
pub const NULL_INTERFACE_NAME: &str = "null_interface";
