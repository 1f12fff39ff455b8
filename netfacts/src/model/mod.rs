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

#![deny(missing_docs, missing_debug_implementations)]

//! # Configuration Model
//!
//! Vendor-neutral representation of the control-plane configuration of network devices. The model
//! is produced by a parser, and only read during fact extraction.
//!
//! Structures refer to each other by their local name (e.g., an interface names its incoming
//! access list). The name is only unique within a device; see
//! [`QualifiedName`](crate::facts::QualifiedName) for the network-wide name.

pub mod config;
pub mod filter;
pub mod policy_map;
pub mod routing;
pub mod types;

pub use config::{Configuration, Interface, InterfaceAddress, SwitchportMode};
pub use types::{community_str, Ip, IpProtocol, LineAction, SubRange};
