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

#![deny(missing_docs)]

//! # NetFacts: Relational Fact Extraction for Network Configurations
//! This is a library for lowering vendor-neutral network configurations into flat relational
//! facts, which are consumed by a logic engine that reasons about the control plane and the data
//! plane of the network.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Model`](model)**: Vendor-neutral configuration model of a single device. See the main
//!   structure [`Configuration`](model::Configuration).
//!
//! - **[`Facts`](facts)**: Fact types, [fact bins](facts::FactBins) and the
//!   [`ConfigurationFactExtractor`](facts::ConfigurationFactExtractor), which lowers one device
//!   into facts. Constructs which the fact schema cannot express are skipped with a warning, and
//!   malformed configurations abort the extraction of the device with an
//!   [`ExtractionError`](facts::ExtractionError).
//!
//! - **[`Topology`](topology)**: Physical adjacency of the network and its facts.
//!
//! - **[`Driver`](driver)**: Reading the configurations of a network, and extracting them using
//!   multiple threads.
//!
//! - **[`Export`](export)**: Diagnostic JSON dump of a device.
//!
//! ## Usage
//!
//! ```
//! use netfacts::driver::extract_network;
//! use netfacts::facts::FactType;
//! use netfacts::model::{Configuration, Interface, InterfaceAddress};
//!
//! let mut r0 = Configuration::new("r0", "cisco");
//! r0.interfaces.insert(
//!     "GigabitEthernet0/0".to_string(),
//!     Interface {
//!         active: true,
//!         address: Some(InterfaceAddress::new("10.0.0.1".parse().unwrap(), 24)),
//!         ..Default::default()
//!     },
//! );
//!
//! let network = extract_network(&[r0], None);
//! assert!(network.is_complete());
//! assert_eq!(network.facts.get(FactType::SetActiveInt), "r0|GigabitEthernet0/0\n");
//! assert_eq!(network.facts.get(FactType::SetIpInt), "r0|GigabitEthernet0/0|167772161|24\n");
//! ```

pub mod driver;
mod error;
pub mod export;
pub mod facts;
pub mod model;
pub mod topology;

pub use error::Error;

// test modules
mod test;
