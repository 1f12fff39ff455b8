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

//! Module containing all error types

use crate::facts::ExtractionError;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error during the extraction of a device
    #[error("Extraction Error: {0}")]
    ExtractionError(#[from] ExtractionError),
    /// Configuration is not a valid JSON document
    #[error("JSON Error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}
