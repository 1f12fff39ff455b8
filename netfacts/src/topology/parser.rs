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

//! Parser for edge-list topology files

use super::{Edge, Topology};

use std::fs::read_to_string;
use std::path::Path;
use thiserror::Error;

/// Parses a topology file and returns the resulting edge list.
///
/// Every non-empty line describes a single edge in the form `node1:int1,node2:int2`, optionally
/// wrapped in parentheses. Everything after a `#` is a comment. Interface names may contain `:`,
/// only the first `:` of each endpoint separates the node from the interface.
pub fn parse_topology(filename: impl AsRef<Path>) -> Result<Topology, TopologyError> {
    let content = read_to_string(filename.as_ref())?;
    parse_topology_str(&content)
}

/// Parses the content of a topology file. See [`parse_topology`] for the format.
pub fn parse_topology_str(content: &str) -> Result<Topology, TopologyError> {
    let mut edges = Vec::new();
    for (i, line) in content.lines().enumerate() {
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let line_nr = i + 1;

        let inner = match (line.strip_prefix('('), line.strip_suffix(')')) {
            (Some(_), Some(_)) => line[1..line.len() - 1].trim(),
            (None, None) => line,
            _ => return Err(TopologyError::UnbalancedParentheses(line_nr)),
        };

        let mut endpoints = inner.split(',');
        let (a, b) = match (endpoints.next(), endpoints.next(), endpoints.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => {
                return Err(TopologyError::UnexpectedToken {
                    line: line_nr,
                    content: String::from(line),
                })
            }
        };
        let (node1, int1) = parse_endpoint(a, line_nr)?;
        let (node2, int2) = parse_endpoint(b, line_nr)?;
        edges.push(Edge::new(node1, int1, node2, int2));
    }
    Ok(Topology { edges })
}

fn parse_endpoint(s: &str, line: usize) -> Result<(&str, &str), TopologyError> {
    let s = s.trim();
    let pos = s.find(':').ok_or(TopologyError::MissingInterface(line))?;
    let (node, iface) = (s[..pos].trim(), s[pos + 1..].trim());
    if node.is_empty() {
        return Err(TopologyError::MissingNode(line));
    }
    if iface.is_empty() {
        return Err(TopologyError::MissingInterface(line));
    }
    Ok((node, iface))
}

/// Error while parsing a topology file
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// The line is not an edge
    #[error("Unexpected Token on line {line}: {content}")]
    UnexpectedToken {
        /// Line number (starting at 1)
        line: usize,
        /// Content of the line
        content: String,
    },
    /// Opening parenthesis without closing one, or vice versa
    #[error("Unbalanced parentheses on line {0}!")]
    UnbalancedParentheses(usize),
    /// An endpoint has no node name
    #[error("Endpoint is missing the node name on line {0}!")]
    MissingNode(usize),
    /// An endpoint has no interface name
    #[error("Endpoint is missing the interface name on line {0}!")]
    MissingInterface(usize),
}
