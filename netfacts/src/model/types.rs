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

//! Module containing the primitive value types of the configuration model

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// # IPv4 Address
/// The address is stored as an unsigned 32-bit integer, which is also the representation used in
/// every emitted fact. The dotted-quad notation is only used for display and (de)serialization.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Ip(pub u32);

impl Ip {
    /// The all-zero address, used where no address is configured.
    pub const ZERO: Ip = Ip(0);

    /// Returns the address as an unsigned integer
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Returns the last address of the prefix starting at `self` with the given length, i.e.,
    /// `self | (2^(32 - prefix_length) - 1)`. A prefix length of 32 returns `self`, and a prefix
    /// length of 0 returns `255.255.255.255`. Lengths above 32 are treated as 32.
    pub fn network_end(&self, prefix_length: u8) -> Ip {
        let host_bits = u32::MAX.checked_shr(prefix_length as u32).unwrap_or(0);
        Ip(self.0 | host_bits)
    }

    /// Returns the highest address matched by `self` under a Cisco-style wildcard mask, where a
    /// set bit means "don't care".
    pub fn wildcard_end(&self, wildcard: Ip) -> Ip {
        Ip(self.0 | wildcard.0)
    }

    /// Returns the number of contiguous leading one-bits. For a subnet mask, this is the prefix
    /// length.
    pub fn num_subnet_bits(&self) -> u8 {
        self.0.leading_ones() as u8
    }

    /// Returns `true` if all set bits of the wildcard mask are trailing bits (`0..01..1`). Only
    /// those wildcards describe a contiguous address range.
    pub fn is_trailing_wildcard(&self) -> bool {
        self.0 & self.0.wrapping_add(1) == 0
    }

    /// Returns the subnet mask for the given prefix length
    pub fn mask_of(prefix_length: u8) -> Ip {
        Ip(!Ip::ZERO.network_end(prefix_length).0)
    }
}

impl From<Ipv4Addr> for Ip {
    fn from(addr: Ipv4Addr) -> Self {
        Ip(u32::from(addr))
    }
}

impl From<Ip> for Ipv4Addr {
    fn from(ip: Ip) -> Self {
        Ipv4Addr::from(ip.0)
    }
}

impl From<u32> for Ip {
    fn from(x: u32) -> Self {
        Ip(x)
    }
}

impl FromStr for Ip {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Addr::from_str(s).map(Ip::from)
    }
}

impl fmt::Display for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv4Addr::from(*self))
    }
}

impl fmt::Debug for Ip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ip({})", self)
    }
}

impl Serialize for Ip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ip {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ipv4Addr::deserialize(deserializer).map(Ip::from)
    }
}

/// Inclusive range of integers, used for port ranges, VLAN ranges and prefix-length ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubRange {
    /// First element of the range
    pub start: u32,
    /// Last element of the range (inclusive)
    pub end: u32,
}

impl SubRange {
    /// Create a new range
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Range containing a single value
    pub fn single(x: u32) -> Self {
        Self { start: x, end: x }
    }
}

impl fmt::Display for SubRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Action of a line in an access list, route filter or community list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineAction {
    /// The line accepts whatever it matches
    Accept,
    /// The line rejects whatever it matches
    Reject,
    /// Any action the model does not know about
    #[serde(other)]
    Unrecognized,
}

impl Default for LineAction {
    fn default() -> Self {
        Self::Accept
    }
}

/// IP protocol number of an access-list line (`0` matches every IP protocol).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpProtocol(pub u8);

impl IpProtocol {
    /// Any IP protocol
    pub const IP: IpProtocol = IpProtocol(0);
    /// ICMP
    pub const ICMP: IpProtocol = IpProtocol(1);
    /// TCP
    pub const TCP: IpProtocol = IpProtocol(6);
    /// UDP
    pub const UDP: IpProtocol = IpProtocol(17);

    /// Returns true if the protocol has source and destination ports (TCP or UDP)
    pub fn has_ports(&self) -> bool {
        *self == Self::TCP || *self == Self::UDP
    }
}

impl fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IP => write!(f, "ip"),
            Self::ICMP => write!(f, "icmp"),
            Self::TCP => write!(f, "tcp"),
            Self::UDP => write!(f, "udp"),
            IpProtocol(x) => write!(f, "{}", x),
        }
    }
}

/// Returns the `high:low` notation of a 32-bit BGP community value.
pub fn community_str(community: u32) -> String {
    format!("{}:{}", community >> 16, community & 0xffff)
}
