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

use crate::model::config::{interface_vlan_number, is_null_interface};
use crate::model::filter::IpAccessListLine;
use crate::model::*;

fn ip(s: &str) -> Ip {
    s.parse().unwrap()
}

#[test]
fn network_end() {
    let net = ip("10.0.0.0");
    assert_eq!(net.network_end(24), ip("10.0.0.255"));
    assert_eq!(net.network_end(8), ip("10.255.255.255"));
    assert_eq!(net.network_end(32), net);
    assert_eq!(Ip::ZERO.network_end(0), Ip(u32::MAX));
    assert_eq!(net.network_end(0), Ip(u32::MAX));
}

#[test]
fn subnet_masks() {
    assert_eq!(Ip::mask_of(24), ip("255.255.255.0"));
    assert_eq!(Ip::mask_of(0), Ip::ZERO);
    assert_eq!(Ip::mask_of(32), Ip(u32::MAX));
    for len in 0..=32 {
        assert_eq!(Ip::mask_of(len).num_subnet_bits(), len);
    }
    let addr = InterfaceAddress::new(ip("10.0.1.5"), 24);
    assert_eq!(addr.prefix_length(), 24);
    assert_eq!(addr.network(), ip("10.0.1.0"));
}

#[test]
fn trailing_wildcards() {
    assert!(Ip(0).is_trailing_wildcard());
    assert!(Ip(0xff).is_trailing_wildcard());
    assert!(Ip(u32::MAX).is_trailing_wildcard());
    assert!(!Ip(0x00ff00ff).is_trailing_wildcard());
    assert!(!Ip(0x100).is_trailing_wildcard());

    let mut line = IpAccessListLine::default();
    assert!(line.is_valid());
    line.dst_wildcard = ip("0.0.0.255");
    assert!(line.is_valid());
    line.src_wildcard = ip("0.255.0.255");
    assert!(!line.is_valid());
}

#[test]
fn wildcard_end_keeps_fixed_bits() {
    let addrs = [ip("10.0.0.1"), ip("192.168.17.4"), Ip::ZERO, Ip(u32::MAX)];
    let wildcards = [Ip::ZERO, ip("0.0.0.255"), ip("0.255.0.255"), Ip(u32::MAX)];
    for addr in addrs.iter() {
        for w in wildcards.iter() {
            let end = addr.wildcard_end(*w);
            assert_eq!(end.0 & !w.0, addr.0 & !w.0);
            assert_eq!(end.0 | w.0, end.0);
        }
        for len in 0..=32 {
            assert!(addr.network_end(len) >= *addr);
        }
    }
}

#[test]
fn ip_display() {
    let addr = ip("10.0.0.1");
    assert_eq!(addr, Ip(167772161));
    assert_eq!(addr.as_u32(), 167772161);
    assert_eq!(addr.to_string(), "10.0.0.1");
    assert_eq!(format!("{:?}", addr), "Ip(10.0.0.1)");
    assert!("10.0.0".parse::<Ip>().is_err());
}

#[test]
fn communities() {
    assert_eq!(community_str(100), "0:100");
    assert_eq!(community_str((65000 << 16) | 100), "65000:100");
}

#[test]
fn vlan_numbers() {
    assert_eq!(interface_vlan_number("Vlan10"), Some(10));
    assert_eq!(interface_vlan_number("vlan.20"), Some(20));
    assert_eq!(interface_vlan_number("VLAN3"), Some(3));
    assert_eq!(interface_vlan_number("Vlan"), None);
    assert_eq!(interface_vlan_number("Vlan10a"), None);
    assert_eq!(interface_vlan_number("GigabitEthernet0/0"), None);
}

#[test]
fn null_interfaces() {
    assert!(is_null_interface("Null0"));
    assert!(is_null_interface("null_interface"));
    assert!(!is_null_interface("Loopback0"));
}

#[test]
fn deserialize_unknown_values() {
    let action: LineAction = serde_json::from_str("\"bogus\"").unwrap();
    assert_eq!(action, LineAction::Unrecognized);

    let c: Configuration = serde_json::from_str(
        r#"{
            "hostname": "r0",
            "vendor": "cisco",
            "interfaces": {
                "Gi0": { "switchport": { "mode": "private_vlan" } },
                "Gi1": { "active": true, "address": { "ip": "10.0.0.1", "mask": "255.255.255.0" } }
            }
        }"#,
    )
    .unwrap();
    assert_eq!(c.interfaces["Gi0"].switchport, SwitchportMode::Unrecognized);
    assert_eq!(c.interfaces["Gi1"].switchport, SwitchportMode::None);
    assert_eq!(c.interfaces["Gi1"].bandwidth, 1e9);
    assert_eq!(c.interfaces["Gi1"].address.unwrap().prefix_length(), 24);
}
