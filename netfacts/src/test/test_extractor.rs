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

use crate::facts::FactType::*;
use crate::facts::{ConfigurationFactExtractor, ExtractionError, FactBins};
use crate::model::config::SwitchportEncapsulation;
use crate::model::filter::*;
use crate::model::policy_map::*;
use crate::model::routing::*;
use crate::model::*;

use maplit::{btreemap, btreeset};
use std::collections::BTreeSet;

fn ip(s: &str) -> Ip {
    s.parse().unwrap()
}

fn extract(c: &Configuration) -> (Result<(), ExtractionError>, FactBins, Vec<String>) {
    extract_with(c, &BTreeSet::new())
}

fn extract_with(
    c: &Configuration,
    communities: &BTreeSet<u32>,
) -> (Result<(), ExtractionError>, FactBins, Vec<String>) {
    let mut bins = FactBins::new();
    let mut extractor = ConfigurationFactExtractor::new(c, communities, &mut bins);
    let result = extractor.write_facts();
    let warnings = extractor.into_warnings();
    (result, bins, warnings)
}

fn active(address: Option<InterfaceAddress>) -> Interface {
    Interface { active: true, address, ..Default::default() }
}

#[test]
fn vendor_only() {
    let c = Configuration::new("r0", "cisco");
    let (result, bins, warnings) = extract(&c);
    assert_eq!(result, Ok(()));
    assert!(warnings.is_empty());
    assert_eq!(bins.get(SetNodeVendor), "r0|cisco\n");
    let total: usize = bins.iter().map(|(_, b)| b.lines().count()).sum();
    assert_eq!(total, 1);
}

#[test]
fn extraction_is_deterministic() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces.insert("Gi0".to_string(), active(Some(InterfaceAddress::new(ip("10.0.0.1"), 24))));
    c.interfaces.insert("Vlan10".to_string(), active(None));
    c.ospf_process = Some(OspfProcess::default());
    let original = c.clone();

    let (r1, bins1, w1) = extract(&c);
    let (r2, bins2, w2) = extract(&c);
    assert_eq!(r1, Ok(()));
    assert_eq!(r2, Ok(()));
    assert_eq!(bins1, bins2);
    assert_eq!(w1, w2);
    assert_eq!(c, original);
}

#[test]
fn ospf_interface_costs() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces = btreemap! {
        "FastEthernet0/0".to_string() => Interface { bandwidth: 1e7, ..Default::default() },
        "GigabitEthernet0/0".to_string() => Interface { bandwidth: 1e9, ..Default::default() },
        "Loopback0".to_string() => Interface { ospf_cost: Some(5), ..Default::default() },
        "Vlan10".to_string() => Interface { bandwidth: 1e7, ..Default::default() },
    };

    // no ospf process, no costs
    let (_, bins, _) = extract(&c);
    assert_eq!(bins.get(SetOspfInterfaceCost), "");

    c.ospf_process = Some(OspfProcess::default());
    let (result, bins, _) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(
        bins.lines(SetOspfInterfaceCost),
        vec![
            "r0|FastEthernet0/0|10",
            "r0|GigabitEthernet0/0|1",
            "r0|Loopback0|5",
            "r0|Vlan10|1",
        ]
    );
}

#[test]
fn ospf_cost_saturates() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces = btreemap! {
        "Gi0".to_string() => Interface { bandwidth: 0.0, ..Default::default() },
        "Gi1".to_string() => Interface { bandwidth: 1.0, ..Default::default() },
        "Gi2".to_string() => Interface { bandwidth: f64::NAN, ..Default::default() },
    };
    c.ospf_process = Some(OspfProcess::default());
    let (result, bins, _) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(
        bins.lines(SetOspfInterfaceCost),
        vec!["r0|Gi0|2147483647", "r0|Gi1|100000000", "r0|Gi2|1"]
    );
}

#[test]
fn flow_sink_and_fake_interfaces() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces.insert("GigabitEthernet0/0".to_string(), Interface::default());
    c.interfaces.insert("TenGigabitEthernet100/1".to_string(), Interface::default());
    c.interfaces.insert("TenGigabitEthernet200/1".to_string(), Interface::default());
    let (_, bins, _) = extract(&c);
    assert_eq!(bins.get(SetFlowSinkInterface), "r0|TenGigabitEthernet100/1\n");
    assert_eq!(
        bins.lines(SetFakeInterface),
        vec!["r0|TenGigabitEthernet100/1", "r0|TenGigabitEthernet200/1"]
    );
}

#[test]
fn interface_filters() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces.insert(
        "Gi0".to_string(),
        Interface {
            incoming_filter: Some("ACL_IN".to_string()),
            outgoing_filter: Some("ACL_OUT".to_string()),
            routing_policy: Some("PBR".to_string()),
            ..Default::default()
        },
    );
    let (_, bins, _) = extract(&c);
    assert_eq!(bins.get(SetInterfaceFilterIn), "r0|Gi0|r0:ACL_IN\n");
    assert_eq!(bins.get(SetInterfaceFilterOut), "r0|Gi0|r0:ACL_OUT\n");
    assert_eq!(bins.get(SetInterfaceRoutingPolicy), "r0|Gi0|r0:PBR\n");
}

#[test]
fn interface_addresses() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces.insert("Gi0".to_string(), active(Some(InterfaceAddress::new(ip("10.0.1.5"), 24))));
    c.interfaces.insert(
        "Gi1".to_string(),
        Interface {
            address: Some(InterfaceAddress::new(ip("10.0.0.1"), 32)),
            ..Default::default()
        },
    );
    let (_, bins, _) = extract(&c);
    assert_eq!(bins.get(SetActiveInt), "r0|Gi0\n");
    assert_eq!(
        bins.lines(SetNetwork),
        vec!["167772416|167772416|167772671|24", "167772161|167772161|167772161|32"]
    );
    assert_eq!(bins.lines(SetIpInt), vec!["r0|Gi0|167772421|24", "r0|Gi1|167772161|32"]);
}

#[test]
fn access_list_lines() {
    let mut c = Configuration::new("r0", "cisco");
    c.ip_access_lists.insert(
        "ACL".to_string(),
        IpAccessList {
            lines: vec![
                IpAccessListLine {
                    action: LineAction::Reject,
                    protocol: IpProtocol::TCP,
                    src_ip: ip("10.0.0.0"),
                    src_wildcard: ip("0.0.0.255"),
                    dst_ip: Ip::ZERO,
                    dst_wildcard: ip("255.255.255.255"),
                    src_port_ranges: vec![SubRange::new(1024, 65535)],
                    dst_port_ranges: vec![SubRange::single(80), SubRange::single(443)],
                },
                IpAccessListLine {
                    action: LineAction::Accept,
                    protocol: IpProtocol::ICMP,
                    dst_port_ranges: vec![SubRange::single(80)],
                    ..Default::default()
                },
            ],
        },
    );
    let (result, bins, warnings) = extract(&c);
    assert_eq!(result, Ok(()));
    assert!(warnings.is_empty());
    assert_eq!(
        bins.lines(SetIpAccessListLine),
        vec!["r0:ACL|0|6|167772160|167772415|0|4294967295", "r0:ACL|1|1|0|0|0|0"]
    );
    assert_eq!(bins.get(SetIpAccessListDenyLine), "r0:ACL|0\n");
    assert_eq!(
        bins.lines(SetIpAccessListLine_dstPortRange),
        vec!["r0:ACL|0|80|80", "r0:ACL|0|443|443"]
    );
    assert_eq!(bins.get(SetIpAccessListLine_srcPortRange), "r0:ACL|0|1024|65535\n");
}

#[test]
fn access_list_non_trailing_wildcard() {
    let mut c = Configuration::new("r0", "cisco");
    c.ip_access_lists.insert(
        "ACL".to_string(),
        IpAccessList {
            lines: vec![
                IpAccessListLine::default(),
                IpAccessListLine {
                    protocol: IpProtocol::TCP,
                    src_wildcard: ip("0.255.0.255"),
                    dst_port_ranges: vec![SubRange::single(22)],
                    ..Default::default()
                },
            ],
        },
    );
    let (result, bins, warnings) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(bins.lines(SetIpAccessListLine), vec!["r0:ACL|0|0|0|0|0|0"]);
    assert_eq!(bins.get(SetIpAccessListLine_dstPortRange), "");
    assert_eq!(
        warnings,
        vec!["WARNING: IpAccessList r0:ACL line 1: ignored (will never be matched) because we do \
              not know how to handle non-trailing wildcard bits"
            .to_string()]
    );
}

#[test]
fn access_list_unknown_action() {
    let mut c = Configuration::new("r0", "cisco");
    c.ip_access_lists.insert(
        "ACL".to_string(),
        IpAccessList {
            lines: vec![IpAccessListLine {
                action: LineAction::Unrecognized,
                ..Default::default()
            }],
        },
    );
    let (result, _, _) = extract(&c);
    assert_eq!(
        result,
        Err(ExtractionError::UnrecognizedLineAction { structure: "r0:ACL".to_string(), line: 0 })
    );
}

#[test]
fn switchport_settings() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces = btreemap! {
        "Gi0".to_string() => Interface {
            switchport: SwitchportMode::Access { vlan: 10 },
            ..Default::default()
        },
        "Gi1".to_string() => Interface {
            switchport: SwitchportMode::Trunk {
                encapsulation: SwitchportEncapsulation::Dot1q,
                native_vlan: 1,
                allowed_vlans: vec![SubRange::new(1, 10), SubRange::single(20)],
            },
            ..Default::default()
        },
        "Gi2".to_string() => Interface {
            switchport: SwitchportMode::DynamicAuto,
            ..Default::default()
        },
    };
    let (result, bins, _) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(bins.get(SetSwitchportAccess), "r0|Gi0|10\n");
    assert_eq!(bins.get(SetSwitchportTrunkEncapsulation), "r0|Gi1|dot1q\n");
    assert_eq!(bins.get(SetSwitchportTrunkNative), "r0|Gi1|1\n");
    assert_eq!(bins.lines(SetSwitchportTrunkAllows), vec!["r0|Gi1|1|10", "r0|Gi1|20|20"]);

    c.interfaces.get_mut("Gi2").unwrap().switchport = SwitchportMode::Unrecognized;
    let (result, _, _) = extract(&c);
    assert_eq!(
        result,
        Err(ExtractionError::UnrecognizedSwitchportMode {
            hostname: "r0".to_string(),
            interface: "Gi2".to_string()
        })
    );
}

#[test]
fn static_routes() {
    let mut c = Configuration::new("r0", "cisco");
    c.static_routes = vec![
        StaticRoute {
            prefix: ip("192.168.0.0"),
            prefix_length: 16,
            next_hop_ip: Some(ip("10.0.0.2")),
            next_hop_interface: None,
            distance: 1,
            tag: 0,
        },
        StaticRoute {
            prefix: ip("10.1.0.0"),
            prefix_length: 16,
            next_hop_ip: None,
            next_hop_interface: Some("Null0".to_string()),
            distance: 1,
            tag: 7,
        },
        StaticRoute {
            prefix: ip("10.2.0.0"),
            prefix_length: 16,
            next_hop_ip: Some(ip("10.0.0.2")),
            next_hop_interface: Some("Gi0".to_string()),
            distance: 5,
            tag: 0,
        },
    ];
    let (_, bins, _) = extract(&c);
    assert_eq!(
        bins.lines(SetNetwork),
        vec![
            "3232235520|3232235520|3232301055|16",
            "167837696|167837696|167903231|16",
            "167903232|167903232|167968767|16",
        ]
    );
    assert_eq!(bins.get(SetStaticRoute_flat), "r0|3232235520|3232301055|16|167772162|1|0\n");
    assert_eq!(
        bins.lines(SetStaticIntRoute_flat),
        vec![
            "r0|167837696|167903231|16|0|null_interface|1|7",
            "r0|167903232|167968767|16|167772162|Gi0|5|0",
        ]
    );
}

#[test]
fn ospf_process() {
    let mut c = Configuration::new("r0", "cisco");
    c.ospf_process = Some(OspfProcess {
        areas: btreemap! {
            0 => OspfArea { interfaces: vec!["Gi0".to_string(), "Gi1".to_string()] },
            1 => OspfArea { interfaces: vec!["Gi2".to_string()] },
        },
        router_id: Some(ip("1.1.1.1")),
        generated_routes: vec![GeneratedRoute {
            prefix: ip("10.0.0.0"),
            prefix_length: 8,
            administrative_cost: 0,
            generation_policies: vec!["GEN".to_string()],
        }],
        outbound_policy_maps: vec![OspfOutboundPolicy {
            policy_map: "REDIST".to_string(),
            metric_type: OspfMetricType::E1,
        }],
        ..Default::default()
    });
    let (result, bins, _) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(bins.lines(SetOspfInterface), vec!["r0|Gi0|0", "r0|Gi1|0", "r0|Gi2|1"]);
    assert_eq!(bins.get(SetOspfRouterId), "r0|16843009\n");
    assert_eq!(bins.get(SetOspfOutboundPolicyMap), "r0|r0:REDIST\n");
    assert_eq!(bins.get(SetPolicyMapOspfExternalRouteType), "r0:REDIST|ospfE1\n");
    assert_eq!(bins.get(SetOspfGeneratedRoute_flat), "r0|167772160|184549375|8\n");
    assert_eq!(bins.get(SetOspfGeneratedRoutePolicy_flat), "r0|167772160|184549375|8|r0:GEN\n");

    if let Some(proc) = c.ospf_process.as_mut() {
        proc.outbound_policy_maps[0].metric_type = OspfMetricType::Unrecognized;
    }
    let (result, _, _) = extract(&c);
    assert_eq!(
        result,
        Err(ExtractionError::UnrecognizedOspfMetricType { policy_map: "r0:REDIST".to_string() })
    );
}

#[test]
fn bgp_neighbors() {
    let mut c = Configuration::new("r0", "cisco");
    c.bgp_process = Some(BgpProcess {
        neighbors: vec![
            BgpNeighbor {
                address: ip("10.0.0.2"),
                local_as: 65000,
                remote_as: 65001,
                default_metric: 0,
                send_community: true,
                cluster_id: Some(1),
                inbound_policy_maps: vec!["IN".to_string()],
                outbound_policy_maps: vec!["OUT".to_string()],
                origination_policies: vec!["ORIG".to_string()],
                generated_routes: vec![GeneratedRoute {
                    prefix: Ip::ZERO,
                    prefix_length: 0,
                    administrative_cost: 0,
                    generation_policies: vec!["DEF".to_string()],
                }],
            },
            BgpNeighbor {
                address: ip("10.0.0.3"),
                local_as: 65000,
                remote_as: 65000,
                default_metric: 10,
                ..Default::default()
            },
        ],
        generated_routes: vec![GeneratedRoute {
            prefix: ip("10.0.0.0"),
            prefix_length: 8,
            administrative_cost: 0,
            generation_policies: vec![],
        }],
    });
    let (result, bins, _) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(bins.lines(SetBgpNeighborIp), vec!["r0|167772162", "r0|167772163"]);
    assert_eq!(bins.lines(SetLocalAs), vec!["r0|167772162|65000", "r0|167772163|65000"]);
    assert_eq!(bins.lines(SetRemoteAs), vec!["r0|167772162|65001", "r0|167772163|65000"]);
    assert_eq!(bins.lines(SetBgpNeighborDefaultMetric), vec!["r0|167772162|0", "r0|167772163|10"]);
    assert_eq!(bins.get(SetBgpNeighborSendCommunity), "r0|167772162\n");
    assert_eq!(bins.get(SetRouteReflectorClient), "r0|167772162|1\n");
    assert_eq!(bins.get(SetBgpImportPolicy), "r0|167772162|r0:IN\n");
    assert_eq!(bins.get(SetBgpExportPolicy), "r0|167772162|r0:OUT\n");
    assert_eq!(bins.get(SetBgpOriginationPolicy), "r0|167772162|r0:ORIG\n");
    assert_eq!(bins.get(SetBgpNeighborGeneratedRoute_flat), "r0|167772162|0|4294967295|0\n");
    assert_eq!(
        bins.get(SetBgpNeighborGeneratedRoutePolicy_flat),
        "r0|167772162|0|4294967295|0|r0:DEF\n"
    );
    assert_eq!(bins.get(SetBgpGeneratedRoute_flat), "r0|167772160|184549375|8\n");
    assert_eq!(bins.get(SetBgpGeneratedRoutePolicy_flat), "");
}

#[test]
fn device_generated_routes() {
    let mut c = Configuration::new("r0", "cisco");
    c.generated_routes = vec![GeneratedRoute {
        prefix: ip("10.0.0.0"),
        prefix_length: 8,
        administrative_cost: 200,
        generation_policies: vec!["AGG".to_string()],
    }];
    let (_, bins, _) = extract(&c);
    assert_eq!(bins.get(SetGeneratedRoute_flat), "r0|167772160|184549375|8|200\n");
    assert_eq!(bins.get(SetGeneratedRoutePolicy_flat), "r0|167772160|184549375|8|r0:AGG\n");
}

#[test]
fn link_load_limits_and_vlans() {
    let mut c = Configuration::new("r0", "cisco");
    c.interfaces = btreemap! {
        "Gi0".to_string() => Interface::default(),
        "Fa0".to_string() => Interface { bandwidth: 1e8, ..Default::default() },
        "Lo0".to_string() => Interface { bandwidth: 1.5e6, ..Default::default() },
        "Vlan10".to_string() => Interface::default(),
        "vlan.20".to_string() => Interface::default(),
    };
    let (_, bins, _) = extract(&c);
    assert_eq!(
        bins.lines(SetLinkLoadLimitIn),
        vec!["r0|Fa0|1.0E8", "r0|Gi0|1.0E9", "r0|Lo0|1500000.0", "r0|vlan.20|1.0E9"]
    );
    assert_eq!(bins.lines(SetLinkLoadLimitIn), bins.lines(SetLinkLoadLimitOut));
    assert_eq!(bins.lines(SetVlanInterface), vec!["r0|Vlan10|10", "r0|vlan.20|20"]);
}

#[test]
fn route_filters() {
    let mut c = Configuration::new("r0", "cisco");
    c.route_filter_lists.insert(
        "RF".to_string(),
        RouteFilterList {
            lines: vec![
                RouteFilterLine::LengthRange {
                    action: LineAction::Accept,
                    prefix: ip("10.0.0.0"),
                    prefix_length: 8,
                    length_range: SubRange::new(8, 24),
                },
                RouteFilterLine::LengthRange {
                    action: LineAction::Reject,
                    prefix: Ip::ZERO,
                    prefix_length: 0,
                    length_range: SubRange::new(0, 32),
                },
                RouteFilterLine::Through {
                    action: LineAction::Accept,
                    prefix: ip("10.0.0.0"),
                    prefix_length: 8,
                    through_prefix: ip("10.1.0.0"),
                    through_prefix_length: 16,
                },
            ],
        },
    );
    let (result, bins, warnings) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(
        bins.lines(SetRouteFilterLine),
        vec!["r0:RF|0|167772160|184549375|8|24", "r0:RF|1|0|4294967295|0|32"]
    );
    assert_eq!(bins.get(SetRouteFilterPermitLine), "r0:RF|0\n");
    assert_eq!(
        warnings,
        vec!["WARNING: r0:RF:2: route-filter through not implemented".to_string()]
    );
}

#[test]
fn community_lists() {
    let all = btreeset! {100, 200, (65000 << 16) | 100};
    let mut c = Configuration::new("r0", "cisco");
    c.community_lists.insert(
        "CL".to_string(),
        CommunityList {
            lines: vec![
                CommunityListLine::new(LineAction::Accept, "100$"),
                CommunityListLine::new(LineAction::Reject, "^65000:"),
                CommunityListLine::new(LineAction::Accept, "^1:"),
            ],
        },
    );
    let (result, bins, _) = extract_with(&c, &all);
    assert_eq!(result, Ok(()));
    assert_eq!(
        bins.lines(SetCommunityListLine),
        vec!["r0:CL|0|100", "r0:CL|0|4259840100", "r0:CL|1|4259840100"]
    );
    assert_eq!(bins.lines(SetCommunityListLinePermit), vec!["r0:CL|0", "r0:CL|2"]);
}

#[test]
fn community_list_invalid_regex() {
    let mut c = Configuration::new("r0", "cisco");
    c.community_lists.insert(
        "CL".to_string(),
        CommunityList { lines: vec![CommunityListLine::new(LineAction::Accept, "(")] },
    );
    let (result, _, _) = extract_with(&c, &btreeset! {100});
    match result {
        Err(ExtractionError::InvalidCommunityRegex { list, line, .. }) => {
            assert_eq!(list, "r0:CL");
            assert_eq!(line, 0);
        }
        r => panic!("unexpected result: {:?}", r),
    }
}

#[test]
fn route_filter_unknown_action() {
    let mut c = Configuration::new("r0", "cisco");
    c.route_filter_lists.insert(
        "RF".to_string(),
        RouteFilterList {
            lines: vec![
                RouteFilterLine::LengthRange {
                    action: LineAction::Accept,
                    prefix: ip("10.0.0.0"),
                    prefix_length: 8,
                    length_range: SubRange::new(8, 24),
                },
                RouteFilterLine::LengthRange {
                    action: LineAction::Unrecognized,
                    prefix: Ip::ZERO,
                    prefix_length: 0,
                    length_range: SubRange::new(0, 32),
                },
            ],
        },
    );
    let (result, _, _) = extract(&c);
    assert_eq!(
        result,
        Err(ExtractionError::UnrecognizedLineAction { structure: "r0:RF".to_string(), line: 1 })
    );
}

#[test]
fn community_list_unknown_action() {
    let mut c = Configuration::new("r0", "cisco");
    c.community_lists.insert(
        "CL".to_string(),
        CommunityList { lines: vec![CommunityListLine::new(LineAction::Unrecognized, "100$")] },
    );
    let (result, _, _) = extract_with(&c, &btreeset! {100});
    assert_eq!(
        result,
        Err(ExtractionError::UnrecognizedLineAction { structure: "r0:CL".to_string(), line: 0 })
    );
}

#[test]
fn policy_maps() {
    let mut c = Configuration::new("r0", "cisco");
    c.policy_maps.insert(
        "PM".to_string(),
        PolicyMap {
            clauses: vec![
                PolicyMapClauseBuilder::new()
                    .permit()
                    .match_community_list("CL")
                    .match_ip_access_list("ACL")
                    .match_route_filter_list("RF")
                    .match_neighbor(ip("10.0.0.2"))
                    .match_protocol(RoutingProtocol::Connected)
                    .match_tag(7)
                    .set_local_pref(200)
                    .set_metric(20)
                    .add_community(100)
                    .set_community(200)
                    .delete_community("CL")
                    .set_next_hop(ip("10.0.0.1"))
                    .set_origin_type(OriginType::Igp)
                    .build(),
                PolicyMapClauseBuilder::new()
                    .deny()
                    .add_match(PolicyMapMatchLine::AsPathAccessList(vec!["AP".to_string()]))
                    .add_set(PolicyMapSetLine::AsPathPrepend(vec![65000, 65000]))
                    .add_set(PolicyMapSetLine::CommunityNone)
                    .build(),
            ],
        },
    );
    let (result, bins, warnings) = extract(&c);
    assert_eq!(result, Ok(()));
    assert_eq!(bins.get(SetPolicyMapClausePermit), "r0:PM|0\n");
    assert_eq!(bins.get(SetPolicyMapClauseDeny), "r0:PM|1\n");
    assert_eq!(bins.get(SetPolicyMapClauseMatchCommunityList), "r0:PM|0|r0:CL\n");
    assert_eq!(bins.get(SetPolicyMapClauseMatchAcl), "r0:PM|0|r0:ACL\n");
    assert_eq!(bins.get(SetPolicyMapClauseMatchRouteFilter), "r0:PM|0|r0:RF\n");
    assert_eq!(bins.get(SetPolicyMapClauseMatchNeighbor), "r0:PM|0|167772162\n");
    assert_eq!(bins.get(SetPolicyMapClauseMatchProtocol), "r0:PM|0|connected\n");
    assert_eq!(bins.get(SetPolicyMapClauseMatchTag), "r0:PM|0|7\n");
    assert_eq!(bins.get(SetPolicyMapClauseSetLocalPreference), "r0:PM|0|200\n");
    assert_eq!(bins.get(SetPolicyMapClauseSetMetric), "r0:PM|0|20\n");
    assert_eq!(bins.get(SetPolicyMapClauseAddCommunity), "r0:PM|0|100\n");
    assert_eq!(bins.get(SetPolicyMapClauseSetCommunity), "r0:PM|0|200\n");
    assert_eq!(bins.get(SetPolicyMapClauseDeleteCommunity), "r0:PM|0|r0:CL\n");
    assert_eq!(bins.get(SetPolicyMapClauseSetNextHopIp), "r0:PM|0|167772161\n");
    assert_eq!(bins.get(SetPolicyMapClauseSetOriginType), "r0:PM|0|IGP\n");
    assert_eq!(
        warnings,
        vec![
            "WARNING: r0:PM:1: Policy map matching of AS path acls not implemented!".to_string(),
            "WARNING: r0:PM:1: AS_PATH_PREPEND not implemented".to_string(),
            "WARNING: r0:PM:1: COMMUNITY_NONE not implemented".to_string(),
        ]
    );
}

#[test]
fn policy_map_unknown_action() {
    let mut c = Configuration::new("r0", "cisco");
    c.policy_maps.insert(
        "PM".to_string(),
        PolicyMap {
            clauses: vec![
                PolicyMapClauseBuilder::new().permit().build(),
                PolicyMapClauseBuilder::new().action(PolicyMapAction::Unrecognized).build(),
            ],
        },
    );
    let (result, _, _) = extract(&c);
    assert_eq!(
        result,
        Err(ExtractionError::UnrecognizedPolicyMapAction {
            policy_map: "r0:PM".to_string(),
            clause: 1
        })
    );
}
