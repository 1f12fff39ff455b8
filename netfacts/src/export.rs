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

//! # JSON Export
//!
//! Diagnostic dump of the parts of a device configuration which are relevant for the OSPF facts.
//! The shape of the output is not part of the fact interface, and it may change.

use crate::model::routing::{GeneratedRoute, OspfProcess};
use crate::model::{Configuration, Interface};

use serde_json::{json, Map, Value};

/// Returns the JSON representation of a device. The `OspfProcess` key is only present if the
/// device runs OSPF.
///
/// ```
/// use netfacts::export::device_json;
/// use netfacts::model::Configuration;
///
/// let config = Configuration::new("r0", "cisco");
/// let value = device_json(&config);
/// assert_eq!(value["hostname"], "r0");
/// assert!(value.get("OspfProcess").is_none());
/// ```
pub fn device_json(config: &Configuration) -> Value {
    let mut object = Map::new();
    object.insert("hostname".to_string(), json!(config.hostname));
    if let Some(proc) = config.ospf_process.as_ref() {
        object.insert("OspfProcess".to_string(), ospf_json(config, proc));
    }
    Value::Object(object)
}

fn ospf_json(config: &Configuration, proc: &OspfProcess) -> Value {
    let areas: Vec<Value> = proc
        .areas
        .iter()
        .map(|(number, area)| {
            let interfaces: Vec<Value> = area
                .interfaces
                .iter()
                .map(|name| match config.interfaces.get(name) {
                    Some(iface) => interface_json(name, iface),
                    None => json!({ "name": name }),
                })
                .collect();
            json!({ "areaNumber": number, "interfaces": interfaces })
        })
        .collect();
    let outbound: Vec<Value> = proc
        .outbound_policy_maps
        .iter()
        .map(|p| json!({ "name": p.policy_map, "metricType": p.metric_type.to_string() }))
        .collect();
    let generated: Vec<Value> = proc.generated_routes.iter().map(generated_route_json).collect();
    json!({
        "routerId": proc.router_id.map(|id| id.to_string()),
        "referenceBandwidth": proc.reference_bandwidth,
        "generatedRoutes": generated,
        "outboundPolicyMaps": outbound,
        "areas": areas,
    })
}

fn interface_json(name: &str, iface: &Interface) -> Value {
    json!({
        "name": name,
        "active": iface.active,
        "address": iface.address.map(|a| format!("{}/{}", a.ip, a.prefix_length())),
        "bandwidth": iface.bandwidth,
        "ospfCost": iface.ospf_cost,
    })
}

fn generated_route_json(route: &GeneratedRoute) -> Value {
    json!({
        "prefix": route.prefix.to_string(),
        "prefixLength": route.prefix_length,
        "administrativeCost": route.administrative_cost,
        "generationPolicies": route.generation_policies,
    })
}
