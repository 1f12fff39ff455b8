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

use crate::facts::{FactBins, FactFloat, FactType, QualifiedName};

#[test]
fn qualified_names() {
    let name = QualifiedName::new("r0", "ACL_IN");
    assert_eq!(name.to_string(), "r0:ACL_IN");
    assert_eq!(QualifiedName::DELIMITER, ':');
}

#[test]
fn fact_type_names() {
    for fact_type in FactType::ALL {
        assert_eq!(FactType::from_name(fact_type.name()), Some(*fact_type));
    }
    assert_eq!(
        FactType::SetIpAccessListLine_srcPortRange.name(),
        "SetIpAccessListLine_srcPortRange"
    );
    assert_eq!(FactType::from_name("SetUnknownFact"), None);
}

#[test]
fn push_and_append() {
    let mut a = FactBins::new();
    assert!(a.is_empty());
    a.push(FactType::SetNodeVendor, &[&"r0", &"cisco"]);
    a.push(FactType::SetOspfInterfaceCost, &[&"r0", &"Gi0", &10]);
    assert!(!a.is_empty());

    let mut b = FactBins::new();
    b.push(FactType::SetNodeVendor, &[&"r1", &"juniper"]);

    a.append(&b);
    assert_eq!(a.get(FactType::SetNodeVendor), "r0|cisco\nr1|juniper\n");
    assert_eq!(a.get_by_name("SetOspfInterfaceCost"), Some("r0|Gi0|10\n"));
    assert_eq!(a.get_by_name("SetUnknownFact"), None);
    assert_eq!(a.len_lines(FactType::SetNodeVendor), 2);
    assert_eq!(a.lines(FactType::SetActiveInt), Vec::<&str>::new());
}

#[test]
fn every_bin_exists() {
    let bins = FactBins::new();
    let names: Vec<&str> = bins.iter().map(|(name, _)| name).collect();
    assert_eq!(names.len(), FactType::ALL.len());
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn fact_float_notation() {
    let fmt = |x: f64| FactFloat(x).to_string();
    assert_eq!(fmt(1e9), "1.0E9");
    assert_eq!(fmt(1.5e7), "1.5E7");
    assert_eq!(fmt(-2.5e10), "-2.5E10");
    assert_eq!(fmt(1e-4), "1.0E-4");
    assert_eq!(fmt(1e6), "1000000.0");
    assert_eq!(fmt(9999999.0), "9999999.0");
    assert_eq!(fmt(100.0), "100.0");
    assert_eq!(fmt(123.25), "123.25");
    assert_eq!(fmt(0.001), "0.001");
    assert_eq!(fmt(0.0), "0.0");
    assert_eq!(fmt(f64::NAN), "NaN");
    assert_eq!(fmt(f64::INFINITY), "Infinity");
}
