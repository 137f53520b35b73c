//! Best-effort cleanup of raw node/link records into the canonical graph.
//!
//! Malformed records are dropped with a warning, suspect link values are
//! coerced, and the survivors keep their input order. This never fails: the
//! worst input yields an empty graph, which the view reports as "no data".

use std::collections::HashSet;

use log::warn;
use serde::Deserialize;

use super::types::{NodeKind, SankeyData, SankeyLink, SankeyNode};

/// Value assigned to a link whose `value` field is missing or unusable.
pub const FALLBACK_VALUE: f64 = 1.0;

/// A node record as it arrives from an external table, fields unchecked.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawNode {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default, rename = "type")]
	pub kind: Option<NodeKind>,
}

/// A link record as it arrives from an external table, fields unchecked.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawLink {
	#[serde(default)]
	pub source: Option<String>,
	#[serde(default)]
	pub target: Option<String>,
	#[serde(default)]
	pub value: Option<RawValue>,
}

/// Link values arrive either as numbers or as strings holding numbers.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
	Number(f64),
	Text(String),
}

/// Validate and coerce raw records into a [`SankeyData`].
///
/// Nodes without a non-empty name or a kind are dropped. Links without both
/// endpoints, or whose endpoints name no surviving node, are dropped. Link
/// values default to [`FALLBACK_VALUE`] when missing; textual values are
/// parsed as floats, falling back on the same constant when unparseable,
/// non-finite, or negative.
pub fn normalize(raw_nodes: Vec<RawNode>, raw_links: Vec<RawLink>) -> SankeyData {
	let mut nodes = Vec::with_capacity(raw_nodes.len());
	for raw in raw_nodes {
		match (raw.name, raw.kind) {
			(Some(name), Some(kind)) if !name.is_empty() => {
				nodes.push(SankeyNode { name, kind });
			}
			(name, kind) => {
				warn!("Dropping node record missing name or kind: {name:?} {kind:?}");
			}
		}
	}

	let mut links = Vec::with_capacity(raw_links.len());
	{
		let names: HashSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
		for raw in raw_links {
			let (Some(source), Some(target)) = (raw.source, raw.target) else {
				warn!("Dropping link record missing source or target");
				continue;
			};
			if !names.contains(source.as_str()) || !names.contains(target.as_str()) {
				warn!("Dropping link with unknown endpoint: {source} -> {target}");
				continue;
			}
			let value = coerce_value(raw.value, &source, &target);
			links.push(SankeyLink {
				source,
				target,
				value,
			});
		}
	}

	SankeyData { nodes, links }
}

fn coerce_value(raw: Option<RawValue>, source: &str, target: &str) -> f64 {
	match raw {
		None => {
			warn!("Link {source} -> {target} missing value, setting to {FALLBACK_VALUE}");
			FALLBACK_VALUE
		}
		Some(RawValue::Number(v)) if usable(v) => v,
		Some(RawValue::Number(v)) => {
			warn!("Link {source} -> {target} has unusable value {v}, setting to {FALLBACK_VALUE}");
			FALLBACK_VALUE
		}
		Some(RawValue::Text(s)) => match s.trim().parse::<f64>() {
			Ok(v) if usable(v) => v,
			_ => {
				warn!(
					"Failed to parse value {s:?} on link {source} -> {target}, setting to {FALLBACK_VALUE}"
				);
				FALLBACK_VALUE
			}
		},
	}
}

// Values must stay finite and non-negative once normalized.
fn usable(v: f64) -> bool {
	v.is_finite() && v >= 0.0
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw_node(name: &str, kind: NodeKind) -> RawNode {
		RawNode {
			name: Some(name.to_string()),
			kind: Some(kind),
		}
	}

	fn raw_link(source: &str, target: &str, value: Option<RawValue>) -> RawLink {
		RawLink {
			source: Some(source.to_string()),
			target: Some(target.to_string()),
			value,
		}
	}

	fn ab_nodes() -> Vec<RawNode> {
		vec![
			raw_node("A", NodeKind::Platform),
			raw_node("X", NodeKind::Genre),
		]
	}

	#[test]
	fn test_missing_value_defaults_to_one() {
		let data = normalize(ab_nodes(), vec![raw_link("A", "X", None)]);
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].value, 1.0);
		assert_eq!(data.links[0].source, "A");
		assert_eq!(data.links[0].target, "X");
	}

	#[test]
	fn test_textual_value_is_coerced() {
		let data = normalize(
			ab_nodes(),
			vec![raw_link("A", "X", Some(RawValue::Text("12.5".into())))],
		);
		assert_eq!(data.links[0].value, 12.5);
	}

	#[test]
	fn test_unparseable_value_falls_back() {
		for bad in ["lots", "", "NaN"] {
			let data = normalize(
				ab_nodes(),
				vec![raw_link("A", "X", Some(RawValue::Text(bad.into())))],
			);
			assert_eq!(data.links[0].value, FALLBACK_VALUE, "input {bad:?}");
		}
	}

	#[test]
	fn test_negative_and_nonfinite_numbers_fall_back() {
		for bad in [-3.0, f64::NAN, f64::INFINITY] {
			let data = normalize(
				ab_nodes(),
				vec![raw_link("A", "X", Some(RawValue::Number(bad)))],
			);
			assert_eq!(data.links[0].value, FALLBACK_VALUE, "input {bad}");
		}
	}

	#[test]
	fn test_zero_value_is_kept_not_defaulted() {
		// The JS source disagreed with itself here (fallback 1 when loading,
		// fallback 0 when summing). Normalization owns defaulting: an explicit
		// zero survives, and downstream sums never see a missing value.
		let data = normalize(
			ab_nodes(),
			vec![raw_link("A", "X", Some(RawValue::Number(0.0)))],
		);
		assert_eq!(data.links[0].value, 0.0);
	}

	#[test]
	fn test_nameless_node_is_dropped() {
		let mut nodes = ab_nodes();
		nodes.push(RawNode {
			name: Some(String::new()),
			kind: Some(NodeKind::Genre),
		});
		nodes.push(RawNode {
			name: None,
			kind: Some(NodeKind::Genre),
		});
		let data = normalize(nodes, vec![]);
		assert_eq!(data.nodes.len(), 2);
	}

	#[test]
	fn test_link_with_missing_endpoint_is_dropped() {
		let links = vec![
			RawLink {
				source: Some("A".into()),
				target: None,
				value: None,
			},
			RawLink {
				source: None,
				target: Some("X".into()),
				value: None,
			},
		];
		let data = normalize(ab_nodes(), links);
		assert!(data.links.is_empty());
	}

	#[test]
	fn test_link_to_unknown_node_is_dropped() {
		let data = normalize(
			ab_nodes(),
			vec![
				raw_link("A", "Nowhere", Some(RawValue::Number(2.0))),
				raw_link("Ghost", "X", Some(RawValue::Number(2.0))),
				raw_link("A", "X", Some(RawValue::Number(2.0))),
			],
		);
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.links[0].source, "A");
	}

	#[test]
	fn test_input_order_is_preserved() {
		let nodes = vec![
			raw_node("B", NodeKind::Platform),
			raw_node("A", NodeKind::Platform),
			raw_node("X", NodeKind::Genre),
		];
		let links = vec![
			raw_link("A", "X", Some(RawValue::Number(1.0))),
			raw_link("B", "X", Some(RawValue::Number(2.0))),
		];
		let data = normalize(nodes, links);
		let names: Vec<&str> = data.nodes.iter().map(|n| n.name.as_str()).collect();
		assert_eq!(names, ["B", "A", "X"]);
		assert_eq!(data.links[0].source, "A");
		assert_eq!(data.links[1].source, "B");
	}
}
