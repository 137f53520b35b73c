//! Selects the visible subgraph for the current view.
//!
//! Filtering is a pure function of the full graph snapshot and the mode; it
//! always reads the original store and rebuilds the derived collections from
//! scratch. Re-filtering a previously filtered subgraph is unsupported.

use std::collections::HashSet;

use super::aggregate;
use super::types::{NodeKind, SankeyData, SankeyLink, SankeyNode};

/// How many genres the default view keeps.
pub const TOP_GENRE_COUNT: usize = 10;

/// The three ways the diagram can be narrowed.
///
/// `Single` carries the selected genre name; selecting a genre from the
/// control enters it, the reset action returns to `Top10`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterMode {
	Top10,
	All,
	Single(String),
}

impl FilterMode {
	/// The `<select>` option value representing this mode.
	pub fn control_value(&self) -> String {
		match self {
			FilterMode::Top10 => "top10".to_string(),
			FilterMode::All => "all".to_string(),
			FilterMode::Single(genre) => genre.clone(),
		}
	}

	/// Parse a `<select>` option value back into a mode.
	pub fn from_control_value(value: &str) -> Self {
		match value {
			"top10" => FilterMode::Top10,
			"all" => FilterMode::All,
			genre => FilterMode::Single(genre.to_string()),
		}
	}
}

/// The node/link subset produced by a filter pass.
///
/// Nodes hold all platforms first, then the kept genres, both in input order.
/// Links are induced: both endpoints are guaranteed to be in `nodes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Subgraph {
	pub nodes: Vec<SankeyNode>,
	pub links: Vec<SankeyLink>,
}

impl Subgraph {
	/// True when there is nothing to draw; the view shows a "no data" state.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() || self.links.is_empty()
	}
}

/// Compute the visible subgraph for `mode` over the full graph snapshot.
pub fn filter(data: &SankeyData, mode: &FilterMode) -> Subgraph {
	let platforms: Vec<SankeyNode> = data
		.nodes
		.iter()
		.filter(|n| n.kind == NodeKind::Platform)
		.cloned()
		.collect();

	let genres: Vec<SankeyNode> = match mode {
		FilterMode::Top10 => {
			let kept = top_genre_names(data, TOP_GENRE_COUNT);
			data.nodes
				.iter()
				.filter(|n| n.kind == NodeKind::Genre && kept.contains(n.name.as_str()))
				.cloned()
				.collect()
		}
		FilterMode::All => data
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Genre)
			.cloned()
			.collect(),
		FilterMode::Single(genre) => data
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Genre && n.name == *genre)
			.cloned()
			.collect(),
	};

	let mut nodes = platforms;
	nodes.extend(genres);

	// Induced-subgraph semantics: a link survives only when both of its
	// endpoints name a kept node.
	let kept_names: HashSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
	let links: Vec<SankeyLink> = data
		.links
		.iter()
		.filter(|l| {
			kept_names.contains(l.source.as_str()) && kept_names.contains(l.target.as_str())
		})
		.cloned()
		.collect();

	Subgraph { nodes, links }
}

/// Names of the `n` genres with the highest total incoming value.
///
/// Ranking uses a stable sort, so genres tied on total keep their input
/// order. With fewer than `n` genres present this keeps them all.
fn top_genre_names(data: &SankeyData, n: usize) -> HashSet<&str> {
	let mut ranked: Vec<(&str, f64)> = data
		.nodes
		.iter()
		.filter(|node| node.kind == NodeKind::Genre)
		.map(|node| {
			(
				node.name.as_str(),
				aggregate::total_incoming(&data.links, &node.name),
			)
		})
		.collect();
	ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
	ranked.truncate(n);
	ranked.into_iter().map(|(name, _)| name).collect()
}
