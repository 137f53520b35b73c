use serde::Deserialize;

/// Which side of the diagram a node lives on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
	Platform,
	Genre,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SankeyNode {
	pub name: String,
	pub kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SankeyLink {
	pub source: String,
	pub target: String,
	pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SankeyData {
	pub nodes: Vec<SankeyNode>,
	pub links: Vec<SankeyLink>,
}

impl SankeyData {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty() || self.links.is_empty()
	}

	pub fn genre_names(&self) -> impl Iterator<Item = &str> {
		self.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Genre)
			.map(|n| n.name.as_str())
	}
}
