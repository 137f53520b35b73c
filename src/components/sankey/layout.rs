//! Band geometry for the two-column diagram.
//!
//! Platforms stack on the left, genres on the right; node heights and ribbon
//! widths share one scale so a ribbon is equally thick at both ends. The
//! integer indices here are assigned per layout pass and are not stable
//! across re-filters.

use std::collections::HashMap;

use super::aggregate;
use super::filter::Subgraph;
use super::types::NodeKind;

pub const NODE_WIDTH: f64 = 20.0;
pub const NODE_PADDING: f64 = 15.0;

pub const MARGIN_TOP: f64 = 10.0;
pub const MARGIN_RIGHT: f64 = 240.0;
pub const MARGIN_BOTTOM: f64 = 10.0;
pub const MARGIN_LEFT: f64 = 100.0;

// A node whose throughput rounds to nothing still gets a visible sliver.
const MIN_NODE_HEIGHT: f64 = 1.0;

/// A positioned node rectangle.
#[derive(Clone, Debug)]
pub struct LayoutNode {
	pub name: String,
	pub kind: NodeKind,
	pub x0: f64,
	pub y0: f64,
	pub x1: f64,
	pub y1: f64,
}

impl LayoutNode {
	pub fn height(&self) -> f64 {
		self.y1 - self.y0
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
	}
}

/// A positioned ribbon between two node indices.
///
/// `s_off`/`t_off` are the ribbon-center offsets from each node's top edge,
/// so endpoints follow the node when it is dragged.
#[derive(Clone, Debug)]
pub struct LayoutLink {
	pub source: usize,
	pub target: usize,
	pub s_off: f64,
	pub t_off: f64,
	pub width: f64,
	pub value: f64,
}

/// The positioned subgraph for one render pass.
#[derive(Clone, Debug, Default)]
pub struct Layout {
	pub nodes: Vec<LayoutNode>,
	pub links: Vec<LayoutLink>,
	// Canvas height at compute time; drag clamping measures against it.
	pub height: f64,
}

impl Layout {
	/// Position `sub` on a `width` x `height` canvas.
	pub fn compute(sub: &Subgraph, width: f64, height: f64) -> Layout {
		let inner_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0);

		// Throughput per node: platforms measure outgoing, genres incoming.
		let throughput: Vec<f64> = sub
			.nodes
			.iter()
			.map(|n| match n.kind {
				NodeKind::Platform => aggregate::total_outgoing(&sub.links, &n.name),
				NodeKind::Genre => aggregate::total_incoming(&sub.links, &n.name),
			})
			.collect();

		let platform_idx: Vec<usize> = column_indices(sub, NodeKind::Platform);
		let genre_idx: Vec<usize> = column_indices(sub, NodeKind::Genre);

		// One value-to-pixels scale for both columns keeps ribbon ends equal.
		let ky = [&platform_idx, &genre_idx]
			.iter()
			.filter_map(|column| column_scale(column, &throughput, inner_height))
			.fold(f64::INFINITY, f64::min);
		let ky = if ky.is_finite() { ky } else { 0.0 };

		let mut nodes: Vec<Option<LayoutNode>> = vec![None; sub.nodes.len()];
		let genre_x1 = (width - MARGIN_RIGHT).max(MARGIN_LEFT + 2.0 * NODE_WIDTH);
		place_column(
			sub,
			&platform_idx,
			&throughput,
			ky,
			MARGIN_LEFT,
			inner_height,
			&mut nodes,
		);
		place_column(
			sub,
			&genre_idx,
			&throughput,
			ky,
			genre_x1 - NODE_WIDTH,
			inner_height,
			&mut nodes,
		);
		// Every node lands in exactly one column, so no slot stays empty.
		let nodes: Vec<LayoutNode> = nodes.into_iter().flatten().collect();

		let index_of: HashMap<&str, usize> = nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.name.as_str(), i))
			.collect();

		let mut out_used = vec![0.0f64; nodes.len()];
		let mut in_used = vec![0.0f64; nodes.len()];
		let mut links = Vec::with_capacity(sub.links.len());
		for l in &sub.links {
			let (Some(&source), Some(&target)) = (
				index_of.get(l.source.as_str()),
				index_of.get(l.target.as_str()),
			) else {
				continue;
			};
			let ribbon = l.value * ky;
			links.push(LayoutLink {
				source,
				target,
				s_off: out_used[source] + ribbon / 2.0,
				t_off: in_used[target] + ribbon / 2.0,
				width: ribbon,
				value: l.value,
			});
			out_used[source] += ribbon;
			in_used[target] += ribbon;
		}

		Layout {
			nodes,
			links,
			height,
		}
	}

	/// Ribbon-center y coordinates at the source and target ends.
	pub fn link_end_y(&self, link: &LayoutLink) -> (f64, f64) {
		(
			self.nodes[link.source].y0 + link.s_off,
			self.nodes[link.target].y0 + link.t_off,
		)
	}

	/// Ribbon-center y at parameter `t` in [0, 1] along the curve.
	///
	/// Matches the cubic drawn by the renderer (control points at the
	/// horizontal midpoint), which keeps hit-testing and drawing in sync.
	pub fn ribbon_center_y(&self, link: &LayoutLink, t: f64) -> f64 {
		let (sy, ty) = self.link_end_y(link);
		let u = 1.0 - t;
		sy * (u * u * u + 3.0 * u * u * t) + ty * (3.0 * u * t * t + t * t * t)
	}

	/// Move a node's top edge to `y0`, clamped to the drawable area.
	pub fn move_node(&mut self, idx: usize, y0: f64) {
		let Some(node) = self.nodes.get_mut(idx) else {
			return;
		};
		let h = node.height();
		let clamped = y0.clamp(MARGIN_TOP, (self.height - MARGIN_BOTTOM - h).max(MARGIN_TOP));
		node.y0 = clamped;
		node.y1 = clamped + h;
	}
}

fn column_indices(sub: &Subgraph, kind: NodeKind) -> Vec<usize> {
	sub.nodes
		.iter()
		.enumerate()
		.filter(|(_, n)| n.kind == kind)
		.map(|(i, _)| i)
		.collect()
}

fn column_scale(column: &[usize], throughput: &[f64], inner_height: f64) -> Option<f64> {
	if column.is_empty() {
		return None;
	}
	let total: f64 = column.iter().map(|&i| throughput[i]).sum();
	if total <= 0.0 {
		return None;
	}
	let available = inner_height - NODE_PADDING * (column.len().saturating_sub(1)) as f64;
	Some((available / total).max(0.0))
}

fn place_column(
	sub: &Subgraph,
	column: &[usize],
	throughput: &[f64],
	ky: f64,
	x0: f64,
	inner_height: f64,
	nodes: &mut [Option<LayoutNode>],
) {
	let heights: Vec<f64> = column
		.iter()
		.map(|&i| (throughput[i] * ky).max(MIN_NODE_HEIGHT))
		.collect();
	let used: f64 =
		heights.iter().sum::<f64>() + NODE_PADDING * column.len().saturating_sub(1) as f64;
	let mut y = MARGIN_TOP + ((inner_height - used) / 2.0).max(0.0);

	for (&i, &h) in column.iter().zip(&heights) {
		let n = &sub.nodes[i];
		nodes[i] = Some(LayoutNode {
			name: n.name.clone(),
			kind: n.kind,
			x0,
			y0: y,
			x1: x0 + NODE_WIDTH,
			y1: y + h,
		});
		y += h + NODE_PADDING;
	}
}
