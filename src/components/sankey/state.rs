//! View and interaction state for the diagram.
//!
//! The UI layer owns one [`SankeyState`] and calls into it from the event
//! handlers; every mode transition refilters from the original graph
//! snapshot and rebuilds the layout from scratch.

use super::filter::{self, FilterMode, Subgraph};
use super::layout::Layout;
use super::types::SankeyData;

/// What the pointer is currently over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
	Node(usize),
	Link(usize),
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub target: Option<HoverTarget>,
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node: Option<usize>,
	// Pointer offset from the grabbed node's top edge.
	pub grab_dy: f64,
}

/// Per-diagram state: the immutable graph snapshot plus the derived view.
pub struct SankeyState {
	pub data: SankeyData,
	pub mode: FilterMode,
	pub subgraph: Subgraph,
	pub layout: Layout,
	pub hover: HoverState,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
}

impl SankeyState {
	pub fn new(data: SankeyData, mode: FilterMode, width: f64, height: f64) -> Self {
		let subgraph = filter::filter(&data, &mode);
		let layout = Layout::compute(&subgraph, width, height);
		Self {
			data,
			mode,
			subgraph,
			layout,
			hover: HoverState::default(),
			drag: DragState::default(),
			width,
			height,
		}
	}

	/// Switch filter mode: full recomputation from the original snapshot,
	/// fresh layout, interaction state cleared.
	pub fn set_mode(&mut self, mode: FilterMode) {
		if self.mode == mode {
			return;
		}
		self.mode = mode;
		self.subgraph = filter::filter(&self.data, &self.mode);
		self.layout = Layout::compute(&self.subgraph, self.width, self.height);
		self.hover = HoverState::default();
		self.drag = DragState::default();
	}

	/// Relayout the current subgraph at new canvas dimensions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.layout = Layout::compute(&self.subgraph, width, height);
	}

	/// Hit-test nodes first, then ribbons.
	pub fn target_at(&self, x: f64, y: f64) -> Option<HoverTarget> {
		if let Some(idx) = self
			.layout
			.nodes
			.iter()
			.position(|n| n.contains(x, y))
		{
			return Some(HoverTarget::Node(idx));
		}
		self.link_at(x, y).map(HoverTarget::Link)
	}

	fn link_at(&self, x: f64, y: f64) -> Option<usize> {
		// Topmost ribbon wins, so scan in reverse draw order.
		for (i, link) in self.layout.links.iter().enumerate().rev() {
			let sx = self.layout.nodes[link.source].x1;
			let tx = self.layout.nodes[link.target].x0;
			if tx <= sx || x < sx || x > tx {
				continue;
			}
			let t = (x - sx) / (tx - sx);
			let yc = self.layout.ribbon_center_y(link, t);
			if (y - yc).abs() <= link.width.max(4.0) / 2.0 {
				return Some(i);
			}
		}
		None
	}

	/// Returns true when the hover target changed.
	pub fn set_hover(&mut self, target: Option<HoverTarget>, x: f64, y: f64) -> bool {
		let changed = self.hover.target != target;
		self.hover = HoverState { target, x, y };
		changed
	}

	pub fn has_hover(&self) -> bool {
		self.hover.target.is_some()
	}

	/// A ribbon is highlighted when it is hovered directly or touches the
	/// hovered node; with no hover everything draws at base opacity.
	pub fn is_link_highlighted(&self, idx: usize) -> bool {
		match self.hover.target {
			Some(HoverTarget::Link(l)) => l == idx,
			Some(HoverTarget::Node(n)) => {
				let link = &self.layout.links[idx];
				link.source == n || link.target == n
			}
			None => false,
		}
	}

	/// Grab the node under the pointer, if any. Returns whether a drag began.
	pub fn begin_drag(&mut self, x: f64, y: f64) -> bool {
		if let Some(idx) = self.layout.nodes.iter().position(|n| n.contains(x, y)) {
			self.drag = DragState {
				active: true,
				node: Some(idx),
				grab_dy: y - self.layout.nodes[idx].y0,
			};
			self.hover = HoverState::default();
			true
		} else {
			false
		}
	}

	/// Track a drag: vertical repositioning only, ribbons follow the node.
	pub fn drag_to(&mut self, y: f64) {
		if !self.drag.active {
			return;
		}
		if let Some(idx) = self.drag.node {
			self.layout.move_node(idx, y - self.drag.grab_dy);
		}
	}

	pub fn end_drag(&mut self) {
		self.drag = DragState::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::sankey::dataset;
	use crate::components::sankey::layout::{MARGIN_LEFT, MARGIN_TOP, NODE_WIDTH};
	use crate::components::sankey::types::NodeKind;

	const W: f64 = 1600.0;
	const H: f64 = 1000.0;

	fn state() -> SankeyState {
		SankeyState::new(dataset::hit_flows(), FilterMode::Top10, W, H)
	}

	#[test]
	fn test_initial_view_is_top10() {
		let s = state();
		assert_eq!(s.mode, FilterMode::Top10);
		let genres = s
			.subgraph
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Genre)
			.count();
		assert_eq!(genres, 10);
		assert_eq!(s.layout.nodes.len(), s.subgraph.nodes.len());
	}

	#[test]
	fn test_mode_transitions_refilter_from_original_graph() {
		let mut s = state();
		s.set_mode(FilterMode::Single("Jazz".to_string()));
		// Jazz is outside the top 10; selecting it must still work because
		// filtering reads the full snapshot, not the previous subgraph.
		assert!(s.subgraph.nodes.iter().any(|n| n.name == "Jazz"));
		assert!(s.subgraph.links.iter().all(|l| l.target == "Jazz"));

		s.set_mode(FilterMode::Top10);
		let back = filter::filter(&s.data, &FilterMode::Top10);
		assert_eq!(s.subgraph, back);
	}

	#[test]
	fn test_mode_transition_clears_interaction_state() {
		let mut s = state();
		s.set_hover(Some(HoverTarget::Node(0)), 5.0, 5.0);
		s.set_mode(FilterMode::All);
		assert!(!s.has_hover());
		assert!(!s.drag.active);
	}

	#[test]
	fn test_same_mode_is_a_noop() {
		let mut s = state();
		let node0_y = s.layout.nodes[0].y0;
		s.layout.move_node(0, node0_y + 50.0);
		s.set_mode(FilterMode::Top10);
		// Unchanged mode keeps the (dragged) layout.
		assert_eq!(s.layout.nodes[0].y0, node0_y + 50.0);
	}

	#[test]
	fn test_node_hit_testing() {
		let s = state();
		let n = &s.layout.nodes[0];
		let (cx, cy) = ((n.x0 + n.x1) / 2.0, (n.y0 + n.y1) / 2.0);
		assert_eq!(s.target_at(cx, cy), Some(HoverTarget::Node(0)));
		assert_eq!(s.target_at(MARGIN_LEFT - 50.0, MARGIN_TOP), None);
	}

	#[test]
	fn test_ribbon_hit_testing() {
		let s = state();
		let link = &s.layout.links[0];
		let sx = s.layout.nodes[link.source].x1;
		let tx = s.layout.nodes[link.target].x0;
		let x = (sx + tx) / 2.0;
		let y = s.layout.ribbon_center_y(link, (x - sx) / (tx - sx));
		match s.target_at(x, y) {
			Some(HoverTarget::Link(i)) => {
				// Some other ribbon may overlap here; whichever wins must
				// actually cover the probe point.
				let hit = &s.layout.links[i];
				let yc = s.layout.ribbon_center_y(hit, (x - sx) / (tx - sx));
				assert!((y - yc).abs() <= hit.width.max(4.0) / 2.0);
			}
			other => panic!("expected a ribbon hit, got {other:?}"),
		}
	}

	#[test]
	fn test_hover_highlights_touching_ribbons() {
		let mut s = state();
		s.set_hover(Some(HoverTarget::Node(0)), 0.0, 0.0);
		let name = s.layout.nodes[0].name.clone();
		for (i, link) in s.layout.links.iter().enumerate() {
			let touches = s.layout.nodes[link.source].name == name
				|| s.layout.nodes[link.target].name == name;
			assert_eq!(s.is_link_highlighted(i), touches);
		}
	}

	#[test]
	fn test_set_hover_reports_changes() {
		let mut s = state();
		assert!(s.set_hover(Some(HoverTarget::Node(1)), 1.0, 1.0));
		assert!(!s.set_hover(Some(HoverTarget::Node(1)), 2.0, 2.0));
		assert!(s.set_hover(None, 3.0, 3.0));
	}

	#[test]
	fn test_drag_moves_node_vertically_only() {
		let mut s = state();
		let n = &s.layout.nodes[0];
		let (x0, y0) = (n.x0, n.y0);
		let grab = (x0 + NODE_WIDTH / 2.0, y0 + 2.0);
		assert!(s.begin_drag(grab.0, grab.1));
		s.drag_to(grab.1 + 100.0);
		assert_eq!(s.layout.nodes[0].y0, y0 + 100.0);
		assert_eq!(s.layout.nodes[0].x0, x0);
		s.end_drag();
		assert!(!s.drag.active);
	}

	#[test]
	fn test_drag_on_empty_space_does_not_start() {
		let mut s = state();
		assert!(!s.begin_drag(MARGIN_LEFT - 50.0, MARGIN_TOP));
		s.drag_to(300.0);
		assert!(!s.drag.active);
	}
}
