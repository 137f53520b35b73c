//! Canvas drawing: ribbons, node rectangles, labels, star ratings, and the
//! hover info panel. The whole canvas is repainted on every update.

use web_sys::CanvasRenderingContext2d;

use super::aggregate::{self, Direction};
use super::state::{HoverTarget, SankeyState};
use super::types::NodeKind;

const BACKGROUND: &str = "#fafafa";
const GENRE_FILL: &str = "#ececec";
const GENRE_STROKE: &str = "#cccccc";
const TEXT_COLOR: &str = "#333333";
const MUTED_TEXT: &str = "#666666";
const STAR_COLOR: &str = "#ffbf00";
const FALLBACK_COLOR: &str = "#999999";

const BASE_RIBBON_ALPHA: f64 = 0.7;
const HIGHLIGHT_RIBBON_ALPHA: f64 = 1.0;
const DIMMED_RIBBON_ALPHA: f64 = 0.1;

const PANEL_WIDTH: f64 = 220.0;
const PANEL_LINE_HEIGHT: f64 = 16.0;

fn platform_color(name: &str) -> &'static str {
	match name {
		"Spotify" => "#40a340",
		"Apple Music" => "#e94335",
		"YouTube" => "#e33810",
		"Amazon" => "#57a7f0",
		"Deezer" => "#f06ebd",
		"SiriusXM" => "#282faf",
		"Pandora" => "#4169e1",
		"TikTok" => "#000000",
		"Shazam" => "#55a2f0",
		_ => FALLBACK_COLOR,
	}
}

/// Repaint the full diagram for the current state.
pub fn render(state: &SankeyState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	if state.data.is_empty() {
		draw_message(state, ctx, "Error: no data available for visualization");
		return;
	}
	if state.subgraph.is_empty() {
		draw_message(state, ctx, "No hit songs match this selection");
		return;
	}

	draw_ribbons(state, ctx);
	draw_nodes(state, ctx);
	draw_panel(state, ctx);
}

fn draw_message(state: &SankeyState, ctx: &CanvasRenderingContext2d, message: &str) {
	ctx.set_fill_style_str(MUTED_TEXT);
	ctx.set_font("16px sans-serif");
	ctx.set_text_align("center");
	let _ = ctx.fill_text(message, state.width / 2.0, state.height / 2.0);
}

fn draw_ribbons(state: &SankeyState, ctx: &CanvasRenderingContext2d) {
	let has_hover = state.has_hover();
	for (i, link) in state.layout.links.iter().enumerate() {
		let source = &state.layout.nodes[link.source];
		let target = &state.layout.nodes[link.target];
		let (sy, ty) = state.layout.link_end_y(link);

		let alpha = if !has_hover {
			BASE_RIBBON_ALPHA
		} else if state.is_link_highlighted(i) {
			HIGHLIGHT_RIBBON_ALPHA
		} else {
			DIMMED_RIBBON_ALPHA
		};
		ctx.set_global_alpha(alpha);
		ctx.set_stroke_style_str(platform_color(&source.name));
		ctx.set_line_width(link.width.max(1.0));

		let xm = (source.x1 + target.x0) / 2.0;
		ctx.begin_path();
		ctx.move_to(source.x1, sy);
		ctx.bezier_curve_to(xm, sy, xm, ty, target.x0, ty);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &SankeyState, ctx: &CanvasRenderingContext2d) {
	for node in &state.layout.nodes {
		let (w, h) = (node.x1 - node.x0, node.height());
		match node.kind {
			NodeKind::Platform => {
				ctx.set_fill_style_str(platform_color(&node.name));
				ctx.fill_rect(node.x0, node.y0, w, h);
			}
			NodeKind::Genre => {
				ctx.set_fill_style_str(GENRE_FILL);
				ctx.fill_rect(node.x0, node.y0, w, h);
				ctx.set_stroke_style_str(GENRE_STROKE);
				ctx.set_line_width(1.0);
				ctx.stroke_rect(node.x0, node.y0, w, h);
			}
		}

		let mid = node.y0 + h / 2.0 + 4.0;
		ctx.set_fill_style_str(TEXT_COLOR);
		match node.kind {
			NodeKind::Platform => {
				ctx.set_font("bold 12px sans-serif");
				ctx.set_text_align("right");
				let _ = ctx.fill_text(&node.name, node.x0 - 10.0, mid);
			}
			NodeKind::Genre => {
				ctx.set_font("12px sans-serif");
				ctx.set_text_align("left");
				let _ = ctx.fill_text(&node.name, node.x1 + 5.0, mid);

				// Star rating reflects the full dataset, not the current
				// filter, so a genre keeps its stars in single-genre view.
				let tier = aggregate::star_tier(&state.data.links, &node.name);
				ctx.set_font("16px sans-serif");
				ctx.set_fill_style_str(STAR_COLOR);
				let _ = ctx.fill_text(tier.glyph(), node.x1 + 120.0, mid + 1.0);
			}
		}
	}
}

fn draw_panel(state: &SankeyState, ctx: &CanvasRenderingContext2d) {
	let Some(target) = state.hover.target else {
		return;
	};

	let (title, accent, lines) = match target {
		HoverTarget::Link(i) => link_panel(state, i),
		HoverTarget::Node(i) => node_panel(state, i),
	};

	let height = 30.0 + PANEL_LINE_HEIGHT * lines.len() as f64 + 8.0;
	let mut x = state.hover.x + 10.0;
	let mut y = state.hover.y - 28.0;
	if x + PANEL_WIDTH > state.width {
		x = (state.hover.x - PANEL_WIDTH - 10.0).max(0.0);
	}
	if y + height > state.height {
		y = (state.height - height).max(0.0);
	}
	y = y.max(0.0);

	ctx.set_global_alpha(0.95);
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(x, y, PANEL_WIDTH, height);
	ctx.set_stroke_style_str(accent);
	ctx.set_line_width(2.0);
	ctx.stroke_rect(x, y, PANEL_WIDTH, height);
	ctx.set_global_alpha(1.0);

	ctx.set_text_align("left");
	ctx.set_font("bold 14px sans-serif");
	ctx.set_fill_style_str(accent);
	let _ = ctx.fill_text(&title, x + 10.0, y + 20.0);

	ctx.set_font("12px sans-serif");
	ctx.set_fill_style_str(TEXT_COLOR);
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, x + 10.0, y + 30.0 + PANEL_LINE_HEIGHT * (i as f64 + 1.0));
	}
}

fn link_panel(state: &SankeyState, idx: usize) -> (String, &'static str, Vec<String>) {
	let link = &state.layout.links[idx];
	let source = &state.layout.nodes[link.source].name;
	let target = &state.layout.nodes[link.target].name;

	// Contribution is measured against the platform's hits in the full
	// dataset, so the percentage is stable across filter modes.
	let platform_total = aggregate::total_outgoing(&state.data.links, source);
	let pct = aggregate::contribution_percent(link.value, platform_total);

	(
		format!("{source} → {target}"),
		platform_color(source),
		vec![
			format!("Hit Songs: {}", link.value),
			format!("Contribution: {pct}% of {source}'s hits"),
		],
	)
}

fn node_panel(state: &SankeyState, idx: usize) -> (String, &'static str, Vec<String>) {
	let node = &state.layout.nodes[idx];
	let links = &state.subgraph.links;
	match node.kind {
		NodeKind::Genre => {
			let total = aggregate::total_incoming(links, &node.name);
			let platforms = aggregate::connected_count(links, &node.name, Direction::Incoming);
			let tier = aggregate::star_tier(&state.data.links, &node.name);
			(
				node.name.clone(),
				TEXT_COLOR,
				vec![
					format!("Total Hits: {total}"),
					format!("Platforms: {platforms}"),
					format!("Rating: {}", tier.glyph()),
				],
			)
		}
		NodeKind::Platform => {
			let total = aggregate::total_outgoing(links, &node.name);
			let genres = aggregate::connected_count(links, &node.name, Direction::Outgoing);
			let mut lines = vec![
				format!("Total Hits: {total}"),
				format!("Genres: {genres}"),
				"Top Genres:".to_string(),
			];
			for l in aggregate::top_n(links, &node.name, 5, Direction::Outgoing) {
				let pct = aggregate::contribution_percent(l.value, total);
				lines.push(format!("  {}: {pct}%", l.target));
			}
			(node.name.clone(), platform_color(&node.name), lines)
		}
	}
}
