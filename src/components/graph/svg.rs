use std::fmt::Write;

use super::layout::Position;
use super::types::{GraphData, Subgraph};

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Prefix of every node element id in the drawn diagram.
pub const NODE_ID_PREFIX: &str = "node";

const NODE_RY: f64 = 14.0;
const MIN_RX: f64 = 20.0;
const CHAR_WIDTH: f64 = 7.0;
const MARGIN: f64 = 24.0;
const ARROW_SIZE: f64 = 8.0;
const EDGE_COLOR: &str = "rgba(100, 180, 255, 0.8)";

pub const EMPTY_SVG: &str = r#"<svg viewBox="0 0 1 1" xmlns="http://www.w3.org/2000/svg"></svg>"#;

pub fn node_element_id(id: &str) -> String {
	format!("{NODE_ID_PREFIX}{id}")
}

pub fn node_fill(index: usize) -> &'static str {
	COLORS[index % COLORS.len()]
}

pub fn error_markup(message: &str) -> String {
	format!(r#"<pre class="parse-error">{}</pre>"#, escape(message))
}

fn radii(label: &str) -> (f64, f64) {
	let rx = (label.chars().count() as f64 * CHAR_WIDTH / 2.0 + 8.0).max(MIN_RX);
	(rx, NODE_RY)
}

/// Distance from an ellipse centre to its outline along the unit vector (ux, uy).
fn outline(rx: f64, ry: f64, ux: f64, uy: f64) -> f64 {
	1.0 / ((ux / rx).powi(2) + (uy / ry).powi(2)).sqrt()
}

/// Draws `sub` with node centres at `positions` (one per picked node).
pub fn draw(data: &GraphData, sub: &Subgraph, positions: &[Position]) -> String {
	if sub.nodes.is_empty() {
		return EMPTY_SVG.to_string();
	}
	let shapes: Vec<(f64, f64)> = sub
		.nodes
		.iter()
		.map(|&idx| radii(data.nodes[idx].display_label()))
		.collect();

	let (mut min_x, mut min_y, mut max_x, mut max_y) = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
	for (p, &(rx, ry)) in positions.iter().zip(&shapes) {
		min_x = min_x.min(p.x - rx);
		min_y = min_y.min(p.y - ry);
		max_x = max_x.max(p.x + rx);
		max_y = max_y.max(p.y + ry);
	}
	let (width, height) = (max_x - min_x + 2.0 * MARGIN, max_y - min_y + 2.0 * MARGIN);

	let mut out = String::new();
	let _ = write!(
		out,
		r#"<svg viewBox="{:.1} {:.1} {:.1} {:.1}" width="{:.0}" height="{:.0}" xmlns="http://www.w3.org/2000/svg" class="diagram"><g class="viewport">"#,
		min_x - MARGIN,
		min_y - MARGIN,
		width,
		height,
		width,
		height
	);
	draw_edges(&mut out, sub, positions, &shapes);
	draw_nodes(&mut out, data, sub, positions, &shapes);
	out.push_str("</g></svg>");
	out
}

fn draw_edges(out: &mut String, sub: &Subgraph, positions: &[Position], shapes: &[(f64, f64)]) {
	for &(s, t) in &sub.links {
		let (n1, n2) = (&positions[s], &positions[t]);
		let (dx, dy) = (n2.x - n1.x, n2.y - n1.y);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		let start = outline(shapes[s].0, shapes[s].1, ux, uy);
		let end = outline(shapes[t].0, shapes[t].1, ux, uy);
		if start + end + ARROW_SIZE >= dist {
			continue;
		}

		let (tip_x, tip_y) = (n2.x - ux * end, n2.y - uy * end);
		let (back_x, back_y) = (tip_x - ux * ARROW_SIZE, tip_y - uy * ARROW_SIZE);
		let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
		let _ = write!(
			out,
			r#"<g class="edge"><line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{EDGE_COLOR}" stroke-width="1.5"/><polygon points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="{EDGE_COLOR}"/></g>"#,
			n1.x + ux * start,
			n1.y + uy * start,
			back_x,
			back_y,
			tip_x,
			tip_y,
			back_x + px,
			back_y + py,
			back_x - px,
			back_y - py,
		);
	}
}

fn draw_nodes(
	out: &mut String,
	data: &GraphData,
	sub: &Subgraph,
	positions: &[Position],
	shapes: &[(f64, f64)],
) {
	for (pos, &idx) in sub.nodes.iter().enumerate() {
		let node = &data.nodes[idx];
		let Position { x, y } = positions[pos];
		let (rx, ry) = shapes[pos];
		let _ = write!(
			out,
			r##"<g id="{}" class="node" fill="{}"><title>{}</title><ellipse cx="{x:.1}" cy="{y:.1}" rx="{rx:.1}" ry="{ry:.1}" stroke="#333"/><text x="{x:.1}" y="{:.1}" text-anchor="middle" fill="#fff" font-size="12">{}</text>"##,
			escape(&node_element_id(&node.id)),
			node_fill(idx),
			escape(&node.id),
			y + 4.0,
			escape(node.display_label()),
		);
		let hidden = sub.hidden_edges[pos];
		if hidden > 0 {
			let _ = write!(
				out,
				r##"<text class="hidden-edges" x="{:.1}" y="{:.1}" fill="#999" font-size="10">+{hidden}</text>"##,
				x + rx + 2.0,
				y - ry + 4.0,
			);
		}
		out.push_str("</g>");
	}
}

fn escape(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	for c in raw.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}
