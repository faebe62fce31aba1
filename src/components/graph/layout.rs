use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::components::explorer::RenderError;

const SEED_RADIUS: f64 = 100.0;
const TICK: f32 = 0.016;
const MAX_TICKS: usize = 300;
/// Pairwise force evaluations we allow per layout. Large graphs get fewer
/// ticks, down to a single one.
const TICK_BUDGET: usize = 4_000_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

/// Runs the force simulation for `count` nodes and the given links (pairs of
/// node positions). Nodes start evenly spaced on a circle so the outcome only
/// depends on the input.
pub fn layout(count: usize, links: &[(usize, usize)]) -> Result<Vec<Position>, RenderError> {
	let mut graph: ForceGraph<usize, ()> = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});

	let mut indices = Vec::with_capacity(count);
	for i in 0..count {
		let angle = (i as f64) * 2.0 * PI / count as f64;
		let idx = graph.add_node(NodeData {
			x: (SEED_RADIUS * angle.cos()) as f32,
			y: (SEED_RADIUS * angle.sin()) as f32,
			mass: 10.0,
			is_anchor: false,
			user_data: i,
		});
		indices.push(idx);
	}
	for &(source, target) in links {
		if source != target {
			graph.add_edge(indices[source], indices[target], EdgeData::default());
		}
	}

	if count > 1 {
		for _ in 0..ticks(count) {
			graph.update(TICK);
		}
	}

	let mut positions = vec![Position { x: 0.0, y: 0.0 }; count];
	graph.visit_nodes(|node| {
		positions[node.data.user_data] = Position {
			x: node.x() as f64,
			y: node.y() as f64,
		};
	});
	if positions.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
		return Err(RenderError::Layout(format!("simulation diverged for {count} nodes")));
	}
	Ok(positions)
}

fn ticks(count: usize) -> usize {
	(TICK_BUDGET / (count * count).max(1)).clamp(1, MAX_TICKS)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::explorer::CapLimits;

	#[test]
	fn same_input_same_positions() {
		let links = [(0, 1), (1, 2), (2, 0), (2, 3)];
		assert_eq!(layout(4, &links).unwrap(), layout(4, &links).unwrap());
	}

	#[test]
	fn single_node_stays_finite() {
		let positions = layout(1, &[(0, 0)]).unwrap();
		assert_eq!(positions.len(), 1);
		assert!(positions[0].x.is_finite());
	}

	#[test]
	fn tick_count_shrinks_with_size() {
		assert_eq!(ticks(1), MAX_TICKS);
		assert!(ticks(500) < ticks(100));
		assert_eq!(ticks(2000), 1);
		assert_eq!(ticks(5000), 1);
	}

	#[test]
	fn largest_capped_layout_stays_within_budget() {
		let n = CapLimits::default().max_nodes.max as usize;
		assert!(ticks(n) * n * n <= TICK_BUDGET);
		for n in [2, 50, 115, 116, 300, 1000] {
			assert!(ticks(n) * n * n <= TICK_BUDGET, "{n} nodes");
		}
	}
}
