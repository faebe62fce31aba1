use std::fmt::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::components::explorer::GraphGenerator;

/// Produces random `digraph` text. Edges first join nodes that have no edge
/// yet, so small edge counts spread over the whole graph.
#[derive(Clone, Debug)]
pub struct RandomDot {
	rng: SmallRng,
}

impl RandomDot {
	pub fn new(seed: u64) -> Self {
		Self {
			rng: SmallRng::seed_from_u64(seed),
		}
	}
}

impl GraphGenerator for RandomDot {
	fn render_random(&mut self, nodes_count: u32, edges_count: u32) -> String {
		let rng = &mut self.rng;
		let mut graph = "digraph x {".to_string();
		for i in 0..nodes_count {
			let _ = write!(graph, "N{i};");
		}
		if nodes_count > 0 {
			let count = nodes_count as usize;
			let mut unconnected = vec![true; count];
			let mut unconnected_count = count;
			for _ in 0..edges_count {
				let (from, to) = if unconnected_count == 0 {
					(rng.gen_range(0..count), rng.gen_range(0..count))
				} else {
					let start = rng.gen_range(0..count);
					let from = (start..count)
						.chain(0..start)
						.find(|&v| unconnected[v])
						.unwrap_or(start);
					unconnected[from] = false;
					unconnected_count -= 1;
					let to = loop {
						let v = rng.gen_range(0..count);
						if v != from || count <= 1 {
							break v;
						}
					};
					if unconnected[to] {
						unconnected[to] = false;
						unconnected_count -= 1;
					}
					if rng.gen_bool(0.5) { (from, to) } else { (to, from) }
				};
				let _ = write!(graph, "N{from} -> N{to};");
			}
		}
		graph.push('}');
		graph
	}
}
