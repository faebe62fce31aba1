use std::collections::VecDeque;

use super::types::{GraphData, Subgraph};

/// Picks at most `max_nodes` nodes breadth-first around `start` (edges are
/// walked in both directions), then keeps at most `max_edges` of the edges
/// between picked nodes in source order. Without a start, or once the start's
/// component is exhausted, the walk continues from the first unpicked node.
pub fn subgraph(data: &GraphData, start: Option<usize>, max_nodes: usize, max_edges: usize) -> Subgraph {
	let count = data.nodes_count();
	let mut adjacency = vec![Vec::new(); count];
	for link in &data.links {
		adjacency[link.source].push(link.target);
		if link.source != link.target {
			adjacency[link.target].push(link.source);
		}
	}

	let mut position: Vec<Option<usize>> = vec![None; count];
	let mut nodes = Vec::with_capacity(max_nodes.min(count));
	let mut queue = VecDeque::new();

	for seed in start.into_iter().chain(0..count) {
		if nodes.len() >= max_nodes {
			break;
		}
		if position[seed].is_some() {
			continue;
		}
		position[seed] = Some(nodes.len());
		nodes.push(seed);
		queue.push_back(seed);

		while let Some(idx) = queue.pop_front() {
			for &other in &adjacency[idx] {
				if nodes.len() >= max_nodes {
					queue.clear();
					break;
				}
				if position[other].is_none() {
					position[other] = Some(nodes.len());
					nodes.push(other);
					queue.push_back(other);
				}
			}
		}
	}

	let mut links = Vec::new();
	let mut hidden_edges = vec![0; nodes.len()];
	for link in &data.links {
		let (source, target) = (position[link.source], position[link.target]);
		match (source, target) {
			(Some(s), Some(t)) if links.len() < max_edges => links.push((s, t)),
			_ => {
				if let Some(s) = source {
					hidden_edges[s] += 1;
				}
				if let Some(t) = target.filter(|&t| Some(t) != source) {
					hidden_edges[t] += 1;
				}
			}
		}
	}

	Subgraph {
		nodes,
		links,
		hidden_edges,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph::parse::parse;

	#[test]
	fn neighborhood_around_focus() {
		let data = parse("a -> b; b -> c; c -> d; d -> e").unwrap();
		let c = data.node_index("c");
		let sub = subgraph(&data, c, 3, 10);
		let picked: Vec<_> = sub.nodes.iter().map(|&i| data.nodes[i].id.as_str()).collect();
		assert_eq!(picked, ["c", "b", "d"]);
		assert_eq!(sub.links, [(1, 0), (0, 2)]);
		assert_eq!(sub.hidden_edges, [0, 1, 1]);
	}

	#[test]
	fn whole_graph_when_within_caps() {
		let data = parse("digraph { a -> b; c -> d; e }").unwrap();
		let sub = subgraph(&data, None, 100, 100);
		assert_eq!(sub.nodes.len(), 5);
		assert_eq!(sub.links.len(), 2);
		assert!(sub.hidden_edges.iter().all(|&h| h == 0));
	}

	#[test]
	fn edge_cap_counts_dropped_edges_on_both_ends() {
		let data = parse("digraph { a -> b; a -> b; b -> b }").unwrap();
		let sub = subgraph(&data, None, 10, 1);
		assert_eq!(sub.links.len(), 1);
		assert_eq!(sub.hidden_edges, [1, 2]);
	}

	#[test]
	fn zero_caps_pick_nothing() {
		let data = parse("a -> b").unwrap();
		let sub = subgraph(&data, None, 0, 0);
		assert!(sub.nodes.is_empty());
		assert!(sub.links.is_empty());
	}
}
