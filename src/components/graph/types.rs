use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
}

impl GraphNode {
	pub fn display_label(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.id)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	pub source: usize,
	pub target: usize,
}

/// Parsed DOT document: nodes in order of first appearance, links by node index.
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
	index: HashMap<String, usize>,
}

impl GraphData {
	/// Returns the index of `id`, adding the node if it has not been seen yet.
	pub fn ensure_node(&mut self, id: &str) -> usize {
		if let Some(&idx) = self.index.get(id) {
			return idx;
		}
		let idx = self.nodes.len();
		self.nodes.push(GraphNode {
			id: id.to_string(),
			label: None,
		});
		self.index.insert(id.to_string(), idx);
		idx
	}

	pub fn set_label(&mut self, idx: usize, label: &str) {
		self.nodes[idx].label = Some(label.to_string());
	}

	pub fn add_link(&mut self, source: usize, target: usize) {
		self.links.push(GraphLink { source, target });
	}

	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn nodes_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edges_count(&self) -> usize {
		self.links.len()
	}
}

/// A bounded view of a [`GraphData`] picked for drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Subgraph {
	/// Indices into the source graph's nodes, in selection order.
	pub nodes: Vec<usize>,
	/// Pairs of positions into `nodes`.
	pub links: Vec<(usize, usize)>,
	/// Per selected node, the number of its edges left out of the view.
	pub hidden_edges: Vec<usize>,
}
