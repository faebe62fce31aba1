/// One search suggestion: node id and its display label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchResultItem {
	pub id: String,
	pub label: String,
}

/// Node/edge caps bounding the rendered subgraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caps {
	pub max_nodes: u32,
	pub max_edges: u32,
}

/// Everything that can change what the explorer shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExplorerEvent {
	/// Parse the given text and render it.
	Submit(String),
	/// Text arrived from outside the input box (file, host page); it is shown
	/// in the input and submitted.
	FileLoaded(String),
	/// Re-render anchored at a node, e.g. a picked suggestion.
	Focus(String),
	/// Refresh the suggestion list for the query.
	Search(String),
	/// A diagram node was clicked.
	ActivateNode(String),
	/// Generate a random graph with the requested (unclamped) sizes.
	Generate { nodes: i64, edges: i64 },
	/// New (unclamped) render caps.
	SetCaps { max_nodes: i64, max_edges: i64 },
}
