use log::debug;

use super::error::ParseError;
use super::layout::layout;
use super::parse::parse;
use super::subgraph::subgraph;
use super::svg::{self, EMPTY_SVG};
use super::types::GraphData;
use crate::components::explorer::{Caps, GraphEngine, GraphHandle, RenderError, SearchResultItem};

/// Parse result held by the explorer session.
#[derive(Debug)]
pub struct DotHandle {
	graph: Result<GraphData, ParseError>,
}

impl DotHandle {
	pub fn graph(&self) -> Option<&GraphData> {
		self.graph.as_ref().ok()
	}
}

impl GraphHandle for DotHandle {
	fn has_error(&self) -> bool {
		self.graph.is_err()
	}

	fn contains_node(&self, id: &str) -> bool {
		self.graph().is_some_and(|g| g.node_index(id).is_some())
	}

	fn summary(&self) -> String {
		match &self.graph {
			Ok(g) => format!("{} nodes, {} edges", g.nodes_count(), g.edges_count()),
			Err(e) => e.to_string(),
		}
	}
}

/// DOT parser plus force-directed SVG drawing of a bounded neighborhood.
#[derive(Clone, Copy, Debug, Default)]
pub struct DotEngine;

impl GraphEngine for DotEngine {
	type Handle = DotHandle;

	/// Logging is left to the caller, which reports [`GraphHandle::summary`].
	fn parse(&self, text: &str) -> DotHandle {
		DotHandle { graph: parse(text) }
	}

	fn render(&self, handle: &DotHandle, focus: Option<&str>, caps: Caps) -> Result<String, RenderError> {
		let data = match &handle.graph {
			Err(e) => return Ok(svg::error_markup(&e.to_string())),
			Ok(data) => data,
		};
		if data.nodes_count() == 0 || caps.max_nodes == 0 {
			return Ok(EMPTY_SVG.to_string());
		}
		let start = focus.and_then(|id| data.node_index(id));
		if focus.is_some() && start.is_none() {
			debug!("focus {focus:?} is not in the graph, drawing from the default anchor");
		}
		let sub = subgraph(data, start, caps.max_nodes as usize, caps.max_edges as usize);
		let positions = layout(sub.nodes.len(), &sub.links)?;
		Ok(svg::draw(data, &sub, &positions))
	}

	fn find_nodes(&self, handle: &DotHandle, query: &str) -> Vec<SearchResultItem> {
		let Some(data) = handle.graph() else {
			return Vec::new();
		};
		let query = query.to_lowercase();
		data.nodes
			.iter()
			.filter(|n| {
				n.id.to_lowercase().contains(&query)
					|| n.label.as_ref().is_some_and(|l| l.to_lowercase().contains(&query))
			})
			.map(|n| SearchResultItem {
				id: n.id.clone(),
				label: n.display_label().to_string(),
			})
			.collect()
	}

	fn element_id(&self, node_id: &str) -> String {
		svg::node_element_id(node_id)
	}

	fn failure_markup(&self, error: &RenderError) -> String {
		svg::error_markup(&error.to_string())
	}
}
