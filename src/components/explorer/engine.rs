//! Seams between the explorer and the services it drives.

use thiserror::Error;

use super::config::PanZoomOptions;
use super::types::{Caps, SearchResultItem};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RenderError {
	#[error("layout failed: {0}")]
	Layout(String),
}

/// Result of parsing graph text. Parse failures are held, not raised.
pub trait GraphHandle {
	fn has_error(&self) -> bool;
	fn contains_node(&self, id: &str) -> bool;
	/// Short human readable description: sizes, or the parse error.
	fn summary(&self) -> String;
}

pub trait GraphEngine {
	type Handle: GraphHandle;

	fn parse(&self, text: &str) -> Self::Handle;

	/// Draws at most `caps` around `focus` (or the engine's default anchor).
	/// An erroneous handle draws as an error diagram.
	fn render(
		&self,
		handle: &Self::Handle,
		focus: Option<&str>,
		caps: Caps,
	) -> Result<String, RenderError>;

	/// Nodes whose id or label match `query`, in the engine's relevance order.
	fn find_nodes(&self, handle: &Self::Handle, query: &str) -> Vec<SearchResultItem>;

	/// Id of the diagram element drawn for `node_id`.
	fn element_id(&self, node_id: &str) -> String;

	fn failure_markup(&self, error: &RenderError) -> String;
}

pub trait GraphGenerator {
	fn render_random(&mut self, nodes_count: u32, edges_count: u32) -> String;
}

/// Where the explorer's output lands: the diagram, its node fills and the
/// form controls around it.
pub trait DiagramSurface {
	/// Live pan/zoom binding; dropping it detaches it.
	type PanZoom;

	fn show_diagram(&mut self, markup: &str);
	fn attach_pan_zoom(&mut self, options: &PanZoomOptions) -> Option<Self::PanZoom>;
	fn node_fill(&self, element_id: &str) -> Option<String>;
	fn set_node_fill(&mut self, element_id: &str, fill: &str);
	fn set_input_text(&mut self, text: &str);
	fn set_search_text(&mut self, text: &str);
	fn show_suggestions(&mut self, items: &[SearchResultItem]);
	fn show_status(&mut self, status: &str);
}
