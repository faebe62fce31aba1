//! In-memory engine and surface used by the explorer's tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::config::PanZoomOptions;
use super::engine::{DiagramSurface, GraphEngine, GraphGenerator, GraphHandle, RenderError};
use super::types::{Caps, SearchResultItem};

#[derive(Clone, Debug, Default)]
pub struct FakeHandle {
	pub nodes: Vec<String>,
	pub error: bool,
}

impl FakeHandle {
	pub fn nodes(ids: &[&str]) -> Self {
		Self {
			nodes: ids.iter().map(|s| s.to_string()).collect(),
			error: false,
		}
	}

	pub fn error() -> Self {
		Self {
			nodes: Vec::new(),
			error: true,
		}
	}
}

impl GraphHandle for FakeHandle {
	fn has_error(&self) -> bool {
		self.error
	}

	fn contains_node(&self, id: &str) -> bool {
		self.nodes.iter().any(|n| n == id)
	}

	fn summary(&self) -> String {
		if self.error {
			"syntax error".into()
		} else {
			format!("{} nodes", self.nodes.len())
		}
	}
}

/// Parses `a -> b; c` style text; blank text or text starting with "not" fails.
#[derive(Default)]
pub struct FakeEngine {
	pub fail_render: bool,
	pub matches: Option<Vec<SearchResultItem>>,
	pub last_render: RefCell<Option<(Option<String>, Caps)>>,
	pub find_calls: Cell<usize>,
}

impl GraphEngine for FakeEngine {
	type Handle = FakeHandle;

	fn parse(&self, text: &str) -> FakeHandle {
		if text.trim().is_empty() || text.starts_with("not") {
			return FakeHandle::error();
		}
		let mut handle = FakeHandle::default();
		for id in text.split([';', '-', '>', ' ']).filter(|s| !s.is_empty()) {
			if !handle.contains_node(id) {
				handle.nodes.push(id.to_string());
			}
		}
		handle
	}

	fn render(&self, handle: &FakeHandle, focus: Option<&str>, caps: Caps) -> Result<String, RenderError> {
		*self.last_render.borrow_mut() = Some((focus.map(str::to_string), caps));
		if self.fail_render {
			return Err(RenderError::Layout("boom".into()));
		}
		if handle.error {
			return Ok("<pre>syntax error</pre>".into());
		}
		let mut order: Vec<(usize, &String)> = handle.nodes.iter().enumerate().collect();
		if let Some(pos) = focus.and_then(|f| order.iter().position(|(_, n)| *n == f)) {
			let anchor = order.remove(pos);
			order.insert(0, anchor);
		}
		let mut markup = String::from("<svg>");
		for (i, id) in order.into_iter().take(caps.max_nodes as usize) {
			markup += &format!(r#"<g id="{}" fill="c{i}"></g>"#, self.element_id(id));
		}
		markup += "</svg>";
		Ok(markup)
	}

	fn find_nodes(&self, handle: &FakeHandle, query: &str) -> Vec<SearchResultItem> {
		self.find_calls.set(self.find_calls.get() + 1);
		if let Some(matches) = &self.matches {
			return matches.clone();
		}
		handle
			.nodes
			.iter()
			.filter(|n| n.contains(query))
			.map(|n| SearchResultItem {
				id: n.clone(),
				label: n.to_uppercase(),
			})
			.collect()
	}

	fn element_id(&self, node_id: &str) -> String {
		format!("node{node_id}")
	}

	fn failure_markup(&self, error: &RenderError) -> String {
		format!("<pre>{error}</pre>")
	}
}

#[derive(Default)]
pub struct FakeGenerator {
	pub requests: Vec<(u32, u32)>,
}

impl GraphGenerator for FakeGenerator {
	fn render_random(&mut self, nodes_count: u32, edges_count: u32) -> String {
		self.requests.push((nodes_count, edges_count));
		"g1 -> g2".into()
	}
}

pub struct FakeWidget {
	live: Rc<Cell<usize>>,
}

impl Drop for FakeWidget {
	fn drop(&mut self) {
		self.live.set(self.live.get() - 1);
	}
}

/// Records what the explorer shows. Node fills are read back out of the
/// markup's `<g id=".." .. fill="..">` elements, like a DOM would expose them.
#[derive(Default)]
pub struct FakeSurface {
	pub markup: String,
	pub fills: HashMap<String, String>,
	pub input_text: String,
	pub search_text: String,
	pub suggestions: Vec<SearchResultItem>,
	pub status: String,
	pub attached: Cell<usize>,
	/// Options passed to each pan/zoom attach, in order.
	pub attach_options: Vec<PanZoomOptions>,
	live: Rc<Cell<usize>>,
}

impl FakeSurface {
	pub fn live_widgets(&self) -> usize {
		self.live.get()
	}
}

impl DiagramSurface for FakeSurface {
	type PanZoom = FakeWidget;

	fn show_diagram(&mut self, markup: &str) {
		self.markup = markup.to_string();
		self.fills.clear();
		for chunk in markup.split(r#"<g id=""#).skip(1) {
			let Some((id, rest)) = chunk.split_once('"') else {
				continue;
			};
			let fill = rest
				.split_once(r#"fill=""#)
				.and_then(|(_, f)| f.split_once('"'))
				.map(|(f, _)| f);
			if let Some(fill) = fill {
				self.fills.insert(id.to_string(), fill.to_string());
			}
		}
	}

	fn attach_pan_zoom(&mut self, options: &PanZoomOptions) -> Option<FakeWidget> {
		self.attached.set(self.attached.get() + 1);
		self.attach_options.push(*options);
		self.live.set(self.live.get() + 1);
		Some(FakeWidget {
			live: self.live.clone(),
		})
	}

	fn node_fill(&self, element_id: &str) -> Option<String> {
		self.fills.get(element_id).cloned()
	}

	fn set_node_fill(&mut self, element_id: &str, fill: &str) {
		if let Some(current) = self.fills.get_mut(element_id) {
			*current = fill.to_string();
		}
	}

	fn set_input_text(&mut self, text: &str) {
		self.input_text = text.to_string();
	}

	fn set_search_text(&mut self, text: &str) {
		self.search_text = text.to_string();
	}

	fn show_suggestions(&mut self, items: &[SearchResultItem]) {
		self.suggestions = items.to_vec();
	}

	fn show_status(&mut self, status: &str) {
		self.status = status.to_string();
	}
}
