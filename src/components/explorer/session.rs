use super::config::CapLimits;
use super::engine::GraphHandle;
use super::highlight::Released;
use super::types::Caps;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
	/// Nothing parsed yet.
	Empty,
	Parsed,
	/// Last parse failed; the handle is kept so its error can be drawn.
	Error,
}

/// The highlighted node and the fill it had before highlighting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
	pub node_id: String,
	pub saved_fill: String,
}

/// Per-page explorer state: current graph, focus, caps and highlight.
pub struct GraphSession<H> {
	handle: Option<H>,
	focus: Option<String>,
	caps: Caps,
	limits: CapLimits,
	highlight: Option<Highlight>,
}

impl<H: GraphHandle> GraphSession<H> {
	pub fn new(limits: CapLimits) -> Self {
		Self {
			handle: None,
			focus: None,
			caps: limits.defaults(),
			limits,
			highlight: None,
		}
	}

	pub fn state(&self) -> SessionState {
		match &self.handle {
			None => SessionState::Empty,
			Some(h) if h.has_error() => SessionState::Error,
			Some(_) => SessionState::Parsed,
		}
	}

	pub fn handle(&self) -> Option<&H> {
		self.handle.as_ref()
	}

	/// Handle usable for lookups; `None` when empty or erroneous.
	pub fn valid_handle(&self) -> Option<&H> {
		self.handle.as_ref().filter(|h| !h.has_error())
	}

	pub fn focus_id(&self) -> Option<&str> {
		self.focus.as_deref()
	}

	pub fn caps(&self) -> Caps {
		self.caps
	}

	pub fn limits(&self) -> &CapLimits {
		&self.limits
	}

	pub fn highlight(&self) -> Option<&Highlight> {
		self.highlight.as_ref()
	}

	/// Installs a freshly parsed handle. The old graph's node ids mean nothing
	/// for the new one, so focus is always forgotten; the highlight must have
	/// been released already.
	pub fn replace_graph(&mut self, handle: H, _released: Released) {
		self.handle = Some(handle);
		self.focus = None;
		self.highlight = None;
	}

	/// Moves the render anchor. Returns `false` (and changes nothing) when no
	/// graph has been parsed.
	pub fn focus(&mut self, id: &str) -> bool {
		if self.handle.is_none() {
			return false;
		}
		self.focus = Some(id.to_string());
		true
	}

	pub fn set_caps(&mut self, max_nodes: i64, max_edges: i64) -> Caps {
		self.caps = self.limits.clamp(max_nodes, max_edges);
		self.caps
	}

	pub(super) fn take_highlight(&mut self) -> Option<Highlight> {
		self.highlight.take()
	}

	pub(super) fn set_highlight(&mut self, highlight: Highlight) {
		self.highlight = Some(highlight);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::explorer::highlight::release_current_highlight;
	use crate::components::explorer::testing::{FakeEngine, FakeHandle, FakeSurface};

	fn session() -> GraphSession<FakeHandle> {
		GraphSession::new(CapLimits::default())
	}

	#[test]
	fn starts_empty_with_default_caps() {
		let s = session();
		assert_eq!(s.state(), SessionState::Empty);
		assert_eq!(s.caps(), CapLimits::default().defaults());
		assert_eq!(s.focus_id(), None);
	}

	#[test]
	fn focus_needs_a_graph() {
		let mut s = session();
		assert!(!s.focus("a"));
		assert_eq!(s.focus_id(), None);
	}

	#[test]
	fn replace_graph_resets_focus_and_tracks_state() {
		let (engine, mut surface) = (FakeEngine::default(), FakeSurface::default());
		let mut s = session();

		let released = release_current_highlight(&mut s, &engine, &mut surface);
		s.replace_graph(FakeHandle::nodes(&["a", "b"]), released);
		assert_eq!(s.state(), SessionState::Parsed);
		assert!(s.focus("b"));
		assert_eq!(s.focus_id(), Some("b"));

		let released = release_current_highlight(&mut s, &engine, &mut surface);
		s.replace_graph(FakeHandle::error(), released);
		assert_eq!(s.state(), SessionState::Error);
		assert_eq!(s.focus_id(), None);
		assert!(s.valid_handle().is_none());
		// an erroneous handle still accepts focus
		assert!(s.focus("x"));
	}

	#[test]
	fn caps_clamp_regardless_of_state() {
		let mut s = session();
		let caps = s.set_caps(1_000_000, -3);
		assert_eq!(caps.max_nodes, s.limits().max_nodes.max);
		assert_eq!(caps.max_edges, 1);
	}
}
