use log::{debug, error};

use super::config::PanZoomOptions;
use super::engine::{DiagramSurface, GraphEngine, GraphHandle};
use super::session::GraphSession;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
	/// No graph yet; the surface was cleared.
	Cleared,
	Diagram,
	/// Parse error or failed render; no pan/zoom widget.
	ErrorDiagram,
}

/// Owns the drawn diagram's pan/zoom widget. Each render drops the previous
/// widget before anything else, so at most one is ever live.
pub struct RenderPipeline<W> {
	widget: Option<W>,
	options: PanZoomOptions,
}

impl<W> RenderPipeline<W> {
	pub fn new(options: PanZoomOptions) -> Self {
		Self {
			widget: None,
			options,
		}
	}

	pub fn has_widget(&self) -> bool {
		self.widget.is_some()
	}

	pub fn render<E, S>(&mut self, engine: &E, session: &GraphSession<E::Handle>, surface: &mut S) -> RenderOutcome
	where
		E: GraphEngine,
		S: DiagramSurface<PanZoom = W>,
	{
		self.widget = None;
		let Some(handle) = session.handle() else {
			surface.show_diagram("");
			return RenderOutcome::Cleared;
		};

		let limits = session.limits();
		let caps = session.caps();
		let caps = limits.clamp(caps.max_nodes as i64, caps.max_edges as i64);
		let markup = match engine.render(handle, session.focus_id(), caps) {
			Ok(markup) => markup,
			Err(err) => {
				error!("Render failed: {err}");
				surface.show_diagram(&engine.failure_markup(&err));
				return RenderOutcome::ErrorDiagram;
			}
		};
		debug!(
			"rendered {} bytes around {:?} (caps {}/{})",
			markup.len(),
			session.focus_id(),
			caps.max_nodes,
			caps.max_edges
		);
		surface.show_diagram(&markup);
		if handle.has_error() {
			return RenderOutcome::ErrorDiagram;
		}
		self.widget = surface.attach_pan_zoom(&self.options);
		RenderOutcome::Diagram
	}
}
