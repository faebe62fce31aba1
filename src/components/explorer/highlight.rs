//! Single-node highlight, applied in two phases: the current highlight is
//! released (its fill restored) before a new one may be applied. The
//! [`Released`] token returned by the first phase is required by the second.

use log::{debug, warn};

use super::engine::{DiagramSurface, GraphEngine};
use super::session::{GraphSession, Highlight};

/// Proof that no highlight is active any more.
#[must_use]
pub struct Released {
	_private: (),
}

pub fn release_current_highlight<E, S>(
	session: &mut GraphSession<E::Handle>,
	engine: &E,
	surface: &mut S,
) -> Released
where
	E: GraphEngine,
	S: DiagramSurface,
{
	if let Some(previous) = session.take_highlight() {
		debug!("restoring fill of {}", previous.node_id);
		surface.set_node_fill(&engine.element_id(&previous.node_id), &previous.saved_fill);
	}
	Released { _private: () }
}

/// Saves the node's current fill and paints it with `fill`. Returns `false`
/// when the node is not part of the drawn diagram.
pub fn apply_highlight<E, S>(
	_released: Released,
	session: &mut GraphSession<E::Handle>,
	engine: &E,
	surface: &mut S,
	node_id: &str,
	fill: &str,
) -> bool
where
	E: GraphEngine,
	S: DiagramSurface,
{
	let element_id = engine.element_id(node_id);
	let Some(saved_fill) = surface.node_fill(&element_id) else {
		warn!("node {node_id} is not in the rendered diagram");
		return false;
	};
	surface.set_node_fill(&element_id, fill);
	session.set_highlight(Highlight {
		node_id: node_id.to_string(),
		saved_fill,
	});
	true
}

/// Paints the recorded highlight again after the diagram was redrawn; the
/// saved fill is kept since a redraw starts from original fills.
pub fn reapply_highlight<E, S>(session: &GraphSession<E::Handle>, engine: &E, surface: &mut S, fill: &str)
where
	E: GraphEngine,
	S: DiagramSurface,
{
	if let Some(current) = session.highlight() {
		let element_id = engine.element_id(&current.node_id);
		if surface.node_fill(&element_id).is_some() {
			surface.set_node_fill(&element_id, fill);
		}
	}
}
