use log::{error, info, warn};

use super::config::ExplorerConfig;
use super::engine::{DiagramSurface, GraphEngine, GraphGenerator, GraphHandle};
use super::highlight::{apply_highlight, reapply_highlight, release_current_highlight};
use super::render::{RenderOutcome, RenderPipeline};
use super::search::search;
use super::session::GraphSession;
use super::types::ExplorerEvent;

/// Render-state controller: one session, one pipeline, and the services they
/// drive. Every UI interaction arrives as an [`ExplorerEvent`] through
/// [`Explorer::dispatch`] and runs to completion before the next one.
pub struct Explorer<E: GraphEngine, G, W> {
	engine: E,
	generator: G,
	session: GraphSession<E::Handle>,
	pipeline: RenderPipeline<W>,
	config: ExplorerConfig,
}

impl<E, G, W> Explorer<E, G, W>
where
	E: GraphEngine,
	G: GraphGenerator,
{
	pub fn new(engine: E, generator: G, config: ExplorerConfig) -> Self {
		Self {
			engine,
			generator,
			session: GraphSession::new(config.caps),
			pipeline: RenderPipeline::new(config.pan_zoom),
			config,
		}
	}

	pub fn session(&self) -> &GraphSession<E::Handle> {
		&self.session
	}

	pub fn config(&self) -> &ExplorerConfig {
		&self.config
	}

	pub fn has_widget(&self) -> bool {
		self.pipeline.has_widget()
	}

	/// Picks up text that was already in the input when the page came up, so
	/// a reload shows the same diagram as before.
	pub fn initialize<S>(&mut self, initial_text: &str, surface: &mut S)
	where
		S: DiagramSurface<PanZoom = W>,
	{
		if initial_text.trim().is_empty() {
			return;
		}
		surface.set_input_text(initial_text);
		self.submit(initial_text, surface);
	}

	pub fn dispatch<S>(&mut self, event: ExplorerEvent, surface: &mut S)
	where
		S: DiagramSurface<PanZoom = W>,
	{
		match event {
			ExplorerEvent::Submit(text) => self.submit(&text, surface),
			ExplorerEvent::FileLoaded(text) => {
				surface.set_input_text(&text);
				self.submit(&text, surface);
			}
			ExplorerEvent::Generate { nodes, edges } => {
				let limits = self.config.generate;
				let (nodes, edges) = (limits.nodes.clamp(nodes), limits.edges.clamp(edges));
				info!("Generating random graph with {nodes} nodes and {edges} edges");
				let text = self.generator.render_random(nodes, edges);
				surface.set_input_text(&text);
				self.submit(&text, surface);
			}
			ExplorerEvent::Focus(id) => self.focus(&id, surface),
			ExplorerEvent::Search(query) => {
				let suggestions = search(&self.engine, &self.session, &query);
				surface.show_suggestions(&suggestions);
			}
			ExplorerEvent::ActivateNode(id) => self.activate_node(&id, surface),
			ExplorerEvent::SetCaps {
				max_nodes,
				max_edges,
			} => {
				let caps = self.session.set_caps(max_nodes, max_edges);
				info!("Caps set to {} nodes, {} edges", caps.max_nodes, caps.max_edges);
				if self.session.handle().is_some() {
					self.render(surface);
				}
			}
		}
	}

	fn submit<S>(&mut self, text: &str, surface: &mut S)
	where
		S: DiagramSurface<PanZoom = W>,
	{
		let released = release_current_highlight(&mut self.session, &self.engine, surface);
		let handle = self.engine.parse(text);
		let summary = handle.summary();
		if handle.has_error() {
			error!("Parse failed: {summary}");
		} else {
			info!("New graph: {summary}");
		}
		surface.show_status(&summary);
		surface.set_search_text("");
		surface.show_suggestions(&[]);
		self.session.replace_graph(handle, released);
		self.render(surface);
	}

	fn focus<S>(&mut self, id: &str, surface: &mut S)
	where
		S: DiagramSurface<PanZoom = W>,
	{
		if !self.session.focus(id) {
			warn!("Ignoring focus on {id}: no graph loaded");
			return;
		}
		surface.set_search_text(id);
		surface.show_suggestions(&[]);
		self.render(surface);
	}

	/// Unknown ids are ignored. A known node outside the current (capped)
	/// diagram becomes the new anchor, which brings it into view before it is
	/// highlighted.
	fn activate_node<S>(&mut self, id: &str, surface: &mut S)
	where
		S: DiagramSurface<PanZoom = W>,
	{
		let known = self.session.valid_handle().is_some_and(|h| h.contains_node(id));
		if !known {
			warn!("Ignoring activation of unknown node {id}");
			return;
		}
		let released = release_current_highlight(&mut self.session, &self.engine, surface);
		self.session.focus(id);
		self.render(surface);
		apply_highlight(
			released,
			&mut self.session,
			&self.engine,
			surface,
			id,
			&self.config.highlight_fill,
		);
		surface.set_search_text(id);
		surface.show_suggestions(&[]);
	}

	fn render<S>(&mut self, surface: &mut S) -> RenderOutcome
	where
		S: DiagramSurface<PanZoom = W>,
	{
		let outcome = self.pipeline.render(&self.engine, &self.session, surface);
		if outcome == RenderOutcome::Diagram {
			reapply_highlight(&self.session, &self.engine, surface, &self.config.highlight_fill);
		}
		outcome
	}
}
