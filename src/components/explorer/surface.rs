use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, File, FileReader};

use super::config::PanZoomOptions;
use super::engine::DiagramSurface;
use super::host;
use super::types::{ExplorerEvent, SearchResultItem};
use crate::components::pan_zoom::PanZoomWidget;

/// Form state the explorer writes back to.
#[derive(Clone, Copy)]
pub struct UiSignals {
	pub input_text: WriteSignal<String>,
	pub search_text: WriteSignal<String>,
	pub suggestions: WriteSignal<Vec<SearchResultItem>>,
	pub status: WriteSignal<String>,
}

/// The live page: diagram markup goes straight into the output element so the
/// pan/zoom widget can bind to it in the same event.
pub struct DomSurface {
	output: Element,
	signals: UiSignals,
}

impl DomSurface {
	pub fn new(output: Element, signals: UiSignals) -> Self {
		Self { output, signals }
	}

	fn node(&self, element_id: &str) -> Option<Element> {
		self.output.owner_document()?.get_element_by_id(element_id)
	}
}

impl DiagramSurface for DomSurface {
	type PanZoom = PanZoomWidget;

	fn show_diagram(&mut self, markup: &str) {
		self.output.set_inner_html(markup);
	}

	fn attach_pan_zoom(&mut self, options: &PanZoomOptions) -> Option<PanZoomWidget> {
		PanZoomWidget::attach(self.output.first_element_child()?, options)
	}

	fn node_fill(&self, element_id: &str) -> Option<String> {
		self.node(element_id)?.get_attribute("fill")
	}

	fn set_node_fill(&mut self, element_id: &str, fill: &str) {
		if let Some(node) = self.node(element_id) {
			let _ = node.set_attribute("fill", fill);
		}
	}

	fn set_input_text(&mut self, text: &str) {
		self.signals.input_text.set(text.to_string());
	}

	fn set_search_text(&mut self, text: &str) {
		self.signals.search_text.set(text.to_string());
	}

	fn show_suggestions(&mut self, items: &[SearchResultItem]) {
		self.signals.suggestions.set(items.to_vec());
	}

	fn show_status(&mut self, status: &str) {
		self.signals.status.set(status.to_string());
	}
}

/// Reads `file` as text and hands it to the explorer once loaded.
pub fn read_file(file: File) {
	let Ok(reader) = FileReader::new() else {
		warn!("FileReader unavailable");
		return;
	};
	let loaded = reader.clone();
	let onload = Closure::once_into_js(move || {
		match loaded.result().ok().and_then(|r| r.as_string()) {
			Some(text) => {
				host::dispatch(ExplorerEvent::FileLoaded(text));
			}
			None => warn!("file did not load as text"),
		}
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	if let Err(err) = reader.read_as_text(&file) {
		warn!("could not read {}: {err:?}", file.name());
	}
}
