use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent, WheelEvent};

use super::state::PanZoomState;
use crate::components::explorer::PanZoomOptions;

struct Listener {
	target: Element,
	kind: &'static str,
	capture: bool,
	callback: Closure<dyn FnMut(Event)>,
}

#[derive(Clone, Copy)]
enum Control {
	ZoomIn,
	ZoomOut,
	Reset,
}

/// Wheel zoom and drag panning bound to one diagram root. Dropping the widget
/// removes its listeners and controls.
pub struct PanZoomWidget {
	state: Rc<RefCell<PanZoomState>>,
	listeners: Vec<Listener>,
	controls: Option<Element>,
}

impl PanZoomWidget {
	pub fn attach(root: Element, options: &PanZoomOptions) -> Option<Self> {
		let mut widget = Self {
			state: Rc::new(RefCell::new(PanZoomState::new(*options))),
			listeners: Vec::new(),
			controls: None,
		};
		fit(&root, &mut widget.state.borrow_mut());
		apply(&root, &widget.state.borrow());

		let (state, target) = (widget.state.clone(), root.clone());
		widget.listen(&root, "wheel", move |ev| {
			let Some(ev) = ev.dyn_ref::<WheelEvent>() else {
				return;
			};
			ev.prevent_default();
			let (x, y) = local_position(&target, ev);
			let mut s = state.borrow_mut();
			s.zoom_at(x, y, ev.delta_y() < 0.0);
			apply(&target, &s);
		})?;

		let (state, target) = (widget.state.clone(), root.clone());
		widget.listen(&root, "mousedown", move |ev| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				let (x, y) = local_position(&target, ev);
				state.borrow_mut().start_pan(x, y);
			}
		})?;

		let (state, target) = (widget.state.clone(), root.clone());
		widget.listen(&root, "mousemove", move |ev| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				let (x, y) = local_position(&target, ev);
				let mut s = state.borrow_mut();
				if s.pan_to(x, y) {
					apply(&target, &s);
				}
			}
		})?;

		for kind in ["mouseup", "mouseleave"] {
			let state = widget.state.clone();
			widget.listen(&root, kind, move |_| state.borrow_mut().end_pan())?;
		}

		// A drag that started on a node must not reach the diagram as a click.
		let state = widget.state.clone();
		widget.listen_with(&root, "click", true, move |ev| {
			if state.borrow_mut().take_drag_click() {
				ev.stop_propagation();
			}
		})?;

		if options.controls_enabled {
			widget.controls = widget.add_controls(&root);
		}
		Some(widget)
	}

	fn listen(
		&mut self,
		target: &Element,
		kind: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<()> {
		self.listen_with(target, kind, false, handler)
	}

	fn listen_with(
		&mut self,
		target: &Element,
		kind: &'static str,
		capture: bool,
		handler: impl FnMut(Event) + 'static,
	) -> Option<()> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target
			.add_event_listener_with_callback_and_bool(kind, callback.as_ref().unchecked_ref(), capture)
			.ok()?;
		self.listeners.push(Listener {
			target: target.clone(),
			kind,
			capture,
			callback,
		});
		Some(())
	}

	fn add_controls(&mut self, root: &Element) -> Option<Element> {
		let document = root.owner_document()?;
		let host = root.parent_element()?;
		let bar = document.create_element("div").ok()?;
		bar.set_class_name("pan-zoom-controls");

		for (label, control) in [("+", Control::ZoomIn), ("-", Control::ZoomOut), ("reset", Control::Reset)] {
			let button = document.create_element("button").ok()?;
			button.set_text_content(Some(label));
			let (state, target, host) = (self.state.clone(), root.clone(), host.clone());
			self.listen(&button, "click", move |ev| {
				ev.stop_propagation();
				let rect = host.get_bounding_client_rect();
				let (cx, cy) = (rect.width() / 2.0, rect.height() / 2.0);
				let mut s = state.borrow_mut();
				match control {
					Control::ZoomIn => s.zoom_at(cx, cy, true),
					Control::ZoomOut => s.zoom_at(cx, cy, false),
					Control::Reset => s.reset(),
				}
				apply(&target, &s);
			})?;
			bar.append_child(&button).ok()?;
		}
		host.append_child(&bar).ok()?;
		Some(bar)
	}
}

impl Drop for PanZoomWidget {
	fn drop(&mut self) {
		for listener in self.listeners.drain(..) {
			let _ = listener.target.remove_event_listener_with_callback_and_bool(
				listener.kind,
				listener.callback.as_ref().unchecked_ref(),
				listener.capture,
			);
		}
		if let Some(bar) = self.controls.take() {
			bar.remove();
		}
	}
}

/// Pointer position relative to the diagram's container, which does not move
/// with the transform.
fn local_position(root: &Element, ev: &MouseEvent) -> (f64, f64) {
	let rect = root
		.parent_element()
		.unwrap_or_else(|| root.clone())
		.get_bounding_client_rect();
	(ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top())
}

/// Fits the drawn size of the svg (its `width`/`height`) into the container.
fn fit(root: &Element, state: &mut PanZoomState) {
	let size = |name: &str| root.get_attribute(name).and_then(|v| v.parse::<f64>().ok());
	let (Some(width), Some(height)) = (size("width"), size("height")) else {
		return;
	};
	let Some(host) = root.parent_element() else {
		return;
	};
	let rect = host.get_bounding_client_rect();
	state.fit(width, height, rect.width(), rect.height());
}

fn apply(root: &Element, state: &PanZoomState) {
	let _ = root.set_attribute(
		"style",
		&format!(
			"transform: {}; transform-origin: 0 0; cursor: {};",
			state.transform.css(),
			if state.pan.active { "grabbing" } else { "grab" }
		),
	);
}
