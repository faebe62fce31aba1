//! Entry points for the hosting page. The mounted explorer registers its event
//! router here; page scripts, the file reader and the suggestion list reach it
//! through [`dispatch`].

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;

use super::types::ExplorerEvent;

type Router = Rc<dyn Fn(ExplorerEvent)>;

thread_local! {
	static ROUTER: RefCell<Option<Router>> = const { RefCell::new(None) };
}

pub fn register(router: Router) {
	ROUTER.with(|r| *r.borrow_mut() = Some(router));
}

pub fn unregister() {
	ROUTER.with(|r| *r.borrow_mut() = None);
}

/// Routes `event` to the mounted explorer. Returns `false` when none is mounted.
pub fn dispatch(event: ExplorerEvent) -> bool {
	let router = ROUTER.with(|r| r.borrow().clone());
	match router {
		Some(route) => {
			route(event);
			true
		}
		None => {
			warn!("no explorer mounted, dropping {event:?}");
			false
		}
	}
}

/// Loads graph text as if it had been opened from a file, and renders it.
#[wasm_bindgen(js_name = loadGraph)]
pub fn load_graph(text: String) -> bool {
	dispatch(ExplorerEvent::FileLoaded(text))
}

/// Activates (focuses and highlights) the node with the given id.
#[wasm_bindgen(js_name = activateNode)]
pub fn activate_node(id: String) -> bool {
	dispatch(ExplorerEvent::ActivateNode(id))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn entry_points_route_to_registered_explorer() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = seen.clone();
		register(Rc::new(move |event| sink.borrow_mut().push(event)));

		assert!(load_graph("a -> b".into()));
		assert!(activate_node("b".into()));
		assert_eq!(
			*seen.borrow(),
			[
				ExplorerEvent::FileLoaded("a -> b".into()),
				ExplorerEvent::ActivateNode("b".into())
			]
		);

		unregister();
		assert!(!dispatch(ExplorerEvent::Search("a".into())));
		assert_eq!(seen.borrow().len(), 2);
	}
}
