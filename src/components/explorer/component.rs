use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement, KeyboardEvent, MouseEvent};

use super::config::ExplorerConfig;
use super::controller::Explorer;
use super::host;
use super::surface::{DomSurface, UiSignals, read_file};
use super::types::{ExplorerEvent, SearchResultItem};
use crate::components::graph::{DotEngine, NODE_ID_PREFIX, RandomDot};
use crate::components::pan_zoom::PanZoomWidget;

type WebExplorer = Explorer<DotEngine, RandomDot, PanZoomWidget>;

#[component]
pub fn GraphExplorer(
	/// Graph text already present when the page comes up; rendered right away.
	#[prop(optional, into)]
	initial_text: String,
	#[prop(optional)] config: Option<ExplorerConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();
	let (cap_limits, generate_limits) = (config.caps, config.generate);

	let output_ref = NodeRef::<leptos::html::Div>::new();
	let (input_text, set_input_text) = signal(String::new());
	let (search_text, set_search_text) = signal(String::new());
	let (suggestions, set_suggestions) = signal(Vec::<SearchResultItem>::new());
	let (status, set_status) = signal(String::new());
	let (max_nodes, set_max_nodes) = signal(cap_limits.max_nodes.default.to_string());
	let (max_edges, set_max_edges) = signal(cap_limits.max_edges.default.to_string());
	let (gen_nodes, set_gen_nodes) = signal(generate_limits.nodes.default.to_string());
	let (gen_edges, set_gen_edges) = signal(generate_limits.edges.default.to_string());
	let signals = UiSignals {
		input_text: set_input_text,
		search_text: set_search_text,
		suggestions: set_suggestions,
		status: set_status,
	};

	let seed = js_sys::Date::now() as u64;
	let explorer: Rc<RefCell<WebExplorer>> =
		Rc::new(RefCell::new(Explorer::new(DotEngine, RandomDot::new(seed), config)));

	Effect::new(move |_| {
		let Some(output) = output_ref.get() else {
			return;
		};
		let output: Element = output.into();

		let (router, router_output) = (explorer.clone(), output.clone());
		host::register(Rc::new(move |event: ExplorerEvent| {
			let mut surface = DomSurface::new(router_output.clone(), signals);
			match router.try_borrow_mut() {
				Ok(mut explorer) => explorer.dispatch(event, &mut surface),
				Err(_) => warn!("explorer busy, dropping {event:?}"),
			}
		}));

		if let Ok(mut explorer) = explorer.try_borrow_mut() {
			info!("Explorer mounted");
			explorer.initialize(&initial_text, &mut DomSurface::new(output, signals));
		}
	});
	on_cleanup(host::unregister);

	let submit = move || {
		host::dispatch(ExplorerEvent::Submit(input_text.get_untracked()));
	};

	let set_caps = move || {
		let nodes = cap_limits.max_nodes.parse(&max_nodes.get_untracked());
		let edges = cap_limits.max_edges.parse(&max_edges.get_untracked());
		set_max_nodes.set(nodes.to_string());
		set_max_edges.set(edges.to_string());
		host::dispatch(ExplorerEvent::SetCaps {
			max_nodes: nodes as i64,
			max_edges: edges as i64,
		});
	};

	let generate = move |_: MouseEvent| {
		let nodes = generate_limits.nodes.parse(&gen_nodes.get_untracked());
		let edges = generate_limits.edges.parse(&gen_edges.get_untracked());
		set_gen_nodes.set(nodes.to_string());
		set_gen_edges.set(edges.to_string());
		host::dispatch(ExplorerEvent::Generate {
			nodes: nodes as i64,
			edges: edges as i64,
		});
	};

	let on_keydown = move |ev: KeyboardEvent| {
		if ev.code() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
			ev.prevent_default();
			submit();
		}
	};

	let on_file = move |ev: web_sys::Event| {
		let input: HtmlInputElement = event_target(&ev);
		if let Some(file) = input.files().and_then(|files| files.get(0)) {
			read_file(file);
		}
	};

	let on_search = move |ev: web_sys::Event| {
		let query = event_target_value(&ev);
		set_search_text.set(query.clone());
		host::dispatch(ExplorerEvent::Search(query));
	};

	let on_diagram_click = move |ev: MouseEvent| {
		let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		let Ok(Some(node)) = target.closest("g.node") else {
			return;
		};
		let element_id = node.id();
		if let Some(id) = element_id.strip_prefix(NODE_ID_PREFIX) {
			host::dispatch(ExplorerEvent::ActivateNode(id.to_string()));
		}
	};

	view! {
		<div class="graph-explorer">
			<div class="controls">
				<textarea
					class="graph-input"
					placeholder="digraph { a -> b }"
					prop:value=move || input_text.get()
					on:input=move |ev| set_input_text.set(event_target_value(&ev))
					on:keydown=on_keydown
				/>
				<div class="actions">
					<button on:click=move |_| submit()>"Update"</button>
					<input type="file" on:change=on_file />
				</div>
				<div class="caps">
					<label>
						"Max nodes "
						<input
							type="number"
							min=cap_limits.max_nodes.min.to_string()
							max=cap_limits.max_nodes.max.to_string()
							prop:value=move || max_nodes.get()
							on:input=move |ev| set_max_nodes.set(event_target_value(&ev))
							on:change=move |_| set_caps()
						/>
					</label>
					<label>
						"Max edges "
						<input
							type="number"
							min=cap_limits.max_edges.min.to_string()
							max=cap_limits.max_edges.max.to_string()
							prop:value=move || max_edges.get()
							on:input=move |ev| set_max_edges.set(event_target_value(&ev))
							on:change=move |_| set_caps()
						/>
					</label>
				</div>
				<div class="generate">
					<label>
						"Nodes "
						<input
							type="number"
							min=generate_limits.nodes.min.to_string()
							max=generate_limits.nodes.max.to_string()
							prop:value=move || gen_nodes.get()
							on:input=move |ev| set_gen_nodes.set(event_target_value(&ev))
						/>
					</label>
					<label>
						"Edges "
						<input
							type="number"
							min=generate_limits.edges.min.to_string()
							max=generate_limits.edges.max.to_string()
							prop:value=move || gen_edges.get()
							on:input=move |ev| set_gen_edges.set(event_target_value(&ev))
						/>
					</label>
					<button on:click=generate>"Random graph"</button>
				</div>
				<p class="status">{move || status.get()}</p>
				<div class="search">
					<input
						type="search"
						placeholder="Find node"
						prop:value=move || search_text.get()
						on:input=on_search
					/>
					<ul class="suggestions">
						{move || {
							suggestions
								.get()
								.into_iter()
								.map(|item| {
									let id = item.id.clone();
									view! {
										<li on:click=move |_| {
											host::dispatch(ExplorerEvent::Focus(id.clone()));
										}>
											<span class="id">{item.id}</span>
											" "
											<span class="label">{item.label}</span>
										</li>
									}
								})
								.collect_view()
						}}
					</ul>
				</div>
			</div>
			<div class="diagram" node_ref=output_ref on:click=on_diagram_click></div>
		</div>
	}
}
