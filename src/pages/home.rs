use leptos::prelude::*;

use crate::components::explorer::GraphExplorer;

/// Id of an optional `<script type="text/plain">` block holding graph text to
/// show on load.
const INITIAL_GRAPH_ID: &str = "initial-graph";

/// Graph text embedded in the hosting page, if any.
fn initial_graph_text() -> String {
	web_sys::window()
		.and_then(|win| win.document())
		.and_then(|doc| doc.get_element_by_id(INITIAL_GRAPH_ID))
		.and_then(|el| el.text_content())
		.unwrap_or_default()
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="explorer-page">
				<h1>"DOT Explorer"</h1>
				<p class="subtitle">
					"Paste or open a DOT graph. Click a node to bring it into focus. Scroll to zoom, drag to pan."
				</p>
				<GraphExplorer initial_text=initial_graph_text() />
			</div>
		</ErrorBoundary>
	}
}
