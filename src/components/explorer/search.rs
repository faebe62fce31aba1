use super::engine::GraphEngine;
use super::session::GraphSession;
use super::types::SearchResultItem;

/// Most suggestions ever shown for one query.
pub const SUGGESTION_LIMIT: usize = 10;

/// Suggestions for `query`: the first [`SUGGESTION_LIMIT`] engine matches in
/// engine order. Empty queries and sessions without a valid graph never reach
/// the engine.
pub fn search<E: GraphEngine>(engine: &E, session: &GraphSession<E::Handle>, query: &str) -> Vec<SearchResultItem> {
	if query.is_empty() {
		return Vec::new();
	}
	let Some(handle) = session.valid_handle() else {
		return Vec::new();
	};
	let mut matches = engine.find_nodes(handle, query);
	matches.truncate(SUGGESTION_LIMIT);
	matches
}
