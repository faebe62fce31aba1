use pest::Parser;
use pest::iterators::Pair;

use super::error::ParseError;
use super::types::GraphData;

#[derive(pest_derive::Parser)]
#[grammar = "components/graph/dot.pest"]
struct DotParser;

/// Parses DOT text into a [`GraphData`].
pub fn parse(text: &str) -> Result<GraphData, ParseError> {
	let pairs = DotParser::parse(Rule::graph, text).map_err(|e| ParseError::Syntax(e.to_string()))?;
	let mut data = GraphData::default();
	for graph in pairs {
		for part in graph.into_inner() {
			match part.as_rule() {
				Rule::document => {
					for inner in part.into_inner() {
						if inner.as_rule() == Rule::stmt_list {
							statements(inner, &mut data);
						}
					}
				}
				Rule::bare => statements(part, &mut data),
				_ => {}
			}
		}
	}
	Ok(data)
}

fn statements(list: Pair<'_, Rule>, data: &mut GraphData) {
	for stmt in list.into_inner() {
		match stmt.as_rule() {
			Rule::node_stmt => node_stmt(stmt, data),
			Rule::edge_stmt => edge_stmt(stmt, data),
			Rule::subgraph => {
				for inner in stmt.into_inner() {
					if inner.as_rule() == Rule::stmt_list {
						statements(inner, data);
					}
				}
			}
			// defaults and graph-level assignments carry nothing we draw
			_ => {}
		}
	}
}

fn node_stmt(stmt: Pair<'_, Rule>, data: &mut GraphData) {
	let mut items = stmt.into_inner();
	let Some(name) = items.next() else {
		return;
	};
	let idx = data.ensure_node(&id_text(name));
	if let Some(label) = items.next().and_then(label) {
		data.set_label(idx, &label);
	}
}

fn edge_stmt(stmt: Pair<'_, Rule>, data: &mut GraphData) {
	let mut prev = None;
	for item in stmt.into_inner() {
		if item.as_rule() != Rule::id {
			continue;
		}
		let idx = data.ensure_node(&id_text(item));
		if let Some(from) = prev {
			data.add_link(from, idx);
		}
		prev = Some(idx);
	}
}

fn label(attributes: Pair<'_, Rule>) -> Option<String> {
	attributes
		.into_inner()
		.filter_map(|attr| {
			let mut kv = attr.into_inner();
			let key = id_text(kv.next()?);
			let value = id_text(kv.next()?);
			(key == "label").then_some(value)
		})
		.last()
}

fn id_text(id: Pair<'_, Rule>) -> String {
	let Some(inner) = id.into_inner().next() else {
		return String::new();
	};
	match inner.as_rule() {
		Rule::quoted => unescape(inner.into_inner().next().map_or("", |p| p.as_str())),
		Rule::html => {
			let raw = inner.as_str();
			raw[1..raw.len() - 1].to_string()
		}
		_ => inner.as_str().to_string(),
	}
}

fn unescape(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut chars = raw.chars();
	while let Some(c) = chars.next() {
		if c != '\\' {
			out.push(c);
			continue;
		}
		match chars.next() {
			Some('n' | 'l' | 'r') => out.push('\n'),
			Some(other) => out.push(other),
			None => out.push('\\'),
		}
	}
	out
}
