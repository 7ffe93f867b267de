//! CSV edge list reader.
//!
//! Expects a header row naming `source`, `target`, `link_type` and `value`.
//! Column order is free and unknown columns are ignored.

use log::warn;
use serde::Deserialize;

use super::error::GraphError;
use super::types::{Edge, LinkType};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EdgeRecord {
	source: Option<String>,
	target: Option<String>,
	link_type: Option<String>,
	value: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
	field.filter(|s| !s.is_empty())
}

/// Parse CSV text into edges, failing on the first row without a source or target.
pub fn parse_edges(text: &str) -> Result<Vec<Edge>, GraphError> {
	let mut reader = csv::ReaderBuilder::new()
		.trim(csv::Trim::All)
		.flexible(true)
		.from_reader(text.as_bytes());

	let mut edges = Vec::new();
	for (i, record) in reader.deserialize::<EdgeRecord>().enumerate() {
		let row = i + 1;
		let record = record?;
		let source = non_empty(record.source).ok_or(GraphError::MalformedEdge {
			row,
			field: "source",
		})?;
		let target = non_empty(record.target).ok_or(GraphError::MalformedEdge {
			row,
			field: "target",
		})?;
		let link_type = match non_empty(record.link_type) {
			Some(s) => s.parse::<LinkType>().unwrap_or_else(|never| match never {}),
			None => LinkType::Unrecognized(String::new()),
		};
		let value = non_empty(record.value).and_then(|raw| match raw.parse::<f64>() {
			Ok(v) => Some(v),
			Err(_) => {
				warn!("row {row}: ignoring non-numeric value {raw:?}");
				None
			}
		});
		edges.push(Edge {
			source,
			target,
			link_type,
			value,
		});
	}
	Ok(edges)
}
