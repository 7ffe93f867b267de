use log::{debug, error, info};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::derive::derive_graph;
use super::error::GraphError;
use super::reader::parse_edges;
use super::types::GraphData;

/// Fetch the edge list at `url` and derive the graph from it.
///
/// Failures are logged before being returned; nothing is partially loaded.
pub async fn load_graph(url: String) -> Result<GraphData, GraphError> {
	info!("Loading graph data from {url}");
	let result = fetch_text(&url)
		.await
		.and_then(|text| parse_edges(&text))
		.map(derive_graph);

	match &result {
		Ok(graph) => debug!(
			"Loaded {} nodes and {} edges",
			graph.nodes.len(),
			graph.edges.len()
		),
		Err(err) => error!("Failed to load or parse graph data: {err}"),
	}
	result
}

async fn fetch_text(url: &str) -> Result<String, GraphError> {
	let fetch_err = |value: JsValue| GraphError::Fetch {
		url: url.to_string(),
		message: value
			.as_string()
			.unwrap_or_else(|| format!("{value:?}")),
	};

	let window = web_sys::window().ok_or_else(|| fetch_err(JsValue::from_str("no window")))?;
	let promise: js_sys::Promise = window.fetch_with_str(url);
	let response: Response = JsFuture::from(promise)
		.await
		.map_err(fetch_err)?
		.dyn_into()
		.map_err(fetch_err)?;

	if !response.ok() {
		return Err(fetch_err(JsValue::from_str(&format!(
			"HTTP {}",
			response.status()
		))));
	}

	let text = JsFuture::from(response.text().map_err(fetch_err)?)
		.await
		.map_err(fetch_err)?;
	text.as_string()
		.ok_or_else(|| fetch_err(JsValue::from_str("response body is not text")))
}
