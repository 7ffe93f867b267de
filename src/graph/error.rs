use thiserror::Error;

/// Errors raised while loading the edge list.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum GraphError {
	/// The edge list could not be downloaded.
	#[error("failed to fetch {url}: {message}")]
	Fetch {
		/// Requested URL.
		url: String,
		/// Browser or HTTP error text.
		message: String,
	},

	/// The CSV itself is broken (bad quoting, invalid UTF-8).
	#[error("invalid CSV: {0}")]
	Csv(String),

	/// A row without a source or target.
	#[error("malformed edge on row {row}: missing {field}")]
	MalformedEdge {
		/// 1-based data row, header excluded.
		row: usize,
		/// `"source"` or `"target"`.
		field: &'static str,
	},
}

impl From<csv::Error> for GraphError {
	fn from(err: csv::Error) -> Self {
		Self::Csv(err.to_string())
	}
}
