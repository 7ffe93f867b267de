//! Graph data: CSV edge lists, node derivation and layout parameters.

mod derive;
mod error;
mod layout;
mod load;
mod reader;
mod types;

pub use derive::{derive_graph, derive_nodes};
pub use error::GraphError;
pub use layout::{LayoutConfig, link_stroke_width};
pub use load::load_graph;
pub use reader::parse_edges;
pub use types::{Edge, GraphData, LinkType, Node, NodeGroup};
