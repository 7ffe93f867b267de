//! Canvas force-directed graph: simulation state, pointer interaction and drawing.

mod component;
mod energy;
mod forces;
mod interaction;
mod projection;
mod render;
mod state;

pub use component::ForceGraphCanvas;
