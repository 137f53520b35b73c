pub mod aggregate;
mod component;
pub mod dataset;
pub mod filter;
pub mod ingest;
mod layout;
pub mod normalize;
mod render;
mod state;
mod types;

pub use component::SankeyCanvas;
pub use filter::{FilterMode, Subgraph};
pub use types::{NodeKind, SankeyData, SankeyLink, SankeyNode};
