mod engine;
mod error;
mod generator;
mod layout;
mod parse;
mod subgraph;
mod svg;
mod types;

pub use engine::{DotEngine, DotHandle};
pub use error::ParseError;
pub use generator::RandomDot;
pub use svg::NODE_ID_PREFIX;
