mod component;
mod config;
mod controller;
mod engine;
mod highlight;
pub mod host;
mod render;
mod search;
mod session;
mod surface;
#[cfg(test)]
pub(crate) mod testing;
mod types;

pub use component::GraphExplorer;
pub use config::{CapLimits, ExplorerConfig, GenerateLimits, Limit, PanZoomOptions};
pub use controller::Explorer;
pub use engine::{DiagramSurface, GraphEngine, GraphGenerator, GraphHandle, RenderError};
pub use render::RenderOutcome;
pub use search::SUGGESTION_LIMIT;
pub use session::{GraphSession, Highlight, SessionState};
pub use types::{Caps, ExplorerEvent, SearchResultItem};
