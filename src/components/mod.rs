pub mod explorer;
pub mod graph;
mod pan_zoom;
