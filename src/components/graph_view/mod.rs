mod component;
mod layout;
mod render;
mod scene;
mod selection;
mod types;

pub use component::GraphView;
pub use scene::render_graph;
pub use selection::{FetchTicket, Phase, Resolution, SelectionState};
pub use types::Graph;
