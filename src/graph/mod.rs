//! Graph binding: a graph model drawn as draggable node entities.
//!
//! ## Modules
//!
//! - `model` - Node identifiers, adjacency, positions and labels
//! - `view` - Rendering and drag-driven position write-back
//! - `error` - Binding errors

mod error;
mod model;
mod view;

pub use error::{GraphError, GraphResult};
pub use model::{EdgeKey, GraphModel};
pub use view::{DragBinding, GraphView, RERENDER_OPERATION};

/// Node identifier.
pub type NodeKey = String;
