//! Pointer-driven interaction for entities on a 2D canvas.
//!
//! Controllers receive normalized pointer events from a `PointerDispatcher`
//! and mutate entities through a `RenderSurface`:
//!
//! - `input::DragController` - drag one entity, optionally snapping to a
//!   grid and leaving a ghost at the origin
//! - `input::WindowSelector` - rubber-band selection and group drag
//! - `graph::GraphView` - draggable graph nodes whose positions are written
//!   back to a `graph::GraphModel`

pub mod constants;
pub mod error;
pub mod graph;
pub mod input;
pub mod logging;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod surface;
pub mod types;

pub use error::{InteractionError, InteractionResult};
pub use graph::{GraphError, GraphModel, GraphView};
pub use input::{DragController, DragMode, PointerDispatcher, SurfaceEvent, WindowSelector};
pub use settings::Settings;
pub use surface::{MemorySurface, RenderSurface};
pub use types::{Color, EntityId, EntitySpec, Point, Rect, Style};
