//! Pointer input handling for canvas entities.
//!
//! This module implements the interaction logic: picking, single-entity
//! dragging with optional grid snap and ghost preview, and rubber-band
//! selection with rigid group dragging.
//!
//! ## Architecture
//!
//! Every controller tracks its gesture with an explicit state enum
//! (`state`), never with parallel boolean flags. The `PointerDispatcher`
//! classifies each press once (which managed entities are under the pointer)
//! and feeds the same normalized stream to any number of controllers.
//!
//! ## Modules
//!
//! - `state` - Gesture state enums and helper methods
//! - `events` - Surface events, normalized events, dispatcher, controller trait
//! - `drag` - Single-entity drag (plain, grid snap, ghost preview)
//! - `snap` - Grid quantization
//! - `window_select` - Rubber-band selection and group drag

mod drag;
mod events;
mod snap;
mod state;
mod window_select;

pub use drag::{DragController, DragMode};
pub use events::{GestureOutcome, PointerController, PointerDispatcher, PointerEvent, SurfaceEvent};
pub use snap::{GridSnap, RoundingMode};
pub use state::{DragGesture, DragSession, SelectionGesture};
pub use window_select::{SelectionSet, WindowSelector};
