//! Rendering surface contract.
//!
//! The interaction layer never draws anything itself. It talks to a
//! `RenderSurface`, which owns every entity and artifact and is handed to
//! each handler by `&mut`, the same way a GUI framework passes its window
//! context into event callbacks.
//!
//! ## Modules
//!
//! - `memory` - Headless surface that records entities and draw calls

mod memory;

pub use memory::{EdgeArtist, LabelArtist, MemorySurface};

use crate::error::InteractionResult;
use crate::types::{Color, EntityId, EntitySpec, Point, Rect, Style, ViewBounds};

/// Everything the controllers and the graph view need from a backend.
pub trait RenderSurface {
    /// Create an entity. Handles are allocated in increasing order.
    fn add_entity(&mut self, spec: EntitySpec) -> EntityId;

    /// Remove an entity. Returns `false` if the handle was already gone.
    fn remove_entity(&mut self, id: EntityId) -> bool;

    /// Current geometry and style of an entity.
    fn entity(&self, id: EntityId) -> Option<EntitySpec>;

    fn center(&self, id: EntityId) -> Option<Point> {
        self.entity(id).map(|spec| spec.center)
    }

    fn style(&self, id: EntityId) -> Option<Style> {
        self.entity(id).map(|spec| spec.style)
    }

    fn set_center(&mut self, id: EntityId, center: Point) -> InteractionResult<()>;

    fn set_style(&mut self, id: EntityId, style: Style) -> InteractionResult<()>;

    /// Make an entity respond to hit tests, `tolerance` beyond its radius.
    fn set_pickable(&mut self, id: EntityId, tolerance: f64) -> InteractionResult<()>;

    /// Pickable entities under `p`, in registration order.
    fn hit_test(&self, p: Point) -> Vec<EntityId>;

    /// Draw a straight edge between two positions.
    fn add_edge(&mut self, from: Point, to: Point, color: Color);

    /// Draw a text label anchored at `at`.
    fn add_label(&mut self, text: &str, at: Point);

    fn show_selection_rect(&mut self, rect: Rect, color: Color);

    fn hide_selection_rect(&mut self);

    /// Repaint. Synchronous: returns once the frame is done.
    fn redraw(&mut self);

    /// Drop every entity, edge and label. View bounds are retained.
    fn clear(&mut self);

    fn view_bounds(&self) -> Option<ViewBounds>;

    fn set_view_bounds(&mut self, bounds: ViewBounds);
}
