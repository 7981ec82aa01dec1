//! Headless `RenderSurface` that keeps everything in memory.
//!
//! Used by the test suite and the demo binary. Hit testing goes through the
//! R-tree in `spatial_index`, so it behaves like an interactive backend would.

use super::RenderSurface;
use crate::error::{InteractionError, InteractionResult};
use crate::spatial_index::SpatialIndex;
use crate::types::{Color, EntityId, EntitySpec, Point, Rect, Style, ViewBounds};
use std::collections::BTreeMap;
use tracing::trace;

/// A recorded edge draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeArtist {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

/// A recorded label draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelArtist {
    pub text: String,
    pub at: Point,
}

#[derive(Clone, Copy, Debug)]
struct EntityRecord {
    spec: EntitySpec,
    tolerance: Option<f64>,
}

#[derive(Default)]
pub struct MemorySurface {
    entities: BTreeMap<EntityId, EntityRecord>,
    next_entity_id: u64,
    index: SpatialIndex,
    edges: Vec<EdgeArtist>,
    labels: Vec<LabelArtist>,
    selection_rect: Option<(Rect, Color)>,
    view_bounds: Option<ViewBounds>,
    redraw_count: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entity handles in registration order.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        self.entities.keys().copied().collect()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_pickable(&self, id: EntityId) -> bool {
        self.index.contains(id)
    }

    pub fn edges(&self) -> &[EdgeArtist] {
        &self.edges
    }

    pub fn labels(&self) -> &[LabelArtist] {
        &self.labels
    }

    /// The selection rectangle, if currently shown.
    pub fn selection_rect(&self) -> Option<Rect> {
        self.selection_rect.map(|(rect, _)| rect)
    }

    pub fn redraw_count(&self) -> usize {
        self.redraw_count
    }

    fn record_mut(&mut self, id: EntityId) -> InteractionResult<&mut EntityRecord> {
        self.entities
            .get_mut(&id)
            .ok_or(InteractionError::UnknownEntity(id))
    }
}

impl RenderSurface for MemorySurface {
    fn add_entity(&mut self, spec: EntitySpec) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(
            id,
            EntityRecord {
                spec,
                tolerance: None,
            },
        );
        id
    }

    fn remove_entity(&mut self, id: EntityId) -> bool {
        self.index.remove(id);
        self.entities.remove(&id).is_some()
    }

    fn entity(&self, id: EntityId) -> Option<EntitySpec> {
        self.entities.get(&id).map(|record| record.spec)
    }

    fn set_center(&mut self, id: EntityId, center: Point) -> InteractionResult<()> {
        self.record_mut(id)?.spec.center = center;
        self.index.relocate(id, center);
        Ok(())
    }

    fn set_style(&mut self, id: EntityId, style: Style) -> InteractionResult<()> {
        self.record_mut(id)?.spec.style = style;
        Ok(())
    }

    fn set_pickable(&mut self, id: EntityId, tolerance: f64) -> InteractionResult<()> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(InteractionError::InvalidTolerance(tolerance));
        }
        let record = self.record_mut(id)?;
        record.tolerance = Some(tolerance);
        let spec = record.spec;
        self.index.insert(id, spec.center, spec.radius, tolerance);
        Ok(())
    }

    fn hit_test(&self, p: Point) -> Vec<EntityId> {
        self.index.query_point(p)
    }

    fn add_edge(&mut self, from: Point, to: Point, color: Color) {
        self.edges.push(EdgeArtist { from, to, color });
    }

    fn add_label(&mut self, text: &str, at: Point) {
        self.labels.push(LabelArtist {
            text: text.to_string(),
            at,
        });
    }

    fn show_selection_rect(&mut self, rect: Rect, color: Color) {
        self.selection_rect = Some((rect, color));
    }

    fn hide_selection_rect(&mut self) {
        self.selection_rect = None;
    }

    fn redraw(&mut self) {
        self.redraw_count += 1;
        trace!(
            entities = self.entities.len(),
            edges = self.edges.len(),
            labels = self.labels.len(),
            "Redraw"
        );
    }

    fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
        self.edges.clear();
        self.labels.clear();
        self.selection_rect = None;
    }

    fn view_bounds(&self) -> Option<ViewBounds> {
        self.view_bounds
    }

    fn set_view_bounds(&mut self, bounds: ViewBounds) {
        self.view_bounds = Some(bounds);
    }
}
