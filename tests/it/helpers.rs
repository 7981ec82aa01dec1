//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - a `MemorySurface` populated with circular entities
//! - `drag_path()` - the press / motion / release events of one gesture
//! - `run_gesture()` - feed a gesture through a dispatcher and controller

use nodeboard::input::{GestureOutcome, PointerController, PointerDispatcher, SurfaceEvent};
use nodeboard::{Color, EntityId, EntitySpec, MemorySurface, Point, RenderSurface, Style};

pub const RED: Color = Color::rgb(255, 0, 0);

/// Radius large enough that tests can press exactly on a center and hit.
pub const ENTITY_RADIUS: f64 = 0.5;

// ============================================================================
// TestCanvasBuilder
// ============================================================================

/// Builder for a surface with entities registered in the order given.
///
/// # Example
/// ```ignore
/// let canvas = TestCanvasBuilder::new()
///     .with_entity((3.0, 3.0))
///     .with_entity((0.0, 0.0))
///     .build();
/// ```
#[derive(Default)]
pub struct TestCanvasBuilder {
    centers: Vec<Point>,
    radius: Option<f64>,
    tolerance: Option<f64>,
}

pub struct TestCanvas {
    pub surface: MemorySurface,
    pub ids: Vec<EntityId>,
    pub dispatcher: PointerDispatcher,
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, center: impl Into<Point>) -> Self {
        self.centers.push(center.into());
        self
    }

    pub fn with_entities<P: Into<Point>>(mut self, centers: impl IntoIterator<Item = P>) -> Self {
        self.centers.extend(centers.into_iter().map(Into::into));
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Build the surface and a dispatcher managing every entity.
    pub fn build(self) -> TestCanvas {
        let mut surface = MemorySurface::new();
        let radius = self.radius.unwrap_or(ENTITY_RADIUS);
        let ids: Vec<EntityId> = self
            .centers
            .into_iter()
            .map(|center| surface.add_entity(EntitySpec::new(center, radius, Style::new(RED))))
            .collect();
        let dispatcher = PointerDispatcher::new(ids.clone(), self.tolerance.unwrap_or(0.0), &mut surface)
            .expect("fresh entities are pickable");
        TestCanvas {
            surface,
            ids,
            dispatcher,
        }
    }
}

impl TestCanvas {
    pub fn center(&self, id: EntityId) -> Point {
        self.surface.center(id).expect("entity exists")
    }

    pub fn centers(&self) -> Vec<Point> {
        self.ids.iter().map(|&id| self.center(id)).collect()
    }

    /// Run one full gesture and return the release outcome.
    pub fn gesture(
        &mut self,
        controller: &mut dyn PointerController,
        press: impl Into<Point>,
        motions: &[(f64, f64)],
        release: impl Into<Point>,
    ) -> GestureOutcome {
        let events = drag_path(press.into(), motions, release.into());
        run_gesture(&self.dispatcher, &mut self.surface, controller, &events)
    }
}

// ============================================================================
// Gesture drivers
// ============================================================================

pub fn drag_path(press: Point, motions: &[(f64, f64)], release: Point) -> Vec<SurfaceEvent> {
    std::iter::once(SurfaceEvent::Press(press))
        .chain(motions.iter().map(|&m| SurfaceEvent::Motion(m.into())))
        .chain(std::iter::once(SurfaceEvent::Release(release)))
        .collect()
}

/// Dispatch every event, returning the outcome of the last one.
pub fn run_gesture(
    dispatcher: &PointerDispatcher,
    surface: &mut dyn RenderSurface,
    controller: &mut dyn PointerController,
    events: &[SurfaceEvent],
) -> GestureOutcome {
    let mut outcome = GestureOutcome::Nothing;
    for &event in events {
        outcome = dispatcher
            .dispatch(event, surface, controller)
            .expect("dispatch succeeds");
    }
    outcome
}

pub fn assert_point_eq(actual: Point, expected: (f64, f64)) {
    assert!(
        (actual.x - expected.0).abs() < 1e-9 && (actual.y - expected.1).abs() < 1e-9,
        "expected ({}, {}), got {}",
        expected.0,
        expected.1,
        actual
    );
}
