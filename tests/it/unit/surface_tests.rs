//! `MemorySurface` behavior the controllers rely on.

use crate::helpers::{ENTITY_RADIUS, RED};
use nodeboard::types::ViewBounds;
use nodeboard::{EntitySpec, InteractionError, MemorySurface, Point, RenderSurface, Style};

fn spec(x: f64, y: f64) -> EntitySpec {
    EntitySpec::new(Point::new(x, y), ENTITY_RADIUS, Style::new(RED))
}

#[test]
fn test_handles_increase_and_survive_clear() {
    let mut surface = MemorySurface::new();
    let a = surface.add_entity(spec(0.0, 0.0));
    let b = surface.add_entity(spec(1.0, 0.0));
    assert!(a < b);

    surface.clear();
    let c = surface.add_entity(spec(0.0, 0.0));

    assert!(b < c);
    assert_eq!(surface.entity_ids(), vec![c]);
}

#[test]
fn test_moved_entity_is_hit_at_new_center() {
    let mut surface = MemorySurface::new();
    let id = surface.add_entity(spec(0.0, 0.0));
    surface.set_pickable(id, 0.0).unwrap();

    surface.set_center(id, Point::new(10.0, 10.0)).unwrap();

    assert!(surface.hit_test(Point::ORIGIN).is_empty());
    assert_eq!(surface.hit_test(Point::new(10.2, 9.9)), vec![id]);
}

#[test]
fn test_removed_entity_errors() {
    let mut surface = MemorySurface::new();
    let id = surface.add_entity(spec(0.0, 0.0));
    assert!(surface.remove_entity(id));
    assert!(!surface.remove_entity(id));

    assert_eq!(
        surface.set_center(id, Point::ORIGIN),
        Err(InteractionError::UnknownEntity(id))
    );
    assert_eq!(surface.entity(id), None);
}

#[test]
fn test_clear_keeps_view_bounds() {
    let mut surface = MemorySurface::new();
    let bounds = ViewBounds {
        x: (-1.0, 1.0),
        y: (-2.0, 2.0),
    };
    surface.set_view_bounds(bounds);
    surface.add_entity(spec(0.0, 0.0));
    surface.add_edge(Point::ORIGIN, Point::new(1.0, 1.0), RED);
    surface.add_label("n", Point::ORIGIN);

    surface.clear();

    assert_eq!(surface.entity_count(), 0);
    assert!(surface.edges().is_empty());
    assert!(surface.labels().is_empty());
    assert_eq!(surface.view_bounds(), Some(bounds));
}
