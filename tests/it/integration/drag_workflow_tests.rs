//! Single-entity drags in each mode.

use crate::helpers::{assert_point_eq, TestCanvasBuilder, RED};
use nodeboard::input::{DragController, GestureOutcome, GridSnap, SurfaceEvent};
use nodeboard::{Point, RenderSurface};

#[test]
fn test_offset_held_through_every_motion() {
    let mut canvas = TestCanvasBuilder::new().with_entity((2.0, 2.0)).build();
    let id = canvas.ids[0];
    let mut drag = DragController::plain();

    canvas
        .dispatcher
        .dispatch(SurfaceEvent::Press(Point::new(2.3, 1.9)), &mut canvas.surface, &mut drag)
        .unwrap();
    assert_point_eq(drag.gesture().offset().unwrap(), (-0.3, 0.1));

    for (x, y) in [(5.0, 5.0), (-1.0, 0.5), (2.3, 1.9)] {
        canvas
            .dispatcher
            .dispatch(SurfaceEvent::Motion(Point::new(x, y)), &mut canvas.surface, &mut drag)
            .unwrap();
        assert_point_eq(canvas.center(id), (x - 0.3, y + 0.1));
    }

    let outcome = canvas
        .dispatcher
        .dispatch(SurfaceEvent::Release(Point::new(2.3, 1.9)), &mut canvas.surface, &mut drag)
        .unwrap();
    assert_eq!(outcome, GestureOutcome::Moved(vec![id]));
    assert!(drag.gesture().is_idle());
}

#[test]
fn test_press_on_empty_space_moves_nothing() {
    let mut canvas = TestCanvasBuilder::new()
        .with_entities([(0.0, 0.0), (3.0, 3.0)])
        .build();
    let before = canvas.centers();
    let redraws = canvas.surface.redraw_count();
    let mut drag = DragController::plain();

    let outcome = canvas.gesture(&mut drag, (10.0, 10.0), &[(0.0, 0.0), (3.0, 3.0)], (3.0, 3.0));

    assert_eq!(outcome, GestureOutcome::Nothing);
    assert_eq!(canvas.centers(), before);
    assert_eq!(canvas.surface.redraw_count(), redraws);
}

#[test]
fn test_motion_redraws_once_per_event() {
    let mut canvas = TestCanvasBuilder::new().with_entity((0.0, 0.0)).build();
    let mut drag = DragController::plain();

    canvas.gesture(&mut drag, (0.0, 0.0), &[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)], (3.0, 0.0));

    assert_eq!(canvas.surface.redraw_count(), 3);
}

#[test]
fn test_ghost_exists_only_while_dragging() {
    let mut canvas = TestCanvasBuilder::new().with_entity((1.0, 1.0)).build();
    let id = canvas.ids[0];
    let mut drag = DragController::ghost_preview(GridSnap::default());
    assert_eq!(canvas.surface.entity_count(), 1);

    canvas
        .dispatcher
        .dispatch(SurfaceEvent::Press(Point::new(1.0, 1.0)), &mut canvas.surface, &mut drag)
        .unwrap();
    let ghost = drag.ghost().expect("ghost while dragging");
    assert_eq!(canvas.surface.entity_count(), 2);
    assert_eq!(canvas.surface.center(ghost), Some(Point::new(1.0, 1.0)));
    assert!(!canvas.surface.is_pickable(ghost));
    let ghost_style = canvas.surface.style(ghost).unwrap();
    assert_eq!(ghost_style.color, RED.scale_alpha(0.5));
    assert!(ghost_style.z_order < canvas.surface.style(id).unwrap().z_order);

    for x in [1.5, 2.2, 3.6] {
        canvas
            .dispatcher
            .dispatch(SurfaceEvent::Motion(Point::new(x, 1.0)), &mut canvas.surface, &mut drag)
            .unwrap();
        assert_eq!(canvas.surface.entity_count(), 2);
        // The ghost stays put.
        assert_eq!(canvas.surface.center(ghost), Some(Point::new(1.0, 1.0)));
    }

    canvas
        .dispatcher
        .dispatch(SurfaceEvent::Release(Point::new(3.6, 1.0)), &mut canvas.surface, &mut drag)
        .unwrap();
    assert_eq!(canvas.surface.entity_count(), 1);
    assert!(drag.ghost().is_none());
    assert_point_eq(canvas.center(id), (4.0, 1.0));
}

#[test]
fn test_ghost_removed_on_click_without_motion() {
    let mut canvas = TestCanvasBuilder::new().with_entity((1.0, 1.0)).build();
    let mut drag = DragController::ghost_preview(GridSnap::default());

    for _ in 0..3 {
        let outcome = canvas.gesture(&mut drag, (1.2, 1.2), &[], (1.2, 1.2));
        assert_eq!(outcome, GestureOutcome::Moved(canvas.ids.clone()));
        assert_eq!(canvas.surface.entity_count(), 1);
    }
    assert_point_eq(canvas.center(canvas.ids[0]), (1.0, 1.0));
}

#[test]
fn test_dragged_entity_stays_pickable_at_new_place() {
    let mut canvas = TestCanvasBuilder::new().with_entity((0.0, 0.0)).build();
    let mut drag = DragController::plain();

    canvas.gesture(&mut drag, (0.0, 0.0), &[(5.0, 5.0)], (5.0, 5.0));
    let outcome = canvas.gesture(&mut drag, (5.0, 5.0), &[(6.0, 5.0)], (6.0, 5.0));

    assert_eq!(outcome, GestureOutcome::Moved(canvas.ids.clone()));
    assert_point_eq(canvas.center(canvas.ids[0]), (6.0, 5.0));
}
