//! Rubber-band selection followed by group drags.

use crate::helpers::{assert_point_eq, TestCanvasBuilder, RED};
use nodeboard::input::{GestureOutcome, WindowSelector};
use nodeboard::{Color, RenderSurface, Settings};

#[test]
fn test_window_select_then_group_drag() {
    let mut canvas = TestCanvasBuilder::new()
        .with_entities([(3.0, 3.0), (0.0, 0.0), (0.0, 3.0)])
        .build();
    let ids = canvas.ids.clone();
    let mut selector = WindowSelector::new(ids.clone(), &Settings::default());

    let outcome = canvas.gesture(&mut selector, (-1.0, -1.0), &[(0.0, 2.0), (1.0, 4.0)], (1.0, 4.0));

    assert_eq!(outcome, GestureOutcome::Selected(vec![ids[1], ids[2]]));
    assert_eq!(selector.selected(), vec![ids[1], ids[2]]);
    assert_eq!(canvas.surface.style(ids[1]).unwrap().color, Color::BLACK);
    assert_eq!(canvas.surface.style(ids[0]).unwrap().color, RED);
    assert!(canvas.surface.selection_rect().is_none());

    let outcome = canvas.gesture(&mut selector, (0.0, 0.0), &[(1.0, 0.0), (2.0, 0.0)], (2.0, 0.0));

    assert_eq!(outcome, GestureOutcome::Moved(vec![ids[1], ids[2]]));
    assert_point_eq(canvas.center(ids[0]), (3.0, 3.0));
    assert_point_eq(canvas.center(ids[1]), (2.0, 0.0));
    assert_point_eq(canvas.center(ids[2]), (2.0, 3.0));
    assert_eq!(selector.selected(), vec![ids[1], ids[2]]);
}

#[test]
fn test_window_selection_is_idempotent() {
    let mut canvas = TestCanvasBuilder::new()
        .with_entities([(3.0, 3.0), (0.0, 0.0), (0.0, 3.0)])
        .build();
    let mut selector = WindowSelector::new(canvas.ids.clone(), &Settings::default());

    canvas.gesture(&mut selector, (-1.0, -1.0), &[(1.0, 4.0)], (1.0, 4.0));
    let first = selector.selected();
    let styles = canvas.ids.iter().map(|&id| canvas.surface.style(id)).collect::<Vec<_>>();

    canvas.gesture(&mut selector, (-1.0, -1.0), &[(1.0, 4.0)], (1.0, 4.0));

    assert_eq!(selector.selected(), first);
    let again = canvas.ids.iter().map(|&id| canvas.surface.style(id)).collect::<Vec<_>>();
    assert_eq!(again, styles);
    // Original styles are remembered from before the first highlight.
    assert_eq!(selector.selection().original_style(first[0]).unwrap().color, RED);
}

#[test]
fn test_release_point_closes_window_without_motion() {
    let mut canvas = TestCanvasBuilder::new().with_entity((0.0, 0.0)).build();
    let mut selector = WindowSelector::new(canvas.ids.clone(), &Settings::default());

    let outcome = canvas.gesture(&mut selector, (-1.0, -1.0), &[], (1.0, 1.0));

    assert_eq!(outcome, GestureOutcome::Selected(canvas.ids.clone()));
}

#[test]
fn test_reversed_window_selects_same_entities() {
    let mut canvas = TestCanvasBuilder::new()
        .with_entities([(0.0, 0.0), (5.0, 5.0)])
        .build();
    let mut selector = WindowSelector::new(canvas.ids.clone(), &Settings::default());

    canvas.gesture(&mut selector, (1.0, 1.0), &[(-1.0, -1.0)], (-1.0, -1.0));

    assert_eq!(selector.selected(), vec![canvas.ids[0]]);
}

#[test]
fn test_empty_press_clears_selection_without_moving() {
    let mut canvas = TestCanvasBuilder::new()
        .with_entities([(0.0, 0.0), (3.0, 0.0)])
        .build();
    let mut selector = WindowSelector::new(canvas.ids.clone(), &Settings::default());
    canvas.gesture(&mut selector, (-1.0, -1.0), &[(4.0, 1.0)], (4.0, 1.0));
    assert_eq!(selector.selected().len(), 2);
    let before = canvas.centers();

    canvas.gesture(&mut selector, (10.0, 10.0), &[(11.0, 11.0)], (11.0, 11.0));

    assert!(selector.selection().is_empty());
    assert_eq!(canvas.centers(), before);
    assert!(canvas.ids.iter().all(|&id| canvas.surface.style(id).unwrap().color == RED));
}
