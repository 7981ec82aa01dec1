//! Headless walkthrough of the interaction controllers.
//!
//! Runs a window selection with a group drag, then drags a node of a small
//! graph, logging what happened at each step. `RUST_LOG=debug` shows the
//! controllers' own events.

use anyhow::{Context, Result};
use nodeboard::input::{GestureOutcome, PointerDispatcher, SurfaceEvent, WindowSelector};
use nodeboard::{
    DragMode, EntitySpec, GraphModel, GraphView, MemorySurface, Point, RenderSurface, Settings, Style,
};
use tracing::info;

fn main() -> Result<()> {
    nodeboard::logging::init();

    let settings = Settings::load();
    settings.validate().context("Invalid settings")?;

    window_select(&settings)?;
    graph_drag(&settings)?;
    Ok(())
}

fn window_select(settings: &Settings) -> Result<()> {
    let mut surface = MemorySurface::new();
    let style = Style::new(settings.node_color);
    let ids = [(3.0, 3.0), (0.0, 0.0), (0.0, 3.0)]
        .into_iter()
        .map(|c| surface.add_entity(EntitySpec::new(c.into(), settings.node_radius, style)))
        .collect::<Vec<_>>();

    let dispatcher = PointerDispatcher::new(ids.clone(), settings.pick_tolerance, &mut surface)?;
    let mut selector = WindowSelector::new(ids, settings);

    let gestures = [
        [
            SurfaceEvent::Press(Point::new(-1.0, -1.0)),
            SurfaceEvent::Motion(Point::new(1.0, 4.0)),
            SurfaceEvent::Release(Point::new(1.0, 4.0)),
        ],
        [
            SurfaceEvent::Press(Point::new(0.0, 0.0)),
            SurfaceEvent::Motion(Point::new(2.0, 0.0)),
            SurfaceEvent::Release(Point::new(2.0, 0.0)),
        ],
    ];
    for events in gestures {
        let mut outcome = GestureOutcome::Nothing;
        for event in events {
            outcome = dispatcher.dispatch(event, &mut surface, &mut selector)?;
        }
        info!(?outcome, "Gesture finished");
    }

    for id in selector.selected() {
        let center = surface.center(id).context("Selected entity vanished")?;
        info!(%id, %center, "Selected entity");
    }
    Ok(())
}

fn graph_drag(settings: &Settings) -> Result<()> {
    let model = GraphModel::from_edges(
        [("a", "b")],
        [("a", Point::new(0.0, 0.0)), ("b", Point::new(2.0, 1.0))],
    )
    .with_node_labels([("a", "A"), ("b", "B")])
    .with_edge_labels([(("a", "b"), "a-b")]);

    let mut surface = MemorySurface::new();
    let mut view = GraphView::new(model, DragMode::GridSnap, settings.clone(), &mut surface)?;

    for event in [
        SurfaceEvent::Press(Point::new(0.0, 0.0)),
        SurfaceEvent::Motion(Point::new(3.2, 2.9)),
        SurfaceEvent::Release(Point::new(3.2, 2.9)),
    ] {
        view.handle_event(event, &mut surface)?;
    }

    for node in view.model().nodes() {
        info!(node = %node, position = ?view.model().position(node), "Node position");
    }
    if let Some(stats) = view.perf().operation_stats(nodeboard::graph::RERENDER_OPERATION) {
        info!(renders = stats.count(), avg_ms = stats.average(), "Graph render timing");
    }
    Ok(())
}
