//! Graph view: renders a `GraphModel` onto a surface and keeps node
//! positions in sync with dragging.
//!
//! Edges and labels are drawn from model positions, not from entities, so
//! after a drag ends the whole graph is re-rendered and the drag binding is
//! rebuilt over the fresh node entities.

use super::error::{GraphError, GraphResult};
use super::model::GraphModel;
use super::NodeKey;
use crate::error::{InteractionError, InteractionResult};
use crate::input::{DragController, DragMode, GestureOutcome, PointerDispatcher, SurfaceEvent};
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::surface::RenderSurface;
use crate::types::{EntityId, EntitySpec, Style, ViewBounds};
use tracing::{debug, info};

/// Operation name under which full re-renders are recorded.
pub const RERENDER_OPERATION: &str = "graph_rerender";

/// Node entities sit above edges.
const NODE_Z_ORDER: i32 = 2;

/// A dispatcher and a drag controller bound to one set of node entities.
#[derive(Debug)]
pub struct DragBinding {
    dispatcher: PointerDispatcher,
    controller: DragController,
}

impl DragBinding {
    pub fn new(
        entities: Vec<EntityId>,
        mode: DragMode,
        settings: &Settings,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<Self> {
        Ok(Self {
            dispatcher: PointerDispatcher::new(entities, settings.pick_tolerance, surface)?,
            controller: DragController::new(mode, settings)?,
        })
    }

    pub fn handle(
        &mut self,
        event: SurfaceEvent,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<GestureOutcome> {
        self.dispatcher.dispatch(event, surface, &mut self.controller)
    }

    pub fn entities(&self) -> &[EntityId] {
        self.dispatcher.managed()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }
}

#[derive(Debug)]
pub struct GraphView {
    model: GraphModel,
    mode: DragMode,
    settings: Settings,
    nodes: Vec<(NodeKey, EntityId)>,
    binding: DragBinding,
    perf: PerfMonitor,
}

impl GraphView {
    /// Validate `settings` and `model`, draw the model, and bind dragging to
    /// its nodes.
    pub fn new(
        model: GraphModel,
        mode: DragMode,
        settings: Settings,
        surface: &mut dyn RenderSurface,
    ) -> GraphResult<Self> {
        settings
            .validate()
            .map_err(|e| GraphError::InvalidSettings(e.to_string()))?;
        model.validate()?;

        if surface.view_bounds().is_none() {
            let positions = model.nodes().iter().filter_map(|node| model.position(node));
            if let Some(bounds) = ViewBounds::fit(positions, settings.view_margin) {
                surface.set_view_bounds(bounds);
            }
        }

        let mut perf = PerfMonitor::new();
        let nodes = perf.time_redraw(RERENDER_OPERATION, || {
            let nodes = render(&model, &settings, surface)?;
            surface.redraw();
            Ok::<_, GraphError>(nodes)
        })?;
        let binding = bind(&nodes, mode, &settings, surface)?;

        info!(
            nodes = model.nodes().len(),
            edges = model.edges().len(),
            ?mode,
            "Graph view bound"
        );

        Ok(Self {
            model,
            mode,
            settings,
            nodes,
            binding,
            perf,
        })
    }

    /// Forward a pointer event to the drag binding. A release that moved a
    /// node writes positions back into the model and re-renders.
    pub fn handle_event(
        &mut self,
        event: SurfaceEvent,
        surface: &mut dyn RenderSurface,
    ) -> GraphResult<GestureOutcome> {
        let outcome = self.binding.handle(event, surface)?;
        if !outcome.moved().is_empty() {
            self.sync_positions(surface)?;
            self.rerender(surface)?;
        }
        Ok(outcome)
    }

    fn sync_positions(&mut self, surface: &dyn RenderSurface) -> GraphResult<()> {
        for (node, id) in &self.nodes {
            let center = surface
                .center(*id)
                .ok_or(InteractionError::UnknownEntity(*id))?;
            self.model.set_position(node, center)?;
        }
        Ok(())
    }

    fn rerender(&mut self, surface: &mut dyn RenderSurface) -> GraphResult<()> {
        let model = &self.model;
        let settings = &self.settings;
        let nodes = self.perf.time_redraw(RERENDER_OPERATION, || {
            surface.clear();
            let nodes = render(model, settings, surface)?;
            surface.redraw();
            Ok::<_, GraphError>(nodes)
        })?;

        // The old binding refers to entities that no longer exist.
        self.binding = bind(&nodes, self.mode, &self.settings, surface)?;
        self.nodes = nodes;
        debug!(nodes = self.nodes.len(), "Graph re-rendered");
        Ok(())
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Entity currently rendering `node`.
    pub fn node_entity(&self, node: &str) -> Option<EntityId> {
        self.nodes
            .iter()
            .find(|(key, _)| key == node)
            .map(|(_, id)| *id)
    }

    pub fn binding(&self) -> &DragBinding {
        &self.binding
    }

    pub fn perf(&self) -> &PerfMonitor {
        &self.perf
    }
}

fn bind(
    nodes: &[(NodeKey, EntityId)],
    mode: DragMode,
    settings: &Settings,
    surface: &mut dyn RenderSurface,
) -> InteractionResult<DragBinding> {
    let entities = nodes.iter().map(|(_, id)| *id).collect();
    DragBinding::new(entities, mode, settings, surface)
}

/// Draw nodes, then edges, then node and edge labels. Returns the node
/// entities in model order.
fn render(
    model: &GraphModel,
    settings: &Settings,
    surface: &mut dyn RenderSurface,
) -> GraphResult<Vec<(NodeKey, EntityId)>> {
    let style = Style::new(settings.node_color).with_z_order(NODE_Z_ORDER);
    let position = |node: &NodeKey| {
        model.position(node).ok_or_else(|| GraphError::MissingPosition {
            node: node.clone(),
        })
    };

    let mut nodes = Vec::with_capacity(model.nodes().len());
    for node in model.nodes() {
        let id = surface.add_entity(EntitySpec::new(position(node)?, settings.node_radius, style));
        nodes.push((node.clone(), id));
    }

    for (a, b) in model.edges() {
        surface.add_edge(position(a)?, position(b)?, settings.edge_color);
    }

    for (node, label) in model.node_labels() {
        surface.add_label(label, position(node)?);
    }

    for ((a, b), label) in model.edge_labels() {
        surface.add_label(label, position(a)?.midpoint(position(b)?));
    }

    Ok(nodes)
}
