//! Pointer event normalization and dispatch.
//!
//! A surface only reports raw press / motion / release. The dispatcher turns
//! each press into a classified `Press` (carrying the managed entities under
//! the pointer) followed by one `Pick` per hit, then hands the stream to
//! controllers in order.

use crate::error::InteractionResult;
use crate::profile_scope;
use crate::surface::RenderSurface;
use crate::types::{EntityId, Point};
use std::collections::HashSet;
use tracing::debug;

/// Raw pointer notification from a rendering surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceEvent {
    Press(Point),
    Motion(Point),
    Release(Point),
}

impl SurfaceEvent {
    pub fn pointer(&self) -> Point {
        match *self {
            Self::Press(p) | Self::Motion(p) | Self::Release(p) => p,
        }
    }
}

/// Normalized event delivered to controllers.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Gesture start. `hits` are the managed entities under the pointer,
    /// in registration order.
    Press { pointer: Point, hits: Vec<EntityId> },
    /// The press landed on `entity`. Follows its `Press`.
    Pick { entity: EntityId, pointer: Point },
    Motion { pointer: Point },
    /// Gesture end.
    Release { pointer: Point },
}

/// What a finished gesture did.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureOutcome {
    /// No entity changed position or selection
    #[default]
    Nothing,
    /// These entities were dragged
    Moved(Vec<EntityId>),
    /// A window selection added these entities
    Selected(Vec<EntityId>),
}

impl GestureOutcome {
    /// Entities dragged during the gesture (empty unless `Moved`).
    pub fn moved(&self) -> &[EntityId] {
        match self {
            Self::Moved(ids) => ids,
            _ => &[],
        }
    }
}

/// A consumer of normalized pointer events.
///
/// Handlers run to completion on the UI thread; the surface is lent for
/// the duration of one call.
pub trait PointerController {
    fn on_press(
        &mut self,
        pointer: Point,
        hits: &[EntityId],
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<()>;

    fn on_pick(
        &mut self,
        _entity: EntityId,
        _pointer: Point,
        _surface: &mut dyn RenderSurface,
    ) -> InteractionResult<()> {
        Ok(())
    }

    fn on_motion(&mut self, pointer: Point, surface: &mut dyn RenderSurface)
    -> InteractionResult<()>;

    fn on_release(
        &mut self,
        pointer: Point,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<GestureOutcome>;
}

/// Normalizes surface events for a fixed set of managed entities.
#[derive(Debug, Clone)]
pub struct PointerDispatcher {
    managed: Vec<EntityId>,
    members: HashSet<EntityId>,
    tolerance: f64,
}

impl PointerDispatcher {
    /// Manage `entities`, marking each pickable with `tolerance`.
    pub fn new(
        entities: Vec<EntityId>,
        tolerance: f64,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<Self> {
        for &id in &entities {
            surface.set_pickable(id, tolerance)?;
        }
        debug!(count = entities.len(), tolerance, "Pointer dispatcher bound");
        Ok(Self {
            members: entities.iter().copied().collect(),
            managed: entities,
            tolerance,
        })
    }

    pub fn managed(&self) -> &[EntityId] {
        &self.managed
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Managed entities under `pointer`, in registration order.
    pub fn hits(&self, pointer: Point, surface: &dyn RenderSurface) -> Vec<EntityId> {
        let under: HashSet<EntityId> = surface
            .hit_test(pointer)
            .into_iter()
            .filter(|id| self.members.contains(id))
            .collect();
        if under.is_empty() {
            return Vec::new();
        }
        self.managed
            .iter()
            .copied()
            .filter(|id| under.contains(id))
            .collect()
    }

    /// Expand one surface event into the normalized stream.
    pub fn normalize(&self, event: SurfaceEvent, surface: &dyn RenderSurface) -> Vec<PointerEvent> {
        match event {
            SurfaceEvent::Press(pointer) => {
                let hits = self.hits(pointer, surface);
                let picks = hits
                    .iter()
                    .map(|&entity| PointerEvent::Pick { entity, pointer })
                    .collect::<Vec<_>>();
                std::iter::once(PointerEvent::Press { pointer, hits })
                    .chain(picks)
                    .collect()
            }
            SurfaceEvent::Motion(pointer) => vec![PointerEvent::Motion { pointer }],
            SurfaceEvent::Release(pointer) => vec![PointerEvent::Release { pointer }],
        }
    }

    /// Deliver one surface event to a single controller.
    pub fn dispatch(
        &self,
        event: SurfaceEvent,
        surface: &mut dyn RenderSurface,
        controller: &mut dyn PointerController,
    ) -> InteractionResult<GestureOutcome> {
        let mut outcomes = self.broadcast(event, surface, &mut [controller])?;
        Ok(outcomes.pop().unwrap_or_default())
    }

    /// Deliver one surface event to several controllers. Each normalized
    /// event reaches every controller before the next one is sent.
    ///
    /// Returns one outcome per controller, in order.
    pub fn broadcast(
        &self,
        event: SurfaceEvent,
        surface: &mut dyn RenderSurface,
        controllers: &mut [&mut dyn PointerController],
    ) -> InteractionResult<Vec<GestureOutcome>> {
        profile_scope!("dispatch_pointer_event");

        let mut outcomes = vec![GestureOutcome::Nothing; controllers.len()];
        for normalized in self.normalize(event, surface) {
            for (controller, outcome) in controllers.iter_mut().zip(outcomes.iter_mut()) {
                match &normalized {
                    PointerEvent::Press { pointer, hits } => {
                        controller.on_press(*pointer, hits, surface)?;
                    }
                    PointerEvent::Pick { entity, pointer } => {
                        controller.on_pick(*entity, *pointer, surface)?;
                    }
                    PointerEvent::Motion { pointer } => {
                        controller.on_motion(*pointer, surface)?;
                    }
                    PointerEvent::Release { pointer } => {
                        *outcome = controller.on_release(*pointer, surface)?;
                    }
                }
            }
        }
        Ok(outcomes)
    }
}
