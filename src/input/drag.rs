//! Single-entity drag controller and its snapping / ghost-preview modes.
//!
//! The three behaviors share one state machine. `DragMode` decides which
//! extra steps run on pick and release:
//!
//! - `Plain` - move the picked entity with the pointer
//! - `GridSnap` - additionally snap the entity to the grid on release
//! - `GhostPreview` - additionally leave a translucent copy at the drag
//!   origin until release, then snap
//!
//! ## Performance Notes
//!
//! `on_motion` runs on every pointer move and redraws synchronously. It does
//! one center update and nothing else.

use super::events::{GestureOutcome, PointerController};
use super::snap::GridSnap;
use super::state::{DragGesture, DragSession};
use crate::constants::DEFAULT_GHOST_ALPHA;
use crate::error::{InteractionError, InteractionResult};
use crate::profile_scope;
use crate::settings::Settings;
use crate::surface::RenderSurface;
use crate::types::{EntityId, EntitySpec, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    #[default]
    Plain,
    GridSnap,
    GhostPreview,
}

impl DragMode {
    pub fn snaps(self) -> bool {
        matches!(self, Self::GridSnap | Self::GhostPreview)
    }

    pub fn shows_ghost(self) -> bool {
        matches!(self, Self::GhostPreview)
    }
}

/// Moves at most one entity per gesture.
#[derive(Debug, Clone)]
pub struct DragController {
    mode: DragMode,
    gesture: DragGesture,
    snap: Option<GridSnap>,
    ghost_alpha: f32,
}

impl DragController {
    /// Fails if the mode snaps and `settings.grid_spacing` is unusable.
    pub fn new(mode: DragMode, settings: &Settings) -> InteractionResult<Self> {
        let snap = if mode.snaps() {
            Some(GridSnap::new(settings.grid_spacing, settings.rounding)?)
        } else {
            None
        };
        Ok(Self {
            mode,
            gesture: DragGesture::Idle,
            snap,
            ghost_alpha: settings.ghost_alpha,
        })
    }

    pub fn plain() -> Self {
        Self::with_snap(DragMode::Plain, None)
    }

    pub fn grid_snap(snap: GridSnap) -> Self {
        Self::with_snap(DragMode::GridSnap, Some(snap))
    }

    pub fn ghost_preview(snap: GridSnap) -> Self {
        Self::with_snap(DragMode::GhostPreview, Some(snap))
    }

    fn with_snap(mode: DragMode, snap: Option<GridSnap>) -> Self {
        Self {
            mode,
            gesture: DragGesture::Idle,
            snap,
            ghost_alpha: DEFAULT_GHOST_ALPHA,
        }
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn gesture(&self) -> &DragGesture {
        &self.gesture
    }

    /// Entity currently being dragged, if any.
    pub fn target(&self) -> Option<EntityId> {
        self.gesture.target()
    }

    /// Ghost overlay of the current drag, if any.
    pub fn ghost(&self) -> Option<EntityId> {
        self.gesture.ghost()
    }

    fn spawn_ghost(&self, original: EntitySpec, surface: &mut dyn RenderSurface) -> EntityId {
        let style = original
            .style
            .with_color(original.style.color.scale_alpha(self.ghost_alpha))
            .with_z_order(original.style.z_order.saturating_sub(1));
        surface.add_entity(EntitySpec::new(original.center, original.radius, style))
    }
}

impl PointerController for DragController {
    fn on_press(
        &mut self,
        _pointer: Point,
        _hits: &[EntityId],
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<()> {
        // A press without a release for the previous gesture; drop its ghost.
        if let Some(ghost) = self.gesture.reset().session().and_then(|s| s.ghost) {
            surface.remove_entity(ghost);
        }
        self.gesture = DragGesture::AwaitingPick;
        Ok(())
    }

    fn on_pick(
        &mut self,
        entity: EntityId,
        pointer: Point,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<()> {
        match self.gesture {
            DragGesture::AwaitingPick => {}
            DragGesture::Dragging(_) => return Ok(()),
            DragGesture::Idle => {
                trace!(%entity, "Pick outside a gesture ignored");
                return Ok(());
            }
        }

        let original = surface
            .entity(entity)
            .ok_or(InteractionError::UnknownEntity(entity))?;
        let ghost = self
            .mode
            .shows_ghost()
            .then(|| self.spawn_ghost(original, surface));
        let offset = original.center - pointer;

        debug!(%entity, %offset, mode = ?self.mode, "Drag started");
        self.gesture = DragGesture::Dragging(DragSession {
            target: entity,
            offset,
            ghost,
        });
        Ok(())
    }

    fn on_motion(
        &mut self,
        pointer: Point,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<()> {
        let Some(session) = self.gesture.session() else {
            return Ok(());
        };
        profile_scope!("drag_motion");

        let center = pointer + session.offset;
        trace!(entity = %session.target, %center, "Drag motion");
        surface.set_center(session.target, center)?;
        surface.redraw();
        Ok(())
    }

    fn on_release(
        &mut self,
        _pointer: Point,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<GestureOutcome> {
        // Back to Idle before anything fallible runs.
        let DragGesture::Dragging(session) = self.gesture.reset() else {
            return Ok(GestureOutcome::Nothing);
        };

        if let Some(ghost) = session.ghost {
            surface.remove_entity(ghost);
        }

        if let Some(snap) = self.snap {
            let center = surface
                .center(session.target)
                .ok_or(InteractionError::UnknownEntity(session.target))?;
            let snapped = snap.snap(center);
            surface.set_center(session.target, snapped)?;
            surface.redraw();
            debug!(entity = %session.target, from = %center, to = %snapped, "Snapped to grid");
        }

        debug!(entity = %session.target, "Drag released");
        Ok(GestureOutcome::Moved(vec![session.target]))
    }
}
