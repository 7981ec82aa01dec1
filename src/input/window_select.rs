//! Rubber-band selection and rigid group dragging.
//!
//! A press on a candidate adds it to the selection and drags the whole
//! selection with the pointer. A press on empty space clears the selection
//! and starts drawing a selection rectangle; on release every candidate whose
//! center lies inside the rectangle is selected.
//!
//! Rectangle inclusion is half-open on both axes (`min <= c < max`), so a
//! rectangle with zero width or height selects nothing.

use super::events::{GestureOutcome, PointerController};
use super::state::SelectionGesture;
use crate::error::{InteractionError, InteractionResult};
use crate::profile_scope;
use crate::settings::Settings;
use crate::surface::RenderSurface;
use crate::types::{Color, EntityId, Point, Rect, Style};
use tracing::debug;

/// Selected entities with the style each had before being highlighted,
/// in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    entries: Vec<(EntityId, Style)>,
}

impl SelectionSet {
    pub fn contains(&self, id: EntityId) -> bool {
        self.entries.iter().any(|(selected, _)| *selected == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Style to restore when `id` is deselected.
    pub fn original_style(&self, id: EntityId) -> Option<Style> {
        self.entries
            .iter()
            .find(|(selected, _)| *selected == id)
            .map(|(_, style)| *style)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct WindowSelector {
    candidates: Vec<EntityId>,
    selection: SelectionSet,
    gesture: SelectionGesture,
    highlight: Color,
    rect_color: Color,
}

impl WindowSelector {
    /// Select among `candidates`. Hit testing comes from the dispatcher, so
    /// the same entities should be handed to `PointerDispatcher::new`.
    pub fn new(candidates: Vec<EntityId>, settings: &Settings) -> Self {
        Self {
            candidates,
            selection: SelectionSet::default(),
            gesture: SelectionGesture::Idle,
            highlight: settings.highlight_color,
            rect_color: settings.selection_rect_color,
        }
    }

    pub fn candidates(&self) -> &[EntityId] {
        &self.candidates
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Selected entity handles, in selection order.
    pub fn selected(&self) -> Vec<EntityId> {
        self.selection.ids().collect()
    }

    pub fn gesture(&self) -> &SelectionGesture {
        &self.gesture
    }

    /// Add `id` to the selection and highlight it. Returns `false` if it was
    /// already selected.
    pub fn select(&mut self, id: EntityId, surface: &mut dyn RenderSurface) -> InteractionResult<bool> {
        if self.selection.contains(id) {
            return Ok(false);
        }
        let original = surface.style(id).ok_or(InteractionError::UnknownEntity(id))?;
        surface.set_style(id, original.with_color(self.highlight))?;
        self.selection.entries.push((id, original));
        Ok(true)
    }

    /// Empty the selection, restoring every entity's original style.
    pub fn deselect_all(&mut self, surface: &mut dyn RenderSurface) -> InteractionResult<()> {
        let entries = std::mem::take(&mut self.selection.entries);
        if !entries.is_empty() {
            debug!(count = entries.len(), "Selection cleared");
        }
        for (id, original) in entries {
            // Entities removed behind our back have nothing left to restore.
            if surface.entity(id).is_some() {
                surface.set_style(id, original)?;
            }
        }
        Ok(())
    }

    fn group_offsets(
        &self,
        pointer: Point,
        surface: &dyn RenderSurface,
    ) -> InteractionResult<Vec<(EntityId, Point)>> {
        self.selection
            .ids()
            .map(|id| {
                surface
                    .center(id)
                    .map(|center| (id, center - pointer))
                    .ok_or(InteractionError::UnknownEntity(id))
            })
            .collect()
    }
}

impl PointerController for WindowSelector {
    fn on_press(
        &mut self,
        pointer: Point,
        hits: &[EntityId],
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<()> {
        let hit = hits.iter().copied().find(|id| self.candidates.contains(id));

        match hit {
            Some(id) => {
                self.select(id, surface)?;
                let offsets = self.group_offsets(pointer, surface)?;
                debug!(%id, group = offsets.len(), "Group drag started");
                self.gesture = SelectionGesture::DraggingSelection { offsets };
            }
            None => {
                self.deselect_all(surface)?;
                self.gesture = SelectionGesture::WindowSelecting {
                    anchor: pointer,
                    corner: pointer,
                };
            }
        }
        Ok(())
    }

    fn on_motion(
        &mut self,
        pointer: Point,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<()> {
        match &mut self.gesture {
            SelectionGesture::Idle => return Ok(()),
            SelectionGesture::DraggingSelection { offsets } => {
                profile_scope!("group_drag_motion");
                for &(id, offset) in offsets.iter() {
                    surface.set_center(id, pointer + offset)?;
                }
            }
            SelectionGesture::WindowSelecting { anchor, corner } => {
                *corner = pointer;
                surface.show_selection_rect(Rect::from_corners(*anchor, pointer), self.rect_color);
            }
        }
        surface.redraw();
        Ok(())
    }

    fn on_release(
        &mut self,
        pointer: Point,
        surface: &mut dyn RenderSurface,
    ) -> InteractionResult<GestureOutcome> {
        self.gesture.set_corner(pointer);

        match self.gesture.reset() {
            SelectionGesture::Idle => Ok(GestureOutcome::Nothing),
            SelectionGesture::DraggingSelection { offsets } => {
                debug!(group = offsets.len(), "Group drag released");
                Ok(GestureOutcome::Moved(offsets.into_iter().map(|(id, _)| id).collect()))
            }
            SelectionGesture::WindowSelecting { anchor, corner } => {
                let rect = Rect::from_corners(anchor, corner);
                surface.hide_selection_rect();

                let inside = self
                    .candidates
                    .iter()
                    .copied()
                    .filter(|&id| surface.center(id).is_some_and(|c| rect.contains(c)))
                    .collect::<Vec<_>>();
                let mut added = Vec::new();
                for id in inside {
                    if self.select(id, surface)? {
                        added.push(id);
                    }
                }
                surface.redraw();

                debug!(?rect, added = added.len(), total = self.selection.len(), "Window selection");
                Ok(if added.is_empty() {
                    GestureOutcome::Nothing
                } else {
                    GestureOutcome::Selected(added)
                })
            }
        }
    }
}
