//! Gesture state machines for the drag controller and the window selector.
//!
//! Each controller keeps exactly one enum value instead of a pair of
//! `currently_dragging` / `currently_selecting` flags, so a gesture can never
//! be both at once and a drag target cannot outlive its gesture.
//!
//! ## State Transitions
//!
//! ```text
//! DragGesture:
//! Idle -> AwaitingPick              (press)
//! AwaitingPick -> Dragging          (pick on a managed entity)
//! Any -> Idle                       (release)
//!
//! SelectionGesture:
//! Idle -> DraggingSelection         (press on a candidate)
//! Idle -> WindowSelecting           (press on empty space)
//! Any -> Idle                       (release)
//! ```

use crate::types::{EntityId, Point, Rect};

/// An active single-entity drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Entity being moved
    pub target: EntityId,
    /// Entity center minus the pointer position at pick time
    pub offset: Point,
    /// Duplicate left at the drag origin (ghost preview mode only)
    pub ghost: Option<EntityId>,
}

/// Gesture state of a `DragController`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragGesture {
    /// No button held
    #[default]
    Idle,

    /// Button held, nothing picked (yet)
    AwaitingPick,

    /// Button held over a picked entity
    Dragging(DragSession),
}

impl DragGesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// True between press and release, whether or not anything was picked.
    pub fn is_open(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<EntityId> {
        self.session().map(|s| s.target)
    }

    pub fn offset(&self) -> Option<Point> {
        self.session().map(|s| s.offset)
    }

    pub fn ghost(&self) -> Option<EntityId> {
        self.session().and_then(|s| s.ghost)
    }

    /// Reset to Idle, returning the previous state.
    pub fn reset(&mut self) -> DragGesture {
        std::mem::take(self)
    }
}

/// Gesture state of a `WindowSelector`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionGesture {
    #[default]
    Idle,

    /// Moving every selected entity as one rigid group
    DraggingSelection {
        /// Per-entity center minus the press position
        offsets: Vec<(EntityId, Point)>,
    },

    /// Drawing a selection rectangle
    WindowSelecting {
        /// Press position
        anchor: Point,
        /// Latest pointer position
        corner: Point,
    },
}

impl SelectionGesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_selection(&self) -> bool {
        matches!(self, Self::DraggingSelection { .. })
    }

    pub fn is_window_selecting(&self) -> bool {
        matches!(self, Self::WindowSelecting { .. })
    }

    /// The rectangle spanned so far, if window selecting.
    pub fn window(&self) -> Option<Rect> {
        match self {
            Self::WindowSelecting { anchor, corner } => Some(Rect::from_corners(*anchor, *corner)),
            _ => None,
        }
    }

    /// Update the far corner. No-op outside window selection.
    pub fn set_corner(&mut self, pointer: Point) {
        if let Self::WindowSelecting { corner, .. } = self {
            *corner = pointer;
        }
    }

    pub fn reset(&mut self) -> SelectionGesture {
        std::mem::take(self)
    }
}
