//! Crate-wide constants.
//!
//! Centralizes default values so `Settings::default()` and the tests agree on
//! the same numbers.

use crate::types::Color;

// ============================================================================
// Hit Testing
// ============================================================================

/// Extra pick radius around an entity's edge, in data units
pub const DEFAULT_PICK_TOLERANCE: f64 = 0.05;

/// Radius of a rendered graph node, in data units
pub const DEFAULT_NODE_RADIUS: f64 = 0.25;

// ============================================================================
// Grid Snap
// ============================================================================

/// Grid cell size; 1.0 snaps to integer coordinates
pub const DEFAULT_GRID_SPACING: f64 = 1.0;

// ============================================================================
// Ghost Preview
// ============================================================================

/// Alpha multiplier applied to the ghost duplicate left at the drag origin
pub const DEFAULT_GHOST_ALPHA: f32 = 0.5;

// ============================================================================
// Colors
// ============================================================================

/// Fill for selected entities
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::BLACK;

/// Outline of the window-selection rectangle (crimson)
pub const DEFAULT_SELECTION_RECT_COLOR: Color = Color::rgb(0xdc, 0x14, 0x3c);

/// Fill for graph nodes
pub const DEFAULT_NODE_COLOR: Color = Color::rgb(0x1f, 0x77, 0xb4);

/// Stroke for graph edges
pub const DEFAULT_EDGE_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);

// ============================================================================
// Graph View
// ============================================================================

/// Padding added around node positions when fitting initial view bounds
pub const DEFAULT_VIEW_MARGIN: f64 = 1.0;

// ============================================================================
// Performance
// ============================================================================

/// Redraws slower than this are logged; every motion event pays for one
pub const SLOW_REDRAW_MS: f64 = 16.67;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "nodeboard";

/// Settings file name inside `SETTINGS_DIR_NAME`
pub const SETTINGS_FILE_NAME: &str = "settings.json";
