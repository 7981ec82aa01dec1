//! Interaction settings, persisted as JSON.
//!
//! Every field has a default, so a settings file only needs the keys it
//! wants to override. Values are validated on load; a bad file is an error
//! from `load_from` and a logged fallback to defaults from `load`.

use crate::constants::{
    DEFAULT_EDGE_COLOR, DEFAULT_GHOST_ALPHA, DEFAULT_GRID_SPACING, DEFAULT_HIGHLIGHT_COLOR,
    DEFAULT_NODE_COLOR, DEFAULT_NODE_RADIUS, DEFAULT_PICK_TOLERANCE, DEFAULT_SELECTION_RECT_COLOR,
    DEFAULT_VIEW_MARGIN, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::input::RoundingMode;
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A value parsed fine but is out of range
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pick radius beyond an entity's edge
    pub pick_tolerance: f64,
    /// Radius of rendered graph nodes
    pub node_radius: f64,
    pub grid_spacing: f64,
    pub rounding: RoundingMode,
    /// Alpha multiplier for the ghost left at a drag's origin
    pub ghost_alpha: f32,
    pub highlight_color: Color,
    pub selection_rect_color: Color,
    pub node_color: Color,
    pub edge_color: Color,
    /// Padding around nodes when the graph view fits fresh view bounds
    pub view_margin: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pick_tolerance: DEFAULT_PICK_TOLERANCE,
            node_radius: DEFAULT_NODE_RADIUS,
            grid_spacing: DEFAULT_GRID_SPACING,
            rounding: RoundingMode::default(),
            ghost_alpha: DEFAULT_GHOST_ALPHA,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            selection_rect_color: DEFAULT_SELECTION_RECT_COLOR,
            node_color: DEFAULT_NODE_COLOR,
            edge_color: DEFAULT_EDGE_COLOR,
            view_margin: DEFAULT_VIEW_MARGIN,
        }
    }
}

impl Settings {
    /// `<config_dir>/nodeboard/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Load from the default path, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "Failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> SettingsResult<Self> {
        let settings: Settings = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        fn non_negative(field: &'static str, value: f64) -> SettingsResult<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                })
            }
        }

        non_negative("pick_tolerance", self.pick_tolerance)?;
        non_negative("node_radius", self.node_radius)?;
        non_negative("view_margin", self.view_margin)?;
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(SettingsError::Invalid {
                field: "grid_spacing",
                reason: format!("expected a positive number, got {}", self.grid_spacing),
            });
        }
        if !(0.0..=1.0).contains(&self.ghost_alpha) {
            return Err(SettingsError::Invalid {
                field: "ghost_alpha",
                reason: format!("expected a value in 0..=1, got {}", self.ghost_alpha),
            });
        }
        Ok(())
    }

    pub fn with_pick_tolerance(mut self, pick_tolerance: f64) -> Self {
        self.pick_tolerance = pick_tolerance;
        self
    }

    pub fn with_grid_spacing(mut self, grid_spacing: f64) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }
}
