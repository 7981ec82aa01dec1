//! Grid quantization applied when a snapping drag is released.

use crate::constants::DEFAULT_GRID_SPACING;
use crate::error::{InteractionError, InteractionResult};
use crate::types::Point;
use serde::{Deserialize, Serialize};

/// How a coordinate exactly halfway between two grid lines is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Banker's rounding: 0.5 -> 0, 1.5 -> 2, -0.5 -> -0
    #[default]
    TiesToEven,
    /// 0.5 -> 1, -0.5 -> -1
    TiesAwayFromZero,
}

impl RoundingMode {
    #[inline]
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::TiesToEven => value.round_ties_even(),
            Self::TiesAwayFromZero => value.round(),
        }
    }
}

/// Snaps each axis independently to the nearest multiple of `spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSnap {
    spacing: f64,
    rounding: RoundingMode,
}

impl GridSnap {
    /// Rejects a spacing that is zero, negative or not finite.
    pub fn new(spacing: f64, rounding: RoundingMode) -> InteractionResult<Self> {
        if !(spacing.is_finite() && spacing > 0.0) {
            return Err(InteractionError::InvalidGridSpacing(spacing));
        }
        Ok(Self { spacing, rounding })
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    pub fn snap_value(&self, value: f64) -> f64 {
        self.rounding.round(value / self.spacing) * self.spacing
    }

    pub fn snap(&self, p: Point) -> Point {
        Point::new(self.snap_value(p.x), self.snap_value(p.y))
    }
}

impl Default for GridSnap {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_GRID_SPACING,
            rounding: RoundingMode::default(),
        }
    }
}
