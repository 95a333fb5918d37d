//! Tunable constants owned by a world.
//!
//! Loadable from any serde format; missing fields fall back to defaults:
//!
//! ```json
//! { "gravitational_constant": 1.0, "record_snapshots": true }
//! ```

use serde::{Deserialize, Serialize};

use super::EngineError;

/// Newton's gravitational constant in SI units.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Per-world simulation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// `G` in `F = G·m1·m2/r²` for the pairwise attraction.
    pub gravitational_constant: f64,
    /// Keep per-phase state in each `StepReport` (costs one allocation per phase).
    pub record_snapshots: bool,
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        let g = self.gravitational_constant;
        if !g.is_finite() || g < 0.0 {
            return Err(EngineError::InvalidConfig {
                field: "gravitational_constant",
                value: g,
            });
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            record_snapshots: false,
        }
    }
}
