//! Solver settings, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::brent::Tolerance;
use crate::error::{EquilibriumError, Result};

/// Search interval for the stand-off radius, in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket {
    lower_au: f64,
    upper_au: f64,
}

impl Bracket {
    /// Requires finite bounds with `0 < lower < upper`.
    pub fn new(lower_au: f64, upper_au: f64) -> Result<Self> {
        let valid = lower_au.is_finite() && upper_au.is_finite() && lower_au > 0.0 && lower_au < upper_au;
        if valid {
            Ok(Self { lower_au, upper_au })
        } else {
            Err(EquilibriumError::InvalidBracket {
                lower: lower_au,
                upper: upper_au,
            })
        }
    }

    pub fn lower_au(&self) -> f64 {
        self.lower_au
    }

    pub fn upper_au(&self) -> f64 {
        self.upper_au
    }
}

impl Default for Bracket {
    /// [1e-4, 1000] AU
    fn default() -> Self {
        Self {
            lower_au: 1e-4,
            upper_au: 1000.0,
        }
    }
}

/// Bracket and stopping rule for the stand-off search.
///
/// Missing JSON fields take their default values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverSettings {
    /// Inner edge of the search bracket (AU)
    pub lower_au: f64,
    /// Outer edge of the search bracket (AU)
    pub upper_au: f64,
    /// Absolute tolerance on the root (AU)
    pub x_tolerance: f64,
    pub relative_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let bracket = Bracket::default();
        let tolerance = Tolerance::default();
        Self {
            lower_au: bracket.lower_au,
            upper_au: bracket.upper_au,
            x_tolerance: tolerance.x_tolerance,
            relative_tolerance: tolerance.relative_tolerance,
            max_iterations: tolerance.max_iterations,
        }
    }
}

impl SolverSettings {
    /// Load from a JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(settings) => {
                    log::info!("Loaded solver settings from {:?}", path.as_ref());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse solver settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Solver settings {:?} unreadable ({}), using defaults", path.as_ref(), e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_bracket(mut self, bracket: Bracket) -> Self {
        self.lower_au = bracket.lower_au;
        self.upper_au = bracket.upper_au;
        self
    }

    /// Validated search bracket.
    pub fn bracket(&self) -> Result<Bracket> {
        Bracket::new(self.lower_au, self.upper_au)
    }

    pub fn tolerance(&self) -> Tolerance {
        Tolerance {
            x_tolerance: self.x_tolerance,
            relative_tolerance: self.relative_tolerance,
            max_iterations: self.max_iterations,
        }
    }
}
