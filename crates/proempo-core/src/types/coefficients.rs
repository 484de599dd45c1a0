//! Improvement coefficient configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The improvement factors a Pro Empo engagement is projected to deliver.
///
/// These are passed explicitly into the calculator rather than read from
/// ambient global state, so alternative scenarios stay testable. The
/// [`Default`] value carries the product's published figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprovementCoefficients {
    /// Projected revenue uplift as a fraction (0.35 = +35%)
    pub revenue_uplift_factor: f64,

    /// Projected reduction of annual operational cost as a fraction
    pub operational_cost_reduction_factor: f64,

    /// One-time implementation cost per room, USD
    pub per_room_implementation_cost: f64,
}

impl Default for ImprovementCoefficients {
    fn default() -> Self {
        Self {
            revenue_uplift_factor: 0.35,
            operational_cost_reduction_factor: 0.28,
            per_room_implementation_cost: 500.0,
        }
    }
}

impl ImprovementCoefficients {
    /// Checks that every coefficient is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("revenue_uplift_factor", self.revenue_uplift_factor),
            (
                "operational_cost_reduction_factor",
                self.operational_cost_reduction_factor,
            ),
            (
                "per_room_implementation_cost",
                self.per_room_implementation_cost,
            ),
        ] {
            if !value.is_finite() {
                return Err(Error::config(format!("{name} must be finite")));
            }
            if value < 0.0 {
                return Err(Error::config(format!("{name} must not be negative")));
            }
        }
        Ok(())
    }

    /// Parses coefficients from a JSON document and validates them.
    ///
    /// Missing fields fall back to the defaults, so a partial override like
    /// `{"revenue_uplift_factor": 0.2}` is accepted.
    pub fn from_json(json: &str) -> Result<Self> {
        let coefficients: Self = serde_json::from_str(json)?;
        coefficients.validate()?;
        Ok(coefficients)
    }

    /// Reads and validates coefficients from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
