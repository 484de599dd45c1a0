//! Projection result types.

use serde::{Deserialize, Serialize};

/// Why a projection could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum NotComputableReason {
    /// `room_count` is zero, so the implementation cost (and with it ROI
    /// and payback) is undefined.
    ZeroImplementationCost,

    /// The annual benefit is zero, so the payback period is undefined.
    ZeroAnnualBenefit,
}

impl std::fmt::Display for NotComputableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotComputableReason::ZeroImplementationCost => write!(f, "zero implementation cost"),
            NotComputableReason::ZeroAnnualBenefit => write!(f, "zero annual benefit"),
        }
    }
}

/// The derived financial metrics for one operating profile.
///
/// Monetary and percentage fields are rounded to the nearest whole unit;
/// the payback period is rounded to one decimal place. Figures are always
/// recomputed as a whole, never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionFigures {
    /// Annual revenue at the current occupancy and rate, USD
    pub current_annual_revenue: i64,

    /// Annual revenue after the projected uplift, USD
    pub projected_annual_revenue: i64,

    /// Annual operational savings from the cost reduction, USD
    pub annual_operational_savings: i64,

    /// Total annual benefit (revenue uplift plus savings), USD
    pub annual_benefit: i64,

    /// One-time implementation cost, USD
    pub implementation_cost: i64,

    /// First-year return on investment, percent
    pub roi_percent: i64,

    /// Months until the cumulative benefit repays the implementation cost
    pub payback_months: f64,
}

/// The outcome of running the projection calculator.
///
/// A projection either yields a full set of figures or an explicit
/// `NotComputable` marker. The marker is not an error: consumers are
/// expected to render it as such rather than showing Infinity or NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Projection {
    /// The calculator produced a full set of figures.
    Computed(ProjectionFigures),

    /// ROI or payback is undefined for this profile.
    NotComputable {
        /// Which quantity made the projection undefined
        reason: NotComputableReason,
    },
}

impl Projection {
    /// Returns `true` if the projection carries figures.
    pub fn is_computed(&self) -> bool {
        matches!(self, Projection::Computed(_))
    }

    /// Returns `true` if the projection is the `NotComputable` marker.
    pub fn is_not_computable(&self) -> bool {
        matches!(self, Projection::NotComputable { .. })
    }

    /// Returns the figures, if any.
    pub fn figures(&self) -> Option<&ProjectionFigures> {
        match self {
            Projection::Computed(figures) => Some(figures),
            Projection::NotComputable { .. } => None,
        }
    }
}
