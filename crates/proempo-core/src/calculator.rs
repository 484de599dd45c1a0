//! The pure projection calculator.
//!
//! `project` is a deterministic function of a profile and a set of
//! coefficients: identical inputs yield bit-identical output. All
//! intermediate arithmetic runs unrounded; rounding is applied only to the
//! published figures.

use crate::types::{
    HotelOperatingProfile, ImprovementCoefficients, NotComputableReason, Projection,
    ProjectionFigures,
};

/// Nights per projected year.
const NIGHTS_PER_YEAR: f64 = 365.0;

/// Computes the full set of derived financial metrics for a profile.
///
/// Inputs are treated defensively: any non-finite or negative number is
/// taken as zero, so NaN or negative financial figures can never propagate
/// into the result. Profiles where ROI or payback is undefined produce
/// [`Projection::NotComputable`] rather than Infinity or NaN.
///
/// # Examples
///
/// ```
/// use proempo_core::{calculator, HotelOperatingProfile, ImprovementCoefficients};
///
/// let profile = HotelOperatingProfile::new(100, 75.0, 150.0, 50000.0);
/// let projection = calculator::project(&profile, &ImprovementCoefficients::default());
/// assert_eq!(projection.figures().map(|f| f.current_annual_revenue), Some(4_106_250));
/// ```
pub fn project(
    profile: &HotelOperatingProfile,
    coefficients: &ImprovementCoefficients,
) -> Projection {
    let room_count = f64::from(profile.room_count);
    let occupancy_rate = non_negative(profile.occupancy_rate);
    let average_daily_rate = non_negative(profile.average_daily_rate);
    let monthly_operational_cost = non_negative(profile.monthly_operational_cost);

    let revenue_uplift = non_negative(coefficients.revenue_uplift_factor);
    let cost_reduction = non_negative(coefficients.operational_cost_reduction_factor);
    let per_room_cost = non_negative(coefficients.per_room_implementation_cost);

    // Intermediates pass through the same clamp as the inputs: a product
    // that overflows to infinity must not reach the subtraction below and
    // turn into NaN.
    let current_annual_revenue = non_negative(
        room_count * (occupancy_rate / 100.0) * average_daily_rate * NIGHTS_PER_YEAR,
    );
    let projected_annual_revenue = non_negative(current_annual_revenue * (1.0 + revenue_uplift));
    let annual_operational_savings = non_negative(monthly_operational_cost * 12.0 * cost_reduction);
    let annual_benefit = non_negative(
        (projected_annual_revenue - current_annual_revenue) + annual_operational_savings,
    );
    let implementation_cost = non_negative(room_count * per_room_cost);

    if implementation_cost == 0.0 {
        return Projection::NotComputable {
            reason: NotComputableReason::ZeroImplementationCost,
        };
    }
    if annual_benefit == 0.0 {
        return Projection::NotComputable {
            reason: NotComputableReason::ZeroAnnualBenefit,
        };
    }

    let roi_percent = ((annual_benefit - implementation_cost) / implementation_cost) * 100.0;
    let payback_months = implementation_cost / (annual_benefit / 12.0);

    Projection::Computed(ProjectionFigures {
        current_annual_revenue: round_whole(current_annual_revenue),
        projected_annual_revenue: round_whole(projected_annual_revenue),
        annual_operational_savings: round_whole(annual_operational_savings),
        annual_benefit: round_whole(annual_benefit),
        implementation_cost: round_whole(implementation_cost),
        roi_percent: round_whole(roi_percent),
        payback_months: round_tenth(payback_months),
    })
}

/// Non-finite and negative values collapse to zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Rounds to the nearest whole unit. Saturates on overflow.
fn round_whole(value: f64) -> i64 {
    value.round() as i64
}

/// Rounds to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
