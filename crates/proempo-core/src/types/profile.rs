//! Hotel operating profile types.

use serde::{Deserialize, Serialize};

use crate::normalize::{self, ProfileField};

/// A hotel's operating parameters at one point in time.
///
/// Profiles are immutable snapshots: each edit in the presentation layer
/// replaces the whole value rather than mutating a field in place. The
/// calculator treats whatever it receives defensively, but well-formed
/// profiles come from [`HotelOperatingProfile::from_raw`] or are passed
/// through [`HotelOperatingProfile::sanitized`] first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelOperatingProfile {
    /// Total number of available rooms
    pub room_count: u32,

    /// Average occupancy rate as a percentage, 0–100
    pub occupancy_rate: f64,

    /// Average daily rate (revenue per occupied room per night), USD
    pub average_daily_rate: f64,

    /// Current monthly operational expenses, USD
    pub monthly_operational_cost: f64,
}

impl HotelOperatingProfile {
    /// Creates a profile from already-numeric values.
    pub fn new(
        room_count: u32,
        occupancy_rate: f64,
        average_daily_rate: f64,
        monthly_operational_cost: f64,
    ) -> Self {
        Self {
            room_count,
            occupancy_rate,
            average_daily_rate,
            monthly_operational_cost,
        }
    }

    /// Builds a profile from raw textual input, one string per field.
    ///
    /// Never fails: unparseable, non-finite, or out-of-domain values coerce
    /// to zero and occupancy is capped at 100.
    ///
    /// # Examples
    ///
    /// ```
    /// use proempo_core::HotelOperatingProfile;
    ///
    /// let profile = HotelOperatingProfile::from_raw("120", "not a number", "150", "50000");
    /// assert_eq!(profile.room_count, 120);
    /// assert_eq!(profile.occupancy_rate, 0.0);
    /// ```
    pub fn from_raw(rooms: &str, occupancy: &str, adr: &str, monthly_cost: &str) -> Self {
        Self {
            room_count: normalize::parse_room_count(rooms),
            occupancy_rate: normalize::parse_field(ProfileField::OccupancyRate, occupancy),
            average_daily_rate: normalize::parse_field(ProfileField::AverageDailyRate, adr),
            monthly_operational_cost: normalize::parse_field(
                ProfileField::MonthlyOperationalCost,
                monthly_cost,
            ),
        }
    }

    /// Returns a copy of this profile with all field clamps re-applied.
    ///
    /// Useful when a profile was constructed directly (e.g. deserialized)
    /// rather than via [`HotelOperatingProfile::from_raw`].
    pub fn sanitized(&self) -> Self {
        Self {
            room_count: self.room_count,
            occupancy_rate: normalize::clamp_field(ProfileField::OccupancyRate, self.occupancy_rate),
            average_daily_rate: normalize::clamp_field(
                ProfileField::AverageDailyRate,
                self.average_daily_rate,
            ),
            monthly_operational_cost: normalize::clamp_field(
                ProfileField::MonthlyOperationalCost,
                self.monthly_operational_cost,
            ),
        }
    }
}
