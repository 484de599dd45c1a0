//! Input validation and normalization.
//!
//! The presentation layer hands over raw textual input per field. Nothing
//! here ever fails or blocks the caller: parse failures, non-finite values,
//! and out-of-domain values coerce to zero, and occupancy is capped at 100.
//! Bounds are advisory at this boundary; the calculator still defends
//! against bad numbers on its own.

/// The four fields of a hotel operating profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    /// Total number of available rooms
    RoomCount,
    /// Average occupancy rate, percent
    OccupancyRate,
    /// Average daily rate, USD
    AverageDailyRate,
    /// Monthly operational cost, USD
    MonthlyOperationalCost,
}

/// Clamps an already-numeric value into the field's safe range.
///
/// Non-finite and negative values become zero. Occupancy is capped at 100;
/// room counts are truncated to whole rooms.
pub fn clamp_field(field: ProfileField, value: f64) -> f64 {
    if !value.is_finite() || value < 0.0 {
        return 0.0;
    }
    match field {
        ProfileField::RoomCount => value.trunc(),
        ProfileField::OccupancyRate => value.min(100.0),
        ProfileField::AverageDailyRate | ProfileField::MonthlyOperationalCost => value,
    }
}

/// Parses raw textual input for a field, then clamps it.
///
/// Accepts plain decimal numbers, optionally with a leading `$` and
/// thousands separators. Anything else coerces to zero.
pub fn parse_field(field: ProfileField, raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value = cleaned.parse::<f64>().unwrap_or(0.0);
    clamp_field(field, value)
}

/// Parses raw room-count input into a whole number of rooms.
pub fn parse_room_count(raw: &str) -> u32 {
    // Saturating float-to-int cast; clamp_field already zeroed negatives.
    parse_field(ProfileField::RoomCount, raw) as u32
}
