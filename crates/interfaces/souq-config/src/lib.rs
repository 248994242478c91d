//! Central configuration constants for runtime limits and defaults.

/// Simulated inquiry latency for the telecom bill flow, in milliseconds.
pub const INQUIRY_DELAY_MS: u64 = 1500;

/// Default number of nights preselected in the hotel booking dialog.
pub const DEFAULT_BOOKING_DAYS: u32 = 1;

/// Minimum allowed nights in the hotel booking dialog.
pub const MIN_BOOKING_DAYS: u32 = 1;

/// Maximum allowed nights in the hotel booking dialog.
pub const MAX_BOOKING_DAYS: u32 = 60;

/// Convenience function to clamp a night count into allowed range.
pub fn clamp_booking_days(v: u32) -> u32 {
    v.clamp(MIN_BOOKING_DAYS, MAX_BOOKING_DAYS)
}
