//! Resolves the operator's timezone for grouping transactions by day.

use time::{Date, OffsetDateTime};
use time_tz::{OffsetDateTimeExt, Tz};

use crate::Error;

/// Looks up a timezone by its canonical name, e.g. "Pacific/Auckland".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `canonical_timezone` is not in the
/// timezone database.
pub fn get_timezone(canonical_timezone: &str) -> Result<&'static Tz, Error> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(canonical_timezone.to_owned()))
}

/// The calendar date of `timestamp` as seen in `timezone`.
pub fn local_date(timestamp: OffsetDateTime, timezone: &Tz) -> Date {
    timestamp.to_timezone(timezone).date()
}
