/// Value-to-string formatter helpers.
///
/// The command layer converts every domain value through these before
/// building a `KeyValueSet` or `Table`, so rendered output is uniform
/// process-wide and the renderer stays free of domain knowledge. All
/// helpers are total for well-typed input.
use chrono::{DateTime, Utc};

/// The single canonical timestamp layout used everywhere dates appear.
pub const TIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Integer to decimal string, no thousands separators.
#[must_use]
pub fn format_int(value: i64) -> String {
    value.to_string()
}

/// Timestamp to the canonical [`TIME_LAYOUT`] form.
#[must_use]
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIME_LAYOUT).to_string()
}

/// Boolean to the fixed "yes"/"no" literals.
#[must_use]
pub fn format_bool(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(8441), "8441");
        assert_eq!(format_int(-7), "-7");
        assert_eq!(format_int(1_000_000), "1000000");
    }

    #[test]
    fn test_format_timestamp() {
        let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 5).unwrap();
        assert_eq!(format_timestamp(&instant), "2024-05-01 12:30:05");
    }

    #[test]
    fn test_format_bool() {
        assert_eq!(format_bool(true), "yes");
        assert_eq!(format_bool(false), "no");
    }
}
