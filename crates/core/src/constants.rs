//! Constants used throughout the clinic core crate.

use chrono::Weekday;

/// Canonical week order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Canonical lowercase name of a weekday, used in entity stringification and error messages.
pub fn weekday_name(day: &Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Format used when an entity renders a date-time.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
