use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, TimeZone};

/// Whole days between two moments. Partial days floor downwards, so a gap of
/// 3 days and 1 hour counts as 3, and negative gaps floor away from zero.
pub fn whole_days_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().div_euclid(86_400)
}

/// Returns start of the next day.
pub fn next_day_start<Tz: TimeZone>(date: DateTime<Tz>) -> DateTime<Tz> {
    (date + Duration::days(1)).with_time(NaiveTime::MIN).unwrap()
}

/// Human form used for cooldown messages.
pub fn format_days_hours(v: Duration) -> String {
    format!("{} day(s), {} hour(s)", v.num_days(), v.num_hours() % 24)
}
