use chrono::{Duration, Local, NaiveDate};

pub use web_time::Instant as AppInstant;

pub struct TimeUtils;

impl TimeUtils {
    /// en-US short month + numeric day, e.g. `Oct 16`.
    pub const DAY_LABEL_FORMAT: &str = "%b %-d";
}

/// Calendar label used on the chart x-axis.
pub fn day_label(day: NaiveDate) -> String {
    day.format(TimeUtils::DAY_LABEL_FORMAT).to_string()
}

/// `day` shifted by `offset` whole days (negative = past).
/// Saturates at the chrono calendar limits instead of panicking.
pub fn offset_days(day: NaiveDate, offset: i64) -> NaiveDate {
    let shifted = if offset >= 0 {
        day.checked_add_signed(Duration::days(offset))
    } else {
        day.checked_sub_signed(Duration::days(-offset))
    };
    shifted.unwrap_or(if offset >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn label_has_no_zero_padding() {
        assert_eq!(day_label(date(2026, 10, 6)), "Oct 6");
        assert_eq!(day_label(date(2026, 1, 31)), "Jan 31");
    }

    #[test]
    fn offsets_cross_month_and_year() {
        assert_eq!(offset_days(date(2026, 3, 1), -1), date(2026, 2, 28));
        assert_eq!(offset_days(date(2026, 12, 30), 3), date(2027, 1, 2));
        assert_eq!(offset_days(date(2026, 10, 16), 0), date(2026, 10, 16));
    }
}
