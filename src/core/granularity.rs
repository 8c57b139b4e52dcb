use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike, Weekday};
use clap::ValueEnum;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Granularity {
    Hourly,
    Daily,
    Weekly,
}

impl Granularity {
    /// Start of the bucket the timestamp falls into.
    ///
    /// A pure function of the timestamp and the granularity, never of the
    /// surrounding record set, so the same hour lands in the same bucket no
    /// matter which date range is being reported. Weeks start on Monday
    /// (ISO 8601).
    #[must_use]
    pub fn bucket_start(self, time: NaiveDateTime) -> NaiveDateTime {
        match self {
            // Truncated in calendar space: the nanosecond-timestamp route
            // overflows past the year 2262.
            Self::Hourly => {
                time.date().and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(time.hour()))
            }
            Self::Daily => time.date().and_time(NaiveTime::MIN),
            Self::Weekly => time.date().week(Weekday::Mon).first_day().and_time(NaiveTime::MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn hourly_truncates_to_the_hour() {
        assert_eq!(Granularity::Hourly.bucket_start(at(3, 14, 59)), at(3, 14, 0));
    }

    #[test]
    fn daily_truncates_to_midnight() {
        assert_eq!(Granularity::Daily.bucket_start(at(3, 14, 59)), at(3, 0, 0));
    }

    #[test]
    fn hourly_handles_far_future_timestamps() {
        let time = NaiveDate::from_ymd_opt(3000, 1, 1)
            .unwrap()
            .and_hms_opt(14, 59, 0)
            .unwrap();
        assert_eq!(
            Granularity::Hourly.bucket_start(time),
            NaiveDate::from_ymd_opt(3000, 1, 1).unwrap().and_hms_opt(14, 0, 0).unwrap()
        );
    }

    #[test]
    fn weekly_starts_on_monday() {
        // 2024-01-03 is a Wednesday; its ISO week starts on 2024-01-01.
        assert_eq!(Granularity::Weekly.bucket_start(at(3, 14, 59)), at(1, 0, 0));
        // 2024-01-07 is a Sunday and still belongs to the same week.
        assert_eq!(Granularity::Weekly.bucket_start(at(7, 23, 0)), at(1, 0, 0));
        // The next Monday opens a new bucket.
        assert_eq!(Granularity::Weekly.bucket_start(at(8, 0, 0)), at(8, 0, 0));
    }
}
