//! Rendering of date-time and time-span values in the engine's canonical text form.

use chrono::{DateTime, TimeDelta, Utc};

/// Nanoseconds in one 100ns tick, the finest unit of the text form.
const NANOS_PER_TICK: u32 = 100;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

const SECONDS_PER_DAY: i64 = 86_400;

/// Formats a time span as `[-][d.]hh:mm:ss[.fffffff]`.
pub fn format_timespan(span: &TimeDelta) -> String {
    let negative = *span < TimeDelta::zero();
    let magnitude = span.abs();

    let total_seconds = magnitude.num_seconds();
    let ticks = magnitude.subsec_nanos().unsigned_abs() / NANOS_PER_TICK;

    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let sign = if negative { "-" } else { "" };
    let day_prefix = if days > 0 {
        format!("{days}.")
    } else {
        String::new()
    };
    let fraction = if ticks > 0 {
        format!(".{ticks:07}")
    } else {
        String::new()
    };

    format!("{sign}{day_prefix}{hours:02}:{minutes:02}:{seconds:02}{fraction}")
}

/// Formats an instant as `yyyy-MM-ddTHH:mm:ss.fffffffZ`.
///
/// A leap second is written as second `60`.
pub fn format_datetime(instant: &DateTime<Utc>) -> String {
    // leap seconds carry their extra second in the nanoseconds
    let ticks = (instant.timestamp_subsec_nanos() % NANOS_PER_SECOND) / NANOS_PER_TICK;

    format!("{}.{ticks:07}Z", instant.format("%Y-%m-%dT%H:%M:%S"))
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
    use test_log::test;

    use super::{format_datetime, format_timespan};

    #[test]
    fn timespans() {
        assert_eq!(format_timespan(&TimeDelta::zero()), "00:00:00");
        assert_eq!(format_timespan(&TimeDelta::minutes(90)), "01:30:00");
        assert_eq!(
            format_timespan(&(TimeDelta::days(2) + TimeDelta::milliseconds(1500))),
            "2.00:00:01.5000000"
        );
        assert_eq!(format_timespan(&TimeDelta::seconds(-5)), "-00:00:05");
    }

    #[test]
    fn datetimes() {
        let instant = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_datetime(&instant), "2023-01-02T03:04:05.0000000Z");

        let leap_second = NaiveDate::from_ymd_opt(2016, 12, 31)
            .and_then(|date| date.and_hms_nano_opt(23, 59, 59, 1_500_000_000))
            .unwrap();
        assert_eq!(
            format_datetime(&Utc.from_utc_datetime(&leap_second)),
            "2016-12-31T23:59:60.5000000Z"
        );
    }
}
