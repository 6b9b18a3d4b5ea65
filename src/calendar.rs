// ABOUTME: Civil date and week arithmetic in the fixed reference timezone
// ABOUTME: Decouples edit windows and weekly partitions from the host machine's locale

//! Calendar arithmetic in a fixed reference timezone.
//!
//! Every civil-date decision in the engine (edit windows, weekly
//! partitions, backfill detection) goes through a [`CalendarClock`] bound to
//! one IANA zone, so results are reproducible no matter where the service
//! is deployed.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves instants to civil dates in the engine's reference timezone.
#[derive(Debug, Clone, Copy)]
pub struct CalendarClock {
    zone: Tz,
}

impl CalendarClock {
    /// Create a clock bound to the given reference zone.
    pub const fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// The reference zone this clock resolves against.
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Civil date of an instant in the reference zone.
    pub fn civil_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.zone).date_naive()
    }

    /// First instant of a civil day. A start of day swallowed by a DST gap
    /// resolves to the first valid instant after the gap.
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        self.resolve_local(date.and_time(NaiveTime::MIN), false)
    }

    /// Last representable instant of a civil day (23:59:59.999999999 local).
    /// During a DST fold the later of the two occurrences wins, keeping the
    /// interval closed right up to the next civil date.
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let last_nanosecond =
            (date + Duration::days(1)).and_time(NaiveTime::MIN) - Duration::nanoseconds(1);
        self.resolve_local(last_nanosecond, true)
    }

    /// Monday of the civil week containing `date`.
    pub fn week_start(&self, date: NaiveDate) -> NaiveDate {
        let offset = date.weekday().num_days_from_monday();
        date - Duration::days(i64::from(offset))
    }

    /// Whole calendar days from `start` to `end` (negative if reversed).
    pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
        end.signed_duration_since(start).num_days()
    }

    fn resolve_local(&self, local: chrono::NaiveDateTime, prefer_latest: bool) -> DateTime<Utc> {
        let mut candidate = local;
        loop {
            match self.zone.from_local_datetime(&candidate) {
                LocalResult::Single(t) => return t.with_timezone(&Utc),
                LocalResult::Ambiguous(earliest, latest) => {
                    let resolved = if prefer_latest { latest } else { earliest };
                    return resolved.with_timezone(&Utc);
                }
                // Local time skipped by a DST gap; step past it.
                LocalResult::None => candidate += Duration::hours(1),
            }
        }
    }
}

impl Default for CalendarClock {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_REFERENCE_TIMEZONE)
    }
}
