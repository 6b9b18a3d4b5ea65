// ABOUTME: Weekly logging compliance: obligation checks, streaks, and compliance rate
// ABOUTME: Partitions a subject's history into Monday-start civil weeks in the reference zone

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarClock;
use crate::models::WeightMeasurement;

/// How the in-progress week participates in the current streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakWeekPolicy {
    /// The current week counts; a week with no entry yet breaks the streak.
    IncludeCurrentWeek,
    /// The streak is measured up to the last completed week; an entry in
    /// the current week extends it, a missing one does not yet break it.
    CompletedWeeksOnly,
}

/// Weekly-compliance KPIs for coaching views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// Whether the current civil week has at least one entry.
    pub weekly_obligation_met: bool,
    /// Consecutive trailing weeks with at least one entry each.
    pub current_streak: u32,
    /// Longest run of consecutive weeks with entries across the history.
    pub longest_streak: u32,
    /// Weeks with at least one entry divided by total weeks in range.
    pub weekly_compliance_rate: f64,
}

impl ComplianceSummary {
    const fn empty() -> Self {
        Self {
            weekly_obligation_met: false,
            current_streak: 0,
            longest_streak: 0,
            weekly_compliance_rate: 0.0,
        }
    }
}

/// Computes weekly-obligation satisfaction and streaks for a subject.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceStreakCalculator {
    clock: CalendarClock,
    week_policy: StreakWeekPolicy,
}

impl ComplianceStreakCalculator {
    /// Create a calculator for the given reference clock and week policy.
    pub const fn new(clock: CalendarClock, week_policy: StreakWeekPolicy) -> Self {
        Self { clock, week_policy }
    }

    /// Compute compliance KPIs over the given series (the reporting window
    /// is whatever the caller passed, typically all history or a bounded
    /// range read from the store) as of `now`.
    pub fn compute(&self, series: &[WeightMeasurement], now: DateTime<Utc>) -> ComplianceSummary {
        let Some(first_date) = series.iter().map(|m| m.measurement_date).min() else {
            return ComplianceSummary::empty();
        };

        let entry_weeks: HashSet<NaiveDate> = series
            .iter()
            .map(|m| self.clock.week_start(m.measurement_date))
            .collect();

        let first_week = self.clock.week_start(first_date);
        // A "now" before the first entry can only come from future-dated
        // caregiver backfill; clamp so the range stays non-empty.
        let current_week = self
            .clock
            .week_start(self.clock.civil_date(now))
            .max(first_week);

        let mut marks = Vec::new();
        let mut week = first_week;
        while week <= current_week {
            marks.push(entry_weeks.contains(&week));
            week += Duration::days(7);
        }

        let met_weeks = marks.iter().filter(|m| **m).count();
        let weekly_obligation_met = marks.last().copied().unwrap_or(false);

        ComplianceSummary {
            weekly_obligation_met,
            current_streak: self.current_streak(&marks),
            longest_streak: longest_run(&marks),
            weekly_compliance_rate: met_weeks as f64 / marks.len() as f64,
        }
    }

    fn current_streak(&self, marks: &[bool]) -> u32 {
        let last = marks.len() - 1;
        match self.week_policy {
            StreakWeekPolicy::IncludeCurrentWeek => trailing_run(marks, last),
            StreakWeekPolicy::CompletedWeeksOnly => {
                if marks[last] {
                    trailing_run(marks, last)
                } else if last > 0 {
                    trailing_run(marks, last - 1)
                } else {
                    0
                }
            }
        }
    }
}

/// Length of the run of `true` marks ending at `end`, inclusive.
fn trailing_run(marks: &[bool], end: usize) -> u32 {
    marks[..=end].iter().rev().take_while(|m| **m).count() as u32
}

fn longest_run(marks: &[bool]) -> u32 {
    let mut longest = 0u32;
    let mut current = 0u32;
    for met in marks {
        if *met {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_run_stops_at_first_gap() {
        let marks = [true, false, true, true];
        assert_eq!(trailing_run(&marks, 3), 2);
        assert_eq!(trailing_run(&marks, 1), 0);
        assert_eq!(trailing_run(&marks, 0), 1);
    }

    #[test]
    fn longest_run_spans_any_position() {
        assert_eq!(longest_run(&[true, true, false, true]), 2);
        assert_eq!(longest_run(&[false, true, true, true]), 3);
        assert_eq!(longest_run(&[]), 0);
        assert_eq!(longest_run(&[false, false]), 0);
    }
}
