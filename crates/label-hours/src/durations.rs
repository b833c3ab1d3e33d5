//! Per-weekday accumulation of work time.

use std::collections::HashMap;

use chrono::{Duration, Weekday};

/// Canonical display order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name of a weekday ("Monday", not chrono's "Mon").
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Monday through Friday.
pub fn is_workday(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Work time keyed by weekday.
///
/// Only strictly positive durations are stored, so an interval that touches
/// a work window without overlapping it leaves no entry behind. Adding to a
/// weekday that already has an entry sums the two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkDurations {
    by_day: HashMap<Weekday, Duration>,
}

impl WorkDurations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `duration` to `weekday`. Zero and negative durations are dropped.
    pub fn add(&mut self, weekday: Weekday, duration: Duration) {
        if duration <= Duration::zero() {
            return;
        }
        *self.by_day.entry(weekday).or_insert_with(Duration::zero) += duration;
    }

    /// Fold another map into this one, summing shared weekdays.
    pub fn merge(&mut self, other: &WorkDurations) {
        for (weekday, duration) in &other.by_day {
            self.add(*weekday, *duration);
        }
    }

    pub fn get(&self, weekday: Weekday) -> Option<Duration> {
        self.by_day.get(&weekday).copied()
    }

    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }

    pub fn total(&self) -> Duration {
        self.by_day.values().fold(Duration::zero(), |acc, d| acc + *d)
    }

    /// Entries in Monday..Sunday order, regardless of insertion order.
    pub fn sorted(&self) -> Vec<(Weekday, Duration)> {
        WEEK.iter()
            .filter_map(|day| self.get(*day).map(|d| (*day, d)))
            .collect()
    }
}

impl FromIterator<(Weekday, Duration)> for WorkDurations {
    fn from_iter<I: IntoIterator<Item = (Weekday, Duration)>>(iter: I) -> Self {
        let mut durations = WorkDurations::new();
        for (weekday, duration) in iter {
            durations.add(weekday, duration);
        }
        durations
    }
}
