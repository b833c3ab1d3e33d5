//! Clip arbitrary time spans to a weekday business-hours window.
//!
//! A [`WorkCalendar`] names the timezone and the daily window (09:00–17:00
//! Sydney by default). [`work_time_between`] walks every calendar date a
//! span touches, drops weekends, intersects the span with that day's window
//! and files the overlap under the date's weekday.
//!
//! Clamping is day-local: each date intersects the *original* span with its
//! own window, so an early start on day one never shifts the comparison for
//! a later day.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::durations::{is_workday, WorkDurations};
use crate::error::{LabelHoursError, Result};

/// Timezone used when nothing else is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Australia::Sydney;

// ── WorkCalendar ────────────────────────────────────────────────────────────

/// The timezone and daily window that business hours are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkCalendar {
    timezone: Tz,
    day_start: NaiveTime,
    day_end: NaiveTime,
}

impl Default for WorkCalendar {
    /// 09:00–17:00 in `Australia/Sydney`.
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            day_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
        }
    }
}

impl WorkCalendar {
    /// Build a calendar with a custom timezone and window.
    ///
    /// # Errors
    ///
    /// Returns [`LabelHoursError::InvalidWindow`] unless `day_start` is
    /// strictly before `day_end`.
    pub fn new(timezone: Tz, day_start: NaiveTime, day_end: NaiveTime) -> Result<Self> {
        if day_start >= day_end {
            return Err(LabelHoursError::InvalidWindow(format!(
                "start {day_start} must be before end {day_end}"
            )));
        }
        Ok(Self {
            timezone,
            day_start,
            day_end,
        })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn day_start(&self) -> NaiveTime {
        self.day_start
    }

    pub fn day_end(&self) -> NaiveTime {
        self.day_end
    }

    /// The most work time a single day can contribute.
    pub fn window_length(&self) -> Duration {
        self.day_end - self.day_start
    }

    /// The `[day_start, day_end]` window on `date`, in the calendar timezone.
    pub fn window_on(&self, date: NaiveDate) -> Result<(DateTime<Tz>, DateTime<Tz>)> {
        Ok((
            self.localize(date.and_time(self.day_start))?,
            self.localize(date.and_time(self.day_end))?,
        ))
    }

    fn localize(&self, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
        // Ambiguous wall-clock times (DST fall-back) resolve to the first occurrence.
        self.timezone
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| {
                LabelHoursError::InvalidDatetime(format!(
                    "{naive} does not exist in {}",
                    self.timezone
                ))
            })
    }
}

// ── work_time_between ───────────────────────────────────────────────────────

/// Work time between `start` and `end`, per weekday.
///
/// Both instants are converted to the calendar timezone first, so callers can
/// pass UTC, fixed-offset or zoned datetimes interchangeably.
///
/// # Returns
///
/// A [`WorkDurations`] with one entry per weekday that overlapped a work
/// window for a non-zero amount of time. Weekends never appear. An empty map
/// means the span missed every window.
///
/// # Errors
///
/// Returns [`LabelHoursError::InvertedInterval`] if `end` is before `start`,
/// or [`LabelHoursError::InvalidDatetime`] if a window boundary does not
/// exist on some date in the calendar timezone.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Weekday};
/// use chrono_tz::Australia::Sydney;
/// use label_hours::{work_time_between, WorkCalendar};
///
/// // Monday 07:00 to 20:00 clips to the full 8-hour window.
/// let start = Sydney.with_ymd_and_hms(2026, 3, 16, 7, 0, 0).unwrap();
/// let end = Sydney.with_ymd_and_hms(2026, 3, 16, 20, 0, 0).unwrap();
/// let hours = work_time_between(&start, &end, &WorkCalendar::default()).unwrap();
/// assert_eq!(hours.get(Weekday::Mon), Some(chrono::Duration::hours(8)));
/// ```
pub fn work_time_between<S: TimeZone, E: TimeZone>(
    start: &DateTime<S>,
    end: &DateTime<E>,
    calendar: &WorkCalendar,
) -> Result<WorkDurations> {
    let start = start.with_timezone(&calendar.timezone);
    let end = end.with_timezone(&calendar.timezone);

    if end < start {
        return Err(LabelHoursError::InvertedInterval {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
        });
    }

    let mut durations = WorkDurations::new();
    let last_date = end.date_naive();
    let mut date = start.date_naive();

    while date <= last_date {
        if is_workday(date.weekday()) {
            let (day_start, day_end) = calendar.window_on(date)?;
            if start <= day_end && end >= day_start {
                let overlap = end.min(day_end) - start.max(day_start);
                durations.add(date.weekday(), overlap);
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(durations)
}
