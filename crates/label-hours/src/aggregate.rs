//! Replay label events into intervals and total their business hours.
//!
//! Events are sorted by instant before pairing, so callers may pass them in
//! whatever order the tracker returned. Pairing is per target label:
//!
//! - `add` opens an interval unless one is already open (the original start
//!   is kept).
//! - `remove` closes the open interval; with nothing open it is ignored.
//! - An interval still open after the last event is closed at the caller's
//!   "now" anchor, or at its own start if "now" is earlier.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::durations::WorkDurations;
use crate::error::Result;
use crate::event::{LabelAction, LabelEvent, LabelInterval};
use crate::workhours::{work_time_between, WorkCalendar};

/// Pair `add`/`remove` events for `label` into intervals.
///
/// Events for other labels are skipped. `now` closes a trailing open
/// interval; it is clamped so the interval is never inverted.
pub fn label_intervals(
    events: &[LabelEvent],
    label: &str,
    now: DateTime<Utc>,
) -> Vec<LabelInterval> {
    let mut ordered: Vec<&LabelEvent> = events.iter().filter(|e| e.label == label).collect();
    ordered.sort_by_key(|e| e.at);

    let mut intervals = Vec::new();
    let mut open: Option<DateTime<Utc>> = None;

    for event in ordered {
        match (event.action, open) {
            (LabelAction::Add, None) => open = Some(event.at),
            (LabelAction::Add, Some(start)) => {
                debug!(
                    label,
                    at = %event.at,
                    open_since = %start,
                    "ignoring add while label is already attached"
                );
            }
            (LabelAction::Remove, Some(start)) => {
                intervals.push(LabelInterval {
                    start,
                    end: event.at,
                    open: false,
                });
                open = None;
            }
            (LabelAction::Remove, None) => {
                debug!(label, at = %event.at, "ignoring remove without a matching add");
            }
        }
    }

    if let Some(start) = open {
        intervals.push(LabelInterval {
            start,
            end: now.max(start),
            open: true,
        });
    }

    intervals
}

/// Business hours `label` was attached, summed per weekday.
///
/// # Errors
///
/// Propagates [`crate::LabelHoursError::InvalidDatetime`] from the calendar.
/// Intervals are never inverted, so `InvertedInterval` cannot occur here.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc, Weekday};
/// use label_hours::{work_time_for_label, LabelEvent, WorkCalendar};
///
/// // 2026-03-17 is a Tuesday; Sydney is UTC+11 in March.
/// let events = vec![
///     LabelEvent::add(Utc.with_ymd_and_hms(2026, 3, 16, 23, 0, 0).unwrap(), "Doing"),
///     LabelEvent::remove(Utc.with_ymd_and_hms(2026, 3, 17, 0, 0, 0).unwrap(), "Doing"),
/// ];
/// let now = Utc.with_ymd_and_hms(2026, 3, 20, 0, 0, 0).unwrap();
/// let totals = work_time_for_label(&events, "Doing", &WorkCalendar::default(), now).unwrap();
/// assert_eq!(totals.get(Weekday::Tue), Some(Duration::hours(1)));
/// ```
pub fn work_time_for_label(
    events: &[LabelEvent],
    label: &str,
    calendar: &WorkCalendar,
    now: DateTime<Utc>,
) -> Result<WorkDurations> {
    let mut total = WorkDurations::new();

    for interval in label_intervals(events, label, now) {
        let contribution = work_time_between(&interval.start, &interval.end, calendar)?;
        debug!(
            start = %interval.start,
            end = %interval.end,
            open = interval.open,
            worked_secs = contribution.total().num_seconds(),
            "clipped label interval"
        );
        total.merge(&contribution);
    }

    Ok(total)
}
