//! # label-hours
//!
//! Business-hours accounting for issue labels.
//!
//! Given the add/remove history of a workflow label on an issue, label-hours
//! works out how much *working* time the label was attached: every span is
//! clipped to a daily window (09:00–17:00 `Australia/Sydney` by default),
//! weekends are dropped, and the result is bucketed by weekday.
//!
//! All functions take explicit inputs. The caller supplies the timezone via
//! [`WorkCalendar`] and the "now" anchor used to close a label that is still
//! attached, so nothing here reads the system clock.
//!
//! ## Modules
//!
//! - [`workhours`]: Clip a single span to the work calendar
//! - [`aggregate`]: Pair label events into intervals and sum their work time
//! - [`durations`]: Per-weekday duration map
//! - [`event`]: Label events and intervals
//! - [`report`]: Text table and JSON rendering
//! - [`error`]: Error types

pub mod aggregate;
pub mod durations;
pub mod error;
pub mod event;
pub mod report;
pub mod workhours;

pub use aggregate::{label_intervals, work_time_for_label};
pub use durations::{is_workday, weekday_name, WorkDurations};
pub use error::LabelHoursError;
pub use event::{LabelAction, LabelEvent, LabelInterval};
pub use report::{format_hours_minutes, render_json, render_table, report_rows, ReportRow};
pub use workhours::{work_time_between, WorkCalendar, DEFAULT_TIMEZONE};
