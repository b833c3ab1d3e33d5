//! Label events as reported by an issue tracker.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Whether a label was attached to or detached from an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAction {
    Add,
    Remove,
}

/// One label change on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEvent {
    /// When the change happened.
    pub at: DateTime<Utc>,
    /// The label name, compared case-sensitively.
    pub label: String,
    pub action: LabelAction,
}

impl LabelEvent {
    pub fn new(at: DateTime<Utc>, label: impl Into<String>, action: LabelAction) -> Self {
        Self {
            at,
            label: label.into(),
            action,
        }
    }

    pub fn add(at: DateTime<Utc>, label: impl Into<String>) -> Self {
        Self::new(at, label, LabelAction::Add)
    }

    pub fn remove(at: DateTime<Utc>, label: impl Into<String>) -> Self {
        Self::new(at, label, LabelAction::Remove)
    }
}

/// A contiguous span during which the label was present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// `true` when no remove event was seen and `end` is the "now" anchor.
    pub open: bool,
}

impl LabelInterval {
    /// Wall-clock time between start and end, ignoring business hours.
    pub fn elapsed(&self) -> Duration {
        self.end - self.start
    }
}
