use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority level of a task. Higher value means more urgent.
///
/// Serialized as its ordinal (0/1/2) so the on-disk document and the
/// database column both carry the plain integer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(from = "u8", into = "u8")]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Priority {
    /// Maps a raw ordinal to a priority. Out-of-range values decode to
    /// `Medium` rather than failing, so a hand-edited store still loads.
    pub fn from_ordinal(n: i64) -> Self {
        match n {
            0 => Priority::Low,
            2 => Priority::High,
            _ => Priority::Medium,
        }
    }

    pub fn ordinal(self) -> i64 {
        self as i64
    }
}

impl From<u8> for Priority {
    fn from(n: u8) -> Self {
        Priority::from_ordinal(i64::from(n))
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        write!(f, "{s}")
    }
}

/// Represents a single task in the task manager.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier, assigned by the service at creation.
    pub id: String,
    /// The task text, never empty after trimming.
    pub title: String,
    /// Whether the task has been completed.
    pub done: bool,
    /// Timestamp when the task was created; never mutated afterwards.
    pub created_at: DateTime<Utc>,
    /// Priority level.
    pub priority: Priority,
    /// Optional due date; omitted from the document when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Status selection for a `list` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    /// Parses a raw status string. Anything other than `active` or
    /// `completed` (including `""` and `"all"`) means unfiltered.
    pub fn parse(s: &str) -> Self {
        match s {
            "active" => StatusFilter::Active,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    /// Canonical form bound into SQL queries.
    pub fn as_sql(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }
}

/// Sort key for a `list` query. `created_at` descending is always the
/// final tie-break, whichever key is primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Priority,
    DueDate,
}

impl SortKey {
    /// Parses a raw sort string; unrecognized values fall back to
    /// creation time.
    pub fn parse(s: &str) -> Self {
        match s {
            "priority" => SortKey::Priority,
            "due_date" => SortKey::DueDate,
            _ => SortKey::CreatedAt,
        }
    }

    /// Canonical form bound into SQL queries.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Priority => "priority",
            SortKey::DueDate => "due_date",
        }
    }
}

/// Filter options for a single `list` query.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub sort_by: SortKey,
}

impl TaskFilter {
    /// Builds a filter from raw strings, applying the fallback parsing of
    /// [`StatusFilter::parse`] and [`SortKey::parse`].
    pub fn new(status: &str, sort_by: &str) -> Self {
        TaskFilter {
            status: StatusFilter::parse(status),
            sort_by: SortKey::parse(sort_by),
        }
    }
}

/// Aggregate statistics over the task set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: u32,
    pub active: u32,
    pub completed: u32,
}
