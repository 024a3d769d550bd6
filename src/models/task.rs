use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[serde(rename = "incomplete")]
    Incomplete,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "complete")]
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "incomplete",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Complete => "complete",
        }
    }
}

/// A user-entered task with subjective ratings. Ratings are nominally on a
/// 1-5 scale but no hard bound is assumed anywhere in the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub importance: f64,
    pub urgency: f64,
    pub impact: f64,
    pub effort: f64,
    /// Estimated time in minutes.
    pub estimated_minutes: f64,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub year_assignment: Option<i32>,
    #[serde(default)]
    pub month_assignment: Option<u32>,
    #[serde(default)]
    pub week_assignment: Option<u32>,
    #[serde(default)]
    pub project_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "u8", try_from = "u8")]
pub enum EisenhowerQuadrant {
    DoFirst = 1,
    Schedule = 2,
    Delegate = 3,
    Eliminate = 4,
}

impl EisenhowerQuadrant {
    pub const ALL: [EisenhowerQuadrant; 4] = [
        EisenhowerQuadrant::DoFirst,
        EisenhowerQuadrant::Schedule,
        EisenhowerQuadrant::Delegate,
        EisenhowerQuadrant::Eliminate,
    ];

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            EisenhowerQuadrant::DoFirst => "Do First",
            EisenhowerQuadrant::Schedule => "Schedule",
            EisenhowerQuadrant::Delegate => "Delegate",
            EisenhowerQuadrant::Eliminate => "Eliminate",
        }
    }
}

impl From<EisenhowerQuadrant> for u8 {
    fn from(quadrant: EisenhowerQuadrant) -> Self {
        quadrant as u8
    }
}

impl TryFrom<u8> for EisenhowerQuadrant {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EisenhowerQuadrant::DoFirst),
            2 => Ok(EisenhowerQuadrant::Schedule),
            3 => Ok(EisenhowerQuadrant::Delegate),
            4 => Ok(EisenhowerQuadrant::Eliminate),
            other => Err(format!("invalid Eisenhower quadrant: {other}")),
        }
    }
}

/// Metrics derived from a task's ratings. Never persisted; recomputed on
/// every read (the computation is a cheap pure function).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskMetrics {
    pub priority_score: f64,
    pub scheduling_weight: f64,
    pub eisenhower_quadrant: EisenhowerQuadrant,
    pub impact_effort_ratio: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SortOption {
    #[serde(rename = "priority-desc")]
    PriorityDesc,
    #[serde(rename = "priority-asc")]
    PriorityAsc,
    #[serde(rename = "scheduling-weight-desc")]
    SchedulingWeightDesc,
    #[serde(rename = "deadline-asc")]
    DeadlineAsc,
    #[serde(rename = "impact-desc")]
    ImpactDesc,
    #[serde(rename = "effort-asc")]
    EffortAsc,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriorityDesc => "priority-desc",
            SortOption::PriorityAsc => "priority-asc",
            SortOption::SchedulingWeightDesc => "scheduling-weight-desc",
            SortOption::DeadlineAsc => "deadline-asc",
            SortOption::ImpactDesc => "impact-desc",
            SortOption::EffortAsc => "effort-asc",
        }
    }
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::SchedulingWeightDesc
    }
}

/// Optional predicates combined by conjunction when filtering a collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub category: Option<String>,
    /// Inclusive bounds on the priority score.
    #[serde(default)]
    pub score_range: Option<(f64, f64)>,
    /// Inclusive bounds on estimated minutes.
    #[serde(default)]
    pub time_range: Option<(f64, f64)>,
    #[serde(default)]
    pub quadrant: Option<EisenhowerQuadrant>,
}
