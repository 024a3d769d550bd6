use serde::{Deserialize, Serialize};

use crate::models::task::{EisenhowerQuadrant, Task};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "critical",
            PriorityLevel::High => "high",
            PriorityLevel::Medium => "medium",
            PriorityLevel::Low => "low",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "Critical",
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
        }
    }

    pub fn action_hint(&self) -> &'static str {
        match self {
            PriorityLevel::Critical => "Immediate attention required.",
            PriorityLevel::High => "Schedule this week.",
            PriorityLevel::Medium => "Plan for upcoming weeks.",
            PriorityLevel::Low => "Consider delegating or eliminating.",
        }
    }
}

/// A score interval. Upper bounds are stored backed off by 0.01 from the
/// next interval's lower bound, so both ends are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreRange {
    pub lower: f64,
    pub upper: f64,
}

impl ScoreRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.lower && score <= self.upper
    }

    /// True when percentile ties collapsed the interval to nothing.
    pub fn is_empty(&self) -> bool {
        self.upper < self.lower
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationRanges {
    pub critical: ScoreRange,
    pub high: ScoreRange,
    pub medium: ScoreRange,
    pub low: ScoreRange,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScorePercentiles {
    pub p90: f64,
    pub p75: f64,
    pub p50: f64,
    pub p25: f64,
    pub p10: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusAverages {
    pub complete: f64,
    #[serde(rename = "in-progress")]
    pub in_progress: f64,
    pub incomplete: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuadrantAverages {
    #[serde(rename = "1")]
    pub do_first: f64,
    #[serde(rename = "2")]
    pub schedule: f64,
    #[serde(rename = "3")]
    pub delegate: f64,
    #[serde(rename = "4")]
    pub eliminate: f64,
}

impl QuadrantAverages {
    pub fn for_quadrant(&self, quadrant: EisenhowerQuadrant) -> f64 {
        match quadrant {
            EisenhowerQuadrant::DoFirst => self.do_first,
            EisenhowerQuadrant::Schedule => self.schedule,
            EisenhowerQuadrant::Delegate => self.delegate,
            EisenhowerQuadrant::Eliminate => self.eliminate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAverages {
    pub overall: f64,
    pub by_status: StatusAverages,
    pub by_quadrant: QuadrantAverages,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBenchmarks {
    /// Scores at or above this are typically completed within a day.
    pub fast_completion: f64,
    /// Recommended weekly focus threshold.
    pub weekly_target: f64,
    /// Sustainable daily workload score.
    pub daily_capacity: f64,
}

/// Statistical snapshot of a (task collection, profile) pair. A pure
/// aggregate with no lifecycle of its own; recompute whenever the
/// underlying collection or profile changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCalibration {
    pub ranges: CalibrationRanges,
    pub percentiles: ScorePercentiles,
    pub averages: ScoreAverages,
    pub benchmarks: ScoreBenchmarks,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub is_fast_track: bool,
    pub is_weekly_focus: bool,
    /// Always true for now: per-day load checking is a known gap, not
    /// something the calibration snapshot can answer.
    pub is_daily_capacity: bool,
}

/// A task annotated against a calibration snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskWithCalibration {
    #[serde(flatten)]
    pub task: Task,
    /// Priority score rounded to one decimal.
    pub calibrated_score: f64,
    /// Percentile rank; extrapolation above p90 can exceed 100.
    pub score_percentile: f64,
    pub priority_level: PriorityLevel,
    pub score_interpretation: String,
    pub benchmark_comparison: BenchmarkComparison,
}
