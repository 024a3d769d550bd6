//! Calibration engine: distributional statistics over a task collection,
//! used to label individual tasks with a priority tier and percentile rank.

use tracing::debug;

use crate::models::calibration::{
    BenchmarkComparison, CalibrationRanges, PriorityLevel, QuadrantAverages, ScoreAverages,
    ScoreBenchmarks, ScoreCalibration, ScorePercentiles, ScoreRange, StatusAverages,
    TaskWithCalibration,
};
use crate::models::productivity::UserProductivityProfile;
use crate::models::task::{EisenhowerQuadrant, Task, TaskStatus};
use crate::services::metrics_service::calculate_task_metrics;

/// Gap between adjacent range boundaries.
const RANGE_GAP: f64 = 0.01;
/// Headroom multiplier on the critical range's upper bound.
const CRITICAL_HEADROOM: f64 = 1.5;
/// Tasks-per-day assumed for the daily capacity benchmark without a profile.
const DEFAULT_MAX_TASKS_PER_DAY: f64 = 6.0;

/// Build a calibration snapshot for a task collection. An empty collection
/// yields a fixed fallback so calibration is always well-defined.
pub fn calculate_score_calibration(
    tasks: &[Task],
    profile: Option<&UserProductivityProfile>,
) -> ScoreCalibration {
    if tasks.is_empty() {
        debug!(target: "app::calibration", "empty collection, using fallback calibration");
        return fallback_calibration();
    }

    let scores: Vec<f64> = tasks
        .iter()
        .map(|task| calculate_task_metrics(task, profile).priority_score)
        .collect();

    let mut sorted = scores.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let percentiles = ScorePercentiles {
        p90: percentile(&sorted, 90.0),
        p75: percentile(&sorted, 75.0),
        p50: percentile(&sorted, 50.0),
        p25: percentile(&sorted, 25.0),
        p10: percentile(&sorted, 10.0),
    };

    let max_score = sorted[0];
    let min_score = sorted[sorted.len() - 1];

    // Dynamic ranges derived from the observed distribution; non-overlapping
    // by construction while percentiles stay monotone.
    let ranges = CalibrationRanges {
        critical: ScoreRange::new(
            percentiles.p90,
            (percentiles.p90 * CRITICAL_HEADROOM).max(max_score),
        ),
        high: ScoreRange::new(percentiles.p75, percentiles.p90 - RANGE_GAP),
        medium: ScoreRange::new(percentiles.p25, percentiles.p75 - RANGE_GAP),
        low: ScoreRange::new(min_score.min(0.0), percentiles.p25 - RANGE_GAP),
    };

    let overall = scores.iter().sum::<f64>() / scores.len() as f64;
    let averages = ScoreAverages {
        overall,
        by_status: StatusAverages {
            complete: average_by_status(tasks, TaskStatus::Complete, profile),
            in_progress: average_by_status(tasks, TaskStatus::InProgress, profile),
            incomplete: average_by_status(tasks, TaskStatus::Incomplete, profile),
        },
        by_quadrant: QuadrantAverages {
            do_first: average_by_quadrant(tasks, EisenhowerQuadrant::DoFirst, profile),
            schedule: average_by_quadrant(tasks, EisenhowerQuadrant::Schedule, profile),
            delegate: average_by_quadrant(tasks, EisenhowerQuadrant::Delegate, profile),
            eliminate: average_by_quadrant(tasks, EisenhowerQuadrant::Eliminate, profile),
        },
    };

    let max_tasks_per_day = profile
        .map(|p| f64::from(p.scheduling_preferences.max_tasks_per_day))
        .unwrap_or(DEFAULT_MAX_TASKS_PER_DAY);

    let benchmarks = ScoreBenchmarks {
        fast_completion: percentiles.p75,
        weekly_target: percentiles.p50,
        daily_capacity: overall * max_tasks_per_day,
    };

    ScoreCalibration {
        ranges,
        percentiles,
        averages,
        benchmarks,
    }
}

/// Annotate one task against a calibration snapshot.
pub fn calibrate_task(
    task: &Task,
    calibration: &ScoreCalibration,
    profile: Option<&UserProductivityProfile>,
) -> TaskWithCalibration {
    let score = calculate_task_metrics(task, profile).priority_score;

    // Top-down threshold scan; first match wins.
    let priority_level = if score >= calibration.ranges.critical.lower {
        PriorityLevel::Critical
    } else if score >= calibration.ranges.high.lower {
        PriorityLevel::High
    } else if score >= calibration.ranges.medium.lower {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    };

    let score_percentile = percentile_rank(score, &calibration.percentiles);
    let score_interpretation = score_interpretation(score, priority_level, score_percentile);

    let benchmark_comparison = BenchmarkComparison {
        is_fast_track: score >= calibration.benchmarks.fast_completion,
        is_weekly_focus: score >= calibration.benchmarks.weekly_target,
        // Placeholder: real per-day load checking would need the day's plan.
        is_daily_capacity: true,
    };

    TaskWithCalibration {
        task: task.clone(),
        calibrated_score: (score * 10.0).round() / 10.0,
        score_percentile,
        priority_level,
        score_interpretation,
        benchmark_comparison,
    }
}

/// Fallback snapshot for an empty collection.
fn fallback_calibration() -> ScoreCalibration {
    ScoreCalibration {
        ranges: CalibrationRanges {
            critical: ScoreRange::new(9.0, 15.0),
            high: ScoreRange::new(6.0, 8.99),
            medium: ScoreRange::new(3.0, 5.99),
            low: ScoreRange::new(0.0, 2.99),
        },
        percentiles: ScorePercentiles {
            p90: 8.0,
            p75: 6.0,
            p50: 4.0,
            p25: 2.0,
            p10: 1.0,
        },
        averages: ScoreAverages {
            overall: 4.0,
            by_status: StatusAverages {
                complete: 5.0,
                in_progress: 4.5,
                incomplete: 3.5,
            },
            by_quadrant: QuadrantAverages {
                do_first: 7.0,
                schedule: 5.0,
                delegate: 3.0,
                eliminate: 1.0,
            },
        },
        benchmarks: ScoreBenchmarks {
            fast_completion: 7.0,
            weekly_target: 5.0,
            daily_capacity: 20.0,
        },
    }
}

/// Nearest-rank percentile over a descending-sorted slice: the value
/// exceeded by only the top (100 - rank)% of scores.
fn percentile(sorted_desc: &[f64], rank: f64) -> f64 {
    let len = sorted_desc.len();
    let offset = ((rank / 100.0) * len as f64).ceil().max(1.0) as usize;
    sorted_desc[len - offset.min(len)]
}

/// Piecewise-linear percentile rank across the five breakpoints.
///
/// The denominator above p90 is `p90 * 2`, not the interval width, and
/// below p10 the rank is `score / p10 * 10`; both forms are part of the
/// scoring contract. Degenerate segments from percentile ties return the
/// segment base.
fn percentile_rank(score: f64, p: &ScorePercentiles) -> f64 {
    if score >= p.p90 {
        return segment(90.0, score - p.p90, p.p90 * 2.0, 10.0);
    }
    if score >= p.p75 {
        return segment(75.0, score - p.p75, p.p90 - p.p75, 15.0);
    }
    if score >= p.p50 {
        return segment(50.0, score - p.p50, p.p75 - p.p50, 25.0);
    }
    if score >= p.p25 {
        return segment(25.0, score - p.p25, p.p50 - p.p25, 25.0);
    }
    if score >= p.p10 {
        return segment(10.0, score - p.p10, p.p25 - p.p10, 15.0);
    }
    if p.p10 <= 0.0 {
        return 0.0;
    }
    (score / p.p10 * 10.0).max(0.0)
}

fn segment(base: f64, delta: f64, span: f64, width: f64) -> f64 {
    if span <= 0.0 {
        base
    } else {
        base + (delta / span) * width
    }
}

fn score_interpretation(score: f64, level: PriorityLevel, percentile: f64) -> String {
    format!(
        "{} priority ({:.1}) - Higher than {}% of tasks. {}",
        level.display_name(),
        score,
        percentile.round(),
        level.action_hint()
    )
}

fn average_by_status(
    tasks: &[Task],
    status: TaskStatus,
    profile: Option<&UserProductivityProfile>,
) -> f64 {
    average_of(
        tasks
            .iter()
            .filter(|task| task.status == status)
            .map(|task| calculate_task_metrics(task, profile).priority_score),
    )
}

fn average_by_quadrant(
    tasks: &[Task],
    quadrant: EisenhowerQuadrant,
    profile: Option<&UserProductivityProfile>,
) -> f64 {
    average_of(
        tasks
            .iter()
            .map(|task| calculate_task_metrics(task, profile))
            .filter(|metrics| metrics.eisenhower_quadrant == quadrant)
            .map(|metrics| metrics.priority_score),
    )
}

/// Empty subgroups average to 0 rather than being absent.
fn average_of(scores: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for score in scores {
        sum += score;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
