//! Ordering and filtering of task collections using calculator output.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::productivity::UserProductivityProfile;
use crate::models::task::{FilterOptions, SortOption, Task, TaskMetrics, TaskStatus};
use crate::services::metrics_service::calculate_task_metrics;

/// Stable sort by the requested key; ties keep input order. Tasks without a
/// deadline compare as infinitely late and sort last under deadline-asc.
pub fn sort_tasks(
    tasks: &[Task],
    sort: SortOption,
    profile: Option<&UserProductivityProfile>,
) -> Vec<Task> {
    let mut entries: Vec<(Task, TaskMetrics)> = tasks
        .iter()
        .map(|task| (task.clone(), calculate_task_metrics(task, profile)))
        .collect();

    match sort {
        SortOption::PriorityDesc => {
            entries.sort_by(|a, b| compare_desc(a.1.priority_score, b.1.priority_score));
        }
        SortOption::PriorityAsc => {
            entries.sort_by(|a, b| compare_asc(a.1.priority_score, b.1.priority_score));
        }
        SortOption::SchedulingWeightDesc => {
            entries.sort_by(|a, b| compare_desc(a.1.scheduling_weight, b.1.scheduling_weight));
        }
        SortOption::DeadlineAsc => {
            entries.sort_by(|a, b| effective_deadline(&a.0).cmp(&effective_deadline(&b.0)));
        }
        SortOption::ImpactDesc => {
            entries.sort_by(|a, b| compare_desc(a.0.impact, b.0.impact));
        }
        SortOption::EffortAsc => {
            entries.sort_by(|a, b| compare_asc(a.0.effort, b.0.effort));
        }
    }

    entries.into_iter().map(|(task, _)| task).collect()
}

/// Keep tasks matching every supplied predicate.
pub fn filter_tasks(
    tasks: &[Task],
    filters: &FilterOptions,
    profile: Option<&UserProductivityProfile>,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| {
            if let Some(status) = filters.status {
                if task.status != status {
                    return false;
                }
            }
            if let Some(category) = filters.category.as_deref() {
                if task.category != category {
                    return false;
                }
            }
            if let Some((min, max)) = filters.time_range {
                if task.estimated_minutes < min || task.estimated_minutes > max {
                    return false;
                }
            }
            if filters.score_range.is_some() || filters.quadrant.is_some() {
                let metrics = calculate_task_metrics(task, profile);
                if let Some((min, max)) = filters.score_range {
                    if metrics.priority_score < min || metrics.priority_score > max {
                        return false;
                    }
                }
                if let Some(quadrant) = filters.quadrant {
                    if metrics.eisenhower_quadrant != quadrant {
                        return false;
                    }
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Recommended work order: incomplete work sorted by scheduling weight.
/// Calendar time, working hours and deep-work blocks are not considered
/// yet even though the profile models them.
pub fn generate_optimal_schedule(
    tasks: &[Task],
    profile: Option<&UserProductivityProfile>,
) -> Vec<Task> {
    let pending: Vec<Task> = tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Complete)
        .cloned()
        .collect();

    sort_tasks(&pending, SortOption::SchedulingWeightDesc, profile)
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn compare_asc(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn effective_deadline(task: &Task) -> DateTime<Utc> {
    task.deadline.unwrap_or(DateTime::<Utc>::MAX_UTC)
}
