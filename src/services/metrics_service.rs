//! Metrics calculator: pure mapping from (task, profile) to [`TaskMetrics`].

use crate::models::productivity::{ProductivityWeights, UserProductivityProfile};
use crate::models::task::{EisenhowerQuadrant, Task, TaskMetrics};
use crate::services::scheduling_algorithms::{self, EPSILON_FLOOR};

/// Fixed share of importance credited via the learning-velocity weight.
/// A design constant, not user-configurable.
const LEARNING_VELOCITY_FACTOR: f64 = 0.2;
/// Fixed share of impact credited via the skill-growth weight.
/// A design constant, not user-configurable.
const SKILL_GROWTH_FACTOR: f64 = 0.15;

/// Base quadrant threshold; the effective threshold scales with the
/// importance/urgency weights.
const QUADRANT_THRESHOLD: f64 = 3.0;

/// Compute all derived metrics for a task. Never fails; without a profile
/// the legacy simple formula and unit weights apply.
pub fn calculate_task_metrics(
    task: &Task,
    profile: Option<&UserProductivityProfile>,
) -> TaskMetrics {
    let unit_weights = ProductivityWeights::default();
    let weights = profile.map_or(&unit_weights, |p| &p.scoring_weights);

    // Two historical formula variants, kept separately reproducible: the
    // bare call sticks to the simple sum, a profile opts into the
    // personalized terms.
    let priority_score = match profile {
        Some(p) => personalized_priority_score(task, &p.scoring_weights),
        None => simple_priority_score(task),
    };

    let algorithm = profile
        .map(|p| p.scheduling_preferences.algorithm)
        .unwrap_or_default();
    let scheduling_weight =
        scheduling_algorithms::calculate_scheduling_weight(task, weights, algorithm);

    TaskMetrics {
        priority_score,
        scheduling_weight,
        eisenhower_quadrant: eisenhower_quadrant(task, weights),
        impact_effort_ratio: impact_effort_ratio(task, weights),
    }
}

/// Legacy unweighted formula: importance + urgency + impact - effort.
pub fn simple_priority_score(task: &Task) -> f64 {
    task.importance + task.urgency + task.impact - task.effort
}

/// Personalized weighted linear combination with fixed learning and
/// skill-growth bonus terms.
pub fn personalized_priority_score(task: &Task, weights: &ProductivityWeights) -> f64 {
    task.importance * weights.importance + task.urgency * weights.urgency
        + task.impact * weights.impact
        - task.effort * weights.effort
        + task.importance * weights.learning_velocity * LEARNING_VELOCITY_FACTOR
        + task.impact * weights.skill_growth * SKILL_GROWTH_FACTOR
}

/// Urgency/importance 2x2 classification. Thresholds scale with the
/// corresponding weights; unit weights reduce to the fixed threshold 3.
pub fn eisenhower_quadrant(task: &Task, weights: &ProductivityWeights) -> EisenhowerQuadrant {
    let importance_threshold = QUADRANT_THRESHOLD * weights.importance;
    let urgency_threshold = QUADRANT_THRESHOLD * weights.urgency;

    let important = task.importance >= importance_threshold;
    let urgent = task.urgency >= urgency_threshold;

    match (urgent, important) {
        (true, true) => EisenhowerQuadrant::DoFirst,
        (false, true) => EisenhowerQuadrant::Schedule,
        (true, false) => EisenhowerQuadrant::Delegate,
        (false, false) => EisenhowerQuadrant::Eliminate,
    }
}

pub fn impact_effort_ratio(task: &Task, weights: &ProductivityWeights) -> f64 {
    (task.impact * weights.impact) / (task.effort * weights.effort).max(EPSILON_FLOOR)
}

/// Static label bands over the raw priority score, kept for UI
/// collaborators alongside the calibrated levels.
pub fn priority_label(score: f64) -> &'static str {
    if score >= 10.0 {
        "Critical"
    } else if score >= 7.0 {
        "High"
    } else if score >= 4.0 {
        "Medium"
    } else if score >= 1.0 {
        "Low"
    } else {
        "Very Low"
    }
}
