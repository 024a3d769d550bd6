//! The three alternative scoring strategies behind the scheduling weight.
//!
//! Each strategy is a pure function of (task, weights); the profile selects
//! which one runs via [`calculate_scheduling_weight`]. Every division floors
//! the denominator factor at [`EPSILON_FLOOR`] so zero effort or zero time
//! estimates can never produce NaN or infinity.

use crate::models::productivity::{ProductivityWeights, SchedulingAlgorithm};
use crate::models::task::Task;

/// Floor applied to every denominator factor.
pub const EPSILON_FLOOR: f64 = 0.1;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Flat bonus the matrix-hybrid strategy grants per momentum weight.
const MATRIX_MOMENTUM_BONUS: f64 = 0.5;
/// Share of the skill-growth weight counted in the OODA learning cycle.
const OODA_SKILL_GROWTH_FACTOR: f64 = 0.3;
/// Share of the momentum weight applied to urgency in the OODA strategy.
const OODA_MOMENTUM_FACTOR: f64 = 0.4;

fn floored(value: f64) -> f64 {
    value.max(EPSILON_FLOOR)
}

fn estimated_hours(task: &Task) -> f64 {
    floored(task.estimated_minutes / MINUTES_PER_HOUR)
}

/// Dispatch once on the selected strategy.
pub fn calculate_scheduling_weight(
    task: &Task,
    weights: &ProductivityWeights,
    algorithm: SchedulingAlgorithm,
) -> f64 {
    match algorithm {
        SchedulingAlgorithm::Weighted => calculate_weighted_score(task, weights),
        SchedulingAlgorithm::MatrixHybrid => calculate_matrix_hybrid_score(task, weights),
        SchedulingAlgorithm::OodaOptimized => calculate_ooda_score(task, weights),
    }
}

/// Rewards high importance x impact, penalizes effort, time and energy cost.
pub fn calculate_weighted_score(task: &Task, weights: &ProductivityWeights) -> f64 {
    let value = (task.importance * weights.importance) * (task.impact * weights.impact);
    let energy_penalty = 1.0 / floored(weights.energy_required);
    let cost = floored(task.effort * weights.effort) * estimated_hours(task);

    value * energy_penalty / cost
}

/// Eisenhower-style importance x urgency plus impact-per-effort and
/// impact-per-hour terms, with a flat momentum bonus.
pub fn calculate_matrix_hybrid_score(task: &Task, weights: &ProductivityWeights) -> f64 {
    let matrix = (task.importance * weights.importance) * (task.urgency * weights.urgency);
    let impact_effort = (task.impact * weights.impact) / floored(task.effort * weights.effort);
    let impact_per_hour = (task.impact * weights.impact) / estimated_hours(task);
    let momentum_bonus = weights.momentum * MATRIX_MOMENTUM_BONUS;

    matrix + impact_effort + impact_per_hour + momentum_bonus
}

/// Learning-cycle term plus time-to-value plus a momentum kicker.
pub fn calculate_ooda_score(task: &Task, weights: &ProductivityWeights) -> f64 {
    let learning_cycle = task.importance * weights.learning_velocity
        + task.impact * weights.decision_enablement
        + task.importance * weights.skill_growth * OODA_SKILL_GROWTH_FACTOR;
    let time_to_value = (task.impact * weights.impact)
        / (estimated_hours(task) * floored(task.effort * weights.effort));
    let momentum = task.urgency * weights.momentum * OODA_MOMENTUM_FACTOR;

    learning_cycle + time_to_value + momentum
}
