use serde::{Deserialize, Serialize};

/// Number of time-of-day slots in an energy curve.
pub const ENERGY_CURVE_SLOTS: usize = 6;

/// Per-user scoring multipliers. Each weight is a positive real; the UI
/// convention is 0.1-3.0 but no fixed range is enforced here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityWeights {
    pub importance: f64,
    pub urgency: f64,
    pub impact: f64,
    pub effort: f64,
    pub learning_velocity: f64,
    pub decision_enablement: f64,
    pub energy_required: f64,
    pub skill_growth: f64,
    pub momentum: f64,
}

impl Default for ProductivityWeights {
    /// Unit weights: the neutral profile under which the personalized
    /// formulas reduce to their unweighted forms.
    fn default() -> Self {
        Self {
            importance: 1.0,
            urgency: 1.0,
            impact: 1.0,
            effort: 1.0,
            learning_velocity: 1.0,
            decision_enablement: 1.0,
            energy_required: 1.0,
            skill_growth: 1.0,
            momentum: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SchedulingAlgorithm {
    #[serde(rename = "weighted")]
    Weighted,
    #[serde(rename = "matrixHybrid")]
    MatrixHybrid,
    #[serde(rename = "oodaOptimized")]
    OodaOptimized,
}

impl SchedulingAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchedulingAlgorithm::Weighted => "weighted",
            SchedulingAlgorithm::MatrixHybrid => "matrixHybrid",
            SchedulingAlgorithm::OodaOptimized => "oodaOptimized",
        }
    }
}

impl Default for SchedulingAlgorithm {
    fn default() -> Self {
        SchedulingAlgorithm::Weighted
    }
}

/// Scheduling knobs carried by a profile. workingHours, maxCognitiveHours,
/// deepWorkBlocks, preferBatching and energyManagement are configurable but
/// not yet consulted by schedule generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingPreferences {
    pub algorithm: SchedulingAlgorithm,
    pub max_tasks_per_day: u32,
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub prefer_batching: bool,
    pub energy_management: bool,
    pub max_cognitive_hours: u32,
    pub deep_work_blocks: u32,
}

impl Default for SchedulingPreferences {
    fn default() -> Self {
        Self {
            algorithm: SchedulingAlgorithm::Weighted,
            max_tasks_per_day: 6,
            working_hours_start: "09:00".to_string(),
            working_hours_end: "17:00".to_string(),
            prefer_batching: true,
            energy_management: true,
            max_cognitive_hours: 6,
            deep_work_blocks: 2,
        }
    }
}

/// A user's full productivity configuration. Loaded at session start,
/// saved wholesale; field-level merging only ever happens through explicit
/// copy-then-override by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProductivityProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub profile_name: String,
    pub based_on_template: String,
    pub scoring_weights: ProductivityWeights,
    pub scheduling_preferences: SchedulingPreferences,
    /// Relative energy level at six times of day, each in [0, 1].
    pub energy_curve: [f64; ENERGY_CURVE_SLOTS],
    pub adaptive_learning_enabled: bool,
    pub auto_adjust_weights: bool,
    /// Target completion fraction in (0, 1].
    pub completion_rate_target: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
