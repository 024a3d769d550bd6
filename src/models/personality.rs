use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::productivity::{
    ProductivityWeights, SchedulingAlgorithm, SchedulingPreferences, UserProductivityProfile,
    ENERGY_CURVE_SLOTS,
};

/// A named profile template a new user can start from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityPersonality {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub scoring_weights: ProductivityWeights,
    pub scheduling_preferences: SchedulingPreferences,
    pub energy_curve: [f64; ENERGY_CURVE_SLOTS],
}

static PERSONALITIES: Lazy<Vec<ProductivityPersonality>> = Lazy::new(|| {
    vec![
        ProductivityPersonality {
            id: "optimizer".to_string(),
            name: "The Optimizer".to_string(),
            description: "Maximum efficiency with quick wins and low-effort tasks".to_string(),
            icon: "⚡".to_string(),
            scoring_weights: ProductivityWeights {
                importance: 1.2,
                urgency: 1.5,
                impact: 1.0,
                effort: 2.0,
                learning_velocity: 0.8,
                decision_enablement: 1.3,
                energy_required: 1.5,
                skill_growth: 1.0,
                momentum: 2.0,
            },
            scheduling_preferences: SchedulingPreferences {
                algorithm: SchedulingAlgorithm::Weighted,
                max_tasks_per_day: 8,
                working_hours_start: "09:00".to_string(),
                working_hours_end: "17:00".to_string(),
                prefer_batching: true,
                energy_management: true,
                max_cognitive_hours: 5,
                deep_work_blocks: 1,
            },
            energy_curve: [0.7, 1.0, 0.9, 0.8, 0.6, 0.4],
        },
        ProductivityPersonality {
            id: "deepWorker".to_string(),
            name: "The Deep Worker".to_string(),
            description: "Maximum impact through focused, transformational work".to_string(),
            icon: "🎯".to_string(),
            scoring_weights: ProductivityWeights {
                importance: 2.0,
                urgency: 0.7,
                impact: 2.5,
                effort: 0.5,
                learning_velocity: 1.8,
                decision_enablement: 1.5,
                energy_required: 0.8,
                skill_growth: 2.0,
                momentum: 0.6,
            },
            scheduling_preferences: SchedulingPreferences {
                algorithm: SchedulingAlgorithm::MatrixHybrid,
                max_tasks_per_day: 3,
                working_hours_start: "09:00".to_string(),
                working_hours_end: "17:00".to_string(),
                prefer_batching: false,
                energy_management: true,
                max_cognitive_hours: 7,
                deep_work_blocks: 3,
            },
            energy_curve: [0.8, 1.0, 1.0, 0.9, 0.7, 0.5],
        },
        ProductivityPersonality {
            id: "firefighter".to_string(),
            name: "The Firefighter".to_string(),
            description: "Reactive crisis mode with urgency-driven prioritization".to_string(),
            icon: "🚨".to_string(),
            scoring_weights: ProductivityWeights {
                importance: 1.0,
                urgency: 3.0,
                impact: 0.8,
                effort: 1.8,
                learning_velocity: 0.5,
                decision_enablement: 2.0,
                energy_required: 1.2,
                skill_growth: 0.7,
                momentum: 1.5,
            },
            scheduling_preferences: SchedulingPreferences {
                algorithm: SchedulingAlgorithm::Weighted,
                max_tasks_per_day: 12,
                working_hours_start: "08:00".to_string(),
                working_hours_end: "18:00".to_string(),
                prefer_batching: false,
                energy_management: false,
                max_cognitive_hours: 4,
                deep_work_blocks: 1,
            },
            energy_curve: [0.8, 0.9, 1.0, 1.0, 0.9, 0.7],
        },
        ProductivityPersonality {
            id: "learner".to_string(),
            name: "The Learner".to_string(),
            description: "Growth-focused with emphasis on skill development".to_string(),
            icon: "📚".to_string(),
            scoring_weights: ProductivityWeights {
                importance: 1.2,
                urgency: 0.9,
                impact: 1.3,
                effort: 0.7,
                learning_velocity: 2.5,
                decision_enablement: 1.2,
                energy_required: 0.8,
                skill_growth: 2.0,
                momentum: 1.1,
            },
            scheduling_preferences: SchedulingPreferences {
                algorithm: SchedulingAlgorithm::OodaOptimized,
                max_tasks_per_day: 5,
                working_hours_start: "09:00".to_string(),
                working_hours_end: "17:00".to_string(),
                prefer_batching: true,
                energy_management: true,
                max_cognitive_hours: 6,
                deep_work_blocks: 2,
            },
            energy_curve: [0.6, 0.8, 1.0, 0.9, 0.8, 0.6],
        },
        ProductivityPersonality {
            id: "balanced".to_string(),
            name: "The Balanced".to_string(),
            description: "Well-rounded approach balancing all factors equally".to_string(),
            icon: "⚖️".to_string(),
            scoring_weights: ProductivityWeights::default(),
            scheduling_preferences: SchedulingPreferences::default(),
            energy_curve: [0.6, 0.9, 1.0, 0.8, 0.7, 0.5],
        },
    ]
});

pub fn personalities() -> &'static [ProductivityPersonality] {
    &PERSONALITIES
}

pub fn personality_by_id(id: &str) -> Option<&'static ProductivityPersonality> {
    PERSONALITIES.iter().find(|p| p.id == id)
}

/// Profile a user gets on first use, derived from the balanced template.
pub fn default_profile(user_id: &str) -> UserProductivityProfile {
    let balanced = personality_by_id("balanced").expect("balanced template must exist");

    UserProductivityProfile {
        id: None,
        user_id: user_id.to_string(),
        profile_name: "My Productivity Style".to_string(),
        based_on_template: balanced.id.clone(),
        scoring_weights: balanced.scoring_weights.clone(),
        scheduling_preferences: balanced.scheduling_preferences.clone(),
        energy_curve: balanced.energy_curve,
        adaptive_learning_enabled: true,
        auto_adjust_weights: false,
        completion_rate_target: 0.80,
        created_at: None,
        updated_at: None,
    }
}
