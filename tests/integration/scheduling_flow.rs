use chrono::{DateTime, TimeZone, Utc};
use taskrank::models::personality;
use taskrank::models::task::{SortOption, Task, TaskStatus};
use taskrank::services::metrics_service::calculate_task_metrics;
use taskrank::services::schedule_service::{generate_optimal_schedule, sort_tasks};

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

fn sample_task(
    id: &str,
    importance: f64,
    urgency: f64,
    impact: f64,
    effort: f64,
    minutes: f64,
    status: TaskStatus,
    deadline: Option<DateTime<Utc>>,
) -> Task {
    Task {
        id: id.to_string(),
        title: format!("task {id}"),
        description: None,
        category: "Work".to_string(),
        importance,
        urgency,
        impact,
        effort,
        estimated_minutes: minutes,
        status,
        created_at: at(2024, 1, 10),
        modified_at: at(2024, 1, 12),
        deadline,
        year_assignment: Some(2024),
        month_assignment: Some(1),
        week_assignment: None,
        project_id: None,
    }
}

/// Same ratings as the original dashboard's demo collection.
fn sample_tasks() -> Vec<Task> {
    vec![
        sample_task("1", 5.0, 4.0, 5.0, 3.0, 180.0, TaskStatus::Incomplete, Some(at(2024, 2, 1))),
        sample_task("2", 4.0, 2.0, 4.0, 4.0, 240.0, TaskStatus::InProgress, None),
        sample_task("3", 4.0, 2.0, 5.0, 2.0, 300.0, TaskStatus::Incomplete, None),
        sample_task("4", 2.0, 5.0, 2.0, 1.0, 30.0, TaskStatus::Incomplete, Some(at(2024, 1, 17))),
        sample_task("5", 2.0, 2.0, 3.0, 2.0, 90.0, TaskStatus::Incomplete, None),
        sample_task("6", 3.0, 1.0, 4.0, 3.0, 120.0, TaskStatus::Incomplete, None),
        sample_task("7", 4.0, 3.0, 4.0, 1.0, 15.0, TaskStatus::Incomplete, None),
        sample_task("8", 2.0, 1.0, 2.0, 4.0, 180.0, TaskStatus::Incomplete, None),
        sample_task("9", 4.0, 4.0, 3.0, 2.0, 120.0, TaskStatus::Complete, Some(at(2024, 1, 11))),
        sample_task("10", 3.0, 2.0, 4.0, 3.0, 150.0, TaskStatus::Incomplete, None),
    ]
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

#[test]
fn priority_sorting_both_directions() {
    let tasks = sample_tasks();

    let descending = sort_tasks(&tasks, SortOption::PriorityDesc, None);
    assert_eq!(
        ids(&descending),
        vec!["1", "7", "3", "9", "4", "2", "10", "5", "6", "8"]
    );

    let ascending = sort_tasks(&tasks, SortOption::PriorityAsc, None);
    assert_eq!(
        ids(&ascending),
        vec!["8", "5", "6", "2", "10", "4", "3", "9", "7", "1"]
    );
}

#[test]
fn deadline_sorting_puts_missing_deadlines_last() {
    let tasks = sample_tasks();

    let sorted = sort_tasks(&tasks, SortOption::DeadlineAsc, None);
    assert_eq!(
        ids(&sorted),
        vec!["9", "4", "1", "2", "3", "5", "6", "7", "8", "10"]
    );
}

#[test]
fn impact_and_effort_sorting() {
    let tasks = sample_tasks();

    let by_impact = sort_tasks(&tasks, SortOption::ImpactDesc, None);
    assert_eq!(
        ids(&by_impact),
        vec!["1", "3", "2", "6", "7", "10", "5", "9", "4", "8"]
    );

    let by_effort = sort_tasks(&tasks, SortOption::EffortAsc, None);
    assert_eq!(
        ids(&by_effort),
        vec!["4", "7", "3", "5", "9", "1", "6", "10", "2", "8"]
    );
}

#[test]
fn optimal_schedule_excludes_complete_and_ranks_by_weight() {
    let tasks = sample_tasks();

    let schedule = generate_optimal_schedule(&tasks, None);
    assert_eq!(
        ids(&schedule),
        vec!["7", "4", "1", "3", "5", "6", "10", "2", "8"]
    );
    assert!(schedule.iter().all(|task| task.status != TaskStatus::Complete));
}

#[test]
fn schedule_weights_are_nonincreasing_under_any_profile() {
    let tasks = sample_tasks();
    let learner = personality::personality_by_id("learner").expect("learner template");

    let mut profile = personality::default_profile("user-1");
    profile.scoring_weights = learner.scoring_weights.clone();
    profile.scheduling_preferences = learner.scheduling_preferences.clone();

    for profile in [None, Some(&profile)] {
        let schedule = generate_optimal_schedule(&tasks, profile);
        let weights: Vec<f64> = schedule
            .iter()
            .map(|task| calculate_task_metrics(task, profile).scheduling_weight)
            .collect();

        for pair in weights.windows(2) {
            assert!(pair[0] >= pair[1], "schedule not ordered: {pair:?}");
        }
    }
}

#[test]
fn profile_changes_the_recommended_order() {
    let tasks = sample_tasks();

    let firefighter = personality::personality_by_id("firefighter").expect("firefighter");
    let mut profile = personality::default_profile("user-1");
    profile.scoring_weights = firefighter.scoring_weights.clone();
    profile.scheduling_preferences = firefighter.scheduling_preferences.clone();

    let bare = generate_optimal_schedule(&tasks, None);
    let personalized = generate_optimal_schedule(&tasks, Some(&profile));

    assert_eq!(bare.len(), personalized.len());
    // The firefighter's heavy effort penalty reshuffles the middle of the
    // ranking even though both runs agree on the quick wins up front.
    assert_eq!(personalized[0].id, "7");
}
