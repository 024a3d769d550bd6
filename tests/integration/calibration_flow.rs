use chrono::{DateTime, TimeZone, Utc};
use taskrank::models::calibration::PriorityLevel;
use taskrank::models::personality;
use taskrank::models::task::{Task, TaskStatus};
use taskrank::services::calibration_service::{calculate_score_calibration, calibrate_task};
use taskrank::services::metrics_service::calculate_task_metrics;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap()
}

#[allow(clippy::too_many_arguments)]
fn sample_task(
    id: &str,
    title: &str,
    category: &str,
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
        title: title.to_string(),
        description: None,
        category: category.to_string(),
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

/// The demo collection the original dashboard ships with.
fn sample_tasks() -> Vec<Task> {
    vec![
        sample_task(
            "1",
            "Complete quarterly financial review",
            "Work",
            5.0,
            4.0,
            5.0,
            3.0,
            180.0,
            TaskStatus::Incomplete,
            Some(at(2024, 2, 1)),
        ),
        sample_task(
            "2",
            "Optimize website performance",
            "Work",
            4.0,
            2.0,
            4.0,
            4.0,
            240.0,
            TaskStatus::InProgress,
            None,
        ),
        sample_task(
            "3",
            "Learn a new framework",
            "Learning",
            4.0,
            2.0,
            5.0,
            2.0,
            300.0,
            TaskStatus::Incomplete,
            None,
        ),
        sample_task(
            "4",
            "Call client about timeline",
            "Work",
            2.0,
            5.0,
            2.0,
            1.0,
            30.0,
            TaskStatus::Incomplete,
            Some(at(2024, 1, 17)),
        ),
        sample_task(
            "5",
            "Plan weekend hiking trip",
            "Personal",
            2.0,
            2.0,
            3.0,
            2.0,
            90.0,
            TaskStatus::Incomplete,
            None,
        ),
        sample_task(
            "6",
            "Update portfolio website",
            "Creative",
            3.0,
            1.0,
            4.0,
            3.0,
            120.0,
            TaskStatus::Incomplete,
            None,
        ),
        sample_task(
            "7",
            "Schedule annual health checkup",
            "Health",
            4.0,
            3.0,
            4.0,
            1.0,
            15.0,
            TaskStatus::Incomplete,
            None,
        ),
        sample_task(
            "8",
            "Organize digital photo collection",
            "Personal",
            2.0,
            1.0,
            2.0,
            4.0,
            180.0,
            TaskStatus::Incomplete,
            None,
        ),
        sample_task(
            "9",
            "Prepare presentation for team meeting",
            "Work",
            4.0,
            4.0,
            3.0,
            2.0,
            120.0,
            TaskStatus::Complete,
            Some(at(2024, 1, 11)),
        ),
        sample_task(
            "10",
            "Research investment opportunities",
            "Finance",
            3.0,
            2.0,
            4.0,
            3.0,
            150.0,
            TaskStatus::Incomplete,
            None,
        ),
    ]
}

#[test]
fn dual_priority_formulas_on_sample_task() {
    let tasks = sample_tasks();

    // Legacy simple sum without a profile.
    let bare = calculate_task_metrics(&tasks[0], None);
    assert!((bare.priority_score - 11.0).abs() < 1e-9);

    // Unit-weight profile adds the fixed learning/skill terms.
    let profile = personality::default_profile("user-1");
    let personalized = calculate_task_metrics(&tasks[0], Some(&profile));
    assert!((personalized.priority_score - 12.75).abs() < 1e-9);
}

#[test]
fn calibration_snapshot_of_sample_collection() {
    let tasks = sample_tasks();
    let calibration = calculate_score_calibration(&tasks, None);

    // Scores: 11, 6, 9, 8, 5, 5, 10, 1, 9, 6.
    let p = &calibration.percentiles;
    assert_eq!(p.p90, 10.0);
    assert_eq!(p.p75, 9.0);
    assert_eq!(p.p50, 6.0);
    assert_eq!(p.p25, 5.0);
    assert_eq!(p.p10, 1.0);

    let ranges = &calibration.ranges;
    assert_eq!(ranges.critical.lower, 10.0);
    assert_eq!(ranges.critical.upper, 15.0);
    assert!((ranges.high.upper - 9.99).abs() < 1e-9);
    assert_eq!(ranges.medium.lower, 5.0);
    assert_eq!(ranges.low.lower, 0.0);

    assert!((calibration.averages.overall - 7.0).abs() < 1e-9);
    assert!((calibration.averages.by_status.complete - 9.0).abs() < 1e-9);
    assert!((calibration.averages.by_status.in_progress - 6.0).abs() < 1e-9);
    assert!((calibration.averages.by_status.incomplete - 6.875).abs() < 1e-9);
    assert!((calibration.averages.by_quadrant.do_first - 10.0).abs() < 1e-9);
    assert!((calibration.averages.by_quadrant.schedule - 6.5).abs() < 1e-9);
    assert!((calibration.averages.by_quadrant.delegate - 8.0).abs() < 1e-9);
    assert!((calibration.averages.by_quadrant.eliminate - 3.0).abs() < 1e-9);

    assert_eq!(calibration.benchmarks.fast_completion, 9.0);
    assert_eq!(calibration.benchmarks.weekly_target, 6.0);
    assert!((calibration.benchmarks.daily_capacity - 42.0).abs() < 1e-9);
}

#[test]
fn range_boundaries_stay_ordered_with_and_without_profile() {
    let tasks = sample_tasks();
    let profile = personality::default_profile("user-1");

    for profile in [None, Some(&profile)] {
        let calibration = calculate_score_calibration(&tasks, profile);
        let ranges = &calibration.ranges;

        assert!(ranges.low.upper < ranges.medium.lower);
        assert!(ranges.medium.lower <= ranges.medium.upper);
        assert!(ranges.medium.upper < ranges.high.lower);
        assert!(ranges.high.lower <= ranges.high.upper);
        assert!(ranges.high.upper < ranges.critical.lower);
    }
}

#[test]
fn calibrated_levels_agree_with_ranges() {
    let tasks = sample_tasks();
    let calibration = calculate_score_calibration(&tasks, None);

    for task in &tasks {
        let calibrated = calibrate_task(task, &calibration, None);
        let score = calculate_task_metrics(task, None).priority_score;

        let expected = if score >= calibration.ranges.critical.lower {
            PriorityLevel::Critical
        } else if score >= calibration.ranges.high.lower {
            PriorityLevel::High
        } else if score >= calibration.ranges.medium.lower {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        };
        assert_eq!(calibrated.priority_level, expected, "task {}", task.id);
    }
}

#[test]
fn top_task_annotation() {
    let tasks = sample_tasks();
    let calibration = calculate_score_calibration(&tasks, None);

    let review = calibrate_task(&tasks[0], &calibration, None);
    assert_eq!(review.priority_level, PriorityLevel::Critical);
    assert_eq!(review.calibrated_score, 11.0);
    // 90 + (11 - 10) / (10 * 2) * 10
    assert!((review.score_percentile - 90.5).abs() < 1e-9);
    assert_eq!(
        review.score_interpretation,
        "Critical priority (11.0) - Higher than 91% of tasks. Immediate attention required."
    );
    assert!(review.benchmark_comparison.is_fast_track);
    assert!(review.benchmark_comparison.is_weekly_focus);
    assert!(review.benchmark_comparison.is_daily_capacity);
}

#[test]
fn bottom_task_annotation() {
    let tasks = sample_tasks();
    let calibration = calculate_score_calibration(&tasks, None);

    let photos = calibrate_task(&tasks[7], &calibration, None);
    assert_eq!(photos.priority_level, PriorityLevel::Low);
    assert_eq!(photos.calibrated_score, 1.0);
    assert!((photos.score_percentile - 10.0).abs() < 1e-9);
    assert!(!photos.benchmark_comparison.is_fast_track);
    assert!(!photos.benchmark_comparison.is_weekly_focus);
}

#[test]
fn empty_collection_falls_back() {
    let calibration = calculate_score_calibration(&[], None);

    assert_eq!(calibration.ranges.critical.lower, 9.0);
    assert_eq!(calibration.percentiles.p50, 4.0);
    assert_eq!(calibration.benchmarks.daily_capacity, 20.0);

    // Calibrating against the fallback still works.
    let orphan = sample_tasks().remove(0);
    let calibrated = calibrate_task(&orphan, &calibration, None);
    assert_eq!(calibrated.priority_level, PriorityLevel::Critical);
}
