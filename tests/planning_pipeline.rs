//! End-to-end scenarios over a roadmap snapshot: aggregation, weighting,
//! priorities, missing-rating views, and the ranked task pipeline working
//! together the way a presentation layer consumes them.

use chrono::{TimeZone, Utc};

use waypoint::access::{decode, encode, encode_with_diagnostics, RoleObject};
use waypoint::core::models::{Customer, Roadmap, RoadmapUser, Task, TaskRating, UserInfo};
use waypoint::core::types::{Permission, RatingDimension, RoleType};
use waypoint::rank::{
    average_value_and_work, missing_customers, notification_targets, task_awaits_ratings,
    task_priority, weighted_task_priority, RepresentativeAttribution,
};
use waypoint::view::{ranked_tasks, SortingOrder, TaskFilter, TaskSort};

const EPSILON: f64 = 1e-9;

/// Roadmap with customers A (representatives r1=1, r2=2) and B (r3=3),
/// developer d1=4, and three tasks in different rating states.
fn snapshot() -> Roadmap {
    let customer_a = Customer::new(1, "A")
        .with_email("a@example.com")
        .with_representative(1)
        .with_representative(2);
    let customer_b = Customer::new(2, "B")
        .with_email("b@example.com")
        .with_representative(3);

    // Task 10: rated only by r1, for customer A.
    let partially_rated = Task::new(10, 1, "Checkout flow")
        .with_created_at(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap())
        .with_rating(
            TaskRating::new(10, 1, RatingDimension::BusinessValue, 8.0).for_customer(1),
        )
        .with_rating(TaskRating::new(10, 4, RatingDimension::RequiredWork, 4.0));

    // Task 11: fully rated by both customers and the developer.
    let fully_rated = Task::new(11, 1, "Search rework")
        .with_created_at(Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap())
        .with_rating(
            TaskRating::new(11, 1, RatingDimension::BusinessValue, 6.0).for_customer(1),
        )
        .with_rating(
            TaskRating::new(11, 2, RatingDimension::BusinessValue, 4.0).for_customer(1),
        )
        .with_rating(
            TaskRating::new(11, 3, RatingDimension::BusinessValue, 2.0).for_customer(2),
        )
        .with_rating(TaskRating::new(11, 4, RatingDimension::RequiredWork, 2.0));

    // Task 12: completed, unrated.
    let completed = Task::new(12, 1, "Fix login bug")
        .with_created_at(Utc.with_ymd_and_hms(2024, 3, 3, 9, 0, 0).unwrap())
        .with_completed(true);

    Roadmap::new(1, "Spring plan")
        .with_customer(customer_a)
        .with_customer(customer_b)
        .with_task(partially_rated)
        .with_task(fully_rated)
        .with_task(completed)
}

fn roster() -> Vec<RoadmapUser> {
    vec![
        RoadmapUser::new(1, "rep-one", RoleType::Business, 1),
        RoadmapUser::new(2, "rep-two", RoleType::Business, 1),
        RoadmapUser::new(3, "rep-three", RoleType::Customer, 1),
        RoadmapUser::new(4, "dev-one", RoleType::Developer, 1),
        RoadmapUser::new(5, "admin", RoleType::Admin, 1),
    ]
}

#[test]
fn priorities_follow_sentinel_scheme_across_snapshot() {
    let roadmap = snapshot();

    assert!((task_priority(&roadmap.tasks[0]) - 2.0).abs() < EPSILON);
    assert!((task_priority(&roadmap.tasks[1]) - 2.0).abs() < EPSILON);
    assert_eq!(task_priority(&roadmap.tasks[2]), -2.0);
}

#[test]
fn weighted_priority_reflects_planner_overrides() {
    let roadmap = snapshot();
    let plain = weighted_task_priority(&roadmap.tasks[1], &roadmap.customers, &roadmap);

    // Doubling customer A's weight raises the weighted priority of a task
    // mostly valued by A's representatives.
    let roadmap = snapshot().with_planner_weight(1, 2.0);
    let boosted = weighted_task_priority(&roadmap.tasks[1], &roadmap.customers, &roadmap);

    assert!(boosted > plain);
}

#[test]
fn roadmap_averages_over_rated_and_unrated_tasks() {
    let roadmap = snapshot();
    let averages = average_value_and_work(&roadmap.tasks).unwrap();

    // Means per task: (8, 4), (4, 2), (0, 0) over three tasks.
    assert!((averages.value - 4.0).abs() < EPSILON);
    assert!((averages.work - 2.0).abs() < EPSILON);
}

#[test]
fn admin_missing_view_matches_rating_coverage() {
    let roadmap = snapshot();
    let task = &roadmap.tasks[0];

    let missing = missing_customers(
        task,
        &roadmap.customers,
        RepresentativeAttribution::AnyRating,
    );
    let ids: Vec<_> = missing.iter().map(|c| c.id).collect();
    // A is missing (r2 never rated), B is missing (r3 never rated).
    assert_eq!(ids, vec![1, 2]);

    // Notify r2 and r3, not r1 who already rated for A.
    let targets = notification_targets(
        task,
        &roadmap.customers,
        RepresentativeAttribution::AnyRating,
    );
    assert_eq!(targets, vec![2, 3]);
}

#[test]
fn awaiting_badge_depends_on_viewer() {
    let roadmap = snapshot();
    let task = &roadmap.tasks[0];
    let customer_a = roadmap.customers[0].clone();

    let rated_rep = UserInfo::new(1, "rep-one")
        .with_role(1, RoleType::Business)
        .with_represented(customer_a.clone());
    assert!(!task_awaits_ratings(task, &rated_rep));

    let unrated_rep = UserInfo::new(2, "rep-two")
        .with_role(1, RoleType::Business)
        .with_represented(customer_a);
    assert!(task_awaits_ratings(task, &unrated_rep));

    let developer = UserInfo::new(4, "dev-one").with_role(1, RoleType::Developer);
    assert!(!task_awaits_ratings(task, &developer));

    let idle_developer = UserInfo::new(6, "dev-two").with_role(1, RoleType::Developer);
    assert!(task_awaits_ratings(task, &idle_developer));
}

#[test]
fn ranked_view_composes_filter_search_sort() {
    let roadmap = snapshot();

    let view = ranked_tasks(
        &roadmap.tasks,
        TaskFilter::NotCompleted,
        "",
        TaskSort::Ratings,
        SortingOrder::Descending,
    );
    let ids: Vec<_> = view.iter().map(|t| t.id).collect();
    // Equal priorities keep input order under the stable sort.
    assert_eq!(ids, vec![10, 11]);

    let searched = ranked_tasks(
        &roadmap.tasks,
        TaskFilter::NotCompleted,
        "search",
        TaskSort::Ratings,
        SortingOrder::Descending,
    );
    let ids: Vec<_> = searched.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![11]);
}

#[test]
fn developer_filter_views_use_roster_roles() {
    let roadmap = snapshot();
    let roster = roster();
    let developer = roster.iter().find(|u| u.role == RoleType::Developer).unwrap();

    let unrated_by_dev = ranked_tasks(
        &roadmap.tasks,
        TaskFilter::NotRatedBy(developer.id),
        "",
        TaskSort::CreatedAt,
        SortingOrder::Ascending,
    );
    let ids: Vec<_> = unrated_by_dev.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![12]);
}

#[test]
fn viewer_masks_roundtrip_through_codec() {
    for user in roster() {
        let mask = user.role.permissions();
        let decoded = decode(mask);
        assert_eq!(encode(&decoded), mask, "role {}", user.role);
    }

    let composite = RoleType::Developer.permissions() | Permission::RoadmapInvite.bits();
    assert_eq!(encode(&decode(composite)), composite);

    let (mask, unknown) = encode_with_diagnostics(&RoleObject {
        roles: vec!["Developer".into(), "Wizard".into()],
        permissions: vec![],
    });
    assert_eq!(mask, RoleType::Developer.permissions());
    assert_eq!(unknown, vec!["Wizard"]);
}

#[test]
fn snapshot_roundtrips_through_json() {
    let roadmap = snapshot();
    let json = serde_json::to_string(&roadmap).unwrap();
    let parsed: Roadmap = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, roadmap);
}
