use jiff::civil::date;
use waypoint_core::params::{
    MovePlace, RemovePlace, ReorderPlaces, SelectDay, SetTime, SetTripDates, TogglePlace,
};
use waypoint_core::{PlannerError, ToggleOutcome};

mod common;
use common::create_test_planner;

fn toggle(id: &str) -> TogglePlace {
    TogglePlace {
        place_id: id.to_string(),
    }
}

#[tokio::test]
async fn test_complete_course_workflow() {
    let (_temp_dir, planner) = create_test_planner().await;

    // Set a three-day range
    let snapshot = planner
        .set_trip_dates(&SetTripDates {
            start: "2026-03-01".to_string(),
            end: "2026-03-03".to_string(),
        })
        .await
        .expect("Failed to set trip dates");
    assert_eq!(snapshot.course.days.len(), 3);
    assert_eq!(snapshot.course.days[0].date, date(2026, 3, 1));
    assert_eq!(snapshot.course.days[2].date, date(2026, 3, 3));

    // Build an itinerary on days 1 and 2
    planner
        .toggle_place(&toggle("bukchon"))
        .await
        .expect("Failed to toggle bukchon");
    planner
        .toggle_place(&toggle("insadong"))
        .await
        .expect("Failed to toggle insadong");
    planner
        .select_day(&SelectDay { day: 2 })
        .await
        .expect("Failed to select day 2");
    planner
        .toggle_place(&toggle("namsan"))
        .await
        .expect("Failed to toggle namsan");

    // Annotate and rearrange
    planner
        .set_time(&SetTime {
            day: 1,
            place_id: "insadong".to_string(),
            time: "09:00".to_string(),
        })
        .await
        .expect("Failed to set time");
    let reordered = planner
        .reorder_places(&ReorderPlaces {
            day: 1,
            moved_id: "bukchon".to_string(),
            target_id: "insadong".to_string(),
        })
        .await
        .expect("Failed to reorder");
    assert!(reordered);
    let moved = planner
        .move_place(&MovePlace {
            from_day: 2,
            to_day: 3,
            place_id: "namsan".to_string(),
        })
        .await
        .expect("Failed to move");
    assert!(moved);

    // Verify the whole shape
    let snapshot = planner.show_course().await.expect("Failed to show course");
    assert_eq!(snapshot.course.total_places(), 3);
    // The reorder spliced bukchon onto insadong's former position.
    let day1: Vec<_> = snapshot.course.days[0]
        .places
        .iter()
        .map(|p| p.place_id.as_str())
        .collect();
    assert_eq!(day1, vec!["insadong", "bukchon"]);
    assert!(snapshot.course.days[1].places.is_empty());
    assert_eq!(snapshot.course.days[2].places[0].place_id, "namsan");

    // Display order puts the timed entry first without touching storage
    let display: Vec<_> = snapshot.course.days[0]
        .display_order()
        .iter()
        .map(|p| p.place_id.as_str())
        .collect();
    assert_eq!(display, vec!["insadong", "bukchon"]);

    // No place id appears in more than one day
    for day in &snapshot.course.days {
        for item in &day.places {
            assert_eq!(
                snapshot.course.find_place(&item.place_id),
                Some(day.day_index)
            );
        }
    }
}

#[tokio::test]
async fn test_no_op_mutations_report_false() {
    let (_temp_dir, planner) = create_test_planner().await;

    let removed = planner
        .remove_place(&RemovePlace {
            day: 1,
            place_id: "ghost".to_string(),
        })
        .await
        .expect("Missing place should be a no-op");
    assert!(!removed);

    let reordered = planner
        .reorder_places(&ReorderPlaces {
            day: 1,
            moved_id: "ghost".to_string(),
            target_id: "ghost2".to_string(),
        })
        .await
        .expect("Missing ids should be a no-op");
    assert!(!reordered);

    let moved = planner
        .move_place(&MovePlace {
            from_day: 1,
            to_day: 9,
            place_id: "ghost".to_string(),
        })
        .await
        .expect("Missing day should be a no-op");
    assert!(!moved);
}

#[tokio::test]
async fn test_blank_place_id_is_rejected() {
    let (_temp_dir, planner) = create_test_planner().await;

    let result = planner.toggle_place(&toggle("   ")).await;
    assert!(matches!(result, Err(PlannerError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_state_survives_planner_restart() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("trip.db");

    {
        let planner = waypoint_core::PlannerBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .expect("Failed to create planner");
        planner
            .set_trip_dates(&SetTripDates {
                start: "2026-03-01".to_string(),
                end: "2026-03-02".to_string(),
            })
            .await
            .expect("Failed to set dates");
        planner
            .toggle_place(&toggle("bukchon"))
            .await
            .expect("Failed to toggle");
    }

    let planner = waypoint_core::PlannerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to reopen planner");
    let snapshot = planner.show_course().await.expect("Failed to show course");
    assert_eq!(snapshot.course.days.len(), 2);
    assert_eq!(snapshot.course.days[0].places[0].place_id, "bukchon");
}

#[tokio::test]
async fn test_toggle_involution_through_the_store() {
    let (_temp_dir, planner) = create_test_planner().await;

    planner
        .toggle_place(&toggle("bukchon"))
        .await
        .expect("Failed to toggle");
    let before = planner.show_course().await.expect("Failed to show course");

    let outcome = planner
        .toggle_place(&toggle("namsan"))
        .await
        .expect("Failed to toggle on");
    assert!(matches!(outcome, ToggleOutcome::Added { .. }));
    let outcome = planner
        .toggle_place(&toggle("namsan"))
        .await
        .expect("Failed to toggle off");
    assert_eq!(outcome, ToggleOutcome::Removed);

    let after = planner.show_course().await.expect("Failed to show course");
    assert_eq!(after, before);
}
