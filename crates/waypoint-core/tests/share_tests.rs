use waypoint_core::params::{OpenShared, SetLanguage, SetTime, SetTripDates, TogglePlace};
use waypoint_core::{Language, PlaceCatalog, PlannerError};

mod common;
use common::create_test_planner;

fn toggle(id: &str) -> TogglePlace {
    TogglePlace {
        place_id: id.to_string(),
    }
}

/// A share produced on one machine opens read-only on another with the same
/// day/place/time content and language tag.
#[tokio::test]
async fn test_share_roundtrip_between_planners() {
    let (_author_dir, author) = create_test_planner().await;
    author
        .set_trip_dates(&SetTripDates {
            start: "2026-03-01".to_string(),
            end: "2026-03-02".to_string(),
        })
        .await
        .expect("Failed to set dates");
    author
        .toggle_place(&toggle("경복궁"))
        .await
        .expect("Failed to toggle");
    author
        .set_time(&SetTime {
            day: 1,
            place_id: "경복궁".to_string(),
            time: "09:30".to_string(),
        })
        .await
        .expect("Failed to set time");
    author
        .set_language(&SetLanguage {
            language: Language::En,
        })
        .await
        .expect("Failed to set language");

    let token = author
        .create_share_token()
        .await
        .expect("Failed to create share token");
    let original = author.show_course().await.expect("Failed to show course");

    let (_viewer_dir, viewer) = create_test_planner().await;
    let opened = viewer
        .open_shared(&OpenShared { token })
        .await
        .expect("Failed to open share");

    assert!(opened.read_only());
    assert_eq!(opened.course.start_date, original.course.start_date);
    assert_eq!(opened.course.end_date, original.course.end_date);
    assert_eq!(opened.course.days, original.course.days);
    assert_eq!(opened.course.meta.language, Language::En);

    // The viewer's store now reports the shared snapshot until edit-copy.
    let shown = viewer.show_course().await.expect("Failed to show course");
    assert!(shown.read_only());
    assert_eq!(shown.course.days, original.course.days);
}

#[tokio::test]
async fn test_open_accepts_full_share_urls() {
    let (_author_dir, author) = create_test_planner().await;
    author
        .toggle_place(&toggle("bukchon"))
        .await
        .expect("Failed to toggle");
    let token = author
        .create_share_token()
        .await
        .expect("Failed to create share token");
    let url = waypoint_core::share::share_url("https://example.com/trip", &token)
        .expect("Failed to build share URL");

    let (_viewer_dir, viewer) = create_test_planner().await;
    let opened = viewer
        .open_shared(&OpenShared { token: url })
        .await
        .expect("Failed to open share URL");
    assert_eq!(opened.course.total_places(), 1);
}

#[tokio::test]
async fn test_route_export_follows_display_order() {
    let (_temp_dir, planner) = create_test_planner().await;
    let catalog = PlaceCatalog::empty();

    // Fewer than two places is an explicit rejection with no side effects.
    let result = planner.build_route(&catalog).await;
    assert!(matches!(
        result,
        Err(PlannerError::NeedMoreLocations { found: 0 })
    ));

    planner
        .toggle_place(&toggle("first"))
        .await
        .expect("Failed to toggle");
    planner
        .toggle_place(&toggle("second"))
        .await
        .expect("Failed to toggle");
    planner
        .toggle_place(&toggle("third"))
        .await
        .expect("Failed to toggle");
    // An earlier time pulls "third" to the front of the display order.
    planner
        .set_time(&SetTime {
            day: 1,
            place_id: "third".to_string(),
            time: "08:00".to_string(),
        })
        .await
        .expect("Failed to set time");

    let route = planner
        .build_route(&catalog)
        .await
        .expect("Failed to build route");
    // Empty catalog: every point degrades to its raw id.
    assert_eq!(route.origin, "third");
    assert_eq!(route.waypoints, vec!["first".to_string()]);
    assert_eq!(route.destination, "second");

    let url = route.maps_url().expect("Failed to build maps URL");
    assert!(url.starts_with("https://www.google.com/maps/dir/?api=1"));
}

/// A v1 token decodes into a single-day course holding the items in order.
#[tokio::test]
async fn test_legacy_v1_token_upgrade() {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    let json = r#"{"v":1,"lang":"en","items":[{"id":"a","time":"09:00"},{"id":"b","time":""}]}"#;
    let token = URL_SAFE_NO_PAD.encode(json.as_bytes());

    let (_temp_dir, planner) = create_test_planner().await;
    let opened = planner
        .open_shared(&OpenShared { token })
        .await
        .expect("Failed to open legacy share");

    assert_eq!(opened.course.days.len(), 1);
    let places = &opened.course.days[0].places;
    assert_eq!(places.len(), 2);
    assert_eq!(places[0].place_id, "a");
    assert_eq!(places[0].time, "09:00");
    assert_eq!(places[1].place_id, "b");
    assert_eq!(places[1].time, "");
    assert_eq!(opened.course.meta.language, Language::En);
}
