//! Route export: flattening a course into an ordered point sequence for the
//! external mapping service.

use url::Url;

use crate::error::{PlannerError, Result};
use crate::models::{Course, PlaceCatalog, ResolvedPlace};

/// Directions endpoint of the external mapping collaborator.
const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// An ordered point sequence ready for hand-off to the mapping service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// First point of the flattened course
    pub origin: String,
    /// Last point of the flattened course
    pub destination: String,
    /// Points between origin and destination, in visit order
    pub waypoints: Vec<String>,
}

impl Route {
    /// Builds the directions URL, joining waypoints with `|` the way the
    /// mapping service expects them in a single query value.
    pub fn maps_url(&self) -> Result<String> {
        let mut url = Url::parse(DIRECTIONS_URL).map_err(|e| PlannerError::Configuration {
            message: format!("Invalid directions endpoint: {e}"),
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api", "1");
            pairs.append_pair("origin", &self.origin);
            pairs.append_pair("destination", &self.destination);
            if !self.waypoints.is_empty() {
                pairs.append_pair("waypoints", &self.waypoints.join("|"));
            }
        }
        Ok(url.into())
    }
}

/// Flattens a course in day order, then in each day's display order, into
/// resolved places.
pub fn flatten(course: &Course, catalog: &PlaceCatalog) -> Vec<ResolvedPlace> {
    course
        .days
        .iter()
        .flat_map(|day| day.display_order().into_iter().map(|item| catalog.resolve(item)))
        .collect()
}

/// Builds the route for a course.
///
/// Fewer than two resolvable places is an explicit
/// [`PlannerError::NeedMoreLocations`] with no side effects; places missing
/// from the catalog still route via their raw id as free text.
pub fn build_route(course: &Course, catalog: &PlaceCatalog) -> Result<Route> {
    let resolved = flatten(course, catalog);
    if resolved.len() < 2 {
        return Err(PlannerError::NeedMoreLocations {
            found: resolved.len(),
        });
    }

    let points: Vec<String> = resolved.iter().map(ResolvedPlace::route_point).collect();
    let origin = points[0].clone();
    let destination = points[points.len() - 1].clone();
    let waypoints = points[1..points.len() - 1].to_vec();

    Ok(Route {
        origin,
        destination,
        waypoints,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{Language, Place};

    fn catalog() -> PlaceCatalog {
        PlaceCatalog::from_places(vec![
            Place {
                key: "bukchon".to_string(),
                title: "Bukchon Hanok Village".to_string(),
                description: String::new(),
                address: "Gye-dong, Jongno-gu".to_string(),
                lat: Some(37.5826),
                lng: Some(126.9831),
                media_url: String::new(),
            },
            Place {
                key: "insadong".to_string(),
                title: "Insadong".to_string(),
                description: String::new(),
                address: "Insadong-gil".to_string(),
                lat: None,
                lng: None,
                media_url: String::new(),
            },
        ])
    }

    fn course() -> Course {
        let mut course = Course::single_day(date(2026, 3, 1), Language::Ko);
        course
            .set_trip_dates(date(2026, 3, 1), date(2026, 3, 2))
            .expect("Failed to set dates");
        course
    }

    #[test]
    fn test_build_route_needs_two_places() {
        let mut course = course();
        match build_route(&course, &catalog()) {
            Err(PlannerError::NeedMoreLocations { found }) => assert_eq!(found, 0),
            other => panic!("Expected NeedMoreLocations, got {other:?}"),
        }

        course.toggle_place("bukchon", 1);
        assert!(matches!(
            build_route(&course, &catalog()),
            Err(PlannerError::NeedMoreLocations { found: 1 })
        ));
    }

    #[test]
    fn test_build_route_flattens_days_in_display_order() {
        let mut course = course();
        course.toggle_place("bukchon", 1);
        course.toggle_place("insadong", 1);
        course.toggle_place("ghost", 2);
        // insadong gets the earlier time, so it leads day 1 in display order.
        course.set_time(1, "bukchon", "14:00");
        course.set_time(1, "insadong", "09:00");

        let route = build_route(&course, &catalog()).expect("Failed to build route");
        assert_eq!(route.origin, "Insadong Insadong-gil");
        assert_eq!(route.waypoints, vec!["37.5826,126.9831".to_string()]);
        // The catalog miss routes as its raw id.
        assert_eq!(route.destination, "ghost");
    }

    #[test]
    fn test_maps_url_shape() {
        let route = Route {
            origin: "37.5826,126.9831".to_string(),
            destination: "Insadong Insadong-gil".to_string(),
            waypoints: vec!["a b".to_string(), "c".to_string()],
        };
        let url = route.maps_url().expect("Failed to build maps URL");

        assert!(url.starts_with("https://www.google.com/maps/dir/?api=1"));
        assert!(url.contains("origin=37.5826%2C126.9831"));
        assert!(url.contains("destination=Insadong+Insadong-gil"));
        assert!(url.contains("waypoints=a+b%7Cc"));
    }

    #[test]
    fn test_two_places_have_no_waypoints() {
        let mut course = course();
        course.toggle_place("bukchon", 1);
        course.toggle_place("insadong", 2);

        let route = build_route(&course, &catalog()).expect("Failed to build route");
        assert!(route.waypoints.is_empty());
        let url = route.maps_url().expect("Failed to build maps URL");
        assert!(!url.contains("waypoints="));
    }
}
