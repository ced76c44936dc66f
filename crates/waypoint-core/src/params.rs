//! Parameter structures for planner operations.
//!
//! These structures provide a framework-free interface for passing data into
//! the [`crate::planner::Planner`] facade. Interface layers (the CLI today)
//! define their own argument types with framework-specific derives and convert
//! into these, keeping clap concerns out of the core.
//!
//! Validation that belongs to the operation contract (time-of-day shape, blank
//! place ids) lives here as `validate`/`resolve` methods, so every interface
//! gets the same checks.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::Language;

/// Parameters for reconciling the trip date range.
///
/// Both sides are raw user input. A side that is not a valid ISO
/// `YYYY-MM-DD` date silently keeps the previous stored value rather than
/// failing the operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetTripDates {
    /// Requested start date (ISO `YYYY-MM-DD`)
    pub start: String,
    /// Requested end date (ISO `YYYY-MM-DD`)
    pub end: String,
}

impl SetTripDates {
    /// Resolves the raw inputs against the currently stored range: each side
    /// parses as an ISO date or reverts to its previous value.
    pub fn resolve(&self, previous_start: Date, previous_end: Date) -> (Date, Date) {
        let start = self.start.trim().parse().unwrap_or(previous_start);
        let end = self.end.trim().parse().unwrap_or(previous_end);
        (start, end)
    }
}

/// Parameters for toggling a place in or out of the course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TogglePlace {
    /// Stable id of the place to toggle
    pub place_id: String,
}

impl TogglePlace {
    /// Returns the trimmed place id, rejecting blank input.
    pub fn validate(&self) -> Result<&str> {
        let id = self.place_id.trim();
        if id.is_empty() {
            return Err(PlannerError::invalid_input(
                "place_id",
                "Place id must not be blank",
            ));
        }
        Ok(id)
    }
}

/// Parameters for removing a place from one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemovePlace {
    /// 1-based day index to remove from
    pub day: u32,
    /// Stable id of the place to remove
    pub place_id: String,
}

/// Parameters for setting or clearing a place's visit time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetTime {
    /// 1-based day index holding the place
    pub day: u32,
    /// Stable id of the place to annotate
    pub place_id: String,
    /// `HH:MM` in 24-hour time, or empty to clear
    pub time: String,
}

impl SetTime {
    /// Validates the time annotation: empty clears, otherwise `HH:MM` with
    /// hours 00-23 and minutes 00-59.
    pub fn validate(&self) -> Result<&str> {
        let time = self.time.trim();
        if time.is_empty() {
            return Ok("");
        }
        let valid = time.len() == 5
            && time.as_bytes()[2] == b':'
            && matches!(time[0..2].parse::<u8>(), Ok(h) if h < 24)
            && matches!(time[3..5].parse::<u8>(), Ok(m) if m < 60);
        if !valid {
            return Err(PlannerError::invalid_input(
                "time",
                format!("Invalid time: {time}. Use HH:MM in 24-hour time, or empty to clear"),
            ));
        }
        Ok(time)
    }
}

/// Parameters for reordering two places within one day.
///
/// This is the platform-agnostic form of a drag-and-drop: the moved place is
/// spliced out of the day's storage list and reinserted at the target place's
/// former position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReorderPlaces {
    /// 1-based day index holding both places
    pub day: u32,
    /// Id of the place being dragged
    pub moved_id: String,
    /// Id of the place it was dropped on
    pub target_id: String,
}

/// Parameters for moving a place between days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovePlace {
    /// 1-based index of the day currently holding the place
    pub from_day: u32,
    /// 1-based index of the day to append it to
    pub to_day: u32,
    /// Stable id of the place to move
    pub place_id: String,
}

/// Parameters for selecting the day new places are toggled onto.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectDay {
    /// 1-based day index to select
    pub day: u32,
}

/// Parameters for switching the active language tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetLanguage {
    /// Language tag to tag the course with
    pub language: Language,
}

/// Parameters for opening a shared course snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenShared {
    /// A bare share token, or a full share URL carrying one
    pub token: String,
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_set_trip_dates_resolve_keeps_previous_on_invalid_input() {
        let params = SetTripDates {
            start: "2026-03-05".to_string(),
            end: "not-a-date".to_string(),
        };
        let (start, end) = params.resolve(date(2026, 3, 1), date(2026, 3, 3));
        assert_eq!(start, date(2026, 3, 5));
        assert_eq!(end, date(2026, 3, 3));
    }

    #[test]
    fn test_set_trip_dates_resolve_rejects_partial_dates() {
        let params = SetTripDates {
            start: "2026-3-5".to_string(),
            end: String::new(),
        };
        let (start, end) = params.resolve(date(2026, 3, 1), date(2026, 3, 3));
        assert_eq!(start, date(2026, 3, 1));
        assert_eq!(end, date(2026, 3, 3));
    }

    #[test]
    fn test_toggle_place_validate_trims_and_rejects_blank() {
        let params = TogglePlace {
            place_id: "  bukchon  ".to_string(),
        };
        assert_eq!(params.validate().unwrap(), "bukchon");

        let params = TogglePlace {
            place_id: "   ".to_string(),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_set_time_validate() {
        let ok = |time: &str| SetTime {
            day: 1,
            place_id: "x".to_string(),
            time: time.to_string(),
        };

        assert_eq!(ok("09:30").validate().unwrap(), "09:30");
        assert_eq!(ok("").validate().unwrap(), "");
        assert_eq!(ok("23:59").validate().unwrap(), "23:59");
        assert!(ok("24:00").validate().is_err());
        assert!(ok("12:60").validate().is_err());
        assert!(ok("9:30").validate().is_err());
        assert!(ok("soon").validate().is_err());
    }
}
