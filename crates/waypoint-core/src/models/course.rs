//! Course model definition and the pure itinerary mutations.
//!
//! The [`Course`] is the root object of the planner: a calendar date range
//! expanded into contiguous day buckets, each holding an ordered list of
//! [`ItineraryItem`]s. All mutations here are pure in-memory transformations;
//! persistence and read-only guarding live in [`crate::planner`].

use jiff::civil::Date;
use jiff::{Span, Zoned};
use serde::{Deserialize, Serialize};

use super::{ItineraryItem, Language};
use crate::error::{PlannerError, Result};

/// A complete multi-day itinerary for one user session.
///
/// Invariants maintained by every mutation:
/// - `start_date <= end_date`
/// - `days.len()` equals the inclusive day count of the date range
/// - `days[i].day_index == i + 1` and `days[i].date == start_date + i`
/// - a given place id appears in at most one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// First day of the trip (inclusive)
    pub start_date: Date,

    /// Last day of the trip (inclusive)
    pub end_date: Date,

    /// Day buckets, ordered by `day_index`
    pub days: Vec<Day>,

    /// Course metadata (active language tag)
    #[serde(default)]
    pub meta: Meta,
}

/// One calendar day within a course.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// 1-based position of this day within the course
    #[serde(rename = "dayIndex")]
    pub day_index: u32,

    /// Calendar date, always derived from the course start date
    pub date: Date,

    /// Scheduled places in storage order (insertion/drag order)
    #[serde(default)]
    pub places: Vec<ItineraryItem>,
}

/// Course metadata persisted and shared alongside the day buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Language tag active when the course was last saved or shared
    #[serde(rename = "lang", default)]
    pub language: Language,
}

/// Outcome of a toggle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The place was not in the course and was appended to a day
    Added { day_index: u32 },
    /// The place was already scheduled and has been removed
    Removed,
}

/// Returns today's date in the system timezone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Adds a whole number of days to a civil date.
pub fn add_days(date: Date, days: i64) -> Result<Date> {
    date.checked_add(Span::new().days(days))
        .map_err(|e| PlannerError::Configuration {
            message: format!("Date arithmetic out of range: {e}"),
        })
}

/// Inclusive day count between two dates; never less than 1.
pub fn inclusive_day_count(start: Date, end: Date) -> u32 {
    let days = start.until(end).map(|span| span.get_days()).unwrap_or(0);
    (days + 1).max(1) as u32
}

impl Course {
    /// Creates a minimal single-day course for the given date.
    pub fn single_day(date: Date, language: Language) -> Self {
        Self {
            start_date: date,
            end_date: date,
            days: vec![Day {
                day_index: 1,
                date,
                places: Vec::new(),
            }],
            meta: Meta { language },
        }
    }

    /// Number of day buckets.
    pub fn day_count(&self) -> u32 {
        self.days.len() as u32
    }

    /// Total number of places across all days.
    pub fn total_places(&self) -> usize {
        self.days.iter().map(|day| day.places.len()).sum()
    }

    /// Looks up a day bucket by its 1-based index.
    pub fn day(&self, day_index: u32) -> Option<&Day> {
        self.days.iter().find(|day| day.day_index == day_index)
    }

    fn day_mut(&mut self, day_index: u32) -> Option<&mut Day> {
        self.days.iter_mut().find(|day| day.day_index == day_index)
    }

    /// Returns the index of the day currently holding the given place.
    pub fn find_place(&self, place_id: &str) -> Option<u32> {
        self.days
            .iter()
            .find(|day| day.position_of(place_id).is_some())
            .map(|day| day.day_index)
    }

    /// Toggles a place in or out of the course.
    ///
    /// If the place is scheduled anywhere it is removed from wherever it is;
    /// otherwise a fresh item is appended to the selected day (falling back to
    /// the first day when the selection is stale). A place is never scheduled
    /// twice.
    pub fn toggle_place(&mut self, place_id: &str, selected_day: u32) -> ToggleOutcome {
        if self.find_place(place_id).is_some() {
            for day in &mut self.days {
                day.places.retain(|item| item.place_id != place_id);
            }
            return ToggleOutcome::Removed;
        }

        let position = self
            .days
            .iter()
            .position(|day| day.day_index == selected_day)
            .unwrap_or(0);
        let day = &mut self.days[position];
        let day_index = day.day_index;
        day.places.push(ItineraryItem::new(place_id));
        ToggleOutcome::Added { day_index }
    }

    /// Removes a place from the given day only. Returns whether anything was
    /// removed; a missing day or place is a no-op.
    pub fn remove_place(&mut self, day_index: u32, place_id: &str) -> bool {
        let Some(day) = self.day_mut(day_index) else {
            return false;
        };
        let before = day.places.len();
        day.places.retain(|item| item.place_id != place_id);
        day.places.len() != before
    }

    /// Overwrites the visit time on a scheduled place; an empty string clears
    /// it. Returns whether a matching item was found.
    pub fn set_time(&mut self, day_index: u32, place_id: &str, time: &str) -> bool {
        let Some(item) = self
            .day_mut(day_index)
            .and_then(|day| day.places.iter_mut().find(|item| item.place_id == place_id))
        else {
            return false;
        };
        item.time = time.to_string();
        true
    }

    /// Moves `moved_id` to the storage position `target_id` currently holds
    /// within the same day (list-splice semantics). No-op when either id is
    /// missing from that day.
    pub fn reorder_within_day(&mut self, day_index: u32, moved_id: &str, target_id: &str) -> bool {
        let Some(day) = self.day_mut(day_index) else {
            return false;
        };
        // Both positions are taken before the splice; the target's former
        // position is where the moved item lands.
        let (Some(from), Some(to)) = (day.position_of(moved_id), day.position_of(target_id)) else {
            return false;
        };
        if from == to {
            return false;
        }
        let moved = day.places.remove(from);
        let to = to.min(day.places.len());
        day.places.insert(to, moved);
        true
    }

    /// Removes a place from one day and appends it to the end of another,
    /// carrying its time and note. No-op when the place or either day is
    /// missing.
    pub fn move_place(&mut self, from_day: u32, to_day: u32, place_id: &str) -> bool {
        if self.day(from_day).is_none() || self.day(to_day).is_none() {
            return false;
        }
        let moved = {
            let Some(day) = self.day_mut(from_day) else {
                return false;
            };
            let Some(position) = day.position_of(place_id) else {
                return false;
            };
            day.places.remove(position)
        };
        if let Some(day) = self.day_mut(to_day) {
            day.places.push(moved);
            true
        } else {
            false
        }
    }

    /// Reconciles the day buckets to a new date range.
    ///
    /// The range is normalized so `start <= end`. Shortening is an
    /// all-or-nothing operation: if any day past the new count still holds
    /// places, the whole call is rejected with
    /// [`PlannerError::CannotShortenDates`] and the course is left untouched.
    /// Surviving days carry their places verbatim by day index; new days start
    /// empty. Returns the new day count so the caller can clamp its selected
    /// day.
    pub fn set_trip_dates(&mut self, new_start: Date, new_end: Date) -> Result<u32> {
        let (start, end) = if new_start <= new_end {
            (new_start, new_end)
        } else {
            (new_end, new_start)
        };
        let count = inclusive_day_count(start, end);

        if count < self.day_count() {
            let truncated_has_places = self
                .days
                .iter()
                .filter(|day| day.day_index > count)
                .any(|day| !day.places.is_empty());
            if truncated_has_places {
                return Err(PlannerError::CannotShortenDates { day_count: count });
            }
        }

        self.start_date = start;
        self.end_date = end;
        self.rebuild_days()
    }

    /// Rebuilds `days` to match the current date range, carrying each
    /// existing day's places over by day index. Returns the day count.
    pub fn rebuild_days(&mut self) -> Result<u32> {
        let count = inclusive_day_count(self.start_date, self.end_date);

        // Resolve every date up front so a range error leaves the course
        // untouched.
        let mut dates = Vec::with_capacity(count as usize);
        for i in 0..count {
            dates.push(add_days(self.start_date, i64::from(i))?);
        }

        let mut previous = std::mem::take(&mut self.days);
        self.days = dates
            .into_iter()
            .enumerate()
            .map(|(i, date)| {
                let day_index = i as u32 + 1;
                let places = previous
                    .iter_mut()
                    .find(|day| day.day_index == day_index)
                    .map(|day| std::mem::take(&mut day.places))
                    .unwrap_or_default();
                Day {
                    day_index,
                    date,
                    places,
                }
            })
            .collect();
        Ok(count)
    }
}

impl Day {
    /// Storage position of a place within this day.
    pub fn position_of(&self, place_id: &str) -> Option<usize> {
        self.places
            .iter()
            .position(|item| item.place_id == place_id)
    }

    /// The day's items in display order: timed entries ascending, untimed
    /// entries after all timed ones, ties keeping their storage order.
    ///
    /// This is a derived view; storage order is never mutated by rendering.
    pub fn display_order(&self) -> Vec<&ItineraryItem> {
        let mut ordered: Vec<&ItineraryItem> = self.places.iter().collect();
        ordered.sort_by(|a, b| match (a.has_time(), b.has_time()) {
            (true, true) => a.time.cmp(&b.time),
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            (false, false) => std::cmp::Ordering::Equal,
        });
        ordered
    }
}

/// The two shapes a persisted course can take, resolved once at load time.
///
/// Early versions persisted a flat list of `{id, time}` entries; the current
/// shape is the structured [`Course`]. The legacy branch is handled here and
/// nowhere else.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StoredCourse {
    /// Current structured shape
    Structured(Course),
    /// Legacy flat item list
    Legacy(Vec<LegacyEntry>),
}

/// One entry of the legacy flat list. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub time: String,
}

impl StoredCourse {
    /// Resolves either stored shape into the canonical [`Course`].
    ///
    /// Legacy entries are wrapped into a single day dated `date`, dropping
    /// entries with a blank id, preserving order and times.
    pub fn into_course(self, date: Date, language: Language) -> Course {
        match self {
            StoredCourse::Structured(course) => course,
            StoredCourse::Legacy(entries) => {
                let mut course = Course::single_day(date, language);
                course.days[0].places = entries
                    .into_iter()
                    .filter_map(|entry| {
                        let id = entry.id.trim();
                        if id.is_empty() {
                            return None;
                        }
                        let mut item = ItineraryItem::new(id);
                        item.time = entry.time;
                        Some(item)
                    })
                    .collect();
                course
            }
        }
    }
}
