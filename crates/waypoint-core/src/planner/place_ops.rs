//! Itinerary mutations for the Planner.
//!
//! Every operation here refuses outright while a shared snapshot is active,
//! and persists before returning when it changed anything. Missing ids and
//! days are no-ops reported through the returned flag, never errors.

use tokio::task;

use super::{join_error, CourseState, Planner};
use crate::{
    db::Database,
    error::Result,
    models::ToggleOutcome,
    params::{MovePlace, RemovePlace, ReorderPlaces, SetTime, TogglePlace},
};

impl Planner {
    /// Toggles a place in or out of the course.
    ///
    /// A place already scheduled anywhere is removed from wherever it is;
    /// otherwise it is appended to the selected day with no time and no
    /// note. A place is never scheduled into two days.
    pub async fn toggle_place(&self, params: &TogglePlace) -> Result<ToggleOutcome> {
        let place_id = params.validate()?.to_string();
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            let outcome = state
                .course
                .toggle_place(&place_id, state.session.selected_day);

            state.save(&mut db)?;
            Ok(outcome)
        })
        .await
        .map_err(join_error)?
    }

    /// Removes a place from one day. Returns whether anything was removed.
    pub async fn remove_place(&self, params: &RemovePlace) -> Result<bool> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            let removed = state
                .course
                .remove_place(params.day, params.place_id.trim());
            if removed {
                state.save(&mut db)?;
            }
            Ok(removed)
        })
        .await
        .map_err(join_error)?
    }

    /// Sets or clears the visit time on a scheduled place. Returns whether a
    /// matching item was found.
    pub async fn set_time(&self, params: &SetTime) -> Result<bool> {
        let time = params.validate()?.to_string();
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            let updated = state
                .course
                .set_time(params.day, params.place_id.trim(), &time);
            if updated {
                state.save(&mut db)?;
            }
            Ok(updated)
        })
        .await
        .map_err(join_error)?
    }

    /// Reorders a place onto another's storage position within one day.
    /// Returns whether the splice happened.
    pub async fn reorder_places(&self, params: &ReorderPlaces) -> Result<bool> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            let reordered = state.course.reorder_within_day(
                params.day,
                params.moved_id.trim(),
                params.target_id.trim(),
            );
            if reordered {
                state.save(&mut db)?;
            }
            Ok(reordered)
        })
        .await
        .map_err(join_error)?
    }

    /// Moves a place to the end of another day, carrying its time and note.
    /// Returns whether the move happened.
    pub async fn move_place(&self, params: &MovePlace) -> Result<bool> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            let moved = state.course.move_place(
                params.from_day,
                params.to_day,
                params.place_id.trim(),
            );
            if moved {
                state.save(&mut db)?;
            }
            Ok(moved)
        })
        .await
        .map_err(join_error)?
    }
}
