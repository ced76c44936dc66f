//! Course-level operations for the Planner.

use tokio::task;

use super::{join_error, CourseSnapshot, CourseState, Planner};
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{Course, Language},
    params::{SelectDay, SetLanguage, SetTripDates},
};

impl Planner {
    /// Loads the active course and session for rendering, lazily creating
    /// the single-day default when nothing valid is persisted.
    pub async fn show_course(&self) -> Result<CourseSnapshot> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            Ok(CourseState::load(&db)?.into_snapshot())
        })
        .await
        .map_err(join_error)?
    }

    /// Reconciles the course to a new date range.
    ///
    /// A side that is not a valid ISO date silently keeps its previous
    /// value; a reversed range is swapped. Shortening onto non-empty days is
    /// rejected as a whole with [`PlannerError::CannotShortenDates`] and
    /// nothing is persisted. On success the selected day is clamped into the
    /// new range and the updated course is returned.
    ///
    /// [`PlannerError::CannotShortenDates`]: crate::PlannerError::CannotShortenDates
    pub async fn set_trip_dates(&self, params: &SetTripDates) -> Result<CourseSnapshot> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            let (start, end) = params.resolve(state.course.start_date, state.course.end_date);
            let day_count = state.course.set_trip_dates(start, end)?;
            state.session.clamp_selected_day(day_count);

            state.save(&mut db)?;
            Ok(state.into_snapshot())
        })
        .await
        .map_err(join_error)?
    }

    /// Selects the day newly toggled places are appended to.
    pub async fn select_day(&self, params: &SelectDay) -> Result<u32> {
        let db_path = self.db_path.clone();
        let day = params.day;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            if day < 1 || day > state.course.day_count() {
                return Err(PlannerError::invalid_input(
                    "day",
                    format!(
                        "Day {day} is outside the trip (1..={})",
                        state.course.day_count()
                    ),
                ));
            }
            state.session.selected_day = day;

            state.save(&mut db)?;
            Ok(day)
        })
        .await
        .map_err(join_error)?
    }

    /// Switches the active language tag, re-tagging the course metadata.
    pub async fn set_language(&self, params: &SetLanguage) -> Result<Language> {
        let db_path = self.db_path.clone();
        let language = params.language;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            state.guard_editable()?;

            state.course.meta.language = language;

            state.save(&mut db)?;
            Ok(language)
        })
        .await
        .map_err(join_error)?
    }

    /// Returns the active course without the session record.
    pub async fn current_course(&self) -> Result<Course> {
        Ok(self.show_course().await?.course)
    }
}
