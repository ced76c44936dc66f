//! Share token operations and route export for the Planner.

use tokio::task;

use super::{join_error, CourseSnapshot, CourseState, Planner};
use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{PlaceCatalog, Session},
    params::OpenShared,
    route::{self, Route},
    share,
};

impl Planner {
    /// Encodes the active course into a URL-safe share token tagged with the
    /// active language. Works in shared mode too, re-sharing the snapshot
    /// being viewed.
    pub async fn create_share_token(&self) -> Result<String> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let state = CourseState::load(&db)?;
            share::encode(&state.course, state.course.meta.language)
        })
        .await
        .map_err(join_error)?
    }

    /// Opens a shared course from a token or a full share URL.
    ///
    /// On success the decoded snapshot is stored beside the local course and
    /// the session flips into read-only shared mode with day 1 selected; the
    /// locally persisted course is left untouched. A token that fails to
    /// decode returns [`PlannerError::ShareToken`] and changes nothing, so
    /// the caller can fall back to the local course.
    ///
    /// [`PlannerError::ShareToken`]: crate::PlannerError::ShareToken
    pub async fn open_shared(&self, params: &OpenShared) -> Result<CourseSnapshot> {
        let db_path = self.db_path.clone();
        let input = params.token.clone();

        task::spawn_blocking(move || {
            let token = share::token_from_url(&input).unwrap_or_else(|| input.trim().to_string());
            let decoded = share::decode(&token)?;

            let mut db = Database::new(&db_path)?;
            let session = Session {
                selected_day: 1,
                shared: true,
            };
            db.save_shared_course(&decoded.course)?;
            db.save_session(&session)?;

            Ok(CourseSnapshot {
                course: decoded.course,
                session,
            })
        })
        .await
        .map_err(join_error)?
    }

    /// "Edit a copy": adopts the active shared snapshot as the ordinary
    /// local course and leaves shared mode.
    pub async fn edit_copy(&self) -> Result<CourseSnapshot> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let mut state = CourseState::load(&db)?;
            if !state.session.shared {
                return Err(PlannerError::invalid_input(
                    "share",
                    "No shared course is active",
                ));
            }

            state.session.shared = false;
            state.session.clamp_selected_day(state.course.day_count());
            state.save(&mut db)?;
            db.clear_shared_course()?;

            Ok(state.into_snapshot())
        })
        .await
        .map_err(join_error)?
    }

    /// Flattens the active course into a route for the external mapping
    /// service: day order, then each day's display order.
    ///
    /// Fails with [`PlannerError::NeedMoreLocations`] when fewer than two
    /// places are scheduled; nothing is mutated either way.
    ///
    /// [`PlannerError::NeedMoreLocations`]: crate::PlannerError::NeedMoreLocations
    pub async fn build_route(&self, catalog: &PlaceCatalog) -> Result<Route> {
        let db_path = self.db_path.clone();
        let catalog = catalog.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let state = CourseState::load(&db)?;
            route::build_route(&state.course, &catalog)
        })
        .await
        .map_err(join_error)?
    }
}
