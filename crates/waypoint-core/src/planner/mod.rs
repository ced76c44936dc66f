//! High-level planner API for managing a trip course.
//!
//! This module provides the main [`Planner`] interface of the crate. The
//! planner is the single owner of the course state machine: every operation
//! loads the persisted state, applies one mutation, and persists the result
//! before returning, so callers never observe a half-applied change.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │   CourseState   │    │    Database     │
//! │ (course_ops,    │───▶│ (load, guard,   │───▶│   (via db/)     │
//! │  place_ops,     │    │  mutate, save)  │    │                 │
//! │  share_ops)     │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     Public API          Business logic         Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances
//! - [`course_ops`]: Course-level operations (show, date range, selection,
//!   language)
//! - [`place_ops`]: Itinerary mutations (toggle, remove, time, reorder, move)
//! - [`share_ops`]: Share token operations and route export
//!
//! ## Read-only shared mode
//!
//! Opening a share token stores the decoded snapshot beside the local course
//! and flips the session into shared mode: every mutation refuses with
//! [`crate::PlannerError::SharedReadOnly`] and the local course stays intact.
//! "Edit a copy" adopts the snapshot as the local course and leaves shared
//! mode.

use std::path::PathBuf;

use crate::{
    db::Database,
    error::{PlannerError, Result},
    models::{today, Course, Language, Session},
};

pub mod builder;
pub mod course_ops;
pub mod place_ops;
pub mod share_ops;


// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for managing the trip course.
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

/// The active course plus its session record, as loaded for one operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSnapshot {
    /// The active course (the shared snapshot while shared mode is on)
    pub course: Course,
    /// Selected day and shared flag
    pub session: Session,
}

impl CourseSnapshot {
    /// Whether mutations are currently refused.
    pub fn read_only(&self) -> bool {
        self.session.shared
    }
}

/// In-memory working state for one operation: the active course, the session
/// record, and the save path back to the store.
pub(crate) struct CourseState {
    pub course: Course,
    pub session: Session,
}

impl CourseState {
    /// Loads the active state from the store.
    ///
    /// While shared mode is on, the active course is the stored snapshot; a
    /// missing snapshot drops back to the local course and clears the flag.
    /// An absent or unparsable local course lazily becomes the minimal
    /// single-day default dated today, which is what makes repeated loads
    /// with no intervening mutation idempotent.
    pub fn load(db: &Database) -> Result<Self> {
        let mut session = db.load_session()?;

        if session.shared {
            if let Some(course) = db.load_shared_course()? {
                return Ok(Self { course, session });
            }
            session.shared = false;
        }

        let course = match db.load_course(Language::default())? {
            Some(course) => course,
            None => Course::single_day(today(), Language::default()),
        };
        Ok(Self { course, session })
    }

    /// Persists the course and session. Silently refuses the course write
    /// while a shared snapshot is active.
    pub fn save(&self, db: &mut Database) -> Result<()> {
        if !self.session.shared {
            db.save_course(&self.course)?;
        }
        db.save_session(&self.session)
    }

    /// Rejects mutations while a shared snapshot is active.
    pub fn guard_editable(&self) -> Result<()> {
        if self.session.shared {
            return Err(PlannerError::SharedReadOnly);
        }
        Ok(())
    }

    /// Hands the state out as a snapshot for rendering.
    pub fn into_snapshot(self) -> CourseSnapshot {
        CourseSnapshot {
            course: self.course,
            session: self.session,
        }
    }
}

/// Maps a tokio join error onto the planner error type.
pub(crate) fn join_error(e: tokio::task::JoinError) -> PlannerError {
    PlannerError::Configuration {
        message: format!("Task join error: {e}"),
    }
}
