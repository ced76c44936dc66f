//! Course and session load/store operations.

use crate::{
    error::Result,
    models::{today, Course, Language, Session, StoredCourse},
};

impl super::Database {
    /// Loads the canonical course, migrating the legacy flat-list shape into
    /// a single day dated today.
    ///
    /// An absent or unparsable value yields `None`; the caller supplies the
    /// lazy default. The legacy shape is resolved here and never observed
    /// anywhere else.
    pub fn load_course(&self, language: Language) -> Result<Option<Course>> {
        let Some(raw) = self.get_value(super::COURSE_KEY)? else {
            return Ok(None);
        };
        let Ok(stored) = serde_json::from_str::<StoredCourse>(&raw) else {
            return Ok(None);
        };
        let course = stored.into_course(today(), language);
        // A course with no day buckets is not a valid shape.
        if course.days.is_empty() {
            return Ok(None);
        }
        Ok(Some(course))
    }

    /// Persists the canonical course.
    pub fn save_course(&mut self, course: &Course) -> Result<()> {
        let raw = serde_json::to_string(course)?;
        self.put_value(super::COURSE_KEY, &raw)
    }

    /// Loads the session record, falling back to the default when absent or
    /// unparsable.
    pub fn load_session(&self) -> Result<Session> {
        let Some(raw) = self.get_value(super::SESSION_KEY)? else {
            return Ok(Session::default());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// Persists the session record.
    pub fn save_session(&mut self, session: &Session) -> Result<()> {
        let raw = serde_json::to_string(session)?;
        self.put_value(super::SESSION_KEY, &raw)
    }

    /// Loads the active shared snapshot, if one is stored.
    pub fn load_shared_course(&self) -> Result<Option<Course>> {
        let Some(raw) = self.get_value(super::SHARED_COURSE_KEY)? else {
            return Ok(None);
        };
        Ok(serde_json::from_str(&raw).ok())
    }

    /// Stores a shared snapshot beside the canonical course.
    pub fn save_shared_course(&mut self, course: &Course) -> Result<()> {
        let raw = serde_json::to_string(course)?;
        self.put_value(super::SHARED_COURSE_KEY, &raw)
    }

    /// Drops the shared snapshot, if any.
    pub fn clear_shared_course(&mut self) -> Result<()> {
        self.delete_value(super::SHARED_COURSE_KEY)
    }
}
