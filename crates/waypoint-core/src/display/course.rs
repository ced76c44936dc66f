//! Course overview rendering.

use std::fmt;

use super::datetime::DayDate;
use crate::models::PlaceCatalog;
use crate::planner::CourseSnapshot;

/// Wrapper rendering a full course snapshot as markdown.
///
/// Days appear in day order; each day's entries follow the derived display
/// order (timed ascending, untimed last) without touching storage order.
pub struct CourseOverview<'a> {
    snapshot: &'a CourseSnapshot,
    catalog: &'a PlaceCatalog,
}

impl<'a> CourseOverview<'a> {
    /// Joins a snapshot with the catalog used to resolve its place ids.
    pub fn new(snapshot: &'a CourseSnapshot, catalog: &'a PlaceCatalog) -> Self {
        Self { snapshot, catalog }
    }
}

impl fmt::Display for CourseOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let course = &self.snapshot.course;

        writeln!(f, "# My Course ({})", course.total_places())?;
        writeln!(f)?;
        if self.snapshot.read_only() {
            writeln!(f, "**Shared course (read-only)**. Use `share edit` to edit a copy.")?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "- Dates: {} to {}",
            DayDate(&course.start_date),
            DayDate(&course.end_date)
        )?;
        writeln!(f, "- Language: {}", course.meta.language)?;
        writeln!(f, "- Selected day: {}", self.snapshot.session.selected_day)?;

        for day in &course.days {
            writeln!(f)?;
            writeln!(
                f,
                "## Day {} • {} ({})",
                day.day_index,
                DayDate(&day.date),
                day.places.len()
            )?;
            writeln!(f)?;

            if day.places.is_empty() {
                writeln!(f, "No places on this day yet.")?;
                continue;
            }

            for item in day.display_order() {
                write!(f, "{}", self.catalog.resolve(item))?;
            }
        }

        Ok(())
    }
}
