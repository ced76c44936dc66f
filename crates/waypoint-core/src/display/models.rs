//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data structures stay free of
//! presentation concerns.

use std::fmt;

use crate::models::{Language, ResolvedPlace};
use crate::route::Route;

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ResolvedPlace {
    /// Formats the place as one itinerary entry: title with optional time,
    /// then whichever of description and address are present.
    fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.time.is_empty() {
            writeln!(f, "### {}", self.title)?;
        } else {
            writeln!(f, "### {} ({})", self.title, self.time)?;
        }

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
        }
        if !self.address.is_empty() {
            writeln!(f, "{}", self.address)?;
        }
        if !self.media_url.is_empty() {
            writeln!(f, "- Media: {}", self.media_url)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ResolvedPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_entry(f)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Route")?;
        writeln!(f)?;
        writeln!(f, "- Origin: {}", self.origin)?;
        for waypoint in &self.waypoints {
            writeln!(f, "- Via: {waypoint}")?;
        }
        writeln!(f, "- Destination: {}", self.destination)?;
        Ok(())
    }
}
