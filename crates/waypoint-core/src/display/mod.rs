//! Display formatting for courses and operation results.
//!
//! Domain models stay presentation-free; this module provides the wrapper
//! types that format them as markdown for the terminal renderer. Wrappers
//! hold references and join the course with the place catalog at render time,
//! which is where a catalog miss degrades to the raw id placeholder.
//!
//! ## Module Organization
//!
//! - [`course`]: The full course overview (days in display order)
//! - [`results`]: Operation status and share link wrappers
//! - [`datetime`]: Civil date formatting
//! - [`models`]: Display implementations for domain models

pub mod course;
pub mod datetime;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use course::CourseOverview;
pub use datetime::DayDate;
pub use results::{OperationStatus, ShareLink};
