//! Core library for the Waypoint trip course planner.
//!
//! This crate provides the state machine behind a multi-day trip itinerary:
//! day buckets derived from a calendar date range, per-item time annotation,
//! reordering within and across days, a URL-shareable read-only snapshot
//! protocol, and route export towards an external mapping service.
//!
//! # Architecture
//!
//! - **Domain Models** ([`models`]): the [`Course`] with its day buckets and
//!   the pure itinerary mutations, plus the place catalog used to resolve
//!   items at display and routing time
//! - **Planner Facade** ([`planner`]): loads, guards, mutates and persists the
//!   course; every public operation is atomic from the caller's point of view
//! - **Share Codec** ([`share`]): pure token encode/decode, including the
//!   legacy single-day payload upgrade
//! - **Route Export** ([`route`]): flattens the course into an ordered point
//!   sequence and the external directions URL
//! - **Display Wrappers** ([`display`]): markdown formatting for the terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use waypoint_core::{params::TogglePlace, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("trip.db"))
//!     .build()
//!     .await?;
//!
//! // Lazily creates a single-day course dated today.
//! let snapshot = planner.show_course().await?;
//! println!("{} day(s) planned", snapshot.course.day_count());
//!
//! // Toggle a place onto the selected day.
//! planner
//!     .toggle_place(&TogglePlace {
//!         place_id: "bukchon".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod route;
pub mod share;

// Re-export commonly used types
pub use display::{CourseOverview, OperationStatus, ShareLink};
pub use error::{PlannerError, Result};
pub use models::{
    Course, Day, ItineraryItem, Language, Place, PlaceCatalog, ResolvedPlace, Session,
    ToggleOutcome,
};
pub use planner::{CourseSnapshot, Planner, PlannerBuilder};
pub use route::Route;
pub use share::DecodedShare;
