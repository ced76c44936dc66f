use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CourseCommands, PlaceCommands, ShareCommands};

/// Main command-line interface for the Waypoint trip planner
///
/// Waypoint manages a multi-day trip itinerary: a date range expanded into
/// day buckets, places toggled onto days, visit times, reordering within and
/// across days, URL-shareable read-only snapshots, and route hand-off to an
/// external mapping service.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to the place catalog JSON file. Defaults to
    /// $XDG_DATA_HOME/waypoint/places.json; missing means an empty catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// The CLI is organized into three command categories plus route export:
/// - `course`: the course itself (show, date range, day selection, language)
/// - `place`: itinerary mutations (toggle, remove, time, reorder, move)
/// - `share`: share links and read-only snapshots
/// - `route`: hand the course off to the external mapping service
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the course
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Manage places within days
    #[command(alias = "p")]
    Place {
        #[command(subcommand)]
        command: PlaceCommands,
    },
    /// Share the course or open a shared one
    #[command(alias = "s")]
    Share {
        #[command(subcommand)]
        command: ShareCommands,
    },
    /// Build a route through every scheduled place
    Route,
}
