//! Command-line interface definitions and command handlers.
//!
//! This module implements the parameter wrapper pattern: each subcommand has
//! a clap argument structure here that converts into the framework-free
//! parameter types of `waypoint-core`, so CLI concerns (flags, help text,
//! value enums) never leak into the core contract.
//!
//! The [`Cli`] executor maps core results onto user-facing output. Conditions
//! that are part of the planner's contract (the shortening guard, read-only
//! shared mode, the two-places route minimum, an unreadable share token)
//! render as messages rather than process failures; everything else
//! propagates as an error.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use waypoint_core::params::{
    MovePlace, OpenShared, RemovePlace, ReorderPlaces, SelectDay, SetLanguage, SetTime,
    SetTripDates, TogglePlace,
};
use waypoint_core::{
    share, CourseOverview, Language, OperationStatus, PlaceCatalog, Planner, PlannerError,
    ShareLink, ToggleOutcome,
};

use crate::renderer::TerminalRenderer;

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Show the course with every day and place
    #[command(alias = "s")]
    Show,
    /// Set the trip date range
    #[command(alias = "d")]
    Dates(SetDatesArgs),
    /// Select the day new places are added to
    Select(SelectDayArgs),
    /// Switch the course language tag
    Lang(SetLanguageArgs),
}

#[derive(Subcommand)]
pub enum PlaceCommands {
    /// Toggle a place in or out of the course
    #[command(alias = "t")]
    Toggle(TogglePlaceArgs),
    /// Remove a place from one day
    #[command(aliases = ["r", "rm"])]
    Remove(RemovePlaceArgs),
    /// Set or clear a place's visit time
    Time(SetTimeArgs),
    /// Reorder a place onto another's position within a day
    Reorder(ReorderPlacesArgs),
    /// Move a place to the end of another day
    #[command(alias = "mv")]
    Move(MovePlaceArgs),
}

#[derive(Subcommand)]
pub enum ShareCommands {
    /// Print the share token (and a link when a base URL is given)
    #[command(alias = "l")]
    Link(ShareLinkArgs),
    /// Open a shared course read-only from a token or URL
    #[command(alias = "o")]
    Open(OpenShareArgs),
    /// Edit a copy: adopt the shared course as your own
    #[command(alias = "e")]
    Edit,
}

/// Set the trip date range
///
/// A side that is not a valid YYYY-MM-DD date keeps its current value; a
/// reversed range is swapped. Shortening is refused while any day that would
/// be dropped still holds places.
#[derive(Args)]
pub struct SetDatesArgs {
    /// Start date (YYYY-MM-DD)
    pub start: String,
    /// End date (YYYY-MM-DD)
    pub end: String,
}

impl From<SetDatesArgs> for SetTripDates {
    fn from(val: SetDatesArgs) -> Self {
        SetTripDates {
            start: val.start,
            end: val.end,
        }
    }
}

/// Select the day new places are toggled onto
#[derive(Args)]
pub struct SelectDayArgs {
    /// 1-based day index within the trip
    pub day: u32,
}

impl From<SelectDayArgs> for SelectDay {
    fn from(val: SelectDayArgs) -> Self {
        SelectDay { day: val.day }
    }
}

/// Switch the course language tag
#[derive(Args)]
pub struct SetLanguageArgs {
    /// Language tag to tag the course with
    #[arg(value_enum)]
    pub language: LanguageArg,
}

/// CLI value enum mirroring the core language tags.
#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Ko,
    En,
    Jp,
    Cn,
    Th,
    Ar,
    Ru,
    Fr,
}

impl From<LanguageArg> for Language {
    fn from(val: LanguageArg) -> Self {
        match val {
            LanguageArg::Ko => Language::Ko,
            LanguageArg::En => Language::En,
            LanguageArg::Jp => Language::Jp,
            LanguageArg::Cn => Language::Cn,
            LanguageArg::Th => Language::Th,
            LanguageArg::Ar => Language::Ar,
            LanguageArg::Ru => Language::Ru,
            LanguageArg::Fr => Language::Fr,
        }
    }
}

/// Toggle a place in or out of the course
///
/// A place already scheduled anywhere is removed; otherwise it is appended
/// to the selected day.
#[derive(Args)]
pub struct TogglePlaceArgs {
    /// Stable id of the place (catalog key)
    pub place_id: String,
}

impl From<TogglePlaceArgs> for TogglePlace {
    fn from(val: TogglePlaceArgs) -> Self {
        TogglePlace {
            place_id: val.place_id,
        }
    }
}

/// Remove a place from one day
#[derive(Args)]
pub struct RemovePlaceArgs {
    /// Stable id of the place
    pub place_id: String,
    /// 1-based day index to remove from
    #[arg(short, long, default_value_t = 1)]
    pub day: u32,
}

impl From<RemovePlaceArgs> for RemovePlace {
    fn from(val: RemovePlaceArgs) -> Self {
        RemovePlace {
            day: val.day,
            place_id: val.place_id,
        }
    }
}

/// Set or clear a place's visit time
#[derive(Args)]
pub struct SetTimeArgs {
    /// Stable id of the place
    pub place_id: String,
    /// HH:MM in 24-hour time; pass an empty string to clear
    pub time: String,
    /// 1-based day index holding the place
    #[arg(short, long, default_value_t = 1)]
    pub day: u32,
}

impl From<SetTimeArgs> for SetTime {
    fn from(val: SetTimeArgs) -> Self {
        SetTime {
            day: val.day,
            place_id: val.place_id,
            time: val.time,
        }
    }
}

/// Reorder a place onto another's position within a day
///
/// The drag-and-drop of the web surface, reframed as an explicit call: the
/// moved place is spliced out and reinserted at the target's position.
#[derive(Args)]
pub struct ReorderPlacesArgs {
    /// Id of the place being moved
    pub moved_id: String,
    /// Id of the place whose position it takes
    pub target_id: String,
    /// 1-based day index holding both places
    #[arg(short, long, default_value_t = 1)]
    pub day: u32,
}

impl From<ReorderPlacesArgs> for ReorderPlaces {
    fn from(val: ReorderPlacesArgs) -> Self {
        ReorderPlaces {
            day: val.day,
            moved_id: val.moved_id,
            target_id: val.target_id,
        }
    }
}

/// Move a place to the end of another day
#[derive(Args)]
pub struct MovePlaceArgs {
    /// Stable id of the place
    pub place_id: String,
    /// 1-based index of the day currently holding it
    #[arg(long)]
    pub from: u32,
    /// 1-based index of the day to append it to
    #[arg(long)]
    pub to: u32,
}

impl From<MovePlaceArgs> for MovePlace {
    fn from(val: MovePlaceArgs) -> Self {
        MovePlace {
            from_day: val.from,
            to_day: val.to,
            place_id: val.place_id,
        }
    }
}

/// Print the share token (and a link when a base URL is given)
#[derive(Args)]
pub struct ShareLinkArgs {
    /// Base page URL to embed the token into as a query parameter
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Open a shared course read-only from a token or URL
#[derive(Args)]
pub struct OpenShareArgs {
    /// Share token, or a full share URL carrying one
    pub token: String,
}

impl From<OpenShareArgs> for OpenShared {
    fn from(val: OpenShareArgs) -> Self {
        OpenShared { token: val.token }
    }
}

/// Loads the place catalog: an explicit path must parse, the default XDG
/// location is optional, anything else is an empty catalog.
pub fn load_catalog(path: Option<PathBuf>) -> Result<PlaceCatalog> {
    use anyhow::Context;

    if let Some(path) = path {
        return PlaceCatalog::from_json_file(&path)
            .with_context(|| format!("Failed to load place catalog from {}", path.display()));
    }
    match xdg::BaseDirectories::with_prefix("waypoint").find_data_file("places.json") {
        Some(path) => PlaceCatalog::from_json_file(&path)
            .with_context(|| format!("Failed to load place catalog from {}", path.display())),
        None => Ok(PlaceCatalog::empty()),
    }
}

/// Command executor binding the planner, the renderer and the catalog.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    catalog: PlaceCatalog,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, catalog: PlaceCatalog) -> Self {
        Self {
            planner,
            renderer,
            catalog,
        }
    }

    /// Renders the full course overview.
    pub async fn show_course(&self) -> Result<()> {
        let snapshot = self.planner.show_course().await?;
        self.renderer
            .render(&format!("{}", CourseOverview::new(&snapshot, &self.catalog)))
    }

    pub async fn handle_course_command(&self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::Show => self.show_course().await,
            CourseCommands::Dates(args) => {
                match self.planner.set_trip_dates(&args.into()).await {
                    Ok(snapshot) => {
                        self.render_status(OperationStatus::success(format!(
                            "Trip set to {} day(s), {} to {}",
                            snapshot.course.day_count(),
                            snapshot.course.start_date,
                            snapshot.course.end_date
                        )))?;
                        self.show_course().await
                    }
                    Err(e) => self.render_contract_error(e),
                }
            }
            CourseCommands::Select(args) => match self.planner.select_day(&args.into()).await {
                Ok(day) => self.render_status(OperationStatus::success(format!(
                    "Day {day} selected"
                ))),
                Err(e) => self.render_contract_error(e),
            },
            CourseCommands::Lang(args) => {
                let params = SetLanguage {
                    language: args.language.into(),
                };
                match self.planner.set_language(&params).await {
                    Ok(language) => self.render_status(OperationStatus::success(format!(
                        "Language set to {language}"
                    ))),
                    Err(e) => self.render_contract_error(e),
                }
            }
        }
    }

    pub async fn handle_place_command(&self, command: PlaceCommands) -> Result<()> {
        match command {
            PlaceCommands::Toggle(args) => match self.planner.toggle_place(&args.into()).await {
                Ok(ToggleOutcome::Added { day_index }) => self.render_status(
                    OperationStatus::success(format!("Added to Day {day_index}")),
                ),
                Ok(ToggleOutcome::Removed) => {
                    self.render_status(OperationStatus::success("Removed from the course"))
                }
                Err(e) => self.render_contract_error(e),
            },
            PlaceCommands::Remove(args) => {
                let params: RemovePlace = args.into();
                match self.planner.remove_place(&params).await {
                    Ok(true) => self.render_status(OperationStatus::success(format!(
                        "Removed from Day {}",
                        params.day
                    ))),
                    Ok(false) => self.render_status(OperationStatus::notice(format!(
                        "Nothing to remove on Day {}",
                        params.day
                    ))),
                    Err(e) => self.render_contract_error(e),
                }
            }
            PlaceCommands::Time(args) => {
                let params: SetTime = args.into();
                match self.planner.set_time(&params).await {
                    Ok(true) if params.time.trim().is_empty() => {
                        self.render_status(OperationStatus::success("Time cleared"))
                    }
                    Ok(true) => self.render_status(OperationStatus::success(format!(
                        "Time set to {}",
                        params.time.trim()
                    ))),
                    Ok(false) => self.render_status(OperationStatus::notice(format!(
                        "No such place on Day {}",
                        params.day
                    ))),
                    Err(e) => self.render_contract_error(e),
                }
            }
            PlaceCommands::Reorder(args) => {
                match self.planner.reorder_places(&args.into()).await {
                    Ok(true) => {
                        self.render_status(OperationStatus::success("Order updated"))?;
                        self.show_course().await
                    }
                    Ok(false) => self.render_status(OperationStatus::notice(
                        "Both places must be on that day",
                    )),
                    Err(e) => self.render_contract_error(e),
                }
            }
            PlaceCommands::Move(args) => {
                let params: MovePlace = args.into();
                match self.planner.move_place(&params).await {
                    Ok(true) => self.render_status(OperationStatus::success(format!(
                        "Moved to Day {}",
                        params.to_day
                    ))),
                    Ok(false) => self.render_status(OperationStatus::notice(format!(
                        "No such place on Day {}",
                        params.from_day
                    ))),
                    Err(e) => self.render_contract_error(e),
                }
            }
        }
    }

    pub async fn handle_share_command(&self, command: ShareCommands) -> Result<()> {
        match command {
            ShareCommands::Link(args) => {
                let token = self.planner.create_share_token().await?;
                let url = match &args.base_url {
                    Some(base) => Some(share::share_url(base, &token)?),
                    None => None,
                };
                self.renderer.render(&format!("{}", ShareLink { token, url }))
            }
            ShareCommands::Open(args) => match self.planner.open_shared(&args.into()).await {
                Ok(snapshot) => {
                    self.render_status(OperationStatus::success(
                        "Opened shared course (read-only)",
                    ))?;
                    self.renderer
                        .render(&format!("{}", CourseOverview::new(&snapshot, &self.catalog)))
                }
                // A bad token is not an error: fall back to the local course.
                Err(PlannerError::ShareToken { .. }) => {
                    self.render_status(OperationStatus::notice(
                        "No shared course in that link; showing your local course",
                    ))?;
                    self.show_course().await
                }
                Err(e) => self.render_contract_error(e),
            },
            ShareCommands::Edit => match self.planner.edit_copy().await {
                Ok(snapshot) => {
                    self.render_status(OperationStatus::success(
                        "This course is now yours to edit",
                    ))?;
                    self.renderer
                        .render(&format!("{}", CourseOverview::new(&snapshot, &self.catalog)))
                }
                Err(e) => self.render_contract_error(e),
            },
        }
    }

    pub async fn handle_route_command(&self) -> Result<()> {
        match self.planner.build_route(&self.catalog).await {
            Ok(route) => {
                let url = route.maps_url()?;
                self.renderer.render(&format!("{route}"))?;
                self.renderer.render(&format!("\nOpen this link:\n\n{url}\n"))
            }
            Err(e) => self.render_contract_error(e),
        }
    }

    fn render_status(&self, status: OperationStatus) -> Result<()> {
        self.renderer.render(&format!("{status}"))
    }

    /// Renders contract-level rejections as messages; anything else is a
    /// real failure and propagates.
    fn render_contract_error(&self, error: PlannerError) -> Result<()> {
        match error {
            PlannerError::SharedReadOnly
            | PlannerError::CannotShortenDates { .. }
            | PlannerError::NeedMoreLocations { .. }
            | PlannerError::ShareToken { .. }
            | PlannerError::InvalidInput { .. } => {
                self.render_status(OperationStatus::failure(error.to_string()))
            }
            other => Err(other.into()),
        }
    }
}
