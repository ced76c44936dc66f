//! Waypoint CLI Application
//!
//! Command-line interface for the Waypoint trip course planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{load_catalog, Cli};
use log::info;
use renderer::TerminalRenderer;
use waypoint_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let catalog = load_catalog(catalog_file)?;

    info!("Waypoint started ({} catalog places)", catalog.len());

    let cli = Cli::new(planner, renderer, catalog);

    match command {
        Some(Course { command }) => cli.handle_course_command(command).await,
        Some(Place { command }) => cli.handle_place_command(command).await,
        Some(Share { command }) => cli.handle_share_command(command).await,
        Some(Route) => cli.handle_route_command().await,
        None => cli.show_course().await,
    }
}
