pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod rank;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::{HistoryWindow, StatsArgs};
use crate::config::AppConfig;
use crate::domain::{Membership, Role};
use crate::rank::{RankEngine, RankPoints};
use crate::services::RosterService;

pub use crate::cli::Command;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_service() -> Result<RosterService> {
    let config = AppConfig::new();
    RosterService::new(config)
}

pub fn handle_add_player(username: &str, role: Role, membership: Option<Membership>) -> Result<()> {
    let service = open_service()?;
    let player = service.add_player(username, role, membership)?;
    println!("Added {} {}", player.role.as_str(), player.username);
    Ok(())
}

pub fn handle_record_game(username: &str, stats: &StatsArgs) -> Result<()> {
    let service = open_service()?;
    let outcome = service.record_game(username, stats.into())?;
    output::print_game_outcome(&outcome);
    Ok(())
}

pub fn handle_leaderboard(json: bool) -> Result<()> {
    let entries = open_service()?.leaderboard()?;
    if json {
        return output::print_json(&entries);
    }
    output::print_leaderboard(&entries);
    Ok(())
}

pub fn handle_overview(username: &str, json: bool) -> Result<()> {
    let overview = open_service()?.overview(username)?;
    if json {
        return output::print_json(&overview);
    }
    output::print_overview(&overview);
    Ok(())
}

pub fn handle_history(username: &str, window: HistoryWindow, json: bool) -> Result<()> {
    let service = open_service()?;
    let filter = window.to_filter(&service.config().history);
    let events = service.history(username, filter)?;
    if json {
        return output::print_json(&events);
    }
    output::print_history(username, &events);
    Ok(())
}

pub fn handle_dashboard(username: &str) -> Result<()> {
    let notice = open_service()?.dashboard(username)?;
    output::print_notice(notice);
    Ok(())
}

pub fn handle_tier(points: RankPoints) -> Result<()> {
    let tier = RankEngine::standard().tier_for(points);
    output::print_tier(points, tier);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
