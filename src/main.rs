use anyhow::Result;

use roster_ranking::Command;
use roster_ranking::{
    handle_add_player, handle_completions, handle_dashboard, handle_history, handle_leaderboard,
    handle_overview, handle_record_game, handle_tier, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::AddPlayer {
            username,
            role,
            membership,
        } => handle_add_player(username, *role, *membership),
        Command::RecordGame { username, stats } => handle_record_game(username, stats),
        Command::Leaderboard { json } => handle_leaderboard(*json),
        Command::Overview { username, json } => handle_overview(username, *json),
        Command::History {
            username,
            filter,
            json,
        } => handle_history(username, *filter, *json),
        Command::Dashboard { username } => handle_dashboard(username),
        Command::Tier { points } => handle_tier(*points),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
