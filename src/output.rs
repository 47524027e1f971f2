use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::domain::{LeaderboardEntry, PlayerOverview};
use crate::rank::{Direction, RankNotice, Tier, TransitionEvent};
use crate::services::GameOutcome;

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

pub fn print_game_outcome(outcome: &GameOutcome) {
    println!("{}", outcome.summary().green());
    if let Some(event) = outcome.transition() {
        println!("{}", transition_line(event));
    }
}

pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("{}", "Leaderboard".bold());
    if entries.is_empty() {
        println!("{}", "No players found.".dimmed());
        return;
    }
    for entry in entries {
        println!(
            "{:>3}. {} {} {} RP",
            entry.position,
            entry.username.bold(),
            entry.tier.to_string().cyan(),
            entry.rank_points
        );
    }
}

pub fn print_overview(overview: &PlayerOverview) {
    println!("{}", overview.username.bold());
    println!("Role: {}", overview.role.as_str());
    println!(
        "Membership: {}",
        overview.membership.map(|m| m.as_str()).unwrap_or("None")
    );
    println!("Rank: {} ({} RP)", overview.tier.to_string().cyan(), overview.rank_points);
    println!("Games played: {}", overview.games_played);

    if overview.recent_games.is_empty() {
        println!("{}", "No games found.".italic());
        return;
    }

    println!("{}", "Recent games".bold());
    for game in &overview.recent_games {
        println!(
            "  {}  PTS {}  REB {}  AST {}  BLK {}  STL {}  ({:+} RP)",
            game.played_at.format("%Y-%m-%d"),
            game.stats.points,
            game.stats.rebounds,
            game.stats.assists,
            game.stats.blocks,
            game.stats.steals,
            game.delta
        );
    }
}

pub fn print_history(username: &str, events: &[TransitionEvent]) {
    println!("{}", format!("{}'s Rank History", username).bold());
    if events.is_empty() {
        println!("{}", "No rank changes yet.".dimmed());
        return;
    }
    for event in events {
        println!("  {}  {}", event.date.format("%Y-%m-%d"), transition_line(event));
    }
}

pub fn print_notice(notice: Option<RankNotice>) {
    match notice {
        Some(notice @ RankNotice::Promoted(_)) => println!("{}", notice.message().green()),
        Some(notice @ RankNotice::Demoted(_)) => println!("{}", notice.message().red()),
        Some(notice @ RankNotice::Current(_)) => println!("{}", notice.message()),
        None => println!("{}", "No rank update.".dimmed()),
    }
}

pub fn print_tier(points: i64, tier: Tier) {
    println!("{} RP -> {}", points, tier.to_string().cyan());
}

fn transition_line(event: &TransitionEvent) -> String {
    match event.direction {
        Direction::Promoted => event.message().green().to_string(),
        Direction::Demoted => event.message().red().to_string(),
    }
}
