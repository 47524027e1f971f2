use serde::Serialize;

use super::benchmarks::BenchmarkTable;
use super::delta::contribution;
use super::types::{GameStats, Stat, Tier};

pub const GAME_CEILING: i64 = 50;
pub const GAME_FLOOR: i64 = -20;

/// Per-statistic contributions of one game and the clamped total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameScore {
    pub contributions: Vec<(Stat, i64)>,
    pub raw_total: i64,
    pub delta: i64,
}

/// Scores a game against the benchmarks of the tier the player held before it.
pub fn score_game(stats: &GameStats, tier: Tier, benchmarks: &BenchmarkTable) -> i64 {
    breakdown(stats, tier, benchmarks).delta
}

pub fn breakdown(stats: &GameStats, tier: Tier, benchmarks: &BenchmarkTable) -> GameScore {
    let expected = benchmarks.benchmarks_for(tier);

    let contributions: Vec<(Stat, i64)> = Stat::ALL
        .iter()
        .map(|&stat| (stat, contribution(stat, stats.get(stat), expected.get(stat))))
        .collect();

    let raw_total = contributions.iter().map(|(_, points)| points).sum();

    GameScore {
        contributions,
        raw_total,
        delta: clamp_total(raw_total),
    }
}

fn clamp_total(raw_total: i64) -> i64 {
    raw_total.clamp(GAME_FLOOR, GAME_CEILING)
}
