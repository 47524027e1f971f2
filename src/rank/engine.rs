use chrono::NaiveDateTime;
use log::info;
use serde::Serialize;

use super::benchmarks::BenchmarkTable;
use super::scorer::{GameScore, breakdown};
use super::tiers::TierTable;
use super::transitions::TransitionEvent;
use super::types::{Direction, GameStats, PlayerId, RankPoints, Tier};

/// Outcome of applying one game to a player's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankUpdate {
    pub previous_points: RankPoints,
    pub new_points: RankPoints,
    pub previous_tier: Tier,
    pub new_tier: Tier,
    pub transition: Option<TransitionEvent>,
}

/// `RankUpdate` together with the score that produced its delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEvaluation {
    pub score: GameScore,
    pub update: RankUpdate,
}

/// Pure rank state transitions over the tier and benchmark tables.
///
/// Holds no per-player state; callers pass the pre-game total in and persist
/// what comes out. Calls for the same player must be serialized by the caller.
#[derive(Debug, Clone, Default)]
pub struct RankEngine {
    tiers: TierTable,
    benchmarks: BenchmarkTable,
}

impl RankEngine {
    pub fn new(tiers: TierTable, benchmarks: BenchmarkTable) -> Self {
        Self { tiers, benchmarks }
    }

    pub fn standard() -> Self {
        Self::new(TierTable::standard(), BenchmarkTable::standard())
    }

    pub fn tiers(&self) -> &TierTable {
        &self.tiers
    }

    pub fn benchmarks(&self) -> &BenchmarkTable {
        &self.benchmarks
    }

    pub fn tier_for(&self, points: RankPoints) -> Tier {
        self.tiers.tier_for(points)
    }

    pub fn score_game(&self, stats: &GameStats, tier: Tier) -> GameScore {
        breakdown(stats, tier, &self.benchmarks)
    }

    /// Scores the game against the player's pre-game tier and applies it.
    pub fn evaluate(
        &self,
        player: PlayerId,
        current_points: RankPoints,
        stats: &GameStats,
        now: NaiveDateTime,
    ) -> GameEvaluation {
        let score = self.score_game(stats, self.tier_for(current_points));
        let update = self.apply_game(player, current_points, score.delta, now);
        GameEvaluation { score, update }
    }

    pub fn apply_game(
        &self,
        player: PlayerId,
        current_points: RankPoints,
        delta: i64,
        now: NaiveDateTime,
    ) -> RankUpdate {
        let new_points = current_points.saturating_add(delta).max(0);
        let previous_tier = self.tier_for(current_points);
        let new_tier = self.tier_for(new_points);

        let transition = detect_transition(player, previous_tier, new_tier, now);
        if let Some(event) = &transition {
            info!(
                "Player {} {} from {} to {} ({} -> {} RP)",
                player,
                event.direction.as_str(),
                previous_tier,
                new_tier,
                current_points,
                new_points
            );
        }

        RankUpdate {
            previous_points: current_points,
            new_points,
            previous_tier,
            new_tier,
            transition,
        }
    }
}

fn detect_transition(
    player: PlayerId,
    previous_tier: Tier,
    new_tier: Tier,
    now: NaiveDateTime,
) -> Option<TransitionEvent> {
    if previous_tier == new_tier {
        return None;
    }
    let direction = Direction::between(previous_tier, new_tier);
    Some(TransitionEvent::new(player, new_tier, direction, now))
}
