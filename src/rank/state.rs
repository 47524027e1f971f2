use serde::{Deserialize, Serialize};

use super::engine::RankUpdate;
use super::tiers::TierTable;
use super::types::{RankPoints, Tier};

/// Per-player mutable rank fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRankState {
    pub rank_points: RankPoints,
    /// Tier the player last saw on their dashboard. Never consulted when
    /// deciding whether a game crossed a boundary.
    pub last_known_tier: Option<Tier>,
}

/// What to tell a player when they open their dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "tier", rename_all = "lowercase")]
pub enum RankNotice {
    Promoted(Tier),
    Demoted(Tier),
    Current(Tier),
}

impl RankNotice {
    pub fn message(&self) -> String {
        match self {
            RankNotice::Promoted(tier) => format!("Promoted to {}!", tier),
            RankNotice::Demoted(tier) => format!("Demoted to {}.", tier),
            RankNotice::Current(tier) => format!("Current Rank: {}", tier),
        }
    }
}

impl PlayerRankState {
    pub fn new(rank_points: RankPoints) -> Self {
        Self {
            rank_points,
            last_known_tier: None,
        }
    }

    pub fn apply(&mut self, update: &RankUpdate) {
        self.rank_points = update.new_points;
    }

    /// Compares the derived tier with the last one shown and remembers the
    /// derived tier. Returns `None` when nothing changed since last time.
    pub fn acknowledge(&mut self, tiers: &TierTable) -> Option<RankNotice> {
        let current = tiers.tier_for(self.rank_points);
        let notice = notice_between(self.last_known_tier, current)?;
        self.last_known_tier = Some(current);
        Some(notice)
    }
}

fn notice_between(last_known: Option<Tier>, current: Tier) -> Option<RankNotice> {
    match last_known {
        Some(last) if last == current => None,
        Some(last) if current > last => Some(RankNotice::Promoted(current)),
        Some(_) => Some(RankNotice::Demoted(current)),
        None => Some(RankNotice::Current(current)),
    }
}
