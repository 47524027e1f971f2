use std::str::FromStr;

use anyhow::anyhow;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::rank::{GameStats, PlayerId, PlayerRankState, RankPoints, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Employee => "employee",
        }
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "player" => Ok(Role::Player),
            "employee" => Ok(Role::Employee),
            other => Err(anyhow!("Unknown role: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Membership {
    Casual,
    Competitive,
    Deactivated,
}

impl Membership {
    pub fn as_str(&self) -> &'static str {
        match self {
            Membership::Casual => "Casual",
            Membership::Competitive => "Competitive",
            Membership::Deactivated => "Deactivated",
        }
    }
}

impl FromStr for Membership {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Casual" => Ok(Membership::Casual),
            "Competitive" => Ok(Membership::Competitive),
            "Deactivated" => Ok(Membership::Deactivated),
            other => Err(anyhow!("Unknown membership: {}", other)),
        }
    }
}

/// Roster account
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub role: Role,
    pub membership: Option<Membership>,
    pub rank: PlayerRankState,
    pub created_at: Option<NaiveDateTime>,
}

/// One recorded performance. Immutable after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub id: i64,
    pub player: PlayerId,
    pub stats: GameStats,
    pub played_at: NaiveDateTime,
    pub delta: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub position: usize,
    pub username: String,
    pub tier: Tier,
    pub rank_points: RankPoints,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerOverview {
    pub username: String,
    pub role: Role,
    pub membership: Option<Membership>,
    pub tier: Tier,
    pub rank_points: RankPoints,
    pub games_played: i64,
    pub recent_games: Vec<GameRecord>,
}
