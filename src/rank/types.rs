use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type RankPoints = i64;
pub type StatValue = u32;

/// Competitive tiers, declared lowest to highest so the derived ordering is
/// the tier order. `Unranked` sorts below every real tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Unranked,
    Rookie,
    BronzeIII,
    BronzeII,
    BronzeI,
    SilverIII,
    SilverII,
    SilverI,
    GoldIII,
    GoldII,
    GoldI,
}

impl Tier {
    pub const RANKED: [Tier; 10] = [
        Tier::Rookie,
        Tier::BronzeIII,
        Tier::BronzeII,
        Tier::BronzeI,
        Tier::SilverIII,
        Tier::SilverII,
        Tier::SilverI,
        Tier::GoldIII,
        Tier::GoldII,
        Tier::GoldI,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Unranked => "Unranked",
            Tier::Rookie => "Rookie",
            Tier::BronzeIII => "Bronze III",
            Tier::BronzeII => "Bronze II",
            Tier::BronzeI => "Bronze I",
            Tier::SilverIII => "Silver III",
            Tier::SilverII => "Silver II",
            Tier::SilverI => "Silver I",
            Tier::GoldIII => "Gold III",
            Tier::GoldII => "Gold II",
            Tier::GoldI => "Gold I",
        }
    }

    pub fn is_ranked(&self) -> bool {
        *self != Tier::Unranked
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(Tier::Unranked)
            .chain(Tier::RANKED)
            .find(|tier| tier.as_str() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("Unknown tier: {}", s))
    }
}

/// The five tracked statistics of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    Points,
    Rebounds,
    Assists,
    Blocks,
    Steals,
}

impl Stat {
    pub const ALL: [Stat; 5] = [
        Stat::Points,
        Stat::Rebounds,
        Stat::Assists,
        Stat::Blocks,
        Stat::Steals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Points => "points",
            Stat::Rebounds => "rebounds",
            Stat::Assists => "assists",
            Stat::Blocks => "blocks",
            Stat::Steals => "steals",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One game's recorded statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub points: StatValue,
    pub rebounds: StatValue,
    pub assists: StatValue,
    pub blocks: StatValue,
    pub steals: StatValue,
}

impl GameStats {
    pub fn get(&self, stat: Stat) -> StatValue {
        match stat {
            Stat::Points => self.points,
            Stat::Rebounds => self.rebounds,
            Stat::Assists => self.assists,
            Stat::Blocks => self.blocks,
            Stat::Steals => self.steals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Promoted,
    Demoted,
}

impl Direction {
    pub fn between(previous: Tier, new: Tier) -> Self {
        if new > previous {
            Direction::Promoted
        } else {
            Direction::Demoted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Promoted => "promoted",
            Direction::Demoted => "demoted",
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "promoted" => Ok(Direction::Promoted),
            "demoted" => Ok(Direction::Demoted),
            other => Err(anyhow::anyhow!("Unknown direction: {}", other)),
        }
    }
}
