use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use super::types::{Stat, StatValue, Tier};

/// Expected per-game averages for one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BenchmarkSet {
    pub points: StatValue,
    pub rebounds: StatValue,
    pub assists: StatValue,
    pub blocks: StatValue,
    pub steals: StatValue,
}

impl BenchmarkSet {
    pub const fn new(
        points: StatValue,
        rebounds: StatValue,
        assists: StatValue,
        blocks: StatValue,
        steals: StatValue,
    ) -> Self {
        Self {
            points,
            rebounds,
            assists,
            blocks,
            steals,
        }
    }

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

const STANDARD_BENCHMARKS: [(Tier, BenchmarkSet); 10] = [
    (Tier::Rookie, BenchmarkSet::new(5, 3, 2, 0, 1)),
    (Tier::BronzeIII, BenchmarkSet::new(7, 4, 2, 0, 1)),
    (Tier::BronzeII, BenchmarkSet::new(9, 4, 3, 0, 2)),
    (Tier::BronzeI, BenchmarkSet::new(11, 5, 3, 1, 2)),
    (Tier::SilverIII, BenchmarkSet::new(10, 4, 3, 1, 2)),
    (Tier::SilverII, BenchmarkSet::new(11, 5, 3, 1, 2)),
    (Tier::SilverI, BenchmarkSet::new(12, 6, 3, 1, 3)),
    (Tier::GoldIII, BenchmarkSet::new(10, 5, 6, 1, 2)),
    (Tier::GoldII, BenchmarkSet::new(9, 5, 3, 1, 2)),
    (Tier::GoldI, BenchmarkSet::new(13, 7, 2, 0, 3)),
];

#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    sets: HashMap<Tier, BenchmarkSet>,
}

impl BenchmarkTable {
    pub fn standard() -> Self {
        Self::from_sets(STANDARD_BENCHMARKS)
    }

    pub fn from_sets(sets: impl IntoIterator<Item = (Tier, BenchmarkSet)>) -> Self {
        Self {
            sets: sets.into_iter().collect(),
        }
    }

    /// A missing tier yields an all-zero set, so scoring still proceeds.
    pub fn benchmarks_for(&self, tier: Tier) -> BenchmarkSet {
        match self.sets.get(&tier) {
            Some(set) => *set,
            None => {
                debug!("No benchmarks for tier {}, comparing against zero", tier);
                BenchmarkSet::default()
            }
        }
    }

    pub fn benchmarks_for_name(&self, name: &str) -> BenchmarkSet {
        name.parse::<Tier>()
            .map(|tier| self.benchmarks_for(tier))
            .unwrap_or_default()
    }
}

impl Default for BenchmarkTable {
    fn default() -> Self {
        Self::standard()
    }
}
