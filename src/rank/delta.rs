use log::debug;

use super::types::{Stat, StatValue};

const REWARD_MULTIPLIER: i64 = 2;
const PENALTY_MULTIPLIER: i64 = 1;
pub const STAT_CEILING: i64 = 50;
pub const STAT_FLOOR: i64 = -20;

/// Points one statistic adds to or removes from a game's delta.
///
/// Beating the benchmark pays double up to +50; missing it costs the plain
/// difference down to -20.
pub fn contribution(stat: Stat, recorded: StatValue, benchmark: StatValue) -> i64 {
    let diff = i64::from(recorded) - i64::from(benchmark);
    let points = clamp_difference(diff);
    debug!(
        "{}: recorded {} vs benchmark {} -> {:+}",
        stat, recorded, benchmark, points
    );
    points
}

fn clamp_difference(diff: i64) -> i64 {
    if diff > 0 {
        diff.saturating_mul(REWARD_MULTIPLIER).min(STAT_CEILING)
    } else if diff < 0 {
        diff.saturating_mul(PENALTY_MULTIPLIER).max(STAT_FLOOR)
    } else {
        0
    }
}
