pub mod benchmarks;
pub mod delta;
pub mod engine;
pub mod scorer;
pub mod state;
pub mod tiers;
pub mod transitions;
pub mod types;

pub use benchmarks::{BenchmarkSet, BenchmarkTable};
pub use delta::contribution;
pub use engine::{GameEvaluation, RankEngine, RankUpdate};
pub use scorer::{GameScore, breakdown, score_game};
pub use state::{PlayerRankState, RankNotice};
pub use tiers::{TierBand, TierTable};
pub use transitions::{MemoryTransitionLog, TransitionEvent, TransitionLog};
pub use types::{Direction, GameStats, PlayerId, RankPoints, Stat, StatValue, Tier};
