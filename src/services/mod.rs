pub mod roster;

pub use roster::{GameOutcome, RosterService};
