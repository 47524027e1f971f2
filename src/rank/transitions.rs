use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Direction, PlayerId, Tier};

/// A recorded tier change. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub id: Uuid,
    pub date: NaiveDateTime,
    pub new_tier: Tier,
    pub player: PlayerId,
    pub direction: Direction,
}

impl TransitionEvent {
    pub fn new(player: PlayerId, new_tier: Tier, direction: Direction, date: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            new_tier,
            player,
            direction,
        }
    }

    pub fn message(&self) -> String {
        match self.direction {
            Direction::Promoted => format!("Promoted to {}!", self.new_tier),
            Direction::Demoted => format!("Demoted to {}.", self.new_tier),
        }
    }
}

/// Append-only sink for transition events.
pub trait TransitionLog {
    fn record(&mut self, event: &TransitionEvent) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryTransitionLog {
    events: Vec<TransitionEvent>,
}

impl MemoryTransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TransitionEvent] {
        &self.events
    }

    pub fn for_player(&self, player: PlayerId) -> impl Iterator<Item = &TransitionEvent> {
        self.events.iter().filter(move |event| event.player == player)
    }
}

impl TransitionLog for MemoryTransitionLog {
    fn record(&mut self, event: &TransitionEvent) -> Result<()> {
        self.events.push(event.clone());
        Ok(())
    }
}
