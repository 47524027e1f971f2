use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::rank::TransitionEvent;

/// Window applied to a player's rank-change timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HistoryFilter {
    All,
    LastN(usize),
    Since { days: i64 },
}

/// Orders events oldest first, applies the window and drops entries that
/// carry no ranked tier.
pub fn filter_history(
    mut events: Vec<TransitionEvent>,
    filter: HistoryFilter,
    now: NaiveDateTime,
) -> Vec<TransitionEvent> {
    events.sort_by_key(|event| event.date);

    let windowed = match filter {
        HistoryFilter::All => events,
        HistoryFilter::LastN(count) => keep_last(events, count),
        HistoryFilter::Since { days } => keep_since(events, now - Duration::days(days)),
    };

    windowed
        .into_iter()
        .filter(|event| event.new_tier.is_ranked())
        .collect()
}

fn keep_last(mut events: Vec<TransitionEvent>, count: usize) -> Vec<TransitionEvent> {
    let skip = events.len().saturating_sub(count);
    events.split_off(skip)
}

fn keep_since(events: Vec<TransitionEvent>, cutoff: NaiveDateTime) -> Vec<TransitionEvent> {
    events.into_iter().filter(|event| event.date >= cutoff).collect()
}
