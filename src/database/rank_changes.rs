use anyhow::{Context, Result};
use rusqlite::{Connection, params};

use crate::errors::with_query_context;
use crate::rank::{PlayerId, TransitionEvent, TransitionLog};

pub fn insert_rank_change(conn: &Connection, event: &TransitionEvent) -> Result<()> {
    conn.execute(
        "INSERT INTO rank_changes (id, player_id, new_tier, direction, changed_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![event.id, event.player, event.new_tier, event.direction, event.date],
    )
    .context("Failed to insert rank change")?;
    Ok(())
}

fn parse_rank_change_row(row: &rusqlite::Row) -> rusqlite::Result<TransitionEvent> {
    Ok(TransitionEvent {
        id: row.get(0)?,
        player: row.get(1)?,
        new_tier: row.get(2)?,
        direction: row.get(3)?,
        date: row.get(4)?,
    })
}

/// All rank changes of a player, oldest first.
pub fn list_for_player(conn: &Connection, player_id: PlayerId) -> Result<Vec<TransitionEvent>> {
    let sql = "SELECT id, player_id, new_tier, direction, changed_at FROM rank_changes WHERE player_id = ?1 ORDER BY changed_at ASC, rowid ASC";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![player_id], parse_rank_change_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_query_context(rows, "rank changes")
}

/// Transition log backed by the `rank_changes` table. Borrowing a
/// transaction keeps the append atomic with the rest of the game write.
pub struct SqliteTransitionLog<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteTransitionLog<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl TransitionLog for SqliteTransitionLog<'_> {
    fn record(&mut self, event: &TransitionEvent) -> Result<()> {
        insert_rank_change(self.conn, event)
    }
}
