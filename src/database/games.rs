use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{Connection, params};

use crate::domain::GameRecord;
use crate::errors::with_query_context;
use crate::rank::{GameStats, PlayerId};

const GAME_COLUMNS: &str =
    "id, player_id, points, rebounds, assists, blocks, steals, delta, played_at";

pub fn insert_game(
    conn: &Connection,
    player_id: PlayerId,
    stats: &GameStats,
    delta: i64,
    played_at: NaiveDateTime,
) -> Result<GameRecord> {
    let sql = format!(
        "INSERT INTO games (player_id, points, rebounds, assists, blocks, steals, delta, played_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING {}",
        GAME_COLUMNS
    );

    conn.query_row(
        &sql,
        params![
            player_id,
            stats.points,
            stats.rebounds,
            stats.assists,
            stats.blocks,
            stats.steals,
            delta,
            played_at
        ],
        parse_game_row,
    )
    .context("Failed to insert game")
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<GameRecord> {
    Ok(GameRecord {
        id: row.get(0)?,
        player: row.get(1)?,
        stats: GameStats {
            points: row.get(2)?,
            rebounds: row.get(3)?,
            assists: row.get(4)?,
            blocks: row.get(5)?,
            steals: row.get(6)?,
        },
        delta: row.get(7)?,
        played_at: row.get(8)?,
    })
}

/// Most recent games first.
pub fn list_recent_for_player(
    conn: &Connection,
    player_id: PlayerId,
    limit: usize,
) -> Result<Vec<GameRecord>> {
    let sql = format!(
        "SELECT {} FROM games WHERE player_id = ?1 ORDER BY played_at DESC, id DESC LIMIT ?2",
        GAME_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![player_id, limit as i64], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_query_context(rows, "games")
}

pub fn count_for_player(conn: &Connection, player_id: PlayerId) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM games WHERE player_id = ?1",
        params![player_id],
        |row| row.get(0),
    )
    .context("Failed to count games")
}
