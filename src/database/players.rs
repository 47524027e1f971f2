use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::domain::{Membership, Player, Role};
use crate::errors::{not_found, with_query_context, with_write_context};
use crate::rank::{PlayerId, PlayerRankState, RankPoints, Tier};

const PLAYER_COLUMNS: &str =
    "id, username, role, membership, rank_points, last_known_tier, created_at";

pub fn insert_player(
    conn: &Connection,
    username: &str,
    role: Role,
    membership: Option<Membership>,
) -> Result<Player> {
    let sql = format!(
        "INSERT INTO players (username, role, membership) VALUES (?1, ?2, ?3) RETURNING {}",
        PLAYER_COLUMNS
    );

    conn.query_row(&sql, params![username, role, membership], parse_player_row)
        .with_context(|| format!("Failed to insert player {}", username))
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        username: row.get(1)?,
        role: row.get(2)?,
        membership: row.get(3)?,
        rank: PlayerRankState {
            rank_points: row.get(4)?,
            last_known_tier: row.get(5)?,
        },
        created_at: row.get(6)?,
    })
}

pub fn find_by_username(conn: &Connection, username: &str) -> Result<Option<Player>> {
    let sql = format!("SELECT {} FROM players WHERE username = ?1", PLAYER_COLUMNS);

    conn.query_row(&sql, params![username], parse_player_row)
        .optional()
        .context("Failed to query player by username")
}

pub fn get_by_username(conn: &Connection, username: &str) -> Result<Player> {
    find_by_username(conn, username)?.ok_or_else(|| not_found("player", username))
}

pub fn update_rank_points(conn: &Connection, id: PlayerId, rank_points: RankPoints) -> Result<()> {
    let updated = with_write_context(
        conn.execute(
            "UPDATE players SET rank_points = ?1 WHERE id = ?2",
            params![rank_points, id],
        ),
        "update rank points of",
        "player",
    )?;
    ensure_updated(updated, id)
}

pub fn update_last_known_tier(conn: &Connection, id: PlayerId, tier: Tier) -> Result<()> {
    let updated = with_write_context(
        conn.execute(
            "UPDATE players SET last_known_tier = ?1 WHERE id = ?2",
            params![tier, id],
        ),
        "update last known tier of",
        "player",
    )?;
    ensure_updated(updated, id)
}

fn ensure_updated(rows: usize, id: PlayerId) -> Result<()> {
    if rows == 0 {
        return Err(not_found("player", &id.to_string()));
    }
    Ok(())
}

/// Players with the given role, highest rank points first.
pub fn list_ranked(conn: &Connection, role: Role) -> Result<Vec<Player>> {
    let sql = format!(
        "SELECT {} FROM players WHERE role = ?1 ORDER BY rank_points DESC, username ASC",
        PLAYER_COLUMNS
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![role], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>();

    with_query_context(rows, "ranked players")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::initialize_schema;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn insert_and_find() {
        let conn = conn();
        let created = insert_player(&conn, "jordan", Role::Player, Some(Membership::Casual)).unwrap();

        assert_eq!(created.rank, PlayerRankState::default());
        let found = find_by_username(&conn, "jordan").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.membership, Some(Membership::Casual));
    }

    #[test]
    fn usernames_are_unique() {
        let conn = conn();
        insert_player(&conn, "jordan", Role::Player, None).unwrap();
        assert!(insert_player(&conn, "jordan", Role::Employee, None).is_err());
    }

    #[test]
    fn rank_fields_update() {
        let conn = conn();
        let player = insert_player(&conn, "jordan", Role::Player, None).unwrap();

        update_rank_points(&conn, player.id, 130).unwrap();
        update_last_known_tier(&conn, player.id, Tier::BronzeIII).unwrap();

        let found = get_by_username(&conn, "jordan").unwrap();
        assert_eq!(found.rank.rank_points, 130);
        assert_eq!(found.rank.last_known_tier, Some(Tier::BronzeIII));
    }

    #[test]
    fn updating_missing_player_fails() {
        let conn = conn();
        assert!(update_rank_points(&conn, 42, 10).is_err());
        assert!(get_by_username(&conn, "ghost").is_err());
    }

    #[test]
    fn negative_points_are_rejected_by_schema() {
        let conn = conn();
        let player = insert_player(&conn, "jordan", Role::Player, None).unwrap();
        assert!(update_rank_points(&conn, player.id, -1).is_err());
    }

    #[test]
    fn ranked_listing_filters_role_and_sorts() {
        let conn = conn();
        let a = insert_player(&conn, "a", Role::Player, None).unwrap();
        let b = insert_player(&conn, "b", Role::Player, None).unwrap();
        let staff = insert_player(&conn, "staff", Role::Employee, None).unwrap();
        update_rank_points(&conn, a.id, 50).unwrap();
        update_rank_points(&conn, b.id, 200).unwrap();
        update_rank_points(&conn, staff.id, 900).unwrap();

        let names: Vec<String> = list_ranked(&conn, Role::Player)
            .unwrap()
            .into_iter()
            .map(|p| p.username)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
