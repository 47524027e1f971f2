use anyhow::{Result, bail};
use chrono::{NaiveDateTime, Utc};
use log::info;
use rusqlite::TransactionBehavior;
use serde::Serialize;

use crate::config::AppConfig;
use crate::database::{self, DbPool, SqliteTransitionLog, games, players, rank_changes};
use crate::domain::{
    self, GameRecord, HistoryFilter, LeaderboardEntry, Membership, Player, PlayerOverview, Role,
};
use crate::rank::{
    GameEvaluation, GameStats, RankEngine, RankNotice, RankPoints, Tier, TransitionEvent,
    TransitionLog,
};

/// Result of recording one game.
#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    pub username: String,
    pub game: GameRecord,
    pub evaluation: GameEvaluation,
}

impl GameOutcome {
    pub fn summary(&self) -> String {
        format!("Game recorded. {:+} RP.", self.evaluation.score.delta)
    }

    pub fn transition(&self) -> Option<&TransitionEvent> {
        self.evaluation.update.transition.as_ref()
    }
}

pub struct RosterService {
    pool: DbPool,
    engine: RankEngine,
    config: AppConfig,
}

impl RosterService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.storage)?;
        Self::with_pool(pool, config)
    }

    pub fn with_pool(pool: DbPool, config: AppConfig) -> Result<Self> {
        let conn = database::get_connection(&pool)?;
        database::setup::initialize_schema(&conn)?;
        drop(conn);

        Ok(Self {
            pool,
            engine: RankEngine::standard(),
            config,
        })
    }

    pub fn engine(&self) -> &RankEngine {
        &self.engine
    }

    pub fn tier_for(&self, points: RankPoints) -> Tier {
        self.engine.tier_for(points)
    }

    pub fn add_player(
        &self,
        username: &str,
        role: Role,
        membership: Option<Membership>,
    ) -> Result<Player> {
        let username = username.trim();
        if username.is_empty() {
            bail!("Username must not be empty");
        }

        let conn = database::get_connection(&self.pool)?;
        if players::find_by_username(&conn, username)?.is_some() {
            bail!("Username {} is already taken", username);
        }

        let player = players::insert_player(&conn, username, role, membership)?;
        info!("Registered {} {} (id {})", role.as_str(), player.username, player.id);
        Ok(player)
    }

    pub fn record_game(&self, username: &str, stats: GameStats) -> Result<GameOutcome> {
        self.record_game_at(username, stats, Utc::now().naive_utc())
    }

    /// Scores the game against the stored total and writes the game, the new
    /// total and any rank change in one immediate transaction, so recordings
    /// for the same player cannot interleave.
    pub fn record_game_at(
        &self,
        username: &str,
        stats: GameStats,
        now: NaiveDateTime,
    ) -> Result<GameOutcome> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let mut player = players::get_by_username(&tx, username)?;
        if player.role != Role::Player {
            bail!(
                "Games can only be recorded for player accounts, {} is {}",
                username,
                player.role.as_str()
            );
        }

        let evaluation = self
            .engine
            .evaluate(player.id, player.rank.rank_points, &stats, now);
        player.rank.apply(&evaluation.update);

        let game = games::insert_game(&tx, player.id, &stats, evaluation.score.delta, now)?;
        players::update_rank_points(&tx, player.id, player.rank.rank_points)?;
        if let Some(event) = &evaluation.update.transition {
            SqliteTransitionLog::new(&tx).record(event)?;
        }

        tx.commit()?;

        info!(
            "Recorded game for {}: {:+} RP ({} -> {})",
            player.username,
            evaluation.score.delta,
            evaluation.update.previous_points,
            evaluation.update.new_points
        );

        Ok(GameOutcome {
            username: player.username,
            game,
            evaluation,
        })
    }

    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let conn = database::get_connection(&self.pool)?;
        let ranked = players::list_ranked(&conn, Role::Player)?;

        Ok(ranked
            .into_iter()
            .enumerate()
            .map(|(idx, player)| LeaderboardEntry {
                position: idx + 1,
                tier: self.tier_for(player.rank.rank_points),
                rank_points: player.rank.rank_points,
                username: player.username,
            })
            .collect())
    }

    pub fn overview(&self, username: &str) -> Result<PlayerOverview> {
        let conn = database::get_connection(&self.pool)?;
        let player = players::get_by_username(&conn, username)?;
        let recent_games =
            games::list_recent_for_player(&conn, player.id, self.config.history.overview_games)?;
        let games_played = games::count_for_player(&conn, player.id)?;

        Ok(PlayerOverview {
            tier: self.tier_for(player.rank.rank_points),
            rank_points: player.rank.rank_points,
            username: player.username,
            role: player.role,
            membership: player.membership,
            games_played,
            recent_games,
        })
    }

    pub fn history(&self, username: &str, filter: HistoryFilter) -> Result<Vec<TransitionEvent>> {
        self.history_at(username, filter, Utc::now().naive_utc())
    }

    pub fn history_at(
        &self,
        username: &str,
        filter: HistoryFilter,
        now: NaiveDateTime,
    ) -> Result<Vec<TransitionEvent>> {
        let conn = database::get_connection(&self.pool)?;
        let player = players::get_by_username(&conn, username)?;
        let events = rank_changes::list_for_player(&conn, player.id)?;
        Ok(domain::filter_history(events, filter, now))
    }

    /// Rank notice for a player opening their dashboard. Remembers the tier
    /// shown so the same notice is not raised twice.
    pub fn dashboard(&self, username: &str) -> Result<Option<RankNotice>> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut player = players::get_by_username(&tx, username)?;

        let notice = player.rank.acknowledge(self.engine.tiers());
        if notice.is_some() {
            let current = self.tier_for(player.rank.rank_points);
            players::update_last_known_tier(&tx, player.id, current)?;
        }

        tx.commit()?;
        Ok(notice)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HistorySettings, StorageSettings};
    use crate::rank::Direction;
    use chrono::Duration;
    use std::thread;
    use tempfile::TempDir;

    fn service() -> RosterService {
        let config = AppConfig {
            storage: StorageSettings::default(),
            history: HistorySettings::default(),
        };
        RosterService::with_pool(database::create_memory_pool().unwrap(), config).unwrap()
    }

    /// Service over a database file so several pooled connections can contend.
    fn file_service(dir: &TempDir, pool_size: u32) -> RosterService {
        let config = AppConfig {
            storage: StorageSettings {
                database_path: dir.path().join("roster.db").to_string_lossy().into_owned(),
                pool_size,
            },
            history: HistorySettings::default(),
        };
        RosterService::new(config).unwrap()
    }

    fn rookie_stats(points: u32) -> GameStats {
        GameStats {
            points,
            rebounds: 3,
            assists: 2,
            blocks: 0,
            steals: 1,
        }
    }

    #[test]
    fn rejects_blank_and_duplicate_usernames() {
        let service = service();
        assert!(service.add_player("  ", Role::Player, None).is_err());
        service.add_player("jordan", Role::Player, None).unwrap();
        assert!(service.add_player("jordan", Role::Player, None).is_err());
    }

    #[test]
    fn recording_updates_total_and_logs_promotion() {
        let service = service();
        service.add_player("jordan", Role::Player, None).unwrap();

        // 5 games at +20 each: 100 RP is still Rookie.
        for _ in 0..5 {
            let outcome = service.record_game("jordan", rookie_stats(15)).unwrap();
            assert!(outcome.transition().is_none());
        }
        let outcome = service.record_game("jordan", rookie_stats(15)).unwrap();

        assert_eq!(outcome.summary(), "Game recorded. +20 RP.");
        assert_eq!(outcome.evaluation.update.new_points, 120);
        let event = outcome.transition().unwrap();
        assert_eq!(event.direction, Direction::Promoted);
        assert_eq!(event.new_tier, Tier::BronzeIII);

        let history = service.history("jordan", HistoryFilter::All).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, event.id);
    }

    #[test]
    fn games_cannot_be_recorded_for_staff_or_strangers() {
        let service = service();
        service.add_player("coach", Role::Employee, None).unwrap();
        assert!(service.record_game("coach", rookie_stats(15)).is_err());
        assert!(service.record_game("ghost", rookie_stats(15)).is_err());
    }

    #[test]
    fn poor_games_floor_at_zero() {
        let service = service();
        service.add_player("jordan", Role::Player, None).unwrap();

        let outcome = service.record_game("jordan", GameStats::default()).unwrap();

        assert_eq!(outcome.summary(), "Game recorded. -11 RP.");
        assert_eq!(outcome.evaluation.update.new_points, 0);
        assert_eq!(service.overview("jordan").unwrap().rank_points, 0);
    }

    #[test]
    fn overview_lists_latest_games_first() {
        let service = service();
        service.add_player("jordan", Role::Player, Some(Membership::Competitive)).unwrap();
        let start = Utc::now().naive_utc() - Duration::days(10);

        for day in 0..7u32 {
            service
                .record_game_at("jordan", rookie_stats(5 + day), start + Duration::days(i64::from(day)))
                .unwrap();
        }

        let overview = service.overview("jordan").unwrap();
        let points: Vec<u32> = overview.recent_games.iter().map(|g| g.stats.points).collect();
        assert_eq!(points, vec![11, 10, 9, 8, 7]);
        assert_eq!(overview.games_played, 7);
        assert_eq!(overview.membership, Some(Membership::Competitive));
        assert_eq!(overview.tier, service.tier_for(overview.rank_points));
    }

    #[test]
    fn leaderboard_orders_players_by_points() {
        let service = service();
        service.add_player("low", Role::Player, None).unwrap();
        service.add_player("high", Role::Player, None).unwrap();
        service.add_player("coach", Role::Employee, None).unwrap();
        service.record_game("high", rookie_stats(15)).unwrap();
        service.record_game("low", rookie_stats(6)).unwrap();

        let board = service.leaderboard().unwrap();
        let names: Vec<&str> = board.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["high", "low"]);
        assert_eq!(board[0].position, 1);
        assert_eq!(board[0].rank_points, 20);
        assert_eq!(board[1].rank_points, 2);
    }

    #[test]
    fn dashboard_notice_fires_once_per_change() {
        let service = service();
        service.add_player("jordan", Role::Player, None).unwrap();

        assert_eq!(service.dashboard("jordan").unwrap(), Some(RankNotice::Current(Tier::Rookie)));
        assert_eq!(service.dashboard("jordan").unwrap(), None);

        for _ in 0..6 {
            service.record_game("jordan", rookie_stats(15)).unwrap();
        }

        assert_eq!(
            service.dashboard("jordan").unwrap(),
            Some(RankNotice::Promoted(Tier::BronzeIII))
        );
        assert_eq!(service.dashboard("jordan").unwrap(), None);
    }

    #[test]
    fn history_window_filters_old_changes() {
        let service = service();
        service.add_player("jordan", Role::Player, None).unwrap();
        let now = Utc::now().naive_utc();
        let long_ago = now - Duration::days(60);

        for _ in 0..5 {
            service.record_game_at("jordan", rookie_stats(15), long_ago).unwrap();
        }
        // 100 -> 102 crosses into Bronze III, then a scoreless game costs 14.
        service.record_game_at("jordan", rookie_stats(6), long_ago).unwrap();
        service.record_game_at("jordan", GameStats::default(), now).unwrap();

        let all = service.history_at("jordan", HistoryFilter::All, now).unwrap();
        assert_eq!(all.len(), 2);

        let recent = service
            .history_at("jordan", service.config().history.recent_window(), now)
            .unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].new_tier, Tier::Rookie);
        assert_eq!(recent[0].direction, Direction::Demoted);
    }

    #[test]
    fn concurrent_recordings_for_one_player_all_land() {
        let temp = TempDir::new().unwrap();
        let service = file_service(&temp, 4);
        service.add_player("jordan", Role::Player, None).unwrap();

        const THREADS: i64 = 4;
        const GAMES: i64 = 10;
        // Two points over the Rookie benchmark: +2 RP per game.
        thread::scope(|scope| {
            for _ in 0..THREADS {
                scope.spawn(|| {
                    for _ in 0..GAMES {
                        service.record_game("jordan", rookie_stats(6)).unwrap();
                    }
                });
            }
        });

        let overview = service.overview("jordan").unwrap();
        assert_eq!(overview.rank_points, 2 * THREADS * GAMES);
        assert_eq!(overview.games_played, THREADS * GAMES);

        let history = service.history("jordan", HistoryFilter::All).unwrap();
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn concurrent_dashboard_opens_raise_one_notice() {
        let temp = TempDir::new().unwrap();
        let service = file_service(&temp, 4);
        service.add_player("jordan", Role::Player, None).unwrap();

        let notices: Vec<Option<RankNotice>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| service.dashboard("jordan").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let raised: Vec<RankNotice> = notices.into_iter().flatten().collect();
        assert_eq!(raised, vec![RankNotice::Current(Tier::Rookie)]);
    }
}
