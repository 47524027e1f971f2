use crate::domain::HistoryFilter;

const DEFAULT_DATABASE_PATH: &str = "roster_ranking.db";

pub struct StorageSettings {
    pub database_path: String,
    pub pool_size: u32,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
        }
    }
}

impl StorageSettings {
    pub fn from_env() -> Self {
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());
        Self {
            database_path,
            ..Self::default()
        }
    }
}

pub struct HistorySettings {
    pub recent_changes: usize,
    pub recent_days: i64,
    pub overview_games: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            recent_changes: 5,
            recent_days: 30,
            overview_games: 5,
        }
    }
}

impl HistorySettings {
    pub fn last_changes(&self) -> HistoryFilter {
        HistoryFilter::LastN(self.recent_changes)
    }

    pub fn recent_window(&self) -> HistoryFilter {
        HistoryFilter::Since {
            days: self.recent_days,
        }
    }
}

pub struct AppConfig {
    pub storage: StorageSettings,
    pub history: HistorySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            storage: StorageSettings::from_env(),
            history: HistorySettings::default(),
        }
    }
}
