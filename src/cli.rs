use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::config::HistorySettings;
use crate::domain::{HistoryFilter, Membership, Role};
use crate::rank::{GameStats, RankPoints, StatValue};

#[derive(Parser, Debug)]
#[command(author, version, about = "roster-ranking: club roster and rank tracking")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Register a new account
    AddPlayer {
        username: String,
        #[arg(long, value_enum, default_value_t = Role::Player)]
        role: Role,
        #[arg(long, value_enum)]
        membership: Option<Membership>,
    },
    /// Record one game for a player and update their rank
    RecordGame {
        username: String,
        #[command(flatten)]
        stats: StatsArgs,
    },
    /// Players ordered by rank points
    Leaderboard {
        #[arg(long)]
        json: bool,
    },
    /// Rank and most recent games of a player
    Overview {
        username: String,
        #[arg(long)]
        json: bool,
    },
    /// Rank-change timeline of a player
    History {
        username: String,
        #[arg(long, value_enum, default_value_t = HistoryWindow::All)]
        filter: HistoryWindow,
        #[arg(long)]
        json: bool,
    },
    /// Show the rank update a player sees when opening their dashboard
    Dashboard { username: String },
    /// Look up the tier for a point total
    Tier {
        #[arg(allow_negative_numbers = true)]
        points: RankPoints,
    },
    /// Print a shell completion script
    Completions { shell: Shell },
}

/// All five statistics are required.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct StatsArgs {
    #[arg(long)]
    pub points: StatValue,
    #[arg(long)]
    pub rebounds: StatValue,
    #[arg(long)]
    pub assists: StatValue,
    #[arg(long)]
    pub blocks: StatValue,
    #[arg(long)]
    pub steals: StatValue,
}

impl From<&StatsArgs> for GameStats {
    fn from(args: &StatsArgs) -> Self {
        GameStats {
            points: args.points,
            rebounds: args.rebounds,
            assists: args.assists,
            blocks: args.blocks,
            steals: args.steals,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "lower")]
pub enum HistoryWindow {
    All,
    Last5,
    Last30Days,
}

impl HistoryWindow {
    pub fn to_filter(self, settings: &HistorySettings) -> HistoryFilter {
        match self {
            HistoryWindow::All => HistoryFilter::All,
            HistoryWindow::Last5 => settings.last_changes(),
            HistoryWindow::Last30Days => settings.recent_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_record_game() {
        let cli = Cli::try_parse_from([
            "roster_ranking",
            "record-game",
            "jordan",
            "--points",
            "15",
            "--rebounds",
            "3",
            "--assists",
            "2",
            "--blocks",
            "0",
            "--steals",
            "1",
        ])
        .unwrap();

        let Command::RecordGame { username, stats } = cli.command else {
            panic!("expected record-game");
        };
        assert_eq!(username, "jordan");
        assert_eq!(GameStats::from(&stats).points, 15);
    }

    #[test]
    fn missing_or_negative_stats_are_rejected() {
        let missing = Cli::try_parse_from(["roster_ranking", "record-game", "jordan", "--points", "3"]);
        assert!(missing.is_err());

        let negative = Cli::try_parse_from([
            "roster_ranking",
            "record-game",
            "jordan",
            "--points=-3",
            "--rebounds=0",
            "--assists=0",
            "--blocks=0",
            "--steals=0",
        ]);
        assert!(negative.is_err());
    }

    #[test]
    fn history_windows_map_to_filters() {
        let settings = HistorySettings::default();
        let cli = Cli::try_parse_from(["roster_ranking", "history", "jordan", "--filter", "last30days"]).unwrap();

        let Command::History { filter, .. } = cli.command else {
            panic!("expected history");
        };
        assert_eq!(filter.to_filter(&settings), HistoryFilter::Since { days: 30 });
        assert_eq!(HistoryWindow::Last5.to_filter(&settings), HistoryFilter::LastN(5));
    }

    #[test]
    fn tier_accepts_negative_totals() {
        let cli = Cli::try_parse_from(["roster_ranking", "tier", "-5"]).unwrap();
        assert_eq!(cli.command, Command::Tier { points: -5 });
    }
}
