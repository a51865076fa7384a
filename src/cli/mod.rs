//! Command-line surface of the `catalog` binary.

mod dispatch;
pub use dispatch::{execute, parse_payload, Outcome};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::item::core::{EntityId, EntityKind};

/// Catalog Manager - ordered collections of movies, shows, games, music and programs
#[derive(Parser, Debug)]
#[command(name = "catalog", author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog data file (default: ~/.catalog/catalog.json)
    #[arg(long, env = "CATALOG_STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Config file (default: ~/.catalog/config.toml)
    #[arg(long, env = "CATALOG_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// User recorded in audit fields
    #[arg(long, env = "CATALOG_USER", global = true)]
    pub user: Option<String>,

    /// Enable JSON log format
    #[arg(long, env = "CATALOG_LOG_JSON", global = true)]
    pub log_json: bool,

    /// Log rotation period: daily, hourly, or never
    #[arg(long, env = "CATALOG_LOG_ROTATION", global = true)]
    pub log_rotation: Option<String>,

    /// Custom log directory (default: ~/.catalog/logs)
    #[arg(long, env = "CATALOG_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every entity of a top-level kind
    List { kind: EntityKind },
    /// Show one entity
    Get { kind: EntityKind, id: EntityId },
    /// List the children of one parent
    Find { kind: EntityKind, parent: EntityId },
    /// Add an entity from a JSON payload ("-" reads stdin)
    Add { kind: EntityKind, payload: String },
    /// Update an entity from a JSON payload ("-" reads stdin)
    Update { kind: EntityKind, payload: String },
    /// Remove an entity and everything it owns
    Remove { kind: EntityKind, id: EntityId },
    /// Deep-copy an entity to the end of its scope
    Duplicate { kind: EntityKind, id: EntityId },
    /// Swap an entity with its predecessor
    MoveUp { kind: EntityKind, id: EntityId },
    /// Swap an entity with its successor
    MoveDown { kind: EntityKind, id: EntityId },
    /// Renumber positions of one kind, or of the whole catalog
    Renumber { kind: Option<EntityKind> },
    /// Remove every entity of a top-level kind
    Clear { kind: EntityKind },
    /// Count entities per kind
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_up() {
        let cli = Cli::try_parse_from(["catalog", "move-up", "season", "4"]).unwrap();
        assert_eq!(
            cli.command,
            Command::MoveUp {
                kind: EntityKind::Season,
                id: EntityId::new(4)
            }
        );
    }

    #[test]
    fn test_parse_kind_aliases() {
        let cli = Cli::try_parse_from(["catalog", "find", "cheat_data", "9"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Find {
                kind: EntityKind::CheatData,
                parent: EntityId::new(9)
            }
        );
    }

    #[test]
    fn test_parse_renumber_without_kind() {
        let cli = Cli::try_parse_from(["catalog", "renumber"]).unwrap();
        assert_eq!(cli.command, Command::Renumber { kind: None });
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["catalog", "stats", "--store", "/tmp/c.json", "--user", "bob"])
                .unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(cli.user.as_deref(), Some("bob"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(Cli::try_parse_from(["catalog", "list", "book"]).is_err());
    }

    #[test]
    fn test_bad_id_rejected() {
        assert!(Cli::try_parse_from(["catalog", "get", "movie", "abc"]).is_err());
    }
}
