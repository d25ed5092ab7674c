use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use lolcomp_types::Role;

#[derive(Parser)]
#[command(name = "lolcomp")]
#[command(about = "Random team compositions over the League of Legends champion catalog.")]
pub(crate) struct Cli {
    /// Settings file (default: lolcomp.yaml, or LOLCOMP_CONFIG).
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Role filter value for `--tags`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum RoleArg {
    Fighter,
    Tank,
    Mage,
    Assassin,
    Marksman,
    Support,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Fighter => Role::Fighter,
            RoleArg::Tank => Role::Tank,
            RoleArg::Mage => Role::Mage,
            RoleArg::Assassin => Role::Assassin,
            RoleArg::Marksman => Role::Marksman,
            RoleArg::Support => Role::Support,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the HTTP gateway. Default bind: 0.0.0.0:3000
    Gateway {
        /// Listen address (e.g. 0.0.0.0:3000); overrides the settings file.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Roll a composition once and print it.
    Roll {
        /// Role filters, comma-separated (e.g. mage,support). Empty = whole catalog.
        #[arg(long, value_enum, value_delimiter = ',')]
        tags: Vec<RoleArg>,

        /// Composition size.
        #[arg(long, default_value_t = 5)]
        count: usize,

        /// Print the full records as JSON instead of a summary line per champion.
        #[arg(long)]
        json: bool,
    },
    /// Manage saved compositions.
    Compositions {
        #[command(subcommand)]
        action: CompositionsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum CompositionsAction {
    /// List saved compositions.
    List,
    /// Save a composition from explicit champion identifiers.
    Save {
        /// Champion identifiers, comma-separated (e.g. Annie,Garen,Lux).
        #[arg(long, value_delimiter = ',', required = true)]
        champions: Vec<String>,
    },
    /// Delete a saved composition by id.
    Delete {
        /// Composition id as printed by `compositions list`.
        id: String,
    },
}
