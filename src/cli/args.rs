//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Website content tree explorer: breadcrumbs, tag search, recency filtering
#[derive(Parser, Debug)]
#[command(name = "sitetree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (repeat for more detail: -d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in demonstration site
    Demo,

    /// Show a manifest's hierarchy as a tree
    Tree {
        /// Site manifest file
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
    },

    /// Print the breadcrumb for a page
    Breadcrumb {
        /// Site manifest file
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
        /// Route of the page
        route: String,
    },

    /// List pages carrying a tag
    Search {
        /// Site manifest file
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
        /// Tag to search for
        tag: String,
    },

    /// List recently modified pages
    Recent {
        /// Site manifest file
        #[arg(value_hint = ValueHint::FilePath)]
        manifest: PathBuf,
        /// Look-back window in days
        #[arg(short = 'n', long, default_value_t = 30)]
        days: i64,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
