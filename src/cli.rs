//! Command-line surface and terminal display helpers.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "talpa",
    about = "Edit-distance typeahead over a dictionary file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single query against a dictionary
    Suggest {
        /// Dictionary file: one entry per line, `key` or `key<TAB>value`
        dict: String,

        /// The (possibly misspelled) word to look up
        query: String,

        #[command(flatten)]
        opts: SearchOpts,
    },

    /// Answer queries line by line from stdin
    Repl {
        /// Dictionary file: one entry per line, `key` or `key<TAB>value`
        dict: String,

        #[command(flatten)]
        opts: SearchOpts,
    },
}

#[derive(Args)]
pub struct SearchOpts {
    /// Maximum edit distance between query and key
    #[arg(short = 'd', long, default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(0..=126))]
    pub max_dist: u8,

    /// Maximum number of results
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,

    /// Require this many leading scalars of the query to match exactly
    #[arg(short = 'p', long)]
    pub prefix_len: Option<usize>,

    /// Also return every stored continuation of a matched key
    #[arg(long)]
    pub suffixes: bool,

    /// Emit results as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Strip diacritics and case from dictionary keys and queries
    #[arg(long)]
    pub normalize: bool,

    /// Annotate each hit with its exact edit distance from the query
    #[arg(long)]
    pub distances: bool,
}

// Minimal ANSI styling, gated on stdout being a terminal.
pub const CYAN: &str = "\x1b[36m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";

/// Wrap `text` in an ANSI style when `color` is on.
pub fn styled(color: bool, style: &str, text: &str) -> String {
    if color {
        format!("{}{}{}", style, text, RESET)
    } else {
        text.to_string()
    }
}
