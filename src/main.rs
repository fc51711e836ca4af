//! talpa CLI: fuzzy dictionary lookup from the terminal.
//!
//! ```bash
//! # Ten nearest entries within two edits
//! talpa suggest /usr/share/dict/words recieve
//!
//! # Typeahead: everything continuing a key within one edit of the input
//! talpa suggest words.tsv progr --suffixes -d 1 -n 20
//!
//! # Interactive session, JSON lines out
//! talpa repl words.tsv --json --distances
//! ```

use clap::Parser;
use std::io::{self, BufRead, Write};

use talpa::{levenshtein, levenshtein_bounded, load_dictionary, normalize, Suggestion, Trie};

mod cli;
use cli::{styled, Cli, Commands, SearchOpts, CYAN, DIM};

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Suggest { dict, query, opts } => run_suggest(&dict, &query, &opts),
        Commands::Repl { dict, opts } => run_repl(&dict, &opts),
    };
    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_suggest(dict: &str, query: &str, opts: &SearchOpts) -> io::Result<()> {
    let trie = load_dictionary(dict, opts.normalize)?;
    answer(&trie, query, opts)
}

fn run_repl(dict: &str, opts: &SearchOpts) -> io::Result<()> {
    let trie = load_dictionary(dict, opts.normalize)?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        answer(&trie, query, opts)?;
    }
    Ok(())
}

fn answer(trie: &Trie, raw_query: &str, opts: &SearchOpts) -> io::Result<()> {
    let query = if opts.normalize {
        normalize(raw_query)
    } else {
        raw_query.to_string()
    };
    let hits = run_query(trie, &query, opts);
    print_hits(&query, &hits, opts)
}

/// Pick the suggestion operation the flags describe.
fn run_query(trie: &Trie, query: &str, opts: &SearchOpts) -> Vec<Suggestion> {
    match (opts.suffixes, opts.prefix_len) {
        (false, None) => trie.suggest(query, opts.max_dist, opts.limit),
        (true, None) => trie.suggest_suffixes(query, opts.max_dist, opts.limit),
        (false, Some(p)) => trie.suggest_after_exact_prefix(query, p, opts.max_dist, opts.limit),
        (true, Some(p)) => {
            trie.suggest_suffixes_after_exact_prefix(query, p, opts.max_dist, opts.limit)
        }
    }
}

/// JSON row shape; `distance` only appears under `--distances`.
#[derive(serde::Serialize)]
struct Hit<'a> {
    key: &'a str,
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<usize>,
}

/// Edit distance for display. The banded DP answers within the search
/// bound; suffix-expanded hits can lie beyond it and take the full DP.
fn display_distance(query: &str, key: &str, max_dist: u8) -> usize {
    levenshtein_bounded(query, key, usize::from(max_dist))
        .unwrap_or_else(|| levenshtein(query, key))
}

fn print_hits(query: &str, hits: &[Suggestion], opts: &SearchOpts) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.json {
        let rows: Vec<Hit<'_>> = hits
            .iter()
            .map(|hit| Hit {
                key: &hit.key,
                value: &hit.value,
                distance: opts
                    .distances
                    .then(|| display_distance(query, &hit.key, opts.max_dist)),
            })
            .collect();
        serde_json::to_writer(&mut out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    let color = atty::is(atty::Stream::Stdout);
    if hits.is_empty() {
        writeln!(out, "{}", styled(color, DIM, "no matches"))?;
        return Ok(());
    }
    for hit in hits {
        let mut line = if hit.value == hit.key {
            styled(color, CYAN, &hit.key)
        } else {
            format!("{}\t{}", styled(color, CYAN, &hit.key), hit.value)
        };
        if opts.distances {
            let note = format!("(d={})", display_distance(query, &hit.key, opts.max_dist));
            line = format!("{} {}", line, styled(color, DIM, &note));
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
