//! Command-line surface and the run configuration it produces.

use std::path::PathBuf;

use clap::Parser;
use tree_sort::SortKey;

/// Sort a record file (`gpa credit name` per line) by one key.
#[derive(Debug, Parser)]
#[command(name = "record-sort", version)]
pub struct Cli {
    /// Sort key: gpa, credit or name. Any other value copies the input unsorted.
    pub sorting_rule: String,

    /// Record file to read.
    pub infile: PathBuf,

    /// File to write the sorted records to.
    pub outfile: PathBuf,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,

    /// Log the record links after sorting.
    #[arg(long)]
    pub dump: bool,
}

/// Result of interpreting the sorting-rule token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySelection {
    Key(SortKey),
    /// Not a known key; records pass through in input order.
    Unrecognized(String),
}

impl KeySelection {
    pub fn parse(token: &str) -> Self {
        match token.parse::<SortKey>() {
            Ok(key) => KeySelection::Key(key),
            Err(_) => KeySelection::Unrecognized(token.to_string()),
        }
    }

    pub fn key(&self) -> Option<SortKey> {
        match self {
            KeySelection::Key(key) => Some(*key),
            KeySelection::Unrecognized(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub selection: KeySelection,
    pub input: PathBuf,
    pub output: PathBuf,
    pub dump: bool,
}

impl From<Cli> for SortConfig {
    fn from(cli: Cli) -> Self {
        Self {
            selection: KeySelection::parse(&cli.sorting_rule),
            input: cli.infile,
            output: cli.outfile,
            dump: cli.dump,
        }
    }
}
