//! `record-sort` — sort a `gpa credit name` record file by one key.
//!
//! Usage:
//!   record-sort [--verbose] [--dump] <gpa|credit|name> <infile> <outfile>
//!
//! Diagnostics go to stderr; `RUST_LOG` overrides the log filter.

use clap::Parser;
use record_sort::{init_tracing, run, Cli, SortConfig};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SortConfig::from(cli);
    if let Err(e) = run(&config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
