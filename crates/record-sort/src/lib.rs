//! `record-sort` — load a record file, tree-sort it by one key, write it out.
//!
//! Provides the logic behind the `record-sort` binary:
//! - [`input`]  — `gpa credit name` loader
//! - [`output`] — fixed-column writer
//! - [`config`] — command-line parsing into a [`SortConfig`]
//! - [`run`]    — the load / sort / write pipeline
//!
//! The sort itself lives in the `tree-sort` crate.

pub mod config;
pub mod error;
pub mod input;
pub mod output;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tree_sort::{dump, print_tree, SortKey};

pub use config::{Cli, KeySelection, SortConfig};
pub use error::{LoadError, RunError, WriteError};
pub use output::WriteOutcome;

/// What a successful [`run`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Key the records were sorted by, `None` if they were copied unsorted.
    pub sorted_by: Option<SortKey>,
    pub elapsed: Duration,
    pub outcome: WriteOutcome,
}

/// Loads `config.input`, sorts it and writes `config.output`.
///
/// A load failure aborts before anything is written. An unrecognized sort
/// rule is not an error: the records are written in input order.
pub fn run(config: &SortConfig) -> Result<RunReport, RunError> {
    let mut list = input::load(&config.input)?;

    // The pre-sort head becomes the root of the sort tree.
    let root = list.head();
    let start = Instant::now();
    let sorted_by = match &config.selection {
        KeySelection::Key(key) => {
            list.sort_by(key.comparator());
            Some(*key)
        }
        KeySelection::Unrecognized(rule) => {
            warn!(rule = %rule, "Sorting was not done due to inappropriate sorting rules.");
            None
        }
    };
    let elapsed = start.elapsed();
    info!(
        key = sorted_by.map_or("none", SortKey::as_str),
        "calculating time: {:.6}sec",
        elapsed.as_secs_f64()
    );

    if config.dump {
        if sorted_by.is_some() {
            info!("\n{}", print_tree(list.slots(), root));
        }
        info!("\n{}", dump(&list));
    }

    let outcome = output::write(&config.output, &list)?;
    list.release();
    debug!(?outcome, "run finished");
    Ok(RunReport {
        sorted_by,
        elapsed,
        outcome,
    })
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks `debug` over `info`
/// for this workspace's crates. A subscriber that is already installed is
/// kept.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "record_sort=debug,tree_sort=debug"
    } else {
        "record_sort=info,tree_sort=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        debug!(error = %e, "tracing subscriber already installed");
    }
}
