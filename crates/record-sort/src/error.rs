use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open infile {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading infile: {0}")]
    Read(#[from] io::Error),
    #[error(
        "no records in {}: the order of the data may be incorrect, or the file may be empty (usage: gpa credit name)",
        .path.display()
    )]
    Empty { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("cannot create outfile {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed writing outfile: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Write(#[from] WriteError),
}
