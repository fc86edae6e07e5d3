//! Writer for sorted record files.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{info, warn};
use tree_sort::RecordList;

use crate::error::WriteError;

/// What [`write`] put into the outfile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// This many records were written, one per line.
    Written(usize),
    /// The list was empty; the outfile exists but holds nothing.
    Empty,
}

/// Writes one fixed-column line per record in sequence order.
pub fn write_records<W: Write>(mut out: W, list: &RecordList) -> io::Result<usize> {
    let mut n = 0;
    for record in list {
        writeln!(out, "{record}")?;
        n += 1;
    }
    out.flush()?;
    Ok(n)
}

/// Creates (or truncates) `path` and writes `list` into it.
///
/// An empty list is not an error: the file is left empty and the outcome
/// says so.
pub fn write(path: &Path, list: &RecordList) -> Result<WriteOutcome, WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    if list.is_empty() {
        warn!(path = %path.display(), "The list is empty and writing to the file was not done.");
        return Ok(WriteOutcome::Empty);
    }
    let n = write_records(BufWriter::new(file), list)?;
    info!(path = %path.display(), records = n, "Completed writing to the file.");
    Ok(WriteOutcome::Written(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sort::Record;

    #[test]
    fn writes_fixed_columns() {
        let list: RecordList = [Record::new(3.5, 90, "Brown"), Record::new(3.2, 120, "Adams")]
            .into_iter()
            .collect();
        let mut buf = Vec::new();
        assert_eq!(write_records(&mut buf, &list).unwrap(), 2);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "3.500  90      Brown\n3.200 120      Adams\n"
        );
    }

    #[test]
    fn empty_list_writes_nothing() {
        let mut buf = Vec::new();
        assert_eq!(write_records(&mut buf, &RecordList::new()).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn write_reports_empty_list_without_failing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale\n").unwrap();
        assert_eq!(write(&path, &RecordList::new()).unwrap(), WriteOutcome::Empty);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
