//! Loader for whitespace-separated `gpa credit name` record files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};
use tree_sort::{Record, RecordList, MAX_NAME_LEN};

use crate::error::LoadError;

/// Parses one `gpa credit name` line.
///
/// Returns `None` when a field is missing or does not parse, or when the
/// name exceeds [`MAX_NAME_LEN`] bytes. Tokens after the name are ignored
/// here; see [`read_records`].
pub fn parse_line(line: &str) -> Option<Record> {
    let mut fields = line.split_whitespace();
    let gpa = fields.next()?.parse::<f32>().ok()?;
    let credit = fields.next()?.parse::<i32>().ok()?;
    let name = fields.next()?;
    if name.len() > MAX_NAME_LEN {
        return None;
    }
    Some(Record::new(gpa, credit, name))
}

fn has_trailing_fields(line: &str) -> bool {
    line.split_whitespace().nth(3).is_some()
}

/// Reads records in file order until the first malformed line.
///
/// Blank lines are skipped. Everything from the first malformed line on is
/// ignored, so the result may be empty. A line with tokens after the name
/// still yields its record, but the tokens start a record that cannot
/// parse, so reading stops there.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<RecordList> {
    let mut list = RecordList::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(record) if has_trailing_fields(&line) => {
                list.push(record);
                warn!(line = i + 1, content = %line, "stopping at trailing fields");
                break;
            }
            Some(record) => list.push(record),
            None => {
                warn!(line = i + 1, content = %line, "stopping at malformed line");
                break;
            }
        }
    }
    debug!(records = list.len(), "records read");
    Ok(list)
}

/// Loads the record file at `path`.
///
/// Fails when the file cannot be opened or read, or when it yields no
/// record at all.
pub fn load(path: &Path) -> Result<RecordList, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let list = read_records(BufReader::new(file))?;
    if list.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    info!(path = %path.display(), records = list.len(), "loaded records");
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &RecordList) -> Vec<&str> {
        list.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn parses_three_fields() {
        let r = parse_line("3.5 90 Brown").unwrap();
        assert_eq!(r.fields(), (3.5, 90, "Brown"));
        let r = parse_line("  2\t120   Adams  ").unwrap();
        assert_eq!(r.fields(), (2.0, 120, "Adams"));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("3.5 90").is_none());
        assert!(parse_line("Brown 3.5 90").is_none());
        assert!(parse_line("3.5 9.5 Brown").is_none());
    }

    #[test]
    fn ignores_tokens_after_the_name() {
        let r = parse_line("3.5 90 Brown Jr").unwrap();
        assert_eq!(r.fields(), (3.5, 90, "Brown"));
    }

    #[test]
    fn name_length_limit() {
        let ok = format!("1.0 1 {}", "a".repeat(MAX_NAME_LEN));
        assert!(parse_line(&ok).is_some());
        let long = format!("1.0 1 {}", "a".repeat(MAX_NAME_LEN + 1));
        assert!(parse_line(&long).is_none());
    }

    #[test]
    fn reads_in_file_order_and_skips_blank_lines() {
        let text = "3.5 90 Brown\n\n3.2 120 Adams\n   \n3.5 60 Clark\n";
        let list = read_records(text.as_bytes()).unwrap();
        assert_eq!(names(&list), vec!["Brown", "Adams", "Clark"]);
    }

    #[test]
    fn stops_at_first_malformed_line() {
        let text = "3.5 90 Brown\nbad line here\n3.5 60 Clark\n";
        let list = read_records(text.as_bytes()).unwrap();
        assert_eq!(names(&list), vec!["Brown"]);
    }

    #[test]
    fn trailing_fields_keep_the_record_and_stop() {
        let list = read_records("3.5 90 Brown Jr\n3.2 120 Adams\n".as_bytes()).unwrap();
        assert_eq!(names(&list), vec!["Brown"]);
    }

    #[test]
    fn malformed_first_line_reads_nothing() {
        let list = read_records("Brown 90 3.5\n3.5 60 Clark\n".as_bytes()).unwrap();
        assert!(list.is_empty());
    }
}
