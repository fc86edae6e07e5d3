//! Record comparators and sort-key selection.
//!
//! The numeric comparators answer `1` / `-1` / `0`. The name comparator
//! answers the raw difference of the first differing bytes, the way a C
//! `strcmp` does. The engine only looks at the sign.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::record::Record;

/// Compares by grade-point average.
pub fn by_gpa(a: &Record, b: &Record) -> i32 {
    if a.gpa > b.gpa {
        1
    } else if a.gpa < b.gpa {
        -1
    } else {
        0
    }
}

/// Compares by credit count.
pub fn by_credit(a: &Record, b: &Record) -> i32 {
    if a.credit > b.credit {
        1
    } else if a.credit < b.credit {
        -1
    } else {
        0
    }
}

/// Ordinal, locale-independent byte comparison of names.
///
/// A shorter name behaves as if terminated by a `0` byte.
pub fn by_name(a: &Record, b: &Record) -> i32 {
    let (a, b) = (a.name.as_bytes(), b.name.as_bytes());
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        if x != y {
            return i32::from(x) - i32::from(y);
        }
        if x == 0 {
            return 0;
        }
    }
    0
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

/// Field a record list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Gpa,
    Credit,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Gpa, SortKey::Credit, SortKey::Name];

    /// Token accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Gpa => "gpa",
            SortKey::Credit => "credit",
            SortKey::Name => "name",
        }
    }

    pub fn comparator(self) -> fn(&Record, &Record) -> i32 {
        match self {
            SortKey::Gpa => by_gpa,
            SortKey::Credit => by_credit,
            SortKey::Name => by_name,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Matching is exact and case-sensitive.
impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gpa" => Ok(SortKey::Gpa),
            "credit" => Ok(SortKey::Credit),
            "name" => Ok(SortKey::Name),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}
