use std::fmt;

use crate::types::{ListNode, Node};

/// Longest name a record may carry, in bytes.
pub const MAX_NAME_LEN: usize = 199;

/// One student record.
///
/// The payload is `gpa`, `credit` and `name`. The node also carries both link
/// roles: `next` for the loaded/sorted sequence and `left` / `right` for the
/// sort engine's working tree. See [`crate::types`] for which role is live
/// when.
#[derive(Clone, Debug)]
pub struct Record {
    pub gpa: f32,
    pub credit: i32,
    pub name: String,
    pub next: Option<u32>,
    pub left: Option<u32>,
    pub right: Option<u32>,
}

impl Record {
    /// Builds a record with both link roles cleared.
    ///
    /// Field validation (name length, numeric syntax) is the loader's job.
    pub fn new(gpa: f32, credit: i32, name: impl Into<String>) -> Self {
        Self {
            gpa,
            credit,
            name: name.into(),
            next: None,
            left: None,
            right: None,
        }
    }

    /// Payload only, for comparing record contents across sorts.
    pub fn fields(&self) -> (f32, i32, &str) {
        (self.gpa, self.credit, &self.name)
    }
}

/// Fixed column layout: GPA to three decimals, credit at least three wide,
/// name right-aligned in at least ten.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gpa.is_nan() {
            // `f32` displays as `NaN`; the record column is lowercase.
            let nan = if self.gpa.is_sign_negative() { "-nan" } else { "nan" };
            return write!(f, "{nan:>5} {:3} {:>10}", self.credit, self.name);
        }
        write!(f, "{:5.3} {:3} {:>10}", self.gpa, self.credit, self.name)
    }
}

impl Node for Record {
    fn l(&self) -> Option<u32> {
        self.left
    }

    fn r(&self) -> Option<u32> {
        self.right
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.left = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.right = v;
    }
}

impl ListNode for Record {
    fn next(&self) -> Option<u32> {
        self.next
    }

    fn set_next(&mut self, v: Option<u32>) {
        self.next = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_no_links() {
        let r = Record::new(3.5, 90, "Brown");
        assert_eq!(r.next, None);
        assert_eq!(r.left, None);
        assert_eq!(r.right, None);
        assert_eq!(r.fields(), (3.5, 90, "Brown"));
    }

    #[test]
    fn display_uses_fixed_columns() {
        assert_eq!(Record::new(3.5, 90, "Brown").to_string(), "3.500  90      Brown");
        assert_eq!(
            Record::new(2.25, 1200, "Abernathy-Smith").to_string(),
            "2.250 1200 Abernathy-Smith"
        );
        assert_eq!(Record::new(10.0, 7, "X").to_string(), "10.000   7          X");
    }

    #[test]
    fn display_of_non_finite_gpa_is_lowercase() {
        assert_eq!(Record::new(f32::NAN, 1, "x").to_string(), "  nan   1          x");
        assert_eq!(Record::new(-f32::NAN, 1, "x").to_string(), " -nan   1          x");
        assert_eq!(Record::new(f32::INFINITY, 1, "x").to_string(), "  inf   1          x");
    }
}
