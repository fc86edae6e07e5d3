//! In-place tree sort for linked student records.
//!
//! A [`RecordList`] keeps its [`Record`]s in a `Vec` arena and links them
//! into a sequence through `next` indices. Sorting threads the same nodes
//! into an unbalanced binary search tree through their `left` / `right`
//! indices and flattens the tree back into a sequence, so no record is
//! copied, allocated or freed along the way.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] (tree links) and [`ListNode`] (list link) traits |
//! [`record`] | [`Record`] payload and its fixed-column display |
//! [`list`] | [`RecordList`] arena, append, iteration, release |
//! [`sort`] | `build`, `scan`, `flatten`, `sort` |
//! [`compare`] | `by_gpa`, `by_credit`, `by_name`, [`SortKey`] |
//! [`dump`] | Debug dump of links and tree printing |

pub mod compare;
pub mod dump;
pub mod list;
pub mod record;
pub mod sort;
pub mod types;

pub use compare::{by_credit, by_gpa, by_name, SortKey, UnknownSortKey};
pub use dump::{dump, print_tree};
pub use list::{Iter, RecordList};
pub use record::{Record, MAX_NAME_LEN};
pub use sort::{build, flatten, scan, sort};
pub use types::{Comparator, ListNode, Node};
