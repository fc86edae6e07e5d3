use tracing::debug;

use crate::record::Record;
use crate::sort;
use crate::types::ListNode;

/// Owner of a linked sequence of [`Record`]s.
///
/// Records live in an arena and are linked through `next` indices. The list
/// is built by appending at the tail, so it starts out in insertion order.
/// Sorting re-links the arena in place; the records themselves never move.
#[derive(Clone, Debug, Default)]
pub struct RecordList {
    arena: Vec<Record>,
    head: Option<u32>,
    tail: Option<u32>,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` at the tail of the sequence.
    pub fn push(&mut self, mut record: Record) {
        record.next = None;
        record.left = None;
        record.right = None;
        self.arena.push(record);
        let idx = (self.arena.len() - 1) as u32;
        match self.tail {
            Some(tail) => self.arena[tail as usize].set_next(Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    pub fn head(&self) -> Option<u32> {
        self.head
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Record stored in arena slot `idx`.
    pub fn get(&self, idx: u32) -> Option<&Record> {
        self.arena.get(idx as usize)
    }

    /// All records in arena order, regardless of link state.
    pub fn slots(&self) -> &[Record] {
        &self.arena
    }

    /// Records in sequence order, following `next` from the head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            arena: &self.arena,
            curr: self.head,
        }
    }

    /// Sorts the sequence in place with `comparator`.
    ///
    /// See [`sort::sort`] for the ordering of equal records.
    pub fn sort_by<C>(&mut self, comparator: C)
    where
        C: Fn(&Record, &Record) -> i32,
    {
        let head = self.head.take();
        self.head = sort::sort(&mut self.arena, head, comparator);
        self.tail = self.iter_indices().last();
        debug!(records = self.arena.len(), "list re-linked");
    }

    fn iter_indices(&self) -> impl Iterator<Item = u32> + '_ {
        std::iter::successors(self.head, move |&i| self.arena[i as usize].next())
    }

    /// Releases every record of the sequence at once.
    pub fn release(self) {
        debug!(records = self.arena.len(), "releasing record list");
        drop(self);
    }
}

impl FromIterator<Record> for RecordList {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut list = RecordList::new();
        for record in iter {
            list.push(record);
        }
        list
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`RecordList`] in `next` order.
pub struct Iter<'a> {
    arena: &'a [Record],
    curr: Option<u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.curr?;
        let record = &self.arena[idx as usize];
        self.curr = record.next;
        Some(record)
    }
}
