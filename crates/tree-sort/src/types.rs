//! Link trait definitions.
//!
//! A node carries two sets of links at once:
//! - [`ListNode`] → `next`          (list mode: singly linked sequence)
//! - [`Node`]     → `left` / `right` (tree mode: binary search tree)
//!
//! Only one role is live for a node at any instant. Every "pointer" is an
//! `Option<u32>` index into a [`Vec`]-backed arena, and all link-manipulation
//! functions take the arena as `&mut [N]` and work with indices.

/// Tree-mode links (`left`, `right`).
///
/// Meaningful only while the sort engine has threaded the node into its
/// working tree. Outside a sort the values are stale and must not be read
/// for navigation.
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// List-mode link (`next`).
///
/// The sort engine stops reading `next` as soon as a node has been inserted
/// into the tree, and rewrites it exactly once while flattening.
pub trait ListNode {
    fn next(&self) -> Option<u32>;
    fn set_next(&mut self, v: Option<u32>);
}

/// Three-way comparator used by the sort engine.
///
/// Only the sign matters: `< 0` means "less", anything else routes right.
pub type Comparator<N> = dyn Fn(&N, &N) -> i32;

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn get_next<N: ListNode>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].next()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn set_next<N: ListNode>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_next(v);
}
