//! Tree sort over an arena-backed singly linked list.
//!
//! The nodes of the list are re-threaded into an unbalanced binary search
//! tree through their `left` / `right` links, then flattened back into a list
//! through their `next` links. No node is allocated, copied or freed.
//!
//! Equal keys always route right, so among equal records the one inserted
//! first comes out first. The tree is not rebalanced: sorted input produces
//! a right spine and linear descent cost.

use tracing::trace;

use crate::types::{get_l, get_next, get_r, set_l, set_next, set_r, ListNode, Node};

/// Builds the search tree from the list starting at `head`.
///
/// The head becomes the root; every following node, in list order, descends
/// from the root (`comparator(node, current) < 0` goes left, otherwise right)
/// and is attached as a leaf. Returns the root, which is `head` itself.
///
/// After this call the `next` links are stale and must not be followed.
pub fn build<N, C>(arena: &mut [N], head: Option<u32>, comparator: C) -> Option<u32>
where
    N: Node + ListNode,
    C: Fn(&N, &N) -> i32,
{
    let root = head?;
    set_l(arena, root, None);
    set_r(arena, root, None);

    let mut node = get_next(arena, root);
    while let Some(idx) = node {
        // Read before the node is threaded into the tree.
        node = get_next(arena, idx);
        set_l(arena, idx, None);
        set_r(arena, idx, None);
        insert(arena, root, idx, &comparator);
    }
    Some(root)
}

fn insert<N, C>(arena: &mut [N], root: u32, node: u32, comparator: &C)
where
    N: Node,
    C: Fn(&N, &N) -> i32,
{
    let mut curr = root;
    let mut depth = 0usize;
    loop {
        let cmp = comparator(&arena[node as usize], &arena[curr as usize]);
        let child = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match child {
            Some(c) => {
                curr = c;
                depth += 1;
            }
            None => {
                if cmp < 0 {
                    set_l(arena, curr, Some(node));
                } else {
                    set_r(arena, curr, Some(node));
                }
                trace!(node, parent = curr, depth, left = cmp < 0, "inserted");
                return;
            }
        }
    }
}

/// Flattens the subtree at `tree` into a list that ends in `next`.
///
/// Right subtree first, chained to `next`; that chain becomes the node's
/// `next`; then the left subtree, chained to the node itself. Returns the
/// head of the resulting chain, or `next` when `tree` is empty.
///
/// Recursion depth equals tree height, which is the list length on sorted
/// input. [`flatten`] produces the same links without recursion.
pub fn scan<N>(arena: &mut [N], tree: Option<u32>, next: Option<u32>) -> Option<u32>
where
    N: Node + ListNode,
{
    let Some(idx) = tree else {
        return next;
    };
    let right = get_r(arena, idx);
    let chained = scan(arena, right, next);
    set_next(arena, idx, chained);
    let left = get_l(arena, idx);
    scan(arena, left, Some(idx))
}

/// Iterative form of `scan(root, None)`.
///
/// Walks the tree right-to-left in order, writing each node's `next` exactly
/// once, in the same sequence as [`scan`]. The work stack holds indices only
/// and never grows beyond the tree height.
pub fn flatten<N>(arena: &mut [N], root: Option<u32>) -> Option<u32>
where
    N: Node + ListNode,
{
    let mut successor = None;
    let mut stack: Vec<u32> = Vec::new();
    let mut curr = root;
    loop {
        while let Some(idx) = curr {
            stack.push(idx);
            curr = get_r(arena, idx);
        }
        let Some(idx) = stack.pop() else {
            break;
        };
        set_next(arena, idx, successor);
        successor = Some(idx);
        curr = get_l(arena, idx);
    }
    successor
}

/// Sorts the list starting at `head` and returns the new head.
///
/// Destructive: every link of every reachable node is rewritten, and `head`
/// must be treated as consumed. An empty list (`None`) comes back as `None`.
/// The links reachable from `head` must form a finite, acyclic list.
pub fn sort<N, C>(arena: &mut [N], head: Option<u32>, comparator: C) -> Option<u32>
where
    N: Node + ListNode,
    C: Fn(&N, &N) -> i32,
{
    let root = build(arena, head, comparator);
    flatten(arena, root)
}
