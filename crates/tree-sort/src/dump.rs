//! Debug renderings of a record list and of the working tree.

use crate::list::RecordList;
use crate::record::Record;
use crate::types::Node;

fn link(v: Option<u32>) -> String {
    match v {
        Some(i) => format!("#{i}"),
        None => "∅".to_string(),
    }
}

/// One line per record in sequence order, with its arena slot and all three
/// links. Tree links are printed as-is, so after a sort they show the shape
/// of the tree the list was flattened from.
pub fn dump(list: &RecordList) -> String {
    let mut out = String::from("Dump information of binary search tree\n");
    out.push_str(&"-".repeat(73));
    out.push('\n');
    let mut curr = list.head();
    while let Some(idx) = curr {
        let Some(r) = list.get(idx) else {
            break;
        };
        out.push_str(&format!(
            "({r}) #{idx} n:{:>4} l:{:>4} r:{:>4}\n",
            link(r.next),
            link(r.left),
            link(r.right)
        ));
        curr = r.next;
    }
    out
}

/// Levels past this depth share one indent and carry their depth instead.
const MAX_INDENT_DEPTH: usize = 32;

/// Renders the tree rooted at `root`, left branches before right.
///
/// Only meaningful between [`crate::sort::build`] and the flatten pass.
/// Walks with an explicit stack, so a right spine from sorted input prints
/// without deep recursion.
pub fn print_tree(arena: &[Record], root: Option<u32>) -> String {
    let Some(root) = root else {
        return "Tree ∅".to_string();
    };
    let mut out = String::from("Tree");
    let mut stack: Vec<(u32, usize, &str)> = vec![(root, 0, "└─")];
    while let Some((idx, depth, side)) = stack.pop() {
        let n = &arena[idx as usize];
        out.push('\n');
        out.push_str(&"  ".repeat(depth.min(MAX_INDENT_DEPTH)));
        if depth > MAX_INDENT_DEPTH {
            out.push_str(&format!("[{depth}] "));
        }
        out.push_str(&format!("{side} #{idx} {n}"));
        // Right is pushed first so the left subtree prints first.
        if let Some(r) = n.r() {
            stack.push((r, depth + 1, "→"));
        }
        if let Some(l) = n.l() {
            stack.push((l, depth + 1, "←"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::by_name;
    use crate::sort::build;

    fn sample() -> RecordList {
        [
            Record::new(3.5, 90, "Brown"),
            Record::new(3.2, 120, "Adams"),
            Record::new(3.5, 60, "Clark"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn dump_lists_records_with_links() {
        let out = dump(&sample());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Dump information of binary search tree");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "(3.500  90      Brown) #0 n:  #1 l:   ∅ r:   ∅");
        assert!(lines[4].ends_with("#2 n:   ∅ l:   ∅ r:   ∅"));
    }

    #[test]
    fn dump_of_empty_list_is_header_only() {
        assert_eq!(dump(&RecordList::new()).lines().count(), 2);
    }

    #[test]
    fn print_tree_shows_branches() {
        let mut arena = sample().slots().to_vec();
        let root = build(&mut arena, Some(0), by_name);
        assert_eq!(
            print_tree(&arena, root),
            "Tree\n└─ #0 3.500  90      Brown\n  ← #1 3.200 120      Adams\n  → #2 3.500  60      Clark"
        );
        assert_eq!(print_tree(&arena, None), "Tree ∅");
    }

    #[test]
    fn print_tree_orders_left_subtree_before_right() {
        let mut arena: Vec<Record> = [4, 2, 6, 1, 3, 5]
            .iter()
            .map(|&c| Record::new(0.0, c, "n"))
            .collect();
        let root = build_linked(&mut arena);
        let order: Vec<String> = print_tree(&arena, root)
            .lines()
            .skip(1)
            .map(|l| l.split_whitespace().find(|t| t.starts_with('#')).unwrap().to_string())
            .collect();
        assert_eq!(order, vec!["#0", "#1", "#3", "#4", "#2", "#5"]);
    }

    #[test]
    fn deep_right_spine_prints_without_recursion() {
        let n = 200_000u32;
        let mut arena: Vec<Record> = (0..n)
            .map(|i| {
                let mut r = Record::new(1.0, i as i32, "n");
                r.right = (i + 1 < n).then_some(i + 1);
                r
            })
            .collect();
        let out = print_tree(&arena, Some(0));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), n as usize + 1);
        assert!(lines[1].starts_with("└─ #0 "));
        assert!(lines[2].starts_with("  → #1 "));
        let deep = lines[n as usize];
        assert!(deep.starts_with(&format!("{}[{}] → #{} ", "  ".repeat(MAX_INDENT_DEPTH), n - 1, n - 1)));
    }

    fn build_linked(arena: &mut [Record]) -> Option<u32> {
        for i in 1..arena.len() {
            arena[i - 1].next = Some(i as u32);
        }
        build(arena, Some(0), crate::compare::by_credit)
    }
}
