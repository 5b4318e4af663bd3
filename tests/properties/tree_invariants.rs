//! Property tests for navigation tree invariants.

use proptest::prelude::*;

use navtree::domain::value_objects::{Priority, SortMode};
use navtree::{MenuItem, NavigationTree, NewNode, NodeId};

use super::sort_policy::priority;

#[derive(Debug, Clone)]
enum Op {
    Add { parent: usize, label: String, priority: Priority },
    Remove { parent: usize, label: String },
    SetCurrent { node: usize },
    SortBy { mode: usize, deep: bool },
}

fn label() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Blog", "About", "Docs", "News", "Team"]).prop_map(str::to_string)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (any::<usize>(), label(), priority())
            .prop_map(|(parent, label, priority)| Op::Add { parent, label, priority }),
        1 => (any::<usize>(), label()).prop_map(|(parent, label)| Op::Remove { parent, label }),
        2 => any::<usize>().prop_map(|node| Op::SetCurrent { node }),
        1 => (0..SortMode::ALL.len(), any::<bool>())
            .prop_map(|(mode, deep)| Op::SortBy { mode, deep }),
    ]
}

/// Apply `ops`, picking targets among the live nodes
fn build(ops: &[Op]) -> NavigationTree {
    let mut tree = NavigationTree::new();
    for op in ops {
        let live = live_nodes(&tree);
        let pick = |index: usize| live[index % live.len()];
        match op {
            Op::Add { parent, label, priority } => {
                let spec = NewNode::new(label.as_str()).priority(priority.clone());
                tree.add_child(pick(*parent), spec).unwrap();
            }
            Op::Remove { parent, label } => {
                tree.remove_children(pick(*parent), label).unwrap();
            }
            Op::SetCurrent { node } => {
                tree.set_current(pick(*node)).unwrap();
            }
            Op::SortBy { mode, deep } => {
                tree.sort_by(SortMode::ALL[*mode], *deep);
            }
        }
    }
    tree
}

fn live_nodes(tree: &NavigationTree) -> Vec<NodeId> {
    let mut nodes = vec![tree.root()];
    nodes.extend(tree.descendants(tree.root()));
    nodes
}

fn flagged(item: &MenuItem) -> usize {
    usize::from(item.current) + item.children.iter().map(flagged).sum::<usize>()
}

fn labels(items: &[MenuItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: at most one node carries the current flag, and it is the tracked one.
    #[test]
    fn property_single_current_flag(ops in prop::collection::vec(op(), 0..40)) {
        let mut tree = build(&ops);
        let current = tree.current();
        prop_assert!(tree.contains(current));

        let menu = tree.menu().unwrap();
        let count = flagged(&menu);
        prop_assert!(count <= 1, "{count} nodes flagged current");
        prop_assert_eq!(count == 1, tree[current].is_current());
    }

    /// PROPERTY: every live node is reachable from the root exactly once.
    #[test]
    fn property_node_count_matches_reachable(ops in prop::collection::vec(op(), 0..40)) {
        let mut tree = build(&ops);
        let menu = tree.menu().unwrap();
        prop_assert_eq!(menu.total_count(), tree.node_count());
    }

    /// PROPERTY: after removing a label, no direct child carries it and the
    /// remaining children keep their relative order.
    #[test]
    fn property_remove_deletes_every_match(
        ops in prop::collection::vec(op(), 0..30),
        target in label(),
    ) {
        let mut tree = build(&ops);
        let root = tree.root();
        let before: Vec<String> = tree
            .children(root)
            .iter()
            .map(|&id| tree[id].label().to_string())
            .filter(|l| *l != target)
            .collect();

        tree.root_mut().remove(&target);

        let after: Vec<String> = tree
            .children(root)
            .iter()
            .map(|&id| tree[id].label().to_string())
            .collect();
        prop_assert_eq!(after, before);
        prop_assert!(tree.get(&target).is_none());
    }

    /// PROPERTY: sorting permutes children and is idempotent.
    #[test]
    fn property_sort_is_idempotent_permutation(ops in prop::collection::vec(op(), 0..40)) {
        let mut tree = build(&ops);
        let root = tree.root();
        let mut unsorted: Vec<String> = tree
            .children(root)
            .iter()
            .map(|&id| tree[id].label().to_string())
            .collect();

        let first = tree.items().unwrap();
        let second = tree.items().unwrap();
        prop_assert_eq!(&first, &second);

        let mut sorted: Vec<String> = labels(&first).into_iter().map(str::to_string).collect();
        unsorted.sort();
        sorted.sort();
        prop_assert_eq!(sorted, unsorted);
    }

    /// PROPERTY: a deep `sort_by` reaches every node.
    #[test]
    fn property_deep_sort_by_reaches_all(
        ops in prop::collection::vec(op(), 0..40),
        mode in 0..SortMode::ALL.len(),
    ) {
        let mut tree = build(&ops);
        let mode = SortMode::ALL[mode];
        tree.sort_by(mode, true);

        for id in live_nodes(&tree) {
            prop_assert_eq!(tree[id].sort_mode(), mode);
        }
    }

    /// PROPERTY: children sorted numerically come out in coerced order, ties
    /// in insertion order.
    #[test]
    fn property_numeric_children_are_ordered(values in prop::collection::vec(priority(), 0..12)) {
        let mut tree = NavigationTree::new();
        tree.sort_by(SortMode::PriorityNumeric, false);
        for (index, value) in values.iter().enumerate() {
            tree.add(NewNode::new(format!("item-{index}")).priority(value.clone())).unwrap();
        }

        let items = tree.items().unwrap();
        for pair in items.windows(2) {
            let (a, b) = (pair[0].priority.to_number(), pair[1].priority.to_number());
            prop_assert!(a <= b);
            if a == b {
                let index = |item: &MenuItem| item.label[5..].parse::<usize>().unwrap();
                prop_assert!(index(&pair[0]) < index(&pair[1]));
            }
        }
    }
}
