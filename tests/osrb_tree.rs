use pretty_assertions::{assert_eq, assert_ne};
use proptest::prelude::*;
use rbos_tree::{OSRBTree, Rational};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn key(numerator: i64, denominator: i64) -> Rational {
    Rational::reduce(numerator, denominator).unwrap()
}

fn in_order(tree: &OSRBTree) -> Vec<Rational> {
    tree.iter().copied().collect()
}

// ─── Sample scenario ─────────────────────────────────────────────────────────

#[test]
fn sample_dataset_rank_queries() {
    let mut tree = OSRBTree::new();
    for (n, d) in [(3, 2), (1, 2), (5, 2), (2, 1), (7, 3), (4, 1)] {
        tree.insert(key(n, d));
    }

    assert_eq!(
        in_order(&tree),
        vec![key(1, 2), key(2, 1), key(3, 2), key(4, 1), key(5, 2), key(7, 3)],
    );
    assert_eq!(tree.find_kth(3), Ok(&key(3, 2)));

    tree.remove(key(3, 2)).unwrap();

    assert_eq!(
        in_order(&tree),
        vec![key(1, 2), key(2, 1), key(4, 1), key(5, 2), key(7, 3)],
    );
    assert_eq!(tree.find_kth(3), Ok(&key(4, 1)));
}

// ─── Error contracts ─────────────────────────────────────────────────────────

#[test]
fn out_of_range_ranks_are_errors() {
    let mut tree = OSRBTree::new();
    assert!(tree.find_kth(0).is_err());
    assert!(tree.find_kth(1).is_err());

    tree.insert(key(0, 1));
    tree.insert(key(1, 1));

    // Both boundary violations fail; a stored 0/1 is still reachable.
    let error = tree.find_kth(0).unwrap_err();
    assert_eq!((error.rank, error.len), (0, 2));
    let error = tree.find_kth(3).unwrap_err();
    assert_eq!((error.rank, error.len), (3, 2));
    assert_eq!(tree.find_kth(1), Ok(&key(0, 1)));
}

#[test]
fn removing_an_absent_key_leaves_the_tree_unchanged() {
    let mut tree = OSRBTree::new();
    for n in [5, 3, 8, 1, 4, 7, 9] {
        tree.insert(key(n, 2));
    }

    let before = in_order(&tree);
    let error = tree.remove(key(6, 2)).unwrap_err();

    assert_eq!(error.0, key(3, 1));
    assert_eq!(tree.len(), 7);
    assert_eq!(in_order(&tree), before);
}

#[test]
fn invalid_keys_never_enter_the_tree() {
    assert!(Rational::reduce(1, 0).is_err());
    assert!(Rational::reduce(0, 0).is_err());
}

// ─── Multiset behavior ───────────────────────────────────────────────────────

#[test]
fn duplicates_occupy_consecutive_ranks() {
    let mut tree = OSRBTree::new();
    tree.insert(key(2, 1));
    tree.insert(key(1, 2));
    tree.insert(key(1, 2));
    tree.insert(key(1, 2));

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.find_kth(1), Ok(&key(1, 2)));
    assert_eq!(tree.find_kth(2), Ok(&key(1, 2)));
    assert_eq!(tree.find_kth(3), Ok(&key(1, 2)));
    assert_eq!(tree.find_kth(4), Ok(&key(2, 1)));

    tree.remove(key(1, 2)).unwrap();
    assert_eq!(tree.len(), 3);
    assert!(tree.contains(&key(1, 2)));
}

#[test]
fn ordering_is_component_wise() {
    let mut tree = OSRBTree::new();
    tree.insert(key(1, 3));
    tree.insert(key(1, 2));

    // Numerators tie, denominators decide: 1/2 ranks before 1/3 even
    // though 1/3 is the smaller value.
    assert_eq!(tree.find_kth(1), Ok(&key(1, 2)));
    assert_eq!(tree.find_kth(2), Ok(&key(1, 3)));
}

#[test]
fn keys_reduce_before_entering_the_tree() {
    let mut tree = OSRBTree::new();
    tree.insert(key(4, 8));
    tree.insert(key(-3, -6));

    // Both inputs reduce to 1/2, so they coexist as duplicates of one key.
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.find_kth(1), Ok(&key(1, 2)));
    assert_eq!(tree.find_kth(2), Ok(&key(1, 2)));
    tree.remove(key(2, 4)).unwrap();
    assert_eq!(tree.len(), 1);
}

// ─── Randomized model tests ──────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum TreeOp {
    Insert(i64, i64),
    Remove(i64, i64),
    FindKth(usize),
    Contains(i64, i64),
}

/// Generates components in a range small enough to ensure collisions.
fn component_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![-40i64..40i64, Just(1i64)]
}

fn tree_op_strategy() -> impl Strategy<Value = TreeOp> {
    prop_oneof![
        5 => (component_strategy(), component_strategy())
            .prop_map(|(n, d)| TreeOp::Insert(n, d)),
        3 => (component_strategy(), component_strategy())
            .prop_map(|(n, d)| TreeOp::Remove(n, d)),
        2 => (0usize..TEST_SIZE).prop_map(TreeOp::FindKth),
        2 => (component_strategy(), component_strategy())
            .prop_map(|(n, d)| TreeOp::Contains(n, d)),
    ]
}

/// A sorted-`Vec` multiset under the same component-wise comparator.
#[derive(Default)]
struct Model {
    keys: Vec<Rational>,
}

impl Model {
    fn insert(&mut self, key: Rational) {
        let position = self.keys.partition_point(|existing| *existing <= key);
        self.keys.insert(position, key);
    }

    fn remove(&mut self, key: &Rational) -> bool {
        match self.keys.binary_search(key) {
            Ok(position) => {
                self.keys.remove(position);
                true
            }
            Err(_) => false,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence on both the tree and a sorted-Vec
    /// multiset model and asserts identical observable behavior throughout.
    #[test]
    fn tree_matches_sorted_vec_model(ops in proptest::collection::vec(tree_op_strategy(), TEST_SIZE)) {
        let mut tree = OSRBTree::new();
        let mut model = Model::default();

        for op in &ops {
            match op {
                TreeOp::Insert(n, d) => {
                    if *d == 0 {
                        prop_assert!(Rational::reduce(*n, *d).is_err());
                        continue;
                    }
                    let k = key(*n, *d);
                    tree.insert(k);
                    model.insert(k);
                }
                TreeOp::Remove(n, d) => {
                    if *d == 0 {
                        continue;
                    }
                    let k = key(*n, *d);
                    let tree_removed = tree.remove(k).is_ok();
                    let model_removed = model.remove(&k);
                    prop_assert_eq!(tree_removed, model_removed, "remove({})", k);
                }
                TreeOp::FindKth(k) => {
                    let result = tree.find_kth(*k);
                    if *k >= 1 && *k <= model.keys.len() {
                        prop_assert_eq!(result, Ok(&model.keys[*k - 1]), "find_kth({})", k);
                    } else {
                        prop_assert!(result.is_err(), "find_kth({}) should be out of range", k);
                    }
                }
                TreeOp::Contains(n, d) => {
                    if *d == 0 {
                        continue;
                    }
                    let k = key(*n, *d);
                    prop_assert_eq!(tree.contains(&k), model.keys.binary_search(&k).is_ok());
                }
            }
            prop_assert_eq!(tree.len(), model.keys.len());
            prop_assert_eq!(tree.is_empty(), model.keys.is_empty());
        }

        // Final in-order sequence matches the model exactly.
        let keys: Vec<Rational> = tree.iter().copied().collect();
        prop_assert_eq!(keys, model.keys);
    }

    /// Every valid rank agrees with the in-order traversal.
    #[test]
    fn ranks_agree_with_in_order_traversal(pairs in proptest::collection::vec(
        (component_strategy(), component_strategy()), 1..500,
    )) {
        let tree: OSRBTree = pairs
            .iter()
            .filter(|(_, d)| *d != 0)
            .map(|(n, d)| key(*n, *d))
            .collect();

        let keys: Vec<Rational> = tree.iter().copied().collect();
        for (index, expected) in keys.iter().enumerate() {
            prop_assert_eq!(tree.find_kth(index + 1), Ok(expected));
        }
        prop_assert!(tree.find_kth(keys.len() + 1).is_err());
    }
}

// ─── Collection trait surface ────────────────────────────────────────────────

#[test]
fn clone_eq_and_debug() {
    let tree: OSRBTree = [(1, 2), (2, 1), (1, 2)].into_iter().map(|(n, d)| key(n, d)).collect();
    let clone = tree.clone();

    assert_eq!(tree, clone);
    assert_eq!(format!("{tree:?}"), "{1/2, 1/2, 2/1}");

    let mut other = clone;
    other.remove(key(1, 2)).unwrap();
    assert_ne!(tree, other);
}

#[test]
fn iterator_is_exact_size_and_fused() {
    let tree: OSRBTree = (1..=5).map(|n| key(n, 1)).collect();

    let mut iter = tree.iter();
    assert_eq!(iter.len(), 5);
    iter.next();
    assert_eq!(iter.len(), 4);

    let mut iter = tree.iter().skip(5);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn clear_resets_the_tree() {
    let mut tree: OSRBTree = (1..=10).map(|n| key(n, 3)).collect();
    tree.clear();

    assert!(tree.is_empty());
    assert!(tree.find_kth(1).is_err());
    tree.insert(key(1, 1));
    assert_eq!(tree.find_kth(1), Ok(&key(1, 1)));
}
