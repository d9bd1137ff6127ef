//! # Property-Based Tests for the Point Quadtree
//!
//! Randomized checks that the structural guarantees of the tree hold for
//! arbitrary insertion orders.
//!
//! ## Test Properties
//!
//! - Insert-then-find: every inserted point is found with its label
//! - Size: the size equals the number of inserts which created a node
//! - Partition: every node lies in the quadrant of each ancestor it hangs under
//! - Pre-order: the cursor agrees with a plain recursive listing
//! - Level order: every node once, root first, depths never decrease
//! - Copies: a clone is unaffected by later inserts into the original

use proptest::prelude::*;
use quadrille::{NodeRef, Point, Quadrant, Quadtree};
use std::collections::{HashMap, HashSet};

type Tree = Quadtree<i32, u32>;
type Node<'a> = NodeRef<'a, i32, u32, usize>;

// ===========================================================================
// Strategy Helpers
// ===========================================================================

/// Points with pairwise-distinct `x` and pairwise-distinct `y` ordinates, in random order.
fn distinct_points(max_len: usize) -> impl Strategy<Value = Vec<Point<i32>>> {
    (1..max_len).prop_flat_map(|len| {
        let ordinates: Vec<i32> = (0..len as i32).collect();
        (
            Just(ordinates.clone()).prop_shuffle(),
            Just(ordinates).prop_shuffle(),
        )
            .prop_map(|(xs, ys)| xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect::<Vec<_>>())
    })
}

/// Arbitrary points on a small grid, so that exact duplicates and shared ordinates are common.
fn crowded_points(max_len: usize) -> impl Strategy<Value = Vec<Point<i32>>> {
    prop::collection::vec((0..16_i32, 0..16_i32).prop_map(|(x, y)| Point::new(x, y)), 0..max_len)
}

fn build(points: &[Point<i32>]) -> (Tree, usize) {
    let mut tree = Tree::new();
    let mut created = 0;
    for (label, point) in points.iter().enumerate() {
        if tree.insert(*point, label as u32).1 {
            created += 1;
        }
    }
    (tree, created)
}

fn pre_order_reference(node: Node<'_>, out: &mut Vec<u32>) {
    out.push(*node.label());
    for child in node.existing_children() {
        pre_order_reference(child, out);
    }
}

fn subtree<'a>(node: Node<'a>) -> Vec<Node<'a>> {
    let mut nodes = Vec::new();
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        stack.extend(node.existing_children());
        nodes.push(node);
    }
    nodes
}

// ===========================================================================
// Insert-Then-Find Property
// ===========================================================================

proptest! {
    /// Property: with distinct ordinates, every point is found right after being inserted and at the end
    #[test]
    fn insert_then_find(points in distinct_points(200)) {
        let mut tree = Tree::new();
        for (label, point) in points.iter().enumerate() {
            let (cursor, inserted) = tree.insert(*point, label as u32);
            prop_assert!(inserted);
            prop_assert_eq!(cursor.label(), Some(&(label as u32)));
            prop_assert_eq!(tree.get(*point.x(), *point.y()), Some(&(label as u32)));
        }
        for (label, point) in points.iter().enumerate() {
            prop_assert_eq!(tree.get(*point.x(), *point.y()), Some(&(label as u32)));
        }
        prop_assert_eq!(tree.len(), points.len());
    }

    /// Property: the size counts exactly the inserts which created a node, and the first label of a point wins
    #[test]
    fn size_counts_created_nodes(points in crowded_points(300)) {
        let (tree, created) = build(&points);
        prop_assert_eq!(tree.len(), created);

        let mut first_label = HashMap::new();
        for (label, point) in points.iter().enumerate() {
            first_label.entry(*point).or_insert(label as u32);
        }
        prop_assert_eq!(tree.len(), first_label.len());
        for (point, label) in &first_label {
            prop_assert_eq!(tree.get(*point.x(), *point.y()), Some(label));
        }
        prop_assert!(tree.find(-1, -1).is_end());
    }
}

// ===========================================================================
// Structural Properties
// ===========================================================================

proptest! {
    /// Property: every node of the subtree under slot `q` of a node lies in quadrant `q` of that node
    #[test]
    fn partition_invariant(points in crowded_points(200)) {
        let (tree, _) = build(&points);
        for node in tree.iter() {
            for quadrant in Quadrant::ALL.iter() {
                if let Some(child) = node.child(*quadrant) {
                    prop_assert_eq!(child.quadrant(), Some(*quadrant));
                    for descendant in subtree(child) {
                        prop_assert_eq!(
                            node.point().quadrant_of(descendant.point()),
                            Some(*quadrant),
                        );
                    }
                }
            }
        }
    }

    /// Property: the pre-order cursor visits every node once, in the order of a recursive listing
    #[test]
    fn pre_order_matches_recursion(points in distinct_points(150)) {
        let (tree, _) = build(&points);
        let mut expected = Vec::new();
        if let Some(root) = tree.root() {
            pre_order_reference(root, &mut expected);
        }
        let mut visited = Vec::new();
        let mut cursor = tree.begin();
        while cursor != tree.end() {
            visited.push(*cursor.label().expect("not at the end"));
            cursor.advance();
        }
        prop_assert_eq!(visited.len(), tree.len());
        prop_assert_eq!(visited, expected);
    }

    /// Property: level order visits every node once, root first, with non-decreasing depth
    #[test]
    fn level_order_is_by_depth(points in crowded_points(200)) {
        let (tree, _) = build(&points);
        let nodes: Vec<_> = tree.breadth_iter().collect();
        prop_assert_eq!(nodes.len(), tree.len());
        if let Some(first) = nodes.first() {
            prop_assert!(first.is_root());
        }
        let depths: Vec<usize> = nodes.iter().map(NodeRef::depth).collect();
        prop_assert!(depths.windows(2).all(|pair| pair[0] <= pair[1]));
        let unique: HashSet<_> = nodes.iter().map(|node| *node.raw_key()).collect();
        prop_assert_eq!(unique.len(), tree.len());
        if let Some(height) = tree.height() {
            prop_assert_eq!(depths.last().copied(), Some(height));
        }
    }

    /// Property: a clone keeps its size, shape and labels while the original keeps growing, and vice versa
    #[test]
    fn clones_are_independent(points in distinct_points(100), extra in crowded_points(50)) {
        let (mut original, _) = build(&points);
        let copy = original.clone();
        let listing = |tree: &Tree| -> Vec<(Point<i32>, u32, usize)> {
            tree.iter().map(|node| (*node.point(), *node.label(), node.depth())).collect()
        };
        let before = listing(&copy);
        prop_assert_eq!(&before, &listing(&original));

        for point in &extra {
            original.insert(Point::new(*point.x() + 1000, *point.y()), 0);
        }
        prop_assert_eq!(copy.len(), points.len());
        prop_assert_eq!(listing(&copy), before);

        let mut copy = copy;
        let frozen = listing(&original);
        copy.insert(Point::new(-5, -5), 7);
        prop_assert_eq!(listing(&original), frozen);
    }
}
