//! End-to-end usage of the public API, the way a downstream crate would see it.

use quadrille::{prelude::*, quadtree::VecQuadtree, BreadthCursor, Point};

fn scenario() -> Quadtree<i32, char> {
    let mut tree = Quadtree::new();
    for &(x, y, label) in &[(5, 5, 'A'), (2, 8, 'B'), (8, 8, 'C'), (2, 2, 'D'), (8, 2, 'E')] {
        tree.insert(Point::new(x, y), label);
    }
    tree
}

#[test]
fn five_point_scenario() {
    let tree = scenario();
    assert_eq!(tree.len(), 5);

    let root = tree.root().expect("tree is not empty");
    assert_eq!(*root.label(), 'A');
    let children: Vec<_> = Quadrant::ALL
        .iter()
        .map(|&quadrant| root.child(quadrant).map(|child| *child.label()))
        .collect();
    assert_eq!(children, [Some('D'), Some('E'), Some('B'), Some('C')]);

    assert_eq!(tree.find(2, 8).label(), Some(&'B'));
    assert!(tree.find(9, 9) == tree.end());

    let pre_order: String = tree.iter().map(|node| *node.label()).collect();
    assert_eq!(pre_order, "ADEBC");
    let level_order: String = tree.breadth_iter().map(|node| *node.label()).collect();
    assert_eq!(level_order, "ADEBC");
}

#[test]
fn cursor_walk_by_hand() {
    let tree = scenario();
    let mut cursor: QuadtreeCursor<'_, i32, char, usize> = tree.begin();
    let mut listing = Vec::new();
    while cursor != tree.end() {
        let (point, label) = cursor.current().expect("not at the end");
        listing.push((*label, *point.x(), *point.y()));
        cursor.advance();
    }
    assert_eq!(
        listing,
        [('A', 5, 5), ('D', 2, 2), ('E', 8, 2), ('B', 2, 8), ('C', 8, 8)],
    );

    let mut breadth: QuadtreeBreadthCursor<'_, i32, char, usize> = tree.breadth_begin();
    assert_eq!(breadth.remaining(), 5);
    breadth.advance();
    assert_eq!(breadth.label(), Some(&'D'));
    assert_eq!(breadth.remaining(), 4);
}

#[test]
fn level_order_from_a_subtree() {
    let mut tree = scenario();
    tree.insert(Point::new(1, 1), 'F');
    tree.insert(Point::new(3, 3), 'G');
    tree.insert(Point::new(1, 3), 'H');

    let d = tree.find(2, 2).node().expect("D was inserted");
    let labels: String = quadrille::BreadthIter::from(BreadthCursor::from_node(d))
        .map(|node| *node.label())
        .collect();
    assert_eq!(labels, "DEBCFHG");
}

#[test]
fn collect_and_extend() {
    let mut tree: VecQuadtree<u16, &str> = vec![(Point::new(10, 10), "first"), (Point::new(3, 4), "second")]
        .into_iter()
        .collect();
    tree.extend(vec![(Point::new(10, 10), "ignored"), (Point::new(12, 1), "third")]);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get(10, 10), Some(&"first"));
    assert_eq!((&tree).into_iter().count(), 3);
}

#[cfg(feature = "render")]
#[test]
fn render_small_tree() {
    let mut tree = Quadtree::<u32, char>::new();
    tree.insert(Point::new(1, 1), 'A');
    tree.insert(Point::new(0, 2), 'B');
    assert_eq!(
        tree.plot(2, 2, false).expect("all points fit"),
        "+---+\n|   |\n| A |\n|B  |\n+---+\n",
    );
    assert_eq!(tree.sideways(), "A (1,1)\n  B (0,2)\n");
}

#[cfg(feature = "slotmap")]
#[test]
fn slotmap_storage() {
    use quadrille::quadtree::SlotMapQuadtree;

    let mut tree = SlotMapQuadtree::<i32, char>::new();
    for &(x, y, label) in &[(5, 5, 'A'), (2, 8, 'B'), (8, 8, 'C'), (2, 2, 'D'), (8, 2, 'E')] {
        tree.insert(Point::new(x, y), label);
    }
    let pre_order: String = tree.iter().map(|node| *node.label()).collect();
    assert_eq!(pre_order, "ADEBC");
    assert_eq!(tree.get(8, 2), Some(&'E'));
    let copy = tree.clone();
    assert_eq!(copy.len(), 5);
}
