use core::{
    fmt::Debug,
    iter::FusedIterator,
    mem,
    ptr,
};
use super::{Quadtree, Node, NodeRef};
use crate::{
    point::Point,
    // Only the module is imported: `Storage` is implemented for `Vec`, and bringing the trait into
    // scope would shadow slice methods on the precomputed order
    storage::{self, DefaultStorage},
};

/// A position in a level-order, breadth-first traversal of a quadtree.
///
/// The root comes first, then every node of depth 1, then every node of depth 2 and so on. Within a level, nodes are ordered by their parents' order and then by slot.
///
/// The whole visiting order of the tree is computed when the cursor is created, and the cursor remembers its position in that order by index. Cloning the cursor clones the order too, so prefer [`BreadthIter`] or moving the cursor when that matters.
///
/// [`BreadthIter`]: struct.BreadthIter.html " "
#[derive(Debug)]
pub struct BreadthCursor<'a, T, L, K, S = DefaultStorage<Node<T, L, K>>>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a Quadtree<T, L, K, S>,
    order: Vec<K>,
    position: Option<usize>,
}
impl<'a, T, L, K, S> BreadthCursor<'a, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a cursor at the specified node.
    ///
    /// The traversal always covers the whole tree, no matter which node the cursor starts at: the root is found by walking up through the parents first.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Quadtree, Point, BreadthCursor};
    /// let mut tree = Quadtree::<i32, char>::new();
    /// tree.insert(Point::new(5, 5), 'A');
    /// tree.insert(Point::new(2, 2), 'B');
    /// tree.insert(Point::new(1, 1), 'C');
    /// tree.insert(Point::new(8, 8), 'D');
    ///
    /// let b = tree.find(2, 2).node().unwrap();
    /// let mut cursor = BreadthCursor::from_node(b);
    /// assert_eq!(cursor.label(), Some(&'B'));
    /// cursor.advance();
    /// assert_eq!(cursor.label(), Some(&'D'));
    /// cursor.advance();
    /// assert_eq!(cursor.label(), Some(&'C'));
    /// cursor.advance();
    /// assert!(cursor.is_end());
    /// ```
    pub fn from_node(node: NodeRef<'a, T, L, K, S>) -> Self {
        let tree = node.tree();
        let order = level_order(tree, node.root().into_raw_key());
        let position = order.iter().position(|key| key == node.raw_key());
        debug_assert!(position.is_some(), "node is missing from its own tree's level order");
        Self { tree, order, position }
    }
    #[inline]
    pub(super) fn end(tree: &'a Quadtree<T, L, K, S>) -> Self {
        Self {
            tree,
            order: Vec::new(),
            position: None,
        }
    }
    /// Returns `true` if the cursor is past the last node, `false` otherwise.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.position.is_none()
    }
    /// Returns a reference to the node at the cursor, or `None` at the end.
    #[inline]
    pub fn node(&self) -> Option<NodeRef<'a, T, L, K, S>> {
        self.key().map(|key| unsafe {
            // SAFETY: the order only contains keys taken from the tree
            NodeRef::new_raw_unchecked(self.tree, key.clone())
        })
    }
    /// Returns the point and the label at the cursor, or `None` at the end.
    #[inline]
    pub fn current(&self) -> Option<(&'a Point<T>, &'a L)> {
        self.node().map(|node| (node.point(), node.label()))
    }
    /// Returns the point at the cursor, or `None` at the end.
    #[inline]
    pub fn point(&self) -> Option<&'a Point<T>> {
        self.node().map(|node| node.point())
    }
    /// Returns the label at the cursor, or `None` at the end.
    #[inline]
    pub fn label(&self) -> Option<&'a L> {
        self.node().map(|node| node.label())
    }
    /// Returns the number of parent hops from the node at the cursor to the root, or `None` at the end.
    #[inline]
    pub fn depth(&self) -> Option<usize> {
        self.node().map(|node| node.depth())
    }
    /// Moves the cursor to the next node in level order. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        let len = self.order.len();
        self.position = self.position
            .map(|position| position + 1)
            .filter(|&position| position < len);
    }
    /// Returns the number of nodes left to visit, including the one at the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.position.map_or(0, |position| self.order.len() - position)
    }

    #[inline]
    fn key(&self) -> Option<&K> {
        self.position.and_then(|position| self.order.as_slice().get(position))
    }
}
impl<T, L, K, S> Clone for BreadthCursor<'_, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            order: self.order.clone(),
            position: self.position,
        }
    }
}
/// Cursors are equal if they point to the same node of the same tree, or if both are at the end.
impl<T, L, K, S> PartialEq for BreadthCursor<'_, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self.key(), other.key()) {
            (Some(a), Some(b)) => ptr::eq(self.tree, other.tree) && a == b,
            (None, None) => true,
            _ => false,
        }
    }
}
impl<T, L, K, S> Eq for BreadthCursor<'_, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{}

/// Collects the keys of every node reachable from `root`, level by level.
fn level_order<T, L, K, S>(tree: &Quadtree<T, L, K, S>, root: K) -> Vec<K>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let mut order = Vec::with_capacity(tree.len());
    let mut current = vec![root];
    let mut next = Vec::new();
    while !current.is_empty() {
        for key in current.drain(..) {
            next.extend(tree.node(&key).children.iter().flatten().cloned());
            order.push(key);
        }
        mem::swap(&mut current, &mut next);
    }
    event!(trace, nodes = order.len(), "computed level order");
    order
}

/// An iterator over the nodes of a quadtree in level order.
///
/// Created by [`Quadtree::breadth_iter`](struct.Quadtree.html#method.breadth_iter).
#[derive(Debug)]
pub struct BreadthIter<'a, T, L, K, S = DefaultStorage<Node<T, L, K>>>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    cursor: BreadthCursor<'a, T, L, K, S>,
}
impl<'a, T, L, K, S> From<BreadthCursor<'a, T, L, K, S>> for BreadthIter<'a, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an iterator which yields the cursor's node and everything after it.
    #[inline(always)]
    fn from(cursor: BreadthCursor<'a, T, L, K, S>) -> Self {
        Self { cursor }
    }
}
impl<'a, T, L, K, S> Iterator for BreadthIter<'a, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = NodeRef<'a, T, L, K, S>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor.node()?;
        self.cursor.advance();
        Some(node)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}
impl<T, L, K, S> ExactSizeIterator for BreadthIter<'_, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, L, K, S> FusedIterator for BreadthIter<'_, T, L, K, S>
where
    S: storage::Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
