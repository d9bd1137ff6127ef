use core::{
    fmt::Debug,
    iter::FusedIterator,
    ptr,
};
use super::{Quadtree, Node, NodeRef};
use crate::{
    point::Point,
    storage::{Storage, DefaultStorage},
};

/// A position in a pre-order, depth-first traversal of a quadtree.
///
/// Every node is visited before its children, and children are visited in slot order, from [`NorthWest`] to [`SouthEast`]. The sequence is not precomputed: each step only looks at the current node and its ancestors.
///
/// Obtained with [`Quadtree::begin`], [`Quadtree::end`], [`Quadtree::insert`] and [`Quadtree::find`].
///
/// [`NorthWest`]: ../enum.Quadrant.html#variant.NorthWest " "
/// [`SouthEast`]: ../enum.Quadrant.html#variant.SouthEast " "
/// [`Quadtree::begin`]: struct.Quadtree.html#method.begin " "
/// [`Quadtree::end`]: struct.Quadtree.html#method.end " "
/// [`Quadtree::insert`]: struct.Quadtree.html#method.insert " "
/// [`Quadtree::find`]: struct.Quadtree.html#method.find " "
#[derive(Debug)]
pub struct Cursor<'a, T, L, K, S = DefaultStorage<Node<T, L, K>>>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a Quadtree<T, L, K, S>,
    key: Option<K>,
}
impl<'a, T, L, K, S> Cursor<'a, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn new(tree: &'a Quadtree<T, L, K, S>, key: Option<K>) -> Self {
        Self { tree, key }
    }
    /// Returns `true` if the cursor is past the last node, `false` otherwise.
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.key.is_none()
    }
    /// Returns a reference to the node at the cursor, or `None` at the end.
    #[inline]
    pub fn node(&self) -> Option<NodeRef<'a, T, L, K, S>> {
        self.key.as_ref().map(|key| unsafe {
            // SAFETY: cursors only ever hold keys taken from the tree
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
    /// Moves the cursor to the next node in pre-order. Does nothing at the end.
    ///
    /// The first existing child comes next if there is one. Otherwise the cursor climbs through the ancestors until one of them has an occupied slot after the one it came from, and becomes the end cursor if it climbs past the root.
    pub fn advance(&mut self) {
        let tree = self.tree;
        let key = match self.key.take() {
            Some(key) => key,
            None => return,
        };
        if let Some(child) = tree.node(&key).next_child_after(None) {
            self.key = Some(child.clone());
            return;
        }
        let mut current = key;
        while let Some(parent_key) = tree.node(&current).parent.clone() {
            let parent = tree.node(&parent_key);
            let slot = unsafe {
                // SAFETY: the parent link always mirrors a child link
                parent.slot_of(&current)
            };
            if let Some(sibling) = parent.next_child_after(Some(slot)) {
                self.key = Some(sibling.clone());
                return;
            }
            current = parent_key;
        }
    }
}
impl<T, L, K, S> Clone for Cursor<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
/// Cursors are equal if they point to the same node of the same tree, or if both are at the end.
impl<T, L, K, S> PartialEq for Cursor<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (&self.key, &other.key) {
            (Some(a), Some(b)) => ptr::eq(self.tree, other.tree) && a == b,
            (None, None) => true,
            _ => false,
        }
    }
}
impl<T, L, K, S> Eq for Cursor<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{}

/// An iterator over the nodes of a quadtree in pre-order.
///
/// Created by [`Quadtree::iter`](struct.Quadtree.html#method.iter).
#[derive(Debug)]
pub struct Iter<'a, T, L, K, S = DefaultStorage<Node<T, L, K>>>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    cursor: Cursor<'a, T, L, K, S>,
}
impl<'a, T, L, K, S> From<Cursor<'a, T, L, K, S>> for Iter<'a, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an iterator which yields the cursor's node and everything after it.
    #[inline(always)]
    fn from(cursor: Cursor<'a, T, L, K, S>) -> Self {
        Self { cursor }
    }
}
impl<'a, T, L, K, S> Iterator for Iter<'a, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
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
        if self.cursor.is_end() {
            (0, Some(0))
        } else {
            (1, Some(self.cursor.tree.len()))
        }
    }
}
impl<T, L, K, S> FusedIterator for Iter<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, L, K, S> Clone for Iter<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}
