use core::{
    fmt::Debug,
    iter::FromIterator,
    ptr,
};
use crate::{
    point::{Point, Quadrant},
    storage::{Storage, DefaultStorage},
};
use super::{Node, NodeRef, Cursor, BreadthCursor, Iter, BreadthIter};

/// A point quadtree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Debug)]
pub struct Quadtree<T, L, K = usize, S = DefaultStorage<Node<T, L, K>>>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: Option<K>,
}

/// Where a descent from the root for a given point ended up.
enum Descent<K> {
    /// The tree has no root.
    Empty,
    /// A node with the exact point exists.
    Found(K),
    /// The point belongs in the specified empty slot of the specified node.
    Vacant(K, Quadrant),
}

impl<T, L, K, S> Quadtree<T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty quadtree.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::Quadtree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = Quadtree::<i32, char>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), None);
    /// ```
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty quadtree with the specified capacity for the storage.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Quadtree, Point};
    /// let mut tree = Quadtree::<u8, &str>::with_capacity(2);
    /// tree.insert(Point::new(4, 4), "Foo");
    /// tree.insert(Point::new(1, 7), "Bar");
    ///
    /// // If the default storage is backed by a dynamic memory allocation,
    /// // at most one has happened to this point.
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of nodes in the tree. Equal to the number of inserts which returned `true`.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Same as [`len`](#method.len).
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len()
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of edges on the longest path from the root to a leaf, or `None` if the tree is empty.
    ///
    /// The tree is walked with an explicit stack, so degenerate trees do not exhaust the call stack.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Quadtree, Point};
    /// let mut tree = Quadtree::<i32, char>::new();
    /// assert_eq!(tree.height(), None);
    /// tree.insert(Point::new(5, 5), 'A');
    /// assert_eq!(tree.height(), Some(0));
    /// tree.insert(Point::new(2, 2), 'B');
    /// tree.insert(Point::new(1, 1), 'C');
    /// tree.insert(Point::new(8, 8), 'D');
    /// assert_eq!(tree.height(), Some(2));
    /// ```
    pub fn height(&self) -> Option<usize> {
        let root = self.root.clone()?;
        let mut stack = vec![(root, 0_usize)];
        let mut height = 0;
        while let Some((key, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(
                self.node(&key)
                    .children
                    .iter()
                    .flatten()
                    .map(|child| (child.clone(), depth + 1)),
            );
        }
        Some(height)
    }

    /// Returns a reference to the root node of the tree, or `None` if it is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, L, K, S>> {
        self.root.as_ref().map(|root| unsafe {
            // SAFETY: the root key was returned by the storage and nodes are never removed
            NodeRef::new_raw_unchecked(self, root.clone())
        })
    }
    /// Returns a pre-order cursor at the root, or the end cursor if the tree is empty.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, L, K, S> {
        Cursor::new(self, self.root.clone())
    }
    /// Returns the pre-order end cursor.
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, L, K, S> {
        Cursor::new(self, None)
    }
    /// Returns a level-order cursor at the root, or the end cursor if the tree is empty.
    ///
    /// The entire visiting order is computed here, which takes time and memory proportional to the size of the tree.
    #[inline]
    pub fn breadth_begin(&self) -> BreadthCursor<'_, T, L, K, S> {
        match self.root() {
            Some(root) => BreadthCursor::from_node(root),
            None => BreadthCursor::end(self),
        }
    }
    /// Returns the level-order end cursor. Does not allocate.
    #[inline]
    pub fn breadth_end(&self) -> BreadthCursor<'_, T, L, K, S> {
        BreadthCursor::end(self)
    }
    /// Returns an iterator over the nodes in pre-order: every node comes before its children, and children are visited in slot order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, L, K, S> {
        Iter::from(self.begin())
    }
    /// Returns an iterator over the nodes in level order: the root first, then all nodes of depth 1, and so on.
    #[inline]
    pub fn breadth_iter(&self) -> BreadthIter<'_, T, L, K, S> {
        BreadthIter::from(self.breadth_begin())
    }

    #[inline(always)]
    pub(super) fn node(&self, key: &K) -> &Node<T, L, K> {
        debug_assert!(
            self.storage.contains_key(key),
            "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
            key,
        );
        unsafe {
            // SAFETY: every key stored in the tree was returned by the storage, and nodes are
            // never removed
            self.storage.get_unchecked(key)
        }
    }
}
impl<T, L, K, S> Quadtree<T, L, K, S>
where
    T: PartialOrd,
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Inserts a labelled point, returning a cursor to the node holding it and whether a new node was created.
    ///
    /// If a node with an equal point already exists, the tree is left untouched, `false` is returned and the cursor points to the existing node, whose label is kept.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Quadtree, Point};
    /// let mut tree = Quadtree::<i32, char>::new();
    ///
    /// let (cursor, inserted) = tree.insert(Point::new(5, 5), 'A');
    /// assert!(inserted);
    /// assert_eq!(cursor.label(), Some(&'A'));
    ///
    /// // Points which share one ordinate with an existing node are still distinct points:
    /// assert!(tree.insert(Point::new(5, 2), 'B').1);
    ///
    /// // Only an exact match counts as a duplicate:
    /// let (cursor, inserted) = tree.insert(Point::new(5, 5), 'Z');
    /// assert!(!inserted);
    /// assert_eq!(cursor.label(), Some(&'A'));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, point: Point<T>, label: L) -> (Cursor<'_, T, L, K, S>, bool) {
        let key = match self.descend(&point) {
            Descent::Found(existing) => {
                event!(trace, "point already present, insertion skipped");
                return (Cursor::new(self, Some(existing)), false);
            }
            Descent::Empty => {
                let key = self.storage.add(Node::root(point, label));
                self.root = Some(key.clone());
                event!(trace, "inserted root node");
                key
            }
            Descent::Vacant(parent, quadrant) => {
                let key = self.storage.add(Node::leaf(point, label, Some(parent.clone())));
                let parent = self.storage.get_mut(&parent);
                debug_assert!(parent.is_some(), "parent of a vacant slot went missing");
                if let Some(parent) = parent {
                    parent.children[quadrant.index()] = Some(key.clone());
                }
                event!(trace, %quadrant, size = self.storage.len(), "inserted node");
                key
            }
        };
        (Cursor::new(self, Some(key)), true)
    }
    /// Returns a cursor to the node at the specified point, or the end cursor if there is none.
    ///
    /// # Example
    /// ```rust
    /// # use quadrille::{Quadtree, Point};
    /// let mut tree = Quadtree::<i32, char>::new();
    /// tree.insert(Point::new(5, 5), 'A');
    /// tree.insert(Point::new(2, 8), 'B');
    ///
    /// assert_eq!(tree.find(2, 8).label(), Some(&'B'));
    /// assert!(tree.find(9, 9) == tree.end());
    /// ```
    pub fn find(&self, x: T, y: T) -> Cursor<'_, T, L, K, S> {
        match self.descend(&Point::new(x, y)) {
            Descent::Found(key) => Cursor::new(self, Some(key)),
            Descent::Empty | Descent::Vacant(..) => self.end(),
        }
    }
    /// Returns a reference to the label of the node at the specified point, or `None` if there is none.
    #[inline]
    pub fn get(&self, x: T, y: T) -> Option<&L> {
        self.find(x, y).label()
    }
    /// Returns `true` if a node with the specified point exists, `false` otherwise.
    #[inline]
    pub fn contains(&self, x: T, y: T) -> bool {
        !self.find(x, y).is_end()
    }

    fn descend(&self, point: &Point<T>) -> Descent<K> {
        let mut current = match &self.root {
            Some(root) => root.clone(),
            None => return Descent::Empty,
        };
        loop {
            let node = self.node(&current);
            let quadrant = match node.point.quadrant_of(point) {
                Some(quadrant) => quadrant,
                None => return Descent::Found(current),
            };
            match node.child(quadrant) {
                Some(child) => current = child.clone(),
                None => return Descent::Vacant(current, quadrant),
            }
        }
    }
}

impl<T, L, K, S> Clone for Quadtree<T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K> + Clone,
    K: Clone + Debug + Eq,
{
    /// Deep-copies the tree. The copy shares nothing with the original, and is a different tree as far as equality is concerned.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            root: self.root.clone(),
        }
    }
}
/// Trees compare by identity rather than by contents: a tree is only equal to itself, and all empty trees are equal to each other. Clones of a non-empty tree are *not* equal to it.
impl<T, L, K, S> PartialEq for Quadtree<T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(_), Some(_)) => ptr::eq(self, other),
            _ => false,
        }
    }
}
impl<T, L, K, S> Eq for Quadtree<T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, L, K, S> Default for Quadtree<T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, L, K, S> Extend<(Point<T>, L)> for Quadtree<T, L, K, S>
where
    T: PartialOrd,
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Inserts every labelled point. Points already present keep their original label.
    fn extend<I: IntoIterator<Item = (Point<T>, L)>>(&mut self, iter: I) {
        for (point, label) in iter {
            self.insert(point, label);
        }
    }
}
impl<T, L, K, S> FromIterator<(Point<T>, L)> for Quadtree<T, L, K, S>
where
    T: PartialOrd,
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn from_iter<I: IntoIterator<Item = (Point<T>, L)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}
impl<'a, T, L, K, S> IntoIterator for &'a Quadtree<T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = NodeRef<'a, T, L, K, S>;
    type IntoIter = Iter<'a, T, L, K, S>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
