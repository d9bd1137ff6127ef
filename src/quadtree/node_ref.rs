use core::{
    fmt::Debug,
    ptr,
};
use arrayvec::ArrayVec;
use super::{Quadtree, Node};
use crate::{
    point::{Point, Quadrant},
    storage::{Storage, DefaultStorage},
    util::ArrayMap,
};

/// A reference to a node in a quadtree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, L, K, S = DefaultStorage<Node<T, L, K>>>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a Quadtree<T, L, K, S>,
    key: K,
}
impl<'a, T, L, K, S> NodeRef<'a, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a Quadtree<T, L, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a Quadtree<T, L, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // cannot drop at compile time
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns the tree the node belongs to.
    #[inline(always)]
    pub fn tree(&self) -> &'a Quadtree<T, L, K, S> {
        self.tree
    }
    /// Returns the point stored in the node.
    #[inline(always)]
    pub fn point(&self) -> &'a Point<T> {
        &self.node().point
    }
    /// Returns the label stored in the node.
    #[inline(always)]
    pub fn label(&self) -> &'a L {
        &self.node().label
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.as_ref().map(|x| unsafe {
            // SAFETY: nodes can never have out-of-bounds parents
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    /// Returns the root of the tree the node is in, walking up through the parents.
    #[inline]
    pub fn root(&self) -> Self {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. all four of its child slots are empty; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    /// Returns the number of parent hops between the node and the root. The root itself has depth 0.
    ///
    /// Takes time proportional to the depth.
    #[inline]
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
            depth += 1;
        }
        depth
    }
    /// Returns the slot of the parent node which the node occupies, or `None` if it's the root node.
    #[inline]
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.parent().map(|parent| unsafe {
            // SAFETY: the parent link always mirrors a child link
            parent.node().slot_of(&self.key)
        })
    }

    /// Returns references to the children in slot order, with `None` for empty slots.
    #[inline]
    pub fn children(&self) -> [Option<Self>; 4] {
        self.node().children.array_map_by_ref(|child| {
            child.as_ref().map(|child| unsafe {
                // SAFETY: child keys are guaranteed to be valid
                Self::new_raw_unchecked(self.tree, child.clone())
            })
        })
    }
    /// Returns references to the children which exist, in slot order.
    #[inline]
    pub fn existing_children(&self) -> ArrayVec<[Self; 4]> {
        let mut children = ArrayVec::new();
        for child in self.node().children.iter().flatten() {
            children.push(unsafe {
                // SAFETY: as above
                Self::new_raw_unchecked(self.tree, child.clone())
            });
        }
        children
    }
    /// Returns a reference to the child in the specified quadrant, or `None` if the slot is empty.
    #[inline]
    pub fn child(&self, quadrant: Quadrant) -> Option<Self> {
        self.node().child(quadrant).map(|child| unsafe {
            // SAFETY: as above
            Self::new_raw_unchecked(self.tree, child.clone())
        })
    }
    /// Returns a reference to the child in the `n`-th slot, or `None` if that slot is empty. Indexing starts from zero, thus the value is in range from 0 to 3.
    ///
    /// # Panics
    /// Will panic if `n > 3`.
    #[inline]
    pub fn nth_child(&self, n: u8) -> Option<Self> {
        let quadrant = Quadrant::from_index(n as usize);
        assert!(
            quadrant.is_some(),
            "\
quadtree nodes have 4 child slots, at indices \
from 0 to 3, but child at index {} was requested",
            n,
        );
        quadrant.and_then(|quadrant| self.child(quadrant))
    }

    #[inline(always)]
    pub(super) fn node(&self) -> &'a Node<T, L, K> {
        self.tree.node(&self.key)
    }
}
impl<T, L, K, S> Copy for NodeRef<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, L, K, S> Clone for NodeRef<'_, T, L, K, S>
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
/// Node references compare by identity: two references are equal if they point to the same node of the same tree.
impl<T, L, K, S> PartialEq for NodeRef<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.key == other.key
    }
}
impl<T, L, K, S> Eq for NodeRef<'_, T, L, K, S>
where
    S: Storage<Element = Node<T, L, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
