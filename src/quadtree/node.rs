use core::fmt::Debug;
use crate::{
    point::{Point, Quadrant},
    util::unreachable_debugchecked,
};

/// A node of a quadtree.
///
/// Created by the quadtree internally and only publicly exposed so that quadtree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, L, K>
where K: Clone + Debug + Eq,
{
    pub(super) point: Point<T>,
    pub(super) label: L,
    pub(super) children: [Option<K>; 4],
    pub(super) parent: Option<K>,
}
impl<T, L, K> Node<T, L, K>
where K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) fn leaf(point: Point<T>, label: L, parent: Option<K>) -> Self {
        Self {
            point,
            label,
            children: [None, None, None, None],
            parent,
        }
    }
    /// Creates a root node.
    #[inline(always)]
    pub(super) fn root(point: Point<T>, label: L) -> Self {
        Self::leaf(point, label, None)
    }
    #[inline(always)]
    pub(super) fn child(&self, quadrant: Quadrant) -> Option<&K> {
        self.children[quadrant.index()].as_ref()
    }
    /// Returns the first existing child in a slot after `after`, or the first existing child at all if `after` is `None`.
    #[inline]
    pub(super) fn next_child_after(&self, after: Option<Quadrant>) -> Option<&K> {
        let start = after.map_or(0, |q| q.index() + 1);
        self.children
            .get(start..)
            .and_then(|slots| slots.iter().flatten().next())
    }
    /// Returns the slot in which the node with the specified key sits.
    ///
    /// # Safety
    /// `child` must be one of this node's children.
    #[inline]
    pub(super) unsafe fn slot_of(&self, child: &K) -> Quadrant {
        for quadrant in &Quadrant::ALL {
            if self.children[quadrant.index()].as_ref() == Some(child) {
                return *quadrant;
            }
        }
        unreachable_debugchecked("failed to find node in parent's child list")
    }
    #[inline]
    pub(super) fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }
}
