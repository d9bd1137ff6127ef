//! Point quadtrees: trees in which every node stores a point, and that point splits the plane around it into four quadrants, one per child slot.
//!
//! Unlike region quadtrees, which subdivide fixed areas of space, a point quadtree has no bounding region. The shape of the tree depends entirely on the order of insertion: inserting points sorted along both axes produces a chain which only ever descends into one quadrant. No rebalancing is ever performed.
//!
//! The [Wikipedia article] on quadtrees covers their use cases and specifics in more detail.
//!
//! # Example
//! ```rust
//! use quadrille::{Quadtree, Point, Quadrant};
//!
//! // Create the tree. The turbofish there is needed to state that we are using the default
//! // storage method instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = Quadtree::<i32, char>::new();
//!
//! // The first point becomes the root, and every point after it lands in one of its quadrants:
//! tree.insert(Point::new(5, 5), 'A');
//! tree.insert(Point::new(2, 8), 'B');
//! tree.insert(Point::new(8, 8), 'C');
//! tree.insert(Point::new(2, 2), 'D');
//! tree.insert(Point::new(8, 2), 'E');
//! assert_eq!(tree.len(), 5);
//!
//! // Let's look at the structure of the tree.
//! let root = tree.root().unwrap();
//! assert_eq!(root.label(), &'A');
//! let north_west = root.child(Quadrant::NorthWest).unwrap();
//! assert_eq!(north_west.label(), &'D');
//! assert_eq!(north_west.depth(), 1);
//!
//! // Exact-point lookup:
//! assert_eq!(tree.get(2, 8), Some(&'B'));
//! assert_eq!(tree.get(9, 9), None);
//!
//! // Both traversal orders visit every node once:
//! let pre_order: String = tree.iter().map(|node| *node.label()).collect();
//! assert_eq!(pre_order, "ADEBC");
//! let level_order: String = tree.breadth_iter().map(|node| *node.label()).collect();
//! assert_eq!(level_order, "ADEBC");
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Quadtree " "

mod base;
mod breadth;
mod cursor;
mod node;
mod node_ref;

pub use base::Quadtree;
pub use breadth::{BreadthCursor, BreadthIter};
pub use cursor::{Cursor, Iter};
pub use node::Node;
pub use node_ref::NodeRef;


/// A quadtree which uses a `Vec` as backing storage.
///
/// The default `Quadtree` type already uses this, so this is only provided for explicitness and consistency.
pub type VecQuadtree<T, L> = Quadtree<T, L, usize, Vec<Node<T, L, usize>>>;

/// A quadtree which uses a [`SlotMap`] as backing storage.
///
/// [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
#[cfg(feature = "slotmap")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap")))]
pub type SlotMapQuadtree<T, L> = Quadtree<
    T,
    L,
    slotmap::DefaultKey,
    slotmap::SlotMap<slotmap::DefaultKey, Node<T, L, slotmap::DefaultKey>>,
>;
