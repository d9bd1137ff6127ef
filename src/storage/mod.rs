//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the arena which owns every node of a tree
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified
//!
//! Nodes never leave the storage once added: quadtrees only grow, and dropping the tree frees the whole arena in a single pass.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod vec_impl;

#[cfg(feature = "slotmap")]
mod slotmap_impl;

use core::fmt::Debug;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// # Safety
/// There's a number of invariants which have to be followed by the container:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - it should be impossible for the length of the storage to overflow `usize`;
/// - Calling [`get_unchecked`] or [`get_unchecked_mut`] if `contains_key` on the same key returns `true` should *not* cause undefined behavior;
/// - A key returned by `add` must stay valid, and keep referring to the same element, for as long as the storage lives;
/// - Cloning the storage must produce a storage in which every key of the original refers to a clone of the same element.
///
/// Tree structures rely on those invariants for safety.
///
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the storage, without checking for presence of the key inside the collection.
    ///
    /// # Safety
    /// If the element at the specified key is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element;
    /// Returns a *mutable* reference to the specified element in the storage, without checking for presence of the key inside the collection.
    ///
    /// # Safety
    /// If the element at the specified key is not present in the storage, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element;
    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    ///
    /// If this method returned `true`, calling `get_unchecked`/`get_unchecked_mut` on the same key is guaranteed to be safe.
    fn contains_key(&self, key: &Self::Key) -> bool;

    /// Returns a reference to the specified element in the collection, or `None` if the key is not present in the storage.
    #[inline]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: we just checked for key presence
                self.get_unchecked(key)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the key is not present in the storage.
    #[inline]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        if self.contains_key(key) {
            Some(unsafe {
                // SAFETY: we just checked for key presence
                self.get_unchecked_mut(key)
            })
        } else {
            None
        }
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// The default implementation returns the length.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements. Does nothing if capacity is already sufficient.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        let _ = additional;
    }
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is a plain [`Vec`], addressed by `usize` indices. Since quadtrees never remove nodes, the storage never develops holes and needs no sparse wrapper.
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
pub type DefaultStorage<T> = Vec<T>;
