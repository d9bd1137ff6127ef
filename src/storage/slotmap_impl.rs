use core::fmt::Debug;
use slotmap::{SlotMap, DenseSlotMap, Key};
use super::Storage;

unsafe impl<K, V> Storage for SlotMap<K, V>
where
    K: Key + Debug + Eq,
{
    type Key = K;
    type Element = V;
    // Slotmap keys are Copy, so the keys fed into those methods are simply dereferenced
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> Self::Key {
        self.insert(element)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element {
        self.get_unchecked(*key)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element {
        self.get_unchecked_mut(*key)
    }
    #[inline(always)]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.contains_key(*key)
    }
    #[inline(always)]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        self.get(*key)
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        self.get_mut(*key)
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}

unsafe impl<K, V> Storage for DenseSlotMap<K, V>
where
    K: Key + Debug + Eq,
{
    type Key = K;
    type Element = V;
    // Same as above
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> Self::Key {
        self.insert(element)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_key(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element {
        self.get_unchecked(*key)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element {
        self.get_unchecked_mut(*key)
    }
    #[inline(always)]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.contains_key(*key)
    }
    #[inline(always)]
    fn get(&self, key: &Self::Key) -> Option<&Self::Element> {
        self.get(*key)
    }
    #[inline(always)]
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element> {
        self.get_mut(*key)
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        self.reserve(additional)
    }
}
