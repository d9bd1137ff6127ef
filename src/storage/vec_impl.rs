use super::Storage;

unsafe impl<T> Storage for Vec<T> {
    type Key = usize;
    type Element = T;

    #[inline]
    fn add(&mut self, element: Self::Element) -> usize {
        self.push(element);
        self.len() - 1
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: &usize) -> &Self::Element {
        (**self).get_unchecked(*index)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: &usize) -> &mut Self::Element {
        (**self).get_unchecked_mut(*index)
    }
    #[inline(always)]
    fn contains_key(&self, index: &usize) -> bool {
        *index < self.len()
    }

    #[inline(always)]
    fn get(&self, index: &usize) -> Option<&Self::Element> {
        (**self).get(*index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: &usize) -> Option<&mut Self::Element> {
        (**self).get_mut(*index)
    }
    #[inline(always)]
    fn new() -> Self {
        Self::new()
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

#[cfg(test)]
mod tests {
    use super::Storage;

    #[test]
    fn keys_are_stable_indices() {
        let mut storage: Vec<char> = Storage::new();
        let a = Storage::add(&mut storage, 'a');
        let b = Storage::add(&mut storage, 'b');
        assert_eq!((a, b), (0, 1));
        assert!(Storage::contains_key(&storage, &b));
        assert!(!Storage::contains_key(&storage, &2));
        assert_eq!(Storage::get(&storage, &a), Some(&'a'));
    }
}
