use alloc::boxed::Box;

use super::list::{CompareFn, DestroyFn, LinkedList};

/// Builder for [`LinkedList`].
///
/// Both callbacks are optional. A list built without a comparator panics
/// when searched or removed from; one built without a destroy callback
/// simply drops released elements.
pub struct LinkedListBuilder<T> {
    capacity: usize,
    compare: Option<CompareFn<T>>,
    destroy: Option<DestroyFn<T>>,
}

impl<T> Default for LinkedListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedListBuilder<T> {
    /// Create a new builder with no callbacks and no preallocated nodes.
    pub fn new() -> Self {
        Self {
            capacity: 0,
            compare: None,
            destroy: None,
        }
    }

    /// Set the number of nodes to preallocate.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the equality callback, called as `compare(stored, probe)`.
    pub fn compare<C>(mut self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> bool + 'static,
    {
        self.compare = Some(Box::new(compare));
        self
    }

    /// Set the callback invoked on each element the list releases.
    pub fn destroy<D>(mut self, destroy: D) -> Self
    where
        D: FnMut(T) + 'static,
    {
        self.destroy = Some(Box::new(destroy));
        self
    }

    /// Build the list.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn build(self) -> LinkedList<T> {
        LinkedList::from_parts(self.capacity, self.compare, self.destroy)
    }
}

impl<T> LinkedListBuilder<T>
where
    T: PartialEq + 'static,
{
    /// Compare elements with `==`.
    pub fn compare_eq(self) -> Self {
        self.compare(|stored: &T, probe: &T| stored == probe)
    }
}
