use core::fmt;

use alloc::boxed::Box;
use log::trace;

use super::{
    arena::Arena,
    builder::LinkedListBuilder,
    iter::{Iter, LinkedListIter},
    node::{ListNode, NodeRef, SingleLink},
    traits::{Link, NodeWithData},
};

/// Equality callback used by [`LinkedList::search`] and [`LinkedList::remove`].
///
/// Called as `compare(stored, probe)`; `true` means the two are equal.
pub type CompareFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Cleanup callback receiving each element the list releases.
pub type DestroyFn<T> = Box<dyn FnMut(T)>;

const NO_COMPARATOR: &str = "no comparator configured for this list";

/// A generic singly linked list owning its elements.
///
/// Nodes live in an arena and are addressed through [`NodeRef`] handles, so
/// the list never hands out references that could outlive a removal.
pub struct LinkedList<T> {
    head: SingleLink,
    arena: Arena<ListNode<T>>,
    compare: Option<CompareFn<T>>,
    destroy: Option<DestroyFn<T>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list matching elements with `compare`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn new<C>(compare: C) -> Self
    where
        C: Fn(&T, &T) -> bool + 'static,
    {
        LinkedListBuilder::new().compare(compare).build()
    }

    /// Creates a new, empty linked list which passes every released element
    /// to `destroy`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized.
    pub fn with_destroy<C, D>(compare: C, destroy: D) -> Self
    where
        C: Fn(&T, &T) -> bool + 'static,
        D: FnMut(T) + 'static,
    {
        LinkedListBuilder::new()
            .compare(compare)
            .destroy(destroy)
            .build()
    }

    /// Returns a builder for configuring a new list.
    pub fn builder() -> LinkedListBuilder<T> {
        LinkedListBuilder::new()
    }

    pub(crate) fn from_parts(
        capacity: usize,
        compare: Option<CompareFn<T>>,
        destroy: Option<DestroyFn<T>>,
    ) -> Self {
        assert!(core::mem::size_of::<T>() > 0, "element size must be non-zero");
        trace!(
            "new linked list: capacity={}, compare={}, destroy={}",
            capacity,
            compare.is_some(),
            destroy.is_some()
        );
        Self {
            head: SingleLink::default(),
            arena: Arena::with_capacity(capacity),
            compare,
            destroy,
        }
    }

    /// Inserts `value` at the front of the list and returns its node.
    pub fn add_head(&mut self, value: T) -> NodeRef {
        let id = self.arena.insert(ListNode::new(value, self.head.next()));
        self.head.set_next(Some(id));
        id
    }

    /// Inserts `value` right after `target` and returns the new node.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not a live node of this list.
    pub fn add_after(&mut self, target: NodeRef, value: T) -> NodeRef {
        let next = self
            .arena
            .get(target)
            .expect("target node is not part of this list")
            .next();
        let id = self.arena.insert(ListNode::new(value, next));
        if let Some(target) = self.arena.get_mut(target) {
            target.set_next(Some(id));
        }
        id
    }

    /// Get the number of elements in the list
    pub fn count(&self) -> usize {
        self.arena.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.head.next().is_none()
    }

    /// Get the first node of the list
    pub fn head(&self) -> Option<NodeRef> {
        self.head.next()
    }

    /// Get the node following `node`, or `None` at the tail or for a stale handle
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        self.arena.get(node).and_then(|node| node.next())
    }

    /// Get the element stored in `node`
    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.arena.get(node).map(|node| node.data())
    }

    /// Get a mutable reference to the element stored in `node`
    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.arena.get_mut(node).map(|node| node.data_mut())
    }

    /// Returns the first node, counting from the head, whose element
    /// compares equal to `probe`.
    ///
    /// # Panics
    ///
    /// Panics if the list was built without a comparator.
    pub fn search(&self, probe: &T) -> Option<NodeRef> {
        self.find_with_parent(probe).map(|(_, id)| id)
    }

    /// Check whether any element compares equal to `probe`
    pub fn contains(&self, probe: &T) -> bool {
        self.search(probe).is_some()
    }

    /// Calls `f` on every element, head to tail.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            f(value);
        }
    }

    /// Removes the first element comparing equal to `probe`, handing it to
    /// the destroy callback if one is set.
    ///
    /// Returns `false` and leaves the list untouched when nothing matches.
    ///
    /// # Panics
    ///
    /// Panics if the list was built without a comparator.
    pub fn remove(&mut self, probe: &T) -> bool {
        let Some((parent, id)) = self.find_with_parent(probe) else {
            trace!("remove: no matching element among {} nodes", self.count());
            return false;
        };
        if let Some(node) = self.unlink(parent, id) {
            self.release(node);
        }
        true
    }

    /// Unlinks `node` and returns its element to the caller.
    ///
    /// The destroy callback is not invoked since ownership moves to the
    /// caller. Returns `None` for a stale handle.
    pub fn remove_node(&mut self, node: NodeRef) -> Option<T> {
        let parent = self.parent_of(node)?;
        self.unlink(parent, node).map(NodeWithData::into_data)
    }

    /// Pops the head element, returning it without calling the destroy callback.
    pub fn pop_head(&mut self) -> Option<T> {
        let head = self.head.next()?;
        self.unlink(None, head).map(NodeWithData::into_data)
    }

    /// Releases every element, head to tail, leaving the list empty.
    pub fn clear(&mut self) {
        let mut released = 0usize;
        while let Some(head) = self.head.next() {
            match self.unlink(None, head) {
                Some(node) => self.release(node),
                None => break,
            }
            released += 1;
        }
        if released > 0 {
            trace!("released {} nodes", released);
        }
    }

    /// Get an iterator over the elements of the list
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.nodes())
    }

    /// Get an iterator over the node handles of the list
    pub fn nodes(&self) -> LinkedListIter<'_, T> {
        LinkedListIter::new(&self.arena, self.head.next())
    }

    fn find_with_parent(&self, probe: &T) -> Option<(Option<NodeRef>, NodeRef)> {
        let compare = self.compare.as_ref().expect(NO_COMPARATOR);
        let mut parent = None;
        for current in self.nodes() {
            if self
                .arena
                .get(current)
                .is_some_and(|node| compare(node.data(), probe))
            {
                return Some((parent, current));
            }
            parent = Some(current);
        }
        None
    }

    /// Locate the predecessor of `node`: `Some(None)` for the head, `None`
    /// if the node is not in the chain.
    fn parent_of(&self, node: NodeRef) -> Option<Option<NodeRef>> {
        let mut parent = None;
        for current in self.nodes() {
            if current == node {
                return Some(parent);
            }
            parent = Some(current);
        }
        None
    }

    /// Detach `node` from the chain, `parent` being its predecessor or
    /// `None` for the head.
    fn unlink(&mut self, parent: Option<NodeRef>, node: NodeRef) -> Option<ListNode<T>> {
        let removed = self.arena.remove(node)?;
        let parent: &mut dyn Link = match parent {
            Some(parent) => self.arena.get_mut(parent)?,
            None => &mut self.head,
        };
        parent.set_next(removed.next());
        Some(removed)
    }

    fn release(&mut self, node: ListNode<T>) {
        let data = node.into_data();
        match self.destroy.as_mut() {
            Some(destroy) => destroy(data),
            None => drop(data),
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T>
where
    T: PartialEq + 'static,
{
    fn default() -> Self {
        LinkedListBuilder::new().compare_eq().build()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
