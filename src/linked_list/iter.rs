use core::iter::FusedIterator;

use super::{
    arena::Arena,
    node::{ListNode, NodeRef},
    traits::{Link, NodeWithData},
};

/// An iterator over the node handles of a linked list, head to tail.
pub struct LinkedListIter<'a, T> {
    arena: &'a Arena<ListNode<T>>,
    current: Option<NodeRef>,
}

impl<'a, T> LinkedListIter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<ListNode<T>>, head: Option<NodeRef>) -> Self {
        Self {
            arena,
            current: head,
        }
    }
}

impl<T> Iterator for LinkedListIter<'_, T> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = self.arena.get(*current).and_then(|node| node.next());
        })
    }
}

impl<T> FusedIterator for LinkedListIter<'_, T> {}

/// An iterator over the elements of a linked list, head to tail.
pub struct Iter<'a, T> {
    nodes: LinkedListIter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(nodes: LinkedListIter<'a, T>) -> Self {
        Self { nodes }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.nodes.arena;
        self.nodes
            .next()
            .and_then(|id| arena.get(id))
            .map(|node| node.data())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
