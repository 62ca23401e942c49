use singly_list_derive::Node;

/// A handle to a node in a [`LinkedList`](super::list::LinkedList).
///
/// Handles are cheap to copy and never borrow the list. Once the node they
/// point at is removed the handle goes stale: lookups return `None` and
/// insertions after it panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    index: usize,
    generation: u32,
}

impl NodeRef {
    #[inline]
    pub(crate) const fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub(crate) const fn generation(self) -> u32 {
        self.generation
    }
}

/// A link in a singly linked list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLink {
    next: Option<NodeRef>,
}

impl SingleLink {
    pub const fn new(next: Option<NodeRef>) -> Self {
        Self { next }
    }
}

impl super::traits::Link for SingleLink {
    #[inline]
    fn next(&self) -> Option<NodeRef> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NodeRef>) {
        self.next = next;
    }
}

/// A node in a singly linked list, owning one element.
#[derive(Debug, Node)]
#[node(crate_path = "crate")]
pub(crate) struct ListNode<T> {
    link: SingleLink,
    data: T,
}

impl<T> ListNode<T> {
    pub(crate) const fn new(data: T, next: Option<NodeRef>) -> Self {
        Self {
            link: SingleLink::new(next),
            data,
        }
    }
}
