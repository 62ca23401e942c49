//! A generic singly linked list owning its elements.
//!
//! Nodes are kept in an arena owned by the list and chained through
//! index-based links. Callers address nodes with copyable [`node::NodeRef`]
//! handles, which go stale (rather than dangle) once their node is removed.
//!
//! ## Core Components
//!
//! - [`list::LinkedList`]: the list itself.
//! - [`builder::LinkedListBuilder`]: configures the comparator, destroy callback and capacity.
//! - [`traits`]: `Link` and `NodeWithData`, shared by the list head and its nodes.
//! - [`iter`]: iterators over elements and node handles.
//!
//! ## Contract
//!
//! Misuse panics: a zero-sized element type, searching or removing without a
//! comparator, or inserting after a node that is not in the list. A search
//! or removal that finds nothing is not an error and returns `None`/`false`.
//!
//! # Examples
//!
//! ```
//! use singly_list::linked_list::list::LinkedList;
//!
//! let mut list = LinkedList::<i32>::new(|a, b| a == b);
//! list.add_head(1);
//! list.add_head(2);
//! list.add_head(3);
//!
//! assert_eq!(list.count(), 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//!
//! assert!(list.remove(&2));
//! assert_eq!(list.count(), 2);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 1]);
//!
//! assert!(list.search(&1).is_some());
//! assert!(list.search(&99).is_none());
//! ```

mod arena;

pub mod builder;
pub mod iter;
pub mod list;
pub mod node;
pub mod traits;

#[cfg(test)]
mod tests;
