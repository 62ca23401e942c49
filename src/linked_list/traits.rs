use super::node::NodeRef;

/// A trait for a link in a singly linked list.
///
/// Both the list head and every node implement it, so unlinking a node only
/// needs a `&mut dyn Link` to its predecessor.
pub trait Link {
    /// Get the next node in the linked list
    fn next(&self) -> Option<NodeRef>;

    /// Set the next node in the linked list
    fn set_next(&mut self, next: Option<NodeRef>);
}

/// A trait for a node that owns an element.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;

    /// Consume the node, handing back its data
    fn into_data(self) -> Self::Data;
}
