use alloc::vec::Vec;

use super::node::NodeRef;

enum Slot<N> {
    Occupied { generation: u32, node: N },
    Vacant { generation: u32, next_free: Option<usize> },
}

/// Slot storage owning every node of a list.
///
/// Vacant slots are chained into a free list and reused by `insert`. Each
/// removal bumps the slot generation so handles to the old node stop
/// resolving.
pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<usize>,
    len: usize,
}

impl<N> Arena<N> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    pub(crate) fn insert(&mut self, node: N) -> NodeRef {
        self.len += 1;
        if let Some(index) = self.free {
            if let Slot::Vacant { generation, next_free } = self.slots[index] {
                self.free = next_free;
                self.slots[index] = Slot::Occupied { generation, node };
                return NodeRef::new(index, generation);
            }
            unreachable!("free list points at an occupied slot")
        }

        let index = self.slots.len();
        self.slots.push(Slot::Occupied { generation: 0, node });
        NodeRef::new(index, 0)
    }

    pub(crate) fn remove(&mut self, id: NodeRef) -> Option<N> {
        let slot = self.slots.get_mut(id.index())?;
        let generation = match &*slot {
            Slot::Occupied { generation, .. } if *generation == id.generation() => *generation,
            _ => return None,
        };

        let vacant = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next_free: self.free,
        };
        match core::mem::replace(slot, vacant) {
            Slot::Occupied { node, .. } => {
                self.free = Some(id.index());
                self.len -= 1;
                Some(node)
            }
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    pub(crate) fn get(&self, id: NodeRef) -> Option<&N> {
        match self.slots.get(id.index())? {
            Slot::Occupied { generation, node } if *generation == id.generation() => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeRef) -> Option<&mut N> {
        match self.slots.get_mut(id.index())? {
            Slot::Occupied { generation, node } if *generation == id.generation() => Some(node),
            _ => None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
