//! Identifiers and simple allocators for document nodes and running sequences.

use serde::{Deserialize, Serialize};

/// Opaque handle to an element known to a `DocumentSurface`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Handle to a sequence handed to an `AnimationEngine`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SequenceId(pub u32);

/// Monotonic allocator for NodeId and SequenceId.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_node: u32,
    next_sequence: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_node(&mut self) -> NodeId {
        let id = NodeId(self.next_node);
        self.next_node = self.next_node.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_sequence(&mut self) -> SequenceId {
        let id = SequenceId(self.next_sequence);
        self.next_sequence = self.next_sequence.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_node(), NodeId(0));
        assert_eq!(alloc.alloc_node(), NodeId(1));
        assert_eq!(alloc.alloc_sequence(), SequenceId(0));
        assert_eq!(alloc.alloc_sequence(), SequenceId(1));
        alloc.reset();
        assert_eq!(alloc.alloc_node(), NodeId(0));
    }
}
