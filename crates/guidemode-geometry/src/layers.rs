//! The layer stack: an ordered, id-addressed collection of primitives.
//!
//! Sequence order is the compositing z-order: index 0 is bottom-most, the
//! last index top-most. The stack is the system of record for the editing
//! session; a drawing surface holds only [`LayerId`]s and rebuilds its
//! visuals from here. Ids are assigned monotonically and never reused, so a
//! stale id held elsewhere can never silently alias a newer primitive.

use serde::{Deserialize, Serialize};

use crate::error::IndexError;
use crate::primitives::Primitive;

/// Stable identifier of a primitive within a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LayerId(pub u64);

/// A primitive together with its stack-assigned id.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    primitive: Primitive,
}

impl Layer {
    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }
}

/// Ordered collection of primitives defining the cross-section.
///
/// Not serialisable: the stack is live session state, and a decoded copy
/// could violate id uniqueness and monotonicity.
#[derive(Debug, Default)]
pub struct LayerStack {
    layers: Vec<Layer>,
    next_id: u64,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a primitive at the top of the stack, assigning the next unused
    /// id.
    pub fn add(&mut self, primitive: Primitive) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer { id, primitive });
        id
    }

    /// Move the entry at `from` to position `to`, shifting entries between
    /// them. Ids are unchanged. Fails without touching the stack if either
    /// index is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), IndexError> {
        let len = self.layers.len();
        for index in [from, to] {
            if index >= len {
                return Err(IndexError { index, len });
            }
        }
        let layer = self.layers.remove(from);
        self.layers.insert(to, layer);
        Ok(())
    }

    /// Remove the entry at `index`. The freed id is never reassigned. Fails
    /// without touching the stack if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Layer, IndexError> {
        if index >= self.layers.len() {
            return Err(IndexError { index, len: self.layers.len() });
        }
        Ok(self.layers.remove(index))
    }

    /// Bottom-to-top view of the stack.
    pub fn order(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
