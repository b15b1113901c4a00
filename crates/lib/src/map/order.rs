//! Arena-backed doubly-linked list that records insertion order.
//!
//! Entries live in a `Vec` of slots and link to each other through
//! [`Handle`]s (slot indices) instead of pointers. Removing an entry unlinks
//! its slot in O(1) and pushes it onto a free list, so the next insertion
//! reuses it without shifting any other entry.

use std::mem;

/// Stable identifier for a slot in an [`OrderList`].
///
/// A handle stays valid until the entry it names is unlinked or the list is
/// cleared. Handles are never exposed outside the crate.
pub(crate) type Handle = usize;

/// A live entry together with its neighbours in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    prev: Option<Handle>,
    next: Option<Handle>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn next(&self) -> Option<Handle> {
        self.next
    }

    pub(crate) fn prev(&self) -> Option<Handle> {
        self.prev
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant { next_free: Option<Handle> },
}

impl<K, V> Slot<K, V> {
    pub(crate) fn node(&self) -> Option<&Node<K, V>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    fn node_mut(&mut self) -> Option<&mut Node<K, V>> {
        match self {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }
}

/// Insertion-ordered sequence of `(K, V)` pairs stored in an arena.
#[derive(Debug, Clone)]
pub(crate) struct OrderList<K, V> {
    slots: Vec<Slot<K, V>>,
    head: Option<Handle>,
    tail: Option<Handle>,
    free: Option<Handle>,
    len: usize,
}

impl<K, V> OrderList<K, V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn head(&self) -> Option<Handle> {
        self.head
    }

    pub(crate) fn tail(&self) -> Option<Handle> {
        self.tail
    }

    pub(crate) fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    pub(crate) fn node(&self, handle: Handle) -> Option<&Node<K, V>> {
        self.slots.get(handle).and_then(Slot::node)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> Option<&mut Node<K, V>> {
        self.slots.get_mut(handle).and_then(Slot::node_mut)
    }

    /// Append an entry at the tail and return the handle of its slot.
    pub(crate) fn push_back(&mut self, key: K, value: V) -> Handle {
        let node = Node {
            key,
            value,
            prev: self.tail,
            next: None,
        };

        let handle = match self.free {
            Some(handle) => {
                let reused = mem::replace(&mut self.slots[handle], Slot::Occupied(node));
                self.free = match reused {
                    Slot::Vacant { next_free } => next_free,
                    // The free list only ever threads through vacant slots.
                    Slot::Occupied(_) => None,
                };
                handle
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.node_mut(tail)) {
            Some(old_tail) => old_tail.next = Some(handle),
            None => self.head = Some(handle),
        }
        self.tail = Some(handle);
        self.len += 1;
        handle
    }

    /// Unlink the entry at `handle` and return it.
    ///
    /// Returns `None` if the slot is already vacant or out of range.
    pub(crate) fn unlink(&mut self, handle: Handle) -> Option<(K, V)> {
        let slot = self.slots.get_mut(handle)?;
        if slot.node().is_none() {
            return None;
        }
        let vacated = mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free,
            },
        );
        let Slot::Occupied(node) = vacated else {
            return None;
        };
        self.free = Some(handle);

        match node.prev.and_then(|prev| self.node_mut(prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.node_mut(next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        Some((node.key, node.value))
    }

    /// Abandon every slot and start over with an empty arena.
    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn into_slots(self) -> (Vec<Slot<K, V>>, Option<Handle>, usize) {
        (self.slots, self.head, self.len)
    }
}

impl<K, V> Default for OrderList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
