//! Doubly linked recency list backed by a [`SlotArena`].
//!
//! Nodes live in arena slots and link to each other by [`SlotId`], so a node
//! can be unlinked and relinked in O(1) without touching any other handle.
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬──────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }               │
//!   ├────────┼──────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None,   next: id_2 }   │
//!   │ id_2   │ { value: B, prev: id_1,   next: id_3 }   │
//!   │ id_3   │ { value: C, prev: id_2,   next: None }   │
//!   └────────┴──────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//!           (MRU)                    (LRU)
//! ```
//!
//! Every operation that rewrites links takes `&mut self`, so no iterator can
//! observe the order changing under it.

use std::iter::FusedIterator;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Recency-ordered list; front is most recently used, back least.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is a live node of this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Value at the front (MRU).
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Value at the back (LRU).
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Inserts `value` at the front and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.link_front(id);
        id
    }

    /// Removes and returns the back (LRU) value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Unlinks `id` and returns its value; `None` if `id` is stale.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.arena.contains(id) {
            return None;
        }
        self.unlink(id);
        self.arena.remove(id).map(|node| node.value)
    }

    /// Moves `id` to the front. Returns `false` if `id` is not in the list.
    ///
    /// The node keeps its `SlotId`.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head != Some(id) {
            self.unlink(id);
            self.link_front(id);
        }
        true
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Values from front (MRU) to back (LRU).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// `(SlotId, &T)` pairs from front to back.
    pub fn iter_entries(&self) -> EntryIter<'_, T> {
        EntryIter {
            list: self,
            current: self.head,
            remaining: self.len(),
        }
    }

    /// Walks the list and checks link symmetry, termination and length.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let (head, tail) = (self.head, self.tail);
        if head.is_none() || tail.is_none() {
            if head.is_some() || tail.is_some() || !self.is_empty() {
                return Err(InvariantError::new(format!(
                    "head {head:?} / tail {tail:?} disagree with len {}",
                    self.len()
                )));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut prev = None;
        let mut current = head;
        while let Some(id) = current {
            count += 1;
            if count > self.len() {
                return Err(InvariantError::new(format!(
                    "walked {count} nodes but len is {}; cycle suspected",
                    self.len()
                )));
            }
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale SlotId {id:?} in list")))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node {id:?} has prev {:?}, expected {prev:?}",
                    node.prev
                )));
            }
            prev = Some(id);
            current = node.next;
        }

        if prev != tail {
            return Err(InvariantError::new(format!(
                "list ends at {prev:?} but tail is {tail:?}"
            )));
        }
        if count != self.len() {
            return Err(InvariantError::new(format!(
                "walked {count} nodes but len is {}",
                self.len()
            )));
        }
        Ok(())
    }

    // Callers check `contains(id)` first; a vacant `id` leaves the list as is.
    fn unlink(&mut self, id: SlotId) {
        let Some((prev, next)) = self.arena.get(id).map(|node| (node.prev, node.next)) else {
            return;
        };

        match prev.and_then(|prev| self.arena.get_mut(prev)) {
            Some(prev_node) => prev_node.next = next,
            None => self.head = next,
        }
        match next.and_then(|next| self.arena.get_mut(next)) {
            Some(next_node) => next_node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;
        let Some(node) = self.arena.get_mut(id) else {
            return;
        };
        node.prev = None;
        node.next = old_head;

        match old_head.and_then(|head| self.arena.get_mut(head)) {
            Some(head_node) => head_node.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over list values from front to back.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current.take()?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `(SlotId, &T)` from front to back.
pub struct EntryIter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for EntryIter<'a, T> {
    type Item = (SlotId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current.take()?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((id, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for EntryIter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for EntryIter<'_, T> {}
