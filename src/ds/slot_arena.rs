//! Slot arena with stable integer handles.
//!
//! Values live in a `Vec` of slots. A freed slot joins a singly linked free
//! chain threaded through the vacant slots themselves, so `insert` reuses it
//! in O(1) without a side allocation.
//!
//! ```text
//!   slots:  [ Occupied(A) | Vacant(next: 3) | Occupied(B) | Vacant(next: -) ]
//!                                ▲
//!   free_head ───────────────────┘
//! ```
//!
//! A [`SlotId`] stays valid until its slot is removed. After removal the same
//! index may be handed out again, so callers must drop ids they have removed.

/// Stable handle to a slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

/// Arena that hands out [`SlotId`]s for inserted values.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an arena with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a vacant slot if any.
    pub fn insert(&mut self, value: T) -> SlotId {
        let reusable = self.free_head.and_then(|idx| match self.slots[idx] {
            Slot::Vacant { next_free } => Some((idx, next_free)),
            Slot::Occupied(_) => None,
        });
        let idx = match reusable {
            Some((idx, next_free)) => {
                self.free_head = next_free;
                self.slots[idx] = Slot::Occupied(value);
                idx
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Frees the slot and returns its value; `None` for stale ids.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        let Slot::Occupied(value) = std::mem::replace(slot, vacant) else {
            return None;
        };
        self.free_head = Some(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value. Allocated storage is kept for reuse.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Iterates occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| match slot {
                Slot::Occupied(value) => Some((SlotId(idx), value)),
                Slot::Vacant { .. } => None,
            })
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));
        assert_eq!(arena.get(a), None);
    }

    #[test]
    fn freed_slots_are_reused_lifo() {
        let mut arena = SlotArena::new();
        let ids: Vec<_> = (0..4).map(|i| arena.insert(i)).collect();
        arena.remove(ids[1]);
        arena.remove(ids[3]);

        let reused = arena.insert(10);
        assert_eq!(reused.index(), ids[3].index());
        let reused = arena.insert(11);
        assert_eq!(reused.index(), ids[1].index());

        let fresh = arena.insert(12);
        assert_eq!(fresh.index(), 4);
        assert_eq!(arena.len(), 5);
    }

    #[test]
    fn double_remove_is_rejected() {
        let mut arena = SlotArena::new();
        let id = arena.insert(1);
        assert_eq!(arena.remove(id), Some(1));
        assert_eq!(arena.remove(id), None);
        assert_eq!(arena.len(), 0);

        // The free chain must not contain the slot twice.
        let x = arena.insert(2);
        let y = arena.insert(3);
        assert_ne!(x, y);
    }

    #[test]
    fn out_of_range_ids_are_absent() {
        let mut arena: SlotArena<u8> = SlotArena::new();
        assert_eq!(arena.get(SlotId(7)), None);
        assert_eq!(arena.get_mut(SlotId(7)), None);
        assert_eq!(arena.remove(SlotId(7)), None);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = SlotArena::with_capacity(2);
        let id = arena.insert(String::from("old"));
        if let Some(value) = arena.get_mut(id) {
            value.push_str("-new");
        }
        assert_eq!(arena.get(id).map(String::as_str), Some("old-new"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut arena = SlotArena::new();
        let first = arena.insert(1);
        arena.insert(2);
        arena.remove(first);
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.iter().count(), 0);
        assert_eq!(arena.insert(3).index(), 0);
    }

    #[test]
    fn iter_skips_vacant_slots() {
        let mut arena = SlotArena::new();
        let a = arena.insert('a');
        let b = arena.insert('b');
        let c = arena.insert('c');
        arena.remove(b);

        let seen: Vec<_> = arena.iter().collect();
        assert_eq!(seen, vec![(a, &'a'), (c, &'c')]);
    }
}
