//! Fixed-capacity allocation table.
//!
//! [`AllocationTable`] records which tensors currently hold a dynamic
//! allocation, in allocation order. It is an inline array with an explicit
//! length: its footprint is fixed at compile time and it never touches the
//! heap.

use microarena_core::TensorId;

/// Ordered, bounded list of tensors holding a dynamic allocation.
///
/// Entries are kept in address order: new allocations are appended at the
/// current end of the dynamic region, removal shifts later entries down
/// without reordering, and compaction repacks in table order.
#[derive(Clone, Debug)]
pub struct AllocationTable<const M: usize> {
    slots: [Option<TensorId>; M],
    len: usize,
}

impl<const M: usize> AllocationTable<M> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            slots: [None; M],
            len: 0,
        }
    }

    /// Maximum number of entries.
    pub const fn capacity(&self) -> usize {
        M
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the table has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.len == M
    }

    /// Append an entry. Returns `false`, leaving the table unchanged, if
    /// it is full.
    #[must_use]
    pub fn push(&mut self, id: TensorId) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.len] = Some(id);
        self.len += 1;
        true
    }

    /// Position of `id` in the table, if present.
    pub fn position(&self, id: TensorId) -> Option<usize> {
        self.iter().position(|entry| entry == id)
    }

    /// Whether `id` is in the table.
    pub fn contains(&self, id: TensorId) -> bool {
        self.position(id).is_some()
    }

    /// Entry at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<TensorId> {
        if index < self.len {
            self.slots[index]
        } else {
            None
        }
    }

    /// The most recently appended entry.
    pub fn last(&self) -> Option<TensorId> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Remove the entry at `index`, shifting later entries one slot
    /// earlier. Returns `None` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<TensorId> {
        let removed = self.get(index)?;
        self.slots.copy_within(index + 1..self.len, index);
        self.len -= 1;
        self.slots[self.len] = None;
        Some(removed)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.slots = [None; M];
        self.len = 0;
    }

    /// Iterate over entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = TensorId> + '_ {
        self.slots[..self.len].iter().flatten().copied()
    }
}

impl<const M: usize> Default for AllocationTable<M> {
    fn default() -> Self {
        Self::new()
    }
}
