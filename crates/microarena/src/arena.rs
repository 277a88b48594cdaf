//! Dual-ended tensor arena with lazy compaction.
//!
//! [`TensorArena`] manages one caller-supplied byte buffer through two
//! cursors that converge from opposite ends:
//!
//! ```text
//! 0            front              back              C
//! | dynamic ... |      free        | ... static      |
//! ```
//!
//! Dynamic allocations are packed upwards from offset 0 in allocation
//! order. Removing one from the middle leaves a gap that is not reclaimed
//! until the next compaction, which runs lazily at the start of the next
//! [`allocate`](TensorArena::allocate) (or when [`compact`](TensorArena::compact)
//! is called). Static allocations are carved downwards from the top and
//! are permanent.
//!
//! Tensor descriptors are owned by the caller and passed in as a slice on
//! every call that may read or rewrite them. The arena only stores
//! [`TensorId`]s.

use microarena_core::{ErrorReporter, TensorDescriptor, TensorId};

use crate::align::{align_down, checked_align_up};
use crate::config::{ArenaConfig, BUFFER_ALIGNMENT, DEFAULT_MAX_ALLOCATED_TENSORS};
use crate::error::ArenaError;
use crate::mover::move_bytes;
use crate::region::StaticRegion;
use crate::reporter::TracingReporter;
use crate::table::AllocationTable;
use crate::type_size::{report, tensor_byte_size};

/// Point-in-time occupancy figures for an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArenaStats {
    /// Total buffer size in bytes.
    pub capacity: usize,
    /// Bytes below `front`, including alignment padding and any gaps
    /// awaiting compaction.
    pub dynamic_bytes: usize,
    /// Bytes at or above `back`.
    pub static_bytes: usize,
    /// Bytes between the cursors.
    pub free_bytes: usize,
    /// Number of tensors holding a dynamic allocation.
    pub allocated_tensors: usize,
    /// Whether the next allocation will compact first.
    pub needs_compaction: bool,
}

/// Fixed-capacity, dual-ended arena over a caller-owned buffer.
///
/// `R` receives a diagnostic for every failure; `M` bounds the number of
/// concurrently live dynamic allocations.
///
/// Data offsets written into descriptors are relative to the start of the
/// buffer. Any call that can compact (allocate, compact) may rewrite the
/// offset of every live tensor, so callers must re-read a descriptor's
/// `data` after each such call.
pub struct TensorArena<
    'buf,
    R: ErrorReporter = TracingReporter,
    const M: usize = DEFAULT_MAX_ALLOCATED_TENSORS,
> {
    buffer: &'buf mut [u8],
    /// End of the dynamic region.
    front: usize,
    /// Start of the static region.
    back: usize,
    table: AllocationTable<M>,
    needs_compaction: bool,
    config: ArenaConfig,
    reporter: R,
}

impl<'buf> TensorArena<'buf> {
    /// Create an arena over `buffer` that reports through `tracing`.
    pub fn new(buffer: &'buf mut [u8]) -> Self {
        Self::with_config(buffer, ArenaConfig::default(), TracingReporter)
    }
}

impl<'buf, R: ErrorReporter> TensorArena<'buf, R> {
    /// Create an arena over `buffer` with a custom diagnostics sink.
    pub fn with_reporter(buffer: &'buf mut [u8], reporter: R) -> Self {
        Self::with_config(buffer, ArenaConfig::default(), reporter)
    }
}

impl<'buf, R: ErrorReporter, const M: usize> TensorArena<'buf, R, M> {
    /// Create an arena with explicit configuration and table capacity.
    ///
    /// The whole buffer starts out free. Its base should be aligned to
    /// [`BUFFER_ALIGNMENT`]; offsets are aligned relative to the base, so
    /// a misaligned base yields misaligned element access.
    pub fn with_config(buffer: &'buf mut [u8], config: ArenaConfig, reporter: R) -> Self {
        let capacity = buffer.len();
        if (buffer.as_ptr() as usize) % BUFFER_ALIGNMENT != 0 {
            tracing::warn!(
                target: "microarena",
                capacity,
                "arena buffer base is not {BUFFER_ALIGNMENT}-byte aligned"
            );
        }
        tracing::trace!(target: "microarena", capacity, max_tensors = M, "arena created");
        Self {
            buffer,
            front: 0,
            back: capacity,
            table: AllocationTable::new(),
            needs_compaction: false,
            config,
            reporter,
        }
    }

    /// Place `tensors[id]` at the low end of the free space.
    ///
    /// Compacts first if a previous deallocation left a gap. On success
    /// the descriptor's `data` holds the new offset, which is also
    /// returned. On failure nothing is placed: the table, `front`, and the
    /// descriptor are untouched (apart from any compaction that ran).
    pub fn allocate(
        &mut self,
        tensors: &mut [TensorDescriptor],
        id: TensorId,
    ) -> Result<usize, ArenaError> {
        if self.needs_compaction {
            self.compact(tensors)?;
        }

        if self.table.is_full() {
            return Err(self.fail(ArenaError::CapacityExceeded { max: M }));
        }

        let tensor = self.descriptor(tensors, id)?;
        if self.table.contains(id) {
            return Err(self.fail(ArenaError::AlreadyAllocated {
                name: tensor.name.clone(),
            }));
        }
        let (bytes, type_size) = tensor_byte_size(tensor, &mut self.reporter)?;

        let start = checked_align_up(self.front, type_size).unwrap_or(usize::MAX);
        let end = match start.checked_add(bytes) {
            Some(end) if end <= self.back => end,
            _ => {
                let available = self.back.saturating_sub(start);
                let name = tensor.name.clone();
                return Err(self.fail(ArenaError::OutOfMemory {
                    name,
                    requested: bytes,
                    available,
                }));
            }
        };

        if !self.table.push(id) {
            return Err(self.fail(ArenaError::CapacityExceeded { max: M }));
        }
        if self.config.zero_fill {
            self.buffer[start..end].fill(0);
        }
        tensors[id.index()].data = Some(start);
        self.front = end;
        self.debug_check_invariants();
        Ok(start)
    }

    /// Release the dynamic allocation held by `tensors[id]`.
    ///
    /// Removing any entry but the most recent leaves a gap, which is
    /// closed by the next compaction. The descriptor's `data` is cleared.
    pub fn deallocate(
        &mut self,
        tensors: &mut [TensorDescriptor],
        id: TensorId,
    ) -> Result<(), ArenaError> {
        let Some(index) = self.table.position(id) else {
            let name = tensors
                .get(id.index())
                .map(|t| t.name.clone())
                .unwrap_or_else(|| format!("#{id}"));
            return Err(self.fail(ArenaError::NotAllocated { name }));
        };
        self.descriptor(tensors, id)?;

        let was_last = index + 1 == self.table.len();
        self.table.remove(index);
        if !was_last {
            self.needs_compaction = true;
        } else if self.config.reclaim_trailing {
            self.retract_front(tensors);
        }

        tensors[id.index()].data = None;
        self.debug_check_invariants();
        Ok(())
    }

    /// Repack every live dynamic allocation contiguously from offset 0,
    /// in table order.
    ///
    /// Each tensor lands at its running offset rounded up to its element
    /// width. Bytes are moved only when the offset changes. The static
    /// region and the table order are never touched.
    ///
    /// The new layout is planned before any byte moves. If an entry's type
    /// can no longer be resolved, or a caller-grown entry no longer fits
    /// below `back`, compaction fails with nothing moved and stays
    /// pending.
    ///
    /// # Panics
    ///
    /// Panics if a live descriptor was rewritten by the caller so that its
    /// current region lies outside the buffer.
    pub fn compact(&mut self, tensors: &mut [TensorDescriptor]) -> Result<(), ArenaError> {
        let previous_front = self.front;

        let mut running = 0usize;
        for slot in 0..self.table.len() {
            let Some(id) = self.table.get(slot) else {
                break;
            };
            let (target, bytes) = self.place_compacted(tensors, id, running)?;
            running = target + bytes;
        }

        let mut running = 0usize;
        let mut moved = 0usize;
        for slot in 0..self.table.len() {
            let Some(id) = self.table.get(slot) else {
                break;
            };
            let (target, bytes) = self.place_compacted(tensors, id, running)?;
            let tensor = &mut tensors[id.index()];
            if tensor.data != Some(target) {
                if let Some(src) = tensor.data {
                    move_bytes(self.buffer, target, src, bytes);
                    moved += 1;
                }
                tensor.data = Some(target);
            }
            running = target + bytes;
        }

        self.front = running;
        self.needs_compaction = false;
        self.debug_check_invariants();
        tracing::debug!(
            target: "microarena",
            tensors = self.table.len(),
            moved,
            reclaimed = previous_front.saturating_sub(running),
            "compacted dynamic region"
        );
        Ok(())
    }

    /// Permanently reserve `size` bytes at the high end of the free space,
    /// starting on a multiple of `alignment`.
    ///
    /// The region is never moved or reclaimed. Fails with
    /// [`ArenaError::OutOfMemory`], leaving `back` unchanged, if it would
    /// overlap the dynamic region, and with
    /// [`ArenaError::ZeroSizedStatic`] if `size` is zero.
    pub fn allocate_static(
        &mut self,
        size: usize,
        alignment: usize,
    ) -> Result<StaticRegion, ArenaError> {
        if size == 0 {
            return Err(self.fail(ArenaError::ZeroSizedStatic { alignment }));
        }
        let candidate = self
            .back
            .checked_sub(size)
            .map(|top| align_down(top, alignment))
            .filter(|&start| start >= self.front);
        let Some(start) = candidate else {
            let available = self.back - self.front;
            return Err(self.fail(ArenaError::OutOfMemory {
                name: "static".to_string(),
                requested: size,
                available,
            }));
        };

        if self.config.zero_fill {
            self.buffer[start..start + size].fill(0);
        }
        self.back = start;
        self.debug_check_invariants();
        tracing::trace!(target: "microarena", offset = start, size, alignment, "static allocation");
        Ok(StaticRegion::new(start, size))
    }

    /// Release every dynamic allocation at once and clear the affected
    /// descriptors. Static regions are kept.
    pub fn reset_dynamic(&mut self, tensors: &mut [TensorDescriptor]) {
        for id in self.table.iter() {
            if let Some(tensor) = tensors.get_mut(id.index()) {
                tensor.data = None;
            }
        }
        self.table.clear();
        self.front = 0;
        self.needs_compaction = false;
    }

    /// Bytes committed to either region: `capacity - (back - front)`.
    pub fn used_bytes(&self) -> usize {
        self.capacity() - (self.back - self.front)
    }

    /// Bytes between the cursors.
    pub fn free_bytes(&self) -> usize {
        self.back - self.front
    }

    /// Bytes below `front`.
    pub fn dynamic_bytes(&self) -> usize {
        self.front
    }

    /// Bytes at or above `back`.
    pub fn static_bytes(&self) -> usize {
        self.capacity() - self.back
    }

    /// Total buffer size in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Current end of the dynamic region.
    pub fn front(&self) -> usize {
        self.front
    }

    /// Current start of the static region.
    pub fn back(&self) -> usize {
        self.back
    }

    /// Number of tensors holding a dynamic allocation.
    pub fn allocated_count(&self) -> usize {
        self.table.len()
    }

    /// Maximum number of concurrently live dynamic allocations.
    pub fn max_allocated(&self) -> usize {
        M
    }

    /// Whether a deallocation has left a gap that the next allocation
    /// will compact away.
    pub fn needs_compaction(&self) -> bool {
        self.needs_compaction
    }

    /// Tensors holding a dynamic allocation, in table order.
    pub fn allocated(&self) -> impl Iterator<Item = TensorId> + '_ {
        self.table.iter()
    }

    /// Occupancy snapshot.
    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            capacity: self.capacity(),
            dynamic_bytes: self.dynamic_bytes(),
            static_bytes: self.static_bytes(),
            free_bytes: self.free_bytes(),
            allocated_tensors: self.allocated_count(),
            needs_compaction: self.needs_compaction,
        }
    }

    /// The configuration this arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// The diagnostics sink.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Mutable access to the diagnostics sink.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Bytes backing `tensor`, if it currently holds a region inside the
    /// dynamic part of this arena.
    pub fn tensor_data(&self, tensor: &TensorDescriptor) -> Option<&[u8]> {
        let (start, end) = self.dynamic_range(tensor)?;
        Some(&self.buffer[start..end])
    }

    /// Mutable bytes backing `tensor`.
    pub fn tensor_data_mut(&mut self, tensor: &TensorDescriptor) -> Option<&mut [u8]> {
        let (start, end) = self.dynamic_range(tensor)?;
        Some(&mut self.buffer[start..end])
    }

    /// `tensor`'s bytes viewed as elements of `T`.
    ///
    /// Returns `None` if the tensor is not backed, or if the region's size
    /// or memory address does not suit `T`.
    pub fn tensor_as<T: bytemuck::Pod>(&self, tensor: &TensorDescriptor) -> Option<&[T]> {
        bytemuck::try_cast_slice(self.tensor_data(tensor)?).ok()
    }

    /// Mutable typed view of `tensor`'s bytes.
    pub fn tensor_as_mut<T: bytemuck::Pod>(
        &mut self,
        tensor: &TensorDescriptor,
    ) -> Option<&mut [T]> {
        bytemuck::try_cast_slice_mut(self.tensor_data_mut(tensor)?).ok()
    }

    /// Bytes of a static region, or `None` if the region does not lie
    /// within this arena's static part.
    pub fn static_data(&self, region: StaticRegion) -> Option<&[u8]> {
        let (start, end) = self.static_range(region)?;
        Some(&self.buffer[start..end])
    }

    /// Mutable bytes of a static region.
    pub fn static_data_mut(&mut self, region: StaticRegion) -> Option<&mut [u8]> {
        let (start, end) = self.static_range(region)?;
        Some(&mut self.buffer[start..end])
    }

    fn dynamic_range(&self, tensor: &TensorDescriptor) -> Option<(usize, usize)> {
        let start = tensor.data?;
        let end = start.checked_add(tensor.byte_size()?)?;
        (end <= self.front).then_some((start, end))
    }

    fn static_range(&self, region: StaticRegion) -> Option<(usize, usize)> {
        let end = region.offset.checked_add(region.len)?;
        (region.offset >= self.back && end <= self.capacity()).then_some((region.offset, end))
    }

    /// Look up `tensors[id]`, reporting an unknown ID.
    fn descriptor<'t>(
        &mut self,
        tensors: &'t [TensorDescriptor],
        id: TensorId,
    ) -> Result<&'t TensorDescriptor, ArenaError> {
        match tensors.get(id.index()) {
            Some(tensor) => Ok(tensor),
            None => Err(self.fail(ArenaError::UnknownTensor {
                id,
                len: tensors.len(),
            })),
        }
    }

    /// `(target, bytes)` for `tensors[id]` packed after `running` bytes.
    fn place_compacted(
        &mut self,
        tensors: &[TensorDescriptor],
        id: TensorId,
        running: usize,
    ) -> Result<(usize, usize), ArenaError> {
        let tensor = self.descriptor(tensors, id)?;
        let (bytes, type_size) = tensor_byte_size(tensor, &mut self.reporter)?;
        let target = checked_align_up(running, type_size).unwrap_or(usize::MAX);
        match target.checked_add(bytes) {
            Some(end) if end <= self.back => Ok((target, bytes)),
            _ => {
                let available = self.back.saturating_sub(target);
                let name = tensor.name.clone();
                Err(self.fail(ArenaError::OutOfMemory {
                    name,
                    requested: bytes,
                    available,
                }))
            }
        }
    }

    /// Pull `front` back to the end of the last remaining entry after the
    /// most recent entry was removed.
    fn retract_front(&mut self, tensors: &[TensorDescriptor]) {
        let Some(last) = self.table.last() else {
            self.front = 0;
            self.needs_compaction = false;
            return;
        };
        let end = tensors
            .get(last.index())
            .and_then(|t| t.data?.checked_add(t.byte_size()?));
        match end {
            Some(end) if end <= self.front => self.front = end,
            // Leave the reconciliation (and any diagnostic) to compaction.
            _ => self.needs_compaction = true,
        }
    }

    fn fail(&mut self, err: ArenaError) -> ArenaError {
        report(&mut self.reporter, err)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.front <= self.back && self.back <= self.buffer.len(),
            "arena cursors crossed: front={}, back={}, capacity={}",
            self.front,
            self.back,
            self.buffer.len(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use microarena_core::{ElementType, NullReporter};
    use std::fmt;

    #[derive(Default)]
    struct Collect(Vec<String>);

    impl ErrorReporter for Collect {
        fn report(&mut self, args: fmt::Arguments<'_>) {
            self.0.push(args.to_string());
        }
    }

    fn tensors() -> Vec<TensorDescriptor> {
        vec![
            TensorDescriptor::new("a", ElementType::Float32, 10),
            TensorDescriptor::new("b", ElementType::Int8, 5),
            TensorDescriptor::new("c", ElementType::Int32, 1),
            TensorDescriptor::new("d", ElementType::Int64, 2),
        ]
    }

    #[test]
    fn new_arena_is_empty() {
        let mut buf = [0u8; 64];
        let arena = TensorArena::with_reporter(&mut buf, NullReporter);
        assert_eq!(arena.front(), 0);
        assert_eq!(arena.back(), 64);
        assert_eq!(arena.used_bytes(), 0);
        assert_eq!(arena.max_allocated(), DEFAULT_MAX_ALLOCATED_TENSORS);
        assert!(!arena.needs_compaction());
    }

    #[test]
    fn sequential_allocations_are_aligned_and_packed() {
        let mut buf = [0u8; 1024];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        assert_eq!(arena.allocate(&mut t, TensorId(1)), Ok(0));
        // Int64 must start on a multiple of 8.
        assert_eq!(arena.allocate(&mut t, TensorId(3)), Ok(8));
        assert_eq!(arena.front(), 24);
        assert_eq!(t[3].data, Some(8));
    }

    #[test]
    fn deallocating_last_entry_retracts_front() {
        let mut buf = [0u8; 1024];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        arena.allocate(&mut t, TensorId(0)).unwrap();
        arena.allocate(&mut t, TensorId(1)).unwrap();
        arena.deallocate(&mut t, TensorId(1)).unwrap();
        assert_eq!(arena.front(), 40);
        assert!(!arena.needs_compaction());
        assert_eq!(t[1].data, None);
    }

    #[test]
    fn trailing_retract_can_be_disabled() {
        let mut buf = [0u8; 1024];
        let mut t = tensors();
        let config = ArenaConfig::new().with_reclaim_trailing(false);
        let mut arena: TensorArena<'_, NullReporter> =
            TensorArena::with_config(&mut buf, config, NullReporter);
        arena.allocate(&mut t, TensorId(0)).unwrap();
        arena.allocate(&mut t, TensorId(1)).unwrap();
        arena.deallocate(&mut t, TensorId(1)).unwrap();
        assert_eq!(arena.front(), 45);
        assert!(!arena.needs_compaction());
    }

    #[test]
    fn deallocating_middle_entry_defers_reclaim() {
        let mut buf = [0u8; 1024];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        arena.allocate(&mut t, TensorId(0)).unwrap();
        arena.allocate(&mut t, TensorId(1)).unwrap();
        arena.deallocate(&mut t, TensorId(0)).unwrap();
        assert!(arena.needs_compaction());
        assert_eq!(arena.front(), 45);
        assert_eq!(t[1].data, Some(40));
    }

    #[test]
    fn double_free_is_not_allocated() {
        let mut buf = [0u8; 128];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        arena.allocate(&mut t, TensorId(2)).unwrap();
        arena.deallocate(&mut t, TensorId(2)).unwrap();
        let err = arena.deallocate(&mut t, TensorId(2)).unwrap_err();
        assert_eq!(err, ArenaError::NotAllocated { name: "c".into() });
        assert_eq!(arena.reporter().0.len(), 1);
    }

    #[test]
    fn allocating_twice_is_rejected() {
        let mut buf = [0u8; 128];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        arena.allocate(&mut t, TensorId(2)).unwrap();
        let err = arena.allocate(&mut t, TensorId(2)).unwrap_err();
        assert_eq!(err, ArenaError::AlreadyAllocated { name: "c".into() });
        assert_eq!(arena.allocated_count(), 1);
        assert_eq!(arena.front(), 4);
    }

    #[test]
    fn unknown_tensor_id_is_reported() {
        let mut buf = [0u8; 128];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        let err = arena.allocate(&mut t, TensorId(9)).unwrap_err();
        assert_eq!(err, ArenaError::UnknownTensor { id: TensorId(9), len: 4 });
        assert_eq!(arena.reporter().0.len(), 1);
        assert_eq!(arena.front(), 0);
    }

    #[test]
    fn out_of_memory_leaves_state_unchanged() {
        let mut buf = [0u8; 48];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        arena.allocate(&mut t, TensorId(0)).unwrap();
        let err = arena.allocate(&mut t, TensorId(3)).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfMemory {
                name: "d".into(),
                requested: 16,
                available: 8,
            }
        );
        assert_eq!(arena.front(), 40);
        assert_eq!(arena.allocated_count(), 1);
        assert_eq!(t[3].data, None);
        assert!(arena.reporter().0[0].contains("'d'"));
    }

    #[test]
    fn unsupported_type_fails_allocation() {
        let mut buf = [0u8; 64];
        let mut t = vec![TensorDescriptor::new("names", ElementType::String, 3)];
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        let err = arena.allocate(&mut t, TensorId(0)).unwrap_err();
        assert!(matches!(err, ArenaError::UnsupportedType { name: "STRING", .. }));
        assert_eq!(arena.allocated_count(), 0);
        assert_eq!(arena.reporter().0.len(), 1);
    }

    #[test]
    fn table_capacity_is_enforced() {
        let mut buf = [0u8; 256];
        let mut t: Vec<_> = (0..3)
            .map(|i| TensorDescriptor::new(format!("t{i}"), ElementType::UInt8, 4))
            .collect();
        let mut arena = TensorArena::<_, 2>::with_config(&mut buf, ArenaConfig::new(), NullReporter);
        arena.allocate(&mut t, TensorId(0)).unwrap();
        arena.allocate(&mut t, TensorId(1)).unwrap();
        let err = arena.allocate(&mut t, TensorId(2)).unwrap_err();
        assert_eq!(err, ArenaError::CapacityExceeded { max: 2 });
        assert_eq!(arena.front(), 8);
        assert_eq!(arena.allocated_count(), 2);
    }

    #[test]
    fn compaction_failure_keeps_flag_set() {
        let mut buf = [0u8; 256];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        arena.allocate(&mut t, TensorId(0)).unwrap();
        arena.allocate(&mut t, TensorId(1)).unwrap();
        arena.deallocate(&mut t, TensorId(0)).unwrap();
        t[1].element_type = ElementType::String;
        let err = arena.allocate(&mut t, TensorId(2)).unwrap_err();
        assert!(matches!(err, ArenaError::UnsupportedType { .. }));
        assert!(arena.needs_compaction());
        assert_eq!(arena.reporter().0.len(), 1);

        t[1].element_type = ElementType::Int8;
        assert_eq!(arena.allocate(&mut t, TensorId(2)), Ok(8));
        assert_eq!(t[1].data, Some(0));
    }

    #[test]
    fn static_allocation_from_the_top() {
        let mut buf = [0u8; 1024];
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        let r = arena.allocate_static(100, 4).unwrap();
        assert_eq!(r.offset(), 924);
        assert_eq!(arena.back(), 924);
        let r2 = arena.allocate_static(3, 8).unwrap();
        assert_eq!(r2.offset(), 920);
        assert!(r2.end() <= r.offset());
        assert_eq!(arena.static_bytes(), 104);
    }

    #[test]
    fn static_allocation_cannot_cross_front() {
        let mut buf = [0u8; 64];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        arena.allocate(&mut t, TensorId(0)).unwrap();
        let err = arena.allocate_static(30, 1).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfMemory {
                name: "static".into(),
                requested: 30,
                available: 24,
            }
        );
        assert_eq!(arena.back(), 64);
        assert!(arena.allocate_static(100, 1).is_err());
        assert_eq!(arena.reporter().0.len(), 2);
    }

    #[test]
    fn zero_sized_static_is_rejected() {
        let mut buf = [0u8; 64];
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        let r = arena.allocate_static(8, 8).unwrap();
        assert_eq!(r.offset(), 56);
        let err = arena.allocate_static(0, 8).unwrap_err();
        assert_eq!(err, ArenaError::ZeroSizedStatic { alignment: 8 });
        assert_eq!(arena.back(), 56);
        assert_eq!(arena.reporter().0.len(), 1);
        // The next non-empty region still lands strictly below the first.
        let r2 = arena.allocate_static(1, 1).unwrap();
        assert!(r2.offset() < r.offset());
    }

    #[test]
    fn grown_tensor_that_no_longer_fits_fails_compaction() {
        let mut buf = [0u8; 64];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, Collect::default());
        arena.allocate(&mut t, TensorId(0)).unwrap();
        arena.allocate(&mut t, TensorId(1)).unwrap();
        let _static = arena.allocate_static(16, 8).unwrap();
        arena.deallocate(&mut t, TensorId(0)).unwrap();
        assert_eq!(arena.back(), 48);

        t[1].element_count = 60;
        let err = arena.compact(&mut t).unwrap_err();
        assert_eq!(
            err,
            ArenaError::OutOfMemory {
                name: "b".into(),
                requested: 60,
                available: 48,
            }
        );
        assert_eq!(arena.reporter().0.len(), 1);
        assert!(arena.needs_compaction());
        assert_eq!(arena.front(), 45);
        assert_eq!(t[1].data, Some(40));
        assert!(arena.front() <= arena.back());

        t[1].element_count = 5;
        arena.compact(&mut t).unwrap();
        assert_eq!(t[1].data, Some(0));
        assert_eq!(arena.front(), 5);
    }

    #[test]
    fn static_data_round_trip() {
        let mut buf = [0u8; 64];
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        let r = arena.allocate_static(4, 4).unwrap();
        arena.static_data_mut(r).unwrap().copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(arena.static_data(r), Some(&[1u8, 2, 3, 4][..]));
        assert_eq!(arena.static_data(StaticRegion::new(0, 4)), None);
    }

    #[test]
    fn zero_fill_clears_new_regions() {
        let mut buf = [0xAAu8; 64];
        let mut t = tensors();
        let config = ArenaConfig::new().with_zero_fill(true);
        let mut arena: TensorArena<'_, NullReporter> =
            TensorArena::with_config(&mut buf, config, NullReporter);
        arena.allocate(&mut t, TensorId(1)).unwrap();
        assert_eq!(arena.tensor_data(&t[1]), Some(&[0u8; 5][..]));
        let r = arena.allocate_static(8, 1).unwrap();
        assert_eq!(arena.static_data(r), Some(&[0u8; 8][..]));
    }

    #[test]
    fn reset_dynamic_keeps_static_regions() {
        let mut buf = [0u8; 128];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        let r = arena.allocate_static(16, 8).unwrap();
        arena.allocate(&mut t, TensorId(0)).unwrap();
        arena.allocate(&mut t, TensorId(1)).unwrap();
        arena.deallocate(&mut t, TensorId(0)).unwrap();
        arena.reset_dynamic(&mut t);
        assert_eq!(arena.front(), 0);
        assert_eq!(arena.back(), r.offset());
        assert_eq!(arena.allocated_count(), 0);
        assert!(!arena.needs_compaction());
        assert!(t.iter().all(|d| d.data.is_none()));
    }

    #[test]
    fn stats_reflect_both_regions() {
        let mut buf = [0u8; 256];
        let mut t = tensors();
        let mut arena = TensorArena::with_reporter(&mut buf, NullReporter);
        arena.allocate(&mut t, TensorId(0)).unwrap();
        let _static = arena.allocate_static(56, 8).unwrap();
        let stats = arena.stats();
        assert_eq!(stats.capacity, 256);
        assert_eq!(stats.dynamic_bytes, 40);
        assert_eq!(stats.static_bytes, 56);
        assert_eq!(stats.free_bytes, 160);
        assert_eq!(stats.allocated_tensors, 1);
        assert_eq!(arena.used_bytes(), 96);
    }

    #[test]
    fn tensor_data_is_none_when_unbacked() {
        let mut buf = [0u8; 64];
        let t = tensors();
        let arena = TensorArena::with_reporter(&mut buf, NullReporter);
        assert_eq!(arena.tensor_data(&t[0]), None);
    }
}
