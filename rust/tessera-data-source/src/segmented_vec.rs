//! Segmented vector used as the backing of [`BigListDataSource`](crate::BigListDataSource).
//!
//! This module provides [`SegmentedVec<T>`], an appendable collection that
//! organizes its elements into uniformly-sized contiguous segments, so that the
//! total length is a `u64` and no single allocation has to hold all elements.

/// An appendable collection with `u64` indexed access built on top of
/// uniformly-sized contiguous segments.
///
/// # Segment Size Requirements
///
/// All segment sizes must be:
/// - Greater than 1
/// - A power of two (for efficient bit-shift operations)
///
/// The default segment size is 64K elements.
///
/// # Performance Characteristics
///
/// - **Push**: O(1) amortized, with occasional O(segment_size) when allocating new segments
/// - **Index access**: O(1)
/// - **Memory usage**: no contiguous allocation larger than one segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedVec<T> {
    /// The individual segments that make up the collection
    segments: Vec<Vec<T>>,
    /// The number of items per segment (must be power of two). Uniform for all segments
    /// except the last one.
    segment_size: usize,
    /// Number of bits to shift for fast division by segment_size
    offset_bits: u32,
    /// Total number of elements across all segments
    len: u64,
}

impl<T> SegmentedVec<T> {
    /// Default segment size: 64K items.
    pub const DEFAULT_SEGMENT_SIZE: usize = 64 * 1024;

    /// Creates a new, empty `SegmentedVec` with the default segment size.
    pub fn new() -> SegmentedVec<T> {
        Self::with_segment_size(Self::DEFAULT_SEGMENT_SIZE)
    }

    /// Creates a new, empty `SegmentedVec` with the specified segment size.
    ///
    /// # Panics
    ///
    /// Panics unless `segment_size` is greater than 1 and a power of two.
    pub fn with_segment_size(segment_size: usize) -> SegmentedVec<T> {
        assert!(segment_size > 1);
        assert!(segment_size.is_power_of_two());
        SegmentedVec {
            segments: Vec::new(),
            segment_size,
            offset_bits: segment_size.trailing_zeros(),
            len: 0,
        }
    }

    /// Returns the total number of elements in the segmented vector.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all elements, keeping the configured segment size.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.len = 0;
    }

    #[inline]
    pub fn segment_size(&self) -> usize {
        self.segment_size
    }

    #[inline]
    pub fn segments(&self) -> &[Vec<T>] {
        &self.segments
    }

    /// Maps a linear index to a (segment_id, offset) pair.
    #[inline]
    pub fn map_index(&self, index: u64) -> (usize, usize) {
        let sid = (index >> self.offset_bits) as usize;
        let offset = (index & (self.segment_size as u64 - 1)) as usize;
        (sid, offset)
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: u64) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let (sid, offset) = self.map_index(index);
        Some(&self.segments[sid][offset])
    }

    #[inline]
    pub fn get_mut(&mut self, index: u64) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let (sid, offset) = self.map_index(index);
        Some(&mut self.segments[sid][offset])
    }

    /// Appends an element, allocating a new segment when the last one is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.is_last_segment_full() {
            self.append_segment();
        }
        if let Some(last) = self.segments.last_mut() {
            last.push(value);
            self.len += 1;
        }
    }

    /// Resizes the vector in place so that `len()` equals `new_len`.
    ///
    /// Growing fills the new slots with values produced by `f`; shrinking drops
    /// trailing elements and releases emptied segments.
    pub fn resize_with<F>(&mut self, new_len: u64, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        while self.len < new_len {
            self.push(f());
        }
    }

    /// Shortens the vector to `new_len` elements. No-op if already shorter.
    pub fn truncate(&mut self, new_len: u64) {
        if new_len >= self.len {
            return;
        }
        if new_len == 0 {
            self.clear();
            return;
        }
        let (sid, offset) = self.map_index(new_len - 1);
        self.segments.truncate(sid + 1);
        self.segments[sid].truncate(offset + 1);
        self.len = new_len;
    }

    /// Iterates over all elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.segments.iter().flat_map(|segment| segment.iter())
    }

    #[inline]
    fn is_last_segment_full(&self) -> bool {
        (self.len & (self.segment_size as u64 - 1)) == 0
    }

    #[cold]
    fn append_segment(&mut self) {
        self.segments.push(Vec::with_capacity(self.segment_size));
    }
}

impl<T> Default for SegmentedVec<T> {
    fn default() -> Self {
        SegmentedVec::new()
    }
}

impl<T> std::ops::Index<u64> for SegmentedVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the index is out of bounds, same as standard vector indexing.
    #[inline]
    fn index(&self, index: u64) -> &T {
        assert!(index < self.len, "index {index} out of bounds");
        let (sid, offset) = self.map_index(index);
        &self.segments[sid][offset]
    }
}

impl<T> std::ops::IndexMut<u64> for SegmentedVec<T> {
    #[inline]
    fn index_mut(&mut self, index: u64) -> &mut T {
        assert!(index < self.len, "index {index} out of bounds");
        let (sid, offset) = self.map_index(index);
        &mut self.segments[sid][offset]
    }
}
