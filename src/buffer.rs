use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::CollectionError;

const GROWTH_FACTOR: usize = 2;

/// Contiguous run of optional slots backing `Stack` and `Queue`.
///
/// A vacated slot holds `None`, so a removed value leaves the buffer at the
/// moment of removal instead of lingering until the slot is overwritten.
/// Callers track which range of slots is live; the buffer itself only knows
/// its capacity.
#[derive(Debug, Clone)]
pub(crate) struct SlotBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotBuffer<T> {
    /// Creates a buffer of `capacity` vacant slots.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError::InvalidConfiguration` if `capacity` is 0.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        if capacity == 0 {
            return Err(CollectionError::InvalidConfiguration {
                parameter: "capacity",
                value: capacity,
            });
        }
        Ok(Self::vacant(capacity))
    }

    /// Creates a buffer of `capacity` vacant slots. `capacity` must be nonzero.
    pub(crate) fn vacant(capacity: usize) -> Self {
        Self {
            slots: vacant_slots(capacity),
        }
    }

    /// Takes ownership of `values` as the buffer contents, one slot per value.
    pub(crate) fn from_vec(values: Vec<T>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Writes `value` into the slot at `index`.
    ///
    /// The caller guarantees `index < capacity()`.
    #[allow(clippy::indexing_slicing)]
    pub(crate) fn put(&mut self, index: usize, value: T) {
        self.slots[index] = Some(value);
    }

    /// Moves the value out of the slot at `index`, leaving it vacant.
    pub(crate) fn take(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Returns the `len` slots starting at `start`.
    ///
    /// An out-of-range request yields an empty slice.
    pub(crate) fn live(&self, start: usize, len: usize) -> &[Option<T>] {
        self.slots.get(start..start + len).unwrap_or(&[])
    }

    /// Vacates every slot. O(capacity).
    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    /// Reallocates at twice the capacity, moving the `len` live slots that
    /// begin at `start` to the front of the new buffer.
    pub(crate) fn grow(&mut self, start: usize, len: usize) {
        let mut slots = vacant_slots(self.capacity() * GROWTH_FACTOR);
        let live = self.slots.get_mut(start..start + len).unwrap_or(&mut []);
        for (dst, src) in slots.iter_mut().zip(live.iter_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
    }

    /// Shifts the `len` live slots that begin at `start` to the front of the
    /// buffer without reallocating. Slots before `start` must be vacant.
    pub(crate) fn compact(&mut self, start: usize, len: usize) {
        if let Some(prefix) = self.slots.get_mut(..start + len) {
            prefix.rotate_left(start);
        }
    }
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0..capacity).map(|_| None).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_zero_capacity_rejected() {
        let result = SlotBuffer::<u32>::with_capacity(0);
        assert_eq!(
            result.unwrap_err(),
            CollectionError::InvalidConfiguration {
                parameter: "capacity",
                value: 0
            }
        );
    }

    #[test]
    fn test_put_take_vacates_slot() {
        let mut buffer = SlotBuffer::with_capacity(2).unwrap();
        buffer.put(1, "value");

        assert_eq!(buffer.get(1), Some(&"value"));
        assert_eq!(buffer.take(1), Some("value"));
        assert_eq!(buffer.get(1), None);
        assert_eq!(buffer.take(1), None);
    }

    #[test]
    fn test_take_out_of_range() {
        let mut buffer = SlotBuffer::<u32>::with_capacity(1).unwrap();
        assert_eq!(buffer.take(5), None);
        assert!(buffer.live(1, 3).is_empty());
    }

    #[test]
    fn test_grow_doubles_and_moves_live_range_to_front() {
        let mut buffer = SlotBuffer::from_vec(vec![1, 2, 3, 4]);
        buffer.take(0);

        buffer.grow(1, 3);

        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.live(0, 3), &[Some(2), Some(3), Some(4)]);
        assert!(buffer.live(3, 5).iter().all(Option::is_none));
    }

    #[test]
    fn test_compact_keeps_capacity() {
        let mut buffer = SlotBuffer::from_vec(vec![1, 2, 3, 4]);
        buffer.take(0);
        buffer.take(1);

        buffer.compact(2, 2);

        assert_eq!(buffer.capacity(), 4);
        assert_eq!(buffer.live(0, 4), &[Some(3), Some(4), None, None]);
    }

    #[test]
    fn test_clear_vacates_every_slot() {
        let mut buffer = SlotBuffer::from_vec(vec![1, 2, 3]);
        buffer.clear();

        assert_eq!(buffer.capacity(), 3);
        assert!(buffer.live(0, 3).iter().all(Option::is_none));
    }
}
