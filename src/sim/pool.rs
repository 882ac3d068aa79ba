//! Fixed-capacity slot pools
//!
//! Entities live in fixed arrays with a per-slot active flag. Slots are never
//! freed, only released for reuse; an inactive slot's value is stale until the
//! next spawn overwrites it.

/// A single pool slot
#[derive(Debug, Clone)]
struct Slot<T> {
    active: bool,
    value: T,
}

/// Fixed-capacity pool of `N` slots
#[derive(Debug, Clone)]
pub struct SlotPool<T, const N: usize> {
    slots: [Slot<T>; N],
}

impl<T: Default, const N: usize> Default for SlotPool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> SlotPool<T, N> {
    /// Create a pool with every slot inactive
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| Slot {
                active: false,
                value: T::default(),
            }),
        }
    }
}

impl<T, const N: usize> SlotPool<T, N> {
    /// Total number of slots
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Mark the first inactive slot active and return its index.
    ///
    /// The slot keeps whatever value it held before; callers must initialize it.
    pub fn allocate(&mut self) -> Option<usize> {
        let index = self.first_free()?;
        self.slots[index].active = true;
        Some(index)
    }

    /// Allocate the first inactive slot and store `value` in it
    pub fn spawn(&mut self, value: T) -> Option<usize> {
        let index = self.allocate()?;
        self.slots[index].value = value;
        Some(index)
    }

    /// Store `value` in a specific slot if that slot is inactive
    pub fn occupy(&mut self, index: usize, value: T) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if !slot.active => {
                slot.active = true;
                slot.value = value;
                true
            }
            _ => false,
        }
    }

    /// Mark a slot inactive. Returns whether it was active.
    ///
    /// Releasing an inactive or out-of-range slot does nothing.
    pub fn release(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.active => {
                slot.active = false;
                true
            }
            _ => false,
        }
    }

    /// Release every slot
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }

    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.active)
    }

    /// Index of the first inactive slot
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.active)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.active)
    }

    /// Value of an active slot
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots
            .get(index)
            .filter(|s| s.active)
            .map(|s| &s.value)
    }

    /// Mutable value of an active slot
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots
            .get_mut(index)
            .filter(|s| s.active)
            .map(|s| &mut s.value)
    }

    /// Active slots in index order
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &s.value))
    }

    /// Active slots in index order, mutably
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, s)| (i, &mut s.value))
    }
}
