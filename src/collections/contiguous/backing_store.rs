//! A module containing [`BackingStore`], the fixed-size slot array underlying contiguous
//! collections.

use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::ops::{Deref, DerefMut};

/// A fixed-size block of slots, allocated once and never resized in place. Each slot either holds
/// a value or is empty, which makes occupancy explicit rather than inferred from a sentinel.
///
/// Changing the size of a BackingStore means building a new one and moving the slots across, see
/// [`BackingStore::resized`] and [`BackingStore::without`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of slots in the BackingStore.
///
/// | Method | Complexity |
/// |-|-|
/// | `empty` | `O(n)` |
/// | `size` | `O(1)` |
/// | `resized` | `O(n)` |
/// | `without` | `O(n)` |
pub struct BackingStore<T> {
    pub(crate) slots: Box<[Option<T>]>,
}

impl<T> BackingStore<T> {
    /// Creates a new BackingStore with `size` empty slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::BackingStore;
    /// let store: BackingStore<u8> = BackingStore::empty(3);
    /// assert_eq!(store.size(), 3);
    /// assert!(store.iter().all(Option::is_none));
    /// ```
    pub fn empty(size: usize) -> BackingStore<T> {
        BackingStore {
            slots: iter::repeat_with(|| None).take(size).collect(),
        }
    }

    /// Returns the number of slots, occupied or not.
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Moves every slot into a new BackingStore of `new_size`, keeping each value at its original
    /// position. Slots that don't fit into a smaller store are dropped.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::BackingStore;
    /// let mut store: BackingStore<char> = BackingStore::empty(2);
    /// store[0] = Some('a');
    /// store[1] = Some('b');
    ///
    /// let store = store.resized(4);
    /// assert_eq!(&*store, &[Some('a'), Some('b'), None, None]);
    /// ```
    pub fn resized(mut self, new_size: usize) -> BackingStore<T> {
        let mut store: BackingStore<T> = BackingStore::empty(new_size);

        for (dst, src) in store.iter_mut().zip(self.iter_mut()) {
            *dst = src.take();
        }

        store
    }

    /// Moves every slot except the one at `index` into a new BackingStore that is one slot smaller,
    /// shifting the slots after `index` one position towards the start. Returns the new store along
    /// with the content of the skipped slot.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::BackingStore;
    /// let mut store: BackingStore<i32> = BackingStore::empty(3);
    /// store[0] = Some(1);
    /// store[1] = Some(2);
    /// store[2] = Some(3);
    ///
    /// let (store, removed) = store.without(1);
    /// assert_eq!(removed, Some(2));
    /// assert_eq!(&*store, &[Some(1), Some(3)]);
    /// ```
    pub fn without(mut self, index: usize) -> (BackingStore<T>, Option<T>) {
        let removed = self.slots[index].take();
        let mut store: BackingStore<T> = BackingStore::empty(self.size() - 1);

        let remaining = self.iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, slot)| slot);

        for (dst, src) in store.iter_mut().zip(remaining) {
            *dst = src.take();
        }

        (store, removed)
    }
}

impl<T> Deref for BackingStore<T> {
    type Target = [Option<T>];

    fn deref(&self) -> &Self::Target {
        &self.slots
    }
}

impl<T> DerefMut for BackingStore<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.slots
    }
}

impl<T: Clone> Clone for BackingStore<T> {
    fn clone(&self) -> Self {
        BackingStore {
            slots: self.slots.clone(),
        }
    }
}

impl<T: Debug> Debug for BackingStore<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackingStore")
            .field("slots", &&*self.slots)
            .field("size", &self.size())
            .finish()
    }
}
