use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::{EmptySlot, InvalidCapacity, Iter, NotFound};
use crate::collections::contiguous::BackingStore;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// The capacity used by [`GrowableArray::new`].
pub const DEFAULT_CAP: usize = 16;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on a [`BackingStore<T>`] which is replaced
/// wholesale whenever its capacity changes.
///
/// Unlike [`Vec`], a GrowableArray gives up one slot of capacity on every
/// [`remove_at`](GrowableArray::remove_at), and [`reset`](GrowableArray::reset) returns it to the
/// capacity it was created with.
///
/// All mutating methods take `&mut self` and there is no internal synchronization, so sharing a
/// GrowableArray between threads requires external locking.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The capacity of the GrowableArray.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `add_range` | `O(m)`*, `O(n+m)` |
/// | `remove_at` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `reset` | `O(n)` |
/// | `clear` | `O(n)` |
/// | `iter` | `O(n)` |
///
/// \* If the GrowableArray doesn't have enough capacity for the new elements, adding them will
/// reallocate.
pub struct GrowableArray<T> {
    pub(crate) store: BackingStore<T>,
    pub(crate) len: usize,
    pub(crate) initial_cap: usize,
}

impl<T> GrowableArray<T> {
    /// Creates a new, empty GrowableArray with an initial capacity of [`DEFAULT_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<String> = GrowableArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.cap(), 16);
    /// ```
    pub fn new() -> GrowableArray<T> {
        GrowableArray {
            store: BackingStore::empty(DEFAULT_CAP),
            len: 0,
            initial_cap: DEFAULT_CAP,
        }
    }

    /// Creates a new, empty GrowableArray with the provided initial capacity.
    ///
    /// # Errors
    /// Returns [`InvalidCapacity`] if `cap` is zero.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let arr: GrowableArray<u8> = GrowableArray::with_cap(5).unwrap();
    /// assert_eq!(arr.cap(), 5);
    /// assert!(GrowableArray::<u8>::with_cap(0).is_err());
    /// ```
    pub fn with_cap(cap: usize) -> Result<GrowableArray<T>, InvalidCapacity> {
        if cap == 0 {
            return Err(InvalidCapacity);
        }

        Ok(GrowableArray {
            store: BackingStore::empty(cap),
            len: 0,
            initial_cap: cap,
        })
    }

    /// Returns the number of logically present elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the GrowableArray contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the current backing store.
    pub fn cap(&self) -> usize {
        self.store.size()
    }

    /// Returns the capacity the GrowableArray was created with, which [`reset`](Self::reset)
    /// restores.
    pub const fn initial_cap(&self) -> usize {
        self.initial_cap
    }

    /// Returns a reference to the value at `index`, or [`None`] if that slot is empty.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `index < len`.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::new();
    /// arr.add("x");
    /// assert_eq!(arr.get(0), Ok(Some(&"x")));
    /// assert!(arr.get(1).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<Option<&T>, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.store[index].as_ref())
    }

    /// Returns a mutable reference to the value at `index`, or [`None`] if that slot is empty.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<Option<&mut T>, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.store[index].as_mut())
    }

    /// Writes `value` into the slot at `index` and increments the length, regardless of whether
    /// the slot was the next free one or an existing element. Writing at `len` appends, while
    /// writing below it overwrites and leaves an empty slot at the end of the logical range.
    ///
    /// For an overwrite that leaves the length alone, see [`replace`](Self::replace).
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`, or if the GrowableArray is full (which
    /// includes any `index == cap`). Nothing is written in either case.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(4).unwrap();
    /// for i in 0..4 {
    ///     arr.set(i, i * 10).unwrap();
    /// }
    /// assert_eq!(arr.len(), 4);
    /// assert_eq!(arr.get(3), Ok(Some(&30)));
    /// assert!(arr.set(0, 0).is_err());
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len || self.len == self.cap() {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        self.store[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Replaces the content of the slot at `index` with `value`, returning the old content. The
    /// length is unchanged.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `index < len`.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = ["a", "b"].into_iter().collect();
    /// assert_eq!(arr.replace(1, "c"), Ok(Some("b")));
    /// assert_eq!(arr.len(), 2);
    /// ```
    pub fn replace(&mut self, index: usize, value: T) -> Result<Option<T>, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.store[index].replace(value))
    }

    /// Adds `item` to the end of the GrowableArray, doubling the capacity first if it is full.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a [`usize`] or the memory layout size exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(2).unwrap();
    /// arr.add("x");
    /// arr.add("y");
    /// assert_eq!(arr.cap(), 2);
    /// arr.add("z");
    /// assert_eq!(arr.cap(), 4);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn add(&mut self, item: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.store[self.len] = Some(item);
        self.len += 1;
    }

    /// Adds every item in `items` to the end of the GrowableArray, in order. If they don't all fit,
    /// the capacity is first grown to twice the sum of the current capacity and the item count.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a [`usize`] or the memory layout size exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(2).unwrap();
    /// arr.add_range(["a", "b", "c"]);
    /// assert_eq!(arr.cap(), 10);
    /// assert_eq!(arr.len(), 3);
    /// ```
    pub fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = items.len();

        let required = self.len.checked_add(count).ok_or(CapacityOverflow).throw();
        if required > self.cap() {
            let new_cap = self.cap()
                .checked_add(count)
                .and_then(|cap| cap.checked_mul(GROWTH_FACTOR))
                .ok_or(CapacityOverflow)
                .throw();
            self.realloc_with_cap(new_cap);
        }

        // add still guards against an iterator that reports the wrong length.
        for item in items {
            self.add(item);
        }
    }

    /// Removes the slot at `index`, moving every following slot one position towards the start.
    /// The backing store is replaced with one that is a single slot smaller, so both the length
    /// and the capacity decrease by one.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] unless `index < len`.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(3).unwrap();
    /// arr.add_range(["a", "b", "c"]);
    /// assert_eq!(arr.remove_at(1), Ok(Some("b")));
    /// assert_eq!((arr.len(), arr.cap()), (2, 2));
    /// assert_eq!(arr.get(1), Ok(Some(&"c")));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<Option<T>, IndexOutOfBounds> {
        self.check_index(index)?;

        let (store, removed) = self.take_store().without(index);
        self.store = store;
        self.len -= 1;

        Ok(removed)
    }

    /// Removes the first element equal to `item`, returning it. Does nothing if there isn't one.
    /// Empty slots are skipped rather than compared.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr: GrowableArray<_> = ["a", "b", "a"].into_iter().collect();
    /// assert_eq!(arr.remove(&"a"), Some("a"));
    /// assert_eq!(arr.remove(&"z"), None);
    /// assert_eq!(arr.iter().collect::<Vec<_>>(), [&"b", &"a"]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.try_remove(item).ok()
    }

    /// Removes the first element equal to `item`, returning it.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no element is equal to `item`.
    pub fn try_remove(&mut self, item: &T) -> Result<T, NotFound>
    where
        T: PartialEq,
    {
        let index = self.position(item).ok_or(NotFound)?;

        // position only returns in-bounds, occupied slots.
        self.remove_at(index)
            .ok()
            .flatten()
            .ok_or(NotFound)
    }

    /// Returns the index of the first element equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.store[..self.len]
            .iter()
            .position(|slot| slot.as_ref() == Some(item))
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.position(item).is_some()
    }

    /// Drops every element and replaces the backing store with an empty one of the initial
    /// capacity.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(1).unwrap();
    /// arr.add_range([1, 2, 3]);
    /// arr.reset();
    /// assert_eq!((arr.len(), arr.cap()), (0, 1));
    /// ```
    pub fn reset(&mut self) {
        self.store = BackingStore::empty(self.initial_cap);
        self.len = 0;
    }

    /// Drops every element, keeping the current backing store and its capacity.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(1).unwrap();
    /// arr.add_range([1, 2, 3]);
    /// arr.clear();
    /// assert_eq!((arr.len(), arr.cap()), (0, 8));
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.store[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns an iterator over every occupied slot of the backing store, in slot order. An empty
    /// GrowableArray yields nothing without looking at its slots.
    ///
    /// # Examples
    /// ```
    /// # use growable_array::collections::contiguous::GrowableArray;
    /// let mut arr = GrowableArray::with_cap(4).unwrap();
    /// arr.add(1);
    /// arr.add(2);
    /// arr.set(0, 3).unwrap();
    /// // The third logical slot is empty and gets skipped.
    /// assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [3, 2]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        if self.is_empty() {
            Iter::new(&[])
        } else {
            Iter::new(&self.store)
        }
    }

    /// Replaces the backing store with one of `new_cap` slots, keeping every slot in position.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.store = self.take_store().resized(new_cap);
    }

    /// Grows the backing store to allow for the addition of another element.
    ///
    /// # Panics
    /// Panics if the new capacity overflows a [`usize`] or the memory layout size exceeds
    /// [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(CapacityOverflow)
            .throw()
            .max(MIN_CAP);

        self.realloc_with_cap(new_cap);
    }

    /// Moves the backing store out of self, leaving a zero-sized one in its place.
    pub(crate) fn take_store(&mut self) -> BackingStore<T> {
        std::mem::replace(&mut self.store, BackingStore::empty(0))
    }

    /// Checks that the provided index is within the logical range of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds or refers to an empty slot.
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
            .throw()
            .ok_or(EmptySlot { index })
            .throw()
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    /// # Panics
    /// Panics if `index` is out of bounds or refers to an empty slot.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
            .throw()
            .ok_or(EmptySlot { index })
            .throw()
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut arr = GrowableArray::with_cap(iter.size_hint().0)
            .unwrap_or_else(|_| GrowableArray::new());

        arr.extend(iter);
        arr
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        GrowableArray {
            store: self.store.clone(),
            len: self.len,
            initial_cap: self.initial_cap,
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.store[..self.len] == other.store[..other.len]
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.store[..self.len].hash(state);
    }
}

impl<T: Debug> Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for GrowableArray<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
