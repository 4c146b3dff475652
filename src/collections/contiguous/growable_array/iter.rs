use std::iter::FusedIterator;
use std::slice;

use super::GrowableArray;
use crate::collections::contiguous::BackingStore;

/// A borrowed iterator over the occupied slots of a [`GrowableArray`], in slot order.
///
/// Created by [`GrowableArray::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Iter<'a, T> {
        Iter {
            slots: slots.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.slots.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().rev().find_map(Option::as_ref)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
        }
    }
}

/// An owned iterator over the occupied slots of a [`GrowableArray`], in slot order. Any values
/// left when it is dropped are dropped along with it.
///
/// Created by [`GrowableArray::into_iter`].
#[derive(Debug)]
pub struct IntoIter<T> {
    store: BackingStore<T>,
    index: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.store.size() {
            let slot = self.store[self.index].take();
            self.index += 1;

            if slot.is_some() {
                return slot;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.store.size() - self.index))
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let store = self.take_store();
        // An empty GrowableArray starts the iterator past its last slot.
        let index = if self.is_empty() { store.size() } else { 0 };

        IntoIter {
            store,
            index,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
