#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::util::drop::DropCounter;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let arr: GrowableArray<String> = GrowableArray::new();
    assert_eq!(arr.cap(), DEFAULT_CAP, "new should use the default capacity.");
    assert_eq!(arr.initial_cap(), DEFAULT_CAP);
    assert!(arr.is_empty());

    assert_eq!(
        GrowableArray::<String>::with_cap(0).err(),
        Some(InvalidCapacity),
        "A capacity of zero should be rejected."
    );

    let arr = GrowableArray::<String>::with_cap(1).expect("A capacity of one is valid.");
    assert_eq!(arr.cap(), 1);
    assert_eq!(arr.len(), 0);
}

#[test]
fn test_add_growth() {
    let mut arr = GrowableArray::with_cap(2).expect("valid capacity");
    arr.add("x");
    arr.add("y");
    assert_eq!((arr.len(), arr.cap()), (2, 2), "A full array shouldn't grow yet.");

    arr.add("z");
    assert_eq!(arr.cap(), 4, "Adding to a full array should double its capacity.");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.get(0), Ok(Some(&"x")));
    assert_eq!(arr.get(1), Ok(Some(&"y")));
    assert_eq!(arr.get(2), Ok(Some(&"z")));
}

#[test]
fn test_add_range_growth() {
    let mut arr = GrowableArray::with_cap(4).expect("valid capacity");
    arr.add_range(["a", "b"]);
    assert_eq!(arr.cap(), 4, "Items that fit shouldn't cause growth.");

    arr.add_range(iter::empty());
    assert_eq!((arr.len(), arr.cap()), (2, 4), "An empty range should change nothing.");

    arr.add_range(["c", "d", "e"]);
    assert_eq!(
        arr.cap(),
        (4 + 3) * 2,
        "Growth for a range should double the sum of the capacity and item count."
    );
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), ["a", "b", "c", "d", "e"]);
}

#[test]
fn test_set_appends() {
    let mut arr = GrowableArray::with_cap(16).expect("valid capacity");
    for i in 0..16 {
        arr.set(i, i.to_string()).expect("Writing at the length should be accepted.");
    }

    assert_eq!(arr.len(), 16, "Every set should increment the length.");
    assert_eq!(arr.get(15), Ok(Some(&String::from("15"))));
    assert_eq!(arr.cap(), 16, "set should never grow the array.");

    assert_eq!(
        arr.set(16, String::from("16")),
        Err(IndexOutOfBounds { index: 16, len: 16 }),
        "Writing at the capacity should be rejected."
    );
    assert!(
        arr.set(0, String::from("0")).is_err(),
        "Writing into a full array should be rejected."
    );
    assert_eq!(arr.len(), 16, "A rejected set shouldn't change the length.");

    let mut arr = GrowableArray::with_cap(4).expect("valid capacity");
    assert!(arr.set(1, "a").is_err(), "Writing past the length should be rejected.");
    assert!(arr.is_empty());
}

#[test]
fn test_set_overwrite_leaves_hole() {
    let mut arr = GrowableArray::with_cap(4).expect("valid capacity");
    arr.add("a");
    arr.add("b");
    arr.set(0, "c").expect("Overwriting within the length should be accepted.");

    assert_eq!(arr.len(), 3, "Overwriting should still increment the length.");
    assert_eq!(arr.get(0), Ok(Some(&"c")));
    assert_eq!(arr.get(2), Ok(None), "The newly counted slot should be empty.");
    assert_eq!(
        arr.iter().copied().collect::<Vec<_>>(),
        ["c", "b"],
        "Iteration should skip the empty slot."
    );

    assert_panics!(arr[2], "Indexing an empty slot should panic.");

    arr.add("d");
    assert_eq!(arr.get(3), Ok(Some(&"d")), "add should write after the hole.");
    assert_eq!(arr.remove_at(2), Ok(None), "Removing a hole should yield nothing.");
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), ["c", "b", "d"]);
}

#[test]
fn test_replace() {
    let mut arr: GrowableArray<_> = ["a", "b"].into_iter().collect();
    assert_eq!(arr.replace(0, "z"), Ok(Some("a")));
    assert_eq!(arr.len(), 2, "replace shouldn't change the length.");
    assert_eq!(arr.replace(2, "y"), Err(IndexOutOfBounds { index: 2, len: 2 }));

    arr[1] = "x";
    assert_eq!(arr[1], "x");
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), ["z", "x"]);
}

#[test]
fn test_out_of_range() {
    let mut arr = GrowableArray::new();
    arr.add(1_u8);

    assert_eq!(arr.get(arr.len()), Err(IndexOutOfBounds { index: 1, len: 1 }));
    assert_eq!(arr.get(usize::MAX).err().map(|e| e.index), Some(usize::MAX));
    assert!(arr.get_mut(1).is_err());
    assert!(arr.remove_at(1).is_err());
    assert_eq!(arr.len(), 1, "Failed removals shouldn't change the length.");

    assert_panics!(arr[1], "Indexing out of bounds should panic.");
}

#[test]
fn test_remove_at() {
    let mut arr = GrowableArray::with_cap(3).expect("valid capacity");
    arr.add("a");
    arr.add("b");
    arr.add("c");

    assert_eq!(arr.remove_at(1), Ok(Some("b")));
    assert_eq!(arr.len(), 2);
    assert_eq!(arr.cap(), 2, "Removal should shrink the capacity by one.");
    assert_eq!(arr.get(0), Ok(Some(&"a")));
    assert_eq!(arr.get(1), Ok(Some(&"c")));
}

#[test]
fn test_remove_at_shrunken_growth() {
    let mut arr = GrowableArray::with_cap(2).expect("valid capacity");
    arr.add_range([1, 2]);
    arr.remove_at(0).expect("in bounds");
    arr.remove_at(0).expect("in bounds");
    assert_eq!(
        (arr.len(), arr.cap()),
        (0, 0),
        "Capacity should shrink below the initial capacity."
    );

    arr.add(3);
    assert_eq!(arr.cap(), 1, "Growth from zero capacity should still make room.");
    arr.add(4);
    assert_eq!(arr.cap(), 2, "Growth should double from the shrunken capacity.");
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), [3, 4]);
}

#[test]
fn test_remove() {
    let mut arr: GrowableArray<_> = ["a", "b", "a", "c"].into_iter().collect();
    let cap = arr.cap();

    assert_eq!(arr.remove(&"z"), None, "Removing a missing item should do nothing.");
    assert_eq!((arr.len(), arr.cap()), (4, cap));
    assert_eq!(arr.try_remove(&"z"), Err(NotFound));

    assert!(arr.contains(&"a"));
    assert_eq!(arr.position(&"c"), Some(3));

    assert_eq!(arr.remove(&"a"), Some("a"), "Only the first match should be removed.");
    assert_eq!(arr.iter().copied().collect::<Vec<_>>(), ["b", "a", "c"]);
    assert_eq!(arr.try_remove(&"a"), Ok("a"));
    assert!(!arr.contains(&"a"));
    assert_eq!(arr.cap(), cap - 2);
}

#[test]
fn test_remove_skips_holes() {
    let mut arr = GrowableArray::with_cap(4).expect("valid capacity");
    arr.add(Some(1));
    arr.set(0, Some(2)).expect("in bounds");

    // Slot 1 is now a hole within the logical range, while None is a real value elsewhere.
    arr.add(None);
    assert_eq!(arr.position(&None), Some(2), "Empty slots should never match.");
    assert_eq!(arr.remove(&None), Some(None));
    assert_eq!(arr.len(), 2);
}

#[test]
fn test_reset_and_clear() {
    let mut arr = GrowableArray::with_cap(2).expect("valid capacity");
    arr.add_range([1, 2, 3, 4, 5]);
    let cap = arr.cap();

    arr.clear();
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.cap(), cap, "clear should keep the capacity.");
    assert_eq!(arr.iter().next(), None);

    arr.add_range([6, 7]);
    assert_eq!(arr.get(0), Ok(Some(&6)), "Cleared slots should be reused.");

    arr.reset();
    assert_eq!((arr.len(), arr.cap()), (0, 2), "reset should restore the initial capacity.");
    arr.reset();
    assert_eq!((arr.len(), arr.cap()), (0, 2), "reset should be idempotent.");
}

#[test]
fn test_drop() {
    let counter = DropCounter::new();
    let mut arr = GrowableArray::with_cap(2).expect("valid capacity");
    arr.extend(iter::repeat_with(|| counter.clone()).take(5));
    assert_eq!(counter.drops(), 0, "Growth should move elements rather than drop them.");

    arr.clear();
    assert_eq!(counter.drops(), 5, "clear should drop every element.");

    arr.extend(iter::repeat_with(|| counter.clone()).take(3));
    drop(arr.remove_at(0));
    assert_eq!(counter.drops(), 6);

    arr.reset();
    assert_eq!(counter.drops(), 8, "reset should drop every element.");

    arr.extend(iter::repeat_with(|| counter.clone()).take(4));
    let mut iter = arr.into_iter();
    drop(iter.next());
    assert_eq!(counter.drops(), 9);

    drop(iter);
    assert_eq!(
        counter.drops(),
        12,
        "Dropping an owned iterator should drop the remaining elements."
    );
}

#[test]
fn test_iterators() {
    let empty: GrowableArray<u8> = GrowableArray::new();
    assert_eq!(empty.iter().next(), None);
    assert_eq!(empty.into_iter().next(), None);

    let arr: GrowableArray<_> = (0_u8..5).collect();
    assert_eq!(
        arr.iter().copied().collect::<Vec<_>>(),
        arr.iter().copied().collect::<Vec<_>>(),
        "Iteration should be restartable."
    );
    assert_eq!(arr.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);

    let mut total = 0_u8;
    for i in &arr {
        total += i;
    }
    assert_eq!(total, 10);

    assert_eq!(arr.into_iter().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_equality_and_hash() {
    let mut a = GrowableArray::with_cap(8).expect("valid capacity");
    a.add_range(0_usize..3);
    let b: GrowableArray<_> = (0_usize..3).collect();

    assert_eq!(a, b, "Equality should ignore capacity.");
    assert_ne!(a, (0_usize..4).collect::<GrowableArray<_>>());
    assert_eq!(a.clone(), a);

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one(&b),
        "Equal arrays should produce the same hash."
    );
}

#[test]
fn test_formatting() {
    let arr: GrowableArray<_> = ["a", "b"].into_iter().collect();
    assert_eq!(arr.to_string(), "[a, b]");
    assert_eq!(
        format!("{:?}", arr),
        r#"GrowableArray { contents: ["a", "b"], len: 2, cap: 2 }"#
    );
}

#[test]
fn test_errors() {
    fn build() -> Result<GrowableArray<&'static str>, GrowableArrayError> {
        let mut arr = GrowableArray::with_cap(1)?;
        arr.set(1, "x")?;
        Ok(arr)
    }

    let err = build().expect_err("set past the length should fail");
    assert!(err.is_index_out_of_bounds());
    assert_eq!(err.to_string(), "Index 1 out of bounds for collection with 0 elements!");
    assert_eq!(
        IndexOutOfBounds::try_from(err).ok(),
        Some(IndexOutOfBounds { index: 1, len: 0 })
    );

    assert!(GrowableArrayError::from(InvalidCapacity).is_invalid_capacity());
    assert_eq!(NotFound.to_string(), "No matching element found!");
}

proptest! {
    #[test]
    fn prop_add_doubles_capacity(cap in 1_usize..16, count in 0_usize..64) {
        let mut arr = GrowableArray::with_cap(cap).expect("valid capacity");
        let mut expected_cap = cap;

        for i in 0..count {
            if arr.len() == expected_cap {
                expected_cap *= 2;
            }
            arr.add(i);
            prop_assert_eq!(arr.cap(), expected_cap);
        }

        for i in 0..count {
            prop_assert_eq!(arr.get(i), Ok(Some(&i)));
        }
    }

    #[test]
    fn prop_remove_at_preserves_order(
        items in prop::collection::vec(any::<u16>(), 1..32),
        at in any::<prop::sample::Index>(),
    ) {
        let index = at.index(items.len());
        let mut arr: GrowableArray<u16> = items.iter().copied().collect();
        let cap = arr.cap();

        prop_assert_eq!(arr.remove_at(index), Ok(Some(items[index])));

        let mut expected = items.clone();
        expected.remove(index);
        prop_assert_eq!(arr.iter().copied().collect::<Vec<_>>(), expected);
        prop_assert_eq!(arr.cap(), cap - 1);
        prop_assert_eq!(arr.len(), items.len() - 1);
    }

    #[test]
    fn prop_clear_and_reset(cap in 1_usize..32, items in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut arr = GrowableArray::with_cap(cap).expect("valid capacity");
        arr.add_range(items);
        let grown_cap = arr.cap();

        arr.clear();
        prop_assert_eq!((arr.len(), arr.cap()), (0, grown_cap));

        arr.reset();
        prop_assert_eq!((arr.len(), arr.cap()), (0, cap));
        arr.reset();
        prop_assert_eq!((arr.len(), arr.cap()), (0, cap));
    }
}
