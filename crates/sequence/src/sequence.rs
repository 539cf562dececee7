use std::fmt::Display;

use crate::error::{Result, SequenceError};
use crate::stable_sort;
use crate::util::clamp_splice_range;

/// Owned, ordered, resizable collection with array-style convenience operations.
///
/// - Indices are zero-based.
/// - Mutating operations that return `&mut Self` can be chained.
/// - Each `to_*` operation has a mutating twin and leaves the receiver untouched.
/// - Positional removal clamps out-of-range arguments instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns the element at `index`, or [`SequenceError::IndexOutOfBounds`].
    pub fn at(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items.get(index).ok_or_else(|| {
            tracing::debug!(index, len, "Rejected out-of-range sequence access");
            SequenceError::IndexOutOfBounds { index, len }
        })
    }

    pub fn length(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self
    }

    pub fn unshift(&mut self, item: T) -> &mut Self {
        self.items.insert(0, item);
        self
    }

    /// Removes `delete_count` elements starting at `start` and inserts `elements` in their place.
    ///
    /// `start` is clamped to `[0, len]`; the removal end `start + delete_count`
    /// is clamped to `[start, len]`.
    pub fn splice<I>(&mut self, start: isize, delete_count: isize, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        let range = resolve_range(self.items.len(), start, delete_count);
        self.items.splice(range, elements);
        self
    }

    /// Removes at most one element; same clamping as [`Sequence::splice`].
    pub fn remove_at(&mut self, index: isize) -> &mut Self {
        self.splice(index, 1, [])
    }

    /// Appends the elements of each sequence in `others`, in order.
    pub fn merge<I>(&mut self, others: I) -> &mut Self
    where
        I: IntoIterator<Item = Sequence<T>>,
    {
        for other in others {
            self.items.extend(other.items);
        }
        self
    }

    /// Stable ascending sort under `less`.
    pub fn sort<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        stable_sort::sort_by_less(&mut self.items, &mut less);
        self
    }

    /// Stable descending sort: sorts under `less` with its arguments swapped.
    ///
    /// Elements that compare equal keep their input order, so this is not
    /// the same as sorting and then inverting the sequence.
    pub fn reverse<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut swapped = |a: &T, b: &T| less(b, a);
        stable_sort::sort_by_less(&mut self.items, &mut swapped);
        self
    }

    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(|item| predicate(item))
    }

    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(|item| predicate(item))
    }

    pub fn includes<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.some(predicate)
    }

    pub fn map<U, F>(&self, transform: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence {
            items: self.items.iter().map(transform).collect(),
        }
    }

    /// Index of the first element matching `predicate`, or `-1`.
    pub fn index_of<P>(&self, predicate: P) -> isize
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .position(predicate)
            .map_or(-1, |index| index as isize)
    }

    /// Index of the last element matching `predicate`, or `-1`.
    pub fn last_index_of<P>(&self, predicate: P) -> isize
    where
        P: FnMut(&T) -> bool,
    {
        self.items
            .iter()
            .rposition(predicate)
            .map_or(-1, |index| index as isize)
    }
}

impl<T: Default> Sequence<T> {
    /// Removes and returns the last element; `T::default()` when empty.
    pub fn pop(&mut self) -> T {
        self.items.pop().unwrap_or_default()
    }

    /// Removes and returns the first element, moving the rest down by one.
    /// Returns `T::default()` when empty.
    pub fn shift(&mut self) -> T {
        if self.items.is_empty() {
            return T::default();
        }
        self.items.remove(0)
    }
}

impl<T: Clone> Sequence<T> {
    /// Copying twin of [`Sequence::splice`].
    pub fn to_spliced<I>(&self, start: isize, delete_count: isize, elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let range = resolve_range(self.items.len(), start, delete_count);
        let mut items = Vec::with_capacity(self.items.len() - range.len());
        items.extend_from_slice(&self.items[..range.start]);
        items.extend(elements);
        items.extend_from_slice(&self.items[range.end..]);
        Self { items }
    }

    /// Copying twin of [`Sequence::remove_at`].
    pub fn to_removed(&self, index: isize) -> Self {
        self.to_spliced(index, 1, [])
    }

    /// New sequence holding the receiver's elements followed by each of `others`.
    pub fn concat<'a, I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = &'a Sequence<T>>,
        T: 'a,
    {
        let mut items = self.items.clone();
        for other in others {
            items.extend_from_slice(&other.items);
        }
        Self { items }
    }

    /// Copying twin of [`Sequence::sort`].
    pub fn to_sorted<F>(&self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut copy = self.clone();
        copy.sort(less);
        copy
    }

    /// Copying twin of [`Sequence::reverse`].
    pub fn to_reversed<F>(&self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut copy = self.clone();
        copy.reverse(less);
        copy
    }

    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// First element matching `predicate` and `true`, or `(T::default(), false)`.
    pub fn find<P>(&self, mut predicate: P) -> (T, bool)
    where
        P: FnMut(&T) -> bool,
    {
        match self.items.iter().find(|item| predicate(item)) {
            Some(item) => (item.clone(), true),
            None => (T::default(), false),
        }
    }

    /// Last element matching `predicate` and `true`, or `(T::default(), false)`.
    pub fn find_last<P>(&self, mut predicate: P) -> (T, bool)
    where
        P: FnMut(&T) -> bool,
    {
        match self.items.iter().rev().find(|item| predicate(item)) {
            Some(item) => (item.clone(), true),
            None => (T::default(), false),
        }
    }
}

impl<T: Display> Sequence<T> {
    /// Renders each element with `Display`, separated by `separator`.
    pub fn join(&self, separator: &str) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&item.to_string());
        }
        out
    }
}

/// Left-to-right fold: `combine(...combine(combine(initial, s[0]), s[1])..., s[n-1])`.
pub fn reduce<T, U, F>(sequence: &Sequence<T>, initial: U, combine: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    sequence.items.iter().fold(initial, combine)
}

fn resolve_range(len: usize, start: isize, delete_count: isize) -> std::ops::Range<usize> {
    let range = clamp_splice_range(len, start, delete_count);
    let requested_end = start.saturating_add(delete_count.max(0));
    if range.start as isize != start || range.end as isize != requested_end {
        tracing::trace!(
            start,
            delete_count,
            len,
            resolved_start = range.start,
            resolved_end = range.end,
            "Clamped splice range"
        );
    }
    range
}
