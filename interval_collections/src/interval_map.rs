use crate::bounds::check_comparable;
use crate::errors::{Error, Result};
use crate::intervals::Interval;
use crate::utils::position_from;
use bisection::bisect_right_by;
use itertools::Itertools;
use log::{debug, trace};
use std::cmp::Ordering;

/// A mapping from disjoint, non-empty intervals to values.
///
/// Putting a new interval overwrites whatever was mapped within it.  Unlike
/// [`crate::IntervalSet`], neighbour entries are never merged, even when they
/// carry the same value:
/// ```text
///    {[1, 10] => foo}  + (3, 6) => bar  =>  {[1, 3] => foo, (3, 6) => bar, [6, 10] => foo}
/// ```
/// Use [`IntervalMap::put_coalescing()`] to merge with equal neighbours.
pub struct IntervalMap<T, V> {
    entries: Vec<(Interval<T>, V)>,
}

impl<T, V> IntervalMap<T, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The stored entries, sorted by interval
    pub fn iter(&self) -> impl Iterator<Item = (&Interval<T>, &V)> {
        self.entries.iter().map(|(i, v)| (i, v))
    }
}

impl<T: PartialOrd, V> IntervalMap<T, V> {
    /// The entry with the largest lower bound that still admits value.
    fn candidate(&self, value: &T) -> Option<&(Interval<T>, V)> {
        let idx = bisect_right_by(&self.entries, |(r, _)| {
            if r.lower.left_of(value) {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        });
        idx.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The entry whose interval contains value, if any.
    pub fn get_entry(&self, value: &T) -> Option<(&Interval<T>, &V)> {
        self.candidate(value)
            .filter(|(r, _)| r.contains(value))
            .map(|(r, v)| (r, v))
    }

    /// The value associated with the interval that contains value.
    pub fn get(&self, value: &T) -> Option<&V> {
        self.get_entry(value).map(|(_, v)| v)
    }

    /// Same as [`IntervalMap::get_entry()`], but fails with
    /// [`Error::InvalidArgument`] when value cannot be compared with the
    /// stored bounds.
    pub fn try_get_entry(
        &self,
        value: &T,
    ) -> Result<Option<(&Interval<T>, &V)>> {
        check_comparable(value)?;
        match self.candidate(value) {
            Some((r, v)) => Ok(r.try_contains(value)?.then_some((r, v))),
            None => {
                if let Some((first, _)) = self.entries.first() {
                    first.lower.try_left_of(value)?;
                }
                Ok(None)
            }
        }
    }

    pub fn try_get(&self, value: &T) -> Result<Option<&V>> {
        Ok(self.try_get_entry(value)?.map(|(_, v)| v))
    }
}

impl<T: PartialOrd + Clone, V: Clone> IntervalMap<T, V> {
    /// Unmap all values in interval.  Entries that only partially overlap
    /// are truncated (or split in two), and keep their value.
    /// Returns the index at which an entry for interval would be inserted.
    fn clear_range(&mut self, interval: &Interval<T>) -> Result<usize> {
        let start = position_from(&self.entries, 0, |(r, _)| {
            Ok(r.upper.try_cmp(&interval.lower)? == Ordering::Greater)
        })?;
        let end = position_from(&self.entries, start, |(r, _)| {
            Ok(r.lower.try_cmp(&interval.upper)? != Ordering::Less)
        })?;

        // Only the first and last touched entries can leave something on the
        // left (resp. right) of interval.
        let mut kept = Vec::new();
        let mut insert_at = start;
        for (r, value) in self.entries.get(start..end).unwrap_or_default() {
            for piece in r.difference(interval)? {
                if piece.strictly_left_of_interval(interval)? {
                    insert_at += 1;
                }
                kept.push((piece, value.clone()));
            }
        }
        self.entries.splice(start..end, kept);
        trace!(
            "IntervalMap: cleared range over {} entries, now {} entries",
            end - start,
            self.entries.len()
        );
        Ok(insert_at)
    }

    /// Map all values of interval to value.  Existing entries within the
    /// interval are overwritten; no merging is done with neighbours, even if
    /// they have the same value.  Putting an empty interval does nothing.
    /// On error, the map is left unchanged.
    pub fn put(&mut self, interval: Interval<T>, value: V) -> Result<()> {
        if interval.try_is_empty()? {
            debug!("IntervalMap::put: ignoring empty interval");
            return Ok(());
        }
        let idx = self.clear_range(&interval)?;
        self.entries.insert(idx, (interval, value));
        Ok(())
    }

    /// Put all entries, stopping at the first error.
    pub fn put_all<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (Interval<T>, V)>,
    {
        for (interval, value) in entries {
            self.put(interval, value)?;
        }
        Ok(())
    }

    /// Unmap all values of interval.
    /// On error, the map is left unchanged.
    pub fn remove(&mut self, interval: &Interval<T>) -> Result<()> {
        if interval.try_is_empty()? {
            debug!("IntervalMap::remove: ignoring empty interval");
            return Ok(());
        }
        self.clear_range(interval)?;
        Ok(())
    }

    /// The smallest interval that encloses all entries.
    pub fn span(&self) -> Result<Interval<T>> {
        match (self.entries.first(), self.entries.last()) {
            (Some((first, _)), Some((last, _))) => Ok(Interval {
                lower: first.lower.clone(),
                upper: last.upper.clone(),
            }),
            (None, _) | (_, None) => Err(Error::EmptyContainer),
        }
    }

    /// A copy of the entries, sorted by interval
    pub fn as_map_of_ranges(&self) -> Vec<(Interval<T>, V)> {
        self.entries.clone()
    }

    /// The part of the map that lies within bound.  Entries that overlap
    /// bound are truncated.
    pub fn sub_range_map(&self, bound: &Interval<T>) -> Result<IntervalMap<T, V>> {
        let mut entries = Vec::new();
        if bound.try_is_empty()? {
            return Ok(IntervalMap { entries });
        }
        for (r, value) in &self.entries {
            let sub = r.intersection(bound)?;
            if !sub.try_is_empty()? {
                entries.push((sub, value.clone()));
            }
        }
        Ok(IntervalMap { entries })
    }
}

impl<T: PartialOrd + Clone, V: Clone + PartialEq> IntervalMap<T, V> {
    /// Same as [`IntervalMap::put()`], but the new entry is then merged with
    /// the neighbour entries it is connected to, if they map to the same
    /// value.
    /// On error, the map is left unchanged.
    pub fn put_coalescing(&mut self, interval: Interval<T>, value: V) -> Result<()> {
        if interval.try_is_empty()? {
            debug!("IntervalMap::put_coalescing: ignoring empty interval");
            return Ok(());
        }
        // Neighbours are compared after the range was cleared
        let saved = self.entries.clone();
        let res = self.coalesce(interval, value);
        if res.is_err() {
            self.entries = saved;
        }
        res
    }

    fn coalesce(&mut self, interval: Interval<T>, value: V) -> Result<()> {
        let mut idx = self.clear_range(&interval)?;
        let mut merged = interval;

        if let Some((prev, v)) = idx.checked_sub(1).and_then(|i| self.entries.get(i)) {
            if *v == value && prev.is_connected(&merged)? {
                merged = prev.convex_hull(&merged)?;
                idx -= 1;
                self.entries.remove(idx);
            }
        }
        if let Some((next, v)) = self.entries.get(idx) {
            if *v == value && next.is_connected(&merged)? {
                merged = merged.convex_hull(next)?;
                self.entries.remove(idx);
            }
        }
        self.entries.insert(idx, (merged, value));
        Ok(())
    }
}

impl<T, V> Default for IntervalMap<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, V: Clone> Clone for IntervalMap<T, V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: PartialOrd, V: PartialEq> PartialEq for IntervalMap<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a, T, V> IntoIterator for &'a IntervalMap<T, V> {
    type Item = &'a (Interval<T>, V);
    type IntoIter = std::slice::Iter<'a, (Interval<T>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: ::core::fmt::Debug + PartialOrd, V: ::core::fmt::Debug> ::core::fmt::Debug
    for IntervalMap<T, V>
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(r, v)| (r, v)))
            .finish()
    }
}

impl<T: ::core::fmt::Display + PartialOrd, V: ::core::fmt::Display>
    ::core::fmt::Display for IntervalMap<T, V>
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.entries
                .iter()
                .format_with(", ", |(r, v), cb| cb(&format_args!("{} => {}", r, v)))
        )
    }
}
