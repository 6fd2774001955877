use crate::bounds::{check_comparable, Bound};
use crate::errors::{Error, Result};
use crate::intervals::Interval;
use crate::utils::position_from;
use bisection::bisect_right_by;
use itertools::Itertools;
use log::{debug, trace};
use std::cmp::Ordering;

/// A set of disjoint, non-empty intervals, sorted by lower bound.
///
/// Adding an interval merges it with every stored interval it overlaps or
/// touches, so two stored intervals always have a gap between them:
/// ```text
///    {[1, 10], [11, 15)}  + [15, 20)  =>  {[1, 10], [11, 20)}
///    {[1, 10], [11, 20)}  - (5, 10)   =>  {[1, 5], [10, 10], [11, 20)}
/// ```
///
/// All derived views ([`IntervalSet::complement()`],
/// [`IntervalSet::sub_range_set()`], [`IntervalSet::as_ranges()`]) are
/// snapshots: they do not reflect later changes to the set.
pub struct IntervalSet<T> {
    ranges: Vec<Interval<T>>,
}

impl<T> IntervalSet<T> {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of disjoint intervals in the set
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }

    /// The stored intervals, in increasing order
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.ranges.iter()
    }
}

impl<T: PartialOrd> IntervalSet<T> {
    /// The stored interval with the largest lower bound that still admits
    /// value.  This is the only one that could contain value.
    fn candidate(&self, value: &T) -> Option<&Interval<T>> {
        // Greater for the prefix of intervals that start at or before value
        let idx = bisect_right_by(&self.ranges, |r| {
            if r.lower.left_of(value) {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        });
        idx.checked_sub(1).and_then(|i| self.ranges.get(i))
    }

    /// Whether any stored interval contains the value.
    pub fn contains(&self, value: &T) -> bool {
        self.range_containing(value).is_some()
    }

    /// The stored interval that contains value, if any.
    pub fn range_containing(&self, value: &T) -> Option<&Interval<T>> {
        self.candidate(value).filter(|r| r.contains(value))
    }

    /// Same as [`IntervalSet::range_containing()`], but fails with
    /// [`Error::InvalidArgument`] when value cannot be compared with the
    /// stored bounds.
    pub fn try_range_containing(
        &self,
        value: &T,
    ) -> Result<Option<&Interval<T>>> {
        check_comparable(value)?;
        match self.candidate(value) {
            Some(r) => Ok(r.try_contains(value)?.then_some(r)),
            None => {
                if let Some(first) = self.ranges.first() {
                    first.lower.try_left_of(value)?;
                }
                Ok(None)
            }
        }
    }

    pub fn try_contains(&self, value: &T) -> Result<bool> {
        Ok(self.try_range_containing(value)?.is_some())
    }

    /// Whether a single stored interval contains all of interval.  It is not
    /// enough for the union of the stored intervals to cover it.
    pub fn encloses(&self, interval: &Interval<T>) -> Result<bool> {
        if interval.try_is_empty()? {
            return Ok(true);
        }
        let idx = bisect_right_by(&self.ranges, |r| {
            match r.lower.partial_cmp(&interval.lower) {
                Some(Ordering::Less | Ordering::Equal) => Ordering::Greater,
                Some(Ordering::Greater) | None => Ordering::Less,
            }
        });
        match idx.checked_sub(1).and_then(|i| self.ranges.get(i)) {
            None => Ok(false),
            Some(r) => r.encloses(interval),
        }
    }

    /// Whether every interval of other is enclosed by one of self.
    pub fn encloses_all(&self, other: &IntervalSet<T>) -> Result<bool> {
        for r in &other.ranges {
            if !self.encloses(r)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Whether some stored interval shares at least one value with interval.
    pub fn intersects(&self, interval: &Interval<T>) -> Result<bool> {
        for r in &self.ranges {
            if r.intersects(interval)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<T: PartialOrd + Clone> IntervalSet<T> {
    /// Add an interval to the set.  Stored intervals that overlap it, or
    /// touch it without an excluded point in between, are merged into a
    /// single interval.  Adding an empty interval does nothing.
    /// On error, the set is left unchanged.
    pub fn add(&mut self, interval: Interval<T>) -> Result<()> {
        if interval.try_is_empty()? {
            debug!("IntervalSet::add: ignoring empty interval");
            return Ok(());
        }

        // [start, end) are the stored intervals connected to the new one
        let start = position_from(&self.ranges, 0, |r| {
            Ok(r.upper.try_cmp(&interval.lower)? != Ordering::Less)
        })?;
        let end = position_from(&self.ranges, start, |r| {
            Ok(r.lower.try_cmp(&interval.upper)? == Ordering::Greater)
        })?;

        let mut merged = interval;
        if start < end {
            if let Some(first) = self.ranges.get(start) {
                merged.lower = merged.lower.try_min(&first.lower)?;
            }
            if let Some(last) = self.ranges.get(end - 1) {
                merged.upper = merged.upper.try_max(&last.upper)?;
            }
        }
        self.ranges.splice(start..end, std::iter::once(merged));
        trace!(
            "IntervalSet::add: merged {} interval(s), now {} interval(s)",
            end - start,
            self.ranges.len()
        );
        Ok(())
    }

    /// Add all intervals, stopping at the first error.
    pub fn add_all<I>(&mut self, intervals: I) -> Result<()>
    where
        I: IntoIterator<Item = Interval<T>>,
    {
        for interval in intervals {
            self.add(interval)?;
        }
        Ok(())
    }

    /// Remove all values of interval from the set.  Stored intervals are
    /// truncated, dropped when fully covered, or split in two when the
    /// removed range is strictly inside them.
    /// On error, the set is left unchanged.
    pub fn remove(&mut self, interval: &Interval<T>) -> Result<()> {
        if interval.try_is_empty()? {
            debug!("IntervalSet::remove: ignoring empty interval");
            return Ok(());
        }

        // [start, end) are the stored intervals that intersect the removed one
        let start = position_from(&self.ranges, 0, |r| {
            Ok(r.upper.try_cmp(&interval.lower)? == Ordering::Greater)
        })?;
        let end = position_from(&self.ranges, start, |r| {
            Ok(r.lower.try_cmp(&interval.upper)? != Ordering::Less)
        })?;

        let mut kept = Vec::new();
        for r in self.ranges.get(start..end).unwrap_or_default() {
            kept.extend(r.difference(interval)?);
        }
        self.ranges.splice(start..end, kept);
        trace!(
            "IntervalSet::remove: touched {} interval(s), now {} interval(s)",
            end - start,
            self.ranges.len()
        );
        Ok(())
    }

    /// Remove all intervals, stopping at the first error.
    pub fn remove_all<'a, I>(&mut self, intervals: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Interval<T>>,
        T: 'a,
    {
        for interval in intervals {
            self.remove(interval)?;
        }
        Ok(())
    }

    /// The smallest interval that encloses all stored intervals.
    pub fn span(&self) -> Result<Interval<T>> {
        match (self.ranges.first(), self.ranges.last()) {
            (Some(first), Some(last)) => Ok(Interval {
                lower: first.lower.clone(),
                upper: last.upper.clone(),
            }),
            (None, _) | (_, None) => Err(Error::EmptyContainer),
        }
    }

    /// All values that are not in the set.
    pub fn complement(&self) -> Result<IntervalSet<T>> {
        self.complement_within(&Interval::doubly_unbounded())
    }

    /// All values of universe that are not in the set.
    /// ```text
    ///    set:         {[1, 5], [10, 10], [11, 20)}
    ///    complement:  {(, 1), (5, 10), (10, 11), [20,)}
    /// ```
    pub fn complement_within(
        &self,
        universe: &Interval<T>,
    ) -> Result<IntervalSet<T>> {
        let mut gaps = Vec::with_capacity(self.ranges.len() + 1);
        let mut lower = Bound::LeftUnbounded;
        for r in &self.ranges {
            gaps.push(Interval {
                lower,
                upper: r.lower.clone(),
            });
            lower = r.upper.clone();
        }
        gaps.push(Interval {
            lower,
            upper: Bound::RightUnbounded,
        });

        let mut ranges = Vec::with_capacity(gaps.len());
        for gap in &gaps {
            let g = gap.intersection(universe)?;
            if !g.try_is_empty()? {
                ranges.push(g);
            }
        }
        Ok(IntervalSet { ranges })
    }

    /// The part of the set that lies within bound.  Intervals that overlap
    /// bound are truncated.
    pub fn sub_range_set(&self, bound: &Interval<T>) -> Result<IntervalSet<T>> {
        let mut ranges = Vec::new();
        if bound.try_is_empty()? {
            return Ok(IntervalSet { ranges });
        }
        for r in &self.ranges {
            let sub = r.intersection(bound)?;
            if !sub.try_is_empty()? {
                ranges.push(sub);
            }
        }
        Ok(IntervalSet { ranges })
    }

    /// A copy of the stored intervals, in increasing order
    pub fn as_ranges(&self) -> Vec<Interval<T>> {
        self.ranges.clone()
    }
}

impl<T> Default for IntervalSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for IntervalSet<T> {
    fn clone(&self) -> Self {
        Self {
            ranges: self.ranges.clone(),
        }
    }
}

impl<T: PartialOrd> PartialEq for IntervalSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges
    }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

impl<T: ::core::fmt::Debug + PartialOrd> ::core::fmt::Debug for IntervalSet<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.debug_set().entries(self.ranges.iter()).finish()
    }
}

impl<T: ::core::fmt::Display + PartialOrd> ::core::fmt::Display
    for IntervalSet<T>
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        write!(f, "{{{}}}", self.ranges.iter().format(", "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn set_of(intervals: Vec<Interval<i32>>) -> IntervalSet<i32> {
        let mut set = IntervalSet::new();
        set.add_all(intervals).unwrap();
        set
    }

    fn assert_ranges(set: &IntervalSet<i32>, expected: &str) {
        assert_eq!(format!("{}", set), expected);
    }

    #[test]
    fn test_add() {
        let mut set = IntervalSet::new();
        set.add(Interval::new_closed_closed(1, 10)).unwrap();
        assert_ranges(&set, "{[1, 10]}");

        // Not connected, even for integers
        set.add(Interval::new_closed_open(11, 15)).unwrap();
        assert_ranges(&set, "{[1, 10], [11, 15)}");

        // Connected through 15
        set.add(Interval::new_closed_open(15, 20)).unwrap();
        assert_ranges(&set, "{[1, 10], [11, 20)}");

        // Empty intervals are ignored
        set.add(Interval::new_open_closed(0, 0)).unwrap();
        set.add(Interval::new_open_open(0, 0)).unwrap();
        set.add(Interval::new_closed_open(30, 25)).unwrap();
        assert_ranges(&set, "{[1, 10], [11, 20)}");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_add_idempotent() {
        let mut set = set_of(vec![
            Interval::new_closed_closed(1, 10),
            Interval::new_open_open(20, 30),
        ]);
        let before = set.clone();
        set.add(Interval::new_open_open(20, 30)).unwrap();
        set.add(Interval::new_closed_closed(1, 10)).unwrap();
        assert_eq!(set, before);
    }

    #[test]
    fn test_add_merge() {
        // overlapping
        let set = set_of(vec![
            Interval::new_closed_closed(1, 10),
            Interval::new_closed_closed(5, 15),
        ]);
        assert_ranges(&set, "{[1, 15]}");

        // touching, one bound closed
        let set = set_of(vec![
            Interval::new_closed_open(1, 5),
            Interval::new_closed_closed(5, 9),
        ]);
        assert_ranges(&set, "{[1, 9]}");
        let set = set_of(vec![
            Interval::new_open_open(5, 9),
            Interval::new_closed_closed(1, 5),
        ]);
        assert_ranges(&set, "{[1, 9)}");

        // touching, both bounds open: 5 is excluded
        let set = set_of(vec![
            Interval::new_open_open(1, 5),
            Interval::new_open_open(5, 9),
        ]);
        assert_ranges(&set, "{(1, 5), (5, 9)}");

        // bridging several stored intervals
        let mut set = set_of(vec![
            Interval::new_closed_closed(1, 2),
            Interval::new_closed_closed(4, 5),
            Interval::new_closed_closed(7, 8),
            Interval::new_closed_closed(20, 30),
        ]);
        set.add(Interval::new_open_open(2, 8)).unwrap();
        assert_ranges(&set, "{[1, 8], [20, 30]}");

        // nested in a stored interval
        set.add(Interval::new_single(25)).unwrap();
        assert_ranges(&set, "{[1, 8], [20, 30]}");

        // inserted in the middle, kept sorted
        set.add(Interval::new_closed_closed(10, 12)).unwrap();
        assert_ranges(&set, "{[1, 8], [10, 12], [20, 30]}");

        // swallowing everything
        set.add(Interval::new_unbounded_open(100)).unwrap();
        assert_ranges(&set, "{(, 100)}");
        set.add(Interval::new_closed_unbounded(100)).unwrap();
        assert_ranges(&set, "{(,)}");
    }

    #[test]
    fn test_remove() {
        let mut set = set_of(vec![Interval::new_closed_closed(1, 10)]);
        set.remove(&Interval::new_open_open(5, 10)).unwrap();
        assert_ranges(&set, "{[1, 5], [10, 10]}");

        let mut set = set_of(vec![
            Interval::new_closed_closed(1, 10),
            Interval::new_closed_open(11, 20),
        ]);
        set.remove(&Interval::new_open_open(5, 10)).unwrap();
        assert_ranges(&set, "{[1, 5], [10, 10], [11, 20)}");

        // truncate on both sides, drop the middle one
        set.remove(&Interval::new_closed_closed(3, 15)).unwrap();
        assert_ranges(&set, "{[1, 3), (15, 20)}");

        // no intersection
        set.remove(&Interval::new_closed_closed(3, 15)).unwrap();
        set.remove(&Interval::new_closed_closed(20, 25)).unwrap();
        set.remove(&Interval::new_open_open(1, 1)).unwrap();
        assert_ranges(&set, "{[1, 3), (15, 20)}");

        // open bound, only the point itself is removed
        set.remove(&Interval::new_single(1)).unwrap();
        assert_ranges(&set, "{(1, 3), (15, 20)}");

        set.remove(&Interval::doubly_unbounded()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_contains() {
        let set = set_of(vec![
            Interval::new_closed_closed(1, 5),
            Interval::new_single(10),
            Interval::new_closed_open(11, 20),
        ]);
        assert!(!set.contains(&0));
        assert!(set.contains(&1));
        assert!(set.contains(&5));
        assert!(!set.contains(&8));
        assert!(set.contains(&10));
        assert!(set.contains(&11));
        assert!(set.contains(&19));
        assert!(!set.contains(&20));

        for p in -5..25 {
            assert_eq!(
                set.contains(&p),
                set.iter().any(|r| r.contains(&p)),
                "contains({p})"
            );
        }

        assert_eq!(
            set.range_containing(&15),
            Some(&Interval::new_closed_open(11, 20))
        );
        assert_eq!(set.range_containing(&10), Some(&Interval::new_single(10)));
        assert_eq!(set.range_containing(&8), None);
        assert_eq!(IntervalSet::<i32>::new().range_containing(&8), None);

        let floats = {
            let mut s = IntervalSet::new();
            s.add(Interval::new_closed_open(1.0, 2.0)).unwrap();
            s
        };
        assert!(floats.contains(&1.5));
        assert!(!floats.contains(&f64::NAN));
    }

    #[test]
    fn test_encloses() {
        let set = set_of(vec![
            Interval::new_closed_closed(1, 5),
            Interval::new_closed_open(11, 20),
        ]);
        assert_eq!(set.encloses(&Interval::new_closed_closed(2, 3)), Ok(true));
        assert_eq!(set.encloses(&Interval::new_closed_closed(1, 5)), Ok(true));
        assert_eq!(set.encloses(&Interval::new_open_open(11, 20)), Ok(true));
        assert_eq!(set.encloses(&Interval::new_closed_closed(11, 20)), Ok(false));
        assert_eq!(set.encloses(&Interval::new_closed_closed(4, 12)), Ok(false));
        assert_eq!(set.encloses(&Interval::new_closed_closed(0, 1)), Ok(false));
        assert_eq!(set.encloses(&Interval::empty()), Ok(true));

        let other = set_of(vec![
            Interval::new_closed_closed(2, 3),
            Interval::new_closed_closed(12, 13),
        ]);
        assert_eq!(set.encloses_all(&other), Ok(true));
        assert_eq!(other.encloses_all(&set), Ok(false));

        assert_eq!(set.intersects(&Interval::new_open_open(5, 11)), Ok(false));
        assert_eq!(set.intersects(&Interval::new_closed_open(5, 11)), Ok(true));
    }

    #[test]
    fn test_span() {
        let mut set = IntervalSet::<i32>::new();
        assert_eq!(set.span(), Err(Error::EmptyContainer));

        set.add(Interval::new_open_open(1, 5)).unwrap();
        set.add(Interval::new_closed_closed(11, 20)).unwrap();
        let span = set.span().unwrap();
        assert_eq!(span, Interval::new_open_closed(1, 20));
        for r in &set {
            assert_eq!(span.encloses(r), Ok(true));
        }
        let mut hull = Interval::empty();
        for r in set.as_ranges() {
            hull = hull.convex_hull(&r).unwrap();
        }
        assert_eq!(hull, span);
    }

    #[test]
    fn test_complement() {
        let set = set_of(vec![
            Interval::new_closed_closed(1, 5),
            Interval::new_single(10),
            Interval::new_closed_open(11, 20),
        ]);
        assert_ranges(
            &set.complement().unwrap(),
            "{(, 1), (5, 10), (10, 11), [20,)}",
        );

        let universe = Interval::new_closed_closed(0, 30);
        let complement = set.complement_within(&universe).unwrap();
        assert_ranges(&complement, "{[0, 1), (5, 10), (10, 11), [20, 30]}");

        // the complement and the set cover the universe, without overlap
        let mut all = set.sub_range_set(&universe).unwrap();
        for r in &complement {
            assert_eq!(all.intersects(r), Ok(false));
        }
        all.add_all(complement.as_ranges()).unwrap();
        assert_ranges(&all, "{[0, 30]}");

        assert_ranges(
            &IntervalSet::<i32>::new().complement().unwrap(),
            "{(,)}",
        );
        let full = set_of(vec![Interval::doubly_unbounded()]);
        assert!(full.complement().unwrap().is_empty());
    }

    #[test]
    fn test_sub_range_set() {
        let set = set_of(vec![
            Interval::new_closed_closed(1, 5),
            Interval::new_single(10),
            Interval::new_closed_open(11, 20),
        ]);
        assert_ranges(
            &set.sub_range_set(&Interval::new_closed_closed(5, 8)).unwrap(),
            "{[5, 5]}",
        );
        assert_ranges(
            &set.sub_range_set(&Interval::new_open_open(3, 15)).unwrap(),
            "{(3, 5], [10, 10], [11, 15)}",
        );
        assert!(set
            .sub_range_set(&Interval::new_open_open(3, 3))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_snapshot() {
        let mut set = set_of(vec![Interval::new_closed_closed(1, 10)]);
        let ranges = set.as_ranges();
        let sub = set.sub_range_set(&Interval::new_closed_closed(0, 5)).unwrap();
        set.remove(&Interval::new_closed_closed(2, 3)).unwrap();
        assert_eq!(ranges, vec![Interval::new_closed_closed(1, 10)]);
        assert_ranges(&sub, "{[1, 5]}");
        assert_ranges(&set, "{[1, 2), (3, 10]}");
    }

    #[test]
    fn test_incomparable() {
        let mut set = IntervalSet::new();
        set.add(Interval::new_closed_closed(1.0, 2.0)).unwrap();
        let before = set.clone();

        let nan = Interval::new_closed_closed(f64::NAN, 3.0);
        assert!(matches!(set.add(nan.clone()), Err(Error::InvalidArgument(_))));
        assert!(matches!(set.remove(&nan), Err(Error::InvalidArgument(_))));
        assert!(set.encloses(&nan).is_err());
        assert!(set.sub_range_set(&nan).is_err());
        assert_eq!(set, before);
    }

    #[test]
    fn test_io() {
        let set = set_of(vec![
            Interval::new_closed_closed(1, 5),
            Interval::new_closed_open(11, 20),
        ]);
        assert_eq!(format!("{}", set), "{[1, 5], [11, 20)}");
        assert_eq!(
            format!("{:?}", set),
            "{(LeftOf(1),RightOf(5)), (LeftOf(11),LeftOf(20))}"
        );
        assert_eq!(format!("{}", IntervalSet::<i32>::new()), "{}");
    }

    #[test]
    fn test_add_all() {
        let mut set = IntervalSet::new();
        let res = set.add_all(vec![
            Interval::new_closed_closed(1.0, 2.0),
            Interval::new_closed_closed(f64::NAN, 4.0),
            Interval::new_closed_closed(5.0, 6.0),
        ]);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));

        // Stopped at the first error, earlier intervals were added
        assert_eq!(set.to_string(), "{[1, 2]}");
    }

    #[test]
    fn test_remove_all() {
        let mut set = set_of(vec![Interval::new_closed_open(0, 100)]);
        set.remove_all(&[
            Interval::new_closed_open(10, 20),
            Interval::new_closed_closed(50, 60),
            Interval::new_closed_open(200, 300),
        ])
        .unwrap();
        assert_ranges(&set, "{[0, 10), [20, 50), (60, 100)}");

        set.remove_all(&Vec::<Interval<i32>>::new()).unwrap();
        assert_eq!(set.len(), 3);

        let mut set = IntervalSet::new();
        set.add(Interval::new_closed_closed(0.0, 10.0)).unwrap();
        let res = set.remove_all(&[
            Interval::new_closed_closed(1.0, 2.0),
            Interval::new_closed_closed(f64::NAN, 5.0),
            Interval::new_closed_closed(8.0, 9.0),
        ]);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
        assert_eq!(set.to_string(), "{[0, 1), (2, 10]}");
    }

    #[test]
    fn test_try_contains() {
        let mut set = IntervalSet::new();
        set.add(Interval::new_closed_open(1.0, 2.0)).unwrap();
        set.add(Interval::new_closed_closed(4.0, 5.0)).unwrap();

        assert!(set.try_contains(&1.0).unwrap());
        assert!(!set.try_contains(&2.0).unwrap());
        assert!(!set.try_contains(&0.0).unwrap());
        assert!(!set.try_contains(&6.0).unwrap());
        assert_eq!(
            set.try_range_containing(&4.5).unwrap(),
            Some(&Interval::new_closed_closed(4.0, 5.0))
        );
        assert_eq!(set.try_range_containing(&3.0).unwrap(), None);

        assert!(matches!(
            set.try_contains(&f64::NAN),
            Err(Error::InvalidArgument(_))
        ));
        assert!(set.try_range_containing(&f64::NAN).is_err());
        assert!(IntervalSet::<f64>::new().try_contains(&f64::NAN).is_err());

        // The infallible version reports the value as absent
        assert!(!set.contains(&f64::NAN));
        assert_eq!(set.range_containing(&f64::NAN), None);
    }

    /// Half-integers from -1 to 21, so that bounds (integers) and the
    /// values between them are both sampled.
    fn sample_points() -> Vec<f64> {
        (-2_i32..=42).map(|k| f64::from(k) * 0.5).collect()
    }

    fn random_interval(rng: &mut StdRng) -> Interval<f64> {
        let a = f64::from(rng.random_range(0_i32..20));
        let b = a + f64::from(rng.random_range(0_i32..8));
        match rng.random_range(0..6) {
            0 => Interval::new_closed_closed(a, b),
            1 => Interval::new_closed_open(a, b),
            2 => Interval::new_open_closed(a, b),
            3 => Interval::new_open_open(a, b),
            4 => Interval::new_unbounded_open(b),
            _ => Interval::new_open_unbounded(a),
        }
    }

    #[test]
    fn test_random_model() {
        let mut rng = StdRng::seed_from_u64(42);
        let points = sample_points();

        for _ in 0..500 {
            let mut set = IntervalSet::new();
            let mut model = vec![false; points.len()];
            for _ in 0..rng.random_range(1..8) {
                let interval = random_interval(&mut rng);
                let add = rng.random_bool(0.6);
                if add {
                    set.add(interval.clone()).unwrap();
                } else {
                    set.remove(&interval).unwrap();
                }
                for (m, p) in model.iter_mut().zip(&points) {
                    if interval.contains(p) {
                        *m = add;
                    }
                }
            }

            for (m, p) in model.iter().zip(&points) {
                assert_eq!(set.contains(p), *m, "{set} at {p}");
                assert_eq!(set.try_contains(p).unwrap(), *m, "{set} at {p}");
                if let Some(r) = set.range_containing(p) {
                    assert!(r.contains(p), "{set}: {r} at {p}");
                }
            }

            // Sorted, non-empty, and neither overlapping nor touching
            for r in &set {
                assert!(!r.is_empty(), "{set}");
            }
            for (a, b) in set.iter().tuple_windows() {
                assert!(a.strictly_left_of_interval(b).unwrap(), "{set}");
                assert!(!a.is_connected(b).unwrap(), "{set}");
            }

            let complement = set.complement().unwrap();
            let bound = random_interval(&mut rng);
            let sub = set.sub_range_set(&bound).unwrap();
            for (m, p) in model.iter().zip(&points) {
                assert_eq!(complement.contains(p), !*m, "{complement} at {p}");
                assert_eq!(
                    sub.contains(p),
                    *m && bound.contains(p),
                    "{set} within {bound} at {p}"
                );
            }
        }
    }
}
