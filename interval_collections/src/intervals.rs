use crate::bounds::{check_comparable, Bound};
use crate::errors::Result;
use crate::multi_intervals::MultiInterval;
use std::cmp::Ordering;

/// An interval of values.
pub struct Interval<T> {
    pub(crate) lower: Bound<T>,
    pub(crate) upper: Bound<T>,
}

impl<T> Interval<T> {
    fn from_cuts(lower: Bound<T>, upper: Bound<T>) -> Self {
        Interval { lower, upper }
    }

    /// `[lower, upper)`
    pub fn new_closed_open(lower: T, upper: T) -> Self {
        Self::from_cuts(Bound::LeftOf(lower), Bound::LeftOf(upper))
    }

    /// `[lower, upper]`
    pub fn new_closed_closed(lower: T, upper: T) -> Self {
        Self::from_cuts(Bound::LeftOf(lower), Bound::RightOf(upper))
    }

    /// `(lower, upper)`
    pub fn new_open_open(lower: T, upper: T) -> Self {
        Self::from_cuts(Bound::RightOf(lower), Bound::LeftOf(upper))
    }

    /// `(lower, upper]`
    pub fn new_open_closed(lower: T, upper: T) -> Self {
        Self::from_cuts(Bound::RightOf(lower), Bound::RightOf(upper))
    }

    /// `(, upper]`: every value up to and including upper
    pub fn new_unbounded_closed(upper: T) -> Self {
        Self::from_cuts(Bound::LeftUnbounded, Bound::RightOf(upper))
    }

    /// `(, upper)`: every value strictly below upper
    pub fn new_unbounded_open(upper: T) -> Self {
        Self::from_cuts(Bound::LeftUnbounded, Bound::LeftOf(upper))
    }

    /// `[lower,)`: every value from lower onward
    pub fn new_closed_unbounded(lower: T) -> Self {
        Self::from_cuts(Bound::LeftOf(lower), Bound::RightUnbounded)
    }

    /// `(lower,)`: every value strictly above lower
    pub fn new_open_unbounded(lower: T) -> Self {
        Self::from_cuts(Bound::RightOf(lower), Bound::RightUnbounded)
    }

    /// `(,)`, the universe of all values
    pub fn doubly_unbounded() -> Self {
        Self::from_cuts(Bound::LeftUnbounded, Bound::RightUnbounded)
    }

    /// Returns an empty interval.  Note that there are multiple representations
    /// for empty interval, though they are all equivalent.
    pub fn empty() -> Self {
        Self::from_cuts(Bound::RightUnbounded, Bound::LeftUnbounded)
    }

    /// The lower bound.  Returns None for an unbounded interval (i.e. lower
    /// is -infinity).
    pub fn lower(&self) -> Option<&T> {
        self.lower.value()
    }

    /// Whether the lower bound is part of the interval.
    /// Return false if lower bound is -infinity.
    pub fn lower_inclusive(&self) -> bool {
        matches!(self.lower, Bound::LeftOf(_))
    }

    /// True if the lower bound is infinite
    pub fn lower_unbounded(&self) -> bool {
        matches!(self.lower, Bound::LeftUnbounded)
    }

    /// The upper bound.  Returns None for an unbounded interval (i.e. upper
    /// is +infinity).
    pub fn upper(&self) -> Option<&T> {
        self.upper.value()
    }

    /// Whether the upper bound is part of the interval.
    /// Return false if upper bound is +infinity.
    pub fn upper_inclusive(&self) -> bool {
        matches!(self.upper, Bound::RightOf(_))
    }

    /// True if the upper bound is infinite
    pub fn upper_unbounded(&self) -> bool {
        matches!(self.upper, Bound::RightUnbounded)
    }

    /// Converts from `Interval<T>` to `Interval<&T>`
    pub fn as_ref(&self) -> Interval<&T> {
        Interval {
            lower: self.lower.as_ref(),
            upper: self.upper.as_ref(),
        }
    }
}

impl<T: Clone> Interval<T> {
    /// Returns an interval that contains a single value (`[value,value]`)
    pub fn new_single(value: T) -> Self {
        Interval::new_closed_closed(value.clone(), value)
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Whether value is contained in the interval
    pub fn contains(&self, value: &T) -> bool {
        self.lower.left_of(value) && self.upper.right_of(value)
    }

    /// Same as [`Interval::contains()`], but fails with
    /// [`crate::Error::InvalidArgument`] when value cannot be compared with
    /// the bounds.
    pub fn try_contains(&self, value: &T) -> Result<bool> {
        check_comparable(value)?;
        Ok(self.lower.try_left_of(value)? && self.upper.try_right_of(value)?)
    }

    /// Whether self contains all values of the second interval (and possibly
    /// more).  False when the bounds cannot be compared.
    pub fn contains_interval(&self, other: &Self) -> bool {
        self.encloses(other).unwrap_or(false)
    }

    /// True if the interval contains no element.
    /// Bounds are compared as written, without looking at whether the type
    /// is discrete, so `(1, 2)` on integers is not empty.
    /// An interval whose bounds cannot be compared (a NaN bound for
    /// instance) is considered empty.
    /// ```
    ///    use interval_collections::Interval;
    ///    assert!(Interval::new_closed_open(1, 1).is_empty());
    ///    assert!(!Interval::new_open_open(1, 2).is_empty());
    ///    assert!(Interval::new_closed_open(1.0, f32::NAN).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self.upper.partial_cmp(&self.lower) {
            None => true, //  can't compare bounds
            Some(Ordering::Equal | Ordering::Less) => true,
            Some(Ordering::Greater) => false,
        }
    }

    /// Same as [`Interval::is_empty()`], but reports incomparable bounds as
    /// an error rather than as an empty interval.
    pub fn try_is_empty(&self) -> Result<bool> {
        Ok(match self.upper.try_cmp(&self.lower)? {
            Ordering::Equal | Ordering::Less => true,
            Ordering::Greater => false,
        })
    }

    /// Whether the two intervals contain the same set of values
    pub fn equivalent(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else if other.is_empty() {
            false
        } else {
            self.lower == other.lower && self.upper == other.upper
        }
    }

    /// True if self is of the form `[A, A]`.
    pub fn is_single(&self) -> bool {
        match (&self.lower, &self.upper) {
            (Bound::LeftOf(lp), Bound::RightOf(rp)) => *lp == *rp,
            (
                Bound::LeftUnbounded
                | Bound::LeftOf(_)
                | Bound::RightOf(_)
                | Bound::RightUnbounded,
                _,
            ) => false,
        }
    }

    /// Whether every value of other is also in self.  An empty interval is
    /// enclosed by any interval.
    /// ```txt
    ///    [-------- self --------]
    ///         [--- other ---]        => enclosed
    /// ```
    pub fn encloses(&self, other: &Self) -> Result<bool> {
        if other.try_is_empty()? {
            return Ok(true);
        }
        Ok(self.lower.try_cmp(&other.lower)? != Ordering::Greater
            && other.upper.try_cmp(&self.upper)? != Ordering::Greater)
    }

    /// Whether the two intervals overlap, i.e. have at least one point in
    /// common.
    pub fn intersects(&self, right: &Self) -> Result<bool> {
        if self.try_is_empty()? || right.try_is_empty()? {
            return Ok(false);
        }
        Ok(self.lower.try_cmp(&right.upper)? == Ordering::Less
            && right.lower.try_cmp(&self.upper)? == Ordering::Less)
    }

    /// Whether the union of the two intervals is itself an interval: they
    /// either overlap, or touch with at least one closed bound at the common
    /// point.  False if either interval is empty.
    /// ```txt
    ///    [----)[----]      connected  (the first bound excludes, the second includes)
    ///    [----](----]      connected
    ///    [----)(----]      not connected, the common point is excluded
    /// ```
    pub fn is_connected(&self, right: &Self) -> Result<bool> {
        if self.try_is_empty()? || right.try_is_empty()? {
            return Ok(false);
        }
        Ok(self.lower.try_cmp(&right.upper)? != Ordering::Greater
            && right.lower.try_cmp(&self.upper)? != Ordering::Greater)
    }

    /// Whether every value in self is strictly less than (<) every value in
    /// right (returns True if either interval is empty).
    pub fn strictly_left_of_interval(&self, right: &Self) -> Result<bool> {
        Ok(self.try_is_empty()?
            || right.try_is_empty()?
            || self.upper.try_cmp(&right.lower)? != Ordering::Greater)
    }

    /// Whether every value in self is strictly less than (<) X
    /// (returns True is if self is empty).
    /// ```txt
    ///    [------] .
    ///             X    => strictly left of the interval
    /// ```
    pub fn strictly_left_of(&self, x: &T) -> bool {
        self.is_empty() || self.upper.left_of(x)
    }

    /// Whether X is strictly less than (<) every value in self.
    /// (returns True is if self is empty).
    /// ```txt
    ///    . [------]
    ///    X           => strictly right of the interval
    /// ```
    pub fn strictly_right_of(&self, x: &T) -> bool {
        self.is_empty() || self.lower.right_of(x)
    }
}

impl<T: PartialOrd + Clone> Interval<T> {
    /// Returns the convex hull of the two intervals, i.e. the smallest
    /// interval that contains the values of both intervals.
    pub fn convex_hull(&self, right: &Self) -> Result<Self> {
        if self.try_is_empty()? {
            Ok(right.clone())
        } else if right.try_is_empty()? {
            Ok(self.clone())
        } else {
            Ok(Self {
                lower: self.lower.try_min(&right.lower)?,
                upper: self.upper.try_max(&right.upper)?,
            })
        }
    }

    /// Returns the intersection of the two intervals, which might be empty.
    pub fn intersection(&self, right: &Self) -> Result<Self> {
        Ok(Interval {
            lower: self.lower.try_max(&right.lower)?,
            upper: self.upper.try_min(&right.upper)?,
        })
    }

    /// Returns the result of removing all values in right from self.
    /// ```txt
    ///    [------------ self ------------]
    ///            (--- right ---)
    ///    [-------]             [--------]    two pieces are left
    /// ```
    pub fn difference(&self, right: &Self) -> Result<MultiInterval<T>> {
        if self.try_is_empty()? {
            Ok(MultiInterval::Empty)
        } else if right.try_is_empty()? {
            Ok(MultiInterval::One(self.clone()))
        } else {
            MultiInterval::new_from_two(
                Interval {
                    lower: self.lower.clone(),
                    upper: right.lower.try_min(&self.upper)?,
                },
                Interval {
                    lower: right.upper.try_max(&self.lower)?,
                    upper: self.upper.clone(),
                },
            )
        }
    }

    /// Returns the largest interval contained in the convex hull, that
    /// doesn't intersect with either self or right.
    /// This is empty if either of the two intervals is empty, or if they
    /// are connected.
    pub fn between(&self, right: &Self) -> Result<Self> {
        if self.try_is_empty()? || right.try_is_empty()? {
            Ok(Interval::empty())
        } else {
            Ok(Interval {
                lower: self.upper.try_min(&right.upper)?,
                upper: self.lower.try_max(&right.lower)?,
            })
        }
    }

    /// Returns the union of the two intervals, if they are connected.
    /// If not, returns None.
    pub fn union(&self, right: &Self) -> Result<Option<Self>> {
        if self.try_is_empty()? {
            Ok(Some(right.clone()))
        } else if right.try_is_empty()? {
            Ok(Some(self.clone()))
        } else if self.is_connected(right)? {
            Ok(Some(self.convex_hull(right)?))
        } else {
            Ok(None)
        }
    }
}

impl<T> Default for Interval<T> {
    /// Returns an empty interval
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> std::clone::Clone for Interval<T> {
    fn clone(&self) -> Self {
        Self {
            lower: self.lower.clone(),
            upper: self.upper.clone(),
        }
    }
}

impl<T: PartialOrd> PartialEq for Interval<T> {
    /// True if the two intervals contain the same values.  All empty
    /// intervals are equal.
    fn eq(&self, other: &Self) -> bool {
        self.equivalent(other)
    }
}

impl<T: ::core::fmt::Debug + PartialOrd> ::core::fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            write!(f, "empty")?;
        } else {
            write!(f, "({:?},{:?})", self.lower, self.upper)?;
        }
        Ok(())
    }
}

impl<T: ::core::fmt::Display + PartialOrd> ::core::fmt::Display
    for Interval<T>
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        if self.is_empty() {
            write!(f, "empty")?;
        } else {
            match &self.lower {
                Bound::LeftUnbounded => write!(f, "(")?,
                Bound::LeftOf(p) => write!(f, "[{}", p)?,
                Bound::RightOf(p) => write!(f, "({}", p)?,
                Bound::RightUnbounded => unreachable!("Invalid left bound"),
            }
            match &self.upper {
                Bound::LeftUnbounded => unreachable!("Invalid right bound"),
                Bound::LeftOf(p) => write!(f, ", {})", p)?,
                Bound::RightOf(p) => write!(f, ", {}]", p)?,
                Bound::RightUnbounded => write!(f, ",)")?,
            }
        }
        Ok(())
    }
}
