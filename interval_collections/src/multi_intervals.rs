use crate::errors::Result;
use crate::intervals::Interval;

/// The result of removing one interval from another: nothing left, a single
/// piece, or two pieces when the removed range was strictly inside.
/// Pieces are never empty, and are sorted.
pub enum MultiInterval<T> {
    Empty,
    One(Interval<T>),
    Two(Interval<T>, Interval<T>),
}

impl<T: PartialOrd> MultiInterval<T> {
    /// Build from two sorted, disjoint intervals, dropping those that are
    /// empty.
    pub(crate) fn new_from_two(
        first: Interval<T>,
        second: Interval<T>,
    ) -> Result<Self> {
        Ok(match (first.try_is_empty()?, second.try_is_empty()?) {
            (true, true) => MultiInterval::Empty,
            (true, false) => MultiInterval::One(second),
            (false, true) => MultiInterval::One(first),
            (false, false) => MultiInterval::Two(first, second),
        })
    }
}

impl<T> MultiInterval<T> {
    /// Number of pieces
    pub fn len(&self) -> usize {
        match self {
            MultiInterval::Empty => 0,
            MultiInterval::One(_) => 1,
            MultiInterval::Two(_, _) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MultiInterval::Empty)
    }
}

impl<T> IntoIterator for MultiInterval<T> {
    type Item = Interval<T>;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<Interval<T>>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            MultiInterval::Empty => [None, None],
            MultiInterval::One(i) => [Some(i), None],
            MultiInterval::Two(i1, i2) => [Some(i1), Some(i2)],
        }
        .into_iter()
        .flatten()
    }
}

impl<T: PartialOrd> PartialEq for MultiInterval<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MultiInterval::Empty, MultiInterval::Empty) => true,
            (MultiInterval::One(a), MultiInterval::One(b)) => a == b,
            (MultiInterval::Two(a1, a2), MultiInterval::Two(b1, b2)) => {
                a1 == b1 && a2 == b2
            }
            (
                MultiInterval::Empty
                | MultiInterval::One(_)
                | MultiInterval::Two(_, _),
                _,
            ) => false,
        }
    }
}

impl<T: ::core::fmt::Debug + PartialOrd> ::core::fmt::Debug
    for MultiInterval<T>
{
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        match self {
            MultiInterval::Empty => write!(f, "empty"),
            MultiInterval::One(i) => write!(f, "{:?}", i),
            MultiInterval::Two(i1, i2) => write!(f, "({:?} + {:?})", i1, i2),
        }
    }
}
