use crate::errors::{Error, Result};
use std::cmp::Ordering;

/// One bound of an interval, seen as a cut in the ordered set of keys.
///
/// ```text
///    LeftUnbounded < LeftOf(A) < A < RightOf(A) < LeftOf(B) < ... < RightUnbounded
/// ```
///
/// A closed lower bound `[A` is `LeftOf(A)`, an open lower bound `(A` is
/// `RightOf(A)`.  A closed upper bound `B]` is `RightOf(B)`, an open upper
/// bound `B)` is `LeftOf(B)`.  An interval is then empty exactly when its
/// upper cut is not strictly greater than its lower cut.
///
/// Cuts do not know whether the key type is discrete: `RightOf(10)` and
/// `LeftOf(11)` are different cuts even for integers.
pub(crate) enum Bound<T> {
    LeftUnbounded,
    LeftOf(T),
    RightOf(T),
    RightUnbounded,
}

impl<T> Bound<T> {
    /// The key this bound refers to, None for an infinite bound.
    pub fn value(&self) -> Option<&T> {
        match self {
            Bound::LeftUnbounded | Bound::RightUnbounded => None,
            Bound::LeftOf(p) | Bound::RightOf(p) => Some(p),
        }
    }

    pub fn as_ref(&self) -> Bound<&T> {
        match self {
            Bound::LeftUnbounded => Bound::LeftUnbounded,
            Bound::LeftOf(p) => Bound::LeftOf(p),
            Bound::RightOf(p) => Bound::RightOf(p),
            Bound::RightUnbounded => Bound::RightUnbounded,
        }
    }
}

impl<T: PartialOrd> Bound<T> {
    /// True if the value is to the right of the bound
    pub fn left_of(&self, value: &T) -> bool {
        match self {
            Bound::LeftUnbounded => true,
            Bound::LeftOf(p) => *p <= *value,
            Bound::RightOf(p) => *p < *value,
            Bound::RightUnbounded => false,
        }
    }

    /// True if the value is to the left of the bound
    pub fn right_of(&self, value: &T) -> bool {
        match self {
            Bound::LeftUnbounded => false,
            Bound::LeftOf(p) => *value < *p,
            Bound::RightOf(p) => *value <= *p,
            Bound::RightUnbounded => true,
        }
    }

    /// Same as [`Bound::left_of()`], but fails when value cannot be compared
    /// with the bound.
    pub fn try_left_of(&self, value: &T) -> Result<bool> {
        Ok(match self {
            Bound::LeftUnbounded => true,
            Bound::LeftOf(p) => try_order(p, value)? != Ordering::Greater,
            Bound::RightOf(p) => try_order(p, value)? == Ordering::Less,
            Bound::RightUnbounded => false,
        })
    }

    /// Same as [`Bound::right_of()`], but fails when value cannot be compared
    /// with the bound.
    pub fn try_right_of(&self, value: &T) -> Result<bool> {
        Ok(match self {
            Bound::LeftUnbounded => false,
            Bound::LeftOf(p) => try_order(value, p)? == Ordering::Less,
            Bound::RightOf(p) => try_order(value, p)? != Ordering::Greater,
            Bound::RightUnbounded => true,
        })
    }

    /// Compare two cuts, failing if the underlying keys cannot be compared
    /// (for instance NaN).
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.partial_cmp(other).ok_or_else(Error::incomparable)
    }
}

fn try_order<T: PartialOrd>(left: &T, right: &T) -> Result<Ordering> {
    left.partial_cmp(right).ok_or_else(Error::incomparable)
}

/// Fails for a key that is not even comparable to itself, like NaN.
pub(crate) fn check_comparable<T: PartialOrd>(value: &T) -> Result<()> {
    try_order(value, value).map(|_| ())
}

impl<T: PartialOrd + Clone> Bound<T> {
    pub fn try_min(&self, other: &Self) -> Result<Self> {
        Ok(match self.try_cmp(other)? {
            Ordering::Greater => other.clone(),
            Ordering::Less | Ordering::Equal => self.clone(),
        })
    }

    pub fn try_max(&self, other: &Self) -> Result<Self> {
        Ok(match self.try_cmp(other)? {
            Ordering::Less => other.clone(),
            Ordering::Greater | Ordering::Equal => self.clone(),
        })
    }
}

impl<T: PartialOrd> PartialEq for Bound<T> {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Equal))
    }
}

impl<T: PartialOrd> PartialOrd for Bound<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Bound::LeftUnbounded, Bound::LeftUnbounded)
            | (Bound::RightUnbounded, Bound::RightUnbounded) => {
                Some(Ordering::Equal)
            }
            (Bound::LeftUnbounded, _) | (_, Bound::RightUnbounded) => {
                Some(Ordering::Less)
            }
            (_, Bound::LeftUnbounded) | (Bound::RightUnbounded, _) => {
                Some(Ordering::Greater)
            }
            (Bound::LeftOf(a), Bound::LeftOf(b))
            | (Bound::RightOf(a), Bound::RightOf(b)) => a.partial_cmp(b),

            //  LeftOf(A) sits just before A, so it is before RightOf(A) too
            (Bound::LeftOf(a), Bound::RightOf(b)) => {
                a.partial_cmp(b).map(|o| match o {
                    Ordering::Less | Ordering::Equal => Ordering::Less,
                    Ordering::Greater => Ordering::Greater,
                })
            }
            (Bound::RightOf(a), Bound::LeftOf(b)) => {
                a.partial_cmp(b).map(|o| match o {
                    Ordering::Less => Ordering::Less,
                    Ordering::Equal | Ordering::Greater => Ordering::Greater,
                })
            }
        }
    }
}

impl<T: Clone> Clone for Bound<T> {
    fn clone(&self) -> Self {
        match self {
            Bound::LeftUnbounded => Bound::LeftUnbounded,
            Bound::LeftOf(p) => Bound::LeftOf(p.clone()),
            Bound::RightOf(p) => Bound::RightOf(p.clone()),
            Bound::RightUnbounded => Bound::RightUnbounded,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Bound<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::LeftUnbounded => write!(f, "-infinity"),
            Bound::LeftOf(p) => write!(f, "LeftOf({:?})", p),
            Bound::RightOf(p) => write!(f, "RightOf({:?})", p),
            Bound::RightUnbounded => write!(f, "+infinity"),
        }
    }
}
