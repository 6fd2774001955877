//! This crate provides sets and maps of disjoint intervals.
//!
//! Intervals can have any combination of open, closed or infinite bounds.
//! Let's call E the set of valid values in the interval,
//!
//!  |Interval|Constructor                       |Description
//!  |--------|----------------------------------|--------------
//!  | `[A,B]`|[`Interval::new_closed_closed`]   |left-closed, right-closed
//!  | `[A,B)`|[`Interval::new_closed_open`]     |left-closed, right-open
//!  | `(A,B)`|[`Interval::new_open_open`]       |left-open, right-open
//!  | `(A,B]`|[`Interval::new_open_closed`]     |left-open, right-closed
//!  | `(,B]` |[`Interval::new_unbounded_closed`]|left-unbounded, right-closed
//!  | `(,B)` |[`Interval::new_unbounded_open`]  |left-unbounded, right-open
//!  | `[A,)` |[`Interval::new_closed_unbounded`]|left-closed, right-unbounded
//!  | `(A,)` |[`Interval::new_open_unbounded`]  |left-open, right-unbounded
//!  | `(,)`  |[`Interval::doubly_unbounded`]    |doubly unbounded
//!  | `empty`|[`Interval::empty()`]             |empty
//!
//! Bounds are compared as written.  The library never assumes that the key
//! type is discrete, so `[1, 10]` and `[11, 15)` are not adjacent even for
//! integers, while `[11, 15)` and `[15, 20)` are.
//!
//! Two containers are built on top of intervals:
//!
//! - [`IntervalSet`] stores disjoint intervals, and merges them whenever they
//!   overlap or touch.
//!
//! ```text
//!    add [1, 10]     {[1, 10]}
//!    add [11, 15)    {[1, 10], [11, 15)}
//!    add [15, 20)    {[1, 10], [11, 20)}
//!    remove (5, 10)  {[1, 5], [10, 10], [11, 20)}
//! ```
//!
//! - [`IntervalMap`] maps disjoint intervals to values.  Putting a new
//!   interval overwrites the part of existing entries it covers, but never
//!   merges entries, even if they have the same value.
//!
//! ```text
//!    put [1, 10] => foo   {[1, 10] => foo}
//!    put (3, 6) => bar    {[1, 3] => foo, (3, 6) => bar, [6, 10] => foo}
//! ```
//!
//! Keys only need to implement `PartialOrd`.  When two bounds cannot be
//! compared (a NaN float for instance), the operation fails with
//! [`Error::InvalidArgument`] and the container is left unchanged.
//! Point queries such as `contains` or `get` report such a value as absent;
//! use `try_contains` or `try_get` to get the error instead.
//!
//! Containers are plain values with no interior mutability.  Wrap them in a
//! lock to share them between threads.

mod bounds;
mod errors;
mod interval_map;
mod interval_set;
mod intervals;
mod multi_intervals;
mod utils;

pub use crate::errors::{Error, Result};
pub use crate::interval_map::IntervalMap;
pub use crate::interval_set::IntervalSet;
pub use crate::intervals::Interval;
pub use crate::multi_intervals::MultiInterval;
