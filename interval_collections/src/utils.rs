use crate::errors::Result;

/// Index of the first element, starting at `from`, for which the predicate
/// holds, or the length of the slice.  The predicate is fallible since
/// comparing interval bounds might fail.
pub(crate) fn position_from<E, F>(items: &[E], from: usize, mut pred: F) -> Result<usize>
where
    F: FnMut(&E) -> Result<bool>,
{
    for (idx, item) in items.iter().enumerate().skip(from) {
        if pred(item)? {
            return Ok(idx);
        }
    }
    Ok(items.len())
}
