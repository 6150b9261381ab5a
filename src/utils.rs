//! Utility functions.

use itertools::{EitherOrBoth, Itertools};
use smallvec::{Array, SmallVec};

/// Insert `value` into the sorted, duplicate-free `set`.
///
/// Return whether the value was newly inserted.
pub(crate) fn sorted_insert<A: Array>(set: &mut SmallVec<A>, value: A::Item) -> bool
where
    A::Item: Ord,
{
    match set.binary_search(&value) {
        Ok(_) => false,
        Err(pos) => {
            set.insert(pos, value);
            true
        }
    }
}

/// Merge the sorted, duplicate-free `other` into the sorted, duplicate-free
/// `set`.
pub(crate) fn sorted_union<A: Array>(set: &mut SmallVec<A>, other: &[A::Item])
where
    A::Item: Ord + Copy,
{
    if other.is_empty() {
        return;
    }
    let merged: SmallVec<A> = set
        .iter()
        .merge_join_by(other, |a, b| a.cmp(b))
        .map(|either| match either {
            EitherOrBoth::Left(&v) | EitherOrBoth::Right(&v) | EitherOrBoth::Both(&v, _) => v,
        })
        .collect();
    *set = merged;
}
