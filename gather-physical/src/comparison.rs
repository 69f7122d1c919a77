//! Null-aware comparison of scalar values.
//!
//! The relational functions only ever see present values; callers unwrap absent ones first.
//! [max] and [min] on the other hand take optional values and propagate absence,
//! which lets a running fold combine its current best with one new candidate
//! without treating the first element specially.

pub mod operators;

/// Returns whether `a` and `b` are equal.
#[inline]
pub fn equal<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

/// Returns whether `a` and `b` differ.
#[inline]
pub fn not_equal<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a != b
}

/// Returns whether `a` is less than `b`.
#[inline]
pub fn less_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Returns whether `a` is less than or equal to `b`.
#[inline]
pub fn less_than_or_equal<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a <= b
}

/// Returns whether `a` is greater than `b`.
#[inline]
pub fn greater_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

/// Returns whether `a` is greater than or equal to `b`.
#[inline]
pub fn greater_than_or_equal<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a >= b
}

/// Returns the greater of two optional values.
///
/// If `b` is absent, `a` is returned unchanged, even if it is absent as well.
/// Otherwise an absent `a` yields `b`. Ties return `a`.
#[inline]
pub fn max<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Option<T> {
    let Some(b_value) = b else {
        return a;
    };

    match a {
        Some(a_value) if !less_than(&a_value, &b_value) => Some(a_value),
        _ => Some(b_value),
    }
}

/// Returns the lesser of two optional values.
///
/// If `b` is absent, `a` is returned unchanged, even if it is absent as well.
/// Otherwise an absent `a` yields `b`. Ties return `a`.
#[inline]
pub fn min<T: PartialOrd>(a: Option<T>, b: Option<T>) -> Option<T> {
    let Some(b_value) = b else {
        return a;
    };

    match a {
        Some(a_value) if !greater_than(&a_value, &b_value) => Some(a_value),
        _ => Some(b_value),
    }
}

/// Direction of an extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    /// Greatest value
    Max,
    /// Least value
    Min,
}

impl Extremum {
    /// Combines a running extremum with a new candidate,
    /// following the absence rules of [max] and [min].
    pub fn fold<T: PartialOrd>(&self, current: Option<T>, candidate: Option<T>) -> Option<T> {
        match self {
            Extremum::Max => max(current, candidate),
            Extremum::Min => min(current, candidate),
        }
    }

    /// Returns whether `candidate` is strictly better than `current` in this direction.
    ///
    /// This is exactly the case in which [Extremum::fold] of the two present values
    /// returns `candidate`, since ties keep `current`.
    pub fn improves<T: PartialOrd + ?Sized>(&self, candidate: &T, current: &T) -> bool {
        match self {
            Extremum::Max => greater_than(candidate, current),
            Extremum::Min => less_than(candidate, current),
        }
    }
}
