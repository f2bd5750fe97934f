//! Semigroup trait for associative combination
//!
//! Error accumulation in [`Validation`](crate::Validation) needs a way to merge
//! two error values into one. Any type with an associative binary operation
//! qualifies; the schema handler accumulates into a
//! [`NonEmptyVec`](crate::NonEmptyVec) of violations.
//!
//! # Examples
//!
//! ```
//! use pourover::Semigroup;
//!
//! let left = vec!["bean is required"];
//! let right = vec!["density is required"];
//! assert_eq!(
//!     left.combine(right),
//!     vec!["bean is required", "density is required"],
//! );
//! ```

/// A type with an associative binary operation
///
/// # Laws
///
/// `combine` must be associative:
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup: Sized {
    /// Combine this value with another
    ///
    /// # Examples
    ///
    /// ```
    /// use pourover::Semigroup;
    ///
    /// assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_combine_appends() {
        let v1 = vec!["a", "b"];
        let v2 = vec!["c"];
        assert_eq!(v1.combine(v2), vec!["a", "b", "c"]);
    }

    #[test]
    fn vec_combine_with_empty_is_identity() {
        let v: Vec<i32> = vec![];
        assert_eq!(v.combine(vec![1, 2]), vec![1, 2]);
        assert_eq!(vec![1, 2].combine(Vec::new()), vec![1, 2]);
    }

    #[test]
    fn string_combine_concatenates() {
        let s = "pour".to_string().combine("over".to_string());
        assert_eq!(s, "pourover");
    }

    #[test]
    fn vec_combine_is_associative() {
        let a = vec![1];
        let b = vec![2];
        let c = vec![3];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
