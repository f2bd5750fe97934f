//! Non-empty collection of validation failures
//!
//! A failed [`Validation`](crate::Validation) always carries at least one
//! violation, and the 400 body reports the first of them. Encoding the "at
//! least one" in the type keeps the conversion total: there is no empty case
//! to paper over when the schema handler picks its first violation.
//!
//! # Examples
//!
//! ```
//! use pourover::NonEmptyVec;
//!
//! let violations = NonEmptyVec::new("bean is required", vec!["density is required"]);
//! assert_eq!(violations.head(), &"bean is required");
//! assert_eq!(violations.len(), 2);
//! ```

use crate::Semigroup;

/// A list guaranteed to contain at least one element
///
/// `head()` needs no `Option` and no fallback; combining two lists through
/// [`Semigroup`] preserves order, so the head of the combined list is the
/// first violation found.
///
/// # Examples
///
/// ```
/// use pourover::{NonEmptyVec, Semigroup};
///
/// let first = NonEmptyVec::singleton("bean is required");
/// let second = NonEmptyVec::singleton("density is required");
/// let both = first.combine(second);
///
/// assert_eq!(both.head(), &"bean is required");
/// assert_eq!(
///     both.into_vec(),
///     vec!["bean is required", "density is required"],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Create a non-empty list from a head element and the rest.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Create a non-empty list holding a single element.
    pub fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// The first element, always present.
    pub fn head(&self) -> &T {
        &self.head
    }

    /// Everything after the first element.
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// Total number of elements, at least 1.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always false; the list holds at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flatten into a plain `Vec`, head first.
    pub fn into_vec(self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.len());
        vec.push(self.head);
        vec.extend(self.tail);
        vec
    }
}

// Concatenation, order-preserving
impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}
