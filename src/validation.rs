//! Validation type for accumulating errors
//!
//! `Validation` is `Result`'s sibling for validation boundaries: instead of
//! short-circuiting on the first failure, combining two validations merges
//! their errors through [`Semigroup`]. The schema handler uses it for its
//! cross-field pass, so a custom coffee order missing both `bean` and
//! `density` reports both violations in one go.
//!
//! # Examples
//!
//! ```
//! use pourover::Validation;
//!
//! let bean = Validation::<&str, Vec<&str>>::failure(vec!["bean is required"]);
//! let density = Validation::<&str, Vec<&str>>::failure(vec!["density is required"]);
//!
//! assert_eq!(
//!     bean.and(density),
//!     Validation::Failure(vec!["bean is required", "density is required"]),
//! );
//! ```

use crate::Semigroup;

/// Either a validated value or the accumulated violations
///
/// Unlike `Result`, combining two `Validation`s keeps going past the first
/// failure and merges errors via the `Semigroup` instance on `E`.
///
/// # Examples
///
/// ```
/// use pourover::Validation;
///
/// let v1 = Validation::<_, Vec<&str>>::success(1);
/// let v2 = Validation::<_, Vec<&str>>::success(2);
/// assert_eq!(v1.and(v2), Validation::Success((1, 2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// The value passed every check
    Success(T),
    /// One or more checks failed
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Lift an option into a validation, failing with `error` on `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use pourover::Validation;
    ///
    /// let present = Validation::from_option(Some(3), vec!["missing"]);
    /// assert_eq!(present, Validation::Success(3));
    ///
    /// let absent = Validation::from_option(None::<i32>, vec!["missing"]);
    /// assert_eq!(absent, Validation::Failure(vec!["missing"]));
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>, error: E) -> Self {
        match value {
            Some(value) => Validation::Success(value),
            None => Validation::Failure(error),
        }
    }

    /// Convert into a `Result`, for callers that want `?` from here on
    ///
    /// # Examples
    ///
    /// ```
    /// use pourover::Validation;
    ///
    /// let v = Validation::<_, Vec<&str>>::success(42);
    /// assert_eq!(v.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Whether every check passed
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Whether any check failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the validated value, leaving failures untouched
    ///
    /// # Examples
    ///
    /// ```
    /// use pourover::Validation;
    ///
    /// let v = Validation::<_, Vec<&str>>::success(5).map(|x| x * 2);
    /// assert_eq!(v, Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error, leaving successes untouched
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors
    ///
    /// Both sides are always evaluated. Two successes pair up; any failure
    /// side contributes its errors, and two failures merge through
    /// `Semigroup::combine`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pourover::Validation;
    ///
    /// let ok = Validation::<_, Vec<&str>>::success("high");
    /// let bad = Validation::<&str, _>::failure(vec!["invalid bean"]);
    /// assert_eq!(ok.and(bad), Validation::Failure(vec!["invalid bean"]));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e), Validation::Success(_)) => Validation::Failure(e),
            (Validation::Success(_), Validation::Failure(e)) => Validation::Failure(e),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
        }
    }
}
