//! Helpers for threading fallible steps as values.
//!
//! Every operation in the core returns a plain [`Result`]. Chaining is done
//! with the standard combinators (`map`, `and_then`, `map_err`); this module
//! adds the two pieces the standard library lacks:
//!
//! - [`ResultExt::fold`] eliminates a `Result` into a single value, which is
//!   how frontends turn an outcome into output.
//! - [`attempt`] runs a fallible operation and converts its native error
//!   (I/O, JSON) into a domain error at the boundary where it occurs.

/// Extension methods for [`Result`].
pub trait ResultExt<T, E> {
    /// Collapse the result into one value, handling both outcomes.
    ///
    /// `on_failure` runs for `Err`, `on_success` for `Ok`. Exactly one of
    /// them is invoked.
    fn fold<R>(self, on_failure: impl FnOnce(E) -> R, on_success: impl FnOnce(T) -> R) -> R;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn fold<R>(self, on_failure: impl FnOnce(E) -> R, on_success: impl FnOnce(T) -> R) -> R {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }
}

/// Run a fallible operation, mapping its error with `on_error`.
///
/// ```
/// use filament_core::attempt;
///
/// let parsed: Result<i32, String> = attempt(|| "42".parse::<i32>(), |e| e.to_string());
/// assert_eq!(parsed, Ok(42));
///
/// let failed: Result<i32, String> =
///     attempt(|| "nope".parse::<i32>(), |e| format!("bad number: {e}"));
/// assert!(failed.unwrap_err().starts_with("bad number"));
/// ```
pub fn attempt<T, X, E>(
    op: impl FnOnce() -> Result<T, X>,
    on_error: impl FnOnce(X) -> E,
) -> Result<T, E> {
    op().map_err(on_error)
}
