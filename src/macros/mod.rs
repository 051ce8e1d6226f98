//! Formatting shorthands for constructing and wrapping traced errors.
//!
//! - [`macro@crate::trail`] - Builds an [`Error`](crate::Error) from a format string.
//! - [`macro@crate::wrapf`] - Wraps an `Option` of an error with a formatted message,
//!   formatting only when there is an error to wrap.
//!
//! # Examples
//!
//! ```
//! use error_trail::{trail, wrapf, Error};
//!
//! #[inline(never)]
//! fn lookup(id: u64) -> Option<Error> {
//!     Some(trail!("user {} not found", id))
//! }
//!
//! #[inline(never)]
//! fn render(id: u64) -> Option<Error> {
//!     wrapf!(lookup(id), "rendering profile page for {}", id)
//! }
//!
//! let err = render(7).unwrap();
//! assert_eq!(err.to_string(), "user 7 not found");
//! ```

/// Creates an [`Error`](crate::Error) with a formatted message.
///
/// Accepts the same arguments as `format!`. The trace starts at the macro's
/// call site.
///
/// # Examples
///
/// ```
/// use error_trail::trail;
///
/// let err = trail!("quota exceeded: {}/{}", 12, 10);
/// assert_eq!(err.to_string(), "quota exceeded: 12/10");
/// ```
#[macro_export]
macro_rules! trail {
    ($($arg:tt)*) => {
        $crate::Error::new(format!($($arg)*))
    };
}

/// Wraps an `Option` of an error with a formatted message.
///
/// Expands to [`wrap_with`](crate::wrap_with); the message is only formatted
/// when the first argument is `Some` and carries a mergeable trace.
///
/// # Examples
///
/// ```
/// use error_trail::{wrapf, Error};
///
/// let none: Option<Error> = None;
/// assert!(wrapf!(none, "retry {}", 3).is_none());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap_with($err, || format!($($arg)*))
    };
}
