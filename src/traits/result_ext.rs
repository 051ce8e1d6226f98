//! Extension trait for wrapping the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use error_trail::{Error, WrapResultExt};
//!
//! #[inline(never)]
//! fn read_config() -> Result<String, Error> {
//!     Err(Error::new("config.toml missing"))
//! }
//!
//! #[inline(never)]
//! fn start() -> Result<String, Error> {
//!     read_config().wrap_err("starting service")
//! }
//!
//! let err = start().unwrap_err();
//! assert_eq!(err.unpack().annotated().count(), 2);
//! ```

use core::any::Any;

use crate::traits::MergeableTrace;
use crate::types::trace_error::wrap_node;

/// Wraps the error of a `Result` in place.
///
/// `Ok` values pass through without capturing anything. Errors without a
/// mergeable trace (see [`MergeableTrace`]) are returned unchanged. The error
/// value is never replaced: the same error comes back, with the caller's
/// position merged into its trace.
pub trait WrapResultExt<T, E> {
    /// Merges the caller's position into the error's trace.
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, E>;

    /// Like [`wrap_err`](WrapResultExt::wrap_err), building the message only
    /// when there is an error to wrap.
    fn wrap_err_with<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> String;
}

impl<T, E: Any> WrapResultExt<T, E> for Result<T, E> {
    #[inline(never)]
    fn wrap_err<M: Into<String>>(self, message: M) -> Result<T, E> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                if let Some(node) = err.trace_node() {
                    wrap_node(node, move || message.into());
                }
                Err(err)
            }
        }
    }

    #[inline(never)]
    fn wrap_err_with<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce() -> String,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                if let Some(node) = err.trace_node() {
                    wrap_node(node, f);
                }
                Err(err)
            }
        }
    }
}
