//! Free-function wrap and unpack entry points.
//!
//! These mirror the method forms on [`Error`] and [`WrapResultExt`](crate::WrapResultExt)
//! for code that holds an `Option` of an error or an arbitrary error value.
//!
//! # Examples
//!
//! ```
//! use error_trail::{unpack, wrap, Error};
//!
//! #[inline(never)]
//! fn fetch() -> Option<Error> {
//!     Some(Error::new("connection reset"))
//! }
//!
//! #[inline(never)]
//! fn sync() -> Option<Error> {
//!     wrap(fetch(), "syncing inbox")
//! }
//!
//! let err = sync().unwrap();
//! let unpacked = unpack(&err);
//! assert_eq!(unpacked.message, "connection reset");
//! assert_eq!(unpacked.annotated().count(), 2);
//!
//! assert!(wrap(None::<Error>, "never captured").is_none());
//! ```

use core::any::Any;
use std::error::Error as StdError;

use crate::traits::MergeableTrace;
use crate::types::trace_error::wrap_node;
use crate::types::{Error, UnpackedError};

/// Merges the caller's position into `err`'s trace.
///
/// `None` stays `None` and nothing is captured. A foreign error is returned
/// unchanged. Otherwise the same error comes back with the wrap site merged.
#[inline(never)]
pub fn wrap<E, M>(err: Option<E>, message: M) -> Option<E>
where
    E: Any,
    M: Into<String>,
{
    let err = err?;
    match err.trace_node() {
        Some(node) => {
            wrap_node(node, move || message.into());
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!("foreign error passed through wrap unchanged");
        }
    }
    Some(err)
}

/// Like [`wrap`], building the message only when there is an error to wrap.
///
/// This is what [`wrapf!`](crate::wrapf) expands to.
#[inline(never)]
pub fn wrap_with<E, F>(err: Option<E>, f: F) -> Option<E>
where
    E: Any,
    F: FnOnce() -> String,
{
    let err = err?;
    match err.trace_node() {
        Some(node) => {
            wrap_node(node, f);
        }
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!("foreign error passed through wrap unchanged");
        }
    }
    Some(err)
}

/// Snapshot of `err`'s message and trace.
///
/// Returns an empty [`UnpackedError`] when `err` has no mergeable trace.
#[must_use]
pub fn unpack<E: Any>(err: &E) -> UnpackedError {
    err.trace_node().map(Error::unpack).unwrap_or_default()
}

/// [`unpack`] for error trait objects.
#[must_use]
pub fn unpack_dyn(err: &(dyn StdError + 'static)) -> UnpackedError {
    err.downcast_ref::<Error>().map(Error::unpack).unwrap_or_default()
}
