//! Capability probe for errors that carry a mergeable trace.
//!
//! Wrapping only does something for values whose trace root was captured by
//! this crate. Everything else is a foreign error and passes through wrap
//! untouched.

use core::any::Any;
use std::error::Error as StdError;

use crate::types::Error;

/// Finds the traced [`Error`] behind a value, if there is one.
///
/// Implemented for every `'static` type. A value has a mergeable trace when it
/// is an [`Error`] or a boxed trait object whose payload is one.
///
/// # Examples
///
/// ```
/// use error_trail::traits::MergeableTrace;
/// use error_trail::Error;
///
/// let ours: Box<dyn std::error::Error + Send + Sync> = Box::new(Error::new("boom"));
/// let theirs = std::io::Error::other("disk full");
///
/// assert!(ours.has_mergeable_trace());
/// assert!(!theirs.has_mergeable_trace());
/// ```
pub trait MergeableTrace {
    fn trace_node(&self) -> Option<&Error>;

    #[inline]
    fn has_mergeable_trace(&self) -> bool {
        self.trace_node().is_some()
    }
}

impl<T: Any> MergeableTrace for T {
    fn trace_node(&self) -> Option<&Error> {
        let any: &dyn Any = self;
        if let Some(node) = any.downcast_ref::<Error>() {
            return Some(node);
        }
        if let Some(boxed) = any.downcast_ref::<Box<dyn StdError + Send + Sync>>() {
            return (**boxed).downcast_ref::<Error>();
        }
        if let Some(boxed) = any.downcast_ref::<Box<dyn StdError + Send>>() {
            return (**boxed).downcast_ref::<Error>();
        }
        any.downcast_ref::<Box<dyn StdError>>()
            .and_then(|boxed| (**boxed).downcast_ref::<Error>())
    }
}
