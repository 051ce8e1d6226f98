//! Core traits for wrapping traced errors.
//!
//! - [`MergeableTrace`]: Capability probe telling traced errors apart from foreign ones
//! - [`WrapResultExt`]: Wraps the error side of a `Result` without touching `Ok`
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::{MergeableTrace, WrapResultExt};
//!
//! let foreign: Result<(), std::io::Error> = Err(std::io::Error::other("denied"));
//! let err = foreign.wrap_err("opening socket").unwrap_err();
//!
//! assert!(!err.has_mergeable_trace());
//! assert_eq!(err.to_string(), "denied");
//! ```

pub mod mergeable;
pub mod result_ext;

pub use mergeable::MergeableTrace;
pub use result_ext::WrapResultExt;
