//! Errors that carry one merged call trace across every wrap site.
//!
//! An [`Error`] captures the full call stack once, where it is created. Each
//! caller that wraps it contributes only its own call site, which is spliced
//! into the existing trace next to the frame of the function that called it.
//! The result is a single deepest-first trace of the whole propagation path,
//! with the construct message and every wrap message attached to the frames
//! where they happened.
//!
//! # Examples
//!
//! ## Construct and wrap
//!
//! ```
//! use error_trail::{Error, WrapResultExt};
//!
//! #[inline(never)]
//! fn connect() -> Result<(), Error> {
//!     Err(Error::new("connection refused"))
//! }
//!
//! #[inline(never)]
//! fn login() -> Result<(), Error> {
//!     connect().wrap_err("logging in")
//! }
//!
//! let err = login().unwrap_err();
//!
//! // The plain message never changes.
//! assert_eq!(err.to_string(), "connection refused");
//!
//! // Wrap messages live on the trace.
//! let unpacked = err.unpack();
//! let messages: Vec<_> = unpacked.annotated().filter_map(|f| f.message.as_deref()).collect();
//! assert_eq!(messages, ["connection refused", "logging in"]);
//! ```
//!
//! ## Foreign errors pass through
//!
//! ```
//! use error_trail::wrap;
//!
//! let io = std::io::Error::other("disk full");
//! let same = wrap(Some(io), "saving draft").unwrap();
//! assert_eq!(same.to_string(), "disk full");
//! ```
//!
//! ## Rendering
//!
//! ```
//! use error_trail::{trail, TraceFormatConfig};
//!
//! let err = trail!("bad header: {}", "X-Id");
//! let text = err.unpack().render(&TraceFormatConfig::annotated().relative_to_current_dir());
//! assert!(text.contains("bad header: X-Id"));
//! ```

/// Stack capture and the stack walking capability
pub mod capture;
/// Formatting macros for constructing and wrapping errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for wrapping traced errors
pub mod traits;
/// Traced error node, frames, merge algorithm, and unpacked snapshots
pub mod types;
/// Free-function wrap and unpack entry points
pub mod wrap;

pub use traits::*;
pub use types::{
    CallFrame, Error, TraceFormatConfig, TraceFormatter, TraceResult, UnpackedError,
};
pub use wrap::{unpack, unpack_dyn, wrap, wrap_with};
