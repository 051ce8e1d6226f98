//! Error types and utilities.
//!
//! This module holds the traced [`Error`] node, the frame records it owns, the
//! merge algorithm that splices wrap sites into a trace, and the unpacked
//! snapshot handed to formatting code.
//!
//! # Examples
//!
//! ```
//! use error_trail::types::{Error, TraceFormatConfig};
//!
//! let err = Error::new("database connection failed");
//! let unpacked = err.unpack();
//!
//! assert_eq!(unpacked.message, "database connection failed");
//! println!("{}", unpacked.render(&TraceFormatConfig::annotated()));
//! ```

pub mod error_formatter;
pub mod frame;
pub mod merge;
pub mod trace_error;
pub mod unpacked;

pub use error_formatter::{TraceFormatConfig, TraceFormatter};
pub use frame::{CallFrame, TracedFrame};
pub use merge::{merge_wrap_site, MergeOutcome};
pub use trace_error::Error;
pub use unpacked::UnpackedError;

/// Result alias for fallible operations returning a traced [`Error`].
pub type TraceResult<T> = Result<T, Error>;
