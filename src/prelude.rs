//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn parse(input: &str) -> TraceResult<u32> {
//!     input.parse().map_err(|_| trail!("not a number: {:?}", input))
//! }
//!
//! fn load(input: &str) -> TraceResult<u32> {
//!     parse(input).wrap_err("loading limit")
//! }
//!
//! assert_eq!(load("12").unwrap(), 12);
//! assert_eq!(load("x").unwrap_err().to_string(), "not a number: \"x\"");
//! ```

// Macros
pub use crate::{trail, wrapf};

// Core types
pub use crate::types::{CallFrame, Error, TraceFormatConfig, TraceResult, UnpackedError};

// Functions
pub use crate::wrap::{unpack, wrap, wrap_with};

// Traits
pub use crate::traits::WrapResultExt;
