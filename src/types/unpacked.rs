//! Read-only snapshot of a traced error.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::error_formatter::{TraceFormatConfig, TraceFormatter};
use crate::types::CallFrame;

/// Message and merged trace of an [`Error`](crate::Error), deepest frame first.
///
/// Unpacking anything that is not a traced error yields the empty default.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackedError {
    pub message: String,
    pub frames: Vec<CallFrame>,
}

impl UnpackedError {
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frames that carry a message: the construct site followed by every
    /// merged wrap site, in trace order.
    pub fn annotated(&self) -> impl Iterator<Item = &CallFrame> {
        self.frames.iter().filter(|frame| frame.is_annotated())
    }

    /// Renders the trace with the given formatter.
    #[must_use]
    pub fn render<F: TraceFormatter>(&self, formatter: &F) -> String {
        formatter.format_trace(self.frames.iter())
    }
}

impl Display for UnpackedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&TraceFormatConfig::default()))
    }
}
