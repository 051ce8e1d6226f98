//! The traced error node.
//!
//! [`Error`] captures the full call stack once, when it is constructed. Every
//! later wrap captures only its own call site and splices it into that stack,
//! so the error ends up with a single trace covering its whole propagation
//! path.
//!
//! `Error` is a handle: clones share one trace, and a wrap through any clone
//! is visible through all of them.

use core::fmt::{self, Debug, Display};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::capture::{capture, BacktraceWalker, SkipLevel};
use crate::types::error_formatter::TraceFormatConfig;
use crate::types::merge::{merge_wrap_site, MergeOutcome};
use crate::types::{CallFrame, TracedFrame, UnpackedError};

#[derive(Debug)]
struct Node {
    message: String,
    frames: Vec<TracedFrame>,
}

/// Error value carrying one merged call trace.
///
/// # Examples
///
/// ```
/// use error_trail::{Error, WrapResultExt};
///
/// #[inline(never)]
/// fn open() -> Result<(), Error> {
///     Err(Error::new("file not found"))
/// }
///
/// #[inline(never)]
/// fn load() -> Result<(), Error> {
///     open().wrap_err("loading settings")
/// }
///
/// let err = load().unwrap_err();
/// assert_eq!(err.to_string(), "file not found");
///
/// let messages: Vec<_> = err
///     .unpack()
///     .annotated()
///     .filter_map(|frame| frame.message.clone())
///     .collect();
/// assert_eq!(messages, ["file not found", "loading settings"]);
/// ```
#[must_use]
#[derive(Clone)]
pub struct Error {
    inner: Arc<Mutex<Node>>,
}

impl Error {
    /// Creates an error and captures the stack from the caller down.
    ///
    /// The message is attached to the deepest captured frame and is the only
    /// thing `Display` renders, no matter how often the error is wrapped.
    #[inline(never)]
    pub fn new<M: Into<String>>(message: M) -> Self {
        let mut frames = capture(&BacktraceWalker, SkipLevel::NewError);
        let message = message.into();
        if let Some(first) = frames.first_mut() {
            first.frame.message = Some(message.clone());
        }
        Self { inner: Arc::new(Mutex::new(Node { message, frames })) }
    }

    /// Merges the caller's position into the trace, annotated with `message`.
    ///
    /// Returns `self` so the call can be chained or returned directly.
    #[inline(never)]
    pub fn wrap<M: Into<String>>(&self, message: M) -> &Self {
        wrap_node(self, move || message.into());
        self
    }

    /// Returns the message given at construction.
    #[must_use]
    pub fn message(&self) -> String {
        self.inner.lock().message.clone()
    }

    /// Number of frames in the merged trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().frames.len()
    }

    /// Returns `true` when no trace could be captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().frames.is_empty()
    }

    /// Takes a read-only snapshot of the message and the merged trace.
    #[must_use]
    pub fn unpack(&self) -> UnpackedError {
        let node = self.inner.lock();
        UnpackedError {
            message: node.message.clone(),
            frames: node.frames.iter().map(|traced| traced.frame.clone()).collect(),
        }
    }

    /// Returns `true` if both handles refer to the same error.
    #[inline]
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

/// Captures the public wrap entry point's caller and merges it into `node`.
///
/// Must be called directly from a public wrap entry point so that
/// [`SkipLevel::Wrap`] lands on the user's call site.
#[inline(never)]
pub(crate) fn wrap_node<F>(node: &Error, message: F) -> MergeOutcome
where
    F: FnOnce() -> String,
{
    let captured = capture(&BacktraceWalker, SkipLevel::Wrap);
    let message = message();
    let outcome = merge_wrap_site(&mut node.inner.lock().frames, captured, message);

    #[cfg(feature = "tracing")]
    match outcome {
        MergeOutcome::Missed => {
            tracing::debug!("wrap site dropped: caller frame not found in trace")
        }
        _ => tracing::trace!(?outcome, "merged wrap site"),
    }

    outcome
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.inner.lock().message);
        }
        let unpacked = self.unpack();
        f.write_str(&unpacked.message)?;
        if !unpacked.is_empty() {
            write!(f, "\n{}", unpacked.render(&TraceFormatConfig::default()))?;
        }
        Ok(())
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.inner.lock();
        let frames: Vec<&CallFrame> = node.frames.iter().map(TracedFrame::frame).collect();
        f.debug_struct("Error")
            .field("message", &node.message)
            .field("frames", &frames)
            .finish()
    }
}

impl std::error::Error for Error {}
