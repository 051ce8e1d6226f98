//! Frame capture: turns the live call stack into a deepest-first frame sequence.
//!
//! [`capture`] asks a [`StackWalker`] for raw frames, drops the frames that
//! belong to the unwinder or the language runtime, and shortens symbol names
//! to `module::function`.
//!
//! # Examples
//!
//! ```
//! use error_trail::capture::{capture, BacktraceWalker, SkipLevel, MAX_DEPTH};
//!
//! let frames = capture(&BacktraceWalker, SkipLevel::CaptureOnly);
//! assert!(frames.len() <= MAX_DEPTH);
//! ```

pub mod walker;

pub use walker::{BacktraceWalker, FrameId, FrameRef, StackWalker};

use crate::types::{CallFrame, TracedFrame};

/// Upper bound on the number of frames kept per capture.
///
/// Deeper stacks are truncated at the root end.
pub const MAX_DEPTH: usize = 64;

/// Symbol prefixes of the unwinder and the runtime, compared ASCII case-insensitively.
const RUNTIME_PREFIXES: &[&str] = &[
    "backtrace::",
    "std::rt::",
    "std::sys::",
    "std::sys_common::",
    "std::panicking::",
    "std::panic::",
    "std::thread::",
    "core::ops::function::",
    "alloc::boxed::",
    "__rust_",
    "__libc_start",
    "_start",
    "__scrt_common_main",
    "basethreadinitthunk",
    "rtluserthreadstart",
];

/// How many of the crate's own frames a capture skips.
///
/// Each level makes the first captured frame the call site of a different
/// entry point, so callers never see frames of the capture machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipLevel {
    /// First frame is the direct caller of [`capture`].
    CaptureOnly,
    /// First frame is the call site of [`Error::new`](crate::Error::new).
    NewError,
    /// First frame is the call site of a public wrap entry point.
    Wrap,
}

impl SkipLevel {
    /// Number of frames above the caller of the walker that are skipped.
    #[inline]
    pub const fn frames(self) -> usize {
        match self {
            Self::CaptureOnly => 1,
            Self::NewError => 2,
            Self::Wrap => 3,
        }
    }
}

#[cfg(test)]
thread_local! {
    /// Calls to [`capture`] made on this thread.
    pub(crate) static CAPTURE_COUNT: core::cell::Cell<usize> = const { core::cell::Cell::new(0) };
}

/// Captures the current call stack, deepest frame first.
///
/// Messages are left empty; the caller fills in the first frame. At most
/// [`MAX_DEPTH`] frames are returned, whatever the walker reports. Returns an
/// empty vector when the stack cannot be walked.
#[inline(never)]
pub fn capture(walker: &dyn StackWalker, skip: SkipLevel) -> Vec<TracedFrame> {
    #[cfg(test)]
    CAPTURE_COUNT.with(|count| count.set(count.get() + 1));

    let frames: Vec<TracedFrame> = walker
        .capture(skip.frames())
        .into_iter()
        .filter_map(into_traced)
        .take(MAX_DEPTH)
        .collect();

    #[cfg(feature = "tracing")]
    if frames.is_empty() {
        tracing::debug!(?skip, "stack capture produced no frames");
    }

    frames
}

fn into_traced(frame: FrameRef) -> Option<TracedFrame> {
    let name = frame.function?;
    if is_runtime_frame(&name) {
        return None;
    }
    Some(TracedFrame::new(
        frame.id,
        CallFrame {
            message: None,
            file: frame.file.unwrap_or_default(),
            function: strip_module_path(&name),
            line: frame.line.unwrap_or(0),
        },
    ))
}

/// Returns `true` for symbols of the unwinder or the language runtime.
pub(crate) fn is_runtime_frame(name: &str) -> bool {
    let name = name.trim_start_matches('<');
    RUNTIME_PREFIXES.iter().any(|prefix| {
        name.len() >= prefix.len()
            && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    })
}

/// Reduces a demangled path to its last module and function segments.
///
/// Trailing closure segments such as `{{closure}}` and turbofish arguments
/// stay attached to their function. Separators nested inside `<...>` are not
/// split on.
pub(crate) fn strip_module_path(name: &str) -> String {
    let segments = split_path(name);
    let last_named = segments
        .iter()
        .enumerate()
        .rposition(|(index, segment)| !is_suffix_segment(index, segment))
        .unwrap_or(0);
    segments[last_named.saturating_sub(1)..].join("::")
}

fn is_suffix_segment(index: usize, segment: &str) -> bool {
    segment.starts_with("{{") || (index > 0 && segment.starts_with('<'))
}

fn split_path(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` in a function pointer type closes nothing.
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&name[start..i]);
                i += 2;
                start = i;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    segments.push(&name[start..]);
    segments
}
