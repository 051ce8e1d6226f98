//! Stack walking capability and its native implementation.
//!
//! The rest of the crate only depends on [`StackWalker`]; [`BacktraceWalker`]
//! is the default implementation built on the `backtrace` crate.

use core::ffi::c_void;

use smallvec::SmallVec;

use super::MAX_DEPTH;

/// Process-local identity of a single call instruction.
///
/// Two captures taken in the same process that pass through the same call
/// instruction report the same `FrameId`. The value carries no meaning outside
/// the running process and is only ever compared for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

impl FrameId {
    /// Creates an identity from a raw instruction pointer.
    #[inline]
    pub const fn from_ip(ip: usize) -> Self {
        Self(ip)
    }

    /// Returns the raw instruction pointer.
    #[inline]
    pub const fn ip(self) -> usize {
        self.0
    }
}

/// One raw stack level as reported by a [`StackWalker`].
///
/// Symbol information is optional because resolution can fail for frames
/// without debug info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRef {
    pub id: FrameId,
    /// Demangled symbol name without the trailing hash.
    pub function: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl FrameRef {
    /// Creates an unresolved frame reference.
    #[inline]
    pub fn new(id: FrameId) -> Self {
        Self { id, function: None, file: None, line: None }
    }
}

/// Capability for walking the live call stack.
///
/// # Contract
///
/// `capture` returns frames deepest-first. The implementation's own frame is
/// never included, so `skip_frames == 0` makes the first returned frame the
/// call site that invoked `capture`. Each additional skipped frame moves one
/// level further out. Implementations must not panic; an unwalkable stack is
/// reported as an empty vector.
pub trait StackWalker {
    fn capture(&self, skip_frames: usize) -> Vec<FrameRef>;
}

/// [`StackWalker`] backed by the platform unwinder through `backtrace`.
///
/// At most [`MAX_DEPTH`] frames are resolved per capture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktraceWalker;

/// Raw frames inspected per walk, including the unwinder's own.
const RAW_LIMIT: usize = MAX_DEPTH * 4;

/// Leading frames searched by name when the walker's address is not reported.
const NAME_SEARCH_WINDOW: usize = 16;

/// Instruction pointer and enclosing symbol address of one unresolved frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawFrame {
    pub(crate) ip: usize,
    pub(crate) symbol: usize,
}

impl StackWalker for BacktraceWalker {
    #[inline(never)]
    fn capture(&self, skip_frames: usize) -> Vec<FrameRef> {
        let this: fn(&Self, usize) -> Vec<FrameRef> = <Self as StackWalker>::capture;

        let mut raw: SmallVec<[RawFrame; MAX_DEPTH]> = SmallVec::new();
        backtrace::trace(|frame| {
            raw.push(RawFrame { ip: frame.ip() as usize, symbol: frame.symbol_address() as usize });
            raw.len() < RAW_LIMIT
        });

        // How many unwinder frames sit above this one depends on inlining.
        let Some(caller) = caller_index(&raw, this as usize, resolve_name) else {
            return Vec::new();
        };

        raw[caller..]
            .iter()
            .skip(skip_frames)
            .take(MAX_DEPTH)
            .map(|frame| resolve(frame.ip))
            .collect()
    }
}

/// Index of the first frame below the walker's own frame in `raw`.
///
/// The walker's frame is matched by symbol address, falling back to its
/// resolved name for unwinders that report no symbol addresses. `None` means
/// the walker's frame was not found.
pub(crate) fn caller_index<F>(raw: &[RawFrame], walker_symbol: usize, name_of: F) -> Option<usize>
where
    F: Fn(usize) -> Option<String>,
{
    if let Some(at) = raw.iter().position(|frame| frame.symbol == walker_symbol) {
        return Some(at + 1);
    }

    raw.iter()
        .take(NAME_SEARCH_WINDOW)
        .position(|frame| name_of(frame.ip).is_some_and(|name| is_walker_symbol(&name)))
        .map(|at| at + 1)
}

fn is_walker_symbol(name: &str) -> bool {
    name.contains("BacktraceWalker as ") && name.ends_with(">::capture")
}

fn resolve_name(ip: usize) -> Option<String> {
    resolve(ip).function
}

fn resolve(ip: usize) -> FrameRef {
    let mut frame = FrameRef::new(FrameId::from_ip(ip));
    backtrace::resolve(ip as *mut c_void, |symbol| {
        // Inlined frames report several symbols; the first is the innermost call site.
        if frame.function.is_some() {
            return;
        }
        frame.function = symbol.name().map(|name| format!("{name:#}"));
        frame.file = symbol.filename().map(|path| path.display().to_string());
        frame.line = symbol.lineno();
    });
    frame
}
