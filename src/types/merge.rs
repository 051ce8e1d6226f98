//! Splices a freshly captured wrap site into an existing trace.
//!
//! Both sequences are deepest-first. The captured sequence starts at the wrap
//! call site; its second frame is the function that called the wrapping
//! function. The wrap site is inserted directly before that caller's frame in
//! the existing trace, so placement follows frame identity rather than depth.

use crate::types::TracedFrame;

/// What [`merge_wrap_site`] did with the captured frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeOutcome {
    /// Nothing was captured.
    Empty,
    /// A single captured frame was placed at the front of the trace.
    Prepended,
    /// The wrap site was inserted at this index.
    Inserted { at: usize },
    /// The wrap site is already part of the trace.
    Duplicate,
    /// The caller of the wrap site is not in the trace; nothing was inserted.
    Missed,
}

impl MergeOutcome {
    /// Returns `true` if the trace grew by one frame.
    #[inline]
    pub fn changed(self) -> bool {
        matches!(self, Self::Prepended | Self::Inserted { .. })
    }
}

/// Merges the first captured frame, annotated with `message`, into `trace`.
pub fn merge_wrap_site(
    trace: &mut Vec<TracedFrame>,
    captured: Vec<TracedFrame>,
    message: String,
) -> MergeOutcome {
    let mut captured = captured.into_iter();
    let Some(site) = captured.next() else {
        return MergeOutcome::Empty;
    };
    let Some(caller) = captured.next() else {
        trace.insert(0, site.with_message(message));
        return MergeOutcome::Prepended;
    };

    let hit = trace.iter().position(|frame| frame.id == site.id || frame.id == caller.id);
    match hit {
        Some(at) if trace[at].id == site.id => MergeOutcome::Duplicate,
        Some(at) => {
            trace.insert(at, site.with_message(message));
            MergeOutcome::Inserted { at }
        }
        None => MergeOutcome::Missed,
    }
}
