//! Frame records stored in a trace.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capture::FrameId;

/// One stack location of a merged trace, as handed to formatting code.
///
/// `message` is set on the frames that correspond to the construct site and
/// to every merged wrap site; the other frames only give positional context.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CallFrame {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub message: Option<String>,
    pub file: String,
    /// Function name reduced to `module::function`.
    pub function: String,
    /// 1-based line number, or `0` when the line is unknown.
    pub line: u32,
}

impl CallFrame {
    /// Returns `true` if this frame is a construct or wrap site.
    #[inline]
    pub fn is_annotated(&self) -> bool {
        self.message.is_some()
    }
}

impl Display for CallFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.file, self.line, self.function)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

/// A [`CallFrame`] together with the identity used to anchor merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedFrame {
    pub(crate) id: FrameId,
    pub(crate) frame: CallFrame,
}

impl TracedFrame {
    #[inline]
    pub fn new(id: FrameId, frame: CallFrame) -> Self {
        Self { id, frame }
    }

    #[inline]
    pub fn id(&self) -> FrameId {
        self.id
    }

    #[inline]
    pub fn frame(&self) -> &CallFrame {
        &self.frame
    }

    /// Consumes the traced frame, dropping its identity.
    #[inline]
    pub fn into_frame(self) -> CallFrame {
        self.frame
    }

    #[inline]
    pub(crate) fn with_message(mut self, message: String) -> Self {
        self.frame.message = Some(message);
        self
    }
}
