//! Trace rendering utilities.

use crate::types::CallFrame;

/// Trait for customizing how a merged trace is rendered.
///
/// `index` is the frame's position in the full trace, so filtered output
/// keeps pointing at the right frame.
pub trait TraceFormatter {
    fn format_frame(&self, index: usize, frame: &CallFrame) -> String {
        format!("{index}) {frame}")
    }

    fn include(&self, _frame: &CallFrame) -> bool {
        true
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn format_trace<'a>(&self, frames: impl Iterator<Item = &'a CallFrame>) -> String {
        frames
            .enumerate()
            .filter(|(_, frame)| self.include(frame))
            .map(|(index, frame)| self.format_frame(index, frame))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based trace formatter.
///
/// The default layout is one numbered `file[line]: function: message` line
/// per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFormatConfig {
    pub separator: String,
    /// Prefix removed from every file path, usually the working directory.
    pub strip_prefix: Option<String>,
    /// Only render frames that carry a message.
    pub annotated_only: bool,
    pub numbered: bool,
}

impl Default for TraceFormatConfig {
    fn default() -> Self {
        Self { separator: "\n".into(), strip_prefix: None, annotated_only: false, numbered: true }
    }
}

impl TraceFormatConfig {
    /// Construct and wrap sites only.
    #[inline]
    pub fn annotated() -> Self {
        Self { annotated_only: true, ..Default::default() }
    }

    /// Single line of annotated frames.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: " <- ".into(), annotated_only: true, numbered: false, ..Default::default() }
    }

    /// Strips `prefix` from file paths.
    #[must_use]
    pub fn with_strip_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.strip_prefix = Some(prefix.into());
        self
    }

    /// Strips the current working directory from file paths.
    ///
    /// Leaves the configuration unchanged if the directory cannot be read.
    #[must_use]
    pub fn relative_to_current_dir(self) -> Self {
        match std::env::current_dir() {
            Ok(dir) => self.with_strip_prefix(dir.display().to_string()),
            Err(_) => self,
        }
    }

    fn display_path<'a>(&self, file: &'a str) -> &'a str {
        match &self.strip_prefix {
            Some(prefix) => match file.strip_prefix(prefix.as_str()) {
                Some(rest) => rest.trim_start_matches(['/', '\\']),
                None => file,
            },
            None => file,
        }
    }
}

impl TraceFormatter for TraceFormatConfig {
    fn format_frame(&self, index: usize, frame: &CallFrame) -> String {
        let mut line = String::with_capacity(64);
        if self.numbered {
            line.push_str(&format!("{index}) "));
        }
        line.push_str(&format!(
            "{}[{}]: {}",
            self.display_path(&frame.file),
            frame.line,
            frame.function
        ));
        if let Some(message) = &frame.message {
            line.push_str(": ");
            line.push_str(message);
        }
        line
    }

    fn include(&self, frame: &CallFrame) -> bool {
        !self.annotated_only || frame.is_annotated()
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
