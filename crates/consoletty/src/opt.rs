//! Helper module with the options for terminals.
//!
//! This module provides the options for an
//! [`AnsiTerminal`](crate::AnsiTerminal) and the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use consoletty::color::{Colorant, ConsoleColor};
//! # use consoletty::opt::{LineEnding, Options};
//! let options = Options::builder()
//!     .line_ending(LineEnding::CrLf)
//!     .foreground(ConsoleColor::Gray)
//!     .build();
//!
//! assert_eq!(options.line_ending(), LineEnding::CrLf);
//! assert_eq!(options.foreground(), Colorant::Console(ConsoleColor::Gray));
//! assert_eq!(options.background(), Colorant::Default);
//! ```

use crate::color::Colorant;

/// The line ending written after a line of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineEnding {
    /// A line feed, as used on Unix.
    Lf,
    /// A carriage return followed by a line feed, as used on Windows.
    CrLf,
}

impl LineEnding {
    /// Get the line ending native to the current platform.
    pub const fn native() -> Self {
        if cfg!(target_family = "windows") {
            Self::CrLf
        } else {
            Self::Lf
        }
    }

    /// Get the characters making up this line ending.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        Self::native()
    }
}

#[derive(Clone, Debug)]
struct OptionData {
    line_ending: LineEnding,
    auto_flush: bool,
    foreground: Colorant,
    background: Colorant,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            line_ending: LineEnding::native(),
            auto_flush: true,
            foreground: Colorant::Default,
            background: Colorant::Default,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the line ending.
    pub fn line_ending(&mut self, line_ending: LineEnding) -> &mut Self {
        self.0.line_ending = line_ending;
        self
    }

    /// Set whether to flush after printing text or changing colors.
    pub fn auto_flush(&mut self, auto_flush: bool) -> &mut Self {
        self.0.auto_flush = auto_flush;
        self
    }

    /// Set the foreground color the terminal starts out with.
    pub fn foreground<C: Into<Colorant>>(&mut self, color: C) -> &mut Self {
        self.0.foreground = color.into();
        self
    }

    /// Set the background color the terminal starts out with.
    pub fn background<C: Into<Colorant>>(&mut self, color: C) -> &mut Self {
        self.0.background = color.into();
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Get the line ending.
    pub fn line_ending(&self) -> LineEnding {
        self.0.line_ending
    }

    /// Determine whether printing text or changing colors also flushes the output.
    pub fn auto_flush(&self) -> bool {
        self.0.auto_flush
    }

    /// Get the foreground color the terminal starts out with.
    pub fn foreground(&self) -> Colorant {
        self.0.foreground
    }

    /// Get the background color the terminal starts out with.
    pub fn background(&self) -> Colorant {
        self.0.background
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.line_ending(), LineEnding::native());
        assert!(options.auto_flush());
        assert_eq!(options.foreground(), Colorant::Default);
        assert_eq!(options.background(), Colorant::Default);

        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn test_builder() {
        let mut builder = Options::builder();
        builder.auto_flush(false).background(Colorant::Default);
        let options = builder.line_ending(LineEnding::Lf).build();

        assert!(!options.auto_flush());
        assert_eq!(options.line_ending(), LineEnding::Lf);
        assert_eq!(options.background(), Colorant::Default);
    }
}
