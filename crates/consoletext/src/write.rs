//! Writing styled text.
//!
//! This module performs one styled write at a time: It changes the terminal's
//! colors as requested, hands the text wrapped in the decoration's control text
//! to a sink, and then restores the terminal's colors again. Restoration
//! happens no matter how the write ends, i.e., after success, after an
//! [`Error`], and while unwinding from a panic in the sink.
//!
//! Colors and decorations are restored by different means. Colors are restored
//! by writing back the previous colors, whereas decorations are deactivated by
//! the [`RESET`](crate::deco::RESET) control text written after the text. An
//! undecorated write hence emits the text without any control text.

use consoletty::{Colorant, ConsoleColor, Terminal};

use crate::deco::{encode, reset_for, Decoration};
use crate::err::{Error, Result};

/// A guard for a terminal's colors.
///
/// Upon creation, the guard reads the terminal's current foreground and
/// background colors. Colors changed through the guard are written back by
/// [`ColorGuard::restore`] or, failing that, when the guard is dropped.
/// Channels that were never changed through the guard are left alone.
#[derive(Debug)]
pub struct ColorGuard<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
    foreground: Colorant,
    background: Colorant,
    foreground_changed: bool,
    background_changed: bool,
    armed: bool,
}

impl<'a, T: Terminal + ?Sized> ColorGuard<'a, T> {
    /// Create a new guard for the terminal's current colors.
    pub fn new(terminal: &'a mut T) -> Self {
        let foreground = terminal.foreground();
        let background = terminal.background();

        Self {
            terminal,
            foreground,
            background,
            foreground_changed: false,
            background_changed: false,
            armed: true,
        }
    }

    /// Get the saved foreground color.
    pub fn saved_foreground(&self) -> Colorant {
        self.foreground
    }

    /// Get the saved background color.
    pub fn saved_background(&self) -> Colorant {
        self.background
    }

    /// Set the terminal's foreground color.
    pub fn set_foreground<C: Into<Colorant>>(&mut self, color: C) -> std::io::Result<()> {
        self.foreground_changed = true;
        self.terminal.set_foreground(color.into())
    }

    /// Set the terminal's background color.
    pub fn set_background<C: Into<Colorant>>(&mut self, color: C) -> std::io::Result<()> {
        self.background_changed = true;
        self.terminal.set_background(color.into())
    }

    /// Get the guarded terminal.
    pub fn terminal(&mut self) -> &mut T {
        self.terminal
    }

    /// Restore the saved colors.
    ///
    /// This method attempts to restore both colors, even if restoring the
    /// first one fails.
    pub fn restore(mut self) -> std::io::Result<()> {
        self.armed = false;
        self.write_back()
    }

    fn write_back(&mut self) -> std::io::Result<()> {
        let result1 = if self.foreground_changed {
            self.terminal.set_foreground(self.foreground)
        } else {
            Ok(())
        };
        let result2 = if self.background_changed {
            self.terminal.set_background(self.background)
        } else {
            Ok(())
        };

        tracing::debug!(
            foreground = ?self.foreground_changed.then_some(self.foreground),
            background = ?self.background_changed.then_some(self.background),
            "restored terminal colors"
        );
        result1.and(result2)
    }
}

impl<T: Terminal + ?Sized> Drop for ColorGuard<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            if let Err(error) = self.write_back() {
                tracing::warn!(%error, "could not restore terminal colors");
            }
        }
    }
}

// ------------------------------------------------------------------------------------------------

/// Write styled text through the given sink.
///
/// This function implements the one algorithm for styled writes:
///
///  1. Save the terminal's current colors.
///  2. Set the foreground and background colors, if given.
///  3. Look up the decoration's control text, failing with
///     [`Error::UnsupportedDecoration`] for unknown decorations.
///  4. Invoke the sink exactly once with the text, prefixed by the
///     decoration's control text and suffixed by the reset control text
///     unless the decoration is [`Decoration::None`].
///  5. Restore the colors changed in step 2.
///
/// Step 5 happens even if an earlier step fails or the sink panics. If both
/// the write and the restoration fail, the write's error is returned and the
/// restoration's error is logged.
///
/// The sink is any function taking the terminal and the text. Usually, that's
/// [`Terminal::print`] or [`Terminal::println`], which [`write`] and
/// [`write_line`] use, respectively.
pub fn write_with<T, S, D>(
    terminal: &mut T,
    sink: S,
    text: &str,
    foreground: Option<ConsoleColor>,
    background: Option<ConsoleColor>,
    decoration: D,
) -> Result<()>
where
    T: Terminal + ?Sized,
    S: FnOnce(&mut T, &str) -> std::io::Result<()>,
    D: TryInto<Decoration>,
    Error: From<D::Error>,
{
    let mut guard = ColorGuard::new(terminal);
    let outcome = emit(&mut guard, sink, text, foreground, background, decoration);
    let restored = guard.restore();

    match (outcome, restored) {
        (Ok(()), restored) => restored.map_err(Error::Io),
        (Err(error), Ok(())) => Err(error),
        (Err(error), Err(restore_error)) => {
            tracing::warn!(error = %restore_error, "could not restore terminal colors");
            Err(error)
        }
    }
}

fn emit<T, S, D>(
    guard: &mut ColorGuard<'_, T>,
    sink: S,
    text: &str,
    foreground: Option<ConsoleColor>,
    background: Option<ConsoleColor>,
    decoration: D,
) -> Result<()>
where
    T: Terminal + ?Sized,
    S: FnOnce(&mut T, &str) -> std::io::Result<()>,
    D: TryInto<Decoration>,
    Error: From<D::Error>,
{
    if let Some(color) = foreground {
        guard.set_foreground(color)?;
    }
    if let Some(color) = background {
        guard.set_background(color)?;
    }

    let decoration: Decoration = decoration.try_into()?;
    let prefix = encode::<Decoration>(decoration)?;
    let suffix = reset_for(decoration);

    let mut styled = String::with_capacity(prefix.len() + text.len() + suffix.len());
    styled.push_str(prefix);
    styled.push_str(text);
    styled.push_str(suffix);

    tracing::trace!(
        ?foreground,
        ?background,
        decoration = decoration.name(),
        length = text.len(),
        "styled write"
    );
    sink(guard.terminal(), &styled)?;
    Ok(())
}

/// Write styled text without advancing to the next line.
///
/// See [`write_with`] for details.
pub fn write<T, D>(
    terminal: &mut T,
    text: &str,
    foreground: Option<ConsoleColor>,
    background: Option<ConsoleColor>,
    decoration: D,
) -> Result<()>
where
    T: Terminal + ?Sized,
    D: TryInto<Decoration>,
    Error: From<D::Error>,
{
    write_with(terminal, T::print, text, foreground, background, decoration)
}

/// Write styled text and advance to the next line.
///
/// See [`write_with`] for details.
pub fn write_line<T, D>(
    terminal: &mut T,
    text: &str,
    foreground: Option<ConsoleColor>,
    background: Option<ConsoleColor>,
    decoration: D,
) -> Result<()>
where
    T: Terminal + ?Sized,
    D: TryInto<Decoration>,
    Error: From<D::Error>,
{
    write_with(terminal, T::println, text, foreground, background, decoration)
}

// ------------------------------------------------------------------------------------------------

/// A request for writing styled text.
///
/// A style request fluently combines some text with optional foreground and
/// background colors as well as a decoration. By default, a request changes
/// neither color and has no decoration.
///
/// A style request's display is the decorated text without colors, since
/// colors are terminal state and not control text.
///
///
/// # Example
///
/// ```
/// # use consoletext::{ConsoleColor, StyleRequest};
/// # use consoletext::consoletty::AnsiTerminal;
/// # use consoletext::consoletty::opt::{LineEnding, Options};
/// let options = Options::builder().line_ending(LineEnding::Lf).build();
/// let mut terminal = AnsiTerminal::with_options(Vec::new(), options);
///
/// let request = StyleRequest::new("Testing stricken")
///     .with_foreground(ConsoleColor::Red)
///     .strikethrough();
/// request.write_line(&mut terminal)?;
///
/// assert_eq!(format!("{}", request), "\x1b[9mTesting stricken\x1b[0m");
/// assert_eq!(
///     terminal.into_inner(),
///     b"\x1b[91m\x1b[9mTesting stricken\x1b[0m\n\x1b[39m"
/// );
/// # Ok::<(), consoletext::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleRequest<'a> {
    text: &'a str,
    foreground: Option<ConsoleColor>,
    background: Option<ConsoleColor>,
    decoration: Decoration,
}

impl<'a> StyleRequest<'a> {
    /// Create a new request for the text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Self::default()
        }
    }

    /// Use the foreground color.
    #[must_use = "method fluently creates a new style request and does not modify original one"]
    pub fn with_foreground(self, color: ConsoleColor) -> Self {
        Self {
            foreground: Some(color),
            ..self
        }
    }

    /// Use the background color.
    #[must_use = "method fluently creates a new style request and does not modify original one"]
    pub fn with_background(self, color: ConsoleColor) -> Self {
        Self {
            background: Some(color),
            ..self
        }
    }

    /// Use the decoration.
    #[must_use = "method fluently creates a new style request and does not modify original one"]
    pub fn with_decoration(self, decoration: Decoration) -> Self {
        Self { decoration, ..self }
    }

    /// Use bold text.
    #[must_use = "method fluently creates a new style request and does not modify original one"]
    pub fn bold(self) -> Self {
        self.with_decoration(Decoration::Bold)
    }

    /// Use italic text.
    #[must_use = "method fluently creates a new style request and does not modify original one"]
    pub fn italics(self) -> Self {
        self.with_decoration(Decoration::Italics)
    }

    /// Use underlined text.
    #[must_use = "method fluently creates a new style request and does not modify original one"]
    pub fn underline(self) -> Self {
        self.with_decoration(Decoration::Underline)
    }

    /// Use stricken text.
    #[must_use = "method fluently creates a new style request and does not modify original one"]
    pub fn strikethrough(self) -> Self {
        self.with_decoration(Decoration::Strikethrough)
    }

    /// Get the text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get the foreground color.
    pub fn foreground(&self) -> Option<ConsoleColor> {
        self.foreground
    }

    /// Get the background color.
    pub fn background(&self) -> Option<ConsoleColor> {
        self.background
    }

    /// Get the decoration.
    pub fn decoration(&self) -> Decoration {
        self.decoration
    }

    /// Write this request through the sink.
    pub fn write_with<T, S>(&self, terminal: &mut T, sink: S) -> Result<()>
    where
        T: Terminal + ?Sized,
        S: FnOnce(&mut T, &str) -> std::io::Result<()>,
    {
        write_with(
            terminal,
            sink,
            self.text,
            self.foreground,
            self.background,
            self.decoration,
        )
    }

    /// Write this request without advancing to the next line.
    pub fn write<T: Terminal + ?Sized>(&self, terminal: &mut T) -> Result<()> {
        self.write_with(terminal, T::print)
    }

    /// Write this request and advance to the next line.
    pub fn write_line<T: Terminal + ?Sized>(&self, terminal: &mut T) -> Result<()> {
        self.write_with(terminal, T::println)
    }
}

impl core::fmt::Display for StyleRequest<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.decoration.control())?;
        f.write_str(self.text)?;
        f.write_str(reset_for(self.decoration))
    }
}
