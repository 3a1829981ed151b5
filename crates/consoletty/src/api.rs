use std::io::Result;

use crate::color::Colorant;

/// A command for the terminal.
///
/// Commands provide instructions to the terminal and are communicated in-band
/// by writing ANSI escape codes. Doing so is the responsibility of the
/// [`core::fmt::Display`] implementation, whereas the [`core::fmt::Debug`]
/// implementation should simply identify the command.
///
/// This trait is object-safe.
pub trait Command: core::fmt::Debug + core::fmt::Display {}

/// A borrowed command is a command.
impl<C: Command + ?Sized> Command for &C {}

/// A boxed command is a command.
impl<C: Command + ?Sized> Command for Box<C> {}

/// A command using select-graphic-rendition ANSI escape sequences.
///
/// To facilitate composition, SGR commands implement [`Sgr::write_param`],
/// which writes the parameter(s) without the leading `CSI` and the trailing
/// `m`. Declaring `out` to be a formatter keeps the trait object-safe.
pub trait Sgr: Command {
    /// Write the parameter(s) for this SGR command.
    fn write_param(&self, out: &mut core::fmt::Formatter<'_>) -> core::fmt::Result;
}

// ------------------------------------------------------------------------------------------------

/// A terminal with ambient color state.
///
/// The terminal owns its current foreground and background colors. Callers
/// borrow that state, i.e., read it, change it, and write the original values
/// back again. Setting a color affects all text printed afterwards.
///
/// The two printing methods are the standard sinks for text. Since they share
/// the signature `fn(&mut Self, &str) -> Result<()>`, a method path such as
/// `T::println` can be passed wherever a sink closure is expected.
///
/// Nothing serializes access to the color state. If several threads print to
/// the same terminal, they need to hold a common lock for the entire
/// read-modify-restore sequence.
pub trait Terminal {
    /// Get the current foreground color.
    fn foreground(&self) -> Colorant;

    /// Set the foreground color.
    fn set_foreground(&mut self, color: Colorant) -> Result<()>;

    /// Get the current background color.
    fn background(&self) -> Colorant;

    /// Set the background color.
    fn set_background(&mut self, color: Colorant) -> Result<()>;

    /// Print the text without advancing to the next line.
    fn print(&mut self, text: &str) -> Result<()>;

    /// Print the text and advance to the next line.
    fn println(&mut self, text: &str) -> Result<()>;
}
