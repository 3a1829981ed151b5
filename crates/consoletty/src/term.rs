use std::io::{Result, Stdout, Write};

use crate::cmd::SetColorant;
use crate::color::{Colorant, Layer};
use crate::opt::Options;
use crate::{Command, Terminal};

/// A terminal that understands ANSI escape sequences.
///
/// This terminal tracks its own color state. It starts out with the colors
/// given by its [`Options`] and, upon every change, writes the corresponding
/// SGR command to the underlying writer. Printed text goes to the same writer,
/// so colors and text stay in order.
///
/// Since the terminal has no way of querying the device, the tracked colors
/// are only as accurate as the initial colors and the assumption that nobody
/// else writes color changes to the same device.
///
///
/// # Example
///
/// ```
/// # use consoletty::{AnsiTerminal, Terminal};
/// # use consoletty::color::{Colorant, ConsoleColor};
/// let mut terminal = AnsiTerminal::new(Vec::new());
/// terminal.set_foreground(ConsoleColor::Red.into())?;
/// terminal.print("alert")?;
/// terminal.set_foreground(Colorant::Default)?;
///
/// assert_eq!(terminal.get_ref(), b"\x1b[91malert\x1b[39m");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct AnsiTerminal<W: Write> {
    options: Options,
    foreground: Colorant,
    background: Colorant,
    writer: W,
}

impl AnsiTerminal<Stdout> {
    /// Create a new terminal writing to standard output.
    ///
    /// On Windows, this method also enables the console's support for ANSI
    /// escape sequences and starts out with the console's current colors.
    /// If that fails, the terminal falls back on the default options.
    pub fn stdout() -> Self {
        Self::stdout_with_options(Options::default())
    }

    /// Create a new terminal writing to standard output with the given
    /// options.
    ///
    /// Where the platform exposes the current colors, they take precedence
    /// over the options' initial colors.
    pub fn stdout_with_options(options: Options) -> Self {
        let mut terminal = Self::with_options(std::io::stdout(), options);

        match crate::sys::prepare_output() {
            Ok((Colorant::Default, Colorant::Default)) => (),
            Ok((foreground, background)) => {
                tracing::debug!(?foreground, ?background, "read console colors");
                terminal.foreground = foreground;
                terminal.background = background;
            }
            Err(error) => tracing::debug!(%error, "could not prepare console output"),
        }

        terminal
    }
}

impl<W: Write> AnsiTerminal<W> {
    /// Create a new terminal with the default options.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, Options::default())
    }

    /// Create a new terminal with the given options.
    pub fn with_options(writer: W, options: Options) -> Self {
        Self {
            foreground: options.foreground(),
            background: options.background(),
            options,
            writer,
        }
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the terminal and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the command.
    pub fn exec<C: Command>(&mut self, cmd: C) -> Result<()> {
        write!(self.writer, "{}", cmd)
    }

    fn finish(&mut self) -> Result<()> {
        if self.options.auto_flush() {
            self.writer.flush()
        } else {
            Ok(())
        }
    }
}

impl<W: Write> Terminal for AnsiTerminal<W> {
    fn foreground(&self) -> Colorant {
        self.foreground
    }

    fn set_foreground(&mut self, color: Colorant) -> Result<()> {
        self.exec(SetColorant(Layer::Foreground, color))?;
        self.foreground = color;
        self.finish()
    }

    fn background(&self) -> Colorant {
        self.background
    }

    fn set_background(&mut self, color: Colorant) -> Result<()> {
        self.exec(SetColorant(Layer::Background, color))?;
        self.background = color;
        self.finish()
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.finish()
    }

    fn println(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer
            .write_all(self.options.line_ending().as_str().as_bytes())?;
        self.finish()
    }
}

impl<W: Write> Write for AnsiTerminal<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }
}
