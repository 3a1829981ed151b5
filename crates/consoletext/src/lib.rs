//! # Console 🌸 Text
//!
//! This crate writes **decorated and colored text to the console** and puts
//! the console back the way it found it. Each styled write
//!
//!   * optionally changes the foreground and background [`ConsoleColor`]s,
//!   * wraps the text in the control text for one [`Decoration`], i.e., bold,
//!     italics, underline, strikethrough, or none at all,
//!   * hands the result to a sink in a single call, and
//!   * restores the previous colors, even if the write fails or panics.
//!
//! The terminal itself is abstracted by [`consoletty`]'s [`Terminal`] trait,
//! which this crate re-exports together with the color types. Use
//! [`AnsiTerminal`](consoletty::AnsiTerminal) for writing to standard output
//! or any other [`Write`](std::io::Write)r.
//!
//! The [`deco`] module provides the control text for decorations, the
//! [`write`](mod@write) module performs styled writes, and the [`err`] module
//! defines this crate's [`Error`].
//!
//!
//! # Example
//!
//! ```
//! # use consoletext::{write_line, ConsoleColor, Decoration};
//! # use consoletext::consoletty::AnsiTerminal;
//! # use consoletext::consoletty::opt::{LineEnding, Options};
//! let options = Options::builder().line_ending(LineEnding::Lf).build();
//! let mut terminal = AnsiTerminal::with_options(Vec::new(), options);
//!
//! write_line(
//!     &mut terminal,
//!     "Testing bold...",
//!     Some(ConsoleColor::Yellow),
//!     Some(ConsoleColor::DarkBlue),
//!     Decoration::Bold,
//! )?;
//!
//! assert_eq!(
//!     terminal.into_inner(),
//!     b"\x1b[93m\x1b[44m\x1b[1mTesting bold...\x1b[0m\n\x1b[39m\x1b[49m"
//! );
//! # Ok::<(), consoletext::Error>(())
//! ```
//!
//! Since [`write`](crate::write()) and [`write_line`] accept anything
//! convertible into a decoration, they also accept raw codes and names, which
//! fail with [`Error::UnsupportedDecoration`] if they do not identify a
//! decoration. The terminal's colors are restored all the same:
//!
//! ```
//! # use consoletext::{write, ConsoleColor, Terminal};
//! # use consoletext::consoletty::AnsiTerminal;
//! let mut terminal = AnsiTerminal::new(Vec::new());
//! let result = write(&mut terminal, "huh?", Some(ConsoleColor::Red), None, "blinking");
//!
//! assert!(result.unwrap_err().is_unsupported_decoration());
//! assert!(terminal.foreground().is_default());
//! assert_eq!(terminal.into_inner(), b"\x1b[91m\x1b[39m");
//! ```

pub mod deco;
pub mod err;
#[cfg(test)]
mod util;
pub mod write;

pub use consoletty;
pub use consoletty::{Colorant, ConsoleColor, Terminal};
pub use deco::Decoration;
pub use err::{Error, Result};
pub use write::{write, write_line, write_with, ColorGuard, StyleRequest};
