//! # Console 🌸 Tty
//!
//! This crate provides the **host side of styled console output**: the 16
//! [`ConsoleColor`]s, the [`Terminal`] trait abstracting over a terminal's
//! ambient foreground and background colors, and [`AnsiTerminal`], which
//! implements that trait for any [`Write`](std::io::Write)r by tracking colors
//! and emitting ANSI escape sequences. Its only dependencies are
//! [`thiserror`](https://crates.io/crates/thiserror),
//! [`tracing`](https://crates.io/crates/tracing), and, on Windows,
//! [`windows-sys`](https://crates.io/crates/windows-sys).
//!
//! Using the terminal is easy:
//!
//!   * Create an [`AnsiTerminal`], e.g., with [`AnsiTerminal::stdout`].
//!   * Read and change colors with [`Terminal::foreground`],
//!     [`Terminal::set_foreground`], and their background counterparts.
//!   * Print text with [`Terminal::print`] and [`Terminal::println`].
//!
//! The [`cmd`] module provides the [`Command`]s for setting colors and the
//! [`opt`] module the [`Options`](opt::Options) for configuring terminals.
//!
//!
//! # Example
//!
//! ```
//! # use consoletty::{AnsiTerminal, ConsoleColor, Terminal};
//! # use consoletty::opt::{LineEnding, Options};
//! let options = Options::builder().line_ending(LineEnding::Lf).build();
//! let mut terminal = AnsiTerminal::with_options(Vec::new(), options);
//!
//! let saved = terminal.foreground();
//! terminal.set_foreground(ConsoleColor::Green.into())?;
//! terminal.println("ok")?;
//! terminal.set_foreground(saved)?;
//!
//! assert_eq!(terminal.into_inner(), b"\x1b[92mok\n\x1b[39m");
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//!
//! # Windows
//!
//! Since the Windows Console supports ANSI escape sequences for styling output
//! only with Windows 10 version 1511 or later, this crate does not support
//! earlier versions of the operating system.

mod api;
pub mod cmd;
pub mod color;
pub mod err;
pub mod opt;
mod sys;
mod term;

pub use api::{Command, Sgr, Terminal};
pub use color::{Colorant, ConsoleColor};
pub use term::AnsiTerminal;
