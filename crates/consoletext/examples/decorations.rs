use consoletext::consoletty::AnsiTerminal;
use consoletext::{write_line, ConsoleColor, Decoration, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Log to stderr, away from the styled text on stdout.
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut terminal = AnsiTerminal::stdout();

    write_line(
        &mut terminal,
        "Testing bold...",
        Some(ConsoleColor::Yellow),
        Some(ConsoleColor::DarkBlue),
        Decoration::Bold,
    )?;
    write_line(
        &mut terminal,
        "Testing italics and fore/back colors...",
        Some(ConsoleColor::DarkGreen),
        Some(ConsoleColor::Gray),
        Decoration::Italics,
    )?;
    write_line(
        &mut terminal,
        "Testing underline",
        Some(ConsoleColor::White),
        None,
        Decoration::Underline,
    )?;
    write_line(
        &mut terminal,
        "Testing stricken",
        Some(ConsoleColor::Red),
        None,
        Decoration::Strikethrough,
    )?;

    Ok(())
}
