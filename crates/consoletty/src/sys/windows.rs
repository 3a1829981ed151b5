use core::ptr::from_mut;
use std::io::{Error, Result};

use windows_sys::Win32::Foundation;
use windows_sys::Win32::System::Console::{self, CONSOLE_SCREEN_BUFFER_INFO};

use crate::color::{Colorant, ConsoleColor};

/// Prepare the console's output for ANSI escape sequences and read its colors.
///
/// This function enables `ENABLE_VIRTUAL_TERMINAL_PROCESSING`, so that the
/// console interprets SGR sequences, and then splits the console's current
/// text attributes into foreground and background color.
pub(crate) fn prepare_output() -> Result<(Colorant, Colorant)> {
    // SAFETY: GetStdHandle has no preconditions.
    let handle = unsafe { Console::GetStdHandle(Console::STD_OUTPUT_HANDLE) };
    if handle.is_null() || handle == Foundation::INVALID_HANDLE_VALUE {
        return Err(Error::last_os_error());
    }

    let mut mode = 0;
    // SAFETY: The handle is valid and mode outlives the call.
    check(unsafe { Console::GetConsoleMode(handle, from_mut(&mut mode)) })?;
    let mode = mode | Console::ENABLE_VIRTUAL_TERMINAL_PROCESSING;
    // SAFETY: The handle is valid.
    check(unsafe { Console::SetConsoleMode(handle, mode) })?;

    // SAFETY: The struct is plain old data, for which all zeros are valid.
    let mut info: CONSOLE_SCREEN_BUFFER_INFO = unsafe { core::mem::zeroed() };
    // SAFETY: The handle is valid and info outlives the call.
    check(unsafe { Console::GetConsoleScreenBufferInfo(handle, from_mut(&mut info)) })?;

    Ok(split_attributes(info.wAttributes))
}

/// Convert a console function's status into a result.
///
/// Console functions return zero on failure and leave the details to
/// `GetLastError`.
fn check(status: Foundation::BOOL) -> Result<()> {
    if status == 0 {
        Err(Error::last_os_error())
    } else {
        Ok(())
    }
}

/// The console's stock text attributes, gray on black.
const STOCK_ATTRIBUTES: u16 = 0x07;

/// Split console text attributes into foreground and background color.
///
/// The low nibble holds the foreground and the next nibble the background.
/// Both use the same bit layout as [`ConsoleColor`]'s discriminants. The stock
/// attributes stand for the terminal's defaults, so that restoring them does
/// not override a themed profile's colors.
fn split_attributes(attributes: u16) -> (Colorant, Colorant) {
    if attributes & 0xff == STOCK_ATTRIBUTES {
        return (Colorant::Default, Colorant::Default);
    }

    let nibble = |shift: u16| {
        ConsoleColor::try_from(((attributes >> shift) & 0xf) as u8)
            .map_or(Colorant::Default, Colorant::Console)
    };

    (nibble(0), nibble(4))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_attributes() {
        let (fg, bg) = split_attributes(0x07);
        assert_eq!(fg, Colorant::Default);
        assert_eq!(bg, Colorant::Default);

        let (fg, bg) = split_attributes(0x0f);
        assert_eq!(fg, Colorant::Console(ConsoleColor::White));
        assert_eq!(bg, Colorant::Console(ConsoleColor::Black));

        let (fg, bg) = split_attributes(0x1e);
        assert_eq!(fg, Colorant::Console(ConsoleColor::Yellow));
        assert_eq!(bg, Colorant::Console(ConsoleColor::DarkBlue));
    }

    #[test]
    fn test_check() {
        assert!(check(0).is_err());
        assert!(check(1).is_ok());
        assert!(check(-1).is_ok());
    }
}
