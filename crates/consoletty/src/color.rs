//! Console colors and colorants.
//!
//! This module offers [`ConsoleColor`], the closed palette of 16 colors a
//! console supports, and [`Colorant`], the value of one channel of a
//! terminal's ambient color state.

use crate::err::{OutOfBoundsError, UnknownColorError};

/// The 16 console colors.
///
/// Discriminants follow the classic console numbering, which also is the
/// layout of a Windows console attribute nibble: bit 0 is blue, bit 1 is green,
/// bit 2 is red, and bit 3 is intensity. Rust code converts between numbers
/// and variants with [`ConsoleColor as
/// TryFrom<u8>`](enum.ConsoleColor.html#impl-TryFrom%3Cu8%3E-for-ConsoleColor)
/// and [`u8 as
/// From<ConsoleColor>`](enum.ConsoleColor.html#impl-From%3CConsoleColor%3E-for-u8).
///
/// Since ANSI escape sequences order the same colors differently, use
/// [`ConsoleColor::to_ansi`] to get the index for SGR parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConsoleColor {
    #[default]
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl ConsoleColor {
    /// Get an iterator over all console colors in numeric order.
    pub fn all() -> ConsoleColorIterator {
        ConsoleColorIterator::new()
    }

    /// Determine whether this console color is bright.
    pub fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the ANSI color index for this console color.
    ///
    /// ANSI colors order red before green before blue, whereas console colors
    /// order blue before green before red. The result is between 0 and 15
    /// inclusive, with bright colors starting at 8.
    pub const fn to_ansi(&self) -> u8 {
        use self::ConsoleColor::*;

        match *self {
            Black => 0,
            DarkRed => 1,
            DarkGreen => 2,
            DarkYellow => 3,
            DarkBlue => 4,
            DarkMagenta => 5,
            DarkCyan => 6,
            Gray => 7,
            DarkGray => 8,
            Red => 9,
            Green => 10,
            Yellow => 11,
            Blue => 12,
            Magenta => 13,
            Cyan => 14,
            White => 15,
        }
    }

    /// Get this console color's human-readable name, e.g., `"dark blue"`.
    pub fn name(&self) -> &'static str {
        use self::ConsoleColor::*;

        match *self {
            Black => "black",
            DarkBlue => "dark blue",
            DarkGreen => "dark green",
            DarkCyan => "dark cyan",
            DarkRed => "dark red",
            DarkMagenta => "dark magenta",
            DarkYellow => "dark yellow",
            Gray => "gray",
            DarkGray => "dark gray",
            Blue => "blue",
            Green => "green",
            Cyan => "cyan",
            Red => "red",
            Magenta => "magenta",
            Yellow => "yellow",
            White => "white",
        }
    }
}

impl TryFrom<u8> for ConsoleColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use self::ConsoleColor::*;

        let color = match value {
            0 => Black,
            1 => DarkBlue,
            2 => DarkGreen,
            3 => DarkCyan,
            4 => DarkRed,
            5 => DarkMagenta,
            6 => DarkYellow,
            7 => Gray,
            8 => DarkGray,
            9 => Blue,
            10 => Green,
            11 => Cyan,
            12 => Red,
            13 => Magenta,
            14 => Yellow,
            15 => White,
            _ => return Err(OutOfBoundsError::new(value, 0..=15)),
        };

        Ok(color)
    }
}

impl From<ConsoleColor> for u8 {
    fn from(value: ConsoleColor) -> u8 {
        value as u8
    }
}

impl core::str::FromStr for ConsoleColor {
    type Err = UnknownColorError;

    /// Parse a console color by name.
    ///
    /// Matching ignores case as well as spaces, dashes, and underscores. So
    /// `"DarkBlue"`, `"dark-blue"`, and `"dark blue"` all name the same color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(*c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::all()
            .find(|color| color.name().replace(' ', "") == key)
            .ok_or_else(|| UnknownColorError(s.to_owned()))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over console colors.
///
/// This iterator is fused and exact.
#[derive(Debug)]
pub struct ConsoleColorIterator {
    index: u8,
}

impl ConsoleColorIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for ConsoleColorIterator {
    type Item = ConsoleColor;

    fn next(&mut self) -> Option<Self::Item> {
        let color = ConsoleColor::try_from(self.index).ok()?;
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 16_usize.saturating_sub(self.index as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ConsoleColorIterator {}

impl core::iter::FusedIterator for ConsoleColorIterator {}

// ====================================================================================================================

/// The value of one channel of a terminal's color state.
///
/// A terminal starts out with its own default foreground and background
/// colors, which usually are not one of the 16 console colors. Hence a channel
/// holds either the [`Colorant::Default`] or a [`Colorant::Console`] color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Colorant {
    /// The terminal's default color.
    #[default]
    Default,
    /// One of the 16 console colors.
    Console(ConsoleColor),
}

impl Colorant {
    /// Determine whether this colorant is the default.
    pub fn is_default(&self) -> bool {
        matches!(*self, Self::Default)
    }

    /// Get the console color, unless this colorant is the default.
    pub fn console(&self) -> Option<ConsoleColor> {
        match *self {
            Self::Default => None,
            Self::Console(color) => Some(color),
        }
    }
}

impl From<ConsoleColor> for Colorant {
    fn from(value: ConsoleColor) -> Self {
        Self::Console(value)
    }
}

// ====================================================================================================================

/// The targeted color channel: Foreground or background.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The foreground or text layer.
    Foreground,
    /// The background layer.
    Background,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_numbering() {
        for (index, color) in ConsoleColor::all().enumerate() {
            assert_eq!(u8::from(color) as usize, index);
            assert_eq!(ConsoleColor::try_from(index as u8).unwrap(), color);
        }

        assert_eq!(ConsoleColor::all().len(), 16);
        assert_eq!(ConsoleColor::try_from(16).unwrap_err().value, 16);
    }

    #[test]
    fn test_ansi() {
        assert_eq!(ConsoleColor::Black.to_ansi(), 0);
        assert_eq!(ConsoleColor::DarkBlue.to_ansi(), 4);
        assert_eq!(ConsoleColor::DarkYellow.to_ansi(), 3);
        assert_eq!(ConsoleColor::Gray.to_ansi(), 7);
        assert_eq!(ConsoleColor::Yellow.to_ansi(), 11);
        assert_eq!(ConsoleColor::White.to_ansi(), 15);

        let mut indices: Vec<u8> = ConsoleColor::all().map(|c| c.to_ansi()).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..16).collect::<Vec<u8>>());

        for color in ConsoleColor::all() {
            assert_eq!(color.is_bright(), 8 <= color.to_ansi());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("yellow".parse::<ConsoleColor>().unwrap(), ConsoleColor::Yellow);
        assert_eq!("DarkBlue".parse::<ConsoleColor>().unwrap(), ConsoleColor::DarkBlue);
        assert_eq!("dark-blue".parse::<ConsoleColor>().unwrap(), ConsoleColor::DarkBlue);
        assert_eq!("dark gray".parse::<ConsoleColor>().unwrap(), ConsoleColor::DarkGray);

        let error = "mauve".parse::<ConsoleColor>().unwrap_err();
        assert_eq!(error.0, "mauve");
    }

    #[test]
    fn test_colorant() {
        assert!(Colorant::default().is_default());
        assert_eq!(Colorant::default().console(), None);

        let red = Colorant::from(ConsoleColor::Red);
        assert!(!red.is_default());
        assert_eq!(red.console(), Some(ConsoleColor::Red));
    }
}
