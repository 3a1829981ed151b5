//! Text decorations and their control text.
//!
//! A [`Decoration`] is a single text emphasis, or none at all. Activating a
//! decoration means writing its control text, i.e., an ANSI escape sequence,
//! before the text, and deactivating it means writing [`RESET`] after the
//! text. The control text for [`Decoration::None`] is empty, so that
//! undecorated text never contains stray escape sequences.
//!
//!
//! # Example
//!
//! ```
//! # use consoletext::deco::{encode, reset_for, Decoration, RESET};
//! let prefix = encode(Decoration::Underline)?;
//! let suffix = reset_for(Decoration::Underline);
//! assert_eq!(format!("{prefix}link{suffix}"), "\x1b[4mlink\x1b[0m");
//!
//! assert_eq!(encode(Decoration::None)?, "");
//! assert_eq!(reset_for(Decoration::None), "");
//!
//! assert!(encode(5_u8).is_err());
//! # Ok::<(), consoletext::Error>(())
//! ```

use crate::err::{Error, Result};

/// The control text for resetting all decorations.
pub const RESET: &str = "\x1b[0m";
/// The control text for bold text.
pub const BOLD: &str = "\x1b[1m";
/// The control text for italic text.
pub const ITALICS: &str = "\x1b[3m";
/// The control text for underlined text.
pub const UNDERLINE: &str = "\x1b[4m";
/// The control text for stricken text.
pub const STRIKETHROUGH: &str = "\x1b[9m";

/// A text decoration.
///
/// Rust code converts raw codes into decorations with [`Decoration as
/// TryFrom<u8>`](enum.Decoration.html#impl-TryFrom%3Cu8%3E-for-Decoration) and
/// names into decorations with [`Decoration as
/// FromStr`](enum.Decoration.html#impl-FromStr-for-Decoration). Both fail with
/// [`Error::UnsupportedDecoration`] for values that do not name one of the five
/// variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Decoration {
    #[default]
    None = 0,
    Bold,
    Italics,
    Underline,
    Strikethrough,
}

impl Decoration {
    /// Get an iterator over all decorations.
    pub fn all() -> core::array::IntoIter<Self, 5> {
        use self::Decoration::*;

        [None, Bold, Italics, Underline, Strikethrough].into_iter()
    }

    /// Get the control text activating this decoration.
    pub const fn control(&self) -> &'static str {
        use self::Decoration::*;

        match *self {
            None => "",
            Bold => BOLD,
            Italics => ITALICS,
            Underline => UNDERLINE,
            Strikethrough => STRIKETHROUGH,
        }
    }

    /// Get this decoration's name.
    pub const fn name(&self) -> &'static str {
        use self::Decoration::*;

        match *self {
            None => "none",
            Bold => "bold",
            Italics => "italics",
            Underline => "underline",
            Strikethrough => "strikethrough",
        }
    }

    /// Determine whether this decoration is [`Decoration::None`].
    pub const fn is_none(&self) -> bool {
        matches!(*self, Self::None)
    }
}

impl TryFrom<u8> for Decoration {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        use self::Decoration::*;

        Ok(match value {
            0 => None,
            1 => Bold,
            2 => Italics,
            3 => Underline,
            4 => Strikethrough,
            _ => return Err(Error::UnsupportedDecoration(value.to_string())),
        })
    }
}

impl From<Decoration> for u8 {
    fn from(value: Decoration) -> Self {
        value as u8
    }
}

impl core::str::FromStr for Decoration {
    type Err = Error;

    /// Parse a decoration by name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedDecoration(format!("{:?}", s)))
    }
}

impl TryFrom<&str> for Decoration {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// Writing a decoration's display writes its control text.
impl core::fmt::Display for Decoration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.control())
    }
}

/// Get the control text activating the decoration.
///
/// This function accepts a [`Decoration`], which always succeeds, as well as
/// any value convertible into one, notably a raw `u8` code or a name. The
/// latter fail with [`Error::UnsupportedDecoration`] if they do not identify
/// one of the decorations.
pub fn encode<D>(decoration: D) -> Result<&'static str>
where
    D: TryInto<Decoration>,
    Error: From<D::Error>,
{
    let decoration = decoration.try_into()?;
    Ok(decoration.control())
}

/// Get the control text deactivating the decoration.
///
/// This is [`RESET`] for all decorations but [`Decoration::None`], for which
/// it is empty.
pub const fn reset_for(decoration: Decoration) -> &'static str {
    if decoration.is_none() {
        ""
    } else {
        RESET
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_control() -> Result<()> {
        assert_eq!(encode(Decoration::None)?, "");
        assert_eq!(encode(Decoration::Bold)?, "\x1b[1m");
        assert_eq!(encode(Decoration::Italics)?, "\x1b[3m");
        assert_eq!(encode(Decoration::Underline)?, "\x1b[4m");
        assert_eq!(encode(Decoration::Strikethrough)?, "\x1b[9m");
        assert_eq!(RESET, "\x1b[0m");
        Ok(())
    }

    #[test]
    fn test_injective() {
        let mut controls: Vec<&str> = Decoration::all().map(|d| d.control()).collect();
        controls.sort_unstable();
        controls.dedup();
        assert_eq!(controls.len(), 5);

        for decoration in Decoration::all().filter(|d| !d.is_none()) {
            assert!(!decoration.control().is_empty());
            assert_ne!(decoration.control(), RESET);
            assert_eq!(reset_for(decoration), RESET);
        }
        assert_eq!(reset_for(Decoration::None), "");
    }

    #[test]
    fn test_codes() -> Result<()> {
        for decoration in Decoration::all() {
            assert_eq!(Decoration::try_from(u8::from(decoration))?, decoration);
            assert_eq!(encode(u8::from(decoration))?, decoration.control());
        }

        for code in 5..=u8::MAX {
            let error = encode(code).unwrap_err();
            assert!(error.is_unsupported_decoration());
        }

        assert_eq!(
            Decoration::try_from(42_u8).unwrap_err().to_string(),
            "no control text for decoration 42"
        );
        Ok(())
    }

    #[test]
    fn test_names() -> Result<()> {
        assert_eq!("bold".parse::<Decoration>()?, Decoration::Bold);
        assert_eq!("Strikethrough".parse::<Decoration>()?, Decoration::Strikethrough);
        assert_eq!(encode("UNDERLINE")?, UNDERLINE);
        assert_eq!(encode("none")?, "");

        let error = encode("blinking").unwrap_err();
        assert!(error.is_unsupported_decoration());
        assert_eq!(error.to_string(), "no control text for decoration \"blinking\"");
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}plain", Decoration::None), "plain");
        assert_eq!(
            format!("{}wow{}", Decoration::Italics, RESET),
            "\x1b[3mwow\x1b[0m"
        );
    }
}
