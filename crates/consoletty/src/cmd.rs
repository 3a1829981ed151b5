//! The terminal commands for setting colors.
//!
//! This module provides straight-forward struct types that implement the
//! [`Command`](crate::Command) and [`Sgr`] traits:
//!
//!   * [`SetDefaultForeground`] and [`SetDefaultBackground`]
//!   * [`SetForeground`] and [`SetBackground`] for the 16 console colors
//!   * [`SetColorant`] for either layer and either kind of [`Colorant`]
//!
//! Executing a command is as simple as writing its display:
//! ```
//! # use consoletty::cmd::{SetBackground, SetForeground};
//! # use consoletty::color::ConsoleColor;
//! assert_eq!(
//!     format!("{}{}", SetForeground(ConsoleColor::Yellow), SetBackground(ConsoleColor::DarkBlue)),
//!     "\x1b[93m\x1b[44m"
//! );
//! ```

use crate::color::{Colorant, ConsoleColor, Layer};
use crate::Sgr;

macro_rules! declare_unit_struct {
    ($name:ident) => {
        #[doc = concat!("The unit `",stringify!($name),"` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name;
    };
}

macro_rules! implement_sgr {
    ($name:ident : $selfish:ident ; $output:ident $body:block) => {
        impl $crate::Command for $name {}

        impl $crate::Sgr for $name {
            #[inline]
            fn write_param(&$selfish, $output: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $body
            }
        }

        impl ::core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str("\x1b[")?;
                self.write_param(f)?;
                f.write_str("m")
            }
        }
    };
}

macro_rules! define_unit_sgr {
    ($name:ident, $ansi:tt) => {
        declare_unit_struct!($name);
        implement_sgr!($name: self; f { f.write_str($ansi) });
    };
}

macro_rules! define_console_color {
    ($name:ident, $dark_base:expr, $bright_base:expr) => {
        #[doc = concat!("The `",stringify!($name),"(color)` command.")]
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name(pub ConsoleColor);

        implement_sgr!($name: self; f {
            let index = self.0.to_ansi();
            match index {
                0..=7 => <_ as ::core::fmt::Display>::fmt(&($dark_base + index), f),
                _ => <_ as ::core::fmt::Display>::fmt(&($bright_base + index), f),
            }
        });
    };
}

define_unit_sgr!(SetDefaultForeground, "39");
define_unit_sgr!(SetDefaultBackground, "49");
define_console_color!(SetForeground, 30, (const { 90 - 8 }));
define_console_color!(SetBackground, 40, (const { 100 - 8 }));

/// The `SetColorant(layer, colorant)` command.
///
/// This command selects between the other four commands of this module based
/// on layer and colorant. It comes in handy when restoring a color that may or
/// may not be the terminal's default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetColorant(pub Layer, pub Colorant);

implement_sgr!(SetColorant: self; f {
    match (self.0, self.1) {
        (Layer::Foreground, Colorant::Default) => SetDefaultForeground.write_param(f),
        (Layer::Background, Colorant::Default) => SetDefaultBackground.write_param(f),
        (Layer::Foreground, Colorant::Console(color)) => SetForeground(color).write_param(f),
        (Layer::Background, Colorant::Console(color)) => SetBackground(color).write_param(f),
    }
});
