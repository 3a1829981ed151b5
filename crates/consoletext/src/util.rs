use std::io::{Error, ErrorKind, Result};

use consoletty::{Colorant, Terminal};

/// An observable interaction with a [`FakeTerminal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    SetForeground(Colorant),
    SetBackground(Colorant),
    Print(String),
    PrintLine(String),
}

/// A terminal that records all interactions instead of displaying anything.
///
/// The fake terminal can also be configured to fail printing or to fail
/// setting colors after a number of successful attempts.
#[derive(Debug, Default)]
pub(crate) struct FakeTerminal {
    foreground: Colorant,
    background: Colorant,
    events: Vec<Event>,
    broken_sink: bool,
    color_budget: Option<usize>,
}

impl FakeTerminal {
    /// Create a new fake terminal with the given colors.
    pub(crate) fn new<F, B>(foreground: F, background: B) -> Self
    where
        F: Into<Colorant>,
        B: Into<Colorant>,
    {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            ..Self::default()
        }
    }

    /// Make printing fail.
    pub(crate) fn with_broken_sink(mut self) -> Self {
        self.broken_sink = true;
        self
    }

    /// Make setting colors fail after the given number of successes.
    pub(crate) fn with_color_budget(mut self, budget: usize) -> Self {
        self.color_budget = Some(budget);
        self
    }

    /// Get the current colors.
    pub(crate) fn colors(&self) -> (Colorant, Colorant) {
        (self.foreground, self.background)
    }

    /// Get the recorded events.
    pub(crate) fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get the recorded text, whether printed with or without newline.
    pub(crate) fn printed(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                Event::Print(ref text) | Event::PrintLine(ref text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Determine whether any color was set.
    pub(crate) fn has_color_events(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(*e, Event::SetForeground(_) | Event::SetBackground(_)))
    }

    fn spend(&mut self) -> Result<()> {
        match self.color_budget {
            Some(0) => Err(Error::from(ErrorKind::BrokenPipe)),
            Some(ref mut budget) => {
                *budget -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Terminal for FakeTerminal {
    fn foreground(&self) -> Colorant {
        self.foreground
    }

    fn set_foreground(&mut self, color: Colorant) -> Result<()> {
        self.spend()?;
        self.events.push(Event::SetForeground(color));
        self.foreground = color;
        Ok(())
    }

    fn background(&self) -> Colorant {
        self.background
    }

    fn set_background(&mut self, color: Colorant) -> Result<()> {
        self.spend()?;
        self.events.push(Event::SetBackground(color));
        self.background = color;
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<()> {
        if self.broken_sink {
            return Err(Error::from(ErrorKind::BrokenPipe));
        }
        self.events.push(Event::Print(text.to_owned()));
        Ok(())
    }

    fn println(&mut self, text: &str) -> Result<()> {
        if self.broken_sink {
            return Err(Error::from(ErrorKind::BrokenPipe));
        }
        self.events.push(Event::PrintLine(text.to_owned()));
        Ok(())
    }
}
