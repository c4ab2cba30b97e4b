//! Raw host command model for the surround filter.
//!
//! A host editor delivers more than printable input through its command
//! pipeline. The filter only ever acts on the "type a character" command;
//! everything else must reach default handling untouched. This crate models
//! that split explicitly so the decode decision is a plain `match` instead of
//! command-group/id comparisons buried in the interception path.
//!
//! Modifier state is captured on the event itself rather than polled from
//! live keyboard state. The classifier downstream depends only on the shift
//! bit; CTRL and ALT are carried for hosts that report them.

use std::fmt;

bitflags::bitflags! {
    /// Modifier-key state snapshotted by the host at press time.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u8 {
        const SHIFT = 0b0000_0001;
        const CTRL  = 0b0000_0010;
        const ALT   = 0b0000_0100;
    }
}

impl ModMask {
    /// True when the shift key was held for this event.
    pub fn shift_held(&self) -> bool {
        self.contains(ModMask::SHIFT)
    }
}

/// Non-printable navigation keys. Never intercepted; enumerated so tests and
/// hosts can construct realistic pass-through traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// A printable keystroke: the produced character plus the modifier snapshot.
///
/// The character is the literal the host's layout produced (`'('`, not
/// "shift+9"), so trigger lookup stays layout-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub ch: char,
    pub mods: ModMask,
}

impl KeyPress {
    pub fn new(ch: char, mods: ModMask) -> Self {
        Self { ch, mods }
    }

    /// Plain keypress with no modifiers held.
    pub fn plain(ch: char) -> Self {
        Self::new(ch, ModMask::empty())
    }

    /// Keypress with shift held.
    pub fn shifted(ch: char) -> Self {
        Self::new(ch, ModMask::SHIFT)
    }
}

/// One raw command observed at the interception boundary.
///
/// Only `TypeChar` can be consumed by the filter. `Navigate` and `Other` exist
/// so the boundary contract ("forward anything that is not typed text") is
/// expressed in the type rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawCommand {
    /// Request to insert one printable character.
    TypeChar(KeyPress),
    /// Caret navigation.
    Navigate(NavKey),
    /// Any other editor command (save, undo, completion, ...).
    Other,
}

impl RawCommand {
    /// Decode the typed character, if this command is one.
    ///
    /// Returns `None` for every non-type-char command; callers must then
    /// forward the command unmodified.
    pub fn typed_char(&self) -> Option<KeyPress> {
        match self {
            RawCommand::TypeChar(press) => Some(*press),
            RawCommand::Navigate(_) | RawCommand::Other => None,
        }
    }
}

impl fmt::Display for RawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCommand::TypeChar(press) => write!(f, "TypeChar({:?}{:?})", press.ch, press.mods),
            RawCommand::Navigate(key) => write!(f, "Navigate({key:?})"),
            RawCommand::Other => write!(f, "Other"),
        }
    }
}
