//! Keystroke interception filter that wraps the active selection in a
//! delimiter pair.
//!
//! With a non-empty stream selection, typing a trigger character (shifted
//! `(`/`{`/`<`/`"`, unshifted `[`/`'`) consumes the keystroke, inserts the
//! matching open and close delimiters around the selected text, and restores
//! the selection over the original text. Every other command is forwarded
//! down the host's command chain untouched.
//!
//! Layering:
//! - [`pairs`]: the fixed trigger table mapping (char, shift) to a
//!   [`DelimiterPair`].
//! - [`surrounder`]: the buffer transform plus selection recompute.
//! - [`view`]: the [`EditorView`] seam a host implements (selection read,
//!   selection set, buffer access).
//! - [`filter`]: [`TypeCharFilter`], the [`CommandTarget`] chain link that
//!   ties the above together per keystroke.
//!
//! The filter holds no cross-keystroke state; each `exec` call runs to
//! completion on the host's dispatch thread.

pub mod filter;
pub mod pairs;
pub mod surrounder;
pub mod view;

pub use filter::{CommandTarget, ExecOutcome, TypeCharFilter};
pub use pairs::{DelimiterPair, classify};
pub use surrounder::surround;
pub use view::EditorView;
