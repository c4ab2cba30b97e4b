//! The interception boundary: a command-chain link that screens keystrokes.
//!
//! Per command the filter runs one synchronous pass: decode a typed char,
//! screen the selection (present, non-empty, stream mode), look the char up
//! in the trigger table, and either apply the surround or forward the command
//! to the next target in the chain. Nothing is retained between commands, so
//! no intermediate state is ever observable.

use crate::pairs::classify;
use crate::surrounder::surround;
use crate::view::EditorView;
use surround_events::{KeyPress, RawCommand};
use surround_state::{FilterMetrics, FilterMetricsSnapshot};
use tracing::trace;

/// Result of pushing one command through a chain link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The command was consumed; the host must not process it further.
    Handled,
    /// The command was left to downstream handling.
    Forwarded,
}

impl ExecOutcome {
    pub fn handled(&self) -> bool {
        matches!(self, ExecOutcome::Handled)
    }
}

/// One link in the host's command chain.
///
/// Hosts terminate the chain with their default handler (the one that
/// actually inserts typed characters); filters wrap it.
pub trait CommandTarget {
    fn exec(&mut self, cmd: &RawCommand) -> ExecOutcome;
}

/// Keystroke filter wrapping a view and the next command target.
///
/// Mirrors the host-side wiring: one filter per view, constructed when the
/// view is created and installed at the head of that view's command chain.
pub struct TypeCharFilter<V, N> {
    view: V,
    next: N,
    metrics: FilterMetrics,
}

impl<V: EditorView, N: CommandTarget> TypeCharFilter<V, N> {
    /// Install a filter over `view`, delegating unconsumed commands to
    /// `next`.
    pub fn new(view: V, next: N) -> Self {
        tracing::debug!(target: "surround.wire", buffer = view.buffer().name.as_str(), "type-char filter attached");
        Self {
            view,
            next,
            metrics: FilterMetrics::default(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn next(&self) -> &N {
        &self.next
    }

    pub fn metrics(&self) -> FilterMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Handle a decoded keypress. Returns true when the buffer was modified
    /// and the keystroke must be consumed.
    fn handle_key(&mut self, press: KeyPress) -> bool {
        let Some(span) = self.view.selection() else {
            trace!(target: "surround.filter", ch = %press.ch, reason = "no_selection", "forward");
            return false;
        };
        if span.is_empty() {
            trace!(target: "surround.filter", ch = %press.ch, reason = "empty_selection", "forward");
            return false;
        }
        if !span.is_stream() {
            trace!(target: "surround.filter", ch = %press.ch, reason = "block_mode", "forward");
            return false;
        }
        let Some(pair) = classify(press.ch, press.mods.shift_held()) else {
            trace!(target: "surround.filter", ch = %press.ch, shift = press.mods.shift_held(), reason = "not_a_trigger", "forward");
            return false;
        };
        let new_span = surround(self.view.buffer_mut(), span, pair);
        self.view.select(new_span);
        self.metrics.note_surround();
        true
    }
}

impl<V: EditorView, N: CommandTarget> CommandTarget for TypeCharFilter<V, N> {
    /// Screen one raw command.
    ///
    /// The returned outcome is the chain's: when this filter does not consume
    /// the command it reports whatever the next target reported.
    fn exec(&mut self, cmd: &RawCommand) -> ExecOutcome {
        let Some(press) = cmd.typed_char() else {
            trace!(target: "surround.filter", cmd = %cmd, reason = "non_typechar", "forward");
            self.metrics.note_forwarded();
            return self.next.exec(cmd);
        };
        self.metrics.note_typed_char();
        if self.handle_key(press) {
            ExecOutcome::Handled
        } else {
            self.metrics.note_forwarded();
            self.next.exec(cmd)
        }
    }
}
