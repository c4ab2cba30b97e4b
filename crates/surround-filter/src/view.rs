//! The host-facing view seam.
//!
//! A host editor owns the buffer and the selection; the filter reaches both
//! through this trait, handed in at construction. No ambient registration or
//! discovery layer exists; wiring a filter to a view is an explicit
//! constructor call.

use surround_state::SelectionSpan;
use surround_text::Buffer;

/// Per-view collaborator contract the host implements.
///
/// Obligations on the host:
/// - `selection` reports the current selection in absolute char offsets over
///   the same buffer `buffer_mut` exposes, `None` when no selection exists.
/// - `select` replaces the active selection.
/// - Command delivery is serialized; the filter never re-enters the view.
pub trait EditorView {
    fn selection(&self) -> Option<SelectionSpan>;
    fn select(&mut self, span: SelectionSpan);
    fn buffer(&self) -> &Buffer;
    fn buffer_mut(&mut self) -> &mut Buffer;
}
