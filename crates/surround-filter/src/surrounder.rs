//! The surround transform: two ordered inserts plus a selection recompute.
//!
//! The buffer auto-shifts trailing content on insert, so the closing
//! delimiter's target offset must already account for the opening insert.
//! All arithmetic is in char offsets.

use crate::pairs::DelimiterPair;
use surround_state::SelectionSpan;
use surround_text::Buffer;

/// Wrap `span` in `pair`, returning the selection over the original text.
///
/// Precondition (caller-enforced, see the filter dispatch path): `span` is
/// non-empty and stream mode, with `span.end <= buffer.len_chars()`. The
/// transform cannot fail under that precondition.
///
/// Postconditions:
/// - The buffer reads `..<open><original text><close>..`.
/// - The returned span covers exactly the original `span.len()` chars, now
///   shifted right by the open delimiter's length.
/// - Buffer length grew by `pair.open_len() + pair.close_len()`.
pub fn surround(buffer: &mut Buffer, span: SelectionSpan, pair: DelimiterPair) -> SelectionSpan {
    debug_assert!(!span.is_empty(), "surround requires a non-empty selection");
    debug_assert!(span.is_stream(), "surround requires a stream selection");

    let len = span.len();
    let open_len = pair.open_len();
    buffer.insert(span.start, pair.open);
    // span.end is a pre-insert offset; the open delimiter shifted everything
    // at or after span.start right by open_len.
    buffer.insert(span.end + open_len, pair.close);

    let start = span.start + open_len;
    tracing::trace!(
        target: "surround.dispatch",
        op = "surround",
        open = pair.open,
        close = pair.close,
        from_start = span.start,
        to_start = start,
        len = len,
        "edit"
    );
    SelectionSpan::stream(start, start + len)
}
