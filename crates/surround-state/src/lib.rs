//! Selection model and filter metrics.
//!
//! A selection is a single contiguous char range over the host buffer plus a
//! mode flag. Only stream (contiguous) selections participate in
//! surrounding; block (rectangular) selections pass through the filter
//! untouched, so the mode must travel with the span rather than live in some
//! host-side setting the core cannot see.

/// How the host presents the selected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// A single contiguous char range.
    Stream,
    /// A rectangular multi-line region. Never surrounded.
    Block,
}

/// A selection span in absolute char offsets, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start: usize,
    pub end: usize,
    pub mode: SelectionMode,
}

impl SelectionSpan {
    /// Construct a span normalizing ordering so that `start <= end`.
    pub fn new(a: usize, b: usize, mode: SelectionMode) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self { start, end, mode }
    }

    /// Contiguous stream-mode span, the common case.
    pub fn stream(a: usize, b: usize) -> Self {
        Self::new(a, b, SelectionMode::Stream)
    }

    /// Returns true if the span is empty (`start == end`).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of chars covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_stream(&self) -> bool {
        matches!(self.mode, SelectionMode::Stream)
    }
}

/// Host-side holder for the single active selection.
///
/// Invariants:
/// - If `active` is `Some(span)` then `span.start <= span.end` (enforced by
///   `SelectionSpan::new`).
/// - Empty spans (start == end) are permitted and treated the same as no
///   selection by the filter.
#[derive(Debug, Default, Clone)]
pub struct SelectionModel {
    /// The currently active selection; None when no user selection exists.
    pub active: Option<SelectionSpan>,
}

impl SelectionModel {
    pub fn clear(&mut self) {
        self.active = None;
    }
    pub fn set(&mut self, span: SelectionSpan) {
        self.active = Some(span);
    }
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

// Filter metrics: simple non-atomic u64 fields mutated on the host's command
// dispatch thread only. Command delivery is serialized, so no atomics are
// required.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterMetricsSnapshot {
    pub typed_chars: u64,
    pub surrounds_applied: u64,
    pub forwarded: u64,
}

/// Counters for the interception boundary.
///
/// `typed_chars` counts every decoded type-char command whether or not it was
/// consumed; `surrounds_applied` counts consumed ones; `forwarded` counts
/// commands of any kind delegated to the next target. For any command
/// sequence `surrounds_applied + forwarded` equals the number of commands
/// observed.
#[derive(Debug, Default, Clone)]
pub struct FilterMetrics {
    typed_chars: u64,
    surrounds_applied: u64,
    forwarded: u64,
}

impl FilterMetrics {
    pub fn snapshot(&self) -> FilterMetricsSnapshot {
        FilterMetricsSnapshot {
            typed_chars: self.typed_chars,
            surrounds_applied: self.surrounds_applied,
            forwarded: self.forwarded,
        }
    }
    pub fn note_typed_char(&mut self) {
        self.typed_chars += 1;
    }
    pub fn note_surround(&mut self) {
        self.surrounds_applied += 1;
    }
    pub fn note_forwarded(&mut self) {
        self.forwarded += 1;
    }
}
