#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use surround_events::RawCommand;
use surround_filter::{CommandTarget, EditorView, ExecOutcome};
use surround_state::{SelectionModel, SelectionSpan};
use surround_text::Buffer;

/// In-memory `EditorView`: a buffer plus a selection model, no host attached.
pub struct MemoryView {
    buffer: Buffer,
    selection: SelectionModel,
}

impl MemoryView {
    pub fn new(content: &str) -> anyhow::Result<Self> {
        Ok(Self {
            buffer: Buffer::from_str("test", content)?,
            selection: SelectionModel::default(),
        })
    }

    pub fn with_selection(content: &str, span: SelectionSpan) -> anyhow::Result<Self> {
        let mut view = Self::new(content)?;
        view.selection.set(span);
        Ok(view)
    }

    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    /// Text currently covered by the active selection, if any.
    pub fn selection_text(&self) -> Option<String> {
        self.selection
            .active
            .map(|span| self.buffer.slice(span.start, span.end))
    }
}

impl EditorView for MemoryView {
    fn selection(&self) -> Option<SelectionSpan> {
        self.selection.active
    }
    fn select(&mut self, span: SelectionSpan) {
        self.selection.set(span);
    }
    fn buffer(&self) -> &Buffer {
        &self.buffer
    }
    fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }
}

/// Chain terminator that records every command it receives.
#[derive(Default)]
pub struct RecordingTarget {
    pub received: Vec<RawCommand>,
}

impl CommandTarget for RecordingTarget {
    fn exec(&mut self, cmd: &RawCommand) -> ExecOutcome {
        self.received.push(*cmd);
        ExecOutcome::Forwarded
    }
}

/// Install a fmt subscriber writing to the test capture. Safe to call from
/// every test; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}
