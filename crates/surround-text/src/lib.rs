//! Rope-based text buffer addressed by absolute char offsets.
//!
//! The buffer is owned by the host; the surround path only ever issues
//! `insert` calls against it and reads slices to recompute the selection.
//! Offsets are Unicode scalar (`char`) indices throughout. An insert shifts
//! every char at or after the insertion offset rightward by the inserted
//! text's char length, so a caller performing two ordered inserts must apply
//! that shift to the second offset itself.

use anyhow::Result;
use ropey::Rope;

/// A mutable text buffer backed by a `ropey::Rope`.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
    pub name: String,
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(name: impl Into<String>, content: &str) -> Result<Self> {
        Ok(Self {
            rope: Rope::from_str(content),
            name: name.into(),
        })
    }

    /// Total number of chars in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Insert `text` at the given char offset.
    ///
    /// Every char previously at or after `offset` moves right by
    /// `text.chars().count()`. `offset` must be `<= len_chars()`; the filter
    /// layer guarantees this by only deriving offsets from a selection over
    /// the same buffer.
    pub fn insert(&mut self, offset: usize, text: &str) {
        debug_assert!(
            offset <= self.rope.len_chars(),
            "insert offset {offset} past buffer end {}",
            self.rope.len_chars()
        );
        self.rope.insert(offset, text);
    }

    /// Return the chars in `[start, end)` as an owned `String`.
    ///
    /// Caller guarantees `start <= end <= len_chars()`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        debug_assert!(start <= end, "slice range reversed: {start}..{end}");
        debug_assert!(
            end <= self.rope.len_chars(),
            "slice end {end} past buffer end {}",
            self.rope.len_chars()
        );
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Full buffer contents as an owned `String`.
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }
}
