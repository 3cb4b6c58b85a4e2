//! Fixed-capacity line buffer under active edit.

use crate::config::CMD_MAX;

/// A submitted line or a history entry: a fixed-capacity copy of the edited text.
pub type Line = heapless::Vec<u8, CMD_MAX>;

/// The line being edited.
///
/// Bytes `[0, len)` are the current text and `cursor` is the insertion
/// point, `0 <= cursor <= len <= CMD_MAX`. Bytes past `len` are stale.
pub struct LineBuffer {
    buf: [u8; CMD_MAX],
    len: usize,
    cursor: usize,
}

impl LineBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; CMD_MAX],
            len: 0,
            cursor: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len >= CMD_MAX
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current text.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Text from the cursor to the end of the line.
    pub fn tail(&self) -> &[u8] {
        &self.buf[self.cursor..self.len]
    }

    /// Byte under the cursor, if the cursor is not at the end.
    pub fn at_cursor(&self) -> Option<u8> {
        self.as_bytes().get(self.cursor).copied()
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.cursor = 0;
    }

    /// Replace the contents and put the cursor at the end.
    pub fn set(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(CMD_MAX);
        self.buf[..len].copy_from_slice(&bytes[..len]);
        self.len = len;
        self.cursor = len;
    }

    /// Copy of the current text.
    pub fn to_line(&self) -> Line {
        let mut line = Line::new();
        // len <= CMD_MAX, so this always fits
        let _ = line.extend_from_slice(self.as_bytes());
        line
    }

    /// Insert `c` at the cursor, shifting the tail right.
    ///
    /// Returns `false` without touching the buffer when it is full.
    pub fn insert(&mut self, c: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf.copy_within(self.cursor..self.len, self.cursor + 1);
        self.buf[self.cursor] = c;
        self.len += 1;
        self.cursor += 1;
        true
    }

    /// Delete the byte left of the cursor, shifting the tail left.
    ///
    /// Returns `false` when the cursor is at the start of the line.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.buf.copy_within(self.cursor..self.len, self.cursor - 1);
        self.len -= 1;
        self.cursor -= 1;
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.len {
            return false;
        }
        self.cursor += 1;
        true
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
