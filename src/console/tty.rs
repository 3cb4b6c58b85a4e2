//! Line editor driven one input byte at a time.
//!
//! The editor owns the line buffer, the history ring and the escape-sequence
//! decoder. Every byte read from the console is handed to
//! [`LineEditor::feed`], which edits the buffer, echoes the change and, on
//! end of line, returns the submitted text for dispatch.
//!
//! Recognized input:
//! - `ESC [ A` / `ESC [ B`: previous / next history entry
//! - `ESC [ D` / `ESC [ C`: cursor left / right
//! - `Tab`: complete the command name
//! - `Backspace` / `DEL`: delete left of the cursor
//! - `CR` / `LF`: submit the line
//! - printable ASCII: insert at the cursor
//!
//! NUL and `0xFF` are read-error sentinels and are ignored, as are other
//! control bytes and bytes breaking an escape sequence.

use super::history::{CommandHistory, Direction};
use super::io::Console;
use super::line::{Line, LineBuffer};
use crate::user::{Registry, completion};

/// ANSI escape sequence state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeState {
    Normal,
    Escape,  // Got ESC (0x1B)
    Bracket, // Got ESC [
}

/// Everything the editor needs from the session while handling one byte.
pub struct Terminal<'a> {
    pub console: &'a mut dyn Console,
    /// Used for tab completion.
    pub registry: &'a Registry,
    /// Printed when the line is redrawn.
    pub prompt: &'a str,
    /// Whether edits are echoed back.
    pub echo: bool,
}

impl Terminal<'_> {
    fn emit(&mut self, bytes: &[u8]) {
        if self.echo {
            self.console.write_bytes(bytes);
        }
    }

    fn emit_backspaces(&mut self, n: usize) {
        if self.echo {
            self.console.backspaces(n);
        }
    }
}

/// Interactive line editor.
pub struct LineEditor {
    line: LineBuffer,
    history: CommandHistory,
    state: EscapeState,
}

impl LineEditor {
    pub const fn new() -> Self {
        Self {
            line: LineBuffer::new(),
            history: CommandHistory::new(),
            state: EscapeState::Normal,
        }
    }

    /// The line under edit.
    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn state(&self) -> EscapeState {
        self.state
    }

    /// Process one input byte. Returns the line when it is submitted.
    pub fn feed(&mut self, c: u8, term: &mut Terminal<'_>) -> Option<Line> {
        match self.state {
            EscapeState::Normal => return self.handle_normal(c, term),
            EscapeState::Escape => {
                if c == b'[' {
                    self.state = EscapeState::Bracket;
                } else {
                    trace!("dropped escape continuation {:#04x}", c);
                    self.state = EscapeState::Normal;
                }
            }
            EscapeState::Bracket => {
                self.state = EscapeState::Normal;
                match c {
                    b'A' => self.recall(Direction::Previous, term),
                    b'B' => self.recall(Direction::Next, term),
                    b'C' => {
                        if let Some(c) = self.line.at_cursor() {
                            self.line.move_right();
                            term.emit(&[c]);
                        }
                    }
                    b'D' => {
                        if self.line.move_left() {
                            term.emit(b"\x08");
                        }
                    }
                    _ => trace!("unknown escape sequence ESC [ {:#04x}", c),
                }
            }
        }
        None
    }

    fn handle_normal(&mut self, c: u8, term: &mut Terminal<'_>) -> Option<Line> {
        match c {
            0x1B => self.state = EscapeState::Escape,
            // Received null or read error
            0x00 | 0xFF => {}
            b'\t' => self.complete(term),
            0x08 | 0x7F => self.backspace(term),
            b'\r' | b'\n' => return Some(self.submit(term)),
            c if c.is_ascii_graphic() || c == b' ' => self.insert(c, term),
            _ => {}
        }
        None
    }

    fn insert(&mut self, c: u8, term: &mut Terminal<'_>) {
        // A line at the capacity bound is dropped, not truncated
        if self.line.is_full() {
            trace!("discarding overlong line");
            self.line.clear();
        }

        let appending = self.line.cursor() == self.line.len();
        self.line.insert(c);
        if appending {
            term.emit(&[c]);
        } else {
            let cursor = self.line.cursor();
            term.emit(&self.line.as_bytes()[cursor - 1..]);
            term.emit_backspaces(self.line.len() - cursor);
        }

        if self.line.is_full() {
            trace!("line reached capacity, starting over");
            self.line.clear();
        }
    }

    fn backspace(&mut self, term: &mut Terminal<'_>) {
        if !self.line.delete_back() {
            return;
        }
        let tail = self.line.tail();
        if tail.is_empty() {
            term.emit(b"\x08 \x08");
        } else {
            term.emit(b"\x08");
            term.emit(tail);
            // Blank the stale last column, then return to the cursor
            term.emit(b" \x08");
            term.emit_backspaces(tail.len());
        }
    }

    fn recall(&mut self, direction: Direction, term: &mut Terminal<'_>) {
        let Some(entry) = self.history.navigate(direction) else {
            return;
        };
        self.line.set(entry);
        if term.echo {
            term.console.puts("\x1b[2K\r");
            term.console.puts(term.prompt);
            term.console.write_bytes(self.line.as_bytes());
        }
    }

    fn complete(&mut self, term: &mut Terminal<'_>) {
        term.emit_backspaces(self.line.cursor());
        term.console.puts("\r\n");

        let mut prefix = self.line.to_line();
        completion::complete(term.registry, &mut prefix, term.console);
        self.line.set(&prefix);

        term.console.puts(term.prompt);
        term.console.write_bytes(self.line.as_bytes());
    }

    fn submit(&mut self, term: &mut Terminal<'_>) -> Line {
        self.history.push(self.line.as_bytes());
        term.emit(b"\r\n");
        let line = self.line.to_line();
        self.line.clear();
        line
    }
}

impl Default for LineEditor {
    fn default() -> Self {
        Self::new()
    }
}
