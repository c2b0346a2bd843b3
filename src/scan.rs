//! Low-level byte scanning over a [`LoadedBuffer`].
//!
//! The scanner is a non-mutating cursor shared by both family grammars. It
//! understands exactly three byte classes: horizontal whitespace (field
//! separators, including `\r` so CRLF files work unchanged), the newline
//! terminator, and the trailing sentinel. Everything else is token content.
//!
//! Tokens are returned as spans borrowing the buffer; the buffer itself is
//! never written to.

use crate::buffer::{LoadedBuffer, SENTINEL};

/// Horizontal whitespace: separates fields, never terminates a line.
#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

/// Cursor over a loaded buffer with 1-based physical line tracking.
pub(crate) struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
    line: u64,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(buffer: &'a LoadedBuffer) -> Self {
        Self {
            buf: buffer.scan_bytes(),
            pos: 0,
            line: 1,
        }
    }

    /// 1-based number of the line the cursor is currently on.
    pub(crate) fn line(&self) -> u64 {
        self.line
    }

    /// True once the cursor has reached the sentinel.
    pub(crate) fn at_end(&self) -> bool {
        self.buf[self.pos] == SENTINEL
    }

    /// True if the cursor sits on the current line's terminator.
    pub(crate) fn at_eol(&self) -> bool {
        self.buf[self.pos] == b'\n'
    }

    /// Advance over a run of horizontal whitespace.
    pub(crate) fn skip_blanks(&mut self) {
        while is_blank(self.buf[self.pos]) {
            self.pos += 1;
        }
    }

    /// Consume the newline under the cursor and start the next line.
    ///
    /// Callers must be at end-of-line.
    pub(crate) fn next_line(&mut self) {
        debug_assert!(self.at_eol());
        self.pos += 1;
        self.line += 1;
    }

    /// Skip blank (empty or whitespace-only) lines, leaving the cursor on
    /// the first content byte of a non-blank line or at the end of input.
    pub(crate) fn skip_blank_lines(&mut self) {
        loop {
            self.skip_blanks();
            if self.at_eol() {
                self.next_line();
            } else {
                return;
            }
        }
    }

    /// Consume one whitespace-free token and return its span, or `None` if
    /// the cursor sits on a line terminator (a required field is missing).
    pub(crate) fn token(&mut self) -> Option<&'a [u8]> {
        if self.at_eol() || self.at_end() {
            return None;
        }
        let start = self.pos;
        loop {
            let b = self.buf[self.pos];
            if is_blank(b) || b == b'\n' || b == SENTINEL {
                break;
            }
            self.pos += 1;
        }
        Some(&self.buf[start..self.pos])
    }

    /// Advance to the current line's terminator, tolerating any content.
    pub(crate) fn skip_to_eol(&mut self) {
        while !self.at_eol() && !self.at_end() {
            self.pos += 1;
        }
    }
}
