//! Byte cursor with line/column tracking

use crate::error::Pos;

/// Cursor for navigating byte input
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
}

impl<'a> Cursor<'a> {
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Current byte without consuming
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advance by one byte
    pub fn advance(&mut self) {
        if let Some(b) = self.current() {
            self.pos += 1;
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if !is_continuation_byte(b) {
                self.col += 1;
            }
        }
    }

    /// Advance while `pred` holds for the current byte
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.advance();
        }
    }

    pub const fn position(&self) -> Pos {
        Pos::new(self.pos, self.line, self.col)
    }

    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Bytes from `start` up to the current position
    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        self.input.get(start..self.pos).unwrap_or_default()
    }
}

// UTF-8 continuation bytes don't start a new column.
const fn is_continuation_byte(b: u8) -> bool {
    b & 0xC0 == 0x80
}
