/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A simple byte reader over an in-memory buffer
//!
//! Reads never panic, reading past the end returns zero,
//! use [`ZByteReader::eof`] or [`ZByteReader::has`] to check before reading.

/// An encapsulation of a byte stream
///
/// The lifetime parameter is from the buffer the reader borrows
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader positioned at the start of `buf`
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `bytes` ahead of the stream.
    pub fn skip(&mut self, bytes: usize) {
        self.position = self.position.saturating_add(bytes).min(self.stream.len());
    }
    /// Move `bytes` back in the stream
    pub fn rewind(&mut self, bytes: usize) {
        self.position = self.position.saturating_sub(bytes);
    }
    /// Return true if at least `bytes` remain in the stream
    #[must_use]
    pub const fn has(&self, bytes: usize) -> bool {
        self.remaining() >= bytes
    }
    /// Return true if there are no more bytes to read
    #[must_use]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Number of bytes left in the stream
    #[must_use]
    pub const fn remaining(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Current position in the stream
    #[must_use]
    pub const fn get_position(&self) -> usize {
        self.position
    }
    /// Read a single byte, or zero if the stream is exhausted
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
    /// Look ahead `position` bytes and return a reference
    /// to `num_bytes` from that position, or `None` if the
    /// peek would be out of bounds.
    ///
    /// This doesn't increment the position.
    #[must_use]
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Option<&'a [u8]> {
        let start = self.position.checked_add(position)?;
        let end = start.checked_add(num_bytes)?;

        self.stream.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ZByteReader;

    #[test]
    fn reads_past_end_return_zero() {
        let mut reader = ZByteReader::new(b"P3");

        assert_eq!(reader.get_u8(), b'P');
        assert_eq!(reader.get_u8(), b'3');
        assert!(reader.eof());
        assert_eq!(reader.get_u8(), 0);
        assert_eq!(reader.get_position(), 2);
    }

    #[test]
    fn peek_does_not_move() {
        let mut reader = ZByteReader::new(b"abcdef");
        reader.skip(1);

        assert_eq!(reader.peek_at(1, 2), Some(&b"cd"[..]));
        assert_eq!(reader.get_position(), 1);
        assert_eq!(reader.peek_at(3, 4), None);

        reader.rewind(10);
        assert_eq!(reader.get_position(), 0);
        assert!(reader.has(6));
        assert!(!reader.has(7));
    }
}
