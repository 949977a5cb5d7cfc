//! Byte cursor with memchr-accelerated searching
//!
//! A non-owning view over the document plus a read position. All searches
//! return absolute offsets into the document so callers can snapshot and
//! restore positions freely.

use memchr::{memchr, memmem};

/// Read cursor over a borrowed document
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `input`
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        ByteCursor { input, pos: 0 }
    }

    /// The whole document
    #[inline]
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Get the current position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Move to an absolute position, clamped to the end of input
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.input.len());
    }

    /// Advance by n bytes, stopping at the end of input
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.set_position(self.pos.saturating_add(n));
    }

    /// Check if we've reached the end
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Get remaining bytes
    #[inline]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Number of bytes left after the cursor
    #[inline]
    pub fn remaining_len(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Bytes from an absolute offset to the end of input
    #[inline]
    pub fn tail_from(&self, start: usize) -> &'a [u8] {
        self.input.get(start..).unwrap_or(&[])
    }

    /// Get a slice from start to end positions
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        &self.input[start..end]
    }

    /// Byte at an absolute offset
    #[inline]
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.input.get(pos).copied()
    }

    /// Find next occurrence of a specific byte at or after the cursor
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.find_byte_from(self.pos, byte)
    }

    /// Find next occurrence of a specific byte at or after `start`
    #[inline]
    pub fn find_byte_from(&self, start: usize, byte: u8) -> Option<usize> {
        let haystack = self.tail_from(start);
        memchr(byte, haystack).map(|i| start + i)
    }

    /// Exact substring search starting at `start`
    #[inline]
    pub fn find_exact_from(&self, start: usize, needle: &[u8]) -> Option<usize> {
        memmem::find(self.tail_from(start), needle).map(|i| start + i)
    }
}

/// Split `input` on `delim` when it yields exactly two pieces
///
/// `a=b` gives `(a, b)`; `a`, `a=b=c` and `=`-free input give `None`.
#[inline]
pub fn split_pair(input: &[u8], delim: u8) -> Option<(&[u8], &[u8])> {
    let at = memchr(delim, input)?;
    let (left, right) = (&input[..at], &input[at + 1..]);
    if memchr(delim, right).is_some() {
        return None;
    }
    Some((left, right))
}

/// Trim bytes matching `pred` from both ends
#[inline]
pub fn trim_matches(input: &[u8], pred: impl Fn(u8) -> bool) -> &[u8] {
    let start = input.iter().position(|&b| !pred(b)).unwrap_or(input.len());
    let end = input.iter().rposition(|&b| !pred(b)).map_or(start, |i| i + 1);
    &input[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_byte() {
        let cursor = ByteCursor::new(b"hello <world>");
        assert_eq!(cursor.find_byte(b'<'), Some(6));
        assert_eq!(cursor.find_byte_from(7, b'>'), Some(12));
        assert_eq!(cursor.find_byte_from(13, b'>'), None);
        assert_eq!(cursor.find_byte_from(99, b'>'), None);
    }

    #[test]
    fn test_find_exact_is_absolute() {
        let mut cursor = ByteCursor::new(b"<a><b></b></a>");
        cursor.set_position(3);
        assert_eq!(cursor.find_exact_from(3, b"</a>"), Some(10));
        assert_eq!(cursor.find_exact_from(11, b"</a>"), None);
    }

    #[test]
    fn test_advance_clamps() {
        let mut cursor = ByteCursor::new(b"abc");
        cursor.advance(2);
        assert_eq!(cursor.remaining(), b"c");
        cursor.advance(10);
        assert!(cursor.is_eof());
        assert_eq!(cursor.remaining_len(), 0);
    }

    #[test]
    fn test_split_pair() {
        assert_eq!(split_pair(b"x=\"1\"", b'='), Some((&b"x"[..], &b"\"1\""[..])));
        assert_eq!(split_pair(b"x=", b'='), Some((&b"x"[..], &b""[..])));
        assert_eq!(split_pair(b"checked", b'='), None);
        assert_eq!(split_pair(b"a=b=c", b'='), None);
    }

    #[test]
    fn test_trim_matches() {
        let quote = |b: u8| b == b'"';
        assert_eq!(trim_matches(b"\"1\"", quote), b"1");
        assert_eq!(trim_matches(b"1\"", quote), b"1");
        assert_eq!(trim_matches(b"\"\"", quote), b"");
        assert_eq!(trim_matches(b"plain", quote), b"plain");
    }
}
