//! Forward-only reader over a buffered request head.

/// A read position over a byte slice.
///
/// Every read moves forward; [`Cursor::previous`] lets the caller look back at
/// the byte that ended the last scan, which is how the parser tells whether a
/// query string follows the path.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// The byte just before the current position.
    #[inline]
    pub(crate) fn previous(&self) -> Option<u8> {
        self.pos.checked_sub(1).map(|i| self.buf[i])
    }

    pub(crate) fn bump(&mut self) -> Option<u8> {
        let byte = self.buf.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    pub(crate) fn skip_while(&mut self, predicate: impl Fn(u8) -> bool) {
        while self.buf.get(self.pos).is_some_and(|b| predicate(*b)) {
            self.pos += 1;
        }
    }

    /// Reads bytes up to, but not including, the first one matching `delimiter`.
    pub(crate) fn read_token(&mut self, delimiter: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.pos;
        self.skip_while(|b| !delimiter(b));
        &self.buf[start..self.pos]
    }

    /// Reads bytes up to the first one matching `delimiter` and consumes that delimiter.
    ///
    /// Returns the token together with the delimiter, or `None` as delimiter when
    /// the input ran out first.
    pub(crate) fn read_until(&mut self, delimiter: impl Fn(u8) -> bool) -> (&'a [u8], Option<u8>) {
        let token = self.read_token(delimiter);
        (token, self.bump())
    }

    /// Reads one line and consumes its terminator. Both `\r\n` and a bare `\n` end
    /// a line; the returned slice never includes them.
    ///
    /// An unterminated tail counts as the last line. Returns `None` once nothing is left.
    pub(crate) fn read_line(&mut self) -> Option<&'a [u8]> {
        if self.is_empty() {
            return None;
        }

        let (line, _) = self.read_until(|b| b == b'\n');
        Some(line.strip_suffix(b"\r").unwrap_or(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_and_previous() {
        let mut cursor = Cursor::new(b"/search?q=1 HTTP");

        let (path, delimiter) = cursor.read_until(|b| b == b' ' || b == b'?');
        assert_eq!(path, b"/search");
        assert_eq!(delimiter, Some(b'?'));
        assert_eq!(cursor.previous(), Some(b'?'));

        let (query, delimiter) = cursor.read_until(|b| b == b' ');
        assert_eq!(query, b"q=1");
        assert_eq!(delimiter, Some(b' '));

        let (rest, delimiter) = cursor.read_until(|b| b == b'/');
        assert_eq!(rest, b"HTTP");
        assert_eq!(delimiter, None);
        assert!(cursor.is_empty());
    }

    #[test]
    fn previous_at_start() {
        let cursor = Cursor::new(b"GET");
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn lines() {
        let mut cursor = Cursor::new(b"Host: a\r\nAccept: b\n\r\ntail");

        assert_eq!(cursor.read_line(), Some(&b"Host: a"[..]));
        assert_eq!(cursor.read_line(), Some(&b"Accept: b"[..]));
        assert_eq!(cursor.read_line(), Some(&b""[..]));
        assert_eq!(cursor.read_line(), Some(&b"tail"[..]));
        assert_eq!(cursor.read_line(), None);
    }
}
