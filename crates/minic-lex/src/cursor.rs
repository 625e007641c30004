//! Character cursor for traversing source text.
//!
//! The cursor keeps a byte position into the source and hands out characters
//! one at a time. It does not count lines: the scanner owns the line counter,
//! because not every consumed newline increments it (see the unterminated
//! string rule in [`crate::scanner`]).

/// A cursor for traversing source text character by character.
///
/// # Example
///
/// ```
/// use minic_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x;");
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters past the current one,
    /// or `'\0'` when that position is past the end of the source.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// Advances the cursor to the next character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Returns true if the cursor is past the last character.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }
}
