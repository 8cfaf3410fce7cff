//! Immutable cursor over source text.
//!
//! A [`Cursor`] is a source slice plus a byte offset. It is [`Copy`], so a
//! parser that wants to backtrack simply keeps the cursor it started from;
//! nothing needs restoring after a failed alternative.
//!
//! # Invariant
//!
//! `pos` always lies on a `char` boundary of `source`. Every method that moves
//! the cursor advances by the UTF-8 length of characters it has inspected.

/// Cursor over a source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Byte offset from the start of the source.
    #[inline]
    pub fn pos(self) -> usize {
        self.pos
    }

    /// Unconsumed input.
    #[inline]
    pub fn rest(self) -> &'src str {
        &self.source[self.pos..]
    }

    /// `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(self) -> bool {
        self.pos >= self.source.len()
    }

    /// Character at the cursor, `None` at end of input.
    #[inline]
    pub fn current(self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Whether the unconsumed input begins with `text`.
    #[inline]
    pub fn starts_with(self, text: &str) -> bool {
        self.rest().starts_with(text)
    }

    /// Advance past `text`, which must be a prefix of the remaining input.
    #[must_use]
    pub fn advance_str(self, text: &str) -> Self {
        debug_assert!(self.starts_with(text), "advance_str past non-matching text");
        Cursor {
            source: self.source,
            pos: self.pos + text.len(),
        }
    }

    /// Advance past the current character (no-op at end of input).
    #[must_use]
    pub fn advance(self) -> Self {
        match self.current() {
            Some(c) => Cursor {
                source: self.source,
                pos: self.pos + c.len_utf8(),
            },
            None => self,
        }
    }

    /// Advance while `pred` holds for the current character.
    #[must_use]
    pub fn advance_while(self, pred: impl Fn(char) -> bool) -> Self {
        let len: usize = self
            .rest()
            .chars()
            .take_while(|&c| pred(c))
            .map(char::len_utf8)
            .sum();
        Cursor {
            source: self.source,
            pos: self.pos + len,
        }
    }

    /// Text between this cursor and a later cursor over the same source.
    pub fn slice_to(self, end: Cursor<'src>) -> &'src str {
        debug_assert!(end.pos >= self.pos, "slice_to with an earlier cursor");
        &self.source[self.pos..end.pos]
    }

    /// 1-based line and column of the cursor.
    ///
    /// Columns count characters, not bytes.
    pub fn line_col(self) -> (u32, u32) {
        line_col(self.source, self.pos)
    }
}

/// 1-based line and column of byte `offset` in `source`.
pub fn line_col(source: &str, offset: usize) -> (u32, u32) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(column).unwrap_or(u32::MAX),
    )
}
