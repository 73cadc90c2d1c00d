//! The [`Lexer`] capability the sub-scanners and dispatcher are generic
//! over, standing in for the host's `TSLexer` (`spec.md` §6): `lookahead`,
//! `advance`, `skip`, `mark_end`, `eof`, and reporting the emitted symbol.
//!
//! This crate's own tests and the `dump-tokens` CLI drive the scanner
//! through [`ByteLexer`], a plain in-memory implementation over a byte
//! slice. A host embedding tree-sitter's C lexer implements the same trait
//! at the FFI boundary (`src/ffi.rs`) instead.

use crate::symbol::Symbol;

/// Host-provided character stream and token-boundary cursor.
///
/// `lookahead` returns Unicode scalar values, matching the upstream C
/// scanner's `int32_t` codepoint lookahead (`wctype.h`'s `iswalnum`,
/// `iswspace`) — not just ASCII — with `'\0'` signaling EOF exactly as the
/// host's `TSLexer` does.
pub trait Lexer {
    /// Current lookahead character, or `'\0'` at EOF.
    fn lookahead(&self) -> char;

    /// Consumes the lookahead character, extending the token currently
    /// being built to include it (once `mark_end` is called).
    fn advance(&mut self);

    /// Consumes the lookahead character without extending any token; used
    /// to skip whitespace ahead of a token's start (`spec.md` §4.15 rule 9).
    fn skip(&mut self);

    /// Marks the current cursor position as the end of the token being
    /// built. Sub-scanners that want a zero-width token call this before
    /// advancing at all.
    fn mark_end(&mut self);

    /// Whether the lookahead position is the end of input.
    fn eof(&self) -> bool;

    /// Records which external symbol the in-flight token should be reported
    /// as, once the sub-scanner returns `true`.
    fn set_result_symbol(&mut self, symbol: Symbol);
}

/// A plain in-memory [`Lexer`] over a byte slice, decoding UTF-8 lazily.
///
/// Invalid UTF-8 is treated one byte at a time as `U+FFFD`, so the scanner
/// never panics on malformed input — it just won't usefully classify
/// non-UTF-8 tag names, which is outside `spec.md`'s ASCII-only Non-goals
/// anyway.
pub struct ByteLexer<'a> {
    bytes: &'a [u8],
    /// Byte offset of the current lookahead character.
    pos: usize,
    /// Byte offset marked as the end of the in-flight token.
    end: usize,
    result_symbol: Option<Symbol>,
}

impl<'a> ByteLexer<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            end: 0,
            result_symbol: None,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn token_end(&self) -> usize {
        self.end
    }

    pub fn result_symbol(&self) -> Option<Symbol> {
        self.result_symbol
    }

    /// Rewinds the read cursor back to the last [`Lexer::mark_end`] position.
    ///
    /// Tree-sitter's real `TSLexer` does this implicitly between `scan()`
    /// invocations: a sub-scanner may `advance` past the marked end purely
    /// to decide whether to accept a zero-width token (`implicit_end_tag`,
    /// `validate_generic_tag`) without those peeked bytes being consumed
    /// from the stream. The driving loop (`Scanner::scan`, `dump-tokens`,
    /// and this crate's own tests) calls this after every accepted token.
    pub fn reset_to_mark(&mut self) {
        self.pos = self.end;
    }

    /// Clears the previous token's reported symbol ahead of the next
    /// `dispatch` call.
    pub fn clear_result_symbol(&mut self) {
        self.result_symbol = None;
    }

    fn decode_at(&self, at: usize) -> (char, usize) {
        if at >= self.bytes.len() {
            return ('\0', 0);
        }
        let rest = &self.bytes[at..];
        match std::str::from_utf8(rest) {
            Ok(s) => {
                let ch = s.chars().next().unwrap();
                (ch, ch.len_utf8())
            }
            Err(e) if e.valid_up_to() > 0 => {
                let s = std::str::from_utf8(&rest[..e.valid_up_to()]).unwrap();
                let ch = s.chars().next().unwrap();
                (ch, ch.len_utf8())
            }
            Err(_) => ('\u{FFFD}', 1),
        }
    }
}

impl<'a> Lexer for ByteLexer<'a> {
    fn lookahead(&self) -> char {
        self.decode_at(self.pos).0
    }

    fn advance(&mut self) {
        let (_, width) = self.decode_at(self.pos);
        self.pos += width.max(1).min(self.bytes.len().saturating_sub(self.pos));
        if self.pos > self.bytes.len() {
            self.pos = self.bytes.len();
        }
    }

    fn skip(&mut self) {
        self.advance();
    }

    fn mark_end(&mut self) {
        self.end = self.pos;
    }

    fn eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn set_result_symbol(&mut self, symbol: Symbol) {
        self.result_symbol = Some(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_through_ascii() {
        let mut lx = ByteLexer::new(b"ab");
        assert_eq!(lx.lookahead(), 'a');
        lx.advance();
        assert_eq!(lx.lookahead(), 'b');
        lx.advance();
        assert!(lx.eof());
        assert_eq!(lx.lookahead(), '\0');
    }

    #[test]
    fn mark_end_records_position() {
        let mut lx = ByteLexer::new(b"abc");
        lx.advance();
        lx.mark_end();
        assert_eq!(lx.token_end(), 1);
    }

    #[test]
    fn decodes_multibyte_utf8() {
        let mut lx = ByteLexer::new("é".as_bytes());
        assert_eq!(lx.lookahead(), 'é');
        lx.advance();
        assert!(lx.eof());
    }
}
