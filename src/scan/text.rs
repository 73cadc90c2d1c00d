//! `raw_text`, `rcdata_text`, `plaintext_text` (`spec.md` §4.5, §4.6).
//!
//! The end-delimiter matching loop is ported from the upstream
//! `scan_raw_text`/`scan_rcdata_text`: a single-pass state machine that
//! speculatively advances through a candidate `</TAG` delimiter and falls
//! back to treating the bytes as content on mismatch, so no backtracking
//! buffer is needed. This crate additionally breaks out early on a Django
//! delimiter opener (`{{`, `{%`, `{#`) per `spec.md` §4.5, which the
//! upstream pure-HTML scanner does not need to consider.

use crate::lexer::Lexer;
use crate::state::ScannerState;
use crate::symbol::Symbol;
use crate::tag::TagVariant;

fn scan_until_delimiter(lexer: &mut impl Lexer, end_delimiter: &[u8], symbol: Symbol) -> bool {
    let mut delimiter_index = 0usize;
    let mut consumed_any = false;
    lexer.mark_end();

    loop {
        let c = lexer.lookahead();
        if c == '\0' {
            break;
        }

        if cfg!(feature = "django") && delimiter_index == 0 && c == '{' {
            lexer.advance();
            let next = lexer.lookahead();
            if matches!(next, '{' | '%' | '#') {
                break;
            }
            consumed_any = true;
            lexer.mark_end();
            continue;
        }

        let expected = end_delimiter[delimiter_index] as char;
        if c.to_ascii_uppercase() == expected {
            delimiter_index += 1;
            if delimiter_index == end_delimiter.len() {
                break;
            }
            lexer.advance();
        } else {
            delimiter_index = 0;
            consumed_any = true;
            lexer.advance();
            lexer.mark_end();
        }
    }

    if consumed_any {
        lexer.set_result_symbol(symbol);
    }
    consumed_any
}

/// Valid only when the stack top is `SCRIPT`/`STYLE`.
pub fn raw_text(state: &ScannerState, lexer: &mut impl Lexer) -> bool {
    let end_delimiter: &[u8] = match state.top() {
        Some(TagVariant::Script) => b"</SCRIPT",
        Some(TagVariant::Style) => b"</STYLE",
        _ => return false,
    };
    scan_until_delimiter(lexer, end_delimiter, Symbol::RawText)
}

/// Valid only when the stack top is `TITLE`/`TEXTAREA`.
pub fn rcdata_text(state: &ScannerState, lexer: &mut impl Lexer) -> bool {
    let end_delimiter: &[u8] = match state.top() {
        Some(TagVariant::Title) => b"</TITLE",
        Some(TagVariant::Textarea) => b"</TEXTAREA",
        _ => return false,
    };
    scan_until_delimiter(lexer, end_delimiter, Symbol::RcdataText)
}

/// Valid only when the stack top is `PLAINTEXT`. Consumes to EOF
/// unconditionally and pops the frame (`spec.md` §4.6).
pub fn plaintext_text(state: &mut ScannerState, lexer: &mut impl Lexer) -> bool {
    if !matches!(state.top(), Some(TagVariant::Plaintext)) {
        return false;
    }

    lexer.mark_end();
    while !lexer.eof() {
        lexer.advance();
        lexer.mark_end();
    }

    state.pop();
    lexer.set_result_symbol(Symbol::PlaintextText);
    true
}
