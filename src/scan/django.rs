//! The Django Template Language sub-scanners (`spec.md` §4.10–§4.14): not
//! present in the upstream pure-HTML scanner, grounded instead on the
//! delimiter-matching idiom `scan_raw_text` already establishes (advance
//! speculatively, fall back to counting the bytes as content on mismatch)
//! and on `spec.md`'s own prose for the exact grammar each one matches.

use crate::builtin_tags::BUILTIN_DJANGO_TAGS;
use crate::lexer::Lexer;
use crate::state::{ScannerState, VerbatimSuffix};
use crate::symbol::{Symbol, ValidSymbols};

const MAX_IDENTIFIER_LEN: usize = 255;

fn skip_ws(lexer: &mut impl Lexer) {
    while lexer.lookahead().is_whitespace() {
        lexer.advance();
    }
}

/// Consumes `lexer`'s lookahead one character per call and reports whether
/// it matched every byte of `literal`. Does not rewind on a partial
/// mismatch — callers that need to recover already-consumed bytes as
/// ordinary content handle that themselves (see `django_comment_content`).
fn matches_literal(lexer: &mut impl Lexer, literal: &[u8]) -> bool {
    for &expected in literal {
        if lexer.lookahead() != expected as char {
            return false;
        }
        lexer.advance();
    }
    true
}

/// `spec.md` §4.10: emitted inside `{% comment %} ... {% endcomment %}`.
pub fn django_comment_content(lexer: &mut impl Lexer) -> bool {
    lexer.mark_end();
    loop {
        match lexer.lookahead() {
            '\0' => return false,
            '{' => {
                lexer.advance();
                if lexer.lookahead() != '%' {
                    lexer.mark_end();
                    continue;
                }
                lexer.advance();
                skip_ws(lexer);
                if matches_literal(lexer, b"endcomment") {
                    lexer.set_result_symbol(Symbol::DjangoCommentContent);
                    return true;
                }
                lexer.mark_end();
            }
            _ => {
                lexer.advance();
                lexer.mark_end();
            }
        }
    }
}

/// `spec.md` §4.11: called right after the grammar has consumed the
/// `verbatim` keyword; captures the suffix up to the first `%}`.
pub fn verbatim_start(state: &mut ScannerState, lexer: &mut impl Lexer) -> bool {
    let mut suffix = Vec::new();
    loop {
        match lexer.lookahead() {
            '\0' => return false,
            '\n' => return false,
            '%' => {
                lexer.advance();
                if lexer.lookahead() == '}' {
                    lexer.advance();
                    break;
                }
                suffix.push(b'%');
            }
            c => {
                let mut buf = [0u8; 4];
                suffix.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                lexer.advance();
            }
        }
    }
    lexer.mark_end();

    while matches!(suffix.last(), Some(b' ') | Some(b'\t') | Some(b'\r')) {
        suffix.pop();
    }

    let suffix = match VerbatimSuffix::new(&suffix) {
        Some(s) => s,
        None => return false,
    };
    state.set_verbatim_suffix(suffix);
    lexer.set_result_symbol(Symbol::VerbatimStart);
    true
}

/// `spec.md` §4.12: inside a verbatim block, searching for the matching
/// `{% endverbatim<suffix> %}`.
pub fn verbatim_content(state: &mut ScannerState, lexer: &mut impl Lexer) -> bool {
    let suffix = match state.verbatim_suffix() {
        Some(s) if !s.is_empty() => s.as_bytes().to_vec(),
        Some(_) => Vec::new(),
        None => return false,
    };

    loop {
        match lexer.lookahead() {
            '\0' => return false,
            '{' => {
                lexer.advance();
                if lexer.lookahead() != '%' {
                    continue;
                }
                lexer.advance();
                skip_ws(lexer);
                if !matches_literal(lexer, b"endverbatim") {
                    continue;
                }
                if !matches_literal(lexer, &suffix) {
                    continue;
                }
                skip_ws(lexer);
                if lexer.lookahead() != '%' {
                    continue;
                }
                lexer.advance();
                if lexer.lookahead() != '}' {
                    continue;
                }
                lexer.advance();
                lexer.mark_end();
                state.clear_verbatim_suffix();
                lexer.set_result_symbol(Symbol::VerbatimBlockContent);
                return true;
            }
            _ => lexer.advance(),
        }
    }
}

/// `spec.md` §4.13: zero-width; decides whether an unrecognized tag name
/// should be parsed as a block form or a simple form.
pub fn validate_generic_tag(lexer: &mut impl Lexer, valid: &ValidSymbols) -> bool {
    lexer.mark_end();

    let c = lexer.lookahead();
    if !(c.is_alphabetic() || c == '_') {
        return false;
    }

    let mut name = Vec::new();
    loop {
        let c = lexer.lookahead();
        if (c.is_alphanumeric() || c == '_') && name.len() < MAX_IDENTIFIER_LEN {
            let mut buf = [0u8; 4];
            name.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            lexer.advance();
        } else {
            break;
        }
    }

    if BUILTIN_DJANGO_TAGS.contains(&name.as_slice()) || name.starts_with(b"end") {
        return false;
    }

    if valid.is_valid(Symbol::ValidateGenericBlock) && scan_ahead_for_closer(lexer, &name) {
        lexer.set_result_symbol(Symbol::ValidateGenericBlock);
        return true;
    }

    if valid.is_valid(Symbol::ValidateGenericSimple) {
        lexer.set_result_symbol(Symbol::ValidateGenericSimple);
        return true;
    }

    false
}

/// Scans forward (pure lookahead; the caller's token stays zero-width since
/// `mark_end` was already fixed) for `{%` ws `end<name>` terminated by
/// whitespace or `%`.
fn scan_ahead_for_closer(lexer: &mut impl Lexer, name: &[u8]) -> bool {
    loop {
        match lexer.lookahead() {
            '\0' => return false,
            '{' => {
                lexer.advance();
                if lexer.lookahead() != '%' {
                    continue;
                }
                lexer.advance();
                skip_ws(lexer);
                if !matches_literal(lexer, b"end") {
                    continue;
                }
                if !matches_literal(lexer, name) {
                    continue;
                }
                let terminator = lexer.lookahead();
                if terminator.is_whitespace() || terminator == '%' {
                    return true;
                }
            }
            _ => lexer.advance(),
        }
    }
}

/// `spec.md` §4.14: disambiguates `|default:"x"` filter-argument syntax
/// from other colon uses.
pub fn filter_colon(lexer: &mut impl Lexer) -> bool {
    if lexer.lookahead() != ':' {
        return false;
    }
    lexer.advance();
    lexer.mark_end();

    let next = lexer.lookahead();
    let ok = matches!(next, '"' | '\'' | '+' | '-' | '.')
        || next.is_ascii_digit()
        || next.is_alphabetic()
        || next == '_';
    if !ok {
        return false;
    }

    lexer.set_result_symbol(Symbol::FilterColon);
    true
}
