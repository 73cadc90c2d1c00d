//! The top-level dispatcher (`spec.md` §4.15): evaluated as a priority list,
//! the first rule whose guard holds selects a sub-scanner.
//!
//! Grounded on the upstream `scan` function in `original_source/src/scanner.c`
//! for rules 6–9; rules 1–5 (Django) have no upstream counterpart and are
//! ported straight from `spec.md`'s prose.

use crate::lexer::Lexer;
use crate::scan;
use crate::state::ScannerState;
use crate::symbol::{Symbol, ValidSymbols};

#[cfg(feature = "logging")]
macro_rules! trace_dispatch {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "logging"))]
macro_rules! trace_dispatch {
    ($($arg:tt)*) => {};
}

/// Advances `state`/`lexer` and emits at most one token, choosing a
/// sub-scanner according to `valid`'s offered symbols and the current
/// lookahead. Returns `false` if no rule's guard holds or the chosen
/// sub-scanner itself rejects.
pub fn dispatch(state: &mut ScannerState, lexer: &mut impl Lexer, valid: ValidSymbols) -> bool {
    #[cfg(feature = "django")]
    {
        if valid.is_valid(Symbol::DjangoCommentContent) {
            trace_dispatch!("dispatch: django_comment_content");
            return scan::django::django_comment_content(lexer);
        }
        if valid.is_valid(Symbol::VerbatimStart) {
            trace_dispatch!("dispatch: verbatim_start");
            return scan::django::verbatim_start(state, lexer);
        }
        if valid.is_valid(Symbol::VerbatimBlockContent) {
            trace_dispatch!("dispatch: verbatim_content");
            return scan::django::verbatim_content(state, lexer);
        }
        if valid.is_valid(Symbol::ValidateGenericBlock) || valid.is_valid(Symbol::ValidateGenericSimple) {
            trace_dispatch!("dispatch: validate_generic_tag");
            return scan::django::validate_generic_tag(lexer, &valid);
        }
        if valid.is_valid(Symbol::FilterColon) && lexer.lookahead() == ':' {
            trace_dispatch!("dispatch: filter_colon");
            return scan::django::filter_colon(lexer);
        }
    }

    let valid_start_tag = valid.is_valid(Symbol::HtmlStartTagName)
        || valid.is_valid(Symbol::VoidStartTagName)
        || valid.is_valid(Symbol::ForeignStartTagName)
        || valid.is_valid(Symbol::ScriptStartTagName)
        || valid.is_valid(Symbol::StyleStartTagName)
        || valid.is_valid(Symbol::TitleStartTagName)
        || valid.is_valid(Symbol::TextareaStartTagName)
        || valid.is_valid(Symbol::PlaintextStartTagName);
    let valid_end_tag = valid.is_valid(Symbol::EndTagName) || valid.is_valid(Symbol::ErroneousEndTagName);

    if valid.is_valid(Symbol::RawText) && !valid_end_tag && !valid_start_tag {
        trace_dispatch!("dispatch: raw_text");
        return scan::text::raw_text(state, lexer);
    }
    if valid.is_valid(Symbol::RcdataText) && !valid_end_tag && !valid_start_tag {
        trace_dispatch!("dispatch: rcdata_text");
        return scan::text::rcdata_text(state, lexer);
    }
    if valid.is_valid(Symbol::PlaintextText) {
        trace_dispatch!("dispatch: plaintext_text");
        return scan::text::plaintext_text(state, lexer);
    }

    while lexer.lookahead().is_whitespace() {
        lexer.skip();
    }

    match lexer.lookahead() {
        '<' => {
            lexer.mark_end();
            lexer.advance();
            if lexer.lookahead() == '!' {
                lexer.advance();
                trace_dispatch!("dispatch: html_comment");
                return scan::comment::html_comment(lexer);
            }
            if valid.is_valid(Symbol::ImplicitEndTag) {
                trace_dispatch!("dispatch: implicit_end_tag (after '<')");
                return scan::implicit_end_tag::implicit_end_tag(state, lexer);
            }
        }
        '\0' => {
            if valid.is_valid(Symbol::ImplicitEndTag) {
                trace_dispatch!("dispatch: implicit_end_tag (eof)");
                return scan::implicit_end_tag::implicit_end_tag(state, lexer);
            }
        }
        '/' => {
            if valid.is_valid(Symbol::SelfClosingTagDelimiter) {
                trace_dispatch!("dispatch: self_closing_delimiter");
                return scan::self_closing::self_closing_delimiter(state, lexer);
            }
        }
        _ => {
            if (valid_start_tag || valid_end_tag) && !valid.is_valid(Symbol::RawText) {
                trace_dispatch!("dispatch: {}", if valid_end_tag { "end_tag_name" } else { "start_tag_name" });
                return if valid_end_tag {
                    scan::tag_name::end_tag_name(state, lexer)
                } else {
                    scan::tag_name::start_tag_name(state, lexer)
                };
            }
        }
    }

    false
}
