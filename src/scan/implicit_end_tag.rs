//! `implicit_end_tag` (`spec.md` §4.8): a zero-width token that tells the
//! grammar to close the current element without a literal `</tag>`.
//!
//! Grounded directly on `scan_implicit_end_tag` in the upstream C scanner:
//! the dispatcher has already called `mark_end` and consumed the `<`
//! before reaching here, so every `advance` below is pure lookahead — the
//! driving loop rewinds to the marked end (`Lexer::reset_to_mark`) once this
//! returns, regardless of how far it peeked.

use crate::lexer::Lexer;
use crate::state::ScannerState;
use crate::symbol::Symbol;
use crate::tag::{self, TagVariant};

pub fn implicit_end_tag(state: &mut ScannerState, lexer: &mut impl Lexer) -> bool {
    let foreign = state.in_foreign_content();
    let has_parent = !state.is_empty();

    if !foreign && has_parent && lexer.eof() {
        state.pop();
        lexer.set_result_symbol(Symbol::ImplicitEndTag);
        return true;
    }

    let mut is_closing_tag = false;
    if lexer.lookahead() == '/' {
        is_closing_tag = true;
        lexer.advance();
    } else if let Some(parent) = state.top() {
        if tag::is_void(parent) {
            state.pop();
            lexer.set_result_symbol(Symbol::ImplicitEndTag);
            return true;
        }
    }

    let uppercase = !foreign || !matches!(state.top(), Some(TagVariant::Custom(_)));
    let name = super::scan_tag_name(lexer, uppercase);
    if name.is_empty() && !lexer.eof() {
        return false;
    }

    let next_tag = tag::classify(&name, foreign);

    if is_closing_tag {
        if state.top() == Some(&next_tag) {
            return false;
        }
        if state.rposition_eq(&next_tag).is_some() {
            state.pop();
            lexer.set_result_symbol(Symbol::ImplicitEndTag);
            return true;
        }
        return false;
    }

    if let Some(parent) = state.top() {
        let parent_is_root = matches!(parent, TagVariant::Html | TagVariant::Head | TagVariant::Body);
        if !foreign && (!tag::can_contain(parent, &next_tag) || (parent_is_root && lexer.eof())) {
            state.pop();
            lexer.set_result_symbol(Symbol::ImplicitEndTag);
            return true;
        }
    }

    false
}
