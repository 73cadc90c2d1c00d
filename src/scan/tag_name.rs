//! `start_tag_name` / `end_tag_name` (`spec.md` §4.7).

use crate::lexer::Lexer;
use crate::state::ScannerState;
use crate::symbol::Symbol;
use crate::tag::{self, TagVariant};

/// Reads a tag name and decides whether to push a frame and which
/// `*_START_TAG_NAME` symbol to report.
///
/// Returns `false` (reject) if the name is empty — `spec.md` §4.7's "if
/// empty → reject".
pub fn start_tag_name(state: &mut ScannerState, lexer: &mut impl Lexer) -> bool {
    let foreign = state.in_foreign_content();
    let name = super::scan_tag_name(lexer, !foreign);
    if name.is_empty() {
        return false;
    }
    lexer.mark_end();

    if foreign {
        state.push(TagVariant::Custom(tag::CustomName::new(&name)));
        lexer.set_result_symbol(Symbol::ForeignStartTagName);
        return true;
    }

    let variant = tag::classify(&name, false);
    if tag::is_void(&variant) {
        lexer.set_result_symbol(Symbol::VoidStartTagName);
        return true;
    }

    let symbol = match variant {
        TagVariant::Script => Symbol::ScriptStartTagName,
        TagVariant::Style => Symbol::StyleStartTagName,
        TagVariant::Title => Symbol::TitleStartTagName,
        TagVariant::Textarea => Symbol::TextareaStartTagName,
        TagVariant::Plaintext => Symbol::PlaintextStartTagName,
        TagVariant::Svg | TagVariant::Math => Symbol::ForeignStartTagName,
        _ => Symbol::HtmlStartTagName,
    };
    state.push(variant);
    lexer.set_result_symbol(symbol);
    true
}

/// Reads a tag name and closes the matching frame, per `spec.md` §4.7.
///
/// Never rejects: an end tag matching nothing on the stack is a first-class
/// `ERRONEOUS_END_TAG_NAME` outcome, not a failure (`spec.md` §7).
pub fn end_tag_name(state: &mut ScannerState, lexer: &mut impl Lexer) -> bool {
    let foreign = state.in_foreign_content();
    let name = super::scan_tag_name(lexer, !foreign);
    lexer.mark_end();

    let target = if foreign {
        tag::classify(&name, true)
    } else {
        tag::classify(&name, false)
    };

    if state.top() == Some(&target) {
        state.pop();
        lexer.set_result_symbol(Symbol::EndTagName);
        return true;
    }

    match state.rposition_eq(&target) {
        // Found deeper than the top: report it but leave the stack intact
        // for the sibling branch that still expects it (spec.md §4.7, §9
        // Open Question 2).
        Some(_) => lexer.set_result_symbol(Symbol::EndTagName),
        None => lexer.set_result_symbol(Symbol::ErroneousEndTagName),
    }
    true
}
