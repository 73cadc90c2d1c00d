//! `self_closing_delimiter` (`spec.md` §4.9). Called with lookahead `/`.

use crate::lexer::Lexer;
use crate::state::ScannerState;
use crate::symbol::Symbol;

pub fn self_closing_delimiter(state: &mut ScannerState, lexer: &mut impl Lexer) -> bool {
    lexer.advance();
    if lexer.lookahead() != '>' {
        return false;
    }
    lexer.advance();

    if state.in_foreign_content() && !state.is_empty() {
        state.pop();
    }

    lexer.mark_end();
    lexer.set_result_symbol(Symbol::SelfClosingTagDelimiter);
    true
}
