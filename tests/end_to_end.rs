//! End-to-end scenarios from `spec.md` §8, driving [`dispatch`] directly over
//! a [`ByteLexer`].
//!
//! There is no tree-sitter grammar in this crate to hand literal tokens
//! (`<`, `>`, `</`, `{%`, `%}`, plain text runs) to the scanner between
//! external-token calls, so these tests play that role themselves: advancing
//! the lexer past a literal span exactly the way a generated `parser.c`
//! would before calling back into `scan`.

use htmldjango_scanner::dispatch::dispatch;
use htmldjango_scanner::lexer::{ByteLexer, Lexer};
use htmldjango_scanner::state::ScannerState;
use htmldjango_scanner::symbol::{flags_for, Symbol, ValidSymbols};
use htmldjango_scanner::tag::TagVariant;

/// Advances `lx` past `n` bytes of grammar-consumed literal text (tag
/// delimiters, keywords, plain content) with no scanner involvement.
fn consume_literal(lx: &mut ByteLexer, n: usize) {
    for _ in 0..n {
        lx.advance();
    }
    lx.mark_end();
    lx.reset_to_mark();
}

/// One `dispatch` call with exactly `offered` symbols valid, returning
/// `(accepted, symbol, start, end)` and leaving `lx` positioned for the next
/// call exactly as `Scanner::scan` would.
fn step(state: &mut ScannerState, lx: &mut ByteLexer, offered: &[Symbol]) -> (bool, Option<Symbol>, usize, usize) {
    let flags = flags_for(offered);
    lx.clear_result_symbol();
    let start = lx.position();
    let accepted = dispatch(state, lx, ValidSymbols::new(&flags));
    let symbol = lx.result_symbol();
    let end = lx.token_end();
    lx.reset_to_mark();
    (accepted, symbol, start, end)
}

#[test]
fn scenario_1_script_raw_text_then_end_tag() {
    let src = b"<script>x<1;</script>";
    let mut state = ScannerState::new();
    let mut lx = ByteLexer::new(src);

    consume_literal(&mut lx, 1); // '<'
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::ScriptStartTagName]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::ScriptStartTagName));
    assert_eq!(&src[start..end], b"script");
    assert_eq!(state.depth(), 1);

    consume_literal(&mut lx, 1); // '>'
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::RawText]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::RawText));
    assert_eq!(&src[start..end], b"x<1;");

    consume_literal(&mut lx, 2); // '</'
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::EndTagName]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::EndTagName));
    assert_eq!(&src[start..end], b"script");
    assert!(state.is_empty());
}

#[test]
fn scenario_2_p_cannot_contain_p_implicit_close() {
    let src = b"<p>a<p>b";
    let mut state = ScannerState::new();
    let mut lx = ByteLexer::new(src);

    // No open element yet: an implicit-close probe at the first '<' rejects.
    let (ok, ..) = step(&mut state, &mut lx, &[Symbol::ImplicitEndTag]);
    assert!(!ok);

    consume_literal(&mut lx, 1); // '<'
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::HtmlStartTagName]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::HtmlStartTagName));
    assert_eq!(&src[start..end], b"p");
    assert_eq!(state.depth(), 1);

    consume_literal(&mut lx, 1); // '>'
    consume_literal(&mut lx, 1); // 'a' (ordinary text, not scanner-owned)

    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::ImplicitEndTag]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::ImplicitEndTag));
    assert_eq!(start, end, "implicit end tag is zero-width");
    assert!(state.is_empty());

    consume_literal(&mut lx, 1); // '<'
    let (ok, sym, ..) = step(&mut state, &mut lx, &[Symbol::HtmlStartTagName]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::HtmlStartTagName));
    assert_eq!(state.depth(), 1);

    consume_literal(&mut lx, 1); // '>'
    consume_literal(&mut lx, 1); // 'b'
    assert!(lx.eof());
}

#[test]
fn scenario_3_verbatim_block_ignores_mismatched_suffix() {
    let src = b"{% verbatim xx %}hello {% endverbatim %} world{% endverbatim xx %}";
    let mut state = ScannerState::new();
    let mut lx = ByteLexer::new(src);

    consume_literal(&mut lx, "{% verbatim ".len());
    let (ok, sym, ..) = step(&mut state, &mut lx, &[Symbol::VerbatimStart]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::VerbatimStart));
    assert_eq!(state.verbatim_suffix().unwrap().as_bytes(), b"xx");

    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::VerbatimBlockContent]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::VerbatimBlockContent));
    assert_eq!(
        &src[start..end],
        b"hello {% endverbatim %} world{% endverbatim xx %}".as_slice(),
        "an endverbatim with the wrong suffix does not close the block"
    );
    assert!(state.verbatim_suffix().is_none());
    assert!(lx.eof());
}

#[test]
fn scenario_4_comment_content_stops_before_endcomment() {
    let src = b"{% comment %}drop {{ x }} this{% endcomment %}";
    let mut state = ScannerState::new();
    let mut lx = ByteLexer::new(src);

    consume_literal(&mut lx, "{% comment %}".len());
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::DjangoCommentContent]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::DjangoCommentContent));
    assert_eq!(&src[start..end], b"drop {{ x }} this");
}

#[test]
fn scenario_5_svg_self_closing_child_pops_and_end_tag_closes_root() {
    let src = b"<svg><g/></svg>";
    let mut state = ScannerState::new();
    let mut lx = ByteLexer::new(src);

    consume_literal(&mut lx, 1); // '<'
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::ForeignStartTagName]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::ForeignStartTagName));
    assert_eq!(&src[start..end], b"svg");
    assert_eq!(state.top(), Some(&TagVariant::Svg));

    // g can be added under svg without an implicit close.
    let (ok, ..) = step(&mut state, &mut lx, &[Symbol::ImplicitEndTag]);
    assert!(!ok);

    consume_literal(&mut lx, 1); // '<'
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::ForeignStartTagName]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::ForeignStartTagName));
    assert_eq!(&src[start..end], b"g");
    assert_eq!(state.depth(), 2);

    let (ok, sym, ..) = step(&mut state, &mut lx, &[Symbol::SelfClosingTagDelimiter]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::SelfClosingTagDelimiter));
    assert_eq!(state.depth(), 1, "self-closing in foreign content pops g");

    consume_literal(&mut lx, 2); // '</'
    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::EndTagName]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::EndTagName));
    assert_eq!(&src[start..end], b"svg");
    assert!(state.is_empty());
}

#[cfg(feature = "django")]
#[test]
fn scenario_6_generic_tag_validated_as_block() {
    let src = b"mytag a=1 %}body{% endmytag %}";
    let mut state = ScannerState::new();
    let mut lx = ByteLexer::new(src);

    let (ok, sym, start, end) = step(
        &mut state,
        &mut lx,
        &[Symbol::ValidateGenericBlock, Symbol::ValidateGenericSimple],
    );
    assert!(ok);
    assert_eq!(sym, Some(Symbol::ValidateGenericBlock));
    assert_eq!(start, end, "validate_generic_tag is zero-width");
}

#[test]
fn scenario_7_erroneous_end_tag_then_implicit_close_at_eof() {
    let src = b"<p>lone</div>";
    let mut state = ScannerState::new();
    let mut lx = ByteLexer::new(src);

    consume_literal(&mut lx, 1); // '<'
    step(&mut state, &mut lx, &[Symbol::HtmlStartTagName]);
    consume_literal(&mut lx, 1); // '>'
    consume_literal(&mut lx, "lone".len());

    consume_literal(&mut lx, 2); // '</'
    let (ok, sym, start, end) = step(
        &mut state,
        &mut lx,
        &[Symbol::EndTagName, Symbol::ErroneousEndTagName],
    );
    assert!(ok);
    assert_eq!(sym, Some(Symbol::ErroneousEndTagName));
    assert_eq!(&src[start..end], b"div");
    assert_eq!(state.depth(), 1, "unmatched end tag does not touch the stack");

    consume_literal(&mut lx, 1); // '>'
    assert!(lx.eof());

    let (ok, sym, start, end) = step(&mut state, &mut lx, &[Symbol::ImplicitEndTag]);
    assert!(ok);
    assert_eq!(sym, Some(Symbol::ImplicitEndTag));
    assert_eq!(start, end);
    assert!(state.is_empty());
}
