//! Standalone debug CLI, grounded on the teacher's `TagProcessor` smoke-test
//! loop: drives [`Scanner`] over a file (or stdin) one token at a time and
//! prints `SYMBOL_NAME@start..end "text"` per line.
//!
//! There is no real tree-sitter grammar behind this binary, so it cannot
//! know exactly which symbols the grammar would offer at a given position.
//! It instead tracks just enough of its own state — the symbol the previous
//! token reported — to offer a reasonable next set: raw/RCDATA/plaintext
//! text right after the matching start tag, `VERBATIM_BLOCK_CONTENT` right
//! after `VERBATIM_START`, and the ordinary tag/comment/implicit-close set
//! otherwise. This is an approximation for manual exploration, not a
//! substitute for the real grammar's LR state machine.

use std::io::Read;

use htmldjango_scanner::lexer::{ByteLexer, Lexer};
use htmldjango_scanner::scanner::Scanner;
use htmldjango_scanner::symbol::{flags_for, Symbol, ValidSymbols};

fn read_input(path: Option<String>) -> std::io::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Which symbols to offer for the *next* `scan` call, given the symbol the
/// previous one reported (`None` at the very start of input).
fn next_valid_symbols(previous: Option<Symbol>) -> Vec<bool> {
    let offered: Vec<Symbol> = match previous {
        Some(Symbol::ScriptStartTagName) | Some(Symbol::StyleStartTagName) => {
            vec![Symbol::RawText, Symbol::EndTagName]
        }
        Some(Symbol::TitleStartTagName) | Some(Symbol::TextareaStartTagName) => {
            vec![Symbol::RcdataText, Symbol::EndTagName]
        }
        Some(Symbol::PlaintextStartTagName) => vec![Symbol::PlaintextText],
        #[cfg(feature = "django")]
        Some(Symbol::VerbatimStart) => vec![Symbol::VerbatimBlockContent],
        _ => {
            let mut offered = vec![
                Symbol::HtmlStartTagName,
                Symbol::VoidStartTagName,
                Symbol::ForeignStartTagName,
                Symbol::ScriptStartTagName,
                Symbol::StyleStartTagName,
                Symbol::TitleStartTagName,
                Symbol::TextareaStartTagName,
                Symbol::PlaintextStartTagName,
                Symbol::EndTagName,
                Symbol::ErroneousEndTagName,
                Symbol::SelfClosingTagDelimiter,
                Symbol::ImplicitEndTag,
                Symbol::Comment,
            ];
            #[cfg(feature = "django")]
            offered.push(Symbol::VerbatimStart);
            offered
        }
    };
    flags_for(&offered)
}

fn main() -> std::io::Result<()> {
    let mut args = pico_args::Arguments::from_env();
    let path: Option<String> = args.opt_value_from_str("--file").unwrap_or(None);
    let source = read_input(path)?;

    let mut scanner = Scanner::new();
    let mut lexer = ByteLexer::new(&source);
    let mut previous = None;

    loop {
        let flags = next_valid_symbols(previous);
        match scanner.scan(&mut lexer, ValidSymbols::new(&flags)) {
            Some(token) => {
                let text = String::from_utf8_lossy(&source[token.start..token.end]);
                println!("{}@{}..{} {:?}", token.symbol.name(), token.start, token.end, text);
                previous = Some(token.symbol);
                if token.start == token.end && lexer.eof() {
                    break;
                }
            }
            None => {
                if lexer.eof() {
                    break;
                }
                // No rule accepted at this position; advance one character so
                // exploration of the rest of the file can continue.
                lexer.advance();
                lexer.mark_end();
                previous = None;
            }
        }
    }

    Ok(())
}
