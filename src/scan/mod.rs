//! Lexical sub-scanners (`spec.md` §4). Each function here consumes
//! characters from a [`Lexer`], emits at most one token, and may mutate the
//! [`ScannerState`] it is given.

pub mod comment;
#[cfg(feature = "django")]
pub mod django;
pub mod implicit_end_tag;
pub mod self_closing;
pub mod tag_name;
pub mod text;

use crate::lexer::Lexer;

/// Reads characters while they satisfy `alnum | '-' | ':'` (`spec.md` §4.2).
///
/// In non-foreign contexts the bytes are ASCII-uppercased as they're read;
/// in foreign contexts case is preserved, since an unrecognized foreign
/// descendant becomes `Custom` with its spelling intact. Returns the
/// accumulated name as owned bytes — tag names are short, so this is a
/// small, bounded allocation, not a hot-path concern.
pub fn scan_tag_name(lexer: &mut impl Lexer, uppercase: bool) -> Vec<u8> {
    let mut name = Vec::new();
    loop {
        let c = lexer.lookahead();
        if c.is_alphanumeric() || c == '-' || c == ':' {
            if uppercase {
                for u in c.to_ascii_uppercase().to_string().bytes() {
                    name.push(u);
                }
            } else {
                let mut buf = [0u8; 4];
                name.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
            lexer.advance();
        } else {
            break;
        }
    }
    name
}
