//! The external symbol enumeration from `spec.md` §6, and the bitset the
//! host parser uses to tell the dispatcher which of them are acceptable at
//! the current grammar position.

/// External tokens the scanner can emit, in the declaration order from
/// `spec.md` §6. The Django-specific tail (`DjangoCommentContent` through
/// `FilterColon`) only exists when the `django` feature is enabled — see
/// `DESIGN.md`'s note on Open Question 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Symbol {
    HtmlStartTagName,
    VoidStartTagName,
    ForeignStartTagName,
    ScriptStartTagName,
    StyleStartTagName,
    TitleStartTagName,
    TextareaStartTagName,
    PlaintextStartTagName,
    EndTagName,
    ErroneousEndTagName,
    SelfClosingTagDelimiter,
    ImplicitEndTag,
    RawText,
    RcdataText,
    PlaintextText,
    Comment,
    #[cfg(feature = "django")]
    DjangoCommentContent,
    #[cfg(feature = "django")]
    VerbatimStart,
    #[cfg(feature = "django")]
    VerbatimBlockContent,
    #[cfg(feature = "django")]
    ValidateGenericBlock,
    #[cfg(feature = "django")]
    ValidateGenericSimple,
    #[cfg(feature = "django")]
    FilterColon,
}

/// Number of distinct [`Symbol`] variants, used to size [`ValidSymbols`]'
/// backing array in the FFI adapter.
#[cfg(feature = "django")]
pub const SYMBOL_COUNT: usize = 22;
#[cfg(not(feature = "django"))]
pub const SYMBOL_COUNT: usize = 16;

impl Symbol {
    /// Upper-snake-case name matching `spec.md` §6's token list, used by the
    /// `dump-tokens` CLI.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::HtmlStartTagName => "HTML_START_TAG_NAME",
            Symbol::VoidStartTagName => "VOID_START_TAG_NAME",
            Symbol::ForeignStartTagName => "FOREIGN_START_TAG_NAME",
            Symbol::ScriptStartTagName => "SCRIPT_START_TAG_NAME",
            Symbol::StyleStartTagName => "STYLE_START_TAG_NAME",
            Symbol::TitleStartTagName => "TITLE_START_TAG_NAME",
            Symbol::TextareaStartTagName => "TEXTAREA_START_TAG_NAME",
            Symbol::PlaintextStartTagName => "PLAINTEXT_START_TAG_NAME",
            Symbol::EndTagName => "END_TAG_NAME",
            Symbol::ErroneousEndTagName => "ERRONEOUS_END_TAG_NAME",
            Symbol::SelfClosingTagDelimiter => "SELF_CLOSING_TAG_DELIMITER",
            Symbol::ImplicitEndTag => "IMPLICIT_END_TAG",
            Symbol::RawText => "RAW_TEXT",
            Symbol::RcdataText => "RCDATA_TEXT",
            Symbol::PlaintextText => "PLAINTEXT_TEXT",
            Symbol::Comment => "COMMENT",
            #[cfg(feature = "django")]
            Symbol::DjangoCommentContent => "DJANGO_COMMENT_CONTENT",
            #[cfg(feature = "django")]
            Symbol::VerbatimStart => "VERBATIM_START",
            #[cfg(feature = "django")]
            Symbol::VerbatimBlockContent => "VERBATIM_BLOCK_CONTENT",
            #[cfg(feature = "django")]
            Symbol::ValidateGenericBlock => "VALIDATE_GENERIC_BLOCK",
            #[cfg(feature = "django")]
            Symbol::ValidateGenericSimple => "VALIDATE_GENERIC_SIMPLE",
            #[cfg(feature = "django")]
            Symbol::FilterColon => "FILTER_COLON",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Symbol::HtmlStartTagName => 0,
            Symbol::VoidStartTagName => 1,
            Symbol::ForeignStartTagName => 2,
            Symbol::ScriptStartTagName => 3,
            Symbol::StyleStartTagName => 4,
            Symbol::TitleStartTagName => 5,
            Symbol::TextareaStartTagName => 6,
            Symbol::PlaintextStartTagName => 7,
            Symbol::EndTagName => 8,
            Symbol::ErroneousEndTagName => 9,
            Symbol::SelfClosingTagDelimiter => 10,
            Symbol::ImplicitEndTag => 11,
            Symbol::RawText => 12,
            Symbol::RcdataText => 13,
            Symbol::PlaintextText => 14,
            Symbol::Comment => 15,
            #[cfg(feature = "django")]
            Symbol::DjangoCommentContent => 16,
            #[cfg(feature = "django")]
            Symbol::VerbatimStart => 17,
            #[cfg(feature = "django")]
            Symbol::VerbatimBlockContent => 18,
            #[cfg(feature = "django")]
            Symbol::ValidateGenericBlock => 19,
            #[cfg(feature = "django")]
            Symbol::ValidateGenericSimple => 20,
            #[cfg(feature = "django")]
            Symbol::FilterColon => 21,
        }
    }
}

/// Builds a [`SYMBOL_COUNT`]-length flags vector with only `offered` symbols
/// set `true`. A convenience for callers outside this crate (the
/// `dump-tokens` CLI, integration tests) that don't have access to the
/// private [`Symbol::index`] mapping `ValidSymbols` is keyed on.
pub fn flags_for(offered: &[Symbol]) -> Vec<bool> {
    let mut flags = vec![false; SYMBOL_COUNT];
    for s in offered {
        flags[s.index()] = true;
    }
    flags
}

/// A borrowed view of the host's `valid_symbols` boolean array
/// (`spec.md` §6), indexed by [`Symbol`] rather than a raw integer.
#[derive(Clone, Copy)]
pub struct ValidSymbols<'a>(&'a [bool]);

impl<'a> ValidSymbols<'a> {
    pub fn new(flags: &'a [bool]) -> Self {
        Self(flags)
    }

    pub fn is_valid(&self, symbol: Symbol) -> bool {
        self.0.get(symbol.index()).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_out_of_range_as_invalid() {
        let flags: [bool; 2] = [true, false];
        let valid = ValidSymbols::new(&flags);
        assert!(valid.is_valid(Symbol::HtmlStartTagName));
        assert!(!valid.is_valid(Symbol::VoidStartTagName));
        assert!(!valid.is_valid(Symbol::Comment));
    }
}
