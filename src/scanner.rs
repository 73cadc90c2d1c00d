//! The safe, non-FFI `Scanner` wrapper (`SPEC_FULL.md` §6.1): combines
//! [`ScannerState`] with [`crate::dispatch::dispatch`] behind a
//! `Result`-shaped API for the CLI and this crate's own test suite. The
//! boolean accept/reject contract in `spec.md` §4/§7 remains the scanner's
//! real control-flow semantics; this wrapper only adds diagnostic detail on
//! top of it (`SPEC_FULL.md` §6.1, §7).

use crate::dispatch::dispatch;
use crate::error::ScanError;
use crate::lexer::ByteLexer;
use crate::serialize::{self, required_len};
use crate::state::{ScannerState, VERBATIM_SUFFIX_CAP};
use crate::symbol::{Symbol, ValidSymbols};

/// A single emitted token: its symbol and its byte range in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub symbol: Symbol,
    pub start: usize,
    pub end: usize,
}

/// Checks a candidate verbatim suffix against the constraints
/// `scan::django::verbatim_start` enforces (`spec.md` §4.11), ahead of
/// actually scanning — useful for a caller that wants a specific error
/// message rather than a bare reject.
pub fn validate_verbatim_suffix(suffix: &[u8]) -> Result<(), ScanError> {
    if suffix.contains(&b'\n') {
        return Err(ScanError::VerbatimSuffixContainsNewline);
    }
    if suffix.len() > VERBATIM_SUFFIX_CAP {
        return Err(ScanError::VerbatimSuffixTooLong { len: suffix.len() });
    }
    Ok(())
}

/// Owns one [`ScannerState`] and drives it over a [`ByteLexer`], matching
/// the one-state-per-parse lifecycle from `spec.md` §5.
#[derive(Default)]
pub struct Scanner {
    state: ScannerState,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// Advances `lexer` and emits at most one token (`spec.md` §6's `scan`
    /// entry point, minus the C ABI). `None` is a plain reject — not an
    /// error — matching `spec.md` §7's "reject" kind.
    pub fn scan(&mut self, lexer: &mut ByteLexer<'_>, valid: ValidSymbols<'_>) -> Option<Token> {
        let start = lexer.position();
        lexer.clear_result_symbol();
        let accepted = dispatch(&mut self.state, lexer, valid);
        let token = if accepted {
            lexer.result_symbol().map(|symbol| Token {
                symbol,
                start,
                end: lexer.token_end(),
            })
        } else {
            None
        };
        lexer.reset_to_mark();
        token
    }

    /// Writes the current state into `buffer`, returning
    /// [`ScanError::SerializationBufferExceeded`] if `buffer` was too small
    /// to hold every tag (`spec.md` §4.3's state-truncation error kind,
    /// `spec.md` §7b).
    pub fn serialize(&self, buffer: &mut [u8]) -> Result<usize, ScanError> {
        let logical_len = required_len(&self.state);
        let written_len = serialize::serialize(&self.state, buffer);
        if written_len < logical_len {
            Err(ScanError::SerializationBufferExceeded {
                logical_len,
                written_len,
            })
        } else {
            Ok(written_len)
        }
    }

    /// Replaces the current state by reading `buffer`. Rejects outright
    /// (rather than silently clamping, as the bare `ffi`/free-function API
    /// does) when `length` claims more bytes than `buffer` actually holds —
    /// a caller using this safe wrapper has made a programming error, not
    /// hit a host-imposed cap.
    pub fn deserialize(&mut self, buffer: &[u8], length: usize) -> Result<(), ScanError> {
        if length > buffer.len() {
            return Err(ScanError::TruncatedDeserializationBuffer {
                expected_at_least: length,
                got: buffer.len(),
            });
        }
        self.state = serialize::deserialize(buffer, length);
        Ok(())
    }
}
