//! Diagnostic error type for the safe [`crate::scanner::Scanner`] wrapper
//! and the `dump-tokens` CLI (`SPEC_FULL.md` §6.1).
//!
//! This is additive: the FFI boundary (`crate::ffi`) follows `spec.md` §7's
//! boolean accept/reject contract exactly and never constructs or returns
//! one of these.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("verbatim suffix is {len} bytes, exceeding the 255-byte cap")]
    VerbatimSuffixTooLong { len: usize },

    #[error("verbatim suffix contains a newline, which is rejected")]
    VerbatimSuffixContainsNewline,

    #[error(
        "serialization buffer exceeded: logical state needed {logical_len} bytes, only {written_len} were written"
    )]
    SerializationBufferExceeded { logical_len: usize, written_len: usize },

    #[error("deserialization buffer truncated: expected at least {expected_at_least} bytes, got {got}")]
    TruncatedDeserializationBuffer { expected_at_least: usize, got: usize },
}
