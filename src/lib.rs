//! External tree-sitter scanner for HTML extended with Django Template
//! Language (DTL) constructs.
//!
//! The crate is split into a pure, host-agnostic core (everything except
//! [`ffi`]) and a thin `unsafe` FFI boundary that adapts that core to
//! tree-sitter's C ABI. [`scanner::Scanner`] plus [`lexer::ByteLexer`] is
//! the core's own entry point, used by the `dump-tokens` binary and by this
//! crate's test suite; [`ffi`] is what a generated `parser.c` actually
//! links against.
//!
//! Module map:
//! - [`tag`] — tag name parsing and the `TagVariant` content-model table.
//! - [`state`] — the scanner's persistent state: the open-tag stack and the
//!   active verbatim suffix.
//! - [`symbol`] — the external token enumeration and the `valid_symbols`
//!   bitset view.
//! - [`lexer`] — the `Lexer` trait and the in-memory `ByteLexer` used
//!   outside of FFI.
//! - [`scan`] — the sub-scanners, one module per family (tag names,
//!   implicit closing, raw/RCDATA/plaintext text, comments, self-closing
//!   delimiters, and the Django-specific constructs).
//! - [`dispatch`] — the priority-ordered rule table that picks a
//!   sub-scanner.
//! - [`serialize`] — the bounded-buffer state (de)serialization format.
//! - [`error`] — the diagnostic error type for the safe wrapper.
//! - [`scanner`] — the safe, non-FFI `Scanner` wrapper.
//! - [`ffi`] — the C ABI entry points tree-sitter calls directly.

pub mod builtin_tags;
pub mod dispatch;
pub mod error;
pub mod ffi;
pub mod lexer;
pub mod scan;
pub mod scanner;
pub mod serialize;
pub mod state;
pub mod symbol;
pub mod tag;

pub use error::ScanError;
pub use scanner::{Scanner, Token};
pub use symbol::{Symbol, ValidSymbols, SYMBOL_COUNT};
