//! The five C ABI entry points from `spec.md` §6, plus a self-authored
//! `#[repr(C)]` struct mirroring tree-sitter's stable `TSLexer` layout.
//!
//! This crate does not vendor or link against the `tree-sitter` crate
//! (`SPEC_FULL.md` §1 Non-goals: "does not implement or vendor a
//! tree-sitter runtime itself") — `TSLexer` here is redeclared from the
//! public, stable layout documented by `tree_sitter/parser.h`, the same way
//! a hand-written external scanner in C would see it. Everything in this
//! module is `unsafe`; the rest of the crate carries none
//! (`SPEC_FULL.md` §5).

use std::os::raw::{c_char, c_void};

use crate::dispatch::dispatch;
use crate::lexer::Lexer;
use crate::serialize;
use crate::state::ScannerState;
use crate::symbol::{Symbol, ValidSymbols, SYMBOL_COUNT};

/// The buffer size tree-sitter's runtime allocates for
/// `serialize`/`deserialize`, per `spec.md` §4.3's "the host imposes a
/// fixed cap, typically ≈ 1 KiB".
pub const TREE_SITTER_SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// Mirrors `tree_sitter/parser.h`'s `TSLexer`. Field order and function
/// pointer signatures must match the real header exactly for this to be
/// ABI-compatible with a host linking against it.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*mut TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*mut TSLexer) -> bool,
    /// `void (*log)(TSLexer *, const char *, ...)` in the real header.
    /// Variadic function pointers have no stable Rust representation; this
    /// crate never calls it, so it is kept as an untyped pointer purely to
    /// preserve struct layout.
    pub log: *const c_void,
}

/// Adapts a raw `*mut TSLexer` to this crate's [`Lexer`] trait.
struct RawLexer {
    ptr: *mut TSLexer,
}

impl Lexer for RawLexer {
    fn lookahead(&self) -> char {
        let code = unsafe { (*self.ptr).lookahead };
        char::from_u32(code as u32).unwrap_or('\u{FFFD}')
    }

    fn advance(&mut self) {
        unsafe {
            let advance_fn = (*self.ptr).advance;
            advance_fn(self.ptr, false);
        }
    }

    fn skip(&mut self) {
        unsafe {
            let advance_fn = (*self.ptr).advance;
            advance_fn(self.ptr, true);
        }
    }

    fn mark_end(&mut self) {
        unsafe {
            let mark_end_fn = (*self.ptr).mark_end;
            mark_end_fn(self.ptr);
        }
    }

    fn eof(&self) -> bool {
        unsafe {
            let eof_fn = (*self.ptr).eof;
            eof_fn(self.ptr)
        }
    }

    fn set_result_symbol(&mut self, symbol: Symbol) {
        unsafe {
            (*self.ptr).result_symbol = symbol.index() as u16;
        }
    }
}

/// `create()` (`spec.md` §6): an opaque handle with empty stack and empty
/// verbatim suffix.
///
/// # Safety
/// The returned pointer must later be passed to exactly one call of
/// [`scanner_destroy`] and to no other function after that.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_htmldjango_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(ScannerState::new())) as *mut c_void
}

/// `destroy(handle)` (`spec.md` §6): releases all memory.
///
/// # Safety
/// `payload` must be a pointer previously returned by
/// [`tree_sitter_htmldjango_external_scanner_create`], not yet destroyed.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_htmldjango_external_scanner_destroy(payload: *mut c_void) {
    drop(Box::from_raw(payload as *mut ScannerState));
}

/// `scan(handle, lexer, valid_symbols[]) -> bool` (`spec.md` §6).
///
/// # Safety
/// `payload` must be live (as above); `lexer` must point at a valid
/// `TSLexer` for the duration of the call; `valid_symbols` must point at an
/// array of at least [`SYMBOL_COUNT`] `bool`s.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_htmldjango_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let state = &mut *(payload as *mut ScannerState);
    let flags = std::slice::from_raw_parts(valid_symbols, SYMBOL_COUNT);
    let mut raw_lexer = RawLexer { ptr: lexer };
    dispatch(state, &mut raw_lexer, ValidSymbols::new(flags))
}

/// `serialize(handle, buffer[]) -> length` (`spec.md` §6).
///
/// # Safety
/// `payload` must be live; `buffer` must point at at least
/// [`TREE_SITTER_SERIALIZATION_BUFFER_SIZE`] writable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_htmldjango_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> u32 {
    let state = &*(payload as *const ScannerState);
    let buf =
        std::slice::from_raw_parts_mut(buffer as *mut u8, TREE_SITTER_SERIALIZATION_BUFFER_SIZE);
    serialize::serialize(state, buf) as u32
}

/// `deserialize(handle, buffer, length)` (`spec.md` §6). Accepts `length`
/// `0` (empty state).
///
/// # Safety
/// `payload` must be live; `buffer` must point at at least `length`
/// readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_htmldjango_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: u32,
) {
    let state = &mut *(payload as *mut ScannerState);
    let buf = std::slice::from_raw_parts(buffer as *const u8, length as usize);
    *state = serialize::deserialize(buf, length as usize);
}
