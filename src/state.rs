//! Scanner State: the persistent datum carried between [`crate::dispatch::dispatch`]
//! calls and round-tripped through [`crate::serialize`] at every parse-tree
//! checkpoint (`spec.md` §3, §5).

use crate::tag::TagVariant;

/// Upper bound on the verbatim suffix, matching its one-byte length prefix
/// in the serialized form (`spec.md` §4.3, §4.11).
pub const VERBATIM_SUFFIX_CAP: usize = 255;

/// The text after the `verbatim` keyword in `{% verbatim<suffix> %}`,
/// captured by [`crate::scan::django::verbatim_start`] and matched again by
/// [`crate::scan::django::verbatim_content`].
///
/// Stored as a fixed inline buffer (`spec.md` §9: "Verbatim suffix as
/// embedded buffer") so capturing one never allocates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerbatimSuffix {
    len: u8,
    bytes: [u8; VERBATIM_SUFFIX_CAP],
}

impl Default for VerbatimSuffix {
    fn default() -> Self {
        Self {
            len: 0,
            bytes: [0u8; VERBATIM_SUFFIX_CAP],
        }
    }
}

impl VerbatimSuffix {
    /// Returns `None` if `suffix` is longer than [`VERBATIM_SUFFIX_CAP`]
    /// bytes; the caller (`verbatim_start`) treats that as a reject rather
    /// than a silent truncation, since a truncated suffix could spuriously
    /// match an unrelated `endverbatim`.
    pub fn new(suffix: &[u8]) -> Option<Self> {
        if suffix.len() > VERBATIM_SUFFIX_CAP {
            return None;
        }
        let mut bytes = [0u8; VERBATIM_SUFFIX_CAP];
        bytes[..suffix.len()].copy_from_slice(suffix);
        Some(Self {
            len: suffix.len() as u8,
            bytes,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The scanner's persistent state: the stack of open element contexts, plus
/// whatever verbatim suffix is currently pending a close.
///
/// Invariants (`spec.md` §3), enforced by construction rather than asserted
/// at runtime:
/// - `SVG`/`MATH` may appear at any depth.
/// - `PLAINTEXT` only ever appears as the top frame, and only briefly: the
///   very next [`crate::scan::text::plaintext_text`] call consumes to EOF and
///   pops it.
/// - `verbatim_suffix` is `Some` strictly between a `VERBATIM_START` emission
///   and its paired `VERBATIM_BLOCK_CONTENT` emission.
#[derive(Clone, Debug, Default)]
pub struct ScannerState {
    stack: Vec<TagVariant>,
    verbatim_suffix: Option<VerbatimSuffix>,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: TagVariant) {
        self.stack.push(tag);
    }

    pub fn pop(&mut self) -> Option<TagVariant> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&TagVariant> {
        self.stack.last()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TagVariant> {
        self.stack.iter()
    }

    /// Index (from the bottom) of the deepest frame equal to `tag`, scanning
    /// from the top down, per `spec.md` §4.7's "scan downward through the
    /// stack" rule. `None` if no frame matches.
    pub fn rposition_eq(&self, tag: &TagVariant) -> Option<usize> {
        self.stack.iter().rposition(|frame| frame == tag)
    }

    pub fn in_foreign_content(&self) -> bool {
        self.iter()
            .any(|tag| matches!(tag, TagVariant::Svg | TagVariant::Math))
    }

    pub fn verbatim_suffix(&self) -> Option<&VerbatimSuffix> {
        self.verbatim_suffix.as_ref()
    }

    pub fn set_verbatim_suffix(&mut self, suffix: VerbatimSuffix) {
        self.verbatim_suffix = Some(suffix);
    }

    pub fn clear_verbatim_suffix(&mut self) {
        self.verbatim_suffix = None;
    }

    pub(crate) fn stack_mut(&mut self) -> &mut Vec<TagVariant> {
        &mut self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_content_detected_anywhere_on_stack() {
        let mut s = ScannerState::new();
        assert!(!s.in_foreign_content());
        s.push(TagVariant::Html);
        s.push(TagVariant::Svg);
        assert!(s.in_foreign_content());
        s.push(TagVariant::Custom(crate::tag::CustomName::new(b"g")));
        assert!(s.in_foreign_content());
    }

    #[test]
    fn verbatim_suffix_locality() {
        let mut s = ScannerState::new();
        assert!(s.verbatim_suffix().is_none());
        s.set_verbatim_suffix(VerbatimSuffix::new(b"xx").unwrap());
        assert_eq!(s.verbatim_suffix().unwrap().as_bytes(), b"xx");
        s.clear_verbatim_suffix();
        assert!(s.verbatim_suffix().is_none());
    }

    #[test]
    fn rposition_eq_scans_from_top() {
        let mut s = ScannerState::new();
        s.push(TagVariant::Div);
        s.push(TagVariant::Html);
        s.push(TagVariant::Div);
        assert_eq!(s.rposition_eq(&TagVariant::Div), Some(2));
    }
}
