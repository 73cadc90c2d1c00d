//! The Tag Taxonomy Oracle.
//!
//! Pure, allocation-free classification of a scanned tag name into a
//! [`TagVariant`], plus the fixed HTML content-model tables the rest of the
//! scanner consults: the void-element set and the "can a parent of this kind
//! contain a child of that kind" relation used for implicit closure.
//!
//! None of the functions here touch a [`crate::lexer::Lexer`]; they operate
//! purely on already-scanned name bytes so they can be unit tested in
//! isolation from the dispatch/lexing machinery.

use std::fmt;

/// Upper bound on a `CUSTOM` tag name, matching the one-byte length prefix
/// used by the serialization format (`spec.md` §4.3).
pub const CUSTOM_NAME_CAP: usize = 255;

/// A case-preserving, bounded tag name carried by [`TagVariant::Custom`].
///
/// Stored inline rather than as a heap `Vec<u8>`/`Box<[u8]>` so that pushing
/// a foreign-content element never allocates; the cap is already enforced by
/// the one-byte length prefix in the serialized form.
#[derive(Clone)]
pub struct CustomName {
    len: u8,
    bytes: [u8; CUSTOM_NAME_CAP],
}

impl CustomName {
    /// Truncates to [`CUSTOM_NAME_CAP`] bytes if `name` is longer.
    pub fn new(name: &[u8]) -> Self {
        let len = name.len().min(CUSTOM_NAME_CAP);
        let mut bytes = [0u8; CUSTOM_NAME_CAP];
        bytes[..len].copy_from_slice(&name[..len]);
        Self {
            len: len as u8,
            bytes,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }
}

impl PartialEq for CustomName {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
impl Eq for CustomName {}

impl fmt::Debug for CustomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.as_bytes()) {
            Ok(s) => write!(f, "Custom({s:?})"),
            Err(_) => write!(f, "Custom({:?})", self.as_bytes()),
        }
    }
}

/// A classified tag. Variants beyond the ones named in `spec.md` §3
/// (`P`, `Li`, `Dd`, ... through `Select`) exist only so [`can_contain`] can
/// answer the HTML5 "optional tags" closure rules named in `spec.md` §4.1;
/// every one of them behaves exactly like the generic `Html` catch-all for
/// token emission (`spec.md` §4.7) and for the serialization discriminant
/// table (`spec.md` §4.3) — see `DESIGN.md` for why the taxonomy needed this
/// much detail even though spec.md's own prose names only a handful of
/// variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagVariant {
    /// Generic element: none of the below.
    Html,
    Void,
    Script,
    Style,
    Title,
    Textarea,
    Plaintext,
    Svg,
    Math,
    Head,
    Body,

    // HTML5 "P-closing" elements (https://html.spec.whatwg.org/#the-p-element):
    // opening any of these while a `p` is open implicitly closes the `p`.
    P,
    Address,
    Article,
    Aside,
    Blockquote,
    Details,
    Div,
    Dl,
    Fieldset,
    Figcaption,
    Figure,
    Footer,
    Form,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Header,
    Hgroup,
    Main,
    Menu,
    Nav,
    Ol,
    Pre,
    Section,
    Table,
    Ul,

    // List/definition-list/ruby/table closures.
    Li,
    Dd,
    Dt,
    Option,
    Optgroup,
    Rb,
    Rp,
    Rt,
    Rtc,
    Tr,
    Td,
    Th,
    Thead,
    Tbody,
    Tfoot,
    Colgroup,
    Caption,
    Select,

    /// Foreign-content (SVG/MathML descendant) or otherwise unrecognized
    /// element; original spelling is preserved.
    Custom(CustomName),
}

impl TagVariant {
    pub(crate) fn discriminant(&self) -> u8 {
        use TagVariant::*;
        match self {
            Html => 0,
            Void => 1,
            Script => 2,
            Style => 3,
            Title => 4,
            Textarea => 5,
            Plaintext => 6,
            Svg => 7,
            Math => 8,
            Head => 9,
            Body => 10,
            P => 11,
            Address => 12,
            Article => 13,
            Aside => 14,
            Blockquote => 15,
            Details => 16,
            Div => 17,
            Dl => 18,
            Fieldset => 19,
            Figcaption => 20,
            Figure => 21,
            Footer => 22,
            Form => 23,
            H1 => 24,
            H2 => 25,
            H3 => 26,
            H4 => 27,
            H5 => 28,
            H6 => 29,
            Header => 30,
            Hgroup => 31,
            Main => 32,
            Menu => 33,
            Nav => 34,
            Ol => 35,
            Pre => 36,
            Section => 37,
            Table => 38,
            Ul => 39,
            Li => 40,
            Dd => 41,
            Dt => 42,
            Option => 43,
            Optgroup => 44,
            Rb => 45,
            Rp => 46,
            Rt => 47,
            Rtc => 48,
            Tr => 49,
            Td => 50,
            Th => 51,
            Thead => 52,
            Tbody => 53,
            Tfoot => 54,
            Colgroup => 55,
            Caption => 56,
            Select => 57,
            Custom(_) => 58,
        }
    }

    /// Inverse of [`TagVariant::discriminant`]. `name` must be `Some` iff
    /// `byte` is the `Custom` discriminant.
    pub(crate) fn from_discriminant(byte: u8, name: Option<&[u8]>) -> Option<TagVariant> {
        use TagVariant::*;
        Some(match byte {
            0 => Html,
            1 => Void,
            2 => Script,
            3 => Style,
            4 => Title,
            5 => Textarea,
            6 => Plaintext,
            7 => Svg,
            8 => Math,
            9 => Head,
            10 => Body,
            11 => P,
            12 => Address,
            13 => Article,
            14 => Aside,
            15 => Blockquote,
            16 => Details,
            17 => Div,
            18 => Dl,
            19 => Fieldset,
            20 => Figcaption,
            21 => Figure,
            22 => Footer,
            23 => Form,
            24 => H1,
            25 => H2,
            26 => H3,
            27 => H4,
            28 => H5,
            29 => H6,
            30 => Header,
            31 => Hgroup,
            32 => Main,
            33 => Menu,
            34 => Nav,
            35 => Ol,
            36 => Pre,
            37 => Section,
            38 => Table,
            39 => Ul,
            40 => Li,
            41 => Dd,
            42 => Dt,
            43 => Option,
            44 => Optgroup,
            45 => Rb,
            46 => Rp,
            47 => Rt,
            48 => Rtc,
            49 => Tr,
            50 => Td,
            51 => Th,
            52 => Thead,
            53 => Tbody,
            54 => Tfoot,
            55 => Colgroup,
            56 => Caption,
            57 => Select,
            58 => Custom(CustomName::new(name?)),
            _ => return None,
        })
    }
}

const VOID_ELEMENTS: &[&[u8]] = &[
    b"AREA", b"BASE", b"BR", b"COL", b"EMBED", b"HR", b"IMG", b"INPUT", b"LINK", b"META",
    b"PARAM", b"SOURCE", b"TRACK", b"WBR",
];

fn ascii_uppercase(name: &[u8], out: &mut [u8; 32]) -> usize {
    let len = name.len().min(out.len());
    for (dst, src) in out[..len].iter_mut().zip(&name[..len]) {
        *dst = src.to_ascii_uppercase();
    }
    len
}

/// Classifies an already-scanned tag name.
///
/// `name` should be exactly the bytes returned by [`crate::scan::scan_tag_name`];
/// this function uppercases its own copy for table lookups regardless of the
/// case `name` arrives in, but preserves `name`'s original bytes verbatim in
/// [`TagVariant::Custom`].
///
/// Per `spec.md` §4.7, this is only ever called for non-foreign-context start
/// tags, for child names probed by [`can_contain`], and for end tags closing
/// a foreign-content root (`</svg>`, `</math>`) — plain foreign-content
/// descendants always become `Custom` directly without consulting this table
/// (see `crate::scan::tag_name`).
pub fn classify(name: &[u8], foreign: bool) -> TagVariant {
    let mut buf = [0u8; 32];
    let len = ascii_uppercase(name, &mut buf);
    let upper = &buf[..len];

    match upper {
        b"SCRIPT" => return TagVariant::Script,
        b"STYLE" => return TagVariant::Style,
        b"TITLE" => return TagVariant::Title,
        b"TEXTAREA" => return TagVariant::Textarea,
        b"PLAINTEXT" => return TagVariant::Plaintext,
        b"SVG" => return TagVariant::Svg,
        b"MATH" => return TagVariant::Math,
        b"HEAD" => return TagVariant::Head,
        b"BODY" => return TagVariant::Body,
        _ => {}
    }

    if VOID_ELEMENTS.contains(&upper) {
        return TagVariant::Void;
    }

    match upper {
        b"P" => return TagVariant::P,
        b"ADDRESS" => return TagVariant::Address,
        b"ARTICLE" => return TagVariant::Article,
        b"ASIDE" => return TagVariant::Aside,
        b"BLOCKQUOTE" => return TagVariant::Blockquote,
        b"DETAILS" => return TagVariant::Details,
        b"DIV" => return TagVariant::Div,
        b"DL" => return TagVariant::Dl,
        b"FIELDSET" => return TagVariant::Fieldset,
        b"FIGCAPTION" => return TagVariant::Figcaption,
        b"FIGURE" => return TagVariant::Figure,
        b"FOOTER" => return TagVariant::Footer,
        b"FORM" => return TagVariant::Form,
        b"H1" => return TagVariant::H1,
        b"H2" => return TagVariant::H2,
        b"H3" => return TagVariant::H3,
        b"H4" => return TagVariant::H4,
        b"H5" => return TagVariant::H5,
        b"H6" => return TagVariant::H6,
        b"HEADER" => return TagVariant::Header,
        b"HGROUP" => return TagVariant::Hgroup,
        b"MAIN" => return TagVariant::Main,
        b"MENU" => return TagVariant::Menu,
        b"NAV" => return TagVariant::Nav,
        b"OL" => return TagVariant::Ol,
        b"PRE" => return TagVariant::Pre,
        b"SECTION" => return TagVariant::Section,
        b"TABLE" => return TagVariant::Table,
        b"UL" => return TagVariant::Ul,
        b"LI" => return TagVariant::Li,
        b"DD" => return TagVariant::Dd,
        b"DT" => return TagVariant::Dt,
        b"OPTION" => return TagVariant::Option,
        b"OPTGROUP" => return TagVariant::Optgroup,
        b"RB" => return TagVariant::Rb,
        b"RP" => return TagVariant::Rp,
        b"RT" => return TagVariant::Rt,
        b"RTC" => return TagVariant::Rtc,
        b"TR" => return TagVariant::Tr,
        b"TD" => return TagVariant::Td,
        b"TH" => return TagVariant::Th,
        b"THEAD" => return TagVariant::Thead,
        b"TBODY" => return TagVariant::Tbody,
        b"TFOOT" => return TagVariant::Tfoot,
        b"COLGROUP" => return TagVariant::Colgroup,
        b"CAPTION" => return TagVariant::Caption,
        b"SELECT" => return TagVariant::Select,
        _ => {}
    }

    if foreign {
        TagVariant::Custom(CustomName::new(name))
    } else {
        TagVariant::Html
    }
}

/// Whether `tag` is one of the fourteen HTML void elements
/// (`spec.md` §4.1).
pub fn is_void(tag: &TagVariant) -> bool {
    matches!(tag, TagVariant::Void)
}

fn is_p_closing(child: &TagVariant) -> bool {
    use TagVariant::*;
    matches!(
        child,
        P | Address
            | Article
            | Aside
            | Blockquote
            | Details
            | Div
            | Dl
            | Fieldset
            | Figcaption
            | Figure
            | Footer
            | Form
            | H1
            | H2
            | H3
            | H4
            | H5
            | H6
            | Header
            | Hgroup
            | Main
            | Menu
            | Nav
            | Ol
            | Pre
            | Section
            | Table
            | Ul
    )
}

/// Whether an element of kind `parent` may contain an element of kind
/// `child` without the parser needing to implicitly close `parent` first.
///
/// Encodes the subset of the HTML5 "optional tags" relation named in
/// `spec.md` §4.1. Anything not named by one of these rules defaults to
/// `true` (can contain) — the conservative choice, since this table only
/// ever suppresses an unwanted implicit closure, never forces one (see
/// `DESIGN.md`).
pub fn can_contain(parent: &TagVariant, child: &TagVariant) -> bool {
    use TagVariant::*;
    match parent {
        P => !is_p_closing(child),
        Li => !matches!(child, Li),
        Dd | Dt => !matches!(child, Dd | Dt),
        Option => !matches!(child, Option),
        Optgroup => !matches!(child, Option | Optgroup),
        Tr => !matches!(child, Tr),
        Td | Th => !matches!(child, Td | Th),
        Thead | Tbody | Tfoot => !matches!(child, Thead | Tbody | Tfoot),
        Colgroup => !matches!(child, Colgroup),
        Rb | Rp | Rt => !matches!(child, Rb | Rp | Rt | Rtc),
        Rtc => !matches!(child, Rtc),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminant_round_trips_for_every_variant() {
        let samples = [
            TagVariant::Html,
            TagVariant::Void,
            TagVariant::Script,
            TagVariant::Svg,
            TagVariant::P,
            TagVariant::Table,
            TagVariant::Td,
            TagVariant::Select,
            TagVariant::Custom(CustomName::new(b"x-widget")),
        ];
        for tag in samples {
            let name = match &tag {
                TagVariant::Custom(n) => Some(n.as_bytes()),
                _ => None,
            };
            let round_tripped = TagVariant::from_discriminant(tag.discriminant(), name)
                .expect("every discriminant in range must decode");
            assert_eq!(round_tripped, tag);
        }
    }

    #[test]
    fn classifies_known_specials_case_insensitively() {
        assert_eq!(classify(b"script", false), TagVariant::Script);
        assert_eq!(classify(b"SCRIPT", false), TagVariant::Script);
        assert_eq!(classify(b"ScRiPt", false), TagVariant::Script);
        assert_eq!(classify(b"textarea", false), TagVariant::Textarea);
    }

    #[test]
    fn classifies_void_elements() {
        for name in [b"br".as_slice(), b"IMG", b"Input", b"wbr"] {
            let tag = classify(name, false);
            assert!(is_void(&tag), "{name:?} should be void");
        }
        assert!(!is_void(&classify(b"div", false)));
    }

    #[test]
    fn unknown_name_is_html_outside_foreign_content() {
        assert_eq!(classify(b"my-widget", false), TagVariant::Html);
    }

    #[test]
    fn unknown_name_is_custom_in_foreign_content_and_preserves_case() {
        match classify(b"MyWidget", true) {
            TagVariant::Custom(name) => assert_eq!(name.as_bytes(), b"MyWidget"),
            other => panic!("expected Custom, got {other:?}"),
        }
    }

    #[test]
    fn p_cannot_contain_block_level_siblings() {
        let p = classify(b"p", false);
        assert!(!can_contain(&p, &classify(b"div", false)));
        assert!(!can_contain(&p, &classify(b"table", false)));
        assert!(!can_contain(&p, &classify(b"h3", false)));
        assert!(can_contain(&p, &classify(b"span", false)));
    }

    #[test]
    fn li_cannot_contain_li() {
        let li = classify(b"li", false);
        assert!(!can_contain(&li, &classify(b"li", false)));
        assert!(can_contain(&li, &classify(b"div", false)));
    }

    #[test]
    fn table_cells_cannot_contain_each_other() {
        let td = classify(b"td", false);
        assert!(!can_contain(&td, &classify(b"td", false)));
        assert!(!can_contain(&td, &classify(b"th", false)));
        assert!(can_contain(&td, &classify(b"div", false)));
    }

    #[test]
    fn custom_name_truncates_at_cap() {
        let long = vec![b'x'; CUSTOM_NAME_CAP + 10];
        let name = CustomName::new(&long);
        assert_eq!(name.as_bytes().len(), CUSTOM_NAME_CAP);
    }
}
