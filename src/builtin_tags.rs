//! The fixed set of built-in Django template tag names, used by
//! [`crate::scan::django::validate_generic_tag`] to reject names that the
//! grammar already has dedicated productions for (`spec.md` §4.13,
//! Glossary).

#[cfg(feature = "django")]
pub const BUILTIN_DJANGO_TAGS: &[&[u8]] = &[
    b"if",
    b"elif",
    b"else",
    b"endif",
    b"for",
    b"empty",
    b"endfor",
    b"with",
    b"endwith",
    b"block",
    b"endblock",
    b"extends",
    b"include",
    b"load",
    b"url",
    b"csrf_token",
    b"autoescape",
    b"endautoescape",
    b"filter",
    b"endfilter",
    b"spaceless",
    b"endspaceless",
    b"verbatim",
    b"endverbatim",
    b"cycle",
    b"firstof",
    b"now",
    b"regroup",
    b"ifchanged",
    b"endifchanged",
    b"widthratio",
    b"templatetag",
    b"debug",
    b"lorem",
    b"resetcycle",
    b"querystring",
    b"partialdef",
    b"endpartialdef",
    b"partial",
    b"comment",
    b"endcomment",
];
