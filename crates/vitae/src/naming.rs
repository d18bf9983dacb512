//! Output filename derivation.
//!
//! Every output file is named after the person: a `slug` derived from the
//! record's `name` forms the stem, and the template's filename supplies the
//! role and extension. Within one run names must be unique; collisions are
//! resolved deterministically from the colliding template's own filename,
//! so the mapping from templates to outputs is stable across runs.

use std::collections::HashSet;

use deunicode::deunicode;

/// Filename suffix that marks a file as a template source.
pub const TEMPLATE_EXT: &str = ".j2";

/// Marker token removed from template filenames when deriving output names.
pub const TEMPLATE_MARKER: &str = "_template";

/// Template-name prefix for generic outputs that keep only their extension.
const GENERIC_PREFIX: &str = "resume.";

/// Slug used when the record's name yields nothing usable.
const FALLBACK_SLUG: &str = "output";

/// Derives the filename slug from a person's name.
///
/// The name is ASCII-folded first so output filenames stay portable. With
/// two or more whitespace-separated tokens the slug is the lowercased
/// first and last token joined; a single token is lowercased with its
/// non-alphanumeric characters removed. An empty result falls back to
/// `"output"`.
///
/// # Example
///
/// ```rust
/// use vitae::naming::slug_from_name;
///
/// assert_eq!(slug_from_name("Jane Doe"), "janedoe");
/// assert_eq!(slug_from_name("Prince!!"), "prince");
/// assert_eq!(slug_from_name("   "), "output");
/// ```
pub fn slug_from_name(name: &str) -> String {
    let folded = deunicode(name);
    let tokens: Vec<&str> = folded.split_whitespace().collect();
    let slug = match tokens.as_slice() {
        [] => String::new(),
        [single] => single
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase(),
        [first, .., last] => format!("{}{}", first, last).to_lowercase(),
    };
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// The template filename without its `.j2` suffix.
///
/// This base name doubles as the disambiguation token source when two
/// templates map to the same output name.
pub fn template_base(template_file: &str) -> &str {
    template_file
        .strip_suffix(TEMPLATE_EXT)
        .unwrap_or(template_file)
}

/// Computes the output filename for one template.
///
/// The `.j2` suffix and every `_template` marker are dropped from the
/// template filename, leaving a suffix that describes the output's role
/// and extension (`res8_template.tex.j2` → `res8.tex`). A suffix starting
/// with `resume.` denotes the generic document for its format, so only the
/// extension is kept: `resume_template.tex.j2` renders to `<slug>.tex`
/// rather than `<slug>.resume.tex`.
pub fn output_name(slug: &str, template_file: &str) -> String {
    let suffix = template_base(template_file).replace(TEMPLATE_MARKER, "");
    match suffix.strip_prefix(GENERIC_PREFIX) {
        Some(extension) => format!("{}.{}", slug, extension),
        None => format!("{}.{}", slug, suffix),
    }
}

/// Resolves `name` against the set of names already claimed in this run.
///
/// An unclaimed name is returned as-is. Otherwise a token derived from the
/// colliding template's base filename (dots become underscores) is inserted
/// before the final extension; if that is claimed too, a counter starting
/// at 1 is appended until a free name is found. The caller records the
/// returned name in `used`; this function only reads the set.
pub fn disambiguate(name: &str, template_base: &str, used: &HashSet<String>) -> String {
    if !used.contains(name) {
        return name.to_string();
    }

    let token = template_base.replace('.', "_");
    let split = name.rsplit_once('.');
    let mut candidate = match split {
        Some((stem, ext)) => format!("{}.{}.{}", stem, token, ext),
        None => format!("{}.{}", name, token),
    };
    let mut counter = 1;
    while used.contains(&candidate) {
        candidate = match split {
            Some((stem, ext)) => format!("{}.{}.{}.{}", stem, token, counter, ext),
            None => format!("{}.{}.{}", name, token, counter),
        };
        counter += 1;
    }
    candidate
}
