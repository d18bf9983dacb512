//! Per-format escaping of reserved characters.
//!
//! Each escaper is a single left-to-right pass over the input, substituting
//! character by character. Because replacement text is appended to a fresh
//! buffer and never rescanned, sequences introduced by one substitution
//! (the backslash in `\&`, the braces in `\textasciitilde{}`) cannot be
//! picked up and re-escaped by another.
//!
//! Strings containing none of a format's reserved characters pass through
//! unchanged.

/// Escapes the characters LaTeX reserves for markup.
///
/// Handles `& % $ # _ { } ~ ^ \` and `/`. The tilde, circumflex, and
/// backslash have no single-character escape in LaTeX and are replaced with
/// their control-word forms; the slash becomes `{\slash}` so long URLs and
/// paths keep their break points.
///
/// # Example
///
/// ```rust
/// use vitae_render::escape_latex;
///
/// assert_eq!(escape_latex("100% & $5"), r"100\% \& \$5");
/// assert_eq!(escape_latex("x^2 ~ y"), r"x\textasciicircum{}2 \textasciitilde{} y");
/// assert_eq!(escape_latex("a/b"), r"a{\slash}b");
/// ```
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '\\' => out.push_str(r"\textbackslash{}"),
            '/' => out.push_str(r"{\slash}"),
            _ => out.push(c),
        }
    }
    out
}

/// Backslash-prefixes the characters Markdown treats as inline or list
/// markup: `* _ ` [ ] # + - |`.
///
/// # Example
///
/// ```rust
/// use vitae_render::escape_markdown;
///
/// assert_eq!(escape_markdown("*bold* [link]"), r"\*bold\* \[link\]");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '#' | '+' | '-' | '|' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Replaces `&`, `<`, and `>` with their named HTML entities.
///
/// The substitution is one pass over the input, so the ampersands inserted
/// by `&lt;`/`&gt;` are never themselves entity-escaped. An ampersand
/// already part of an entity in the input is treated as a literal and
/// becomes `&amp;`; input is assumed to be plain text, not markup.
///
/// # Example
///
/// ```rust
/// use vitae_render::escape_html;
///
/// assert_eq!(escape_html("a < b & c > d"), "a &lt; b &amp; c &gt; d");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Removes the run of ASCII punctuation at the end of a string, then trims
/// surrounding whitespace.
///
/// Used to clean auto-generated list items before Markdown escaping, so
/// `"Shipped the thing!!"` becomes `"Shipped the thing"`. Punctuation
/// followed by trailing whitespace is left alone: only a run that reaches
/// the very end of the string is stripped.
///
/// # Example
///
/// ```rust
/// use vitae_render::strip_trailing_punctuation;
///
/// assert_eq!(strip_trailing_punctuation("Achieved results!!"), "Achieved results");
/// assert_eq!(strip_trailing_punctuation("  Clean sentence."), "Clean sentence");
/// ```
pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(|c: char| c.is_ascii_punctuation()).trim()
}
