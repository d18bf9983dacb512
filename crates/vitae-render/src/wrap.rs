//! Paragraph-preserving text reflow.

use unicode_width::UnicodeWidthStr;

/// Line width used when a template does not ask for one.
pub const DEFAULT_WIDTH: usize = 80;

/// Reflows free text to a maximum line width, preserving paragraphs.
///
/// Paragraphs are separated by blank lines in the input. Within a
/// paragraph, single newlines are soft breaks: they collapse to spaces
/// before the paragraph is rewrapped. Paragraphs that collapse to nothing
/// (three or more consecutive newlines) survive as empty blocks, so the
/// vertical rhythm of the source text is kept.
///
/// A non-empty `prefix` indents the first line of every paragraph; the
/// remaining lines of that paragraph are indented with spaces matching the
/// prefix's display width, so wrapped continuations align under the text
/// rather than under the bullet:
///
/// ```text
/// - Led the migration of the billing pipeline to the new
///   settlement system with zero downtime.
/// ```
///
/// Widths are measured in display columns, not bytes, so CJK and other
/// wide characters wrap where they appear to wrap. A single word wider
/// than `width` is placed on a line of its own, unbroken.
///
/// # Example
///
/// ```rust
/// use vitae_render::wrap_text;
///
/// let wrapped = wrap_text("one two three four five", 10, "");
/// assert_eq!(wrapped, "one two\nthree four\nfive");
///
/// let bulleted = wrap_text("one two three four", 10, "- ");
/// assert_eq!(bulleted, "- one two\n  three\n  four");
/// ```
pub fn wrap_text(text: &str, width: usize, prefix: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let mut blocks = Vec::new();
    for paragraph in text.split("\n\n") {
        let flat = paragraph.replace('\n', " ");
        let flat = flat.trim();
        if flat.is_empty() {
            blocks.push(String::new());
            continue;
        }
        blocks.push(fill(flat, width, prefix));
    }
    blocks.join("\n\n")
}

/// Greedy word wrap of a single flattened paragraph.
fn fill(paragraph: &str, width: usize, prefix: &str) -> String {
    let indent = " ".repeat(prefix.width());
    let mut lines = Vec::new();
    let mut current = String::from(prefix);
    let mut current_width = prefix.width();
    let mut has_word = false;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();
        if has_word && current_width + 1 + word_width > width {
            lines.push(std::mem::replace(&mut current, indent.clone()));
            current_width = indent.len();
            has_word = false;
        }
        if has_word {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
        has_word = true;
    }
    lines.push(current);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_simple() {
        let out = wrap_text("aa bb cc dd ee", 5, "");
        assert_eq!(out, "aa bb\ncc dd\nee");
    }

    #[test]
    fn test_wrap_two_paragraphs() {
        let out = wrap_text(
            "first paragraph with several words here\n\nsecond paragraph also has words",
            20,
            "",
        );
        let blocks: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        for line in out.lines() {
            assert!(line.len() <= 20, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_wrap_soft_breaks_collapse() {
        let out = wrap_text("one\ntwo\nthree", 80, "");
        assert_eq!(out, "one two three");
    }

    #[test]
    fn test_wrap_bullet_prefix() {
        let out = wrap_text("alpha beta gamma delta\n\nepsilon zeta", 14, "- ");
        let blocks: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        for block in &blocks {
            let mut lines = block.lines();
            assert!(lines.next().unwrap().starts_with("- "));
            for continuation in lines {
                assert!(continuation.starts_with("  "));
                assert!(!continuation.starts_with("   "));
            }
        }
    }

    #[test]
    fn test_wrap_empty_paragraph_preserved() {
        // Four newlines produce an empty paragraph between the two blocks.
        let out = wrap_text("aaa\n\n\n\nbbb", 80, "");
        assert_eq!(out, "aaa\n\n\n\nbbb");
    }

    #[test]
    fn test_wrap_three_newlines_is_one_break() {
        // The stray newline is a soft break inside the second paragraph.
        let out = wrap_text("aaa\n\n\nbbb", 80, "");
        assert_eq!(out, "aaa\n\nbbb");
    }

    #[test]
    fn test_wrap_empty_input() {
        assert_eq!(wrap_text("", 80, ""), "");
        assert_eq!(wrap_text("   \n  ", 80, "- "), "");
    }

    #[test]
    fn test_wrap_long_word_unbroken() {
        let out = wrap_text("short uncompromisinglylongword end", 10, "");
        assert_eq!(out, "short\nuncompromisinglylongword\nend");
    }

    #[test]
    fn test_wrap_prefix_counts_toward_width() {
        // "- one two" is 9 columns; adding " three" would exceed 10.
        let out = wrap_text("one two three", 10, "- ");
        assert_eq!(out, "- one two\n  three");
    }

    #[test]
    fn test_wrap_wide_characters() {
        // Each ideograph is two columns, so only two fit per 5-column line.
        let out = wrap_text("日本 語版 文書", 5, "");
        assert_eq!(out, "日本\n語版\n文書");
    }
}
