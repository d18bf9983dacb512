//! MiniJinja filter registration.
//!
//! Templates never call the escaping and wrapping functions directly; they
//! reach them through the filter names registered here, e.g.
//! `{{ name | escape_latex }}` or `{{ summary | wrap(76, "- ") }}`.

use minijinja::{Environment, Value};

use crate::escape;
use crate::wrap;

/// Registers the document filters on a MiniJinja environment.
///
/// Registered names:
///
/// | Filter | Effect |
/// |--------|--------|
/// | `escape_latex` | escape LaTeX reserved characters |
/// | `escape_md` | backslash-prefix Markdown control characters |
/// | `escape_html` | replace `&`, `<`, `>` with entities |
/// | `md_trailing_punc` | strip trailing punctuation run, trim whitespace |
/// | `wrap` | reflow paragraphs to a width, optional bullet prefix |
/// | `nl` | append a newline for explicit line-break control |
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("escape_latex", |value: Value| -> String {
        escape::escape_latex(&text_arg(&value))
    });

    env.add_filter("escape_md", |value: Value| -> String {
        escape::escape_markdown(&text_arg(&value))
    });

    env.add_filter("escape_html", |value: Value| -> String {
        escape::escape_html(&text_arg(&value))
    });

    env.add_filter("md_trailing_punc", |value: Value| -> String {
        escape::strip_trailing_punctuation(&text_arg(&value)).to_string()
    });

    // Usage: {{ text | wrap }}, {{ text | wrap(60) }}, {{ text | wrap(60, "- ") }}
    env.add_filter(
        "wrap",
        |value: Value, width: Option<Value>, prefix: Option<String>| -> String {
            if value.is_none() || value.is_undefined() {
                return String::new();
            }
            // A width that is not a number falls back to the default.
            let width = width
                .and_then(|w| i64::try_from(w).ok())
                .filter(|w| *w > 0)
                .map(|w| w as usize)
                .unwrap_or(wrap::DEFAULT_WIDTH);
            wrap::wrap_text(&text_arg(&value), width, prefix.as_deref().unwrap_or(""))
        },
    );

    // Filter to append a newline to the value, enabling explicit line break
    // control in plain-text templates.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

/// Coerces a template value to the text form it renders as.
///
/// `none` and undefined values coerce to the empty string; everything else
/// goes through its display form, so numbers and the like are accepted.
fn text_arg(value: &Value) -> String {
    if value.is_none() || value.is_undefined() {
        String::new()
    } else {
        value.to_string()
    }
}
