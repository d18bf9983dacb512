//! # Vitae Render - Resume Document Rendering Primitives
//!
//! `vitae-render` provides the text transforms and template wiring behind
//! the `vitae` resume generator: per-format escaping, paragraph reflow, and
//! a MiniJinja environment with those transforms registered as filters.
//!
//! Templates are ordinary Jinja files; each one targets a single output
//! format and pipes the fields it prints through the matching escaper:
//!
//! ```jinja
//! \section{Experience}
//! {% for job in experience %}
//! \textbf{ {{- job.title | escape_latex -}} } at {{ job.company | escape_latex }}
//! {% endfor %}
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use minijinja::{context, Environment};
//!
//! let mut env = Environment::new();
//! vitae_render::register_filters(&mut env);
//!
//! let out = env
//!     .render_str("{{ title | escape_latex }}", context! { title => "R&D lead" })
//!     .unwrap();
//! assert_eq!(out, r"R\&D lead");
//! ```
//!
//! For file-based templates, [`environment`] builds an engine scoped to a
//! template directory with block trimming, strict undefined variables, and
//! all filters in place.

pub mod escape;
pub mod wrap;

mod environment;
mod filters;

pub use environment::environment;
pub use escape::{escape_html, escape_latex, escape_markdown, strip_trailing_punctuation};
pub use filters::register_filters;
pub use wrap::{wrap_text, DEFAULT_WIDTH};
