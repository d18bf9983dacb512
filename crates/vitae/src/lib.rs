//! # Vitae - Resume Document Generator
//!
//! Vitae turns one structured resume record (a YAML mapping) into a set of
//! finished documents (LaTeX, Markdown, HTML), one output file per template
//! in the template directory.
//!
//! The pipeline per run:
//!
//! 1. [`batch::run`] lists every `*.j2` file in the template directory, in
//!    lexicographic order.
//! 2. [`naming`] derives each output filename from the person's name and
//!    the template's filename, keeping names unique within the run.
//! 3. [`Generator::render`] renders the template against the full record
//!    (every top-level key is template-visible) and writes exactly one
//!    file, overwriting.
//!
//! Escaping is the templates' explicit responsibility, via the filters
//! registered by [`vitae_render`] (`escape_latex`, `escape_md`,
//! `escape_html`, `md_trailing_punc`, `wrap`, `nl`).
//!
//! Any failure (missing data file, malformed YAML, missing template,
//! undefined field reference, unwritable output) aborts the batch at that
//! template. There is no continue-on-error mode; see [`error::Error`].

pub mod batch;
pub mod data;
pub mod driver;
pub mod error;
pub mod naming;

pub use driver::Generator;
pub use error::{Error, Result};
