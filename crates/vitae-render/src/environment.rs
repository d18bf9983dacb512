//! Template environment assembly.

use std::path::Path;

use minijinja::{path_loader, AutoEscape, Environment, UndefinedBehavior};

use crate::filters::register_filters;

/// Builds the MiniJinja environment used for document rendering.
///
/// The environment is scoped to `template_dir` via the path loader, so
/// template names resolve relative to that directory and `{% include %}`
/// stays inside it.
///
/// Configuration:
///
/// - `trim_blocks` and `lstrip_blocks` are enabled, so `{% for %}` /
///   `{% if %}` scaffolding does not leak blank lines or indentation into
///   whitespace-sensitive outputs.
/// - Auto-escaping is off for every template name. Escaping is an explicit
///   per-format decision made inside the templates through the registered
///   filters; the engine must not second-guess it.
/// - Undefined variables are strict: referencing a key the data record does
///   not contain fails the render instead of producing empty output.
///
/// # Example
///
/// ```rust,ignore
/// let env = vitae_render::environment("templates");
/// let tmpl = env.get_template("resume_template.html.j2")?;
/// let output = tmpl.render(minijinja::context! { name => "Ada" })?;
/// ```
pub fn environment(template_dir: impl AsRef<Path>) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(path_loader(template_dir.as_ref()));
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_auto_escape_callback(|_name| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    register_filters(&mut env);
    env
}
