//! Batch rendering of a template directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data;
use crate::driver::Generator;
use crate::error::{Error, Result};
use crate::naming;

/// Renders every template in the generator's template directory.
///
/// Eligible files end in `.j2` and are processed in lexicographic order;
/// the order is part of the naming contract, since collision suffixes
/// depend on which template claims a name first. The first failing
/// template aborts the run; files already written stay in place.
///
/// Returns the written paths in processing order.
pub fn run(generator: &Generator) -> Result<Vec<PathBuf>> {
    let templates = discover_templates(generator.template_dir())?;
    render_all(generator, &templates)
}

/// Renders an explicit list of templates, in the order given.
///
/// Output names derive exactly as in [`run`], so rendering a subset
/// produces the same filenames a full run would (absent collisions with
/// templates outside the subset).
pub fn run_selected(generator: &Generator, templates: &[String]) -> Result<Vec<PathBuf>> {
    render_all(generator, templates)
}

fn render_all(generator: &Generator, templates: &[String]) -> Result<Vec<PathBuf>> {
    // Loaded once here purely for the slug; render() re-reads per template.
    let record = generator.load_data()?;
    let slug = naming::slug_from_name(data::display_name(&record));

    let mut used: HashSet<String> = HashSet::new();
    let mut written = Vec::with_capacity(templates.len());
    for template in templates {
        let candidate = naming::output_name(&slug, template);
        let output = naming::disambiguate(&candidate, naming::template_base(template), &used);
        used.insert(output.clone());
        written.push(generator.render(template, &output)?);
    }
    Ok(written)
}

/// Lists the `.j2` files in the template directory, sorted by name.
fn discover_templates(dir: &Path) -> Result<Vec<String>> {
    let missing = || Error::TemplateNotFound(format!("template directory {}", dir.display()));

    let mut templates = Vec::new();
    for entry in fs::read_dir(dir).map_err(|_| missing())? {
        let entry = entry.map_err(|_| missing())?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.ends_with(naming::TEMPLATE_EXT) && entry.path().is_file() {
            templates.push(name.to_string());
        }
    }
    templates.sort();
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b_template.md.j2", "a_template.tex.j2", "notes.txt", "x.j2.bak"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("sub.j2")).unwrap();

        let templates = discover_templates(dir.path()).unwrap();
        assert_eq!(templates, vec!["a_template.tex.j2", "b_template.md.j2"]);
    }

    #[test]
    fn test_discover_missing_directory() {
        let err = discover_templates(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound(_)));
    }
}
