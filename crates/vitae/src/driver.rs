//! The render driver: one template in, one file out.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use minijinja::Value;

use crate::data;
use crate::error::{Error, Result};

/// Renders templates against a resume data file and persists the results.
///
/// A `Generator` holds the run's three fixed locations: the data file, the
/// template directory the engine is scoped to, and the directory bare
/// output names land in. It keeps no other state; the data file is
/// re-read on every render so each template sees its current contents.
///
/// # Example
///
/// ```rust,ignore
/// let generator = Generator::new("resume.yaml", "templates", "out");
/// generator.render("resume_template.html.j2", "janedoe.html")?;
/// ```
pub struct Generator {
    data_file: PathBuf,
    template_dir: PathBuf,
    out_dir: PathBuf,
}

impl Generator {
    /// Creates a generator for one data file and template directory.
    pub fn new(
        data_file: impl Into<PathBuf>,
        template_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_file: data_file.into(),
            template_dir: template_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// The template directory the engine resolves names against.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Loads the resume record from the configured data file.
    pub fn load_data(&self) -> Result<serde_yaml::Value> {
        data::load(&self.data_file)
    }

    /// Renders one template and writes the result to `output_name`.
    ///
    /// The full record is the template's context: every top-level key is a
    /// name the template can reference. An `output_name` without a
    /// directory component lands in the output directory; one with a
    /// directory component is written at exactly that path. Parent
    /// directories are created as needed and an existing file at the
    /// target is overwritten.
    ///
    /// Prints a confirmation line and returns the written path on success.
    pub fn render(&self, template_name: &str, output_name: &str) -> Result<PathBuf> {
        let record = self.load_data()?;
        let env = vitae_render::environment(&self.template_dir);
        let template = env.get_template(template_name)?;
        let rendered = template.render(Value::from_serialize(&record))?;

        let out_path = self.resolve_output_path(output_name);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
                    path: out_path.clone(),
                    source,
                })?;
            }
        }
        fs::write(&out_path, rendered).map_err(|source| Error::OutputWrite {
            path: out_path.clone(),
            source,
        })?;

        println!("{} Generated {}", style("✓").green(), out_path.display());
        Ok(out_path)
    }

    /// Bare filenames go under the output directory; anything with a
    /// directory component is taken literally.
    fn resolve_output_path(&self, output_name: &str) -> PathBuf {
        let path = Path::new(output_name);
        let has_dir = path
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty());
        if has_dir {
            path.to_path_buf()
        } else {
            self.out_dir.join(path)
        }
    }
}
