use std::path::PathBuf;

use clap::Parser;

use vitae::{batch, Generator};

/// Render a structured resume into LaTeX, Markdown, and HTML documents.
#[derive(Parser)]
#[command(name = "vitae", version, about)]
struct Cli {
    /// Resume data file (YAML mapping; `name` drives output filenames).
    #[arg(short, long, default_value = "resume.yaml")]
    data: PathBuf,

    /// Directory containing the *.j2 templates.
    #[arg(short, long, default_value = "templates")]
    templates: PathBuf,

    /// Directory generated files are written to.
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Render only these templates (default: every *.j2 in the directory).
    template: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let generator = Generator::new(cli.data, cli.templates, cli.out_dir);
    if cli.template.is_empty() {
        batch::run(&generator)?;
    } else {
        batch::run_selected(&generator, &cli.template)?;
    }
    Ok(())
}
