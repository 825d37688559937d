//! Command-line surface: argument parsing and command handlers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use aurora_page::content::ContentRegistry;
use aurora_page::{current_year, render_page};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::AuroraConfig;

#[derive(Parser, Debug)]
#[command(name = "aurora")]
#[command(about = "Build the Aurora marketing homepage to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the homepage to an HTML file (or stdout)
    Render(RenderArgs),
    /// Print the content registry as JSON
    Content {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Validate the content registry
    Check,
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Output file; overrides `output.path` from the config. Stdout when neither is set
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Config file (default: ./aurora.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Copyright year (default: current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Stylesheet href; overrides `assets.stylesheet` from the config
    #[arg(long)]
    pub stylesheet: Option<String>,
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => render(args),
        Command::Content { pretty } => print_content(pretty),
        Command::Check => check(),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AuroraConfig::load_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot resolve working directory")?;
            AuroraConfig::discover(&cwd)
        }
    };

    let mut options = config.page_options(args.year.unwrap_or_else(current_year));
    if let Some(href) = args.stylesheet {
        options.stylesheet_href = Some(href);
    }

    let content = ContentRegistry::STANDARD;
    content.validate().context("content registry is invalid")?;

    let html = render_page(&content, &options);

    match args.out.or(config.output.path) {
        Some(path) => {
            write_output(&path, &html)?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))
}

fn print_content(pretty: bool) -> Result<()> {
    let content = ContentRegistry::STANDARD;
    let json = if pretty {
        serde_json::to_string_pretty(&content)
    } else {
        serde_json::to_string(&content)
    }
    .context("failed to serialize content registry")?;
    println!("{json}");
    Ok(())
}

fn check() -> Result<()> {
    let content = ContentRegistry::STANDARD;
    content.validate().context("content registry is invalid")?;
    println!(
        "content ok: {} features, {} testimonials, {} faqs",
        content.features.len(),
        content.testimonials.len(),
        content.faqs.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "aurora",
            "render",
            "-o",
            "dist/index.html",
            "--year",
            "2030",
            "--stylesheet",
            "app.css",
        ])
        .unwrap();

        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.out, Some(PathBuf::from("dist/index.html")));
        assert_eq!(args.year, Some(2030));
        assert_eq!(args.stylesheet.as_deref(), Some("app.css"));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::try_parse_from(["aurora", "check", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Check));
    }
}
