use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mdsite::Config;
use mdsite::site::{self, SiteError};

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Build a static HTML site from Markdown files")]
struct Cli {
    /// Config file
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Log progress at info level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static assets and render every page of the content directory
    Build(BuildArgs),
    /// Convert a single Markdown file
    Page(PageArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Static assets directory
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Markdown content directory
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Page template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct PageArgs {
    /// Input Markdown file
    input: PathBuf,

    /// Page template; without one only the HTML body is written
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] mdsite::config::ConfigError),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Render(#[from] mdsite::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Build(args) => build(&cli.config, args),
        Command::Page(args) => page(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build(config_path: &Path, args: BuildArgs) -> Result<(), CliError> {
    let mut config = Config::load(config_path)?;
    let paths = &mut config.paths;
    if let Some(dir) = args.static_dir {
        paths.static_dir = dir;
    }
    if let Some(dir) = args.content_dir {
        paths.content_dir = dir;
    }
    if let Some(template) = args.template {
        paths.template = template;
    }
    if let Some(dir) = args.output {
        paths.output_dir = dir;
    }

    let summary = site::build_site(&config)?;
    println!(
        "Copied {} static files and generated {} pages into {}",
        summary.files_copied,
        summary.pages.len(),
        config.paths.output_dir.display()
    );
    Ok(())
}

fn page(args: PageArgs) -> Result<(), CliError> {
    let read = |path: &PathBuf| {
        fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.clone(),
            source,
        })
    };

    let markdown = read(&args.input)?;
    let html = match &args.template {
        Some(template) => mdsite::assemble(&markdown, &read(template)?)?,
        None => mdsite::markdown_to_html(&markdown)?,
    };

    match args.output {
        Some(output) => {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent).map_err(|source| CliError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&output, html).map_err(|source| CliError::Io {
                path: output.clone(),
                source,
            })?;
            println!("Created {}", output.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", html).map_err(|source| CliError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        }
    }
    Ok(())
}
