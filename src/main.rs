use atelier::navigator::GalleryNavigator;
use atelier::{catalog, config, generate, output, session};
use clap::{Parser, Subcommand};
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `0.4.0` on a release tag, `dev@<hash>` otherwise.
fn version_label(pkg_version: &str, release: bool, git_hash: &str) -> String {
    if release {
        pkg_version.to_string()
    } else if git_hash.is_empty() {
        "dev@unknown".to_string()
    } else {
        format!("dev@{git_hash}")
    }
}

fn version_string() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        version_label(
            env!("CARGO_PKG_VERSION"),
            env!("ATELIER_RELEASE") == "true",
            env!("ATELIER_GIT_HASH"),
        )
    })
}

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Single-page portfolio generator for visual artists")]
#[command(long_about = "\
Single-page portfolio generator for visual artists

Builds one page with a hero, a filterable gallery with a lightbox viewer,
an about section and a contact section, plus one static lightbox page per
artwork and filter so every piece has its own URL.

Content structure:

  content/
  ├── config.toml      # Site config (optional, overrides stock defaults)
  ├── catalog.toml     # [[artwork]] entries: id, title, category, year, image_url
  ├── about.md         # About section (optional; omitted when missing)
  └── assets/          # Copied to the output root (images, favicon, fonts)

Categories: portrait, still-life, landscape, study.

Run 'atelier gen-config' and 'atelier gen-catalog' for documented starters.
Set ATELIER_LOG=debug to trace navigator transitions on stderr.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Produce the HTML site: index.html plus lightbox pages
    Build,
    /// Validate config.toml and catalog.toml without building
    Check {
        /// Print the validated catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk the gallery from the terminal (commands on stdin or from a script)
    Browse {
        /// Initial category filter
        #[arg(long)]
        category: Option<String>,
        /// Artwork id to open the lightbox on
        #[arg(long)]
        open: Option<u32>,
        /// Read commands from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print a sample catalog.toml
    GenCatalog,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report, &report.labels);
            println!("==> Build complete: {}", report.output_dir.display());
        }
        Command::Check { json } => {
            let site_config = config::load_config(&cli.source)?;
            let catalog = catalog::Catalog::load(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_catalog_output(&catalog, &site_config.labels);
                println!("==> Content is valid");
            }
        }
        Command::Browse {
            category,
            open,
            script,
        } => {
            let site_config = config::load_config(&cli.source)?;
            let catalog = catalog::Catalog::load(&cli.source)?;
            let mut nav = GalleryNavigator::new(&catalog);
            if let Some(name) = category {
                nav.set_category(site_config.labels.parse_filter(&name));
            }
            if let Some(id) = open {
                if !nav.open(id) {
                    eprintln!("warning: artwork #{id} is not in the catalog");
                }
            }
            for line in output::format_view(&nav.view(), &site_config.labels) {
                println!("{}", line);
            }

            let mut stdout = std::io::stdout().lock();
            match script {
                Some(path) => {
                    let file = std::fs::File::open(&path)?;
                    session::run_session(
                        &mut nav,
                        &site_config.labels,
                        BufReader::new(file),
                        &mut stdout,
                    )?;
                }
                None => {
                    let stdin = std::io::stdin().lock();
                    session::run_session(&mut nav, &site_config.labels, stdin, &mut stdout)?;
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenCatalog => {
            print!("{}", catalog::stock_catalog_toml());
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays the user-facing report.
///
/// Filter comes from `ATELIER_LOG` (e.g. `ATELIER_LOG=atelier=debug`), default `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("ATELIER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn version_on_release_tag_is_package_version() {
        assert_eq!(version_label("0.4.0", true, "abc1234"), "0.4.0");
    }

    #[test]
    fn version_off_tag_names_commit() {
        assert_eq!(version_label("0.4.0", false, "abc1234"), "dev@abc1234");
        assert_eq!(version_label("0.4.0", false, ""), "dev@unknown");
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
