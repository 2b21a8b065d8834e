use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mdsite::Config;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from Markdown files")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "mdsite.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Copy static files and render every content page
    Build,

    /// Convert one Markdown file to an HTML fragment
    Render {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the level-one heading of a Markdown file
    Title {
        /// Input Markdown file
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    match cli.command {
        Command::Build => match mdsite::site::build_site(&config) {
            Ok(report) if report.failed.is_empty() => {}
            Ok(report) => {
                eprintln!("{} page(s) failed to render", report.failed.len());
                std::process::exit(1);
            }
            Err(e) => fail(e),
        },
        Command::Render { input, output } => {
            let markdown = read_input(&input);
            let html = match mdsite::markdown_to_html_with_config(&markdown, &config) {
                Ok(html) => html,
                Err(e) => fail(e),
            };
            match output {
                Some(output) => {
                    if let Err(e) = fs::write(&output, html) {
                        eprintln!("Error writing {}: {}", output.display(), e);
                        std::process::exit(1);
                    }
                    log::info!("Created {}", output.display());
                }
                None => println!("{html}"),
            }
        }
        Command::Title { input } => {
            let markdown = read_input(&input);
            match mdsite::extract_title(&markdown) {
                Ok(title) => println!("{title}"),
                Err(e) => fail(e),
            }
        }
    }
}

fn read_input(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
}

fn fail(error: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(1);
}
