use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use examkit::{ExamkitConfig, Result};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "examkit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert exam answer keys between YAML, JSON and HTML pages", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ./examkit.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a page can load its exam data from a JSON file
    #[command(name = "reference-linker")]
    ReferenceLinker {
        /// Exam data the page loads
        json_file: PathBuf,

        /// Page that references the exam data
        html_file: PathBuf,
    },

    /// Embed a JSON exam document into a page, replacing its data block
    #[command(name = "embed-data")]
    EmbedData {
        /// Exam data to embed
        json_file: PathBuf,

        /// Page to rewrite in place
        html_file: PathBuf,
    },

    /// Convert a JSON exam document to YAML (writes <base>.yaml)
    #[command(name = "json-to-yaml")]
    JsonToYaml {
        /// JSON exam document
        json_file: PathBuf,
    },

    /// Convert a YAML exam document to JSON (writes <base>.json)
    #[command(name = "yaml-to-json")]
    YamlToJson {
        /// YAML exam document
        yaml_file: PathBuf,
    },

    /// Print the exam data embedded in a page
    #[command(name = "extract-data")]
    ExtractData {
        /// Page with an embedded data block
        html_file: PathBuf,

        /// Write the JSON here instead of printing it
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Bad arguments exit with 1 like every other failure; help and version still exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    examkit::logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        examkit::cli::report_failure(&e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<ExamkitConfig> {
    match path {
        Some(path) => ExamkitConfig::load_from(path),
        None => ExamkitConfig::load(&std::env::current_dir()?),
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = cli.command {
        generate(shell, &mut Cli::command(), "examkit", &mut io::stdout());
        return Ok(());
    }

    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::ReferenceLinker {
            json_file,
            html_file,
        } => {
            examkit::cli::reference::run(&json_file, &html_file)?;
        }

        Commands::EmbedData {
            json_file,
            html_file,
        } => {
            examkit::cli::embed::run(&json_file, &html_file, &config.embed)?;
        }

        Commands::JsonToYaml { json_file } => {
            examkit::cli::convert::run_json_to_yaml(&json_file)?;
        }

        Commands::YamlToJson { yaml_file } => {
            examkit::cli::convert::run_yaml_to_json(&yaml_file, &config.convert)?;
        }

        Commands::ExtractData { html_file, output } => {
            examkit::cli::extract::run(
                &html_file,
                output.as_deref(),
                &config.embed,
                config.convert.json_indent,
            )?;
        }

        Commands::Completions { .. } => unreachable!("completions are generated before config loading"),
    }

    Ok(())
}
