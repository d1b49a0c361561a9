//! cvmark CLI - CV Markdown conversion tool

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use cvmark::{
    convert_file, detect_format_from_path, from_json, to_json, validate, validate_document,
    ConvertOptions, JsonFormat, OutputFormat, ParseOptions, SourceFormat, ValidationReport,
};

#[derive(Parser)]
#[command(name = "cvmark")]
#[command(version)]
#[command(about = "Convert CV Markdown to structured JSON and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a CV file to all formats (canonical Markdown and structured JSON)
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a CV file (Markdown or JSON, auto-detected) to canonical Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Keep only linkedin/github contact keys as links
        #[arg(long)]
        known_links_only: bool,
    },

    /// Convert a CV file (Markdown or JSON, auto-detected) to structured JSON
    Json {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Validate a CV file and list structural defects
    Check {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> cvmark::Result<ExitCode> {
    match command {
        Commands::Convert { input, output } => {
            let output_dir = output.unwrap_or_else(|| {
                let stem = input.file_stem().unwrap_or_default().to_string_lossy();
                PathBuf::from(format!("{stem}_output"))
            });
            fs::create_dir_all(&output_dir)?;

            let result = convert_file(&input, &ConvertOptions::new())?;
            fs::write(output_dir.join("cv.md"), &result.content)?;
            let json = to_json(&result.document, JsonFormat::Pretty)?;
            fs::write(output_dir.join("cv.json"), &json)?;

            println!("{}", "Output files:".green().bold());
            println!("  {} cv.md", "├─".dimmed());
            println!("  {} cv.json", "└─".dimmed());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Markdown {
            input,
            output,
            known_links_only,
        } => {
            let mut parse = ParseOptions::new();
            if known_links_only {
                parse = parse.known_links_only();
            }
            let options = ConvertOptions::new()
                .with_output(OutputFormat::Markdown)
                .with_parse_options(parse);
            let result = convert_file(&input, &options)?;
            emit(output.as_deref(), &result.content)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Json {
            input,
            output,
            compact,
        } => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let options = ConvertOptions::new()
                .with_output(OutputFormat::Json)
                .with_json_format(json_format);
            let result = convert_file(&input, &options)?;
            emit(output.as_deref(), &result.content)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Check { input } => {
            let report = check(&input)?;
            if report.is_valid() {
                println!("{} {}", "ok:".green().bold(), input.display());
                Ok(ExitCode::SUCCESS)
            } else {
                println!(
                    "{} {} ({} defect{})",
                    "invalid:".red().bold(),
                    input.display(),
                    report.errors.len(),
                    if report.errors.len() == 1 { "" } else { "s" }
                );
                for error in &report.errors {
                    println!("  {} {}", "-".red(), error);
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn check(input: &Path) -> cvmark::Result<ValidationReport> {
    let report = match detect_format_from_path(input)? {
        SourceFormat::Markdown => validate(&fs::read_to_string(input)?),
        SourceFormat::Json => validate_document(&from_json(&fs::read_to_string(input)?)?),
    };
    Ok(report)
}

fn emit(output: Option<&Path>, content: &str) -> cvmark::Result<()> {
    match output {
        Some(path) => {
            log::debug!("writing output to {}", path.display());
            fs::write(path, content)?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
