//! CLI Adapter.

mod interactive;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, FormInput, GenerateOptions, PromptReport};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "photo-prompt")]
#[command(version)]
#[command(
    about = "Compose image-generation prompts from descriptive attributes",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./photo-prompt.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a prompt from field values
    #[clap(visible_alias = "g")]
    Generate(GenerateArgs),
    /// Fill in the form step by step
    #[clap(visible_alias = "i")]
    Interactive,
    /// List valid values for style, lighting, mood, and aspect-ratio
    #[clap(visible_alias = "o")]
    Options {
        /// Only list this kind
        kind: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// What the image shows
    #[arg(short, long)]
    subject: String,
    /// What the subject is doing or expressing
    #[arg(short, long)]
    action: Option<String>,
    /// Setting or surroundings
    #[arg(short, long)]
    environment: Option<String>,
    /// Art style (default: photorealistic)
    #[arg(long)]
    style: Option<String>,
    /// Lighting
    #[arg(long)]
    lighting: Option<String>,
    /// Mood or atmosphere
    #[arg(long)]
    mood: Option<String>,
    /// Camera and lens details
    #[arg(short, long = "camera")]
    camera_details: Option<String>,
    /// Aspect ratio (default: 16:9)
    #[arg(short = 'r', long)]
    aspect_ratio: Option<String>,
    /// Reference image (max 5MB)
    #[arg(short, long, value_name = "PATH")]
    image: Option<PathBuf>,
    /// Copy the prompt to the clipboard
    #[arg(long)]
    copy: bool,
    /// Save the prompt as gemini-prompt.txt
    #[arg(short, long)]
    download: bool,
    /// Directory for the downloaded prompt
    #[arg(short, long, value_name = "DIR", requires = "download")]
    output_dir: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn into_options(self) -> (GenerateOptions, bool) {
        let options = GenerateOptions {
            form: FormInput {
                subject: self.subject,
                action: self.action,
                environment: self.environment,
                style: self.style,
                lighting: self.lighting,
                mood: self.mood,
                camera_details: self.camera_details,
                aspect_ratio: self.aspect_ratio,
            },
            image: self.image,
            copy: self.copy,
            download: self.download,
            output_dir: self.output_dir,
        };
        (options, self.json)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Generate(args) => run_generate(args, config),
        Commands::Interactive => interactive::run_interactive(config),
        Commands::Options { kind, json } => run_options(kind.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("photo_prompt=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_generate(args: GenerateArgs, config: Option<&std::path::Path>) -> Result<(), AppError> {
    let (options, json) = args.into_options();
    let report = api::generate(options, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &PromptReport) {
    println!("{}", report.prompt);
    if let Some(image) = &report.image {
        println!("📄 File: {} ({}, {})", image.file_name, image.mime_type, image.display_size());
    }
    if report.copied {
        println!("✓ Copied!");
    }
    if let Some(path) = &report.exported_to {
        println!("✅ Saved prompt to {}", path.display());
    }
}

fn run_options(kind: Option<&str>, json: bool) -> Result<(), AppError> {
    let lists = api::list_options(kind)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lists)?);
        return Ok(());
    }

    for (index, list) in lists.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{}:", list.kind);
        for value in &list.values {
            println!("  {}", value);
        }
    }
    Ok(())
}
