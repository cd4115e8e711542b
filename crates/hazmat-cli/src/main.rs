mod commands;
mod output;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hazmat",
    version,
    about = "Report data engine for designated substances and hazardous materials assessments"
)]
struct Cli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the report data record from an input bundle
    Prepare(PrepareArgs),
    /// Classify individual lab results
    Classify {
        #[command(subcommand)]
        action: ClassifyAction,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table", global = true)]
        output: String,
    },
    /// Check that a logo file can be embedded
    CheckLogo {
        /// Path to the logo image
        path: PathBuf,
    },
}

#[derive(Args)]
pub struct PrepareArgs {
    /// JSON bundle with report, project, customer and optional formSchema
    pub bundle: PathBuf,

    /// Engine options file (JSON)
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Output format: table (default) or json
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Write the full record to a JSON file
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Report date (YYYY-MM-DD); defaults to today
    #[arg(long, value_name = "DATE", conflicts_with = "undated")]
    pub date: Option<NaiveDate>,

    /// Leave the report date as "To Be Determined"
    #[arg(long)]
    pub undated: bool,

    /// Logo image to embed
    #[arg(long, value_name = "FILE")]
    pub logo: Option<PathBuf>,

    /// Organisation named in recommendations
    #[arg(long)]
    pub organization: Option<String>,
}

#[derive(Subcommand)]
enum ClassifyAction {
    /// Classify lead results such as "<0.0080" or "0.15"
    Lead {
        /// One or more lab values
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Classify an asbestos result
    Asbestos {
        /// Reported asbestos content, e.g. "2.5" or "Positive for chrysotile"
        #[arg(short, long)]
        percentage: Option<String>,

        /// Suspected ACM answer; only "Yes" counts
        #[arg(short, long)]
        suspected: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Prepare(args) => commands::prepare::run(args),
        Commands::Classify { action, output } => match action {
            ClassifyAction::Lead { values } => commands::classify::lead(&values, &output),
            ClassifyAction::Asbestos {
                percentage,
                suspected,
            } => commands::classify::asbestos(percentage.as_deref(), suspected.as_deref(), &output),
        },
        Commands::CheckLogo { path } => commands::logo::check(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
