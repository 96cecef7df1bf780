mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pozhstat",
    version,
    about = "Victim and object-of-origin classification for fire-safety report forms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a stored victim attribute value to its canonical key
    Normalize {
        /// Attribute: socialStatus, condition, deathCause or deathPlace
        field: String,

        /// Stored value (may be a legacy alias)
        value: String,
    },
    /// Map Form-4 object-of-origin codes to 7-CO rows
    Classify {
        /// One or more object codes (e.g., 14.1.2)
        #[arg(required = true)]
        codes: Vec<String>,

        /// Custom Form-4 object tree (JSON) instead of the built-in one
        #[arg(short, long, value_name = "FILE")]
        tree: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Aggregate incident records (JSON array) into report-form row counts
    Aggregate {
        /// Path to a JSON file with incident records
        input_file: PathBuf,

        /// Report form: form5 (1-СПЖС) or form7 (7-CO)
        #[arg(short, long)]
        form: String,

        /// Custom Form-4 object tree (JSON), used for form7
        #[arg(short, long, value_name = "FILE")]
        tree: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Also print rows with a zero count
        #[arg(long)]
        show_zero: bool,
    },
    /// Inspect report-form row definitions and mapping tables
    Forms {
        #[command(subcommand)]
        action: FormsAction,
    },
    /// Inspect and validate Form-4 object trees
    Objects {
        #[command(subcommand)]
        action: ObjectsAction,
    },
}

#[derive(Subcommand)]
enum FormsAction {
    /// List supported report forms
    List,
    /// Print the row tree of a form
    Rows {
        /// form5 or form7
        form: String,
    },
    /// Print the attribute-to-row tables of a form
    Tables {
        /// form5 or form7
        form: String,
    },
}

#[derive(Subcommand)]
enum ObjectsAction {
    /// Print an object tree with each code's 7-CO rows
    List {
        /// Custom Form-4 object tree (JSON) instead of the built-in one
        #[arg(short, long, value_name = "FILE")]
        tree: Option<PathBuf>,
    },
    /// Validate a custom object tree file
    Validate {
        /// Path to JSON object tree
        file: PathBuf,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Normalize { field, value } => commands::normalize::run(&field, &value),
        Commands::Classify {
            codes,
            tree,
            output,
        } => commands::classify::run(&codes, tree, &output),
        Commands::Aggregate {
            input_file,
            form,
            tree,
            output,
            show_zero,
        } => commands::aggregate::run(input_file, &form, tree, &output, show_zero),
        Commands::Forms { action } => match action {
            FormsAction::List => commands::forms::list(),
            FormsAction::Rows { form } => commands::forms::rows(&form),
            FormsAction::Tables { form } => commands::forms::tables(&form),
        },
        Commands::Objects { action } => match action {
            ObjectsAction::List { tree } => commands::objects::list(tree),
            ObjectsAction::Validate { file } => commands::objects::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
