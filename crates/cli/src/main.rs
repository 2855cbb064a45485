mod commands;
mod config;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::ChaiConfig;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Chai value classifier.
#[derive(Parser)]
#[command(name = "chai", version, about = "Chai value classifier")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log ingestion and dispatch decisions to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to a chai.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a value as text or number
    Classify {
        /// JSON scalar; input that is not valid JSON is taken as text
        value: String,
    },

    /// Classify a cup size (small, medium, large or a number of cups)
    Size {
        /// Size literal or number
        value: String,
    },

    /// Serve chai with an optional message
    Serve {
        /// Message to serve; the configured default when omitted
        message: Option<String>,
    },

    /// Serve in a vessel (kulhad or cutting)
    Vessel {
        /// Vessel name
        name: String,
    },

    /// Dispatch a tagged chai document (one order or an array)
    Make {
        /// Path to the JSON document, or '-' for stdin
        file: PathBuf,
    },

    /// Run every structural guard over a JSON document
    Inspect {
        /// Path to the JSON document, or '-' for stdin
        file: PathBuf,
    },

    /// Serve an order request (a {type, sugar} record or plain text)
    Order {
        /// Path to the JSON document, or '-' for stdin
        file: PathBuf,
    },

    /// Summarize a submitted order form ({name, cups})
    Place {
        /// Path to the JSON document, or '-' for stdin
        file: PathBuf,
    },

    /// Print a menu with discounted prices
    Menu {
        /// Path to the menu JSON, or '-' for stdin
        file: PathBuf,
        /// Price multiplier; overrides [menu].discount
        #[arg(long)]
        discount: Option<f64>,
    },

    /// Validate a request status literal (pending, success, error)
    Status {
        /// Status literal
        literal: String,
    },

    /// Validate an airline seat literal (aisle, window, middle)
    Seat {
        /// Seat literal
        literal: String,
    },

    /// Find the current order in a list of orders
    Current {
        /// Order ids, in order
        orders: Vec<String>,
        /// Order id to look for
        #[arg(long)]
        wanted: String,
        /// Reported when the wanted id is absent; overrides [orders].fallback
        #[arg(long)]
        fallback: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            report_error(&format!("error: {}", e), cli.output, cli.quiet);
            process::exit(1);
        }
    };

    run(cli.command, &config, cli.output, cli.quiet);
}

fn run(command: Commands, config: &ChaiConfig, output: OutputFormat, quiet: bool) {
    use commands::{document, literal, scalar};

    match command {
        Commands::Classify { value } => scalar::cmd_classify(&value, output, quiet),
        Commands::Size { value } => scalar::cmd_size(&value, output, quiet),
        Commands::Serve { message } => {
            scalar::cmd_serve(message.as_deref(), &config.serve.default, output)
        }
        Commands::Vessel { name } => scalar::cmd_vessel(&name, output, quiet),
        Commands::Make { file } => document::cmd_make(&file, output, quiet),
        Commands::Inspect { file } => document::cmd_inspect(&file, output, quiet),
        Commands::Order { file } => document::cmd_order(&file, output, quiet),
        Commands::Place { file } => document::cmd_place(&file, output, quiet),
        Commands::Menu { file, discount } => document::cmd_menu(
            &file,
            discount.unwrap_or(config.menu.discount),
            output,
            quiet,
        ),
        Commands::Status { literal } => literal::cmd_status(&literal, output, quiet),
        Commands::Seat { literal } => literal::cmd_seat(&literal, output, quiet),
        Commands::Current {
            orders,
            wanted,
            fallback,
        } => literal::cmd_current(
            &orders,
            &wanted,
            fallback.as_deref().unwrap_or(&config.orders.fallback),
            output,
        ),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Read and parse a JSON document from a file, or stdin for `-`.
/// Reports and exits on failure.
pub(crate) fn read_document(path: &Path, output: OutputFormat, quiet: bool) -> serde_json::Value {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        match std::io::stdin().read_to_string(&mut buf) {
            Ok(_) => buf,
            Err(e) => {
                report_error(&format!("error reading stdin: {}", e), output, quiet);
                process::exit(1);
            }
        }
    } else {
        match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                let msg = format!("error reading file '{}': {}", path.display(), e);
                report_error(&msg, output, quiet);
                process::exit(1);
            }
        }
    };

    match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error parsing JSON in '{}': {}", path.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}

/// Interpret a command-line argument as JSON, falling back to plain text.
pub(crate) fn parse_arg_value(raw: &str) -> serde_json::Value {
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}

/// Print a result: the text form, or the pretty JSON form.
pub(crate) fn emit(text: &str, json: serde_json::Value, output: OutputFormat) {
    match output {
        OutputFormat::Text => println!("{}", text),
        OutputFormat::Json => {
            let pretty = serde_json::to_string_pretty(&json)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}

/// Report `msg` and exit with status 1.
pub(crate) fn fail(msg: &str, output: OutputFormat, quiet: bool) -> ! {
    report_error(msg, output, quiet);
    process::exit(1);
}
