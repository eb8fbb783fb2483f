use clap::{Parser, Subcommand};
use thai_datepicker::{commands, config, tui};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "thai-datepicker")]
#[command(about = "Thai Buddhist Era date and month pickers", long_about = "Thai Buddhist Era date and month pickers\n\nIf no command is specified, the program starts the interactive picker demo.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a Thai calendar for one month
    Calendar {
        /// Month in YYYY-MM format (optional, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Earliest selectable date in YYYY-MM-DD format
        #[arg(long)]
        min: Option<String>,

        /// Latest selectable date in YYYY-MM-DD format
        #[arg(long)]
        max: Option<String>,
    },
    /// Print the 12-year Buddhist Era page containing a year
    Years {
        /// Gregorian year (optional, defaults to the current year)
        year: Option<i32>,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("compact_breakpoint: {}", cfg.compact_breakpoint);
    println!();
    println!("[theme]");
    println!("primary: {:?}", cfg.theme.primary);
    println!("secondary: {:?}", cfg.theme.secondary);
    println!("muted: {:?}", cfg.theme.muted);
    println!("today_fg: {:?}{}",
        cfg.theme.today_fg(),
        if cfg.theme.today_fg.is_none() { " (auto: 50% lighter primary)" } else { "" }
    );
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Calendar { month, min, max } => commands::calendar::run(month, min, max),
        Commands::Years { year } => commands::years::run(year),
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(config) {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    if let Err(e) = execute_command(command) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
