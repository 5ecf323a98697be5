use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::config::{Overrides, LOCAL_CONFIG_FILE};
use recase::{Casing, Config, Converter};
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert text between camelCase, kebab-case, snake_case and dot.case", long_about = None)]
struct Cli {
    /// Values to convert
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target casing (camel, kebab, snake, dot)
    #[arg(short = 't', long = "to")]
    casing: Option<Casing>,

    /// Read inputs from a file, one per line
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Read inputs from standard input, one per line
    #[arg(long)]
    stdin: bool,

    /// Parse every input as a JSON value instead of plain text
    #[arg(long)]
    json: bool,

    /// Report inputs that are not already in the target casing
    #[arg(short, long)]
    check: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Pattern of inputs to leave unchanged (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if conversions fail
    #[arg(long)]
    no_fail: bool,

    /// Configuration file
    #[arg(long, env = "RECASE_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Show how inputs split into words
    Tokens {
        /// Values to tokenize
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Use the word boundaries of this casing
        #[arg(short, long, default_value = "kebab")]
        boundaries: Casing,
    },
    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Parser, Debug)]
enum ConfigCommands {
    /// Print the configuration file locations
    Path,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(
        cli.config.as_deref(),
        Overrides {
            casing: cli.casing,
            format: cli.format,
            ignore_patterns: cli.ignore_pattern.clone(),
            no_fail: cli.no_fail,
        },
    )?;
    let colored = !cli.no_color;

    if let Some(command) = &cli.command {
        return handle_command(command, &config, colored);
    }

    let inputs = collect_inputs(&cli)?;
    if inputs.is_empty() {
        anyhow::bail!("No inputs specified. Use --help for usage information.");
    }
    tracing::debug!(count = inputs.len(), casing = %config.casing, "converting inputs");

    let converter = Converter::new(&config);
    let casing = converter.casing();

    let failed = if cli.check {
        let result = converter.check_all(&inputs);
        output::print_check_report(&result, casing, colored, config.format)?;
        result.converted_count + result.error_count > 0
    } else {
        let result = converter.convert_all(&inputs);
        output::print_conversions(&result, casing, colored, config.format)?;
        output::print_error_summary(&result, casing, colored);
        result.error_count > 0
    };

    // Exit with appropriate code
    if failed && config.fail_on_error {
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn collect_inputs(cli: &Cli) -> Result<Vec<Value>> {
    let mut lines = cli.inputs.clone();

    if let Some(path) = &cli.file {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        lines.extend(content.lines().map(str::to_string));
    }

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            lines.push(line.context("Failed to read standard input")?);
        }
    }

    if cli.json {
        lines
            .iter()
            .map(|line| {
                serde_json::from_str(line)
                    .with_context(|| format!("Input is not valid JSON: {}", line))
            })
            .collect()
    } else {
        Ok(lines.into_iter().map(Value::String).collect())
    }
}

fn handle_command(command: &Commands, config: &Config, colored: bool) -> Result<()> {
    match command {
        Commands::Tokens { inputs, boundaries } => {
            let tokenized = inputs
                .iter()
                .map(|input| (input.clone(), boundaries.tokenize(input)))
                .collect::<Vec<_>>();
            output::print_tokens(&tokenized, colored, config.format)?;
        }
        Commands::Config { action } => match action {
            ConfigCommands::Path => {
                match Config::global_config_path() {
                    Some(path) => println!("global: {}", path.display()),
                    None => println!("global: (unavailable)"),
                }
                println!("local:  {}", LOCAL_CONFIG_FILE);
            }
            ConfigCommands::Show => {
                print!("{}", config.to_toml()?);
            }
        },
    }
    Ok(())
}
