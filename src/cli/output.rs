use crate::casing::Casing;
use crate::tokenizer::Token;
use crate::ConvertResult;
use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    output: Option<&'a str>,
    error: Option<&'a str>,
    skipped: bool,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    casing: Casing,
    check: bool,
    total: usize,
    converted: usize,
    skipped: usize,
    errors: usize,
    conversions: Vec<JsonConversion<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonTokens<'a> {
    input: &'a str,
    tokens: &'a [Token<'a>],
}

pub fn print_conversions(
    result: &ConvertResult,
    casing: Casing,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_conversions(result, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json(result, casing, false),
    }
}

pub fn print_check_report(
    result: &ConvertResult,
    casing: Casing,
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            print_text_check(result, colored_output);
            print_check_summary(result, casing, colored_output);
            Ok(())
        }
        OutputFormat::Json => print_json(result, casing, true),
    }
}

fn print_text_conversions(result: &ConvertResult, colored_output: bool) {
    for conversion in &result.conversions {
        if let Some(output) = &conversion.output {
            println!("{}", output);
        }
        if let Some(error) = &conversion.error {
            print_error_line(&conversion.input, error, colored_output);
        }
    }
}

fn print_text_check(result: &ConvertResult, colored_output: bool) {
    for conversion in &result.conversions {
        if let Some(error) = &conversion.error {
            print_error_line(&conversion.input, error, colored_output);
            continue;
        }
        let Some(output) = &conversion.output else {
            continue;
        };

        if colored_output {
            println!(
                "  {} {} {}",
                conversion.input.red().bold(),
                "→".dimmed(),
                output.green()
            );
        } else {
            println!("  {} → {}", conversion.input, output);
        }
    }
}

fn print_error_line(input: &str, error: &str, colored_output: bool) {
    if colored_output {
        eprintln!("{} {} {}", "error:".red().bold(), input.bold(), error.dimmed());
    } else {
        eprintln!("error: {} {}", input, error);
    }
}

fn print_json(result: &ConvertResult, casing: Casing, check: bool) -> Result<()> {
    let conversions = result
        .conversions
        .iter()
        .map(|c| JsonConversion {
            input: &c.input,
            output: c.output.as_deref(),
            error: c.error.as_deref(),
            skipped: c.skipped,
        })
        .collect();

    let output = JsonOutput {
        casing,
        check,
        total: result.conversions.len(),
        converted: result.converted_count,
        skipped: result.skipped_count,
        errors: result.error_count,
        conversions,
    };

    let text = serde_json::to_string_pretty(&output).context("Failed to serialize report")?;
    println!("{}", text);
    Ok(())
}

pub fn print_tokens(
    tokenized: &[(String, Vec<Token<'_>>)],
    colored_output: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (input, tokens) in tokenized {
                let words = tokens.iter().map(|t| t.text).collect::<Vec<_>>();
                if colored_output {
                    println!(
                        "{} {}",
                        input.bold(),
                        words
                            .iter()
                            .map(|w| w.cyan().to_string())
                            .collect::<Vec<_>>()
                            .join(&" | ".dimmed().to_string())
                    );
                } else {
                    println!("{} {}", input, words.join(" | "));
                }
            }
        }
        OutputFormat::Json => {
            let items = tokenized
                .iter()
                .map(|(input, tokens)| JsonTokens {
                    input,
                    tokens,
                })
                .collect::<Vec<_>>();
            let text = serde_json::to_string_pretty(&items).context("Failed to serialize tokens")?;
            println!("{}", text);
        }
    }
    Ok(())
}

/// Summary written to stderr after a conversion run with failures.
pub fn print_error_summary(result: &ConvertResult, casing: Casing, colored: bool) {
    if result.error_count == 0 {
        return;
    }

    let total = result.conversions.len();
    let input_word = if total == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} of {} {} could not be converted to {}",
            "✗".red().bold(),
            result.error_count.to_string().red().bold(),
            total,
            input_word,
            casing.example()
        );
    } else {
        eprintln!(
            "✗ {} of {} {} could not be converted to {}",
            result.error_count,
            total,
            input_word,
            casing.example()
        );
    }
}

pub fn print_check_summary(result: &ConvertResult, casing: Casing, colored: bool) {
    let total = result.conversions.len();
    let failing = result.converted_count + result.error_count;

    println!();
    if failing == 0 {
        let message = format!(
            "✓ All {} {} already {}",
            total,
            if total == 1 { "input is" } else { "inputs are" },
            casing.example()
        );
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
    } else {
        let verb = if failing == 1 { "is" } else { "are" };
        if colored {
            println!(
                "{} {} of {} {} not {}",
                "✗".red().bold(),
                failing.to_string().red().bold(),
                total,
                verb,
                casing.example()
            );
        } else {
            println!("✗ {} of {} {} not {}", failing, total, verb, casing.example());
        }
    }
}
