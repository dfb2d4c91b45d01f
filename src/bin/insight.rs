use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

use pytutor_insight::{analyze, truncate_utf8_safe, AdvisoryMessage, InsightConfig, InsightReport};

/// Predict the output of a Python lesson snippet and derive coaching hints,
/// without executing anything.
#[derive(Parser)]
#[command(name = "insight", version, about)]
struct Args {
    /// Source file to analyze; reads stdin when omitted
    file: Option<PathBuf>,

    /// Author-supplied task hint, may be repeated; surfaced before
    /// code-derived hints
    #[arg(long = "task-hint", value_name = "TEXT")]
    task_hints: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Skip the output predictor
    #[arg(long)]
    no_predict: bool,

    /// Skip the hint engine
    #[arg(long)]
    no_hints: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = InsightConfig::from_env().context("loading configuration")?;

    let source = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    debug!(chars = source.chars().count(), "analyzing source");

    let mut report = analyze(&source, &args.task_hints);
    if args.no_predict {
        report.predicted_output = None;
    }
    if args.no_hints {
        report.advisories = None;
    }

    match args.format {
        Format::Json => {
            let rendered = serde_json::to_string_pretty(&report).context("serializing report")?;
            println!("{}", rendered);
        }
        Format::Text => print_text_report(&report, &config),
    }

    Ok(())
}

fn print_text_report(report: &InsightReport, config: &InsightConfig) {
    if let Some(output) = &report.predicted_output {
        println!("=== Predicted Output ===");
        for line in output.lines().take(config.max_output_lines) {
            println!("{}", line);
        }
        let total = output.lines().count();
        if total > config.max_output_lines {
            println!("... ({} more lines)", total - config.max_output_lines);
        }
    }

    let advisories = match &report.advisories {
        Some(a) => a,
        None => return,
    };
    print_section("Hints & Tips", &advisories.hints, config);
    print_section("Best Practices", &advisories.best_practices, config);
    if !advisories.warnings.is_empty() {
        print_section("Potential Issues", &advisories.warnings, config);
    }
}

fn print_section(heading: &str, messages: &[AdvisoryMessage], config: &InsightConfig) {
    println!();
    println!("=== {} ===", heading);
    for msg in messages.iter().take(config.max_advisories) {
        println!("- {}: {}", msg.title, truncate_utf8_safe(&msg.content, 200));
    }
    if messages.len() > config.max_advisories {
        println!("... ({} more)", messages.len() - config.max_advisories);
    }
}
