//! Quill CLI
//!
//! Applies `background` / `border-image` declarations to an empty declaration
//! block and prints the resulting longhands and serialized shorthands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;

use quill_common::warning::{set_quiet, warning_count};
use quill_css::{
    BackgroundSnapshot, BorderImageSnapshot, LonghandId, ShorthandId, StyleDeclaration,
};

/// Quill: expand CSS shorthands into longhands and serialize them back
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Expand a background shorthand
    quill 'background: url(a.png) top left / cover no-repeat, red'

    # Several declarations, JSON output
    quill --json 'border-image: url(x.png) 30 / 2 round' 'background-color: blue'

    # Declarations from a file (the inside of a { } block)
    quill --file style.css
"#)]
struct Cli {
    /// Declarations such as `background: red`
    #[arg(value_name = "DECLARATION")]
    declarations: Vec<String>,

    /// Read declarations from a file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Do not print warnings
    #[arg(short, long)]
    quiet: bool,
}

/// One longhand in the JSON report.
#[derive(Serialize)]
struct LonghandReport {
    property: LonghandId,
    value: String,
    explicitly_set: bool,
}

/// One shorthand in the JSON report.
#[derive(Serialize)]
struct ShorthandReport {
    property: ShorthandId,
    value: String,
}

#[derive(Serialize)]
struct Report {
    longhands: Vec<LonghandReport>,
    shorthands: Vec<ShorthandReport>,
    background: BackgroundSnapshot,
    border_image: BorderImageSnapshot,
    rejected: Vec<String>,
    warnings: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet || cli.json);

    let css = load_declarations(&cli)?;
    let mut style = StyleDeclaration::new();
    let rejected: Vec<String> = style
        .apply_block(&css)
        .iter()
        .map(ToString::to_string)
        .collect();

    if cli.json {
        let report = build_report(&style, rejected);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_style(&style, &rejected);
    }

    Ok(())
}

/// Collect declarations from `--file` and the positional arguments.
fn load_declarations(cli: &Cli) -> Result<String> {
    let mut blocks = Vec::new();

    if let Some(ref path) = cli.file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        blocks.push(text);
    }
    blocks.extend(cli.declarations.iter().cloned());

    if blocks.iter().all(|block| block.trim().is_empty()) {
        bail!("no declarations given (pass `name: value` arguments or --file)");
    }
    Ok(blocks.join(";\n"))
}

fn build_report(style: &StyleDeclaration, rejected: Vec<String>) -> Report {
    Report {
        longhands: style
            .longhands()
            .map(|longhand| LonghandReport {
                property: longhand.id,
                value: longhand.value.to_string(),
                explicitly_set: longhand.explicitly_set,
            })
            .collect(),
        shorthands: ShorthandId::ALL
            .into_iter()
            .map(|id| ShorthandReport {
                property: id,
                value: style.property_value(id),
            })
            .collect(),
        background: style.background().snapshot(),
        border_image: style.border_image().snapshot(),
        rejected,
        warnings: warning_count(),
    }
}

fn print_style(style: &StyleDeclaration, rejected: &[String]) {
    println!("=== Longhands ===");
    for longhand in style.longhands() {
        if longhand.explicitly_set {
            println!("  {}: {}", longhand.id.bold(), longhand.value.green());
        } else {
            println!(
                "  {}: {} {}",
                longhand.id,
                longhand.value,
                "(initial)".dimmed()
            );
        }
    }

    println!("\n=== Shorthands ===");
    for id in ShorthandId::ALL {
        let value = style.property_value(id);
        if value.is_empty() {
            println!("  {}: {}", id.bold(), "(not expressible)".dimmed());
        } else {
            println!("  {}: {}", id.bold(), value.cyan());
        }
    }

    if !rejected.is_empty() {
        println!("\n=== Rejected ===");
        for error in rejected {
            println!("  {} {error}", "✗".red());
        }
    }
}
