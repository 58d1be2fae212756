//! quickfix - Quick fixes for `deno lint` diagnostics.

mod diff;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use quickfix_config::{QuickfixConfig, RuleMode};
use quickfix_diagnostics::{Diagnostic, Edit, Fix, LintMessage, LintReport, apply_edits};
use quickfix_fixes::FixDispatcher;
use quickfix_source_file::{Position, Range, SourceDocument};
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "quickfix")]
#[command(about = "Quick fixes for deno lint diagnostics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the diagnostics of a report and whether they can be fixed
    Check {
        /// `deno lint --json` output, or `-` for stdin
        report: PathBuf,

        /// Path to quickfix.toml config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the fixes offered at a cursor or selection
    Fixes {
        /// `deno lint --json` output, or `-` for stdin
        report: PathBuf,

        /// File the cursor is in
        #[arg(long)]
        file: PathBuf,

        /// `LINE:COL` or `LINE:COL-LINE:COL` (1-based line, 0-based column)
        #[arg(long, value_parser = parse_requested_range)]
        at: Range,

        /// Print fixes as JSON
        #[arg(long)]
        json: bool,

        /// Path to quickfix.toml config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Apply the preferred fix of every diagnostic
    Fix {
        /// `deno lint --json` output, or `-` for stdin
        report: PathBuf,

        /// Show diff without applying fixes
        #[arg(long)]
        diff: bool,

        /// Path to quickfix.toml config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set,
/// e.g. `RUST_LOG=quickfix_fixes=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { report, config } => run_check(&report, config.as_deref()),
        Commands::Fixes {
            report,
            file,
            at,
            json,
            config,
        } => run_fixes(&report, &file, at, json, config.as_deref()),
        Commands::Fix {
            report,
            diff,
            config,
        } => run_fix(&report, diff, config.as_deref()),
    }
}

/// Run the check command.
fn run_check(report_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let dispatcher = FixDispatcher::new(load_config(config_path)?);
    let report = read_report(report_path)?;

    let mut total = 0;
    let mut fixable = 0;
    for (filename, messages) in report.by_file() {
        let path = file_path(filename);
        let document = read_document(&path)?;
        for diagnostic in convert(&messages, &document, dispatcher.config()) {
            total += 1;
            let fix = preferred_fix(&dispatcher, &diagnostic, &document);
            if fix.is_some() {
                fixable += 1;
            }
            println!(
                "{}:{}:{}: {} {}{}",
                path.display(),
                diagnostic.range.start.line + 1,
                diagnostic.range.start.column + 1,
                format!("[{}]", diagnostic.code).blue(),
                diagnostic.message,
                fix.map(|fix| format!(" ({})", fix.title()).green().to_string())
                    .unwrap_or_default()
            );
        }
    }

    if total > 0 {
        println!(
            "\nFound {} diagnostics ({} fixable)",
            total.to_string().red(),
            fixable.to_string().yellow()
        );
        std::process::exit(1);
    }
    println!("{}", "No diagnostics found".green());
    Ok(())
}

/// Run the fixes command.
fn run_fixes(
    report_path: &Path,
    file: &Path,
    requested: Range,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let dispatcher = FixDispatcher::new(load_config(config_path)?);
    let report = read_report(report_path)?;
    let document = read_document(file)?;

    let messages: Vec<&LintMessage> = report
        .diagnostics
        .iter()
        .filter(|message| same_file(&file_path(&message.filename), file))
        .collect();
    let diagnostics = convert(&messages, &document, dispatcher.config());
    let fixes = dispatcher.list_fixes(&diagnostics, requested, &document);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&fixes).context("Failed to serialize fixes")?
        );
        return Ok(());
    }
    if fixes.is_empty() {
        println!("{}", "No fixes available".yellow());
        return Ok(());
    }
    for (index, fix) in fixes.iter().enumerate() {
        print_fix(index + 1, fix);
    }
    Ok(())
}

fn print_fix(number: usize, fix: &Fix) {
    let marker = if fix.is_preferred() { "*" } else { " " };
    println!(
        "{number:>2}.{marker} {} {}",
        fix.title(),
        format!("[{}]", fix.diagnostic().code).blue()
    );
    for edit in fix.edits() {
        println!(
            "      {} {:?}",
            edit.range().to_string().dimmed(),
            edit.content()
        );
    }
    if let Some(command) = fix.action() {
        println!("      {}", format!("{command:?}").dimmed());
    }
}

/// What happened to one file during `fix`.
struct FileOutcome {
    path: PathBuf,
    original: String,
    fixed: Option<String>,
    applied: usize,
    unfixable: usize,
}

/// Run the fix command.
fn run_fix(report_path: &Path, diff_only: bool, config_path: Option<&Path>) -> Result<()> {
    let dispatcher = FixDispatcher::new(load_config(config_path)?);
    let report = read_report(report_path)?;
    let files: Vec<(&str, Vec<&LintMessage>)> = report.by_file().into_iter().collect();

    let outcomes = files
        .par_iter()
        .map(|(filename, messages)| fix_file(&dispatcher, &file_path(filename), messages))
        .collect::<Result<Vec<_>>>()?;

    let mut total_fixed = 0;
    let mut total_unfixable = 0;
    let mut files_changed = 0;
    for outcome in outcomes {
        total_fixed += outcome.applied;
        total_unfixable += outcome.unfixable;
        let Some(fixed) = outcome.fixed else {
            continue;
        };
        files_changed += 1;
        if diff_only {
            diff::print_diff(&outcome.path, &outcome.original, &fixed);
        } else {
            std::fs::write(&outcome.path, &fixed)
                .with_context(|| format!("Failed to write {}", outcome.path.display()))?;
            eprintln!(
                "{}: {} fix(es) applied",
                outcome.path.display(),
                outcome.applied
            );
        }
    }

    if diff_only {
        println!(
            "\n{} fix(es) available in {} file(s)",
            total_fixed.to_string().green(),
            files_changed
        );
    } else if total_fixed > 0 {
        println!(
            "\n{} fix(es) applied in {} file(s)",
            total_fixed.to_string().green(),
            files_changed
        );
    } else {
        println!("{}", "No fixes to apply".green());
    }

    if total_unfixable > 0 {
        eprintln!(
            "{} diagnostic(s) could not be fixed automatically",
            total_unfixable.to_string().yellow()
        );
    }
    Ok(())
}

/// Apply one fix per diagnostic, skipping fixes that collide with edits
/// already accepted for the file.
fn fix_file(
    dispatcher: &FixDispatcher,
    path: &Path,
    messages: &[&LintMessage],
) -> Result<FileOutcome> {
    let document = read_document(path)?;
    let mut edits: Vec<Edit> = Vec::new();
    let mut applied = 0;
    let mut unfixable = 0;

    for diagnostic in convert(messages, &document, dispatcher.config()) {
        let Some(fix) = preferred_fix(dispatcher, &diagnostic, &document) else {
            unfixable += 1;
            continue;
        };
        let collides = fix
            .edits()
            .iter()
            .any(|edit| edits.iter().any(|accepted| accepted.overlaps(edit)));
        if collides {
            tracing::debug!(code = %diagnostic.code, "skipping fix overlapping an earlier one");
            unfixable += 1;
            continue;
        }
        edits.extend(fix.edits().iter().cloned());
        applied += 1;
    }

    let fixed = if edits.is_empty() {
        None
    } else {
        Some(apply_edits(&document, &edits).with_context(|| {
            format!("Fixes for {} could not be combined", path.display())
        })?)
    };
    Ok(FileOutcome {
        path: path.to_path_buf(),
        original: document.text().to_string(),
        fixed,
        applied,
        unfixable,
    })
}

/// The first preferred, edit-carrying fix from the diagnostic's rule.
fn preferred_fix(
    dispatcher: &FixDispatcher,
    diagnostic: &Diagnostic,
    document: &SourceDocument,
) -> Option<Fix> {
    if dispatcher.config().rule_mode(&diagnostic.code) != RuleMode::Fix {
        return None;
    }
    dispatcher
        .rule_fixes(diagnostic, document)
        .into_iter()
        .find(|fix| fix.is_preferred() && !fix.edits().is_empty())
}

fn convert(
    messages: &[&LintMessage],
    document: &SourceDocument,
    config: &QuickfixConfig,
) -> Vec<Diagnostic> {
    messages
        .iter()
        .map(|message| {
            message.to_diagnostic(document, config.linter.severity, &config.linter.docs_url)
        })
        .collect()
}

/// Load the explicit config, or quickfix.toml from the current directory.
fn load_config(config_path: Option<&Path>) -> Result<QuickfixConfig> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => QuickfixConfig::discover(std::env::current_dir()?),
    };
    let Some(path) = path else {
        return Ok(QuickfixConfig::default());
    };
    let config = QuickfixConfig::from_file(&path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    eprintln!("Loaded config from: {}", path.display());
    Ok(config)
}

/// Read and parse the report, printing the files the linter could not analyze.
fn read_report(path: &Path) -> Result<LintReport> {
    let output = if path == Path::new("-") {
        let mut output = String::new();
        std::io::stdin()
            .read_to_string(&mut output)
            .context("Failed to read report from stdin")?;
        output
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    let report = LintReport::parse(&output)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    for error in &report.errors {
        eprintln!(
            "{}: {}: {}",
            "Warning".yellow(),
            error.file_path,
            error.message
        );
    }
    Ok(report)
}

fn read_document(path: &Path) -> Result<SourceDocument> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(SourceDocument::new(source))
}

/// Report file names may be `file://` URLs.
fn file_path(filename: &str) -> PathBuf {
    PathBuf::from(filename.strip_prefix("file://").unwrap_or(filename))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Parse `LINE:COL` or `LINE:COL-LINE:COL` with 1-based lines.
fn parse_requested_range(value: &str) -> Result<Range, String> {
    let (start, end) = value.split_once('-').unwrap_or((value, value));
    Ok(Range::new(parse_position(start)?, parse_position(end)?))
}

fn parse_position(value: &str) -> Result<Position, String> {
    let invalid = || format!("invalid position `{value}`, expected LINE:COL");
    let (line, column) = value.trim().split_once(':').ok_or_else(invalid)?;
    let line: usize = line.parse().map_err(|_| invalid())?;
    let column: usize = column.parse().map_err(|_| invalid())?;
    let line = line
        .checked_sub(1)
        .ok_or_else(|| format!("invalid position `{value}`, lines start at 1"))?;
    Ok(Position::new(line, column))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_cursor() {
        assert_eq!(
            parse_requested_range("3:4"),
            Ok(Range::empty(Position::new(2, 4)))
        );
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_requested_range("1:0-2:5"),
            Ok(Range::from_coords(0, 0, 1, 5))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_requested_range("0:1").is_err());
        assert!(parse_requested_range("a:b").is_err());
        assert!(parse_requested_range("12").is_err());
    }

    #[test]
    fn test_file_path_strips_url_scheme() {
        assert_eq!(file_path("file:///src/main.ts"), PathBuf::from("/src/main.ts"));
        assert_eq!(file_path("main.ts"), PathBuf::from("main.ts"));
    }

    #[test]
    fn test_preferred_fix_respects_rule_mode() {
        let document = SourceDocument::new("var x = 1;\n");
        let diagnostic = Diagnostic::new("no-var", "m", Range::from_coords(0, 0, 0, 10));

        let dispatcher = FixDispatcher::new(QuickfixConfig::default());
        let fix = preferred_fix(&dispatcher, &diagnostic, &document).unwrap();
        assert_eq!(fix.apply(&document).unwrap(), "let x = 1;\n");

        let config = QuickfixConfig::parse("[rules]\nno-var = \"disable-only\"\n").unwrap();
        let dispatcher = FixDispatcher::new(config);
        assert!(preferred_fix(&dispatcher, &diagnostic, &document).is_none());
    }
}
