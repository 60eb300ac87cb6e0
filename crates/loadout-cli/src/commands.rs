use anyhow::Context;
use colored::Colorize;
use loadout_diff::{diff_tables, TableChange, TableDiff};
use loadout_loader::{load_host, load_patch, save_host};
use loadout_sdk::{merge, MergeConfig, MergeReport, Severity};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => cmd_merge(args, &cli.format),
        Command::Check(args) => cmd_check(args, &cli.format),
        Command::Config => cmd_config(),
    }
}

/// The result of a merge run, before it is printed.
pub struct MergeOutcome {
    pub report: MergeReport,
    pub changes: TableDiff,
}

/// Load both databases, merge, and write the result unless this is a dry run.
pub fn execute_merge(args: &MergeArgs) -> anyhow::Result<MergeOutcome> {
    let mut host = load_host(&args.host)
        .with_context(|| format!("loading host database from {}", args.host.display()))?;
    let patch = load_patch(&args.patch)
        .with_context(|| format!("loading patch database from {}", args.patch.display()))?;
    let config = match &args.config {
        Some(path) => MergeConfig::load(path)
            .with_context(|| format!("reading configuration {}", path.display()))?,
        None => MergeConfig::default(),
    };

    let before = host.templates.items.clone();
    let report = merge(&mut host, &patch, &config);
    let changes = diff_tables(&before, &host.templates.items);

    if !args.dry_run {
        if let Some(out) = &args.out {
            save_host(&host, out).with_context(|| format!("writing {}", out.display()))?;
        }
    }

    Ok(MergeOutcome { report, changes })
}

/// Render a merge outcome as the JSON document printed by `--format json`.
pub fn merge_json(outcome: &MergeOutcome) -> anyhow::Result<String> {
    let doc = serde_json::json!({ "report": outcome.report, "changes": outcome.changes });
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn cmd_merge(args: MergeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let outcome = execute_merge(&args)?;
    let report = &outcome.report;

    if let OutputFormat::Json = format {
        println!("{}", merge_json(&outcome)?);
        return Ok(());
    }

    let mark = if report.errors() > 0 { "!".yellow().bold() } else { "✓".green().bold() };
    println!(
        "{} Merged {} items ({} disabled, {} failed)",
        mark,
        report.cloned.len().to_string().bold(),
        report.disabled.len(),
        report.failed.len(),
    );
    println!("  Propagated: {} lists", report.propagated);
    println!("  Localized: {} languages", report.localized);
    println!("  Trader offers: {}", report.trader_items);
    println!("  Mastery templates: {}", report.mastery_templates);

    if !outcome.changes.is_empty() {
        println!("  Templates:");
        for change in &outcome.changes.changes {
            match change {
                TableChange::Added { key } => println!("    {} {}", "+".green(), key),
                TableChange::Removed { key } => println!("    {} {}", "-".red(), key),
                TableChange::Modified { key, paths } => {
                    println!("    {} {} ({})", "~".yellow(), key, paths.join(", ").dimmed())
                }
            }
        }
    }

    if !report.is_clean() {
        println!("  Diagnostics:");
        for d in &report.diagnostics {
            let label = match d.severity() {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow(),
            };
            println!("    {}: {}", label, d);
        }
    }

    match (&args.out, args.dry_run) {
        (_, true) => println!("Dry run: nothing written."),
        (Some(out), false) => println!("Wrote {}", out.display().to_string().bold()),
        (None, false) => {}
    }
    Ok(())
}

fn cmd_check(args: CheckArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let patch = load_patch(&args.patch)
        .with_context(|| format!("loading patch database from {}", args.patch.display()))?;

    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(&patch)?);
        return Ok(());
    }

    println!(
        "{} {} items ({} enabled), {} traders",
        "✓".green().bold(),
        patch.items.len(),
        patch.enabled_items().count(),
        patch.traders.len(),
    );
    for (id, item) in &patch.items {
        let state = if item.enable { "enabled ".green() } else { "disabled".dimmed() };
        println!("  {} {} <- {}", state, id.bold(), item.source.cyan());
    }
    Ok(())
}

fn cmd_config() -> anyhow::Result<()> {
    print!("{}", MergeConfig::default().to_toml_string()?);
    Ok(())
}
