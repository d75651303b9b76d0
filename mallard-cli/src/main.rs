use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use mallard_core::CategoryRuleSet;
use mallard_ingest::{normalize_pages, parse_normalized};

mod export;

#[derive(Parser, Debug)]
#[command(name = "mallard", version, about = "Bank statement text-to-transaction parser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an extracted-text statement dump into categorized transactions
    Parse {
        /// Statement text dump (pages separated by form-feed, as emitted by
        /// common PDF-to-text tools)
        input: PathBuf,

        /// Statement year for the printed month/day tokens (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Category rules JSON (default: built-in rule set)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Also write the transactions to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Inspect or modify the category rule set
    Categories {
        #[command(subcommand)]
        command: CategoryCommand,
    },

    /// Reassign one row's category in a previously exported CSV
    SetCategory {
        /// CSV written by `mallard parse --csv`
        csv: PathBuf,

        /// 1-based data row number
        row: usize,

        /// Category label, optionally "Main -> Sub"
        label: String,
    },
}

#[derive(Subcommand, Debug)]
enum CategoryCommand {
    /// Print categories and their keywords in match order
    List {
        /// Category rules JSON (default: built-in rule set)
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Append a new category with an empty keyword list
    Add {
        name: String,

        /// Rules JSON to update in place (result is printed only when omitted)
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { input, year, rules, csv } => run_parse(&input, year, rules.as_deref(), csv.as_deref()),

        Command::Categories { command } => match command {
            CategoryCommand::List { rules } => run_list(rules.as_deref()),
            CategoryCommand::Add { name, rules } => run_add(&name, rules.as_deref()),
        },

        Command::SetCategory { csv, row, label } => {
            export::set_row_category(&csv, row, &label)?;
            println!("Row {} of {} set to {}", row, csv.display(), label);
            Ok(())
        }
    }
}

fn run_parse(
    input: &Path,
    year: Option<i32>,
    rules_path: Option<&Path>,
    csv: Option<&Path>,
) -> Result<()> {
    let raw = fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let pages: Vec<String> = raw.split('\x0c').map(str::to_string).collect();

    let year = year.unwrap_or_else(|| chrono::Local::now().year());
    let rules = load_rules(rules_path)?;

    let text = normalize_pages(&pages)?;
    if text.is_empty() {
        eprintln!(
            "WARNING: no text in {} (image-only statement? retry with an OCR text dump)",
            input.display()
        );
        return Ok(());
    }

    let txns = parse_normalized(&text, year, &rules)?;
    if txns.is_empty() {
        eprintln!("WARNING: no transactions matched in {}", input.display());
        return Ok(());
    }

    println!("Parsed {} transactions from {}\n", txns.len(), input.display());
    for t in &txns {
        let date_note = if t.date.is_degraded() { " (month?)" } else { "" };
        println!(
            "{}{} | {:<10} | {:<13} | {:>10.2} | bal {:>12.2} | {} -> {} | {}",
            t.date,
            date_note,
            t.direction.as_str(),
            t.transaction_type,
            t.amount,
            t.balance,
            t.category,
            t.subcategory,
            t.details
        );
    }

    let degraded = txns.iter().filter(|t| t.date.is_degraded()).count();
    if degraded > 0 {
        eprintln!("\nWARNING: {degraded} transaction(s) with unresolved month abbreviations");
    }

    if let Some(path) = csv {
        export::write_csv(path, &txns)?;
        println!("\nWrote {}", path.display());
    }

    Ok(())
}

fn run_list(rules_path: Option<&Path>) -> Result<()> {
    let rules = load_rules(rules_path)?;
    for rule in rules.rules() {
        println!("{}: {}", rule.name, rule.keywords.join(", "));
    }
    Ok(())
}

fn run_add(name: &str, rules_path: Option<&Path>) -> Result<()> {
    let mut rules = load_rules(rules_path)?;
    rules.add_category(name)?;

    match rules_path {
        Some(path) => {
            rules.save(path)?;
            println!("Added category {} to {}", name.trim(), path.display());
        }
        None => {
            println!("Added category {} (no rules file given, printing result)\n", name.trim());
            for rule_name in rules.names() {
                println!("{rule_name}");
            }
        }
    }
    Ok(())
}

fn load_rules(path: Option<&Path>) -> Result<CategoryRuleSet> {
    match path {
        Some(p) => CategoryRuleSet::from_file(p),
        None => Ok(CategoryRuleSet::default()),
    }
}
