//! Sheetsense CLI - prompt-driven table analysis

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheetsense::{
    analyze, apply_formula, classify_columns, suggest_formula, CsvReadOptions, CsvReader,
    CsvWriteOptions, CsvWriter, Table,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sheetsense")]
#[command(author, version, about = "Analyze CSV data with plain-language prompts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a prompt against a CSV file and print the result table
    Analyze {
        /// Input CSV file
        input: PathBuf,

        /// What to do, in plain language (e.g. "summarize sales by region")
        prompt: String,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Apply a spreadsheet formula per row, writing a target column
    Apply {
        /// Input CSV file
        input: PathBuf,

        /// Formula in the supported dialect (e.g. "=IF(B2>100,\"High\",\"Low\")")
        formula: String,

        /// Column to write results into (created if absent)
        #[arg(short, long, default_value = "result")]
        column: String,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Suggest a formula for a prompt
    Suggest {
        /// Input CSV file
        input: PathBuf,

        /// What the formula should do
        prompt: String,
    },

    /// Show column information for a CSV file
    Info {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            prompt,
            output,
        } => run_analyze(&input, &prompt, output.as_deref()),
        Commands::Apply {
            input,
            formula,
            column,
            output,
        } => run_apply(&input, &formula, &column, output.as_deref()),
        Commands::Suggest { input, prompt } => run_suggest(&input, &prompt),
        Commands::Info { input } => show_info(&input),
    }
}

fn load_table(input: &Path) -> Result<Table> {
    CsvReader::read_file(input, &CsvReadOptions::default())
        .with_context(|| format!("Failed to read '{}'", input.display()))
}

fn write_table(table: &Table, output: Option<&Path>) -> Result<()> {
    let csv = CsvWriter::write_str(table, &CsvWriteOptions::default())
        .context("Failed to serialize result")?;

    if let Some(path) = output {
        std::fs::write(path, &csv)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        eprintln!("Wrote {} rows to '{}'", table.row_count(), path.display());
    } else {
        io::stdout()
            .write_all(csv.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn run_analyze(input: &Path, prompt: &str, output: Option<&Path>) -> Result<()> {
    let table = load_table(input)?;
    let result = analyze(&table, prompt).context("Analysis failed")?;

    eprintln!("{}", result.summary);
    write_table(&result.data, output)
}

fn run_apply(input: &Path, formula: &str, column: &str, output: Option<&Path>) -> Result<()> {
    let table = load_table(input)?;
    let result =
        apply_formula(&table, formula, column).context("Formula application failed")?;

    write_table(&result, output)
}

fn run_suggest(input: &Path, prompt: &str) -> Result<()> {
    let table = load_table(input)?;
    let suggestion = suggest_formula(&table, prompt).context("Suggestion failed")?;

    println!("{}", suggestion.formula);
    println!();
    println!("{}", suggestion.explanation);

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let table = load_table(input)?;
    let roles = classify_columns(&table);

    println!("File: {}", input.display());
    println!("Rows: {}", table.row_count());
    println!("Columns: {}", table.column_count());
    println!();

    for (idx, name) in table.schema().names().iter().enumerate() {
        let role = roles
            .get(idx)
            .map(|r| format!("{:?}", r).to_lowercase())
            .unwrap_or_default();
        println!("  {}\t{}\t{}", idx, name, role);
    }

    Ok(())
}
