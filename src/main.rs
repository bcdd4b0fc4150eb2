use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use log::warn;
use rust_decimal::Decimal;

use expense_report::accounting::parse_amount;
use expense_report::config::{Filter, LedgerColumns, DEFAULT_AMOUNT_COLUMN, DEFAULT_CATEGORY_COLUMN};
use expense_report::data::{self, LedgerLoader};
use expense_report::report::export::ExportFormat;
use expense_report::report::{render_budget, render_text, Report, DEFAULT_CURRENCY};

#[derive(Parser)]
#[command(
    name = "expense-report",
    version,
    about = "Summarizes a CSV expense ledger by category and checks it against a budget"
)]
struct Cli {
    /// Ledger file to read
    #[arg(default_value = "file.csv")]
    file: PathBuf,

    /// Column holding the expense category
    #[arg(long, env = "EXPENSE_CATEGORY_COLUMN", default_value = DEFAULT_CATEGORY_COLUMN)]
    category_column: String,

    /// Column holding the expense amount
    #[arg(long, env = "EXPENSE_AMOUNT_COLUMN", default_value = DEFAULT_AMOUNT_COLUMN)]
    amount_column: String,

    /// Only keep rows whose value in this column equals --filter-value
    #[arg(long, requires = "filter_value")]
    filter_column: Option<String>,

    /// Value the filter column must match exactly
    #[arg(long, requires = "filter_column")]
    filter_value: Option<String>,

    /// Monthly budget; asked for interactively when omitted
    #[arg(short, long, value_parser = parse_amount)]
    budget: Option<Decimal>,

    /// Export format (csv, txt or no); asked for interactively when omitted
    #[arg(short, long)]
    export: Option<String>,

    /// Export destination, defaults to expense_report.<format>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Currency symbol shown in front of amounts
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,
}

fn prompt(stdin: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut answer = String::new();
    if stdin.read_line(&mut answer)? == 0 {
        bail!("no input available for prompt: {}", message.trim());
    }

    Ok(answer.trim().to_string())
}

fn prompt_budget(stdin: &mut impl BufRead) -> Result<Decimal> {
    loop {
        let answer = prompt(stdin, "Enter your monthly budget: ")?;
        match parse_amount(&answer) {
            Ok(budget) => return Ok(budget),
            Err(err) => eprintln!("Invalid budget: {}", err),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let columns = LedgerColumns::new(cli.category_column, cli.amount_column);
    let filter = Filter::from_parts(cli.filter_column, cli.filter_value);

    let mut loader = LedgerLoader::new(cli.file, columns);
    let ledger = match loader.load(filter) {
        Ok(ledger) => ledger,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        },
    };

    for warning in ledger.warnings() {
        warn!("{}", warning);
    }

    let report = Report::from_ledger(ledger);
    println!("\n{}", render_text(&report, &cli.currency));

    let mut stdin = io::stdin().lock();

    let budget = match cli.budget {
        Some(budget) => budget,
        None => prompt_budget(&mut stdin)?,
    };
    println!("{}", render_budget(&report.check_budget(budget), &cli.currency));

    let choice = match cli.export {
        Some(choice) => choice,
        None => prompt(&mut stdin, "Export the report? (csv/txt/no): ")?,
    };
    if choice.trim().is_empty() || choice.trim().eq_ignore_ascii_case("no") {
        return Ok(());
    }

    match choice.parse::<ExportFormat>() {
        Ok(format) => {
            let path = cli.output.unwrap_or_else(|| format.default_path());
            match data::export_report(&report, format, &cli.currency, &path) {
                Ok(()) => println!("Report exported to {}", path.display()),
                Err(err) => eprintln!("Error: {}", err),
            }
        },
        Err(err) => eprintln!("Error: {}", err),
    }

    Ok(())
}
