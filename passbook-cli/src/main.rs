use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use passbook_core::{Bank, classify_bank};
use passbook_finance::{monthly_summary, quality_report, summarize, write_monthly_csv, write_transactions_csv};
use passbook_ingest::{IngestError, ParsedStatement, StatementText, parse_bank_statement};
use std::path::{Path, PathBuf};

mod config;
mod report;
mod state;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PASSBOOK_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "passbook",
    version,
    long_version = LONG_VERSION,
    about = "Extract transactions from SBI / South Indian Bank statement text"
)]
struct Cli {
    /// Config file (default: ~/.passbook/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Identify the issuing bank from title-page text
    Detect {
        /// Text of the first/last pages
        #[arg(long)]
        title: PathBuf,
    },

    /// Parse statement text into transactions
    Parse {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print totals, monthly breakdown and a quality report
    Report {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Manage ~/.passbook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Full statement text from the PDF/OCR extraction step
    #[arg(long)]
    text: PathBuf,

    /// Title-page text used for bank detection (defaults to the full text)
    #[arg(long)]
    title: Option<PathBuf>,

    /// Skip detection: sbi | sib
    #[arg(long)]
    bank: Option<String>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
    MonthlyCsv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config_file = cli.config.as_deref();

    match cli.command {
        Command::Detect { title } => {
            let bank = classify_bank(&state::read_text(&title)?);
            println!("{}", bank);
            if !bank.is_known() {
                bail!("[{}] {}", IngestError::UnsupportedBank.code(), IngestError::UnsupportedBank);
            }
        }

        Command::Parse { input, format, out } => {
            let parsed = load_statement(&input, config_file)?;
            let rendered = render(&parsed, format)?;
            match out {
                Some(path) => {
                    state::write_output(&path, &rendered)?;
                    println!(
                        "Wrote {} {} transactions to {}",
                        parsed.transactions.len(),
                        parsed.bank,
                        path.display()
                    );
                }
                None => print!("{rendered}"),
            }
        }

        Command::Report { input } => {
            let parsed = load_statement(&input, config_file)?;
            let summary = summarize(&parsed.transactions);
            let months = monthly_summary(&parsed.transactions);
            let quality = quality_report(&parsed.transactions);
            report::print_report(&parsed, &summary, &months, &quality);
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(config_file)?,
            ConfigCommand::Show => {
                let cfg = config::load_config(config_file)?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn load_statement(input: &InputArgs, config_file: Option<&Path>) -> Result<ParsedStatement> {
    let cfg = config::load_config(config_file)?;

    let raw = state::read_text(&input.text)?;
    let text = StatementText::with_min_chars(raw, cfg.text.min_chars)
        .map_err(IngestError::from)
        .map_err(coded)?;

    let bank = match &input.bank {
        Some(code) => Bank::from_code(code).with_context(|| format!("unknown bank code {code:?} (use sbi or sib)"))?,
        None => match &input.title {
            Some(path) => classify_bank(&state::read_text(path)?),
            None => classify_bank(text.as_str()),
        },
    };
    info!("detected bank: {}", bank);

    parse_bank_statement(bank, &text, &cfg.overrides()).map_err(coded)
}

fn coded(e: IngestError) -> anyhow::Error {
    anyhow!("[{}] {}", e.code(), e)
}

fn render(parsed: &ParsedStatement, format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let mut s = serde_json::to_string_pretty(parsed)?;
            s.push('\n');
            Ok(s)
        }
        Format::Csv => {
            let mut buf = Vec::new();
            write_transactions_csv(&mut buf, &parsed.transactions)?;
            String::from_utf8(buf).context("csv output is not utf-8")
        }
        Format::MonthlyCsv => {
            let mut buf = Vec::new();
            write_monthly_csv(&mut buf, &monthly_summary(&parsed.transactions))?;
            String::from_utf8(buf).context("csv output is not utf-8")
        }
    }
}
