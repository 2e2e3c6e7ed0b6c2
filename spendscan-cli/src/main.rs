use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::Value;
use spendscan_core::time::current_year;
use spendscan_finance::{StatementBatch, summarize};
use spendscan_ingest::{LayoutRegistry, StatementParser};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod input;
mod output;
mod state;

use config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "spendscan", version, about = "Bank and credit card statement parser")]
struct Cli {
    /// Log parse decisions to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse one or more statements (PDF or extracted text)
    Parse {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Year for MM/DD rows (default: config, then current year)
        #[arg(long)]
        year: Option<i32>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Succeed even when no transactions were found
        #[arg(long)]
        allow_empty: bool,

        /// Append monthly totals, category spend and top merchants
        #[arg(long)]
        insights: bool,
    },

    /// Re-run the categorizer over a JSON transaction list
    Categorize {
        /// JSON file with a top-level "transactions" array, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// List category names in precedence order
    Categories {
        /// Also print each category's keywords
        #[arg(long)]
        keywords: bool,
    },

    /// List supported statement layouts
    Layouts,

    /// Manage ~/.spendscan/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the config file location
    Path,
    /// Print the effective config
    Show,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse {
            files,
            year,
            format,
            allow_empty,
            insights,
        } => {
            let cfg = config::load_config()?;
            let parser = build_parser(&cfg)?;
            let year = year.or(cfg.parse.year).unwrap_or_else(current_year);

            let batch = parse_files(&parser, &files, year)?;
            if !(allow_empty || cfg.output.allow_empty) {
                batch.ensure_not_empty()?;
            }

            let insights = insights.then(|| summarize(&batch.transactions, cfg.output.top_merchants));
            let format = format.unwrap_or(cfg.output.format);
            output::render(&mut io::stdout().lock(), format, &batch, insights.as_ref())?;
        }

        Command::Categorize { input } => {
            let parser = build_parser(&config::load_config()?)?;

            let raw = if input == "-" {
                let mut s = String::new();
                io::stdin().read_to_string(&mut s).context("read stdin")?;
                s
            } else {
                std::fs::read_to_string(&input).with_context(|| format!("read {input}"))?
            };

            let mut doc: Value = serde_json::from_str(&raw).context("parse transactions json")?;
            let Some(Value::Array(txns)) = doc.get_mut("transactions") else {
                bail!("expected a top-level \"transactions\" array");
            };
            let changed = parser.categories().recategorize(txns);
            info!(changed, total = txns.len(), "recategorized transactions");

            println!("{}", serde_json::to_string_pretty(&doc)?);
        }

        Command::Categories { keywords } => {
            let parser = build_parser(&config::load_config()?)?;
            let table = parser.categories();
            if keywords {
                for rule in table.rules() {
                    println!("{}: {}", rule.name, rule.keywords.join(", "));
                }
            } else {
                for name in table.names() {
                    println!("{name}");
                }
            }
        }

        Command::Layouts => {
            let parser = build_parser(&config::load_config()?)?;
            for layout in parser.registry().iter() {
                println!("{} ({:?})", layout.name, layout.kind);
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn build_parser(cfg: &config::Config) -> Result<StatementParser> {
    Ok(StatementParser::new(LayoutRegistry::builtin()?, config::category_table(cfg)?))
}

fn parse_files(parser: &StatementParser, files: &[PathBuf], year: i32) -> Result<StatementBatch> {
    let mut batch = StatementBatch::new();
    for path in files {
        let text = input::read_document(path)?;
        let name = input::source_name(path);
        let statement = parser
            .parse_with_year(&text, year)
            .with_context(|| name.clone())?;
        if statement.transactions.is_empty() {
            warn!(source = name.as_str(), "no transactions found");
        }
        batch.add(name, statement);
    }
    Ok(batch)
}
