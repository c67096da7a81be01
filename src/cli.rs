//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::domain::analysis::{analyze, quote_summary};
use crate::domain::error::ChartscanError;
use crate::domain::ohlcv::validate_bars;
use crate::domain::signal::SignalKind;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "chartscan", about = "OHLCV technical analysis scanner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a symbol and emit a JSON report
    Analyze {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        exchange: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// List available symbols on an exchange
    ListSymbols {
        #[arg(long)]
        exchange: String,
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show data range for a symbol
    Info {
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        exchange: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Analyze {
            config,
            code,
            exchange,
            output,
            pretty,
        } => run_analyze(
            &config,
            code.as_deref(),
            exchange.as_deref(),
            output.as_ref(),
            pretty,
        ),
        Command::ListSymbols { exchange, config } => run_list_symbols(&exchange, &config),
        Command::Info {
            code,
            exchange,
            config,
        } => run_info(code.as_deref(), exchange.as_deref(), &config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn require_key(config: &dyn ConfigPort, section: &str, key: &str) -> Result<String, ChartscanError> {
    config
        .get_string(section, key)
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ChartscanError::ConfigMissing {
            section: section.into(),
            key: key.into(),
        })
}

fn date_key(
    config: &dyn ConfigPort,
    key: &str,
    default: NaiveDate,
) -> Result<NaiveDate, ChartscanError> {
    match config.get_string("data", key) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            ChartscanError::ConfigInvalid {
                section: "data".into(),
                key: key.into(),
                reason: "invalid date format (expected YYYY-MM-DD)".into(),
            }
        }),
        None => Ok(default),
    }
}

fn resolve_symbol(
    config: &dyn ConfigPort,
    code_override: Option<&str>,
    exchange_override: Option<&str>,
) -> Result<(String, String), ChartscanError> {
    let code = match code_override {
        Some(c) => c.trim().to_uppercase(),
        None => require_key(config, "data", "code")?.to_uppercase(),
    };
    let exchange = match exchange_override {
        Some(e) => e.trim().to_uppercase(),
        None => require_key(config, "data", "exchange")?.to_uppercase(),
    };
    Ok((code, exchange))
}

fn data_port(config: &dyn ConfigPort) -> Result<CsvAdapter, ChartscanError> {
    let csv_dir = require_key(config, "data", "csv_dir")?;
    Ok(CsvAdapter::new(PathBuf::from(csv_dir)))
}

fn run_analyze(
    config_path: &PathBuf,
    code_override: Option<&str>,
    exchange_override: Option<&str>,
    output_path: Option<&PathBuf>,
    pretty: bool,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    match run_analyze_inner(&config, code_override, exchange_override, output_path, pretty) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_analyze_inner(
    config: &dyn ConfigPort,
    code_override: Option<&str>,
    exchange_override: Option<&str>,
    output_path: Option<&PathBuf>,
    pretty: bool,
) -> Result<(), ChartscanError> {
    let (code, exchange) = resolve_symbol(config, code_override, exchange_override)?;
    let port = data_port(config)?;

    let start_date = date_key(config, "start_date", NaiveDate::MIN)?;
    let end_date = date_key(config, "end_date", NaiveDate::MAX)?;

    eprintln!("Fetching {}.{} bars...", code, exchange);
    let bars = port.fetch_ohlcv(&code, &exchange, start_date, end_date)?;
    if bars.is_empty() {
        return Err(ChartscanError::NoData { code, exchange });
    }
    validate_bars(&bars)?;

    eprintln!("Analyzing {} bars", bars.len());
    let analysis = analyze(&bars);
    let quote = quote_summary(&bars);

    let buys = analysis
        .signals
        .iter()
        .filter(|s| s.kind == SignalKind::Buy)
        .count();

    eprintln!("\n=== Analysis Summary ===");
    if let Some(q) = &quote {
        eprintln!(
            "Last close:     {:.2} ({:+.2}, {:+.2}%)",
            q.current_price, q.change_dollar, q.change_pct
        );
    }
    eprintln!("Signals:        {} ({} buy)", analysis.signals.len(), buys);
    match &analysis.trade_setup {
        Some(setup) => {
            eprintln!(
                "Trade setup:    {} on {}",
                setup.signal_type, setup.signal_date
            );
            eprintln!("  Buy:          {:.2}", setup.buy_price);
            eprintln!("  Stop Loss:    {:.2}", setup.stop_loss);
            eprintln!("  Take Profit:  {:.2} ({})", setup.take_profit, setup.risk_reward);
        }
        None => eprintln!("Trade setup:    none (no buy signal)"),
    }

    let reporter = JsonReportAdapter::new(pretty);
    match output_path {
        Some(path) => {
            let mut file = File::create(path)?;
            reporter.write(&mut file, &bars, &analysis, quote.as_ref())?;
            eprintln!("\nReport written to: {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            reporter.write(&mut lock, &bars, &analysis, quote.as_ref())?;
            lock.flush()?;
        }
    }

    Ok(())
}

fn run_list_symbols(exchange: &str, config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let result = data_port(&config).and_then(|port| port.list_symbols(exchange));
    match result {
        Ok(symbols) => {
            if symbols.is_empty() {
                eprintln!("No symbols found for exchange {}", exchange);
            } else {
                for symbol in &symbols {
                    println!("{}", symbol);
                }
                eprintln!("{} symbols found", symbols.len());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_info(
    code_override: Option<&str>,
    exchange_override: Option<&str>,
    config_path: &PathBuf,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    type InfoResult = Result<(String, String, Option<(NaiveDate, NaiveDate, usize)>), ChartscanError>;
    let result: InfoResult = (|| {
        let (code, exchange) = resolve_symbol(&config, code_override, exchange_override)?;
        let port = data_port(&config)?;
        let range = port.get_data_range(&code, &exchange)?;
        Ok((code, exchange, range))
    })();

    match result {
        Ok((code, exchange, Some((min_date, max_date, count)))) => {
            println!("{}.{}: {} bars, {} to {}", code, exchange, count, min_date, max_date);
            ExitCode::SUCCESS
        }
        Ok((code, exchange, None)) => {
            eprintln!("{}.{}: no data found", code, exchange);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
