//! CLI entry point for the capmap report generator.
//!
//! Logs go to stderr; `json` and `table` write machine-readable JSON to stdout.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use capmap_core::ReportConfig;
use capmap_report::{Column, Report, ReportGenerator, SortOrder};

#[derive(Parser)]
#[command(name = "capmap")]
#[command(about = "Business capability graph report: interactive network plus node table")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Input CSV path, or `-` for stdin (overrides config).
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Config file prefix (default: capmap).
    #[arg(short, long, default_value = "capmap", global = true)]
    config: String,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Write the standalone HTML report.
    Html {
        /// Output path (overrides config).
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print network payload, table rows, stats and fingerprint as JSON.
    Json,
    /// Print one page of the node table as JSON.
    Table {
        /// Case-insensitive substring filter.
        #[arg(long)]
        search: Option<String>,
        /// Column to sort by: name, category, definition, degree, closeness.
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending.
        #[arg(long)]
        desc: bool,
        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if cli.log_json {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    }

    let mut config = ReportConfig::load(&cli.config)?;
    if let Some(input) = &cli.input {
        config.input_path = input.clone();
    }

    let generator = ReportGenerator::new(config);
    let report = load_report(&generator)?;

    match cli.command {
        Command::Html { output } => {
            let cfg = generator.config();
            let path = output.unwrap_or_else(|| cfg.output_path.clone());
            report.write_html(&path, &cfg.title)?;
            eprintln!("Wrote {} ({})", path, report.fingerprint);
        }
        Command::Json => {
            println!("{}", serde_json::to_string(&report)?);
        }
        Command::Table {
            search,
            sort,
            desc,
            page,
        } => {
            let column = sort.as_deref().map(str::parse::<Column>).transpose()?;
            let order = if desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            let page = report.table.query(search.as_deref(), column, order, page)?;
            println!("{}", serde_json::to_string(&page)?);
        }
    }

    Ok(())
}

fn load_report(generator: &ReportGenerator) -> anyhow::Result<Report> {
    let input = &generator.config().input_path;
    let report = if input == "-" {
        generator.generate_from_reader(std::io::stdin().lock())?
    } else {
        generator.generate()?
    };
    tracing::debug!(
        nodes = report.stats.total_nodes,
        edges = report.stats.total_edges,
        "Report ready"
    );
    Ok(report)
}
