use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use followgraph::export::{self, ExportData, ExportFormat};
use followgraph::parser::{self, LoadReport};
use followgraph::scc::{KosarajuDetector, SccDetector};

#[derive(Parser)]
#[command(name = "followgraph")]
#[command(version)]
#[command(about = "Social follow graph analyzer with strongly connected components", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print who follows whom
    Adjacency {
        /// Path to the graph file
        #[arg(short, long)]
        path: PathBuf,

        /// Output format: json, csv, markdown
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute strongly connected components
    Scc {
        /// Path to the graph file
        #[arg(short, long)]
        path: PathBuf,

        /// Output format: json, csv, markdown
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Adjacency {
            path,
            format,
            output,
        }) => {
            let report = load(&path)?;
            let data = ExportData::adjacency(&report.graph);
            write_output(format, &data, output.as_deref())
        }
        Some(Commands::Scc {
            path,
            format,
            output,
        }) => {
            let report = load(&path)?;
            let partition = KosarajuDetector
                .compute_scc(&report.graph.snapshot())
                .context("graph integrity check failed")?;
            tracing::info!(
                components = partition.len(),
                cyclic = partition.nontrivial().count(),
                "component analysis complete"
            );
            let data = ExportData::new(&report.graph, &partition);
            write_output(format, &data, output.as_deref())
        }
        Some(Commands::Version) => {
            println!("followgraph v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("followgraph - Social follow graph analyzer");
            println!("Run 'followgraph scc --path graph.json' to compute components");
            println!("Run 'followgraph --help' for more information");
            Ok(())
        }
    }
}

/// Loads a graph file, logging every declaration that was skipped.
fn load(path: &Path) -> Result<LoadReport> {
    let report = parser::load_file(path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;

    for warning in &report.warnings {
        if warning.is_informational() {
            tracing::info!(user = warning.user(), "{}", warning);
        } else {
            tracing::warn!(user = warning.user(), "{}", warning);
        }
    }
    tracing::info!(
        users = report.graph.node_count(),
        follows = report.graph.edge_count(),
        skipped = report.warnings.len(),
        "loaded graph"
    );

    Ok(report)
}

fn write_output(format: ExportFormat, data: &ExportData, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export::export(format, data, &mut writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), %format, "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export::export(format, data, &mut writer)?;
        }
    }
    Ok(())
}
