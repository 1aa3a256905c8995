use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use netrec_rs::commands::{self, SourceOverrides};
use netrec_rs::config::{DatasetFormat, NetrecConfig};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "netrec", version)]
#[command(about = "Look up precomputed networking recommendations by name")]
struct Cli {
    /// Optional path to a netrec.json5 config file applied over the other layers
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Dataset path or http(s) URL, overriding the config
    #[arg(long, global = true)]
    source: Option<String>,
    /// Dataset format, inferred from the location when omitted
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse recommendations in the terminal UI (default)
    Browse,
    /// Print the recommendations for the first matching name
    Find {
        /// Full or partial name, case-insensitive
        query: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert the first sheet of a workbook into the JSON export
    Convert {
        /// Workbook to read (xlsx, xls, xlsb, ods)
        input: PathBuf,
        /// JSON file to write
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    #[value(alias = "xlsx")]
    Spreadsheet,
}

impl From<FormatArg> for DatasetFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => DatasetFormat::Json,
            FormatArg::Spreadsheet => DatasetFormat::Spreadsheet,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    netrec_rs::init_logging();

    let cli = Cli::parse();
    info!(
        "starting netrec (config_set={}, source_set={}, format_set={})",
        cli.config.is_some(),
        cli.source.is_some(),
        cli.format.is_some()
    );

    let overrides = SourceOverrides {
        source: cli.source.clone(),
        format: cli.format.map(DatasetFormat::from),
    };

    match cli.command {
        Some(Commands::Convert { input, output }) => {
            commands::convert(&input, &output, &mut io::stdout())
        }
        Some(Commands::Find { query, json }) => {
            let config = effective_config(cli.config.as_deref(), &overrides)?;
            let loader = commands::build_loader(&config);
            commands::find(&loader, &query, json, &mut io::stdout(), &mut io::stderr()).await
        }
        None | Some(Commands::Browse) => {
            let config = effective_config(cli.config.as_deref(), &overrides)?;
            commands::browse(&config).await
        }
    }
}

fn effective_config(
    runtime_config: Option<&Path>,
    overrides: &SourceOverrides,
) -> anyhow::Result<NetrecConfig> {
    let cwd = std::env::current_dir().context("failed to resolve current working directory")?;
    commands::resolve_config(&cwd, runtime_config, overrides)
}
