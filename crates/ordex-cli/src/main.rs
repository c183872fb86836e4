mod export;
mod source;
mod state;
mod view;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ordex_core::{AppConfig, CsvSchema, OrderRecord};
use ordex_scraper::ScrapeOptions;
use tracing_subscriber::EnvFilter;

use crate::source::OrderSource;
use crate::state::PopupState;

#[derive(Debug, Parser)]
#[command(name = "ordex-cli")]
#[command(about = "Extract Amazon order history and export it as CSV")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Page input shared by every command.
#[derive(Debug, clap::Args)]
struct PageArgs {
    /// Saved order-history page (HTML) to read
    #[arg(long)]
    page: PathBuf,

    /// Send the page to a running ordex-server instead of scraping in-process
    #[arg(long)]
    server: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load orders from a page and print the order list
    Scrape {
        #[command(flatten)]
        page: PageArgs,

        /// Print the orders as JSON instead of the list view
        #[arg(long)]
        json: bool,
    },
    /// Export orders from a page to a CSV file
    Export {
        #[command(flatten)]
        page: PageArgs,

        /// Directory to write into (defaults to ORDEX_EXPORT_DIR)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// CSV column layout: detailed (v2) or summary (v1)
        #[arg(long)]
        schema: Option<CsvSchema>,
    },
    /// Export orders from a page to Google Drive
    Upload {
        #[command(flatten)]
        page: PageArgs,

        /// CSV column layout: detailed (v2) or summary (v1)
        #[arg(long)]
        schema: Option<CsvSchema>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let config = ordex_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape { page, json } => {
            let state = load(&page, &config).await;
            if json {
                if let PopupState::Ready(orders) = &state {
                    println!("{}", serde_json::to_string_pretty(orders)?);
                    return Ok(ExitCode::SUCCESS);
                }
            }
            print!("{}", view::render_order_list(&state));
            Ok(exit_code(&state))
        }
        Commands::Export {
            page,
            out_dir,
            schema,
        } => {
            let Some(orders) = load_or_report(&page, &config).await else {
                return Ok(ExitCode::FAILURE);
            };
            let out_dir = out_dir.unwrap_or_else(|| config.export_dir.clone());
            let schema = schema.unwrap_or(config.csv_schema);
            match export::export_to_dir(&orders, schema, &out_dir) {
                Ok(path) => {
                    println!("{}: {}", export::EXPORT_SUCCESS, path.display());
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("{err}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Upload { page, schema } => {
            let Some(orders) = load_or_report(&page, &config).await else {
                return Ok(ExitCode::FAILURE);
            };
            let schema = schema.unwrap_or(config.csv_schema);
            match export::upload_to_drive(&orders, schema, &config).await {
                Ok(file_id) => {
                    println!("{} (Drive file id {file_id})", export::EXPORT_SUCCESS);
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("{err}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// Runs one load cycle: `Loading`, then `Ready` or `Error`.
async fn load(args: &PageArgs, config: &AppConfig) -> PopupState {
    let source = OrderSource {
        page: args.page.clone(),
        server: args.server.clone(),
    };
    let options = ScrapeOptions::from_config(config);

    eprint!("{}", view::render_order_list(&PopupState::Loading));
    tracing::debug!(page = %args.page.display(), "loading orders");
    let state = PopupState::from(source.load(&options, config.http_timeout_secs).await);
    tracing::info!(heading = %state.heading(), items = state.total_items(), "order load finished");
    state
}

async fn load_or_report(args: &PageArgs, config: &AppConfig) -> Option<Vec<OrderRecord>> {
    match load(args, config).await {
        PopupState::Ready(orders) => Some(orders),
        other => {
            eprint!("{}", view::render_order_list(&other));
            None
        }
    }
}

fn exit_code(state: &PopupState) -> ExitCode {
    if state.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
