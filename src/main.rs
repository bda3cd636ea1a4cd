use anyhow::Result;
use clap::{Parser, Subcommand};
use reqwest::Client;
use staffcsv::{columns, export, fetch, table};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_RECORDS_URL: &str = "http://localhost:5000/api/users/";

#[derive(Parser)]
#[command(
    name = "staffcsv",
    about = "Fetch the staff list and export selected columns as a UTF-8 CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch records and write the selected columns to a CSV file
    Export {
        /// Records endpoint returning a JSON array of staff objects
        #[arg(long, default_value = DEFAULT_RECORDS_URL)]
        url: String,

        /// Comma-separated column keys, in export order (default: all columns)
        #[arg(long)]
        columns: Option<String>,

        /// Output file path
        #[arg(long, default_value = "staff_list.csv")]
        output: PathBuf,
    },
    /// Fetch records and print them as a text table
    Show {
        /// Records endpoint returning a JSON array of staff objects
        #[arg(long, default_value = DEFAULT_RECORDS_URL)]
        url: String,
    },
    /// List the exportable column keys and their header labels
    Columns,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Command::Export {
            url,
            columns: selected,
            output,
        } => {
            // resolve the selection before fetching so bad input fails fast
            let selection = match selected.as_deref() {
                Some(arg) => columns::resolve_selection(&columns::parse_selection_arg(arg))?,
                None => columns::STAFF_COLUMNS.iter().collect(),
            };

            let records = fetch::fetch_staff(&client, &url).await?;
            info!("fetched {} records from {}", records.len(), url);

            let csv = export::render_csv(&records, &selection)?;
            export::write_csv(&output, &csv)?;
            info!(
                "exported {} columns x {} rows to {}",
                selection.len(),
                records.len(),
                output.display()
            );
        }

        Command::Show { url } => {
            let records = fetch::fetch_staff(&client, &url).await?;
            info!("fetched {} records from {}", records.len(), url);
            print!("{}", table::render_table(&records, columns::STAFF_COLUMNS));
        }

        Command::Columns => {
            for col in columns::STAFF_COLUMNS {
                println!("{:<17} {}", col.key, col.label);
            }
        }
    }

    Ok(())
}
