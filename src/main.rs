use branchbook::application::commands::{Outcome, execute};
use branchbook::application::service::BankService;
use branchbook::domain::bank::Bank;
use branchbook::domain::ports::RecordStoreBox;
use branchbook::infrastructure::file::FileRecordStore;
use branchbook::infrastructure::in_memory::InMemoryRecordStore;
use branchbook::interfaces::csv::command_reader::CommandReader;
use branchbook::interfaces::csv::statement_writer::StatementWriter;
use branchbook::interfaces::json::write_snapshot;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command script (CSV with header `command, branch, customer, amount`)
    input: PathBuf,

    /// Brand name of the bank
    #[arg(long, default_value = "Lloyds Bank")]
    bank_name: String,

    /// Directory for customer and transaction files. Kept in memory if omitted.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Format of the final statement written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let store: RecordStoreBox = match cli.data_dir {
        Some(dir) => {
            log::info!("writing records under {}", dir.display());
            Box::new(FileRecordStore::new(dir))
        }
        None => Box::new(InMemoryRecordStore::new()),
    };
    let service = BankService::new(Bank::new(cli.bank_name), store);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command in reader.commands() {
        match command {
            Ok(command) => match execute(&service, &command).await {
                Ok(Outcome::Done) => {}
                Ok(outcome) => print!("{outcome}"),
                Err(e) => eprintln!("Error processing command: {}", e),
            },
            Err(e) => {
                eprintln!("Error reading command: {}", e);
            }
        }
    }

    let bank = service.snapshot().await;
    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => StatementWriter::new(stdout.lock())
            .write_statement(&bank)
            .into_diagnostic()?,
        OutputFormat::Json => write_snapshot(stdout.lock(), &bank).into_diagnostic()?,
    }

    Ok(())
}
