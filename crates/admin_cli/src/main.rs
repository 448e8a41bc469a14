use std::{
    error::Error,
    io::Write,
    path::{Path, PathBuf},
};

use api_types::order::OrderBatch;
use clap::{Parser, Subcommand};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    style::Print,
    terminal,
    terminal::ClearType,
};
use engine::{BatchOutcome, CustomerOrder, Engine, Rejection};
use migration::MigratorTrait;
use sea_orm::{Database, DatabaseConnection};

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Parser, Debug)]
#[command(name = "lemonade_admin")]
#[command(about = "Admin utilities for the lemonade stand drawer")]
struct Cli {
    /// Database connection string (also read from `DATABASE_URL`).
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./lemonade.db?mode=rwc"
    )]
    database_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sales report.
    Report,
    /// Process a batch of orders read from a JSON file.
    Process {
        /// File holding a JSON array of orders.
        file: PathBuf,
    },
    /// Empty the drawer and zero the sales total.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, BoxError> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Asks a yes/no question, answered with a single key press.
fn confirm(prompt: &str) -> Result<bool, BoxError> {
    let _raw = RawModeGuard::enter()?;

    let mut out = std::io::stderr();
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(prompt),
        Print(" [y/N] ")
    )?;
    out.flush()?;

    let answer = loop {
        let Event::Key(KeyEvent { code, .. }) = event::read()? else {
            continue;
        };

        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => break true,
            KeyCode::Char(_) | KeyCode::Enter | KeyCode::Esc => break false,
            _ => {}
        }
    };

    execute!(out, Print(if answer { "y\r\n" } else { "n\r\n" }))?;
    out.flush()?;
    Ok(answer)
}

fn read_batch(file: &Path) -> Result<Result<Vec<CustomerOrder>, Rejection>, BoxError> {
    let raw = std::fs::read_to_string(file)?;
    let batch: OrderBatch = serde_json::from_str(&raw)?;
    Ok(server::batch_orders(batch))
}

async fn connect_db(database_url: &str) -> Result<DatabaseConnection, BoxError> {
    let db = Database::connect(database_url).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let db = connect_db(&cli.database_url).await?;
    let engine = Engine::builder().database(db).build().await?;

    match cli.command {
        Command::Report => {
            print!("{}", engine.report().await?);
        }
        Command::Process { file } => {
            let outcome = match read_batch(&file)? {
                Ok(orders) => engine.process_orders(orders).await?,
                Err(rejection) => BatchOutcome::Rejected(rejection),
            };
            if let BatchOutcome::Rejected(rejection) = &outcome {
                eprintln!("batch rejected: {rejection}");
            }

            println!("{outcome}\n");
            print!("{}", engine.report().await?);
        }
        Command::Reset { yes } => {
            if !yes && !confirm("Empty the drawer and zero the sales total?")? {
                eprintln!("aborted");
                std::process::exit(1);
            }

            engine.reset().await?;
            println!("drawer reset");
        }
    }

    Ok(())
}
