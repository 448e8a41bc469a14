use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

pub use bills::{Bill, BillCount, UnknownBill};
pub use change::{ChangeError, ChangePlan, make_change};
pub use drawer::{DrawerSnapshot, DrawerStore};
pub use error::EngineError;
pub use orders::{BatchOutcome, BatchReceipt, CustomerOrder, Rejection};
pub use report::sales_report;

mod bill_counts;
mod bills;
mod change;
mod drawer;
mod error;
mod ops;
mod orders;
mod report;
mod sales;

/// Price of one lemonade, in dollars.
pub const LEMONADE_PRICE: u32 = 5;

type ResultEngine<T> = Result<T, EngineError>;

/// The lemonade stand.
///
/// Owns the database holding the drawer. Batches are serialized: only one
/// runs at a time, inside its own database transaction.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    writer: Mutex<()>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`, creating the drawer rows on first startup.
    pub async fn build(self) -> ResultEngine<Engine> {
        DrawerStore::new(&self.database).initialize().await?;
        tracing::debug!("drawer initialized");

        Ok(Engine {
            database: self.database,
            writer: Mutex::new(()),
        })
    }
}
