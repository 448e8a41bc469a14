use sea_orm::TransactionTrait;

use crate::{DrawerSnapshot, DrawerStore, Engine, ResultEngine, sales_report};

impl Engine {
    /// Current drawer counts and sales total.
    pub async fn snapshot(&self) -> ResultEngine<DrawerSnapshot> {
        DrawerStore::new(&self.database).snapshot().await
    }

    /// Sales report for the current drawer, see [`sales_report`].
    pub async fn report(&self) -> ResultEngine<String> {
        Ok(sales_report(&self.snapshot().await?))
    }

    /// Empties the drawer and zeroes the sales total.
    pub async fn reset(&self) -> ResultEngine<()> {
        let _writer = self.writer.lock().await;
        let db_tx = self.database.begin().await?;
        let drawer = DrawerStore::new(&db_tx);
        drawer.clear().await?;
        drawer.initialize().await?;
        db_tx.commit().await?;

        tracing::info!("drawer reset");
        Ok(())
    }
}
