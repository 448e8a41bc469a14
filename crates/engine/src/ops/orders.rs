use sea_orm::TransactionTrait;

use crate::{
    BatchOutcome, CustomerOrder, DrawerStore, Engine, EngineError, Rejection, ResultEngine,
    orders::BatchState,
};

impl Engine {
    /// Serves a batch of orders, all or nothing.
    ///
    /// Orders are served by position in line. When every customer gets
    /// lemonade and exact change, the collected bills enter the drawer and
    /// the sales total grows. When any order fails, every bill paid out of
    /// the drawer is put back and the batch is [`BatchOutcome::Rejected`].
    ///
    /// Only storage failures are returned as errors; the transaction is
    /// rolled back in that case.
    pub async fn process_orders(
        &self,
        mut orders: Vec<CustomerOrder>,
    ) -> ResultEngine<BatchOutcome> {
        if orders.is_empty() {
            tracing::debug!("empty batch");
            return Ok(BatchOutcome::Rejected(Rejection::EmptyBatch));
        }
        orders.sort_by_key(|order| order.position_in_line);

        let _writer = self.writer.lock().await;
        let db_tx = self.database.begin().await?;
        let drawer = DrawerStore::new(&db_tx);

        let mut batch = BatchState::default();
        let mut rejection = None;
        for order in &orders {
            let available = drawer.counts().await?;
            let paid_out = match batch.serve(order, &available) {
                Ok(paid_out) => paid_out,
                Err(err) => {
                    rejection = Some(err);
                    break;
                }
            };

            for (bill, count) in paid_out.iter() {
                for _ in 0..count {
                    if !drawer.decrement(bill).await? {
                        return Err(EngineError::InvalidRecord(format!(
                            "no ${bill} bill left in the drawer"
                        )));
                    }
                }
            }
        }

        if let Some(rejection) = rejection {
            drawer.restore(batch.consumed()).await?;
            db_tx.commit().await?;
            tracing::warn!(%rejection, orders = orders.len(), "batch rejected");
            return Ok(BatchOutcome::Rejected(rejection));
        }

        drawer.deposit(batch.collected()).await?;
        drawer.add_lemonades(batch.lemonades()).await?;
        db_tx.commit().await?;

        let receipt = batch.into_receipt();
        tracing::info!(
            orders = orders.len(),
            lemonades = receipt.lemonades,
            pool = %receipt.pool,
            paid_from_drawer = %receipt.paid_from_drawer,
            "batch served"
        );
        Ok(BatchOutcome::Served(receipt))
    }
}
