//! Customer orders and the per-batch bookkeeping.

use std::fmt;

use thiserror::Error;

use crate::{Bill, BillCount, LEMONADE_PRICE, change::ChangeError};

/// A customer waiting in line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CustomerOrder {
    pub bill: Bill,
    pub position_in_line: i64,
    pub requested_lemonades: u32,
}

impl CustomerOrder {
    pub fn new(bill: Bill, position_in_line: i64, requested_lemonades: u32) -> Self {
        Self {
            bill,
            position_in_line,
            requested_lemonades,
        }
    }

    /// Price of the order, in dollars.
    #[must_use]
    pub fn cost(&self) -> u64 {
        u64::from(self.requested_lemonades) * u64::from(LEMONADE_PRICE)
    }
}

/// Why a batch was turned down.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("batch has no orders")]
    EmptyBatch,
    #[error("batch contains a missing order")]
    MissingOrder,
    #[error("customer at position {position} asked for no lemonade")]
    NoLemonades { position: i64 },
    #[error("customer at position {position} paid ${paid} for ${cost}")]
    Underpaid { position: i64, paid: u32, cost: u64 },
    #[error("customer at position {position} cannot get change: {source}")]
    NoChange { position: i64, source: ChangeError },
}

/// A committed batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchReceipt {
    /// Bills collected during the batch and not handed back as change.
    pub pool: BillCount,
    /// Bills paid out of the drawer as change.
    pub paid_from_drawer: BillCount,
    pub lemonades: u64,
}

/// Result of processing a batch.
///
/// `Display` renders the wire form: the batch pool (see [`BillCount`]) when
/// served, the literal `null` otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BatchOutcome {
    Served(BatchReceipt),
    Rejected(Rejection),
}

impl BatchOutcome {
    pub fn is_served(&self) -> bool {
        matches!(self, BatchOutcome::Served(_))
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchOutcome::Served(receipt) => receipt.pool.fmt(f),
            BatchOutcome::Rejected(_) => f.write_str("null"),
        }
    }
}

/// Transient state of one batch.
#[derive(Debug, Default)]
pub(crate) struct BatchState {
    collected: BillCount,
    consumed: BillCount,
    lemonades: u64,
}

impl BatchState {
    /// Serves `order`, given the bills currently in the `drawer`.
    ///
    /// The tendered bill joins the batch pool before change is made, so it
    /// can already be handed back. Returns the bills that must leave the
    /// drawer; they are counted as consumed.
    pub(crate) fn serve(
        &mut self,
        order: &CustomerOrder,
        drawer: &BillCount,
    ) -> Result<BillCount, Rejection> {
        let position = order.position_in_line;
        if order.requested_lemonades == 0 {
            return Err(Rejection::NoLemonades { position });
        }

        let cost = order.cost();
        let paid = order.bill.value();
        if u64::from(paid) < cost {
            return Err(Rejection::Underpaid {
                position,
                paid,
                cost,
            });
        }
        // `cost` is at most `paid` here, so the difference fits.
        let change = paid - cost as u32;

        self.collected.put(order.bill);

        let mut from_drawer = BillCount::new();
        if change > 0 {
            let plan = crate::change::make_change(change, &self.collected, drawer)
                .map_err(|source| Rejection::NoChange { position, source })?;
            self.collected.subtract(&plan.from_batch);
            self.consumed.merge(&plan.from_drawer);
            from_drawer = plan.from_drawer;
        }

        self.lemonades += u64::from(order.requested_lemonades);
        Ok(from_drawer)
    }

    pub(crate) fn collected(&self) -> &BillCount {
        &self.collected
    }

    pub(crate) fn consumed(&self) -> &BillCount {
        &self.consumed
    }

    pub(crate) fn lemonades(&self) -> u64 {
        self.lemonades
    }

    pub(crate) fn into_receipt(self) -> BatchReceipt {
        BatchReceipt {
            pool: self.collected,
            paid_from_drawer: self.consumed,
            lemonades: self.lemonades,
        }
    }
}
