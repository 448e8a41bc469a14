//! The module contains the cash drawer store.
//!
//! The drawer keeps how many bills of each denomination the stand holds and
//! how many lemonades it sold so far. It knows nothing about batches: callers
//! decide when to open a transaction and what to undo.

use sea_orm::{ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, prelude::*, sea_query::Expr};

use crate::{Bill, BillCount, EngineError, LEMONADE_PRICE, ResultEngine, bill_counts, sales};

/// Frozen view of the drawer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawerSnapshot {
    pub bills: BillCount,
    pub lemonades_sold: u64,
}

impl DrawerSnapshot {
    /// Profit made so far, in dollars. Derived from the lemonades sold.
    #[must_use]
    pub fn profit(&self) -> u64 {
        self.lemonades_sold * u64::from(LEMONADE_PRICE)
    }
}

/// Drawer operations over a connection or an open transaction.
#[derive(Debug)]
pub struct DrawerStore<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DrawerStore<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the missing rows: one per denomination at zero and the sales
    /// total at zero. Existing rows are left alone.
    pub async fn initialize(&self) -> ResultEngine<()> {
        for bill in Bill::ALL {
            let row = bill_counts::Entity::find_by_id(denomination(bill))
                .one(self.db)
                .await?;
            if row.is_none() {
                bill_counts::ActiveModel {
                    denomination: ActiveValue::Set(denomination(bill)),
                    count: ActiveValue::Set(0),
                }
                .insert(self.db)
                .await?;
            }
        }

        if self.sales_row().await?.is_none() {
            sales::ActiveModel {
                id: ActiveValue::NotSet,
                total_lemonades: ActiveValue::Set(0),
            }
            .insert(self.db)
            .await?;
        }
        Ok(())
    }

    /// Current number of `bill`, 0 when the row is missing.
    pub async fn count(&self, bill: Bill) -> ResultEngine<u32> {
        bill_counts::Entity::find_by_id(denomination(bill))
            .one(self.db)
            .await?
            .map(|row| count_of(&row))
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Current number of bills for every denomination.
    pub async fn counts(&self) -> ResultEngine<BillCount> {
        let rows = bill_counts::Entity::find().all(self.db).await?;
        let mut counts = BillCount::new();
        for row in rows {
            let bill = Bill::try_from(i64::from(row.denomination))
                .map_err(|err| EngineError::InvalidRecord(err.to_string()))?;
            counts.add(bill, count_of(&row)?);
        }
        Ok(counts)
    }

    /// Adds one `bill` to the drawer.
    pub async fn increment(&self, bill: Bill) -> ResultEngine<()> {
        self.increment_by(bill, 1).await
    }

    /// Takes one `bill` out of the drawer. Does nothing and returns `false`
    /// when there is none left.
    pub async fn decrement(&self, bill: Bill) -> ResultEngine<bool> {
        let result = bill_counts::Entity::update_many()
            .col_expr(
                bill_counts::Column::Count,
                Expr::col(bill_counts::Column::Count).sub(1),
            )
            .filter(bill_counts::Column::Denomination.eq(denomination(bill)))
            .filter(bill_counts::Column::Count.gt(0))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    /// Adds every bill of `bills` to the drawer.
    pub async fn deposit(&self, bills: &BillCount) -> ResultEngine<()> {
        for (bill, count) in bills.iter().filter(|(_, count)| *count > 0) {
            self.increment_by(bill, count).await?;
        }
        Ok(())
    }

    /// Puts back bills taken out with [`decrement`](Self::decrement).
    pub async fn restore(&self, consumed: &BillCount) -> ResultEngine<()> {
        self.deposit(consumed).await
    }

    /// Adds `lemonades` to the sales total.
    pub async fn add_lemonades(&self, lemonades: u64) -> ResultEngine<()> {
        let lemonades = i64::try_from(lemonades)
            .map_err(|_| EngineError::InvalidRecord(format!("{lemonades} lemonades")))?;

        match self.sales_row().await? {
            Some(row) => {
                sales::Entity::update_many()
                    .col_expr(
                        sales::Column::TotalLemonades,
                        Expr::col(sales::Column::TotalLemonades).add(lemonades),
                    )
                    .filter(sales::Column::Id.eq(row.id))
                    .exec(self.db)
                    .await?;
            }
            None => {
                sales::ActiveModel {
                    id: ActiveValue::NotSet,
                    total_lemonades: ActiveValue::Set(lemonades),
                }
                .insert(self.db)
                .await?;
            }
        }
        Ok(())
    }

    /// Lemonades sold so far, 0 when the sales row is missing.
    pub async fn lemonades_sold(&self) -> ResultEngine<u64> {
        let Some(row) = self.sales_row().await? else {
            return Ok(0);
        };
        u64::try_from(row.total_lemonades).map_err(|_| {
            EngineError::InvalidRecord(format!("sales total {}", row.total_lemonades))
        })
    }

    pub async fn snapshot(&self) -> ResultEngine<DrawerSnapshot> {
        Ok(DrawerSnapshot {
            bills: self.counts().await?,
            lemonades_sold: self.lemonades_sold().await?,
        })
    }

    /// Deletes every drawer and sales row.
    pub async fn clear(&self) -> ResultEngine<()> {
        bill_counts::Entity::delete_many().exec(self.db).await?;
        sales::Entity::delete_many().exec(self.db).await?;
        Ok(())
    }

    async fn increment_by(&self, bill: Bill, count: u32) -> ResultEngine<()> {
        let result = bill_counts::Entity::update_many()
            .col_expr(
                bill_counts::Column::Count,
                Expr::col(bill_counts::Column::Count).add(i64::from(count)),
            )
            .filter(bill_counts::Column::Denomination.eq(denomination(bill)))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            bill_counts::ActiveModel {
                denomination: ActiveValue::Set(denomination(bill)),
                count: ActiveValue::Set(i64::from(count)),
            }
            .insert(self.db)
            .await?;
        }
        Ok(())
    }

    async fn sales_row(&self) -> ResultEngine<Option<sales::Model>> {
        Ok(sales::Entity::find()
            .order_by_desc(sales::Column::Id)
            .one(self.db)
            .await?)
    }
}

fn denomination(bill: Bill) -> i32 {
    bill.value() as i32
}

fn count_of(row: &bill_counts::Model) -> ResultEngine<u32> {
    u32::try_from(row.count).map_err(|_| {
        EngineError::InvalidRecord(format!("{} bills of {}", row.count, row.denomination))
    })
}
