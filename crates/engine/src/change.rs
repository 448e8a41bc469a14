//! Change making.
//!
//! Change is paid greedily with $10 bills first, then $5 bills. $20 bills are
//! never handed out. For every denomination the bills collected in the
//! current batch are spent before the ones in the drawer.
//!
//! A $20 bill for a single lemonade owes $15. Greedy would take a $10 and
//! only then find out there is no $5 left, so that case is checked upfront.

use thiserror::Error;

use crate::{Bill, BillCount};

/// Denominations used to pay change, largest first.
const CHANGE_BILLS: [Bill; 2] = [Bill::Ten, Bill::Five];

/// Bills that pay one change amount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePlan {
    /// Taken from the bills collected during the batch.
    pub from_batch: BillCount,
    /// Taken from the persistent drawer.
    pub from_drawer: BillCount,
}

impl ChangePlan {
    /// Total paid out, in dollars.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.from_batch.value() + self.from_drawer.value()
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeError {
    #[error("no $5 bill available for $15 change")]
    NoFiveForFifteen,
    #[error("${remaining} of ${requested} change cannot be paid")]
    Short { requested: u32, remaining: u32 },
}

/// Plans how to pay `change` out of the `batch` pool and the `drawer`.
///
/// Neither tally is modified: applying the plan is up to the caller. A bill
/// is usable as long as either pool still holds one.
pub fn make_change(
    change: u32,
    batch: &BillCount,
    drawer: &BillCount,
) -> Result<ChangePlan, ChangeError> {
    if change == 15 && batch.get(Bill::Five) + drawer.get(Bill::Five) == 0 {
        return Err(ChangeError::NoFiveForFifteen);
    }

    let mut plan = ChangePlan::default();
    let mut remaining = change;
    for bill in CHANGE_BILLS {
        while remaining >= bill.value() {
            if plan.from_batch.get(bill) < batch.get(bill) {
                plan.from_batch.put(bill);
            } else if plan.from_drawer.get(bill) < drawer.get(bill) {
                plan.from_drawer.put(bill);
            } else {
                break;
            }
            remaining -= bill.value();
        }
    }

    if remaining != 0 {
        return Err(ChangeError::Short {
            requested: change,
            remaining,
        });
    }
    Ok(plan)
}
