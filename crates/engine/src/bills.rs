//! Bill denominations and bill tallies.

use std::fmt;

use thiserror::Error;

/// A bill a customer can pay with.
///
/// The stand only accepts $5, $10 and $20 bills. Any other value is rejected
/// when the order is decoded, so the rest of the engine never sees one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bill {
    Five,
    Ten,
    Twenty,
}

impl Bill {
    /// Every accepted denomination, smallest first.
    pub const ALL: [Bill; 3] = [Bill::Five, Bill::Ten, Bill::Twenty];

    /// Face value in dollars.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Bill::Five => 5,
            Bill::Ten => 10,
            Bill::Twenty => 20,
        }
    }

    const fn index(self) -> usize {
        match self {
            Bill::Five => 0,
            Bill::Ten => 1,
            Bill::Twenty => 2,
        }
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A face value that is not an accepted denomination.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown denomination {0}")]
pub struct UnknownBill(pub i64);

impl TryFrom<i64> for Bill {
    type Error = UnknownBill;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Bill::Five),
            10 => Ok(Bill::Ten),
            20 => Ok(Bill::Twenty),
            other => Err(UnknownBill(other)),
        }
    }
}

/// Number of bills held per denomination.
///
/// Used for the batch pool, for the bills a change payment takes and for the
/// drawer snapshot. Every denomination is always present, possibly at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BillCount {
    counts: [u32; 3],
}

impl BillCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `bill`.
    #[must_use]
    pub fn get(&self, bill: Bill) -> u32 {
        self.counts[bill.index()]
    }

    /// Adds one `bill`.
    pub fn put(&mut self, bill: Bill) {
        self.add(bill, 1);
    }

    /// Adds `count` bills of `bill`.
    pub fn add(&mut self, bill: Bill, count: u32) {
        self.counts[bill.index()] += count;
    }

    /// Removes one `bill`. Returns `false`, leaving the tally untouched, when
    /// there is none to remove.
    pub fn take(&mut self, bill: Bill) -> bool {
        let slot = &mut self.counts[bill.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Adds every bill of `other`.
    pub fn merge(&mut self, other: &BillCount) {
        for (bill, count) in other.iter() {
            self.add(bill, count);
        }
    }

    /// Removes every bill of `other`, saturating at zero.
    pub fn subtract(&mut self, other: &BillCount) {
        for (bill, count) in other.iter() {
            let slot = &mut self.counts[bill.index()];
            *slot = slot.saturating_sub(count);
        }
    }

    /// Iterates `(bill, count)` pairs, smallest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (Bill, u32)> + '_ {
        Bill::ALL.into_iter().map(|bill| (bill, self.get(bill)))
    }

    /// Total number of bills.
    #[must_use]
    pub fn len(&self) -> u32 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cash value of all bills, in dollars.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.iter()
            .map(|(bill, count)| u64::from(bill.value()) * u64::from(count))
            .sum()
    }
}

impl FromIterator<Bill> for BillCount {
    fn from_iter<I: IntoIterator<Item = Bill>>(iter: I) -> Self {
        let mut count = BillCount::new();
        for bill in iter {
            count.put(bill);
        }
        count
    }
}

/// Renders the bills as a list, each denomination repeated by its count and
/// the largest denomination first: `[20, 10, 10]`. An empty tally is `[]`.
impl fmt::Display for BillCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for bill in Bill::ALL.into_iter().rev() {
            for _ in 0..self.get(bill) {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{bill}")?;
                first = false;
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepted_values() {
        assert_eq!(Bill::try_from(5).unwrap(), Bill::Five);
        assert_eq!(Bill::try_from(10).unwrap(), Bill::Ten);
        assert_eq!(Bill::try_from(20).unwrap(), Bill::Twenty);
    }

    #[test]
    fn reject_other_values() {
        assert_eq!(Bill::try_from(50), Err(UnknownBill(50)));
        assert_eq!(Bill::try_from(0), Err(UnknownBill(0)));
        assert_eq!(Bill::try_from(-5), Err(UnknownBill(-5)));
    }

    #[test]
    fn take_never_goes_negative() {
        let mut count = BillCount::new();
        assert!(!count.take(Bill::Five));
        count.put(Bill::Five);
        assert!(count.take(Bill::Five));
        assert_eq!(count.get(Bill::Five), 0);
    }

    #[test]
    fn display_largest_first() {
        let count: BillCount = [Bill::Five, Bill::Twenty, Bill::Ten, Bill::Ten]
            .into_iter()
            .collect();
        assert_eq!(count.to_string(), "[20, 10, 10, 5]");
        assert_eq!(BillCount::new().to_string(), "[]");
    }

    #[test]
    fn value_and_len() {
        let mut count = BillCount::new();
        count.add(Bill::Ten, 2);
        count.add(Bill::Twenty, 1);
        assert_eq!(count.len(), 3);
        assert_eq!(count.value(), 40);
    }
}
