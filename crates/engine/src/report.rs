//! Sales report.

use crate::DrawerSnapshot;

/// Renders the sales report for `snapshot`:
///
/// ```text
/// Total Lemonades sold so far - 6
/// Total Profit Made - 30
/// Total 5 Bills Remaining - 0
/// Total 10 Bills Remaining - 1
/// Total 20 Bills Remaining - 1
/// ```
///
/// Every line ends with a newline.
pub fn sales_report(snapshot: &DrawerSnapshot) -> String {
    let mut report = format!(
        "Total Lemonades sold so far - {}\nTotal Profit Made - {}\n",
        snapshot.lemonades_sold,
        snapshot.profit()
    );
    for (bill, count) in snapshot.bills.iter() {
        report.push_str(&format!("Total {bill} Bills Remaining - {count}\n"));
    }
    report
}
