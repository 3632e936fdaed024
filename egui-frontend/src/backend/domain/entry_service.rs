//! Appending months to the entry sequence.
//!
//! A new month derives its calendar month from the previous entry (or the
//! configured start month when the table is empty) and its allocations from
//! the default template, rescaled so the buckets sum to the current income
//! targets.

use log::info;
use shared::{next_month, Allocation, IncomeTargets, Month, MonthlyEntry};
use uuid::Uuid;

/// Build the next entry for the sequence. Balance fields are left at zero;
/// the caller re-projects the whole sequence after appending.
pub fn build_next_entry(
    entries: &[MonthlyEntry],
    targets: &IncomeTargets,
    start_month: &str,
) -> MonthlyEntry {
    let month: Month = match entries.last() {
        Some(last) => next_month(&last.month),
        None => start_month.to_string(),
    };
    let alloc = Allocation::default().scaled_to(targets.total());

    info!(
        "Appending month {} with total income {:.0}",
        month,
        targets.total()
    );

    MonthlyEntry {
        id: Uuid::new_v4().to_string(),
        month,
        stipend: targets.stipend,
        side_income: targets.side,
        debt_repayment: alloc.debt_repayment,
        savings: alloc.savings,
        emergency: alloc.emergency,
        fixed_costs: alloc.fixed_costs,
        variable_costs: alloc.variable_costs,
        skills: alloc.skills,
        charity: alloc.charity,
        debt_cc: 0.0,
        debt_brother: 0.0,
        debt_student: 0.0,
        savings_bal: 0.0,
        invest_bal: 0.0,
        emergency_bal: 0.0,
    }
}
