//! Sequence-wide totals for the summary cards.

use shared::{BalanceSnapshot, MonthlyEntry};

/// Totals across every entry, plus the current net worth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of stipend and side income across all entries.
    pub income: f64,
    /// Sum of all seven allocation buckets across all entries.
    pub outflow: f64,
    /// Net worth as of the latest entry, or minus the starting debt when
    /// no entries exist.
    pub net_worth: f64,
}

pub fn aggregate(entries: &[MonthlyEntry], base: &BalanceSnapshot) -> Totals {
    let income = entries
        .iter()
        .map(|e| e.stipend + e.side_income)
        .sum::<f64>();
    let outflow = entries
        .iter()
        .map(|e| {
            e.debt_repayment
                + e.savings
                + e.emergency
                + e.fixed_costs
                + e.variable_costs
                + e.skills
                + e.charity
        })
        .sum::<f64>();
    let net_worth = match entries.last() {
        Some(last) => last.net_worth(),
        None => -base.total_debt(),
    };

    Totals {
        income,
        outflow,
        net_worth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::{entry_service, projector};
    use shared::IncomeTargets;

    #[test]
    fn test_net_worth_with_no_entries_is_minus_starting_debt() {
        let totals = aggregate(&[], &BalanceSnapshot::default());
        assert_eq!(totals.net_worth, -1_900_000.0);
        assert_eq!(totals.income, 0.0);
        assert_eq!(totals.outflow, 0.0);
    }

    #[test]
    fn test_totals_sum_every_entry() {
        let base = BalanceSnapshot::default();
        let targets = IncomeTargets::default();
        let mut rows = vec![entry_service::build_next_entry(&[], &targets, "2025-08")];
        rows.push(entry_service::build_next_entry(&rows, &targets, "2025-08"));
        let rows = projector::project(&rows, 0, &base);

        let totals = aggregate(&rows, &base);

        assert_eq!(totals.income, 2.0 * targets.total());
        // Allocations were rescaled to match income exactly, modulo
        // per-bucket rounding.
        assert!((totals.outflow - totals.income).abs() < 7.0);
        // Net worth comes from the latest entry's stored balances.
        assert_eq!(totals.net_worth, rows[1].net_worth());
    }
}
