use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar month in `"YYYY-MM"` form, e.g. `"2025-08"`.
pub type Month = String;

/// One recorded month: income, the seven allocation buckets, and the
/// running balances as of this entry (filled in by projection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEntry {
    /// Opaque unique identifier (UUID v4).
    pub id: String,
    /// Calendar month this entry covers.
    pub month: Month,
    /// Primary monthly income.
    pub stipend: f64,
    /// Secondary monthly income.
    pub side_income: f64,
    /// Amount put toward debt this month (split across debts in priority order).
    pub debt_repayment: f64,
    /// Amount added to investments.
    pub savings: f64,
    /// Amount added to the emergency fund.
    pub emergency: f64,
    pub fixed_costs: f64,
    pub variable_costs: f64,
    pub skills: f64,
    pub charity: f64,
    /// Credit card debt remaining after this entry.
    #[serde(rename = "debtCC")]
    pub debt_cc: f64,
    /// Brother loan remaining after this entry.
    pub debt_brother: f64,
    /// Student loan remaining after this entry.
    pub debt_student: f64,
    /// Carried through projection untouched; kept for file compatibility.
    pub savings_bal: f64,
    /// Investment balance after this entry.
    pub invest_bal: f64,
    /// Emergency fund balance after this entry.
    pub emergency_bal: f64,
}

impl MonthlyEntry {
    /// The running balances stored on this entry, as a snapshot.
    pub fn snapshot(&self) -> BalanceSnapshot {
        BalanceSnapshot {
            debt_cc: self.debt_cc,
            debt_brother: self.debt_brother,
            debt_student: self.debt_student,
            savings_bal: self.savings_bal,
            invest_bal: self.invest_bal,
            emergency_bal: self.emergency_bal,
        }
    }

    /// Store a snapshot's balances on this entry.
    pub fn apply_snapshot(&mut self, snapshot: &BalanceSnapshot) {
        self.debt_cc = snapshot.debt_cc;
        self.debt_brother = snapshot.debt_brother;
        self.debt_student = snapshot.debt_student;
        self.savings_bal = snapshot.savings_bal;
        self.invest_bal = snapshot.invest_bal;
        self.emergency_bal = snapshot.emergency_bal;
    }

    /// Net worth as of this entry: assets minus outstanding debt.
    pub fn net_worth(&self) -> f64 {
        self.invest_bal + self.emergency_bal
            - (self.debt_cc + self.debt_brother + self.debt_student)
    }
}

/// The six running account balances at a point in the entry sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    #[serde(rename = "debtCC")]
    pub debt_cc: f64,
    pub debt_brother: f64,
    pub debt_student: f64,
    pub savings_bal: f64,
    pub invest_bal: f64,
    pub emergency_bal: f64,
}

impl BalanceSnapshot {
    pub fn total_debt(&self) -> f64 {
        self.debt_cc + self.debt_brother + self.debt_student
    }
}

impl Default for BalanceSnapshot {
    /// The starting balances: the three opening debts, nothing saved yet.
    fn default() -> Self {
        Self {
            debt_cc: 300_000.0,
            debt_brother: 400_000.0,
            debt_student: 1_200_000.0,
            savings_bal: 0.0,
            invest_bal: 0.0,
            emergency_bal: 0.0,
        }
    }
}

/// Expected monthly income, used when a new month is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeTargets {
    pub stipend: f64,
    pub side: f64,
}

impl IncomeTargets {
    pub fn total(&self) -> f64 {
        self.stipend + self.side
    }
}

impl Default for IncomeTargets {
    fn default() -> Self {
        Self {
            stipend: 143_000.0,
            side: 100_000.0,
        }
    }
}

/// How a month's income is split across the seven buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub debt_repayment: f64,
    pub savings: f64,
    pub emergency: f64,
    pub fixed_costs: f64,
    pub variable_costs: f64,
    pub skills: f64,
    pub charity: f64,
}

impl Allocation {
    pub fn total(&self) -> f64 {
        self.debt_repayment
            + self.savings
            + self.emergency
            + self.fixed_costs
            + self.variable_costs
            + self.skills
            + self.charity
    }

    /// Rescale every bucket by the same ratio so the total matches
    /// `total_income`, rounding each bucket to the nearest whole rupee.
    pub fn scaled_to(&self, total_income: f64) -> Allocation {
        let sum = self.total();
        if sum == 0.0 || sum == total_income {
            return self.clone();
        }
        let ratio = total_income / sum;
        Allocation {
            debt_repayment: (self.debt_repayment * ratio).round(),
            savings: (self.savings * ratio).round(),
            emergency: (self.emergency * ratio).round(),
            fixed_costs: (self.fixed_costs * ratio).round(),
            variable_costs: (self.variable_costs * ratio).round(),
            skills: (self.skills * ratio).round(),
            charity: (self.charity * ratio).round(),
        }
    }
}

impl Default for Allocation {
    /// The default monthly split (sums to 240 000).
    fn default() -> Self {
        Self {
            debt_repayment: 60_000.0,
            savings: 48_000.0,
            emergency: 12_000.0,
            fixed_costs: 72_000.0,
            variable_costs: 24_000.0,
            skills: 12_000.0,
            charity: 12_000.0,
        }
    }
}

/// Everything the dashboard persists and exports, as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardState {
    pub rows: Vec<MonthlyEntry>,
    pub balances: BalanceSnapshot,
    pub income_targets: IncomeTargets,
    pub start_month: Month,
}

pub const DEFAULT_START_MONTH: &str = "2025-08";

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            balances: BalanceSnapshot::default(),
            income_targets: IncomeTargets::default(),
            start_month: DEFAULT_START_MONTH.to_string(),
        }
    }
}

/// The month after `month`, rolling over year boundaries
/// (`"2025-12"` -> `"2026-01"`). A month that does not parse is
/// returned unchanged.
pub fn next_month(month: &str) -> Month {
    match NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d") {
        Ok(date) => (date + Months::new(1)).format("%Y-%m").to_string(),
        Err(_) => month.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_month_within_year() {
        assert_eq!(next_month("2025-08"), "2025-09");
    }

    #[test]
    fn test_next_month_year_rollover() {
        assert_eq!(next_month("2025-12"), "2026-01");
    }

    #[test]
    fn test_next_month_malformed_input_unchanged() {
        assert_eq!(next_month("garbage"), "garbage");
    }

    #[test]
    fn test_allocation_scaling_preserves_ratio() {
        let scaled = Allocation::default().scaled_to(480_000.0);
        // Twice the default total, so every bucket doubles exactly.
        assert_eq!(scaled.debt_repayment, 120_000.0);
        assert_eq!(scaled.savings, 96_000.0);
        assert_eq!(scaled.charity, 24_000.0);
    }

    #[test]
    fn test_allocation_scaling_noop_when_total_matches() {
        let alloc = Allocation::default();
        assert_eq!(alloc.scaled_to(alloc.total()), alloc);
    }

    #[test]
    fn test_default_starting_debt() {
        let balances = BalanceSnapshot::default();
        assert_eq!(balances.total_debt(), 1_900_000.0);
    }

    #[test]
    fn test_entry_serializes_with_original_field_names() {
        let entry = MonthlyEntry {
            id: "test-id".to_string(),
            month: "2025-08".to_string(),
            stipend: 143_000.0,
            side_income: 100_000.0,
            debt_repayment: 60_000.0,
            savings: 48_000.0,
            emergency: 12_000.0,
            fixed_costs: 72_000.0,
            variable_costs: 24_000.0,
            skills: 12_000.0,
            charity: 12_000.0,
            debt_cc: 240_000.0,
            debt_brother: 400_000.0,
            debt_student: 1_200_000.0,
            savings_bal: 0.0,
            invest_bal: 48_000.0,
            emergency_bal: 12_000.0,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["sideIncome"], 100_000.0);
        assert_eq!(json["debtRepayment"], 60_000.0);
        assert_eq!(json["debtCC"], 240_000.0);
        assert_eq!(json["investBal"], 48_000.0);
    }

    #[test]
    fn test_dashboard_state_round_trips() {
        let state = DashboardState::default();
        let json = serde_json::to_string(&state).unwrap();
        let back: DashboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
