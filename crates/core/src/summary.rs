//! Derived income/expense/savings aggregation.
//!
//! A pure function from (expense list, salary, time window, now) to a
//! summary record. Callers recompute on demand; nothing is cached. The
//! whole computation is a single O(n) pass.

use std::collections::BTreeMap;

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::month_start;
use finbook_shared::Category;

/// Relative time window over expense dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    /// No filtering.
    #[default]
    #[serde(rename = "all")]
    All,
    /// Within the calendar month containing `now`.
    #[serde(rename = "month")]
    Month,
    /// Dated on or after `now` minus three months.
    #[serde(rename = "3months")]
    ThreeMonths,
    /// Dated on or after `now` minus six months.
    #[serde(rename = "6months")]
    SixMonths,
    /// Dated on or after `now` minus twelve months.
    #[serde(rename = "year")]
    Year,
}

impl TimeWindow {
    /// Whether `date` falls inside this window, relative to `now`.
    ///
    /// The `month` window is bounded on both ends; the rolling windows have
    /// an open upper bound, so future-dated expenses are included.
    #[must_use]
    pub fn contains(self, now: DateTime<Utc>, date: DateTime<Utc>) -> bool {
        match self {
            Self::All => true,
            Self::Month => {
                let start = month_start(now);
                let end = start
                    .checked_add_months(Months::new(1))
                    .unwrap_or(DateTime::<Utc>::MAX_UTC);
                date >= start && date < end
            }
            Self::ThreeMonths => date >= cutoff(now, 3),
            Self::SixMonths => date >= cutoff(now, 6),
            Self::Year => date >= cutoff(now, 12),
        }
    }
}

fn cutoff(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// One expense as seen by the aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// Expense date.
    pub date: DateTime<Utc>,
    /// Expense amount.
    pub amount: Decimal,
    /// Expense category.
    pub category: Category,
}

/// Derived financial summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Current salary, or zero when unset.
    pub total_income: Decimal,
    /// Sum of amounts over the filtered expenses.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`; negative when overspent.
    pub savings: Decimal,
    /// Per-category sums; only categories with at least one match appear.
    pub category_totals: BTreeMap<Category, Decimal>,
}

/// Computes the summary for `expenses` under `window`.
///
/// `salary` is the current monthly salary, with zero standing in for
/// "no salary set".
#[must_use]
pub fn compute(
    expenses: &[ExpenseRecord],
    salary: Decimal,
    window: TimeWindow,
    now: DateTime<Utc>,
) -> Summary {
    let mut total_expenses = Decimal::ZERO;
    let mut category_totals: BTreeMap<Category, Decimal> = BTreeMap::new();

    for expense in expenses
        .iter()
        .filter(|e| window.contains(now, e.date))
    {
        total_expenses += expense.amount;
        *category_totals
            .entry(expense.category)
            .or_insert(Decimal::ZERO) += expense.amount;
    }

    Summary {
        total_income: salary,
        total_expenses,
        savings: salary - total_expenses,
        category_totals,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use proptest::prelude::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn expense(date: &str, amount: Decimal, category: Category) -> ExpenseRecord {
        ExpenseRecord {
            date: utc(date),
            amount,
            category,
        }
    }

    #[test]
    fn test_month_window_keeps_only_current_month() {
        let now = utc("2024-03-15T12:00:00Z");
        let expenses = vec![
            expense("2024-03-01T09:00:00Z", dec!(30), Category::Housing),
            expense("2024-02-28T09:00:00Z", dec!(99), Category::Housing),
        ];

        let summary = compute(&expenses, dec!(1000), TimeWindow::Month, now);

        assert_eq!(summary.total_expenses, dec!(30));
        assert_eq!(summary.savings, dec!(970));
        assert_eq!(summary.category_totals[&Category::Housing], dec!(30));
    }

    #[test]
    fn test_savings_can_go_negative() {
        let now = utc("2024-03-15T12:00:00Z");
        let expenses = vec![expense(
            "2024-03-10T12:00:00Z",
            dec!(1500),
            Category::Shopping,
        )];

        let summary = compute(&expenses, dec!(1000), TimeWindow::All, now);

        assert_eq!(summary.savings, dec!(-500));
    }

    #[test]
    fn test_zero_salary_means_zero_income() {
        let summary = compute(&[], Decimal::ZERO, TimeWindow::All, utc("2024-03-15T12:00:00Z"));
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expenses, Decimal::ZERO);
        assert_eq!(summary.savings, Decimal::ZERO);
        assert!(summary.category_totals.is_empty());
    }

    #[test]
    fn test_only_matched_categories_appear() {
        let now = utc("2024-03-15T12:00:00Z");
        let expenses = vec![
            expense("2024-03-01T09:00:00Z", dec!(4.5), Category::FoodAndDining),
            expense("2024-03-02T09:00:00Z", dec!(2.5), Category::FoodAndDining),
            expense("2023-01-01T09:00:00Z", dec!(80), Category::Utilities),
        ];

        let summary = compute(&expenses, dec!(0), TimeWindow::Month, now);

        assert_eq!(summary.category_totals.len(), 1);
        assert_eq!(summary.category_totals[&Category::FoodAndDining], dec!(7));
    }

    #[rstest]
    #[case(TimeWindow::ThreeMonths, 3)]
    #[case(TimeWindow::SixMonths, 6)]
    #[case(TimeWindow::Year, 12)]
    fn test_rolling_windows_are_inclusive_at_the_cutoff(
        #[case] window: TimeWindow,
        #[case] months: u32,
    ) {
        let now = utc("2024-06-15T12:00:00Z");
        let boundary = now.checked_sub_months(Months::new(months)).unwrap();

        assert!(window.contains(now, boundary));
        assert!(!window.contains(now, boundary - Duration::seconds(1)));
        // Open upper bound: future dates stay in.
        assert!(window.contains(now, now + Duration::days(30)));
    }

    #[rstest]
    #[case("\"all\"", TimeWindow::All)]
    #[case("\"month\"", TimeWindow::Month)]
    #[case("\"3months\"", TimeWindow::ThreeMonths)]
    #[case("\"6months\"", TimeWindow::SixMonths)]
    #[case("\"year\"", TimeWindow::Year)]
    fn test_window_wire_names(#[case] json: &str, #[case] expected: TimeWindow) {
        let parsed: TimeWindow = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected);
    }

    proptest! {
        #[test]
        fn prop_category_totals_sum_to_total_expenses(
            entries in proptest::collection::vec(
                (0i64..400, 0i64..1_000_000, 0usize..Category::ALL.len()),
                0..64,
            ),
            salary_cents in 0i64..100_000_000,
        ) {
            let now = utc("2024-06-15T12:00:00Z");
            let expenses: Vec<ExpenseRecord> = entries
                .iter()
                .map(|&(days_ago, cents, category)| ExpenseRecord {
                    date: now - Duration::days(days_ago),
                    amount: Decimal::new(cents, 2),
                    category: Category::ALL[category],
                })
                .collect();
            let salary = Decimal::new(salary_cents, 2);

            for window in [
                TimeWindow::All,
                TimeWindow::Month,
                TimeWindow::ThreeMonths,
                TimeWindow::SixMonths,
                TimeWindow::Year,
            ] {
                let summary = compute(&expenses, salary, window, now);
                let sum: Decimal = summary.category_totals.values().copied().sum();
                prop_assert_eq!(sum, summary.total_expenses);
                prop_assert_eq!(
                    summary.savings,
                    summary.total_income - summary.total_expenses
                );
            }
        }
    }
}
