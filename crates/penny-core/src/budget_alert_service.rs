//! Maps spend-vs-budget ratios onto alert severities.

use std::cmp::Ordering;

use penny_domain::{
    alert::{AlertThresholds, BudgetAlert},
    budget::Budget,
    date_range::DateRange,
    transaction::Transaction,
};
use serde::Serialize;

use crate::{CoreError, TransactionService};

/// Alert for a single budgeted category over a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAlert {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
    pub alert: BudgetAlert,
}

/// Stateless budget-alert evaluation.
pub struct BudgetAlertService;

impl BudgetAlertService {
    /// Evaluates against the fixed 75 / 90 / 100 percent tiers.
    pub fn evaluate(spent: f64, budget: f64) -> Result<BudgetAlert, CoreError> {
        Self::evaluate_with(spent, budget, &AlertThresholds::default())
    }

    /// Evaluates against caller-supplied tiers with the same inclusive lower bounds.
    ///
    /// A non-positive or non-finite budget, or a negative or non-finite spend, is rejected.
    /// So is any ratio that overflows `f64`; no infinite or NaN percentage reaches display code.
    pub fn evaluate_with(
        spent: f64,
        budget: f64,
        thresholds: &AlertThresholds,
    ) -> Result<BudgetAlert, CoreError> {
        if !budget.is_finite() || budget <= 0.0 {
            tracing::warn!(budget, "rejecting budget evaluation with invalid budget");
            return Err(CoreError::InvalidBudget(budget));
        }
        if !spent.is_finite() || spent < 0.0 {
            tracing::warn!(spent, "rejecting budget evaluation with invalid spend");
            return Err(CoreError::InvalidSpend(spent));
        }
        thresholds
            .validate()
            .map_err(|err| CoreError::InvalidThresholds(err.to_string()))?;

        let percentage = spent * 100.0 / budget;
        if !percentage.is_finite() {
            tracing::warn!(spent, budget, "rejecting budget evaluation with unrepresentable ratio");
            return Err(CoreError::PercentageOverflow { spent, budget });
        }
        Ok(BudgetAlert::new(percentage, thresholds.severity_for(percentage)))
    }

    /// Totals each budget's category spend inside `range` and evaluates it.
    ///
    /// Results are ordered by severity, then percentage, both descending. Budgets with an
    /// unusable amount are skipped.
    pub fn evaluate_budgets(
        budgets: &[Budget],
        transactions: &[Transaction],
        range: &DateRange,
        thresholds: &AlertThresholds,
    ) -> Result<Vec<CategoryAlert>, CoreError> {
        thresholds
            .validate()
            .map_err(|err| CoreError::InvalidThresholds(err.to_string()))?;

        let mut alerts = Vec::with_capacity(budgets.len());
        for budget in budgets {
            let spent = TransactionService::total_spent(
                transactions,
                range,
                Some(budget.category.as_str()),
            );
            match Self::evaluate_with(spent, budget.amount, thresholds) {
                Ok(alert) => alerts.push(CategoryAlert {
                    category: budget.category.clone(),
                    spent,
                    budget: budget.amount,
                    alert,
                }),
                Err(err) => {
                    tracing::warn!(category = %budget.category, %err, "skipping budget");
                }
            }
        }

        alerts.sort_by(|a, b| {
            b.alert.severity.cmp(&a.alert.severity).then_with(|| {
                b.alert
                    .percentage
                    .partial_cmp(&a.alert.percentage)
                    .unwrap_or(Ordering::Equal)
            })
        });
        Ok(alerts)
    }
}
