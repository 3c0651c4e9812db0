//! Stable, public-facing functions over the process-wide category registry.
//!
//! Screens, alert banners, and filter bars call these without touching the
//! service layer directly. Every function is pure and safe to call from any thread.

use chrono::NaiveDateTime;
use penny_config::Config;
use penny_core::{
    registry, BudgetAlertService, CategoryAlert, CategoryService, DateRangeService, SystemClock,
    TransactionService,
};
use penny_domain::{
    alert::BudgetAlert,
    budget::Budget,
    category::Category,
    date_range::{DatePreset, DateRange},
    transaction::Transaction,
};

use crate::Result;

/// Suggests a category id from free text plus an optional merchant name.
pub fn suggest_category(text: &str, merchant: Option<&str>) -> Option<&'static str> {
    CategoryService::suggest_id(registry(), text, merchant)
}

/// Suggests a category id for a stored transaction.
pub fn suggest_category_for(transaction: &Transaction) -> Option<&'static str> {
    TransactionService::suggest_for(registry(), transaction).map(|category| category.id.as_str())
}

/// Every registered category, in classifier priority order, catch-all last.
pub fn categories() -> &'static [Category] {
    registry().categories()
}

pub fn get_category_by_id(id: &str) -> Option<&'static Category> {
    CategoryService::by_id(registry(), id)
}

/// Display name for `id`; unknown ids render as the catch-all ("Other").
pub fn get_category_name(id: &str) -> &'static str {
    CategoryService::name_of(registry(), id)
}

/// Icon for `id`; unknown ids render with the catch-all icon.
pub fn get_category_icon(id: &str) -> &'static str {
    CategoryService::icon_of(registry(), id)
}

/// Evaluates spend against a budget using the fixed 75 / 90 / 100 percent tiers.
pub fn evaluate_budget(spent: f64, budget: f64) -> Result<BudgetAlert> {
    Ok(BudgetAlertService::evaluate(spent, budget)?)
}

/// Resolves a preset anchored at `now`, or at the local wall clock when `now` is absent.
pub fn resolve_date_range(preset: DatePreset, now: Option<NaiveDateTime>) -> DateRange {
    match now {
        Some(now) => DateRangeService::resolve(preset, now),
        None => DateRangeService::resolve_now(preset, &SystemClock),
    }
}

/// Parses a preset key such as `"last3Months"` and resolves it.
pub fn resolve_date_range_key(key: &str, now: Option<NaiveDateTime>) -> Result<DateRange> {
    let preset: DatePreset = key.parse()?;
    Ok(resolve_date_range(preset, now))
}

/// Budget alerts for the user's default period, honouring their alert preferences.
///
/// Returns no entries when alerts are disabled.
pub fn budget_alerts(
    config: &Config,
    budgets: &[Budget],
    transactions: &[Transaction],
    now: Option<NaiveDateTime>,
) -> Result<Vec<CategoryAlert>> {
    if !config.alerts.enabled {
        return Ok(Vec::new());
    }
    let range = resolve_date_range(config.default_date_preset, now);
    Ok(BudgetAlertService::evaluate_budgets(
        budgets,
        transactions,
        &range,
        &config.alerts.thresholds,
    )?)
}
