//! Read-only helpers over transaction snapshots supplied by the data store.

use penny_domain::{category::Category, date_range::DateRange, transaction::Transaction};

use crate::{CategoryRegistry, CategoryService};

pub struct TransactionService;

impl TransactionService {
    /// Suggests a category from the transaction's description and merchant.
    pub fn suggest_for<'r>(
        registry: &'r CategoryRegistry,
        transaction: &Transaction,
    ) -> Option<&'r Category> {
        let (text, merchant) = transaction.search_parts();
        CategoryService::suggest(registry, text, merchant)
    }

    /// The category to render for a transaction, falling back to the catch-all for stale ids.
    pub fn display_category<'r>(
        registry: &'r CategoryRegistry,
        transaction: &Transaction,
    ) -> &'r Category {
        CategoryService::display_of(registry, Some(transaction.category.as_str()))
    }

    /// Transactions dated inside `range`, optionally restricted to one category id.
    pub fn filter<'t>(
        transactions: &'t [Transaction],
        range: &DateRange,
        category: Option<&str>,
    ) -> Vec<&'t Transaction> {
        transactions
            .iter()
            .filter(|txn| range.contains(txn.day()))
            .filter(|txn| category.map_or(true, |id| txn.category == id))
            .collect()
    }

    pub fn total_spent(
        transactions: &[Transaction],
        range: &DateRange,
        category: Option<&str>,
    ) -> f64 {
        Self::filter(transactions, range, category)
            .into_iter()
            .map(|txn| txn.amount)
            .sum()
    }
}
