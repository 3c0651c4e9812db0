//! Transaction snapshots read from the external data store.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    /// Category id; may be stale or unknown to the registry.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
    pub date: NaiveDateTime,
    pub source: TransactionSource,
}

impl Transaction {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        date: NaiveDateTime,
        source: TransactionSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            description: None,
            merchant: None,
            date,
            source,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = Some(merchant.into());
        self
    }

    /// Calendar date of the transaction, dropping the time of day.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Splits the free text into the (text, merchant) pair the classifier consumes.
    /// A missing description becomes an empty string.
    pub fn search_parts(&self) -> (&str, Option<&str>) {
        (
            self.description.as_deref().unwrap_or(""),
            self.merchant.as_deref(),
        )
    }
}

/// How a transaction entered the data store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSource {
    Manual,
    Imported,
}

impl fmt::Display for TransactionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionSource::Manual => "manual",
            TransactionSource::Imported => "imported",
        };
        f.write_str(label)
    }
}
