use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("Category registry has no catch-all `other` entry")]
    MissingCatchAll,
    #[error("Catch-all category must be the last registry entry")]
    CatchAllNotLast,
    #[error("Catch-all category must not declare keywords")]
    CatchAllHasKeywords,
    #[error("Budget amount must be a positive number, got {0}")]
    InvalidBudget(f64),
    #[error("Spent amount must be zero or positive, got {0}")]
    InvalidSpend(f64),
    #[error("Spend of {spent} against budget {budget} is too large to express as a percentage")]
    PercentageOverflow { spent: f64, budget: f64 },
    #[error("Invalid alert thresholds: {0}")]
    InvalidThresholds(String),
}
