#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use pennywise_core::{Budget, Transaction, TransactionSource};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(18, 45, 0).expect("valid time")
}

/// A March 2024 statement with a few stragglers outside the month.
pub fn march_statement() -> Vec<Transaction> {
    vec![
        Transaction::new(420.0, "food", at(2024, 3, 1), TransactionSource::Imported)
            .with_description("Your order from Swiggy"),
        Transaction::new(380.0, "food", at(2024, 3, 18), TransactionSource::Imported)
            .with_merchant("Starbucks"),
        Transaction::new(2200.0, "bills", at(2024, 3, 5), TransactionSource::Imported)
            .with_description("Electricity bill paid"),
        Transaction::new(90.0, "transport", at(2024, 3, 22), TransactionSource::Manual)
            .with_description("Metro card top-up"),
        Transaction::new(700.0, "food", at(2024, 2, 27), TransactionSource::Manual),
        Transaction::new(55.0, "snacks-v1", at(2024, 3, 9), TransactionSource::Manual)
            .with_description("vending machine"),
    ]
}

pub fn march_budgets() -> Vec<Budget> {
    vec![
        Budget::new("food", 1000.0),
        Budget::new("bills", 2000.0),
        Budget::new("transport", 1200.0),
    ]
}
