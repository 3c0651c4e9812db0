#![doc(test(attr(deny(warnings))))]

//! Pennywise Core is the decision engine behind the Pennywise finance client:
//! keyword classification of transactions, budget-alert severities, and
//! date-range presets for list filtering.

pub mod api;
pub mod errors;
pub mod utils;

pub use api::*;
pub use errors::{PennyError, Result};

pub use penny_config::{AlertSettings, Config, ConfigManager};
pub use penny_core::{CategoryAlert, CategoryRegistry, Clock, CoreError, SystemClock};
pub use penny_domain::{
    AlertSeverity, AlertThresholds, Budget, BudgetAlert, Category, DatePreset, DateRange,
    Transaction, TransactionSource,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git = build.git_hash,
            target = build.target,
            "Pennywise Core tracing initialized."
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }

    #[test]
    fn default_filter_covers_service_crates() {
        super::init();
        assert!(tracing::enabled!(
            target: "penny_core::budget_alert_service",
            tracing::Level::WARN
        ));
        assert!(tracing::enabled!(
            target: "penny_core::registry",
            tracing::Level::INFO
        ));
        assert!(tracing::enabled!(
            target: "pennywise_core",
            tracing::Level::INFO
        ));
    }
}
