//! penny-core
//!
//! Classification, lookup, budget-alert, and date-range services.
//! Depends on penny-domain. No storage, no network, no terminal I/O.

pub mod budget_alert_service;
pub mod category_service;
pub mod date_range_service;
pub mod error;
pub mod registry;
pub mod time;
pub mod transaction_service;


pub use budget_alert_service::*;
pub use category_service::*;
pub use date_range_service::*;
pub use error::CoreError;
pub use registry::{registry, CategoryRegistry};
pub use time::{Clock, SystemClock};
pub use transaction_service::*;
