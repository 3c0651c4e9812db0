//! penny-domain
//!
//! Pure domain models (Category, Transaction, Budget, alerts, date ranges).
//! No I/O, no logging, no registry state. Only data types and core enums.

pub mod alert;
pub mod budget;
pub mod category;
pub mod date_range;
pub mod transaction;

pub use alert::*;
pub use budget::*;
pub use category::*;
pub use date_range::*;
pub use transaction::*;
