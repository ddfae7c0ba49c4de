//! orcabem-domain
//!
//! Pure domain models (Transaction, Goal, AlertRule, Settings).
//! No I/O, no services. Only data types and core enums.

pub mod alert;
pub mod goal;
pub mod settings;
pub mod transaction;

pub use alert::*;
pub use goal::*;
pub use settings::*;
pub use transaction::*;
