pub mod error;
pub mod format;
pub mod record;
pub mod registry;
pub mod time_value;
pub mod types;

pub mod deposits;
pub mod investments;
pub mod loans;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
