pub mod analytics;
pub mod error;
pub mod optimization;
pub mod sampling;
pub mod simulation;
pub mod tables;
pub mod types;

pub use error::RiskQuantError;
pub use types::*;

/// Standard result type for all risk quantification operations
pub type RiskQuantResult<T> = Result<T, RiskQuantError>;
