pub mod error;
pub mod types;

#[cfg(feature = "mortgage")]
pub mod mortgage;

#[cfg(feature = "display")]
pub mod display;

pub use error::EstateCalcError;
pub use types::*;

/// Standard result type for all estate-calc operations
pub type EstateCalcResult<T> = Result<T, EstateCalcError>;
