pub mod corpus;
pub mod error;
pub mod swp;
pub mod time_value;
pub mod types;

pub use error::RetireError;
pub use types::*;

/// Standard result type for all retire-core operations
pub type RetireResult<T> = Result<T, RetireError>;
