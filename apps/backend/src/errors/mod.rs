//! Error handling for the wager backend.

pub mod domain;
pub mod error_code;
pub mod placement;

pub use domain::DomainError;
pub use error_code::ErrorCode;
pub use placement::PlacementError;
