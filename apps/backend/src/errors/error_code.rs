//! Error codes for the wager backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

/// Centralized error codes for the wager backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Stake amount missing, negative, or with excess precision
    InvalidStake,
    /// Selection odds outside the allowed range or too precise
    InvalidOdds,
    /// Duplicate selection id within one bet request
    DuplicateSelection,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Business Rules
    /// Player balance cannot cover the stake
    InsufficientBalance,
    /// Potential win exceeds the configured limit
    WinLimitExceeded,

    // Resource Not Found
    /// Player not found
    PlayerNotFound,
    /// Bet not found
    BetNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Optimistic lock conflict on the player balance row
    OptimisticLock,
    /// Unique constraint violation (generic 409)
    UniqueViolation,
    /// Foreign key constraint violation (generic 409)
    FkViolation,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Record not found (generic 404 for DB-driven not-found)
    RecordNotFound,
    /// Data corruption detected
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidStake => "INVALID_STAKE",
            Self::InvalidOdds => "INVALID_ODDS",
            Self::DuplicateSelection => "DUPLICATE_SELECTION",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::WinLimitExceeded => "WIN_LIMIT_EXCEEDED",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::BetNotFound => "BET_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",
            Self::Conflict => "CONFLICT",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    #[cfg(test)]
    const ALL: &'static [ErrorCode] = &[
        Self::InvalidStake,
        Self::InvalidOdds,
        Self::DuplicateSelection,
        Self::ValidationError,
        Self::BadRequest,
        Self::InsufficientBalance,
        Self::WinLimitExceeded,
        Self::PlayerNotFound,
        Self::BetNotFound,
        Self::NotFound,
        Self::OptimisticLock,
        Self::UniqueViolation,
        Self::FkViolation,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::RecordNotFound,
        Self::DataCorruption,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
