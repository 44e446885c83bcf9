//! Use-case error for bet placement.
//!
//! Business-rule rejections keep the wire-compatible response bodies of
//! the public API (`message` / `errors` / `selection_error` shapes),
//! while infrastructure failures fall through to `AppError`'s
//! problem+json rendering. Each rejection kind carries a distinct HTTP
//! status so callers can branch without parsing bodies.

use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use rust_decimal::Decimal;
use serde_json::json;
use thiserror::Error;

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Error, Debug)]
pub enum PlacementError {
    #[error("player {player_id} not found")]
    PlayerNotFound { player_id: i64 },

    #[error("not enough balance to make this bet")]
    InsufficientBalance { balance: Decimal, stake: Decimal },

    #[error("Maximum win amount is {limit}")]
    WinLimitExceeded { max_win: Decimal, limit: Decimal },

    #[error("selection {selection_id}: {message}")]
    Selection { selection_id: i64, message: String },

    #[error(transparent)]
    App(#[from] AppError),
}

impl From<DomainError> for PlacementError {
    fn from(e: DomainError) -> Self {
        Self::App(AppError::from(e))
    }
}

impl ResponseError for PlacementError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::PlayerNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InsufficientBalance { .. } => StatusCode::PAYMENT_REQUIRED,
            Self::WinLimitExceeded { .. } => StatusCode::CONFLICT,
            Self::Selection { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::App(e) => e.status(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = trace_ctx::trace_id();
        match self {
            Self::PlayerNotFound { player_id } => AppError::not_found(
                ErrorCode::PlayerNotFound,
                format!("player {player_id} not found"),
            )
            .error_response(),
            Self::InsufficientBalance { .. } => HttpResponse::PaymentRequired()
                .insert_header(("x-trace-id", trace_id))
                .json(json!({ "message": "not enough balance to make this bet" })),
            Self::WinLimitExceeded { limit, .. } => HttpResponse::Conflict()
                .insert_header(("x-trace-id", trace_id))
                .json(json!({ "errors": format!("Maximum win amount is {limit}") })),
            Self::Selection {
                selection_id,
                message,
            } => HttpResponse::UnprocessableEntity()
                .insert_header(("x-trace-id", trace_id))
                .json(json!({
                    "selection_error": { "id": selection_id, "errors": message }
                })),
            Self::App(e) => e.error_response(),
        }
    }
}
