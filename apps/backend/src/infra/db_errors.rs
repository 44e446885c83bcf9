//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it here, and higher
//! layers map `DomainError` to `AppError` via `From`.

use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// True if the message points at the (bet_id, selection_id) unique index,
/// in either the sqlite or the postgres spelling.
fn is_duplicate_selection(msg: &str) -> bool {
    msg.contains("bet_selections.selection_id")
        || msg.contains("bet_selections_bet_id_selection_id_key")
}

fn is_fk_violation(msg: &str) -> bool {
    msg.contains("FOREIGN KEY constraint failed")
        || msg.contains("violates foreign key constraint")
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("PLAYER_NOT_FOUND:") => {
            if let Some(player_id_str) = msg.strip_prefix("PLAYER_NOT_FOUND:") {
                if let Ok(player_id) = player_id_str.parse::<i64>() {
                    warn!(trace_id = %trace_id, player_id, "Player not found");
                    return DomainError::not_found(
                        NotFoundKind::Player,
                        format!("Player {player_id} not found"),
                    );
                }
            }
            return DomainError::not_found(NotFoundKind::Player, "Player not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with("OPTIMISTIC_LOCK:") => {
            if let Some(json_str) = msg.strip_prefix("OPTIMISTIC_LOCK:") {
                #[derive(serde::Deserialize)]
                struct LockInfo {
                    expected: i32,
                    actual: i32,
                }

                if let Ok(info) = serde_json::from_str::<LockInfo>(json_str) {
                    warn!(
                        trace_id = %trace_id,
                        expected = info.expected,
                        actual = info.actual,
                        "Optimistic lock conflict detected"
                    );
                    return DomainError::conflict(
                        ConflictKind::OptimisticLock,
                        format!(
                            "Balance was modified concurrently (expected version {}, actual version {})",
                            info.expected, info.actual
                        ),
                    );
                }
            }
            warn!(trace_id = %trace_id, "Optimistic lock conflict detected (version info unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "Row was modified by another transaction; please retry",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if is_duplicate_selection(&error_msg) {
        return DomainError::conflict(ConflictKind::DuplicateSelection, "Duplicate selection found");
    }
    if is_fk_violation(&error_msg) {
        return DomainError::conflict(
            ConflictKind::Other("ForeignKey".into()),
            "Referenced record does not exist",
        );
    }

    warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unmapped database error");
    DomainError::infra(InfraErrorKind::Other("Db".into()), "Database error")
}

#[cfg(test)]
mod tests {
    use super::map_db_err;
    use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

    #[test]
    fn optimistic_lock_payload_is_parsed() {
        let err = sea_orm::DbErr::Custom("OPTIMISTIC_LOCK:{\"expected\":3,\"actual\":4}".into());
        match map_db_err(err) {
            DomainError::Conflict(ConflictKind::OptimisticLock, detail) => {
                assert!(detail.contains("expected version 3"));
                assert!(detail.contains("actual version 4"));
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn player_not_found_payload_carries_id() {
        let err = sea_orm::DbErr::Custom("PLAYER_NOT_FOUND:42".into());
        match map_db_err(err) {
            DomainError::NotFound(NotFoundKind::Player, detail) => {
                assert!(detail.contains("42"));
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn sqlite_unique_violation_maps_to_duplicate_selection() {
        let err = sea_orm::DbErr::Exec(sea_orm::RuntimeErr::Internal(
            "UNIQUE constraint failed: bet_selections.bet_id, bet_selections.selection_id".into(),
        ));
        assert!(matches!(
            map_db_err(err),
            DomainError::Conflict(ConflictKind::DuplicateSelection, _)
        ));
    }

    #[test]
    fn postgres_unique_violation_maps_to_duplicate_selection() {
        let err = sea_orm::DbErr::Exec(sea_orm::RuntimeErr::Internal(
            "duplicate key value violates unique constraint \"bet_selections_bet_id_selection_id_key\"".into(),
        ));
        assert!(matches!(
            map_db_err(err),
            DomainError::Conflict(ConflictKind::DuplicateSelection, _)
        ));
    }
}
