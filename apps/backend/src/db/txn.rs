use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseTransaction, TransactionTrait};

use super::txn_policy;
use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A shared transaction wrapper that can be injected into request extensions.
///
/// Tests open one transaction, seed data through it, inject it into the
/// request, and assert through it afterwards; nothing commits, so each
/// test leaves the database untouched.
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    /// Begin a transaction on the given connection and wrap it for sharing.
    pub async fn open(db: &sea_orm::DatabaseConnection) -> Result<Self, AppError> {
        let txn = db.begin().await?;
        Ok(Self(Arc::new(txn)))
    }

    /// Get a reference to the underlying database transaction
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }
}

/// Execute a function within a database transaction.
///
/// 1) If a SharedTxn is in request extensions → use it (no commit/rollback here)
/// 2) Otherwise → begin a txn, run the closure, apply the process policy on
///    Ok / rollback on Err. The boundary is released on every exit path.
///
/// Generic over the error type so use-case errors (e.g. `PlacementError`)
/// flow through unchanged; infrastructure failures enter as `AppError`.
pub async fn with_txn<R, E, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, E>
where
    E: From<AppError>,
    F: for<'c> FnOnce(
        &'c DatabaseTransaction,
    ) -> Pin<Box<dyn Future<Output = Result<R, E>> + 'c>>,
{
    // Extract any SharedTxn out of request extensions *before* awaiting to
    // avoid holding a RefCell borrow.
    let shared_txn: Option<SharedTxn> = if let Some(r) = req {
        r.extensions().get::<SharedTxn>().cloned()
    } else {
        None
    };

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let db = require_db(state).map_err(E::from)?;
    let txn = db.begin().await.map_err(|e| E::from(AppError::from(e)))?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await.map_err(|e| E::from(AppError::from(e)))?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await.map_err(|e| E::from(AppError::from(e)))?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
