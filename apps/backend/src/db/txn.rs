use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Boxed future returned by `with_txn` closures.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'a>>;

/// A transaction shared across several requests, injected through request
/// extensions. Whoever opens it owns commit/rollback.
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    pub async fn open(conn: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = conn.begin().await?;
        Ok(Self(Arc::new(txn)))
    }

    pub fn from_req(req: &HttpRequest) -> Option<Self> {
        req.extensions().get::<SharedTxn>().cloned()
    }

    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Roll back if this is the last handle; otherwise the transaction rolls
    /// back when the remaining handles drop.
    pub async fn rollback(self) -> Result<(), DbErr> {
        match Arc::try_unwrap(self.0) {
            Ok(txn) => txn.rollback().await,
            Err(_still_shared) => Ok(()),
        }
    }
}

/// Execute a closure within a database transaction.
///
/// 1) A `SharedTxn` in request extensions is used as-is (no commit/rollback here)
/// 2) Otherwise a transaction is begun, the policy applied on Ok, rolled back on Err
pub async fn with_txn<R, F>(
    req: Option<&HttpRequest>,
    state: &AppState,
    f: F,
) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> TxnFuture<'t, R>,
{
    // Clone out of extensions before awaiting to avoid holding a RefCell borrow.
    let shared = req.and_then(SharedTxn::from_req);
    if let Some(shared) = shared {
        return f(shared.transaction()).await;
    }

    let txn = require_db(state)?.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            match txn_policy::current() {
                txn_policy::TxnPolicy::CommitOnOk => txn.commit().await?,
                txn_policy::TxnPolicy::RollbackOnOk => txn.rollback().await?,
            }
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
