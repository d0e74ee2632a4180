//! Unit of Work pattern implementation.
//!
//! Every use case that writes runs inside exactly one database transaction:
//! the closure receives a `UserStore` bound to the open transaction, which
//! is committed when the closure returns `Ok` and rolled back otherwise.

use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::repository::{UserStore, UserStoreImpl};
use common::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not mockable through `automock` because of the generic method;
/// tests provide a small hand-written implementation instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Execute a closure within a transaction.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                &'a dyn UserStore,
            ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
            + Send,
        T: Send;
}

/// Concrete implementation of UnitOfWork over a SeaORM connection pool
#[derive(Clone)]
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(
                &'a dyn UserStore,
            ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
            + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let result = {
            let store = UserStoreImpl::new(&txn);
            f(&store).await
        };

        match result {
            Ok(value) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Shorthand for running a block against the transactional store.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$store:ident| $body:expr) => {
        $uow.transaction(|$store| Box::pin(async move { $body })).await
    };
}
