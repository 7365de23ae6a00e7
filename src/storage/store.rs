//! Record-store contract for product rows.
//!
//! The service layer only ever talks to `dyn ProductStore`; the Postgres
//! implementation lives in [`crate::storage::postgres`].

use crate::domain::product::{NewProduct, Product, ProductDraft};
use async_trait::async_trait;
use thiserror::Error;

/// Failure signals a store implementation may raise.
///
/// `MissingRow` and `Conflict` are outcomes the service layer reacts to;
/// `Backend` is opaque and surfaced uniformly regardless of cause
/// (connection loss, constraint violation, serialization).
#[derive(Debug, Error)]
pub enum StoreError {
    /// `replace` targeted an id with no row behind it.
    #[error("no row with the requested id")]
    MissingRow,
    /// The backend's native concurrency check rejected a stale write.
    #[error("concurrent modification rejected by the store")]
    Conflict,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.into())
    }
}

/// Row filter for [`ProductStore::list_where`].
///
/// Listings are always restricted to active rows and ordered by `name`
/// ascending; `category` adds a case-insensitive equality match.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list_where(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError>;

    /// Looks the row up by id regardless of its active flag.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// Inserts a new row and returns it with the store-assigned id.
    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError>;

    /// Overwrites every mutable column of the row identified by `id`.
    /// `created_date` is write-once and is never touched.
    async fn replace(&self, id: i64, fields: &ProductDraft) -> Result<(), StoreError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError>;

    /// Cheap liveness probe backing the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
