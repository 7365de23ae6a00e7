//! The request-handling core: six operations, each exactly one store
//! interaction, each returning a discriminated outcome the transport layer
//! maps to a status code. Nothing in this module knows about HTTP.

use crate::domain::product::{FieldViolation, NewProduct, Product, ProductDraft, UpdateProduct};
use crate::storage::store::{ProductFilter, ProductStore, StoreError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a catalog operation.
///
/// `Validation` never reaches storage; `NotFound` is a domain outcome, not a
/// failure of the store; `Storage` is any store failure, surfaced uniformly
/// with no retry.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("validation failed")]
    Validation(Vec<FieldViolation>),
    #[error("product not found")]
    NotFound,
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    /// The store handle is injected here; there is no ambient connection
    /// state anywhere in the crate.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// All active products, name ascending.
    pub async fn list_active(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.list_where(&ProductFilter::default()).await?)
    }

    /// Active products whose category matches case-insensitively. An empty
    /// match is a success, not an error.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let filter = ProductFilter {
            category: Some(category.to_string()),
        };
        Ok(self.store.list_where(&filter).await?)
    }

    /// The active product with this id. Soft-deleted rows are treated as
    /// absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Product, CatalogError> {
        match self.store.find_by_id(id).await? {
            Some(product) if product.is_active => Ok(product),
            _ => Err(CatalogError::NotFound),
        }
    }

    /// Validates the draft and inserts it. The server owns `created_date`
    /// and forces `is_active = true`, whatever the caller sent.
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        draft.validate().map_err(CatalogError::Validation)?;

        let new = NewProduct {
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            created_date: Utc::now(),
            is_active: true,
        };
        Ok(self.store.insert(new).await?)
    }

    /// Overwrites the mutable fields of row `id`. The payload must agree on
    /// the target id; that check and field validation both happen before any
    /// storage access.
    pub async fn update(&self, id: i64, payload: UpdateProduct) -> Result<(), CatalogError> {
        if payload.id != id {
            return Err(CatalogError::Validation(vec![FieldViolation::new(
                "id",
                format!("payload id {} does not match route id {}", payload.id, id),
            )]));
        }
        payload.fields.validate().map_err(CatalogError::Validation)?;

        match self.store.replace(id, &payload.fields).await {
            Ok(()) => Ok(()),
            Err(StoreError::MissingRow) => Err(CatalogError::NotFound),
            Err(StoreError::Conflict) => {
                // Stale write: only "the row was deleted under us" maps to
                // not-found; a conflict on a still-present row propagates.
                if self.store.exists_by_id(id).await? {
                    Err(CatalogError::Storage(StoreError::Conflict))
                } else {
                    Err(CatalogError::NotFound)
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Soft delete: flips `is_active` off and persists the row. Deleting an
    /// already-inactive row succeeds again (idempotent in effect).
    pub async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let Some(product) = self.store.find_by_id(id).await? else {
            return Err(CatalogError::NotFound);
        };

        let fields = ProductDraft {
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            is_active: false,
        };
        match self.store.replace(id, &fields).await {
            Ok(()) => Ok(()),
            // The row can only vanish if something stomped it between the
            // lookup and the write.
            Err(StoreError::MissingRow) => Err(CatalogError::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    /// Store reachability, for the health endpoint.
    pub async fn ping_store(&self) -> Result<(), CatalogError> {
        Ok(self.store.ping().await?)
    }
}
