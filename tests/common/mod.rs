//! Shared test fixtures: an in-memory `ProductStore`.
#![allow(dead_code)]

use async_trait::async_trait;
use product_catalog_api::{
    NewProduct, Product, ProductDraft, ProductFilter, ProductStore, StoreError,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Mutex;

/// Mutex-guarded map standing in for the products table.
///
/// Listing applies the same semantics as the Postgres store: active rows
/// only, case-insensitive category match, name ascending. `replace` can be
/// armed to report a one-shot concurrency conflict so the stale-write paths
/// are reachable without a real database.
pub struct MemoryProductStore {
    rows: Mutex<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
    conflict_on_replace: AtomicBool,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            conflict_on_replace: AtomicBool::new(false),
        }
    }

    /// Arms the next `replace` call to fail with `StoreError::Conflict`.
    pub fn inject_replace_conflict(&self) {
        self.conflict_on_replace.store(true, Ordering::SeqCst);
    }

    /// Simulates a concurrent physical delete.
    pub fn remove_row(&self, id: i64) {
        self.rows.lock().unwrap().remove(&id);
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_where(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let rows = self.rows.lock().unwrap();
        let mut products: Vec<Product> = rows
            .values()
            .filter(|p| p.is_active)
            .filter(|p| match &filter.category {
                Some(category) => p.category.to_lowercase() == category.to_lowercase(),
                None => true,
            })
            .cloned()
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            created_date: new.created_date,
            is_active: new.is_active,
        };
        self.rows.lock().unwrap().insert(id, product.clone());
        Ok(product)
    }

    async fn replace(&self, id: i64, fields: &ProductDraft) -> Result<(), StoreError> {
        if self.conflict_on_replace.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Conflict);
        }
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.get_mut(&id) else {
            return Err(StoreError::MissingRow);
        };
        row.name = fields.name.clone();
        row.description = fields.description.clone();
        row.price = fields.price;
        row.category = fields.category.clone();
        row.is_active = fields.is_active;
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// A valid draft with the given name/price/category and no description.
pub fn draft(name: &str, price: &str, category: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: None,
        price: price.parse().expect("test price must parse"),
        category: category.to_string(),
        is_active: true,
    }
}
