//! Postgres-backed product store.

use crate::domain::product::{NewProduct, Product, ProductDraft};
use crate::storage::store::{ProductFilter, ProductStore, StoreError};
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// [`ProductStore`] over a sqlx connection pool.
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    /// Connects to Postgres and ensures the `products` table exists.
    ///
    /// The table is created with inline DDL on startup; there is no
    /// migration framework behind it. The CHECK constraint backs the
    /// `price > 0` invariant at the storage layer as well.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                description VARCHAR(500),
                price NUMERIC(18, 2) NOT NULL CHECK (price > 0),
                category VARCHAR(50) NOT NULL,
                created_date TIMESTAMPTZ NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT TRUE
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_where(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let products = match &filter.category {
            Some(category) => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, description, price, category, created_date, is_active \
                     FROM products \
                     WHERE is_active AND lower(category) = lower($1) \
                     ORDER BY name ASC",
                )
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Product>(
                    "SELECT id, name, description, price, category, created_date, is_active \
                     FROM products \
                     WHERE is_active \
                     ORDER BY name ASC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, category, created_date, is_active \
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn insert(&self, new: NewProduct) -> Result<Product, StoreError> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, category, created_date, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id, name, description, price, category, created_date, is_active",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.price)
        .bind(&new.category)
        .bind(new.created_date)
        .bind(new.is_active)
        .fetch_one(&self.pool)
        .await?;
        Ok(product)
    }

    async fn replace(&self, id: i64, fields: &ProductDraft) -> Result<(), StoreError> {
        // created_date is deliberately absent from the SET list: write-once.
        let result = sqlx::query(
            "UPDATE products \
             SET name = $2, description = $3, price = $4, category = $5, is_active = $6 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.category)
        .bind(fields.is_active)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MissingRow);
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
