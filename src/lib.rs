pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::{CatalogError, CatalogService};
pub use domain::product::{FieldViolation, NewProduct, Product, ProductDraft, UpdateProduct};
pub use storage::postgres::PgProductStore;
pub use storage::store::{ProductFilter, ProductStore, StoreError};
