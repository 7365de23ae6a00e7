pub mod postgres;
pub mod store;

pub use postgres::PgProductStore;
pub use store::{ProductFilter, ProductStore, StoreError};
