pub mod product;

pub use product::{FieldViolation, NewProduct, Product, ProductDraft, UpdateProduct};
