//! Domain types for the product catalog.
//!
//! `Product` is the sole entity. The caller-controlled fields live in
//! [`ProductDraft`], which carries the declared constraints and knows how to
//! check them; `id` and `created_date` are assigned on creation and never
//! change afterwards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NAME_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const CATEGORY_MAX_CHARS: usize = 50;

/// A catalog row as stored.
///
/// Rows are never physically deleted: `is_active = false` marks a
/// soft-deleted row, which is excluded from every read operation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub created_date: DateTime<Utc>,
    pub is_active: bool,
}

/// The mutable field set of a product.
///
/// Serves as the create payload (where `is_active` is ignored and forced to
/// true by the service) and as the field portion of [`UpdateProduct`].
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Full update payload: the target id plus every mutable field. The id must
/// agree with the route; the service rejects a mismatch before touching
/// storage.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    pub id: i64,
    #[serde(flatten)]
    pub fields: ProductDraft,
}

/// Insert payload handed to the store. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    pub created_date: DateTime<Utc>,
    pub is_active: bool,
}

/// A single field constraint failure, reported back to the client.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ProductDraft {
    /// Checks every declared field constraint, collecting all violations
    /// rather than stopping at the first. Limits count Unicode scalar
    /// values.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push(FieldViolation::new("name", "is required"));
        } else if self.name.chars().count() > NAME_MAX_CHARS {
            violations.push(FieldViolation::new(
                "name",
                format!("must be at most {NAME_MAX_CHARS} characters"),
            ));
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                violations.push(FieldViolation::new(
                    "description",
                    format!("must be at most {DESCRIPTION_MAX_CHARS} characters"),
                ));
            }
        }

        if self.price <= Decimal::ZERO {
            violations.push(FieldViolation::new("price", "must be greater than 0"));
        }

        if self.category.is_empty() {
            violations.push(FieldViolation::new("category", "is required"));
        } else if self.category.chars().count() > CATEGORY_MAX_CHARS {
            violations.push(FieldViolation::new(
                "category",
                format!("must be at most {CATEGORY_MAX_CHARS} characters"),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
