//! Row types and request payloads shared by handlers and repositories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A product in the catalog, keyed by a client-supplied integer id.
///
/// The manufacture and expiration dates are deliberately free-text; the
/// registry stores whatever the client sent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub product_category: String,
    pub product_price: i64,
    pub product_manufacture_date: String,
    pub product_expiration_date: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    pub product_id: i64,
    #[validate(length(min = 1, message = "product_name must not be empty"))]
    pub product_name: String,
    #[validate(length(min = 1, message = "product_category must not be empty"))]
    pub product_category: String,
    pub product_price: i64,
    pub product_manufacture_date: String,
    pub product_expiration_date: String,
}

/// Partial product update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProductUpdate {
    #[validate(length(min = 1, message = "product_name must not be empty"))]
    pub product_name: Option<String>,
    pub product_category: Option<String>,
    pub product_price: Option<i64>,
    pub product_manufacture_date: Option<String>,
    pub product_expiration_date: Option<String>,
}

/// One piece of user feedback for a product.
///
/// `rating` is nullable; rows without a rating are excluded from sentiment
/// aggregation. The serial `id` pins insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Feedback {
    pub id: i64,
    pub product_id: i64,
    pub user_name: String,
    pub feedback_text: String,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewFeedback {
    pub product_id: i64,
    #[validate(length(min = 1, message = "user_name must not be empty"))]
    pub user_name: String,
    #[validate(length(min = 1, message = "feedback_text must not be empty"))]
    pub feedback_text: String,
    // Out-of-range ratings are accepted on purpose; the scoring formula
    // extrapolates through the same thresholds.
    pub rating: i32,
}

/// Partial feedback update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FeedbackUpdate {
    pub user_name: Option<String>,
    pub feedback_text: Option<String>,
    pub rating: Option<i32>,
}

/// An employee record, keyed by a client-supplied integer id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub emp_id: i64,
    pub name: String,
    pub age: i32,
    pub salary: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEmployee {
    pub emp_id: i64,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub age: i32,
    pub salary: i64,
}

/// Full employee replacement; every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub age: i32,
    pub salary: i64,
}

/// A roster entry with a server-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RosterEntry {
    pub emp_id: i64,
    pub emp_name: String,
    pub emp_salary: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewRosterEntry {
    #[validate(length(min = 1, max = 200, message = "emp_name must be 1-200 characters"))]
    pub emp_name: String,
    pub emp_salary: Option<i64>,
}

/// Partial roster update; absent fields keep their current values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RosterUpdate {
    #[validate(length(min = 1, max = 200, message = "emp_name must be 1-200 characters"))]
    pub emp_name: Option<String>,
    pub emp_salary: Option<i64>,
}
