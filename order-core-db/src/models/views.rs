//! Read-side projections joining orders with their reference data.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// An order joined with the name of its current status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderHeaderView {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub created_date: DateTime<Utc>,
}

/// An order item joined with the current pricing of its product and the name
/// of its service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderItemLineView {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub service_id: Uuid,
    pub service_name: String,
    pub quantity: Option<i32>,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
}

/// Profit contributed by a single order, before monthly grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderProfitView {
    pub order_id: Uuid,
    pub created_date: DateTime<Utc>,
    pub profit: Decimal,
}
