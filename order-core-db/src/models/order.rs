use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// A customer order placed through a reseller.
///
/// The status is the only mutable column; items are written once together with
/// the order and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderModel {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub created_date: DateTime<Utc>,
}

/// A product line of an order.
///
/// `service_id` is copied from the product when the order is created and is
/// never chosen independently of `product_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OrderItemModel {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub service_id: Uuid,
    /// Nullable in storage; a missing value on a persisted item is corrupt data.
    pub quantity: Option<i32>,
}
