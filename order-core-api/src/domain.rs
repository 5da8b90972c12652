//! Read and write shapes exchanged between the order core and its boundary layer.
//!
//! Totals are always computed from current product pricing at read time, so the
//! same order may report different figures after a price change.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One row of the order listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub item_count: usize,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub created_date: DateTime<Utc>,
}

/// An order item resolved against its product and service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetail {
    pub id: Uuid,
    pub order_id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
    pub total_cost: Decimal,
    pub total_price: Decimal,
}

/// An order with all of its items resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub created_date: DateTime<Utc>,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub items: Vec<OrderItemDetail>,
}

/// Profit of all completed orders created within one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    /// First instant of the month, UTC.
    pub period: DateTime<Utc>,
    pub total_profit: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "Cannot create an order with non-positive product quantity"))]
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    #[validate(
        length(min = 1, message = "Cannot create an order with no order items"),
        nested
    )]
    pub items: Vec<OrderItemRequest>,
}

impl OrderCreateRequest {
    /// Distinct product ids referenced by the request, in first-seen order.
    pub fn product_ids(&self) -> Vec<Uuid> {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .map(|item| item.product_id)
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusUpdateRequest {
    pub new_status_id: Uuid,
}
