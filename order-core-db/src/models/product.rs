use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// A resold product. Cost and price are fixed-point currency amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductModel {
    pub id: Uuid,
    pub service_id: Uuid,
    pub name: String,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
}

impl Identifiable for ProductModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// The service a product belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ServiceModel {
    pub id: Uuid,
    pub name: String,
}
