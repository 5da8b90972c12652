use order_core_api::OrderResult;
use order_core_db::models::product::ProductModel;
use crate::unit_of_work::Executor;
use crate::utils::TryFromRow;
use sqlx::{postgres::PgRow, Row};

pub struct ProductRepositoryImpl {
    pub executor: Executor,
}

impl ProductRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for ProductModel {
    fn try_from_row(row: &PgRow) -> OrderResult<Self> {
        Ok(ProductModel {
            id: row.try_get("id")?,
            service_id: row.try_get("service_id")?,
            name: row.try_get("name")?,
            unit_cost: row.try_get("unit_cost")?,
            unit_price: row.try_get("unit_price")?,
        })
    }
}
