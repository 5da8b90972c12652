use std::collections::HashMap;

use async_trait::async_trait;
use order_core_api::OrderResult;
use order_core_db::models::identifiable::Identifiable;
use order_core_db::models::product::ProductModel;
use order_core_db::repository::load_batch::LoadBatch;
use sqlx::Postgres;
use uuid::Uuid;

use crate::unit_of_work::transaction_consumed;
use crate::utils::TryFromRow;

use super::repo_impl::ProductRepositoryImpl;

impl ProductRepositoryImpl {
    pub(super) async fn load_batch_impl(
        repo: &ProductRepositoryImpl,
        ids: &[Uuid],
    ) -> OrderResult<Vec<Option<ProductModel>>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = r#"SELECT id, service_id, name, unit_cost, unit_price FROM product WHERE id = ANY($1)"#;
        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            sqlx::query(query).bind(ids).fetch_all(&mut **transaction).await?
        };

        let mut item_map = HashMap::with_capacity(rows.len());
        for row in rows {
            let item = ProductModel::try_from_row(&row)?;
            item_map.insert(item.get_id(), item);
        }

        // Duplicated ids each receive their own copy
        Ok(ids.iter().map(|id| item_map.get(id).cloned()).collect())
    }
}

#[async_trait]
impl LoadBatch<Postgres, ProductModel> for ProductRepositoryImpl {
    async fn load_batch(&self, ids: &[Uuid]) -> OrderResult<Vec<Option<ProductModel>>> {
        Self::load_batch_impl(self, ids).await
    }
}
