use std::collections::HashSet;

use async_trait::async_trait;
use order_core_api::OrderResult;
use order_core_db::repository::exist_by_ids::ExistByIds;
use sqlx::Postgres;
use uuid::Uuid;

use crate::unit_of_work::transaction_consumed;

use super::repo_impl::OrderStatusRepositoryImpl;

impl OrderStatusRepositoryImpl {
    pub(super) async fn exist_by_ids_impl(
        repo: &OrderStatusRepositoryImpl,
        ids: &[Uuid],
    ) -> OrderResult<Vec<(Uuid, bool)>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<Uuid> = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            sqlx::query_scalar(r#"SELECT id FROM order_status WHERE id = ANY($1)"#)
                .bind(ids)
                .fetch_all(&mut **transaction)
                .await?
        };

        let found: HashSet<Uuid> = found.into_iter().collect();
        Ok(ids.iter().map(|id| (*id, found.contains(id))).collect())
    }

    pub async fn status_exists(&self, status_id: Uuid) -> OrderResult<bool> {
        self.all_exist(&[status_id]).await
    }
}

#[async_trait]
impl ExistByIds<Postgres> for OrderStatusRepositoryImpl {
    async fn exist_by_ids(&self, ids: &[Uuid]) -> OrderResult<Vec<(Uuid, bool)>> {
        Self::exist_by_ids_impl(self, ids).await
    }
}
