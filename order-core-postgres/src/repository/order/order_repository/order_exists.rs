use order_core_api::OrderResult;
use uuid::Uuid;

use crate::unit_of_work::transaction_consumed;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn order_exists_impl(repo: &OrderRepositoryImpl, order_id: Uuid) -> OrderResult<bool> {
        let query = sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS (SELECT 1 FROM orders WHERE id = $1)"#)
            .bind(order_id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
        Ok(query.fetch_one(&mut **transaction).await?)
    }
}
