use async_trait::async_trait;
use order_core_api::OrderResult;
use order_core_db::models::order_status::OrderStatusModel;
use order_core_db::repository::find_by_name::FindByName;
use sqlx::Postgres;

use crate::unit_of_work::transaction_consumed;

use super::repo_impl::OrderStatusRepositoryImpl;

#[async_trait]
impl FindByName<Postgres, OrderStatusModel> for OrderStatusRepositoryImpl {
    async fn find_by_name(&self, name: &str) -> OrderResult<Option<OrderStatusModel>> {
        let query = sqlx::query_as::<_, OrderStatusModel>(
            r#"SELECT id, name FROM order_status WHERE name = $1"#,
        )
        .bind(name);

        let mut tx = self.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
        Ok(query.fetch_optional(&mut **transaction).await?)
    }
}
