use async_trait::async_trait;
use order_core_api::OrderResult;
use order_core_db::models::order_status::KnownOrderStatus;
use order_core_db::models::views::OrderProfitView;
use order_core_db::repository::profit_summary::ProfitSummaryRepository;
use sqlx::Postgres;
use tracing::debug;

use crate::unit_of_work::transaction_consumed;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    /// First phase of the monthly report: per-order profit of completed orders.
    /// Grouping by month happens in process.
    pub(super) async fn completed_order_profits_impl(
        repo: &OrderRepositoryImpl,
    ) -> OrderResult<Vec<OrderProfitView>> {
        let query = sqlx::query_as::<_, OrderProfitView>(
            r#"
            SELECT o.id AS order_id,
                   o.created_date,
                   COALESCE(SUM(COALESCE(i.quantity, 0) * (p.unit_price - p.unit_cost)), 0) AS profit
            FROM orders o
            JOIN order_status s ON s.id = o.status_id
            LEFT JOIN order_item i ON i.order_id = o.id
            LEFT JOIN product p ON p.id = i.product_id
            WHERE s.name = $1
            GROUP BY o.id, o.created_date
            "#,
        )
        .bind(KnownOrderStatus::Completed.name());

        let rows = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            query.fetch_all(&mut **transaction).await?
        };

        debug!(orders = rows.len(), "loaded completed order profits");
        Ok(rows)
    }
}

#[async_trait]
impl ProfitSummaryRepository<Postgres> for OrderRepositoryImpl {
    async fn completed_order_profits(&self) -> OrderResult<Vec<OrderProfitView>> {
        Self::completed_order_profits_impl(self).await
    }
}
