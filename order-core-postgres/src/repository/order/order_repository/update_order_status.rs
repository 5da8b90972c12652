use order_core_api::{OrderError, OrderResult};
use tracing::{debug, info};
use uuid::Uuid;

use crate::unit_of_work::transaction_consumed;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    /// Last writer wins: concurrent updates of the same order are not serialized.
    pub(super) async fn update_order_status_impl(
        repo: &OrderRepositoryImpl,
        order_id: Uuid,
        status_id: Uuid,
    ) -> OrderResult<()> {
        let query = sqlx::query(r#"UPDATE orders SET status_id = $2 WHERE id = $1"#)
            .bind(order_id)
            .bind(status_id);

        let result = {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
            query.execute(&mut **transaction).await?
        };

        if result.rows_affected() == 0 {
            debug!(%order_id, "order not found for status update");
            return Err(OrderError::NotFound(format!("Order {order_id}")));
        }

        info!(%order_id, %status_id, "order status updated");
        Ok(())
    }
}
