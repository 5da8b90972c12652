use order_core_api::OrderResult;
use order_core_db::models::views::{OrderHeaderView, OrderItemLineView};
use uuid::Uuid;

use crate::unit_of_work::transaction_consumed;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    /// Order headers with their status name, newest first, ties broken by id.
    pub(super) async fn load_headers(
        repo: &OrderRepositoryImpl,
        status_name: Option<&str>,
    ) -> OrderResult<Vec<OrderHeaderView>> {
        let query = sqlx::query_as::<_, OrderHeaderView>(
            r#"
            SELECT o.id, o.reseller_id, o.customer_id, o.status_id, s.name AS status_name, o.created_date
            FROM orders o
            JOIN order_status s ON s.id = o.status_id
            WHERE $1::TEXT IS NULL OR s.name = $1
            ORDER BY o.created_date DESC, o.id
            "#,
        )
        .bind(status_name);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
        Ok(query.fetch_all(&mut **transaction).await?)
    }

    pub(super) async fn load_header(
        repo: &OrderRepositoryImpl,
        order_id: Uuid,
    ) -> OrderResult<Option<OrderHeaderView>> {
        let query = sqlx::query_as::<_, OrderHeaderView>(
            r#"
            SELECT o.id, o.reseller_id, o.customer_id, o.status_id, s.name AS status_name, o.created_date
            FROM orders o
            JOIN order_status s ON s.id = o.status_id
            WHERE o.id = $1
            "#,
        )
        .bind(order_id);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
        Ok(query.fetch_optional(&mut **transaction).await?)
    }

    /// Items of the given orders joined with current product pricing and
    /// service names.
    pub(super) async fn load_lines(
        repo: &OrderRepositoryImpl,
        order_ids: &[Uuid],
    ) -> OrderResult<Vec<OrderItemLineView>> {
        if order_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = sqlx::query_as::<_, OrderItemLineView>(
            r#"
            SELECT i.id, i.order_id, i.product_id, p.name AS product_name,
                   i.service_id, sv.name AS service_name, i.quantity, p.unit_cost, p.unit_price
            FROM order_item i
            JOIN product p ON p.id = i.product_id
            JOIN service sv ON sv.id = i.service_id
            WHERE i.order_id = ANY($1)
            ORDER BY i.order_id, i.id
            "#,
        )
        .bind(order_ids);

        let mut tx = repo.executor.tx.lock().await;
        let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
        Ok(query.fetch_all(&mut **transaction).await?)
    }
}
