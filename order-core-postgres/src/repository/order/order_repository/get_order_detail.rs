use order_core_api::{OrderDetail, OrderError, OrderResult};
use order_core_db::aggregation::order_detail;
use tracing::{debug, warn};
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn get_order_detail_impl(
        repo: &OrderRepositoryImpl,
        order_id: Uuid,
    ) -> OrderResult<OrderDetail> {
        let Some(header) = Self::load_header(repo, order_id).await? else {
            debug!(%order_id, "order not found");
            return Err(OrderError::NotFound(format!("Order {order_id}")));
        };

        let lines = Self::load_lines(repo, &[order_id]).await?;
        order_detail(header, &lines)
            .inspect_err(|e| warn!(%order_id, error = %e, "failed to resolve order detail"))
    }
}
