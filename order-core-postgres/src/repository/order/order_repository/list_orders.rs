use order_core_api::{OrderResult, OrderSummary};
use order_core_db::aggregation::order_summaries;
use tracing::{debug, warn};
use uuid::Uuid;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    pub(super) async fn list_orders_impl(
        repo: &OrderRepositoryImpl,
        status_name: Option<&str>,
    ) -> OrderResult<Vec<OrderSummary>> {
        let headers = Self::load_headers(repo, status_name).await?;
        let order_ids: Vec<Uuid> = headers.iter().map(|h| h.id).collect();
        let lines = Self::load_lines(repo, &order_ids).await?;

        let summaries = order_summaries(headers, lines)
            .inspect_err(|e| warn!(error = %e, "failed to summarize orders"))?;
        debug!(status_name, orders = summaries.len(), "listed orders");
        Ok(summaries)
    }
}
