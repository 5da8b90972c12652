use async_trait::async_trait;
use order_core_api::{OrderResult, ProfitSummary};
use sqlx::Database;

use crate::models::views::OrderProfitView;

/// Monthly profit over completed orders.
///
/// Storage implementations only provide the per-order figures; grouping by
/// month happens in [`crate::aggregation::group_monthly_profit`] unless an
/// implementation overrides [`ProfitSummaryRepository::monthly_profit_summary`]
/// with an equivalent query.
#[async_trait]
pub trait ProfitSummaryRepository<DB: Database>: Send + Sync {
    /// Profit of every order whose status name is exactly "Completed".
    /// Items without a quantity contribute zero.
    async fn completed_order_profits(&self) -> OrderResult<Vec<OrderProfitView>>;

    async fn monthly_profit_summary(&self) -> OrderResult<Vec<ProfitSummary>> {
        let profits = self.completed_order_profits().await?;
        Ok(crate::aggregation::group_monthly_profit(profits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Months, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use sqlx::Postgres;
    use uuid::Uuid;

    struct FixedProfits(Vec<OrderProfitView>);

    #[async_trait]
    impl ProfitSummaryRepository<Postgres> for FixedProfits {
        async fn completed_order_profits(&self) -> OrderResult<Vec<OrderProfitView>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_monthly_profit_summary_groups_fetched_profits() {
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 8, 0, 0).unwrap();
        let months_ago = |n: u32| now.checked_sub_months(Months::new(n)).unwrap();
        let profit = |created_date, profit| OrderProfitView {
            order_id: Uuid::new_v4(),
            created_date,
            profit,
        };
        let repo = FixedProfits(vec![
            profit(months_ago(2), dec!(1.0)),
            profit(months_ago(1), dec!(0.1)),
            profit(months_ago(1), dec!(0.2)),
            profit(months_ago(0), dec!(0.3)),
        ]);

        let summary = repo.monthly_profit_summary().await.unwrap();

        assert_eq!(summary.len(), 3);
        assert_eq!(summary[0].period, Utc.with_ymd_and_hms(2024, 11, 1, 0, 0, 0).unwrap());
        assert_eq!(summary[1].period, Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(summary[2].period, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(
            summary.iter().map(|s| s.total_profit).collect::<Vec<_>>(),
            vec![dec!(1.0), dec!(0.3), dec!(0.3)]
        );
    }
}
