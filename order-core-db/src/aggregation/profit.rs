//! Second phase of the monthly profit report: grouping per-order profits by
//! calendar month of their UTC creation timestamp.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, NaiveTime, Utc};
use order_core_api::ProfitSummary;
use rust_decimal::Decimal;

use crate::models::views::OrderProfitView;

/// First instant of the month containing `timestamp`.
pub fn month_start(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    let date = timestamp.date_naive();
    (date - Days::new(u64::from(date.day0())))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Sum order profits per month. Only months with at least one order appear,
/// sorted ascending by period.
pub fn group_monthly_profit<I>(orders: I) -> Vec<ProfitSummary>
where
    I: IntoIterator<Item = OrderProfitView>,
{
    let mut buckets: BTreeMap<DateTime<Utc>, Decimal> = BTreeMap::new();
    for order in orders {
        *buckets.entry(month_start(order.created_date)).or_default() += order.profit;
    }

    buckets
        .into_iter()
        .map(|(period, total_profit)| ProfitSummary { period, total_profit })
        .collect()
}
