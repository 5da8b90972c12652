//! Derived order figures computed from current product pricing.
//!
//! Listing and detail paths are strict: an item without a quantity is
//! malformed persisted state and aborts the read.

use std::collections::HashMap;

use order_core_api::{OrderDetail, OrderError, OrderItemDetail, OrderResult, OrderSummary};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::views::{OrderHeaderView, OrderItemLineView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderTotals {
    pub total_cost: Decimal,
    pub total_price: Decimal,
}

impl OrderTotals {
    fn add(&mut self, item: &OrderItemDetail) {
        self.total_cost += item.total_cost;
        self.total_price += item.total_price;
    }
}

fn required_quantity(line: &OrderItemLineView) -> OrderResult<i32> {
    line.quantity.ok_or_else(|| {
        OrderError::MalformedPersistedState(format!(
            "order item {} of order {} has no quantity",
            line.id, line.order_id
        ))
    })
}

pub fn item_detail(line: &OrderItemLineView) -> OrderResult<OrderItemDetail> {
    let quantity = required_quantity(line)?;
    let factor = Decimal::from(quantity);
    Ok(OrderItemDetail {
        id: line.id,
        order_id: line.order_id,
        service_id: line.service_id,
        service_name: line.service_name.clone(),
        product_id: line.product_id,
        product_name: line.product_name.clone(),
        quantity,
        unit_cost: line.unit_cost,
        unit_price: line.unit_price,
        total_cost: factor * line.unit_cost,
        total_price: factor * line.unit_price,
    })
}

pub fn order_totals(lines: &[OrderItemLineView]) -> OrderResult<OrderTotals> {
    let mut totals = OrderTotals::default();
    for line in lines {
        totals.add(&item_detail(line)?);
    }
    Ok(totals)
}

pub fn order_summary(header: OrderHeaderView, lines: &[OrderItemLineView]) -> OrderResult<OrderSummary> {
    let totals = order_totals(lines)?;
    Ok(OrderSummary {
        id: header.id,
        reseller_id: header.reseller_id,
        customer_id: header.customer_id,
        status_id: header.status_id,
        status_name: header.status_name,
        item_count: lines.len(),
        total_cost: totals.total_cost,
        total_price: totals.total_price,
        created_date: header.created_date,
    })
}

pub fn order_detail(header: OrderHeaderView, lines: &[OrderItemLineView]) -> OrderResult<OrderDetail> {
    let mut totals = OrderTotals::default();
    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let item = item_detail(line)?;
        totals.add(&item);
        items.push(item);
    }

    Ok(OrderDetail {
        id: header.id,
        reseller_id: header.reseller_id,
        customer_id: header.customer_id,
        status_id: header.status_id,
        status_name: header.status_name,
        created_date: header.created_date,
        total_cost: totals.total_cost,
        total_price: totals.total_price,
        items,
    })
}

/// Summaries for `headers` in their given order, pulling each order's lines
/// out of `lines`.
pub fn order_summaries(
    headers: Vec<OrderHeaderView>,
    lines: Vec<OrderItemLineView>,
) -> OrderResult<Vec<OrderSummary>> {
    let mut lines_by_order: HashMap<Uuid, Vec<OrderItemLineView>> = HashMap::new();
    for line in lines {
        lines_by_order.entry(line.order_id).or_default().push(line);
    }

    headers
        .into_iter()
        .map(|header| {
            let order_lines = lines_by_order.remove(&header.id).unwrap_or_default();
            order_summary(header, &order_lines)
        })
        .collect()
}
