use std::collections::HashMap;

use chrono::Utc;
use order_core_api::validation::ITEMS_FIELD;
use order_core_api::{OrderCreateRequest, OrderDetail, OrderError, OrderResult, ValidationErrors};
use order_core_db::models::order::{OrderItemModel, OrderModel};
use order_core_db::repository::load_batch::LoadBatch;
use tracing::{info, warn};
use uuid::Uuid;

use crate::unit_of_work::transaction_consumed;

use super::repo_impl::OrderRepositoryImpl;

impl OrderRepositoryImpl {
    /// Resolve the service of every requested product from current reference data.
    async fn resolve_service_ids(
        repo: &OrderRepositoryImpl,
        request: &OrderCreateRequest,
    ) -> OrderResult<HashMap<Uuid, Uuid>> {
        let product_ids = request.product_ids();
        let products = repo.product_repository.load_batch(&product_ids).await?;

        let mut service_ids = HashMap::with_capacity(product_ids.len());
        for (product_id, product) in product_ids.into_iter().zip(products) {
            let product = product.ok_or_else(|| {
                warn!(%product_id, "product vanished between validation and order creation");
                OrderError::ReferentialInconsistency(format!("Product {product_id} no longer exists"))
            })?;
            service_ids.insert(product_id, product.service_id);
        }
        Ok(service_ids)
    }

    pub(super) async fn create_order_impl(
        repo: &OrderRepositoryImpl,
        request: &OrderCreateRequest,
    ) -> OrderResult<OrderDetail> {
        if request.items.is_empty() {
            let mut errors = ValidationErrors::new();
            errors.insert(
                ITEMS_FIELD.to_string(),
                vec!["Cannot create an order with no order items".to_string()],
            );
            return Err(OrderError::Validation(errors));
        }

        let service_ids = Self::resolve_service_ids(repo, request).await?;

        let order = OrderModel {
            id: Uuid::new_v4(),
            reseller_id: request.reseller_id,
            customer_id: request.customer_id,
            status_id: request.status_id,
            created_date: Utc::now(),
        };
        let mut items = Vec::with_capacity(request.items.len());
        for requested in &request.items {
            let service_id = service_ids.get(&requested.product_id).copied().ok_or_else(|| {
                OrderError::ReferentialInconsistency(format!(
                    "Product {} has no resolved service",
                    requested.product_id
                ))
            })?;
            items.push(OrderItemModel {
                id: Uuid::new_v4(),
                order_id: order.id,
                product_id: requested.product_id,
                service_id,
                quantity: Some(requested.quantity),
            });
        }

        {
            let mut tx = repo.executor.tx.lock().await;
            let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;

            sqlx::query(
                r#"
                INSERT INTO orders (id, reseller_id, customer_id, status_id, created_date)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(order.id)
            .bind(order.reseller_id)
            .bind(order.customer_id)
            .bind(order.status_id)
            .bind(order.created_date)
            .execute(&mut **transaction)
            .await?;

            for item in &items {
                sqlx::query(
                    r#"
                    INSERT INTO order_item (id, order_id, product_id, service_id, quantity)
                    VALUES ($1, $2, $3, $4, $5)
                    "#,
                )
                .bind(item.id)
                .bind(item.order_id)
                .bind(item.product_id)
                .bind(item.service_id)
                .bind(item.quantity)
                .execute(&mut **transaction)
                .await?;
            }
        }

        info!(order_id = %order.id, status_id = %order.status_id, items = items.len(), "order created");

        // Read back within the same transaction so names and totals are resolved
        Self::get_order_detail_impl(repo, order.id).await
    }
}
