use chrono::{DateTime, Utc};
use order_core_api::{OrderError, OrderResult};
use order_core_db::models::order::{OrderItemModel, OrderModel};
use order_core_db::models::order_status::{KnownOrderStatus, OrderStatusModel};
use order_core_db::models::product::ProductModel;
use order_core_db::repository::find_by_name::FindByName;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::repository::reference::product_repository::test_utils::insert_test_product;
use crate::repository::reference::OrderStatusRepositoryImpl;
use crate::unit_of_work::{transaction_consumed, Executor};

/// Seeded statuses plus a "100GB Mailbox" product costing 0.8 and priced 0.9
pub struct ReferenceFixture {
    pub product: ProductModel,
    pub created_status_id: Uuid,
    pub in_progress_status_id: Uuid,
    pub completed_status_id: Uuid,
}

async fn seeded_status_id(repo: &OrderStatusRepositoryImpl, status: KnownOrderStatus) -> OrderResult<Uuid> {
    let found: Option<OrderStatusModel> = repo.find_by_name(status.name()).await?;
    found
        .map(|s| s.id)
        .ok_or_else(|| OrderError::ReferentialInconsistency(format!("status {status} is not seeded")))
}

pub async fn insert_reference_fixture(executor: &Executor) -> OrderResult<ReferenceFixture> {
    let product = insert_test_product(executor, "100GB Mailbox", dec!(0.8), dec!(0.9)).await?;
    let status_repo = OrderStatusRepositoryImpl::new(executor.clone());

    Ok(ReferenceFixture {
        product,
        created_status_id: seeded_status_id(&status_repo, KnownOrderStatus::Created).await?,
        in_progress_status_id: seeded_status_id(&status_repo, KnownOrderStatus::InProgress).await?,
        completed_status_id: seeded_status_id(&status_repo, KnownOrderStatus::Completed).await?,
    })
}

pub fn create_test_order(status_id: Uuid, created_date: DateTime<Utc>) -> OrderModel {
    OrderModel {
        id: Uuid::new_v4(),
        reseller_id: Uuid::new_v4(),
        customer_id: Uuid::new_v4(),
        status_id,
        created_date,
    }
}

/// Insert an order with a single item of the fixture product, bypassing the
/// creation workflow so that timestamps and missing quantities can be set up.
pub async fn insert_order(
    executor: &Executor,
    fixture: &ReferenceFixture,
    quantity: Option<i32>,
    status_id: Uuid,
    created_date: DateTime<Utc>,
) -> OrderResult<Uuid> {
    let order = create_test_order(status_id, created_date);
    let item = OrderItemModel {
        id: Uuid::new_v4(),
        order_id: order.id,
        product_id: fixture.product.id,
        service_id: fixture.product.service_id,
        quantity,
    };

    let mut tx = executor.tx.lock().await;
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

    Ok(order.id)
}

/// Remove every order visible to the transaction; rolled back with the test
pub async fn clear_orders(executor: &Executor) -> OrderResult<()> {
    let mut tx = executor.tx.lock().await;
    let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
    sqlx::query("DELETE FROM order_item").execute(&mut **transaction).await?;
    sqlx::query("DELETE FROM orders").execute(&mut **transaction).await?;
    Ok(())
}
