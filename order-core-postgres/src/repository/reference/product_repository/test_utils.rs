use order_core_api::OrderResult;
use order_core_db::models::product::{ProductModel, ServiceModel};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::unit_of_work::{transaction_consumed, Executor};

pub fn create_test_service(name: &str) -> ServiceModel {
    ServiceModel {
        id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

pub fn create_test_product(service_id: Uuid, name: &str, unit_cost: Decimal, unit_price: Decimal) -> ProductModel {
    ProductModel {
        id: Uuid::new_v4(),
        service_id,
        name: name.to_string(),
        unit_cost,
        unit_price,
    }
}

/// Reference data is read-only for the order core, so fixtures write it directly
pub async fn insert_test_service(executor: &Executor, name: &str) -> OrderResult<ServiceModel> {
    let service = create_test_service(name);
    let mut tx = executor.tx.lock().await;
    let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
    sqlx::query(r#"INSERT INTO service (id, name) VALUES ($1, $2)"#)
        .bind(service.id)
        .bind(&service.name)
        .execute(&mut **transaction)
        .await?;
    Ok(service)
}

pub async fn insert_product_for_service(executor: &Executor, product: ProductModel) -> OrderResult<ProductModel> {
    let mut tx = executor.tx.lock().await;
    let transaction = tx.as_mut().ok_or_else(transaction_consumed)?;
    sqlx::query(
        r#"
        INSERT INTO product (id, service_id, name, unit_cost, unit_price)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(product.id)
    .bind(product.service_id)
    .bind(&product.name)
    .bind(product.unit_cost)
    .bind(product.unit_price)
    .execute(&mut **transaction)
    .await?;
    Ok(product)
}

/// Insert a product under a fresh "Email" service
pub async fn insert_test_product(
    executor: &Executor,
    name: &str,
    unit_cost: Decimal,
    unit_price: Decimal,
) -> OrderResult<ProductModel> {
    let service = insert_test_service(executor, "Email").await?;
    insert_product_for_service(executor, create_test_product(service.id, name, unit_cost, unit_price)).await
}
