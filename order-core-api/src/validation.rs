//! Request validation performed before an order operation reaches the store.
//!
//! Reference-data existence is consumed as boolean predicates from the
//! service traits; the resulting messages are keyed by request field name.

use uuid::Uuid;
use validator::{Validate, ValidationErrorsKind};

use crate::domain::{OrderCreateRequest, OrderStatusUpdateRequest};
use crate::error::{OrderError, OrderResult, ValidationErrors};
use crate::service::{OrderProductService, OrderService, OrderStatusService};

pub const STATUS_ID_FIELD: &str = "statusId";
pub const NEW_STATUS_ID_FIELD: &str = "newStatusId";
pub const ITEMS_FIELD: &str = "items";

fn push_message(errors: &mut ValidationErrors, field: &str, message: String) {
    let messages = errors.entry(field.to_string()).or_default();
    if !messages.contains(&message) {
        messages.push(message);
    }
}

/// Flattens every message found under a (possibly nested) validator error tree.
fn collect_messages(errors: &validator::ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors().iter() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    out.push(message);
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(entries) => {
                for nested in entries.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}

/// Check a creation request against the status and product catalogs.
///
/// Returns an empty map when the request may be passed to `create_order`.
pub async fn validate_create_request(
    request: &OrderCreateRequest,
    status_service: &dyn OrderStatusService,
    product_service: &dyn OrderProductService,
) -> OrderResult<ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !status_service.order_status_exists(request.status_id).await? {
        push_message(
            &mut errors,
            STATUS_ID_FIELD,
            format!("Status with ID {} doesn't exist", request.status_id),
        );
    }

    if let Err(structural) = request.validate() {
        let mut messages = Vec::new();
        collect_messages(&structural, &mut messages);
        for message in messages {
            push_message(&mut errors, ITEMS_FIELD, message);
        }
    }

    if !request.items.is_empty() {
        let product_ids = request.product_ids();
        if !product_service.all_products_exist(&product_ids).await? {
            push_message(
                &mut errors,
                ITEMS_FIELD,
                "Some of the specified products do not exist".to_string(),
            );
        }
    }

    Ok(errors)
}

/// Check a status transition. A missing order is reported as `NotFound`
/// rather than as a field error.
pub async fn validate_status_update(
    order_id: Uuid,
    request: &OrderStatusUpdateRequest,
    order_service: &dyn OrderService,
    status_service: &dyn OrderStatusService,
) -> OrderResult<ValidationErrors> {
    if !order_service.order_exists(order_id).await? {
        return Err(OrderError::NotFound(format!("Order {order_id}")));
    }

    let mut errors = ValidationErrors::new();
    if !status_service.order_status_exists(request.new_status_id).await? {
        push_message(
            &mut errors,
            NEW_STATUS_ID_FIELD,
            format!("Status with ID {} doesn't exist", request.new_status_id),
        );
    }
    Ok(errors)
}

/// Turn a non-empty error map into `OrderError::Validation`.
pub fn ensure_valid(errors: ValidationErrors) -> OrderResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(OrderError::Validation(errors))
    }
}
