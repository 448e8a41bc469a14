//! Orders API endpoints

use api_types::order::{BillValue, OrderBatch, OrderNew};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use engine::{BatchOutcome, Bill, CustomerOrder, Rejection};

use crate::{ServerError, server::ServerState};

fn map_bill(value: BillValue) -> Bill {
    match value {
        BillValue::Five => Bill::Five,
        BillValue::Ten => Bill::Ten,
        BillValue::Twenty => Bill::Twenty,
    }
}

fn map_order(order: OrderNew) -> CustomerOrder {
    CustomerOrder::new(
        map_bill(order.bill_value),
        order.position_in_line,
        order.requested_lemonades,
    )
}

/// Turns a decoded batch into engine orders.
///
/// A `null` batch or a `null` order rejects the whole batch.
pub fn batch_orders(payload: OrderBatch) -> Result<Vec<CustomerOrder>, Rejection> {
    let orders = payload.ok_or(Rejection::EmptyBatch)?;
    orders
        .into_iter()
        .map(|order| order.map(map_order).ok_or(Rejection::MissingOrder))
        .collect()
}

/// Handle requests for processing a batch of orders.
///
/// Answers with the bills the batch left in the drawer, or `null` when the
/// batch was rejected. Undecodable bodies are a 400.
pub async fn process(
    State(state): State<ServerState>,
    payload: Result<Json<OrderBatch>, JsonRejection>,
) -> Result<String, ServerError> {
    let Json(payload) = payload.map_err(|rejection| {
        ServerError::BadRequest(format!("Invalid input: {}", rejection.body_text()))
    })?;

    let outcome = match batch_orders(payload) {
        Ok(orders) => state.engine.process_orders(orders).await?,
        Err(rejection) => {
            tracing::debug!(%rejection, "batch rejected before processing");
            BatchOutcome::Rejected(rejection)
        }
    };

    Ok(outcome.to_string())
}

/// Handle requests for the sales report
pub async fn report(State(state): State<ServerState>) -> Result<String, ServerError> {
    Ok(state.engine.report().await?)
}
