//! HTTP request handlers for the rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::checkout::compute_agreement;
use crate::models::{AgreementSummary, Tool};
use crate::report::parse_date;

use super::request::CheckoutRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/tools", get(tools_handler))
        .with_state(state)
}

/// Handler for GET /tools: the stocked catalog in catalog order.
async fn tools_handler(State(state): State<AppState>) -> Json<Vec<Tool>> {
    Json(state.catalog().tools().into_iter().copied().collect())
}

/// Handler for POST /checkout endpoint.
///
/// Accepts a checkout request and returns the computed agreement. Rentals
/// longer than the state's limit are rejected before any day is walked.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    if request.rental_days > i64::from(state.max_rental_days()) {
        warn!(
            correlation_id = %correlation_id,
            rental_days = request.rental_days,
            limit = state.max_rental_days(),
            "Rental duration over limit"
        );
        let error = ApiError::with_details(
            "RENTAL_DURATION_TOO_LONG",
            format!(
                "Rental day count must be at most {}, got {}",
                state.max_rental_days(),
                request.rental_days
            ),
            "Longer rentals must be booked as separate agreements",
        );
        return json_response(StatusCode::BAD_REQUEST, error);
    }

    let start_time = Instant::now();
    let result = parse_date(&request.checkout_date).and_then(|checkout_date| {
        compute_agreement(
            state.catalog(),
            &request.tool_code,
            request.rental_days,
            request.discount_percentage,
            checkout_date,
        )
    });

    match result {
        Ok(agreement) => {
            let summary = AgreementSummary::from_agreement(&agreement);
            info!(
                correlation_id = %correlation_id,
                agreement_id = %summary.agreement_id,
                tool_code = %summary.tool_code,
                charge_days = summary.charge_days,
                final_charge = %summary.final_charge,
                duration_us = start_time.elapsed().as_micros(),
                "Checkout completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Checkout rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn post_checkout(body: Value) -> (StatusCode, Value) {
        post_checkout_to(AppState::default(), body).await
    }

    async fn post_checkout_to(state: AppState, body: Value) -> (StatusCode, Value) {
        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/checkout")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_checkout_returns_summary() {
        let (status, body) = post_checkout(json!({
            "tool_code": "LADW",
            "rental_days": 3,
            "discount_percentage": 10,
            "checkout_date": "07/02/20"
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["final_charge"], "3.58");
        assert_eq!(body["charge_days"], 2);
    }

    #[tokio::test]
    async fn test_bad_date_is_rejected() {
        let (status, body) = post_checkout(json!({
            "tool_code": "LADW",
            "rental_days": 3,
            "discount_percentage": 10,
            "checkout_date": "2020-07-02"
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_CHECKOUT_DATE");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let (status, body) = post_checkout(json!({
            "tool_code": "LADW",
            "checkout_date": "07/02/20"
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_missing_discount_is_validation_error() {
        let (status, body) = post_checkout(json!({
            "tool_code": "LADW",
            "rental_days": 3,
            "checkout_date": "07/02/20"
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_rental_at_limit_is_accepted() {
        let state = AppState::default().with_max_rental_days(10);
        let (status, body) = post_checkout_to(
            state,
            json!({
                "tool_code": "JAKR",
                "rental_days": 10,
                "discount_percentage": 0,
                "checkout_date": "07/02/15"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["schedule"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_rental_over_limit_is_rejected() {
        let state = AppState::default().with_max_rental_days(10);
        let (status, body) = post_checkout_to(
            state,
            json!({
                "tool_code": "JAKR",
                "rental_days": 11,
                "discount_percentage": 0,
                "checkout_date": "07/02/15"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "RENTAL_DURATION_TOO_LONG");
    }
}
