// Translate store errors into transport responses.
//
// Responsibilities
// - One mapping from error kind to HTTP status and GraphQL error code, shared by every use case.
// - Log rejections here, the store itself stays silent.

use async_graphql::ErrorExtensions;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::events::core::ports::EventStoreError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn status_code(error: &EventStoreError) -> StatusCode {
    match error {
        EventStoreError::InvalidTimestamp(_) => StatusCode::BAD_REQUEST,
        EventStoreError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        EventStoreError::DateRangeUnavailable { .. } | EventStoreError::DuplicateRecord { .. } => {
            StatusCode::CONFLICT
        }
    }
}

pub fn error_code(error: &EventStoreError) -> &'static str {
    match error {
        EventStoreError::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
        EventStoreError::DateRangeUnavailable { .. } => "DATE_RANGE_UNAVAILABLE",
        EventStoreError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
        EventStoreError::DuplicateRecord { .. } => "DUPLICATE_RECORD",
    }
}

pub fn into_http_response(error: EventStoreError) -> Response {
    tracing::warn!(code = error_code(&error), %error, "request rejected");
    (
        status_code(&error),
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub fn into_graphql_error(error: EventStoreError) -> async_graphql::Error {
    let code = error_code(&error);
    tracing::warn!(code, %error, "request rejected");
    async_graphql::Error::new(error.to_string())
        .extend_with(|_, extensions| extensions.set("code", code))
}

#[cfg(test)]
mod inbound_errors_tests {
    use super::*;
    use crate::shared::core::interval::InvalidTimestamp;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(
        EventStoreError::InvalidTimestamp(InvalidTimestamp("x".into())),
        StatusCode::BAD_REQUEST,
        "INVALID_TIMESTAMP"
    )]
    #[case(EventStoreError::not_found("ev-1"), StatusCode::NOT_FOUND, "RECORD_NOT_FOUND")]
    #[case(
        EventStoreError::DateRangeUnavailable {
            start_date: "a".into(),
            end_date: "b".into(),
            conflicting_id: "ev-1".into(),
        },
        StatusCode::CONFLICT,
        "DATE_RANGE_UNAVAILABLE"
    )]
    #[case(
        EventStoreError::DuplicateRecord { id: "ev-1".into(), entity: "event" },
        StatusCode::CONFLICT,
        "DUPLICATE_RECORD"
    )]
    fn it_should_map_every_error_kind(
        #[case] error: EventStoreError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        assert_eq!(status_code(&error), status);
        assert_eq!(error_code(&error), code);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_render_the_message_as_json_body() {
        let response = into_http_response(EventStoreError::not_found("ev-1"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "non existing ev-1 record in events" }));
    }

    #[rstest]
    fn it_should_carry_the_code_as_a_graphql_extension() {
        let error = into_graphql_error(EventStoreError::not_found("ev-1"));
        assert_eq!(error.message, "non existing ev-1 record in events");
        let extensions = error.extensions.expect("expected error extensions");
        assert_eq!(
            extensions.get("code"),
            Some(&async_graphql::Value::from("RECORD_NOT_FOUND"))
        );
    }
}
