use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Uniform reply wrapper: every endpoint answers `{ success, data, message }`.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
}

pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    reply(StatusCode::OK, true, Some(data), message)
}

pub fn created<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    reply(StatusCode::CREATED, true, Some(data), message)
}

/// Success with no payload, e.g. after a delete
pub fn ok_message(message: impl Into<String>) -> Response {
    reply::<serde_json::Value>(StatusCode::OK, true, None, message)
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    reply::<serde_json::Value>(status, false, None, message)
}

fn reply<T: Serialize>(
    status: StatusCode,
    success: bool,
    data: Option<T>,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(Envelope {
            success,
            data,
            message: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope {
            success: true,
            data: Some(serde_json::json!({ "id": 7 })),
            message: "Fetched".to_string(),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "data": { "id": 7 },
                "message": "Fetched"
            })
        );
    }

    #[test]
    fn test_empty_data_serializes_as_null() {
        let envelope = Envelope::<serde_json::Value> {
            success: false,
            data: None,
            message: "Group not found".to_string(),
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["data"], serde_json::Value::Null);
        assert_eq!(value["success"], serde_json::Value::Bool(false));
    }
}
