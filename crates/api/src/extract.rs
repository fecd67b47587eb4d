//! Request extractors and loose field helpers.

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Maximum accepted request body size.
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

const JSON_MIME: &str = "application/json";
const FORM_MIME: &str = "application/x-www-form-urlencoded";

/// Lenient body extractor for JSON and form-encoded requests.
///
/// Body fields arrive as a JSON object and are then deserialized into `T`.
/// Form fields become string values. A request without a body, with another
/// content type, or whose JSON body is an array yields `T::default()`, so
/// handlers can answer missing fields with their own status codes.
///
/// A body that cannot be read (malformed JSON, a bare JSON scalar, or more
/// than [`BODY_LIMIT_BYTES`]) is an internal error with the generic message.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = match mime_essence(req.headers()).as_deref() {
            Some(JSON_MIME) => json_fields(req, state).await?,
            Some(FORM_MIME) => form_fields(req, state).await?,
            _ => None,
        };

        match fields {
            Some(object) => T::deserialize(Value::Object(object))
                .map(Self)
                .map_err(unreadable),
            None => Ok(Self(T::default())),
        }
    }
}

/// The top-level object of a JSON body, or `None` for an empty body or an array.
async fn json_fields<S>(req: Request, state: &S) -> Result<Option<Map<String, Value>>, AppError>
where
    S: Send + Sync,
{
    let bytes = Bytes::from_request(req, state).await.map_err(unreadable)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    match serde_json::from_slice(&bytes).map_err(unreadable)? {
        Value::Object(object) => Ok(Some(object)),
        Value::Array(_) => Ok(None),
        _ => Err(AppError::Internal(
            "request body is a bare JSON scalar".to_owned(),
        )),
    }
}

/// Form pairs as string values. A repeated key keeps its last value.
async fn form_fields<S>(req: Request, state: &S) -> Result<Option<Map<String, Value>>, AppError>
where
    S: Send + Sync,
{
    let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
        .await
        .map_err(unreadable)?;

    Ok(Some(
        pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    ))
}

fn unreadable(err: impl std::fmt::Display) -> AppError {
    AppError::Internal(format!("unreadable request body: {err}"))
}

/// Lowercased media type without parameters such as `charset`.
fn mime_essence(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
}

/// Whether a field value counts as present: not `null`, `false`, `0` or `""`.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text of a field: strings as-is, anything else as its JSON text.
/// `null` is absent.
#[must_use]
pub fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode};
    use axum::response::IntoResponse;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        name: Option<Value>,
        phone: Option<Value>,
    }

    async fn extract(content_type: Option<&str>, body: &str) -> Result<Payload, AppError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        let request = builder.body(Body::from(body.to_owned())).unwrap();
        JsonBody::<Payload>::from_request(request, &())
            .await
            .map(|JsonBody(p)| p)
    }

    #[test]
    fn test_mime_essence() {
        let mut headers = HeaderMap::new();
        assert_eq!(mime_essence(&headers), None);

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("Application/JSON; charset=utf-8"),
        );
        assert_eq!(mime_essence(&headers).as_deref(), Some(JSON_MIME));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert_eq!(mime_essence(&headers).as_deref(), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_parses_json_body() {
        let payload = extract(Some("application/json"), r#"{"name":"ana","phone":11999990000}"#)
            .await
            .unwrap();
        assert_eq!(payload.name, Some(json!("ana")));
        assert_eq!(payload.phone, Some(json!(11_999_990_000_u64)));
    }

    #[tokio::test]
    async fn test_parses_form_body() {
        let payload = extract(
            Some("application/x-www-form-urlencoded"),
            "name=Ana+Lima&phone=1199&name=Bia",
        )
        .await
        .unwrap();
        assert_eq!(payload.name, Some(json!("Bia")));
        assert_eq!(payload.phone, Some(json!("1199")));
    }

    #[tokio::test]
    async fn test_missing_body_is_default() {
        assert_eq!(extract(None, "").await.unwrap(), Payload::default());
        assert_eq!(
            extract(Some("application/json"), "  ").await.unwrap(),
            Payload::default()
        );
    }

    #[tokio::test]
    async fn test_other_content_type_is_default() {
        let payload = extract(Some("text/plain"), r#"{"name":"ana"}"#)
            .await
            .unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_array_body_is_default() {
        let payload = extract(Some("application/json"), r#"["admin","123456"]"#)
            .await
            .unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn test_unreadable_json_is_internal_error() {
        for body in ["{not json", "\"admin\"", "42"] {
            let err = extract(Some("application/json"), body).await.unwrap_err();
            assert!(matches!(err, AppError::Internal(_)));
            assert_eq!(
                err.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_truthiness() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{value} should be falsy");
        }
        for value in [json!(true), json!(1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn test_field_text() {
        assert_eq!(field_text(json!("ana")).as_deref(), Some("ana"));
        assert_eq!(field_text(json!(123_456)).as_deref(), Some("123456"));
        assert_eq!(field_text(json!(true)).as_deref(), Some("true"));
        assert_eq!(field_text(json!(null)), None);
    }
}
