//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
/// Rejections go through [`AppError`]:
/// - Malformed JSON, missing field or wrong type: 422
/// - `validate()` failure: 422 with per-field details
/// - Body that cannot be read at all: the body rejection's own status
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Item {
///     name: String,
///     #[validate(range(exclusive_min = 0.0))]
///     price: f64,
/// }
///
/// async fn create_item(ValidatedJson(item): ValidatedJson<Item>) -> String {
///     item.name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let data: T = serde_json::from_slice(&bytes)?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Priced {
        #[allow(dead_code)]
        name: String,
        #[validate(range(exclusive_min = 0.0))]
        price: f64,
    }

    async fn status_for(body: &'static str, content_type: Option<&str>) -> StatusCode {
        let app = Router::new().route(
            "/",
            post(|ValidatedJson(p): ValidatedJson<Priced>| async move { p.price.to_string() }),
        );

        let mut request = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        app.oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let status = status_for(r#"{"name":"a","price":1.5}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_failed_validation_is_422() {
        let status = status_for(r#"{"name":"a","price":0}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_missing_field_is_422() {
        let status = status_for(r#"{"name":"a"}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json_is_422() {
        let status = status_for(r#"{"name":"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_wrong_type_is_422() {
        let status = status_for(r#"{"name":"a","price":"cheap"}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_body_without_content_type_is_parsed() {
        let status = status_for(r#"{"name":"a","price":1.5}"#, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_body_with_text_content_type_is_parsed() {
        let status = status_for(r#"{"name":"a","price":1.5}"#, Some("text/plain")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_json_without_content_type_is_422() {
        let status = status_for("not json", None).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
