//! Chat-completion response parsing and HTTP error mapping shared by the
//! OpenAI-compatible adapters.

use advisor_application::ports::llm_gateway::{ChatCompletionRequest, GatewayError};
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Send `request` as the JSON body and return the first choice's content.
pub(crate) async fn send(
    builder: RequestBuilder,
    request: &ChatCompletionRequest,
) -> Result<String, GatewayError> {
    let response = builder
        .json(request)
        .send()
        .await
        .map_err(send_error)?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
    debug!("Provider answered HTTP {} ({} bytes)", status, body.len());

    if !status.is_success() {
        return Err(map_status(status, &body));
    }
    first_choice(&body)
}

/// A request that could not be built never reached the network; the usual
/// cause is a header value (API key) or URL (endpoint) with invalid characters.
fn send_error(e: reqwest::Error) -> GatewayError {
    if e.is_builder() {
        GatewayError::RequestFailed(format!(
            "could not build the request, check the API key and endpoint for invalid characters ({})",
            e
        ))
    } else {
        GatewayError::ConnectionError(e.to_string())
    }
}

/// Map a non-2xx status to a gateway error, preferring the provider's own
/// error message when the body carries one.
pub(crate) fn map_status(status: StatusCode, body: &str) -> GatewayError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status.to_string()
            } else {
                format!("HTTP {}: {}", status.as_u16(), trimmed)
            }
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized(detail),
        StatusCode::NOT_FOUND => GatewayError::ModelNotAvailable(detail),
        StatusCode::TOO_MANY_REQUESTS => GatewayError::QuotaExceeded(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

/// Content of `choices[0].message`; missing or empty content is an error.
pub(crate) fn first_choice(body: &str) -> Result<String, GatewayError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::RequestFailed(format!("unexpected response body: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(GatewayError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_content() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"{\"agents\":[]}"}},{"index":1,"message":{"role":"assistant","content":"ignored"}}]}"#;
        assert_eq!(first_choice(body).unwrap(), r#"{"agents":[]}"#);
    }

    #[test]
    fn test_missing_choice_is_empty_response() {
        assert_eq!(first_choice(r#"{"choices":[]}"#), Err(GatewayError::EmptyResponse));
        assert_eq!(first_choice("{}"), Err(GatewayError::EmptyResponse));
        assert_eq!(
            first_choice(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#),
            Err(GatewayError::EmptyResponse)
        );
    }

    #[test]
    fn test_non_json_body_is_request_failure() {
        assert!(matches!(
            first_choice("<html>gateway timeout</html>"),
            Err(GatewayError::RequestFailed(_))
        ));
    }

    #[test]
    fn test_status_mapping() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(
            map_status(StatusCode::UNAUTHORIZED, body),
            GatewayError::Unauthorized("Incorrect API key provided".to_string())
        );
        assert!(matches!(
            map_status(StatusCode::FORBIDDEN, ""),
            GatewayError::Unauthorized(_)
        ));
        assert!(matches!(
            map_status(StatusCode::NOT_FOUND, "no such deployment"),
            GatewayError::ModelNotAvailable(_)
        ));
        assert!(matches!(
            map_status(StatusCode::TOO_MANY_REQUESTS, ""),
            GatewayError::QuotaExceeded(_)
        ));
        assert_eq!(
            map_status(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            GatewayError::RequestFailed("HTTP 500: boom".to_string())
        );
    }
}
