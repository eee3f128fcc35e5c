use gloo_console::error;
use gloo_net::http::Request;
use shared::{ClassificationResult, ClassifyRequest};
use thiserror::Error;

/// The only failure the pipeline sees from the classification call. The
/// variant detail is diagnostic; callers surface a generic message.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Submits trimmed, non-empty text to the classification endpoint. Empty
/// input is a caller bug, guarded at the input boundary. No automatic retry;
/// retry is a user-initiated re-submission.
pub async fn classify(text: &str) -> Result<ClassificationResult, TransportError> {
    let request = Request::post("/api/classify-text")
        .json(&ClassifyRequest {
            text: text.to_string(),
        })
        .map_err(|err| TransportError::Encode(err.to_string()))?;

    let response = request.send().await.map_err(|err| {
        error!(format!("classification request failed: {:?}", err));
        TransportError::Network(err.to_string())
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!(format!("classification endpoint returned {}: {}", status, body));
        return Err(TransportError::Status { status, body });
    }

    let body = response
        .text()
        .await
        .map_err(|err| TransportError::Network(err.to_string()))?;
    serde_json::from_str::<ClassificationResult>(&body).map_err(|err| {
        error!(format!("undecodable classification response: {} ({})", err, body));
        TransportError::Decode(err.to_string())
    })
}
