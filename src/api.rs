// Request Adapter
// Transport-free entry points for a request handler: input guard,
// error mapping and JSON in/out.

use serde::Serialize;
use tracing::{error, warn};

use crate::models::{ApiInfo, DetectRequest, ErrorResponse, ScoreResult};
use crate::services::detection::{DetectionSensitivity, Detector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

pub fn api_info() -> ApiInfo {
    ApiInfo {
        status: "ok".to_string(),
        message: "AI Detector API is running".to_string(),
        usage: "POST /api/detect with {\"text\": \"your text here\"}".to_string(),
        reference: "https://justdone.com/ai-detector".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Detect with the process-wide detector.
pub fn detect_text(request: DetectRequest) -> Result<ScoreResult, ErrorResponse> {
    detect_text_with(Detector::shared(), &request)
}

pub fn detect_text_with(detector: &Detector, request: &DetectRequest) -> Result<ScoreResult, ErrorResponse> {
    let min_chars = detector.min_text_chars();
    if request.text.trim().chars().count() < min_chars {
        return Err(ErrorResponse::new(format!(
            "Text must be at least {} characters long for accurate analysis",
            min_chars
        )));
    }

    let outcome = match request.sensitivity.as_deref() {
        Some(s) => detector.detect_with_sensitivity(&request.text, DetectionSensitivity::from_str(s)),
        None => detector.detect(&request.text),
    };
    outcome.map_err(|e| {
        warn!(error = %e, "detect.rejected");
        ErrorResponse::new(e.reason())
    })
}

/// JSON body in, status + JSON body out.
pub fn handle_detect_json(body: &str) -> ApiReply {
    handle_detect_json_with(Detector::shared(), body)
}

pub fn handle_detect_json_with(detector: &Detector, body: &str) -> ApiReply {
    let request: DetectRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(_) => return error_reply(400, "Invalid JSON format"),
    };

    match detect_text_with(detector, &request) {
        Ok(result) => json_reply(200, &result),
        Err(err) => json_reply(400, &err),
    }
}

pub fn info_reply() -> ApiReply {
    json_reply(200, &api_info())
}

fn error_reply(status: u16, message: &str) -> ApiReply {
    json_reply(status, &ErrorResponse::new(message))
}

fn json_reply<T: Serialize>(status: u16, payload: &T) -> ApiReply {
    match serde_json::to_string(payload) {
        Ok(body) => ApiReply { status, body },
        Err(e) => {
            error!(error = %e, "response.serialize_failed");
            ApiReply {
                status: 500,
                body: format!("{{\"error\":\"Internal server error: {}\"}}", e.to_string().replace('"', "'")),
            }
        }
    }
}
