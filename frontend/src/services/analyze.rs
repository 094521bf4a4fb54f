//! HTTP service for submitting a document + career goal for analysis.
//!
//! The backend answers with a JSON envelope on the happy path but is not
//! guaranteed to: deployments have returned raw Markdown bodies and plain
//! text errors. The response is therefore read as text first and parsed
//! tolerantly in both directions.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::{File, FormData};

use crate::types::{AppError, AppResult, UploadedFile};

/// Fallback error text when the server gives us nothing usable.
const DEFAULT_ERROR_MESSAGE: &str = "Failed to communicate with the server";

/// Envelope the backend emits.
///
/// Success: `{"status":"success","analysis":"..."}`.
/// Failure: `{"status":"error","message":"..."}` (some deployments use
/// `error` instead of `message`). Every field is optional so a partial
/// envelope still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of tolerant success-body parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    /// Body was a JSON envelope carrying an `analysis` string.
    Structured(String),
    /// Body was not a usable envelope; the raw text is the report.
    RawText(String),
}

impl AnalysisOutcome {
    /// The Markdown report, whichever way it arrived.
    pub fn into_markdown(self) -> String {
        match self {
            AnalysisOutcome::Structured(markdown) | AnalysisOutcome::RawText(markdown) => markdown,
        }
    }
}

/// Reject an empty submission before any network traffic.
///
/// A request needs at least one staged file or a non-whitespace goal.
pub fn validate_submission<P>(files: &[UploadedFile<P>], goal: &str) -> AppResult<()> {
    if files.is_empty() && goal.trim().is_empty() {
        return Err(AppError::Validation(
            "Please upload a file or enter a description.".to_string(),
        ));
    }
    Ok(())
}

/// Parse an HTTP-OK body into the report.
///
/// A JSON envelope with an `analysis` string wins; anything else (plain
/// text, bare JSON values, envelopes without `analysis`) is treated as
/// raw Markdown.
pub fn parse_success_body(raw: &str) -> AnalysisOutcome {
    match serde_json::from_str::<AnalysisResponse>(raw) {
        Ok(AnalysisResponse {
            analysis: Some(analysis),
            ..
        }) => AnalysisOutcome::Structured(analysis),
        _ => AnalysisOutcome::RawText(raw.to_string()),
    }
}

/// Extract the user-facing message from a non-OK body.
///
/// JSON envelopes are searched for `message` then `error`; non-JSON
/// bodies are used verbatim; an empty body falls back to a fixed text.
pub fn parse_error_message(raw: &str) -> String {
    match serde_json::from_str::<AnalysisResponse>(raw) {
        Ok(envelope) => envelope
            .message
            .or(envelope.error)
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        Err(_) if raw.is_empty() => DEFAULT_ERROR_MESSAGE.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Submit the goal text and (optionally) one document for analysis.
///
/// Builds a `multipart/form-data` body with the document under `file`
/// and the goal under `user_query`, POSTs it to `endpoint`, and returns
/// the Markdown report.
pub async fn request_analysis(file: Option<File>, goal: &str, endpoint: &str) -> AppResult<String> {
    let form = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create form data: {:?}", e)))?;

    if let Some(file) = file {
        form.append_with_blob("file", &file)
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
    }

    form.append_with_str("user_query", goal)
        .map_err(|e| AppError::Network(format!("Failed to append query: {:?}", e)))?;

    let response = Request::post(endpoint)
        .body(form)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    // Read the body as raw text first so a non-JSON reply never aborts
    // error reporting or the Markdown fallback.
    let raw = response.text().await.unwrap_or_default();

    if !response.ok() {
        log::warn!("Server returned {}: {}", response.status(), raw);
        return Err(AppError::Server(parse_error_message(&raw)));
    }

    Ok(parse_success_body(&raw).into_markdown())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(id: &str) -> UploadedFile<()> {
        UploadedFile {
            id: id.to_string(),
            name: "cv.pdf".to_string(),
            size: 4096,
            mime: "application/pdf".to_string(),
            payload: (),
        }
    }

    #[test]
    fn empty_submission_is_rejected() {
        let err = validate_submission::<()>(&[], "").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn whitespace_goal_counts_as_empty() {
        assert!(validate_submission::<()>(&[], "   \n").is_err());
    }

    #[test]
    fn goal_only_submission_is_accepted() {
        assert!(validate_submission::<()>(&[], "Become a staff engineer").is_ok());
    }

    #[test]
    fn file_only_submission_is_accepted() {
        assert!(validate_submission(&[staged("a")], "").is_ok());
    }

    #[test]
    fn success_envelope_yields_structured_analysis() {
        let outcome = parse_success_body(r##"{"status":"success","analysis":"# Hi"}"##);
        assert_eq!(outcome, AnalysisOutcome::Structured("# Hi".to_string()));
        assert_eq!(outcome.into_markdown(), "# Hi");
    }

    #[test]
    fn plain_text_success_body_is_used_verbatim() {
        let outcome = parse_success_body("plain text report");
        assert_eq!(outcome, AnalysisOutcome::RawText("plain text report".to_string()));
    }

    #[test]
    fn json_without_analysis_falls_back_to_raw_text() {
        let outcome = parse_success_body(r#"{"status":"success"}"#);
        assert_eq!(
            outcome,
            AnalysisOutcome::RawText(r#"{"status":"success"}"#.to_string())
        );
    }

    #[test]
    fn error_field_is_surfaced_as_is() {
        assert_eq!(parse_error_message(r#"{"error":"bad file"}"#), "bad file");
    }

    #[test]
    fn message_field_wins_over_error_field() {
        assert_eq!(
            parse_error_message(r#"{"message":"quota exceeded","error":"bad file"}"#),
            "quota exceeded"
        );
    }

    #[test]
    fn non_json_error_body_is_used_verbatim() {
        assert_eq!(parse_error_message("upstream timed out"), "upstream timed out");
    }

    #[test]
    fn empty_or_bare_envelopes_fall_back_to_default() {
        assert_eq!(parse_error_message(""), DEFAULT_ERROR_MESSAGE);
        assert_eq!(parse_error_message(r#"{"status":"error"}"#), DEFAULT_ERROR_MESSAGE);
    }
}
