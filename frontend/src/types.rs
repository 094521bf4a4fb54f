//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **File Types** - Staged upload entries
//! - **Request Types** - Analysis request lifecycle state
//! - **Toast Types** - Transient notifications
//! - **Error Types** - Frontend error handling

use thiserror::Error;

// =============================================================================
// File Types
// =============================================================================

/// A file staged for analysis.
///
/// `P` is the payload handle: the browser [`web_sys::File`] in the running
/// app. List operations never touch the payload, so they stay generic and
/// host tests can use a placeholder payload.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile<P = web_sys::File> {
    /// Opaque identifier, unique within the staged list.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type as reported by the browser.
    pub mime: String,
    /// Handle to the original binary payload.
    pub payload: P,
}

/// Remove the entry with the given id. No-op when the id is absent.
pub fn remove_file<P>(files: &mut Vec<UploadedFile<P>>, id: &str) {
    files.retain(|file| file.id != id);
}

/// Human-readable file size (B / KB / MB).
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Lifecycle of the analysis request.
///
/// Exactly one request may be in flight: `submit` is gated on
/// [`RequestState::is_loading`].
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState {
    /// No request yet.
    Idle,
    /// Request in flight; re-submission is rejected.
    Loading,
    /// Last request produced a report.
    Success,
    /// Last request failed with a user-facing message.
    Failed(String),
}

impl RequestState {
    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Message of the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// Toast severity level.
#[derive(Clone, Debug, PartialEq)]
pub enum ToastLevel {
    /// Action completed.
    Success,
    /// Action failed (non-fatal).
    Error,
    /// Neutral notice.
    Info,
}

impl ToastLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
            ToastLevel::Info => "toast-info",
        }
    }
}

/// A transient notification entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Identifier used for keyed rendering and dismissal.
    pub id: u32,
    /// Severity level
    pub level: ToastLevel,
    /// Notification message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. [`AppError::message`]
/// yields the bare user-facing text; the `Display` impl prefixes the
/// category for log output.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Submission rejected before any network call.
    #[error("Validation error: {0}")]
    Validation(String),
    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),
    /// Non-OK HTTP status with a parsed or raw message.
    #[error("Server error: {0}")]
    Server(String),
    /// Clipboard or download/print failure.
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// The user-facing message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg)
            | AppError::Network(msg)
            | AppError::Server(msg)
            | AppError::Export(msg) => msg,
        }
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(id: &str, name: &str) -> UploadedFile<()> {
        UploadedFile {
            id: id.to_string(),
            name: name.to_string(),
            size: 1024,
            mime: "application/pdf".to_string(),
            payload: (),
        }
    }

    #[test]
    fn remove_file_drops_matching_entry() {
        let mut files = vec![staged("a", "cv.pdf"), staged("b", "notes.txt")];
        remove_file(&mut files, "a");
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, "b");
    }

    #[test]
    fn remove_file_with_unknown_id_is_a_noop() {
        let mut files = vec![staged("a", "cv.pdf"), staged("b", "notes.txt")];
        remove_file(&mut files, "missing");
        assert_eq!(files, vec![staged("a", "cv.pdf"), staged("b", "notes.txt")]);
    }

    #[test]
    fn duplicate_names_may_coexist() {
        let mut files = vec![staged("a", "cv.pdf"), staged("b", "cv.pdf")];
        remove_file(&mut files, "a");
        assert_eq!(files, vec![staged("b", "cv.pdf")]);
    }

    #[test]
    fn file_sizes_format_by_magnitude() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn only_loading_blocks_submission() {
        assert!(RequestState::Loading.is_loading());
        assert!(!RequestState::Idle.is_loading());
        assert!(!RequestState::Success.is_loading());
        assert!(!RequestState::Failed("boom".to_string()).is_loading());
    }

    #[test]
    fn failed_state_exposes_its_message() {
        assert_eq!(RequestState::Failed("bad file".to_string()).error(), Some("bad file"));
        assert_eq!(RequestState::Idle.error(), None);
    }

    #[test]
    fn app_error_message_strips_category_prefix() {
        let err = AppError::Server("bad file".to_string());
        assert_eq!(err.message(), "bad file");
        assert_eq!(err.to_string(), "Server error: bad file");
    }
}
