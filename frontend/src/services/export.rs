//! Export actions for the analysis report.
//!
//! Every export is a client-side transformation of the current report:
//! clipboard copy, `.md`/`.html`/`.docx` downloads via object URLs, and
//! a print-to-PDF hand-off to the platform print dialog. Document
//! construction is pure; only the final hand-off touches the browser.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, HtmlDocument, HtmlTextAreaElement, Url};

use crate::config::PRINT_DELAY_MS;
use crate::types::{AppError, AppResult};

/// MIME type for raw Markdown downloads.
pub const MARKDOWN_MIME: &str = "text/markdown;charset=utf-8";

/// MIME type for standalone HTML downloads.
pub const HTML_MIME: &str = "text/html;charset=utf-8";

/// Wordprocessor MIME type. The payload is the HTML snapshot, not a
/// genuine binary DOCX; word processors accept it and convert on open.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Wrap an HTML fragment in a minimal standalone document shell.
pub fn html_document(title: &str, body_html: &str) -> String {
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{}</title>\
         <style>body{{font-family:Inter,system-ui,Arial;padding:20px;color:#111827}}\
         pre{{white-space:pre-wrap}}</style></head><body>{}</body></html>",
        title, body_html
    )
}

/// File name for an exported artifact, e.g. `analysis.md`.
pub fn export_file_name(stem: &str, extension: &str) -> String {
    format!("{}.{}", stem, extension)
}

fn export_err(context: &str, e: JsValue) -> AppError {
    AppError::Export(format!("{}: {:?}", context, e))
}

/// Download `contents` as a file via a Blob object URL and a synthetic
/// anchor click.
pub fn download_file(filename: &str, mime: &str, contents: &str) -> AppResult<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let props = BlobPropertyBag::new();
    props.set_type(mime);

    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)
        .map_err(|e| export_err("Failed to create blob", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| export_err("Failed to create object URL", e))?;

    let document = gloo_utils::document();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| export_err("Failed to create anchor", e))?
        .dyn_into()
        .map_err(|_| AppError::Export("Anchor element has unexpected type".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| AppError::Export("Document has no body".to_string()))?;
    body.append_child(&anchor)
        .map_err(|e| export_err("Failed to attach anchor", e))?;
    anchor.click();
    anchor.remove();

    Url::revoke_object_url(&url).map_err(|e| export_err("Failed to revoke object URL", e))?;
    Ok(())
}

/// Best-effort clipboard copy.
///
/// Tries the async Clipboard API first and falls back to the legacy
/// hidden-textarea + `execCommand("copy")` path when it is unavailable
/// or rejected.
pub async fn copy_text(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let promise = window.navigator().clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => true,
        Err(_) => fallback_copy(text),
    }
}

fn fallback_copy(text: &str) -> bool {
    let document = gloo_utils::document();

    let textarea: HtmlTextAreaElement = match document
        .create_element("textarea")
        .ok()
        .and_then(|element| element.dyn_into().ok())
    {
        Some(textarea) => textarea,
        None => return false,
    };
    textarea.set_value(text);
    // Keep it out of view without display:none, which would make it
    // unselectable.
    let _ = textarea.set_attribute("style", "position:fixed;left:-9999px");

    let body = match document.body() {
        Some(body) => body,
        None => return false,
    };
    if body.append_child(&textarea).is_err() {
        return false;
    }

    let _ = textarea.focus();
    textarea.select();
    let copied = document
        .unchecked_ref::<HtmlDocument>()
        .exec_command("copy")
        .unwrap_or(false);
    textarea.remove();

    if !copied {
        log::error!("Fallback copy failed");
    }
    copied
}

/// Open a blank window, write the HTML document into it, and trigger the
/// platform print dialog (the user can choose "Save as PDF" there).
pub async fn open_print_dialog(html: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Export("No window".to_string()))?;

    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| export_err("Failed to open print window", e))?
        .ok_or_else(|| AppError::Export("Unable to open print window".to_string()))?;
    let document = print_window
        .document()
        .ok_or_else(|| AppError::Export("Print window has no document".to_string()))?;

    let html_document = document.unchecked_ref::<HtmlDocument>();
    html_document
        .write(&js_sys::Array::of1(&JsValue::from_str(html)))
        .map_err(|e| export_err("Failed to write print document", e))?;
    html_document
        .close()
        .map_err(|e| export_err("Failed to close print document", e))?;

    let _ = print_window.focus();
    TimeoutFuture::new(PRINT_DELAY_MS).await;
    print_window
        .print()
        .map_err(|e| export_err("Failed to open print dialog", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_document_wraps_fragment_in_shell() {
        let doc = html_document("LevelUp", "<h1>Hi</h1>");
        assert!(doc.starts_with("<!doctype html>"));
        assert!(doc.contains("<title>LevelUp</title>"));
        assert!(doc.contains("<body><h1>Hi</h1></body>"));
    }

    #[test]
    fn export_file_names_join_stem_and_extension() {
        assert_eq!(export_file_name("analysis", "md"), "analysis.md");
        assert_eq!(export_file_name("analysis", "docx"), "analysis.docx");
    }

    #[test]
    fn docx_export_uses_wordprocessor_mime() {
        assert!(DOCX_MIME.contains("wordprocessingml"));
    }
}
