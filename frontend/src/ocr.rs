use gloo_file::File as GlooFile;
use js_sys::{Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Language model requested from the engine for every extraction.
pub const OCR_LANGUAGE: &str = "eng";

// Tesseract.js is loaded as a global by the host page; the worker lifecycle
// is createWorker -> recognize -> terminate.
#[wasm_bindgen]
extern "C" {
    type TesseractWorker;

    #[wasm_bindgen(catch, js_namespace = Tesseract, js_name = createWorker)]
    fn create_worker(language: &str) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn recognize(this: &TesseractWorker, image: &web_sys::Blob) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method)]
    fn terminate(this: &TesseractWorker) -> Promise;
}

/// Result of one extraction attempt. An image that recognizes cleanly but
/// contains no text is a `Failure(Empty)`, not an engine fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Text(String),
    Failure(ExtractionError),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no text found in image")]
    Empty,
    #[error("OCR engine error: {0}")]
    Engine(String),
}

/// Runs the engine over one image. The worker is terminated on every path,
/// including recognition failure, so superseded extractions cannot leak
/// engine resources.
pub async fn extract_text(image: &GlooFile, language: &str) -> ExtractionOutcome {
    let worker = match acquire_worker(language).await {
        Ok(worker) => worker,
        Err(detail) => return ExtractionOutcome::Failure(ExtractionError::Engine(detail)),
    };

    let recognized = recognize_blob(&worker, image.as_ref()).await;
    release_worker(worker).await;

    match recognized {
        Ok(raw) => outcome_from_raw(&raw),
        Err(detail) => ExtractionOutcome::Failure(ExtractionError::Engine(detail)),
    }
}

/// Trims the raw engine output and classifies emptiness. Kept separate from
/// the engine calls so the cleaning rule is testable without a browser.
pub fn outcome_from_raw(raw: &str) -> ExtractionOutcome {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        ExtractionOutcome::Failure(ExtractionError::Empty)
    } else {
        ExtractionOutcome::Text(cleaned.to_string())
    }
}

async fn acquire_worker(language: &str) -> Result<TesseractWorker, String> {
    let pending = create_worker(language).map_err(describe_js)?;
    let worker = JsFuture::from(pending).await.map_err(describe_js)?;
    Ok(worker.unchecked_into::<TesseractWorker>())
}

async fn release_worker(worker: TesseractWorker) {
    if let Err(err) = JsFuture::from(worker.terminate()).await {
        log::warn!("failed to terminate OCR worker: {:?}", err);
    }
}

async fn recognize_blob(worker: &TesseractWorker, image: &web_sys::Blob) -> Result<String, String> {
    let pending = worker.recognize(image).map_err(describe_js)?;
    let result = JsFuture::from(pending).await.map_err(describe_js)?;
    let data = Reflect::get(&result, &JsValue::from_str("data")).map_err(describe_js)?;
    let text = Reflect::get(&data, &JsValue::from_str("text")).map_err(describe_js)?;
    Ok(text.as_string().unwrap_or_default())
}

fn describe_js(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_text_is_trimmed() {
        assert_eq!(
            outcome_from_raw("  You are worthless \n"),
            ExtractionOutcome::Text("You are worthless".to_string())
        );
    }

    #[test]
    fn whitespace_only_output_is_an_empty_result_not_a_fault() {
        assert_eq!(
            outcome_from_raw(" \n\t "),
            ExtractionOutcome::Failure(ExtractionError::Empty)
        );
        assert_eq!(
            outcome_from_raw(""),
            ExtractionOutcome::Failure(ExtractionError::Empty)
        );
    }

    #[test]
    fn interior_whitespace_is_preserved() {
        assert_eq!(
            outcome_from_raw("go away\nnobody likes you"),
            ExtractionOutcome::Text("go away\nnobody likes you".to_string())
        );
    }
}
