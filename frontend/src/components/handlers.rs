use super::super::{Model, Msg, StagedImage};
use crate::api::{self, TransportError};
use crate::components::utils::{first_file, validate_upload};
use crate::feedback;
use crate::ocr::{self, ExtractionError, ExtractionOutcome, OCR_LANGUAGE};
use crate::state::{AnalysisError, AnalysisState, Cycle, InputModality};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{ClassificationResult, FeedbackRecord};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_set_modality(model: &mut Model, modality: InputModality) -> bool {
    if model.modality == modality {
        return false;
    }
    model.modality = modality;
    // Abandons any in-flight work and the current result; the other
    // modality's staged input stays.
    model.analysis.reset();
    model.analyzed_text = None;
    model.input_notice = None;
    clear_feedback(model);
    true
}

pub fn handle_draft_changed(model: &mut Model, text: String) -> bool {
    model.draft_text = text;
    true
}

pub fn handle_submit_text(model: &mut Model, ctx: &Context<Model>) -> bool {
    let text = model.draft_text.trim().to_string();
    // The submit button is disabled for both cases; this guard keeps the
    // machine from ever observing Submitting for empty input.
    if text.is_empty() || model.analysis.is_busy() {
        return false;
    }

    model.input_notice = None;
    clear_feedback(model);
    model.analyzed_text = Some(text.clone());
    let cycle = model.analysis.begin_submission();
    spawn_classification(ctx, cycle, text);
    true
}

pub fn handle_image_selected(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    if let Err(notice) = validate_upload(&file.raw_mime_type(), file.size()) {
        model.input_notice = Some(notice);
        return true;
    }

    model.input_notice = None;
    clear_feedback(model);
    model.extracted_text = None;
    model.analyzed_text = None;
    model.staged_image = Some(StagedImage {
        preview_url: ObjectUrl::from(file.clone()),
        file: file.clone(),
    });

    // A fresh upload supersedes any extraction still in flight.
    let cycle = model.analysis.begin_extraction();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = ocr::extract_text(&file, OCR_LANGUAGE).await;
        link.send_message(Msg::ExtractionFinished(cycle, outcome));
    });
    true
}

pub fn handle_remove_image(model: &mut Model) -> bool {
    if model.staged_image.take().is_none() {
        return false;
    }
    model.extracted_text = None;
    model.input_notice = None;
    if model.analysis.is_busy() {
        model.analysis.reset();
        model.analyzed_text = None;
    }
    true
}

pub fn handle_extraction_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    cycle: Cycle,
    outcome: ExtractionOutcome,
) -> bool {
    match outcome {
        ExtractionOutcome::Text(text) => {
            if !model.analysis.advance_to_submission(cycle) {
                log::debug!("dropping stale extraction result");
                return false;
            }
            model.extracted_text = Some(text.clone());
            model.analyzed_text = Some(text.clone());
            spawn_classification(ctx, cycle, text);
            true
        }
        ExtractionOutcome::Failure(error) => {
            let reason = match error {
                ExtractionError::Empty => AnalysisError::NoTextFound,
                ExtractionError::Engine(detail) => {
                    log::error!("OCR engine failure: {}", detail);
                    AnalysisError::ExtractionFailed
                }
            };
            if !model.analysis.fail_extraction(cycle, reason) {
                log::debug!("dropping stale extraction failure");
                return false;
            }
            true
        }
    }
}

pub fn handle_classification_finished(
    model: &mut Model,
    cycle: Cycle,
    outcome: Result<ClassificationResult, TransportError>,
) -> bool {
    let accepted = match outcome {
        Ok(result) => model.analysis.complete(cycle, result),
        Err(_) => model
            .analysis
            .fail_submission(cycle, AnalysisError::TransportFailed),
    };
    if !accepted {
        log::debug!("dropping stale classification completion");
    }
    accepted
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.analysis.reset();
    model.draft_text.clear();
    model.staged_image = None;
    model.extracted_text = None;
    model.analyzed_text = None;
    model.input_notice = None;
    clear_feedback(model);
    true
}

pub fn handle_toggle_feedback(model: &mut Model) -> bool {
    if model.feedback_sent {
        return false;
    }
    model.feedback_open = !model.feedback_open;
    true
}

pub fn handle_submit_feedback(model: &mut Model, judgment: bool) -> bool {
    match take_feedback_record(model, judgment) {
        Some(record) => {
            feedback::submit(record);
            true
        }
        None => false,
    }
}

/// Builds the feedback record for the current result, enforcing at most one
/// submission per completed analysis. Subsequent calls return `None` until a
/// new cycle starts.
fn take_feedback_record(model: &mut Model, judgment: bool) -> Option<FeedbackRecord> {
    if model.feedback_sent {
        return None;
    }
    let AnalysisState::Succeeded(result) = model.analysis.state() else {
        return None;
    };
    let record = FeedbackRecord::new(
        judgment,
        result.clone(),
        model.analyzed_text.clone().unwrap_or_default(),
    );
    model.feedback_sent = true;
    model.feedback_open = false;
    Some(record)
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|transfer| transfer.files())
        .and_then(|list| first_file(&list))
    {
        return handle_image_selected(model, ctx, file);
    }

    model.input_notice = Some("The dropped content did not contain an image file.".to_string());
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode").unwrap();
    }

    true
}

fn spawn_classification(ctx: &Context<Model>, cycle: Cycle, text: String) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = api::classify(&text).await;
        link.send_message(Msg::ClassificationFinished(cycle, outcome));
    });
}

fn clear_feedback(model: &mut Model) {
    model.feedback_open = false;
    model.feedback_sent = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Analysis;
    use shared::Classification;

    fn test_model() -> Model {
        Model {
            modality: InputModality::Text,
            draft_text: String::new(),
            staged_image: None,
            extracted_text: None,
            analysis: Analysis::new(),
            analyzed_text: None,
            input_notice: None,
            feedback_open: false,
            feedback_sent: false,
            is_dragging: false,
            theme: "light".to_string(),
        }
    }

    fn stub_result() -> ClassificationResult {
        ClassificationResult {
            classification: Classification::Safe,
            confidence: 0.75,
            theme: Some("safe".to_string()),
            keywords: Vec::new(),
        }
    }

    fn complete_analysis(model: &mut Model, text: &str) {
        model.analyzed_text = Some(text.to_string());
        let cycle = model.analysis.begin_submission();
        assert!(model.analysis.complete(cycle, stub_result()));
    }

    #[test]
    fn feedback_is_recorded_at_most_once_per_cycle() {
        let mut model = test_model();
        complete_analysis(&mut model, "hello there");

        let record = take_feedback_record(&mut model, true).expect("first feedback");
        assert!(record.judgment);
        assert_eq!(record.original_text, "hello there");
        assert_eq!(record.result, stub_result());

        // Second attempt before the next cycle is a no-op.
        assert!(take_feedback_record(&mut model, false).is_none());
    }

    #[test]
    fn feedback_reopens_after_a_new_cycle() {
        let mut model = test_model();
        complete_analysis(&mut model, "first");
        assert!(take_feedback_record(&mut model, true).is_some());

        handle_reset(&mut model);
        complete_analysis(&mut model, "second");
        let record = take_feedback_record(&mut model, false).expect("fresh cycle");
        assert_eq!(record.original_text, "second");
    }

    #[test]
    fn feedback_requires_a_completed_result() {
        let mut model = test_model();
        assert!(take_feedback_record(&mut model, true).is_none());

        let cycle = model.analysis.begin_submission();
        model
            .analysis
            .fail_submission(cycle, AnalysisError::TransportFailed);
        assert!(take_feedback_record(&mut model, true).is_none());
    }

    #[test]
    fn modality_switch_abandons_analysis_but_keeps_staged_text() {
        let mut model = test_model();
        model.draft_text = "you are worthless".to_string();
        complete_analysis(&mut model, "you are worthless");

        assert!(handle_set_modality(&mut model, InputModality::Image));
        assert_eq!(model.analysis.state(), &AnalysisState::Idle);
        assert_eq!(model.draft_text, "you are worthless");
        assert_eq!(model.analyzed_text, None);

        // Switching to the already-active modality changes nothing.
        assert!(!handle_set_modality(&mut model, InputModality::Image));
    }

    #[test]
    fn reset_clears_staged_input_result_and_error() {
        let mut model = test_model();
        model.draft_text = "something".to_string();
        model.extracted_text = Some("ocr text".to_string());
        model.input_notice = Some("notice".to_string());
        complete_analysis(&mut model, "something");

        assert!(handle_reset(&mut model));
        assert_eq!(model.analysis.state(), &AnalysisState::Idle);
        assert!(model.draft_text.is_empty());
        assert_eq!(model.extracted_text, None);
        assert_eq!(model.analyzed_text, None);
        assert_eq!(model.input_notice, None);
        assert!(!model.feedback_sent);
    }
}
