mod api;
mod components;
mod feedback;
mod ocr;
mod presentation;
mod state;

use api::TransportError;
use gloo_file::{File as GlooFile, ObjectUrl};
use ocr::ExtractionOutcome;
use shared::ClassificationResult;
use state::{Analysis, Cycle, InputModality};
use web_sys::DragEvent;
use yew::prelude::*;

use components::handlers;

// Models
struct StagedImage {
    file: GlooFile,
    preview_url: ObjectUrl,
}

// Yew msg components
enum Msg {
    // Input acquisition
    SetModality(InputModality),
    DraftChanged(String),
    ImageSelected(GlooFile),
    RemoveImage,
    SetDragging(bool),
    HandleDrop(DragEvent),
    SetNotice(String),

    // Pipeline stages
    SubmitText,
    ExtractionFinished(Cycle, ExtractionOutcome),
    ClassificationFinished(Cycle, Result<ClassificationResult, TransportError>),

    // Lifecycle
    Reset,

    // Feedback
    ToggleFeedback,
    SubmitFeedback(bool),

    // UI states
    ToggleTheme,
}

// Main component
struct Model {
    modality: InputModality,
    draft_text: String,
    staged_image: Option<StagedImage>,
    extracted_text: Option<String>,
    analysis: Analysis,
    analyzed_text: Option<String>,
    input_notice: Option<String>,
    feedback_open: bool,
    feedback_sent: bool,
    is_dragging: bool,
    theme: String,
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
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

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Input acquisition
            Msg::SetModality(modality) => handlers::handle_set_modality(self, modality),
            Msg::DraftChanged(text) => handlers::handle_draft_changed(self, text),
            Msg::ImageSelected(file) => handlers::handle_image_selected(self, ctx, file),
            Msg::RemoveImage => handlers::handle_remove_image(self),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SetNotice(notice) => {
                self.input_notice = Some(notice);
                true
            }

            // Pipeline stages
            Msg::SubmitText => handlers::handle_submit_text(self, ctx),
            Msg::ExtractionFinished(cycle, outcome) => {
                handlers::handle_extraction_finished(self, ctx, cycle, outcome)
            }
            Msg::ClassificationFinished(cycle, outcome) => {
                handlers::handle_classification_finished(self, cycle, outcome)
            }

            // Lifecycle
            Msg::Reset => handlers::handle_reset(self),

            // Feedback
            Msg::ToggleFeedback => handlers::handle_toggle_feedback(self),
            Msg::SubmitFeedback(judgment) => handlers::handle_submit_feedback(self, judgment),

            // UI states
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header() }
                <div class="top-right">
                    { components::theme_toggle::render_theme_toggle(&self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    <section class="input-panel">
                        { components::input_section::render_input_section(self, ctx) }
                        { components::disclaimer::render_disclaimer() }
                    </section>
                    <section class="results-panel">
                        { components::results::render_results(self, ctx) }
                    </section>
                </main>

                <footer class="app-footer">
                    <p>{"Cyberbullying Detection | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
