use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_file};
use crate::state::InputModality;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

pub fn render_input_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="input-section">
            <h2>{"Analyze Content"}</h2>
            { render_modality_toggle(model, ctx) }
            {
                match model.modality {
                    InputModality::Text => render_text_entry(model, ctx),
                    InputModality::Image => render_image_upload(model, ctx),
                }
            }
            { render_input_notice(model) }
        </div>
    }
}

fn render_modality_toggle(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let toggle_button = |modality: InputModality, icon: &str, label: &str| {
        let active = model.modality == modality;
        html! {
            <button
                class={classes!("modality-btn", active.then_some("active"))}
                onclick={link.callback(move |_| Msg::SetModality(modality))}
            >
                <i class={format!("fa-solid {}", icon)}></i> { format!(" {}", label) }
            </button>
        }
    };

    html! {
        <div class="modality-toggle">
            { toggle_button(InputModality::Text, "fa-file-lines", "Text Input") }
            { toggle_button(InputModality::Image, "fa-upload", "Image Upload") }
        </div>
    }
}

fn render_text_entry(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let busy = model.analysis.is_busy();
    let submit_disabled = model.draft_text.trim().is_empty() || busy;

    let handle_input = link.callback(|e: InputEvent| {
        let target: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::DraftChanged(target.value())
    });

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitText
    });

    html! {
        <form class="text-entry" onsubmit={handle_submit}>
            <label for="text-input">{"Enter text to analyze"}</label>
            <textarea
                id="text-input"
                placeholder="Paste or type the text you want to analyze for cyberbullying content..."
                value={model.draft_text.clone()}
                oninput={handle_input}
                disabled={busy}
            />
            <p class="char-count">{ format!("{} characters", model.draft_text.len()) }</p>
            <button type="submit" class="analyze-btn" disabled={submit_disabled}>
                { if busy {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-paper-plane"></i>{" Analyze Text"}</> }
                }}
            </button>
        </form>
    }
}

fn render_image_upload(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let selected = input.files().as_ref().and_then(first_file);

        input.set_value("");

        match selected {
            Some(file) => Msg::ImageSelected(file),
            None => Msg::SetNotice("No image file selected.".to_string()),
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="image-upload">
            <input
                type="file"
                id="file-input"
                accept=".png,.jpg,.jpeg,image/png,image/jpeg"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop an image here, or click to select"}</p>
                    <p class="file-types">{"Supports PNG, JPG, JPEG (max 10MB)"}</p>
                </div>
            </div>

            { render_staged_image(model, ctx) }
            { render_extracted_text(model) }
        </div>
    }
}

fn render_staged_image(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(staged) = &model.staged_image else {
        return html! {};
    };

    html! {
        <div class="image-preview">
            <img
                src={staged.preview_url.to_string()}
                alt="Uploaded content"
            />
            <span class="file-name">{ staged.file.name() }</span>
            <button
                class="remove-btn"
                title="Remove this image"
                onclick={ctx.link().callback(|e: MouseEvent| {
                    e.stop_propagation();
                    Msg::RemoveImage
                })}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}

fn render_extracted_text(model: &Model) -> Html {
    let Some(text) = &model.extracted_text else {
        return html! {};
    };

    html! {
        <div class="extracted-text">
            <p class="extracted-label">
                <i class="fa-solid fa-file-lines"></i>{" Extracted Text:"}
            </p>
            <pre>{ text }</pre>
        </div>
    }
}

fn render_input_notice(model: &Model) -> Html {
    if let Some(notice) = &model.input_notice {
        html! {
            <div class="input-notice">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ notice }</p>
            </div>
        }
    } else {
        html! {}
    }
}
