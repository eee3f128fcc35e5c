use super::super::Model;
use super::super::Msg;
use super::utils::debounce;
use crate::presentation::present;
use crate::state::AnalysisState;
use shared::ClassificationResult;
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="results-section">
            <h2>{"Analysis Results"}</h2>
            {
                // One panel per state; the machine guarantees they are
                // mutually exclusive.
                match model.analysis.state() {
                    AnalysisState::Idle => render_idle_prompt(),
                    AnalysisState::Extracting => render_spinner("Extracting text from image..."),
                    AnalysisState::Submitting => render_spinner("Analyzing content..."),
                    AnalysisState::Failed(error) => render_error(&error.to_string()),
                    AnalysisState::Succeeded(result) => render_result_panel(model, ctx, result),
                }
            }
        </div>
    }
}

fn render_idle_prompt() -> Html {
    html! {
        <div class="idle-prompt">
            <i class="fa-solid fa-shield-halved"></i>
            <p>{"Enter text or upload an image to begin analysis"}</p>
        </div>
    }
}

fn render_spinner(message: &str) -> Html {
    html! {
        <div class="loading-indicator">
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{ message }</p>
        </div>
    }
}

fn render_error(message: &str) -> Html {
    html! {
        <div class="error-message">
            <i class="fa-solid fa-circle-xmark"></i>
            <p>{ message }</p>
        </div>
    }
}

fn render_result_panel(model: &Model, ctx: &Context<Model>, result: &ClassificationResult) -> Html {
    let facets = present(result);
    let is_cyberbullying = result.is_cyberbullying();
    let link = ctx.link().clone();

    html! {
        <div class={classes!("results-container", if is_cyberbullying { "flagged" } else { "safe" })}>
            <div class="result-header">
                <h3>
                    { if is_cyberbullying {
                        html! { <><i class="fa-solid fa-circle-xmark"></i>{" Cyberbullying Detected"}</> }
                    } else {
                        html! { <><i class="fa-solid fa-circle-check"></i>{" Safe Content"}</> }
                    }}
                </h3>
                <div class="confidence-meter">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="meter">
                        <div
                            class="meter-fill"
                            style={format!("width: {}%", facets.confidence_percent)}
                        ></div>
                    </div>
                    <div class="meter-value">{ format!("{}%", facets.confidence_percent) }</div>
                </div>
            </div>

            {
                if result.theme.is_some() {
                    html! {
                        <span class={classes!("theme-badge", facets.theme_color)}>
                            <i class="fa-solid fa-shield-halved"></i>
                            { format!(" {}", facets.theme_label) }
                        </span>
                    }
                } else {
                    html! {}
                }
            }

            { render_keywords(result) }
            { if facets.show_crisis_banner { render_crisis_banner() } else { html! {} } }
            { render_feedback(model, ctx) }

            <button
                class="analyze-btn reset-btn"
                onclick={debounce(300, {
                    let link = link.clone();
                    move || link.callback(|_| Msg::Reset).emit(())
                })}
            >
                <i class="fa-solid fa-rotate"></i>{" Analyze New Content"}
            </button>
        </div>
    }
}

fn render_keywords(result: &ClassificationResult) -> Html {
    if result.keywords.is_empty() {
        return html! {};
    }

    html! {
        <div class="keywords">
            <h4>{"Detected Keywords:"}</h4>
            <div class="keyword-chips">
                { for result.keywords.iter().map(|keyword| html! {
                    <span class="keyword-chip">{ keyword }</span>
                })}
            </div>
        </div>
    }
}

fn render_crisis_banner() -> Html {
    html! {
        <div class="crisis-banner">
            <i class="fa-solid fa-triangle-exclamation"></i>
            <div>
                <h4>{"Important Notice"}</h4>
                <p>
                    {"This content contains language that may indicate suicidal thoughts. \
                      If you or someone you know is struggling, please reach out for help:"}
                </p>
                <p><strong>{"Philippines: "}</strong>{"1553 or 0917-899-8727"}</p>
                <p><strong>{"International: "}</strong>{"988 (US) or your local crisis hotline"}</p>
                <p class="crisis-note">
                    {"This AI is not a substitute for professional mental health support."}
                </p>
            </div>
        </div>
    }
}

fn render_feedback(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    if model.feedback_sent {
        return html! {
            <p class="feedback-thanks">{"Thank you for your feedback!"}</p>
        };
    }

    html! {
        <div class="feedback-section">
            <button
                class="feedback-toggle"
                onclick={link.callback(|_| Msg::ToggleFeedback)}
            >
                {"Was this analysis helpful?"}
            </button>
            {
                if model.feedback_open {
                    html! {
                        <div class="feedback-buttons">
                            <button
                                class="feedback-btn yes"
                                onclick={link.callback(|_| Msg::SubmitFeedback(true))}
                            >
                                <i class="fa-solid fa-thumbs-up"></i>{" Yes"}
                            </button>
                            <button
                                class="feedback-btn no"
                                onclick={link.callback(|_| Msg::SubmitFeedback(false))}
                            >
                                <i class="fa-solid fa-thumbs-down"></i>{" No"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
