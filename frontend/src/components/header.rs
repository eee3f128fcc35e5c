use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-shield-halved"></i> {" Cyberbullying Detection"}</h1>
            <p class="subtitle">{"Analyze typed text or a screenshot for harmful content"}</p>
        </header>
    }
}
