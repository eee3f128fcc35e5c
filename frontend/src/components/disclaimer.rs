use yew::prelude::*;

/// Static notice shown under the input panel.
pub fn render_disclaimer() -> Html {
    html! {
        <div class="disclaimer">
            <i class="fa-solid fa-triangle-exclamation"></i>
            <div>
                <h3>{"Important Disclaimer"}</h3>
                <p>
                    <strong>{"Experimental AI: "}</strong>
                    {"This cyberbullying detection system is experimental and may not \
                      always be accurate. Results should not be considered definitive."}
                </p>
                <p>
                    <strong>{"Not Professional Advice: "}</strong>
                    {"This AI is not a substitute for professional mental health support, \
                      legal advice, or human judgment."}
                </p>
                <p>
                    <strong>{"Privacy: "}</strong>
                    {"Your inputs are not stored or logged unless you opt in to help \
                      improve the model."}
                </p>
                <div class="crisis-support">
                    <p><strong>{"Crisis Support"}</strong></p>
                    <p>{"If you or someone you know is in crisis, please contact:"}</p>
                    <p><strong>{"Philippines: "}</strong>{"1553 or 0917-899-8727"}</p>
                    <p><strong>{"International: "}</strong>{"988 (US) or your local crisis hotline"}</p>
                </div>
            </div>
        </div>
    }
}
