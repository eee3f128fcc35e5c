use gloo_net::http::Request;
use shared::FeedbackRecord;
use wasm_bindgen_futures::spawn_local;

/// Fire-and-forget delivery to the feedback sink. Failures are logged and
/// swallowed; they never touch the analysis state or the user.
pub fn submit(record: FeedbackRecord) {
    spawn_local(async move {
        let request = match Request::post("/api/feedback").json(&record) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("failed to encode feedback record: {}", err);
                return;
            }
        };

        match request.send().await {
            Ok(response) if response.ok() => {
                log::info!("feedback {} delivered", record.id);
            }
            Ok(response) => {
                log::warn!("feedback sink returned status {}", response.status());
            }
            Err(err) => {
                log::warn!("failed to deliver feedback: {}", err);
            }
        }
    });
}
