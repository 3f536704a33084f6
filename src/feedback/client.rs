use super::{FeedbackRecord, FeedbackSubmission, FEEDBACK_PATH};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Feedback endpoint, overridable at build time with `FEEDBACK_API_URL`
/// (e.g. `http://127.0.0.1:8080/api/feedback` when the server runs separately).
pub fn api_url() -> &'static str {
    option_env!("FEEDBACK_API_URL").unwrap_or(FEEDBACK_PATH)
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// POST a submission. Returns the server's acknowledgement message.
pub async fn submit_feedback(submission: &FeedbackSubmission) -> Result<String, String> {
    let body = serde_json::to_string(submission).map_err(|e| format!("encode: {e}"))?;
    let headers = Headers::new().map_err(|e| format!("{e:?}"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers.into());
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(api_url(), &opts).map_err(|e| format!("{e:?}"))?;
    let text = fetch_text(request).await?;
    let ack: MessageBody = serde_json::from_str(&text).map_err(|e| format!("parse: {e}"))?;
    Ok(ack.message)
}

/// GET every stored record, newest first.
pub async fn list_feedback() -> Result<Vec<FeedbackRecord>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(api_url(), &opts).map_err(|e| format!("{e:?}"))?;
    let text = fetch_text(request).await?;
    serde_json::from_str(&text).map_err(|e| format!("parse feedback list: {e}"))
}

async fn fetch_text(request: Request) -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_val = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {e:?}"))?;
    let resp: Response = resp_val.dyn_into().map_err(|_| "not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?
        .as_string()
        .ok_or_else(|| "not a string".to_string())?;

    if !resp.ok() {
        return Err(error_message(resp.status(), &text));
    }
    Ok(text)
}

/// Human-readable failure from a non-2xx response body.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => err.error,
        Err(_) => format!("HTTP {status}"),
    }
}
