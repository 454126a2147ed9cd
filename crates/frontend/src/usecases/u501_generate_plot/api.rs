use contracts::usecases::u501_generate_plot::{
    GenerateErrorResponse, GenerateRequest, GenerateResponse,
};
use gloo_net::http::Request;
use uuid::Uuid;

const GENERATE_URL: &str = "/generate";

/// Shown whenever the server did not supply a usable failure reason.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// POST the prompt to the generation endpoint.
///
/// The `Err` value is already the text to show the user: the server's
/// `error` field when it carries a non-empty string, the fixed fallback
/// for everything else (transport failures, unparsable bodies, missing
/// reason). Details go to the console log under a per-submission id.
pub async fn generate_plot(prompt: String) -> Result<GenerateResponse, String> {
    let request_id = Uuid::new_v4();
    log::debug!("[{}] submitting prompt to {}", request_id, GENERATE_URL);

    let response = Request::post(GENERATE_URL)
        .json(&GenerateRequest { prompt })
        .map_err(|e| {
            log::error!("[{}] failed to serialize request: {}", request_id, e);
            FALLBACK_ERROR_MESSAGE.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("[{}] request failed: {}", request_id, e);
            FALLBACK_ERROR_MESSAGE.to_string()
        })?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    if !response.ok() {
        let reason = failure_reason(&body);
        log::error!("[{}] generation failed with HTTP {}: {}", request_id, status, reason);
        return Err(reason);
    }

    success_payload(&body).map_err(|reason| {
        log::error!("[{}] unparsable body for HTTP {}: {}", request_id, status, reason);
        reason
    })
}

/// Interpret a 2xx body. Anything that is not JSON at all counts as a
/// failure; JSON that merely lacks a usable string `plot_url` (absent
/// field, null, wrong type, non-object body) is a silent empty result.
fn success_payload(body: &str) -> Result<GenerateResponse, String> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| FALLBACK_ERROR_MESSAGE.to_string())?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Extract the user-facing reason from a non-2xx body. Only a non-empty
/// string `error` field is surfaced verbatim.
fn failure_reason(body: &str) -> String {
    serde_json::from_str::<GenerateErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .filter(|reason| !reason.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_with_plot_url() {
        let response = success_payload(r#"{"plot_url": "plots/7.png"}"#).unwrap();
        assert_eq!(response.plot_url.as_deref(), Some("plots/7.png"));
    }

    #[test]
    fn test_success_body_without_plot_url_is_silent() {
        let response = success_payload("{}").unwrap();
        assert!(response.plot_url.is_none());
    }

    #[test]
    fn test_success_body_with_unusable_plot_url_is_silent() {
        // JSON, but nothing a URL can be read from: no error either
        assert!(success_payload(r#"{"plot_url": 5}"#).unwrap().plot_url.is_none());
        assert!(success_payload(r#"{"plot_url": null}"#).unwrap().plot_url.is_none());
        assert!(success_payload("[1, 2, 3]").unwrap().plot_url.is_none());
    }

    #[test]
    fn test_non_json_success_body_is_an_error() {
        let reason = success_payload("<html>oops</html>").unwrap_err();
        assert_eq!(reason, FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_failure_reason_uses_server_message_verbatim() {
        assert_eq!(failure_reason(r#"{"error": "bad prompt"}"#), "bad prompt");
    }

    #[test]
    fn test_failure_reason_falls_back_when_absent() {
        assert_eq!(failure_reason("{}"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(failure_reason(r#"{"error": null}"#), FALLBACK_ERROR_MESSAGE);
        assert_eq!(failure_reason(r#"{"error": ""}"#), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_failure_reason_falls_back_on_unparsable_body() {
        assert_eq!(failure_reason("<html>500</html>"), FALLBACK_ERROR_MESSAGE);
        assert_eq!(failure_reason(""), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_failure_reason_ignores_non_string_error() {
        assert_eq!(failure_reason(r#"{"error": 42}"#), FALLBACK_ERROR_MESSAGE);
    }
}
