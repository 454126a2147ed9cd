use serde::{Deserialize, Serialize};

/// Success body (2xx) of the generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Where the rendered artifact can be fetched from. The server may
    /// answer 2xx without it; the client then shows nothing.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plot_url: Option<String>,
}

/// Failure body (non-2xx) of the generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateErrorResponse {
    /// Human-readable reason, surfaced to the user verbatim when present
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}
