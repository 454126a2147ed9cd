use serde::{Deserialize, Serialize};

/// Request body of `POST /generate`.
///
/// The prompt travels exactly as typed: no trimming, no length limit,
/// and an empty prompt is still a valid request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Natural-language description of the desired plot
    pub prompt: String,
}
