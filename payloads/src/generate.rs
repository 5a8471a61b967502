use serde::{Deserialize, Serialize};

/// Identity sent to the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

/// What the generation endpoint hands back.
///
/// Both fields are optional on the wire; the caller decides what a missing value means.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub webhook: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
}
