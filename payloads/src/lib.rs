pub mod generate;

/// Body of the final submission to the webhook.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub final_query: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_request_uses_camel_case_key() {
        let req = SubmitRequest {
            final_query: "SELECT 1;".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"finalQuery":"SELECT 1;"}"#
        );
    }
}
