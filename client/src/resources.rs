//! Text resources packaged with the program.
use std::collections::HashMap;

use crate::BootstrapError;

/// Logical path of the query submitted to the webhook.
pub const FINAL_QUERY: &str = "queries/finalQuery.sql";

#[derive(Debug, Clone, Default)]
pub struct Resources {
    entries: HashMap<String, String>,
}

impl Resources {
    /// The resources compiled into this binary.
    pub fn bundled() -> Self {
        Self::empty().with(
            FINAL_QUERY,
            include_str!("../resources/queries/finalQuery.sql"),
        )
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.entries.insert(path.into(), contents.into());
        self
    }

    pub fn get(&self, path: &str) -> Result<&str, BootstrapError> {
        self.entries
            .get(path)
            .map(String::as_str)
            .ok_or_else(|| BootstrapError::ResourceMissing(path.to_string()))
    }

    pub fn load_final_query(&self) -> Result<String, BootstrapError> {
        self.get(FINAL_QUERY).map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_query_is_present() {
        let query = Resources::bundled()
            .load_final_query()
            .expect("final query should be bundled");
        assert!(!query.trim().is_empty());
    }

    #[test]
    fn missing_entry() {
        let err = Resources::empty().load_final_query().unwrap_err();
        assert!(matches!(err, BootstrapError::ResourceMissing(p) if p == FINAL_QUERY));
    }

    #[test]
    fn contents_are_verbatim() {
        let text = "SELECT 1;\r\n  -- trailing\n";
        let resources = Resources::empty().with(FINAL_QUERY, text);
        assert_eq!(resources.load_final_query().unwrap(), text);
    }
}
