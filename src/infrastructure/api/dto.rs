use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// A message string, or a list of validation problems.
    pub detail: Value,
}

impl ErrorResponse {
    /// Returns the detail as readable text.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(message) => message.clone(),
            Value::Array(problems) => problems
                .iter()
                .map(|p| {
                    p.get("msg")
                        .and_then(Value::as_str)
                        .map_or_else(|| p.to_string(), str::to_string)
                })
                .collect::<Vec<_>>()
                .join("; "),
            other => other.to_string(),
        }
    }
}

/// Body of `GET /api/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    /// Service name.
    pub message: String,
    /// Service version.
    pub version: String,
}

/// Body of a successful delete.
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    /// Confirmation text.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_string() {
        let body: ErrorResponse = serde_json::from_str(r#"{"detail":"Project not found"}"#).unwrap();
        assert_eq!(body.message(), "Project not found");
    }

    #[test]
    fn test_error_detail_validation_list() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"detail":[{"loc":["body","name"],"msg":"field required"},
                          {"loc":["body","address"],"msg":"field required"}]}"#,
        )
        .unwrap();
        assert_eq!(body.message(), "field required; field required");
    }
}
