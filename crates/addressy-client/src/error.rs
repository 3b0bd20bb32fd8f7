use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the Capture Interactive client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network or TLS failure from the underlying HTTP client, or a
    /// non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with zero items.
    #[error("no results for {operation} query")]
    EmptyResult {
        /// Which call came back empty: `"find"`, `"resolve"`, or `"retrieve"`.
        operation: &'static str,
    },

    /// The first returned item carried the service's error marker.
    #[error("service error: {0}")]
    Remote(RemoteFault),

    /// A container resolution inside [`lookup`](crate::LookupClient::lookup)
    /// failed. Carries the id of the container that could not be resolved.
    #[error("container '{container}' could not be resolved: {source}")]
    Resolve {
        container: String,
        #[source]
        source: Box<LookupError>,
    },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL given to
    /// [`with_base_url`](crate::LookupClient::with_base_url) did not parse.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
}

/// Structured error payload the service places on the first item of a
/// response when a request is rejected (bad key, malformed id, and so on).
///
/// Both API dialects use the same field names. Every field except the
/// numeric-string `error` code is optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFault {
    #[serde(rename = "Error")]
    pub error: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Cause", default)]
    pub cause: Option<String>,
    #[serde(rename = "Resolution", default)]
    pub resolution: Option<String>,
}

impl std::fmt::Display for RemoteFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "[{}] {desc}", self.error),
            None => write!(f, "[{}]", self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_fault_display_includes_code_and_description() {
        let fault: RemoteFault = serde_json::from_value(serde_json::json!({
            "Error": "2",
            "Description": "Unknown key",
            "Cause": "The key you are using to access the service was not found.",
            "Resolution": "Please check that the key is correct."
        }))
        .expect("fault payload should parse");

        assert_eq!(fault.to_string(), "[2] Unknown key");
    }

    #[test]
    fn remote_fault_parses_without_optional_fields() {
        let fault: RemoteFault =
            serde_json::from_value(serde_json::json!({ "Error": "1001" }))
                .expect("minimal fault payload should parse");

        assert_eq!(fault.error, "1001");
        assert!(fault.description.is_none());
        assert_eq!(fault.to_string(), "[1001]");
    }

    #[test]
    fn resolve_error_names_the_failing_container() {
        let err = LookupError::Resolve {
            container: "GB|RM|ENG|1A1AA-AA1".to_owned(),
            source: Box::new(LookupError::EmptyResult {
                operation: "resolve",
            }),
        };

        let msg = err.to_string();
        assert!(msg.contains("GB|RM|ENG|1A1AA-AA1"), "got: {msg}");
        assert!(msg.contains("no results for resolve query"), "got: {msg}");
    }
}
