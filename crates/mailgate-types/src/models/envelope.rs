use serde::{Deserialize, Serialize};

/// The only response body shape the gateway synthesizes locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self { error: error.into(), details: details.into() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_two_fields() {
        let envelope = ErrorEnvelope::new("Error retrieving data from /api/public/v1/me", "boom");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "error": "Error retrieving data from /api/public/v1/me",
                "details": "boom"
            })
        );
    }
}
