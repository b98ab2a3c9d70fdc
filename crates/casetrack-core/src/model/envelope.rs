//! Response envelope validated at the client boundary.
//!
//! Every endpoint family decodes into `Result<Envelope<T>, ApiError>`: the
//! `Ok` variant carries a typed payload, the `Err` variant the server's
//! message and status.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Successful response body: `{ data, message?, success? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Envelope whose payload nobody reads (mutation acknowledgements).
pub type Ack = Envelope<Value>;

impl<T> Envelope<T> {
    pub fn empty() -> Self {
        Self {
            data: None,
            message: None,
            success: None,
        }
    }

    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            success: Some(true),
        }
    }

    /// True only when the server explicitly said `success: true`.
    pub fn reports_success(&self) -> bool {
        self.success == Some(true)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Validates a 2xx body against the expected shape.
    ///
    /// An empty or non-object body decodes as an envelope without data; an
    /// object whose `data` does not match `T` is rejected as malformed.
    pub fn decode(body: Value) -> Result<Self, ApiError> {
        if !body.is_object() {
            return Ok(Self::empty());
        }
        serde_json::from_value(body).map_err(ApiError::malformed)
    }
}

impl<T> Envelope<Vec<T>> {
    /// The collection, or empty when `data` was absent.
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[test]
    fn test_decode_list() {
        let env: Envelope<Vec<Item>> =
            Envelope::decode(json!({"data": [{"id": 1}, {"id": 2}], "success": true})).unwrap();
        assert!(env.reports_success());
        assert_eq!(env.into_items(), vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_missing_data_is_empty_not_error() {
        let env: Envelope<Vec<Item>> = Envelope::decode(json!({"message": "ok"})).unwrap();
        assert!(!env.reports_success());
        assert!(env.into_items().is_empty());

        let null_body: Envelope<Vec<Item>> = Envelope::decode(Value::Null).unwrap();
        assert!(null_body.into_items().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let result: Result<Envelope<Vec<Item>>, _> = Envelope::decode(json!({"data": "nope"}));
        let err = result.unwrap_err();
        assert_eq!(err.status_code, 500);
        assert!(err.message.starts_with("Malformed server response"));
    }

    #[test]
    fn test_message_fallback() {
        let env: Ack = Envelope::decode(json!({"message": ""})).unwrap();
        assert_eq!(env.message_or("FIR created"), "FIR created");
    }
}
