//! Parsed response bodies.
//!
//! The API answers with JSON when it declares `application/json`; anything
//! else (HTML error pages from a proxy, plain text, malformed JSON) is kept
//! as raw text rather than failing the request.

use serde_json::Value;

/// Content type prefix that marks a JSON response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A response body, decoded as JSON when the server declared it.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    /// A decoded JSON document.
    Json(Value),
    /// The raw response text.
    Text(String),
}

impl ResponseBody {
    /// Decodes `text` according to the declared `content_type`.
    ///
    /// JSON is only attempted when the content type starts with
    /// `application/json`; a body that fails to decode falls back to text.
    #[must_use]
    pub fn parse(content_type: Option<&str>, text: String) -> Self {
        if !is_json_content_type(content_type) {
            return Self::Text(text);
        }
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(error) => {
                tracing::debug!("Response declared JSON but failed to decode: {}", error);
                Self::Text(text)
            }
        }
    }

    /// Returns `true` if the body was decoded as JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns the JSON document, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if the body was not JSON.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Consumes the body, returning the JSON document if any.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Returns `true` if the declared content type is JSON.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.trim_start().starts_with(JSON_CONTENT_TYPE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_content_type_is_decoded() {
        let body = ResponseBody::parse(Some("application/json"), r#"{"ok":true}"#.to_string());
        assert_eq!(body, ResponseBody::Json(json!({"ok": true})));
        assert!(body.is_json());
    }

    #[test]
    fn test_json_content_type_with_charset_is_decoded() {
        let body = ResponseBody::parse(
            Some("application/json; charset=utf-8"),
            "[1,2]".to_string(),
        );
        assert_eq!(body.as_json(), Some(&json!([1, 2])));
    }

    #[test]
    fn test_other_content_types_return_text() {
        let body = ResponseBody::parse(Some("text/html"), r#"{"ok":true}"#.to_string());
        assert_eq!(body.as_text(), Some(r#"{"ok":true}"#));
        assert!(body.as_json().is_none());
    }

    #[test]
    fn test_missing_content_type_returns_text() {
        let body = ResponseBody::parse(None, "plain".to_string());
        assert_eq!(body, ResponseBody::Text("plain".to_string()));
    }

    #[test]
    fn test_malformed_json_falls_back_to_text() {
        let body = ResponseBody::parse(Some("application/json"), "{not json".to_string());
        assert_eq!(body.as_text(), Some("{not json"));
        assert!(body.into_json().is_none());
    }

    #[test]
    fn test_is_json_content_type() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(!is_json_content_type(Some("application/xml")));
        assert!(!is_json_content_type(None));
    }
}
