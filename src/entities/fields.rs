//! Typed field access over JSON objects.
//!
//! [`Fields`] wraps a JSON object together with the name of the entity being
//! parsed, so every lookup failure reports which entity and field were at
//! fault. Required accessors fail on absence; the `_or` and `optional_`
//! accessors supply explicit defaults.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::entities::ParseError;

/// Naive layouts accepted after RFC 3339 fails; interpreted as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

pub(crate) struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(entity: &'static str, value: &'a Value) -> Result<Self, ParseError> {
        let map = value.as_object().ok_or(ParseError::UnexpectedShape {
            entity,
            expected: "object",
        })?;
        Ok(Self { entity, map })
    }

    fn required(&self, field: &'static str) -> Result<&'a Value, ParseError> {
        self.map.get(field).ok_or(ParseError::MissingField {
            entity: self.entity,
            field,
        })
    }

    /// Returns the field unless it is absent or `null`.
    fn optional(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    const fn invalid(&self, field: &'static str, expected: &'static str) -> ParseError {
        ParseError::InvalidField {
            entity: self.entity,
            field,
            expected,
        }
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<String, ParseError> {
        self.required(field)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.invalid(field, "string"))
    }

    pub(crate) fn boolean(&self, field: &'static str) -> Result<bool, ParseError> {
        self.required(field)?
            .as_bool()
            .ok_or_else(|| self.invalid(field, "boolean"))
    }

    pub(crate) fn integer(&self, field: &'static str) -> Result<i64, ParseError> {
        self.required(field)?
            .as_i64()
            .ok_or_else(|| self.invalid(field, "integer"))
    }

    pub(crate) fn number(&self, field: &'static str) -> Result<f64, ParseError> {
        self.required(field)?
            .as_f64()
            .ok_or_else(|| self.invalid(field, "number"))
    }

    pub(crate) fn optional_number(&self, field: &'static str) -> Result<Option<f64>, ParseError> {
        self.optional(field)
            .map(|value| value.as_f64().ok_or_else(|| self.invalid(field, "number")))
            .transpose()
    }

    pub(crate) fn string_or(&self, field: &'static str, default: &str) -> Result<String, ParseError> {
        self.optional(field).map_or_else(
            || Ok(default.to_string()),
            |value| {
                value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| self.invalid(field, "string"))
            },
        )
    }

    pub(crate) fn boolean_or(&self, field: &'static str, default: bool) -> Result<bool, ParseError> {
        self.optional(field).map_or(Ok(default), |value| {
            value.as_bool().ok_or_else(|| self.invalid(field, "boolean"))
        })
    }

    /// Returns the nested value of a required field.
    pub(crate) fn nested(&self, field: &'static str) -> Result<&'a Value, ParseError> {
        self.required(field)
    }

    /// Returns the nested value of an optional field, if present.
    pub(crate) fn optional_nested(&self, field: &'static str) -> Option<&'a Value> {
        self.optional(field)
    }

    /// Parses every element of an array field; absent or `null` yields an
    /// empty list.
    pub(crate) fn list<T, F>(&self, field: &'static str, parse: F) -> Result<Vec<T>, ParseError>
    where
        F: Fn(&'a Value) -> Result<T, ParseError>,
    {
        let Some(value) = self.optional(field) else {
            return Ok(Vec::new());
        };
        value
            .as_array()
            .ok_or_else(|| self.invalid(field, "array"))?
            .iter()
            .map(parse)
            .collect()
    }

    pub(crate) fn string_list(&self, field: &'static str) -> Result<Vec<String>, ParseError> {
        self.list(field, |item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| self.invalid(field, "array of strings"))
        })
    }

    pub(crate) fn timestamp(&self, field: &'static str) -> Result<DateTime<Utc>, ParseError> {
        let raw = self.string(field)?;
        parse_timestamp(self.entity, field, &raw)
    }

    pub(crate) fn optional_timestamp(
        &self,
        field: &'static str,
    ) -> Result<Option<DateTime<Utc>>, ParseError> {
        self.optional(field)
            .map(|value| {
                let raw = value.as_str().ok_or_else(|| self.invalid(field, "string"))?;
                parse_timestamp(self.entity, field, raw)
            })
            .transpose()
    }
}

/// Parses an ISO-8601 timestamp.
///
/// RFC 3339 strings keep their offset (converted to UTC); naive date-times
/// and bare dates are taken as UTC.
pub(crate) fn parse_timestamp(
    entity: &'static str,
    field: &'static str,
    raw: &str,
) -> Result<DateTime<Utc>, ParseError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    naive
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ParseError::InvalidTimestamp {
            entity,
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_object_is_rejected() {
        let value = json!([1, 2]);
        assert!(matches!(
            Fields::new("Store", &value),
            Err(ParseError::UnexpectedShape {
                entity: "Store",
                expected: "object"
            })
        ));
    }

    #[test]
    fn test_missing_required_field() {
        let value = json!({});
        let fields = Fields::new("Store", &value).unwrap();
        assert_eq!(
            fields.string("slug"),
            Err(ParseError::MissingField {
                entity: "Store",
                field: "slug"
            })
        );
    }

    #[test]
    fn test_wrong_type_is_invalid_field() {
        let value = json!({"is_active": "yes"});
        let fields = Fields::new("Store", &value).unwrap();
        assert_eq!(
            fields.boolean("is_active"),
            Err(ParseError::InvalidField {
                entity: "Store",
                field: "is_active",
                expected: "boolean",
            })
        );
    }

    #[test]
    fn test_number_accepts_integers() {
        let value = json!({"price": 10});
        let fields = Fields::new("Product", &value).unwrap();
        assert!((fields.number("price").unwrap() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_optional_number_treats_null_as_absent() {
        let value = json!({"cost_price": null});
        let fields = Fields::new("Product", &value).unwrap();
        assert_eq!(fields.optional_number("cost_price").unwrap(), None);
        assert_eq!(fields.optional_number("missing").unwrap(), None);
    }

    #[test]
    fn test_list_defaults_to_empty() {
        let value = json!({"stores": null});
        let fields = Fields::new("Shop", &value).unwrap();
        let parsed: Vec<String> = fields.string_list("stores").unwrap();
        assert!(parsed.is_empty());
        assert!(fields.string_list("absent").unwrap().is_empty());
    }

    #[test]
    fn test_list_rejects_non_arrays() {
        let value = json!({"images": "a.png"});
        let fields = Fields::new("Meta", &value).unwrap();
        assert!(matches!(
            fields.string_list("images"),
            Err(ParseError::InvalidField { expected: "array", .. })
        ));
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let parsed = parse_timestamp("Shop", "expired_at", "2024-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed.timestamp(), 1_704_067_200);

        let offset = parse_timestamp("Shop", "expired_at", "2024-01-01T01:00:00+01:00").unwrap();
        assert_eq!(offset.timestamp(), 1_704_067_200);
    }

    #[test]
    fn test_parse_timestamp_naive_is_utc() {
        for raw in [
            "2024-01-01T00:00:00",
            "2024-01-01 00:00:00",
            "2024-01-01T00:00:00.000",
            "2024-01-01",
        ] {
            let parsed = parse_timestamp("Product", "created_at", raw).unwrap();
            assert_eq!(parsed.timestamp(), 1_704_067_200, "failed for {raw}");
        }
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(matches!(
            parse_timestamp("Product", "created_at", "yesterday"),
            Err(ParseError::InvalidTimestamp { field: "created_at", .. })
        ));
    }
}
