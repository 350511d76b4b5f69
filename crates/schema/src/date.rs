use crate::{WireConfig, WireError};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

const DATE_TYPE: &str = "Date";

/// A native date as `{"type": "Date", "value": "<RFC 3339>"}`.
pub fn date_to_wire(date: &DateTime<Utc>, config: &WireConfig) -> Value {
    let mut map = config.tagged(DATE_TYPE);
    map.insert("value".to_string(), json!(date.to_rfc3339()));
    Value::Object(map)
}

/// Accepts the tagged form, a bare RFC 3339 string, or the epoch
/// milliseconds the application server puts into entity responses.
pub fn date_from_wire(value: &Value, config: &WireConfig) -> Result<DateTime<Utc>, WireError> {
    match value {
        Value::Number(number) => {
            let millis = number
                .as_i64()
                .ok_or_else(|| WireError::invalid("date", number.to_string()))?;
            Utc.timestamp_millis_opt(millis)
                .single()
                .ok_or_else(|| WireError::invalid("date", millis.to_string()))
        }
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|e| WireError::invalid("date", format!("{}: {}", text, e))),
        Value::Object(_) => {
            let map = config.expect_type(value, DATE_TYPE)?;
            let inner = map
                .get("value")
                .ok_or_else(|| WireError::MissingField {
                    kind: DATE_TYPE.to_string(),
                    field: "value".to_string(),
                })?;
            date_from_wire(inner, config)
        }
        other => Err(WireError::invalid("date", other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date_is_tagged() {
        let config = WireConfig::default();
        let date = Utc.with_ymd_and_hms(2020, 1, 1, 12, 30, 0).unwrap();
        let wire = date_to_wire(&date, &config);
        assert_eq!(wire, json!({"type": "Date", "value": "2020-01-01T12:30:00+00:00"}));
        assert_eq!(date_from_wire(&wire, &config).unwrap(), date);
    }

    #[test]
    fn test_date_from_server_millis() {
        let config = WireConfig::openbis_v3();
        let date = date_from_wire(&json!(1365760352616i64), &config).unwrap();
        assert_eq!(date.timestamp_millis(), 1365760352616);
    }

    #[test]
    fn test_invalid_dates() {
        let config = WireConfig::default();
        assert!(date_from_wire(&json!("yesterday"), &config).is_err());
        assert!(date_from_wire(&json!(true), &config).is_err());
        assert!(date_from_wire(&json!({"type": "Sorting"}), &config).is_err());
    }
}
