use crate::{CriteriaError, CriteriaResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::fmt;

/// Literal date formats accepted by date matchers, in the order they are
/// tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `yyyy-MM-dd`
    Short,
    /// `yyyy-MM-dd HH:mm`
    Normal,
    /// `yyyy-MM-dd HH:mm:ss`
    Long,
}

impl DateFormat {
    pub const ALL: [DateFormat; 3] = [DateFormat::Short, DateFormat::Normal, DateFormat::Long];

    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::Short => "yyyy-MM-dd",
            DateFormat::Normal => "yyyy-MM-dd HH:mm",
            DateFormat::Long => "yyyy-MM-dd HH:mm:ss",
        }
    }

    fn chrono_format(&self) -> &'static str {
        match self {
            DateFormat::Short => "%Y-%m-%d",
            DateFormat::Normal => "%Y-%m-%d %H:%M",
            DateFormat::Long => "%Y-%m-%d %H:%M:%S",
        }
    }

    pub fn accepts(&self, text: &str) -> bool {
        match self {
            DateFormat::Short => NaiveDate::parse_from_str(text, self.chrono_format()).is_ok(),
            DateFormat::Normal | DateFormat::Long => {
                NaiveDateTime::parse_from_str(text, self.chrono_format()).is_ok()
            }
        }
    }

    /// The first format accepting `text`.
    pub fn detect(text: &str) -> Option<DateFormat> {
        DateFormat::ALL.into_iter().find(|format| format.accepts(text))
    }
}

/// The value of a date matcher.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// A literal that was checked against [`DateFormat`] and is sent verbatim.
    Literal { text: String, format: DateFormat },
    Native(DateTime<Utc>),
}

impl DateValue {
    pub fn literal(text: impl Into<String>) -> CriteriaResult<Self> {
        let text = text.into();
        match DateFormat::detect(&text) {
            Some(format) => Ok(DateValue::Literal { text, format }),
            None => {
                tracing::debug!(literal = %text, "rejected date literal");
                Err(CriteriaError::InvalidLiteral {
                    expected: DateFormat::ALL
                        .iter()
                        .map(DateFormat::pattern)
                        .collect::<Vec<_>>()
                        .join(" or "),
                    value: text,
                })
            }
        }
    }

    pub fn format(&self) -> Option<DateFormat> {
        match self {
            DateValue::Literal { format, .. } => Some(*format),
            DateValue::Native(_) => None,
        }
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateValue::Literal { text, .. } => write!(f, "\"{}\"", text),
            DateValue::Native(date) => write!(f, "{}", date.to_rfc3339()),
        }
    }
}

/// Anything a date matcher can compare against. Strings are validated,
/// native dates are taken as they are.
pub trait IntoDateValue {
    fn into_date_value(self) -> CriteriaResult<DateValue>;
}

impl IntoDateValue for DateValue {
    fn into_date_value(self) -> CriteriaResult<DateValue> {
        Ok(self)
    }
}

impl IntoDateValue for &str {
    fn into_date_value(self) -> CriteriaResult<DateValue> {
        DateValue::literal(self)
    }
}

impl IntoDateValue for String {
    fn into_date_value(self) -> CriteriaResult<DateValue> {
        DateValue::literal(self)
    }
}

impl IntoDateValue for DateTime<Utc> {
    fn into_date_value(self) -> CriteriaResult<DateValue> {
        Ok(DateValue::Native(self))
    }
}

impl IntoDateValue for NaiveDateTime {
    fn into_date_value(self) -> CriteriaResult<DateValue> {
        Ok(DateValue::Native(Utc.from_utc_datetime(&self)))
    }
}

impl IntoDateValue for NaiveDate {
    fn into_date_value(self) -> CriteriaResult<DateValue> {
        Ok(DateValue::Native(Utc.from_utc_datetime(&self.and_time(NaiveTime::default()))))
    }
}

/// Time zone in which the server interprets date literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeZone {
    Server,
    /// Hours from UTC.
    Offset(i32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formats_tried_in_order() {
        assert_eq!(DateFormat::detect("2020-01-01"), Some(DateFormat::Short));
        assert_eq!(DateFormat::detect("2020-01-01 13:45"), Some(DateFormat::Normal));
        assert_eq!(DateFormat::detect("2020-01-01 00:00:00"), Some(DateFormat::Long));
        assert_eq!(DateFormat::detect("01.01.2020"), None);
        assert_eq!(DateFormat::detect("2020-13-01"), None);
    }

    #[test]
    fn test_literal_rejected() {
        let err = DateValue::literal("not-a-date").unwrap_err();
        assert_eq!(
            err,
            CriteriaError::InvalidLiteral {
                value: "not-a-date".to_string(),
                expected: "yyyy-MM-dd or yyyy-MM-dd HH:mm or yyyy-MM-dd HH:mm:ss".to_string(),
            }
        );
    }

    #[test]
    fn test_native_values_skip_validation() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        let value = date.into_date_value().unwrap();
        assert_eq!(value.format(), None);
        assert_eq!(value.to_string(), "1999-12-31T00:00:00+00:00");
    }
}
