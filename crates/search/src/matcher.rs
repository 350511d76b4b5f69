use crate::{CriteriaError, CriteriaResult, DateTimeZone, DateValue, IntoDateValue};
use std::fmt;

/// How a field value is compared with the matcher value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equals,
    StartsWith,
    EndsWith,
    Contains,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    /// Matches any value; carries no operand.
    Any,
}

impl Comparison {
    pub const ALL: [Comparison; 9] = [
        Comparison::Equals,
        Comparison::StartsWith,
        Comparison::EndsWith,
        Comparison::Contains,
        Comparison::LessThan,
        Comparison::LessOrEqual,
        Comparison::GreaterThan,
        Comparison::GreaterOrEqual,
        Comparison::Any,
    ];

    /// Suffix of the leaf type tag (`TypeEquals`, `RegistrationDateLessThanOrEqual`).
    pub fn tag(&self) -> &'static str {
        match self {
            Comparison::Equals => "Equals",
            Comparison::StartsWith => "StartsWith",
            Comparison::EndsWith => "EndsWith",
            Comparison::Contains => "Contains",
            Comparison::LessThan => "LessThan",
            Comparison::LessOrEqual => "LessThanOrEqual",
            Comparison::GreaterThan => "GreaterThan",
            Comparison::GreaterOrEqual => "GreaterThanOrEqual",
            Comparison::Any => "Any",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Comparison> {
        Comparison::ALL.into_iter().find(|c| c.tag() == tag)
    }

    /// Whether the comparison is defined for values of `kind`.
    pub fn applies_to(&self, kind: ValueKind) -> bool {
        match self {
            Comparison::StartsWith | Comparison::EndsWith | Comparison::Contains => {
                kind == ValueKind::String
            }
            _ => true,
        }
    }

    pub(crate) fn function_name(&self) -> &'static str {
        match self {
            Comparison::Equals => "equals",
            Comparison::StartsWith => "starts_with",
            Comparison::EndsWith => "ends_with",
            Comparison::Contains => "contains",
            Comparison::LessThan => "less_than",
            Comparison::LessOrEqual => "less_or_equal",
            Comparison::GreaterThan => "greater_than",
            Comparison::GreaterOrEqual => "greater_or_equal",
            Comparison::Any => "any",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The type of value a field holds and a matcher compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Date,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Date => "date",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i64),
    Decimal(f64),
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Integer(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Integer(value.into())
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Decimal(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Integer(value) => write!(f, "{}", value),
            Numeric::Decimal(value) => write!(f, "{}", value),
        }
    }
}

/// Compares text. Wildcard expansion (`*`, `?`) is switched on separately
/// and never implied by the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct StringMatcher {
    comparison: Comparison,
    value: Option<String>,
    wildcards: bool,
}

impl StringMatcher {
    fn new(comparison: Comparison, value: impl Into<String>) -> Self {
        Self {
            comparison,
            value: Some(value.into()),
            wildcards: false,
        }
    }

    pub fn equals(value: impl Into<String>) -> Self {
        Self::new(Comparison::Equals, value)
    }

    pub fn starts_with(value: impl Into<String>) -> Self {
        Self::new(Comparison::StartsWith, value)
    }

    pub fn ends_with(value: impl Into<String>) -> Self {
        Self::new(Comparison::EndsWith, value)
    }

    pub fn contains(value: impl Into<String>) -> Self {
        Self::new(Comparison::Contains, value)
    }

    pub fn less_than(value: impl Into<String>) -> Self {
        Self::new(Comparison::LessThan, value)
    }

    pub fn less_or_equal(value: impl Into<String>) -> Self {
        Self::new(Comparison::LessOrEqual, value)
    }

    pub fn greater_than(value: impl Into<String>) -> Self {
        Self::new(Comparison::GreaterThan, value)
    }

    pub fn greater_or_equal(value: impl Into<String>) -> Self {
        Self::new(Comparison::GreaterOrEqual, value)
    }

    pub fn any() -> Self {
        Self {
            comparison: Comparison::Any,
            value: None,
            wildcards: false,
        }
    }

    pub fn with_wildcards(mut self) -> Self {
        self.wildcards = true;
        self
    }

    pub fn without_wildcards(mut self) -> Self {
        self.wildcards = false;
        self
    }

    pub(crate) fn from_parts(comparison: Comparison, value: Option<String>, wildcards: bool) -> Self {
        Self {
            comparison,
            value,
            wildcards,
        }
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn uses_wildcards(&self) -> bool {
        self.wildcards
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberMatcher {
    comparison: Comparison,
    value: Option<Numeric>,
}

impl NumberMatcher {
    /// Decimals must be finite; NaN and the infinities have no wire form.
    fn new(comparison: Comparison, value: impl Into<Numeric>) -> CriteriaResult<Self> {
        let value = value.into();
        if let Numeric::Decimal(decimal) = value {
            if !decimal.is_finite() {
                return Err(CriteriaError::InvalidLiteral {
                    value: decimal.to_string(),
                    expected: "a finite number".to_string(),
                });
            }
        }
        Ok(Self {
            comparison,
            value: Some(value),
        })
    }

    pub fn equals(value: impl Into<Numeric>) -> CriteriaResult<Self> {
        Self::new(Comparison::Equals, value)
    }

    pub fn less_than(value: impl Into<Numeric>) -> CriteriaResult<Self> {
        Self::new(Comparison::LessThan, value)
    }

    pub fn less_or_equal(value: impl Into<Numeric>) -> CriteriaResult<Self> {
        Self::new(Comparison::LessOrEqual, value)
    }

    pub fn greater_than(value: impl Into<Numeric>) -> CriteriaResult<Self> {
        Self::new(Comparison::GreaterThan, value)
    }

    pub fn greater_or_equal(value: impl Into<Numeric>) -> CriteriaResult<Self> {
        Self::new(Comparison::GreaterOrEqual, value)
    }

    pub fn any() -> Self {
        Self {
            comparison: Comparison::Any,
            value: None,
        }
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn value(&self) -> Option<Numeric> {
        self.value
    }

    pub(crate) fn from_parts(comparison: Comparison, value: Option<Numeric>) -> Self {
        Self { comparison, value }
    }
}

/// Compares dates. String literals are validated when the matcher is built.
#[derive(Debug, Clone, PartialEq)]
pub struct DateMatcher {
    comparison: Comparison,
    value: Option<DateValue>,
    time_zone: Option<DateTimeZone>,
}

impl DateMatcher {
    fn new(comparison: Comparison, value: impl IntoDateValue) -> CriteriaResult<Self> {
        Ok(Self {
            comparison,
            value: Some(value.into_date_value()?),
            time_zone: None,
        })
    }

    pub fn equals(value: impl IntoDateValue) -> CriteriaResult<Self> {
        Self::new(Comparison::Equals, value)
    }

    pub fn earlier_than(value: impl IntoDateValue) -> CriteriaResult<Self> {
        Self::new(Comparison::LessThan, value)
    }

    pub fn earlier_or_equal(value: impl IntoDateValue) -> CriteriaResult<Self> {
        Self::new(Comparison::LessOrEqual, value)
    }

    pub fn later_than(value: impl IntoDateValue) -> CriteriaResult<Self> {
        Self::new(Comparison::GreaterThan, value)
    }

    pub fn later_or_equal(value: impl IntoDateValue) -> CriteriaResult<Self> {
        Self::new(Comparison::GreaterOrEqual, value)
    }

    pub fn any() -> Self {
        Self {
            comparison: Comparison::Any,
            value: None,
            time_zone: None,
        }
    }

    pub fn with_time_zone(mut self, hour_offset: i32) -> Self {
        self.time_zone = Some(DateTimeZone::Offset(hour_offset));
        self
    }

    pub fn with_server_time_zone(mut self) -> Self {
        self.time_zone = Some(DateTimeZone::Server);
        self
    }

    pub(crate) fn from_parts(
        comparison: Comparison,
        value: Option<DateValue>,
        time_zone: Option<DateTimeZone>,
    ) -> Self {
        Self {
            comparison,
            value,
            time_zone,
        }
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    pub fn value(&self) -> Option<&DateValue> {
        self.value.as_ref()
    }

    pub fn time_zone(&self) -> Option<DateTimeZone> {
        self.time_zone
    }
}

/// A typed leaf predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    String(StringMatcher),
    Number(NumberMatcher),
    Date(DateMatcher),
}

impl Matcher {
    pub fn kind(&self) -> ValueKind {
        match self {
            Matcher::String(_) => ValueKind::String,
            Matcher::Number(_) => ValueKind::Number,
            Matcher::Date(_) => ValueKind::Date,
        }
    }

    pub fn comparison(&self) -> Comparison {
        match self {
            Matcher::String(m) => m.comparison(),
            Matcher::Number(m) => m.comparison(),
            Matcher::Date(m) => m.comparison(),
        }
    }
}

impl From<StringMatcher> for Matcher {
    fn from(matcher: StringMatcher) -> Self {
        Matcher::String(matcher)
    }
}

impl From<NumberMatcher> for Matcher {
    fn from(matcher: NumberMatcher) -> Self {
        Matcher::Number(matcher)
    }
}

impl From<DateMatcher> for Matcher {
    fn from(matcher: DateMatcher) -> Self {
        Matcher::Date(matcher)
    }
}
