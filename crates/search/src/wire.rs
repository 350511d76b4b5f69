use crate::{
    Comparison, CompositeCriterion, Criterion, DateMatcher, DateTimeZone, DateValue, Field,
    LeafCriterion, Matcher, NumberMatcher, Numeric, Operator, Scope, StringMatcher, ValueKind,
};
use openbis_schema::{
    as_object, date_from_wire, date_to_wire, enum_from_wire, enum_to_wire, optional_field,
    required_field, FromWire, ToWire, WireConfig, WireError,
};
use serde_json::{json, Map, Value};

const AND_CRITERION: &str = "AndCriterion";
const OR_CRITERION: &str = "OrCriterion";
const SERVER_TIME_ZONE: &str = "ServerTimeZone";
const TIME_ZONE: &str = "TimeZone";

impl ToWire for Criterion {
    fn to_wire(&self, config: &WireConfig) -> Value {
        match self {
            Criterion::Leaf(leaf) => leaf.to_wire(config),
            Criterion::Composite(composite) => composite.to_wire(config),
        }
    }
}

/// Unscoped groups are `AndCriterion`/`OrCriterion`; scoped groups carry
/// their entity in the tag and the operator as a field.
impl ToWire for CompositeCriterion {
    fn to_wire(&self, config: &WireConfig) -> Value {
        let mut map = match self.scope() {
            Some(scope) => {
                let mut map = config.tagged(&scope.tag());
                map.insert("operator".to_string(), enum_to_wire(self.operator(), config));
                map
            }
            None => config.tagged(match self.operator() {
                Operator::And => AND_CRITERION,
                Operator::Or => OR_CRITERION,
            }),
        };
        map.insert(
            "criteria".to_string(),
            Value::Array(self.criteria().iter().map(|c| c.to_wire(config)).collect()),
        );
        Value::Object(map)
    }
}

fn time_zone_to_wire(time_zone: DateTimeZone, config: &WireConfig) -> Value {
    match time_zone {
        DateTimeZone::Server => Value::Object(config.tagged(SERVER_TIME_ZONE)),
        DateTimeZone::Offset(hours) => {
            let mut map = config.tagged(TIME_ZONE);
            map.insert("hourOffset".to_string(), json!(hours));
            Value::Object(map)
        }
    }
}

impl ToWire for LeafCriterion {
    fn to_wire(&self, config: &WireConfig) -> Value {
        let field = self.field();
        let matcher = self.matcher();
        let mut map = config.tagged(&format!("{}{}", field.tag(), matcher.comparison().tag()));

        if let Some(name) = field.name() {
            map.insert("field".to_string(), json!(name));
        }

        match matcher {
            Matcher::String(m) => {
                if let Some(value) = m.value() {
                    map.insert("value".to_string(), json!(value));
                }
                if m.uses_wildcards() {
                    map.insert("useWildcards".to_string(), json!(true));
                }
            }
            Matcher::Number(m) => match m.value() {
                Some(Numeric::Integer(value)) => {
                    map.insert("value".to_string(), json!(value));
                }
                Some(Numeric::Decimal(value)) => {
                    map.insert("value".to_string(), json!(value));
                }
                None => {}
            },
            Matcher::Date(m) => {
                match m.value() {
                    Some(DateValue::Literal { text, .. }) => {
                        map.insert("value".to_string(), json!(text));
                    }
                    Some(DateValue::Native(date)) => {
                        map.insert("value".to_string(), date_to_wire(date, config));
                    }
                    None => {}
                }
                if let Some(time_zone) = m.time_zone() {
                    map.insert("timeZone".to_string(), time_zone_to_wire(time_zone, config));
                }
            }
        }

        Value::Object(map)
    }
}

impl FromWire for Criterion {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError> {
        let tag = config.type_of(value)?;
        if tag == AND_CRITERION || tag == OR_CRITERION || Scope::from_tag(tag).is_some() {
            CompositeCriterion::from_wire(value, config).map(Criterion::Composite)
        } else {
            LeafCriterion::from_wire(value, config).map(Criterion::Leaf)
        }
    }
}

impl FromWire for CompositeCriterion {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError> {
        let tag = config.type_of(value)?;
        let map = as_object(value)?;

        let (scope, operator) = match tag {
            AND_CRITERION => (None, Operator::And),
            OR_CRITERION => (None, Operator::Or),
            _ => {
                let scope =
                    Scope::from_tag(tag).ok_or_else(|| WireError::UnknownType(tag.to_string()))?;
                let operator = match map.get("operator") {
                    Some(Value::Null) | None => Operator::default(),
                    Some(operator) => enum_from_wire(operator, config)?,
                };
                (Some(scope), operator)
            }
        };

        let criteria = match map.get("criteria") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| Criterion::from_wire(item, config))
                .collect::<Result<Vec<_>, _>>()?,
            Some(Value::Null) | None => Vec::new(),
            Some(other) => return Err(WireError::invalid("criteria", other.to_string())),
        };

        tracing::trace!(tag, children = criteria.len(), "decoded composite criterion");
        Ok(CompositeCriterion::from_parts(scope, operator, criteria))
    }
}

/// Split a leaf tag such as `PropertyContains` into field tag and comparison.
fn split_leaf_tag(tag: &str) -> Option<(&str, Comparison)> {
    Comparison::ALL.into_iter().find_map(|comparison| {
        tag.strip_suffix(comparison.tag())
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| (prefix, comparison))
    })
}

fn time_zone_from_wire(value: &Value, config: &WireConfig) -> Result<DateTimeZone, WireError> {
    match config.type_of(value)? {
        SERVER_TIME_ZONE => Ok(DateTimeZone::Server),
        TIME_ZONE => {
            let map = as_object(value)?;
            let hours = i64::from_wire(required_field(map, TIME_ZONE, "hourOffset")?, config)?;
            i32::try_from(hours)
                .map(DateTimeZone::Offset)
                .map_err(|_| WireError::invalid("hourOffset", hours.to_string()))
        }
        other => Err(WireError::UnknownType(other.to_string())),
    }
}

fn leaf_value<'a>(
    map: &'a Map<String, Value>,
    tag: &str,
    comparison: Comparison,
) -> Result<Option<&'a Value>, WireError> {
    if comparison == Comparison::Any {
        return Ok(None);
    }
    required_field(map, tag, "value").map(Some)
}

impl FromWire for LeafCriterion {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError> {
        let tag = config.type_of(value)?;
        let map = as_object(value)?;

        let (field_tag, comparison) =
            split_leaf_tag(tag).ok_or_else(|| WireError::UnknownType(tag.to_string()))?;
        let name: Option<String> = optional_field(map, "field", config)?;
        let field = Field::from_tag(field_tag, name)
            .ok_or_else(|| WireError::UnknownType(tag.to_string()))?;

        let kind = field.value_kind();
        if !comparison.applies_to(kind) {
            return Err(WireError::invalid(
                "type",
                format!("{} matchers do not support {}", kind, comparison),
            ));
        }

        let raw = leaf_value(map, tag, comparison)?;
        let matcher = match kind {
            ValueKind::String => {
                let text = raw.map(|v| String::from_wire(v, config)).transpose()?;
                let wildcards = optional_field::<bool>(map, "useWildcards", config)?.unwrap_or(false);
                Matcher::String(StringMatcher::from_parts(comparison, text, wildcards))
            }
            ValueKind::Number => {
                let number = match raw {
                    Some(Value::Number(n)) => Some(match n.as_i64() {
                        Some(integer) => Numeric::Integer(integer),
                        None => Numeric::Decimal(n.as_f64().unwrap_or_default()),
                    }),
                    Some(other) => return Err(WireError::invalid("value", other.to_string())),
                    None => None,
                };
                Matcher::Number(NumberMatcher::from_parts(comparison, number))
            }
            ValueKind::Date => {
                let date = match raw {
                    Some(Value::String(text)) => Some(
                        DateValue::literal(text.as_str())
                            .map_err(|e| WireError::invalid("value", e.to_string()))?,
                    ),
                    Some(other) => Some(DateValue::Native(date_from_wire(other, config)?)),
                    None => None,
                };
                let time_zone = map
                    .get("timeZone")
                    .filter(|v| !v.is_null())
                    .map(|v| time_zone_from_wire(v, config))
                    .transpose()?;
                Matcher::Date(DateMatcher::from_parts(comparison, date, time_zone))
            }
        };

        LeafCriterion::new(field, matcher).map_err(|e| WireError::invalid("type", e.to_string()))
    }
}
