use crate::WireError;
use derive_builder::Builder;
use serde_json::{Map, Value};

/// How type tags are written and read.
///
/// The default writes `{"type": "SampleFetchOptions", ...}`; the
/// [`WireConfig::openbis_v3`] preset writes the Jackson style
/// `{"@type": "as.dto.SampleFetchOptions", ...}` the application server
/// expects.
///
/// Entities and fetch options have a relation named `type` (the entity
/// type). When the type key is `type` as well, that relation travels under
/// [`WireConfig::relation_key`] instead, `entityType` unless configured.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct WireConfig {
    /// Key holding the type discriminator.
    #[builder(default = "\"type\".to_string()")]
    type_key: String,

    /// Prefix joined to every tag with a '.'.
    #[builder(default, setter(strip_option))]
    namespace: Option<String>,

    /// Key under which responses number objects for later back-references.
    #[builder(default = "\"@id\".to_string()")]
    reference_key: String,

    /// Key for a relation whose name equals the type key.
    #[builder(default = "\"entityType\".to_string()")]
    shadowed_relation_key: String,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            type_key: "type".to_string(),
            namespace: None,
            reference_key: "@id".to_string(),
            shadowed_relation_key: "entityType".to_string(),
        }
    }
}

impl WireConfig {
    pub fn builder() -> WireConfigBuilder {
        WireConfigBuilder::default()
    }

    pub fn openbis_v3() -> Self {
        Self {
            type_key: "@type".to_string(),
            namespace: Some("as.dto".to_string()),
            reference_key: "@id".to_string(),
            shadowed_relation_key: "entityType".to_string(),
        }
    }

    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn reference_key(&self) -> &str {
        &self.reference_key
    }

    /// The key a relation is written under. Never the type key.
    pub fn relation_key<'a>(&'a self, relation: &'a str) -> &'a str {
        if relation == self.type_key {
            &self.shadowed_relation_key
        } else {
            relation
        }
    }

    /// The full tag for a node kind.
    pub fn tag(&self, kind: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{}.{}", namespace, kind),
            None => kind.to_string(),
        }
    }

    /// A new JSON object holding only the type tag.
    pub fn tagged(&self, kind: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(self.type_key.clone(), Value::String(self.tag(kind)));
        map
    }

    /// The node kind of a tagged object, without any package prefix.
    ///
    /// Everything up to the last '.' is dropped, so fully qualified server
    /// class names (`as.dto.sample.Sample`) resolve to their simple name too.
    pub fn type_of<'a>(&self, value: &'a Value) -> Result<&'a str, WireError> {
        let map = crate::as_object(value)?;
        let tag = map
            .get(&self.type_key)
            .and_then(Value::as_str)
            .ok_or_else(|| WireError::MissingType(self.type_key.clone()))?;
        Ok(tag.rsplit('.').next().unwrap_or(tag))
    }

    /// The object behind `value`, after checking it is tagged as `kind`.
    pub fn expect_type<'a>(
        &self,
        value: &'a Value,
        kind: &str,
    ) -> Result<&'a Map<String, Value>, WireError> {
        let found = self.type_of(value)?;
        if found != kind {
            return Err(WireError::UnexpectedType {
                expected: kind.to_string(),
                found: found.to_string(),
            });
        }
        tracing::trace!(kind, "decoding tagged object");
        crate::as_object(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_tags_without_namespace() {
        let config = WireConfig::default();
        assert_eq!(config.tag("AndCriterion"), "AndCriterion");
        assert_eq!(Value::Object(config.tagged("Sorting")), json!({"type": "Sorting"}));
    }

    #[test]
    fn test_v3_preset() {
        let config = WireConfig::openbis_v3();
        assert_eq!(
            Value::Object(config.tagged("SampleFetchOptions")),
            json!({"@type": "as.dto.SampleFetchOptions"})
        );
    }

    #[test]
    fn test_builder_defaults_and_overrides() {
        let config = WireConfig::builder().namespace("lab").build().unwrap();
        assert_eq!(config.type_key(), "type");
        assert_eq!(config.reference_key(), "@id");
        assert_eq!(config.tag("Sample"), "lab.Sample");

        let config = WireConfig::builder().type_key("kind").build().unwrap();
        assert_eq!(config.namespace(), None);
        assert_eq!(config.type_key(), "kind");
    }

    #[test]
    fn test_relation_named_like_type_key_is_moved() {
        let config = WireConfig::default();
        assert_eq!(config.relation_key("type"), "entityType");
        assert_eq!(config.relation_key("parents"), "parents");

        let config = WireConfig::openbis_v3();
        assert_eq!(config.relation_key("type"), "type");

        let config = WireConfig::builder()
            .shadowed_relation_key("sampleType")
            .build()
            .unwrap();
        assert_eq!(config.relation_key("type"), "sampleType");
    }

    #[test]
    fn test_type_of_strips_package() {
        let config = WireConfig::openbis_v3();
        let value = json!({"@type": "as.dto.sample.Sample", "code": "S1"});
        assert_eq!(config.type_of(&value).unwrap(), "Sample");
        assert!(config.expect_type(&value, "Sample").is_ok());
        assert_eq!(
            config.expect_type(&value, "DataSet").unwrap_err(),
            WireError::UnexpectedType {
                expected: "DataSet".to_string(),
                found: "Sample".to_string()
            }
        );
    }

    #[test]
    fn test_missing_type_tag() {
        let config = WireConfig::default();
        assert_eq!(
            config.type_of(&json!({"code": "S1"})).unwrap_err(),
            WireError::MissingType("type".to_string())
        );
        assert!(matches!(
            config.type_of(&json!([1, 2])),
            Err(WireError::NotAnObject(_))
        ));
    }
}
