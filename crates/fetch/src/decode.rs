use crate::FetchOptionsNode;
use openbis_schema::{WireConfig, WireError};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// An entity reconstructed from a response and bound to its fetch options.
pub trait Entity: Sized {
    type Options: FetchOptionsNode + Default + Clone;

    const KIND: &'static str;

    /// Decode one entity. Only relations requested by `options` are read
    /// from the payload.
    fn decode(
        value: &Value,
        options: Arc<Self::Options>,
        context: &DecodeContext<'_>,
    ) -> Result<Self, WireError>;
}

/// Shared state for decoding one response.
///
/// The server sends an object in full the first time it occurs, numbered
/// under the reference key, and as that bare number afterwards. All numbered
/// objects are indexed up front so references can point forwards as well as
/// backwards.
pub struct DecodeContext<'a> {
    config: &'a WireConfig,
    objects: HashMap<i64, &'a Value>,
}

impl<'a> DecodeContext<'a> {
    pub fn new(root: &'a Value, config: &'a WireConfig) -> Self {
        let mut objects = HashMap::new();
        index_objects(root, config.reference_key(), &mut objects);
        tracing::trace!(objects = objects.len(), "indexed response objects");
        Self { config, objects }
    }

    pub fn config(&self) -> &'a WireConfig {
        self.config
    }

    /// The object `value` stands for: itself, or the object a numeric
    /// reference points to.
    pub fn resolve<'v>(&'v self, value: &'v Value) -> Result<&'v Value, WireError> {
        match value {
            Value::Number(number) => {
                let id = number
                    .as_i64()
                    .ok_or_else(|| WireError::invalid("reference", number.to_string()))?;
                self.objects
                    .get(&id)
                    .copied()
                    .ok_or(WireError::UnresolvedReference(id))
            }
            other => Ok(other),
        }
    }
}

fn index_objects<'a>(value: &'a Value, key: &str, objects: &mut HashMap<i64, &'a Value>) {
    match value {
        Value::Object(map) => {
            if let Some(id) = map.get(key).and_then(Value::as_i64) {
                objects.insert(id, value);
            }
            for nested in map.values() {
                index_objects(nested, key, objects);
            }
        }
        Value::Array(items) => {
            for item in items {
                index_objects(item, key, objects);
            }
        }
        _ => {}
    }
}

pub(crate) fn decode_one<E: Entity>(
    map: &Map<String, Value>,
    relation: &str,
    options: Option<Arc<E::Options>>,
    context: &DecodeContext<'_>,
) -> Result<Option<Box<E>>, WireError> {
    let Some(options) = options else {
        return Ok(None);
    };
    match map.get(relation) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => E::decode(value, options, context).map(|entity| Some(Box::new(entity))),
    }
}

pub(crate) fn decode_many<E: Entity>(
    map: &Map<String, Value>,
    relation: &str,
    options: Option<Arc<E::Options>>,
    context: &DecodeContext<'_>,
) -> Result<Vec<E>, WireError> {
    let Some(options) = options else {
        return Ok(Vec::new());
    };
    match map.get(relation) {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| E::decode(item, options.clone(), context))
            .collect(),
        Some(other) => Err(WireError::invalid(relation, other.to_string())),
    }
}

/// Decode a single entity from a standalone payload.
pub fn decode_entity<E: Entity>(
    value: &Value,
    options: Arc<E::Options>,
    config: &WireConfig,
) -> Result<E, WireError> {
    let context = DecodeContext::new(value, config);
    E::decode(value, options, &context)
}

/// Decode a JSON array of entities; every element shares `options`.
pub fn decode_entities<E: Entity>(
    value: &Value,
    options: Arc<E::Options>,
    config: &WireConfig,
) -> Result<Vec<E>, WireError> {
    let context = DecodeContext::new(value, config);
    decode_entity_list(value, options, &context)
}

pub fn decode_entity_list<E: Entity>(
    value: &Value,
    options: Arc<E::Options>,
    context: &DecodeContext<'_>,
) -> Result<Vec<E>, WireError> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| E::decode(item, options.clone(), context))
            .collect(),
        other => Err(WireError::invalid(E::KIND, other.to_string())),
    }
}
