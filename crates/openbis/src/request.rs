use openbis_fetch::{
    decode_entity_list, DataSet, DataSetType, DecodeContext, Entity, Experiment, ExperimentType,
    Person, Project, Sample, SampleType, Space, Tag,
};
use openbis_schema::{optional_field, ToWire, WireConfig, WireError};
use openbis_search::CompositeCriterion;
use openbis_types::EntityKind;
use openbis_update::{DataSetUpdate, ExperimentUpdate, ProjectUpdate, SampleUpdate, SpaceUpdate};
use serde_json::{json, Value};
use std::sync::Arc;

const SEARCH_RESULT: &str = "SearchResult";

/// An entity the application server can search for.
pub trait Searchable: Entity {
    const ENTITY_KIND: EntityKind;
    const SEARCH_METHOD: &'static str;

    /// Empty criteria scoped to this entity; matches everything.
    fn criteria() -> CompositeCriterion {
        CompositeCriterion::entity(Self::ENTITY_KIND)
    }
}

macro_rules! searchable {
    ($($entity:ident => $method:literal,)*) => {
        $(
            impl Searchable for $entity {
                const ENTITY_KIND: EntityKind = EntityKind::$entity;
                const SEARCH_METHOD: &'static str = $method;
            }
        )*
    };
}

searchable! {
    Space => "searchSpaces",
    Project => "searchProjects",
    Experiment => "searchExperiments",
    ExperimentType => "searchExperimentTypes",
    Sample => "searchSamples",
    SampleType => "searchSampleTypes",
    DataSet => "searchDataSets",
    DataSetType => "searchDataSetTypes",
    Person => "searchPersons",
    Tag => "searchTags",
}

/// An update document the application server accepts in batches.
pub trait Updatable: ToWire {
    const UPDATE_METHOD: &'static str;
}

impl Updatable for SpaceUpdate {
    const UPDATE_METHOD: &'static str = "updateSpaces";
}

impl Updatable for ProjectUpdate {
    const UPDATE_METHOD: &'static str = "updateProjects";
}

impl Updatable for ExperimentUpdate {
    const UPDATE_METHOD: &'static str = "updateExperiments";
}

impl Updatable for SampleUpdate {
    const UPDATE_METHOD: &'static str = "updateSamples";
}

impl Updatable for DataSetUpdate {
    const UPDATE_METHOD: &'static str = "updateDataSets";
}

/// A `(criteria, fetch options)` pair for one search call.
#[derive(Debug)]
pub struct SearchRequest<'a, E: Searchable> {
    criteria: &'a CompositeCriterion,
    fetch_options: &'a E::Options,
}

impl<'a, E: Searchable> SearchRequest<'a, E>
where
    E::Options: ToWire,
{
    pub fn new(criteria: &'a CompositeCriterion, fetch_options: &'a E::Options) -> Self {
        Self {
            criteria,
            fetch_options,
        }
    }

    pub fn method(&self) -> &'static str {
        E::SEARCH_METHOD
    }

    pub fn criteria(&self) -> &CompositeCriterion {
        self.criteria
    }

    pub fn fetch_options(&self) -> &E::Options {
        self.fetch_options
    }

    /// JSON-RPC params: `[token, criteria, fetchOptions]`.
    pub fn params(&self, session_token: &str, config: &WireConfig) -> Vec<Value> {
        vec![
            json!(session_token),
            self.criteria.to_wire(config),
            self.fetch_options.to_wire(config),
        ]
    }
}

/// One page of search results and the number of matches on the server.
#[derive(Debug, Clone)]
pub struct SearchResult<E> {
    objects: Vec<E>,
    total_count: usize,
}

impl<E: Entity> SearchResult<E> {
    /// Decode `{objects, totalCount}`, binding every object (and every
    /// nested object) to `fetch_options`.
    pub fn decode(
        value: &Value,
        fetch_options: Arc<E::Options>,
        config: &WireConfig,
    ) -> Result<Self, WireError> {
        let map = config.expect_type(value, SEARCH_RESULT)?;
        let context = DecodeContext::new(value, config);

        let objects = match map.get("objects") {
            Some(Value::Null) | None => Vec::new(),
            Some(objects) => decode_entity_list(objects, fetch_options, &context)?,
        };
        let total_count = match optional_field::<i64>(map, "totalCount", config)? {
            Some(count) => usize::try_from(count)
                .map_err(|_| WireError::invalid("totalCount", count.to_string()))?,
            None => objects.len(),
        };

        Ok(Self {
            objects,
            total_count,
        })
    }
}

impl<E> SearchResult<E> {
    pub fn objects(&self) -> &[E] {
        &self.objects
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn into_objects(self) -> Vec<E> {
        self.objects
    }
}

impl<E> IntoIterator for SearchResult<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}
