use crate::SortSpec;
use openbis_schema::WireError;
use serde_json::{json, Map, Value};
use std::fmt;

/// Uniform view of every generated fetch options type.
///
/// Relations are addressed by their wire name (`parents`, `dataSets`,
/// `previousVersion`). The typed `with_*`/`has_*` methods on each options
/// type are the primary API; this trait lets generic code walk a graph.
pub trait FetchOptionsNode: fmt::Debug {
    /// The entity kind, e.g. `Sample`; `Empty` for leaf nodes.
    fn kind(&self) -> &'static str;

    /// Every relation this node can request, requested or not.
    fn relation_names(&self) -> &'static [&'static str];

    fn has(&self, relation: &str) -> bool;

    fn relation(&self, relation: &str) -> Option<&dyn FetchOptionsNode>;

    /// Get-or-create the nested node for `relation`. `None` if the entity
    /// has no such relation.
    fn with_relation(&mut self, relation: &str) -> Option<&mut dyn FetchOptionsNode>;

    fn sort(&self) -> Option<&SortSpec>;

    fn sort_by(&mut self) -> &mut SortSpec;

    fn paging(&self) -> Paging;

    fn set_paging(&mut self, paging: Paging);

    /// The relations that have been requested, in declaration order.
    fn fetched_relations(&self) -> Vec<&'static str> {
        self.relation_names()
            .iter()
            .copied()
            .filter(|relation| self.has(relation))
            .collect()
    }
}

/// Result window of a fetch options node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paging {
    pub from: Option<u32>,
    pub count: Option<u32>,
}

impl Paging {
    pub(crate) fn write(&self, map: &mut Map<String, Value>) {
        if let Some(from) = self.from {
            map.insert("from".to_string(), json!(from));
        }
        if let Some(count) = self.count {
            map.insert("count".to_string(), json!(count));
        }
    }
}

pub(crate) fn paging_value(value: &Value, field: &str) -> Result<u32, WireError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| WireError::invalid(field, value.to_string()))
}
