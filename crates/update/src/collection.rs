use crate::{UpdateError, UpdateResult};
use openbis_schema::{ToWire, WireConfig};
use serde_json::{Map, Value};

const ID_LIST_UPDATE_VALUE: &str = "IdListUpdateValue";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdateAction<Id> {
    Add(Vec<Id>),
    Remove(Vec<Id>),
    Set(Vec<Id>),
}

impl<Id> ListUpdateAction<Id> {
    pub fn tag(&self) -> &'static str {
        match self {
            ListUpdateAction::Add(_) => "ListUpdateActionAdd",
            ListUpdateAction::Remove(_) => "ListUpdateActionRemove",
            ListUpdateAction::Set(_) => "ListUpdateActionSet",
        }
    }

    pub fn items(&self) -> &[Id] {
        match self {
            ListUpdateAction::Add(items)
            | ListUpdateAction::Remove(items)
            | ListUpdateAction::Set(items) => items,
        }
    }
}

/// Changes to a to-many relation, such as the parents of a sample.
///
/// Either a sequence of `add`/`remove` actions or one `set` replacing the
/// whole collection. `set` discards everything recorded before it, and
/// `add`/`remove` after a `set` are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionUpdateValue<Id> {
    actions: Vec<ListUpdateAction<Id>>,
}

impl<Id> Default for CollectionUpdateValue<Id> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

impl<Id> CollectionUpdateValue<Id> {
    pub fn add(&mut self, ids: impl IntoIterator<Item = Id>) -> UpdateResult<&mut Self> {
        self.push("add", ids, ListUpdateAction::Add)
    }

    pub fn remove(&mut self, ids: impl IntoIterator<Item = Id>) -> UpdateResult<&mut Self> {
        self.push("remove", ids, ListUpdateAction::Remove)
    }

    /// Replace the whole collection with `ids`.
    pub fn set(&mut self, ids: impl IntoIterator<Item = Id>) -> &mut Self {
        if !self.actions.is_empty() {
            tracing::debug!(
                discarded = self.actions.len(),
                "collection replaced, dropping earlier actions"
            );
        }
        self.actions = vec![ListUpdateAction::Set(ids.into_iter().collect())];
        self
    }

    fn push(
        &mut self,
        action: &'static str,
        ids: impl IntoIterator<Item = Id>,
        make: fn(Vec<Id>) -> ListUpdateAction<Id>,
    ) -> UpdateResult<&mut Self> {
        if self.is_replacing() {
            return Err(UpdateError::ConflictingActions { action });
        }
        let ids: Vec<Id> = ids.into_iter().collect();
        if !ids.is_empty() {
            self.actions.push(make(ids));
        }
        Ok(self)
    }

    pub fn actions(&self) -> &[ListUpdateAction<Id>] {
        &self.actions
    }

    pub fn is_modified(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn is_replacing(&self) -> bool {
        matches!(self.actions.first(), Some(ListUpdateAction::Set(_)))
    }
}

impl<Id: ToWire> CollectionUpdateValue<Id> {
    /// Insert this value under `key`, unless nothing was recorded.
    pub fn write(&self, map: &mut Map<String, Value>, key: &str, config: &WireConfig) {
        if self.is_modified() {
            tracing::trace!(key, actions = self.actions.len(), "writing collection update");
            map.insert(key.to_string(), self.to_wire(config));
        }
    }
}

impl<Id: ToWire> ToWire for CollectionUpdateValue<Id> {
    fn to_wire(&self, config: &WireConfig) -> Value {
        let actions = self
            .actions
            .iter()
            .map(|action| {
                let mut map = config.tagged(action.tag());
                map.insert(
                    "items".to_string(),
                    Value::Array(action.items().iter().map(|id| id.to_wire(config)).collect()),
                );
                Value::Object(map)
            })
            .collect();

        let mut map = config.tagged(ID_LIST_UPDATE_VALUE);
        map.insert("actions".to_string(), Value::Array(actions));
        Value::Object(map)
    }
}
