use crate::IdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of openBIS entities the client can search, fetch and update.
///
/// The name of a kind is the prefix of every wire tag built for it
/// (`SampleFetchOptions`, `SamplePermId`, `SampleSearchCriteria`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Space,
    Project,
    Experiment,
    ExperimentType,
    Sample,
    SampleType,
    DataSet,
    DataSetType,
    Person,
    Tag,
    Attachment,
    HistoryEntry,
}

impl EntityKind {
    pub const ALL: [EntityKind; 12] = [
        EntityKind::Space,
        EntityKind::Project,
        EntityKind::Experiment,
        EntityKind::ExperimentType,
        EntityKind::Sample,
        EntityKind::SampleType,
        EntityKind::DataSet,
        EntityKind::DataSetType,
        EntityKind::Person,
        EntityKind::Tag,
        EntityKind::Attachment,
        EntityKind::HistoryEntry,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Space => "Space",
            EntityKind::Project => "Project",
            EntityKind::Experiment => "Experiment",
            EntityKind::ExperimentType => "ExperimentType",
            EntityKind::Sample => "Sample",
            EntityKind::SampleType => "SampleType",
            EntityKind::DataSet => "DataSet",
            EntityKind::DataSetType => "DataSetType",
            EntityKind::Person => "Person",
            EntityKind::Tag => "Tag",
            EntityKind::Attachment => "Attachment",
            EntityKind::HistoryEntry => "HistoryEntry",
        }
    }

    /// Whether this kind describes entity types rather than entities.
    pub fn is_type_kind(&self) -> bool {
        matches!(
            self,
            EntityKind::ExperimentType | EntityKind::SampleType | EntityKind::DataSetType
        )
    }

    /// The kind describing the types of this kind's entities. Type kinds map
    /// to themselves.
    pub fn type_kind(&self) -> Option<EntityKind> {
        match self {
            EntityKind::Experiment | EntityKind::ExperimentType => Some(EntityKind::ExperimentType),
            EntityKind::Sample | EntityKind::SampleType => Some(EntityKind::SampleType),
            EntityKind::DataSet | EntityKind::DataSetType => Some(EntityKind::DataSetType),
            _ => None,
        }
    }

    /// The `EntityKind` enum constant the server uses inside `EntityTypePermId`.
    pub fn type_wire_kind(&self) -> Option<&'static str> {
        match self {
            EntityKind::Experiment | EntityKind::ExperimentType => Some("EXPERIMENT"),
            EntityKind::Sample | EntityKind::SampleType => Some("SAMPLE"),
            EntityKind::DataSet | EntityKind::DataSetType => Some("DATA_SET"),
            _ => None,
        }
    }

    /// The entity type kind named by an `EntityKind` enum constant.
    pub fn from_type_wire_kind(name: &str) -> Option<EntityKind> {
        match name {
            "EXPERIMENT" => Some(EntityKind::ExperimentType),
            "SAMPLE" => Some(EntityKind::SampleType),
            "DATA_SET" => Some(EntityKind::DataSetType),
            _ => None,
        }
    }

    /// Whether entities of this kind carry hierarchical `/SPACE/...` identifiers.
    pub fn has_identifier(&self) -> bool {
        matches!(
            self,
            EntityKind::Space | EntityKind::Project | EntityKind::Experiment | EntityKind::Sample
        )
    }
}

impl FromStr for EntityKind {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| IdError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
