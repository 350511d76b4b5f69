use crate::options::*;
use crate::NotFetchedError;
use chrono::{DateTime, Utc};
use openbis_schema::{enum_from_wire, FromWire, WireConfig, WireEnum, WireError};
use openbis_types::ObjectId;
use serde_json::Value;
use std::collections::BTreeMap;

/// How the files of a data set are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSetKind {
    Physical,
    Container,
    Link,
}

impl WireEnum for DataSetKind {
    const TYPE: &'static str = "DataSetKind";

    fn wire_name(&self) -> &'static str {
        match self {
            DataSetKind::Physical => "PHYSICAL",
            DataSetKind::Container => "CONTAINER",
            DataSetKind::Link => "LINK",
        }
    }

    fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "PHYSICAL" => Some(DataSetKind::Physical),
            "CONTAINER" => Some(DataSetKind::Container),
            "LINK" => Some(DataSetKind::Link),
            _ => None,
        }
    }
}

impl FromWire for DataSetKind {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError> {
        enum_from_wire(value, config)
    }
}

entity! {
    Space("Space"): SpaceFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            code: String = "code",
            description: String = "description",
            registration_date: DateTime<Utc> = "registrationDate",
            modification_date: DateTime<Utc> = "modificationDate",
        }
        one {
            registrator: Person = "registrator" => has_registrator,
        }
        many {
            samples: Sample = "samples" => has_samples,
            projects: Project = "projects" => has_projects,
        }
        fetched {}
    }
}

entity! {
    Project("Project"): ProjectFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            identifier: ObjectId = "identifier",
            code: String = "code",
            description: String = "description",
            registration_date: DateTime<Utc> = "registrationDate",
            modification_date: DateTime<Utc> = "modificationDate",
        }
        one {
            space: Space = "space" => has_space,
            registrator: Person = "registrator" => has_registrator,
            modifier: Person = "modifier" => has_modifier,
            leader: Person = "leader" => has_leader,
        }
        many {
            experiments: Experiment = "experiments" => has_experiments,
            history: HistoryEntry = "history" => has_history,
            attachments: Attachment = "attachments" => has_attachments,
        }
        fetched {}
    }
}

entity! {
    Experiment("Experiment"): ExperimentFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            identifier: ObjectId = "identifier",
            code: String = "code",
            registration_date: DateTime<Utc> = "registrationDate",
            modification_date: DateTime<Utc> = "modificationDate",
        }
        one {
            entity_type: ExperimentType = "type" => has_type,
            project: Project = "project" => has_project,
            registrator: Person = "registrator" => has_registrator,
            modifier: Person = "modifier" => has_modifier,
        }
        many {
            data_sets: DataSet = "dataSets" => has_data_sets,
            samples: Sample = "samples" => has_samples,
            history: HistoryEntry = "history" => has_history,
            tags: Tag = "tags" => has_tags,
            attachments: Attachment = "attachments" => has_attachments,
        }
        fetched {
            properties: BTreeMap<String, String> = "properties" => has_properties,
        }
    }
}

entity! {
    ExperimentType("ExperimentType"): ExperimentTypeFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            code: String = "code",
            description: String = "description",
            modification_date: DateTime<Utc> = "modificationDate",
        }
        one {}
        many {}
        fetched {}
    }
}

entity! {
    /// A sample as returned by the server.
    ///
    /// Relations can only be read when the fetch options the sample was
    /// retrieved with requested them; see [`crate::NotFetchedError`].
    Sample("Sample"): SampleFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            identifier: ObjectId = "identifier",
            code: String = "code",
            registration_date: DateTime<Utc> = "registrationDate",
            modification_date: DateTime<Utc> = "modificationDate",
        }
        one {
            entity_type: SampleType = "type" => has_type,
            space: Space = "space" => has_space,
            experiment: Experiment = "experiment" => has_experiment,
            container: Sample = "container" => has_container,
            registrator: Person = "registrator" => has_registrator,
            modifier: Person = "modifier" => has_modifier,
        }
        many {
            parents: Sample = "parents" => has_parents,
            children: Sample = "children" => has_children,
            components: Sample = "components" => has_components,
            data_sets: DataSet = "dataSets" => has_data_sets,
            history: HistoryEntry = "history" => has_history,
            tags: Tag = "tags" => has_tags,
            attachments: Attachment = "attachments" => has_attachments,
        }
        fetched {
            properties: BTreeMap<String, String> = "properties" => has_properties,
        }
    }
}

entity! {
    SampleType("SampleType"): SampleTypeFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            code: String = "code",
            description: String = "description",
            listable: bool = "listable",
            subcode_unique: bool = "subcodeUnique",
            auto_generated_code: bool = "autoGeneratedCode",
            show_parent_metadata: bool = "showParentMetadata",
            generated_code_prefix: String = "generatedCodePrefix",
            modification_date: DateTime<Utc> = "modificationDate",
        }
        one {}
        many {}
        fetched {}
    }
}

entity! {
    DataSet("DataSet"): DataSetFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            code: String = "code",
            registration_date: DateTime<Utc> = "registrationDate",
            modification_date: DateTime<Utc> = "modificationDate",
            access_date: DateTime<Utc> = "accessDate",
        }
        one {
            entity_type: DataSetType = "type" => has_type,
            experiment: Experiment = "experiment" => has_experiment,
            sample: Sample = "sample" => has_sample,
            registrator: Person = "registrator" => has_registrator,
            modifier: Person = "modifier" => has_modifier,
        }
        many {
            parents: DataSet = "parents" => has_parents,
            children: DataSet = "children" => has_children,
            containers: DataSet = "containers" => has_containers,
            components: DataSet = "components" => has_components,
            tags: Tag = "tags" => has_tags,
            history: HistoryEntry = "history" => has_history,
        }
        fetched {
            properties: BTreeMap<String, String> = "properties" => has_properties,
        }
    }
}

entity! {
    DataSetType("DataSetType"): DataSetTypeFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            code: String = "code",
            description: String = "description",
            kind: DataSetKind = "kind",
            modification_date: DateTime<Utc> = "modificationDate",
        }
        one {}
        many {}
        fetched {}
    }
}

entity! {
    Person("Person"): PersonFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            user_id: String = "userId",
            first_name: String = "firstName",
            last_name: String = "lastName",
            email: String = "email",
            registration_date: DateTime<Utc> = "registrationDate",
            active: bool = "active",
        }
        one {
            space: Space = "space" => has_space,
            registrator: Person = "registrator" => has_registrator,
        }
        many {}
        fetched {}
    }
}

entity! {
    Tag("Tag"): TagFetchOptions {
        attributes {
            perm_id: ObjectId = "permId",
            code: String = "code",
            description: String = "description",
            registration_date: DateTime<Utc> = "registrationDate",
        }
        one {
            owner: Person = "owner" => has_owner,
        }
        many {}
        fetched {}
    }
}

entity! {
    /// A file attached to a project, experiment or sample. The file body is
    /// only transferred when `content` is requested.
    Attachment("Attachment"): AttachmentFetchOptions {
        attributes {
            file_name: String = "fileName",
            title: String = "title",
            description: String = "description",
            version: i64 = "version",
            permlink: String = "permlink",
            latest_version_permlink: String = "latestVersionPermlink",
            registration_date: DateTime<Utc> = "registrationDate",
        }
        one {
            registrator: Person = "registrator" => has_registrator,
            previous_version: Attachment = "previousVersion" => has_previous_version,
        }
        many {}
        fetched {
            content: String = "content" => has_content,
        }
    }
}

entity! {
    HistoryEntry("HistoryEntry"): HistoryEntryFetchOptions {
        attributes {
            valid_from: DateTime<Utc> = "validFrom",
            valid_to: DateTime<Utc> = "validTo",
        }
        one {
            author: Person = "author" => has_author,
        }
        many {}
        fetched {}
    }
}

macro_rules! property_lookup {
    ($($entity:ident),*) => {
        $(
            impl $entity {
                /// A single property value; `Ok(None)` when the property is unset.
                pub fn property(&self, name: &str) -> Result<Option<&str>, NotFetchedError> {
                    Ok(self.properties()?.get(name).map(String::as_str))
                }
            }
        )*
    };
}

property_lookup!(Experiment, Sample, DataSet);

impl Sample {
    /// The code of the sample type, when the type was fetched.
    pub fn type_code(&self) -> Result<Option<&str>, NotFetchedError> {
        Ok(self
            .entity_type()?
            .and_then(|sample_type| sample_type.code())
            .map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_entity;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_data_set_kind_accepts_bare_name() {
        let config = WireConfig::default();
        assert_eq!(
            DataSetKind::from_wire(&json!("CONTAINER"), &config).unwrap(),
            DataSetKind::Container
        );
        assert!(DataSetKind::from_wire(&json!("FOLDER"), &config).is_err());
    }

    #[test]
    fn test_property_lookup() {
        let config = WireConfig::default();
        let mut options = SampleFetchOptions::new();
        options.with_properties();
        let value = json!({
            "type": "Sample",
            "code": "S1",
            "properties": {"COLOR": "red"}
        });

        let sample: Sample = decode_entity(&value, Arc::new(options), &config).unwrap();
        assert_eq!(sample.property("COLOR").unwrap(), Some("red"));
        assert_eq!(sample.property("SIZE").unwrap(), None);
        assert!(sample.type_code().is_err());
    }

    #[test]
    fn test_unfetched_properties_are_not_read() {
        let config = WireConfig::default();
        let value = json!({
            "type": "DataSet",
            "code": "DS1",
            "properties": {"COLOR": "red"}
        });

        let data_set: DataSet =
            decode_entity(&value, Arc::new(DataSetFetchOptions::new()), &config).unwrap();
        assert_eq!(data_set.code().map(String::as_str), Some("DS1"));
        assert_eq!(data_set.property("COLOR").unwrap_err().relation, "properties");
    }
}
