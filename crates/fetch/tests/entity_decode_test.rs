use openbis_fetch::{
    decode_entities, decode_entity, DataSetType, DataSetKind, Experiment, ExperimentFetchOptions,
    NotFetchedError, Sample, SampleFetchOptions,
};
use openbis_schema::{WireConfig, WireError};
use openbis_types::{EntityKind, ObjectId};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn sample_payload() -> serde_json::Value {
    json!({
        "@type": "as.dto.sample.Sample",
        "@id": 1,
        "permId": {"@type": "as.dto.sample.id.SamplePermId", "permId": "20160817175233002-331"},
        "identifier": {"@type": "as.dto.sample.id.SampleIdentifier", "identifier": "/LAB/YEAST-1"},
        "code": "YEAST-1",
        "registrationDate": 1471449153002_i64,
        "type": {
            "@type": "as.dto.sample.SampleType",
            "@id": 2,
            "code": "YEAST",
            "listable": true
        },
        "properties": {"COLOR": "red", "SIZE": 3},
        "parents": [
            {
                "@type": "as.dto.sample.Sample",
                "@id": 3,
                "code": "PARENT-1",
                "type": 2,
                "properties": {"COLOR": "blue"}
            }
        ],
        "children": []
    })
}

#[test]
fn test_fetched_relations_are_readable() {
    let config = WireConfig::openbis_v3();
    let mut options = SampleFetchOptions::new();
    options.with_type();
    options.with_properties();
    options.with_parents().with_type();
    options.with_children();

    let sample: Sample = decode_entity(&sample_payload(), Arc::new(options), &config).unwrap();

    assert_eq!(
        sample.perm_id(),
        Some(&ObjectId::perm_id(EntityKind::Sample, "20160817175233002-331"))
    );
    assert_eq!(sample.type_code().unwrap(), Some("YEAST"));
    assert_eq!(sample.property("SIZE").unwrap(), Some("3"));
    assert_eq!(sample.registration_date().unwrap().timestamp_millis(), 1471449153002);

    let parents = sample.parents().unwrap();
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].code().map(String::as_str), Some("PARENT-1"));
    assert_eq!(parents[0].type_code().unwrap(), Some("YEAST"));

    // Requested but empty is a real answer.
    assert_eq!(sample.children().unwrap().len(), 0);
}

#[test]
fn test_unfetched_relations_are_rejected() {
    let config = WireConfig::openbis_v3();
    let mut options = SampleFetchOptions::new();
    options.with_parents();

    let sample: Sample = decode_entity(&sample_payload(), Arc::new(options), &config).unwrap();

    assert_eq!(
        sample.children().unwrap_err(),
        NotFetchedError {
            entity: "Sample",
            relation: "children"
        }
    );
    assert!(sample.properties().is_err());
    assert!(sample.entity_type().is_err());

    // The nested level follows its own options.
    let parent = &sample.parents().unwrap()[0];
    assert_eq!(parent.property("COLOR").unwrap_err().relation, "properties");
}

#[test]
fn test_entities_keep_their_options() {
    let config = WireConfig::openbis_v3();
    let mut options = SampleFetchOptions::new();
    options.with_parents().with_properties();

    let sample: Sample = decode_entity(&sample_payload(), Arc::new(options), &config).unwrap();
    let parent = &sample.parents().unwrap()[0];

    assert!(sample.fetch_options().has_parents());
    assert!(parent.fetch_options().has_properties());
    assert!(!parent.fetch_options().has_parents());
}

#[test]
fn test_unresolved_reference() {
    let config = WireConfig::openbis_v3();
    let mut options = SampleFetchOptions::new();
    options.with_parents();
    let value = json!({
        "@type": "as.dto.sample.Sample",
        "@id": 1,
        "parents": [7]
    });

    let result: Result<Sample, _> = decode_entity(&value, Arc::new(options), &config);
    assert_eq!(result.unwrap_err(), WireError::UnresolvedReference(7));
}

#[test]
fn test_references_across_list_elements() {
    let config = WireConfig::openbis_v3();
    let mut options = ExperimentFetchOptions::new();
    options.with_project();
    let value = json!([
        {
            "@type": "as.dto.experiment.Experiment",
            "@id": 1,
            "code": "EXP-1",
            "project": {"@type": "as.dto.project.Project", "@id": 2, "code": "PROJ"}
        },
        {
            "@type": "as.dto.experiment.Experiment",
            "@id": 3,
            "code": "EXP-2",
            "project": 2
        }
    ]);

    let experiments: Vec<Experiment> =
        decode_entities(&value, Arc::new(options), &config).unwrap();
    assert_eq!(experiments.len(), 2);
    for experiment in &experiments {
        let project = experiment.project().unwrap().unwrap();
        assert_eq!(project.code().map(String::as_str), Some("PROJ"));
    }
}

#[test]
fn test_type_relation_with_default_config() {
    let config = WireConfig::default();
    let mut options = SampleFetchOptions::new();
    options.with_type();
    let options = Arc::new(options);

    let bare = json!({"type": "Sample", "code": "S1"});
    let sample: Sample = decode_entity(&bare, options.clone(), &config).unwrap();
    assert_eq!(sample.code().map(String::as_str), Some("S1"));
    assert!(sample.entity_type().unwrap().is_none());

    let typed = json!({
        "type": "Sample",
        "code": "S2",
        "entityType": {"type": "SampleType", "code": "YEAST"}
    });
    let sample: Sample = decode_entity(&typed, options, &config).unwrap();
    assert_eq!(sample.type_code().unwrap(), Some("YEAST"));
}

#[test]
fn test_wrong_entity_kind() {
    let config = WireConfig::openbis_v3();
    let value = json!({"@type": "as.dto.dataset.DataSet", "code": "DS"});
    let result: Result<Sample, _> =
        decode_entity(&value, Arc::new(SampleFetchOptions::new()), &config);
    assert!(matches!(result, Err(WireError::UnexpectedType { .. })));
}

#[test]
fn test_data_set_type_kind() {
    let config = WireConfig::openbis_v3();
    let value = json!({
        "@type": "as.dto.dataset.DataSetType",
        "code": "RAW_DATA",
        "kind": "PHYSICAL"
    });
    let data_set_type: DataSetType =
        decode_entity(&value, Arc::new(Default::default()), &config).unwrap();
    assert_eq!(data_set_type.kind(), Some(&DataSetKind::Physical));
}
