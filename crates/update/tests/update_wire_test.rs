use openbis_schema::{ToWire, WireConfig};
use openbis_types::{EntityKind, ObjectId};
use openbis_update::{DataSetUpdate, ProjectUpdate, SampleUpdate, UpdateError};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_id() -> ObjectId {
    ObjectId::perm_id(EntityKind::Sample, "20160817175233002-331")
}

#[test]
fn test_only_dirty_fields_are_sent() {
    let config = WireConfig::default();
    let mut update = SampleUpdate::new(sample_id()).unwrap();
    update.set_property("COLOR", Some("red".to_string()));
    update.set_property("NOTES", None);
    update.set_container_id(None);
    update
        .tag_ids_mut()
        .add([ObjectId::perm_id(EntityKind::Tag, "/admin/FAVOURITE")])
        .unwrap();

    assert_eq!(
        update.to_wire(&config),
        json!({
            "type": "SampleUpdate",
            "sampleId": {"type": "SamplePermId", "permId": "20160817175233002-331"},
            "containerId": {"type": "FieldUpdateValue", "isModified": true, "value": null},
            "properties": {"COLOR": "red", "NOTES": null},
            "tagIds": {
                "type": "IdListUpdateValue",
                "actions": [{
                    "type": "ListUpdateActionAdd",
                    "items": [{"type": "TagPermId", "permId": "/admin/FAVOURITE"}]
                }]
            }
        })
    );
}

#[test]
fn test_untouched_document_sends_only_the_id() {
    let config = WireConfig::default();
    let update = DataSetUpdate::new(ObjectId::perm_id(EntityKind::DataSet, "20160817175233002-400"))
        .unwrap();

    assert!(!update.is_modified());
    assert_eq!(
        update.to_wire(&config),
        json!({
            "type": "DataSetUpdate",
            "dataSetId": {"type": "DataSetPermId", "permId": "20160817175233002-400"}
        })
    );
}

#[test]
fn test_replacing_parents() {
    let config = WireConfig::default();
    let parent = ObjectId::identifier(EntityKind::Sample, "/LAB/PROJ/P1").unwrap();
    let mut update = SampleUpdate::new(sample_id()).unwrap();
    update.parent_ids_mut().remove([parent.clone()]).unwrap();
    update.parent_ids_mut().set([parent.clone()]);

    assert_eq!(
        update.parent_ids_mut().add([parent]).unwrap_err(),
        UpdateError::ConflictingActions { action: "add" }
    );
    assert_eq!(
        update.to_wire(&config)["parentIds"],
        json!({
            "type": "IdListUpdateValue",
            "actions": [{
                "type": "ListUpdateActionSet",
                "items": [{"type": "SampleIdentifier", "identifier": "/LAB/PROJ/P1"}]
            }]
        })
    );
}

#[test]
fn test_v3_tags() {
    let config = WireConfig::openbis_v3();
    let mut update = ProjectUpdate::new(ObjectId::perm_id(EntityKind::Project, "20160817175233002-1"))
        .unwrap();
    update.set_description(Some("moved".to_string()));

    let wire = update.to_wire(&config);
    assert_eq!(wire["@type"], json!("as.dto.ProjectUpdate"));
    assert_eq!(wire["description"]["@type"], json!("as.dto.FieldUpdateValue"));
    assert_eq!(wire["description"]["value"], json!("moved"));
    assert!(wire.get("spaceId").is_none());
}
