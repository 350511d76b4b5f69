use openbis_fetch::{
    DataSetFetchOptions, ExperimentFetchOptions, FetchOptionsNode, Paging, SampleFetchOptions,
    SortOrder,
};
use openbis_schema::{FromWire, ToWire, WireConfig};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_nested_relation_builds_incrementally() {
    let mut options = SampleFetchOptions::new();
    options.with_parents().with_properties();

    assert!(options.has_parents());
    assert!(options.parents().unwrap().has_properties());
    assert!(!options.has_children());

    let parents: *const SampleFetchOptions = options.with_parents();
    assert!(std::ptr::eq(parents, options.parents().unwrap()));
}

#[test]
fn test_self_referential_chain() {
    let mut options = SampleFetchOptions::new();
    options
        .with_children()
        .with_children()
        .with_children()
        .with_type();

    let mut depth = 0;
    let mut node: &SampleFetchOptions = &options;
    while let Some(next) = node.children() {
        depth += 1;
        node = next;
    }
    assert_eq!(depth, 3);
    assert!(node.has_type());
}

#[test]
fn test_shared_nested_options_are_copied_on_write() {
    let mut shared = SampleFetchOptions::new();
    shared.with_properties();

    let mut options = SampleFetchOptions::new();
    options.with_parents_using(shared.clone());
    options.with_children_using(shared);
    options.with_parents().with_tags();

    assert!(options.parents().unwrap().has_tags());
    assert!(!options.children().unwrap().has_tags());
}

#[test]
fn test_fetch_options_wire_form() {
    let config = WireConfig::default();
    let mut options = SampleFetchOptions::new();
    options.with_parents().with_properties();
    options.sort_by().code().desc();
    options.from(10).count(5);

    assert_eq!(
        options.to_wire(&config),
        json!({
            "type": "SampleFetchOptions",
            "parents": {
                "type": "SampleFetchOptions",
                "properties": {"type": "EmptyFetchOptions"}
            },
            "sort": {
                "type": "SampleSortOptions",
                "sortings": [{
                    "type": "Sorting",
                    "field": "CODE",
                    "order": {"type": "SortOrder", "value": "DESC"}
                }]
            },
            "from": 10,
            "count": 5
        })
    );
}

#[test]
fn test_type_relation_moves_off_the_type_key() {
    let mut options = ExperimentFetchOptions::new();
    options.with_type();
    options.with_data_sets();

    let config = WireConfig::default();
    let plain = options.to_wire(&config);
    assert_eq!(
        plain,
        json!({
            "type": "ExperimentFetchOptions",
            "entityType": {"type": "ExperimentTypeFetchOptions"},
            "dataSets": {"type": "DataSetFetchOptions"}
        })
    );
    let decoded = ExperimentFetchOptions::from_wire(&plain, &config).unwrap();
    assert!(decoded.has_type());
    assert_eq!(decoded, options);

    let v3 = options.to_wire(&WireConfig::openbis_v3());
    assert_eq!(
        v3,
        json!({
            "@type": "as.dto.ExperimentFetchOptions",
            "type": {"@type": "as.dto.ExperimentTypeFetchOptions"},
            "dataSets": {"@type": "as.dto.DataSetFetchOptions"}
        })
    );
}

#[test]
fn test_search_reuse_keeps_nested_instances() {
    let mut options = SampleFetchOptions::new();
    let parents: *const SampleFetchOptions = options.with_parents();

    let sent = std::sync::Arc::new(options.clone());
    options.with_parents().with_properties();

    assert!(std::ptr::eq(parents, options.with_parents()));
    assert!(!sent.parents().unwrap().has_properties());
}

#[test]
fn test_fetch_options_round_trip() {
    let config = WireConfig::openbis_v3();
    let mut options = DataSetFetchOptions::new();
    options.with_type();
    options.with_sample().with_experiment().with_project();
    options.with_parents().with_properties();
    options.with_parents().sort_by().registration_date().desc();
    options.count(100);

    let decoded = DataSetFetchOptions::from_wire(&options.to_wire(&config), &config).unwrap();
    assert_eq!(decoded, options);
    assert!(decoded.sample().unwrap().experiment().unwrap().has_project());
    assert_eq!(
        decoded.parents().unwrap().sort().unwrap().get("REGISTRATION_DATE").unwrap().order(),
        SortOrder::Desc
    );
    assert_eq!(decoded.paging(), Paging { from: None, count: Some(100) });
}

#[test]
fn test_decoding_rejects_other_kinds() {
    let config = WireConfig::default();
    let value = json!({"type": "DataSetFetchOptions"});
    assert!(SampleFetchOptions::from_wire(&value, &config).is_err());
}

#[test]
fn test_decoding_ignores_unknown_keys() {
    let config = WireConfig::default();
    let value = json!({
        "type": "SampleFetchOptions",
        "@id": 3,
        "cacheMode": "NO_CACHE",
        "children": {"type": "SampleFetchOptions"},
        "parents": null
    });

    let options = SampleFetchOptions::from_wire(&value, &config).unwrap();
    assert!(options.has_children());
    assert!(!options.has_parents());
}

#[test]
fn test_generic_walk_collects_requested_paths() {
    fn walk(node: &dyn FetchOptionsNode, prefix: &str, out: &mut Vec<String>) {
        for relation in node.fetched_relations() {
            let path = format!("{prefix}{relation}");
            if let Some(nested) = node.relation(relation) {
                walk(nested, &format!("{path}."), out);
            }
            out.push(path);
        }
    }

    let mut options = SampleFetchOptions::new();
    options.with_parents().with_properties();
    options.with_experiment().with_project().with_space();

    let mut paths = Vec::new();
    walk(&options, "", &mut paths);
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "experiment",
            "experiment.project",
            "experiment.project.space",
            "parents",
            "parents.properties",
        ]
    );
}
