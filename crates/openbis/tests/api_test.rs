use openbis::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::cell::RefCell;

/// Replays one canned response and records every call.
struct RecordingTransport {
    response: anyhow::Result<Value>,
    calls: RefCell<Vec<(String, Vec<Value>)>>,
}

impl RecordingTransport {
    fn replying(response: Value) -> Self {
        Self {
            response: Ok(response),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing(message: &'static str) -> Self {
        Self {
            response: Err(anyhow::anyhow!(message)),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for RecordingTransport {
    fn call(&self, method: &str, params: Vec<Value>) -> anyhow::Result<Value> {
        self.calls.borrow_mut().push((method.to_string(), params));
        match &self.response {
            Ok(value) => Ok(value.clone()),
            Err(e) => Err(anyhow::anyhow!(e.to_string())),
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn search_response() -> Value {
    json!({
        "@type": "as.dto.common.search.SearchResult",
        "@id": 1,
        "totalCount": 12,
        "objects": [
            {
                "@type": "as.dto.sample.Sample",
                "@id": 2,
                "code": "YEAST-1",
                "properties": {"COLOR": "red"},
                "parents": [
                    {"@type": "as.dto.sample.Sample", "@id": 3, "code": "P1", "properties": {}}
                ]
            },
            {
                "@type": "as.dto.sample.Sample",
                "@id": 4,
                "code": "YEAST-2",
                "properties": {},
                "parents": [3]
            }
        ]
    })
}

#[test]
fn test_search_round_trip() {
    init_tracing();
    let transport = RecordingTransport::replying(search_response());
    let api = ApplicationServerApi::new(&transport, "admin-token", WireConfig::openbis_v3());

    let mut criteria = Sample::criteria();
    criteria.with_property("COLOR").that_contains("red");
    let mut fetch_options = SampleFetchOptions::new();
    fetch_options.with_properties();
    fetch_options.with_parents().with_properties();
    fetch_options.count(2);

    let result = api.search::<Sample>(&criteria, &fetch_options).unwrap();

    assert_eq!(result.total_count(), 12);
    let samples = result.objects();
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].property("COLOR").unwrap(), Some("red"));
    assert_eq!(
        samples[1].parents().unwrap()[0].code().map(String::as_str),
        Some("P1")
    );
    assert!(samples[1].parents().unwrap()[0].properties().unwrap().is_empty());
    assert_eq!(
        samples[0].children().unwrap_err().to_string(),
        "'children' of Sample was not fetched; request it in the fetch options before reading it"
    );

    let calls = transport.calls.borrow();
    let (method, params) = &calls[0];
    assert_eq!(method, "searchSamples");
    assert_eq!(params[0], json!("admin-token"));
    assert_eq!(params[1]["@type"], json!("as.dto.SampleSearchCriteria"));
    assert_eq!(
        params[1]["criteria"][0],
        json!({"@type": "as.dto.PropertyContains", "field": "COLOR", "value": "red"})
    );
    assert_eq!(params[2]["count"], json!(2));
    assert_eq!(
        params[2]["parents"]["properties"],
        json!({"@type": "as.dto.EmptyFetchOptions"})
    );
}

#[test]
fn test_update_batch() {
    init_tracing();
    let transport = RecordingTransport::replying(Value::Null);
    let api = ApplicationServerApi::new(&transport, "admin-token", WireConfig::default());

    let mut first =
        SampleUpdate::new(ObjectId::perm_id(EntityKind::Sample, "20160817175233002-331")).unwrap();
    first.set_property("COLOR", Some("blue".to_string()));
    let second =
        SampleUpdate::new(ObjectId::perm_id(EntityKind::Sample, "20160817175233002-332")).unwrap();

    api.update(&[first, second]).unwrap();

    let calls = transport.calls.borrow();
    let (method, params) = &calls[0];
    assert_eq!(method, "updateSamples");
    assert_eq!(
        params[1],
        json!([
            {
                "type": "SampleUpdate",
                "sampleId": {"type": "SamplePermId", "permId": "20160817175233002-331"},
                "properties": {"COLOR": "blue"}
            },
            {
                "type": "SampleUpdate",
                "sampleId": {"type": "SamplePermId", "permId": "20160817175233002-332"}
            }
        ])
    );
}

#[test]
fn test_transport_failure_is_retryable() {
    init_tracing();
    let transport = RecordingTransport::failing("connection refused");
    let api = ApplicationServerApi::new(&transport, "admin-token", WireConfig::default());

    let err = api
        .search::<Space>(&Space::criteria(), &SpaceFetchOptions::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_retryable());
}

#[test]
fn test_malformed_response_is_a_wire_error() {
    init_tracing();
    let transport = RecordingTransport::replying(json!({"@type": "as.dto.sample.Sample"}));
    let api = ApplicationServerApi::new(&transport, "admin-token", WireConfig::openbis_v3());

    let err = api
        .search::<Sample>(&Sample::criteria(), &SampleFetchOptions::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Wire);
}
