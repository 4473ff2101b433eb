use std::io::Read;
use tracecap::utils::render::{events_to_json, write_events};
use tracecap::{install, Level};
use tracing::{info, info_span, warn};

#[test]
fn dumps_rendered_events_to_a_file() {
    let (_guard, capture) = install();
    let span = info_span!("batch", batch_id = 7);
    span.in_scope(|| {
        info!(target: "tracecap_dump", rows = 120usize, "batch loaded");
        warn!(target: "tracecap_dump", "slow consumer");
    });

    let events = capture.target("tracecap_dump").all_events();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write_events(&events, &mut file).unwrap();

    let mut text = String::new();
    file.reopen().unwrap().read_to_string(&mut text).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("INFO"));
    assert!(text.contains("tracecap_dump - batch loaded {rows=120} <batch_id=7>"));
    assert!(text.contains(" WARN"));
    assert!(text.contains("slow consumer"));
}

#[test]
fn json_dump_round_trips_through_serde_json() {
    let (_guard, capture) = install();
    info!(target: "tracecap_dump_json", code = 418, "teapot");

    let events = capture.target("tracecap_dump_json").events_at(Level::INFO);
    let json = events_to_json(&events).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first = &parsed[0];
    assert_eq!(first["level"], "INFO");
    assert_eq!(first["target"], "tracecap_dump_json");
    assert_eq!(first["message"], "teapot");
    assert_eq!(first["fields"]["code"], 418);
}
