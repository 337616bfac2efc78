//! Reference resolution and database reconciliation

use firevalue::{DatabaseId, DocumentHandle, DocumentKey, ServerTimestampBehavior, WireValue};

use crate::{classic_decoder, full_decoder, home, lite_decoder};

const NONE: ServerTimestampBehavior = ServerTimestampBehavior::None;

#[test]
fn reference_into_home_database() {
    let (d, sink) = full_decoder();
    let decoded = d
        .decode(&WireValue::reference("projects/P/databases/D/documents/coll/doc"), NONE)
        .unwrap();

    let reference = decoded.as_reference().unwrap();
    assert_eq!(reference.key(), &DocumentKey::from_path_string("coll/doc").unwrap());
    assert_eq!(reference.id(), "doc");
    assert_eq!(reference.database_id(), &home());
    assert!(sink.is_empty());
}

#[test]
fn nested_document_path_is_kept_whole() {
    let (d, _) = lite_decoder();
    let decoded = d
        .decode(
            &WireValue::reference("projects/P/databases/D/documents/a/b/c/d"),
            NONE,
        )
        .unwrap();
    let reference = decoded.as_reference().unwrap();
    assert_eq!(reference.path(), "a/b/c/d");
    assert_eq!(reference.key().collection_id(), "c");
}

#[test]
fn reference_into_other_database_is_rebound_and_reported() {
    let (d, sink) = classic_decoder();
    let decoded = d
        .decode(&WireValue::reference("projects/P/databases/D2/documents/coll/doc"), NONE)
        .unwrap();

    let reference = decoded.as_reference().unwrap();
    assert_eq!(reference.path(), "coll/doc");
    assert_eq!(reference.database_id(), &home());

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].found, DatabaseId::new("P", "D2"));
    assert_eq!(events[0].expected, home());

    let message = events[0].to_string();
    assert!(message.contains("coll/doc"));
    assert!(message.contains("P/D2"));
    assert!(message.contains("P/D"));
}

#[test]
fn every_flavor_reports_the_same_mismatch() {
    let name = "projects/Q/databases/D/documents/coll/doc";
    let (full, full_sink) = full_decoder();
    let (lite, lite_sink) = lite_decoder();
    let (classic, classic_sink) = classic_decoder();

    full.decode(&WireValue::reference(name), NONE).unwrap();
    lite.decode(&WireValue::reference(name), NONE).unwrap();
    classic.decode(&WireValue::reference(name), NONE).unwrap();

    assert_eq!(full_sink.events(), lite_sink.events());
    assert_eq!(lite_sink.events(), classic_sink.events());
    assert_eq!(full_sink.len(), 1);
}

#[test]
fn foreign_reference_inside_pending_previous_value() {
    let (d, sink) = full_decoder();
    let wrapper = firevalue_wire::server_timestamp(
        firevalue_wire::WireTimestamp::from_parts(1, 0),
        Some(WireValue::reference("projects/P/databases/D2/documents/coll/doc")),
    );

    d.decode(&wrapper, ServerTimestampBehavior::None).unwrap();
    assert!(sink.is_empty());

    d.decode(&wrapper, ServerTimestampBehavior::Previous).unwrap();
    assert_eq!(sink.len(), 1);
}
