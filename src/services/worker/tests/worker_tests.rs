use serde_json::{json, Value};

use super::*;
use crate::test_utils::init_logging;

fn resolution_request(id: Value) -> Value {
    json!({
        "type": "getCodeToQuoteIds",
        "id": id,
        "post": {
            "id": "p1",
            "title": "Parking is terrible here",
            "selftext": "",
            "comments": [
                {"id": "c1", "body": "I agree parking is terrible",
                 "comments": [{"id": "c2", "body": "Totally unrelated reply"}]}
            ]
        },
        "codes": [{"id": "k1", "text": "parking is terrible"}]
    })
}

#[test]
fn resolution_round_trip_echoes_the_id() {
    init_logging();
    let worker = ResolverWorker::spawn();
    worker.submit(resolution_request(json!(7))).unwrap();

    match worker.recv().unwrap() {
        WorkerResponse::GetCodeToQuoteIdsResult { id, data } => {
            assert_eq!(id, json!(7));
            assert_eq!(
                data.all_quote_ids,
                vec!["p1-title", "p1-selftext", "c1", "c2"]
            );
            let matches = &data.code_to_quote_ids["k1"];
            assert!(matches.contains("p1-title"));
            assert!(matches.contains("c1"));
        }
        other => panic!("expected success response, got {other:?}"),
    }
}

#[test]
fn segmentation_round_trip() {
    let worker = ResolverWorker::spawn();
    let mut message = resolution_request(json!("seg-1"));
    message["type"] = json!("processTranscript");
    worker.submit(message).unwrap();

    match worker.recv().unwrap() {
        WorkerResponse::ProcessTranscriptResult { id, data } => {
            assert_eq!(id, json!("seg-1"));
            // One segment per element plus the split inside c1.
            assert!(data.processed_segments.len() > 4);
            assert_eq!(data.code_set, vec!["k1"]);
        }
        other => panic!("expected segmentation response, got {other:?}"),
    }
}

#[test]
fn malformed_post_yields_a_correlated_error() {
    let worker = ResolverWorker::spawn();
    // A comment node without an id is a data error, not a crash.
    worker
        .submit(json!({
            "type": "getCodeToQuoteIds",
            "id": 3,
            "post": {
                "id": "p1", "title": "t", "selftext": "s",
                "comments": [{"body": "orphan comment"}]
            },
            "codes": []
        }))
        .unwrap();

    match worker.recv().unwrap() {
        WorkerResponse::Error { id, data } => {
            assert_eq!(id, json!(3));
            assert!(data.contains("id"), "message should name the missing field: {data}");
        }
        other => panic!("expected error response, got {other:?}"),
    }
}

#[test]
fn unknown_request_type_is_rejected_not_ignored() {
    let worker = ResolverWorker::spawn();
    worker
        .submit(json!({"type": "shutdownEverything", "id": 4}))
        .unwrap();

    match worker.recv().unwrap() {
        WorkerResponse::Error { id, data } => {
            assert_eq!(id, json!(4));
            assert!(data.contains("shutdownEverything"));
        }
        other => panic!("expected error response, got {other:?}"),
    }
}

#[test]
fn worker_survives_a_failed_request() {
    let worker = ResolverWorker::spawn();
    worker.submit(json!({"type": "getCodeToQuoteIds", "id": 1})).unwrap();
    worker.submit(resolution_request(json!(2))).unwrap();

    assert!(worker.recv().unwrap().is_error());
    let second = worker.recv().unwrap();
    assert!(!second.is_error());
    assert_eq!(second.id(), &json!(2));
}

#[test]
fn overlapping_requests_correlate_by_id() {
    let worker = ResolverWorker::spawn();
    for n in 0..5 {
        worker.submit(resolution_request(json!(n))).unwrap();
    }

    let mut seen: Vec<i64> = (0..5)
        .map(|_| worker.recv().unwrap().id().as_i64().unwrap())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}
