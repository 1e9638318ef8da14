//! Integration tests for the validate -> transform pipeline stages

use creative_scatter_data::{transform, validate};
use creative_scatter_shared::{DataPayload, ScatterError};
use serde_json::json;

/// Build a payload the way the host delivers it, from plain JSON.
fn payload_from_json(value: serde_json::Value) -> DataPayload {
    serde_json::from_value(value).expect("payload should deserialize")
}

fn three_row_payload() -> DataPayload {
    payload_from_json(json!({
        "tables": {
            "DEFAULT": [
                { "c": "banner-a", "u": "https://cdn.test/a.png", "x": 0.012, "y": 0.034, "s": 1500 },
                { "c": "banner-b", "u": "", "x": 0.020, "y": 0.050, "s": 900 },
                { "c": "banner-c", "u": "https://cdn.test/c.png", "x": "0.031", "y": "0.007", "s": "2200" }
            ]
        },
        "fields": {
            "creativeId": [ { "id": "c" } ],
            "imageUrl": [ { "id": "u" } ],
            "xMetric": [ { "id": "x" } ],
            "yMetric": [ { "id": "y" } ],
            "sizeMetric": [ { "id": "s" } ]
        }
    }))
}

#[test]
fn empty_image_url_excludes_row() {
    let payload = three_row_payload();
    assert!(validate(&payload).is_ok());

    let records = transform(&payload).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].creative_id, "banner-a");
    assert_eq!(records[1].creative_id, "banner-c");
}

#[test]
fn order_and_values_preserved() {
    let records = transform(&three_row_payload()).unwrap();

    assert_eq!(records[0].x_value, 0.012);
    assert_eq!(records[0].y_value, 0.034);
    assert_eq!(records[0].size_value, 1500.0);

    // string metrics coerce like numeric ones
    assert_eq!(records[1].x_value, 0.031);
    assert_eq!(records[1].y_value, 0.007);
    assert_eq!(records[1].size_value, 2200.0);
}

#[test]
fn ids_are_row_index_derived() {
    let records = transform(&three_row_payload()).unwrap();
    // the filtered middle row still consumes an index
    assert_eq!(records[0].id, "item-0");
    assert_eq!(records[1].id, "item-2");
}

#[test]
fn non_numeric_metrics_coerce_to_zero_not_excluded() {
    let payload = payload_from_json(json!({
        "tables": {
            "DEFAULT": [
                { "c": "banner-a", "u": "https://cdn.test/a.png", "x": "garbage", "y": null }
            ]
        },
        "fields": {
            "creativeId": [ { "id": "c" } ],
            "imageUrl": [ { "id": "u" } ],
            "xMetric": [ { "id": "x" } ],
            "yMetric": [ { "id": "y" } ]
        }
    }));

    let records = transform(&payload).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].x_value, 0.0);
    assert_eq!(records[0].y_value, 0.0);
}

#[test]
fn absent_size_role_defaults_every_record_to_one() {
    let payload = payload_from_json(json!({
        "tables": {
            "DEFAULT": [
                { "c": "a", "u": "https://cdn.test/a.png", "x": 0.1, "y": 0.2 },
                { "c": "b", "u": "https://cdn.test/b.png", "x": 0.3, "y": 0.4 }
            ]
        },
        "fields": {
            "creativeId": [ { "id": "c" } ],
            "imageUrl": [ { "id": "u" } ],
            "xMetric": [ { "id": "x" } ],
            "yMetric": [ { "id": "y" } ]
        }
    }));

    let records = transform(&payload).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.size_value == 1.0));
}

#[test]
fn missing_creative_id_gets_positional_fallback() {
    let payload = payload_from_json(json!({
        "tables": {
            "DEFAULT": [
                { "u": "https://cdn.test/a.png", "x": 0.1, "y": 0.2 }
            ]
        },
        "fields": {
            "creativeId": [ { "id": "c" } ],
            "imageUrl": [ { "id": "u" } ],
            "xMetric": [ { "id": "x" } ],
            "yMetric": [ { "id": "y" } ]
        }
    }));

    let records = transform(&payload).unwrap();
    assert_eq!(records[0].creative_id, "Creative 1");
}

#[test]
fn all_rows_filtered_leaves_empty_vec() {
    let payload = payload_from_json(json!({
        "tables": {
            "DEFAULT": [
                { "c": "a", "u": "", "x": 0.1, "y": 0.2 },
                { "c": "b", "x": 0.3, "y": 0.4 }
            ]
        },
        "fields": {
            "creativeId": [ { "id": "c" } ],
            "imageUrl": [ { "id": "u" } ],
            "xMetric": [ { "id": "x" } ],
            "yMetric": [ { "id": "y" } ]
        }
    }));

    let records = transform(&payload).unwrap();
    assert!(records.is_empty());
}

#[test]
fn validator_rejects_payload_missing_roles() {
    let payload = payload_from_json(json!({
        "tables": { "DEFAULT": [] },
        "fields": {
            "creativeId": [ { "id": "c" } ],
            "imageUrl": [ { "id": "u" } ],
            "xMetric": [ { "id": "x" } ]
        }
    }));

    assert!(matches!(
        validate(&payload),
        Err(ScatterError::MissingRole { role }) if role == "yMetric"
    ));
}
