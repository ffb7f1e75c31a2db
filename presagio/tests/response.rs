use presagio::{decode_predictions, PresagioError};

#[test]
fn decodes_quantile_tables_in_order() {
    let payload = br#"{"predictions":[
        {"quantiles":{"0.1":[1.0,2.0],"0.5":[2.0,3.0],"0.9":[3.0,4.0]}},
        {"quantiles":{"0.5":[10.0]}}
    ]}"#;

    let tables = decode_predictions(payload).unwrap();
    assert_eq!(tables.len(), 2);

    assert_eq!(tables[0].horizon(), 2);
    assert_eq!(tables[0]["0.5"][1], 3.0);
    assert_eq!(tables[0].value_at("0.9", 0), Some(3.0));

    assert_eq!(tables[1].horizon(), 1);
    assert_eq!(tables[1]["0.5"], [10.0]);
}

#[test]
fn levels_come_back_in_string_order() {
    let payload = br#"{"predictions":[{"quantiles":{"0.9":[1.0],"0.1":[2.0],"0.5":[3.0]}}]}"#;
    let tables = decode_predictions(payload).unwrap();

    let levels: Vec<&str> = tables[0].levels().map(|l| l.as_str()).collect();
    assert_eq!(levels, ["0.1", "0.5", "0.9"]);
}

#[test]
fn track_lookup_uses_the_exact_spelling() {
    let payload = br#"{"predictions":[{"quantiles":{"0.10":[1.0]}}]}"#;
    let tables = decode_predictions(payload).unwrap();
    assert!(tables[0].track("0.10").is_some());
    assert!(tables[0].track("0.1").is_none());
}

#[test]
fn plain_garbage_is_a_decode_error() {
    let err = decode_predictions(b"not json").unwrap_err();
    assert!(matches!(err, PresagioError::Decode(_)));
}

#[test]
fn invalid_utf8_is_a_decode_error() {
    let err = decode_predictions(&[0xff, 0xfe, b'{', b'}']).unwrap_err();
    assert!(matches!(err, PresagioError::Decode(_)));
}

#[test]
fn missing_predictions_key_is_a_decode_error() {
    let err = decode_predictions(br#"{"forecast": []}"#).unwrap_err();
    assert!(matches!(err, PresagioError::Decode(_)));
}

#[test]
fn missing_quantiles_key_is_a_decode_error() {
    let err = decode_predictions(br#"{"predictions":[{"samples":[1.0]}]}"#).unwrap_err();
    assert!(matches!(err, PresagioError::Decode(_)));
}

#[test]
fn out_of_range_level_key_is_a_decode_error() {
    let err = decode_predictions(br#"{"predictions":[{"quantiles":{"1.5":[1.0]}}]}"#).unwrap_err();
    assert!(matches!(err, PresagioError::Decode(_)));
}

#[test]
fn ragged_tracks_are_a_decode_error() {
    let payload = br#"{"predictions":[{"quantiles":{"0.1":[1.0,2.0],"0.5":[1.0]}}]}"#;
    let err = decode_predictions(payload).unwrap_err();
    assert!(matches!(err, PresagioError::Decode(_)));
}

#[test]
fn empty_predictions_decode_to_no_tables() {
    let tables = decode_predictions(br#"{"predictions":[]}"#).unwrap();
    assert!(tables.is_empty());
}

#[test]
fn empty_quantile_map_yields_a_zero_horizon_table() {
    let tables = decode_predictions(br#"{"predictions":[{"quantiles":{}}]}"#).unwrap();
    assert_eq!(tables[0].horizon(), 0);
    assert!(tables[0].track("0.5").is_none());
}
