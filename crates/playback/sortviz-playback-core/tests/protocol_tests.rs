use sortviz_playback_core::{
    parse_sort_response_json, Algorithm, ProtocolError, SortRequest, Step,
};

/// it should serialize algorithm names in the service's lowercase wire form
#[test]
fn algorithm_wire_form_is_lowercase() {
    assert_eq!(
        serde_json::to_string(&Algorithm::Quicksort).unwrap(),
        "\"quicksort\""
    );
    assert_eq!(
        serde_json::to_string(&Algorithm::Bubblesort).unwrap(),
        "\"bubblesort\""
    );
    let round: Algorithm = serde_json::from_str("\"mergesort\"").unwrap();
    assert_eq!(round, Algorithm::Mergesort);
}

#[test]
fn request_body_matches_service_shape() {
    let req = SortRequest {
        array: vec![8.0, 3.0, 1.0],
        algorithm: Algorithm::default(),
    };
    assert_eq!(
        serde_json::to_string(&req).unwrap(),
        r#"{"array":[8.0,3.0,1.0],"algorithm":"quicksort"}"#
    );
}

/// it should parse a service response with null pivots and missing fields
#[test]
fn parses_service_response() {
    let json = r#"{
        "steps": [
            { "array": [3.0, 8.0, 1.0], "pivot": null, "compared": [0, 1] },
            { "array": [3.0, 1.0, 8.0], "pivot": 2, "compared": [1, 2] },
            { "array": [1.0, 3.0, 8.0] }
        ]
    }"#;
    let steps = parse_sort_response_json(json).unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].pivot, None);
    assert_eq!(steps[1].pivot, Some(2));
    assert_eq!(steps[2].compared, Vec::<usize>::new());
}

/// it should reject a step whose pivot lies outside its snapshot
#[test]
fn rejects_out_of_range_pivot() {
    let json = r#"{
        "steps": [
            { "array": [1.0, 2.0], "pivot": 0, "compared": [] },
            { "array": [1.0, 2.0], "pivot": 5, "compared": [] }
        ]
    }"#;
    match parse_sort_response_json(json) {
        Err(ProtocolError::InvalidStep { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected InvalidStep, got {other:?}"),
    }
}

#[test]
fn rejects_duplicate_compared_indices() {
    let step = Step {
        array: vec![1.0, 2.0, 3.0],
        pivot: None,
        compared: vec![0, 2, 0],
    };
    assert!(step.validate_basic().is_err());
}

#[test]
fn rejects_malformed_body() {
    assert!(matches!(
        parse_sort_response_json("not json"),
        Err(ProtocolError::Parse(_))
    ));
}

/// it should validate every recorded trace fixture
#[test]
fn recorded_traces_validate() {
    let mut names = sortviz_test_fixtures::traces::keys();
    names.sort();
    assert_eq!(
        names,
        vec![
            "bubblesort-default".to_string(),
            "mergesort-default".to_string(),
            "quicksort-default".to_string(),
        ]
    );
    for name in &names {
        let json = sortviz_test_fixtures::traces::json(name).unwrap();
        let steps = parse_sort_response_json(&json).unwrap();
        assert!(!steps.is_empty(), "trace {name} should not be empty");
    }
}
