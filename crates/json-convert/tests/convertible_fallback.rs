use json_convert::{to_string, EncodeError, JsonValue, ToJson};
use serde_json::json;

#[derive(Debug)]
struct Point {
    x: i64,
    y: i64,
}

impl ToJson for Point {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(vec![
            ("x".to_string(), self.x.into()),
            ("y".to_string(), self.y.into()),
        ])
    }
}

/// Converts to another convertible, which converts to a native value.
#[derive(Debug)]
struct Labeled;

impl ToJson for Labeled {
    fn to_json(&self) -> JsonValue {
        JsonValue::convertible(Point { x: 1, y: 2 })
    }
}

#[derive(Debug)]
struct Celsius(f64);

impl ToJson for Celsius {
    fn to_json(&self) -> JsonValue {
        JsonValue::Float(self.0)
    }
}

#[test]
fn convertible_encodes_as_its_conversion() {
    let value = JsonValue::convertible(Point { x: 1, y: 2 });
    assert_eq!(to_string(&value).unwrap(), r#"{"x":1,"y":2}"#);
}

#[test]
fn conversion_result_matches_direct_encoding() {
    let direct = to_string(&JsonValue::from(json!({"x": 1, "y": 2}))).unwrap();
    let converted = to_string(&JsonValue::convertible(Point { x: 1, y: 2 })).unwrap();
    assert_eq!(converted, direct);
}

#[test]
fn conversion_chains_until_native() {
    let value = JsonValue::convertible(Labeled);
    assert_eq!(to_string(&value).unwrap(), r#"{"x":1,"y":2}"#);
}

#[test]
fn convertibles_nest_inside_containers() {
    let value = JsonValue::Object(vec![
        ("name".to_string(), "probe".into()),
        (
            "position".to_string(),
            JsonValue::convertible(Point { x: 1, y: 2 }),
        ),
        (
            "readings".to_string(),
            JsonValue::Array(vec![
                JsonValue::convertible(Celsius(21.5)),
                JsonValue::convertible(Celsius(-3.25)),
            ]),
        ),
    ]);
    assert_eq!(
        to_string(&value).unwrap(),
        r#"{"name":"probe","position":{"x":1,"y":2},"readings":[21.5,-3.25]}"#
    );
}

#[test]
fn conversion_output_may_contain_further_convertibles() {
    #[derive(Debug)]
    struct Segment;

    impl ToJson for Segment {
        fn to_json(&self) -> JsonValue {
            JsonValue::Array(vec![
                JsonValue::convertible(Point { x: 1, y: 2 }),
                JsonValue::convertible(Point { x: 3, y: 4 }),
            ])
        }
    }

    let value = JsonValue::convertible(Segment);
    assert_eq!(
        to_string(&value).unwrap(),
        r#"[{"x":1,"y":2},{"x":3,"y":4}]"#
    );
}

#[test]
fn bytes_are_not_serializable() {
    let err = to_string(&JsonValue::Bytes(vec![1, 2, 3])).unwrap_err();
    assert!(matches!(err, EncodeError::NotSerializable(_)));
}

#[test]
fn nested_bytes_fail_even_with_convertibles_elsewhere() {
    let value = JsonValue::Object(vec![
        (
            "ok".to_string(),
            JsonValue::convertible(Point { x: 0, y: 0 }),
        ),
        ("raw".to_string(), JsonValue::Bytes(vec![0xde, 0xad])),
    ]);
    let err = to_string(&value).unwrap_err();
    assert!(matches!(err, EncodeError::NotSerializable(_)));
}

#[test]
fn conversion_returning_unsupported_value_fails() {
    #[derive(Debug)]
    struct Blob;

    impl ToJson for Blob {
        fn to_json(&self) -> JsonValue {
            JsonValue::Bytes(vec![0xff])
        }
    }

    let err = to_string(&JsonValue::convertible(Blob)).unwrap_err();
    assert!(matches!(err, EncodeError::NotSerializable(_)));
}
