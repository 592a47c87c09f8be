#[macro_use]
mod common;

use common::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Person {
    name: String,
    age: u32,
}

fn john() -> Person {
    Person {
        name: "John".to_string(),
        age: 30,
    }
}

///////////////////////////////////////////////////////////////////////////////
// Serialization

#[test]
fn test_to_json() {
    assert_eq!(john().to_json().unwrap(), r#"{"Name":"John","Age":30}"#);
    assert_eq!(vec![1, 2, 3].to_json().unwrap(), "[1,2,3]");
}

#[test]
fn test_absent_value_serializes_as_null() {
    assert_eq!(None::<Person>.to_json().unwrap(), "null");
}

#[test]
fn test_to_json_opt_short_circuits_absent() {
    assert_eq!(None::<Person>.to_json_opt().unwrap(), None);
    assert_eq!(
        Some(john()).to_json_opt().unwrap().as_deref(),
        Some(r#"{"Name":"John","Age":30}"#)
    );
}

#[test]
fn test_to_json_pretty() {
    let options = JsonOptions { pretty: true };
    let expected = indoc! {r#"
        {
          "Name": "John",
          "Age": 30
        }"#};
    assert_eq!(john().to_json_with(&options).unwrap(), expected);
    assert_eq!(
        john().to_json_with(&JsonOptions::default()).unwrap(),
        r#"{"Name":"John","Age":30}"#
    );
    assert_eq!(
        Some(john()).to_json_opt_with(&options).unwrap().unwrap(),
        expected
    );
}

///////////////////////////////////////////////////////////////////////////////
// Deserialization

#[test]
fn test_deserialize_json() {
    let parsed: Person = r#"{"Name":"John","Age":30}"#.deserialize_json().unwrap();
    assert_eq!(parsed, john());
    let values: Vec<i32> = "[1,2,3]".to_string().deserialize_json().unwrap();
    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn test_malformed_json_is_an_error() {
    let result = "invalid json".deserialize_json::<Person>();
    let error = result.unwrap_err();
    assert!(format!("{}", error).starts_with("malformed JSON"));
}

#[test]
fn test_deserialize_json_opt() {
    let parsed: Option<Person> = Some(r#"{"Name":"John","Age":30}"#)
        .deserialize_json_opt()
        .unwrap();
    assert_eq!(parsed, Some(john()));

    // Absent text never reaches the parser.
    let parsed: Option<Person> = None::<&str>.deserialize_json_opt().unwrap();
    assert_eq!(parsed, None);
    let parsed: Option<Person> = None::<String>.deserialize_json_opt().unwrap();
    assert_eq!(parsed, None);

    // Present malformed text is still strict.
    assert!(Some("invalid json")
        .deserialize_json_opt::<Person>()
        .is_err());
}

#[test]
fn test_round_trip() {
    let text = john().to_json().unwrap();
    let back: Person = text.deserialize_json().unwrap();
    assert_eq!(back, john());
}
