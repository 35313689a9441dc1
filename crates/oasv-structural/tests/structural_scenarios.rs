//! End-to-end scenarios for the structural validator: shape documents
//! parsed from JSON, then checked against recorded response bodies.

use oasv_structural::{validate, ShapeNode, StructuralError};
use serde_json::json;

/// The response shape used by the recorded-traffic fixtures: a user with
/// a nested address and a list of friends.
fn user_response_shape() -> ShapeNode {
    ShapeNode::from_value(&json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "integer" },
            "address": {
                "type": "object",
                "properties": {
                    "street": { "type": "string" },
                    "city": { "type": "string" },
                    "zipCode": { "type": "string" }
                }
            },
            "friends": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "age": { "type": "integer" }
                    }
                }
            }
        }
    }))
    .expect("fixture shape parses")
}

#[test]
fn full_conforming_response_passes() {
    let response = json!({
        "name": "John Doe",
        "age": 30,
        "address": {
            "street": "123 Main St",
            "city": "Anytown",
            "zipCode": "12345"
        },
        "friends": [
            { "name": "Jane Doe", "age": 28 },
            { "name": "Mike Smith", "age": 35 }
        ]
    });
    assert_eq!(validate(&response, &user_response_shape()), Ok(()));
}

#[test]
fn simple_conforming_subset_passes() {
    let response = json!({ "name": "John Doe", "age": 30 });
    assert_eq!(validate(&response, &user_response_shape()), Ok(()));
}

#[test]
fn undeclared_field_fails_with_its_name() {
    let response = json!({ "name": "John Doe", "nickname": "JD" });
    let err = validate(&response, &user_response_shape()).unwrap_err();
    assert!(matches!(err, StructuralError::UnexpectedField { .. }));
    assert_eq!(err.path().to_string(), "nickname");
    assert_eq!(
        err.to_string(),
        "unexpected field 'nickname': not declared in the expected shape"
    );
}

#[test]
fn object_for_declared_array_fails_with_expected_and_actual() {
    let shape = ShapeNode::from_value(&json!({
        "type": "object",
        "properties": {
            "address": { "type": "array", "items": { "type": "string" } }
        }
    }))
    .expect("fixture shape parses");

    let response = json!({ "address": { "street": "123 Main St" } });
    let err = validate(&response, &shape).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch at 'address': expected 'array', found 'object'"
    );
}

#[test]
fn array_of_objects_validates_each_element() {
    let response = json!({
        "friends": [ { "name": "Jane", "age": 28 } ]
    });
    assert_eq!(validate(&response, &user_response_shape()), Ok(()));
}

#[test]
fn declared_but_absent_fields_pass_silently() {
    // The validator only reports fields that are present and undeclared
    // or mistyped; it never reports declared fields the data omits.
    assert_eq!(validate(&json!({}), &user_response_shape()), Ok(()));
}

#[test]
fn deeply_nested_violation_reports_full_path() {
    let response = json!({
        "friends": [
            { "name": "Jane", "age": 28 },
            { "name": "Mike", "age": { "years": 35 } }
        ]
    });
    let err = validate(&response, &user_response_shape()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type mismatch at 'friends[1].age': expected 'integer', found 'object'"
    );
}
