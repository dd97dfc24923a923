//! Serialization of branded values.

#![cfg(feature = "serde")]

use numbrand::prelude::*;
use serde_json::json;

#[test]
fn serializes_as_plain_number() {
    let n = natural().validate(3.0).unwrap();
    assert_eq!(serde_json::to_value(n).unwrap(), json!(3.0));
}

#[test]
fn deserialize_runs_checks() {
    let ok: NaturalNumber = serde_json::from_value(json!(4)).unwrap();
    assert_eq!(ok, 4.0);

    let err = serde_json::from_value::<NaturalNumber>(json!(-4))
        .unwrap_err();
    assert!(
        err.to_string().contains("expected non-negative number"),
        "{err}"
    );

    let err = serde_json::from_value::<NumberInRange<1, 5>>(json!(6.5))
        .unwrap_err();
    assert!(err.to_string().contains("1 <= x <= 5"), "{err}");
}

#[test]
fn deserialize_inside_struct() {
    #[derive(serde::Deserialize)]
    struct Review {
        rating: Intersect<IntegerNumber, NumberInRange<1, 5>>,
    }

    let review: Review = serde_json::from_str(r#"{"rating": 5}"#).unwrap();
    assert_eq!(review.rating, 5.0);
    let fractional = serde_json::from_str::<Review>(r#"{"rating": 2.5}"#);
    assert!(fractional.is_err());
}
