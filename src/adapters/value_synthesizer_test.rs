use super::value_synthesizer::{synthesize, synthesize_primitive, CURRENCY_CODES};
use crate::domain::semantics::SemanticCategory;
use crate::domain::FieldContext;
use serde_json::json;

#[test]
fn test_uuid_shape() {
    for _ in 0..10 {
        let value = synthesize(SemanticCategory::Uuid);
        let text = value.as_str().unwrap();
        assert_eq!(text.len(), 36);
        for (index, c) in text.chars().enumerate() {
            match index {
                8 | 13 | 18 | 23 => assert_eq!(c, '-'),
                14 => assert_eq!(c, '4'),
                _ => assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            }
        }
    }
}

#[test]
fn test_currency_from_fixed_set() {
    for _ in 0..20 {
        let value = synthesize(SemanticCategory::Currency);
        assert!(CURRENCY_CODES.contains(&value.as_str().unwrap()));
    }
}

#[test]
fn test_amount_fixed_point_in_range() {
    for _ in 0..50 {
        let value = synthesize(SemanticCategory::Amount);
        let text = value.as_str().unwrap();
        let (whole, fraction) = text.split_once('.').unwrap();
        assert!(whole.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(fraction.len(), 2);
        assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        let parsed: f64 = text.parse().unwrap();
        assert!((0.01..=1000.0).contains(&parsed));
    }
}

#[test]
fn test_digits_phone_length() {
    for _ in 0..20 {
        let value = synthesize(SemanticCategory::DigitsPhone);
        let text = value.as_str().unwrap();
        assert!((10..=15).contains(&text.len()));
        assert!(text.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_fsp_id_uppercase_alphanumeric() {
    for _ in 0..20 {
        let value = synthesize(SemanticCategory::FspId);
        let text = value.as_str().unwrap();
        assert!((1..=32).contains(&text.len()));
        assert!(text
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}

#[test]
fn test_geo_latitude_signed_four_decimals() {
    for _ in 0..20 {
        let value = synthesize(SemanticCategory::GeoLatitude);
        let text = value.as_str().unwrap();
        assert!(text.starts_with('+') || text.starts_with('-'));
        let (_, fraction) = text.split_once('.').unwrap();
        assert_eq!(fraction.len(), 4);
        let parsed: f64 = text.parse().unwrap();
        assert!(parsed.abs() <= 90.0);
    }
}

#[test]
fn test_geo_longitude_bounds() {
    for _ in 0..20 {
        let value = synthesize(SemanticCategory::GeoLongitude);
        let parsed: f64 = value.as_str().unwrap().parse().unwrap();
        assert!(parsed.abs() <= 180.0);
    }
}

#[test]
fn test_person_name_two_capitalized_words() {
    for _ in 0..20 {
        let value = synthesize(SemanticCategory::PersonName);
        let text = value.as_str().unwrap();
        let words: Vec<&str> = text.split(' ').collect();
        assert_eq!(words.len(), 2);
        for word in words {
            let mut chars = word.chars();
            assert!(chars.next().unwrap().is_ascii_uppercase());
            assert!(chars.all(|c| c.is_ascii_lowercase()));
        }
    }
}

#[test]
fn test_complex_name_shape() {
    let value = synthesize(SemanticCategory::ComplexName);
    let name = value.as_object().unwrap();
    assert!(name.contains_key("firstName"));
    assert!(name.contains_key("lastName"));
}

#[test]
fn test_sub_scenario_alphabet() {
    for _ in 0..20 {
        let value = synthesize(SemanticCategory::SubScenario);
        let text = value.as_str().unwrap();
        assert!((1..=32).contains(&text.len()));
        assert!(text.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
    }
}

#[test]
fn test_date_and_date_time_syntax() {
    let date = synthesize(SemanticCategory::Date);
    let text = date.as_str().unwrap();
    assert_eq!(text.len(), 10);
    assert_eq!(&text[4..5], "-");
    assert_eq!(&text[7..8], "-");

    let instant = synthesize(SemanticCategory::DateTime);
    let text = instant.as_str().unwrap();
    assert!(text.ends_with('Z'));
    assert!(text.contains('T'));
    assert!(text.contains('.'));
}

#[test]
fn test_email_and_uri_placeholders() {
    let email = synthesize(SemanticCategory::Email);
    assert!(email.as_str().unwrap().contains('@'));

    let uri = synthesize(SemanticCategory::Uri);
    assert!(uri.as_str().unwrap().starts_with("https://"));
}

#[test]
fn test_content_length_literal() {
    assert_eq!(synthesize(SemanticCategory::ContentLength), json!("123"));
}

#[test]
fn test_transfer_state_fixed_set() {
    let value = synthesize(SemanticCategory::TransferState);
    let text = value.as_str().unwrap();
    assert!(["RECEIVED", "RESERVED", "COMMITTED", "ABORTED"].contains(&text));
}

#[test]
fn test_primitive_integer_respects_bounds() {
    let node = json!({ "type": "integer", "minimum": 5, "maximum": 5 });
    let value = synthesize_primitive("integer", &FieldContext::default(), &node).unwrap();
    assert_eq!(value, json!(5));
}

#[test]
fn test_primitive_number_amount_rule() {
    let ctx = FieldContext {
        key: Some("totalAmount"),
        parent_key: None,
    };
    let node = json!({ "type": "number" });
    let value = synthesize_primitive("number", &ctx, &node).unwrap();
    let parsed: f64 = value.as_str().unwrap().parse().unwrap();
    assert!((0.01..=1000.0).contains(&parsed));
}

#[test]
fn test_primitive_unknown_type_yields_nothing() {
    let node = json!({ "type": "null" });
    assert!(synthesize_primitive("null", &FieldContext::default(), &node).is_none());
}
