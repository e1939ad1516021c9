//! Concrete value synthesis per semantic category or primitive type.
//!
//! Randomness comes from the thread-local PRNG; determinism is not a
//! contract. Only the externally observable syntax of each category is.

use crate::domain::semantics::SemanticCategory;
use crate::domain::FieldContext;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{Duration, SecondsFormat, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;
use serde_json::{json, Value};

pub const CURRENCY_CODES: [&str; 10] = [
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "INR", "BRL",
];
pub const STATUS_VALUES: [&str; 2] = ["Created", "Closed"];
pub const PARTY_ID_TYPES: [&str; 2] = ["PERSONAL_ID", "BUSINESS_ID"];
pub const TRANSFER_STATES: [&str; 4] = ["RECEIVED", "RESERVED", "COMMITTED", "ABORTED"];
pub const TRANSACTION_SCENARIOS: [&str; 5] =
    ["DEPOSIT", "WITHDRAWAL", "TRANSFER", "PAYMENT", "REFUND"];
pub const TRANSACTION_INITIATORS: [&str; 2] = ["PAYER", "PAYEE"];
pub const TRANSACTION_INITIATOR_TYPES: [&str; 4] = ["CONSUMER", "AGENT", "BUSINESS", "DEVICE"];

const FSP_ID_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUB_SCENARIO_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ_";

/// Produce one concrete value for a semantic category.
pub fn synthesize(category: SemanticCategory) -> Value {
    let mut rng = rand::thread_rng();
    match category {
        SemanticCategory::Uuid => json!(uuid::Uuid::new_v4().to_string()),
        SemanticCategory::Currency => json!(pick(&CURRENCY_CODES)),
        SemanticCategory::Amount => json!(amount_string()),
        SemanticCategory::DigitsPhone | SemanticCategory::PartyIdentifier => {
            let len = rng.gen_range(10..=15);
            json!(digit_string(len))
        }
        SemanticCategory::FspId => json!(fsp_id()),
        SemanticCategory::GeoLatitude => json!(geo_coordinate(90.0)),
        SemanticCategory::GeoLongitude => json!(geo_coordinate(180.0)),
        SemanticCategory::PersonName => json!(person_name()),
        SemanticCategory::ComplexName => {
            let mut name = serde_json::Map::new();
            name.insert("firstName".to_string(), json!(capitalized_word(FirstName().fake())));
            if rng.gen_bool(0.3) {
                name.insert("middleName".to_string(), json!(capitalized_word(FirstName().fake())));
            }
            name.insert("lastName".to_string(), json!(capitalized_word(LastName().fake())));
            Value::Object(name)
        }
        SemanticCategory::StatusEnum => json!(pick(&STATUS_VALUES)),
        SemanticCategory::PartyIdType => json!(pick(&PARTY_ID_TYPES)),
        SemanticCategory::TransferState => json!(pick(&TRANSFER_STATES)),
        SemanticCategory::TransactionScenario => json!(pick(&TRANSACTION_SCENARIOS)),
        SemanticCategory::TransactionInitiator => json!(pick(&TRANSACTION_INITIATORS)),
        SemanticCategory::TransactionInitiatorType => json!(pick(&TRANSACTION_INITIATOR_TYPES)),
        SemanticCategory::SubScenario => {
            let len = rng.gen_range(1..=32);
            json!(char_string(SUB_SCENARIO_CHARS, len))
        }
        SemanticCategory::Date => {
            let instant = Utc::now() - Duration::days(rng.gen_range(0..365));
            json!(instant.format("%Y-%m-%d").to_string())
        }
        SemanticCategory::DateTime => {
            let instant = Utc::now() - Duration::seconds(rng.gen_range(0..86_400));
            json!(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        SemanticCategory::Email => json!(SafeEmail().fake::<String>()),
        SemanticCategory::Uri => {
            let host: String = Word().fake();
            let segment: String = Word().fake();
            json!(format!("https://{}.example.com/{}", host, segment))
        }
        SemanticCategory::Byte => {
            let sentence: String = Sentence(3..12).fake();
            json!(BASE64.encode(sentence.as_bytes()))
        }
        SemanticCategory::ContentLength => json!("123"),
    }
}

/// Generic fallback for a declared primitive type with no semantic match.
/// Numeric fields whose name ends in `amount` follow the Amount rule.
pub fn synthesize_primitive(type_name: &str, ctx: &FieldContext, node: &Value) -> Option<Value> {
    let mut rng = rand::thread_rng();
    match type_name {
        "string" => Some(json!(Sentence(1..10).fake::<String>())),
        "number" => {
            if field_is_amount(ctx) {
                return Some(json!(amount_string()));
            }
            let min = node.get("minimum").and_then(Value::as_f64).unwrap_or(1.0);
            let max = node.get("maximum").and_then(Value::as_f64).unwrap_or(1000.0).max(min);
            let value = rng.gen_range(min..=max);
            Some(json!((value * 100.0).round() / 100.0))
        }
        "integer" => {
            let min = node.get("minimum").and_then(Value::as_i64).unwrap_or(1);
            let max = node.get("maximum").and_then(Value::as_i64).unwrap_or(1000).max(min);
            Some(json!(rng.gen_range(min..=max)))
        }
        "boolean" => Some(json!(rng.gen_bool(0.5))),
        _ => None,
    }
}

fn field_is_amount(ctx: &FieldContext) -> bool {
    ctx.key
        .map(|k| k.to_lowercase().ends_with("amount"))
        .unwrap_or(false)
}

fn pick<'a>(set: &[&'a str]) -> &'a str {
    let mut rng = rand::thread_rng();
    set[rng.gen_range(0..set.len())]
}

/// Fixed-point decimal string with two fractional digits in [0.01, 1000].
fn amount_string() -> String {
    let mut rng = rand::thread_rng();
    let cents: u32 = rng.gen_range(1..=100_000);
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn digit_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn char_string(alphabet: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

/// Uppercase-alphanumeric identifier of length 1-32.
fn fsp_id() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(1..=32);
    char_string(FSP_ID_CHARS, len)
}

/// Decimal-string coordinate with exactly 4 fractional digits and an
/// explicit leading `+` for non-negative values.
fn geo_coordinate(bound: f64) -> String {
    let mut rng = rand::thread_rng();
    let value: f64 = rng.gen_range(-bound..=bound);
    format!("{:+.4}", value)
}

fn person_name() -> String {
    format!(
        "{} {}",
        capitalized_word(FirstName().fake()),
        capitalized_word(LastName().fake())
    )
}

/// Normalize a faker word into `[A-Z][a-z]+` shape.
fn capitalized_word(word: String) -> String {
    let letters: String = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let letters = if letters.len() < 2 {
        "Doe".to_string()
    } else {
        letters
    };
    let mut chars = letters.chars();
    let first = chars.next().unwrap().to_ascii_uppercase();
    let rest: String = chars.map(|c| c.to_ascii_lowercase()).collect();
    format!("{}{}", first, rest)
}
