//! Field semantics resolution.
//!
//! Maps a schema node's field name, parent context, declared pattern and
//! declared format to a semantic category that drives specialized value
//! synthesis. Field names recur across many schema documents, so name-based
//! inference produces realistic, cross-referentially consistent data without
//! requiring every schema author to annotate `format`.
//!
//! Rules are ordered, first match wins: literal pattern values, then field
//! names, then the declared format catalogue.

use crate::domain::FieldContext;

/// Domain-specific classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticCategory {
    Uuid,
    Currency,
    Amount,
    DigitsPhone,
    PartyIdentifier,
    FspId,
    GeoLatitude,
    GeoLongitude,
    PersonName,
    ComplexName,
    StatusEnum,
    PartyIdType,
    TransferState,
    TransactionScenario,
    TransactionInitiator,
    TransactionInitiatorType,
    SubScenario,
    Date,
    DateTime,
    Email,
    Uri,
    Byte,
    ContentLength,
}

/// Literal pattern values recognized without executing them as regexes.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const FSP_ID_PATTERN: &str = "^[A-Z0-9]{1,32}$";
const DIGITS_PATTERN: &str = r"^\d{10,15}$";

/// Classify one schema node. Pure; `None` means the caller falls back to
/// generic type-based synthesis.
pub fn classify(
    ctx: &FieldContext,
    pattern: Option<&str>,
    format: Option<&str>,
) -> Option<SemanticCategory> {
    if let Some(category) = classify_pattern(pattern) {
        return Some(category);
    }
    if let Some(category) = classify_field_name(ctx) {
        return Some(category);
    }
    classify_format(format)
}

fn classify_pattern(pattern: Option<&str>) -> Option<SemanticCategory> {
    match pattern? {
        "Created|Closed" => Some(SemanticCategory::StatusEnum),
        "PERSONAL_ID|BUSINESS_ID" => Some(SemanticCategory::PartyIdType),
        "123" => Some(SemanticCategory::ContentLength),
        p if p == EMAIL_PATTERN => Some(SemanticCategory::Email),
        p if p == FSP_ID_PATTERN => Some(SemanticCategory::FspId),
        p if p == DIGITS_PATTERN => Some(SemanticCategory::DigitsPhone),
        _ => None,
    }
}

/// Case-insensitive equals-or-ends-with match against known tokens.
fn matches_field(key: &str, names: &[&str]) -> bool {
    names.iter().any(|name| {
        let name = name.to_lowercase();
        key == name || key.ends_with(&name)
    })
}

fn classify_field_name(ctx: &FieldContext) -> Option<SemanticCategory> {
    let key = ctx.key?.to_lowercase();
    let parent = ctx.parent_key.map(str::to_lowercase);
    let parent = parent.as_deref();

    if key == "content-length" || key == "contentlength" {
        return Some(SemanticCategory::ContentLength);
    }
    // transferState must win over the bare `state` token below.
    if matches_field(&key, &["transferState"]) {
        return Some(SemanticCategory::TransferState);
    }
    if key == "state" || key == "reason" || key == "status" {
        return Some(SemanticCategory::StatusEnum);
    }
    if matches_field(&key, &["partyIdType", "idType"]) {
        return Some(SemanticCategory::PartyIdType);
    }
    if matches_field(&key, &["fspId"]) {
        return Some(SemanticCategory::FspId);
    }
    if matches_field(&key, &["currency"]) || (parent == Some("amount") && key == "currency") {
        return Some(SemanticCategory::Currency);
    }
    if key == "amount" {
        return Some(SemanticCategory::Amount);
    }
    if matches_field(&key, &["partyIdentifier"]) {
        return Some(SemanticCategory::PartyIdentifier);
    }
    if key == "latitude" {
        return Some(SemanticCategory::GeoLatitude);
    }
    if key == "longitude" {
        return Some(SemanticCategory::GeoLongitude);
    }
    if matches!(
        key.as_str(),
        "bulkquoteid" | "bulktransferid" | "quoteid" | "transferid" | "id"
    ) {
        return Some(SemanticCategory::Uuid);
    }
    // subScenario before scenario: the latter would match it as a suffix.
    if matches_field(&key, &["subScenario"]) {
        return Some(SemanticCategory::SubScenario);
    }
    if key == "scenario" || (parent == Some("transactiontype") && key == "scenario") {
        return Some(SemanticCategory::TransactionScenario);
    }
    if key == "initiator" || (parent == Some("transactiontype") && key == "initiator") {
        return Some(SemanticCategory::TransactionInitiator);
    }
    if key == "initiatortype" || (parent == Some("transactiontype") && key == "initiatortype") {
        return Some(SemanticCategory::TransactionInitiatorType);
    }
    if matches_field(&key, &["complexName"]) {
        return Some(SemanticCategory::ComplexName);
    }
    if matches_field(&key, &["email", "emailAddress"]) {
        return Some(SemanticCategory::Email);
    }
    if matches_field(&key, &["expiration", "dateTime", "timestamp"]) {
        return Some(SemanticCategory::DateTime);
    }
    if key == "date" || matches_field(&key, &["dateOfBirth"]) {
        return Some(SemanticCategory::Date);
    }
    if key == "name" || key.ends_with("name") {
        return Some(SemanticCategory::PersonName);
    }
    None
}

fn classify_format(format: Option<&str>) -> Option<SemanticCategory> {
    match format? {
        "byte" => Some(SemanticCategory::Byte),
        "date" => Some(SemanticCategory::Date),
        "date-time" => Some(SemanticCategory::DateTime),
        "email" => Some(SemanticCategory::Email),
        "uri" => Some(SemanticCategory::Uri),
        "uuid" => Some(SemanticCategory::Uuid),
        "phone" => Some(SemanticCategory::DigitsPhone),
        "geo-latitude" => Some(SemanticCategory::GeoLatitude),
        "geo-longitude" => Some(SemanticCategory::GeoLongitude),
        "fsp-id" => Some(SemanticCategory::FspId),
        "currency" => Some(SemanticCategory::Currency),
        "sub-scenario" => Some(SemanticCategory::SubScenario),
        "name" => Some(SemanticCategory::PersonName),
        "complex-name" => Some(SemanticCategory::ComplexName),
        "party-identifier" => Some(SemanticCategory::PartyIdentifier),
        "party-id-type" => Some(SemanticCategory::PartyIdType),
        "amount" => Some(SemanticCategory::Amount),
        "transaction-scenario" => Some(SemanticCategory::TransactionScenario),
        "transaction-initiator" => Some(SemanticCategory::TransactionInitiator),
        "transaction-initiator-type" => Some(SemanticCategory::TransactionInitiatorType),
        "transaction-state" => Some(SemanticCategory::StatusEnum),
        "transfer-state" => Some(SemanticCategory::TransferState),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(key: &'a str) -> FieldContext<'a> {
        FieldContext {
            key: Some(key),
            parent_key: None,
        }
    }

    #[test]
    fn test_pattern_rules_win_first() {
        let c = ctx("note");
        assert_eq!(
            classify(&c, Some("Created|Closed"), None),
            Some(SemanticCategory::StatusEnum)
        );
        assert_eq!(
            classify(&c, Some("123"), None),
            Some(SemanticCategory::ContentLength)
        );
        assert_eq!(
            classify(&c, Some("^[A-Z0-9]{1,32}$"), None),
            Some(SemanticCategory::FspId)
        );
        assert_eq!(
            classify(&c, Some(r"^\d{10,15}$"), None),
            Some(SemanticCategory::DigitsPhone)
        );
    }

    #[test]
    fn test_field_name_rules() {
        assert_eq!(
            classify(&ctx("transferState"), None, None),
            Some(SemanticCategory::TransferState)
        );
        assert_eq!(
            classify(&ctx("state"), None, None),
            Some(SemanticCategory::StatusEnum)
        );
        assert_eq!(
            classify(&ctx("fspId"), None, None),
            Some(SemanticCategory::FspId)
        );
        assert_eq!(
            classify(&ctx("partyIdType"), None, None),
            Some(SemanticCategory::PartyIdType)
        );
        assert_eq!(
            classify(&ctx("transferId"), None, None),
            Some(SemanticCategory::Uuid)
        );
        assert_eq!(classify(&ctx("id"), None, None), Some(SemanticCategory::Uuid));
        assert_eq!(
            classify(&ctx("latitude"), None, None),
            Some(SemanticCategory::GeoLatitude)
        );
        assert_eq!(
            classify(&ctx("subScenario"), None, None),
            Some(SemanticCategory::SubScenario)
        );
        assert_eq!(
            classify(&ctx("scenario"), None, None),
            Some(SemanticCategory::TransactionScenario)
        );
    }

    #[test]
    fn test_currency_scoped_to_amount_parent() {
        let c = FieldContext {
            key: Some("currency"),
            parent_key: Some("amount"),
        };
        assert_eq!(classify(&c, None, None), Some(SemanticCategory::Currency));
    }

    #[test]
    fn test_trailing_name_matches() {
        assert_eq!(
            classify(&ctx("customerName"), None, None),
            Some(SemanticCategory::PersonName)
        );
        assert_eq!(
            classify(&ctx("name"), None, None),
            Some(SemanticCategory::PersonName)
        );
    }

    #[test]
    fn test_format_catalogue_fallback() {
        assert_eq!(
            classify(&ctx("somefield"), None, Some("currency")),
            Some(SemanticCategory::Currency)
        );
        assert_eq!(
            classify(&ctx("somefield"), None, Some("transfer-state")),
            Some(SemanticCategory::TransferState)
        );
        assert_eq!(
            classify(&ctx("somefield"), None, Some("uuid")),
            Some(SemanticCategory::Uuid)
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(classify(&ctx("somefield"), None, None), None);
        assert_eq!(classify(&FieldContext::default(), None, None), None);
    }

    #[test]
    fn test_field_name_beats_format() {
        // Rule order: field names are consulted before the format catalogue.
        assert_eq!(
            classify(&ctx("currency"), None, Some("uuid")),
            Some(SemanticCategory::Currency)
        );
    }
}
