use serde_json::json;
use time::macros::date;

use super::*;

// =============================================================
// Cnr
// =============================================================

#[test]
fn parses_and_normalizes() {
    let cnr = Cnr::parse("dlhc010012342026").unwrap();
    assert_eq!(cnr.as_str(), "DLHC010012342026");
    assert_eq!(cnr.to_string(), "DLHC010012342026");
}

#[test]
fn trims_surrounding_whitespace() {
    let cnr = Cnr::parse("  DLHC010012342026 ").unwrap();
    assert_eq!(cnr.as_str(), "DLHC010012342026");
}

#[test]
fn rejects_wrong_length() {
    assert_eq!(Cnr::parse("DLHC01001234"), Err(CnrError::Length(12)));
    assert_eq!(Cnr::parse(""), Err(CnrError::Length(0)));
    assert_eq!(
        Cnr::parse("DLHC0100123420261"),
        Err(CnrError::Length(17))
    );
}

#[test]
fn rejects_non_alphanumerics() {
    assert_eq!(
        Cnr::parse("DLHC-10012342026"),
        Err(CnrError::Charset('-'))
    );
    assert_eq!(
        Cnr::parse("DLHC0100123420 6"),
        Err(CnrError::Charset(' '))
    );
}

#[test]
fn serde_round_trip_validates() {
    let cnr: Cnr = serde_json::from_value(json!("dlhc010012342026")).unwrap();
    assert_eq!(serde_json::to_value(&cnr).unwrap(), json!("DLHC010012342026"));

    let bad: Result<Cnr, _> = serde_json::from_value(json!("nope"));
    assert!(bad.is_err());
}

// =============================================================
// CourtRecord
// =============================================================

#[test]
fn provider_fields_default_at_the_boundary() {
    let record: CourtRecord =
        serde_json::from_value(json!({ "cnr": "DLHC010012342026" })).unwrap();
    let fields = record.fields();
    assert_eq!(fields.status(), "");
    assert_eq!(fields.court_name(), "");
    assert_eq!(fields.next_listing_on(), None);
}

#[test]
fn provider_fields_are_read_through() {
    let record: CourtRecord = serde_json::from_value(json!({
        "cnr": "DLHC010012342026",
        "case_status": "Pending",
        "court_name": "High Court of Delhi",
        "petitioner": "R. Mehta",
        "respondent": "State",
        "next_listing_on": "2026-09-01",
    }))
    .unwrap();
    let fields = record.fields();
    assert_eq!(fields.status(), "Pending");
    assert_eq!(fields.court_name(), "High Court of Delhi");
    assert_eq!(fields.petitioner(), "R. Mehta");
    assert_eq!(fields.next_listing_on(), Some(date!(2026 - 09 - 01)));
}

#[test]
fn garbage_listing_dates_degrade_to_none() {
    let record: CourtRecord = serde_json::from_value(json!({
        "cnr": "DLHC010012342026",
        "next_listing_on": "soon",
    }))
    .unwrap();
    assert_eq!(record.fields().next_listing_on(), None);
}
