use super::*;

#[test]
fn base_url_trailing_slash_is_normalized() {
    let api = Api::new("http://127.0.0.1:3000/", None);
    assert_eq!(api.url("api/cases"), "http://127.0.0.1:3000/api/cases");

    let api = Api::new("http://127.0.0.1:3000", None);
    assert_eq!(api.url("/api/cases"), "http://127.0.0.1:3000/api/cases");
}

#[test]
fn error_displays_are_operator_readable() {
    let err = ApiError::Status {
        status: StatusCode::UNAUTHORIZED,
        path: "api/cases".to_owned(),
    };
    assert_eq!(err.to_string(), "backend returned 401 Unauthorized for api/cases");
}

#[test]
fn decode_errors_carry_the_serde_cause() {
    let bad: Result<Vec<records::case::CaseRecord>, serde_json::Error> =
        serde_json::from_str("{not json");
    let err = ApiError::from(bad.unwrap_err());
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(err.to_string().starts_with("invalid JSON payload"));
}
