use crate::{
    AlertKind, PathSelection, PathType, SafetyAlert, SafetyStatus, Session, TouristStatus, User,
};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn test_path_type_from_str() {
    assert_eq!(PathType::from_str("normal").unwrap(), PathType::Normal);
    assert_eq!(PathType::from_str("anomaly").unwrap(), PathType::Anomaly);
    assert!(PathType::from_str("Normal").is_err());
}

#[test]
fn test_safety_status_round_trips_through_str() {
    for status in [SafetyStatus::Normal, SafetyStatus::Anomaly, SafetyStatus::Sos] {
        assert_eq!(SafetyStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(SafetyStatus::from_str("panic").is_err());
}

#[test]
fn test_path_selection_parse() {
    let selection: PathSelection = "T-17|anomaly".parse().unwrap();
    assert_eq!(selection, PathSelection::new("T-17", PathType::Anomaly));
    assert_eq!(selection.to_string(), "T-17|anomaly");
}

#[test]
fn test_path_selection_rejects_malformed_input() {
    assert!(PathSelection::from_str("T-17").is_err());
    assert!(PathSelection::from_str("|normal").is_err());
    assert!(PathSelection::from_str("T-17|sideways").is_err());
}

#[test]
fn test_alert_deserializes_known_and_unknown_types() {
    let json = r#"[
        {"message": "m", "timestamp": "t", "type": "sos", "tourist_id": "A", "username": "u"},
        {"message": "m", "timestamp": "t", "type": "speeding", "tourist_id": "B"}
    ]"#;

    let alerts: Vec<SafetyAlert> = serde_json::from_str(json).unwrap();

    assert_that!(alerts.len(), eq(2));
    assert!(alerts[0].is_sos());
    assert_that!(alerts[1].kind, eq(&AlertKind::Other("speeding".to_string())));
    assert!(!alerts[1].is_anomaly() && !alerts[1].is_sos());
    assert_that!(alerts[1].username.as_str(), eq(""));
}

#[test]
fn test_tourist_status_parses_live_status_map_entry() {
    let json = r#"{"lat": 27.1, "lon": 88.2, "status": "anomaly", "timestamp": "now", "username": "asha"}"#;

    let status: TouristStatus = serde_json::from_str(json).unwrap();

    assert_that!(status.status, eq(SafetyStatus::Anomaly));
    assert_that!(status.position().lat, eq(27.1));
}

#[test]
fn test_user_serializes_camel_case_and_skips_absent_fields() {
    let user = User {
        id: "1700000000000".into(),
        username: "asha".into(),
        email: String::new(),
        phone: "9999".into(),
        date_of_birth: Some("2000-01-01".into()),
        aadhaar_number: None,
        path_type: Some(PathType::Normal),
    };

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["dateOfBirth"], "2000-01-01");
    assert_eq!(json["pathType"], "normal");
    assert!(json.get("aadhaarNumber").is_none());
    assert_eq!(json["email"], "");
}

#[test]
fn test_user_matches_by_username_or_phone() {
    let user: User =
        serde_json::from_str(r#"{"id": "1", "username": "asha", "phone": "555"}"#).unwrap();

    assert!(user.matches(Some("asha"), None));
    assert!(user.matches(None, Some("555")));
    assert!(user.matches(Some("ravi"), Some("555")));
    assert!(!user.matches(Some(""), Some("")));
    assert!(!user.matches(None, None));
}

#[test]
fn test_session_reads_path_type_key() {
    let session: Session =
        serde_json::from_str(r#"{"id": "9", "username": "asha", "pathType": "anomaly"}"#).unwrap();
    assert_eq!(session.path_type, Some(PathType::Anomaly));

    let bare: Session = serde_json::from_str(r#"{"id": "9", "username": "asha"}"#).unwrap();
    assert_eq!(bare.path_type, None);
}
