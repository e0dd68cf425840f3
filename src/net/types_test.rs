use super::*;

#[test]
fn profile_deserializes_backend_field_names() {
    let raw = r#"{"Name":"Test User","Email":"testuser@company.net","AccountName":"corp\\tester"}"#;
    let profile: Profile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.name, "Test User");
    assert_eq!(profile.email, "testuser@company.net");
    assert_eq!(profile.account_name, "corp\\tester");
}

#[test]
fn profile_tolerates_missing_optional_fields() {
    let profile: Profile = serde_json::from_str(r#"{"Name":"Only Name"}"#).unwrap();
    assert_eq!(profile.name, "Only Name");
    assert!(profile.email.is_empty());
    assert!(profile.account_name.is_empty());
}

#[test]
fn organization_ignores_extra_fields() {
    let raw = r#"{"guid":"g-1","url":"https://org.example/123","name":"ignition-tester","quota_definition_guid":"q"}"#;
    let org: OrganizationReference = serde_json::from_str(raw).unwrap();
    assert_eq!(org.url.as_deref(), Some("https://org.example/123"));
}

#[test]
fn organization_null_url_is_absent() {
    let org: OrganizationReference = serde_json::from_str(r#"{"url":null,"name":"pending"}"#).unwrap();
    assert_eq!(org.url, None);
}

#[test]
fn profile_without_name_has_empty_name() {
    let profile: Profile = serde_json::from_str(r#"{"Email":"testuser@company.net"}"#).unwrap();
    assert!(profile.name.is_empty());
    assert_eq!(profile.email, "testuser@company.net");
}

#[test]
fn http_response_ok_covers_2xx_only() {
    assert!(HttpResponse::new(200, "").ok());
    assert!(HttpResponse::new(204, "").ok());
    assert!(!HttpResponse::new(301, "").ok());
    assert!(!HttpResponse::new(401, "").ok());
    assert!(!HttpResponse::new(500, "").ok());
}
