use super::*;
use crate::net::types::{OrganizationReference, Profile};

#[test]
fn non_2xx_is_failure_regardless_of_body() {
    let resp = HttpResponse::new(401, r#"{"Name":"ignored"}"#);
    assert_eq!(classify::<Profile>(&resp), Ok(Outcome::Failure(401)));
    let resp = HttpResponse::new(500, "Internal Server Error\n");
    assert_eq!(classify::<Profile>(&resp), Ok(Outcome::Failure(500)));
}

#[test]
fn empty_and_falsy_bodies_are_empty() {
    for body in ["", "  \n", "null", "false", "0", "\"\""] {
        let resp = HttpResponse::new(200, body);
        assert_eq!(classify::<OrganizationReference>(&resp), Ok(Outcome::Empty), "body {body:?}");
    }
}

#[test]
fn object_body_decodes() {
    let resp = HttpResponse::new(200, r#"{"url":"https://org.example/123"}"#);
    assert_eq!(
        classify::<OrganizationReference>(&resp),
        Ok(Outcome::Body(OrganizationReference { url: Some("https://org.example/123".to_owned()) }))
    );
}

#[test]
fn malformed_json_is_a_decode_error() {
    let resp = HttpResponse::new(200, "<html>login</html>");
    assert!(matches!(classify::<Profile>(&resp), Err(FetchError::Decode(_))));
}

#[test]
fn wrong_shape_is_a_decode_error() {
    let resp = HttpResponse::new(200, r#"["not","a","profile"]"#);
    assert!(matches!(classify::<Profile>(&resp), Err(FetchError::Decode(_))));
}
