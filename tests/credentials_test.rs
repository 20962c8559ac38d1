use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;
use spotcat::{
    CatalogError,
    spotify::{Credentials, encode_credentials, headers},
};

fn decode(encoded: &str) -> String {
    String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
}

#[test]
fn test_encode_credentials_matches_known_value() {
    let encoded = encode_credentials(Some("id1"), Some("secret1")).unwrap();
    assert_eq!(encoded, "aWQxOnNlY3JldDE=");
}

#[test]
fn test_encode_credentials_decodes_back_to_pair() {
    let pairs = [
        ("id1", "secret1"),
        ("client", "s3cr3t:with:colons"),
        ("ünïcode", "päss wörd"),
        ("a", "b"),
    ];

    for (id, secret) in pairs {
        let encoded = encode_credentials(Some(id), Some(secret)).unwrap();
        assert_eq!(decode(&encoded), format!("{id}:{secret}"));
    }
}

#[test]
fn test_encode_credentials_output_is_printable() {
    let encoded = encode_credentials(Some("client"), Some("s3cr3t:with:colons")).unwrap();
    assert_eq!(encoded, "Y2xpZW50OnMzY3IzdDp3aXRoOmNvbG9ucw==");
    assert!(encoded.chars().all(|c| c.is_ascii_graphic()));
}

#[test]
fn test_missing_client_id_is_configuration_error() {
    let err = encode_credentials(None, Some("secret")).unwrap_err();
    assert!(matches!(err, CatalogError::Configuration(_)));
}

#[test]
fn test_missing_client_secret_is_configuration_error() {
    let err = encode_credentials(Some("id"), None).unwrap_err();
    assert!(matches!(err, CatalogError::Configuration(_)));
}

#[test]
fn test_empty_credentials_are_configuration_errors() {
    assert!(matches!(
        Credentials::new(Some(String::new()), Some("secret".into())),
        Err(CatalogError::Configuration(_))
    ));
    assert!(matches!(
        Credentials::new(Some("id".into()), Some(String::new())),
        Err(CatalogError::Configuration(_))
    ));
}

#[test]
fn test_basic_auth_header() {
    let credentials = Credentials::new(Some("id1".into()), Some("secret1".into())).unwrap();
    let headers = headers::basic_auth_headers(&credentials).unwrap();

    assert_eq!(headers.len(), 1);
    assert_eq!(
        headers.get(AUTHORIZATION).unwrap(),
        "Basic aWQxOnNlY3JldDE="
    );
}
