use serde_json::json;
use spotcat::{
    CatalogError,
    config::ClientConfig,
    spotify::{Credentials, Query, SpotifyClient},
    types::ResourceKind,
};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SpotifyClient {
    let credentials = Credentials::new(Some("id1".into()), Some("secret1".into())).unwrap();
    let config = ClientConfig::new(credentials)
        .with_api_url(server.uri())
        .with_token_url(format!("{}/api/token", server.uri()));
    SpotifyClient::from_config(config).expect("client should build")
}

async fn mount_token(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", "Basic aWQxOnNlY3JldDE="))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn lookup_fetches_resource_with_bearer_token() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/4aawyAB9vmqN3uQ7FjRGTy"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "4aawyAB9vmqN3uQ7FjRGTy",
            "name": "Discovery",
            "album_type": "album"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let album = client
        .get_album("4aawyAB9vmqN3uQ7FjRGTy")
        .await
        .expect("lookup should succeed");

    assert_eq!(album["name"], "Discovery");
}

#[tokio::test]
async fn lookup_uses_kind_and_version_in_path() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v2/artists/xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "xyz"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let artist = client
        .lookup("xyz", ResourceKind::Artists, "v2")
        .await
        .unwrap();

    assert_eq!(artist["id"], "xyz");
}

#[tokio::test]
async fn lookup_not_found_returns_empty_mapping() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/artists/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"status": 404, "message": "non existing id"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let artist = client.get_artist("missing").await.unwrap();
    assert!(artist.is_empty());
}

#[tokio::test]
async fn lookup_server_error_returns_empty_mapping() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/tracks/boom"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let track = client.get_track("boom").await.unwrap();
    assert!(track.is_empty());
}

#[tokio::test]
async fn empty_success_body_is_an_empty_mapping() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/nothing"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.get_album("nothing").await.unwrap().is_empty());
}

#[tokio::test]
async fn token_is_reused_across_calls() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "a"})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get_album("a").await.unwrap();
    client.get_album("a").await.unwrap();
}

#[tokio::test]
async fn lookup_propagates_authentication_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": "invalid_client"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .get_album("a")
        .await
        .expect_err("bad credentials must surface as an error");

    assert!(matches!(
        err,
        CatalogError::Authentication {
            status: Some(403),
            ..
        }
    ));
}

#[tokio::test]
async fn search_sends_compiled_field_query() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "artist:Daft Punk"))
        .and(query_param("type", "artist"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": {
                "items": [{"id": "4tZwfgrHOc3mvqYlEYSvVi", "name": "Daft Punk", "genres": ["french house"]}],
                "total": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = Query::fields([("artist", "Daft Punk")]);
    let results = client.search(Some(&query), None, None, "artist").await.unwrap();

    assert_eq!(results["artists"]["items"][0]["name"], "Daft Punk");
}

#[tokio::test]
async fn search_applies_operator_clause() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "a OR b"))
        .and(query_param("type", "track"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tracks": {"items": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = Query::text("a");
    let clause = json!("b");
    client
        .search(Some(&query), Some("OR"), Some(&clause), "Track")
        .await
        .unwrap();
}

#[tokio::test]
async fn search_failure_status_returns_empty_mapping() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = client
        .search(Some(&Query::text("anything")), None, None, "artist")
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn search_without_query_fails_before_any_request() {
    let server = MockServer::start().await;
    mount_token(&server, 0).await;

    let client = client_for(&server);
    let err = client.search(None, None, None, "artist").await.unwrap_err();

    assert!(matches!(err, CatalogError::InvalidQuery(_)));
}
