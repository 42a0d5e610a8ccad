mod common;

use axum_test::TestServer;
use vimeo_thumbnail::routes::router;

use common::{StubMetadataClient, create_test_state};

#[tokio::test]
async fn test_unknown_path_renders_usage() {
    let client = StubMetadataClient::with_body("[]");
    let (state, _cache) = create_test_state(client.clone());
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("/v/&lt;video id&gt;"));
    assert!(body.contains("sfb"));

    let response = server.get("/anything/else").await;
    response.assert_status_ok();
    assert!(response.text().contains("Vimeo thumbnail redirect"));

    assert_eq!(client.calls(), 0);
}
