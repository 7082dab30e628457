use crate::{create_test_config, unused_local_url};
use seo_lens::audit::{build_http_client, fetch_page};
use seo_lens::robots::read_robots;
use seo_lens::{Origin, RobotsTxt};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>Hi</title>")
                .insert_header("x-served-by", "mock"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config(10)).unwrap();
    let result = fetch_page(&client, &mock_server.uri()).await.unwrap();

    assert!(result.is_success());
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.body.as_deref(), Some("<title>Hi</title>"));
    assert_eq!(result.header("X-Served-By"), Some("mock"));
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn test_fetch_keeps_body_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config(10)).unwrap();
    let result = fetch_page(&client, &mock_server.uri()).await.unwrap();

    assert!(result.is_http_error());
    assert_eq!(result.status_code, Some(503));
    assert_eq!(result.body.as_deref(), Some("maintenance"));
}

#[tokio::test]
async fn test_fetch_refused_connection() {
    let client = build_http_client(&create_test_config(10)).unwrap();
    let result = fetch_page(&client, &unused_local_url()).await.unwrap();

    assert_eq!(result.body, None);
    assert_eq!(result.status_code, None);
    assert!(result.error.is_some());
}

#[tokio::test]
async fn test_fetch_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(10);
    config.audit.timeout_seconds = 1;
    let client = build_http_client(&config).unwrap();

    let result = fetch_page(&client, &format!("{}/slow", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(result.body, None);
    assert_eq!(result.error.as_deref(), Some("Request timeout"));
}

#[tokio::test]
async fn test_read_robots_present() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nAllow: /"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config(10)).unwrap();
    let page = Url::parse(&format!("{}/deep/page?x=1", mock_server.uri())).unwrap();
    let origin = Origin::of(&page).unwrap();

    let robots = read_robots(&client, &origin).await;
    assert_eq!(robots, RobotsTxt::Present("User-agent: *\nAllow: /".to_string()));
}

#[tokio::test]
async fn test_read_robots_non_200_is_absent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config(10)).unwrap();
    let origin = Origin::of(&Url::parse(&mock_server.uri()).unwrap()).unwrap();

    assert_eq!(read_robots(&client, &origin).await, RobotsTxt::Absent);
}

#[tokio::test]
async fn test_read_robots_network_error_is_absent() {
    let client = build_http_client(&create_test_config(10)).unwrap();
    let origin = Origin::of(&Url::parse(&unused_local_url()).unwrap()).unwrap();

    assert_eq!(read_robots(&client, &origin).await, RobotsTxt::Absent);
}
