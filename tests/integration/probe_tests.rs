use crate::{count_requests, create_test_config, unused_local_url};
use seo_lens::audit::{build_http_client, check_statuses, LinkStatus};
use seo_lens::run_audit;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_probe_limit_bounds_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let urls: Vec<String> = (0..25).map(|i| format!("{}/page{}", base_url, i)).collect();
    let client = build_http_client(&create_test_config(10)).unwrap();

    let statuses = check_statuses(&client, &urls, 10, 4).await;

    assert_eq!(statuses.len(), 10);
    assert_eq!(count_requests(&mock_server, "HEAD").await, 10);
    for url in urls.iter().take(10) {
        assert_eq!(statuses.get(url), Some(&LinkStatus::Code(200)));
    }
}

#[tokio::test]
async fn test_three_internal_links_probe_exactly_three() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<a href="/one">1</a><a href="/two">2</a><a href="/three">3</a>"#,
            "text/html",
        ))
        .mount(&mock_server)
        .await;

    for page in ["/one", "/two", "/three"] {
        Mock::given(method("HEAD"))
            .and(path(page))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let report = run_audit(&create_test_config(10), &mock_server.uri())
        .await
        .expect("Audit failed");

    assert_eq!(report.facts.internal_links.len(), 3);
    assert!(report.facts.external_links.is_empty());
    assert_eq!(report.link_statuses.len(), 3);
    assert_eq!(count_requests(&mock_server, "HEAD").await, 3);
}

#[tokio::test]
async fn test_failed_probe_does_not_abort_batch() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("HEAD"))
        .and(path("/fine"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dead = unused_local_url();
    let urls = vec![
        dead.clone(),
        format!("{}/fine", base_url),
        format!("{}/broken", base_url),
    ];
    let client = build_http_client(&create_test_config(10)).unwrap();

    let statuses = check_statuses(&client, &urls, 10, 2).await;

    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses.get(&dead), Some(&LinkStatus::Error));
    assert_eq!(
        statuses.get(&format!("{}/fine", base_url)),
        Some(&LinkStatus::Code(204))
    );
    assert_eq!(
        statuses.get(&format!("{}/broken", base_url)),
        Some(&LinkStatus::Code(500))
    );
}

#[tokio::test]
async fn test_probe_limit_from_config_applies_to_audit() {
    let mock_server = MockServer::start().await;

    let links: String = (0..15).map(|i| format!(r#"<a href="/p{}">p</a>"#, i)).collect();
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(links, "text/html"))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let report = run_audit(&create_test_config(5), &mock_server.uri())
        .await
        .expect("Audit failed");

    assert_eq!(report.facts.internal_links.len(), 15);
    assert_eq!(report.link_statuses.len(), 5);
    assert_eq!(count_requests(&mock_server, "HEAD").await, 5);
}
