use crate::{create_test_config, unused_local_url};
use seo_lens::audit::LinkStatus;
use seo_lens::recommend::RecommendationKind;
use seo_lens::{run_audit, AuditError, Auditor, RobotsTxt, UrlError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html")
}

#[tokio::test]
async fn test_full_audit() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dead_external = unused_local_url();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /private\nSitemap: https://example.com/sitemap.xml\n",
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(format!(
            r#"<html><head>
                <title>Home</title>
                <meta name="description" content="Welcome home">
                <link rel="canonical" href="{base}/">
                <link rel="alternate" hreflang="fr" href="{base}/fr/">
                <script type="application/ld+json">{{"@type": "WebSite"}}</script>
            </head><body>
                <img src="a.png">
                <img src="b.png" alt="B">
                <a href="/ok">OK</a>
                <a href="/gone">Gone</a>
                <a href="{dead}">Dead</a>
            </body></html>"#,
            base = base_url,
            dead = dead_external
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("HEAD"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = run_audit(&create_test_config(10), &format!("{}/", base_url))
        .await
        .expect("Audit failed");

    assert_eq!(report.status_code, Some(200));
    assert_eq!(report.facts.title.as_deref(), Some("Home"));
    assert_eq!(report.facts.description.as_deref(), Some("Welcome home"));
    assert_eq!(
        report.facts.canonical,
        Some(format!("{}/", base_url))
    );
    assert_eq!(report.facts.hreflangs.len(), 1);
    assert_eq!(report.facts.hreflangs[0].locale, "fr");
    assert_eq!(report.facts.structured_data, vec![r#"{"@type": "WebSite"}"#]);
    assert_eq!(report.facts.images.len(), 2);
    assert_eq!(report.facts.internal_links.len(), 2);
    assert_eq!(report.facts.external_links, vec![dead_external.clone()]);
    assert!(report
        .headers
        .get("content-type")
        .is_some_and(|ct| ct.starts_with("text/html")));

    // One failed probe does not affect the others
    assert_eq!(report.link_statuses.len(), 3);
    assert_eq!(
        report.link_statuses.get(&format!("{}/ok", base_url)),
        Some(&LinkStatus::Code(200))
    );
    assert_eq!(
        report.link_statuses.get(&format!("{}/gone", base_url)),
        Some(&LinkStatus::Code(404))
    );
    assert_eq!(
        report.link_statuses.get(&dead_external),
        Some(&LinkStatus::Error)
    );
    assert_eq!(report.broken_links().count(), 2);

    assert!(report.robots.is_present());
    assert!(report.robots_allowed);
    assert_eq!(report.sitemaps, vec!["https://example.com/sitemap.xml"]);

    assert_eq!(report.recommendations.len(), 1);
    assert_eq!(
        report.recommendations[0].kind,
        RecommendationKind::MissingImageAlt
    );
    assert!(report.recommendations[0].message.contains("a.png"));

    assert_eq!(report.tools.len(), 4);
}

#[tokio::test]
async fn test_long_title_without_description() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(
            "<html><head><title>A very long title exceeding sixty characters in total length here</title></head>\
             <body><a href=\"/x\">x</a></body></html>"
                .to_string(),
        ))
        .mount(&mock_server)
        .await;

    let report = run_audit(&create_test_config(0), &mock_server.uri())
        .await
        .expect("Audit failed");

    let kinds: Vec<RecommendationKind> = report.recommendations.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecommendationKind::TitleTooLong,
            RecommendationKind::MissingDescription
        ]
    );
    // probe limit 0 probes nothing
    assert!(report.link_statuses.is_empty());
}

#[tokio::test]
async fn test_robots_absent_on_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response("<title>t</title>".to_string()))
        .mount(&mock_server)
        .await;

    let report = run_audit(&create_test_config(10), &mock_server.uri())
        .await
        .expect("Audit failed");

    assert_eq!(report.robots, RobotsTxt::Absent);
    assert!(report.robots_allowed);
    assert!(report.sitemaps.is_empty());
}

#[tokio::test]
async fn test_robots_disallows_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("User-agent: TestBot\nDisallow: /\n"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response("<title>t</title>".to_string()))
        .mount(&mock_server)
        .await;

    let report = run_audit(&create_test_config(10), &mock_server.uri())
        .await
        .expect("Audit failed");

    assert!(report.robots.is_present());
    assert!(!report.robots_allowed);
}

#[tokio::test]
async fn test_http_error_page_is_still_audited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string("<html><head><title>Not Found</title></head></html>"),
        )
        .mount(&mock_server)
        .await;

    let report = run_audit(
        &create_test_config(10),
        &format!("{}/missing", mock_server.uri()),
    )
    .await
    .expect("Audit failed");

    assert_eq!(report.status_code, Some(404));
    assert_eq!(report.facts.title.as_deref(), Some("Not Found"));
}

#[tokio::test]
async fn test_unreachable_page_is_fetch_failure() {
    let url = unused_local_url();
    let result = run_audit(&create_test_config(10), &url).await;

    match result {
        Err(AuditError::FetchFailure { url: failed, message }) => {
            assert_eq!(failed, url);
            assert!(!message.is_empty());
        }
        other => panic!("Expected FetchFailure, got {:?}", other.map(|r| r.url)),
    }
}

#[tokio::test]
async fn test_invalid_url_sends_no_requests() {
    let mock_server = MockServer::start().await;
    let auditor = Auditor::new(create_test_config(10)).unwrap();

    let result = auditor.audit("127.0.0.1/no-scheme").await;
    assert!(matches!(
        result,
        Err(AuditError::InvalidUrl(UrlError::Parse(_)))
    ));
    assert_eq!(crate::count_requests(&mock_server, "GET").await, 0);
}

#[tokio::test]
async fn test_redirect_resolves_links_against_final_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/blog/new", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blog/new"))
        .respond_with(html_response(r#"<a href="post">Post</a>"#.to_string()))
        .mount(&mock_server)
        .await;

    let report = run_audit(&create_test_config(0), &format!("{}/old", base_url))
        .await
        .expect("Audit failed");

    assert_eq!(report.url, format!("{}/old", base_url));
    assert_eq!(report.final_url, format!("{}/blog/new", base_url));
    assert_eq!(
        report.facts.internal_links,
        vec![format!("{}/blog/post", base_url)]
    );
}

#[tokio::test]
async fn test_identification_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestBot/1.0"))
        .and(header("accept-language", "fr"))
        .respond_with(html_response("<title>Bonjour</title>".to_string()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(10);
    config
        .headers
        .insert("Accept-Language".to_string(), "fr".to_string());

    let report = run_audit(&config, &mock_server.uri())
        .await
        .expect("Audit failed");
    assert_eq!(report.facts.title.as_deref(), Some("Bonjour"));
}
