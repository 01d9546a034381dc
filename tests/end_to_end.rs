mod common;

#[tokio::test]
async fn test_shorten_follow_and_inspect() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/")
        .form(&[("url", "http://example.com")])
        .await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/1+");

    let response = server.get("/1+").await;
    response.assert_status_ok();
    assert!(response.text().contains("<dd class=\"click-count\">0</dd>"));

    let response = server.get("/1").await;
    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "http://example.com");

    let response = server.get("/1+").await;
    response.assert_status_ok();
    assert!(response.text().contains("<dd class=\"click-count\">1</dd>"));

    server.get("/doesnotexist").await.assert_status_not_found();
}

#[tokio::test]
async fn test_round_trip_for_many_urls() {
    let (server, _store) = common::create_test_server();

    let urls: Vec<String> = (0..50)
        .map(|i| format!("https://example.com/page/{i}?q={i}"))
        .collect();

    let mut ids = Vec::new();
    for url in &urls {
        ids.push(common::shorten(&server, url).await);
    }

    for (id, url) in ids.iter().zip(&urls) {
        let response = server.get(&format!("/{id}")).await;
        assert_eq!(response.status_code(), 302);
        assert_eq!(response.header("location"), url.as_str());
    }

    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), urls.len());
}
