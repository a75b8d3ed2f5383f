//! Rate limiting, body limits and the admin API against a running server.

use reqwest::StatusCode;
use uno_site::config::SiteConfig;

mod common;

#[tokio::test]
async fn form_posts_are_rate_limited_per_client() {
    let mut config = SiteConfig::default();
    config.rate_limit.burst_size = 2;
    config.rate_limit.requests_per_second = 0.01;
    let site = common::spawn_site(config).await;
    let client = common::client();

    for _ in 0..2 {
        let res = client
            .post(site.url("/insights"))
            .form(&[("email", "reader@example.com")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = client
        .post(site.url("/contact"))
        .form(&[("name", "Spam"), ("email", "spam@example.com"), ("message", "Buy")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.headers().contains_key("retry-after"));

    // Page views are never limited.
    let res = client.get(site.url("/contact")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    site.shutdown.trigger();
}

#[tokio::test]
async fn disabled_rate_limit_lets_everything_through() {
    let mut config = SiteConfig::default();
    config.rate_limit.enabled = false;
    config.rate_limit.burst_size = 1;
    let site = common::spawn_site(config).await;
    let client = common::client();

    for _ in 0..5 {
        let res = client
            .post(site.url("/insights"))
            .form(&[("email", "bad")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    site.shutdown.trigger();
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut config = SiteConfig::default();
    config.security.max_body_size = 1024;
    let site = common::spawn_site(config).await;

    let message = "x".repeat(4096);
    let res = common::client()
        .post(site.url("/contact"))
        .form(&[("name", "Big"), ("email", "big@example.com"), ("message", message.as_str())])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    site.shutdown.trigger();
}

#[tokio::test]
async fn admin_api_requires_key_and_counts_forms() {
    let admin_addr = "127.0.0.1:38181";
    let mut config = SiteConfig::default();
    config.admin.enabled = true;
    config.admin.api_key = "integration-key".into();
    config.admin.bind_address = admin_addr.into();
    let site = common::spawn_site(config).await;
    let client = common::client();

    client
        .post(site.url("/contact"))
        .form(&[("name", "Ada"), ("email", "ada@example.com"), ("message", "Hello")])
        .send()
        .await
        .unwrap();
    client
        .post(site.url("/contact"))
        .form(&[("name", ""), ("email", ""), ("message", "")])
        .send()
        .await
        .unwrap();

    // The admin listener is bound inside `run`; give it a moment.
    tokio::time::sleep(std::time::Duration::from_millis(200)).await;

    let res = client
        .get(format!("http://{admin_addr}/admin/forms"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let forms: serde_json::Value = client
        .get(format!("http://{admin_addr}/admin/forms"))
        .bearer_auth("integration-key")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(forms["contact_submissions"], 1);
    assert_eq!(forms["rejected_submissions"], 1);

    let content: serde_json::Value = client
        .get(format!("http://{admin_addr}/admin/content"))
        .bearer_auth("integration-key")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(content["featured_case"], "ai-powered-logistics-optimization");
    assert_eq!(content["articles"].as_array().unwrap().len(), 6);

    site.shutdown.trigger();
}
