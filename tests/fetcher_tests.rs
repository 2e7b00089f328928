use axum::{
    Router,
    http::{HeaderMap, StatusCode, header},
    response::Html,
    routing::get,
};
use std::time::Duration;

use search_relay::config::Config;
use search_relay::fetcher::{FetchError, HttpFetcher, PageFetcher};

/// Serves a few fixed pages on an ephemeral local port and returns its base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route(
            "/echo-agent",
            get(|headers: HeaderMap| async move {
                let agent = headers
                    .get(header::USER_AGENT)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Html(format!("<p>{agent}</p>"))
            }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Html("<h1>Not Found</h1>")) }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Html("<p>late</p>")
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn default_fetcher() -> HttpFetcher {
    HttpFetcher::from_config(&Config::default()).unwrap()
}

#[cfg(test)]
mod http_fetcher {
    use super::*;

    #[tokio::test]
    async fn test_sends_configured_user_agent() {
        let base = spawn_upstream().await;
        let page = default_fetcher()
            .fetch(&format!("{base}/echo-agent"))
            .await
            .unwrap();

        assert_eq!(page.status, StatusCode::OK);
        assert_eq!(
            page.body,
            format!("<p>{}</p>", Config::default().user_agent)
        );
    }

    #[tokio::test]
    async fn test_error_status_is_returned_not_raised() {
        let base = spawn_upstream().await;
        let page = default_fetcher()
            .fetch(&format!("{base}/missing"))
            .await
            .unwrap();

        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert!(!page.is_success());
        assert_eq!(page.body, "<h1>Not Found</h1>");
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let base = spawn_upstream().await;
        let fetcher = HttpFetcher::new("test-agent", Duration::from_millis(200)).unwrap();
        let err = fetcher.fetch(&format!("{base}/slow")).await.unwrap_err();

        match err {
            FetchError::Request(e) => assert!(e.is_timeout(), "expected a timeout, got {e:?}"),
            other => panic!("expected a request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_url_is_rejected_before_sending() {
        let err = default_fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
