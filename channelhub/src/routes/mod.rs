use axum::{Router, routing::get};

use crate::AppStateRef;

mod playlist;
mod samples;

pub fn get_routes(app_state: &AppStateRef) -> Router {
    Router::new()
        .route("/playlist", get(playlist::get_playlist))
        .route("/playlist.m3u", get(playlist::get_playlist_m3u))
        .route("/samples", get(samples::get_samples))
        .with_state(app_state.clone())
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        AppState, Config, HttpConfig,
        routes::get_routes,
        service::tests::{StaticSource, service_for},
    };

    const NEWS: &str = r#"#EXTM3U
#EXTINF:-1 tvg-logo="http://x/l.png" group-title="News",Channel A
http://stream/a.m3u8
#EXTINF:-1,Orphan Channel
#EXTINF:-1,Channel B
http://stream/b.m3u8
"#;

    fn create_test_app() -> Router {
        let source = StaticSource::with(&[("news.m3u", NEWS), ("page.m3u", "<html></html>")]);
        let config = Config {
            listen_addr: "127.0.0.1:0".into(),
            sample_dir: PathBuf::from("samples"),
            http: HttpConfig::default(),
        };
        let state = Arc::new(AppState::with_service(config, service_for(&source)));

        get_routes(&state)
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|x| x.to_str().unwrap().to_owned());
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_playlist() {
        let (status, _, body) = send(create_test_app(), "/playlist?locator=news.m3u").await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_str(&body).unwrap();
        let channels = body["channels"].as_array().unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0]["name"], "Channel A");
        assert_eq!(channels[0]["logo"], "http://x/l.png");
        assert_eq!(channels[0]["group"], "News");
        assert_eq!(channels[0]["url"], "http://stream/a.m3u8");
        assert!(channels[0]["id"].is_string());
        assert_eq!(channels[1]["name"], "Channel B");
        assert!(channels[1].get("logo").is_none());
    }

    #[tokio::test]
    async fn test_get_playlist_not_a_playlist() {
        let (status, _, body) = send(create_test_app(), "/playlist?locator=page.m3u").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = serde_json::from_str(&body).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("not a playlist"));
    }

    #[tokio::test]
    async fn test_get_playlist_fetch_failure() {
        let (status, _, body) = send(create_test_app(), "/playlist?locator=gone.m3u").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let body: Value = serde_json::from_str(&body).unwrap();
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("could not retrieve content")
        );
    }

    #[tokio::test]
    async fn test_get_playlist_without_locator() {
        let (status, _, _) = send(create_test_app(), "/playlist").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_playlist_m3u() {
        let (status, content_type, body) =
            send(create_test_app(), "/playlist.m3u?locator=news.m3u").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("audio/x-mpegurl"));

        let channels = m3u_channels::parse(&body).unwrap();
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].logo.as_deref(), Some("http://x/l.png"));
        assert_eq!(channels[1].url, "http://stream/b.m3u8");
    }

    #[tokio::test]
    async fn test_get_samples() {
        let (status, _, body) = send(create_test_app(), "/samples").await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["samples"], serde_json::json!(["news.m3u", "page.m3u"]));
    }
}
