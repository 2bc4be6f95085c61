use std::sync::Arc;

use chrono::{TimeZone, Utc};
use maison_cocktail::{
    routes, vitals::VitalKind, AnalyticsEvent, AppState, Catalog, Config, FixedClock, MemorySink,
};
use serde_json::Value;
use warp::http::StatusCode;

fn config() -> Config {
    Config {
        region: String::from("cdg1"),
        build_time: String::from("2024-05-01T12:00:00+00:00"),
        google_verification: Some(String::from("verify-me")),
        ..Config::default()
    }
}

fn state() -> (AppState, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 1, 18, 30, 0).unwrap());
    let state = AppState::new(
        Catalog::signature().unwrap(),
        sink.clone(),
        Arc::new(clock),
        config(),
    );
    (state, sink)
}

async fn get(path: &str) -> warp::http::Response<warp::hyper::body::Bytes> {
    let (state, _) = state();
    warp::test::request()
        .path(path)
        .reply(&routes(state))
        .await
}

fn json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn cocktail_by_id() {
    let res = get("/cocktails?id=3").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json(res.body());
    assert_eq!(body["name"], "Emerald Garden");
    assert_eq!(body["category"], "Herbal");
    assert_eq!(body["alcohol"], 15);
    assert_eq!(
        res.headers()["cache-control"],
        "public, s-maxage=60, stale-while-revalidate=300"
    );
    assert_eq!(res.headers()["cdn-cache-control"], "max-age=900");
}

#[tokio::test]
async fn unknown_cocktail_is_not_found() {
    let res = get("/cocktails?id=99").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(res.body()), serde_json::json!({ "error": "Cocktail not found" }));
}

#[tokio::test]
async fn category_filter_ignores_case() {
    let res = get("/cocktails?category=TROPICAL").await;
    assert_eq!(res.status(), StatusCode::OK);

    let names: Vec<String> = json(res.body())
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Sunset Margarita", "Blue Ocean"]);
}

#[tokio::test]
async fn unknown_category_is_empty_list() {
    let res = get("/cocktails?category=Smoky").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json(res.body()), serde_json::json!([]));
}

#[tokio::test]
async fn whole_catalog_without_filters() {
    for path in ["/cocktails", "/cocktails?id=", "/cocktails?foo=bar"] {
        let res = get(path).await;
        assert_eq!(res.status(), StatusCode::OK, "{path}");
        assert_eq!(json(res.body()).as_array().unwrap().len(), 6, "{path}");
    }
}

#[tokio::test]
async fn id_wins_over_category() {
    let res = get("/cocktails?id=1&category=Herbal").await;
    assert_eq!(json(res.body())["name"], "Sunset Margarita");
}

#[tokio::test]
async fn etag_revalidation() {
    let (state, _) = state();
    let filter = routes(state);

    let first = warp::test::request()
        .path("/cocktails?id=2")
        .reply(&filter)
        .await;
    let etag = first.headers()["etag"].to_str().unwrap().to_string();

    let second = warp::test::request()
        .path("/cocktails?id=2")
        .header("if-none-match", &etag)
        .reply(&filter)
        .await;
    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert!(second.body().is_empty());
    assert_eq!(second.headers()["etag"], etag.as_str());

    let other = warp::test::request()
        .path("/cocktails?id=3")
        .header("if-none-match", &etag)
        .reply(&filter)
        .await;
    assert_eq!(other.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreadable_if_none_match_is_ignored() {
    let (state, _) = state();
    let res = warp::test::request()
        .path("/cocktails?id=3")
        .header("if-none-match", &b"\"caf\xc3\xa9\""[..])
        .reply(&routes(state))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json(res.body())["name"], "Emerald Garden");
    assert!(res.headers().contains_key("etag"));
}

#[tokio::test]
async fn whitespace_parameters_are_values() {
    let res = get("/cocktails?id=%20").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(res.body()), serde_json::json!({ "error": "Cocktail not found" }));

    let res = get("/cocktails?category=%20").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json(res.body()), serde_json::json!([]));

    let res = get("/performance?metrics=%20").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(res.body()), serde_json::json!({ "error": "Invalid metrics data" }));
}

#[tokio::test]
async fn metrics_are_echoed() {
    let res = get("/performance?metrics=%7B%22a%22%3A1%7D").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json(res.body()), serde_json::json!({ "a": 1 }));
    assert_eq!(res.headers()["cache-control"], "no-cache");
    assert!(res.headers().contains_key("x-response-time"));
}

#[tokio::test]
async fn invalid_metrics_are_rejected() {
    let res = get("/performance?metrics=not-json").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json(res.body()), serde_json::json!({ "error": "Invalid metrics data" }));
    assert!(!res.headers().contains_key("cache-control"));
}

#[tokio::test]
async fn server_descriptors() {
    let res = get("/performance").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["cache-control"], "public, s-maxage=30");

    let body = json(res.body());
    assert_eq!(body["edgeLocation"], "cdg1");
    assert_eq!(body["buildTime"], "2024-05-01T12:00:00+00:00");
    assert_eq!(body["serverTime"], 1_717_266_600_000_i64);
    assert_eq!(body["serverVersion"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["optimizations"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn echoed_vitals_reach_the_sink() {
    let (state, sink) = state();
    let res = warp::test::request()
        .path("/performance?metrics=%7B%22lcp%22%3A3100%2C%22cls%22%3A0.05%2C%22note%22%3A%22x%22%7D")
        .reply(&routes(state))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json(res.body())["note"], "x");

    let metrics: Vec<VitalKind> = sink
        .events()
        .into_iter()
        .filter_map(|event| match event {
            AnalyticsEvent::WebVital { metric, .. } => Some(metric),
            _ => None,
        })
        .collect();
    assert_eq!(metrics, [VitalKind::Lcp, VitalKind::Cls]);
}

#[tokio::test]
async fn home_page_is_tracked() {
    let (state, sink) = state();
    let res = warp::test::request()
        .path("/pages/home")
        .reply(&routes(state))
        .await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json(res.body());
    assert_eq!(body["featured"]["carousel"]["activeIndex"], 0);
    assert_eq!(body["metadata"]["googleSiteVerification"], "verify-me");
    assert_eq!(body["footer"]["copyright"], "© 1924-2024 Maison Cocktail");

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(&events[0], AnalyticsEvent::PageViewed { page_path, .. } if page_path == "/"));
}

#[tokio::test]
async fn cocktail_page_is_tracked() {
    let (state, sink) = state();
    let filter = routes(state);

    let res = warp::test::request()
        .path("/pages/cocktails/5")
        .reply(&filter)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json(res.body())["cocktail"]["name"], "Golden Hour");
    assert_eq!(
        sink.take(),
        [AnalyticsEvent::CocktailViewed {
            cocktail_name: String::from("Golden Hour"),
            action: String::from("detail_page"),
        }]
    );

    let missing = warp::test::request()
        .path("/pages/cocktails/99")
        .reply(&filter)
        .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert!(sink.events().is_empty());
}

#[tokio::test]
async fn manifest() {
    let res = get("/manifest.webmanifest").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/manifest+json");
    assert_eq!(json(res.body())["short_name"], "Maison Cocktail");
}

#[tokio::test]
async fn unknown_route() {
    let res = get("/nope").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(json(res.body()), serde_json::json!({ "error": "Not found" }));
}

#[tokio::test]
async fn wrong_method() {
    let (state, _) = state();
    let res = warp::test::request()
        .method("POST")
        .path("/cocktails")
        .reply(&routes(state))
        .await;
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
