use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use warp::{
    http::{
        header::{HeaderName, HeaderValue, CONTENT_TYPE},
        StatusCode,
    },
    hyper::Body,
    reply::Response,
    Rejection, Reply,
};

use crate::{
    actions::fetch_cocktails,
    constants::SERVER_OPTIMIZATIONS,
    error::ApiError,
    events::AnalyticsEvent,
    manifest::web_manifest,
    pages,
    query::{CatalogQuery, Query, QueryData},
    routes::AppState,
    sink::AnalyticsSink,
    vitals::PerformanceReport,
    CachePolicy, entity_tag, is_fresh, set_entity_tag,
};

fn json_body<T: Serialize + ?Sized>(payload: &T) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(payload)
        .map_err(|e| ApiError::InternalFault(format!("Failed to serialize response: {e}")))
}

fn with_json_body(body: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(body));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// Serializes `payload` into a JSON response with a 200 status.
pub fn json_response<T: Serialize + ?Sized>(payload: &T) -> Result<Response, ApiError> {
    json_body(payload).map(with_json_body)
}

/// Like [`json_response`], with an ETag; answers 304 when the client copy is
/// still fresh.
fn revalidated_json<T: Serialize + ?Sized>(
    payload: &T,
    if_none_match: Option<&str>,
) -> Result<Response, ApiError> {
    let body = json_body(payload)?;
    let etag = entity_tag(&body);

    let mut response = if is_fresh(if_none_match, &etag) {
        log::trace!("> Not modified {etag}");
        let mut response = Response::new(Body::empty());
        *response.status_mut() = StatusCode::NOT_MODIFIED;
        response
    } else {
        with_json_body(body)
    };

    set_entity_tag(response.headers_mut(), &etag)?;
    Ok(response)
}

fn finish(result: Result<Response, ApiError>, policy: Option<CachePolicy>) -> Response {
    let mut response = result.unwrap_or_else(|e| e.into_response());
    if let Some(policy) = policy {
        policy.apply(response.headers_mut());
    }
    response
}

pub async fn cocktails(
    data: QueryData,
    if_none_match: Option<String>,
    state: AppState,
) -> Result<Response, Rejection> {
    let query = CatalogQuery::from(&Query::from_data(data));

    let result = fetch_cocktails(&query, &state.catalog)
        .and_then(|payload| revalidated_json(&payload, if_none_match.as_deref()));

    Ok(finish(result, Some(CachePolicy::Catalog)))
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServerDescriptors {
    pub server_time: i64,
    pub edge_location: String,
    pub build_time: String,
    pub server_version: &'static str,
    pub optimizations: &'static [&'static str],
}

impl ServerDescriptors {
    pub fn collect(state: &AppState) -> Self {
        Self {
            server_time: state.clock.now().timestamp_millis(),
            edge_location: state.config.region.clone(),
            build_time: state.config.build_time.clone(),
            server_version: env!("CARGO_PKG_VERSION"),
            optimizations: SERVER_OPTIMIZATIONS,
        }
    }
}

/// Forwards any Core Web Vitals found in an echoed payload to the sink.
fn forward_vitals(metrics: &Value, sink: &dyn AnalyticsSink) {
    for (metric, value) in PerformanceReport::from_value(metrics).measurements() {
        sink.track(AnalyticsEvent::web_vital(metric, value));
    }
}

pub async fn performance(data: QueryData, state: AppState) -> Result<Response, Rejection> {
    let started = Instant::now();
    let query = Query::from_data(data);

    let mut response = match query.get_json("metrics") {
        Ok(Some(metrics)) => {
            forward_vitals(&metrics, &*state.sink);
            finish(json_response(&metrics), Some(CachePolicy::NoCache))
        }
        Ok(None) => finish(
            json_response(&ServerDescriptors::collect(&state)),
            Some(CachePolicy::ServerMetrics),
        ),
        Err(e) => {
            log::trace!("> Rejected metrics {e}");
            // Not cacheable.
            finish(Err(ApiError::invalid_metrics()), None)
        }
    };

    let elapsed = format!("{}ms", started.elapsed().as_millis());
    if let Ok(value) = HeaderValue::from_str(&elapsed) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-response-time"), value);
    }

    Ok(response)
}

pub async fn home_page(state: AppState) -> Result<Response, Rejection> {
    let page = pages::home_page(
        &state.catalog,
        &state.site,
        state.config.google_verification.as_deref(),
        state.clock.now(),
    );

    state.sink.track(AnalyticsEvent::PageViewed {
        page_path: String::from("/"),
        page_title: page.metadata.title.clone(),
    });

    Ok(finish(json_response(&page), Some(CachePolicy::Page)))
}

pub async fn cocktail_page(id: String, state: AppState) -> Result<Response, Rejection> {
    let result = pages::cocktail_page(
        &state.catalog,
        &id,
        &state.site,
        state.config.google_verification.as_deref(),
        state.clock.now(),
    );

    let result = result.and_then(|page| {
        state.sink.track(AnalyticsEvent::CocktailViewed {
            cocktail_name: page.cocktail.name.clone(),
            action: String::from("detail_page"),
        });
        json_response(&page)
    });

    Ok(finish(result, Some(CachePolicy::Page)))
}

pub async fn manifest() -> Result<Response, Rejection> {
    let mut response = finish(json_response(&web_manifest()), Some(CachePolicy::Manifest));
    if response.status() == StatusCode::OK {
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/manifest+json"),
        );
    }
    Ok(response)
}
