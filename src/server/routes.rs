use std::{convert::Infallible, sync::Arc};

use warp::{
    http::{header::IF_NONE_MATCH, HeaderMap},
    Filter, Rejection, Reply,
};

use crate::{
    actions::Catalog, clock::Clock, config::Config, content::SiteIdentity, error::ApiError,
    handlers, query::QueryData, sink::AnalyticsSink,
};

/// Everything a request handler may read. Cheap to clone; nothing in here is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sink: Arc<dyn AnalyticsSink>,
    pub clock: Arc<dyn Clock>,
    pub site: Arc<SiteIdentity>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        sink: Arc<dyn AnalyticsSink>,
        clock: Arc<dyn Clock>,
        config: Config,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sink,
            clock,
            site: Arc::new(SiteIdentity::new(&config.site_url)),
            config: Arc::new(config),
        }
    }
}

pub fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

/// Query parameters; an unparseable query string counts as no parameters.
pub fn with_query() -> impl Filter<Extract = (QueryData,), Error = Infallible> + Clone {
    warp::query::<QueryData>()
        .or(warp::any().map(QueryData::new))
        .unify()
}

/// `If-None-Match`, if present and readable. An unreadable value only costs
/// the client its revalidation.
pub fn with_if_none_match() -> impl Filter<Extract = (Option<String>,), Error = Infallible> + Clone {
    warp::header::headers_cloned().map(|headers: HeaderMap| {
        headers
            .get(IF_NONE_MATCH)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    })
}

pub fn routes(state: AppState) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let cocktails = warp::path!("cocktails")
        .and(warp::get())
        .and(with_query())
        .and(with_if_none_match())
        .and(with_state(state.clone()))
        .and_then(handlers::cocktails);

    let performance = warp::path!("performance")
        .and(warp::get())
        .and(with_query())
        .and(with_state(state.clone()))
        .and_then(handlers::performance);

    let home = warp::path!("pages" / "home")
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::home_page);

    let cocktail_page = warp::path!("pages" / "cocktails" / String)
        .and(warp::get())
        .and(with_state(state))
        .and_then(handlers::cocktail_page);

    let manifest = warp::path!("manifest.webmanifest")
        .and(warp::get())
        .and_then(handlers::manifest);

    cocktails
        .or(performance)
        .or(home)
        .or(cocktail_page)
        .or(manifest)
        .recover(handle_rejection)
        .with(warp::log("maison_cocktail::access"))
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let error = if err.is_not_found() {
        ApiError::NotFound(String::from("Not found"))
    } else if let Some(error) = err.find::<ApiError>() {
        error.clone()
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        ApiError::MethodNotAllowed
    } else {
        ApiError::InternalFault(format!("Unhandled rejection: {err:?}"))
    };

    Ok(error.into_response())
}
