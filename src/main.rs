use std::{error::Error, sync::Arc};

use maison_cocktail::{
    routes, AnalyticsSink, AppState, Catalog, Config, ConsentGate, LogSink, SystemClock,
};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    log::info!("Shutting down");
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let catalog = Catalog::signature()?;
    log::info!("Loaded {} cocktails", catalog.len());

    let sink: Arc<dyn AnalyticsSink> = Arc::new(ConsentGate::new(
        LogSink::new(config.ga_measurement_id.clone()),
        config.analytics_consent,
    ));
    if !config.analytics_consent {
        log::info!("Analytics consent not granted, events will be dropped");
    }

    let address = config.address();
    let state = AppState::new(catalog, sink, Arc::new(SystemClock), config);

    let (bound, server) =
        warp::serve(routes(state)).try_bind_with_graceful_shutdown(address, shutdown_signal())?;
    log::info!("Listening on http://{bound}");
    server.await;

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}
