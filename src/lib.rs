mod catalog {
    pub mod actions;
    pub mod data;
    pub mod error;
    pub mod query;
    pub mod schema;
}
mod carousel {
    pub mod controller;
    pub mod driver;
}
mod analytics {
    pub mod events;
    pub mod sink;
    pub mod tracking;
    pub mod vitals;
}
mod seo {
    pub mod manifest;
    pub mod metadata;
    pub mod structured_data;
}
mod site {
    pub mod content;
    pub mod pages;
    pub mod sections;
}
mod server {
    pub mod clock;
    pub mod config;
    pub mod handlers;
    pub mod routes;
}
mod constants;

mod cache {
    pub mod cache;
}

pub use analytics::*;
pub use cache::cache::*;
pub use carousel::*;
pub use catalog::*;
pub use constants::*;
pub use seo::*;
pub use server::*;
pub use site::*;

pub use actions::Catalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use controller::{Carousel, CarouselMode, CarouselState, CooldownToken};
pub use driver::{CarouselHandle, CarouselTimings};
pub use error::{ApiError, CarouselError, CatalogError, ConfigError, TypeError};
pub use events::{AnalyticsEvent, ContactMethod};
pub use routes::{routes, AppState};
pub use schema::Cocktail;
pub use sink::{AnalyticsSink, ConsentGate, LogSink, MemorySink};
