pub const CAROUSEL_TICK_MS: u64 = 4000;
pub const CAROUSEL_COOLDOWN_MS: u64 = 5000;

pub const RELATED_COCKTAIL_COUNT: usize = 3;

pub const CATALOG_CACHE_HEADERS: &[(&str, &str)] = &[
    ("cache-control", "public, s-maxage=60, stale-while-revalidate=300"),
    ("cdn-cache-control", "max-age=900"),
];

pub const SERVER_METRICS_CACHE_HEADERS: &[(&str, &str)] = &[("cache-control", "public, s-maxage=30")];

pub const ECHO_CACHE_HEADERS: &[(&str, &str)] = &[("cache-control", "no-cache")];

pub const PAGE_CACHE_HEADERS: &[(&str, &str)] = &[
    ("cache-control", "public, s-maxage=60, stale-while-revalidate=300"),
];

pub const MANIFEST_CACHE_HEADERS: &[(&str, &str)] = &[("cache-control", "public, max-age=86400")];

pub const SERVER_OPTIMIZATIONS: &[&str] = &[
    "Static Catalog",
    "ETag Revalidation",
    "CDN Cache Hints",
    "Async I/O",
    "Shared Read-only State",
    "Structured Data",
];

pub const SCROLL_DEPTH_THRESHOLDS: &[u8] = &[25, 50, 75, 90, 100];

pub const VISIBILITY_THRESHOLD: f64 = 0.1;

pub const NAVIGATION: &[(&str, &str)] = &[
    ("Collection", "#cocktails"),
    ("Maison", "#about"),
    ("Questions", "#faq"),
    ("Contact", "#contact"),
];
