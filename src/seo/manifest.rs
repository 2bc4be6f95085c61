use serde::Serialize;

use crate::content::BRAND;

#[derive(Debug, Clone, Serialize)]
pub struct ManifestIcon {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestIcon>,
    pub categories: Vec<&'static str>,
    pub lang: &'static str,
    pub orientation: &'static str,
}

pub fn web_manifest() -> WebManifest {
    WebManifest {
        name: format!("{BRAND} - Art de la Mixologie Française"),
        short_name: BRAND,
        description: "Découvrez l'art de la mixologie française avec notre collection exclusive de cocktails artisanaux.",
        start_url: "/",
        display: "standalone",
        background_color: "#0A0A0A",
        theme_color: "#D4B896",
        icons: vec![
            ManifestIcon {
                src: "/favicon.ico",
                sizes: "any",
                mime: "image/x-icon",
            },
            ManifestIcon {
                src: "/icon-192.png",
                sizes: "192x192",
                mime: "image/png",
            },
            ManifestIcon {
                src: "/icon-512.png",
                sizes: "512x512",
                mime: "image/png",
            },
        ],
        categories: vec!["food", "drink", "lifestyle"],
        lang: "fr",
        orientation: "portrait-primary",
    }
}
