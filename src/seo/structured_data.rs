use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    content::{SiteIdentity, OPENING_HOURS, SOCIAL_LINKS},
    schema::Cocktail,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
    pub current: bool,
}

impl Breadcrumb {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            current: false,
        }
    }

    pub fn current(label: &str, href: &str) -> Self {
        Self {
            current: true,
            ..Self::new(label, href)
        }
    }
}

fn postal_address(site: &SiteIdentity) -> Value {
    json!({
        "@type": "PostalAddress",
        "streetAddress": site.street_address,
        "addressLocality": site.locality,
        "postalCode": site.postal_code,
        "addressCountry": site.country,
    })
}

fn node_id(site: &SiteIdentity, fragment: &str) -> String {
    format!("{}/#{}", site.url, fragment)
}

/// schema.org graph describing the house: organization, website, local
/// business and home page.
pub fn site_graph(site: &SiteIdentity, description: &str) -> Value {
    let hero_image = site.absolute("/images/optimized/hero.webp");
    let opening_hours: Vec<Value> = OPENING_HOURS
        .iter()
        .map(|(days, opens, closes)| {
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": days,
                "opens": opens,
                "closes": closes,
            })
        })
        .collect();
    let same_as: Vec<&str> = SOCIAL_LINKS.iter().map(|(_, url)| *url).collect();

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "@id": node_id(site, "organization"),
                "name": site.name,
                "url": site.url,
                "logo": {
                    "@type": "ImageObject",
                    "url": hero_image,
                    "width": 1200,
                    "height": 630,
                },
                "contactPoint": {
                    "@type": "ContactPoint",
                    "telephone": site.telephone,
                    "contactType": "customer service",
                    "availableLanguage": "French",
                },
                "address": postal_address(site),
                "sameAs": same_as,
            },
            {
                "@type": "WebSite",
                "@id": node_id(site, "website"),
                "url": site.url,
                "name": site.name,
                "publisher": { "@id": node_id(site, "organization") },
                "inLanguage": "fr-FR",
            },
            {
                "@type": "LocalBusiness",
                "@id": node_id(site, "localbusiness"),
                "name": site.name,
                "image": hero_image,
                "url": site.url,
                "telephone": site.telephone,
                "address": postal_address(site),
                "geo": {
                    "@type": "GeoCoordinates",
                    "latitude": site.latitude,
                    "longitude": site.longitude,
                },
                "openingHoursSpecification": opening_hours,
                "servesCuisine": "Cocktails",
                "priceRange": "€€€",
                "acceptsReservations": true,
            },
            {
                "@type": "WebPage",
                "@id": node_id(site, "webpage"),
                "url": site.url,
                "name": site.name,
                "isPartOf": { "@id": node_id(site, "website") },
                "about": { "@id": node_id(site, "organization") },
                "description": description,
                "inLanguage": "fr-FR",
            },
        ],
    })
}

pub fn faq_page(entries: &[(&str, &str)]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": { "@type": "Answer", "text": answer },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

pub fn recipe(cocktail: &Cocktail, site: &SiteIdentity) -> Value {
    let steps: Vec<Value> = cocktail
        .steps()
        .map(|(position, text)| {
            json!({ "@type": "HowToStep", "position": position, "text": text })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Recipe",
        "name": cocktail.name,
        "description": cocktail.description,
        "image": site.absolute(&cocktail.image),
        "url": site.absolute(&cocktail.href()),
        "recipeCategory": cocktail.category,
        "recipeCuisine": "French",
        "recipeIngredient": cocktail.ingredients,
        "recipeInstructions": steps,
        "author": { "@id": node_id(site, "organization") },
        "keywords": format!("cocktail, {}, {}", cocktail.category.to_lowercase(), cocktail.name),
    })
}

pub fn breadcrumb_list(items: &[Breadcrumb], site: &SiteIdentity) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(n, item)| {
            json!({
                "@type": "ListItem",
                "position": n + 1,
                "name": item.label,
                "item": site.absolute(&item.href),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}
