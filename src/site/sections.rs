use chrono::Datelike;
use serde::Serialize;

use crate::{
    actions::Catalog,
    constants::NAVIGATION,
    content::{
        SiteIdentity, ABOUT_INTRO, ABOUT_SUBTITLE, ABOUT_TITLE, ABOUT_VALUES, BRAND,
        COLLECTION_DESCRIPTION, COLLECTION_SUBTITLE, COLLECTION_TITLE, FAQ, FOUNDED,
        HERO_CTA_PRIMARY, HERO_CTA_SECONDARY, HERO_SUB_TAGLINE, HERO_TAGLINE, OPENING_HOURS,
        SOCIAL_LINKS,
    },
    schema::Cocktail,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub brand: &'static str,
    pub navigation: Vec<Link>,
    pub reservation: Link,
}

impl Header {
    pub fn build() -> Self {
        Self {
            brand: BRAND,
            navigation: NAVIGATION
                .iter()
                .map(|(label, href)| Link::new(label, href))
                .collect(),
            reservation: Link::new("Réserver", "#contact"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub established: u16,
    pub tagline: &'static str,
    pub sub_tagline: &'static str,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub background_image: &'static str,
}

impl Hero {
    pub fn build() -> Self {
        Self {
            established: FOUNDED,
            tagline: HERO_TAGLINE,
            sub_tagline: HERO_SUB_TAGLINE,
            primary_cta: Link::new(HERO_CTA_PRIMARY, "#cocktails"),
            secondary_cta: Link::new(HERO_CTA_SECONDARY, "#contact"),
            background_image: "/images/optimized/hero.webp",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CocktailCard {
    pub id: String,
    pub label: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub alcohol: u8,
    pub image: String,
    pub color: String,
    pub href: String,
}

impl From<&Cocktail> for CocktailCard {
    fn from(cocktail: &Cocktail) -> Self {
        Self {
            id: cocktail.id.clone(),
            label: cocktail.label(),
            name: cocktail.name.clone(),
            description: cocktail.description.clone(),
            category: cocktail.category.clone(),
            alcohol: cocktail.alcohol,
            image: cocktail.image.clone(),
            color: cocktail.color.clone(),
            href: cocktail.href(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub categories: Vec<String>,
    pub cards: Vec<CocktailCard>,
}

impl Collection {
    pub fn build(catalog: &Catalog) -> Self {
        Self {
            title: COLLECTION_TITLE,
            subtitle: COLLECTION_SUBTITLE,
            description: COLLECTION_DESCRIPTION,
            categories: catalog.categories().iter().map(|c| c.to_string()).collect(),
            cards: catalog.get_all().iter().map(CocktailCard::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HouseValue {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub values: Vec<HouseValue>,
}

impl About {
    pub fn build() -> Self {
        Self {
            title: ABOUT_TITLE,
            subtitle: ABOUT_SUBTITLE,
            intro: ABOUT_INTRO,
            values: ABOUT_VALUES
                .iter()
                .map(|&(title, description)| HouseValue { title, description })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Faq {
    pub title: &'static str,
    pub entries: Vec<FaqEntry>,
}

impl Faq {
    pub fn build() -> Self {
        Self {
            title: "Questions Fréquentes",
            entries: FAQ
                .iter()
                .map(|&(question, answer)| FaqEntry { question, answer })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    pub days: Vec<&'static str>,
    pub opens: &'static str,
    pub closes: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub brand: &'static str,
    pub address: String,
    pub telephone: String,
    pub email: String,
    pub opening_hours: Vec<OpeningHours>,
    pub social: Vec<Link>,
    pub copyright: String,
}

impl Footer {
    pub fn build(site: &SiteIdentity, year: i32) -> Self {
        Self {
            brand: BRAND,
            address: format!(
                "{}, {} {}",
                site.street_address, site.postal_code, site.locality
            ),
            telephone: site.telephone.clone(),
            email: site.email.clone(),
            opening_hours: OPENING_HOURS
                .iter()
                .map(|&(days, opens, closes)| OpeningHours {
                    days: days.to_vec(),
                    opens,
                    closes,
                })
                .collect(),
            social: SOCIAL_LINKS
                .iter()
                .map(|(label, href)| Link::new(label, href))
                .collect(),
            copyright: format!("© {FOUNDED}-{year} {BRAND}"),
        }
    }

    pub fn build_now(site: &SiteIdentity, now: chrono::DateTime<chrono::Utc>) -> Self {
        Self::build(site, now.year())
    }
}
