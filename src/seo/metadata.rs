use serde::Serialize;

use crate::{
    content::{SiteIdentity, BRAND, KEYWORDS_PRIMARY, KEYWORDS_SECONDARY},
    schema::Cocktail,
};

const HOME_TITLE: &str =
    "Maison Cocktail Paris | Bar à Cocktails Place Vendôme | Mixologie Française";
const HOME_DESCRIPTION: &str = "Découvrez l'excellence de la mixologie française chez Maison Cocktail, bar à cocktails premium Place Vendôme Paris. Créations exclusives, spiritueux rares, expérience inoubliable depuis 1924.";

const COLLECTION_TITLE: &str =
    "Collection Cocktails Premium | Créations Exclusives | Maison Cocktail Paris";
const COLLECTION_DESCRIPTION: &str = "Explorez notre collection exclusive de cocktails premium. Créations signature, grands classiques revisités et cocktails saisonniers par nos maîtres mixologues parisiens.";

const ABOUT_TITLE: &str =
    "Notre Histoire | Tradition & Innovation depuis 1924 | Maison Cocktail Paris";
const ABOUT_DESCRIPTION: &str = "Découvrez l'histoire centenaire de Maison Cocktail, gardien de la tradition française de la mixologie. Excellence, innovation et savoir-faire au cœur de Paris depuis 1924.";

const CONTACT_TITLE: &str =
    "Réservation & Contact | Bar Cocktail Place Vendôme | Maison Cocktail Paris";
const CONTACT_DESCRIPTION: &str = "Réservez votre table au bar à cocktails Maison Cocktail Place Vendôme Paris. Dégustations privées, événements exclusifs, cours de mixologie. Ouvert du mardi au samedi.";

const NOT_FOUND_TITLE: &str = "Cocktail non trouvé";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Collection,
    About,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub og_image: Option<String>,
    pub locale: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_site_verification: Option<String>,
}

impl PageMetadata {
    pub fn for_page(page: Page, site: &SiteIdentity) -> Self {
        let (title, description, path) = match page {
            Page::Home => (HOME_TITLE, HOME_DESCRIPTION, "/"),
            Page::Collection => (COLLECTION_TITLE, COLLECTION_DESCRIPTION, "/#cocktails"),
            Page::About => (ABOUT_TITLE, ABOUT_DESCRIPTION, "/#about"),
            Page::Contact => (CONTACT_TITLE, CONTACT_DESCRIPTION, "/#contact"),
        };

        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: KEYWORDS_PRIMARY
                .iter()
                .chain(KEYWORDS_SECONDARY.iter())
                .map(|k| k.to_string())
                .collect(),
            canonical: site.absolute(path),
            og_image: Some(site.absolute("/images/optimized/hero.webp")),
            locale: "fr_FR",
            google_site_verification: None,
        }
    }

    pub fn for_cocktail(cocktail: Option<&Cocktail>, site: &SiteIdentity) -> Self {
        match cocktail {
            Some(cocktail) => Self {
                title: format!("{} | {}", cocktail.name, BRAND),
                description: cocktail.description.clone(),
                keywords: vec![
                    cocktail.name.clone(),
                    format!("cocktail {}", cocktail.category.to_lowercase()),
                    String::from("cocktail Paris"),
                ],
                canonical: site.absolute(&cocktail.href()),
                og_image: Some(site.absolute(&cocktail.image)),
                locale: "fr_FR",
                google_site_verification: None,
            },
            None => Self {
                title: NOT_FOUND_TITLE.to_string(),
                description: String::new(),
                keywords: vec![],
                canonical: site.absolute("/"),
                og_image: None,
                locale: "fr_FR",
                google_site_verification: None,
            },
        }
    }

    pub fn with_verification(mut self, token: Option<&str>) -> Self {
        self.google_site_verification = token.map(|t| t.to_string());
        self
    }
}
