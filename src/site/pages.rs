use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    actions::Catalog,
    constants::RELATED_COCKTAIL_COUNT,
    content::{SiteIdentity, FAQ, HERO_TAGLINE},
    controller::{Carousel, CarouselState},
    error::ApiError,
    metadata::{Page, PageMetadata},
    schema::Cocktail,
    sections::{About, CocktailCard, Collection, Faq, Footer, Header, Hero},
    structured_data::{breadcrumb_list, faq_page, recipe, site_graph, Breadcrumb},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Featured {
    pub carousel: CarouselState,
    pub cocktail: CocktailCard,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub metadata: PageMetadata,
    pub structured_data: Vec<Value>,
    pub header: Header,
    pub hero: Hero,
    /// Missing when the catalog is empty.
    pub featured: Option<Featured>,
    pub collection: Collection,
    pub about: About,
    pub faq: Faq,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CocktailPage {
    pub metadata: PageMetadata,
    pub structured_data: Vec<Value>,
    pub header: Header,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub cocktail: CocktailCard,
    pub ingredients: Vec<String>,
    pub steps: Vec<Step>,
    pub related: Vec<CocktailCard>,
    pub back_link: Breadcrumb,
    pub footer: Footer,
}

/// Carousel position a fresh home page view starts from.
fn featured(catalog: &Catalog) -> Option<Featured> {
    let carousel = Carousel::new(catalog.len()).ok()?;
    let cocktail = catalog.get(carousel.active_index())?;

    Some(Featured {
        carousel: carousel.state(),
        cocktail: CocktailCard::from(cocktail),
    })
}

pub fn home_page(
    catalog: &Catalog,
    site: &SiteIdentity,
    verification: Option<&str>,
    now: DateTime<Utc>,
) -> HomePage {
    let metadata = PageMetadata::for_page(Page::Home, site).with_verification(verification);

    HomePage {
        structured_data: vec![site_graph(site, HERO_TAGLINE), faq_page(FAQ)],
        metadata,
        header: Header::build(),
        hero: Hero::build(),
        featured: featured(catalog),
        collection: Collection::build(catalog),
        about: About::build(),
        faq: Faq::build(),
        footer: Footer::build_now(site, now),
    }
}

pub fn cocktail_page(
    catalog: &Catalog,
    id: &str,
    site: &SiteIdentity,
    verification: Option<&str>,
    now: DateTime<Utc>,
) -> Result<CocktailPage, ApiError> {
    let cocktail: &Cocktail = catalog.get_by_id(id)?;
    let breadcrumbs = vec![
        Breadcrumb::new("Accueil", "/"),
        Breadcrumb::new("Collection", "/#cocktails"),
        Breadcrumb::current(&cocktail.name, &cocktail.href()),
    ];

    Ok(CocktailPage {
        metadata: PageMetadata::for_cocktail(Some(cocktail), site).with_verification(verification),
        structured_data: vec![recipe(cocktail, site), breadcrumb_list(&breadcrumbs, site)],
        header: Header::build(),
        cocktail: CocktailCard::from(cocktail),
        ingredients: cocktail.ingredients.clone(),
        steps: cocktail
            .steps()
            .map(|(number, text)| Step {
                number,
                text: text.to_string(),
            })
            .collect(),
        related: catalog
            .related(&cocktail.id, RELATED_COCKTAIL_COUNT)
            .into_iter()
            .map(CocktailCard::from)
            .collect(),
        breadcrumbs,
        back_link: Breadcrumb::new("← Retour à la collection", "/"),
        footer: Footer::build_now(site, now),
    })
}
