use std::collections::HashSet;

use serde::Serialize;

use crate::{
    data::signature_cocktails, error::ApiError, error::CatalogError, query::CatalogQuery,
    schema::Cocktail,
};

/// Immutable list of cocktails, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    cocktails: Vec<Cocktail>,
}

impl Catalog {
    pub fn new(cocktails: Vec<Cocktail>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for cocktail in cocktails.iter() {
            if !seen.insert(cocktail.id.as_str()) {
                return Err(CatalogError::new(format!("Duplicate id {}", cocktail.id)));
            }
            if cocktail.ingredients.is_empty() {
                return Err(CatalogError::new(format!("{} has no ingredients", cocktail.name)));
            }
            if cocktail.instructions.is_empty() {
                return Err(CatalogError::new(format!("{} has no instructions", cocktail.name)));
            }
            if cocktail.alcohol > 100 {
                return Err(CatalogError::new(format!(
                    "{} has an alcohol content of {}%",
                    cocktail.name, cocktail.alcohol
                )));
            }
        }

        Ok(Self { cocktails })
    }

    pub fn signature() -> Result<Self, CatalogError> {
        Self::new(signature_cocktails())
    }

    pub fn len(&self) -> usize {
        self.cocktails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cocktails.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cocktail> {
        self.cocktails.get(index)
    }

    pub fn get_by_id(&self, id: &str) -> Result<&Cocktail, ApiError> {
        self.cocktails
            .iter()
            .find(|cocktail| cocktail.id == id)
            .ok_or_else(ApiError::cocktail_not_found)
    }

    pub fn get_all(&self) -> &[Cocktail] {
        &self.cocktails
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&Cocktail> {
        self.cocktails
            .iter()
            .filter(|cocktail| cocktail.matches_category(category))
            .collect()
    }

    /// Distinct categories in definition order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = vec![];
        for cocktail in self.cocktails.iter() {
            if !categories.contains(&cocktail.category.as_str()) {
                categories.push(&cocktail.category);
            }
        }
        categories
    }

    pub fn search(&self, term: &str) -> Vec<&Cocktail> {
        let term = term.trim();
        self.cocktails
            .iter()
            .filter(|cocktail| term.is_empty() || cocktail.matches_search(term))
            .collect()
    }

    /// Same-category cocktails first, then the ones following `id` in
    /// catalog order, wrapping around.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&Cocktail> {
        let Some(position) = self.cocktails.iter().position(|c| c.id == id) else {
            return vec![];
        };
        let origin = &self.cocktails[position];

        let mut related: Vec<&Cocktail> = self
            .cocktails
            .iter()
            .filter(|c| c.id != origin.id && c.matches_category(&origin.category))
            .collect();

        let len = self.cocktails.len();
        for offset in 1..len {
            let candidate = &self.cocktails[(position + offset) % len];
            if !related.iter().any(|c| c.id == candidate.id) {
                related.push(candidate);
            }
        }

        related.truncate(limit);
        related
    }
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum CatalogPayload<'a> {
    One(&'a Cocktail),
    Many(Vec<&'a Cocktail>),
}

pub fn fetch_cocktails<'a>(
    query: &CatalogQuery,
    catalog: &'a Catalog,
) -> Result<CatalogPayload<'a>, ApiError> {
    match query {
        CatalogQuery::ById(id) => {
            let cocktail = catalog.get_by_id(id)?;
            log::trace!("> Found cocktail {}", cocktail.id);
            Ok(CatalogPayload::One(cocktail))
        }
        CatalogQuery::ByCategory(category) => {
            let rows = catalog.filter_by_category(category);
            log::trace!("> {} cocktails in category {:?}", rows.len(), category);
            Ok(CatalogPayload::Many(rows))
        }
        CatalogQuery::All => Ok(CatalogPayload::Many(catalog.get_all().iter().collect())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::signature().unwrap()
    }

    fn names(rows: &[&Cocktail]) -> Vec<String> {
        rows.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn every_id_resolves_to_itself() {
        let catalog = catalog();
        for cocktail in catalog.get_all() {
            assert_eq!(catalog.get_by_id(&cocktail.id).unwrap().id, cocktail.id);
        }
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = catalog();
        for id in ["99", "", "01", "one", " 1"] {
            assert_eq!(catalog.get_by_id(id), Err(ApiError::cocktail_not_found()));
        }
    }

    #[test]
    fn emerald_garden_is_herbal() {
        let catalog = catalog();
        let cocktail = catalog.get_by_id("3").unwrap();
        assert_eq!(cocktail.name, "Emerald Garden");
        assert_eq!(cocktail.category, "Herbal");
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let catalog = catalog();
        for input in ["tropical", "TROPICAL", "Tropical"] {
            assert_eq!(
                names(&catalog.filter_by_category(input)),
                vec!["Sunset Margarita", "Blue Ocean"]
            );
        }
        assert!(catalog.filter_by_category("tiki").is_empty());
    }

    #[test]
    fn category_filter_is_an_exact_subset() {
        let catalog = catalog();
        for category in ["herbal", "classic", "sparkling", "elegant", "nope"] {
            let rows = catalog.filter_by_category(category);
            let expected = catalog
                .get_all()
                .iter()
                .filter(|c| c.category.to_lowercase() == category)
                .count();
            assert_eq!(rows.len(), expected);
            assert!(rows.iter().all(|c| c.category.to_lowercase() == category));
        }
    }

    #[test]
    fn get_all_is_stable() {
        let catalog = catalog();
        let first: Vec<_> = catalog.get_all().iter().map(|c| c.id.clone()).collect();
        let second: Vec<_> = catalog.get_all().iter().map(|c| c.id.clone()).collect();
        assert_eq!(first, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut cocktails = signature_cocktails();
        cocktails[1].id = String::from("1");
        assert!(Catalog::new(cocktails).is_err());
    }

    #[test]
    fn rejects_empty_instructions() {
        let mut cocktails = signature_cocktails();
        cocktails[2].instructions.clear();
        assert!(Catalog::new(cocktails).is_err());
    }

    #[test]
    fn categories_in_definition_order() {
        assert_eq!(
            catalog().categories(),
            vec!["Tropical", "Herbal", "Elegant", "Classic", "Sparkling"]
        );
    }

    #[test]
    fn search_matches_ingredients() {
        let catalog = catalog();
        assert_eq!(
            names(&catalog.search("vodka")),
            vec!["Blue Ocean", "Purple Haze", "Ruby Romance"]
        );
        assert_eq!(catalog.search("  ").len(), 6);
    }

    #[test]
    fn related_prefers_same_category() {
        let catalog = catalog();
        let related = catalog.related("2", 3);
        assert_eq!(names(&related), vec!["Sunset Margarita", "Emerald Garden", "Purple Haze"]);
        assert!(catalog.related("99", 3).is_empty());
    }

    #[test]
    fn fetch_by_id_and_category() {
        let catalog = catalog();
        match fetch_cocktails(&CatalogQuery::ById(String::from("3")), &catalog).unwrap() {
            CatalogPayload::One(c) => assert_eq!(c.name, "Emerald Garden"),
            other => panic!("unexpected payload {other:?}"),
        }
        match fetch_cocktails(&CatalogQuery::All, &catalog).unwrap() {
            CatalogPayload::Many(rows) => assert_eq!(rows.len(), 6),
            other => panic!("unexpected payload {other:?}"),
        }
        assert!(fetch_cocktails(&CatalogQuery::ById(String::from("99")), &catalog).is_err());
    }
}
