use std::collections::HashMap;

use serde_json::Value;

use super::error::TypeError;

pub type QueryData = HashMap<String, String>;

/// Raw query string parameters. Empty values count as missing.
pub struct Query {
    inner: QueryData,
}

impl Query {
    pub fn from_data(data: QueryData) -> Self {
        Self { inner: data }
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .map(|value| value.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn get_json(&self, key: &str) -> Result<Option<Value>, TypeError> {
        match self.get_str(key) {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|_e| TypeError::new("Failed to parse value as json")),
            None => Ok(None),
        }
    }
}

/// What a catalog request asks for. An id takes precedence over a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    ById(String),
    ByCategory(String),
    All,
}

impl From<&Query> for CatalogQuery {
    fn from(query: &Query) -> Self {
        match (query.get_str("id"), query.get_str("category")) {
            (Some(id), _) => CatalogQuery::ById(id.to_string()),
            (None, Some(category)) => CatalogQuery::ByCategory(category.to_string()),
            (None, None) => CatalogQuery::All,
        }
    }
}
