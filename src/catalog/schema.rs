use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub category: String,
    pub alcohol: u8,
    pub color: String,
}

impl Cocktail {
    /// Display label, zero-padded to two digits ("3" -> "03").
    pub fn label(&self) -> String {
        format!("{:0>2}", self.id)
    }

    pub fn href(&self) -> String {
        format!("/cocktails/{}", self.id)
    }

    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();

        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&term))
    }

    /// Preparation steps numbered from 1, in order.
    pub fn steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.instructions
            .iter()
            .enumerate()
            .map(|(n, step)| (n + 1, step.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str) -> Cocktail {
        Cocktail {
            id: id.to_string(),
            name: String::from("Golden Hour"),
            description: String::from("A warm and inviting cocktail"),
            image: String::from("/images/golden-hour.jpg"),
            ingredients: vec![String::from("2 oz Bourbon"), String::from("Orange peel")],
            instructions: vec![String::from("Shake"), String::from("Strain")],
            category: String::from("Classic"),
            alcohol: 25,
            color: String::from("gradient-to-br from-cocktail-yellow to-yellow-600"),
        }
    }

    #[test]
    fn label_is_zero_padded() {
        assert_eq!(sample("5").label(), "05");
        assert_eq!(sample("12").label(), "12");
    }

    #[test]
    fn category_match_ignores_case() {
        let cocktail = sample("5");
        assert!(cocktail.matches_category("CLASSIC"));
        assert!(cocktail.matches_category("classic"));
        assert!(!cocktail.matches_category("class"));
    }

    #[test]
    fn search_looks_at_ingredients() {
        let cocktail = sample("5");
        assert!(cocktail.matches_search("bourbon"));
        assert!(cocktail.matches_search("WARM"));
        assert!(!cocktail.matches_search("tequila"));
    }

    #[test]
    fn steps_start_at_one() {
        let cocktail = sample("5");
        let steps: Vec<_> = cocktail.steps().collect();
        assert_eq!(steps, vec![(1, "Shake"), (2, "Strain")]);
    }
}
