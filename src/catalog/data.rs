use crate::schema::Cocktail;

fn cocktail(
    id: &str,
    name: &str,
    description: &str,
    image: &str,
    ingredients: &[&str],
    instructions: &[&str],
    category: &str,
    alcohol: u8,
    color: &str,
) -> Cocktail {
    Cocktail {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        category: category.to_string(),
        alcohol,
        color: color.to_string(),
    }
}

/// The house collection, in display order.
pub fn signature_cocktails() -> Vec<Cocktail> {
    vec![
        cocktail(
            "1",
            "Sunset Margarita",
            "A vibrant twist on the classic margarita with layers of tropical flavors",
            "/images/sunset-margarita.jpg",
            &[
                "2 oz Tequila",
                "1 oz Cointreau",
                "1 oz Fresh lime juice",
                "1/2 oz Mango puree",
                "1/2 oz Grenadine",
                "Salt for rim",
            ],
            &[
                "Rim glass with salt",
                "Add tequila, Cointreau, and lime juice to shaker",
                "Fill with ice and shake vigorously",
                "Strain into glass over fresh ice",
                "Slowly pour grenadine to create sunset effect",
            ],
            "Tropical",
            20,
            "gradient-to-br from-cocktail-yellow via-cocktail-orange to-cocktail-red",
        ),
        cocktail(
            "2",
            "Blue Ocean",
            "A refreshing blue cocktail that captures the essence of tropical waters",
            "/images/blue-ocean.jpg",
            &[
                "2 oz Vodka",
                "1 oz Blue Curacao",
                "1 oz Coconut cream",
                "1/2 oz Lime juice",
                "Pineapple wedge for garnish",
            ],
            &[
                "Add all ingredients to shaker",
                "Fill with ice and shake well",
                "Strain into chilled martini glass",
                "Garnish with pineapple wedge",
            ],
            "Tropical",
            18,
            "gradient-to-br from-cocktail-blue to-blue-600",
        ),
        cocktail(
            "3",
            "Emerald Garden",
            "A fresh and herbal cocktail with notes of mint and cucumber",
            "/images/emerald-garden.jpg",
            &[
                "2 oz Gin",
                "1 oz Elderflower liqueur",
                "3/4 oz Lime juice",
                "6 Mint leaves",
                "3 Cucumber slices",
                "Tonic water",
            ],
            &[
                "Muddle mint and cucumber in shaker",
                "Add gin, elderflower liqueur, and lime juice",
                "Fill with ice and shake",
                "Strain into glass with fresh ice",
                "Top with tonic water",
            ],
            "Herbal",
            15,
            "gradient-to-br from-cocktail-green to-green-600",
        ),
        cocktail(
            "4",
            "Purple Haze",
            "A mysterious and elegant cocktail with floral notes",
            "/images/purple-haze.jpg",
            &[
                "2 oz Vodka",
                "1 oz Crème de Violette",
                "1/2 oz Lemon juice",
                "1/4 oz Simple syrup",
                "Egg white",
                "Edible flower for garnish",
            ],
            &[
                "Dry shake all ingredients without ice",
                "Add ice and shake again",
                "Double strain into coupe glass",
                "Garnish with edible flower",
            ],
            "Elegant",
            22,
            "gradient-to-br from-cocktail-purple to-purple-600",
        ),
        cocktail(
            "5",
            "Golden Hour",
            "A warm and inviting cocktail perfect for sunset moments",
            "/images/golden-hour.jpg",
            &[
                "2 oz Bourbon",
                "3/4 oz Honey liqueur",
                "1/2 oz Lemon juice",
                "2 dashes Angostura bitters",
                "Orange peel",
            ],
            &[
                "Add all ingredients to shaker",
                "Fill with ice and shake",
                "Strain over large ice cube",
                "Express orange peel over drink",
                "Garnish with orange peel",
            ],
            "Classic",
            25,
            "gradient-to-br from-cocktail-yellow to-yellow-600",
        ),
        cocktail(
            "6",
            "Ruby Romance",
            "A passionate blend of berries and champagne",
            "/images/ruby-romance.jpg",
            &[
                "1 oz Vodka",
                "1/2 oz Chambord",
                "1/2 oz Lemon juice",
                "1/4 oz Simple syrup",
                "Champagne",
                "Fresh raspberries",
            ],
            &[
                "Muddle 3 raspberries in shaker",
                "Add vodka, Chambord, lemon juice, and syrup",
                "Shake with ice",
                "Strain into flute",
                "Top with champagne",
                "Garnish with raspberry",
            ],
            "Sparkling",
            12,
            "gradient-to-br from-cocktail-red to-red-600",
        ),
    ]
}
