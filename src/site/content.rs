//! Marketing copy and business identity for the house.

pub const BRAND: &str = "Maison Cocktail";
pub const FOUNDED: u16 = 1924;

pub const HERO_TAGLINE: &str = "L'Excellence de la Mixologie Française depuis 1924";
pub const HERO_SUB_TAGLINE: &str = "Cocktails d'Exception · Art de Vivre Parisien";
pub const HERO_CTA_PRIMARY: &str = "Découvrir Notre Collection Premium";
pub const HERO_CTA_SECONDARY: &str = "Réserver Votre Expérience Exclusive";

pub const ABOUT_TITLE: &str = "L'Art du Cocktail Réinventé";
pub const ABOUT_SUBTITLE: &str = "Une Tradition d'Excellence au Cœur de Paris";
pub const ABOUT_INTRO: &str = "Au 12 Place Vendôme, Maison Cocktail perpétue depuis un siècle l'art de la mixologie française, alliant tradition séculaire et innovation contemporaine.";

pub const ABOUT_VALUES: &[(&str, &str)] = &[
    (
        "Héritage Centenaire",
        "Depuis 1924, nos maîtres mixologues transmettent un savoir-faire unique, gardien des secrets de la mixologie française authentique.",
    ),
    (
        "Artisanat d'Excellence",
        "Chaque cocktail est une œuvre d'art, méticuleusement élaborée avec des spiritueux rares et des ingrédients d'exception sourcés localement.",
    ),
    (
        "Innovation Perpétuelle",
        "Nos laboratoires créatifs explorent constamment de nouvelles saveurs, mariant techniques ancestrales et science moderne.",
    ),
    (
        "Expérience Inoubliable",
        "Un voyage sensoriel unique dans l'univers raffiné de la haute mixologie française, où chaque détail sublime votre dégustation.",
    ),
];

pub const COLLECTION_TITLE: &str = "Collection Signature";
pub const COLLECTION_SUBTITLE: &str = "Créations Exclusives de la Maison";
pub const COLLECTION_DESCRIPTION: &str = "Découvrez notre collection de cocktails d'exception, fruit d'un siècle de passion et d'expertise en mixologie française.";

pub const FAQ: &[(&str, &str)] = &[
    (
        "Quels sont les horaires d'ouverture de Maison Cocktail ?",
        "Maison Cocktail vous accueille du mardi au vendredi de 18h à 2h, et les samedis et dimanches de 17h à 3h. Réservation recommandée.",
    ),
    (
        "Comment réserver une table chez Maison Cocktail ?",
        "Réservez directement sur notre site, par téléphone au +33 1 42 96 10 73, ou par email à contact@maisoncocktail.fr",
    ),
    (
        "Proposez-vous des événements privés ?",
        "Oui, Maison Cocktail peut être privatisé pour vos événements exclusifs. Contactez-nous pour un devis personnalisé.",
    ),
    (
        "Organisez-vous des cours de mixologie ?",
        "Nous proposons des masterclass de mixologie avec nos maîtres cocktails. Sessions privées et cours collectifs disponibles sur réservation.",
    ),
];

pub const KEYWORDS_PRIMARY: &[&str] = &[
    "cocktail Paris",
    "bar à cocktails Paris",
    "mixologie française",
    "cocktails Place Vendôme",
    "bar cocktail luxe Paris",
    "meilleur bar cocktail Paris",
];

pub const KEYWORDS_SECONDARY: &[&str] = &[
    "cocktails artisanaux Paris",
    "bar cocktail haut de gamme",
    "expérience cocktail Paris",
    "dégustation cocktails premium",
    "cocktail bar 1er arrondissement",
    "mixologie créative Paris",
];

/* (days, opens, closes) */
pub const OPENING_HOURS: &[(&[&str], &str, &str)] = &[
    (
        &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        "18:00",
        "02:00",
    ),
    (&["Saturday", "Sunday"], "17:00", "03:00"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Twitter", "https://twitter.com/MaisonCocktail"),
    ("Instagram", "https://instagram.com/maisoncocktail"),
];

/// Postal and contact details. Only the public URL varies by deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteIdentity {
    pub name: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub street_address: String,
    pub locality: String,
    pub postal_code: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl SiteIdentity {
    pub fn new(url: &str) -> Self {
        Self {
            name: BRAND.to_string(),
            url: url.trim_end_matches('/').to_string(),
            telephone: String::from("+33-1-42-96-10-73"),
            email: String::from("contact@maisoncocktail.fr"),
            street_address: String::from("12 Place Vendôme"),
            locality: String::from("Paris"),
            postal_code: String::from("75001"),
            country: String::from("FR"),
            latitude: 48.8667,
            longitude: 2.3333,
        }
    }

    /// Absolute URL for a site path.
    pub fn absolute(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}
