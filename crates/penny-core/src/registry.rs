//! The ordered category catalog shared by the classifier and lookups.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use penny_domain::category::{Category, CATCH_ALL_ID};

use crate::CoreError;

type CatalogEntry = (&'static str, &'static str, &'static str, &'static [&'static str]);

/// Built-in catalog. Declaration order is the classifier's priority order.
const BUILTIN_CATALOG: &[CatalogEntry] = &[
    (
        "food",
        "Food & Dining",
        "🍔",
        &[
            "swiggy", "zomato", "uber eats", "restaurant", "cafe", "food", "pizza", "burger",
            "domino", "mcdonald", "starbucks", "kfc", "bakery", "dining",
        ],
    ),
    (
        "groceries",
        "Groceries",
        "🛒",
        &[
            "grocery", "supermarket", "bigbasket", "blinkit", "zepto", "dmart", "instacart",
            "walmart", "kirana",
        ],
    ),
    (
        "transport",
        "Transport",
        "🚗",
        &[
            "uber", "ola", "lyft", "rapido", "metro", "fuel", "petrol", "diesel", "parking",
            "taxi", "toll", "irctc", "railway",
        ],
    ),
    (
        "shopping",
        "Shopping",
        "🛍️",
        &["amazon", "flipkart", "myntra", "ajio", "nykaa", "mall", "ikea"],
    ),
    (
        "entertainment",
        "Entertainment",
        "🎬",
        &[
            "netflix", "spotify", "prime video", "hotstar", "bookmyshow", "cinema", "movie",
            "youtube premium", "steam",
        ],
    ),
    (
        "bills",
        "Bills & Utilities",
        "💡",
        &[
            "electricity", "water bill", "gas bill", "broadband", "internet", "recharge",
            "airtel", "jio", "dth", "postpaid",
        ],
    ),
    (
        "health",
        "Health",
        "💊",
        &[
            "pharmacy", "hospital", "clinic", "doctor", "apollo", "medplus", "diagnostic",
            "dental",
        ],
    ),
    (
        "education",
        "Education",
        "📚",
        &["tuition", "school", "college", "udemy", "coursera", "course", "textbook"],
    ),
    (
        "travel",
        "Travel",
        "✈️",
        &[
            "flight", "airline", "hotel", "makemytrip", "booking.com", "airbnb", "goibibo",
            "indigo",
        ],
    ),
    (
        "housing",
        "Rent & Housing",
        "🏠",
        &["rent", "landlord", "society maintenance", "housing"],
    ),
    (CATCH_ALL_ID, "Other", "📦", &[]),
];

static BUILTIN_REGISTRY: Lazy<CategoryRegistry> = Lazy::new(|| {
    let registry = CategoryRegistry::new(builtin_categories())
        .unwrap_or_else(|err| panic!("built-in category catalog is invalid: {err}"));
    tracing::info!(categories = registry.len(), "category registry initialized");
    registry
});

/// Process-wide registry, built on first access and read-only afterwards.
pub fn registry() -> &'static CategoryRegistry {
    &BUILTIN_REGISTRY
}

/// Materializes the built-in catalog in declaration order.
pub fn builtin_categories() -> Vec<Category> {
    BUILTIN_CATALOG
        .iter()
        .map(|(id, name, icon, keywords)| Category::new(*id, *name, *icon, keywords.iter()))
        .collect()
}

/// Validated, immutable, ordered category catalog.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Validates id uniqueness and the trailing keyword-less catch-all.
    pub fn new(categories: Vec<Category>) -> Result<Self, CoreError> {
        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CoreError::DuplicateCategory(category.id.clone()));
            }
        }

        let position = categories
            .iter()
            .position(Category::is_catch_all)
            .ok_or(CoreError::MissingCatchAll)?;
        if position + 1 != categories.len() {
            return Err(CoreError::CatchAllNotLast);
        }
        if !categories[position].keywords.is_empty() {
            return Err(CoreError::CatchAllHasKeywords);
        }

        let index = categories
            .iter()
            .enumerate()
            .map(|(idx, category)| (category.id.clone(), idx))
            .collect();
        Ok(Self { categories, index })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.index.get(id).map(|idx| &self.categories[*idx])
    }

    /// The fallback entry; always present and always last.
    pub fn catch_all(&self) -> &Category {
        &self.categories[self.categories.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
