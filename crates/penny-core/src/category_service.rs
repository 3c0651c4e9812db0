//! Keyword classification and id lookups over a [`CategoryRegistry`].

use penny_domain::category::Category;

use crate::CategoryRegistry;

/// Stateless classification and lookup helpers.
pub struct CategoryService;

impl CategoryService {
    /// Returns the first category (in registry order) with a keyword contained in the
    /// lower-cased `text` + `" "` + `merchant` string.
    ///
    /// Blank input and text without any keyword hit yield `None`; the catch-all is never
    /// suggested, leaving the fallback policy to the caller.
    pub fn suggest<'r>(
        registry: &'r CategoryRegistry,
        text: &str,
        merchant: Option<&str>,
    ) -> Option<&'r Category> {
        let haystack = search_text(text, merchant);
        if haystack.trim().is_empty() {
            return None;
        }

        for category in registry.iter() {
            if let Some(keyword) = category.first_match(&haystack) {
                tracing::debug!(category = %category.id, keyword, "category suggested");
                return Some(category);
            }
        }
        tracing::debug!("no category suggestion");
        None
    }

    pub fn suggest_id<'r>(
        registry: &'r CategoryRegistry,
        text: &str,
        merchant: Option<&str>,
    ) -> Option<&'r str> {
        Self::suggest(registry, text, merchant).map(|category| category.id.as_str())
    }

    pub fn by_id<'r>(registry: &'r CategoryRegistry, id: &str) -> Option<&'r Category> {
        registry.get(id)
    }

    /// Resolves an id of unknown provenance, degrading to the catch-all.
    pub fn display_of<'r>(registry: &'r CategoryRegistry, id: Option<&str>) -> &'r Category {
        id.and_then(|id| registry.get(id))
            .unwrap_or_else(|| registry.catch_all())
    }

    pub fn name_of<'r>(registry: &'r CategoryRegistry, id: &str) -> &'r str {
        &Self::display_of(registry, Some(id)).name
    }

    pub fn icon_of<'r>(registry: &'r CategoryRegistry, id: &str) -> &'r str {
        &Self::display_of(registry, Some(id)).icon
    }
}

fn search_text(text: &str, merchant: Option<&str>) -> String {
    let mut combined = String::with_capacity(text.len() + merchant.map_or(0, |m| m.len() + 1));
    combined.push_str(text);
    if let Some(merchant) = merchant {
        combined.push(' ');
        combined.push_str(merchant);
    }
    combined.to_lowercase()
}
