//! Query normalization and the search predicate.

use crate::models::Item;

/// Upper bound on results returned by a single search
pub const MAX_RESULTS: usize = 10;

/// Document fields searched for the query text
pub const SEARCH_FIELDS: [&str; 5] = ["name", "location", "room", "category", "description"];

/// Trim surrounding whitespace and lowercase.
///
/// An empty result means there is nothing to search for.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Pick the owner identifier: the query parameter when non-empty, else the
/// header when non-empty.
pub fn resolve_owner(param: Option<&str>, header: Option<&str>) -> Option<String> {
    param
        .filter(|value| !value.is_empty())
        .or_else(|| header.filter(|value| !value.is_empty()))
        .map(str::to_owned)
}

/// A search to execute: normalized text plus an optional owner scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    /// Normalized, non-empty search text
    pub text: String,
    /// Restrict results to this owner; `None` searches every owner
    pub owner: Option<String>,
}

impl ItemQuery {
    pub fn new(text: impl Into<String>, owner: Option<String>) -> Self {
        Self {
            text: text.into(),
            owner,
        }
    }

    /// Whether `item` satisfies this query.
    ///
    /// The owner must match exactly when set, and at least one of
    /// [`SEARCH_FIELDS`] must contain the text, ignoring case.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(ref owner) = self.owner {
            if item.user_id != *owner {
                return false;
            }
        }

        let needle = self.text.to_lowercase();
        [
            Some(item.name.as_str()),
            Some(item.location.as_str()),
            item.room.as_deref(),
            item.category.as_deref(),
            item.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Kitchen "), "kitchen");
        assert_eq!(normalize_query("BOX"), "box");
        assert_eq!(normalize_query("   \t\n"), "");
        assert_eq!(normalize_query(""), "");
    }

    #[test]
    fn test_resolve_owner_prefers_non_empty_param() {
        assert_eq!(resolve_owner(Some("u1"), Some("u2")), Some("u1".to_string()));
        assert_eq!(resolve_owner(Some(""), Some("u2")), Some("u2".to_string()));
        assert_eq!(resolve_owner(None, Some("u2")), Some("u2".to_string()));
        assert_eq!(resolve_owner(None, Some("")), None);
        assert_eq!(resolve_owner(None, None), None);
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        let item = Item::new("cardboard box", "Attic", "u1");
        assert!(ItemQuery::new("box", None).matches(&item));
        assert!(ItemQuery::new("board", None).matches(&item));
        assert!(!ItemQuery::new("crate", None).matches(&item));
    }

    #[test]
    fn test_matches_optional_fields() {
        let item = Item::new("Drill", "Garage", "u1")
            .with_room("Workshop")
            .with_category("Tools")
            .with_description("Cordless, 18V");

        assert!(ItemQuery::new("workshop", None).matches(&item));
        assert!(ItemQuery::new("tools", None).matches(&item));
        assert!(ItemQuery::new("cordless", None).matches(&item));
        assert!(ItemQuery::new("garage", None).matches(&item));
    }

    #[test]
    fn test_matches_respects_owner() {
        let item = Item::new("Kitchen Table", "Kitchen", "u1");
        assert!(ItemQuery::new("kitchen", Some("u1".into())).matches(&item));
        assert!(!ItemQuery::new("kitchen", Some("u2".into())).matches(&item));
    }

    #[test]
    fn test_matches_treats_metacharacters_literally() {
        let item = Item::new("Box (large)", "Attic", "u1");
        assert!(ItemQuery::new("(large)", None).matches(&item));
        assert!(!ItemQuery::new("b.x", None).matches(&item));
    }
}
