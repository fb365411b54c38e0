use crate::domain::a001_platform::Platform;
use crate::shared::list_utils::{Collator, Searchable, Sortable};
use std::cmp::Ordering;

/// Prefix selecting tag search, e.g. `+c&c`.
pub const TAG_PREFIX: char = '+';
/// Prefix selecting category search, e.g. `#storage`.
pub const CATEGORY_PREFIX: char = '#';

/// Interpreted content of the search field.
///
/// Needles are stored lowercased; matching is substring-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    All,
    Tag(String),
    Category(String),
    General(String),
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let term = raw.to_lowercase();
        let term = term.trim();

        if term.is_empty() {
            SearchQuery::All
        } else if let Some(rest) = term.strip_prefix(TAG_PREFIX) {
            SearchQuery::Tag(rest.to_string())
        } else if let Some(rest) = term.strip_prefix(CATEGORY_PREFIX) {
            SearchQuery::Category(rest.to_string())
        } else {
            SearchQuery::General(term.to_string())
        }
    }

    /// Search field text that selects `tag`.
    pub fn for_tag(tag: &str) -> String {
        format!("{}{}", TAG_PREFIX, tag.trim().to_lowercase())
    }

    /// Search field text that selects `category`.
    pub fn for_category(category: &str) -> String {
        format!("{}{}", CATEGORY_PREFIX, category.trim().to_lowercase())
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_tag_contains(platform: &Platform, needle: &str) -> bool {
    platform.tags.iter().any(|tag| contains_ci(tag, needle))
}

impl Searchable<SearchQuery> for Platform {
    fn matches_filter(&self, query: &SearchQuery) -> bool {
        match query {
            SearchQuery::All => true,
            SearchQuery::Tag(needle) => any_tag_contains(self, needle),
            SearchQuery::Category(needle) => contains_ci(&self.category, needle),
            SearchQuery::General(needle) => {
                contains_ci(&self.name, needle)
                    || contains_ci(&self.free_tier, needle)
                    || contains_ci(&self.category, needle)
                    || any_tag_contains(self, needle)
            }
        }
    }
}

impl Sortable for Platform {
    fn compare_by_field(&self, other: &Self, field: &str, collator: &dyn Collator) -> Ordering {
        match field {
            "name" => collator.compare(&self.name, &other.name),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modes() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::All);
        assert_eq!(SearchQuery::parse("   \t"), SearchQuery::All);
        assert_eq!(SearchQuery::parse("  +Free Tier "), SearchQuery::Tag("free tier".into()));
        assert_eq!(SearchQuery::parse("#Storage"), SearchQuery::Category("storage".into()));
        assert_eq!(SearchQuery::parse(" GitHub"), SearchQuery::General("github".into()));
        assert_eq!(SearchQuery::parse("+"), SearchQuery::Tag(String::new()));
    }

    #[test]
    fn test_only_name_is_a_sort_field() {
        use crate::shared::list_utils::DefaultCollator;
        let a = Platform::new("Alpha", "w", "Zeta", "f");
        let b = Platform::new("Beta", "w", "Eta", "f");
        assert_eq!(a.compare_by_field(&b, "name", &DefaultCollator), Ordering::Less);
        assert_eq!(a.compare_by_field(&b, "category", &DefaultCollator), Ordering::Equal);
    }

    #[test]
    fn test_for_tag_and_category() {
        assert_eq!(SearchQuery::for_tag(" C&C "), "+c&c");
        assert_eq!(SearchQuery::for_category("Communication"), "#communication");
    }

    #[test]
    fn test_general_matches_each_field() {
        let p = Platform::new("Mega", "https://mega.nz", "Storage", "20GB free")
            .with_tags(["Exfiltration"]);
        assert!(p.matches_filter(&SearchQuery::parse("meg")));
        assert!(p.matches_filter(&SearchQuery::parse("20gb")));
        assert!(p.matches_filter(&SearchQuery::parse("STOR")));
        assert!(p.matches_filter(&SearchQuery::parse("exfil")));
        assert!(!p.matches_filter(&SearchQuery::parse("mega.nz")));
    }

    #[test]
    fn test_tag_search_ignores_other_fields() {
        let p = Platform::new("Trial Co", "w", "Storage", "f").with_tags(["Download"]);
        assert!(!p.matches_filter(&SearchQuery::parse("+trial")));
        assert!(p.matches_filter(&SearchQuery::parse("+down")));
    }

    #[test]
    fn test_empty_tag_needle_requires_a_tag() {
        let tagged = Platform::new("A", "w", "c", "f").with_tags(["x"]);
        let untagged = Platform::new("B", "w", "c", "f");
        let query = SearchQuery::parse("+");
        assert!(tagged.matches_filter(&query));
        assert!(!untagged.matches_filter(&query));
    }
}
