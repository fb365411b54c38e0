/// List helpers shared by the directory: search predicates, collation and sorting.
use std::cmp::Ordering;

/// Locale-aware string comparison.
///
/// The browser build plugs in `Intl` collation; native builds and tests use
/// [`DefaultCollator`].
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Case-insensitive ordering; among case variants lowercase sorts first.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCollator;

impl Collator for DefaultCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a))
    }
}

/// Types that can be matched against a parsed search query.
pub trait Searchable<Q> {
    fn matches_filter(&self, query: &Q) -> bool;
}

/// Types that can be compared by a named field.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str, collator: &dyn Collator) -> Ordering;
}

/// Sorts in place by `field`; descending is the reversed ascending comparison.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool, collator: &dyn Collator) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field, collator);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Stable filter: keeps matching items in their original relative order.
pub fn filter_list<T, Q>(items: &[T], query: &Q) -> Vec<T>
where
    T: Searchable<Q> + Clone,
{
    items
        .iter()
        .filter(|item| item.matches_filter(query))
        .cloned()
        .collect()
}
