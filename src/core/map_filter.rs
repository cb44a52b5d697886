//! Multi-select category filter for map markers.
//!
//! The active set either contains the `all` sentinel alone or one or more
//! specific categories, never both and never neither.

use std::collections::BTreeSet;

use crate::models::MapCategory;

/// A filter control (`data-category` on `.map-filter` buttons).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    All,
    Category(MapCategory),
}

impl FilterKey {
    /// Parses a `data-category` value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(Self::All);
        }
        value.parse().ok().map(Self::Category)
    }
}

/// Active marker filter set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerFilter {
    active: BTreeSet<FilterKey>,
}

impl MarkerFilter {
    /// Starts with only `all` active.
    pub fn new() -> Self {
        Self {
            active: BTreeSet::from([FilterKey::All]),
        }
    }

    /// Applies a click on a filter control.
    pub fn select(&mut self, key: FilterKey) {
        match key {
            FilterKey::All => {
                self.active.clear();
                self.active.insert(FilterKey::All);
            }
            FilterKey::Category(_) => {
                self.active.remove(&FilterKey::All);
                if !self.active.remove(&key) {
                    self.active.insert(key);
                }
                if self.active.is_empty() {
                    self.active.insert(FilterKey::All);
                }
            }
        }
    }

    /// Whether a filter control should be marked active.
    pub fn is_active(&self, key: FilterKey) -> bool {
        self.active.contains(&key)
    }

    /// Active keys in a stable order.
    #[cfg(test)]
    pub fn active(&self) -> impl Iterator<Item = FilterKey> + '_ {
        self.active.iter().copied()
    }

    /// Whether a marker of `category` is shown. The property marker is
    /// always shown.
    pub fn is_visible(&self, category: MapCategory) -> bool {
        category == MapCategory::Property
            || self.active.contains(&FilterKey::All)
            || self.active.contains(&FilterKey::Category(category))
    }
}

impl Default for MarkerFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(filter: &MarkerFilter) -> Vec<FilterKey> {
        filter.active().collect()
    }

    #[test]
    fn test_starts_with_all() {
        let filter = MarkerFilter::new();
        assert_eq!(active(&filter), vec![FilterKey::All]);
        for category in MapCategory::ALL {
            assert!(filter.is_visible(category));
        }
    }

    #[test]
    fn test_toggle_twice_returns_to_all() {
        let mut filter = MarkerFilter::new();
        let coffee = FilterKey::Category(MapCategory::Coffee);

        filter.select(coffee);
        assert_eq!(active(&filter), vec![coffee]);

        filter.select(coffee);
        assert_eq!(active(&filter), vec![FilterKey::All]);
    }

    #[test]
    fn test_union_of_categories() {
        let mut filter = MarkerFilter::new();
        filter.select(FilterKey::Category(MapCategory::Coffee));
        filter.select(FilterKey::Category(MapCategory::Parks));

        assert!(filter.is_visible(MapCategory::Coffee));
        assert!(filter.is_visible(MapCategory::Parks));
        assert!(!filter.is_visible(MapCategory::Dining));
        assert!(!filter.is_active(FilterKey::All));
    }

    #[test]
    fn test_property_always_visible() {
        let mut filter = MarkerFilter::new();
        filter.select(FilterKey::Category(MapCategory::Transit));
        assert!(filter.is_visible(MapCategory::Property));
    }

    #[test]
    fn test_all_clears_selection() {
        let mut filter = MarkerFilter::new();
        filter.select(FilterKey::Category(MapCategory::Dining));
        filter.select(FilterKey::Category(MapCategory::Nightlife));
        filter.select(FilterKey::All);
        assert_eq!(active(&filter), vec![FilterKey::All]);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!(FilterKey::parse("all"), Some(FilterKey::All));
        assert_eq!(
            FilterKey::parse("parks"),
            Some(FilterKey::Category(MapCategory::Parks))
        );
        assert_eq!(FilterKey::parse("museums"), None);
    }
}
