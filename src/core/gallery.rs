//! Filterable photo grid and its lightbox.
//!
//! The grid captures the photo categories once at start-up. Filtering
//! recomputes the *visible subset* (indices into the full item list), and
//! the lightbox navigates inside that subset.

use crate::core::index::step;
use crate::models::GalleryFilter;

// ============================================================================
// FilterableGrid
// ============================================================================

/// Category filter over a fixed, ordered set of gallery items.
#[derive(Clone, Debug)]
pub struct FilterableGrid {
    categories: Vec<String>,
    filter: Option<GalleryFilter>,
    visible: Vec<usize>,
}

impl FilterableGrid {
    /// Creates a grid with every item visible.
    pub fn new(categories: Vec<String>) -> Self {
        let visible = (0..categories.len()).collect();
        Self {
            categories,
            filter: Some(GalleryFilter::All),
            visible,
        }
    }

    /// Applies the filter named by a `data-filter` value.
    ///
    /// Unknown names hide every item.
    pub fn set_filter(&mut self, name: &str) -> &[usize] {
        self.filter = name.parse().ok();
        let filter = self.filter;
        self.visible = self
            .categories
            .iter()
            .enumerate()
            .filter(|(_, category)| filter.is_some_and(|f| f.matches(category)))
            .map(|(i, _)| i)
            .collect();
        &self.visible
    }

    #[cfg(test)]
    pub fn filter(&self) -> Option<GalleryFilter> {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Item indices currently visible, in page order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn is_visible(&self, item: usize) -> bool {
        self.visible.binary_search(&item).is_ok()
    }

    /// Position of `item` inside the visible subset.
    pub fn visible_position(&self, item: usize) -> Option<usize> {
        self.visible.binary_search(&item).ok()
    }

    /// Item index shown at `position` of the visible subset.
    pub fn item_at(&self, position: usize) -> Option<usize> {
        self.visible.get(position).copied()
    }
}

// ============================================================================
// Lightbox
// ============================================================================

/// Keyboard action while the lightbox is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Prev,
    Next,
}

impl LightboxKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Modal viewer state over a visible subset of `len` items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: bool,
    position: usize,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current position inside the visible subset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Opens at `position`. Rejects positions outside `[0, len)`.
    pub fn open(&mut self, position: usize, len: usize) -> bool {
        if position >= len {
            return false;
        }
        self.position = position;
        self.open = true;
        true
    }

    /// Closes the viewer. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Advances one photo, wrapping. `None` for an empty subset.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        self.position = step(self.position, 1, len)?;
        Some(self.position)
    }

    /// Goes back one photo, wrapping. `None` for an empty subset.
    pub fn prev(&mut self, len: usize) -> Option<usize> {
        self.position = step(self.position, -1, len)?;
        Some(self.position)
    }

    /// Maps a key press to an action; keys are ignored while closed.
    pub fn key_action(&self, key: &str) -> Option<LightboxKey> {
        if !self.open {
            return None;
        }
        LightboxKey::from_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(tags: &[&str]) -> FilterableGrid {
        FilterableGrid::new(tags.iter().map(|t| t.to_string()).collect())
    }

    const TAGS: [&str; 5] = ["bedroom", "bedroom", "bathroom", "kitchen", "exterior"];

    #[test]
    fn test_filter_matches_predicate() {
        let mut g = grid(&["bedroom", "living", "bathroom", "kitchen", "exterior", "bedroom"]);
        for filter in GalleryFilter::ALL {
            let visible = g.set_filter(filter.name()).to_vec();
            let expected: Vec<usize> = g
                .categories
                .iter()
                .enumerate()
                .filter(|(_, c)| filter.matches(c))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(visible, expected, "filter {filter}");
        }
    }

    #[test]
    fn test_all_filter_full_set() {
        let mut g = grid(&TAGS);
        assert_eq!(g.set_filter("all"), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_idempotent() {
        let mut g = grid(&TAGS);
        let first = g.set_filter("bedrooms").to_vec();
        let second = g.set_filter("bedrooms").to_vec();
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 1]);
    }

    #[test]
    fn test_unknown_filter_hides_everything() {
        let mut g = grid(&TAGS);
        assert!(g.set_filter("garage").is_empty());
        assert_eq!(g.filter(), None);
    }

    #[test]
    fn test_kitchen_living_scenario() {
        let mut g = grid(&TAGS);
        assert_eq!(g.set_filter("kitchen-living"), &[3]);
        assert_eq!(g.visible().len(), 1);

        let mut lightbox = Lightbox::new();
        let position = g.visible_position(3).unwrap();
        assert!(lightbox.open(position, g.visible().len()));
        assert_eq!(lightbox.next(g.visible().len()), Some(0));
    }

    #[test]
    fn test_hidden_item_has_no_position() {
        let mut g = grid(&TAGS);
        g.set_filter("bathrooms");
        assert_eq!(g.visible_position(0), None);
        assert_eq!(g.visible_position(2), Some(0));
        assert!(g.is_visible(2));
        assert_eq!(g.item_at(0), Some(2));
        assert_eq!(g.item_at(1), None);
    }

    #[test]
    fn test_next_prev_in_range_and_inverse() {
        for len in 1..6 {
            for start in 0..len {
                let mut lightbox = Lightbox::new();
                lightbox.open(start, len);
                let forward = lightbox.next(len).unwrap();
                assert!(forward < len);
                assert_eq!(lightbox.prev(len), Some(start));
                let back = lightbox.prev(len).unwrap();
                assert!(back < len);
            }
        }
    }

    #[test]
    fn test_navigation_on_empty_subset_is_noop() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.next(0), None);
        assert_eq!(lightbox.prev(0), None);
        assert_eq!(lightbox.position(), 0);
    }

    #[test]
    fn test_open_rejects_out_of_range() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(3, 3));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_keys_only_while_open() {
        let mut lightbox = Lightbox::new();
        assert_eq!(lightbox.key_action("Escape"), None);
        lightbox.open(0, 2);
        assert_eq!(lightbox.key_action("Escape"), Some(LightboxKey::Close));
        assert_eq!(lightbox.key_action("ArrowLeft"), Some(LightboxKey::Prev));
        assert_eq!(lightbox.key_action("ArrowRight"), Some(LightboxKey::Next));
        assert_eq!(lightbox.key_action("Enter"), None);
        assert!(lightbox.close());
        assert!(!lightbox.close());
    }
}
