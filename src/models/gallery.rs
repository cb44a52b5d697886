//! Photo gallery filter categories.

use std::fmt;
use std::str::FromStr;

/// A gallery filter tab (`data-filter`).
///
/// Filters map onto the per-photo `data-category` tags; one filter may
/// cover several tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GalleryFilter {
    All,
    Bedrooms,
    Bathrooms,
    KitchenLiving,
    Exterior,
}

impl GalleryFilter {
    /// Every filter, in tab order.
    pub const ALL: [GalleryFilter; 5] = [
        Self::All,
        Self::Bedrooms,
        Self::Bathrooms,
        Self::KitchenLiving,
        Self::Exterior,
    ];

    /// The `data-filter` value of this filter.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::KitchenLiving => "kitchen-living",
            Self::Exterior => "exterior",
        }
    }

    /// Whether a photo tagged `category` passes this filter.
    pub fn matches(self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Bedrooms => category == "bedroom",
            Self::Bathrooms => category == "bathroom",
            Self::KitchenLiving => matches!(category, "kitchen" | "living"),
            Self::Exterior => category == "exterior",
        }
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown `data-filter` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl FromStr for GalleryFilter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.name() == s)
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for filter in GalleryFilter::ALL {
            assert_eq!(filter.name().parse::<GalleryFilter>(), Ok(filter));
        }
        assert!("kitchen".parse::<GalleryFilter>().is_err());
    }

    #[test]
    fn test_composite_filter() {
        assert!(GalleryFilter::KitchenLiving.matches("kitchen"));
        assert!(GalleryFilter::KitchenLiving.matches("living"));
        assert!(!GalleryFilter::KitchenLiving.matches("bedroom"));
    }

    #[test]
    fn test_all_matches_anything() {
        assert!(GalleryFilter::All.matches("bedroom"));
        assert!(GalleryFilter::All.matches(""));
    }
}
