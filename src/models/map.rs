//! Neighborhood map data: marker categories and attractions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ATTRACTIONS_JSON;
use crate::core::error::MapError;

/// Category of a map marker (`data-category` on the filter buttons).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MapCategory {
    Property,
    Coffee,
    Dining,
    Nightlife,
    Transit,
    Parks,
    Entertainment,
    Community,
}

impl MapCategory {
    pub const ALL: [MapCategory; 8] = [
        Self::Property,
        Self::Coffee,
        Self::Dining,
        Self::Nightlife,
        Self::Transit,
        Self::Parks,
        Self::Entertainment,
        Self::Community,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Coffee => "coffee",
            Self::Dining => "dining",
            Self::Nightlife => "nightlife",
            Self::Transit => "transit",
            Self::Parks => "parks",
            Self::Entertainment => "entertainment",
            Self::Community => "community",
        }
    }

    /// Marker fill color.
    pub fn color(self) -> &'static str {
        match self {
            Self::Property => "#B08D5B",
            Self::Coffee => "#8B4513",
            Self::Dining => "#DC143C",
            Self::Nightlife => "#4B0082",
            Self::Transit => "#228B22",
            Self::Parks => "#32CD32",
            Self::Entertainment => "#FF6347",
            Self::Community => "#6B8E23",
        }
    }
}

impl fmt::Display for MapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapCategory {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| MapError::InvalidData(format!("unknown category `{s}`")))
    }
}

/// Geographic position, serialized the way the Maps API expects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// A nearby point of interest.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub category: MapCategory,
    pub distance: String,
    pub walk_time: String,
}

impl Attraction {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Parses the attraction list bundled with the binary.
pub fn load_attractions() -> Result<Vec<Attraction>, MapError> {
    parse_attractions(ATTRACTIONS_JSON)
}

fn parse_attractions(json: &str) -> Result<Vec<Attraction>, MapError> {
    serde_json::from_str(json).map_err(|e| MapError::InvalidData(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_attractions_parse() {
        let attractions = load_attractions().unwrap();
        assert_eq!(attractions.len(), 15);
        assert!(attractions
            .iter()
            .all(|a| a.category != MapCategory::Property));
        assert!(attractions
            .iter()
            .any(|a| a.name == "Town Brewing" && a.category == MapCategory::Nightlife));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"[{"name":"x","address":"y","lat":0,"lng":0,"category":"zoo","distance":"","walk_time":""}]"#;
        assert!(matches!(parse_attractions(json), Err(MapError::InvalidData(_))));
    }

    #[test]
    fn test_category_round_trip_names() {
        for category in MapCategory::ALL {
            assert_eq!(category.name().parse::<MapCategory>(), Ok(category));
        }
        assert!("all".parse::<MapCategory>().is_err());
    }
}
