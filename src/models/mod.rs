//! Data models and types for the page widgets.
//!
//! Contains domain types for:
//! - [`GalleryFilter`] - Photo gallery filter tabs
//! - [`MapCategory`], [`Attraction`], [`LatLng`] - Neighborhood map data

mod gallery;
mod map;

pub use gallery::GalleryFilter;
pub use map::{Attraction, LatLng, MapCategory, load_attractions};
