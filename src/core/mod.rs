//! Core widget logic, independent of the DOM.
//!
//! This module provides:
//! - [`FilterableGrid`] and [`Lightbox`] for the photo gallery
//! - [`Carousel`] for the hero carousel and neighborhood slideshow
//! - [`TabShowcase`] and [`CloneStrip`] for the feature showcase
//! - [`MarkerFilter`] for map marker categories
//! - [`nav`] rules for menu, scroll-spy and the floating CTA
//! - [`contact`] form submission flow
//! - [`TaskSlot`] and [`TimerCommand`] timer bookkeeping

pub mod carousel;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod index;
pub mod map_filter;
pub mod nav;
pub mod scheduler;
pub mod showcase;

pub use carousel::{Carousel, CarouselConfig};
pub use gallery::{FilterableGrid, Lightbox, LightboxKey};
pub use gesture::{SwipeDirection, SwipeTracker};
pub use map_filter::{FilterKey, MarkerFilter};
pub use scheduler::{TaskSlot, TimerCommand};
pub use showcase::{ImageCycler, Layout, Navigation, StripSlot, TabShowcase};
