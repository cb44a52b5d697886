//! DOM widgets bound onto the server-rendered page.
//!
//! - [`gallery`] - Filterable photo grid and lightbox
//! - [`hero`] - Hero carousel
//! - [`neighborhood`] - Neighborhood photo slideshow
//! - [`showcase`] - Feature tab showcase with panel image cycling
//! - [`map`] - Neighborhood map with category filters
//! - [`location`] - Location section map
//! - [`nav`] - Menu, anchors, scroll-spy, floating CTA
//! - [`contact`] - Contact form submission
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod contact;
pub mod gallery;
pub mod hero;
pub mod icons;
pub mod location;
pub mod map;
pub mod neighborhood;
pub mod nav;
pub mod showcase;
mod timers;

use crate::core::error::WidgetError;
use crate::utils::log;

/// Binds every widget whose markup is on the page.
///
/// Widgets are independent: one that is missing or fails to bind is logged
/// and skipped.
pub fn init_all() {
    let widgets: [(&str, fn() -> Result<(), WidgetError>); 8] = [
        ("nav", nav::init),
        ("hero", hero::init),
        ("gallery", gallery::init),
        ("neighborhood", neighborhood::init),
        ("showcase", showcase::init),
        ("map", map::init),
        ("location", location::init),
        ("contact", contact::init),
    ];

    for (name, init) in widgets {
        if let Err(e) = init() {
            log::debug(name, &format!("skipped: {e}"));
        }
    }
}
