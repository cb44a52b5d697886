//! Application configuration.
//!
//! Centralizes all configuration constants used by the page widgets.
//! Static data assets are loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Nearby attractions shown on the neighborhood map.
pub const ATTRACTIONS_JSON: &str = include_str!("../assets/data/attractions.json");

// =============================================================================
// Layout
// =============================================================================

/// Viewport width (px) at and above which the desktop layout applies.
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

/// Horizontal padding (px) of the showcase tab strip.
pub const TAB_STRIP_PADDING_PX: f64 = 16.0;

/// Extra offset (px) subtracted from section tops when computing scroll-spy bands.
pub const SCROLL_SPY_OFFSET_PX: f64 = 100.0;

// =============================================================================
// Gestures
// =============================================================================

/// Swipe gesture thresholds.
pub mod swipe {
    /// Minimum horizontal travel (px) for a swipe to count.
    pub const THRESHOLD_PX: f64 = 50.0;
    /// Maximum vertical travel (px) for a lightbox swipe to count.
    pub const MAX_VERTICAL_PX: f64 = 100.0;
}

// =============================================================================
// Timers (milliseconds)
// =============================================================================

/// Hero carousel timings.
pub mod hero {
    /// Autoplay advance period.
    pub const AUTOPLAY_MS: u32 = 5000;
    /// Quiet period after manual navigation before autoplay restarts.
    pub const RESTART_MS: u32 = 10_000;
}

/// Neighborhood slideshow timings.
pub mod neighborhood {
    /// Autoplay advance period.
    pub const AUTOPLAY_MS: u32 = 4000;
    /// Delay after touch-end before autoplay resumes.
    pub const TOUCH_RESUME_MS: u32 = 1000;
}

/// Feature showcase timings.
pub mod showcase {
    /// Autoplay advance period.
    pub const AUTOPLAY_MS: u32 = 4000;
    /// Settle delay before snapping from a clone to the real tab.
    pub const SETTLE_MS: u32 = 350;
    /// Image cycle period inside multi-image panels.
    pub const IMAGE_CYCLE_MS: u32 = 3000;
    /// Maximum number of clones placed at each end of the strip.
    pub const MAX_CLONES: usize = 3;
    /// Fraction of the section that must be visible to count as on screen.
    pub const VISIBILITY_THRESHOLD: f64 = 0.1;
}

/// Map loading timings.
pub mod maps {
    /// Time the Maps API has to become ready before the fallback renders.
    pub const FALLBACK_TIMEOUT_MS: u32 = 5000;
    /// Poll period while the location map waits for the Maps API.
    pub const POLL_MS: u32 = 500;
}

// =============================================================================
// Gallery
// =============================================================================

/// Filter selected when the page loads.
pub const DEFAULT_GALLERY_FILTER: &str = "bedrooms";

// =============================================================================
// Map Configuration
// =============================================================================

/// Property address shown as the marker title.
pub const PROPERTY_TITLE: &str = "1604 Walnut View Dr";

/// Property coordinates (latitude, longitude).
pub const PROPERTY_POSITION: (f64, f64) = (35.2364, -80.8600);

/// Initial map zoom level.
pub const MAP_ZOOM: u8 = 15;

/// Outbound link used by the static map fallback.
pub const MAPS_FALLBACK_URL: &str =
    "https://www.google.com/maps/place/1604+Walnut+View+Dr,+Charlotte,+NC+28208";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default, matches the site's inline SVGs)
/// - `Bootstrap` - Slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Icon theme used by rendered fallback content.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

// =============================================================================
// Contact Form
// =============================================================================

/// Contact form messages.
pub mod contact {
    /// Submit button label while the request is in flight.
    pub const SENDING_LABEL: &str = "Sending...";
    /// Alert shown when submission fails.
    pub const FAILURE_ALERT: &str =
        "There was an error submitting the form. Please try again or contact us directly.";
}

// =============================================================================
// DOM Contract
// =============================================================================

/// Selectors and element ids the widgets bind to.
pub mod selectors {
    pub const GALLERY_ITEM: &str = ".gallery-item";
    pub const FILTER_TAB: &str = ".filter-tab";
    pub const LIGHTBOX_ID: &str = "lightbox";
    pub const LIGHTBOX_IMAGE: &str = ".lightbox-image";
    pub const LIGHTBOX_CLOSE: &str = ".lightbox-close";
    pub const LIGHTBOX_PREV: &str = ".lightbox-prev";
    pub const LIGHTBOX_NEXT: &str = ".lightbox-next";
    pub const LIGHTBOX_CURRENT_ID: &str = "lightbox-current";
    pub const LIGHTBOX_TOTAL_ID: &str = "lightbox-total";

    pub const HERO: &str = ".hero-carousel";
    pub const HERO_TRACK: &str = ".hero-carousel-track";
    pub const HERO_SLIDE: &str = ".hero-carousel-slide";
    pub const HERO_DOT: &str = ".hero-carousel-dot";
    pub const HERO_DOTS: &str = ".hero-carousel-dots";
    pub const HERO_NAV: &str = ".hero-carousel-nav";
    pub const HERO_PREV: &str = ".hero-carousel-prev";
    pub const HERO_NEXT: &str = ".hero-carousel-next";

    pub const NEIGHBORHOOD: &str = ".neighborhood-slideshow";
    pub const NEIGHBORHOOD_DOTS: &str = ".neighborhood-slideshow-dots";
    pub const NEIGHBORHOOD_DOT_CLASS: &str = "neighborhood-slideshow-dot";

    pub const SHOWCASE_SECTION: &str = ".showcase-section";
    pub const SHOWCASE_TABS: &str = ".showcase-tabs";
    pub const SHOWCASE_TAB: &str = ".showcase-tab";
    pub const SHOWCASE_TAB_CLASS: &str = "showcase-tab";
    pub const SHOWCASE_PANEL: &str = ".showcase-panel";
    pub const SHOWCASE_CLONE_CLASS: &str = "showcase-tab-clone";
    pub const SHOWCASE_PREV: &str = ".showcase-prev";
    pub const SHOWCASE_NEXT: &str = ".showcase-next";
    pub const SHOWCASE_TRANSITION: &str = ".showcase-transition";
    pub const SHOWCASE_IMAGE: &str = ".showcase-image";
    pub const SHOWCASE_IMAGE_ACTIVE_CLASS: &str = "showcase-img-active";

    pub const MAP_ID: &str = "map";
    pub const MAP_FILTER: &str = ".map-filter";
    pub const LOCATION_MAP_ID: &str = "location-map";

    pub const MENU_TOGGLE: &str = ".menu-toggle";
    pub const MOBILE_NAV: &str = ".mobile-nav";
    pub const MOBILE_NAV_OVERLAY: &str = ".mobile-nav-overlay";
    pub const MOBILE_NAV_CLOSE: &str = ".mobile-nav-close";
    pub const MOBILE_NAV_LINK: &str = ".mobile-nav-link";
    pub const NAV_LINK: &str = ".nav-link";
    pub const NAV_AND_FOOTER_LINKS: &str = ".nav-link, .footer-link";
    pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
    pub const SITE_HEADER: &str = ".site-header";
    pub const SECTIONS: &str = "section[id]";
    pub const FLOATING_CTA: &str = ".floating-cta";
    pub const HERO_SCHEDULE_BTN_ID: &str = "hero-schedule-btn";
    pub const CONTACT_FORM_ID: &str = "contact-form";
    pub const FORM_SUCCESS_ID: &str = "form-success";
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const SHOW_ALL_BUSINESSES_ID: &str = "show-all-businesses";
    pub const HIDDEN_BUSINESS_CARD: &str = ".business-card-hidden";
    pub const HIDDEN_BUSINESS_CARD_CLASS: &str = "business-card-hidden";

    /// Class toggled on the currently selected element of a group.
    pub const ACTIVE_CLASS: &str = "active";
}
