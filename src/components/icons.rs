//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuClock as Clock, LuExternalLink as ExternalLink, LuMapPin as Location,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsClock as Clock, BsGeoAltFill as Location,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(LOCATION, Location);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(CLOCK, Clock);

/// Renders an icon as an SVG string, for HTML handed to third-party widgets
/// outside the Leptos tree.
pub fn inline_svg(icon: Icon, size: u32) -> String {
    let attr = |name: &str, value: Option<&str>| {
        value.map_or_else(String::new, |v| format!(r#" {name}="{v}""#))
    };
    format!(
        r#"<svg width="{size}" height="{size}"{}{}{}{}{}{}>{}</svg>"#,
        attr("viewBox", icon.view_box),
        attr("fill", icon.fill),
        attr("stroke", icon.stroke),
        attr("stroke-width", icon.stroke_width),
        attr("stroke-linecap", icon.stroke_linecap),
        attr("stroke-linejoin", icon.stroke_linejoin),
        icon.data,
    )
}
