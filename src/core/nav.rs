//! Navigation shell rules: menu state, anchor offsets, scroll-spy and the
//! floating call-to-action.

use crate::config::{NARROW_BREAKPOINT_PX, SCROLL_SPY_OFFSET_PX};

/// Mobile menu state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Value of the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// Absolute scroll offset that puts an element just below the sticky header.
///
/// `element_top` is the element's viewport-relative top.
pub fn anchor_scroll_top(element_top: f64, page_y: f64, header_height: f64) -> f64 {
    element_top + page_y - header_height
}

/// Whether an in-page link should be intercepted. A bare `#` is left alone.
pub fn is_anchor_target(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Layout of a page section, measured fresh on every scroll signal.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Section whose band contains `scroll_y`.
///
/// Each band starts `header_height + 100px` above the section top. When
/// bands overlap, the later section wins.
pub fn active_section(scroll_y: f64, header_height: f64, sections: &[SectionBand]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.offset_top - header_height - SCROLL_SPY_OFFSET_PX;
            scroll_y >= top && scroll_y < top + section.height
        })
        .map(|section| section.id.as_str())
}

/// Floating CTA rule: only on narrow viewports, and only once the reference
/// element's bottom edge has scrolled above the viewport.
pub fn floating_cta_visible(viewport_width: f64, reference_bottom: f64) -> bool {
    viewport_width < NARROW_BREAKPOINT_PX && reference_bottom < 0.0
}

/// Coalesces bursts of scroll events into one animation-frame callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    /// Returns `true` when the caller should request a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.ticking, true)
    }

    /// The frame ran.
    pub fn done(&mut self) {
        self.ticking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(id: &str, offset_top: f64, height: f64) -> SectionBand {
        SectionBand {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    #[test]
    fn test_menu_toggle() {
        let state = MenuState::default();
        assert!(!state.is_open());
        assert_eq!(state.aria_expanded(), "false");
        let state = state.toggled();
        assert!(state.is_open());
        assert_eq!(state.aria_expanded(), "true");
        assert_eq!(state.toggled(), MenuState::Closed);
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(400.0, 1000.0, 80.0), 1320.0);
        assert_eq!(anchor_scroll_top(-200.0, 1000.0, 0.0), 800.0);
    }

    #[test]
    fn test_anchor_targets() {
        assert!(is_anchor_target("#gallery"));
        assert!(!is_anchor_target("#"));
        assert!(!is_anchor_target("/about"));
    }

    #[test]
    fn test_active_section() {
        let sections = vec![
            band("hero", 0.0, 600.0),
            band("gallery", 600.0, 800.0),
            band("contact", 1400.0, 500.0),
        ];
        // Bands are shifted up by header (80) + 100.
        assert_eq!(active_section(0.0, 80.0, &sections), Some("hero"));
        assert_eq!(active_section(419.0, 80.0, &sections), Some("hero"));
        assert_eq!(active_section(420.0, 80.0, &sections), Some("gallery"));
        assert_eq!(active_section(1300.0, 80.0, &sections), Some("contact"));
        assert_eq!(active_section(5000.0, 80.0, &sections), None);
    }

    #[test]
    fn test_overlapping_bands_last_wins() {
        let sections = vec![band("a", 0.0, 1000.0), band("b", 200.0, 300.0)];
        assert_eq!(active_section(50.0, 0.0, &sections), Some("a"));
        assert_eq!(active_section(300.0, 0.0, &sections), Some("b"));
    }

    #[test]
    fn test_floating_cta() {
        assert!(floating_cta_visible(375.0, -1.0));
        assert!(!floating_cta_visible(375.0, 0.0));
        assert!(!floating_cta_visible(768.0, -500.0));
        assert!(!floating_cta_visible(1024.0, -1.0));
    }

    #[test]
    fn test_frame_throttle() {
        let mut throttle = FrameThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        throttle.done();
        assert!(throttle.request());
    }
}
