//! Navigation shell: mobile menu, in-page anchor scrolling, scroll-spy,
//! the floating call-to-action and the "show all businesses" reveal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Element, Event, MouseEvent};

use crate::config::selectors::{
    ACTIVE_CLASS, ANCHOR_LINKS, FLOATING_CTA, HERO_SCHEDULE_BTN_ID, HIDDEN_BUSINESS_CARD,
    HIDDEN_BUSINESS_CARD_CLASS, MENU_TOGGLE, MOBILE_NAV, MOBILE_NAV_CLOSE, MOBILE_NAV_LINK,
    MOBILE_NAV_OVERLAY, NAV_AND_FOOTER_LINKS, NAV_LINK, SECTIONS, SHOW_ALL_BUSINESSES_ID,
    SITE_HEADER,
};
use crate::core::error::WidgetError;
use crate::core::nav::{
    FrameThrottle, MenuState, SectionBand, active_section, anchor_scroll_top,
    floating_cta_visible, is_anchor_target,
};
use crate::utils::{dom, log};

const WIDGET: &str = "nav";
const CTA_VISIBLE_CLASS: &str = "visible";

fn header_height() -> f64 {
    dom::query(SITE_HEADER).map_or(0.0, |header| dom::offset_height(&header))
}

// =============================================================================
// Mobile Menu
// =============================================================================

struct Menu {
    state: Cell<MenuState>,
    toggle: Element,
    nav: Option<Element>,
    overlay: Option<Element>,
}

impl Menu {
    fn set(&self, state: MenuState) {
        self.state.set(state);
        let open = state.is_open();
        for element in [Some(&self.toggle), self.nav.as_ref(), self.overlay.as_ref()]
            .into_iter()
            .flatten()
        {
            dom::set_class(element, ACTIVE_CLASS, open);
        }
        let _ = self.toggle.set_attribute("aria-expanded", state.aria_expanded());
        dom::set_body_scroll_locked(open);
    }

    fn toggle(&self) {
        self.set(self.state.get().toggled());
    }

    fn close(&self) {
        self.set(MenuState::Closed);
    }
}

fn bind_menu() -> Result<(), WidgetError> {
    let menu = Rc::new(Menu {
        state: Cell::new(MenuState::Closed),
        toggle: dom::require(MENU_TOGGLE)?,
        nav: dom::query(MOBILE_NAV),
        overlay: dom::query(MOBILE_NAV_OVERLAY),
    });

    {
        let toggle = menu.toggle.clone();
        let menu = menu.clone();
        dom::listen(&toggle, "click", move |_: Event| menu.toggle())?;
    }

    let closers = [menu.overlay.clone(), dom::query(MOBILE_NAV_CLOSE)]
        .into_iter()
        .flatten()
        .chain(dom::query_all(MOBILE_NAV_LINK));
    for closer in closers {
        let menu = menu.clone();
        dom::listen(&closer, "click", move |_: Event| menu.close())?;
    }
    Ok(())
}

// =============================================================================
// Anchor Links
// =============================================================================

fn bind_anchors() -> Result<usize, WidgetError> {
    let links = dom::query_all(ANCHOR_LINKS);
    for link in &links {
        let anchor = link.clone();
        dom::listen(link, "click", move |event: MouseEvent| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if !is_anchor_target(&href) {
                return;
            }
            let Some(target) = dom::query(&href) else {
                return;
            };
            event.prevent_default();
            let top = anchor_scroll_top(
                target.get_bounding_client_rect().top(),
                dom::scroll_y(),
                header_height(),
            );
            dom::scroll_window_to(top, true);
        })?;
    }
    Ok(links.len())
}

// =============================================================================
// Scroll-Spy and Floating CTA
// =============================================================================

struct ScrollWatch {
    sections: Vec<Element>,
    links: Vec<Element>,
    cta: Option<Element>,
    cta_reference: Option<Element>,
    throttle: RefCell<FrameThrottle>,
}

impl ScrollWatch {
    fn update_active_link(&self) {
        let bands = self
            .sections
            .iter()
            .filter_map(|section| {
                Some(SectionBand {
                    id: section.get_attribute("id")?,
                    offset_top: dom::offset_top(section),
                    height: dom::offset_height(section),
                })
            })
            .collect::<Vec<_>>();

        // No match leaves the current highlight alone.
        let Some(id) = active_section(dom::scroll_y(), header_height(), &bands) else {
            return;
        };
        let href = format!("#{id}");
        for link in &self.links {
            let is_target = link.matches(NAV_LINK).unwrap_or(false)
                && link.get_attribute("href").as_deref() == Some(href.as_str());
            dom::set_class(link, ACTIVE_CLASS, is_target);
        }
    }

    fn update_cta(&self) {
        let (Some(cta), Some(reference)) = (&self.cta, &self.cta_reference) else {
            return;
        };
        let visible = floating_cta_visible(
            dom::viewport_width(),
            reference.get_bounding_client_rect().bottom(),
        );
        dom::set_class(cta, CTA_VISIBLE_CLASS, visible);
    }

    fn refresh(&self) {
        self.update_active_link();
        self.update_cta();
    }

    /// Queues a refresh for the next frame unless one is already queued.
    fn schedule(self: &Rc<Self>) {
        if !self.throttle.borrow_mut().request() {
            return;
        }
        let watch = self.clone();
        dom::request_animation_frame(move || {
            watch.refresh();
            watch.throttle.borrow_mut().done();
        });
    }
}

fn bind_scroll_watch() -> Result<(), WidgetError> {
    let window = dom::window().ok_or(WidgetError::NoDocument)?;
    let watch = Rc::new(ScrollWatch {
        sections: dom::query_all(SECTIONS),
        links: dom::query_all(NAV_AND_FOOTER_LINKS),
        cta: dom::query(FLOATING_CTA),
        cta_reference: dom::by_id(HERO_SCHEDULE_BTN_ID),
        throttle: RefCell::new(FrameThrottle::default()),
    });

    for event in ["scroll", "resize"] {
        let watch = watch.clone();
        dom::listen_passive(&window, event, move |_: Event| watch.schedule())?;
    }

    log::debug(WIDGET, &format!("watching {} sections", watch.sections.len()));
    Ok(())
}

// =============================================================================
// Business Reveal
// =============================================================================

fn bind_business_reveal() -> Result<(), WidgetError> {
    let button = dom::require_id(SHOW_ALL_BUSINESSES_ID)?;
    let cards = dom::query_all(HIDDEN_BUSINESS_CARD);
    let clicked = button.clone();
    dom::listen(&button, "click", move |_: Event| {
        for card in &cards {
            dom::set_class(card, HIDDEN_BUSINESS_CARD_CLASS, false);
        }
        dom::set_style(&clicked, "display", "none");
    })
}

/// Bind every part of the shell that is present on the page.
pub fn init() -> Result<(), WidgetError> {
    if let Err(e) = bind_menu() {
        log::debug(WIDGET, &format!("menu skipped: {e}"));
    }
    let anchors = bind_anchors()?;
    bind_scroll_watch()?;
    if let Err(e) = bind_business_reveal() {
        log::debug(WIDGET, &format!("business reveal skipped: {e}"));
    }
    log::debug(WIDGET, &format!("bound {anchors} anchor links"));
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(tag: &str) -> Element {
        dom::document().unwrap().create_element(tag).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_refresh_updates_links_and_cta() {
        let body = dom::document().unwrap().body().unwrap();
        let section = element("section");
        section.set_id("refresh-target");
        dom::set_style(&section, "height", "2000px");
        body.insert_before(&section, body.first_child().as_ref()).unwrap();

        let reference = element("div");
        body.insert_before(&reference, body.first_child().as_ref()).unwrap();

        let active = element("a");
        active.set_class_name("nav-link");
        active.set_attribute("href", "#refresh-target").unwrap();
        let stale = element("a");
        stale.set_class_name("nav-link active");
        stale.set_attribute("href", "#elsewhere").unwrap();
        let footer = element("a");
        footer.set_class_name("footer-link");
        footer.set_attribute("href", "#refresh-target").unwrap();

        let cta = element("div");
        cta.set_class_name(CTA_VISIBLE_CLASS);

        let watch = Rc::new(ScrollWatch {
            sections: vec![section.clone()],
            links: vec![active.clone(), stale.clone(), footer.clone()],
            cta: Some(cta.clone()),
            cta_reference: Some(reference.clone()),
            throttle: RefCell::new(FrameThrottle::default()),
        });
        watch.refresh();

        assert!(dom::has_class(&active, ACTIVE_CLASS));
        assert!(!dom::has_class(&stale, ACTIVE_CLASS));
        assert!(!dom::has_class(&footer, ACTIVE_CLASS));
        // The reference is still on screen, so the CTA hides.
        assert!(!dom::has_class(&cta, CTA_VISIBLE_CLASS));

        section.remove();
        reference.remove();
    }

    #[wasm_bindgen_test]
    fn test_schedule_coalesces_until_frame_runs() {
        let watch = Rc::new(ScrollWatch {
            sections: Vec::new(),
            links: Vec::new(),
            cta: None,
            cta_reference: None,
            throttle: RefCell::new(FrameThrottle::default()),
        });
        watch.schedule();
        // A frame is pending, so further signals are dropped.
        assert!(!watch.throttle.borrow_mut().request());
    }
}
