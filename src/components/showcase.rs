//! Feature showcase: a tab strip with matching panels.
//!
//! On narrow viewports the strip scrolls horizontally and is padded with
//! clones of the tabs at each end, so wrapping from the last tab to the
//! first scrolls forward instead of jumping back across the whole strip.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent,
};

use super::timers::{TimerHooks, TimerSlots};
use crate::config::TAB_STRIP_PADDING_PX;
use crate::config::selectors::{
    ACTIVE_CLASS, SHOWCASE_CLONE_CLASS, SHOWCASE_IMAGE, SHOWCASE_IMAGE_ACTIVE_CLASS,
    SHOWCASE_NEXT, SHOWCASE_PANEL, SHOWCASE_PREV, SHOWCASE_SECTION, SHOWCASE_TAB,
    SHOWCASE_TAB_CLASS, SHOWCASE_TABS, SHOWCASE_TRANSITION,
};
use crate::config::showcase::{IMAGE_CYCLE_MS, VISIBILITY_THRESHOLD};
use crate::core::error::WidgetError;
use crate::core::{ImageCycler, Layout, Navigation, StripSlot, TabShowcase, TimerCommand};
use crate::utils::{dom, log};

const WIDGET: &str = "showcase";

/// Tab strip elements in on-screen order: leading clones, real tabs,
/// trailing clones.
#[derive(Default)]
struct Strip {
    slots: Vec<Element>,
    clones: Vec<(usize, Element)>,
}

struct Showcase {
    state: TabShowcase,
    container: Option<Element>,
    tabs: Vec<Element>,
    panels: Vec<Element>,
    strip: Strip,
    timers: TimerSlots,
    hooks: TimerHooks,
}

type SharedShowcase = Rc<RefCell<Showcase>>;

impl Showcase {
    fn run(&mut self, commands: impl IntoIterator<Item = TimerCommand>) {
        self.timers.apply(commands, &self.hooks);
    }

    /// Rebuilds the clone padding for the current viewport width.
    fn rebuild_strip(&mut self) {
        let layout = Layout::for_strip(dom::viewport_width(), self.container.is_some());
        self.lay_out_strip(layout);
    }

    /// Replaces the clone padding with the one `layout` calls for.
    fn lay_out_strip(&mut self, layout: Layout) {
        for (_, clone) in self.strip.clones.drain(..) {
            clone.remove();
        }
        self.strip.slots.clear();

        self.state.set_layout(layout);
        let (Some(container), Some(strip)) = (self.container.clone(), self.state.strip()) else {
            return;
        };
        let Some(first) = self.tabs.first().cloned() else {
            return;
        };

        let mut before_first = true;
        for slot in strip.slots() {
            let Some(tab) = self.tabs.get(slot.target()) else {
                continue;
            };
            let StripSlot::Clone { of } = slot else {
                before_first = false;
                self.strip.slots.push(tab.clone());
                continue;
            };
            let Some(clone) = clone_tab(tab, of) else {
                continue;
            };
            let _ = if before_first {
                container.insert_before(&clone, Some(&first))
            } else {
                container.append_child(&clone)
            };
            self.strip.slots.push(clone.clone());
            self.strip.clones.push((of, clone));
        }

        dom::scroll_element_to(&container, strip_offset(&first), false);
    }

    fn scroll_to_slot(&self, position: usize, smooth: bool) {
        if let (Some(container), Some(slot)) = (&self.container, self.strip.slots.get(position)) {
            dom::scroll_element_to(container, strip_offset(slot), smooth);
        }
    }

    fn show_panel(&self, index: usize) {
        dom::mark_active(&self.panels, self.state.panel_for(index));
    }

    fn show_tab(&self, index: usize, instant: bool) {
        dom::mark_active(&self.tabs, Some(index));
        for (of, clone) in &self.strip.clones {
            dom::set_class(clone, ACTIVE_CLASS, *of == index);
        }
        self.show_panel(index);

        if self.state.scrolls_strip()
            && let Some(strip) = self.state.strip()
        {
            self.scroll_to_slot(strip.real_position(index), !instant);
        }
    }

    fn render(&mut self, navigation: Navigation, instant: bool) {
        match navigation {
            Navigation::Direct { index } => self.show_tab(index, instant),
            Navigation::Wrap {
                index,
                clone_position,
                settle_ms,
            } => {
                self.show_panel(index);
                self.scroll_to_slot(clone_position, true);
                self.run([TimerCommand::ScheduleResume {
                    delay_ms: settle_ms,
                }]);
            }
            Navigation::Blocked => {}
        }
    }

    fn interact(&mut self) {
        let command = self.state.interact();
        self.run(command);
    }

    fn select(&mut self, index: usize) {
        self.interact();
        if let Some(navigation) = self.state.activate(index) {
            self.render(navigation, false);
        }
    }

    fn step(&mut self, direction: i64) {
        self.interact();
        let navigation = self.state.navigate(direction);
        self.render(navigation, false);
    }

    fn key(&mut self, event: &KeyboardEvent) {
        self.interact();
        let focused = dom::document().and_then(|doc| doc.active_element());
        if !focused.is_some_and(|el| dom::has_class(&el, SHOWCASE_TAB_CLASS)) {
            return;
        }
        let Some(navigation) = self.state.handle_key(&event.key()) else {
            return;
        };
        event.prevent_default();
        self.render(navigation, false);
        if let Some(tab) = self.tabs.get(self.state.current()) {
            dom::focus(tab);
        }
    }

    fn tick(&mut self) {
        if let Some(navigation) = self.state.tick() {
            self.render(navigation, false);
        }
    }

    /// Settle delay after a wrap: snap from the clone to the real tab.
    fn settle(&mut self) {
        if let Some(index) = self.state.finish_transition() {
            self.show_tab(index, true);
        }
    }
}

fn strip_offset(tab: &Element) -> f64 {
    dom::offset_left(tab) - TAB_STRIP_PADDING_PX
}

fn clone_tab(tab: &Element, of: usize) -> Option<Element> {
    let clone = tab.clone_node_with_deep(true).ok()?.dyn_into::<Element>().ok()?;
    dom::set_class(&clone, SHOWCASE_CLONE_CLASS, true);
    let _ = clone.set_attribute("data-clone-of", &of.to_string());
    Some(clone)
}

fn hooks(weak: &Weak<RefCell<Showcase>>) -> TimerHooks {
    let tick = weak.clone();
    let settle = weak.clone();
    TimerHooks {
        on_tick: Rc::new(move || {
            if let Some(showcase) = tick.upgrade() {
                showcase.borrow_mut().tick();
            }
        }),
        on_resume: Rc::new(move || {
            if let Some(showcase) = settle.upgrade() {
                showcase.borrow_mut().settle();
            }
        }),
    }
}

/// Bind the tab strip, start autoplay and the panel image cyclers.
pub fn init() -> Result<(), WidgetError> {
    let tabs = dom::query_all(SHOWCASE_TAB);
    let panels = dom::query_all(SHOWCASE_PANEL);
    let features = |elements: &[Element]| {
        elements
            .iter()
            .map(|el| dom::data(el, "feature").unwrap_or_default())
            .collect::<Vec<_>>()
    };
    let state = TabShowcase::new(
        features(&tabs),
        features(&panels),
        Layout::for_width(dom::viewport_width()),
    )
    .ok_or(WidgetError::Empty(SHOWCASE_TAB))?;

    let showcase: SharedShowcase = Rc::new_cyclic(|weak| {
        RefCell::new(Showcase {
            state,
            container: dom::query(SHOWCASE_TABS),
            tabs: tabs.clone(),
            panels,
            strip: Strip::default(),
            timers: TimerSlots::default(),
            hooks: hooks(weak),
        })
    });
    showcase.borrow_mut().rebuild_strip();

    observe_visibility(&showcase);
    bind_tabs(&showcase, &tabs)?;
    bind_strip(&showcase)?;

    if let Some(window) = dom::window() {
        let showcase = showcase.clone();
        dom::listen(&window, "resize", move |_: Event| {
            showcase.borrow_mut().rebuild_strip();
        })?;
    }

    let cyclers = start_image_cyclers();

    let mut state = showcase.borrow_mut();
    let command = state.state.start_autoplay();
    state.run(command);

    log::debug(
        WIDGET,
        &format!("bound {} tabs, {cyclers} image cyclers", state.state.len()),
    );
    Ok(())
}

fn bind_tabs(showcase: &SharedShowcase, tabs: &[Element]) -> Result<(), WidgetError> {
    for (index, tab) in tabs.iter().enumerate() {
        let showcase = showcase.clone();
        dom::listen(tab, "click", move |_: Event| {
            showcase.borrow_mut().select(index);
        })?;
    }

    for (selector, direction) in [(SHOWCASE_PREV, -1), (SHOWCASE_NEXT, 1)] {
        if let Some(button) = dom::query(selector) {
            let showcase = showcase.clone();
            dom::listen(&button, "click", move |_: Event| {
                showcase.borrow_mut().step(direction);
            })?;
        }
    }
    Ok(())
}

fn bind_strip(showcase: &SharedShowcase) -> Result<(), WidgetError> {
    let Some(container) = showcase.borrow().container.clone() else {
        return Ok(());
    };

    // Clones come and go with the layout, so their clicks are delegated.
    {
        let showcase = showcase.clone();
        let clone_selector = format!(".{SHOWCASE_CLONE_CLASS}");
        dom::listen(&container, "click", move |event: Event| {
            let of = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&clone_selector).ok().flatten())
                .and_then(|clone| dom::data(&clone, "clone-of"))
                .and_then(|of| of.parse::<usize>().ok());
            if let Some(of) = of {
                showcase.borrow_mut().select(of);
            }
        })?;
    }

    // Scrolling the strip by hand counts as an interaction. Plain `scroll`
    // also fires for the strip's own wrap scrolls, so it is not used.
    for event in ["touchstart", "wheel", "pointerdown"] {
        let showcase = showcase.clone();
        dom::listen_passive(&container, event, move |_: Event| {
            showcase.borrow_mut().interact();
        })?;
    }

    let showcase = showcase.clone();
    dom::listen(&container, "keydown", move |event: KeyboardEvent| {
        showcase.borrow_mut().key(&event);
    })?;
    Ok(())
}

/// Tracks whether the section is on screen; the strip only scrolls itself
/// into position while it is.
fn observe_visibility(showcase: &SharedShowcase) {
    let Some(section) = dom::query(SHOWCASE_SECTION) else {
        return;
    };

    let weak = Rc::downgrade(showcase);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let visible = entries
            .get(0)
            .dyn_into::<IntersectionObserverEntry>()
            .is_ok_and(|entry| entry.is_intersecting());
        if let Some(showcase) = weak.upgrade() {
            showcase.borrow_mut().state.set_section_visible(visible);
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&section);
            callback.forget();
        }
        Err(_) => log::warn(WIDGET, "IntersectionObserver unavailable"),
    }
}

/// Cross-fades the images of every multi-image panel. Returns how many
/// panels cycle.
fn start_image_cyclers() -> usize {
    let mut count = 0;
    for panel in dom::query_all(SHOWCASE_TRANSITION) {
        let images = dom::query_all_in(&panel, SHOWCASE_IMAGE);
        let Some(mut cycler) = ImageCycler::new(images.len()) else {
            continue;
        };
        // Runs for the life of the page.
        let _ = Interval::new(IMAGE_CYCLE_MS, move || {
            let (previous, next) = cycler.advance();
            dom::set_class(&images[previous], SHOWCASE_IMAGE_ACTIVE_CLASS, false);
            dom::set_class(&images[next], SHOWCASE_IMAGE_ACTIVE_CLASS, true);
        })
        .forget();
        count += 1;
    }
    count
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(tag: &str) -> Element {
        dom::document().unwrap().create_element(tag).unwrap()
    }

    fn fixture(count: usize) -> Showcase {
        let container = element("div");
        let features: Vec<String> = (0..count).map(|i| format!("feature-{i}")).collect();
        let mut tabs = Vec::new();
        let mut panels = Vec::new();
        for feature in &features {
            let tab = element("button");
            tab.set_class_name(SHOWCASE_TAB_CLASS);
            tab.set_attribute("data-feature", feature).unwrap();
            container.append_child(&tab).unwrap();
            tabs.push(tab);

            let panel = element("div");
            panel.set_attribute("data-feature", feature).unwrap();
            panels.push(panel);
        }

        Showcase {
            state: TabShowcase::new(features.clone(), features, Layout::Narrow).unwrap(),
            container: Some(container),
            tabs,
            panels,
            strip: Strip::default(),
            timers: TimerSlots::default(),
            hooks: TimerHooks {
                on_tick: Rc::new(|| {}),
                on_resume: Rc::new(|| {}),
            },
        }
    }

    fn clone_count(showcase: &Showcase) -> u32 {
        let selector = format!(".{SHOWCASE_CLONE_CLASS}");
        let container = showcase.container.as_ref().unwrap();
        container.query_selector_all(&selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    fn test_wrap_shows_target_panel_before_settle() {
        let mut showcase = fixture(4);
        showcase.lay_out_strip(Layout::Narrow);
        showcase.select(3);

        let navigation = showcase.state.navigate(1);
        assert!(matches!(navigation, Navigation::Wrap { index: 0, .. }));
        showcase.render(navigation, false);

        assert!(dom::has_class(&showcase.panels[0], ACTIVE_CLASS));
        assert!(!dom::has_class(&showcase.panels[3], ACTIVE_CLASS));
        // The tab highlight follows once the scroll settles.
        assert!(dom::has_class(&showcase.tabs[3], ACTIVE_CLASS));

        showcase.settle();
        assert!(dom::has_class(&showcase.tabs[0], ACTIVE_CLASS));
        assert!(!dom::has_class(&showcase.tabs[3], ACTIVE_CLASS));
    }

    #[wasm_bindgen_test]
    fn test_strip_slots_follow_clone_layout() {
        let mut showcase = fixture(5);
        showcase.lay_out_strip(Layout::Narrow);

        assert_eq!(clone_count(&showcase), 6);
        assert_eq!(showcase.strip.slots.len(), 11);
        let container = showcase.container.as_ref().unwrap();
        let leading = container.first_element_child().unwrap();
        assert_eq!(dom::data(&leading, "clone-of").as_deref(), Some("2"));
        assert_eq!(dom::data(&showcase.strip.slots[2], "clone-of").as_deref(), Some("4"));
        assert_eq!(showcase.strip.slots[3], showcase.tabs[0]);
        assert_eq!(dom::data(&showcase.strip.slots[8], "clone-of").as_deref(), Some("0"));
    }

    #[wasm_bindgen_test]
    fn test_wide_layout_removes_clones() {
        let mut showcase = fixture(5);
        showcase.lay_out_strip(Layout::Narrow);
        assert!(clone_count(&showcase) > 0);

        showcase.lay_out_strip(Layout::Wide);
        assert_eq!(clone_count(&showcase), 0);
        assert!(showcase.strip.slots.is_empty());
        assert!(showcase.strip.clones.is_empty());
    }

    #[wasm_bindgen_test]
    fn test_missing_strip_switches_directly() {
        let mut showcase = fixture(3);
        showcase.container = None;
        showcase.rebuild_strip();

        showcase.select(2);
        let navigation = showcase.state.navigate(1);
        assert_eq!(navigation, Navigation::Direct { index: 0 });
    }

    #[wasm_bindgen_test]
    fn test_pointer_on_strip_stops_autoplay() {
        let showcase: SharedShowcase = Rc::new(RefCell::new(fixture(3)));
        let command = showcase.borrow_mut().state.start_autoplay();
        showcase.borrow_mut().run(command);
        assert!(showcase.borrow().state.is_autoplaying());

        bind_strip(&showcase).unwrap();
        let container = showcase.borrow().container.clone().unwrap();
        container
            .dispatch_event(&Event::new("pointerdown").unwrap())
            .unwrap();

        assert!(!showcase.borrow().state.is_autoplaying());
    }
}
