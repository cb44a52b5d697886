//! Photo gallery: category filter tabs over the grid, and the lightbox that
//! pages through whatever the filter left visible.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlImageElement, KeyboardEvent, MouseEvent, TouchEvent};

use crate::config::DEFAULT_GALLERY_FILTER;
use crate::config::selectors::{
    ACTIVE_CLASS, FILTER_TAB, GALLERY_ITEM, LIGHTBOX_CLOSE, LIGHTBOX_CURRENT_ID, LIGHTBOX_ID,
    LIGHTBOX_IMAGE, LIGHTBOX_NEXT, LIGHTBOX_PREV, LIGHTBOX_TOTAL_ID,
};
use crate::config::swipe::MAX_VERTICAL_PX;
use crate::core::error::WidgetError;
use crate::core::{FilterableGrid, Lightbox, LightboxKey, SwipeDirection, SwipeTracker};
use crate::utils::{dom, log};

const WIDGET: &str = "gallery";
const HIDDEN_CLASS: &str = "gallery-item-hidden";

struct LightboxView {
    root: Element,
    image: Option<HtmlImageElement>,
    current: Option<Element>,
    total: Option<Element>,
}

impl LightboxView {
    fn find() -> Option<Self> {
        let root = dom::by_id(LIGHTBOX_ID)?;
        Some(Self {
            image: dom::query_in(&root, LIGHTBOX_IMAGE).and_then(|e| e.dyn_into().ok()),
            current: dom::by_id(LIGHTBOX_CURRENT_ID),
            total: dom::by_id(LIGHTBOX_TOTAL_ID),
            root,
        })
    }

    fn set_total(&self, count: usize) {
        if let Some(total) = &self.total {
            total.set_text_content(Some(&count.to_string()));
        }
    }

    fn show_photo(&self, item: &Element, position: usize) {
        let source = dom::query_in(item, "img").and_then(|e| e.dyn_into::<HtmlImageElement>().ok());
        if let (Some(image), Some(source)) = (&self.image, source) {
            image.set_src(&source.src());
            image.set_alt(&source.alt());
        }
        if let Some(current) = &self.current {
            current.set_text_content(Some(&(position + 1).to_string()));
        }
    }

    fn set_open(&self, open: bool) {
        dom::set_class(&self.root, ACTIVE_CLASS, open);
        dom::set_body_scroll_locked(open);
    }
}

struct Gallery {
    grid: FilterableGrid,
    lightbox: Lightbox,
    swipe: SwipeTracker,
    items: Vec<Element>,
    tabs: Vec<Element>,
    view: Option<LightboxView>,
}

type SharedGallery = Rc<RefCell<Gallery>>;

impl Gallery {
    fn set_filter(&mut self, name: &str) {
        self.grid.set_filter(name);

        let active_tab = self
            .tabs
            .iter()
            .position(|tab| dom::data(tab, "filter").as_deref() == Some(name));
        dom::mark_active(&self.tabs, active_tab);

        for (i, item) in self.items.iter().enumerate() {
            let visible = self.grid.is_visible(i);
            if visible {
                dom::clear_style(item, "display");
            } else {
                dom::set_style(item, "display", "none");
            }
            dom::set_class(item, HIDDEN_CLASS, !visible);
        }

        if let Some(view) = &self.view {
            view.set_total(self.grid.visible().len());
        }
    }

    fn visible_len(&self) -> usize {
        self.grid.visible().len()
    }

    fn show_current(&self) {
        let position = self.lightbox.position();
        let item = self.grid.item_at(position).and_then(|i| self.items.get(i));
        if let (Some(view), Some(item)) = (&self.view, item) {
            view.show_photo(item, position);
        }
    }

    fn open(&mut self, item: usize) {
        // Hidden items have no position in the visible subset.
        let Some(position) = self.grid.visible_position(item) else {
            return;
        };
        if self.lightbox.open(position, self.visible_len()) {
            self.show_current();
            if let Some(view) = &self.view {
                view.set_open(true);
            }
        }
    }

    fn close(&mut self) {
        if self.lightbox.close()
            && let Some(view) = &self.view
        {
            view.set_open(false);
        }
    }

    fn next(&mut self) {
        let len = self.visible_len();
        if self.lightbox.next(len).is_some() {
            self.show_current();
        }
    }

    fn prev(&mut self) {
        let len = self.visible_len();
        if self.lightbox.prev(len).is_some() {
            self.show_current();
        }
    }

    fn key(&mut self, key: &str) {
        match self.lightbox.key_action(key) {
            Some(LightboxKey::Close) => self.close(),
            Some(LightboxKey::Prev) => self.prev(),
            Some(LightboxKey::Next) => self.next(),
            None => {}
        }
    }

    fn swipe_end(&mut self, x: f64, y: f64) {
        match self.swipe.end(x, y) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Prev) => self.prev(),
            None => {}
        }
    }
}

/// Bind filter tabs, grid items and the lightbox, then apply the initial filter.
pub fn init() -> Result<(), WidgetError> {
    let items = dom::query_all(GALLERY_ITEM);
    if items.is_empty() {
        return Err(WidgetError::Empty(GALLERY_ITEM));
    }
    let categories = items
        .iter()
        .map(|item| dom::data(item, "category").unwrap_or_default())
        .collect();

    let gallery: SharedGallery = Rc::new(RefCell::new(Gallery {
        grid: FilterableGrid::new(categories),
        lightbox: Lightbox::new(),
        swipe: SwipeTracker::with_vertical_limit(MAX_VERTICAL_PX),
        tabs: dom::query_all(FILTER_TAB),
        view: LightboxView::find(),
        items,
    }));

    bind_filters(&gallery)?;
    bind_items(&gallery)?;
    let has_lightbox = bind_lightbox(&gallery)?;

    gallery.borrow_mut().set_filter(DEFAULT_GALLERY_FILTER);

    let state = gallery.borrow();
    log::debug(
        WIDGET,
        &format!(
            "bound {} items, {} visible, lightbox: {has_lightbox}",
            state.grid.len(),
            state.visible_len()
        ),
    );
    Ok(())
}

fn bind_filters(gallery: &SharedGallery) -> Result<(), WidgetError> {
    let tabs = gallery.borrow().tabs.clone();
    for tab in tabs {
        let Some(name) = dom::data(&tab, "filter") else {
            continue;
        };
        let gallery = gallery.clone();
        dom::listen(&tab, "click", move |_: Event| {
            gallery.borrow_mut().set_filter(&name);
        })?;
    }
    Ok(())
}

fn bind_items(gallery: &SharedGallery) -> Result<(), WidgetError> {
    let items = gallery.borrow().items.clone();
    for (index, item) in items.iter().enumerate() {
        let gallery = gallery.clone();
        dom::listen(item, "click", move |_: Event| {
            gallery.borrow_mut().open(index);
        })?;
    }
    Ok(())
}

/// Returns `false` when the page has no lightbox.
fn bind_lightbox(gallery: &SharedGallery) -> Result<bool, WidgetError> {
    let Some(root) = gallery.borrow().view.as_ref().map(|view| view.root.clone()) else {
        return Ok(false);
    };

    if let Some(close) = dom::query_in(&root, LIGHTBOX_CLOSE) {
        let gallery = gallery.clone();
        dom::listen(&close, "click", move |_: Event| gallery.borrow_mut().close())?;
    }

    for (selector, forward) in [(LIGHTBOX_PREV, false), (LIGHTBOX_NEXT, true)] {
        if let Some(button) = dom::query_in(&root, selector) {
            let gallery = gallery.clone();
            dom::listen(&button, "click", move |event: MouseEvent| {
                event.stop_propagation();
                let mut gallery = gallery.borrow_mut();
                if forward {
                    gallery.next();
                } else {
                    gallery.prev();
                }
            })?;
        }
    }

    // Only a click on the overlay itself closes.
    {
        let gallery = gallery.clone();
        let overlay = root.clone();
        dom::listen(&root, "click", move |event: MouseEvent| {
            let on_overlay = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|target| target == overlay);
            if on_overlay {
                gallery.borrow_mut().close();
            }
        })?;
    }

    if let Some(document) = dom::document() {
        let gallery = gallery.clone();
        dom::listen(&document, "keydown", move |event: KeyboardEvent| {
            gallery.borrow_mut().key(&event.key());
        })?;
    }

    let start = gallery.clone();
    dom::listen_passive(&root, "touchstart", move |event: TouchEvent| {
        if let Some((x, y)) = dom::touch_point(&event) {
            start.borrow_mut().swipe.begin(x, y);
        }
    })?;

    let end = gallery.clone();
    dom::listen_passive(&root, "touchend", move |event: TouchEvent| {
        if let Some((x, y)) = dom::touch_point(&event) {
            end.borrow_mut().swipe_end(x, y);
        }
    })?;

    Ok(true)
}
