//! Neighborhood photo slideshow.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::{Element, Event};

use super::timers::{TimerHooks, TimerSlots};
use crate::config::neighborhood::TOUCH_RESUME_MS;
use crate::config::selectors::{ACTIVE_CLASS, NEIGHBORHOOD, NEIGHBORHOOD_DOT_CLASS, NEIGHBORHOOD_DOTS};
use crate::core::error::WidgetError;
use crate::core::{Carousel, CarouselConfig, TimerCommand};
use crate::utils::{dom, log};

const WIDGET: &str = "neighborhood";

struct Slideshow {
    carousel: Carousel,
    timers: TimerSlots,
    hooks: TimerHooks,
    images: Vec<Element>,
    dots: Vec<Element>,
}

type SharedSlideshow = Rc<RefCell<Slideshow>>;

impl Slideshow {
    fn run(&mut self, commands: impl IntoIterator<Item = TimerCommand>) {
        self.timers.apply(commands, &self.hooks);
    }

    fn show(&self) {
        let index = Some(self.carousel.index());
        dom::mark_active(&self.images, index);
        dom::mark_active(&self.dots, index);
    }

    fn go_to(&mut self, index: usize) {
        let (_, commands) = self.carousel.manual_go_to(index as i64);
        self.show();
        self.run(commands);
    }

    fn pause(&mut self) {
        let commands = self.carousel.pause();
        self.run(commands);
    }

    fn resume(&mut self) {
        let command = self.carousel.resume();
        self.run(command);
    }

    fn resume_later(&mut self) {
        let command = self.carousel.resume_after(TOUCH_RESUME_MS);
        self.run([command]);
    }

    fn tick(&mut self) {
        if self.carousel.tick().is_some() {
            self.show();
        }
    }

    fn resume_fired(&mut self) {
        let command = self.carousel.resume_fired();
        self.run(command);
    }
}

fn hooks(weak: &Weak<RefCell<Slideshow>>) -> TimerHooks {
    let tick = weak.clone();
    let resume = weak.clone();
    TimerHooks {
        on_tick: Rc::new(move || {
            if let Some(slideshow) = tick.upgrade() {
                slideshow.borrow_mut().tick();
            }
        }),
        on_resume: Rc::new(move || {
            if let Some(slideshow) = resume.upgrade() {
                slideshow.borrow_mut().resume_fired();
            }
        }),
    }
}

/// One `<button>` per image inside the dots container.
fn create_dots(container: &Element, count: usize) -> Result<Vec<Element>, WidgetError> {
    let document = dom::document().ok_or(WidgetError::NoDocument)?;
    let mut dots = Vec::with_capacity(count);
    for i in 0..count {
        let Ok(dot) = document.create_element("button") else {
            continue;
        };
        dot.set_class_name(NEIGHBORHOOD_DOT_CLASS);
        dom::set_class(&dot, ACTIVE_CLASS, i == 0);
        let _ = dot.set_attribute("aria-label", &format!("Go to slide {}", i + 1));
        if container.append_child(&dot).is_ok() {
            dots.push(dot);
        }
    }
    Ok(dots)
}

/// Bind the slideshow. A single image needs no slideshow.
pub fn init() -> Result<(), WidgetError> {
    let root = dom::require(NEIGHBORHOOD)?;
    let images = dom::query_all_in(&root, "img");
    if images.len() <= 1 {
        return Err(WidgetError::Empty(NEIGHBORHOOD));
    }
    let carousel = Carousel::new(images.len(), CarouselConfig::neighborhood())
        .ok_or(WidgetError::Empty(NEIGHBORHOOD))?;

    let dots = match dom::query_in(&root, NEIGHBORHOOD_DOTS) {
        Some(container) => create_dots(&container, images.len())?,
        None => Vec::new(),
    };

    let slideshow: SharedSlideshow = Rc::new_cyclic(|weak| {
        RefCell::new(Slideshow {
            carousel,
            timers: TimerSlots::default(),
            hooks: hooks(weak),
            images,
            dots: dots.clone(),
        })
    });

    for (index, dot) in dots.iter().enumerate() {
        let slideshow = slideshow.clone();
        dom::listen(dot, "click", move |_: Event| {
            slideshow.borrow_mut().go_to(index);
        })?;
    }

    let hover_in = slideshow.clone();
    dom::listen(&root, "mouseenter", move |_: Event| hover_in.borrow_mut().pause())?;
    let hover_out = slideshow.clone();
    dom::listen(&root, "mouseleave", move |_: Event| hover_out.borrow_mut().resume())?;

    let touch_start = slideshow.clone();
    dom::listen_passive(&root, "touchstart", move |_: Event| {
        touch_start.borrow_mut().pause();
    })?;
    let touch_end = slideshow.clone();
    dom::listen_passive(&root, "touchend", move |_: Event| {
        touch_end.borrow_mut().resume_later();
    })?;

    let mut state = slideshow.borrow_mut();
    state.show();
    let command = state.carousel.start_autoplay();
    state.run(command);

    log::debug(WIDGET, &format!("bound {} images", state.images.len()));
    Ok(())
}
