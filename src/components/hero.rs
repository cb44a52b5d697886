//! Hero carousel.
//!
//! Swipeable, auto-advancing slide track. Any manual navigation stops
//! autoplay and restarts it after a quiet period.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::{Element, Event, MouseEvent, TouchEvent};

use super::timers::{TimerHooks, TimerSlots};
use crate::config::selectors::{
    HERO, HERO_DOT, HERO_DOTS, HERO_NAV, HERO_NEXT, HERO_PREV, HERO_SLIDE, HERO_TRACK,
};
use crate::core::error::WidgetError;
use crate::core::{Carousel, CarouselConfig, SwipeDirection, SwipeTracker, TimerCommand};
use crate::utils::{dom, log};

const WIDGET: &str = "hero";

struct HeroView {
    track: Option<Element>,
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl HeroView {
    fn render(&self, index: usize) {
        if let Some(track) = &self.track {
            dom::set_style(track, "transform", &format!("translateX(-{}%)", index * 100));
        }
        dom::mark_active(&self.slides, Some(index));
        dom::mark_active(&self.dots, Some(index));
    }
}

struct Hero {
    carousel: Carousel,
    swipe: SwipeTracker,
    timers: TimerSlots,
    hooks: TimerHooks,
    view: HeroView,
}

type SharedHero = Rc<RefCell<Hero>>;

impl Hero {
    fn run(&mut self, commands: impl IntoIterator<Item = TimerCommand>) {
        self.timers.apply(commands, &self.hooks);
    }

    fn show(&self) {
        self.view.render(self.carousel.index());
    }

    fn manual_go_to(&mut self, index: i64) {
        let (_, commands) = self.carousel.manual_go_to(index);
        self.show();
        self.run(commands);
    }

    fn manual_step(&mut self, steps: i64) {
        let (_, commands) = self.carousel.manual_step(steps);
        self.show();
        self.run(commands);
    }

    fn touch_start(&mut self, x: f64, y: f64) {
        self.swipe.begin(x, y);
        let commands = self.carousel.stop_autoplay();
        self.run(commands);
    }

    fn touch_end(&mut self) {
        if !self.swipe.is_active() {
            return;
        }
        match self.swipe.finish() {
            Some(SwipeDirection::Next) => {
                self.carousel.next();
            }
            Some(SwipeDirection::Prev) => {
                self.carousel.prev();
            }
            None => {}
        }
        self.show();
        let commands = self.carousel.after_manual();
        self.run(commands);
    }

    fn tick(&mut self) {
        if self.carousel.tick().is_some() {
            self.show();
        }
    }

    fn resume(&mut self) {
        let command = self.carousel.resume_fired();
        self.run(command);
    }
}

fn hooks(weak: &Weak<RefCell<Hero>>) -> TimerHooks {
    let tick = weak.clone();
    let resume = weak.clone();
    TimerHooks {
        on_tick: Rc::new(move || {
            if let Some(hero) = tick.upgrade() {
                hero.borrow_mut().tick();
            }
        }),
        on_resume: Rc::new(move || {
            if let Some(hero) = resume.upgrade() {
                hero.borrow_mut().resume();
            }
        }),
    }
}

/// Bind the hero carousel and start autoplay.
pub fn init() -> Result<(), WidgetError> {
    let root = dom::require(HERO)?;
    let slides = dom::query_all_in(&root, HERO_SLIDE);
    let carousel =
        Carousel::new(slides.len(), CarouselConfig::hero()).ok_or(WidgetError::Empty(HERO_SLIDE))?;

    let view = HeroView {
        track: dom::query_in(&root, HERO_TRACK),
        dots: dom::query_all_in(&root, HERO_DOT),
        slides,
    };
    let dots = view.dots.clone();

    let hero: SharedHero = Rc::new_cyclic(|weak| {
        RefCell::new(Hero {
            carousel,
            swipe: SwipeTracker::horizontal(),
            timers: TimerSlots::default(),
            hooks: hooks(weak),
            view,
        })
    });

    bind_touch(&root, &hero)?;

    for (index, dot) in dots.iter().enumerate() {
        let hero = hero.clone();
        dom::listen(dot, "click", move |_: Event| {
            hero.borrow_mut().manual_go_to(index as i64);
        })?;
    }

    for (selector, steps) in [(HERO_PREV, -1), (HERO_NEXT, 1)] {
        if let Some(button) = dom::query_in(&root, selector) {
            let hero = hero.clone();
            dom::listen(&button, "click", move |event: MouseEvent| {
                event.stop_propagation();
                hero.borrow_mut().manual_step(steps);
            })?;
        }
    }

    // Tapping the slide area advances; dots and arrows handle themselves.
    {
        let hero = hero.clone();
        dom::listen(&root, "click", move |event: Event| {
            if dom::event_within(&event, HERO_DOTS) || dom::event_within(&event, HERO_NAV) {
                return;
            }
            hero.borrow_mut().manual_step(1);
        })?;
    }

    let mut state = hero.borrow_mut();
    let command = state.carousel.start_autoplay();
    state.run(command);

    log::debug(WIDGET, &format!("bound {} slides", state.carousel.len()));
    Ok(())
}

fn bind_touch(root: &Element, hero: &SharedHero) -> Result<(), WidgetError> {
    let start = hero.clone();
    dom::listen_passive(root, "touchstart", move |event: TouchEvent| {
        if let Some((x, y)) = dom::touch_point(&event) {
            start.borrow_mut().touch_start(x, y);
        }
    })?;

    let moved = hero.clone();
    dom::listen_passive(root, "touchmove", move |event: TouchEvent| {
        if let Some((x, y)) = dom::touch_point(&event) {
            moved.borrow_mut().swipe.move_to(x, y);
        }
    })?;

    let end = hero.clone();
    dom::listen_passive(root, "touchend", move |_: TouchEvent| {
        end.borrow_mut().touch_end();
    })?;

    Ok(())
}
