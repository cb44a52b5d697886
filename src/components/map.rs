//! Neighborhood map: the property, nearby attractions and the category
//! filter buttons.
//!
//! The Maps API script calls the global `initMap` once it has loaded. If the
//! API is still missing after a grace period, a static panel linking out to
//! Google Maps replaces the map.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

use super::icons as ic;
use crate::config::maps::FALLBACK_TIMEOUT_MS;
use crate::config::selectors::{ACTIVE_CLASS, MAP_FILTER, MAP_ID};
use crate::config::{MAP_ZOOM, MAPS_FALLBACK_URL, PROPERTY_POSITION, PROPERTY_TITLE};
use crate::core::error::{MapError, WidgetError};
use crate::core::{FilterKey, MarkerFilter};
use crate::models::{Attraction, LatLng, MapCategory, load_attractions};
use crate::utils::maps::{
    self, CircleSymbol, GoogleMap, InfoWindow, MapOptions, Marker, MarkerIcon, MarkerOptions,
};
use crate::utils::{dom, log};

const WIDGET: &str = "map";

/// Name of the callback the Maps loader script invokes.
const INIT_CALLBACK: &str = "initMap";

// =============================================================================
// Info Window Content
// =============================================================================

fn property_info() -> String {
    format!(
        r#"<div style="padding: 8px; max-width: 200px;"><strong style="color: {}; font-size: 14px;">{PROPERTY_TITLE}</strong><p style="margin: 8px 0 0; font-size: 12px; color: #666;">Your future home!</p></div>"#,
        MapCategory::Property.color(),
    )
}

fn attraction_info(attraction: &Attraction) -> String {
    format!(
        concat!(
            r#"<div style="padding: 8px; max-width: 220px;"><strong style="font-size: 14px;">{name}</strong>"#,
            r#"<p style="margin: 8px 0 0; font-size: 12px; color: #666;">"#,
            r#"<span style="display: inline-flex; align-items: center; gap: 4px;">{pin} {distance}</span>"#,
            r#"<span style="margin-left: 12px; display: inline-flex; align-items: center; gap: 4px;">{clock} {walk} walk</span>"#,
            r#"</p></div>"#,
        ),
        name = attraction.name,
        pin = ic::inline_svg(ic::LOCATION, 12),
        distance = attraction.distance,
        clock = ic::inline_svg(ic::CLOCK, 12),
        walk = attraction.walk_time,
    )
}

// =============================================================================
// Markers
// =============================================================================

fn property_marker_options() -> MarkerOptions {
    MarkerOptions {
        position: LatLng::from(PROPERTY_POSITION),
        title: PROPERTY_TITLE.to_string(),
        icon: MarkerIcon::Circle(CircleSymbol::new(
            12.0,
            MapCategory::Property.color(),
            1.0,
            3.0,
        )),
        z_index: Some(1000),
    }
}

fn attraction_marker_options(attraction: &Attraction) -> MarkerOptions {
    MarkerOptions {
        position: attraction.position(),
        title: attraction.name.clone(),
        icon: MarkerIcon::Circle(CircleSymbol::new(8.0, attraction.category.color(), 0.9, 2.0)),
        z_index: None,
    }
}

struct NeighborhoodMap {
    markers: Vec<(MapCategory, Rc<Marker>)>,
    filter: MarkerFilter,
    buttons: Vec<(FilterKey, Element)>,
}

impl NeighborhoodMap {
    fn select(&mut self, key: FilterKey) {
        self.filter.select(key);
        for (key, button) in &self.buttons {
            dom::set_class(button, ACTIVE_CLASS, self.filter.is_active(*key));
        }
        for (category, marker) in &self.markers {
            marker.set_visible(self.filter.is_visible(*category));
        }
    }
}

/// Draws the map into `element` and binds the filter buttons.
fn draw(element: &Element) -> Result<(), MapError> {
    let map = Rc::new(GoogleMap::new(
        element,
        &MapOptions::centered(LatLng::from(PROPERTY_POSITION), MAP_ZOOM),
    )?);
    let info = Rc::new(InfoWindow::new()?);
    let attractions = load_attractions()?;

    let mut markers = Vec::with_capacity(attractions.len() + 1);
    let mut add = |category: MapCategory,
                   options: MarkerOptions,
                   content: String|
     -> Result<(), MapError> {
        let marker = Rc::new(Marker::new(&map, &options)?);
        let (map, info, anchor) = (map.clone(), info.clone(), Rc::downgrade(&marker));
        marker.on_click(move || {
            if let Some(anchor) = anchor.upgrade() {
                info.show(&content, &map, &anchor);
            }
        })?;
        markers.push((category, marker));
        Ok(())
    };

    add(MapCategory::Property, property_marker_options(), property_info())?;
    for attraction in &attractions {
        add(
            attraction.category,
            attraction_marker_options(attraction),
            attraction_info(attraction),
        )?;
    }

    bind_filters(markers);
    Ok(())
}

fn bind_filters(markers: Vec<(MapCategory, Rc<Marker>)>) {
    let buttons = dom::query_all(MAP_FILTER)
        .into_iter()
        .filter_map(|button| {
            let key = dom::data(&button, "category").and_then(|c| FilterKey::parse(&c))?;
            Some((key, button))
        })
        .collect::<Vec<_>>();
    let count = buttons.len();

    let state = Rc::new(RefCell::new(NeighborhoodMap {
        markers,
        filter: MarkerFilter::new(),
        buttons: buttons.clone(),
    }));

    for (key, button) in buttons {
        let state = state.clone();
        if let Err(e) = dom::listen(&button, "click", move |_: Event| {
            state.borrow_mut().select(key);
        }) {
            log::warn(WIDGET, &e.to_string());
        }
    }
    log::debug(WIDGET, &format!("{count} filter buttons"));
}

// =============================================================================
// Fallback
// =============================================================================

#[component]
fn MapFallback() -> impl IntoView {
    view! {
        <div
            class="map-fallback"
            style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; background: linear-gradient(135deg, #f5f5f5 0%, #e0e0e0 100%); color: #666; text-align: center; padding: 40px;"
        >
            <span style="margin-bottom: 16px; opacity: 0.5;" aria-hidden="true">
                <Icon icon=ic::LOCATION width="48" height="48" />
            </span>
            <h3 style="margin-bottom: 8px; font-size: 18px;">"Interactive Map"</h3>
            <p style="font-size: 14px; max-width: 300px; margin-bottom: 16px;">
                "View the property location and nearby attractions including restaurants, transit, and entertainment."
            </p>
            <a
                href=MAPS_FALLBACK_URL
                target="_blank"
                rel="noopener noreferrer"
                style="display: inline-flex; align-items: center; gap: 8px; padding: 12px 24px; background-color: #B08D5B; color: white; text-decoration: none; border-radius: 4px; font-weight: 500;"
            >
                <Icon icon=ic::EXTERNAL_LINK width="16" height="16" />
                "Open in Google Maps"
            </a>
        </div>
    }
}

fn render_fallback(element: &Element) {
    element.set_inner_html("");
    let Some(parent) = element.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    mount_to(parent, MapFallback).forget();
}

// =============================================================================
// Init
// =============================================================================

/// Draws the map now if the API is loaded, otherwise registers the global
/// loader callback, and arms the fallback timer.
pub fn init() -> Result<(), WidgetError> {
    let element = dom::require_id(MAP_ID)?;
    let drawn = Rc::new(Cell::new(false));

    let draw_once = {
        let (element, drawn) = (element.clone(), drawn.clone());
        move || {
            if drawn.get() {
                return;
            }
            match draw(&element) {
                Ok(()) => {
                    drawn.set(true);
                    log::debug(WIDGET, "drawn");
                }
                Err(e) => log::warn(WIDGET, &e.to_string()),
            }
        }
    };

    if maps::is_ready() {
        draw_once();
    } else if let Err(e) = maps::expose_global(INIT_CALLBACK, draw_once) {
        log::warn(WIDGET, &e.to_string());
    }

    let _ = Timeout::new(FALLBACK_TIMEOUT_MS, move || {
        if !drawn.get() && !maps::is_ready() {
            log::warn(WIDGET, "Maps API not loaded, showing static fallback");
            render_fallback(&element);
        }
    })
    .forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attraction() -> Attraction {
        Attraction {
            name: "Town Brewing".to_string(),
            address: "800 Grandin Rd".to_string(),
            lat: 35.2301,
            lng: -80.8655,
            category: MapCategory::Nightlife,
            distance: "0.4 mi".to_string(),
            walk_time: "8 min".to_string(),
        }
    }

    #[test]
    fn test_property_info_content() {
        let html = property_info();
        assert!(html.contains(PROPERTY_TITLE));
        assert!(html.contains("Your future home!"));
        assert!(html.contains(MapCategory::Property.color()));
    }

    #[test]
    fn test_attraction_info_content() {
        let html = attraction_info(&attraction());
        assert!(html.contains("Town Brewing"));
        assert!(html.contains("0.4 mi"));
        assert!(html.contains("8 min walk"));
        assert_eq!(html.matches("<svg").count(), 2);
    }

    #[test]
    fn test_marker_styles() {
        let property = property_marker_options();
        assert_eq!(property.z_index, Some(1000));
        assert_eq!(
            property.icon,
            MarkerIcon::Circle(CircleSymbol::new(12.0, "#B08D5B", 1.0, 3.0))
        );

        let other = attraction_marker_options(&attraction());
        assert_eq!(other.z_index, None);
        assert_eq!(other.title, "Town Brewing");
        assert_eq!(
            other.icon,
            MarkerIcon::Circle(CircleSymbol::new(8.0, MapCategory::Nightlife.color(), 0.9, 2.0))
        );
    }
}
