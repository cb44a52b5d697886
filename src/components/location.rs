//! Location section map: the property alone, under a home-shaped pin.

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::maps::POLL_MS;
use crate::config::selectors::LOCATION_MAP_ID;
use crate::config::{MAP_ZOOM, PROPERTY_POSITION, PROPERTY_TITLE};
use crate::core::error::{MapError, WidgetError};
use crate::models::{LatLng, MapCategory};
use crate::utils::maps::{self, GoogleMap, MapOptions, Marker, MarkerIcon, MarkerOptions};
use crate::utils::{dom, log};

const WIDGET: &str = "location";

/// Pin size and the point of it that sits on the coordinates.
const PIN_SIZE: (f64, f64) = (48.0, 56.0);
const PIN_ANCHOR: (f64, f64) = (24.0, 52.0);

fn home_pin_svg() -> String {
    let gold = MapCategory::Property.color();
    format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="56" viewBox="0 0 48 56">"##,
            r##"<ellipse cx="24" cy="52" rx="8" ry="3" fill="rgba(0,0,0,0.2)"/>"##,
            r##"<path d="M24 0C12.954 0 4 8.954 4 20c0 14 20 32 20 32s20-18 20-32C44 8.954 35.046 0 24 0z" fill="{gold}"/>"##,
            r##"<path d="M24 2C14.059 2 6 10.059 6 20c0 12.5 18 28.5 18 28.5S42 32.5 42 20C42 10.059 33.941 2 24 2z" fill="none" stroke="#FFFFFF" stroke-width="3"/>"##,
            r##"<circle cx="24" cy="20" r="12" fill="#FFFFFF"/>"##,
            r##"<path d="M24 11l-9 8v10h6v-6h6v6h6V19l-9-8z" fill="{gold}"/>"##,
            r##"<path d="M32 15.5v-3.5h-3v1l3 2.5z" fill="{gold}"/>"##,
            r##"</svg>"##,
        ),
        gold = gold,
    )
}

fn home_pin_url() -> String {
    let encoded: String = js_sys::encode_uri_component(&home_pin_svg()).into();
    format!("data:image/svg+xml,{encoded}")
}

fn draw(element: &Element) -> Result<(), MapError> {
    let options = MapOptions {
        zoom_control: Some(true),
        ..MapOptions::centered(LatLng::from(PROPERTY_POSITION), MAP_ZOOM)
    };
    let map = GoogleMap::new(element, &options)?;

    let marker = MarkerOptions {
        position: LatLng::from(PROPERTY_POSITION),
        title: PROPERTY_TITLE.to_string(),
        icon: MarkerIcon::Image {
            url: home_pin_url(),
        },
        z_index: Some(1000),
    };
    let js_marker = maps::to_js(&marker)?;
    let icon = js_sys::Reflect::get(&js_marker, &"icon".into())
        .map_err(|_| MapError::Options("marker icon missing".to_string()))?;
    let scaled_size = maps::size(PIN_SIZE.0, PIN_SIZE.1)?;
    let anchor = maps::point(PIN_ANCHOR.0, PIN_ANCHOR.1)?;
    maps::set(&icon, "scaledSize", scaled_size.as_ref())?;
    maps::set(&icon, "anchor", anchor.as_ref())?;

    Marker::with_js_options(&map, &js_marker)?;
    Ok(())
}

/// Draws once the Maps API is available, checking again every poll period.
fn draw_when_ready(element: Element) {
    if !maps::is_ready() {
        let _ = Timeout::new(POLL_MS, move || draw_when_ready(element)).forget();
        return;
    }
    match draw(&element) {
        Ok(()) => log::debug(WIDGET, "drawn"),
        Err(e) => log::warn(WIDGET, &e.to_string()),
    }
}

pub fn init() -> Result<(), WidgetError> {
    let element = dom::require_id(LOCATION_MAP_ID)?;
    draw_when_ready(element);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_pin_is_gold_and_sized() {
        let svg = home_pin_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="48" height="56""#));
        assert_eq!(svg.matches("#B08D5B").count(), 3);
        assert!(svg.contains(r##"stroke="#FFFFFF""##));
        assert!(svg.contains(r##"<circle cx="24" cy="20" r="12" fill="#FFFFFF"/>"##));
        assert!(svg.ends_with("</svg>"));
    }
}
