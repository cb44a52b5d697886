//! Google Maps JavaScript API interop.
//!
//! The API is loaded by a `<script>` tag on the page, so everything here is
//! looked up at runtime on the `google.maps` namespace via the Reflect API.
//! Option objects are plain Rust structs converted with `serde-wasm-bindgen`.

use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::Element;

use crate::core::error::MapError;
use crate::models::LatLng;

/// `google.maps.SymbolPath.CIRCLE`.
const SYMBOL_PATH_CIRCLE: u8 = 0;

// =============================================================================
// Options
// =============================================================================

/// One entry of the map's `styles` array.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStyle {
    pub feature_type: &'static str,
    pub element_type: &'static str,
    pub stylers: Vec<Styler>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Styler {
    pub visibility: &'static str,
}

impl MapStyle {
    /// Hides the labels of points of interest, so only our markers stand out.
    pub fn hide_poi_labels() -> Self {
        Self {
            feature_type: "poi",
            element_type: "labels",
            stylers: vec![Styler { visibility: "off" }],
        }
    }
}

/// `google.maps.MapOptions`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub styles: Vec<MapStyle>,
    pub map_type_control: bool,
    pub street_view_control: bool,
    pub fullscreen_control: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom_control: Option<bool>,
}

impl MapOptions {
    /// Map centered on `center` with POI labels hidden, no map-type or
    /// street-view controls and a fullscreen control.
    pub fn centered(center: LatLng, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            styles: vec![MapStyle::hide_poi_labels()],
            map_type_control: false,
            street_view_control: false,
            fullscreen_control: true,
            zoom_control: None,
        }
    }
}

/// Vector circle used as a marker icon (`google.maps.Symbol`).
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleSymbol {
    path: u8,
    pub scale: f64,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
}

impl CircleSymbol {
    /// White-outlined circle.
    pub fn new(scale: f64, fill_color: &'static str, fill_opacity: f64, stroke_weight: f64) -> Self {
        Self {
            path: SYMBOL_PATH_CIRCLE,
            scale,
            fill_color,
            fill_opacity,
            stroke_color: "#FFFFFF",
            stroke_weight,
        }
    }
}

/// Marker icon. Image icons get their `scaledSize` and `anchor` attached
/// after conversion, since those are API class instances.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerIcon {
    Circle(CircleSymbol),
    Image { url: String },
}

/// `google.maps.MarkerOptions`, minus the `map` it is placed on.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    pub position: LatLng,
    pub title: String,
    pub icon: MarkerIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<u32>,
}

/// Converts options into a plain JS object.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, MapError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| MapError::Options(e.to_string()))
}

// =============================================================================
// Namespace
// =============================================================================

/// The `google.maps` namespace, once the loader script has run.
fn namespace() -> Result<Object, MapError> {
    let window = super::dom::window().ok_or(MapError::ApiUnavailable)?;
    let google = Reflect::get(&window, &"google".into()).map_err(|_| MapError::ApiUnavailable)?;
    if google.is_undefined() || google.is_null() {
        return Err(MapError::ApiUnavailable);
    }
    Reflect::get(&google, &"maps".into())
        .ok()
        .and_then(|maps| maps.dyn_into::<Object>().ok())
        .ok_or(MapError::ApiUnavailable)
}

/// Whether `google.maps` is available.
pub fn is_ready() -> bool {
    namespace().is_ok()
}

/// `new google.maps[class](...args)`.
fn construct(class: &str, args: &Array) -> Result<Object, MapError> {
    let namespace = namespace()?;
    let constructor = Reflect::get(namespace.as_ref(), &class.into())
        .ok()
        .and_then(|c| c.dyn_into::<Function>().ok())
        .ok_or(MapError::ApiUnavailable)?;
    Reflect::construct(&constructor, args)
        .ok()
        .and_then(|value| value.dyn_into::<Object>().ok())
        .ok_or_else(|| MapError::Options(format!("google.maps.{class} rejected its arguments")))
}

/// `target[method](...args)`.
fn call(target: &Object, method: &str, args: &Array) -> Result<JsValue, MapError> {
    let function = Reflect::get(target, &method.into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(MapError::ApiUnavailable)?;
    function
        .apply(target, args)
        .map_err(|e| MapError::Options(format!("{method}: {e:?}")))
}

/// Sets `target[key] = value`.
pub fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), MapError> {
    Reflect::set(target, &key.into(), value)
        .map(|_| ())
        .map_err(|_| MapError::Options(format!("cannot set `{key}`")))
}

/// `new google.maps.Size(width, height)`.
pub fn size(width: f64, height: f64) -> Result<Object, MapError> {
    construct("Size", &Array::of2(&width.into(), &height.into()))
}

/// `new google.maps.Point(x, y)`.
pub fn point(x: f64, y: f64) -> Result<Object, MapError> {
    construct("Point", &Array::of2(&x.into(), &y.into()))
}

/// Installs `window[name]` as a callback, for script loaders that look one
/// up by name.
pub fn expose_global(name: &str, callback: impl FnMut() + 'static) -> Result<(), MapError> {
    let window = super::dom::window().ok_or(MapError::ApiUnavailable)?;
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    set(&window, name, closure.as_ref())?;
    closure.forget();
    Ok(())
}

// =============================================================================
// API Objects
// =============================================================================

/// `google.maps.Map`.
pub struct GoogleMap(Object);

impl GoogleMap {
    pub fn new(element: &Element, options: &MapOptions) -> Result<Self, MapError> {
        let args = Array::of2(element, &to_js(options)?);
        construct("Map", &args).map(Self)
    }
}

/// `google.maps.Marker`.
pub struct Marker(Object);

impl Marker {
    /// Places a marker on `map`.
    pub fn new(map: &GoogleMap, options: &MarkerOptions) -> Result<Self, MapError> {
        let js_options = to_js(options)?;
        Self::with_js_options(map, &js_options)
    }

    /// Places a marker from already converted options, for icons that need
    /// API objects attached first.
    pub fn with_js_options(map: &GoogleMap, options: &JsValue) -> Result<Self, MapError> {
        set(options, "map", &map.0)?;
        construct("Marker", &Array::of1(options)).map(Self)
    }

    pub fn set_visible(&self, visible: bool) {
        let _ = call(&self.0, "setVisible", &Array::of1(&visible.into()));
    }

    /// Runs `handler` on every click. The listener lives as long as the page.
    pub fn on_click(&self, handler: impl FnMut() + 'static) -> Result<(), MapError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        call(
            &self.0,
            "addListener",
            &Array::of2(&"click".into(), closure.as_ref()),
        )?;
        closure.forget();
        Ok(())
    }
}

/// `google.maps.InfoWindow`.
pub struct InfoWindow(Object);

impl InfoWindow {
    pub fn new() -> Result<Self, MapError> {
        construct("InfoWindow", &Array::new()).map(Self)
    }

    /// Replaces the content and opens the window anchored on `marker`.
    pub fn show(&self, content: &str, map: &GoogleMap, marker: &Marker) {
        let _ = call(&self.0, "setContent", &Array::of1(&content.into()));
        let _ = call(&self.0, "open", &Array::of2(&map.0, &marker.0));
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Installs a `google.maps` namespace with `Size` and `Point` classes
    /// that just record their arguments.
    fn install_fake_api() -> JsValue {
        let maps = Object::new();
        for class in ["Size", "Point"] {
            let constructor = Function::new_with_args("a, b", "this.a = a; this.b = b;");
            Reflect::set(&maps, &class.into(), &constructor).unwrap();
        }
        let google = Object::new();
        Reflect::set(&google, &"maps".into(), &maps).unwrap();
        let window = crate::utils::dom::window().unwrap();
        Reflect::set(&window, &"google".into(), &google).unwrap();
        window.into()
    }

    #[wasm_bindgen_test]
    fn test_api_classes_construct_once_loaded() {
        assert!(!is_ready());
        assert!(matches!(size(48.0, 56.0), Err(MapError::ApiUnavailable)));

        let window = install_fake_api();
        assert!(is_ready());

        let icon = Object::new();
        let scaled_size = size(48.0, 56.0).unwrap();
        let anchor = point(24.0, 52.0).unwrap();
        set(&icon, "scaledSize", scaled_size.as_ref()).unwrap();
        set(&icon, "anchor", anchor.as_ref()).unwrap();

        let stored = Reflect::get(&icon, &"scaledSize".into()).unwrap();
        assert_eq!(Reflect::get(&stored, &"a".into()).unwrap().as_f64(), Some(48.0));
        let stored = Reflect::get(&icon, &"anchor".into()).unwrap();
        assert_eq!(Reflect::get(&stored, &"b".into()).unwrap().as_f64(), Some(52.0));

        Reflect::delete_property(window.unchecked_ref(), &"google".into()).unwrap();
        assert!(!is_ready());
    }
}
