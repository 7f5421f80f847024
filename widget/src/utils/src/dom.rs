//! Browser bindings for the player capability traits and viewport watchers.

use consts::selectors::{DARK_MODE_CLASS, PLAYER_API_PROP};
use gloo::events::EventListener;
use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlMediaElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::error::WidgetError;
use crate::media::{MediaElement, PlayerApi};

pub fn document() -> Result<Document, WidgetError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(WidgetError::MissingElement("document"))
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, WidgetError> {
    let nodes = document()?.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_media(root: &Element, selector: &'static str) -> Result<HtmlMedia, WidgetError> {
    root.query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
        .map(HtmlMedia)
        .ok_or(WidgetError::MissingElement(selector))
}

/// Every media element matching `selector`; elements that aren't media are skipped
pub fn query_all_media(selector: &str) -> Result<Vec<HtmlMedia>, WidgetError> {
    Ok(query_all(selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlMediaElement>().ok())
        .map(HtmlMedia)
        .collect())
}

pub fn is_dark_mode() -> bool {
    document()
        .ok()
        .and_then(|doc| doc.document_element())
        .map(|html| html.class_list().contains(DARK_MODE_CLASS))
        .unwrap_or_default()
}

pub fn on_click(target: &Element, mut handler: impl FnMut() + 'static) -> EventListener {
    EventListener::new(target, "click", move |_| handler())
}

/// The playback api object a player attaches to its container element
pub struct JsPlayerApi {
    api: JsValue,
}

impl JsPlayerApi {
    pub fn from_element(element: &Element) -> Result<Self, WidgetError> {
        let api = Reflect::get(element, &JsValue::from_str(PLAYER_API_PROP))?;
        if api.is_undefined() || api.is_null() {
            return Err(WidgetError::MissingPlayerApi);
        }
        Ok(Self { api })
    }

    fn method(&self, name: &str) -> Result<Function, WidgetError> {
        Reflect::get(&self.api, &JsValue::from_str(name))?
            .dyn_into::<Function>()
            .map_err(|_| WidgetError::Js(format!("player api has no `{name}` method")))
    }

    fn call0(&self, name: &str) -> Result<JsValue, WidgetError> {
        Ok(self.method(name)?.call0(&self.api)?)
    }

    fn call1(&self, name: &str, arg: &JsValue) -> Result<JsValue, WidgetError> {
        Ok(self.method(name)?.call1(&self.api, arg)?)
    }

    fn flag(&self, name: &str, fallback: bool) -> bool {
        match self.call0(name) {
            Ok(value) => value.as_bool().unwrap_or(fallback),
            Err(e) => {
                log::warn!("player api `{name}` failed: {e}");
                fallback
            }
        }
    }
}

impl PlayerApi for JsPlayerApi {
    fn play(&self) {
        let res = match self.call0("play") {
            Ok(res) => res,
            Err(e) => {
                log::warn!("failed to play video: {e}");
                return;
            }
        };
        // some players hand back the media element's play promise
        if let Ok(promise) = res.dyn_into::<Promise>() {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    log::warn!("play promise rejected: {e:?}");
                }
            });
        }
    }

    fn pause(&self) {
        if let Err(e) = self.call0("pause") {
            log::warn!("failed to pause video: {e}");
        }
    }

    fn is_paused(&self) -> bool {
        self.flag("isPaused", true)
    }

    fn set_muted(&self, muted: bool) {
        if let Err(e) = self.call1("setMuted", &JsValue::from_bool(muted)) {
            log::warn!("failed to set muted: {e}");
        }
    }

    fn is_muted(&self) -> bool {
        self.flag("isMuted", true)
    }

    fn is_ambient(&self) -> bool {
        Reflect::get(&self.api, &JsValue::from_str("isAmbient"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or_default()
    }

    fn set_ambient(&self, ambient: bool) {
        let res = Reflect::set(
            &self.api,
            &JsValue::from_str("isAmbient"),
            &JsValue::from_bool(ambient),
        );
        if res.is_err() {
            log::warn!("failed to mark player ambient");
        }
    }
}

pub struct HtmlMedia(pub HtmlMediaElement);

impl MediaElement for HtmlMedia {
    fn volume(&self) -> f64 {
        self.0.volume()
    }

    fn set_volume(&self, volume: f64) {
        self.0.set_volume(volume);
    }

    fn set_preload(&self, preload: &str) {
        self.0.set_preload(preload);
    }

    fn is_muted(&self) -> bool {
        self.0.muted()
    }

    fn set_muted(&self, muted: bool) {
        self.0.set_muted(muted);
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An `IntersectionObserver` at a single threshold. Disconnects on drop.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityWatcher {
    pub fn new(
        threshold: f64,
        mut on_change: impl FnMut(&Element, f64) + 'static,
    ) -> Result<Self, WidgetError> {
        let callback: EntriesCallback = Closure::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(&entry.target(), entry.intersection_ratio());
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin("0px");
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    pub fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
