//! Calls into browser globals. All of these are no-ops on the server.

#[cfg(not(feature = "ssr"))]
use leptos::logging;
#[cfg(not(feature = "ssr"))]
use web_sys::{
  js_sys::{Array, Function, Object, Reflect},
  wasm_bindgen::{JsCast, JsValue},
};

pub fn viewport_width() -> Option<f64> {
  #[cfg(not(feature = "ssr"))]
  {
    leptos::prelude::window().inner_width().ok().and_then(|w| w.as_f64())
  }

  #[cfg(feature = "ssr")]
  {
    None
  }
}

/// Fires a `gtag('event', name)` if the analytics snippet is loaded.
pub fn track_event(name: &str) {
  #[cfg(not(feature = "ssr"))]
  {
    let window = leptos::prelude::window();
    match Reflect::get(&window, &JsValue::from_str("gtag")).ok().and_then(|g| g.dyn_into::<Function>().ok()) {
      Some(gtag) => {
        if let Err(e) = gtag.call2(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(name)) {
          logging::warn!("gtag call failed {:?}", e);
        }
      }
      None => logging::warn!("gtag missing, dropped event {}", name),
    }
  }

  #[cfg(feature = "ssr")]
  let _ = name;
}

/// Queues one ad fill, the same as `(adsbygoogle = window.adsbygoogle || []).push({})`.
pub fn request_ad_fill() {
  #[cfg(not(feature = "ssr"))]
  {
    let window = leptos::prelude::window();
    let key = JsValue::from_str("adsbygoogle");
    let queue = match Reflect::get(&window, &key).ok().filter(|q| !q.is_undefined() && !q.is_null()) {
      Some(q) => q,
      None => {
        let q: JsValue = Array::new().into();
        if Reflect::set(&window, &key, &q).is_err() {
          logging::warn!("could not create adsbygoogle queue");
          return;
        }
        q
      }
    };
    let push = Reflect::get(&queue, &JsValue::from_str("push")).ok().and_then(|p| p.dyn_into::<Function>().ok());
    match push {
      Some(push) => {
        if let Err(e) = push.call1(&queue, &Object::new()) {
          logging::warn!("adsbygoogle push failed {:?}", e);
        }
      }
      None => logging::warn!("adsbygoogle has no push"),
    }
  }
}
