use crate::{browser::viewport_width, config::MOBILE_BREAKPOINT};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
  Mobile,
  #[default]
  Desktop,
}

impl LayoutMode {
  pub fn from_width(width: f64) -> Self {
    if width < MOBILE_BREAKPOINT {
      LayoutMode::Mobile
    } else {
      LayoutMode::Desktop
    }
  }

  pub fn is_mobile(self) -> bool {
    self == LayoutMode::Mobile
  }
}

fn initial_layout_mode() -> LayoutMode {
  // The server renders desktop, so hydration has to start from the same place.
  #[cfg(feature = "csr")]
  {
    viewport_width().map(LayoutMode::from_width).unwrap_or_default()
  }

  #[cfg(not(feature = "csr"))]
  {
    LayoutMode::default()
  }
}

/// Tracks the viewport against [`MOBILE_BREAKPOINT`] while the calling
/// component is mounted.
pub fn use_layout_mode() -> Signal<LayoutMode> {
  let mode = RwSignal::new(initial_layout_mode());

  // effects only run in the browser, right after mount
  Effect::new(move |_| {
    if let Some(w) = viewport_width() {
      mode.set(LayoutMode::from_width(w));
    }
  });

  #[cfg(not(feature = "ssr"))]
  {
    use send_wrapper::SendWrapper;

    let handle = window_event_listener(leptos::ev::resize, move |_| {
      if let Some(w) = viewport_width() {
        let next = LayoutMode::from_width(w);
        if mode.get_untracked() != next {
          mode.set(next);
        }
      }
    });
    let handle = SendWrapper::new(handle);
    on_cleanup(move || handle.take().remove());
  }

  mode.into()
}
