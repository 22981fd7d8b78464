use crate::{
  browser::request_ad_fill,
  config::{AD_CLIENT, AD_SLOT},
};
use leptos::prelude::*;

#[component]
pub fn RelatedPostAd(#[prop(into)] label: String, #[prop(optional)] is_mobile: bool) -> impl IntoView {
  Effect::new(move |_| request_ad_fill());

  let (format, style) = if is_mobile {
    ("fluid", "display:block;width:100%;height:5.375rem")
  } else {
    ("auto", "display:block;width:100%;padding-top:52.35%")
  };

  view! {
    <div class="relative w-full">
      <span class="sr-only">{label}</span>
      <ins
        class="adsbygoogle"
        style={style}
        data-ad-client={AD_CLIENT}
        data-ad-slot={AD_SLOT}
        data-ad-format={format}
        data-full-width-responsive="true"
      ></ins>
    </div>
  }
}
