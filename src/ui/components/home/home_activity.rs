use crate::i18n::*;
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn HomeActivity() -> impl IntoView {
  let i18n = use_i18n();

  view! {
    <Title text="Related posts" />
    <div class="px-4 mt-16 w-full sm:px-0 md:mx-auto md:w-[768px]">
      <h1 class="mb-4 text-3xl font-bold text-base-content">{t!(i18n, home_title)}</h1>
      <p class="text-base-content/70">{t!(i18n, home_description)}</p>
    </div>
  }
}
