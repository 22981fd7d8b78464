#![recursion_limit = "256"]

mod browser;
mod client;
mod config;
mod errors;
mod excerpt;
mod host;
mod image;
mod layout;
mod layout_mode;
mod post;
mod slots;
mod ui;

use crate::{
  i18n::*,
  layout::Layout,
  ui::components::{home::home_activity::HomeActivity, post::post_activity::PostActivity},
};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, SsrMode, StaticSegment};

pub use crate::{
  post::{PartialPost, RecommendationSet},
  slots::{select_slots, PairPicker, RandomPicker, Slot, AD_SLOT_PAIRS, SLOT_COUNT},
  ui::components::related::related_posts_for_guest::RelatedPostsForGuest,
};

leptos_i18n::load_locales!();

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
  console_error_panic_hook::set_once();
  leptos::mount::hydrate_body(App);
}

pub fn html_template(options: LeptosOptions) -> impl IntoView {
  view! {
    <!DOCTYPE html>
    <html lang="en">
      <head>
        <meta charset="utf-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <AutoReload options={options.clone()} />
        <HydrationScripts options />
        <MetaTags />
      </head>
      <body>
        <App />
      </body>
    </html>
  }
}

#[component]
pub fn App() -> impl IntoView {
  provide_meta_context();

  view! {
    <Stylesheet id="leptos" href="/pkg/related-posts.css" />
    <Link rel="shortcut icon" type_="image/ico" href="/favicon.ico" />
    <I18nContextProvider>
      <Router>
        <Layout>
          <Routes fallback={|| view! { <NotFound /> }}>
            <Route path={StaticSegment("")} view={HomeActivity} />
            <Route path={path!("/:username/:url_slug")} view={PostActivity} ssr={SsrMode::Async} />
          </Routes>
        </Layout>
      </Router>
    </I18nContextProvider>
  }
}

#[component]
fn NotFound() -> impl IntoView {
  #[cfg(feature = "ssr")]
  {
    let resp = expect_context::<leptos_actix::ResponseOptions>();
    resp.set_status(actix_web::http::StatusCode::NOT_FOUND);
  }
  view! { <h1>"Not Found"</h1> }
}
