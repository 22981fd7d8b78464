use crate::{
  client::*,
  errors::{message_from_error, AppError, AppErrorType, AppResult},
  host,
  i18n::*,
  post::{PostPage, ReadPostResponse},
  ui::components::related::related_posts_for_guest::RelatedPostsForGuest,
};
use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use leptos_use::use_cookie;

/// Post routes look like `/@username/url-slug`.
fn author_from_segment(segment: &str) -> Option<&str> {
  segment.strip_prefix('@').filter(|s| !s.is_empty())
}

fn into_page(response: ReadPostResponse, username: &str, url_slug: &str, show_ads: bool) -> AppResult<PostPage> {
  match response {
    ReadPostResponse { post: Some(post) } => Ok(PostPage { post, show_ads }),
    ReadPostResponse { post: None } => Err(AppError {
      context: "read post".into(),
      error_type: AppErrorType::NotFound,
      description: format!("@{}/{}", username, url_slug),
    }),
  }
}

/// The ads flag is read here rather than in the view, so on SSR it is the
/// server's setting that gets serialized and hydrated.
async fn load_post(username_segment: String, url_slug: String) -> AppResult<PostPage> {
  let Some(username) = author_from_segment(&username_segment) else {
    return Err(AppError {
      context: "post route".into(),
      error_type: AppErrorType::NotFound,
      description: username_segment,
    });
  };

  let response = GraphQlClient.read_post(username, &url_slug).await?;
  into_page(response, username, &url_slug, host::show_ads())
}

#[component]
pub fn PostActivity() -> impl IntoView {
  let i18n = use_i18n();

  let param = use_params_map();
  let ssr_username = move || param.get().get("username").unwrap_or_default();
  let ssr_url_slug = move || param.get().get("url_slug").unwrap_or_default();

  let (access_token, _) = use_cookie::<String, FromToStringCodec>("access_token");
  let is_guest = Signal::derive(move || access_token.get().is_none());

  let post = Resource::new(move || (ssr_username(), ssr_url_slug()), move |(username, url_slug)| load_post(username, url_slug));

  view! {
    <Transition fallback={|| ()}>
      {move || {
        post
          .get()
          .map(|r| match r {
            Ok(PostPage { post: p, show_ads }) => {
              let post_id = p.id.clone();
              let author = p.user.profile.display_name.clone().unwrap_or_else(|| p.user.username.clone());
              let page_title = p.title.clone();
              view! {
                <Title text={page_title} />
                <article class="px-4 mt-8 w-full sm:px-0 md:mx-auto md:w-[768px]">
                  <h1 class="mb-4 text-3xl font-bold text-base-content">{p.title}</h1>
                  <p class="text-sm text-base-content/70">{t!(i18n, written_by)} " " <span class="font-bold">{author}</span></p>
                  <p class="mt-6 text-base-content">{p.short_description}</p>
                </article>
                <Show when={move || is_guest.get()}>
                  <RelatedPostsForGuest post_id={post_id.clone()} show_ads />
                </Show>
              }
                .into_any()
            }
            Err(e) => {
              view! {
                <div role="alert" class="m-4 alert alert-error">
                  <span>{message_from_error(&e)}</span>
                </div>
              }
                .into_any()
            }
          })
      }}
    </Transition>
  }
}
