use crate::{
  browser::track_event,
  config::{RECOMMEND_CLICK_EVENT, THUMBNAIL_WIDTH},
  image::optimize_image,
  post::PartialPost,
};
use leptos::prelude::*;

#[component]
pub fn RelatedPostCard(post: PartialPost) -> impl IntoView {
  let src = optimize_image(post.thumbnail_source(), THUMBNAIL_WIDTH);
  let href = post.href();
  let alt = post.title.clone();
  let title = post.title;

  view! {
    <div class="relative px-1 pb-4 w-1/2 lg:pb-8 lg:w-1/3" on:click={move |_| track_event(RECOMMEND_CLICK_EVENT)}>
      <a href={href} class="block no-underline text-inherit hover:underline hover:text-base-content/80">
        <div class="relative w-full pt-[52.35%]">
          <img class="block object-cover absolute top-0 left-0 w-full h-full" src={src} alt={alt} />
        </div>
        <h5 class="overflow-hidden mt-2 mb-0 text-base leading-normal text-ellipsis line-clamp-2 text-base-content">{title}</h5>
      </a>
    </div>
  }
}
