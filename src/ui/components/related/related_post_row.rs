use crate::{config::THUMBNAIL_WIDTH, excerpt::format_excerpt, image::optimize_image, post::PartialPost};
use leptos::prelude::*;

#[component]
pub fn RelatedPostRow(post: PartialPost) -> impl IntoView {
  let src = optimize_image(post.thumbnail_source(), THUMBNAIL_WIDTH);
  let excerpt = format_excerpt(&post.short_description);
  let alt = post.title.clone();
  let title = post.title;

  view! {
    <div class="flex">
      <div class="mr-3 w-2/5">
        <div class="relative w-full pt-[52.35%]">
          <img class="block object-cover absolute top-0 left-0 w-full h-full" src={src} alt={alt} />
        </div>
      </div>
      <div class="w-3/5">
        <h5 class="mt-0 text-sm truncate mb-2.5 text-base-content">{title}</h5>
        <p class="overflow-hidden m-0 text-xs leading-normal line-clamp-3 h-[3.375rem] break-keep text-base-content/60">{excerpt}</p>
      </div>
    </div>
  }
}
