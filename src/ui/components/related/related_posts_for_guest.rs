use crate::{
  client::*,
  i18n::*,
  layout_mode::{use_layout_mode, LayoutMode},
  post::{GetRecommendedPostsResponse, RecommendationSet},
  slots::{select_slots, RandomPicker, Slot},
  ui::components::related::{related_post_ad::RelatedPostAd, related_post_card::RelatedPostCard, related_post_row::RelatedPostRow},
};
use leptos::{logging, prelude::*};

fn recommendation_set(response: GetRecommendedPostsResponse, placement_seed: u64) -> Option<RecommendationSet> {
  response.post.map(|p| RecommendationSet {
    posts: p.recommended_posts,
    placement_seed,
  })
}

async fn load_recommendations(post_id: String) -> Option<RecommendationSet> {
  match GraphQlClient.recommended_posts(&post_id).await {
    Ok(response) => {
      let set = recommendation_set(response, rand::random());
      if set.is_none() {
        logging::warn!("no recommendations, post {} not found", post_id);
      }
      set
    }
    Err(e) => {
      logging::error!("recommended posts for {} failed {:#?}", post_id, e);
      None
    }
  }
}

/// Slot list for the current recommendations. Re-runs only when the set or the
/// ads flag changes. The placement comes from the set's seed, so layout
/// switches keep it, while a refetch brings a new seed and may move the ads.
pub fn use_slots(recommendations: Signal<Option<RecommendationSet>>, show_ads: Signal<bool>) -> Memo<Option<Vec<Slot>>> {
  Memo::new(move |_| {
    let show_ads = show_ads.get();
    recommendations.with(|set| {
      set
        .as_ref()
        .map(|set| select_slots(&set.posts, show_ads, &mut RandomPicker::from_seed(set.placement_seed)))
    })
  })
}

/// Panel markup for a resolved slot list. No slots, no panel.
pub fn related_posts_view(slots: Option<Vec<Slot>>, layout: LayoutMode, heading: String, ad_label: String) -> Option<AnyView> {
  let slots = slots?;

  let list = if layout.is_mobile() {
    view! {
      <div class="flex flex-col gap-2 mt-4">
        {slots
          .into_iter()
          .map(|slot| match slot {
            Slot::Post(post) => view! { <RelatedPostRow post /> }.into_any(),
            Slot::Ad => view! { <div class="flex"><RelatedPostAd label={ad_label.clone()} is_mobile=true /></div> }.into_any(),
          })
          .collect_view()}
      </div>
    }
    .into_any()
  } else {
    view! {
      <div class="flex flex-wrap -mx-4 mt-6">
        {slots
          .into_iter()
          .map(|slot| match slot {
            Slot::Post(post) => view! { <RelatedPostCard post /> }.into_any(),
            Slot::Ad => {
              view! {
                <div class="relative px-1 pb-4 w-1/2 lg:pb-8 lg:w-1/3" style="margin-bottom: -3.375rem">
                  <RelatedPostAd label={ad_label.clone()} />
                </div>
              }
                .into_any()
            }
          })
          .collect_view()}
      </div>
    }
    .into_any()
  };

  Some(
    view! {
      <section class="px-4 mt-16 mb-12 w-full sm:px-0 md:mx-auto md:w-[768px]">
        <h4 class="text-lg text-base-content">{heading}</h4>
        {list}
      </section>
    }
    .into_any(),
  )
}

#[component]
pub fn RelatedPostsForGuest(post_id: String, #[prop(into)] show_ads: Signal<bool>) -> impl IntoView {
  let i18n = use_i18n();

  let recommendations = Resource::new(move || post_id.clone(), load_recommendations);
  let slots = use_slots(Signal::derive(move || recommendations.get().flatten()), show_ads);
  let layout = use_layout_mode();

  view! {
    <Transition fallback={|| ()}>
      {move || {
        let heading = t_string!(i18n, related_posts_title).to_string();
        let ad_label = t_string!(i18n, advertisement).to_string();
        recommendations.get().flatten().and_then(|_| related_posts_view(slots.get(), layout.get(), heading, ad_label))
      }}
    </Transition>
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::post::{sample_post, RecommendedPostsView};
  use leptos::tachys::view::RenderHtml;

  fn set(len: usize, seed: u64) -> RecommendationSet {
    RecommendationSet {
      posts: (0..len).map(|n| sample_post(n, true)).collect(),
      placement_seed: seed,
    }
  }

  fn slots_with_ads_at(ads: (usize, usize)) -> Vec<Slot> {
    (0..6).map(|n| if n == ads.0 || n == ads.1 { Slot::Ad } else { Slot::Post(sample_post(n, true)) }).collect()
  }

  fn render(slots: Option<Vec<Slot>>, layout: LayoutMode) -> Option<String> {
    related_posts_view(slots, layout, "Posts you might be interested in".into(), "Advertisement".into()).map(|v| v.to_html())
  }

  #[test]
  fn pending_data_has_no_slots() {
    let owner = Owner::new();
    owner.set();
    let data = RwSignal::new(None::<RecommendationSet>);
    let slots = use_slots(data.into(), Signal::from(true));
    assert_eq!(slots.get_untracked(), None);
  }

  #[test]
  fn slots_follow_the_ads_flag() {
    let owner = Owner::new();
    owner.set();
    let data = RwSignal::new(Some(set(8, 7)));
    let show_ads = RwSignal::new(false);
    let slots = use_slots(data.into(), show_ads.into());

    let plain = slots.get_untracked().unwrap();
    assert_eq!(plain.len(), 6);
    assert!(plain.iter().all(|s| !s.is_ad()));

    show_ads.set(true);
    let with_ads = slots.get_untracked().unwrap();
    assert_eq!(with_ads.iter().filter(|s| s.is_ad()).count(), 2);
  }

  #[test]
  fn recomputing_with_equal_inputs_keeps_the_placement() {
    let owner = Owner::new();
    owner.set();
    let data = RwSignal::new(Some(set(6, 99)));
    let slots = use_slots(data.into(), Signal::from(true));

    let first = slots.get_untracked();
    data.set(Some(set(6, 99)));
    assert_eq!(slots.get_untracked(), first);
  }

  #[test]
  fn missing_source_post_gives_no_set() {
    assert_eq!(recommendation_set(GetRecommendedPostsResponse { post: None }, 1), None);

    let found = GetRecommendedPostsResponse {
      post: Some(RecommendedPostsView {
        id: "source".into(),
        recommended_posts: vec![sample_post(0, true)],
      }),
    };
    let set = recommendation_set(found, 5).unwrap();
    assert_eq!(set.placement_seed, 5);
    assert_eq!(set.posts.len(), 1);
  }

  #[test]
  fn nothing_renders_without_slots() {
    let owner = Owner::new();
    owner.set();
    assert!(render(None, LayoutMode::Desktop).is_none());
    assert!(render(None, LayoutMode::Mobile).is_none());

    let data = RwSignal::new(recommendation_set(GetRecommendedPostsResponse { post: None }, 1));
    let slots = use_slots(data.into(), Signal::from(true));
    assert!(render(slots.get_untracked(), LayoutMode::Desktop).is_none());
  }

  #[test]
  fn desktop_grid_links_cards_and_pulls_up_ads() {
    let owner = Owner::new();
    owner.set();
    let html = render(Some(slots_with_ads_at((2, 4))), LayoutMode::Desktop).unwrap();

    assert!(html.contains("Posts you might be interested in"));
    for n in [0, 1, 3, 5] {
      assert!(html.contains(&format!(r#"href="/@writer{n}/post-{n}""#)), "card {n} missing in {html}");
    }
    assert!(!html.contains("/@writer2/post-2"));
    assert!(!html.contains("/@writer4/post-4"));
    assert_eq!(html.matches(r#"class="adsbygoogle""#).count(), 2);
    assert_eq!(html.matches("margin-bottom: -3.375rem").count(), 2);
    assert!(html.contains(r#"src="https://images.velog.io/post-0.png?w=640""#));
  }

  #[test]
  fn mobile_stack_uses_rows_and_fluid_ads() {
    let owner = Owner::new();
    owner.set();
    let html = render(Some(slots_with_ads_at((0, 5))), LayoutMode::Mobile).unwrap();

    assert_eq!(html.matches(r#"data-ad-format="fluid""#).count(), 2);
    assert!(!html.contains("margin-bottom: -3.375rem"));
    for n in 1..5 {
      assert!(html.contains(&format!("Description {n}")), "row {n} missing in {html}");
    }
    assert!(!html.contains("Description 0"));
  }
}
