use crate::config::DEFAULT_USER_THUMBNAIL;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
  #[serde(default)]
  pub display_name: Option<String>,
  #[serde(default)]
  pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostUser {
  pub id: String,
  pub username: String,
  #[serde(default)]
  pub profile: UserProfile,
}

/// The subset of a post the related panel needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPost {
  pub id: String,
  pub title: String,
  pub url_slug: String,
  #[serde(default)]
  pub thumbnail: Option<String>,
  #[serde(default)]
  pub short_description: String,
  pub user: PostUser,
}

impl PartialPost {
  pub fn has_thumbnail(&self) -> bool {
    non_empty(self.thumbnail.as_deref()).is_some()
  }

  /// Post thumbnail, then the author's avatar, then the bundled default.
  pub fn thumbnail_source(&self) -> &str {
    non_empty(self.thumbnail.as_deref())
      .or_else(|| non_empty(self.user.profile.thumbnail.as_deref()))
      .unwrap_or(DEFAULT_USER_THUMBNAIL)
  }

  pub fn href(&self) -> String {
    format!("/@{}/{}", self.user.username, self.url_slug)
  }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
  s.filter(|s| !s.is_empty())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendedPostsView {
  pub id: String,
  #[serde(default)]
  pub recommended_posts: Vec<PartialPost>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetRecommendedPostsResponse {
  pub post: Option<RecommendedPostsView>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PostView {
  pub id: String,
  pub title: String,
  pub url_slug: String,
  #[serde(default)]
  pub short_description: String,
  #[serde(default)]
  pub thumbnail: Option<String>,
  pub user: PostUser,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadPostResponse {
  pub post: Option<PostView>,
}

/// A post page as resolved by whoever runs the fetch. On SSR that is the
/// server, and the page travels to the hydrating client with the ads flag
/// already decided.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
  pub post: PostView,
  pub show_ads: bool,
}

/// Recommendations for one source post, together with the seed used to place
/// ads among them. The seed is drawn once per fetch so the server render and
/// the hydrated client agree on the placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
  pub posts: Vec<PartialPost>,
  pub placement_seed: u64,
}

#[cfg(test)]
pub(crate) fn sample_post(n: usize, thumbnail: bool) -> PartialPost {
  PartialPost {
    id: format!("post-{n}"),
    title: format!("Post {n}"),
    url_slug: format!("post-{n}"),
    thumbnail: thumbnail.then(|| format!("https://images.velog.io/post-{n}.png")),
    short_description: format!("Description {n}"),
    user: PostUser {
      id: format!("user-{n}"),
      username: format!("writer{n}"),
      profile: UserProfile::default(),
    },
  }
}
