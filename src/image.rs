use crate::config::IMAGE_CDN_HOSTS;
use url::Url;

/// Asks the image CDN for a resized copy. Anything the CDN can't resize is
/// returned unchanged.
pub fn optimize_image(source: &str, width: u32) -> String {
  let Ok(mut url) = Url::parse(source) else {
    return source.to_string();
  };

  let resizable = url.host_str().is_some_and(|h| IMAGE_CDN_HOSTS.contains(&h));
  let path = url.path().to_ascii_lowercase();
  if !resizable || path.ends_with(".svg") || path.ends_with(".gif") {
    return source.to_string();
  }

  let kept: Vec<(String, String)> = url.query_pairs().filter(|(k, _)| k != "w").map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
  url.query_pairs_mut().clear().extend_pairs(kept).append_pair("w", &width.to_string());
  url.to_string()
}
