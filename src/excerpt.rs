use crate::config::EXCERPT_LIMIT;

/// Short descriptions arrive with `:` escaped and are cut off server-side at
/// [`EXCERPT_LIMIT`] characters; a description of that length gets an ellipsis.
pub fn format_excerpt(short_description: &str) -> String {
  let truncated = short_description.chars().count() >= EXCERPT_LIMIT;
  let mut text: String = short_description.chars().take(EXCERPT_LIMIT).collect();
  text = text.replace("&#x3A;", ":");
  if truncated {
    text.push_str("...");
  }
  text
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unescapes_colons() {
    assert_eq!(format_excerpt("Note&#x3A; read this&#x3A;"), "Note: read this:");
  }

  #[test]
  fn short_text_has_no_ellipsis() {
    assert_eq!(format_excerpt("hello"), "hello");
    assert_eq!(format_excerpt(""), "");
  }

  #[test]
  fn text_at_limit_gets_ellipsis() {
    let full = "가".repeat(EXCERPT_LIMIT);
    let out = format_excerpt(&full);
    assert!(out.ends_with("..."));
    assert_eq!(out.chars().count(), EXCERPT_LIMIT + 3);
  }

  #[test]
  fn longer_text_is_cut_to_limit() {
    let long = "a".repeat(EXCERPT_LIMIT + 20);
    assert_eq!(format_excerpt(&long), format!("{}...", "a".repeat(EXCERPT_LIMIT)));
  }
}
