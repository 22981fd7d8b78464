use crate::config::{GRAPHQL_HOST, GRAPHQL_HTTPS, SHOW_ADS};

#[cfg(feature = "ssr")]
pub fn get_ssr_host() -> String {
  std::env::var("RELATED_GRAPHQL_HOST").unwrap_or_else(|_| GRAPHQL_HOST.into())
}

#[cfg(not(feature = "ssr"))]
pub fn get_csr_host() -> String {
  if let Some(s) = option_env!("RELATED_GRAPHQL_HOST") {
    s.into()
  } else {
    GRAPHQL_HOST.into()
  }
}

pub fn get_host() -> String {
  #[cfg(feature = "ssr")]
  {
    get_ssr_host()
  }

  #[cfg(not(feature = "ssr"))]
  {
    get_csr_host()
  }
}

pub fn get_https() -> bool {
  #[cfg(feature = "ssr")]
  let value = std::env::var("RELATED_GRAPHQL_HTTPS").ok();

  #[cfg(not(feature = "ssr"))]
  let value = option_env!("RELATED_GRAPHQL_HTTPS").map(String::from);

  parse_flag(value.as_deref()).unwrap_or(GRAPHQL_HTTPS)
}

pub fn show_ads() -> bool {
  #[cfg(feature = "ssr")]
  let value = std::env::var("RELATED_SHOW_ADS").ok();

  #[cfg(not(feature = "ssr"))]
  let value = option_env!("RELATED_SHOW_ADS").map(String::from);

  parse_flag(value.as_deref()).unwrap_or(SHOW_ADS)
}

pub fn graphql_endpoint() -> String {
  endpoint_for(&get_host(), get_https())
}

fn endpoint_for(host: &str, https: bool) -> String {
  format!("{}://{}/graphql", if https { "https" } else { "http" }, host)
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
  match value?.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" | "on" => Some(true),
    "0" | "false" | "no" | "off" => Some(false),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn endpoint_scheme_follows_https_flag() {
    assert_eq!(endpoint_for("example.com", true), "https://example.com/graphql");
    assert_eq!(endpoint_for("localhost:5003", false), "http://localhost:5003/graphql");
  }

  #[test]
  fn flags_accept_common_spellings() {
    assert_eq!(parse_flag(Some("TRUE")), Some(true));
    assert_eq!(parse_flag(Some(" off ")), Some(false));
    assert_eq!(parse_flag(Some("maybe")), None);
    assert_eq!(parse_flag(None), None);
  }
}
