pub const GRAPHQL_HOST: &str = "localhost:5003";
pub const GRAPHQL_HTTPS: bool = false;
pub const SHOW_ADS: bool = true;

/// Hosts whose images accept a `w` query parameter for server-side resizing.
pub const IMAGE_CDN_HOSTS: &[&str] = &["images.velog.io", "velog.velcdn.com"];

pub const AD_CLIENT: &str = "ca-pub-0000000000000000";
pub const AD_SLOT: &str = "0000000000";

pub const DEFAULT_USER_THUMBNAIL: &str = "/images/user-thumbnail.svg";

pub const MOBILE_BREAKPOINT: f64 = 519.0;
pub const THUMBNAIL_WIDTH: u32 = 640;
pub const EXCERPT_LIMIT: usize = 150;

pub const RECOMMEND_CLICK_EVENT: &str = "recommend_guest_click";
