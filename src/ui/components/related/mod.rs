pub mod related_post_ad;
pub mod related_post_card;
pub mod related_post_row;
pub mod related_posts_for_guest;
