pub mod post_activity;
