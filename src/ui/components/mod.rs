pub mod home;
pub mod post;
pub mod related;
