pub mod home_activity;
