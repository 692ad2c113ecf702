pub mod forbidden;
pub mod home;
