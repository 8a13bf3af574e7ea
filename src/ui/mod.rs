pub mod editor;
pub mod home;
pub mod style;
