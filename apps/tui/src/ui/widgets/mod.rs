pub mod details;
pub mod popup;
pub mod radar;
