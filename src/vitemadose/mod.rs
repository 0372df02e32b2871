pub mod constants;
pub mod feed;
