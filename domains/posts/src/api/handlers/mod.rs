pub mod feed;
pub mod posts;
